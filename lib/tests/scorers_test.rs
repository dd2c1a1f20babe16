use std::sync::Arc;
use wordle_botlab::scorers::*;
use wordle_botlab::*;

fn test_bank() -> Result<WordBank, WordleError> {
    WordBank::from_iterator(vec!["alpha", "allot", "begot", "below", "endow", "ingot"])
}

#[test]
fn letter_frequency_scorer_counts_distinct_letters_once() -> Result<(), WordleError> {
    let bank = test_bank()?;
    let scorer = LetterFrequencyScorer::new(&bank);

    // Letter counts over the bank: a=2, l=3, p=1, h=1, o=5, t=3, b=2, e=3,
    // g=2, w=2, n=2, d=1, i=1. Repeated letters in a word score zero.
    assert_eq!(scorer.score_word(&Arc::from("alpha")), 2 + 3 + 1 + 1);
    assert_eq!(scorer.score_word(&Arc::from("allot")), 2 + 3 + 5 + 3);
    assert_eq!(scorer.score_word(&Arc::from("begot")), 2 + 3 + 2 + 5 + 3);
    assert_eq!(scorer.score_word(&Arc::from("below")), 2 + 3 + 3 + 5 + 2);
    assert_eq!(scorer.score_word(&Arc::from("endow")), 3 + 2 + 1 + 5 + 2);
    assert_eq!(scorer.score_word(&Arc::from("ingot")), 1 + 2 + 2 + 5 + 3);
    Ok(())
}

#[test]
fn located_letter_frequency_scorer_counts_every_location() -> Result<(), WordleError> {
    let bank = test_bank()?;
    let scorer = LocatedLetterFrequencyScorer::new(&bank);

    assert_eq!(scorer.score_word(&Arc::from("alpha")), 2 + 2 + 1 + 1 + 1);
    assert_eq!(scorer.score_word(&Arc::from("allot")), 2 + 2 + 2 + 5 + 3);
    assert_eq!(scorer.score_word(&Arc::from("begot")), 2 + 2 + 2 + 5 + 3);
    assert_eq!(scorer.score_word(&Arc::from("below")), 2 + 2 + 2 + 5 + 2);
    assert_eq!(scorer.score_word(&Arc::from("endow")), 1 + 2 + 1 + 5 + 2);
    assert_eq!(scorer.score_word(&Arc::from("ingot")), 1 + 2 + 2 + 5 + 3);
    Ok(())
}

#[test]
fn scorers_follow_the_candidate_set() -> Result<(), WordleError> {
    let bank = test_bank()?;
    let history = vec![get_result_for_guess("endow", "begot")?];
    let candidates = get_candidate_words(&history, &bank);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].as_ref(), "endow");

    let scorer = LetterFrequencyScorer::new(&candidates);

    // Only "endow" remains, so each of its distinct letters counts once.
    assert_eq!(scorer.score_word(&Arc::from("endow")), 5);
    assert_eq!(scorer.score_word(&Arc::from("alpha")), 0);
    Ok(())
}
