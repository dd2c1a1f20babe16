use std::collections::HashSet;
use std::io::Cursor;
use std::sync::Arc;
use wordle_botlab::*;

fn to_str_vec(words: &[Arc<str>]) -> Vec<&str> {
    words.iter().map(|word| word.as_ref()).collect()
}

#[test]
fn word_bank_from_reader_skips_blank_lines() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from("crane\n\nslate\ntrace\n"));

    let bank = WordBank::from_reader(cursor)?;

    assert_eq!(to_str_vec(&bank), vec!["crane", "slate", "trace"]);
    assert_eq!(bank.len(), 3);
    assert_eq!(bank.word_length(), 5);
    Ok(())
}

#[test]
fn word_bank_from_reader_lower_cases() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from("CRANE\nSlate"));

    let bank = WordBank::from_reader(cursor)?;

    assert_eq!(to_str_vec(&bank), vec!["crane", "slate"]);
    Ok(())
}

#[test]
fn get_candidate_words_empty_history_keeps_everything() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec!["crane", "slate", "trace", "plate"])?;

    let candidates = get_candidate_words(&[], &bank);

    assert_eq!(to_str_vec(&candidates), to_str_vec(&bank));
    Ok(())
}

// The worked scenario: guessing "crane" against the secret "trace" yields
// C present, R correct, A correct, N absent, E correct. Only "trace" itself
// would have produced that exact feedback.
#[test]
fn get_candidate_words_crane_against_trace() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec!["crane", "slate", "trace", "plate"])?;
    let round = get_result_for_guess("trace", "crane")?;
    assert_eq!(
        round.results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::Correct,
        ]
    );

    let candidates = get_candidate_words(&[round], &bank);

    assert_eq!(to_str_vec(&candidates), vec!["trace"]);
    Ok(())
}

#[test]
fn get_candidate_words_is_sound() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec![
        "crane", "slate", "trace", "plate", "grace", "brace", "place", "space",
    ])?;
    let history = vec![
        get_result_for_guess("grace", "slate")?,
        get_result_for_guess("grace", "brace")?,
    ];

    let candidates = get_candidate_words(&history, &bank);

    for word in &candidates {
        for round in &history {
            let replayed = get_result_for_guess(word, &round.guess)?;
            assert_eq!(replayed.results, round.results);
        }
    }
    Ok(())
}

#[test]
fn get_candidate_words_retains_the_secret_and_shrinks_monotonically() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec![
        "crane", "slate", "trace", "plate", "grace", "brace", "place", "space",
    ])?;
    let secret = "grace";

    let mut history: Vec<GuessResult> = Vec::new();
    let mut previous: Vec<Arc<str>> = bank.to_vec();
    for guess in ["slate", "place", "trace"] {
        history.push(get_result_for_guess(secret, guess)?);
        let candidates = get_candidate_words(&history, &bank);

        let previous_set: HashSet<&str> = to_str_vec(&previous).into_iter().collect();
        assert!(candidates.len() <= previous.len());
        assert!(candidates
            .iter()
            .all(|word| previous_set.contains(word.as_ref())));
        assert!(candidates.iter().any(|word| word.as_ref() == secret));
        previous = candidates;
    }
    Ok(())
}

#[test]
fn get_candidate_words_is_idempotent() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec![
        "crane", "slate", "trace", "plate", "grace", "brace", "place", "space",
    ])?;
    let history = vec![get_result_for_guess("grace", "slate")?];

    let candidates = get_candidate_words(&history, &bank);
    let refiltered = get_candidate_words(&history, &candidates);

    assert_eq!(to_str_vec(&refiltered), to_str_vec(&candidates));
    Ok(())
}

#[test]
fn word_counter_num_words_with_letter() {
    let counter = WordCounter::new(&["hello", "hallo", "worda"]);

    assert_eq!(counter.num_words(), 3);
    assert_eq!(counter.num_words_with_letter('h'), 2);
    assert_eq!(counter.num_words_with_letter('e'), 1);
    // 'l' repeats within words but each word counts once.
    assert_eq!(counter.num_words_with_letter('l'), 2);
    assert_eq!(counter.num_words_with_letter('o'), 3);
    assert_eq!(counter.num_words_with_letter('a'), 2);
    assert_eq!(counter.num_words_with_letter('w'), 1);
    assert_eq!(counter.num_words_with_letter('z'), 0);
}

#[test]
fn word_counter_num_words_with_located_letter() {
    let counter = WordCounter::new(&["hello", "hallo", "worda"]);

    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('h', 0)),
        2
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('l', 2)),
        2
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('l', 3)),
        2
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('o', 4)),
        2
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('a', 1)),
        1
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('h', 1)),
        0
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('z', 0)),
        0
    );
}
