use crate::data::LocatedLetter;
use crate::data::WordCounter;
use std::sync::Arc;

/// Gives words a score, where the maximum score indicates the best guess.
///
/// Scorers are cheap to build, and are rebuilt from the current candidate set
/// each round rather than updated incrementally.
pub trait WordScorer {
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Arc<str>) -> i64;
}

/// Scores words by the number of candidate words that contain each of the
/// word's letters, summed across the word's unique letters.
///
/// Repeated letters only count once, so this prefers words that probe many
/// distinct common letters.
#[derive(Clone)]
pub struct LetterFrequencyScorer {
    counter: WordCounter,
}

impl LetterFrequencyScorer {
    /// Constructs a `LetterFrequencyScorer` from the current candidate words.
    pub fn new<S>(candidates: &[S]) -> LetterFrequencyScorer
    where
        S: AsRef<str>,
    {
        LetterFrequencyScorer {
            counter: WordCounter::new(candidates),
        }
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn score_word(&self, word: &Arc<str>) -> i64 {
        let mut sum = 0;
        for (index, letter) in word.char_indices() {
            if index > 0
                && word
                    .chars()
                    .take(index)
                    .any(|other_letter| other_letter == letter)
            {
                continue;
            }
            sum += self.counter.num_words_with_letter(letter) as i64;
        }
        sum
    }
}

/// Scores words by the number of candidate words that have each letter in the
/// same location, summed across every location.
///
/// Unlike [`LetterFrequencyScorer`], repeated letters contribute once per
/// location, since each location is scored independently.
#[derive(Clone)]
pub struct LocatedLetterFrequencyScorer {
    counter: WordCounter,
}

impl LocatedLetterFrequencyScorer {
    /// Constructs a `LocatedLetterFrequencyScorer` from the current candidate words.
    pub fn new<S>(candidates: &[S]) -> LocatedLetterFrequencyScorer
    where
        S: AsRef<str>,
    {
        LocatedLetterFrequencyScorer {
            counter: WordCounter::new(candidates),
        }
    }
}

impl WordScorer for LocatedLetterFrequencyScorer {
    fn score_word(&self, word: &Arc<str>) -> i64 {
        let mut sum = 0;
        for (index, letter) in word.char_indices() {
            sum += self
                .counter
                .num_words_with_located_letter(&LocatedLetter::new(letter, index as u8))
                as i64;
        }
        sum
    }
}
