use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// Indicates that an error occurred while guessing the objective word.
#[derive(Debug)]
pub enum WordleError {
    /// An I/O problem while reading a word list.
    Io(io::Error),
    /// A word with the wrong length or a non-letter character.
    InvalidWord(String),
    /// A filtering strategy ran out of candidate words. Either the recorded
    /// feedback is corrupted or the objective word is not in the word bank.
    InconsistentHistory,
    /// The word bank was constructed with no words.
    EmptyWordBank,
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::Io(error) => write!(f, "I/O error: {}", error),
            WordleError::InvalidWord(word) => write!(f, "invalid word: {:?}", word),
            WordleError::InconsistentHistory => {
                write!(f, "no word is consistent with the guess history")
            }
            WordleError::EmptyWordBank => write!(f, "the word bank contains no words"),
        }
    }
}

impl Error for WordleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WordleError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> Self {
        WordleError::Io(error)
    }
}

/// The result of a single word guess: one completed round of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Arc<str>,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl GuessResult {
    /// Returns `true` iff every letter was guessed in the correct location.
    pub fn is_win(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

/// Whether the game was won or lost by the guesser, along with the guesses
/// that were played. Running out of guesses is a normal `Failure`, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Success(Vec<Arc<str>>),
    Failure(Vec<Arc<str>>),
}

impl GameResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GameResult::Success(_))
    }

    /// The guesses that were played, in order.
    pub fn guesses(&self) -> &[Arc<str>] {
        match self {
            GameResult::Success(guesses) => guesses,
            GameResult::Failure(guesses) => guesses,
        }
    }
}

/// Determines the result of the given `guess` when applied to the given
/// `objective`.
///
/// This uses exact Wordle semantics for repeated letters: a letter is marked
/// `Correct` where it matches the objective, and the remaining instances are
/// marked `PresentNotHere` left to right, at most as many times as the letter
/// occurs in the objective. So guessing "bobby" against "abbey" marks 'b' as
/// present once and correct once, leaving the third 'b' `NotPresent`.
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, WordleError> {
    if objective.len() != guess.len() {
        return Err(WordleError::InvalidWord(guess.to_string()));
    }
    let mut results = vec![LetterResult::NotPresent; guess.len()];
    // Count of objective letters not consumed by a correct guess.
    let mut remaining = [0u8; 26];
    for (index, (guess_letter, objective_letter)) in
        guess.bytes().zip(objective.bytes()).enumerate()
    {
        if !guess_letter.is_ascii_lowercase() {
            return Err(WordleError::InvalidWord(guess.to_string()));
        }
        if !objective_letter.is_ascii_lowercase() {
            return Err(WordleError::InvalidWord(objective.to_string()));
        }
        if guess_letter == objective_letter {
            results[index] = LetterResult::Correct;
        } else {
            remaining[(objective_letter - b'a') as usize] += 1;
        }
    }
    for (index, guess_letter) in guess.bytes().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        let count = &mut remaining[(guess_letter - b'a') as usize];
        if *count > 0 {
            results[index] = LetterResult::PresentNotHere;
            *count -= 1;
        }
    }
    Ok(GuessResult {
        guess: Arc::from(guess),
        results,
    })
}
