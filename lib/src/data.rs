use crate::results::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// A letter along with its location in the word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Contains all the possible words for this Wordle game.
///
/// Words are ordered, deduplicated, lower-cased, and all of the same length.
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Blank lines are skipped,
    /// and each word is converted to lower case.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut words: Vec<String> = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            if line.trim().is_empty() {
                continue;
            }
            words.push(line);
        }
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` struct using the given words.
    ///
    /// Each word is converted to lower case. Duplicates are dropped, keeping
    /// the first occurrence, so the bank's order is the input order.
    pub fn from_iterator<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut word_length: Option<usize> = None;
        for raw_word in words {
            let word = normalize_word(raw_word.as_ref(), word_length)?;
            word_length = Some(word.len());
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        match word_length {
            Some(word_length) => Ok(WordBank {
                all_words,
                word_length,
            }),
            None => Err(WordleError::EmptyWordBank),
        }
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.all_words
    }
}

/// Validates a single word: letters only, and the same length as the rest of
/// the bank.
fn normalize_word(raw_word: &str, expected_length: Option<usize>) -> Result<Arc<str>, WordleError> {
    let word = raw_word.trim();
    if word.is_empty() || !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
        return Err(WordleError::InvalidWord(raw_word.to_string()));
    }
    if let Some(expected_length) = expected_length {
        if word.len() != expected_length {
            return Err(WordleError::InvalidWord(raw_word.to_string()));
        }
    }
    Ok(Arc::from(word.to_ascii_lowercase().as_str()))
}

/// Gets the list of words that are consistent with every round in the given
/// history, i.e. the words that would have produced exactly the recorded
/// feedback for each past guess.
///
/// This returns a new list and never mutates the input. With an empty history
/// every word is still a candidate.
pub fn get_candidate_words(history: &[GuessResult], words: &[Arc<str>]) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| {
            history.iter().all(|round| {
                match get_result_for_guess(word, &round.guess) {
                    Ok(result) => result.results == round.results,
                    // Length or character mismatch: not a candidate.
                    Err(_) => false,
                }
            })
        })
        .map(Arc::clone)
        .collect()
}

/// Counts the number of words that contain each letter, both anywhere in the
/// word and at specific locations.
///
/// The per-letter count is unique per word: a word with a repeated letter
/// counts once for that letter. The per-location count is not deduplicated,
/// since a location holds exactly one letter.
#[derive(Clone)]
pub struct WordCounter {
    num_words: usize,
    num_words_by_ll: HashMap<LocatedLetter, u32>,
    num_words_by_letter: HashMap<char, u32>,
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new<S>(words: &[S]) -> WordCounter
    where
        S: AsRef<str>,
    {
        let mut num_words_by_ll: HashMap<LocatedLetter, u32> = HashMap::new();
        let mut num_words_by_letter: HashMap<char, u32> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            for (index, letter) in word.char_indices() {
                *num_words_by_ll
                    .entry(LocatedLetter::new(letter, index as u8))
                    .or_insert(0) += 1;
                if index == 0
                    || word
                        .chars()
                        .take(index)
                        .all(|other_letter| other_letter != letter)
                {
                    *num_words_by_letter.entry(letter).or_insert(0) += 1;
                }
            }
        }
        WordCounter {
            num_words: words.len(),
            num_words_by_ll,
            num_words_by_letter,
        }
    }

    /// Returns the number of words this counter was built from.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Retrieves the count of words with the given letter at the given location.
    pub fn num_words_with_located_letter(&self, ll: &LocatedLetter) -> u32 {
        *self.num_words_by_ll.get(ll).unwrap_or(&0)
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        *self.num_words_by_letter.get(&letter).unwrap_or(&0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn word_bank_keeps_input_order_and_dedupes() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(vec!["crane", "SLATE", "crane", "trace"])?;

        let words: Vec<&str> = bank.iter().map(|word| word.as_ref()).collect();
        assert_eq!(words, vec!["crane", "slate", "trace"]);
        assert_eq!(bank.word_length(), 5);
        Ok(())
    }

    #[test]
    fn word_bank_rejects_mixed_lengths() {
        let result = WordBank::from_iterator(vec!["crane", "slates"]);

        assert!(matches!(result, Err(WordleError::InvalidWord(word)) if word == "slates"));
    }

    #[test]
    fn word_bank_rejects_non_letters() {
        let result = WordBank::from_iterator(vec!["cr4ne"]);

        assert!(matches!(result, Err(WordleError::InvalidWord(_))));
    }

    #[test]
    fn word_bank_rejects_empty_input() {
        let result = WordBank::from_iterator(Vec::<&str>::new());

        assert!(matches!(result, Err(WordleError::EmptyWordBank)));
    }
}
