use crate::data::*;
use crate::results::*;
use crate::scorers::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Picks the next guess, given the word bank and the feedback received so far.
///
/// Implementations recompute everything from `(bank, history)` on each call,
/// so a guesser carries no game state between rounds apart from its own
/// random source. The same guesser can therefore be reused across rounds of
/// one game, but a fresh one should be built per game so seeded runs stay
/// reproducible.
pub trait Guesser {
    fn select_guess(
        &mut self,
        bank: &WordBank,
        history: &[GuessResult],
    ) -> Result<Arc<str>, WordleError>;
}

/// Guesses uniformly at random from the whole word bank, ignoring all
/// feedback. This is the baseline the other strategies are measured against.
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    pub fn new(seed: u64) -> RandomGuesser {
        RandomGuesser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn select_guess(
        &mut self,
        bank: &WordBank,
        _history: &[GuessResult],
    ) -> Result<Arc<str>, WordleError> {
        bank.choose(&mut self.rng)
            .map(Arc::clone)
            .ok_or(WordleError::EmptyWordBank)
    }
}

/// Filters the bank down to the words consistent with every past round, then
/// guesses uniformly at random among them.
pub struct FilteredRandomGuesser {
    rng: StdRng,
}

impl FilteredRandomGuesser {
    pub fn new(seed: u64) -> FilteredRandomGuesser {
        FilteredRandomGuesser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for FilteredRandomGuesser {
    fn select_guess(
        &mut self,
        bank: &WordBank,
        history: &[GuessResult],
    ) -> Result<Arc<str>, WordleError> {
        let candidates = get_candidate_words(history, bank);
        candidates
            .choose(&mut self.rng)
            .map(Arc::clone)
            .ok_or(WordleError::InconsistentHistory)
    }
}

/// Filters the bank down to the remaining candidates and guesses the one with
/// the most frequent letters, counting each distinct letter once
/// ([`LetterFrequencyScorer`]).
pub struct LetterFrequencyGuesser;

impl LetterFrequencyGuesser {
    pub fn new() -> LetterFrequencyGuesser {
        LetterFrequencyGuesser
    }
}

impl Default for LetterFrequencyGuesser {
    fn default() -> Self {
        LetterFrequencyGuesser::new()
    }
}

impl Guesser for LetterFrequencyGuesser {
    fn select_guess(
        &mut self,
        bank: &WordBank,
        history: &[GuessResult],
    ) -> Result<Arc<str>, WordleError> {
        let candidates = get_candidate_words(history, bank);
        let scorer = LetterFrequencyScorer::new(&candidates);
        select_max_score(&candidates, &scorer).ok_or(WordleError::InconsistentHistory)
    }
}

/// Like [`LetterFrequencyGuesser`], but scores each letter by how often it
/// appears at that exact location among the candidates
/// ([`LocatedLetterFrequencyScorer`]).
pub struct LocatedLetterFrequencyGuesser;

impl LocatedLetterFrequencyGuesser {
    pub fn new() -> LocatedLetterFrequencyGuesser {
        LocatedLetterFrequencyGuesser
    }
}

impl Default for LocatedLetterFrequencyGuesser {
    fn default() -> Self {
        LocatedLetterFrequencyGuesser::new()
    }
}

impl Guesser for LocatedLetterFrequencyGuesser {
    fn select_guess(
        &mut self,
        bank: &WordBank,
        history: &[GuessResult],
    ) -> Result<Arc<str>, WordleError> {
        let candidates = get_candidate_words(history, bank);
        let scorer = LocatedLetterFrequencyScorer::new(&candidates);
        select_max_score(&candidates, &scorer).ok_or(WordleError::InconsistentHistory)
    }
}

/// Returns the highest-scoring word. Ties keep the earliest word in bank
/// order, so selection is reproducible regardless of how the scores collide.
fn select_max_score<S: WordScorer>(candidates: &[Arc<str>], scorer: &S) -> Option<Arc<str>> {
    let mut best: Option<(&Arc<str>, i64)> = None;
    for word in candidates {
        let score = scorer.score_word(word);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((word, score)),
        }
    }
    best.map(|(word, _)| Arc::clone(word))
}

/// The four guessing strategies, in increasing order of sophistication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    FilteredRandom,
    LetterFrequency,
    LocatedLetterFrequency,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::FilteredRandom,
        Strategy::LetterFrequency,
        Strategy::LocatedLetterFrequency,
    ];

    /// Builds a fresh guesser for one game. The seed only matters for the
    /// random strategies; the frequency strategies are fully deterministic.
    pub fn build_guesser(&self, seed: u64) -> Box<dyn Guesser> {
        match self {
            Strategy::Random => Box::new(RandomGuesser::new(seed)),
            Strategy::FilteredRandom => Box::new(FilteredRandomGuesser::new(seed)),
            Strategy::LetterFrequency => Box::new(LetterFrequencyGuesser::new()),
            Strategy::LocatedLetterFrequency => Box::new(LocatedLetterFrequencyGuesser::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::FilteredRandom => "filtered-random",
            Strategy::LetterFrequency => "letter-frequency",
            Strategy::LocatedLetterFrequency => "located-letter-frequency",
        };
        f.write_str(name)
    }
}

/// Attempts to guess the given word within the maximum number of guesses,
/// using words from the word bank.
///
/// The history lives only for the duration of this call; the guesser is
/// invoked once per round with the strictly growing history.
pub fn play_game(
    objective: &str,
    max_num_guesses: u32,
    bank: &WordBank,
    guesser: &mut dyn Guesser,
) -> Result<GameResult, WordleError> {
    let mut history: Vec<GuessResult> = Vec::new();
    let mut guesses: Vec<Arc<str>> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = guesser.select_guess(bank, &history)?;
        let result = get_result_for_guess(objective, &guess)?;
        guesses.push(guess);
        if result.is_win() {
            return Ok(GameResult::Success(guesses));
        }
        history.push(result);
    }
    Ok(GameResult::Failure(guesses))
}

/// Aggregate outcome of many simulated games with one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub max_num_guesses: u32,
    pub num_games: usize,
    pub num_won: usize,
    /// Number of games keyed by how many guesses they took. Lost games are
    /// recorded under `max_num_guesses + 1`.
    pub num_games_by_guesses: HashMap<u32, usize>,
}

impl SimulationSummary {
    pub fn win_rate(&self) -> f64 {
        self.num_won as f64 / self.num_games as f64
    }

    /// The average number of guesses across won games only. `NaN` if no game
    /// was won.
    pub fn average_guesses_to_win(&self) -> f64 {
        let total_won_guesses: usize = self
            .num_games_by_guesses
            .iter()
            .filter(|(num_guesses, _)| **num_guesses <= self.max_num_guesses)
            .map(|(num_guesses, num_games)| *num_guesses as usize * num_games)
            .sum();
        total_won_guesses as f64 / self.num_won as f64
    }
}

/// Plays one independent game per secret and aggregates the outcomes.
///
/// Games run in parallel since nothing is shared beyond the read-only bank.
/// Game `i` builds a fresh guesser seeded with `seed + i`, so a simulation is
/// fully reproducible for a given seed.
pub fn simulate_games(
    strategy: Strategy,
    secrets: &[Arc<str>],
    max_num_guesses: u32,
    bank: &WordBank,
    seed: u64,
) -> Result<SimulationSummary, WordleError> {
    let results = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let mut guesser = strategy.build_guesser(seed.wrapping_add(index as u64));
            play_game(secret, max_num_guesses, bank, guesser.as_mut())
        })
        .collect::<Result<Vec<GameResult>, WordleError>>()?;

    let mut summary = SimulationSummary {
        max_num_guesses,
        num_games: results.len(),
        num_won: 0,
        num_games_by_guesses: HashMap::new(),
    };
    for result in &results {
        let num_guesses = match result {
            GameResult::Success(guesses) => {
                summary.num_won += 1;
                guesses.len() as u32
            }
            GameResult::Failure(_) => max_num_guesses + 1,
        };
        *summary.num_games_by_guesses.entry(num_guesses).or_insert(0) += 1;
    }
    Ok(summary)
}

/// Draws `count` secret words from the bank, with replacement, using a seeded
/// random source.
pub fn draw_secrets(bank: &WordBank, count: usize, seed: u64) -> Vec<Arc<str>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| bank.choose(&mut rng).map(Arc::clone))
        .collect()
}
