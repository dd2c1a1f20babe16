mod data;
mod engine;
mod results;
pub mod scorers;

pub use data::get_candidate_words;
pub use data::LocatedLetter;
pub use data::WordBank;
pub use data::WordCounter;
pub use engine::*;
pub use results::*;
