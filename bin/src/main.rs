use clap::{ArgEnum, Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant;
use wordle_botlab::*;

/// Simple program to run Wordle games in reverse, where the computer guesses
/// the word, and to compare how well the different guessing strategies do.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Base seed for drawing secret words and for the random strategies.
    #[clap(long, default_value_t = 12)]
    seed: u64,

    /// Maximum number of guesses before a game counts as lost.
    #[clap(long, default_value_t = 6)]
    max_guesses: u32,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every strategy over the same sequence of secret words and compare
    /// win rates, average guesses, and guess-count histograms.
    Compare {
        /// Number of games to simulate per strategy.
        #[clap(long, default_value_t = 1000)]
        trials: usize,
    },
    /// Play a single game against the given word and print each round.
    Single {
        word: String,

        #[clap(arg_enum, long, default_value = "located-letter-frequency")]
        strategy: StrategyArg,
    },
}

#[derive(ArgEnum, Debug, Clone, Copy)]
enum StrategyArg {
    Random,
    FilteredRandom,
    LetterFrequency,
    LocatedLetterFrequency,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::FilteredRandom => Strategy::FilteredRandom,
            StrategyArg::LetterFrequency => Strategy::LetterFrequency,
            StrategyArg::LocatedLetterFrequency => Strategy::LocatedLetterFrequency,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let bank = WordBank::from_reader(words_reader)?;
    println!(
        "Loaded {} words of length {} from {}.",
        bank.len(),
        bank.word_length(),
        args.words_file
    );

    match args.command {
        Command::Compare { trials } => {
            run_comparison(&bank, trials, args.max_guesses, args.seed)?
        }
        Command::Single { word, strategy } => {
            play_single_game(&word, strategy.into(), &bank, args.max_guesses, args.seed)?
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_comparison(
    bank: &WordBank,
    trials: usize,
    max_guesses: u32,
    seed: u64,
) -> Result<(), WordleError> {
    let secrets = draw_secrets(bank, trials, seed);
    for strategy in Strategy::ALL {
        let summary = simulate_games(strategy, &secrets, max_guesses, bank, seed)?;
        println!("\n{} ({} games):", strategy, summary.num_games);
        println!("  Win rate: {:.1}%", summary.win_rate() * 100.0);
        if summary.num_won > 0 {
            println!(
                "  Average guesses to win: {:.2}",
                summary.average_guesses_to_win()
            );
        }

        println!("  |Num guesses|Num games|");
        println!("  |-----------|---------|");
        let mut num_rounds: Vec<u32> = summary.num_games_by_guesses.keys().copied().collect();
        num_rounds.sort_unstable();
        for num_round in num_rounds {
            let label = if num_round > max_guesses {
                format!("{} (loss)", num_round)
            } else {
                num_round.to_string()
            };
            println!(
                "  |{}|{}|",
                label, summary.num_games_by_guesses[&num_round]
            );
        }
    }
    Ok(())
}

fn play_single_game(
    word: &str,
    strategy: Strategy,
    bank: &WordBank,
    max_guesses: u32,
    seed: u64,
) -> Result<(), WordleError> {
    let objective = word.to_ascii_lowercase();
    println!("Guessing {:?} with the {} strategy:", objective, strategy);

    let mut guesser = strategy.build_guesser(seed);
    let mut history: Vec<GuessResult> = Vec::new();
    for round in 1..=max_guesses {
        let guess = guesser.select_guess(bank, &history)?;
        let result = get_result_for_guess(&objective, &guess)?;
        println!("  {}  {}", guess, format_results(&result));
        if result.is_win() {
            println!("Solved it! It took me {} guesses.", round);
            return Ok(());
        }
        history.push(result);
    }

    println!("I couldn't solve it within {} guesses :(", max_guesses);
    Ok(())
}

/// One character per letter: 'g' correct, 'y' present elsewhere, '.' absent.
fn format_results(result: &GuessResult) -> String {
    result
        .results
        .iter()
        .map(|letter_result| match letter_result {
            LetterResult::Correct => 'g',
            LetterResult::PresentNotHere => 'y',
            LetterResult::NotPresent => '.',
        })
        .collect()
}
