use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgGroup, Parser};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use boggler::board::{self, Board, DEFAULT_SIZE};
use boggler::dictionary::{self, Dictionary};
use boggler::errors::{CellError, ConstructionError, DictionaryError};
use boggler::results::{self, SortedWords};
use boggler::search::{Pruning, SearchEngine, SearchOptions, SearchStatus};
use boggler::tiles;

/// Boggle solver: find every word on a board, or check a single word
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None,
    group(ArgGroup::new("board_source").args(["list", "board", "random"]))
)]
struct Cli {
    /// Symbols (separated by spaces) to populate the grid, row by row
    #[arg(short = 'l', long = "list", num_args = 1.., value_name = "SYMBOL")]
    list: Option<Vec<String>>,

    /// Compact board entry, e.g. "actd quie spnr ovel" (q is read as qu)
    #[arg(short = 'b', long = "board", value_name = "LETTERS")]
    board: Option<String>,

    /// Solve a randomly generated board
    #[arg(short = 'r', long = "random")]
    random: bool,

    /// Seed for --random, for a reproducible board
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// The board is SIZE x SIZE
    #[arg(short = 's', long, default_value_t = DEFAULT_SIZE, value_parser = board::parse_size)]
    size: usize,

    /// A word to validate against the dictionary
    #[arg(short = 'v', long = "val", value_name = "WORD")]
    val: Option<String>,

    /// Path to the dictionary file (one word per line). The bundled default is a small
    /// sample of about a thousand common words; pass a full word list for real games
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    dictionary: String,

    /// Also print how many found words pass through each cell
    #[arg(long)]
    usage: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Prune any path whose letters start no word (same results, less work)
    #[arg(long)]
    every_prefix: bool,

    /// Give up after this many seconds
    #[arg(short = 't', long, default_value_t = 30)]
    time_budget: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<&'a SortedWords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<Vec<Vec<u32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timed_out: Option<bool>,
}

/// Entry point of the boggler CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    boggler::log::init_logger(boggler::log::debug_requested());

    if let Err(e) = try_main() {
        eprintln!("Error: {}", detailed_message(e.as_ref()));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Use the coded, detailed format for the crate's own error types.
fn detailed_message(e: &(dyn Error + 'static)) -> String {
    if let Some(ce) = e.downcast_ref::<ConstructionError>() {
        ce.display_detailed()
    } else if let Some(de) = e.downcast_ref::<DictionaryError>() {
        de.display_detailed()
    } else if let Some(ce) = e.downcast_ref::<CellError>() {
        ce.display_detailed()
    } else {
        e.to_string()
    }
}

/// Core application logic for the boggler CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary from disk.
/// 3. Validate the `--val` word, if any.
/// 4. Build the board, if one was given, and find every word on it.
/// 5. Print results on stdout and timings on stderr.
fn try_main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let symbols = board_symbols(&cli);
    if cli.val.is_none() && symbols.is_none() {
        return Err("nothing to do: pass --list, --board or --random to solve, or --val to validate".into());
    }

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let valid = cli.val.as_deref().map(|word| dictionary::is_valid_word(&dictionary, word));
    if let Some(valid) = valid.filter(|_| !cli.json) {
        println!("{valid}");
    }

    let Some(symbols) = symbols else {
        if cli.json {
            let report = JsonReport { valid, board: None, words: None, usage: None, timed_out: None };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        return Ok(());
    };

    let mut board = Board::new(&symbols, cli.size)?;

    let options = SearchOptions {
        pruning: if cli.every_prefix { Pruning::EveryPrefix } else { Pruning::ThreeLetter },
        time_budget: Duration::from_secs(cli.time_budget),
    };
    let t_solve = Instant::now();
    let result = SearchEngine::new(options).find_words(&mut board, &dictionary);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    let timed_out = matches!(result.status, SearchStatus::TimedOut { .. });
    let frames = result.frames_expanded;
    let sorted = results::collect(result.findings);

    if cli.json {
        let report = JsonReport {
            valid,
            board: Some(board.symbols().collect()),
            words: Some(&sorted),
            usage: cli.usage.then(|| results::usage_grid(&board)),
            timed_out: Some(timed_out),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{board}");
        print!("{sorted}");
        if cli.usage {
            println!("USAGE:");
            for row in results::usage_grid(&board) {
                println!("{}", row.iter().map(|c| format!("{c:<5}")).collect::<String>().trim_end());
            }
        }
    }

    if let SearchStatus::TimedOut { elapsed } = result.status {
        eprintln!("⚠️  Timed out after {:.1}s; some words may be missing", elapsed.as_secs_f64());
    }
    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s ({} words, {} frames).",
        dictionary.len(),
        load_secs,
        solve_secs,
        sorted.total(),
        frames
    );

    Ok(())
}

/// The symbols of the requested board, if any.
fn board_symbols(cli: &Cli) -> Option<Vec<String>> {
    if let Some(list) = &cli.list {
        Some(list.clone())
    } else if let Some(entry) = &cli.board {
        Some(tiles::parse_board_string(entry, cli.size))
    } else if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Some(tiles::random_symbols(cli.size, &mut rng))
    } else {
        None
    }
}
