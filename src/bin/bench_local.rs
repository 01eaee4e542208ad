//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of boards on *your* machine.
//! - Loads the dictionary once, then solves each board several times and reports the median.
//! - Optionally shows a *static* time per board and the delta %.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few words per board:    `cargo run --bin bench_local --release -- -p 5`
//! - Compare pruning rules:          `cargo run --bin bench_local --release -- --every-prefix`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Boards + optional static times live in `get_cases()` below.
//! - Board construction and printing are kept outside the timed section.
//! - One warm-up run per board is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use boggler::board::Board;
use boggler::dictionary::Dictionary;
use boggler::results;
use boggler::search::{Pruning, SearchEngine, SearchOptions, SearchStatus};
use boggler::tiles;

/// Simple local benchmark runner: load the dictionary once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    dictionary: String,

    /// Number of repeats per board (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many words per board (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,

    /// Prune with every prefix instead of the three-letter rule
    #[arg(long)]
    every_prefix: bool,
}

/// A benchmark case: a compact board entry, its side length, and an optional static time (seconds).
#[derive(Clone)]
struct Case {
    entry: &'static str,
    size: usize,
    static_s: Option<f64>,
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { entry: "actd qiep snro vels", size: 4, static_s: None },
        Case { entry: "serstealtinrpeda", size: 4, static_s: None },
        Case { entry: "abcdefghijklmnop", size: 4, static_s: None },
        Case { entry: "sterl aines tirac pedso gnasu", size: 5, static_s: None },
        Case { entry: "eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee", size: 6, static_s: None },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_ENTRY_LEN: usize = 40;

fn main() -> std::io::Result<()> {
    /// One row in the benchmark summary: (board entry, median seconds,
    /// distinct words, optional static time, optional delta %).
    type SummaryRow = (String, f64, usize, Option<f64>, Option<f64>);

    let cli = Cli::parse();
    eprintln!("boggler {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH_FULL"));

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), load_secs);

    let engine = SearchEngine::new(SearchOptions {
        pruning: if cli.every_prefix { Pruning::EveryPrefix } else { Pruning::ThreeLetter },
        ..SearchOptions::default()
    });

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({}x{})", idx + 1, case.entry, case.size, case.size);

        let symbols = tiles::parse_board_string(case.entry, case.size);
        let mut board = match Board::new(&symbols, case.size) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("  ✗ Bad board: {}", e.display_detailed());
                continue;
            }
        };

        // warm-up, not timed
        let _warmup = engine.find_words(&mut board, &dictionary);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;

        for rep in 0..cli.num_repeats {
            results::reset(&mut board);

            let t_solve = Instant::now();
            let result = engine.find_words(black_box(&mut board), &dictionary);
            let solve_secs = t_solve.elapsed().as_secs_f64();

            let _keep = black_box(result.hits);
            times.push(solve_secs);

            if let SearchStatus::TimedOut { .. } = result.status {
                eprintln!("  ⚠️  run {}/{} timed out", rep + 1, cli.num_repeats);
            }
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} words, {} frames)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                result.findings.total(),
                result.frames_expanded
            );
            last = Some(result);
        }

        let med = median(times);
        let words = last.map(|r| results::collect(r.findings)).unwrap_or_default();

        if cli.print_limit > 0 {
            for word in words.words().take(cli.print_limit) {
                println!("{word}");
            }
        }

        let delta_pct = case
            .static_s
            .and_then(|exp| (exp > 0.0).then(|| (med - exp) / exp * 100.0));

        eprintln!(
            "  → median {:.3}s over {} run(s); {} distinct words.",
            med,
            cli.num_repeats,
            words.total()
        );

        summary.push((case.entry.to_string(), med, words.total(), case.static_s, delta_pct));
    }

    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_ENTRY_LEN$} | {:>10} | {:>7} | {:>10} | {:>8}",
        "board", "median (s)", "# words", "static (s)", "Δ %"
    );
    eprintln!("{:-<MAX_ENTRY_LEN$}-+-{:-<10}-+-{:-<7}-+-{:-<10}-+-{:-<8}", "", "", "", "", "");
    for (entry, med, num_words, static_t, delta_pct) in &summary {
        let display = if entry.chars().count() > MAX_ENTRY_LEN {
            format!("{}…", entry.chars().take(MAX_ENTRY_LEN - 1).collect::<String>())
        } else {
            entry.clone()
        };
        let static_str = static_t.map(|x| format!("{x:.1}")).unwrap_or_else(|| "—".into());
        let dp_str = delta_pct.map(|x| format!("{x:+.1}")).unwrap_or_else(|| "—".into());
        eprintln!("{display:<MAX_ENTRY_LEN$} | {med:>10.3} | {num_words:>7} | {static_str:>10} | {dp_str:>8}");
    }

    Ok(())
}
