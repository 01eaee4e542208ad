//! Integration tests for the boggler word finder.
//!
//! These tests drive the public API end to end: dictionary loading, board construction,
//! the search, and the sorted output, using the fixture dictionary and small boards whose
//! words can be checked by hand or by brute force.

use std::collections::{BTreeSet, HashSet};

use boggler::board::{Board, CellId};
use boggler::dictionary::{is_valid_word, Dictionary};
use boggler::errors::ConstructionError;
use boggler::results::{self, SortedWords};
use boggler::search::{
    find_words, Pruning, SearchEngine, SearchOptions, SearchStatus, MAX_WORD_LEN, MIN_WORD_LEN,
};
use boggler::tiles;

/// Load the fixture dictionary
fn load_test_dictionary() -> Dictionary {
    Dictionary::load_from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_dictionary.txt"))
        .expect("Failed to read test dictionary")
}

/// The board from the worked example, row by row.
const SCENARIO: [&str; 16] = [
    "a", "c", "t", "d", //
    "q", "u", "i", "e", //
    "s", "p", "n", "r", //
    "o", "v", "e", "l",
];

/// Helper to collect the distinct words of a sorted result
fn word_set(sorted: &SortedWords) -> BTreeSet<String> {
    sorted.words().map(str::to_string).collect()
}

/// Every dictionary word spelled by some simple path, found by enumerating all of them.
fn brute_force(board: &Board, dictionary: &Dictionary) -> BTreeSet<String> {
    fn walk(
        board: &Board,
        dictionary: &Dictionary,
        path: &mut Vec<CellId>,
        word: &mut String,
        out: &mut BTreeSet<String>,
    ) {
        let len = word.chars().count();
        if len > MAX_WORD_LEN {
            return;
        }
        if len >= MIN_WORD_LEN && dictionary.contains(word) {
            out.insert(word.clone());
        }
        let Some(&last) = path.last() else { return };
        for &next in board.neighbors(last).unwrap_or_default() {
            if path.contains(&next) {
                continue;
            }
            let mark = word.len();
            word.push_str(board.cell(next).map_or("", |c| c.symbol()));
            path.push(next);
            walk(board, dictionary, path, word, out);
            path.pop();
            word.truncate(mark);
        }
    }

    let mut out = BTreeSet::new();
    for cell in board.cells() {
        let mut path = vec![cell.id()];
        let mut word = cell.symbol().to_string();
        walk(board, dictionary, &mut path, &mut word, &mut out);
    }
    out
}

#[cfg(test)]
mod scenario {
    use super::*;

    #[test]
    fn test_scenario_board_words() {
        let dictionary = load_test_dictionary();
        let mut board = Board::new(SCENARIO, 4).unwrap();
        let result = find_words(&mut board, &dictionary);
        assert_eq!(result.status, SearchStatus::Exhausted);

        let sorted = results::collect(result.findings);
        assert_eq!(sorted.get(3).unwrap(), ["act", "cut", "die", "pin", "tie"]);
        assert_eq!(
            sorted.get(4).unwrap(),
            [
                "cute", "diet", "edit", "opus", "oven", "over", "pine", "quip", "quit", "rein", "spin",
                "spun", "tide", "tier", "tire"
            ]
        );
        assert_eq!(sorted.get(5).unwrap(), ["quiet", "quite", "spine"]);
        for len in 6..=MAX_WORD_LEN {
            assert_eq!(sorted.get(len), Some(&[][..]));
        }
    }

    #[test]
    fn test_cat_needs_adjacent_a_and_t() {
        let dictionary = load_test_dictionary();

        // a and t sit two columns apart
        let mut board = Board::new(SCENARIO, 4).unwrap();
        let sorted = results::collect(find_words(&mut board, &dictionary).findings);
        assert!(!word_set(&sorted).contains("cat"));

        let mut swapped = SCENARIO;
        swapped.swap(0, 1);
        let mut board = Board::new(swapped, 4).unwrap();
        let sorted = results::collect(find_words(&mut board, &dictionary).findings);
        assert!(sorted.get(3).unwrap().contains(&"cat".to_string()));
        assert!(!word_set(&sorted).contains("act"));
    }

    #[test]
    fn test_output_format() {
        let dictionary = Dictionary::build(["act", "cute"]);
        let mut board = Board::new(SCENARIO, 4).unwrap();
        let sorted = results::collect(find_words(&mut board, &dictionary).findings);

        let text = sorted.to_string();
        assert!(text.starts_with("3 LETTERS: [act]\n4 LETTERS: [cute]\n5 LETTERS: []\n"));
        assert!(text.ends_with("10 LETTERS: []\n"));

        let json = serde_json::to_value(&sorted).unwrap();
        assert_eq!(json["3"], serde_json::json!(["act"]));
        assert_eq!(json["10"], serde_json::json!([]));
    }
}

#[cfg(test)]
mod dictionary_tests {
    use super::*;

    #[test]
    fn test_fixture_normalizes_entries() {
        let dictionary = load_test_dictionary();
        // 29 non-blank lines, "Apple" lowercased
        assert_eq!(dictionary.len(), 29);
        assert!(dictionary.contains("apple"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn test_standard_dictionary_validation() {
        let dictionary =
            Dictionary::load_from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")).unwrap();
        assert!(is_valid_word(&dictionary, "cat"));
        assert!(!is_valid_word(&dictionary, "zzzzz"));
    }

    #[test]
    fn test_missing_dictionary_reports_path() {
        let err = Dictionary::load_from_path("tests/fixtures/no_such_file.txt").unwrap_err();
        assert_eq!(err.code(), "D001");
        assert!(err.to_string().contains("no_such_file.txt"));
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn test_results_are_sound() {
        let dictionary = load_test_dictionary();
        let board = Board::new(SCENARIO, 4).unwrap();

        let engine = SearchEngine::default();
        let mut hits = 0;
        for found in engine.word_paths(&board, &dictionary) {
            hits += 1;
            assert!(dictionary.contains(&found.word));
            assert!((MIN_WORD_LEN..=MAX_WORD_LEN).contains(&found.len));
            assert_eq!(found.len, found.word.chars().count());
            assert_eq!(board.spell(&found.path).as_deref(), Some(found.word.as_str()));
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_results_match_brute_force() {
        let dictionary = load_test_dictionary();
        let board_symbols = ["c", "u", "t", "a", "i", "e", "p", "n", "d"];

        for pruning in [Pruning::ThreeLetter, Pruning::EveryPrefix] {
            let mut board = Board::new(board_symbols, 3).unwrap();
            let expected = brute_force(&board, &dictionary);
            assert!(expected.contains("cap") && expected.contains("pine"));

            let engine = SearchEngine::new(SearchOptions { pruning, ..SearchOptions::default() });
            let found = word_set(&results::collect(engine.find_words(&mut board, &dictionary).findings));
            assert_eq!(found, expected, "{pruning:?}");
        }
    }

    #[test]
    fn test_every_prefix_prunes_at_least_as_much() {
        let dictionary = load_test_dictionary();
        let mut board = Board::new(SCENARIO, 4).unwrap();

        let three = SearchEngine::default().find_words(&mut board, &dictionary);
        let every = SearchEngine::new(SearchOptions { pruning: Pruning::EveryPrefix, ..SearchOptions::default() })
            .find_words(&mut board, &dictionary);

        assert_eq!(three.findings, every.findings);
        assert_eq!(three.hits, every.hits);
        assert!(every.frames_expanded <= three.frames_expanded);
    }

    #[test]
    fn test_pruning_modes_agree_with_empty_tile() {
        let dictionary = Dictionary::build(["cat"]);
        assert!(dictionary.has_prefix(""));

        let mut three = Board::new(["", "c", "a", "t"], 2).unwrap();
        let mut every = Board::new(["", "c", "a", "t"], 2).unwrap();
        let r3 = find_words(&mut three, &dictionary);
        let re = SearchEngine::new(SearchOptions { pruning: Pruning::EveryPrefix, ..SearchOptions::default() })
            .find_words(&mut every, &dictionary);

        assert_eq!(r3.hits, re.hits);
        assert_eq!(results::usage_grid(&three), results::usage_grid(&every));
        assert_eq!(results::usage_grid(&every), vec![vec![4, 5], vec![5, 5]]);
    }

    #[test]
    fn test_lazy_and_eager_agree() {
        let dictionary = load_test_dictionary();
        let mut board = Board::new(SCENARIO, 4).unwrap();
        let engine = SearchEngine::default();

        let lazy: HashSet<String> = engine.word_paths(&board, &dictionary).map(|f| f.word).collect();
        // the iterator leaves usage alone
        assert_eq!(board.usage().total(), 0);

        let eager = engine.find_words(&mut board, &dictionary);
        let eager: HashSet<String> = eager.findings.words().map(str::to_string).collect();
        assert_eq!(lazy, eager);
    }

    #[test]
    fn test_repeat_runs_double_usage_until_reset() {
        let dictionary = load_test_dictionary();
        let mut board = Board::new(SCENARIO, 4).unwrap();

        let first = find_words(&mut board, &dictionary);
        let once = results::usage_grid(&board);
        let second = find_words(&mut board, &dictionary);
        let twice = results::usage_grid(&board);

        assert_eq!(first.findings, second.findings);
        for (a, b) in once.iter().flatten().zip(twice.iter().flatten()) {
            assert_eq!(*b, 2 * *a);
        }
        // a-c-t is the only hit through the corner
        assert_eq!(once[0][0], 1);

        results::reset(&mut board);
        assert_eq!(board.usage().total(), 0);
        find_words(&mut board, &dictionary);
        assert_eq!(results::usage_grid(&board), once);
    }

    #[test]
    fn test_usage_counts_each_hit_path() {
        let dictionary = load_test_dictionary();
        let mut board = Board::new(SCENARIO, 4).unwrap();
        let result = find_words(&mut board, &dictionary);

        let per_cell: u32 = results::usage_report(&board).values().sum();
        let path_cells: usize = SearchEngine::default()
            .word_paths(&board, &dictionary)
            .map(|f| f.path.len())
            .sum();
        assert_eq!(per_cell as usize, path_cells);
        assert!(result.hits >= result.findings.total());
    }
}

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn test_one_by_one_board_finds_nothing() {
        let dictionary = load_test_dictionary();
        let mut board = Board::new(["a"], 1).unwrap();
        let sorted = results::collect(find_words(&mut board, &dictionary).findings);

        assert!(sorted.is_empty());
        for len in MIN_WORD_LEN..=MAX_WORD_LEN {
            assert_eq!(sorted.get(len), Some(&[][..]));
        }
        assert_eq!(board.usage().total(), 0);
    }

    #[test]
    fn test_wrong_symbol_count() {
        let err = Board::new(&SCENARIO[..15], 4).unwrap_err();
        assert!(matches!(
            err,
            ConstructionError::SymbolCountMismatch { size: 4, expected: 16, received: 15 }
        ));
        assert_eq!(err.code(), "B003");
    }

    #[test]
    fn test_zero_size() {
        let err = Board::new(Vec::<String>::new(), 0).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_compact_entry_with_qu_tile() {
        let dictionary = load_test_dictionary();
        // nine letters for a 3x3 board: every letter is a tile, q reads qu
        let symbols = tiles::parse_board_string("QIT ABC DEF", 3);
        assert_eq!(symbols[0], "qu");

        let mut board = Board::new(&symbols, 3).unwrap();
        let found = engine_words(&mut board, &dictionary);
        assert!(found.contains("quit"));
    }

    #[test]
    fn test_random_board_is_searchable() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let dictionary = load_test_dictionary();
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(tiles::random_symbols(5, &mut rng), 5).unwrap();
        let result = find_words(&mut board, &dictionary);
        assert_eq!(result.status, SearchStatus::Exhausted);
        for word in result.findings.words() {
            assert!(dictionary.contains(word));
        }
    }

    fn engine_words(board: &mut Board, dictionary: &Dictionary) -> BTreeSet<String> {
        word_set(&results::collect(find_words(board, dictionary).findings))
    }
}
