//! Turning raw search findings into sorted, printable output.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::board::{Board, CellId};
use crate::search::RawFindings;

/// Found words by length, each bucket sorted lexicographically.
///
/// Every length from 3 through 10 has a bucket, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedWords {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl SortedWords {
    #[must_use]
    pub fn get(&self, len: usize) -> Option<&[String]> {
        self.buckets.get(&len).map(Vec::as_slice)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(|(&len, words)| (len, words.as_slice()))
    }

    /// All words, shortest bucket first, alphabetical within a bucket.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }
}

impl fmt::Display for SortedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (len, words) in &self.buckets {
            writeln!(f, "{len} LETTERS: [{}]", words.join(", "))?;
        }
        Ok(())
    }
}

/// Sort each bucket of `raw`.
#[must_use]
pub fn collect(raw: RawFindings) -> SortedWords {
    let buckets = raw
        .into_buckets()
        .into_iter()
        .map(|(len, words)| {
            let mut words: Vec<String> = words.into_iter().collect();
            words.sort_unstable();
            (len, words)
        })
        .collect();
    SortedWords { buckets }
}

/// Usage counter of every cell.
#[must_use]
pub fn usage_report(board: &Board) -> BTreeMap<CellId, u32> {
    board.usage().iter().collect()
}

/// Usage counters laid out as the board's rows.
#[must_use]
pub fn usage_grid(board: &Board) -> Vec<Vec<u32>> {
    board
        .usage()
        .as_slice()
        .chunks(board.size())
        .map(<[u32]>::to_vec)
        .collect()
}

/// Zero every usage counter on `board`.
pub fn reset(board: &mut Board) {
    board.usage_mut().reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::search::find_words;

    fn solved() -> (Board, SortedWords) {
        let dictionary = Dictionary::build(["cat", "act", "tax", "taxa", "axe"]);
        let mut board = Board::new(["c", "a", "t", "x"], 2).unwrap();
        let result = find_words(&mut board, &dictionary);
        (board, collect(result.findings))
    }

    #[test]
    fn test_collect_sorts_buckets() {
        let (_, sorted) = solved();

        assert_eq!(sorted.get(3).unwrap(), &["act", "cat", "tax"]);
        assert!(sorted.get(4).unwrap().is_empty());
        assert_eq!(sorted.total(), 3);
        assert_eq!(sorted.iter().count(), 8);
    }

    #[test]
    fn test_display_lists_every_bucket() {
        let (_, sorted) = solved();
        let text = sorted.to_string();

        assert!(text.starts_with("3 LETTERS: [act, cat, tax]\n"));
        assert!(text.contains("4 LETTERS: []\n"));
        assert!(text.ends_with("10 LETTERS: []\n"));
    }

    #[test]
    fn test_usage_report_and_reset() {
        let (mut board, _) = solved();

        let report = usage_report(&board);
        assert_eq!(report.len(), 4);
        // c-a-t, a-c-t, t-a-x
        assert_eq!(report[&CellId::new(0)], 2);
        assert_eq!(report[&CellId::new(1)], 3);
        assert_eq!(report[&CellId::new(2)], 3);
        assert_eq!(report[&CellId::new(3)], 1);
        assert_eq!(usage_grid(&board), vec![vec![2, 3], vec![3, 1]]);

        reset(&mut board);
        assert!(usage_report(&board).values().all(|&c| c == 0));
    }

    #[test]
    fn test_serializes_as_map() {
        let (_, sorted) = solved();
        let json = serde_json::to_value(&sorted).unwrap();

        assert_eq!(json["3"], serde_json::json!(["act", "cat", "tax"]));
        assert_eq!(json["10"], serde_json::json!([]));
    }
}
