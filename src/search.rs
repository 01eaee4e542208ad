//! Exhaustive, pruned search for every dictionary word traceable on a board.
//!
//! A word is traced by a *simple path*: a sequence of distinct cells, each touching the
//! previous one. The search starts a path at every cell and extends it depth-first:
//!
//! 1. When the path spells exactly three characters that start no dictionary word, the branch
//!    is abandoned (no check, no extension).
//! 2. When it spells a dictionary word of 3 to 10 characters, the word is recorded and every
//!    cell on the path gets its usage counter bumped.
//! 3. While it spells fewer than 10 characters, it is extended to every unvisited neighbor of
//!    its last cell.
//!
//! Lengths count characters of the spelled string, not cells: a `qu` tile adds two.
//!
//! The traversal keeps its own stack of `(path, word)` frames instead of recursing, and is
//! exposed lazily through [`WordPaths`]. [`find_words`] drains it into [`RawFindings`].
//!
//! # Examples
//!
//! ```
//! use boggler::board::Board;
//! use boggler::dictionary::Dictionary;
//! use boggler::search::{self, SearchStatus};
//!
//! let dictionary = Dictionary::build(["cat", "act", "tact"]);
//! let mut board = Board::new(["c", "a", "t", "x"], 2)?;
//!
//! let result = search::find_words(&mut board, &dictionary);
//! assert_eq!(result.status, SearchStatus::Exhausted);
//! assert!(result.findings.contains("cat"));
//! assert!(result.findings.contains("act"));
//! assert!(!result.findings.contains("tact")); // only one t on the board
//! # Ok::<(), boggler::errors::ConstructionError>(())
//! ```
//!
//! ## Lazy iteration
//!
//! ```
//! use boggler::board::Board;
//! use boggler::dictionary::Dictionary;
//! use boggler::search::SearchEngine;
//!
//! let dictionary = Dictionary::build(["cat"]);
//! let board = Board::new(["c", "a", "t", "x"], 2)?;
//!
//! let first = SearchEngine::default().word_paths(&board, &dictionary).next();
//! assert_eq!(first.map(|f| f.word).as_deref(), Some("cat"));
//! # Ok::<(), boggler::errors::ConstructionError>(())
//! ```

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use instant::Instant;
use log::{debug, warn};

use crate::board::{Board, Cell, CellId};
use crate::dictionary::{Dictionary, PREFIX_LEN};

/// Shortest word the search records.
pub const MIN_WORD_LEN: usize = 3;
/// Longest word the search records; paths are never extended past this many characters.
pub const MAX_WORD_LEN: usize = 10;

// The amount of time (in seconds) a search may run by default
const TIME_BUDGET: u64 = 30;
// How many frames are expanded between clock reads
const BUDGET_CHECK_INTERVAL: usize = 4096;

/// Which partial paths the search gives up on early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Abandon a path only when it spells exactly three characters that start no word.
    #[default]
    ThreeLetter,
    /// Stop extending a path as soon as its string is not a proper prefix of some word.
    ///
    /// On a board with an empty tile, a path that spells a whole word is still extended, since
    /// appending the empty tile spells the same word along a new path.
    ///
    /// Finds the same words as [`Pruning::ThreeLetter`] while expanding no more frames. The
    /// first use builds the dictionary's full prefix set.
    EveryPrefix,
}

/// Knobs for a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub pruning: Pruning,
    /// Wall-clock limit; the search stops (with [`SearchStatus::TimedOut`]) once it is spent.
    pub time_budget: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            pruning: Pruning::default(),
            time_budget: Duration::from_secs(TIME_BUDGET),
        }
    }
}

/// Status of the search run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// Every simple path within the length bound was explored.
    Exhausted,

    /// The time budget expired first. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Found words bucketed by length (3 through 10), before sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFindings {
    buckets: BTreeMap<usize, HashSet<String>>,
}

impl Default for RawFindings {
    fn default() -> Self {
        Self {
            buckets: (MIN_WORD_LEN..=MAX_WORD_LEN).map(|len| (len, HashSet::new())).collect(),
        }
    }
}

impl RawFindings {
    /// Record `word` (of `len` characters). Returns false if it was already present or its
    /// length has no bucket.
    pub fn insert(&mut self, word: String, len: usize) -> bool {
        debug_assert_eq!(word.chars().count(), len, "length must count chars of the word");
        self.buckets.get_mut(&len).is_some_and(|bucket| bucket.insert(word))
    }

    #[must_use]
    pub fn bucket(&self, len: usize) -> Option<&HashSet<String>> {
        self.buckets.get(&len)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&word.chars().count())
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Number of distinct words found.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }

    /// `(length, words)` in increasing length order; every bucket 3..=10 is present.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HashSet<String>)> {
        self.buckets.iter().map(|(&len, words)| (len, words))
    }

    /// Every found word, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }

    pub(crate) fn into_buckets(self) -> BTreeMap<usize, HashSet<String>> {
        self.buckets
    }
}

/// Outcome of [`SearchEngine::find_words`].
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub findings: RawFindings,
    pub status: SearchStatus,
    /// Number of `(path, word)` frames the traversal looked at.
    pub frames_expanded: usize,
    /// Number of word hits (a word traced by several paths counts once per path).
    pub hits: usize,
}

/// One hit: a dictionary word and the cells that spell it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    /// Length of `word` in characters.
    pub len: usize,
    pub path: Vec<CellId>,
}

/// Simple helper to enforce a wall-clock time limit.
#[derive(Debug)]
struct TimeBudget {
    start: Instant,   // when the budget began
    limit: Duration,  // maximum allowed elapsed time
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// A partial path and the string it spells.
#[derive(Debug)]
struct Frame {
    path: Vec<CellId>,
    word: String,
    word_len: usize,
}

/// Lazy depth-first traversal yielding every `(word, path)` hit in discovery order.
///
/// Starting cells are explored in row-major order, neighbors in increasing `CellId` order.
/// The iterator never touches usage counters; [`SearchEngine::find_words`] does.
#[derive(Debug)]
pub struct WordPaths<'a> {
    cells: &'a [Cell],
    dictionary: &'a Dictionary,
    pruning: Pruning,
    /// Some cell's symbol is `""`.
    has_empty_tile: bool,
    budget: TimeBudget,
    stack: Vec<Frame>,
    frames_expanded: usize,
    timed_out: Option<Duration>,
}

impl<'a> WordPaths<'a> {
    fn new(cells: &'a [Cell], dictionary: &'a Dictionary, options: &SearchOptions) -> Self {
        // reversed so the first cell is popped first
        let stack = cells
            .iter()
            .rev()
            .map(|cell| Frame {
                path: vec![cell.id()],
                word: cell.symbol().to_string(),
                word_len: cell.symbol().chars().count(),
            })
            .collect();

        Self {
            cells,
            dictionary,
            pruning: options.pruning,
            has_empty_tile: cells.iter().any(|cell| cell.symbol().is_empty()),
            budget: TimeBudget::new(options.time_budget),
            stack,
            frames_expanded: 0,
            timed_out: None,
        }
    }

    #[must_use]
    pub fn frames_expanded(&self) -> usize {
        self.frames_expanded
    }

    /// `Exhausted` once the iterator has returned `None` without running out of time.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        match self.timed_out {
            Some(elapsed) => SearchStatus::TimedOut { elapsed },
            None => SearchStatus::Exhausted,
        }
    }

    /// Check one frame, push its extensions, and return it if it spells a word.
    fn expand(&mut self, frame: Frame) -> Option<FoundWord> {
        let (cells, dictionary) = (self.cells, self.dictionary);

        if self.pruning == Pruning::ThreeLetter
            && frame.word_len == PREFIX_LEN
            && !dictionary.has_valid_three_prefix(&frame.word)
        {
            return None;
        }

        let is_word = (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&frame.word_len)
            && dictionary.contains(&frame.word);

        let extend = frame.word_len < MAX_WORD_LEN
            && match self.pruning {
                Pruning::ThreeLetter => true,
                Pruning::EveryPrefix => {
                    dictionary.has_prefix(&frame.word) || (self.has_empty_tile && is_word)
                }
            };

        if extend {
            if let Some(&last) = frame.path.last() {
                // reversed so lower ids are explored first
                for &next in cells[last.index()].neighbors().iter().rev() {
                    if frame.path.contains(&next) {
                        continue;
                    }
                    let symbol = cells[next.index()].symbol();

                    let mut path = Vec::with_capacity(frame.path.len() + 1);
                    path.extend_from_slice(&frame.path);
                    path.push(next);

                    let mut word = String::with_capacity(frame.word.len() + symbol.len());
                    word.push_str(&frame.word);
                    word.push_str(symbol);

                    self.stack.push(Frame {
                        path,
                        word,
                        word_len: frame.word_len + symbol.chars().count(),
                    });
                }
            }
        }

        is_word.then(|| FoundWord {
            word: frame.word,
            len: frame.word_len,
            path: frame.path,
        })
    }
}

impl Iterator for WordPaths<'_> {
    type Item = FoundWord;

    fn next(&mut self) -> Option<FoundWord> {
        if self.timed_out.is_some() {
            return None;
        }
        while let Some(frame) = self.stack.pop() {
            self.frames_expanded += 1;
            if self.frames_expanded % BUDGET_CHECK_INTERVAL == 0 && self.budget.expired() {
                let elapsed = self.budget.elapsed();
                warn!(
                    "Search timed out after {:.1}s ({} frames); results are incomplete",
                    elapsed.as_secs_f64(),
                    self.frames_expanded
                );
                self.timed_out = Some(elapsed);
                self.stack.clear();
                return None;
            }
            if let Some(found) = self.expand(frame) {
                return Some(found);
            }
        }
        None
    }
}

/// Runs searches with a fixed set of [`SearchOptions`].
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    options: SearchOptions,
}

impl SearchEngine {
    #[must_use]
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Lazy traversal over `board`. Usage counters are left alone.
    #[must_use]
    pub fn word_paths<'a>(&self, board: &'a Board, dictionary: &'a Dictionary) -> WordPaths<'a> {
        WordPaths::new(board.cells(), dictionary, &self.options)
    }

    /// Find every word on `board`, bumping the usage counter of each cell once per hit.
    ///
    /// The word set depends only on `board` and `dictionary`. Usage counters accumulate across
    /// calls; reset them with [`crate::results::reset`] between runs to get per-run counts.
    pub fn find_words(&self, board: &mut Board, dictionary: &Dictionary) -> SearchResult {
        let (cells, usage) = board.split_mut();
        let mut paths = WordPaths::new(cells, dictionary, &self.options);

        let mut findings = RawFindings::default();
        let mut hits = 0;
        for found in paths.by_ref() {
            hits += 1;
            usage.record_path(&found.path);
            findings.insert(found.word, found.len);
        }

        debug!(
            "Search expanded {} frames: {} hits, {} distinct words",
            paths.frames_expanded(),
            hits,
            findings.total()
        );

        SearchResult {
            findings,
            status: paths.status(),
            frames_expanded: paths.frames_expanded(),
            hits,
        }
    }
}

/// Find every word on `board` with the default options.
///
/// See [`SearchEngine::find_words`].
pub fn find_words(board: &mut Board, dictionary: &Dictionary) -> SearchResult {
    SearchEngine::default().find_words(board, dictionary)
}
