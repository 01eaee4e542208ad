//! The board graph: one cell per tile, linked to every cell a king's move away.
//!
//! Boards are validated once, at construction. Either every tile is placed and linked, or
//! construction fails with a [`ConstructionError`] naming the bad input. After that the
//! topology never changes; only the usage counters (see [`crate::usage`]) are mutable.
//!
//! ```
//! use boggler::board::Board;
//!
//! let board = Board::new(["a", "b", "c", "d"], 2)?;
//! assert_eq!(board.len(), 4);
//! // on a 2x2 board every cell touches the other three
//! assert!(board.cells().iter().all(|c| c.neighbors().len() == 3));
//! # Ok::<(), boggler::errors::ConstructionError>(())
//! ```

use std::convert::Infallible;
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::errors::{CellError, ConstructionError};
use crate::tiles::normalize_symbol;
use crate::usage::UsageCounts;

/// Default board dimension (the classic 4x4 board).
pub const DEFAULT_SIZE: usize = 4;

/// Width of the field each symbol is printed in by `Board`'s `Display`.
const DISPLAY_CELL_WIDTH: usize = 5;

/// Forward neighbor offsets; linking both ways covers the other four.
const FORWARD_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// Dense identifier of a cell: its row-major index on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellId(usize);

impl CellId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        CellId(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One tile on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    row: usize,
    col: usize,
    symbol: String,
    /// Sorted by `CellId`; never contains `id`.
    neighbors: Vec<CellId>,
}

impl Cell {
    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    /// Chebyshev (king-move) distance between two cells.
    #[must_use]
    pub fn distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// True if `other` is a distinct cell within one king move.
    #[must_use]
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.id != other.id && self.distance(other) <= 1
    }
}

/// An immutable `size`×`size` grid of linked cells plus its usage counters.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    usage: UsageCounts,
}

impl Board {
    /// Build a board from `size`² symbols in row-major order.
    ///
    /// Symbols are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::InvalidSize`] if `size` is zero.
    /// - [`ConstructionError::SymbolCountMismatch`] if there are not exactly `size`² symbols.
    /// - [`ConstructionError::SizeCastFailure`] if `size`² overflows.
    pub fn new<I, S>(symbols: I, size: usize) -> Result<Board, ConstructionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::try_from_source(symbols.into_iter().map(Ok::<S, Infallible>), size)
    }

    /// Build a board from a fallible symbol source (a reader, a scanner, ...).
    ///
    /// # Errors
    ///
    /// Everything [`Board::new`] reports, plus
    /// [`ConstructionError::NonEnumerableSymbols`] if the source yields an error.
    pub fn try_from_source<I, S, E>(source: I, size: usize) -> Result<Board, ConstructionError>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
        E: fmt::Display,
    {
        if size == 0 {
            return Err(ConstructionError::InvalidSize { size: 0 });
        }
        let expected = size
            .checked_mul(size)
            .ok_or_else(|| ConstructionError::SizeCastFailure { input: size.to_string() })?;

        let mut symbols = Vec::with_capacity(expected.min(1024));
        for (position, item) in source.into_iter().enumerate() {
            match item {
                Ok(raw) => symbols.push(normalize_symbol(raw.as_ref())),
                Err(e) => {
                    return Err(ConstructionError::NonEnumerableSymbols {
                        position,
                        reason: e.to_string(),
                    })
                }
            }
        }

        if symbols.len() != expected {
            return Err(ConstructionError::SymbolCountMismatch {
                size,
                expected,
                received: symbols.len(),
            });
        }

        let cells = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Cell {
                id: CellId(i),
                row: i / size,
                col: i % size,
                symbol,
                neighbors: Vec::with_capacity(8),
            })
            .collect();

        let mut board = Board { size, cells, usage: UsageCounts::new(size) };
        board.link_all()?;

        debug!("Built {size}x{size} board:\n{board}");
        Ok(board)
    }

    /// Connect every pair of cells at Chebyshev distance 1.
    fn link_all(&mut self) -> Result<(), CellError> {
        for i in 0..self.cells.len() {
            let (row, col) = (self.cells[i].row, self.cells[i].col);
            for (dr, dc) in FORWARD_OFFSETS {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                    continue;
                };
                if r < self.size && c < self.size {
                    self.link(CellId(i), CellId(r * self.size + c))?;
                }
            }
        }
        for cell in &mut self.cells {
            cell.neighbors.sort_unstable();
        }
        Ok(())
    }

    /// Add the undirected edge `a`–`b` to both cells.
    fn link(&mut self, a: CellId, b: CellId) -> Result<(), CellError> {
        let n = self.cells.len();
        if a == b {
            return Err(CellError::NonEnumerableEdges {
                cell: a.0,
                reason: "a cell cannot neighbor itself".to_string(),
            });
        }
        for (from, to) in [(a, b), (b, a)] {
            if to.0 >= n {
                return Err(CellError::NonEnumerableEdges {
                    cell: from.0,
                    reason: format!("neighbor {to} is not on a board of {n} cells"),
                });
            }
        }
        self.cells[a.0].neighbors.push(b);
        self.cells[b.0].neighbors.push(a);
        Ok(())
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size`²).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell with this id, or `None` if `id` is not on this board.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// Neighbors of `id` in increasing id order, or `None` if `id` is not on this board.
    #[must_use]
    pub fn neighbors(&self, id: CellId) -> Option<&[CellId]> {
        self.cells.get(id.0).map(Cell::neighbors)
    }

    /// Look up a cell by signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidCoordinate`] if either coordinate is negative or off the board.
    pub fn cell_at(&self, row: i64, col: i64) -> Result<&Cell, CellError> {
        let invalid = || CellError::InvalidCoordinate { row, col, size: self.size };
        let r = usize::try_from(row).map_err(|_| invalid())?;
        let c = usize::try_from(col).map_err(|_| invalid())?;
        if r >= self.size || c >= self.size {
            return Err(invalid());
        }
        Ok(&self.cells[r * self.size + c])
    }

    /// Symbols in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(Cell::symbol)
    }

    /// Spell out `path` if it is a simple path of adjacent cells.
    ///
    /// Returns `None` for an empty path, a repeated cell, an unknown cell, or two consecutive
    /// cells that do not touch.
    #[must_use]
    pub fn spell(&self, path: &[CellId]) -> Option<String> {
        let mut word = String::new();
        for (i, id) in path.iter().enumerate() {
            let cell = self.cells.get(id.0)?;
            if path[..i].contains(id) {
                return None;
            }
            if let Some(prev) = i.checked_sub(1).map(|p| &self.cells[path[p].0]) {
                if !prev.is_adjacent(cell) {
                    return None;
                }
            }
            word.push_str(&cell.symbol);
        }
        (!path.is_empty()).then_some(word)
    }

    #[must_use]
    pub fn usage(&self) -> &UsageCounts {
        &self.usage
    }

    pub fn usage_mut(&mut self) -> &mut UsageCounts {
        &mut self.usage
    }

    /// Split into the read-only cells and the mutable usage counters.
    pub(crate) fn split_mut(&mut self) -> (&[Cell], &mut UsageCounts) {
        (&self.cells, &mut self.usage)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "{:<width$}", cell.symbol, width = DISPLAY_CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a board dimension given as text (e.g. a command-line argument).
///
/// # Errors
///
/// - [`ConstructionError::SizeCastFailure`] if `input` is not an integer or `size`² overflows.
/// - [`ConstructionError::InvalidSize`] if it is zero or negative.
pub fn parse_size(input: &str) -> Result<usize, ConstructionError> {
    let cast_failure = || ConstructionError::SizeCastFailure { input: input.to_string() };
    let size: i64 = input.trim().parse().map_err(|_| cast_failure())?;
    if size <= 0 {
        return Err(ConstructionError::InvalidSize { size });
    }
    let size = usize::try_from(size).map_err(|_| cast_failure())?;
    size.checked_mul(size).ok_or_else(cast_failure)?;
    Ok(size)
}
