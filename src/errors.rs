//! Error types for board construction, cell access, and dictionary loading.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - B001: `NonEnumerableSymbols` (Symbol source could not be iterated)
//! - B002: `SizeCastFailure` (Board size is not a usable integer)
//! - B003: `SymbolCountMismatch` (Symbol count differs from size²)
//! - B004: `InvalidSize` (Board size is not positive)
//! - B005: `Cell` (Cell-level failure during construction (wraps [`CellError`]))
//! - C001: `NonEnumerableEdges` (Cell edges cannot be resolved on the board)
//! - C002: `InvalidCoordinate` (Coordinate is negative or off the board)
//! - C003: `InvalidUsageCount` (Usage count is negative)
//! - D001: `Unreadable` (Dictionary source could not be read)
//!
//! # Examples
//!
//! ```
//! use boggler::board::Board;
//! use boggler::errors::ConstructionError;
//!
//! let symbols = vec!["a"; 15];
//! match Board::new(&symbols, 4) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "B003");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("15 symbols cannot fill a 4x4 board"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Failure while building a [`Board`](crate::board::Board).
///
/// No partially built board is ever handed out; every variant identifies the offending value.
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    #[error("Failed to read board symbols: source failed at position {position}: {reason}")]
    NonEnumerableSymbols { position: usize, reason: String },

    #[error("Board size \"{input}\" could not be cast to an integer")]
    SizeCastFailure { input: String },

    #[error("Symbols do not match board size. For size {size}, should have {expected} symbols; received {received}")]
    SymbolCountMismatch {
        size: usize,
        expected: usize,
        received: usize,
    },

    #[error("Size of board must be > 0, got {size}")]
    InvalidSize { size: i64 },

    #[error("cell construction failed: {0}")]
    Cell(#[from] CellError),
}

impl ConstructionError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConstructionError::NonEnumerableSymbols { .. } => "B001",
            ConstructionError::SizeCastFailure { .. } => "B002",
            ConstructionError::SymbolCountMismatch { .. } => "B003",
            ConstructionError::InvalidSize { .. } => "B004",
            ConstructionError::Cell(_) => "B005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConstructionError::NonEnumerableSymbols { .. } => "Symbol source could not be iterated",
            ConstructionError::SizeCastFailure { .. } => "Board size is not a usable integer",
            ConstructionError::SymbolCountMismatch { .. } => "Symbol count differs from size squared",
            ConstructionError::InvalidSize { .. } => "Board size is not positive",
            ConstructionError::Cell(_) => "Cell-level failure during construction",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConstructionError::NonEnumerableSymbols { .. } => "The symbols for the board come from a source (a file, a stream, a scanner) that failed before every tile was delivered. The board is not built from a partial symbol list.",
            ConstructionError::SizeCastFailure { .. } => "The board dimension was given as text that is not a whole number, or is so large that size x size does not fit in memory indexing.",
            ConstructionError::SymbolCountMismatch { .. } => "A board of size N holds exactly N x N tiles, listed row by row. The number of symbols supplied must match.",
            ConstructionError::InvalidSize { .. } => "Boards are N x N grids with N >= 1. Zero and negative sizes are rejected.",
            ConstructionError::Cell(_) => "A cell could not be created or linked to its neighbors. This wraps a CellError (see Cell Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConstructionError::SizeCastFailure { .. } => Some("Pass the size as a small positive integer, e.g. '4' for a classic board or '5' for a big board"),
            ConstructionError::SymbolCountMismatch { .. } => Some("A 4x4 board needs 16 symbols, a 5x5 board needs 25; check for missing or extra tiles"),
            ConstructionError::InvalidSize { .. } => Some("Use a board size of at least 1 (the classic board is 4)"),
            ConstructionError::NonEnumerableSymbols { .. } => Some("Check that the symbol source is readable and complete"),
            ConstructionError::Cell(_) => None, // CellError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            ConstructionError::Cell(ce) => {
                format!("{}\n  caused by: {}", self.code(), ce.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Failure at the level of a single cell.
#[derive(Debug, thiserror::Error)]
pub enum CellError {
    #[error("Edges of cell {cell} cannot be enumerated: {reason}")]
    NonEnumerableEdges { cell: usize, reason: String },

    #[error("Invalid coordinate ({row}, {col}) on a {size}x{size} board")]
    InvalidCoordinate { row: i64, col: i64, size: usize },

    #[error("Invalid usage count {count} for cell {cell} (must be >= 0)")]
    InvalidUsageCount { cell: usize, count: i64 },
}

impl CellError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CellError::NonEnumerableEdges { .. } => "C001",
            CellError::InvalidCoordinate { .. } => "C002",
            CellError::InvalidUsageCount { .. } => "C003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CellError::NonEnumerableEdges { .. } => "Cell edges cannot be resolved on the board",
            CellError::InvalidCoordinate { .. } => "Coordinate is negative or off the board",
            CellError::InvalidUsageCount { .. } => "Usage count is negative",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CellError::NonEnumerableEdges { .. } => "An edge pointed at a cell that is not on the board, or at the cell itself. Cells are never their own neighbors. This is usually a bug in board construction.",
            CellError::InvalidCoordinate { .. } => "Rows and columns run from 0 to size - 1. Negative coordinates and coordinates past the edge of the board do not name a cell.",
            CellError::InvalidUsageCount { .. } => "A usage count records how many found words pass through a cell, so it can never be negative.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CellError::InvalidCoordinate { .. } => Some("Rows and columns are zero-based: a 4x4 board uses 0..=3 for both"),
            CellError::InvalidUsageCount { .. } => Some("Use a count of 0 or more, or reset the board to zero every counter"),
            CellError::NonEnumerableEdges { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failure while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Unreadable { .. } => "D001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Unreadable { .. } => "Dictionary source could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Unreadable { .. } => "The word list file is missing, unreadable, or not valid UTF-8. No search is attempted without a dictionary.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Unreadable { .. } => Some("Pass --dictionary with the path of a UTF-8 file holding one word per line"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<DictionaryError> for io::Error {
    fn from(de: DictionaryError) -> Self {
        match de {
            DictionaryError::Unreadable { path, source } => io::Error::new(
                source.kind(),
                format!("failed to read dictionary from '{}': {source}", path.display()),
            ),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
