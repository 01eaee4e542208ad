//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ConstructionError`, `CellError`, and `DictionaryError`
//! implementations via their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use boggler::errors::{CellError, ConstructionError, DictionaryError};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{help_text}");
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{error}");
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One instance of every `ConstructionError` variant
fn all_construction_error_variants() -> Vec<ConstructionError> {
    vec![
        ConstructionError::NonEnumerableSymbols {
            position: 7,
            reason: "unexpected end of input".to_string(),
        },
        ConstructionError::SizeCastFailure { input: "four".to_string() },
        ConstructionError::SymbolCountMismatch { size: 4, expected: 16, received: 15 },
        ConstructionError::InvalidSize { size: 0 },
        ConstructionError::Cell(CellError::NonEnumerableEdges {
            cell: 3,
            reason: "a cell cannot neighbor itself".to_string(),
        }),
    ]
}

/// One instance of every `CellError` variant
fn all_cell_error_variants() -> Vec<CellError> {
    vec![
        CellError::NonEnumerableEdges {
            cell: 3,
            reason: "neighbor #20 is not on a board of 16 cells".to_string(),
        },
        CellError::InvalidCoordinate { row: -1, col: 2, size: 4 },
        CellError::InvalidUsageCount { cell: 5, count: -1 },
    ]
}

/// One instance of every `DictionaryError` variant
fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![DictionaryError::Unreadable {
        path: PathBuf::from("data/missing.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }]
}

fn main() {
    println!("# Error Codes\n");
    println!("<!-- Generated by `cargo run --bin generate_error_docs`; do not edit by hand. -->\n");

    println!("## Board Construction Errors (B0xx)\n");
    generate_error_docs!(all_construction_error_variants());

    println!("## Cell Errors (C0xx)\n");
    generate_error_docs!(all_cell_error_variants());

    println!("## Dictionary Errors (D0xx)\n");
    generate_error_docs!(all_dictionary_error_variants());
}
