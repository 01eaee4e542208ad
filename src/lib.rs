// Reusable library API: visible to both CLI and WASM builds
pub mod board;
pub mod dictionary;
pub mod errors;
pub mod log;
pub mod results;
pub mod search;
pub mod tiles;
pub mod usage;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use board::Board;
pub use dictionary::{is_valid_word, Dictionary};
pub use results::SortedWords;
pub use search::{find_words, SearchEngine, SearchOptions, SearchStatus};
