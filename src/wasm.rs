use crate::board::Board;
use crate::dictionary::{is_valid_word, Dictionary};
use crate::errors::ConstructionError;
use crate::log::init_logger;
use crate::results::{self, SortedWords};
use crate::search::{SearchEngine, SearchStatus};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "B003", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<ConstructionError> for WasmError {
    fn from(e: ConstructionError) -> Self {
        // For Cell, surface the nested CellError details
        match &e {
            ConstructionError::Cell(ce) => WasmError {
                code: ce.code().to_string(),
                message: ce.to_string(),
                description: ce.description().to_string(),
                details: ce.details().to_string(),
                help: ce.help().map(str::to_string),
            },
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult<'a> {
    words: &'a SortedWords,
    usage: Vec<Vec<u32>>,
    status: &'static str,
}

/// A dictionary held on the JavaScript side and reused across boards.
#[wasm_bindgen]
pub struct WasmSolver {
    dictionary: Dictionary,
}

#[wasm_bindgen]
impl WasmSolver {
    /// JS entry: `new WasmSolver(text)` where `text` holds one word per line.
    #[wasm_bindgen(constructor)]
    pub fn new(dictionary_text: &str) -> WasmSolver {
        let dictionary = Dictionary::parse_from_str(dictionary_text);
        log::info!("Loaded {} words", dictionary.len());
        WasmSolver { dictionary }
    }

    /// Number of words in the dictionary.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.dictionary.len()
    }

    /// JS entry: `(symbols: string[], size: number)` → `{ words, usage, status }`.
    pub fn solve(&self, symbols: JsValue, size: usize) -> Result<JsValue, JsValue> {
        let symbols: Vec<String> = serde_wasm_bindgen::from_value(symbols).map_err(|e| WasmError {
            code: "WASM001".to_string(),
            message: format!("symbols must be string[]: {e}"),
            description: "Invalid symbol list".to_string(),
            details: "The symbols parameter must be a JavaScript array of strings, one per tile, row by row.".to_string(),
            help: Some("Pass e.g. ['a', 'c', 't', 'qu', ...] with size * size entries".to_string()),
        })?;

        let mut board = Board::new(&symbols, size).map_err(WasmError::from)?;
        let result = SearchEngine::default().find_words(&mut board, &self.dictionary);
        let words = results::collect(result.findings);

        let wasm_result = WasmSolveResult {
            words: &words,
            usage: results::usage_grid(&board),
            status: match result.status {
                SearchStatus::Exhausted => "exhausted",
                SearchStatus::TimedOut { .. } => "timed_out",
            },
        };

        serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
            WasmError {
                code: "WASM002".to_string(),
                message: format!("serialization failed: {e}"),
                description: "Failed to serialize result".to_string(),
                details: "The solver result could not be converted to JavaScript format.".to_string(),
                help: Some("This is an internal error. Please report this issue.".to_string()),
            }
            .into()
        })
    }

    /// JS entry: `(word: string)` → `boolean`.
    #[wasm_bindgen(js_name = isValidWord)]
    pub fn is_valid_word(&self, word: &str) -> bool {
        is_valid_word(&self.dictionary, word)
    }
}
