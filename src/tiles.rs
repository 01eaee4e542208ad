//! Tile symbols: normalization, compact board entry, random boards.
//!
//! A physical board has no lone `q`: the cube face reads `Qu`, and it counts as one tile
//! (one step of a path) even though it adds two letters to a word.

use rand::seq::SliceRandom;
use rand::Rng;

/// The tile every `q` is promoted to.
pub const QU_TILE: &str = "qu";

/// Faces a random tile is drawn from: `a`..=`z` with `qu` in place of `q`.
pub static TILE_FACES: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", QU_TILE, "r", "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Trim and lowercase a raw tile.
#[must_use]
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Read tiles out of a compact entry such as `"actd quie spnr ovel"`.
///
/// - Characters that are not letters are ignored.
/// - Every `q` becomes the `qu` tile.
/// - When a `q` is followed by `u`, the `u` belongs to the `qu` tile, unless the entry holds
///   exactly `size`² letters; then every letter is its own tile and the `u` is kept.
///
/// The result is not checked against `size`; [`crate::board::Board::new`] does that.
#[must_use]
pub fn parse_board_string(entry: &str, size: usize) -> Vec<String> {
    let letters: Vec<char> = entry
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    let one_letter_per_tile = letters.len() == size.saturating_mul(size);

    let mut tiles = Vec::with_capacity(letters.len());
    let mut i = 0;
    while i < letters.len() {
        if letters[i] == 'q' {
            tiles.push(QU_TILE.to_string());
            if !one_letter_per_tile && letters.get(i + 1) == Some(&'u') {
                i += 1;
            }
        } else {
            tiles.push(letters[i].to_string());
        }
        i += 1;
    }
    tiles
}

/// Draw `size`² tiles uniformly from [`TILE_FACES`].
pub fn random_symbols<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<String> {
    (0..size * size)
        .filter_map(|_| TILE_FACES.choose(rng))
        .map(|face| (*face).to_string())
        .collect()
}
