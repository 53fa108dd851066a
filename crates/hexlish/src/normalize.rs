//! Input normalization: raw text to a symbol stream.

use crate::{HexlishError, Result, Symbol};

/// Drops every space, `\n` and `\r`. Everything else, including characters
/// outside the alphabet, is kept for [`parse_stream`] to reject.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r'))
        .collect()
}

/// Normalizes `text` and resolves every remaining character to a [`Symbol`].
///
/// The index in [`HexlishError::UnknownSymbol`] counts positions in the
/// normalized stream, which is also the block index the symbol would occupy.
pub fn parse_stream(text: &str) -> Result<Vec<Symbol>> {
    normalize(text)
        .chars()
        .enumerate()
        .map(|(index, c)| {
            Symbol::from_char(c).ok_or(HexlishError::UnknownSymbol { index, symbol: c })
        })
        .collect()
}
