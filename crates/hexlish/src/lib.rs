//! # hexlish
//!
//! A lossless codec between the 16-symbol *hexlish* alphabet and tiled
//! color-block images.
//!
//! Every symbol becomes one solid `BLOCK_SIZE`×`BLOCK_SIZE` square whose color
//! is taken from a fixed table, laid out row-major on a grid of
//! `blocks_per_row` columns. Decoding samples each block and maps the color
//! back to its symbol, so `decode(encode(s)) == s` as long as the image
//! survives with bit-exact color channels.
//!
//! ## Features
//!
//! - **Encoder**: PNG (RGBA8) or SVG output, one shape per symbol
//! - **Decoder**: PNG or SVG input, exact color matching, trailing padding trim
//! - **Text layer**: hex ↔ hexlish digit substitution
//!
//! ## Quick Start
//!
//! ### Encoding hexlish text to PNG
//!
//! ```ignore
//! use hexlish::{hexlish_encode, EncodeOptions};
//!
//! let opts = EncodeOptions { blocks_per_row: 4, ..Default::default() };
//! let png = hexlish_encode("ACEH IJLM\n", &opts)?;
//! std::fs::write("out.png", png)?;
//! ```
//!
//! ### Decoding an image back to text
//!
//! ```ignore
//! use hexlish::{hexlish_decode, ImageFormat};
//!
//! let png = std::fs::read("out.png")?;
//! let text = hexlish_decode(&png, ImageFormat::Png)?;
//! assert_eq!(text, "ACEHIJLM\n");
//! ```

use thiserror::Error;

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod geometry;
pub mod normalize;

pub use alphabet::{
    color_of, hex_to_hexlish, hexlish_to_hex, symbol_of, translate_hex, translate_hexlish, Rgb,
    Symbol,
};
pub use decoder::{decode_png, decode_raster, decode_svg, hexlish_decode, trim_padding};
pub use encoder::{
    encode_png, hexlish_encode, render_raster, render_svg, EncodeOptions, ImageFormat,
};
pub use geometry::{block_origin, canvas_size, position_of, GridLayout};
pub use normalize::{normalize, parse_stream};

/// Side length of one block in pixels.
pub const BLOCK_SIZE: u32 = 8;

// Largest canvas the encoder will lay out
pub(crate) const WIDTH_LIMIT: u32 = 1000000;
pub(crate) const HEIGHT_LIMIT: u32 = 1000000;

/// Errors that can occur during hexlish encoding or decoding.
#[derive(Debug, Error)]
pub enum HexlishError {
    /// A character outside the 16-symbol alphabet was found in the input stream
    #[error("unknown symbol {symbol:?} at index {index}")]
    UnknownSymbol { index: usize, symbol: char },

    /// A sampled block color does not exactly match any registered color
    #[error("unknown color {color} at block {index}")]
    UnknownColor { index: usize, color: Rgb },

    /// The image cannot be a hexlish grid (bad dimensions, broken SVG, ...)
    #[error("malformed image: {0}")]
    MalformedImage(String),

    /// The grid would exceed the canvas limits or overflow pixel coordinates
    #[error("invalid grid dimensions: {blocks_per_row} blocks per row x {rows} rows")]
    InvalidDimensions { blocks_per_row: usize, rows: usize },

    /// There is nothing to encode after whitespace removal
    #[error("empty symbol stream")]
    EmptyStream,

    /// A character that is not a hexadecimal digit was given to the hex translator
    #[error("invalid hex digit {digit:?} at index {index}")]
    InvalidHexDigit { index: usize, digit: char },

    /// PNG container encoding or decoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hexlish operations.
pub type Result<T> = core::result::Result<T, HexlishError>;
