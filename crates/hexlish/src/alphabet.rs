//! The fixed hexlish alphabet: symbol ↔ color table and the hex ↔ hexlish
//! letter substitution used at the text layer.

use crate::{HexlishError, Result};
use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color as an opaque RGBA pixel.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

/// Formats as `rgb(r,g,b)`, the form used in SVG fill styles.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// One symbol of the 16-letter hexlish alphabet.
///
/// Declaration order follows hex digit value, so `Symbol::ALL[n]` stands for
/// hex digit `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A,
    C,
    E,
    H,
    I,
    J,
    L,
    M,
    N,
    O,
    P,
    R,
    S,
    T,
    U,
    V,
}

impl Symbol {
    /// All symbols, ordered by the hex digit they substitute.
    pub const ALL: [Symbol; 16] = [
        Symbol::A,
        Symbol::C,
        Symbol::E,
        Symbol::H,
        Symbol::I,
        Symbol::J,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::O,
        Symbol::P,
        Symbol::R,
        Symbol::S,
        Symbol::T,
        Symbol::U,
        Symbol::V,
    ];

    /// Parses a symbol. Only the uppercase letters of the alphabet are accepted.
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'A' => Symbol::A,
            'C' => Symbol::C,
            'E' => Symbol::E,
            'H' => Symbol::H,
            'I' => Symbol::I,
            'J' => Symbol::J,
            'L' => Symbol::L,
            'M' => Symbol::M,
            'N' => Symbol::N,
            'O' => Symbol::O,
            'P' => Symbol::P,
            'R' => Symbol::R,
            'S' => Symbol::S,
            'T' => Symbol::T,
            'U' => Symbol::U,
            'V' => Symbol::V,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::C => 'C',
            Symbol::E => 'E',
            Symbol::H => 'H',
            Symbol::I => 'I',
            Symbol::J => 'J',
            Symbol::L => 'L',
            Symbol::M => 'M',
            Symbol::N => 'N',
            Symbol::O => 'O',
            Symbol::P => 'P',
            Symbol::R => 'R',
            Symbol::S => 'S',
            Symbol::T => 'T',
            Symbol::U => 'U',
            Symbol::V => 'V',
        }
    }

    /// The hex digit value (0-15) this symbol substitutes.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn color(self) -> Rgb {
        PALETTE[self.value() as usize]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Block colors, indexed by `Symbol as usize`.
const PALETTE: [Rgb; 16] = [
    Rgb::new(209, 177, 135),
    Rgb::new(199, 123, 88),
    Rgb::new(174, 93, 64),
    Rgb::new(121, 68, 74),
    Rgb::new(75, 61, 68),
    Rgb::new(186, 145, 88),
    Rgb::new(146, 116, 65),
    Rgb::new(77, 69, 57),
    Rgb::new(119, 116, 59),
    Rgb::new(179, 165, 85),
    Rgb::new(210, 201, 165),
    Rgb::new(140, 171, 161),
    Rgb::new(75, 114, 110),
    Rgb::new(87, 72, 82),
    Rgb::new(132, 120, 117),
    Rgb::new(171, 155, 142),
];

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Returns the block color of `symbol`.
#[inline]
pub const fn color_of(symbol: Symbol) -> Rgb {
    symbol.color()
}

/// Reverse color lookup. Only an exact channel match resolves; there is no
/// nearest-color fallback.
pub fn symbol_of(color: Rgb) -> Option<Symbol> {
    PALETTE
        .iter()
        .position(|&c| c == color)
        .map(|idx| Symbol::ALL[idx])
}

/// Maps a hex digit (`0-9`, `a-f`, `A-F`) to its hexlish symbol.
pub fn hex_to_hexlish(digit: char) -> Option<Symbol> {
    digit
        .to_digit(16)
        .map(|value| Symbol::ALL[value as usize])
}

/// Maps a symbol back to its uppercase hex digit.
#[inline]
pub const fn hexlish_to_hex(symbol: Symbol) -> char {
    HEX_DIGITS[symbol.value() as usize]
}

/// Translates hex text to hexlish text.
///
/// Spaces and line breaks are copied through so that the result can still be
/// fed to [`crate::normalize`]; any other non-hex character is an error.
pub fn translate_hex(text: &str) -> Result<String> {
    text.chars()
        .enumerate()
        .map(|(index, c)| match c {
            ' ' | '\n' | '\r' => Ok(c),
            _ => hex_to_hexlish(c)
                .map(Symbol::as_char)
                .ok_or(HexlishError::InvalidHexDigit { index, digit: c }),
        })
        .collect()
}

/// Translates hexlish text to uppercase hex text, copying spaces and line
/// breaks through.
pub fn translate_hexlish(text: &str) -> Result<String> {
    text.chars()
        .enumerate()
        .map(|(index, c)| match c {
            ' ' | '\n' | '\r' => Ok(c),
            _ => Symbol::from_char(c)
                .map(hexlish_to_hex)
                .ok_or(HexlishError::UnknownSymbol { index, symbol: c }),
        })
        .collect()
}
