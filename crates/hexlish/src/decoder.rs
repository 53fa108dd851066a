//! Grid decoder: recovers the symbol stream from a PNG raster or an SVG
//! document produced by the encoder.

use crate::alphabet::symbol_of;
use crate::encoder::ImageFormat;
use crate::{HexlishError, Result, Rgb, Symbol, BLOCK_SIZE};
use image::RgbaImage;

const FILL_PREFIX: &str = "fill:rgb(";

/// Decode an encoded image back to hexlish text.
///
/// Returns the recovered symbols followed by a single `\n`.
///
/// # Errors
///
/// - [`HexlishError::UnknownColor`] if a block color is not in the alphabet
/// - [`HexlishError::MalformedImage`] if the canvas is not a whole number of
///   blocks, padding appears before symbol data, or the SVG cannot be parsed
/// - [`HexlishError::Image`] if the PNG container is invalid
///
/// # Example
/// ```ignore
/// use hexlish::{hexlish_decode, ImageFormat};
///
/// let text = hexlish_decode(&std::fs::read("grid.png")?, ImageFormat::Png)?;
/// print!("{}", text);
/// ```
#[must_use = "this returns the decoded hexlish text"]
pub fn hexlish_decode(data: &[u8], format: ImageFormat) -> Result<String> {
    let symbols = match format {
        ImageFormat::Png => decode_png(data)?,
        ImageFormat::Svg => {
            let doc = std::str::from_utf8(data)
                .map_err(|e| HexlishError::MalformedImage(format!("SVG is not UTF-8: {e}")))?;
            decode_svg(doc)?
        }
    };

    let mut text: String = symbols.iter().map(|s| s.as_char()).collect();
    text.push('\n');
    Ok(text)
}

/// Decode PNG bytes into the symbol stream.
pub fn decode_png(data: &[u8]) -> Result<Vec<Symbol>> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
    decode_raster(&img.to_rgba8())
}

/// Scan a raster block by block and recover the symbol stream.
///
/// Each block is represented by its top-left pixel. A fully transparent or
/// pure black sample marks a padding block; only a trailing run of those is
/// accepted.
pub fn decode_raster(img: &RgbaImage) -> Result<Vec<Symbol>> {
    let (width, height) = img.dimensions();
    if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
        return Err(HexlishError::MalformedImage(format!(
            "canvas {width}x{height} is not a multiple of the {BLOCK_SIZE}px block size"
        )));
    }

    let mut blocks = Vec::with_capacity(((width / BLOCK_SIZE) * (height / BLOCK_SIZE)) as usize);
    for y in (0..height).step_by(BLOCK_SIZE as usize) {
        for x in (0..width).step_by(BLOCK_SIZE as usize) {
            let [r, g, b, a] = img.get_pixel(x, y).0;
            let block = if a == 0 {
                None
            } else {
                resolve(blocks.len(), Rgb::new(r, g, b))?
            };
            blocks.push(block);
        }
    }

    tracing::debug!(width, height, blocks = blocks.len(), "scanned raster grid");
    trim_padding(blocks)
}

/// Parse an SVG document and recover the symbol stream.
///
/// Every element carrying a `fill:rgb(r,g,b)` style is one block, taken in
/// document order; elements without one are ignored. Each block needs an
/// `x`/`y` origin on the block grid.
pub fn decode_svg(doc: &str) -> Result<Vec<Symbol>> {
    let mut blocks = Vec::new();

    for element in Tags::new(doc) {
        let Some(start) = element.find(FILL_PREFIX) else {
            continue;
        };
        let index = blocks.len();
        let color = parse_fill(&element[start + FILL_PREFIX.len()..], index)?;
        check_origin(element, index)?;
        blocks.push(resolve(index, color)?);
    }

    tracing::debug!(blocks = blocks.len(), "scanned svg shapes");
    trim_padding(blocks)
}

/// Iterates over the bodies of element tags, between `<` and `>`.
///
/// Comments, CDATA sections, processing instructions and declarations are
/// skipped whole, whatever they contain.
struct Tags<'a> {
    rest: &'a str,
}

impl<'a> Tags<'a> {
    fn new(doc: &'a str) -> Self {
        Self { rest: doc }
    }

    /// Moves past `terminator`, or to the end of input if it never appears.
    fn skip_past(&mut self, terminator: &str) {
        let rest = self.rest;
        self.rest = rest
            .find(terminator)
            .map_or("", |pos| &rest[pos + terminator.len()..]);
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = self.rest;
            let open = rest.find('<')?;
            let rest = &rest[open + 1..];
            self.rest = rest;

            if rest.starts_with("!--") {
                self.skip_past("-->");
            } else if rest.starts_with("![CDATA[") {
                self.skip_past("]]>");
            } else if rest.starts_with('!') || rest.starts_with('?') {
                self.skip_past(">");
            } else {
                let end = rest.find('>').unwrap_or(rest.len());
                let (tag, tail) = rest.split_at(end);
                self.rest = tail;
                return Some(tag);
            }
        }
    }
}

/// Drop the trailing run of padding blocks.
///
/// Padding only ever completes the final row, so a padding block followed by
/// a symbol means the image was not produced by the encoder.
pub fn trim_padding(mut blocks: Vec<Option<Symbol>>) -> Result<Vec<Symbol>> {
    let total = blocks.len();
    while let Some(None) = blocks.last() {
        blocks.pop();
    }
    if total != blocks.len() {
        tracing::debug!(trimmed = total - blocks.len(), "dropped trailing padding");
    }

    blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            block.ok_or_else(|| {
                HexlishError::MalformedImage(format!(
                    "padding block at index {index} is followed by symbol data"
                ))
            })
        })
        .collect()
}

/// Black is the zero value of the grid and marks padding, every other color
/// must be in the alphabet.
fn resolve(index: usize, color: Rgb) -> Result<Option<Symbol>> {
    if color == Rgb::default() {
        return Ok(None);
    }
    symbol_of(color)
        .map(Some)
        .ok_or(HexlishError::UnknownColor { index, color })
}

/// Parses the `r,g,b)` tail following `fill:rgb(`.
fn parse_fill(tail: &str, index: usize) -> Result<Rgb> {
    let malformed = || HexlishError::MalformedImage(format!("bad fill color on shape {index}"));

    let (body, _) = tail.split_once(')').ok_or_else(malformed)?;
    let mut channels = body.split(',').map(|c| c.trim().parse::<u8>());
    let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) = (
        channels.next(),
        channels.next(),
        channels.next(),
        channels.next(),
    ) else {
        return Err(malformed());
    };
    Ok(Rgb::new(r, g, b))
}

fn check_origin(element: &str, index: usize) -> Result<()> {
    for name in ["x", "y"] {
        let value = attribute(element, name)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .ok_or_else(|| {
                HexlishError::MalformedImage(format!("shape {index} has no valid {name} origin"))
            })?;
        if value % BLOCK_SIZE != 0 {
            return Err(HexlishError::MalformedImage(format!(
                "shape {index} origin {name}={value} is off the block grid"
            )));
        }
    }
    Ok(())
}

/// Value of a double-quoted attribute, matched on a whole attribute name.
fn attribute<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}=\"");
    let mut from = 0;
    while let Some(pos) = element[from..].find(&needle) {
        let at = from + pos;
        let value_start = at + needle.len();
        let whole_name = element[..at]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if whole_name {
            let len = element[value_start..].find('"')?;
            return Some(&element[value_start..value_start + len]);
        }
        from = value_start;
    }
    None
}
