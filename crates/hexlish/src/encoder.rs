//! Grid encoder: paints one solid block per symbol onto a PNG raster or an SVG
//! document.

use crate::geometry::GridLayout;
use crate::normalize::parse_stream;
use crate::{HexlishError, Result, Symbol, BLOCK_SIZE};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use std::io::Write;

/// Image container used for the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFormat {
    /// Lossless RGBA raster
    #[default]
    Png,
    /// Vector document with one `<rect>` per block
    Svg,
}

/// Options for [`hexlish_encode`].
#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    /// Number of blocks per grid row.
    /// 0 puts every symbol on a single row.
    pub blocks_per_row: usize,

    /// Output container.
    pub format: ImageFormat,
}

/// Encode hexlish text into an image.
///
/// Spaces and line breaks are ignored; any other character outside the
/// alphabet fails with [`HexlishError::UnknownSymbol`] before any output is
/// produced.
///
/// # Example
/// ```ignore
/// use hexlish::{hexlish_encode, EncodeOptions, ImageFormat};
///
/// let opts = EncodeOptions { blocks_per_row: 2, format: ImageFormat::Svg };
/// let svg = hexlish_encode("ACE", &opts)?;
/// ```
#[must_use = "this returns the encoded image bytes"]
pub fn hexlish_encode(text: &str, opts: &EncodeOptions) -> Result<Vec<u8>> {
    let symbols = parse_stream(text)?;
    match opts.format {
        ImageFormat::Png => {
            let mut out = Vec::new();
            encode_png(&symbols, opts.blocks_per_row, &mut out)?;
            Ok(out)
        }
        ImageFormat::Svg => Ok(render_svg(&symbols, opts.blocks_per_row)?.into_bytes()),
    }
}

/// Paint `symbols` onto an RGBA canvas.
///
/// Symbol blocks are opaque. Blocks that only complete the last row stay
/// fully transparent `(0, 0, 0, 0)`.
pub fn render_raster(symbols: &[Symbol], blocks_per_row: usize) -> Result<RgbaImage> {
    if symbols.is_empty() {
        return Err(HexlishError::EmptyStream);
    }
    let layout = GridLayout::new(symbols.len(), blocks_per_row)?;
    tracing::debug!(
        symbols = symbols.len(),
        blocks_per_row = layout.blocks_per_row,
        padding = layout.padding(),
        width = layout.width,
        height = layout.height,
        "rendering raster grid"
    );

    let mut img = RgbaImage::new(layout.width, layout.height);
    for (index, symbol) in symbols.iter().enumerate() {
        let (x0, y0) = layout.origin(index);
        fill_block(&mut img, x0, y0, Rgba(symbol.color().to_rgba()));
    }
    Ok(img)
}

fn fill_block(img: &mut RgbaImage, x0: u32, y0: u32, color: Rgba<u8>) {
    for y in y0..y0 + BLOCK_SIZE {
        for x in x0..x0 + BLOCK_SIZE {
            img.put_pixel(x, y, color);
        }
    }
}

/// Render `symbols` and write them to `out` as a PNG.
///
/// The PNG is fully built in memory before the first byte reaches `out`.
pub fn encode_png<W: Write>(symbols: &[Symbol], blocks_per_row: usize, mut out: W) -> Result<()> {
    let img = render_raster(symbols, blocks_per_row)?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;

    out.write_all(&png)?;
    Ok(())
}

/// Render `symbols` as an SVG document, one `<rect>` line per symbol.
///
/// Padding blocks are not emitted.
pub fn render_svg(symbols: &[Symbol], blocks_per_row: usize) -> Result<String> {
    if symbols.is_empty() {
        return Err(HexlishError::EmptyStream);
    }
    let layout = GridLayout::new(symbols.len(), blocks_per_row)?;
    tracing::debug!(
        symbols = symbols.len(),
        blocks_per_row = layout.blocks_per_row,
        padding = layout.padding(),
        width = layout.width,
        height = layout.height,
        "rendering svg grid"
    );

    let mut out = String::with_capacity(160 + symbols.len() * 72);
    out.push_str("<?xml version=\"1.0\"?>\n");
    out.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\"\n     xmlns=\"http://www.w3.org/2000/svg\"\n     xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n",
        layout.width, layout.height
    ));

    for (index, symbol) in symbols.iter().enumerate() {
        let (x, y) = layout.origin(index);
        out.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{BLOCK_SIZE}\" height=\"{BLOCK_SIZE}\" style=\"fill:{}\" />\n",
            symbol.color()
        ));
    }

    out.push_str("</svg>\n");
    Ok(out)
}
