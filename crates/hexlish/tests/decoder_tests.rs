use hexlish::*;
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

fn to_png(img: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .expect("PNG encoding should succeed");
    out
}

fn rgb_png(width: u32, height: u32, fill: [u8; 3]) -> Vec<u8> {
    let pixels: Vec<u8> = (0..width * height).flat_map(|_| fill).collect();
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
        .expect("PNG encoding should succeed");
    out
}

#[test]
fn test_decode_rgb_png() {
    // Three-channel PNGs decode the same as RGBA ones
    let png = rgb_png(2 * BLOCK_SIZE, BLOCK_SIZE, [75, 114, 110]);
    assert_eq!(hexlish_decode(&png, ImageFormat::Png).unwrap(), "SS\n");
}

#[test]
fn test_decode_rgb_png_with_black_padding() {
    let mut img = RgbaImage::from_pixel(3 * BLOCK_SIZE, BLOCK_SIZE, Rgba([0, 0, 0, 255]));
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            img.put_pixel(x, y, Rgba(Symbol::M.color().to_rgba()));
        }
    }
    assert_eq!(decode_png(&to_png(&img)).unwrap(), vec![Symbol::M]);
}

#[test]
fn test_decode_samples_top_left_only() {
    let mut img = render_raster(&[Symbol::O, Symbol::N], 0).unwrap();
    // Scribble inside the first block away from its corner
    img.put_pixel(3, 4, Rgba([1, 2, 3, 255]));
    assert_eq!(decode_raster(&img).unwrap(), vec![Symbol::O, Symbol::N]);
}

#[test]
fn test_decode_multi_row_order() {
    let symbols = parse_stream("VUTSRPONMLJIHECA").unwrap();
    let img = render_raster(&symbols, 5).unwrap();
    assert_eq!(img.dimensions(), (5 * BLOCK_SIZE, 4 * BLOCK_SIZE));
    assert_eq!(decode_raster(&img).unwrap(), symbols);
}

#[test]
fn test_decode_interior_padding_rejected() {
    let mut img = render_raster(&[Symbol::A, Symbol::C, Symbol::E], 0).unwrap();
    for y in 0..BLOCK_SIZE {
        for x in BLOCK_SIZE..2 * BLOCK_SIZE {
            img.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }
    let result = decode_png(&to_png(&img));
    assert!(
        matches!(result, Err(HexlishError::MalformedImage(_))),
        "got {result:?}"
    );
}

#[test]
fn test_decode_unknown_color_reports_block() {
    let mut img = render_raster(&parse_stream("AAAA").unwrap(), 2).unwrap();
    img.put_pixel(0, BLOCK_SIZE, Rgba([209, 177, 134, 255]));
    match decode_png(&to_png(&img)) {
        Err(HexlishError::UnknownColor { index, color }) => {
            assert_eq!(index, 2);
            assert_eq!(color, Rgb::new(209, 177, 134));
        }
        other => panic!("expected UnknownColor, got {other:?}"),
    }
}

#[test]
fn test_decode_partial_block_png() {
    let png = rgb_png(BLOCK_SIZE * 2 + 1, BLOCK_SIZE, [209, 177, 135]);
    assert!(matches!(
        hexlish_decode(&png, ImageFormat::Png),
        Err(HexlishError::MalformedImage(_))
    ));
}

#[test]
fn test_decode_not_a_png() {
    assert!(matches!(
        hexlish_decode(b"definitely not a png", ImageFormat::Png),
        Err(HexlishError::Image(_))
    ));
}

#[test]
fn test_decode_svg_with_generator_comment() {
    let doc = "<?xml version=\"1.0\"?>\n\
<!-- Generated by SVGo -->\n\
<svg width=\"24\" height=\"8\"\n     xmlns=\"http://www.w3.org/2000/svg\" \n     xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n\
<rect x=\"0\" y=\"0\" width=\"8\" height=\"8\" style=\"fill:rgb(140,171,161)\"/>\n\
<rect x=\"8\" y=\"0\" width=\"8\" height=\"8\" style=\"fill:rgb(210,201,165)\"/>\n\
<rect x=\"16\" y=\"0\" width=\"8\" height=\"8\" style=\"fill:rgb(121,68,74)\"/>\n\
</svg>\n";
    assert_eq!(hexlish_decode(doc.as_bytes(), ImageFormat::Svg).unwrap(), "RPH\n");
}

#[test]
fn test_decode_svg_not_utf8() {
    assert!(matches!(
        hexlish_decode(&[0xff, 0xfe, b'<'], ImageFormat::Svg),
        Err(HexlishError::MalformedImage(_))
    ));
}

#[test]
fn test_decode_empty_svg() {
    let doc = "<svg width=\"0\" height=\"0\"></svg>";
    assert_eq!(hexlish_decode(doc.as_bytes(), ImageFormat::Svg).unwrap(), "\n");
}
