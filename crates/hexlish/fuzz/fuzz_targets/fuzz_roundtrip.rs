#![no_main]

use arbitrary::Arbitrary;
use hexlish::{hexlish_decode, hexlish_encode, EncodeOptions, HexlishError, ImageFormat, Symbol};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    blocks_per_row: usize,
    svg: bool,
    digits: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    if input.digits.is_empty() || input.digits.len() > 2048 {
        return;
    }

    let text: String = input
        .digits
        .iter()
        .map(|d| Symbol::ALL[(d % 16) as usize].as_char())
        .collect();
    let format = if input.svg {
        ImageFormat::Svg
    } else {
        ImageFormat::Png
    };
    let opts = EncodeOptions {
        blocks_per_row: input.blocks_per_row,
        format,
    };

    let encoded = match hexlish_encode(&text, &opts) {
        Ok(encoded) => encoded,
        // Row widths past the canvas limit are refused, not wrapped
        Err(HexlishError::InvalidDimensions { .. }) => return,
        Err(e) => panic!("valid stream must encode: {e}"),
    };
    let decoded = hexlish_decode(&encoded, format).expect("encoder output must decode");

    assert_eq!(decoded, format!("{text}\n"));
});
