#![no_main]

use arbitrary::Arbitrary;
use hexlish::{hexlish_encode, EncodeOptions, ImageFormat};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    blocks_per_row: usize,
    svg: bool,
    text: String,
}

fuzz_target!(|input: FuzzInput| {
    // Limit size to prevent timeouts
    if input.text.len() > 4096 {
        return;
    }

    let opts = EncodeOptions {
        blocks_per_row: input.blocks_per_row,
        format: if input.svg {
            ImageFormat::Svg
        } else {
            ImageFormat::Png
        },
    };

    // Arbitrary text mostly fails with UnknownSymbol; it must never panic
    let _ = hexlish_encode(&input.text, &opts);
});
