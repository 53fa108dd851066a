#![no_main]

use hexlish::{hexlish_decode, ImageFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Should never panic, regardless of input
    let _ = hexlish_decode(data, ImageFormat::Png);
    let _ = hexlish_decode(data, ImageFormat::Svg);
});
