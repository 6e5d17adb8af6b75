#![no_main]

use libfuzzer_sys::fuzz_target;
use pspblob::BlobCodec;

// Decoding arbitrary bytes must fail gracefully, never panic.
fuzz_target!(|data: &[u8]| {
    let _ = BlobCodec::new().decode(data);
});
