//! Fuzz target: every decoder over arbitrary text.
//!
//! Decoders may reject input but must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_core::{apply, Mode, Scheme, TransformOptions};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let scheme = Scheme::ALL[usize::from(selector) % Scheme::ALL.len()];
    let _ = apply(Mode::Decode, scheme, text, &TransformOptions::default());
});
