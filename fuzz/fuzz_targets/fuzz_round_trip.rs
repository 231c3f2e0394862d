//! Fuzz target: encode then decode must restore the input.
//!
//! Covers the reversible schemes that keep every character.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_core::{apply, Mode, Scheme, TransformOptions};

const SKIPPED: &[Scheme] =
    &[Scheme::A1z26, Scheme::Nato, Scheme::Morse, Scheme::Bacon, Scheme::Punycode];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let scheme = Scheme::ALL[usize::from(selector) % Scheme::ALL.len()];
    if !scheme.is_reversible() || SKIPPED.contains(&scheme) {
        return;
    }
    let options = TransformOptions::default();
    let encoded = apply(Mode::Encode, scheme, text, &options).expect("encode must succeed");
    let decoded = apply(Mode::Decode, scheme, &encoded, &options).expect("decode of own output");
    assert_eq!(decoded, text, "{scheme} round-trip");
});
