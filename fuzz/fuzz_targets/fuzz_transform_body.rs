//! Fuzz target: JSON deserialization of `/encode` and `/chain` bodies.
//!
//! Arbitrary bytes fed to the extractors' parsers must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_gateway::routes::{ChainBody, TransformBody};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<TransformBody>(data);
    let _ = serde_json::from_slice::<ChainBody>(data);
});
