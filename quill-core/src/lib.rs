//! Core engine for the Quill encode/decode service.
//!
//! Defines the scheme catalogue, the options bag, and the registry that
//! maps each scheme to its pure text transforms. Nothing in this crate
//! holds state or performs I/O.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod options;
pub mod registry;
pub mod scheme;
mod transforms;

pub use error::CodecError;
pub use options::TransformOptions;
pub use registry::{
    apply, apply_bounded, chain, output_bound, transform, ChainResult, ChainStep, Codec,
    StepOutput, TransformFn, TransformRequest, TransformResult,
};
pub use scheme::{Category, Mode, Scheme};

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: Mode, id: &str, text: &str, options: &TransformOptions) -> String {
        let scheme = match id.parse::<Scheme>() {
            Ok(s) => s,
            Err(e) => panic!("{id} should parse: {e}"),
        };
        match apply(mode, scheme, text, options) {
            Ok(out) => out,
            Err(e) => panic!("{mode} {id} failed: {e}"),
        }
    }

    fn encode(id: &str, text: &str) -> String {
        run(Mode::Encode, id, text, &TransformOptions::default())
    }

    fn decode(id: &str, text: &str) -> String {
        run(Mode::Decode, id, text, &TransformOptions::default())
    }

    #[test]
    fn morse_hello() {
        assert_eq!(encode("morse", "HELLO"), ".... . .-.. .-.. ---");
    }

    #[test]
    fn caesar_with_shift_three() {
        let opts = TransformOptions::new().with_shift(3);
        assert_eq!(run(Mode::Encode, "caesar", "abc", &opts), "def");
        assert_eq!(run(Mode::Decode, "caesar", "def", &opts), "abc");
    }

    #[test]
    fn base64_hello_world() {
        assert_eq!(encode("base64", "Hello World"), "SGVsbG8gV29ybGQ=");
        assert_eq!(decode("base64", "SGVsbG8gV29ybGQ="), "Hello World");
    }

    #[test]
    fn vigenere_with_default_key() {
        assert_eq!(encode("vigenere", "test"), "diqd");
        assert_eq!(decode("vigenere", "diqd"), "test");
    }

    #[test]
    fn atbash_secret() {
        assert_eq!(encode("atbash", "SECRET"), "HVXIVG");
    }

    #[test]
    fn md5_encodes_but_never_decodes() {
        assert_eq!(encode("md5-hash", "abc"), "900150983cd24fb0d6963f7d28e17f72");
        let err = apply(Mode::Decode, Scheme::Md5Hash, "abc", &TransformOptions::default());
        assert!(matches!(err, Err(CodecError::NotReversible(_))), "got {err:?}");
    }

    #[test]
    fn unknown_identifier_fails_before_any_work() {
        assert!(matches!("base99".parse::<Scheme>(), Err(CodecError::UnknownScheme(_))));
    }

    #[test]
    fn malformed_decode_input_is_reported_against_scheme() {
        let err = apply(Mode::Decode, Scheme::Base16, "ABC", &TransformOptions::default());
        match err {
            Err(CodecError::MalformedInput { scheme, .. }) => assert_eq!(scheme, Scheme::Base16),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }
}
