//! Stateless transform functions, grouped by family.
//!
//! Every function has the [`TransformFn`](crate::registry::TransformFn)
//! signature so the registry can store them as plain function pointers.

pub(crate) mod base;
pub(crate) mod cipher;
pub(crate) mod hash;
pub(crate) mod numeric;
pub(crate) mod punycode;
pub(crate) mod text;
pub(crate) mod web;

use crate::{CodecError, Scheme};

/// Converts decoded bytes to a `String`, reporting invalid UTF-8 against
/// `scheme`.
pub(crate) fn utf8_string(scheme: Scheme, bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|e| CodecError::malformed(scheme, e.to_string()))
}

/// Splits decoder input on runs of whitespace or commas, skipping empties.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_whitespace_and_commas() {
        let got: Vec<&str> = tokens("  41 42,43\t\n44,, 45 ").collect();
        assert_eq!(got, ["41", "42", "43", "44", "45"]);
    }

    #[test]
    fn tokens_of_blank_input_is_empty() {
        assert_eq!(tokens(" \n ").count(), 0);
    }
}
