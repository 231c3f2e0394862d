use serde::{Deserialize, Serialize};

/// Default Caesar shift.
pub const DEFAULT_SHIFT: i64 = 3;

/// Default key for Vigenère and XOR.
pub const DEFAULT_KEY: &str = "KEY";

/// Default token separator for numeric renderings.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Named parameters modifying a scheme's behaviour.
///
/// Missing keys take their defaults; unknown keys are ignored so clients can
/// send one options bag for every scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Caesar shift. Negative values shift left.
    pub shift: i64,
    /// Vigenère / XOR key.
    pub key: String,
    /// Separator placed between tokens of numeric renderings.
    pub separator: String,
}

impl TransformOptions {
    /// Options with every key at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the Caesar shift.
    #[must_use]
    pub fn with_shift(mut self, shift: i64) -> Self {
        self.shift = shift;
        self
    }

    /// Replace the cipher key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Replace the token separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            key: DEFAULT_KEY.to_owned(),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let opts: TransformOptions = match serde_json::from_str(r#"{"shift": 7}"#) {
            Ok(o) => o,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(opts.shift, 7);
        assert_eq!(opts.key, DEFAULT_KEY);
        assert_eq!(opts.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let opts: TransformOptions = match serde_json::from_str(r#"{"rails": 3, "key": "LEMON"}"#) {
            Ok(o) => o,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(opts.key, "LEMON");
        assert_eq!(opts.shift, DEFAULT_SHIFT);
    }

    #[test]
    fn builders_replace_single_fields() {
        let opts = TransformOptions::new().with_shift(-1).with_separator(",");
        assert_eq!(opts.shift, -1);
        assert_eq!(opts.separator, ",");
        assert_eq!(opts.key, DEFAULT_KEY);
    }
}
