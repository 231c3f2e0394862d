//! The scheme registry: identifier to transform functions.
//!
//! The registry is a total `match` over [`Scheme`], so adding a variant
//! without wiring its functions is a compile error.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::options::TransformOptions;
use crate::scheme::{Mode, Scheme};
use crate::transforms::{base, cipher, hash, numeric, punycode, text, web};

/// Signature shared by every encode and decode function.
pub type TransformFn = fn(&str, &TransformOptions) -> Result<String, CodecError>;

/// The functions implementing one scheme.
///
/// One-way schemes have no `decode`.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    pub encode: TransformFn,
    pub decode: Option<TransformFn>,
}

impl Codec {
    const fn both(encode: TransformFn, decode: TransformFn) -> Self {
        Self { encode, decode: Some(decode) }
    }

    const fn symmetric(f: TransformFn) -> Self {
        Self { encode: f, decode: Some(f) }
    }

    const fn one_way(encode: TransformFn) -> Self {
        Self { encode, decode: None }
    }
}

impl Scheme {
    /// The functions implementing this scheme.
    #[must_use]
    pub fn codec(self) -> Codec {
        match self {
            Scheme::Base64 => Codec::both(base::base64_encode, base::base64_decode),
            Scheme::Base64Url => Codec::both(base::base64url_encode, base::base64url_decode),
            Scheme::Base32 => Codec::both(base::base32_encode, base::base32_decode),
            Scheme::Base16 => Codec::both(base::base16_encode, base::base16_decode),
            Scheme::Url => Codec::both(web::url_encode, web::url_decode),
            Scheme::UrlComponent => {
                Codec::both(web::url_component_encode, web::url_component_decode)
            }
            Scheme::Html => Codec::both(web::html_encode, web::html_decode),
            Scheme::HtmlFull => Codec::both(web::html_full_encode, web::html_decode),
            Scheme::QuotedPrintable => {
                Codec::both(web::quoted_printable_encode, web::quoted_printable_decode)
            }
            Scheme::Punycode => Codec::both(punycode::punycode_encode, punycode::punycode_decode),
            Scheme::Uuencode => Codec::both(base::uuencode_encode, base::uuencode_decode),
            Scheme::Hex => Codec::both(numeric::hex_encode, numeric::hex_decode),
            Scheme::Hex0x => Codec::both(numeric::hex0x_encode, numeric::hex0x_decode),
            Scheme::Binary => Codec::both(numeric::binary_encode, numeric::binary_decode),
            Scheme::Octal => Codec::both(numeric::octal_encode, numeric::octal_decode),
            Scheme::Decimal => Codec::both(numeric::decimal_encode, numeric::decimal_decode),
            Scheme::Ascii => Codec::both(numeric::decimal_encode, numeric::ascii_decode),
            Scheme::Unicode => Codec::both(numeric::unicode_encode, numeric::unicode_decode),
            Scheme::UnicodeEscape => {
                Codec::both(numeric::unicode_escape_encode, numeric::unicode_escape_decode)
            }
            Scheme::Utf8 => Codec::both(numeric::utf8_encode, numeric::utf8_decode),
            Scheme::Utf16 => Codec::both(numeric::utf16_encode, numeric::utf16_decode),
            Scheme::A1z26 => Codec::both(text::a1z26_encode, text::a1z26_decode),
            Scheme::Nato => Codec::both(text::nato_encode, text::nato_decode),
            Scheme::Morse => Codec::both(text::morse_encode, text::morse_decode),
            Scheme::Reverse => Codec::symmetric(text::reverse),
            Scheme::Rot13 => Codec::symmetric(cipher::rot13),
            Scheme::Rot5 => Codec::symmetric(cipher::rot5),
            Scheme::Rot47 => Codec::symmetric(cipher::rot47),
            Scheme::Caesar => Codec::both(cipher::caesar_encode, cipher::caesar_decode),
            Scheme::Atbash => Codec::symmetric(cipher::atbash),
            Scheme::Vigenere => Codec::both(cipher::vigenere_encode, cipher::vigenere_decode),
            Scheme::Bacon => Codec::both(cipher::bacon_encode, cipher::bacon_decode),
            Scheme::Xor => Codec::both(cipher::xor_encode, cipher::xor_decode),
            Scheme::Md5Hash => Codec::one_way(hash::md5_digest),
            Scheme::Sha1Hash => Codec::one_way(hash::sha1_digest),
            Scheme::Sha256Hash => Codec::one_way(hash::sha256_digest),
            Scheme::Sha512Hash => Codec::one_way(hash::sha512_digest),
        }
    }

    /// Whether this scheme has a decode direction.
    #[must_use]
    pub fn is_reversible(self) -> bool {
        self.codec().decode.is_some()
    }

    /// Worst-case output bytes per input byte, excluding separators.
    fn growth(self, mode: Mode) -> usize {
        match (mode, self) {
            (Mode::Decode, Scheme::Punycode) => 4,
            (Mode::Decode, Scheme::Html | Scheme::HtmlFull) => 2,
            (Mode::Decode, _) => 1,
            (
                Mode::Encode,
                Scheme::Md5Hash | Scheme::Sha1Hash | Scheme::Sha256Hash | Scheme::Sha512Hash,
            ) => 0,
            (
                Mode::Encode,
                Scheme::Reverse
                | Scheme::Rot13
                | Scheme::Rot5
                | Scheme::Rot47
                | Scheme::Caesar
                | Scheme::Atbash
                | Scheme::Vigenere,
            ) => 1,
            (
                Mode::Encode,
                Scheme::Base64
                | Scheme::Base64Url
                | Scheme::Base32
                | Scheme::Base16
                | Scheme::Uuencode
                | Scheme::Xor
                | Scheme::Hex
                | Scheme::Utf8,
            ) => 2,
            (
                Mode::Encode,
                Scheme::Url
                | Scheme::UrlComponent
                | Scheme::QuotedPrintable
                | Scheme::Octal
                | Scheme::Decimal
                | Scheme::Ascii,
            ) => 3,
            (Mode::Encode, Scheme::Hex0x | Scheme::Utf16) => 4,
            (Mode::Encode, Scheme::Html | Scheme::HtmlFull | Scheme::Unicode | Scheme::UnicodeEscape) => {
                6
            }
            (Mode::Encode, Scheme::Binary | Scheme::Punycode | Scheme::A1z26 | Scheme::Bacon) => 8,
            (Mode::Encode, Scheme::Nato | Scheme::Morse) => 16,
        }
    }

    /// Whether encode output places the separator option between tokens.
    fn uses_separator(self) -> bool {
        matches!(
            self,
            Scheme::Hex
                | Scheme::Hex0x
                | Scheme::Binary
                | Scheme::Octal
                | Scheme::Decimal
                | Scheme::Ascii
                | Scheme::Unicode
                | Scheme::Utf8
                | Scheme::Utf16
        )
    }
}

/// Fixed allowance on top of the per-byte bound: padding, hash digests.
const BOUND_SLACK: usize = 128;

/// Upper bound on the byte length of `apply(mode, scheme, text, options)`.
///
/// Computed from the input length alone, so it can reject a transform
/// before any output is allocated.
#[must_use]
pub fn output_bound(mode: Mode, scheme: Scheme, text: &str, options: &TransformOptions) -> usize {
    let separator = if mode == Mode::Encode && scheme.uses_separator() {
        options.separator.len()
    } else {
        0
    };
    text.len()
        .saturating_mul(scheme.growth(mode).saturating_add(separator))
        .saturating_add(BOUND_SLACK)
}

/// Like [`apply`], but refuses to run when the output could exceed
/// `max_output_bytes`.
///
/// # Errors
/// [`CodecError::OutputTooLarge`] when [`output_bound`] is over the limit,
/// otherwise as [`apply`].
pub fn apply_bounded(
    mode: Mode,
    scheme: Scheme,
    text: &str,
    options: &TransformOptions,
    max_output_bytes: usize,
) -> Result<String, CodecError> {
    if output_bound(mode, scheme, text, options) > max_output_bytes {
        return Err(CodecError::OutputTooLarge { scheme, limit: max_output_bytes });
    }
    apply(mode, scheme, text, options)
}

/// Runs `scheme` in `mode` over `text`.
///
/// # Errors
/// [`CodecError::NotReversible`] when decoding a one-way scheme, or whatever
/// the transform itself reports (usually [`CodecError::MalformedInput`]).
pub fn apply(
    mode: Mode,
    scheme: Scheme,
    text: &str,
    options: &TransformOptions,
) -> Result<String, CodecError> {
    let codec = scheme.codec();
    let f = match mode {
        Mode::Encode => codec.encode,
        Mode::Decode => codec.decode.ok_or(CodecError::NotReversible(scheme))?,
    };
    f(text, options)
}

/// A single transform invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub data: String,
    pub encoding: Scheme,
    pub mode: Mode,
    #[serde(default)]
    pub options: TransformOptions,
}

/// Output of [`transform`]. Lengths count `char`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    pub output: String,
    pub input_length: usize,
    pub output_length: usize,
}

impl TransformResult {
    fn new(input: &str, output: String) -> Self {
        Self {
            input_length: input.chars().count(),
            output_length: output.chars().count(),
            output,
        }
    }
}

/// Applies a request and attaches length metadata.
///
/// # Errors
/// See [`apply_bounded`].
pub fn transform(
    request: &TransformRequest,
    max_output_bytes: usize,
) -> Result<TransformResult, CodecError> {
    let output = apply_bounded(
        request.mode,
        request.encoding,
        &request.data,
        &request.options,
        max_output_bytes,
    )?;
    Ok(TransformResult::new(&request.data, output))
}

/// One step of a chained transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    pub encoding: Scheme,
    pub mode: Mode,
    #[serde(default)]
    pub options: TransformOptions,
}

/// Intermediate output of one chain step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutput {
    pub encoding: Scheme,
    pub mode: Mode,
    pub output: String,
}

/// Output of [`chain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainResult {
    pub output: String,
    pub steps: Vec<StepOutput>,
    pub input_length: usize,
    pub output_length: usize,
}

/// Applies `steps` in order, feeding each output into the next step.
///
/// `max_output_bytes` caps the combined size of every intermediate output,
/// since all of them are returned. An empty step list returns `text`
/// unchanged.
///
/// # Errors
/// [`CodecError::ChainStep`] wrapping the first failure, with its
/// zero-based index. A step whose output could push the retained total
/// past the cap fails with [`CodecError::OutputTooLarge`] before it runs.
pub fn chain(
    text: &str,
    steps: &[ChainStep],
    max_output_bytes: usize,
) -> Result<ChainResult, CodecError> {
    let mut current = text.to_owned();
    let mut outputs = Vec::with_capacity(steps.len());
    let mut retained: usize = 0;
    for (index, step) in steps.iter().enumerate() {
        let remaining = max_output_bytes.saturating_sub(retained);
        current = apply_bounded(step.mode, step.encoding, &current, &step.options, remaining)
            .map_err(|e| match e {
                CodecError::OutputTooLarge { scheme, .. } => {
                    CodecError::OutputTooLarge { scheme, limit: max_output_bytes }
                }
                other => other,
            })
            .map_err(|e| CodecError::ChainStep { index, source: Box::new(e) })?;
        retained = retained.saturating_add(current.len());
        outputs.push(StepOutput {
            encoding: step.encoding,
            mode: step.mode,
            output: current.clone(),
        });
    }
    Ok(ChainResult {
        input_length: text.chars().count(),
        output_length: current.chars().count(),
        output: current,
        steps: outputs,
    })
}
