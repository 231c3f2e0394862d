use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A named, fixed text transform supported by the registry.
///
/// Serialized as its wire identifier (e.g. `"base64url"`, `"md5-hash"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[non_exhaustive]
pub enum Scheme {
    Base64,
    Base64Url,
    Base32,
    Base16,
    Url,
    UrlComponent,
    Html,
    HtmlFull,
    QuotedPrintable,
    Punycode,
    Uuencode,
    Hex,
    Hex0x,
    Binary,
    Octal,
    Decimal,
    Ascii,
    Unicode,
    UnicodeEscape,
    Utf8,
    Utf16,
    A1z26,
    Nato,
    Morse,
    Reverse,
    Rot13,
    Rot5,
    Rot47,
    Caesar,
    Atbash,
    Vigenere,
    Bacon,
    Xor,
    Md5Hash,
    Sha1Hash,
    Sha256Hash,
    Sha512Hash,
}

/// Grouping used when listing schemes to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Category {
    /// URL, Base64, HTML and other transport encodings.
    Web,
    /// Hex, binary, octal and decimal renderings.
    Numeric,
    /// Unicode renderings and spelling alphabets.
    Text,
    /// Classical ciphers.
    Cipher,
    /// One-way digests.
    Hash,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: &'static [Category] =
        &[Category::Web, Category::Numeric, Category::Text, Category::Cipher, Category::Hash];

    /// Wire identifier of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Numeric => "numeric",
            Category::Text => "text",
            Category::Cipher => "cipher",
            Category::Hash => "hash",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Category::Web => "Web & Data",
            Category::Numeric => "Numeric",
            Category::Text => "Text & Unicode",
            Category::Cipher => "Ciphers",
            Category::Hash => "Hashes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Wire identifier of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Scheme {
    /// Every supported scheme, in catalogue order.
    pub const ALL: &'static [Scheme] = &[
        Scheme::Base64,
        Scheme::Base64Url,
        Scheme::Base32,
        Scheme::Base16,
        Scheme::Url,
        Scheme::UrlComponent,
        Scheme::Html,
        Scheme::HtmlFull,
        Scheme::QuotedPrintable,
        Scheme::Punycode,
        Scheme::Uuencode,
        Scheme::Hex,
        Scheme::Hex0x,
        Scheme::Binary,
        Scheme::Octal,
        Scheme::Decimal,
        Scheme::Ascii,
        Scheme::Unicode,
        Scheme::UnicodeEscape,
        Scheme::Utf8,
        Scheme::Utf16,
        Scheme::A1z26,
        Scheme::Nato,
        Scheme::Morse,
        Scheme::Reverse,
        Scheme::Rot13,
        Scheme::Rot5,
        Scheme::Rot47,
        Scheme::Caesar,
        Scheme::Atbash,
        Scheme::Vigenere,
        Scheme::Bacon,
        Scheme::Xor,
        Scheme::Md5Hash,
        Scheme::Sha1Hash,
        Scheme::Sha256Hash,
        Scheme::Sha512Hash,
    ];

    /// Wire identifier (e.g. `"hex-0x"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scheme::Base64 => "base64",
            Scheme::Base64Url => "base64url",
            Scheme::Base32 => "base32",
            Scheme::Base16 => "base16",
            Scheme::Url => "url",
            Scheme::UrlComponent => "url-component",
            Scheme::Html => "html",
            Scheme::HtmlFull => "html-full",
            Scheme::QuotedPrintable => "quoted-printable",
            Scheme::Punycode => "punycode",
            Scheme::Uuencode => "uuencode",
            Scheme::Hex => "hex",
            Scheme::Hex0x => "hex-0x",
            Scheme::Binary => "binary",
            Scheme::Octal => "octal",
            Scheme::Decimal => "decimal",
            Scheme::Ascii => "ascii",
            Scheme::Unicode => "unicode",
            Scheme::UnicodeEscape => "unicode-escape",
            Scheme::Utf8 => "utf8",
            Scheme::Utf16 => "utf16",
            Scheme::A1z26 => "a1z26",
            Scheme::Nato => "nato",
            Scheme::Morse => "morse",
            Scheme::Reverse => "reverse",
            Scheme::Rot13 => "rot13",
            Scheme::Rot5 => "rot5",
            Scheme::Rot47 => "rot47",
            Scheme::Caesar => "caesar",
            Scheme::Atbash => "atbash",
            Scheme::Vigenere => "vigenere",
            Scheme::Bacon => "bacon",
            Scheme::Xor => "xor",
            Scheme::Md5Hash => "md5-hash",
            Scheme::Sha1Hash => "sha1-hash",
            Scheme::Sha256Hash => "sha256-hash",
            Scheme::Sha512Hash => "sha512-hash",
        }
    }

    /// Display name shown in listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Scheme::Base64 => "Base64",
            Scheme::Base64Url => "Base64 URL",
            Scheme::Base32 => "Base32",
            Scheme::Base16 => "Base16",
            Scheme::Url => "URL Encode",
            Scheme::UrlComponent => "URL Component",
            Scheme::Html => "HTML Entities",
            Scheme::HtmlFull => "HTML Full",
            Scheme::QuotedPrintable => "Quoted-Printable",
            Scheme::Punycode => "Punycode",
            Scheme::Uuencode => "UUencode",
            Scheme::Hex => "Hexadecimal",
            Scheme::Hex0x => "Hex (0x prefix)",
            Scheme::Binary => "Binary",
            Scheme::Octal => "Octal",
            Scheme::Decimal => "Decimal",
            Scheme::Ascii => "ASCII Codes",
            Scheme::Unicode => "Unicode",
            Scheme::UnicodeEscape => "Unicode Escape",
            Scheme::Utf8 => "UTF-8 Bytes",
            Scheme::Utf16 => "UTF-16",
            Scheme::A1z26 => "A1Z26",
            Scheme::Nato => "NATO Phonetic",
            Scheme::Morse => "Morse Code",
            Scheme::Reverse => "Reverse",
            Scheme::Rot13 => "ROT13",
            Scheme::Rot5 => "ROT5",
            Scheme::Rot47 => "ROT47",
            Scheme::Caesar => "Caesar Cipher",
            Scheme::Atbash => "Atbash",
            Scheme::Vigenere => "Vigenère",
            Scheme::Bacon => "Bacon Cipher",
            Scheme::Xor => "XOR",
            Scheme::Md5Hash => "MD5",
            Scheme::Sha1Hash => "SHA-1",
            Scheme::Sha256Hash => "SHA-256",
            Scheme::Sha512Hash => "SHA-512",
        }
    }

    /// One-line description shown in listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Scheme::Base64 => "Standard Base64 encoding (RFC 4648)",
            Scheme::Base64Url => "URL-safe Base64 (no padding)",
            Scheme::Base32 => "Base32 encoding (RFC 4648)",
            Scheme::Base16 => "Base16/Hex encoding (RFC 4648)",
            Scheme::Url => "Percent-encoding for URLs",
            Scheme::UrlComponent => "Full URL component encoding",
            Scheme::Html => "Common HTML entity encoding",
            Scheme::HtmlFull => "All characters to HTML entities",
            Scheme::QuotedPrintable => "Email MIME encoding",
            Scheme::Punycode => "International domain names",
            Scheme::Uuencode => "Unix-to-Unix encoding",
            Scheme::Hex => "Base-16 with separators",
            Scheme::Hex0x => "Hexadecimal with 0x prefix",
            Scheme::Binary => "Base-2 representation",
            Scheme::Octal => "Base-8 representation",
            Scheme::Decimal => "Decimal character codes",
            Scheme::Ascii => "Character code points",
            Scheme::Unicode => "U+XXXX format",
            Scheme::UnicodeEscape => "\\uXXXX format",
            Scheme::Utf8 => "UTF-8 byte sequence",
            Scheme::Utf16 => "UTF-16 code units",
            Scheme::A1z26 => "A=1, B=2, ..., Z=26",
            Scheme::Nato => "Alpha, Bravo, Charlie...",
            Scheme::Morse => "Dots and dashes",
            Scheme::Reverse => "Reverse string",
            Scheme::Rot13 => "Rotate letters by 13 positions",
            Scheme::Rot5 => "Rotate digits by 5",
            Scheme::Rot47 => "Rotate ASCII 33-126",
            Scheme::Caesar => "Shift cipher (configurable)",
            Scheme::Atbash => "Reverse alphabet (A<->Z)",
            Scheme::Vigenere => "Polyalphabetic cipher",
            Scheme::Bacon => "Binary alphabet cipher",
            Scheme::Xor => "Repeating-key XOR, hex output",
            Scheme::Md5Hash => "MD5 hash (one-way)",
            Scheme::Sha1Hash => "SHA-1 hash (one-way)",
            Scheme::Sha256Hash => "SHA-256 hash (one-way)",
            Scheme::Sha512Hash => "SHA-512 hash (one-way)",
        }
    }

    /// Listing category.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Scheme::Base64
            | Scheme::Base64Url
            | Scheme::Base32
            | Scheme::Base16
            | Scheme::Url
            | Scheme::UrlComponent
            | Scheme::Html
            | Scheme::HtmlFull
            | Scheme::QuotedPrintable
            | Scheme::Punycode
            | Scheme::Uuencode => Category::Web,
            Scheme::Hex
            | Scheme::Hex0x
            | Scheme::Binary
            | Scheme::Octal
            | Scheme::Decimal
            | Scheme::Ascii => Category::Numeric,
            Scheme::Unicode
            | Scheme::UnicodeEscape
            | Scheme::Utf8
            | Scheme::Utf16
            | Scheme::A1z26
            | Scheme::Nato
            | Scheme::Morse
            | Scheme::Reverse => Category::Text,
            Scheme::Rot13
            | Scheme::Rot5
            | Scheme::Rot47
            | Scheme::Caesar
            | Scheme::Atbash
            | Scheme::Vigenere
            | Scheme::Bacon
            | Scheme::Xor => Category::Cipher,
            Scheme::Md5Hash | Scheme::Sha1Hash | Scheme::Sha256Hash | Scheme::Sha512Hash => {
                Category::Hash
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = CodecError;

    /// Parses a wire identifier. Matching is exact after trimming.
    ///
    /// # Errors
    /// Returns [`CodecError::UnknownScheme`] if no scheme has this identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Scheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.as_str() == id)
            .ok_or_else(|| CodecError::UnknownScheme(s.to_owned()))
    }
}

impl TryFrom<String> for Scheme {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Scheme> for &'static str {
    fn from(scheme: Scheme) -> Self {
        scheme.as_str()
    }
}
