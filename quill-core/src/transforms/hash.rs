//! One-way digests, rendered as lowercase hex of the UTF-8 input.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::{CodecError, TransformOptions};

fn hex_digest<D: Digest>(text: &str) -> String {
    hex::encode(D::digest(text.as_bytes()))
}

pub(crate) fn md5_digest(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(hex_digest::<Md5>(text))
}

pub(crate) fn sha1_digest(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(hex_digest::<Sha1>(text))
}

pub(crate) fn sha256_digest(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(hex_digest::<Sha256>(text))
}

pub(crate) fn sha512_digest(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(hex_digest::<Sha512>(text))
}
