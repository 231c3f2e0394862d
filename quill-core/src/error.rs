use crate::scheme::Scheme;

/// Errors produced by the `quill-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The identifier does not name any supported scheme.
    #[error("unknown encoding '{0}'")]
    UnknownScheme(String),

    /// Decode was requested for a one-way scheme.
    #[error("{0} is a one-way hash and cannot be decoded")]
    NotReversible(Scheme),

    /// Decode input does not parse under the scheme's expected shape.
    #[error("malformed {scheme} input: {reason}")]
    MalformedInput { scheme: Scheme, reason: String },

    /// The output could grow past the caller's size limit.
    #[error("{scheme} output could exceed the {limit}-byte limit")]
    OutputTooLarge { scheme: Scheme, limit: usize },

    /// A step of a chained transform failed.
    #[error("chain step {index} failed: {source}")]
    ChainStep {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Shorthand for [`CodecError::MalformedInput`].
    pub(crate) fn malformed(scheme: Scheme, reason: impl Into<String>) -> Self {
        Self::MalformedInput { scheme, reason: reason.into() }
    }
}
