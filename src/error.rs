use alloc::string::String;

use crate::header::HeaderField;

/// Why a PAM decode failed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PamError {
    #[error("cannot open or read source: {0}")]
    FileOpen(#[from] std::io::Error),

    #[error("not a PAM file (first line {found:?}, expected \"P7\")")]
    MagicMismatch { found: String },

    #[error("unrecognized header line {line:?}")]
    HeaderSyntax { line: String },

    #[error("invalid numeric value in header line {line:?}")]
    HeaderValue { line: String },

    #[error("unsupported tuple type {tuple_type:?} (only RGB and RGB_ALPHA)")]
    UnsupportedTupleType { tuple_type: String },

    #[error("end of input reached before ENDHDR")]
    UnexpectedEof,

    #[error("missing header field {0}")]
    MissingHeaderField(HeaderField),

    #[error("unsupported MAXVAL {0} (only 255)")]
    UnsupportedMaxval(u16),

    #[error("payload size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u16, height: u16 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

/// A [`PamError`] tagged with the label of the source it came from.
#[derive(Debug, thiserror::Error)]
#[error("{label}: {kind}")]
pub struct DecodeError {
    label: String,
    #[source]
    kind: PamError,
}

impl DecodeError {
    pub(crate) fn new(label: &str, kind: PamError) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    /// Diagnostic label of the failed source (usually a file path).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The failure cause.
    pub fn kind(&self) -> &PamError {
        &self.kind
    }

    pub fn into_kind(self) -> PamError {
        self.kind
    }
}
