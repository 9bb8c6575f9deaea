use crate::error::PamError;
use crate::pixel::{OUTPUT_BYTES_PER_PIXEL, TupleType};

/// A validated PAM header. Every numeric field is non-zero and `maxval == 255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub width: u16,
    pub height: u16,
    /// Required to be present and non-zero, otherwise unused.
    pub depth: u16,
    pub maxval: u16,
    pub tuple_type: TupleType,
}

impl Header {
    /// Bytes per row of the file payload.
    pub fn input_stride(&self) -> usize {
        usize::from(self.width) * self.tuple_type.bytes_per_tuple()
    }

    /// Bytes per row of the decoded bitmap.
    pub fn output_stride(&self) -> usize {
        usize::from(self.width) * OUTPUT_BYTES_PER_PIXEL
    }

    /// Exact payload length the file must carry after `ENDHDR`.
    pub fn payload_len(&self) -> Result<u64, PamError> {
        (self.tuple_type.bytes_per_tuple() as u64)
            .checked_mul(u64::from(self.width))
            .and_then(|v| v.checked_mul(u64::from(self.height)))
            .ok_or(self.too_large())
    }

    /// Size of the decoded pixel buffer in bytes.
    pub fn output_len(&self) -> Result<usize, PamError> {
        self.output_stride()
            .checked_mul(usize::from(self.height))
            .ok_or(self.too_large())
    }

    fn too_large(&self) -> PamError {
        PamError::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        }
    }
}

/// Names a header field, for [`PamError::MissingHeaderField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Width,
    Height,
    Depth,
    Maxval,
    TupleType,
}

impl HeaderField {
    /// The keyword introducing this field in the header.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Width => "WIDTH",
            Self::Height => "HEIGHT",
            Self::Depth => "DEPTH",
            Self::Maxval => "MAXVAL",
            Self::TupleType => "TUPLTYPE",
        }
    }
}

impl core::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.keyword())
    }
}
