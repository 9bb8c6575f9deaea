/// Bytes per pixel of the canonical output bitmap (B, G, R, A).
pub const OUTPUT_BYTES_PER_PIXEL: usize = 4;

/// Per-pixel channel composition declared by `TUPLTYPE`.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TupleType {
    /// 3 channels, 8-bit R, G, B.
    Rgb,
    /// 4 channels, 8-bit, stored in output byte order.
    RgbAlpha,
}

impl TupleType {
    /// Parse a `TUPLTYPE` token. Matching is exact and case-sensitive.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"RGB" => Some(Self::Rgb),
            b"RGB_ALPHA" => Some(Self::RgbAlpha),
            _ => None,
        }
    }

    /// The header token for this tuple type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::RgbAlpha => "RGB_ALPHA",
        }
    }

    /// Bytes per tuple in the file payload.
    pub fn bytes_per_tuple(&self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::RgbAlpha => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::RgbAlpha)
    }
}

impl core::fmt::Display for TupleType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_exact() {
        assert_eq!(TupleType::from_token(b"RGB"), Some(TupleType::Rgb));
        assert_eq!(TupleType::from_token(b"RGB_ALPHA"), Some(TupleType::RgbAlpha));
        assert_eq!(TupleType::from_token(b"rgb"), None);
        assert_eq!(TupleType::from_token(b"RGB "), None);
        assert_eq!(TupleType::from_token(b"GRAYSCALE"), None);
    }

    #[test]
    fn tuple_sizes() {
        assert_eq!(TupleType::Rgb.bytes_per_tuple(), 3);
        assert_eq!(TupleType::RgbAlpha.bytes_per_tuple(), 4);
        assert_eq!(TupleType::RgbAlpha.to_string(), "RGB_ALPHA");
    }
}
