use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::header::Header;
use crate::pixel::OUTPUT_BYTES_PER_PIXEL;

/// Decoded image in the canonical layout: 4 bytes per pixel ordered
/// B, G, R, A (a little-endian `0xAARRGGBB` word), rows packed at
/// `stride = width * 4` with no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Vec<u8>,
    header: Header,
    pub width: u16,
    pub height: u16,
    /// Bytes per row. Always `width * 4`, whatever the source tuple type.
    pub stride: usize,
}

impl Bitmap {
    pub(crate) fn new(header: Header, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), header.output_stride() * usize::from(header.height));
        Self {
            pixels,
            width: header.width,
            height: header.height,
            stride: header.output_stride(),
            header,
        }
    }

    /// Access the pixel data (`stride * height` bytes).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The validated header this bitmap was decoded from.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// `[b, g, r, a]` at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = usize::from(y) * self.stride + usize::from(x) * OUTPUT_BYTES_PER_PIXEL;
        let px = self.pixels.get(off..off + OUTPUT_BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(self.stride)
    }

    /// Reinterpret pixel data as typed BGRA pixels.
    #[cfg(feature = "rgb")]
    pub fn as_bgra(&self) -> &[rgb::alt::BGRA<u8>] {
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of BGRA pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::alt::BGRA<u8>> {
        imgref::ImgRef::new(
            self.as_bgra(),
            usize::from(self.width),
            usize::from(self.height),
        )
    }

    /// Convert to an [`imgref::ImgVec`] of BGRA pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::alt::BGRA<u8>> {
        imgref::ImgVec::new(
            self.as_bgra().to_vec(),
            usize::from(self.width),
            usize::from(self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::TupleType;
    use alloc::vec;

    fn bitmap() -> Bitmap {
        let header = Header {
            width: 2,
            height: 2,
            depth: 4,
            maxval: 255,
            tuple_type: TupleType::RgbAlpha,
        };
        Bitmap::new(header, (0u8..16).collect())
    }

    #[test]
    fn pixel_lookup() {
        let bmp = bitmap();
        assert_eq!(bmp.pixel(0, 0), Some([0, 1, 2, 3]));
        assert_eq!(bmp.pixel(1, 1), Some([12, 13, 14, 15]));
        assert_eq!(bmp.pixel(2, 0), None);
        assert_eq!(bmp.pixel(0, 2), None);
    }

    #[test]
    fn rows_follow_stride() {
        let bmp = bitmap();
        assert_eq!(bmp.stride, 8);
        let rows: Vec<&[u8]> = bmp.rows().collect();
        assert_eq!(rows, vec![&[0u8, 1, 2, 3, 4, 5, 6, 7][..], &[8, 9, 10, 11, 12, 13, 14, 15]]);
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn typed_view_is_bgra() {
        let bmp = bitmap();
        let px = bmp.as_bgra()[1];
        assert_eq!((px.b, px.g, px.r, px.a), (4, 5, 6, 7));
    }
}
