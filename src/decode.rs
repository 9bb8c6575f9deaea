use alloc::string::ToString;
use alloc::vec::Vec;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::{DecodeError, PamError};
use crate::header::Header;
use crate::limits::Limits;
use crate::pam;

/// Reusable PAM decoder.
///
/// Holds optional [`Limits`] and a row scratch buffer that is reset at the
/// start of every decode. Each successful decode returns a [`Bitmap`] with a
/// freshly allocated pixel buffer, so nothing from an earlier decode is
/// visible in a later result. A failed decode returns no bitmap at all.
///
/// ```no_run
/// use zenpam::{Limits, PamDecoder};
///
/// let mut decoder = PamDecoder::new().with_limits(Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// });
/// for i in 1..=3 {
///     let bitmap = decoder.decode_file(format!("slides/{i}.pam"))?;
///     println!("{}x{} stride {}", bitmap.width, bitmap.height, bitmap.stride);
/// }
/// # Ok::<(), zenpam::DecodeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PamDecoder {
    limits: Option<Limits>,
    row: Vec<u8>,
}

impl PamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply resource limits to every subsequent decode.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }

    /// Decode a seekable byte stream. `label` names the source in errors
    /// and log output.
    pub fn decode<R: Read + Seek>(&mut self, source: R, label: &str) -> Result<Bitmap, DecodeError> {
        self.decode_buffered(&mut BufReader::new(source), label)
    }

    /// Decode an in-memory PAM file.
    pub fn decode_bytes(&mut self, data: &[u8], label: &str) -> Result<Bitmap, DecodeError> {
        self.decode_buffered(&mut Cursor::new(data), label)
    }

    /// Open and decode a file. The path is used as the label.
    pub fn decode_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Bitmap, DecodeError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let file = File::open(path).map_err(|e| DecodeError::new(&label, PamError::FileOpen(e)))?;
        self.decode(file, &label)
    }

    fn decode_buffered<R: BufRead + Seek>(
        &mut self,
        reader: &mut R,
        label: &str,
    ) -> Result<Bitmap, DecodeError> {
        self.row.clear();
        let (header, pixels) = pam::decode(reader, label, self.limits.as_ref(), &mut self.row)
            .map_err(|e| DecodeError::new(label, e))?;
        log::debug!(
            "Decoded PAM image {label}: {} bytes at stride {}",
            pixels.len(),
            header.output_stride()
        );
        Ok(Bitmap::new(header, pixels))
    }
}

/// Decode a seekable byte stream with no limits.
pub fn decode<R: Read + Seek>(source: R, label: &str) -> Result<Bitmap, DecodeError> {
    PamDecoder::new().decode(source, label)
}

/// Decode an in-memory PAM file with no limits.
pub fn decode_bytes(data: &[u8], label: &str) -> Result<Bitmap, DecodeError> {
    PamDecoder::new().decode_bytes(data, label)
}

/// Open and decode a PAM file with no limits.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Bitmap, DecodeError> {
    PamDecoder::new().decode_file(path)
}

/// Read and validate only the header, without touching the payload.
pub fn probe<R: Read>(source: R, label: &str) -> Result<Header, DecodeError> {
    pam::read_header(&mut BufReader::new(source)).map_err(|e| DecodeError::new(label, e))
}
