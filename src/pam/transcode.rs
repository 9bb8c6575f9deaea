//! Pixel transcoder: file tuples → canonical B, G, R, A bitmap.

use alloc::vec;
use alloc::vec::Vec;
use std::io::{Read, Seek, SeekFrom};

use crate::error::PamError;
use crate::header::Header;
use crate::pixel::{OUTPUT_BYTES_PER_PIXEL, TupleType};

/// Bytes between the current position and end of input. Leaves the position
/// unchanged.
pub(crate) fn remaining_len<R: Seek>(reader: &mut R) -> Result<u64, PamError> {
    let cur = reader.stream_position()?;
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(cur))?;
    Ok(end.saturating_sub(cur))
}

/// Fail unless exactly the declared payload remains in `reader`.
pub(crate) fn check_payload_len<R: Seek>(reader: &mut R, header: &Header) -> Result<(), PamError> {
    let expected = header.payload_len()?;
    let actual = remaining_len(reader)?;
    if actual != expected {
        return Err(PamError::SizeMismatch { expected, actual });
    }
    Ok(())
}

/// Read `header.height` rows from `reader` and return the canonical bitmap
/// bytes. `row` is scratch space, resized to one input row.
pub(crate) fn transcode_rows<R: Read>(
    reader: &mut R,
    header: &Header,
    row: &mut Vec<u8>,
) -> Result<Vec<u8>, PamError> {
    let mut pixels = vec![0u8; header.output_len()?];

    row.clear();
    row.resize(header.input_stride(), 0);

    for out_row in pixels.chunks_exact_mut(header.output_stride()) {
        reader.read_exact(row)?;
        transcode_row(header.tuple_type, row, out_row);
    }

    Ok(pixels)
}

/// Convert one row. `src` holds whole tuples, `dst` the matching output pixels.
pub(crate) fn transcode_row(tuple_type: TupleType, src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(
        src.len() / tuple_type.bytes_per_tuple() * OUTPUT_BYTES_PER_PIXEL,
        dst.len()
    );
    match tuple_type {
        TupleType::Rgb => rgb_to_bgra(src, dst),
        // Stored in output order already; no swizzle.
        TupleType::RgbAlpha => dst.copy_from_slice(src),
    }
}

fn rgb_to_bgra(src: &[u8], dst: &mut [u8]) {
    #[cfg(feature = "simd")]
    {
        if garb::bytes::rgb_to_bgra(src, dst).is_ok() {
            return;
        }
    }
    rgb_to_bgra_scalar(src, dst);
}

fn rgb_to_bgra_scalar(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[2]; // B
        d[1] = s[1]; // G
        d[2] = s[0]; // R
        d[3] = 0xFF; // A (opaque)
    }
}
