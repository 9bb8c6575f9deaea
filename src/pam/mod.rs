//! PAM (P7) decoding stages: scanner → validator → transcoder.
//!
//! Only `TUPLTYPE RGB` and `TUPLTYPE RGB_ALPHA` with `MAXVAL 255` are
//! accepted. Header lines are strict `KEYWORD value` pairs; comments and
//! unknown keywords are rejected.

mod scan;
mod transcode;
mod validate;

use alloc::vec::Vec;
use std::io::{BufRead, Seek};

use crate::error::PamError;
use crate::header::Header;
use crate::limits::Limits;

/// Scan and validate the header. Leaves `reader` at the first payload byte.
pub(crate) fn read_header<R: BufRead>(reader: &mut R) -> Result<Header, PamError> {
    let raw = scan::scan(reader)?;
    validate::validate(&raw)
}

/// Full decode of one source into canonical bitmap bytes.
pub(crate) fn decode<R: BufRead + Seek>(
    reader: &mut R,
    label: &str,
    limits: Option<&Limits>,
    row: &mut Vec<u8>,
) -> Result<(Header, Vec<u8>), PamError> {
    let header = read_header(reader)?;
    log::debug!(
        "Parsed PAM header in {label}: width {}, height {}, depth {}, maxval {}, tuple type {}",
        header.width,
        header.height,
        header.depth,
        header.maxval,
        header.tuple_type
    );

    if let Some(limits) = limits {
        limits.check(&header)?;
    }

    transcode::check_payload_len(reader, &header)?;

    let out_bytes = header.output_len()?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }

    let pixels = transcode::transcode_rows(reader, &header, row)?;
    Ok((header, pixels))
}
