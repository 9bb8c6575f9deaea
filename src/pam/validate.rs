//! Header validator: required fields present, MAXVAL supported.

use super::scan::RawHeader;
use crate::error::PamError;
use crate::header::{Header, HeaderField};

/// Only single-byte channels are supported.
pub(crate) const SUPPORTED_MAXVAL: u16 = 255;

pub(crate) fn validate(raw: &RawHeader) -> Result<Header, PamError> {
    let missing = PamError::MissingHeaderField;
    let nonzero = |value: u16, field| if value == 0 { Err(missing(field)) } else { Ok(value) };

    let width = nonzero(raw.width, HeaderField::Width)?;
    let height = nonzero(raw.height, HeaderField::Height)?;
    let depth = nonzero(raw.depth, HeaderField::Depth)?;
    let maxval = nonzero(raw.maxval, HeaderField::Maxval)?;
    let tuple_type = raw.tuple_type.ok_or(missing(HeaderField::TupleType))?;

    if maxval != SUPPORTED_MAXVAL {
        return Err(PamError::UnsupportedMaxval(maxval));
    }

    Ok(Header {
        width,
        height,
        depth,
        maxval,
        tuple_type,
    })
}
