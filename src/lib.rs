//! # zenpam
//!
//! Strict PAM (P7) decoder producing a canonical 32-bit BGRA bitmap.
//!
//! ## Supported Input
//!
//! - `TUPLTYPE RGB` — 3 bytes per pixel (R, G, B)
//! - `TUPLTYPE RGB_ALPHA` — 4 bytes per pixel, already in output byte order
//! - `MAXVAL 255` only
//!
//! The header is a magic line `P7` followed by `WIDTH`, `HEIGHT`, `DEPTH`,
//! `MAXVAL` and `TUPLTYPE` lines in any order, closed by `ENDHDR`. A field
//! given twice takes its last value. Any other line is an error. The payload
//! after `ENDHDR` must be exactly `width * height * (3 | 4)` bytes.
//!
//! ## Output
//!
//! [`Bitmap`] is always 4 bytes per pixel ordered B, G, R, A (a little-endian
//! `0xAARRGGBB` word) with `stride = width * 4`, ready for presentation
//! surfaces that take that packed format. RGB input is swizzled and given
//! full opacity; RGB_ALPHA input is copied verbatim.
//!
//! ## Non-Goals
//!
//! - Other tuple types (GRAYSCALE, BLACKANDWHITE, ...) and 16-bit samples
//! - Header comments
//! - Streaming/incremental decode
//! - Encoding
//!
//! ## Usage
//!
//! ```
//! let data = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n\x10\x20\x30";
//!
//! let bitmap = zenpam::decode_bytes(data, "inline")?;
//! assert_eq!((bitmap.width, bitmap.height, bitmap.stride), (1, 1, 4));
//! assert_eq!(bitmap.pixels(), &[0x30, 0x20, 0x10, 0xFF]);
//! # Ok::<(), zenpam::DecodeError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod error;
mod header;
mod limits;
mod pam;
mod pixel;

mod decode;

// Re-exports
pub use bitmap::Bitmap;
pub use decode::{PamDecoder, decode, decode_bytes, decode_file, probe};
pub use error::{DecodeError, PamError};
pub use header::{Header, HeaderField};
pub use limits::Limits;
pub use pixel::{OUTPUT_BYTES_PER_PIXEL, TupleType};
