//! Header scanner: magic line, then one keyword line at a time up to `ENDHDR`.

use alloc::string::String;
use alloc::vec::Vec;
use std::io::{BufRead, Read};

use crate::error::PamError;
use crate::pixel::TupleType;

pub(crate) const MAGIC: &[u8] = b"P7";
pub(crate) const END_HEADER: &[u8] = b"ENDHDR";

/// Longest accepted header line, excluding the newline.
pub(crate) const MAX_LINE_LEN: usize = 256;

/// Header fields as seen so far. Zero / `None` means "never set".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RawHeader {
    pub width: u16,
    pub height: u16,
    pub depth: u16,
    pub maxval: u16,
    pub tuple_type: Option<TupleType>,
}

/// One recognized header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeaderLine {
    Width(u16),
    Height(u16),
    Depth(u16),
    Maxval(u16),
    TupleType(TupleType),
    EndHeader,
}

/// Read the magic line and all header lines through `ENDHDR`.
///
/// On success the reader is positioned on the first payload byte.
pub(crate) fn scan<R: BufRead>(reader: &mut R) -> Result<RawHeader, PamError> {
    let mut line = Vec::with_capacity(64);

    let has_magic = match read_line(reader, &mut line) {
        Err(PamError::HeaderSyntax { line }) => {
            return Err(PamError::MagicMismatch { found: line });
        }
        other => other?,
    };
    if !has_magic || line != MAGIC {
        return Err(PamError::MagicMismatch {
            found: lossy(&line),
        });
    }

    let mut header = RawHeader::default();
    loop {
        if !read_line(reader, &mut line)? {
            return Err(PamError::UnexpectedEof);
        }
        let parsed = classify(&line)?;
        log::trace!("PAM header line {parsed:?}");
        match parsed {
            HeaderLine::EndHeader => return Ok(header),
            // Repeated fields overwrite; the last occurrence wins.
            HeaderLine::Width(v) => header.width = v,
            HeaderLine::Height(v) => header.height = v,
            HeaderLine::Depth(v) => header.depth = v,
            HeaderLine::Maxval(v) => header.maxval = v,
            HeaderLine::TupleType(t) => header.tuple_type = Some(t),
        }
    }
}

/// Read one `\n`-terminated line into `buf` without the terminator.
///
/// Returns `false` at end of input. A final line lacking `\n` still counts.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool, PamError> {
    buf.clear();
    let limit = MAX_LINE_LEN as u64 + 1;
    let n = reader.by_ref().take(limit).read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    } else if buf.len() > MAX_LINE_LEN {
        return Err(syntax_error(buf));
    }
    Ok(true)
}

fn classify(line: &[u8]) -> Result<HeaderLine, PamError> {
    if line == END_HEADER {
        return Ok(HeaderLine::EndHeader);
    }

    let Some(sep) = line.iter().position(u8::is_ascii_whitespace) else {
        return Err(syntax_error(line));
    };
    let (keyword, value) = (&line[..sep], &line[sep + 1..]);
    if value.is_empty() {
        return Err(syntax_error(line));
    }

    let numeric: fn(u16) -> HeaderLine = match keyword {
        b"WIDTH" => HeaderLine::Width,
        b"HEIGHT" => HeaderLine::Height,
        b"DEPTH" => HeaderLine::Depth,
        b"MAXVAL" => HeaderLine::Maxval,
        b"TUPLTYPE" => {
            return TupleType::from_token(value)
                .map(HeaderLine::TupleType)
                .ok_or_else(|| PamError::UnsupportedTupleType {
                    tuple_type: lossy(value),
                });
        }
        _ => return Err(syntax_error(line)),
    };

    let number = parse_u16(value).ok_or_else(|| PamError::HeaderValue { line: lossy(line) })?;
    Ok(numeric(number))
}

/// Plain ASCII digits only: no sign, no whitespace, must fit in `u16`.
fn parse_u16(digits: &[u8]) -> Option<u16> {
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    core::str::from_utf8(digits).ok()?.parse().ok()
}

fn syntax_error(line: &[u8]) -> PamError {
    PamError::HeaderSyntax { line: lossy(line) }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_bytes(data: &[u8]) -> Result<RawHeader, PamError> {
        let mut reader = data;
        scan(&mut reader)
    }

    #[test]
    fn full_header() {
        let header = scan_bytes(
            b"P7\nWIDTH 3\nHEIGHT 2\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        )
        .unwrap();
        assert_eq!(
            header,
            RawHeader {
                width: 3,
                height: 2,
                depth: 4,
                maxval: 255,
                tuple_type: Some(TupleType::RgbAlpha),
            }
        );
    }

    #[test]
    fn stops_exactly_at_payload() {
        let mut reader: &[u8] = b"P7\nWIDTH 1\nENDHDR\n\x0a\x01\x02";
        scan(&mut reader).unwrap();
        assert_eq!(reader, b"\x0a\x01\x02");
    }

    #[test]
    fn last_occurrence_wins() {
        let header = scan_bytes(b"P7\nWIDTH 10\nWIDTH 20\nENDHDR\n").unwrap();
        assert_eq!(header.width, 20);
        let header = scan_bytes(b"P7\nTUPLTYPE RGB\nTUPLTYPE RGB_ALPHA\nENDHDR\n").unwrap();
        assert_eq!(header.tuple_type, Some(TupleType::RgbAlpha));
    }

    #[test]
    fn fields_in_any_order() {
        let header = scan_bytes(
            b"P7\nTUPLTYPE RGB\nMAXVAL 255\nHEIGHT 7\nDEPTH 3\nWIDTH 9\nENDHDR\n",
        )
        .unwrap();
        assert_eq!((header.width, header.height, header.depth), (9, 7, 3));
    }

    #[test]
    fn magic_must_be_exact() {
        for data in [&b"P6\n"[..], b"P7 \n", b"P70\n", b"", b"p7\n"] {
            assert!(
                matches!(scan_bytes(data), Err(PamError::MagicMismatch { .. })),
                "{data:?}"
            );
        }
    }

    #[test]
    fn unknown_lines_are_syntax_errors() {
        for line in [
            &b"# comment"[..],
            b"",
            b"WIDTH",
            b"WIDTH ",
            b"ENDHDR ",
            b"ENDHDR\r",
            b"HEIGHT\r",
            b"BOGUS 1",
            b"width 1",
        ] {
            let mut data = b"P7\n".to_vec();
            data.extend_from_slice(line);
            data.extend_from_slice(b"\nENDHDR\n");
            match scan_bytes(&data) {
                Err(PamError::HeaderSyntax { line: got }) => {
                    assert_eq!(got.as_bytes(), line)
                }
                other => panic!("{line:?}: expected HeaderSyntax, got {other:?}"),
            }
        }
    }

    #[test]
    fn bad_numbers_are_value_errors() {
        for line in [
            &b"WIDTH abc"[..],
            b"WIDTH 65536",
            b"HEIGHT -1",
            b"DEPTH +3",
            b"MAXVAL 2 55",
            b"WIDTH  10",
        ] {
            let mut data = b"P7\n".to_vec();
            data.extend_from_slice(line);
            data.extend_from_slice(b"\nENDHDR\n");
            assert!(
                matches!(scan_bytes(&data), Err(PamError::HeaderValue { .. })),
                "{line:?}"
            );
        }
    }

    #[test]
    fn max_u16_accepted() {
        let header = scan_bytes(b"P7\nMAXVAL 65535\nENDHDR\n").unwrap();
        assert_eq!(header.maxval, 65535);
    }

    #[test]
    fn unsupported_tuple_type() {
        match scan_bytes(b"P7\nTUPLTYPE GRAYSCALE\nENDHDR\n") {
            Err(PamError::UnsupportedTupleType { tuple_type }) => {
                assert_eq!(tuple_type, "GRAYSCALE")
            }
            other => panic!("expected UnsupportedTupleType, got {other:?}"),
        }
        assert!(matches!(
            scan_bytes(b"P7\nTUPLTYPE RGB \nENDHDR\n"),
            Err(PamError::UnsupportedTupleType { .. })
        ));
    }

    #[test]
    fn eof_before_endhdr() {
        assert!(matches!(
            scan_bytes(b"P7\nWIDTH 1\nHEIGHT 1\n"),
            Err(PamError::UnexpectedEof)
        ));
        assert!(matches!(scan_bytes(b"P7\n"), Err(PamError::UnexpectedEof)));
        assert!(matches!(scan_bytes(b"P7"), Err(PamError::UnexpectedEof)));
    }

    #[test]
    fn endhdr_without_newline_terminates() {
        let mut reader: &[u8] = b"P7\nWIDTH 1\nENDHDR";
        let header = scan(&mut reader).unwrap();
        assert_eq!(header.width, 1);
        assert!(reader.is_empty());
    }

    #[test]
    fn overlong_line_rejected() {
        let mut data = b"P7\nWIDTH ".to_vec();
        data.extend(core::iter::repeat_n(b'1', MAX_LINE_LEN));
        data.extend_from_slice(b"\nENDHDR\n");
        assert!(matches!(
            scan_bytes(&data),
            Err(PamError::HeaderSyntax { .. })
        ));
    }

    #[test]
    fn line_at_length_limit_accepted() {
        let mut data = b"P7\nWIDTH ".to_vec();
        data.extend(core::iter::repeat_n(b'0', MAX_LINE_LEN - b"WIDTH 7".len()));
        data.extend_from_slice(b"7\nENDHDR\n");
        assert_eq!(scan_bytes(&data).unwrap().width, 7);
    }
}
