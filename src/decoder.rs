use memchr::memchr2;

use crate::error::{Error, Result};

/// Which of a token's two numbers is being scanned
#[derive(Clone, Copy)]
enum Scan {
    Offset,
    Length,
}

/// Expand `<offset,length>` tokens in `text` against the already-decoded
/// output.
///
/// Bytes outside tokens are copied through verbatim. A token copies up to
/// `length` bytes starting `offset` bytes back from the current end of the
/// output: the reference window is the last `offset` bytes of output
/// (clamped to the whole output when `offset` overshoots it; offset zero
/// also selects the whole output), and the copy is truncated to that
/// window rather than extended, so `length` never reads past what the
/// window holds.
///
/// A `<` always starts a fresh token, discarding any half-scanned one. A
/// `>` always closes one, so a stray `>` in literal text fails the decode
/// with a parse error on the empty digit buffer. A token left unclosed at
/// end of input is silently dropped. There is no escaping: literal `<` in
/// the original text is indistinguishable from token markup.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let bytes = text.as_bytes();
    let mut output: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut offset_digits: Vec<u8> = Vec::new();
    let mut length_digits: Vec<u8> = Vec::new();
    let mut scanning: Option<Scan> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(scan) = scanning else {
            // Bulk-copy literals up to the next structural byte
            let run = memchr2(b'<', b'>', &bytes[pos..]).unwrap_or(bytes.len() - pos);
            output.extend_from_slice(&bytes[pos..pos + run]);
            pos += run;
            let Some(&byte) = bytes.get(pos) else {
                break;
            };
            pos += 1;
            if byte == b'<' {
                scanning = Some(Scan::Offset);
                offset_digits.clear();
                length_digits.clear();
            } else {
                // A stray '>' attempts a token close; the digit buffers
                // are always empty outside a token, so it cannot parse
                return Err(Error::InvalidTokenOffset(String::new()));
            }
            continue;
        };

        let byte = bytes[pos];
        pos += 1;

        match byte {
            b'<' => {
                scanning = Some(Scan::Offset);
                offset_digits.clear();
                length_digits.clear();
            }
            b',' => {
                scanning = Some(Scan::Length);
            }
            b'>' => {
                let offset = parse_number(&offset_digits)
                    .ok_or_else(|| Error::InvalidTokenOffset(lossy(&offset_digits)))?;
                let length = parse_number(&length_digits)
                    .ok_or_else(|| Error::InvalidTokenLength(lossy(&length_digits)))?;

                // Slice-then-truncate: last `offset` bytes of the output,
                // then at most the first `length` of those. Offset zero
                // degenerates to a window over the whole output.
                let start = if offset == 0 {
                    0
                } else {
                    output.len() - (offset.min(output.len() as u64) as usize)
                };
                let end = ((start as u64).saturating_add(length)).min(output.len() as u64) as usize;
                output.extend_from_within(start..end);

                offset_digits.clear();
                length_digits.clear();
                scanning = None;
            }
            other => match scan {
                Scan::Offset => offset_digits.push(other),
                Scan::Length => length_digits.push(other),
            },
        }
    }

    Ok(output)
}

/// Parse a token number: one or more ASCII digits, no sign, no whitespace
fn parse_number(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All-digit input only fails to parse on overflow
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn lossy(digits: &[u8]) -> String {
    String::from_utf8_lossy(digits).into_owned()
}
