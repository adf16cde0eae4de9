use crate::error::{Error, Result};
use crate::window::SearchBuffer;

/// Default search buffer bound, in bytes
pub const DEFAULT_WINDOW_SIZE: usize = 4096;

/// Encode `text` with the default sliding window size
pub fn encode(text: &str) -> Result<Vec<u8>> {
    encode_with_window(text, DEFAULT_WINDOW_SIZE)
}

/// Encode `text`, replacing repeated byte runs with `<offset,length>` tokens.
///
/// Single greedy left-to-right pass: a candidate run grows one byte at a
/// time for as long as the extended run can still be found in the search
/// buffer. When it can no longer be extended (or input ends) the run is
/// flushed as either a token or the literal bytes, whichever is shorter.
/// Output is always at most as long as the input.
///
/// The offset in an emitted token counts backward from the position where
/// the run begins, so the decoder resolves it against everything emitted
/// before the run. Multi-byte UTF-8 sequences are treated as opaque bytes.
pub fn encode_with_window(text: &str, max_sliding_window_size: usize) -> Result<Vec<u8>> {
    if max_sliding_window_size == 0 {
        return Err(Error::InvalidWindowSize);
    }

    let bytes = text.as_bytes();
    let mut window = SearchBuffer::new(max_sliding_window_size);
    let mut run: Vec<u8> = Vec::new();
    let mut output: Vec<u8> = Vec::with_capacity(bytes.len());

    for (i, &byte) in bytes.iter().enumerate() {
        let is_last = i + 1 == bytes.len();

        // Try to extend the candidate run by one byte
        run.push(byte);
        if window.find(&run).is_some() {
            if !is_last {
                continue;
            }
            // Input exhausted while still matching: the final byte is
            // absorbed into the run before it is flushed
            flush(&mut output, &mut window, &run);
            run.clear();
        } else {
            // The extended run is no longer in the window: flush what was
            // confirmed, then start the next run at the current byte
            run.pop();
            flush(&mut output, &mut window, &run);
            run.clear();
            if is_last {
                output.push(byte);
                window.push(byte);
            } else {
                run.push(byte);
            }
        }
    }

    Ok(output)
}

/// Emit a completed run as a token or as literals, and absorb it into the
/// search buffer
fn flush(output: &mut Vec<u8>, window: &mut SearchBuffer, run: &[u8]) {
    if run.is_empty() {
        return;
    }

    match window.find(run) {
        Some(index) if run.len() > 1 => {
            // Back-distance from the start of the run to the match
            let offset = window.len() - index;
            let token = format!("<{},{}>", offset, run.len());
            if token.len() > run.len() {
                // The token would expand the output; keep the literals
                output.extend_from_slice(run);
            } else {
                output.extend_from_slice(token.as_bytes());
            }
        }
        _ => output.extend_from_slice(run),
    }

    window.extend(run);
}
