//! End-to-end tests for the textual LZSS codec.
//!
//! Exercises the encode/decode pair on synthetic data and checks the
//! codec-wide properties: round-trips, literal passthrough, token
//! minimality, and decoder error reporting.

use std::io::Write;
use std::process::{Command, Stdio};

use tlzss::{decode, encode, encode_with_window, Error, DEFAULT_WINDOW_SIZE};

// ============================================================================
// Test Data Generators
// ============================================================================

/// Generate printable pseudo-random text using a simple xorshift PRNG,
/// avoiding the token markup bytes '<' and '>'
fn generate_random_text(size: usize, seed: u64) -> String {
    let mut text = String::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        // Printable ASCII minus '<' (0x3c) and '>' (0x3e)
        let mut byte = 0x20 + (state % 95) as u8;
        if byte == b'<' || byte == b'>' {
            byte = b'_';
        }
        text.push(byte as char);
    }
    text
}

/// Generate highly repetitive text (good compression)
fn generate_repetitive_text(size: usize) -> String {
    "the rain in spain stays mainly in the plain. ".chars().cycle().take(size).collect()
}

/// Generate text mixing repeated phrases with unique filler
fn generate_mixed_text(paragraphs: usize) -> String {
    let mut text = String::new();
    for i in 0..paragraphs {
        text.push_str("paragraph ");
        text.push_str(&i.to_string());
        text.push_str(": all work and no play makes jack a dull boy. ");
    }
    text
}

fn assert_round_trip(text: &str, window: usize) {
    let encoded = encode_with_window(text, window).unwrap();
    let encoded_text = String::from_utf8(encoded.clone()).unwrap();
    let decoded = decode(&encoded_text).unwrap();
    assert_eq!(decoded, text.as_bytes(), "round trip failed for window {}", window);
    assert!(encoded.len() <= text.len(), "output expanded for window {}", window);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_simple_repeat() {
    assert_round_trip("ABCDEF ABCDEF", DEFAULT_WINDOW_SIZE);
}

#[test]
fn test_round_trip_long_word() {
    assert_round_trip(
        "supercalifragilisticexpialidocious supercalifragilisticexpialidocious",
        1024,
    );
}

#[test]
fn test_round_trip_no_repeats() {
    let text = "LZSS will take over the world!";
    let encoded = encode_with_window(text, 256).unwrap();
    // Nothing repeats, so every candidate run falls back to literals
    assert_eq!(encoded, text.as_bytes());
    assert_round_trip(text, 256);
}

#[test]
fn test_round_trip_multibyte_utf8_small_window() {
    // Multi-byte sequences are opaque byte runs; a tiny window must not
    // split them in a way that breaks decoding
    assert_round_trip("It even works with 😀s thanks to UTF-8", 16);
}

#[test]
fn test_round_trip_generated_corpora() {
    for window in [1, 2, 16, 64, 4096] {
        assert_round_trip(&generate_random_text(2048, 0x1234_5678), window);
        assert_round_trip(&generate_repetitive_text(2048), window);
        assert_round_trip(&generate_mixed_text(40), window);
    }
}

#[test]
fn test_round_trip_edge_inputs() {
    for text in ["", "A", "AA", "  ", "aaaaaaaaaaaaaaaa"] {
        assert_round_trip(text, DEFAULT_WINDOW_SIZE);
        assert_round_trip(text, 1);
    }
}

// ============================================================================
// Decoder Scenarios
// ============================================================================

#[test]
fn test_decode_reference_token() {
    assert_eq!(
        decode("supercalifragilisticexpialidocious <35,34>").unwrap(),
        b"supercalifragilisticexpialidocious supercalifragilisticexpialidocious"
    );
}

#[test]
fn test_decode_is_identity_without_markup() {
    let text = generate_random_text(4096, 0x9e37_79b9);
    assert_eq!(decode(&text).unwrap(), text.as_bytes());
}

#[test]
fn test_decode_errors_are_terminal() {
    assert!(matches!(decode("abc<?,3>"), Err(Error::InvalidTokenOffset(_))));
    assert!(matches!(decode("abc<3,?>"), Err(Error::InvalidTokenLength(_))));
    assert!(matches!(decode("abc<>"), Err(Error::InvalidTokenOffset(_))));
}

// ============================================================================
// Encoder Properties
// ============================================================================

#[test]
fn test_token_minimality() {
    // No emitted token may be textually longer than the run it replaces,
    // so the output can never be longer than the input
    for size in [0, 1, 10, 100, 1000] {
        let text = generate_repetitive_text(size);
        let encoded = encode(&text).unwrap();
        assert!(encoded.len() <= text.len());
    }
}

#[test]
fn test_compression_actually_happens() {
    let text = generate_repetitive_text(2048);
    let encoded = encode(&text).unwrap();
    assert!(encoded.len() < text.len() / 2, "repetitive text should compress well");
}

#[test]
fn test_window_size_one_still_round_trips() {
    // A one-byte window can never hold a match long enough to tokenize
    let text = "mississippi mississippi";
    let encoded = encode_with_window(text, 1).unwrap();
    assert_eq!(encoded, text.as_bytes());
}

#[test]
fn test_invalid_window_is_rejected() {
    assert!(matches!(encode_with_window("abc", 0), Err(Error::InvalidWindowSize)));
}

// ============================================================================
// Command Line
// ============================================================================

/// Run the tlzss binary with the given arguments, piping `input` to stdin
fn run_cli(args: &[&str], input: &[u8]) -> Vec<u8> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tlzss"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to run CLI");
    child.stdin.take().unwrap().write_all(input).expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for CLI");
    assert!(output.status.success(), "CLI exited with {}", output.status);
    output.stdout
}

#[test]
fn test_cli_round_trip() {
    let text = "ABCDEF ABCDEF";

    let encoded = run_cli(&[], text.as_bytes());
    assert_eq!(encoded, b"ABCDEF <7,6>");

    let decoded = run_cli(&["--decode"], &encoded);
    assert_eq!(decoded, text.as_bytes());
}

#[test]
fn test_cli_window_flag() {
    let text = "LZSS will take over the world!";
    let encoded = run_cli(&["--window", "256"], text.as_bytes());
    assert_eq!(encoded, text.as_bytes());
}
