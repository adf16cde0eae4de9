#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding may reject malformed tokens - that's OK
    // We're looking for panics/crashes, not errors
    let _ = tlzss::decode(text);
});
