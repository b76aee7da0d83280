//! Fuzzing placeholder for flipbook-core decoding
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

pub fn fuzz_decode(data: &[u8]) {
    use flipbook_core::decoder::decode_store;

    // Try to decode - should never panic
    let _ = decode_store(data);
}

pub fn fuzz_salvage(data: &[u8]) {
    use flipbook_core::decoder::salvage_store;

    // Try to salvage - should never panic
    let _ = salvage_store(data);
}
