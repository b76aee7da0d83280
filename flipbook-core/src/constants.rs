//! Constants and limits for the flipbook project file format
//!
//! A project file is a bare concatenation of frame records with no magic
//! number, no version field, no record count and no checksums. Each record
//! is five fields:
//!
//! 1. Name length (8 bytes, big-endian, terminator included)
//! 2. Name bytes, closed by a single NUL terminator
//! 3. Duration in milliseconds (4 bytes, big-endian)
//! 4. Path length (8 bytes, big-endian, terminator included)
//! 5. Path bytes, closed by a single NUL terminator
//!
//! Both sides of the codec apply these widths and byte order exactly;
//! compatibility with other implementations depends on nothing else.

/// Size of a field length prefix in bytes (u64, big-endian)
pub const LEN_PREFIX_SIZE: usize = 8;

/// Size of the duration field in bytes (u32, big-endian)
pub const DURATION_SIZE: usize = 4;

/// Terminator byte closing each text field; counted by the length prefix
pub const FIELD_TERMINATOR: u8 = 0;

/// Maximum declared length of a single text field, terminator included.
/// A length prefix above this is treated as corruption rather than honored,
/// which also bounds decoder allocations on hostile input.
pub const MAX_FIELD_LEN: u64 = 4096;

/// Smallest possible record: two one-character fields plus their
/// terminators, prefixes and the duration
pub const MIN_RECORD_SIZE: usize = 2 * LEN_PREFIX_SIZE + DURATION_SIZE + 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_record_size() {
        // name "a\0" + path "b\0" -> 8 + 2 + 4 + 8 + 2
        assert_eq!(MIN_RECORD_SIZE, 24);
    }
}
