//! Core types for flipbook frames

use crate::constants::{DURATION_SIZE, LEN_PREFIX_SIZE, MAX_FIELD_LEN};
use crate::error::FrameError;
use serde::{Deserialize, Serialize};

/// One entry of the movie: a still image shown for a duration.
///
/// `name` is the unique handle callers address the frame by; `path` points
/// at the backing image resource and is never checked for existence here
/// (callers verify before constructing a frame). Only `duration` is meant
/// to change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Unique frame name, non-empty
    pub name: String,

    /// Display duration in milliseconds
    pub duration: u32,

    /// Path to the backing image resource, non-empty
    pub path: String,
}

impl Frame {
    /// Create a new frame, validating that both text fields are
    /// representable in a project file
    pub fn new(
        name: impl Into<String>,
        duration: u32,
        path: impl Into<String>,
    ) -> Result<Self, FrameError> {
        let frame = Self {
            name: name.into(),
            duration,
            path: path.into(),
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Validate the frame's field invariants
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.name.is_empty() {
            return Err(FrameError::EmptyName);
        }
        if self.path.is_empty() {
            return Err(FrameError::EmptyPath);
        }
        if self.name.as_bytes().contains(&0) {
            return Err(FrameError::EmbeddedNul("name"));
        }
        if self.path.as_bytes().contains(&0) {
            return Err(FrameError::EmbeddedNul("path"));
        }
        if self.name.len() as u64 + 1 > MAX_FIELD_LEN {
            return Err(FrameError::FieldTooLarge(
                self.name.len() as u64 + 1,
                MAX_FIELD_LEN,
            ));
        }
        if self.path.len() as u64 + 1 > MAX_FIELD_LEN {
            return Err(FrameError::FieldTooLarge(
                self.path.len() as u64 + 1,
                MAX_FIELD_LEN,
            ));
        }
        Ok(())
    }

    /// Size of this frame's record on disk, terminators and prefixes
    /// included
    pub fn encoded_size(&self) -> usize {
        2 * LEN_PREFIX_SIZE + DURATION_SIZE + self.name.len() + 1 + self.path.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_frame() {
        let frame = Frame::new("intro", 100, "frames/intro.png").unwrap();
        assert_eq!(frame.name, "intro");
        assert_eq!(frame.duration, 100);
        assert_eq!(frame.path, "frames/intro.png");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Frame::new("", 100, "a.png"), Err(FrameError::EmptyName));
    }

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(Frame::new("intro", 100, ""), Err(FrameError::EmptyPath));
    }

    #[test]
    fn test_interior_nul_rejected() {
        assert_eq!(
            Frame::new("in\0tro", 100, "a.png"),
            Err(FrameError::EmbeddedNul("name"))
        );
        assert_eq!(
            Frame::new("intro", 100, "a\0.png"),
            Err(FrameError::EmbeddedNul("path"))
        );
    }

    #[test]
    fn test_oversized_field_rejected() {
        let long_name = "x".repeat(MAX_FIELD_LEN as usize);
        let result = Frame::new(long_name, 100, "a.png");
        assert!(matches!(result, Err(FrameError::FieldTooLarge(_, _))));
    }

    #[test]
    fn test_encoded_size() {
        let frame = Frame::new("a", 100, "b").unwrap();
        // 8 + 2 + 4 + 8 + 2
        assert_eq!(frame.encoded_size(), 24);
    }
}
