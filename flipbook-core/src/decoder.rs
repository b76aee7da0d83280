//! Project file decoding (strict mode and salvage)

use crate::constants::{DURATION_SIZE, FIELD_TERMINATOR, LEN_PREFIX_SIZE, MAX_FIELD_LEN};
use crate::error::FrameError;
use crate::store::FrameStore;
use crate::types::Frame;
use bytes::Buf;
use std::fs;
use std::path::Path;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Decode a single record from the front of `buf`, advancing it.
///
/// Every read is preceded by a remaining-length check: a length prefix that
/// would reach past the end of the input yields
/// [`FrameError::TruncatedRecord`] without reading out of bounds.
pub fn decode_record(buf: &mut &[u8]) -> Result<Frame, FrameError> {
    let name = take_field(buf, "name")?;

    if buf.remaining() < DURATION_SIZE {
        return Err(FrameError::TruncatedRecord {
            expected: DURATION_SIZE,
            actual: buf.remaining(),
        });
    }
    let duration = buf.get_u32();

    let path = take_field(buf, "path")?;

    Frame::new(name, duration, path)
}

/// Strictly decode a whole project image into a fresh store.
///
/// Records are read in file order until the input is exhausted. The loop
/// only starts a record while bytes remain, so neither an empty input nor
/// an input that ends exactly on a record boundary can produce a phantom
/// trailing frame. Any record error aborts the whole decode.
pub fn decode_store(data: &[u8]) -> Result<FrameStore, FrameError> {
    let mut remaining = data;
    let mut store = FrameStore::new();

    while !remaining.is_empty() {
        let frame = decode_record(&mut remaining)?;
        store.push(frame);
    }

    #[cfg(feature = "logging")]
    debug!("Decoded {} frame(s) from {} bytes", store.len(), data.len());

    Ok(store)
}

/// Leniently decode a damaged project image.
///
/// Returns every complete record parsed before the first error, together
/// with that error (`None` if the input was fully consumed). A partially
/// read trailing record is discarded, never appended.
pub fn salvage_store(data: &[u8]) -> (FrameStore, Option<FrameError>) {
    let mut remaining = data;
    let mut store = FrameStore::new();

    while !remaining.is_empty() {
        match decode_record(&mut remaining) {
            Ok(frame) => store.push(frame),
            Err(err) => {
                #[cfg(feature = "logging")]
                warn!(
                    "Salvage stopped after {} complete frame(s): {}",
                    store.len(),
                    err
                );

                return (store, Some(err));
            }
        }
    }

    (store, None)
}

/// Read and strictly decode the project file at `path`.
///
/// A missing or unreadable file surfaces as [`FrameError::Io`] so the
/// caller can fall back to an empty project.
pub fn load_project<P: AsRef<Path>>(path: P) -> Result<FrameStore, FrameError> {
    let data = fs::read(path.as_ref())?;

    #[cfg(feature = "logging")]
    debug!("Loading project from {} ({} bytes)", path.as_ref().display(), data.len());

    decode_store(&data)
}

fn take_field(buf: &mut &[u8], field: &'static str) -> Result<String, FrameError> {
    if buf.remaining() < LEN_PREFIX_SIZE {
        return Err(FrameError::TruncatedRecord {
            expected: LEN_PREFIX_SIZE,
            actual: buf.remaining(),
        });
    }
    let declared = buf.get_u64();

    if declared == 0 {
        return Err(FrameError::MalformedRecord(format!(
            "{} length prefix is zero",
            field
        )));
    }
    if declared > MAX_FIELD_LEN {
        return Err(FrameError::FieldTooLarge(declared, MAX_FIELD_LEN));
    }

    let len = declared as usize;
    if buf.remaining() < len {
        return Err(FrameError::TruncatedRecord {
            expected: len,
            actual: buf.remaining(),
        });
    }

    let mut raw = vec![0u8; len];
    buf.copy_to_slice(&mut raw);

    match raw.split_last() {
        Some((&FIELD_TERMINATOR, text)) => String::from_utf8(text.to_vec()).map_err(|err| {
            FrameError::MalformedRecord(format!("{} is not valid UTF-8: {}", field, err))
        }),
        _ => Err(FrameError::MalformedRecord(format!(
            "{} is missing its terminator",
            field
        ))),
    }
}
