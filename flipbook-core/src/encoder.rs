//! Project file encoding

use crate::constants::FIELD_TERMINATOR;
use crate::error::FrameError;
use crate::store::FrameStore;
use crate::types::Frame;
use bytes::{BufMut, Bytes, BytesMut};
use std::fs;
use std::io::Write;
use std::path::Path;

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a single frame record into bytes
///
/// The record is encoded with the following layout:
/// 1. Name length (8 bytes, big-endian, terminator included)
/// 2. Name bytes plus NUL terminator
/// 3. Duration in milliseconds (4 bytes, big-endian)
/// 4. Path length (8 bytes, big-endian, terminator included)
/// 5. Path bytes plus NUL terminator
pub fn encode_record(frame: &Frame) -> Result<Bytes, FrameError> {
    frame.validate()?;

    let mut buf = BytesMut::with_capacity(frame.encoded_size());
    write_record(&mut buf, frame);
    Ok(buf.freeze())
}

/// Encode a whole store, records concatenated in playback order.
///
/// There is no header, record count or trailing marker; an empty store
/// encodes to zero bytes.
pub fn encode_store(store: &FrameStore) -> Result<Bytes, FrameError> {
    let total: usize = store.iter().map(Frame::encoded_size).sum();
    let mut buf = BytesMut::with_capacity(total);

    for frame in store {
        frame.validate()?;
        write_record(&mut buf, frame);
    }

    Ok(buf.freeze())
}

/// Encode the store and rewrite the project file at `path`.
///
/// A failure to create or write the file is returned as [`FrameError::Io`];
/// the store is left untouched either way.
pub fn save_project<P: AsRef<Path>>(store: &FrameStore, path: P) -> Result<(), FrameError> {
    let encoded = encode_store(store)?;

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(&encoded)?;

    #[cfg(feature = "logging")]
    debug!(
        "Saved {} frame(s) ({} bytes) to {}",
        store.len(),
        encoded.len(),
        path.as_ref().display()
    );

    Ok(())
}

fn write_record(buf: &mut BytesMut, frame: &Frame) {
    put_field(buf, frame.name.as_bytes());
    buf.put_u32(frame.duration);
    put_field(buf, frame.path.as_bytes());
}

fn put_field(buf: &mut BytesMut, text: &[u8]) {
    buf.put_u64(text.len() as u64 + 1);
    buf.put_slice(text);
    buf.put_u8(FIELD_TERMINATOR);
}
