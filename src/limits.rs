//! Caps on image size, checked before any pixel buffer is allocated.

use alloc::format;

use crate::error::RgbaError;
use crate::rgba::{HEADER_LEN, payload_len_u64};

/// Resource limits for decoding and encoding RGBA files.
///
/// All fields default to `None` (no limit). On decode they bound what the
/// file header declares, so an oversized image fails before its payload is
/// looked at. On encode they bound the bitmap being written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the buffer being produced: the decoded bitmap with
    /// its row padding, or the encoded file.
    pub max_memory_bytes: Option<u64>,
    /// Maximum RGBA file size, header included.
    pub max_file_bytes: Option<u64>,
}

fn exceeded(what: &str, value: u64, max: Option<u64>) -> Result<(), RgbaError> {
    match max {
        Some(max) if value > max => Err(RgbaError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check image dimensions and the file size they imply.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), RgbaError> {
        exceeded("width", u64::from(width), self.max_width)?;
        exceeded("height", u64::from(height), self.max_height)?;
        exceeded(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        if self.max_file_bytes.is_some() {
            let file_len = payload_len_u64(width, height)
                .and_then(|n| n.checked_add(HEADER_LEN as u64))
                .unwrap_or(u64::MAX);
            exceeded("file size", file_len, self.max_file_bytes)?;
        }
        Ok(())
    }

    /// Check the size of the buffer about to be allocated.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), RgbaError> {
        exceeded("allocation of", bytes as u64, self.max_memory_bytes)
    }
}
