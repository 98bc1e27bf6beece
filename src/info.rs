use crate::error::RgbaError;
use crate::rgba::{self, HEADER_LEN};

/// Header information, read without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes of pixel payload the header declares (`width * height * 4`).
    pub payload_len: u64,
    /// Whether `data` held the full payload when probed.
    pub is_complete: bool,
}

impl ImageInfo {
    /// Probe an RGBA file header.
    ///
    /// Fails on a short header, bad magic or a size that overflows. A
    /// truncated payload is reported via `is_complete`. Zero dimensions are
    /// accepted and give an empty payload.
    pub fn from_bytes(data: &[u8]) -> Result<Self, RgbaError> {
        let (width, height) = rgba::decode::parse_header(data)?;
        let payload_len = rgba::payload_len_u64(width, height)
            .ok_or(RgbaError::DimensionsTooLarge { width, height })?;
        let is_complete = (data.len() - HEADER_LEN) as u64 >= payload_len;
        Ok(Self {
            width,
            height,
            payload_len,
            is_complete,
        })
    }

    /// Total file size implied by the header.
    pub fn file_len(&self) -> u64 {
        self.payload_len + HEADER_LEN as u64
    }
}
