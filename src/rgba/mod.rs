//! RGBA file format decoder and encoder (internal).
//!
//! The file is a 4-byte magic ("RGBA"), width/height as u32 big-endian, then
//! packed R,G,B,A bytes, row-major from the top-left pixel. No padding.

pub(crate) mod decode;
mod encode;

use crate::decode::DecodeOutput;
use crate::error::RgbaError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use alloc::vec::Vec;
use enough::Stop;

/// File magic, the ASCII bytes `RGBA` read as a big-endian u32.
pub const MAGIC: u32 = 0x5247_4241;

/// Size of the fixed file header in bytes.
pub const HEADER_LEN: usize = 12;

/// Bytes per pixel in the file payload.
pub(crate) const FILE_BPP: usize = 4;

/// Rows processed between cancellation checks.
pub(crate) const STOP_INTERVAL: usize = 16;

/// Payload bytes for a `width` x `height` image, or `None` if that overflows u64.
pub(crate) fn payload_len_u64(width: u32, height: u32) -> Option<u64> {
    u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(FILE_BPP as u64)
}

/// Read a big-endian u32 at `offset`. The caller guarantees four bytes exist.
#[inline]
pub(crate) fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Append the 12-byte header.
pub(crate) fn write_header(out: &mut Vec<u8>, width: u32, height: u32) {
    out.extend_from_slice(&MAGIC.to_be_bytes());
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
}

/// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
pub(crate) fn try_alloc(len: usize) -> Result<Vec<u8>, RgbaError> {
    let mut buf = try_with_capacity(len)?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Empty buffer with exactly `len` bytes reserved.
pub(crate) fn try_with_capacity(len: usize) -> Result<Vec<u8>, RgbaError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RgbaError::OutOfMemory { bytes: len })?;
    Ok(buf)
}

/// Decode an RGBA file into `layout`, padding rows to `row_alignment`.
pub(crate) fn decode(
    data: &[u8],
    layout: PixelLayout,
    row_alignment: u32,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, RgbaError> {
    let (width, height) = decode::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let payload = decode::payload(data, width, height)?;
    let geometry = decode::OutputGeometry::new(width, height, layout, row_alignment)?;
    if let Some(limits) = limits {
        limits.check_memory(geometry.total_bytes)?;
    }
    stop.check()?;
    let pixels = decode::decode_pixels(payload, width, height, layout, &geometry, stop)?;
    Ok(DecodeOutput::new(
        pixels,
        width,
        height,
        geometry.stride,
        layout,
    ))
}

/// Encode a bitmap as an RGBA file.
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, RgbaError> {
    encode::encode_rgba(pixels, width, height, stride, layout, limits, stop)
}
