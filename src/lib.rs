//! # zenrgba
//!
//! Decoder and encoder for the RGBA bitmap file: a trivially simple container
//! holding a 4-byte magic (`RGBA`), big-endian u32 width and height, and packed
//! 8-bit R,G,B,A pixels from the top-left corner, row by row.
//!
//! The work is in converting to and from in-memory bitmaps that use a
//! different byte order or carry row padding.
//!
//! ## Pixel layouts
//!
//! [`PixelLayout`] covers `Rgba8`, `Abgr8`, `Argb8`, `Bgra8`, `Rgb8` and `Bgr8`.
//! Encoding from `Rgb8`/`Bgr8` writes opaque alpha (0xFF); decoding to them
//! drops alpha.
//!
//! ## Fast paths
//!
//! Packed `Rgba8` input and output are a single copy. Everything else goes
//! through a per-pixel loop, or through [garb](https://docs.rs/garb) SIMD
//! kernels for BGRA/RGB/BGR with the `simd` feature.
//!
//! ## Non-Goals
//!
//! - Compression
//! - Color-space conversion
//! - Animation / multiple frames
//! - Bit depths other than 8 bits per channel
//!
//! ## Usage
//!
//! ```
//! use zenrgba::{DecodeRequest, EncodeRequest, ImageInfo, PixelLayout, Unstoppable};
//!
//! // 2x1 RGB image
//! let pixels = [10u8, 20, 30, 40, 50, 60];
//! let file = EncodeRequest::new().encode(&pixels, 2, 1, PixelLayout::Rgb8, Unstoppable)?;
//! assert_eq!(file.len(), 12 + 2 * 4);
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(&file)?;
//! assert_eq!((info.width, info.height), (2, 1));
//!
//! // Decode to BGRA with rows padded to 16 bytes
//! let decoded = DecodeRequest::new(&file)
//!     .with_layout(PixelLayout::Bgra8)
//!     .with_row_alignment(16)
//!     .decode(Unstoppable)?;
//! assert_eq!(decoded.stride, 16);
//! assert_eq!(decoded.row(0), Some(&[30, 20, 10, 255, 60, 50, 40, 255][..]));
//! # Ok::<(), zenrgba::RgbaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;
mod rgba;

#[cfg(feature = "simd")]
mod simd;

#[cfg(feature = "rgb")]
mod typed;

mod decode;
mod encode;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{ErrorKind, RgbaError};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use rgba::{HEADER_LEN, MAGIC};

#[cfg(feature = "rgb")]
pub use typed::DecodePixel;

/// Encode a bitmap to RGBA file bytes.
///
/// `stride` is the source row stride in bytes; 0 means rows are packed
/// (`width * layout.bytes_per_pixel()`).
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
    stop: impl Stop,
) -> Result<Vec<u8>, RgbaError> {
    EncodeRequest::new()
        .with_stride(stride)
        .encode(pixels, width, height, layout, stop)
}

/// Decode RGBA file bytes into a bitmap in `layout`.
///
/// `row_alignment` pads each output row to a multiple of that many bytes;
/// 0 or 1 packs rows.
pub fn decode(
    data: &[u8],
    layout: PixelLayout,
    row_alignment: u32,
    stop: impl Stop,
) -> Result<DecodeOutput, RgbaError> {
    DecodeRequest::new(data)
        .with_layout(layout)
        .with_row_alignment(row_alignment)
        .decode(stop)
}
