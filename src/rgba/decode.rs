//! RGBA file decoder.

use alloc::vec::Vec;
use enough::Stop;

use super::{FILE_BPP, HEADER_LEN, MAGIC, STOP_INTERVAL, payload_len_u64, read_u32_be};
use crate::error::RgbaError;
use crate::pixel::PixelLayout;

/// Parse the RGBA header, returning (width, height).
///
/// Zero dimensions are valid and describe an empty payload.
pub(crate) fn parse_header(data: &[u8]) -> Result<(u32, u32), RgbaError> {
    if data.len() < HEADER_LEN {
        return Err(RgbaError::UnexpectedEof);
    }
    if read_u32_be(data, 0) != MAGIC {
        return Err(RgbaError::UnrecognizedFormat);
    }
    Ok((read_u32_be(data, 4), read_u32_be(data, 8)))
}

/// The packed pixel payload following the header. Trailing bytes are ignored.
pub(crate) fn payload(data: &[u8], width: u32, height: u32) -> Result<&[u8], RgbaError> {
    let too_large = || RgbaError::DimensionsTooLarge { width, height };
    let payload_len = payload_len_u64(width, height).ok_or_else(too_large)?;
    let needed = payload_len
        .checked_add(HEADER_LEN as u64)
        .ok_or_else(too_large)?;
    let actual = data.len();
    if (actual as u64) < needed {
        return Err(RgbaError::Truncated { needed, actual });
    }
    if actual as u64 > needed {
        log::debug!(
            "rgba: ignoring {} trailing bytes after {width}x{height} payload",
            actual as u64 - needed
        );
    }
    // needed <= actual, so this fits in usize.
    Ok(&data[HEADER_LEN..needed as usize])
}

/// Row geometry of a decoded bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OutputGeometry {
    /// Bytes of pixel data per row.
    pub row_bytes: usize,
    /// Bytes from one row start to the next (row_bytes plus alignment padding).
    pub stride: usize,
    pub total_bytes: usize,
}

impl OutputGeometry {
    /// `row_alignment` of 0 or 1 means packed rows.
    pub(crate) fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        row_alignment: u32,
    ) -> Result<Self, RgbaError> {
        let too_large = || RgbaError::DimensionsTooLarge { width, height };
        let row_bytes = layout.min_row_bytes(width).ok_or_else(too_large)?;
        let stride = if row_alignment > 1 {
            row_bytes
                .checked_next_multiple_of(row_alignment as usize)
                .ok_or_else(too_large)?
        } else {
            row_bytes
        };
        let total_bytes = stride
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        Ok(Self {
            row_bytes,
            stride,
            total_bytes,
        })
    }
}

/// Convert the packed RGBA payload into `layout` rows of `geometry.stride` bytes.
///
/// Padding bytes at the end of each row are zero.
pub(crate) fn decode_pixels(
    payload: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    geometry: &OutputGeometry,
    stop: &dyn Stop,
) -> Result<Vec<u8>, RgbaError> {
    let w = width as usize;
    let h = height as usize;
    let src_row = w * FILE_BPP;

    if geometry.total_bytes == 0 {
        log::trace!("rgba decode {width}x{height}: empty image");
        return Ok(Vec::new());
    }

    if layout == PixelLayout::Rgba8 && geometry.stride == src_row {
        log::trace!("rgba decode {width}x{height}: bulk copy");
        let mut out = super::try_with_capacity(payload.len())?;
        out.extend_from_slice(payload);
        return Ok(out);
    }

    let mut out = super::try_alloc(geometry.total_bytes)?;

    #[cfg(feature = "simd")]
    {
        if crate::simd::from_rgba(payload, &mut out, geometry.stride, w, h, layout, stop)? {
            return Ok(out);
        }
    }

    log::trace!(
        "rgba decode {width}x{height} -> {layout:?}, stride {}",
        geometry.stride
    );
    let bpp = layout.bytes_per_pixel();
    let rows = payload
        .chunks_exact(src_row)
        .zip(out.chunks_mut(geometry.stride))
        .take(h);
    for (row_idx, (src, dst)) in rows.enumerate() {
        if row_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        for (s, d) in src
            .chunks_exact(FILE_BPP)
            .zip(dst[..geometry.row_bytes].chunks_exact_mut(bpp))
        {
            layout.write_rgba([s[0], s[1], s[2], s[3]], d);
        }
    }

    Ok(out)
}
