//! RGBA file encoder.

use alloc::vec::Vec;
use enough::Stop;

use super::{HEADER_LEN, STOP_INTERVAL, payload_len_u64, write_header};
use crate::error::RgbaError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Encode a bitmap to RGBA file bytes.
///
/// `stride` is the distance in bytes between row starts; 0 means rows are
/// packed. The last row does not need to carry padding.
pub(crate) fn encode_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, RgbaError> {
    if width == 0 || height == 0 {
        return Err(RgbaError::ZeroDimension { width, height });
    }
    let too_large = || RgbaError::DimensionsTooLarge { width, height };
    let h = height as usize;
    let bpp = layout.bytes_per_pixel();

    let min_row = layout.min_row_bytes(width).ok_or_else(too_large)?;
    let stride = match stride {
        0 => min_row,
        s if s < min_row => {
            return Err(RgbaError::StrideTooSmall { stride: s, min: min_row });
        }
        s => s,
    };
    // A bitmap whose extent overflows usize cannot fit in any slice.
    let needed = (h - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(min_row))
        .unwrap_or(usize::MAX);
    if pixels.len() < needed {
        return Err(RgbaError::BufferTooSmall {
            needed,
            actual: pixels.len(),
        });
    }

    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let payload_len = payload_len_u64(width, height)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(too_large)?;
    let total = payload_len
        .checked_add(HEADER_LEN)
        .ok_or_else(too_large)?;
    if let Some(limits) = limits {
        limits.check_memory(total)?;
    }

    stop.check()?;

    let mut out = super::try_with_capacity(total)?;
    write_header(&mut out, width, height);

    if layout == PixelLayout::Rgba8 && stride == min_row {
        log::trace!("rgba encode {width}x{height}: bulk copy");
        out.extend_from_slice(&pixels[..payload_len]);
        return Ok(out);
    }

    #[cfg(feature = "simd")]
    {
        if crate::simd::to_rgba(pixels, stride, layout, width as usize, h, &mut out, stop)? {
            return Ok(out);
        }
    }

    log::trace!("rgba encode {width}x{height} from {layout:?}, stride {stride}");
    for row_idx in 0..h {
        if row_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let row = &pixels[row_idx * stride..][..min_row];
        for px in row.chunks_exact(bpp) {
            out.extend_from_slice(&layout.read_rgba(px));
        }
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    fn enc(pixels: &[u8], w: u32, h: u32, stride: usize, layout: PixelLayout) -> Vec<u8> {
        encode_rgba(pixels, w, h, stride, layout, None, &Unstoppable).unwrap()
    }

    #[test]
    fn rgb_two_pixels() {
        let out = enc(&[10, 20, 30, 40, 50, 60], 2, 1, 0, PixelLayout::Rgb8);
        assert_eq!(
            out,
            vec![
                0x52, 0x47, 0x42, 0x41, 0, 0, 0, 2, 0, 0, 0, 1, //
                0x0A, 0x14, 0x1E, 0xFF, 0x28, 0x32, 0x3C, 0xFF,
            ]
        );
    }

    #[test]
    fn padded_stride_skips_padding() {
        // 1x2 BGR with 2 bytes of padding per row.
        let pixels = [3, 2, 1, 0xEE, 0xEE, 6, 5, 4];
        let out = enc(&pixels, 1, 2, 5, PixelLayout::Bgr8);
        assert_eq!(&out[HEADER_LEN..], &[1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn last_row_needs_no_padding() {
        let pixels = [1, 2, 3, 4, 0, 0, 5, 6, 7, 8];
        let out = enc(&pixels, 1, 2, 6, PixelLayout::Rgba8);
        assert_eq!(&out[HEADER_LEN..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rejects_zero_dimensions() {
        for (w, h) in [(0, 1), (1, 0), (0, 0)] {
            let err = encode_rgba(&[0; 4], w, h, 0, PixelLayout::Rgba8, None, &Unstoppable)
                .unwrap_err();
            assert!(matches!(err, RgbaError::ZeroDimension { .. }));
        }
    }

    #[test]
    fn rejects_small_stride() {
        let err = encode_rgba(&[0; 32], 4, 2, 11, PixelLayout::Rgb8, None, &Unstoppable)
            .unwrap_err();
        assert!(matches!(
            err,
            RgbaError::StrideTooSmall { stride: 11, min: 12 }
        ));
    }

    #[test]
    fn rejects_short_buffer() {
        let err = encode_rgba(&[], 1, 1, 0, PixelLayout::Rgba8, None, &Unstoppable).unwrap_err();
        assert!(matches!(
            err,
            RgbaError::BufferTooSmall {
                needed: 4,
                actual: 0
            }
        ));
    }

    #[test]
    fn overflowing_stride_is_a_short_buffer() {
        let err = encode_rgba(&[0; 64], 1, 3, usize::MAX, PixelLayout::Rgb8, None, &Unstoppable)
            .unwrap_err();
        assert!(matches!(
            err,
            RgbaError::BufferTooSmall {
                needed: usize::MAX,
                actual: 64
            }
        ));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument);
    }

    #[test]
    fn memory_limit_applies_to_output() {
        let limits = Limits {
            max_memory_bytes: Some(15),
            ..Default::default()
        };
        let err = encode_rgba(
            &[0; 4],
            1,
            1,
            0,
            PixelLayout::Rgba8,
            Some(&limits),
            &Unstoppable,
        )
        .unwrap_err();
        assert!(matches!(err, RgbaError::LimitExceeded(_)));
    }
}
