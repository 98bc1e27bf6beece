//! SIMD swizzles via garb for the layouts it covers.
//!
//! Each function returns `Ok(false)` when the layout has no garb kernel and
//! the caller should run its scalar loop instead. Rows go to garb in bands of
//! [`STOP_INTERVAL`] with a cancellation check before each band.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::RgbaError;
use crate::pixel::PixelLayout;
use crate::rgba::{HEADER_LEN, STOP_INTERVAL};

type StridedFn =
    fn(&[u8], usize, &mut [u8], usize, usize, usize) -> Result<(), garb::SizeError>;

/// Run `convert` over `h` rows, one band at a time.
///
/// `on_size_error` builds the error reported if garb rejects the buffers.
#[allow(clippy::too_many_arguments)]
fn convert_banded(
    convert: StridedFn,
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    w: usize,
    h: usize,
    stop: &dyn Stop,
    on_size_error: impl Fn() -> RgbaError,
) -> Result<(), RgbaError> {
    for band_start in (0..h).step_by(STOP_INTERVAL) {
        stop.check()?;
        let rows = STOP_INTERVAL.min(h - band_start);
        let src_band = src.get(band_start * src_stride..).ok_or_else(&on_size_error)?;
        let dst_band = dst
            .get_mut(band_start * dst_stride..)
            .ok_or_else(&on_size_error)?;
        convert(src_band, src_stride, dst_band, dst_stride, w, rows)
            .map_err(|_| on_size_error())?;
    }
    Ok(())
}

/// Convert `layout` rows to packed RGBA, appending to `out` (which holds the header).
pub(crate) fn to_rgba(
    src: &[u8],
    src_stride: usize,
    layout: PixelLayout,
    w: usize,
    h: usize,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<bool, RgbaError> {
    let convert: StridedFn = match layout {
        PixelLayout::Bgra8 => garb::bgra_to_rgba_strided,
        PixelLayout::Rgb8 => garb::rgb_to_rgba_strided,
        PixelLayout::Bgr8 => garb::bgr_to_rgba_strided,
        _ => return Ok(false),
    };
    log::trace!("rgba encode {w}x{h} from {layout:?}: garb");
    let dst_stride = w * 4;
    out.resize(HEADER_LEN + dst_stride * h, 0);
    convert_banded(
        convert,
        src,
        src_stride,
        &mut out[HEADER_LEN..],
        dst_stride,
        w,
        h,
        stop,
        || RgbaError::BufferTooSmall {
            needed: (h - 1) * src_stride + w * layout.bytes_per_pixel(),
            actual: src.len(),
        },
    )?;
    Ok(true)
}

/// Convert packed RGBA to `layout` rows of `dst_stride` bytes.
pub(crate) fn from_rgba(
    src: &[u8],
    dst: &mut [u8],
    dst_stride: usize,
    w: usize,
    h: usize,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<bool, RgbaError> {
    let convert: StridedFn = match layout {
        PixelLayout::Bgra8 => garb::rgba_to_bgra_strided,
        PixelLayout::Rgb8 => garb::rgba_to_rgb_strided,
        PixelLayout::Bgr8 => garb::rgba_to_bgr_strided,
        _ => return Ok(false),
    };
    log::trace!("rgba decode {w}x{h} -> {layout:?}: garb");
    let actual = dst.len();
    convert_banded(convert, src, w * 4, dst, dst_stride, w, h, stop, || {
        RgbaError::BufferTooSmall {
            needed: (h - 1) * dst_stride + w * layout.bytes_per_pixel(),
            actual,
        }
    })?;
    Ok(true)
}
