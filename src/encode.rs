use alloc::vec::Vec;
use enough::Stop;

use crate::error::RgbaError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Builder for encoding a bitmap as an RGBA file.
///
/// ```
/// use zenrgba::{EncodeRequest, PixelLayout, Unstoppable};
///
/// // 1x2 BGRA image with 8-byte rows.
/// let pixels = [3, 2, 1, 4, 0, 0, 0, 0, 7, 6, 5, 8];
/// let file = EncodeRequest::new()
///     .with_stride(8)
///     .encode(&pixels, 1, 2, PixelLayout::Bgra8, Unstoppable)?;
/// assert_eq!(&file[12..], &[1, 2, 3, 4, 5, 6, 7, 8]);
/// # Ok::<(), zenrgba::RgbaError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    stride: usize,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source row stride in bytes. 0 (the default) means rows are packed.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode `pixels` in `layout` to a newly allocated RGBA file.
    pub fn encode(
        self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<Vec<u8>, RgbaError> {
        crate::rgba::encode(
            pixels,
            width,
            height,
            self.stride,
            layout,
            self.limits,
            &stop,
        )
    }

    /// Encode a packed slice of typed pixels.
    #[cfg(feature = "rgb")]
    pub fn encode_pixels<P: crate::DecodePixel>(
        self,
        pixels: &[P],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, RgbaError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        let bytes = rgb::ComponentBytes::as_bytes(pixels);
        self.with_stride(0)
            .encode(bytes, width, height, P::layout(), stop)
    }

    /// Encode an [`imgref::ImgRef`], honoring its stride.
    #[cfg(feature = "imgref")]
    pub fn encode_img<P: crate::DecodePixel>(
        self,
        img: imgref::ImgRef<'_, P>,
        stop: impl Stop,
    ) -> Result<Vec<u8>, RgbaError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        let (Ok(width), Ok(height)) = (u32::try_from(img.width()), u32::try_from(img.height()))
        else {
            return Err(RgbaError::DimensionsTooLarge {
                width: u32::MAX,
                height: u32::MAX,
            });
        };
        let stride = img.stride() * P::layout().bytes_per_pixel();
        let buf: &[P] = img.buf();
        let bytes = rgb::ComponentBytes::as_bytes(buf);
        self.with_stride(stride)
            .encode(bytes, width, height, P::layout(), stop)
    }
}
