use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::RgbaError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decoded bitmap. The pixel buffer is owned and belongs to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Bytes from the start of one row to the start of the next.
    pub stride: usize,
    pub layout: PixelLayout,
}

impl DecodeOutput {
    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            stride,
            layout,
        }
    }

    /// Access the pixel data, including any row padding.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes of pixel data in one row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.layout.bytes_per_pixel()
    }

    /// Whether rows are tightly packed (no alignment padding).
    pub fn is_packed(&self) -> bool {
        self.stride == self.row_bytes()
    }

    /// Pixel bytes of row `y` without padding, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        self.pixels.get(start..start + self.row_bytes())
    }

    /// Iterate rows top to bottom, padding stripped.
    ///
    /// Yields `height` rows; they are empty when the width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Padding between rows appears as extra pixels when the stride is wider
    /// than a row. Returns [`RgbaError::LayoutMismatch`] if the pixel layout
    /// doesn't match `P`, and [`RgbaError::StrideNotPixelAligned`] if the
    /// stride is not a whole number of pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], RgbaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(RgbaError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        self.stride_in_pixels()?;
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Row alignment padding is carried in the `ImgRef` stride. Empty images
    /// have no `ImgRef` form and return [`RgbaError::ZeroDimension`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, RgbaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        self.require_pixels()?;
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new_stride(
            pixels,
            self.width as usize,
            self.height as usize,
            self.stride_in_pixels()?,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, RgbaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        self.require_pixels()?;
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new_stride(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
            self.stride_in_pixels()?,
        ))
    }

    #[cfg(feature = "imgref")]
    fn require_pixels(&self) -> Result<(), RgbaError> {
        if self.width == 0 || self.height == 0 {
            return Err(RgbaError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[cfg(feature = "rgb")]
    fn stride_in_pixels(&self) -> Result<usize, RgbaError> {
        let bpp = self.layout.bytes_per_pixel();
        if self.stride % bpp != 0 {
            return Err(RgbaError::StrideNotPixelAligned {
                stride: self.stride,
                bytes_per_pixel: bpp,
            });
        }
        Ok(self.stride / bpp)
    }
}

/// Builder for decoding an RGBA file.
///
/// ```
/// use zenrgba::{DecodeRequest, PixelLayout, Unstoppable};
///
/// let file = [0x52, 0x47, 0x42, 0x41, 0, 0, 0, 1, 0, 0, 0, 1, 1, 2, 3, 4];
/// let decoded = DecodeRequest::new(&file)
///     .with_layout(PixelLayout::Bgr8)
///     .decode(Unstoppable)?;
/// assert_eq!(decoded.pixels(), &[3, 2, 1]);
/// # Ok::<(), zenrgba::RgbaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    layout: PixelLayout,
    row_alignment: u32,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Decode `data` to packed [`PixelLayout::Rgba8`] unless configured otherwise.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            layout: PixelLayout::Rgba8,
            row_alignment: 0,
            limits: None,
        }
    }

    /// Output pixel layout.
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Pad each output row to a multiple of `alignment` bytes. 0 or 1 packs rows.
    pub fn with_row_alignment(mut self, alignment: u32) -> Self {
        self.row_alignment = alignment;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, RgbaError> {
        crate::rgba::decode(
            self.data,
            self.layout,
            self.row_alignment,
            self.limits,
            &stop,
        )
    }
}
