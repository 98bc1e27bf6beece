/// In-memory pixel byte layout, 8 bits per channel.
///
/// Names list channels in memory order: `Argb8` stores A, R, G, B at
/// increasing byte offsets. The RGBA file always stores `Rgba8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 4 channels, R G B A. Same as the file payload.
    Rgba8,
    /// 4 channels, A B G R.
    Abgr8,
    /// 4 channels, A R G B.
    Argb8,
    /// 4 channels, B G R A.
    Bgra8,
    /// 3 channels, R G B (opaque).
    Rgb8,
    /// 3 channels, B G R (opaque).
    Bgr8,
}

impl PixelLayout {
    /// Every layout, in declaration order.
    pub const ALL: [PixelLayout; 6] = [
        Self::Rgba8,
        Self::Abgr8,
        Self::Argb8,
        Self::Bgra8,
        Self::Rgb8,
        Self::Bgr8,
    ];

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgba8 | Self::Abgr8 | Self::Argb8 | Self::Bgra8 => 4,
            Self::Rgb8 | Self::Bgr8 => 3,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.bytes_per_pixel()
    }

    /// Whether the layout stores an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.bytes_per_pixel() == 4
    }

    /// Byte offsets of R, G, B and A within one pixel.
    ///
    /// Alpha is `None` for the opaque 3-byte layouts.
    pub fn channel_offsets(&self) -> [Option<usize>; 4] {
        match self {
            Self::Rgba8 => [Some(0), Some(1), Some(2), Some(3)],
            Self::Abgr8 => [Some(3), Some(2), Some(1), Some(0)],
            Self::Argb8 => [Some(1), Some(2), Some(3), Some(0)],
            Self::Bgra8 => [Some(2), Some(1), Some(0), Some(3)],
            Self::Rgb8 => [Some(0), Some(1), Some(2), None],
            Self::Bgr8 => [Some(2), Some(1), Some(0), None],
        }
    }

    /// Minimum bytes for one row of `width` pixels, or `None` on overflow.
    pub fn min_row_bytes(&self, width: u32) -> Option<usize> {
        (width as usize).checked_mul(self.bytes_per_pixel())
    }

    /// Read one pixel (`px.len() >= bytes_per_pixel()`) as R, G, B, A.
    ///
    /// Opaque layouts report alpha 0xFF.
    #[inline]
    pub fn read_rgba(&self, px: &[u8]) -> [u8; 4] {
        let mut rgba = [0xFF; 4];
        for (out, offset) in rgba.iter_mut().zip(self.channel_offsets()) {
            if let Some(offset) = offset {
                *out = px[offset];
            }
        }
        rgba
    }

    /// Write one R, G, B, A pixel into `px` in this layout.
    ///
    /// Opaque layouts drop alpha.
    #[inline]
    pub fn write_rgba(&self, rgba: [u8; 4], px: &mut [u8]) {
        for (value, offset) in rgba.into_iter().zip(self.channel_offsets()) {
            if let Some(offset) = offset {
                px[offset] = value;
            }
        }
    }
}
