use alloc::string::String;
use enough::StopReason;

/// Errors from RGBA file encoding and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RgbaError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    Truncated { needed: u64, actual: usize },

    #[error("image dimensions must be non-zero: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("row stride {stride} is smaller than the minimum row size {min}")]
    StrideTooSmall { stride: usize, min: usize },

    #[error("row stride {stride} is not a multiple of {bytes_per_pixel} bytes per pixel")]
    StrideNotPixelAligned {
        stride: usize,
        bytes_per_pixel: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("failed to allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Broad classification of an [`RgbaError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller described the bitmap incorrectly (zero size, short buffer, bad stride).
    InvalidArgument,
    /// The file bytes are not a well-formed RGBA file.
    MalformedInput,
    /// The image is too large to represent or allocate.
    ResourceExhausted,
    /// A [`enough::Stop`] token asked the operation to stop.
    Cancelled,
}

impl RgbaError {
    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroDimension { .. }
            | Self::StrideTooSmall { .. }
            | Self::StrideNotPixelAligned { .. }
            | Self::LayoutMismatch { .. }
            | Self::BufferTooSmall { .. } => ErrorKind::InvalidArgument,
            Self::UnrecognizedFormat
            | Self::UnexpectedEof
            | Self::Truncated { .. } => ErrorKind::MalformedInput,
            Self::DimensionsTooLarge { .. }
            | Self::LimitExceeded(_)
            | Self::OutOfMemory { .. } => ErrorKind::ResourceExhausted,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for RgbaError {
    fn from(r: StopReason) -> Self {
        RgbaError::Cancelled(r)
    }
}
