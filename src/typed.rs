//! Typed pixel support via the `rgb` crate.

use crate::pixel::PixelLayout;

mod private {
    pub trait Sealed {}
    impl Sealed for rgb::RGBA8 {}
    impl Sealed for rgb::RGB8 {}
    impl Sealed for rgb::alt::BGRA8 {}
    impl Sealed for rgb::alt::BGR8 {}
}

/// Pixel types that map one-to-one onto a [`PixelLayout`].
pub trait DecodePixel: Copy + 'static + private::Sealed {
    /// The byte layout of this pixel type.
    fn layout() -> PixelLayout;
}

impl DecodePixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}

impl DecodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

impl DecodePixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

impl DecodePixel for rgb::alt::BGR8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_sizes_match_types() {
        fn check<P: DecodePixel>() {
            assert_eq!(core::mem::size_of::<P>(), P::layout().bytes_per_pixel());
        }
        check::<rgb::RGBA8>();
        check::<rgb::RGB8>();
        check::<rgb::alt::BGRA8>();
        check::<rgb::alt::BGR8>();
    }
}
