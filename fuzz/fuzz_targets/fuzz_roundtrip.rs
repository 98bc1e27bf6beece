#![no_main]
use libfuzzer_sys::fuzz_target;
use zenrgba::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    for layout in PixelLayout::ALL {
        let Ok(decoded) = decode(data, layout, 8, enough::Unstoppable) else {
            return;
        };
        // Empty images decode but cannot be encoded
        if decoded.width == 0 || decoded.height == 0 {
            assert!(decoded.pixels().is_empty());
            return;
        }

        let reencoded = encode(
            decoded.pixels(),
            decoded.width,
            decoded.height,
            decoded.stride,
            decoded.layout,
            enough::Unstoppable,
        )
        .expect("decoded image failed to re-encode");

        let Ok(decoded2) = decode(&reencoded, layout, 8, enough::Unstoppable) else {
            panic!("re-encoded data failed to decode");
        };

        assert_eq!(decoded.width, decoded2.width);
        assert_eq!(decoded.height, decoded2.height);
        assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");

        // Alpha layouts carry every payload byte through unchanged
        if layout == PixelLayout::Rgba8 {
            let payload = decoded.width as usize * decoded.height as usize * 4;
            assert_eq!(&reencoded[HEADER_LEN..], &data[HEADER_LEN..HEADER_LEN + payload]);
        }
    }
});
