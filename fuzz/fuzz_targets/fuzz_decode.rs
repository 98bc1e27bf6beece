#![no_main]
use libfuzzer_sys::fuzz_target;
use zenrgba::{ImageInfo, PixelLayout};

fuzz_target!(|data: &[u8]| {
    // Probing and decoding must never panic
    let _ = ImageInfo::from_bytes(data);

    // Last byte picks the row alignment so odd strides get exercised too
    let alignment = data.last().copied().unwrap_or(0) as u32;
    for layout in PixelLayout::ALL {
        let _ = zenrgba::decode(data, layout, 0, enough::Unstoppable);
        let _ = zenrgba::decode(data, layout, alignment, enough::Unstoppable);
    }
});
