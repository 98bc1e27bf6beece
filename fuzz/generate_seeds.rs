#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32) -> Vec<u8> {
    let mut out = b"RGBA".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x1 opaque
    let mut two = header(2, 1);
    two.extend_from_slice(&[10, 20, 30, 255, 40, 50, 60, 255]);
    fs::write(format!("{dir}/rgba_2x1.rgba"), two).unwrap();

    // 3x3 gradient with translucent alpha
    let mut grad = header(3, 3);
    for i in 0..9u8 {
        grad.extend_from_slice(&[i * 28, 255 - i * 28, i * 7, 128 + i]);
    }
    fs::write(format!("{dir}/rgba_3x3.rgba"), grad).unwrap();

    // 5x1 so 3-byte layouts get odd row widths
    let mut wide = header(5, 1);
    wide.extend_from_slice(&[0x7f; 20]);
    fs::write(format!("{dir}/rgba_5x1.rgba"), wide).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/magic_only.bin"), b"RGBA").unwrap();
    fs::write(format!("{dir}/header_only.rgba"), header(1, 1)).unwrap();
    fs::write(format!("{dir}/zero_width.rgba"), header(0, 4)).unwrap();
    fs::write(format!("{dir}/huge.rgba"), header(u32::MAX, u32::MAX)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
