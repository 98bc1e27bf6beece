//! png2rgba: convert a PNG image to an RGBA bitmap file.
//!
//! Any PNG color type and bit depth is accepted: palettes and low-bit gray are
//! expanded, 16-bit samples are stripped to 8, tRNS becomes alpha, and images
//! without alpha are written opaque.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use png::{BitDepth, ColorType, Transformations};
use zenrgba::{EncodeRequest, PixelLayout, Unstoppable};

/// Convert a PNG image to an RGBA bitmap file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Input PNG file.
    input: PathBuf,

    /// Output RGBA file.
    output: PathBuf,
}

/// Pixels read from a PNG, ready for the encoder.
struct PngImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("png2rgba: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let image = read_png(&args.input)?;
    let file = EncodeRequest::new()
        .with_stride(image.stride)
        .encode(
            &image.pixels,
            image.width,
            image.height,
            image.layout,
            Unstoppable,
        )
        .with_context(|| format!("failed to encode {}", args.input.display()))?;
    std::fs::write(&args.output, file)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}

fn read_png(path: &Path) -> anyhow::Result<PngImage> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("error reading PNG header: {}", path.display()))?;

    let buf_size = reader
        .output_buffer_size()
        .context("PNG output buffer size overflows")?;
    let mut buf = vec![0; buf_size];
    let frame = reader
        .next_frame(&mut buf)
        .with_context(|| format!("error reading PNG image: {}", path.display()))?;
    buf.truncate(frame.buffer_size());

    if frame.bit_depth != BitDepth::Eight {
        bail!("unexpected PNG output bit depth {:?}", frame.bit_depth);
    }

    let (pixels, stride, layout) = match frame.color_type {
        ColorType::Rgba => (buf, frame.line_size, PixelLayout::Rgba8),
        ColorType::Rgb => (buf, frame.line_size, PixelLayout::Rgb8),
        ColorType::Grayscale => (
            expand_gray(&buf, frame.line_size, frame.width, frame.height, false),
            0,
            PixelLayout::Rgb8,
        ),
        ColorType::GrayscaleAlpha => (
            expand_gray(&buf, frame.line_size, frame.width, frame.height, true),
            0,
            PixelLayout::Rgba8,
        ),
        other => bail!("unsupported PNG output color type {other:?}"),
    };

    Ok(PngImage {
        pixels,
        width: frame.width,
        height: frame.height,
        stride,
        layout,
    })
}

/// Gray or gray+alpha rows to packed RGB or RGBA.
fn expand_gray(buf: &[u8], line_size: usize, width: u32, height: u32, alpha: bool) -> Vec<u8> {
    let src_bpp = if alpha { 2 } else { 1 };
    let dst_bpp = if alpha { 4 } else { 3 };
    let w = width as usize;
    let mut out = Vec::with_capacity(w * height as usize * dst_bpp);
    for row in buf.chunks(line_size).take(height as usize) {
        for px in row[..w * src_bpp].chunks_exact(src_bpp) {
            let g = px[0];
            out.extend_from_slice(&[g, g, g]);
            if alpha {
                out.push(px[1]);
            }
        }
    }
    out
}
