//! rgba2png: convert an RGBA bitmap file to an 8-bit RGBA PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use png::{BitDepth, ColorType};
use zenrgba::{DecodeRequest, Unstoppable};

/// Convert an RGBA bitmap file to a PNG image.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Input RGBA file.
    input: PathBuf,

    /// Output PNG file.
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
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
            eprintln!("rgba2png: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let decoded = DecodeRequest::new(&data)
        .decode(Unstoppable)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;
    if decoded.width == 0 || decoded.height == 0 {
        bail!(
            "{} is an empty {}x{} image; PNG cannot store it",
            args.input.display(),
            decoded.width,
            decoded.height
        );
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    let mut encoder = png::Encoder::new(&mut out, decoded.width, decoded.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header().context("PNG header write error")?;
    writer
        .write_image_data(decoded.pixels())
        .context("PNG data write error")?;
    writer.finish().context("PNG finish error")?;

    out.flush()
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
