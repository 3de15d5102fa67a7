use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bmpfilter::pipeline;

/// Grayscale a 24-bit BMP, then write its Sobel edge map and its
/// histogram-equalized version.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input 24-bit uncompressed BMP
    input: PathBuf,

    /// Where to write the edge map
    edges_output: PathBuf,

    /// Where to write the equalized image
    equalized_output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let image = pipeline::read_bmp(&args.input)
        .inspect_err(|e| {
            if e.is_unsupported() {
                eprintln!("This format is not supported!");
            }
        })
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let output = pipeline::run(&image);

    pipeline::write_bmp(&args.edges_output, &output.edges)
        .with_context(|| format!("failed to write {}", args.edges_output.display()))?;
    pipeline::write_bmp(&args.equalized_output, &output.equalized)
        .with_context(|| format!("failed to write {}", args.equalized_output.display()))?;

    log::info!("{}x{} image processed", image.width(), image.height());
    Ok(())
}
