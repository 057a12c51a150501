use anyhow::{Context, Result, bail};
use clap::Parser;
use interp2x::io::{self, ImageFormat};
use interp2x::transform::{ScaleMethod, ScaleOp, output_dimensions, process};
use log::info;
use std::path::PathBuf;

/// Reduce or amplify a grayscale image by a factor of two
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image (PNG, JPEG, BMP or PNM); color images are converted to gray
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Resampling method: nearest or bilinear
    #[arg(short, long, default_value = "bilinear")]
    method: ScaleMethod,

    /// Operation: reduce (0.5x) or amplify (2x)
    #[arg(short, long, default_value = "amplify")]
    op: ScaleOp,

    /// Output format; guessed from the output extension when omitted
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    match ImageFormat::from_extension(s) {
        ImageFormat::Unknown => Err(format!(
            "unknown format '{}' (expected png, jpeg, bmp or pnm)",
            s
        )),
        format => Ok(format),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the verbosity flag
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let grid = io::read_image(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    println!("Original: {}x{}", grid.width(), grid.height());

    if output_dimensions(args.method, args.op, grid.width(), grid.height()).is_none() {
        bail!(
            "cannot {} a {}x{} image with {}",
            args.op,
            grid.width(),
            grid.height(),
            args.method
        );
    }

    let result = process(&grid, args.method, args.op)
        .with_context(|| format!("{} {} failed", args.method, args.op))?;
    println!("Processed: {}x{}", result.width(), result.height());

    let format = io::resolve_format(args.format.unwrap_or_default(), &args.output);
    io::write_image(&result, &args.output, format)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {} as {:?}", args.output.display(), format);

    Ok(())
}
