//! pixloc CLI — resolve a pixel coordinate in an image and report its color.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pixloc::{render_marker, resolve, PngFileSink};

#[derive(Parser)]
#[command(name = "pixloc")]
#[command(about = "Locate a pixel in an image: normalize negative indices, validate bounds, report the RGB value")]
#[command(version)]
struct Cli {
    /// Path to the input image.
    image_path: PathBuf,

    /// X coordinate; negative values count back from the right edge.
    #[arg(allow_hyphen_values = true)]
    x: String,

    /// Y coordinate; negative values count back from the bottom edge.
    #[arg(allow_hyphen_values = true)]
    y: String,

    /// Draw a marker at the resolved pixel and write the annotated image.
    #[arg(long)]
    visualize: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Coordinates are taken as raw tokens so the diagnostic stays a single
    // predictable line instead of clap's parse error.
    let (x, y) = match (cli.x.parse::<i64>(), cli.y.parse::<i64>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            println!("Error: x and y must be integers");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Loading image: {}", cli.image_path.display());

    let resolution = match resolve(&cli.image_path, x, y) {
        Ok(r) => r,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Pixel position: ({}, {})", resolution.x, resolution.y);
    println!("X-coordinate: {}", resolution.x);
    println!("Y-coordinate: {}", resolution.y);
    println!("Pixel value (RGB): {:?}", resolution.value);

    if cli.visualize {
        let mut sink = PngFileSink::beside(&cli.image_path);
        if let Err(e) = render_marker(&resolution.image, resolution.x, resolution.y, &mut sink) {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
