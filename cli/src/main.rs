use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use img2ascii::{DEFAULT_FONT_RATIO, DEFAULT_RAMP, RenderConfig, RenderError, render_file};

/// Convert a raster image to an ASCII art text rendering
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about = "Luminance-based image to ASCII art converter", long_about = None)]
// -h belongs to --height, so help stays long-only.
#[command(disable_help_flag = true)]
pub struct Args {
    /// Text file to write to (defaults to stdout)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Width of the output in characters
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Height of the output in characters
    #[arg(short = 'h', long)]
    pub height: Option<u32>,

    /// Glyph ramp ordered darkest to lightest
    #[arg(short, long, default_value = DEFAULT_RAMP)]
    pub map: String,

    /// Ratio of the monospace font (width / height)
    #[arg(short, long, default_value_t = DEFAULT_FONT_RATIO)]
    pub ratio: f64,

    /// Invert the image before processing
    #[arg(short, long)]
    pub invert: bool,

    /// Source image file
    pub image_file: PathBuf,

    /// Print help
    #[arg(long, action = ArgAction::HelpLong)]
    help: Option<bool>,
}

fn run(args: &Args) -> Result<(), RenderError> {
    let config = RenderConfig {
        width: args.width,
        height: args.height,
        ratio: args.ratio,
        ramp: args.map.clone(),
        invert: args.invert,
    };

    let text = render_file(&args.image_file, &config)?;

    match &args.file {
        Some(path) => fs::write(path, &text).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?,
        // The block already ends with a newline; println adds the usual
        // blank line after console output.
        None => println!("{text}"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
