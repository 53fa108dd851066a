//! hexlish2img - Encode hexlish text to block images and back
//!
//! A command-line tool for converting hexlish (or hex) text to PNG/SVG color
//! grids and decoding those grids back to text.

use clap::{CommandFactory, Parser};
use hexlish::{hexlish_decode, hexlish_encode, translate_hex, translate_hexlish};
use hexlish::{EncodeOptions, ImageFormat};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hexlish2img")]
#[command(version)]
#[command(about = "Encode hexlish text to PNG/SVG block images and back", long_about = None)]
#[command(after_help = "Examples:\n  \
    Encode: cat hexfile.txt | hexlish2img -b 16 > output.png\n  \
    Decode: cat input.png | hexlish2img -d > output.txt")]
struct Cli {
    /// Decode a PNG/SVG image to hexlish text
    #[arg(short, long)]
    decode: bool,

    /// Number of blocks per row (0 for a single row)
    #[arg(short, long, default_value = "0")]
    blocks_per_row: usize,

    /// Use SVG instead of PNG
    #[arg(short = 'v', long)]
    svg: bool,

    /// Read (encode) or write (decode) raw hex digits instead of hexlish
    #[arg(short = 'x', long)]
    hex: bool,

    /// Input file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long)]
    verbose: bool,

    /// Log codec internals to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args_os().len() == 1 {
        eprintln!("{}", Cli::command().render_help());
        process::exit(0);
    }
    let cli = Cli::parse();
    init_logging(&cli);

    let input = match &cli.input {
        Some(path) => fs::read(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let format = if cli.svg {
        ImageFormat::Svg
    } else {
        ImageFormat::Png
    };

    let output = if cli.decode {
        tracing::info!("Decoding {:?} image ({} bytes)", format, input.len());
        let text = hexlish_decode(&input, format)?;
        let text = if cli.hex {
            translate_hexlish(&text)?
        } else {
            text
        };
        tracing::info!("Decoded {} symbols", text.trim_end().len());
        text.into_bytes()
    } else {
        let text = String::from_utf8(input).map_err(|e| format!("Input is not UTF-8: {}", e))?;
        let text = if cli.hex { translate_hex(&text)? } else { text };
        let opts = EncodeOptions {
            blocks_per_row: cli.blocks_per_row,
            format,
        };
        tracing::info!(
            "Encoding to {:?} with {} blocks per row",
            format,
            opts.blocks_per_row
        );
        hexlish_encode(&text, &opts)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &output)?;
            tracing::info!("Written {} bytes to '{}'", output.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
