use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(
    about = "Huffman-compress text from stdin to stdout, or reverse it",
    long_about = None,
    disable_help_flag = true
)]
struct Args {
    /// `compress` to compress; anything else, or nothing, decompresses.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Compress,
    Decompress,
}

impl Args {
    /// Only the first word matters; everything after it is ignored.
    fn mode(&self) -> Mode {
        match self.words.first().map(String::as_str) {
            Some("compress") => Mode::Compress,
            _ => Mode::Decompress,
        }
    }
}

fn transform(mode: Mode, input: Vec<u8>) -> Result<Vec<u8>> {
    match mode {
        Mode::Compress => {
            let text = String::from_utf8(input).context("input is not valid UTF-8")?;
            zipper::compress(&text).context("compression failed")
        }
        Mode::Decompress => Ok(zipper::decompress(&input)
            .context("decompression failed")?
            .into_bytes()),
    }
}

/// Runs the whole transform before anything reaches `output`.
fn run<W: Write>(mode: Mode, input: Vec<u8>, output: &mut W) -> Result<()> {
    let bytes = transform(mode, input)?;
    info!("writing {} bytes", bytes.len());

    output
        .write_all(&bytes)
        .context("writing standard output")?;
    output.flush().context("flushing standard output")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("reading standard input")?;

    run(args.mode(), input, &mut io::stdout().lock())
}
