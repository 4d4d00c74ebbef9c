// src/main.rs
//
// mdblocks — convert a markdown file to block-level HTML.
//
// Usage: mdblocks INPUT [OUTPUT]
// - OUTPUT defaults to INPUT with its extension replaced by ".html".
// - Read and write failures exit non-zero with the offending path; nothing is written
//   when the source cannot be read.
//
// CLI flags:
//   --crlf          : rewrite "\r\n" to "\n" before converting
//   -v / -vv        : info / debug logging (RUST_LOG overrides)

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mdblocks::{convert, io, split};
use std::path::PathBuf;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Normalize CRLF line endings before converting
    #[arg(long, action = ArgAction::SetTrue)]
    crlf: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Markdown source file
    input: PathBuf,

    /// HTML destination (default: INPUT with .html extension)
    output: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let src = io::read_source(&cli.input).context("reading markdown source")?;
    let src = if cli.crlf {
        split::normalize_crlf(&src)
    } else {
        src
    };

    let html = convert(&src);

    let out_path = cli
        .output
        .unwrap_or_else(|| io::default_output_path(&cli.input));
    io::write_output(&out_path, &html).context("writing html output")?;

    log::info!("{} -> {}", cli.input.display(), out_path.display());
    Ok(())
}
