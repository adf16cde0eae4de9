use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tlzss::{decode, encode_with_window, DEFAULT_WINDOW_SIZE};

#[derive(Parser, Debug)]
#[command(name = "tlzss")]
#[command(about = "Compress text with human-readable LZSS <offset,length> tokens")]
#[command(version)]
struct Args {
    /// Input file (use - or omit for stdin)
    input: Option<PathBuf>,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Expand tokens instead of compressing
    #[arg(short, long)]
    decode: bool,

    /// Sliding window size in bytes
    #[arg(short = 'w', long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Show statistics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let text = read_input(args.input.as_ref())?;

    let start = std::time::Instant::now();
    let result =
        if args.decode { decode(&text)? } else { encode_with_window(&text, args.window)? };
    let elapsed = start.elapsed();

    write_output(args.output.as_ref(), &result)?;

    if args.verbose {
        let mode = if args.decode { "Decoded" } else { "Encoded" };
        eprintln!("{} {} bytes -> {} bytes", mode, text.len(), result.len());
        eprintln!("  Ratio:  {:.3}", result.len() as f64 / text.len().max(1) as f64);
        eprintln!("  Time:   {:.2?}", elapsed);
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) if p.to_str() != Some("-") => fs::read_to_string(p),
        _ => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&PathBuf>, bytes: &[u8]) -> io::Result<()> {
    match path {
        Some(p) if p.to_str() != Some("-") => fs::write(p, bytes),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}
