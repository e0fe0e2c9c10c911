use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_8::part1;

#[derive(Parser, Debug)]
#[command(about = "Multiply the sizes of the three largest circuits")]
struct Args {
    /// Puzzle input, one `x,y,z` junction box per line.
    #[arg(default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt"))]
    input: PathBuf,

    /// How many of the shortest connections to make.
    #[arg(short, long, default_value_t = part1::CONNECTIONS)]
    connections: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;
    let result = part1::process_with(&input, args.connections)?;
    println!("Result: {}", result);
    Ok(())
}
