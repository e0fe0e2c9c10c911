use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_8::part2;

#[derive(Parser, Debug)]
#[command(about = "Multiply the X coordinates of the last connection that joins every circuit")]
struct Args {
    /// Puzzle input, one `x,y,z` junction box per line.
    #[arg(default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/input2.txt"))]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
