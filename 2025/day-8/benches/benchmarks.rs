use std::sync::LazyLock;

use aoc2025_day_8::{build_edges, parse_points, part1, part2, Point};

fn main() {
    divan::main();
}

/// A deterministic cloud of 1000 points, the size of a real puzzle input.
static INPUT: LazyLock<String> = LazyLock::new(|| {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % 100_000
    };
    (0..1000)
        .map(|_| format!("{},{},{}", next(), next(), next()))
        .collect::<Vec<_>>()
        .join("\n")
});

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(&INPUT)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(&INPUT)).unwrap();
}

#[divan::bench]
fn edges(bencher: divan::Bencher) {
    let points: Vec<Point> = parse_points(&INPUT);
    bencher.bench(|| build_edges(divan::black_box(&points)));
}
