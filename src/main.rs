// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: scramble a grid and report its loop structure.
//!
//! Stands in for the service layer during development: runs the
//! initialize → scramble → find-loops cycle once and prints a plain-text
//! summary with timings, in the spirit of a quick benchmark.

use clap::Parser;
use hex_loops::{
    find_loops, loop_length_counts, scramble_with_stats, GridState, Pattern,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "hexloops", about = "Scramble loops on a toroidal hex lattice")]
struct Args {
    /// Grid side N (even, 6..=50).
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Number of successful rewrites to aim for.
    #[arg(long, default_value_t = 1000)]
    steps: i64,

    /// RNG seed; omit for a fresh seed per run.
    #[arg(long)]
    seed: Option<u64>,

    /// Start pattern: vertical, diagonal-ne or diagonal-se.
    #[arg(long, default_value = "vertical")]
    pattern: Pattern,

    /// Print the scramble acceptance/rejection breakdown.
    #[arg(long)]
    stats: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut grid = GridState::with_pattern(args.size, args.pattern)?;
    let init_time = start.elapsed();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let start = Instant::now();
    let stats = scramble_with_stats(&mut grid, args.steps, &mut rng)?;
    let scramble_time = start.elapsed();

    let start = Instant::now();
    let loops = find_loops(&grid)?;
    let loop_time = start.elapsed();

    println!(
        "N={} ({} cells), pattern {}",
        grid.size(),
        grid.cell_count(),
        args.pattern
    );
    println!("  init:      {:>8.2?}", init_time);
    println!(
        "  scramble:  {:>8.2?}  ({} of {} requested rewrites)",
        scramble_time, stats.accepted, args.steps
    );
    println!("  find:      {:>8.2?}  ({} loops)", loop_time, loops.len());

    if args.stats {
        println!("  outcomes:  {}", stats);
    }

    println!("  loop lengths:");
    for (length, count) in loop_length_counts(&loops) {
        println!("    {:>5} cells x {:>4}", length, count);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("hexloops: {}", error);
        process::exit(1);
    }
}
