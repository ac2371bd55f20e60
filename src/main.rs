use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use rational_rref::console::printer::{format_assignments, print_augmented_matrix};
use rational_rref::console::reader::read_matrix;
use rational_rref::reduce::analysis::{classify, SolutionSet};
use rational_rref::reduce::reducer::{reduce_with, ReduceConfig, DEFAULT_MAX_ROUNDS};

/// Reads an augmented matrix from stdin and prints its reduced row echelon form.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Upper bound on reduction rounds
    #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,
}

fn run(config: &ReduceConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(matrix) = read_matrix(stdin.lock(), &mut out)? else {
        return Ok(());
    };

    print_augmented_matrix(&mut out, &matrix)?;
    writeln!(out)?;

    let reduction = reduce_with(matrix, config);
    print_augmented_matrix(&mut out, &reduction.matrix)?;
    writeln!(out)?;

    match classify(&reduction.matrix) {
        SolutionSet::Unique => log::info!("{}", SolutionSet::Unique),
        other => log::warn!("{other}"),
    }
    write!(out, "{}", format_assignments(&reduction.matrix))?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");

    let config = ReduceConfig {
        max_rounds: args.max_rounds,
    };
    if let Err(err) = run(&config) {
        eprintln!("ran into error: {err:?}");
        process::exit(1)
    }
}
