mod board;
mod node;
mod search;
mod solution;
mod traits;
mod util;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;

use crate::board::PuzzleError;
use crate::traits::board::DebugPrintable;

/// Finds a minimum-cost blank-move sequence for a 3x4 sliding-tile puzzle.
#[derive(Parser)]
#[command(name = "eleven-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file: three rows of the initial board, an empty line,
    /// three rows of the goal board.
    input: PathBuf,

    /// Where to write the solution (defaults to output_<input name>).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Draw both boards before solving.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (root, goal) = util::read_boards(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))?;

    if cli.verbose {
        println!("{}", "initial board:".bold());
        root.debug_print();
        println!("{}", "goal board:".bold());
        goal.debug_print();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("searching...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = search::solve(root, goal);
    spinner.finish_and_clear();

    match outcome {
        Ok(solution) => {
            let output = cli.output.unwrap_or_else(|| default_output(&cli.input));
            util::write_solution(&cli.input, &output, &solution)
                .with_context(|| format!("could not write {}", output.display()))?;

            println!(
                "{} {} moves, {} nodes generated",
                "solved:".green().bold(),
                solution.path_len(),
                solution.nodes_generated()
            );
            println!("solution written to {}", output.display());
            Ok(())
        }
        Err(PuzzleError::UnsolvableBoard) => {
            println!(
                "{} the goal board cannot be reached from the initial board; \
                 no solution file was written",
                "unsolvable:".yellow().bold()
            );
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

/// output_<input file name>, next to the input file.
fn default_output(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("output_{}", name))
}
