use clap::Parser;
use std::process::ExitCode;
use sudoku_engine::{Difficulty, Generator, Puzzle};

/// Generate Sudoku puzzles with a guaranteed unique solution
#[derive(Parser)]
#[command(name = "sudoku-gen", version)]
struct Cli {
    /// Puzzle difficulty: easy, medium, or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Seed the generator for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Emit one JSON {"puzzle", "solution"} object per line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut generator = match cli.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    for i in 0..cli.count {
        let result = generator
            .generate(cli.difficulty)
            .map_err(|err| err.to_string())
            .and_then(|generated| print_puzzle(&generated, cli.json, i));
        if let Err(err) = result {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn print_puzzle(generated: &Puzzle, json: bool, index: usize) -> Result<(), String> {
    if json {
        let line = serde_json::to_string(generated).map_err(|err| err.to_string())?;
        println!("{}", line);
        return Ok(());
    }

    if index > 0 {
        println!();
    }
    println!("Puzzle ({} givens):", generated.puzzle.given_count());
    println!("{}", generated.puzzle);
    println!("Solution:");
    println!("{}", generated.solution);
    Ok(())
}
