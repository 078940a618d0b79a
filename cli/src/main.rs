use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dinopuzzle_core::catalog::{puzzle_info, DEFAULT_PUZZLE_SLUG, PUZZLE_CATALOG};
use dinopuzzle_core::game::BOARD_SIZE_DEFAULT;
use dinopuzzle_core::{layout, Difficulty, GameRules, GameSession};
use rand::Rng;
use serde::{Deserialize, Serialize};

mod bot;

#[derive(Parser)]
#[command(name = "dinopuzzle", version, about = "Inspect and autoplay dinopuzzle boards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in puzzle images.
    Puzzles,
    /// Print the piece grid for a difficulty.
    Layout {
        #[arg(long, default_value = "easy")]
        difficulty: String,
        #[arg(long, default_value_t = BOARD_SIZE_DEFAULT)]
        board_size: f32,
        #[arg(long)]
        json: bool,
    },
    /// Scramble a board and drive it to completion through the gesture
    /// surface.
    Solve {
        #[arg(long, default_value = "easy")]
        difficulty: String,
        #[arg(long, default_value_t = BOARD_SIZE_DEFAULT)]
        board_size: f32,
        #[arg(long, default_value = DEFAULT_PUZZLE_SLUG)]
        puzzle: String,
        #[arg(long, env = "DINOPUZZLE_SEED")]
        seed: Option<String>,
        /// JSON rules file overriding difficulty and board size.
        #[arg(long)]
        rules: Option<PathBuf>,
        #[arg(long, default_value_t = 4000)]
        max_steps: u32,
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(Serialize, Deserialize)]
struct RulesFile {
    grid_size: u32,
    board_size: f32,
    snap_threshold: f32,
}

#[derive(Serialize)]
struct PieceOut {
    id: usize,
    row: u32,
    col: u32,
    target: (f32, f32),
    region: [f32; 4],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Puzzles => {
            for entry in PUZZLE_CATALOG {
                println!("{} ({}, {}x{})", entry.slug, entry.label, entry.width, entry.height);
            }
        }
        Commands::Layout {
            difficulty,
            board_size,
            json,
        } => {
            if !(board_size > 0.0) {
                return Err("board size must be positive".into());
            }
            let difficulty = parse_difficulty(&difficulty)?;
            let pieces = layout(difficulty.grid_size(), board_size);
            if json {
                let out: Vec<PieceOut> = pieces
                    .iter()
                    .map(|piece| PieceOut {
                        id: piece.id,
                        row: piece.row,
                        col: piece.col,
                        target: piece.target,
                        region: [
                            piece.region.x,
                            piece.region.y,
                            piece.region.w,
                            piece.region.h,
                        ],
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for piece in &pieces {
                    println!(
                        "piece {:>2} ({}, {}) target ({:.1}, {:.1}) region ({:.3}, {:.3}, {:.3}, {:.3})",
                        piece.id,
                        piece.row,
                        piece.col,
                        piece.target.0,
                        piece.target.1,
                        piece.region.x,
                        piece.region.y,
                        piece.region.w,
                        piece.region.h,
                    );
                }
            }
        }
        Commands::Solve {
            difficulty,
            board_size,
            puzzle,
            seed,
            rules,
            max_steps,
            verbose,
        } => {
            let Some(info) = puzzle_info(&puzzle) else {
                eprintln!("unknown puzzle: {puzzle}");
                eprintln!("available puzzles:");
                for entry in PUZZLE_CATALOG {
                    eprintln!("  {} ({})", entry.slug, entry.label);
                }
                return Ok(());
            };
            let rules = match rules {
                Some(path) => {
                    let raw = std::fs::read_to_string(path)?;
                    let parsed: RulesFile = serde_json::from_str(&raw)?;
                    GameRules {
                        grid_size: parsed.grid_size,
                        board_size: parsed.board_size,
                        snap_threshold: parsed.snap_threshold,
                    }
                }
                None => {
                    if !(board_size > 0.0) {
                        return Err("board size must be positive".into());
                    }
                    GameRules::for_difficulty(parse_difficulty(&difficulty)?, board_size)
                }
            };
            validate_rules(&rules)?;
            let seed = match seed.as_deref() {
                Some(raw) => parse_seed_arg(raw)?,
                None => rand::rng().random(),
            };

            println!("puzzle: {} ({})", info.label, puzzle);
            println!(
                "grid: {}x{}, board: {}, snap threshold: {}",
                rules.grid_size, rules.grid_size, rules.board_size, rules.snap_threshold
            );
            println!("seed: {seed:#010x}");

            let mut session = GameSession::new(rules, info, seed);
            let config = bot::SolveConfig {
                max_steps,
                ..bot::SolveConfig::default()
            };
            let report = bot::solve(&mut session, &config, verbose);
            println!(
                "complete: {} (drags: {}, taps: {}, elapsed: {}s)",
                report.complete, report.drags, report.taps, report.elapsed_secs
            );
            if !report.complete {
                eprintln!("gave up after {max_steps} steps");
            }
        }
    }

    Ok(())
}

fn validate_rules(rules: &GameRules) -> Result<(), String> {
    if rules.grid_size == 0 {
        return Err("rules: grid_size must be at least 1".into());
    }
    if !(rules.board_size > 0.0) {
        return Err("rules: board_size must be positive".into());
    }
    if !(rules.snap_threshold > 0.0) {
        return Err("rules: snap_threshold must be positive".into());
    }
    Ok(())
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!("unknown difficulty: {other} (easy, medium, hard)")),
    }
}

fn parse_seed_arg(raw: &str) -> Result<u32, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    let value = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)?
    } else {
        trimmed.parse::<u32>()?
    };
    Ok(value)
}
