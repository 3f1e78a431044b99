//! Self-play training CLI.
//!
//! Trains an n-tuple value network by TD self-play, measures it against
//! the random baseline, and optionally writes the network as JSON.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --episodes N      Training episodes (default: 1000)
//!   --lr RATE         Initial learning rate (default: 0.1)
//!   --epsilon E       Initial exploration rate (default: 0.1)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --eval-games N    Evaluation games vs random (default: 200)
//!   --threads N       Threads for evaluation games (default: 4)
//!   --output FILE     Write the trained network JSON here
//!   --quiet           Suppress progress output

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use flipstone::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut eval_games = 200usize;
    let mut threads = 4usize;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--episodes" => {
                i += 1;
                config.episodes = args[i].parse().expect("invalid --episodes value");
            }
            "--lr" => {
                i += 1;
                config.learning_rate = args[i].parse().expect("invalid --lr value");
            }
            "--epsilon" => {
                i += 1;
                config.epsilon = args[i].parse().expect("invalid --epsilon value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--eval-games" => {
                i += 1;
                eval_games = args[i].parse().expect("invalid --eval-games value");
            }
            "--threads" => {
                i += 1;
                threads = args[i].parse().expect("invalid --threads value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Training: {} episodes, lr {}, epsilon {}, seed {}",
            config.episodes, config.learning_rate, config.epsilon, config.seed
        );
    }

    let start = Instant::now();
    let (net, stats) = selfplay::train(&config);
    if !config.quiet {
        eprintln!("Training took {:.1}s", start.elapsed().as_secs_f64());
        selfplay::print_summary(&stats);
    }

    if eval_games > 0 {
        let report = selfplay::evaluate_vs_random(&net, eval_games, threads, config.seed);
        println!(
            "vs random: {} games, {} wins / {} losses / {} draws ({:.1}% wins)",
            report.games,
            report.wins,
            report.losses,
            report.draws,
            report.win_rate() * 100.0
        );
    }

    if let Some(path) = output_path {
        let json = match net.to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize network: {}", e);
                process::exit(1);
            }
        };
        let file = match File::create(&path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Failed to create {}: {}", path, e);
                process::exit(1);
            }
        };
        let mut writer = BufWriter::new(file);
        if let Err(e) = writer.write_all(json.as_bytes()).and_then(|_| writer.flush()) {
            eprintln!("Failed to write {}: {}", path, e);
            process::exit(1);
        }
        if !config.quiet {
            eprintln!("Wrote network to {}", path);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!("  --episodes N      Training episodes (default: 1000)");
    eprintln!("  --lr RATE         Initial learning rate (default: 0.1)");
    eprintln!("  --epsilon E       Initial exploration rate (default: 0.1)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --eval-games N    Evaluation games vs random (default: 200)");
    eprintln!("  --threads N       Threads for evaluation games (default: 4)");
    eprintln!("  --output FILE     Write the trained network JSON here");
    eprintln!("  --quiet           Suppress progress output");
}
