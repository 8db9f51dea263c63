use serde::Serialize;

use yahtzee::simulation::players::StrategyKind;
use yahtzee::simulation::simulate_batch;

/// JSON summary written alongside the console report.
#[derive(Serialize)]
struct SimulationSummary {
    strategy: &'static str,
    num_games: usize,
    seed: u64,
    mean: f64,
    std_dev: f64,
    min: i32,
    max: i32,
    median: i32,
    p5: i32,
    p95: i32,
    p99: i32,
    elapsed_ms: f64,
}

struct Args {
    strategy: String,
    num_games: usize,
    seed: u64,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut strategy = "greedy".to_string();
    let mut num_games = 100_000usize;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" | "-s" => {
                i += 1;
                if i < args.len() {
                    strategy = args[i].clone();
                }
            }
            "--games" => {
                i += 1;
                if i < args.len() {
                    num_games = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --games value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: yahtzee-simulate [--strategy SPEC] [--games N] [--seed S] [--output DIR]");
                println!();
                println!("Options:");
                println!("  --strategy SPEC  Strategy to simulate (default: greedy)");
                println!("  --games N        Number of games to simulate (default: 100000)");
                println!("  --seed S         RNG seed (default: 42)");
                println!("  --output DIR     Write JSON summary to DIR");
                println!();
                println!("Strategy specs:");
                println!("  sequential       Mark categories top to bottom, one roll each");
                println!("  greedy           Roll all five, mark the best-paying open category");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if num_games == 0 {
        eprintln!("Error: need at least 1 game.");
        std::process::exit(1);
    }

    Args {
        strategy,
        num_games,
        seed,
        output,
    }
}

fn main() {
    let args = parse_args();

    let kind = StrategyKind::from_spec(&args.strategy).unwrap_or_else(|e| {
        eprintln!("Error parsing strategy '{}': {}", args.strategy, e);
        std::process::exit(1);
    });

    let num_threads = yahtzee::env_config::init_rayon_threads();

    println!("Yahtzee Simulation ({} games)", args.num_games);
    println!("  Strategy: {}", kind.name());
    println!();

    println!(
        "Simulating {} games ({} threads)...",
        args.num_games, num_threads
    );
    let result = simulate_batch(kind, args.num_games, args.seed).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    });

    let per_game_us = result.elapsed.as_secs_f64() * 1e6 / args.num_games as f64;
    let throughput = args.num_games as f64 / result.elapsed.as_secs_f64();

    println!(
        "  Elapsed:     {:.1} ms",
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!("  Per game:    {:.1} \u{00b5}s", per_game_us);
    println!("  Throughput:  {:.0} games/sec", throughput);
    println!();

    // Percentiles read off the sorted score vector.
    let pct = |p: f64| result.scores[(result.scores.len() as f64 * p) as usize];
    let (p5, p95, p99) = (pct(0.05), pct(0.95), pct(0.99));

    println!("Results:");
    println!("  Mean score:  {:.2}", result.mean);
    println!("  Std dev:     {:.1}", result.std_dev);
    println!("  Min:         {}", result.min);
    println!("  Max:         {}", result.max);
    println!("  Median:      {}", result.median);
    println!("  P5/P95/P99:  {} / {} / {}", p5, p95, p99);

    if let Some(ref output_dir) = args.output {
        std::fs::create_dir_all(output_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory '{}': {}", output_dir, e);
            std::process::exit(1);
        });

        let summary = SimulationSummary {
            strategy: kind.name(),
            num_games: args.num_games,
            seed: args.seed,
            mean: result.mean,
            std_dev: result.std_dev,
            min: result.min,
            max: result.max,
            median: result.median,
            p5,
            p95,
            p99,
            elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
        };

        let json_path = format!("{}/simulation_results.json", output_dir);
        let json = serde_json::to_string_pretty(&summary).unwrap();
        std::fs::write(&json_path, json).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {}", json_path, e);
            std::process::exit(1);
        });
        println!();
        println!("Results saved to {}", json_path);
    }
}
