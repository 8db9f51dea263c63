use std::time::Instant;

use yahtzee::simulation::matchup::run_matchup;
use yahtzee::simulation::players::StrategyKind;

struct Args {
    strategies: Vec<String>,
    rounds: u32,
    seed: u64,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut strategies = Vec::new();
    let mut rounds = 100u32;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" | "-s" => {
                i += 1;
                if i < args.len() {
                    strategies.push(args[i].clone());
                }
            }
            "--rounds" => {
                i += 1;
                if i < args.len() {
                    rounds = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --rounds value: {}", args[i]);
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
                println!("Usage: yahtzee-matchup [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --strategy SPEC  Add a player strategy (exactly 2; default: sequential greedy)");
                println!("  --rounds N       Number of rounds to play (default: 100)");
                println!("  --seed S         RNG seed (default: 42)");
                println!("  --output DIR     Save JSON results to DIR");
                println!();
                println!("Strategy specs:");
                println!("  sequential       Mark categories top to bottom, one roll each");
                println!("  greedy           Roll all five, mark the best-paying open category");
                println!();
                println!("Example:");
                println!("  yahtzee-matchup --strategy greedy --strategy sequential --rounds 500");
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

    if strategies.is_empty() {
        strategies = vec!["sequential".to_string(), "greedy".to_string()];
    }
    if strategies.len() != 2 {
        eprintln!(
            "Error: a matchup takes exactly 2 strategies (got {}). Use --strategy SPEC twice.",
            strategies.len()
        );
        std::process::exit(1);
    }
    if rounds == 0 {
        eprintln!("Error: need at least 1 round.");
        std::process::exit(1);
    }

    Args {
        strategies,
        rounds,
        seed,
        output,
    }
}

fn main() {
    let args = parse_args();

    let mut kinds: Vec<StrategyKind> = Vec::with_capacity(2);
    for spec in &args.strategies {
        match StrategyKind::from_spec(spec) {
            Ok(k) => kinds.push(k),
            Err(e) => {
                eprintln!("Error parsing strategy '{}': {}", spec, e);
                std::process::exit(1);
            }
        }
    }

    println!(
        "Yahtzee matchup: {} vs {} \u{00d7} {} rounds",
        kinds[0].name(),
        kinds[1].name(),
        args.rounds
    );

    let t0 = Instant::now();
    let result = run_matchup(kinds[0], kinds[1], args.rounds, args.seed).unwrap_or_else(|e| {
        eprintln!("Matchup failed: {}", e);
        std::process::exit(1);
    });
    let sim_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let per_round_us = t0.elapsed().as_secs_f64() * 1e6 / args.rounds as f64;
    println!(
        "  Elapsed: {:.1} ms ({:.1} \u{00b5}s/round)",
        sim_ms, per_round_us
    );
    println!();

    // Print results table
    let name_width = result
        .strategies
        .iter()
        .map(|s| s.len())
        .max()
        .unwrap_or(8)
        .max(10);

    println!(
        "{:<width$}  {:>6}  {:>6}  {:>6}  {:>5}  {:>7}",
        "Strategy",
        "Wins",
        "Win%",
        "Elo",
        "Best",
        "Mean",
        width = name_width
    );
    println!(
        "{:─<width$}  {:─>6}  {:─>6}  {:─>6}  {:─>5}  {:─>7}",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    );

    for i in 0..2 {
        println!(
            "{:<width$}  {:>6}  {:>5.1}%  {:>6.0}  {:>5}  {:>7.1}",
            result.strategies[i],
            result.wins[i],
            result.wins[i] as f64 / args.rounds as f64 * 100.0,
            result.ratings[i],
            result.best_scores[i],
            result.mean_scores[i],
            width = name_width
        );
    }

    println!();
    println!(
        "Ties: {} ({:.2}%)",
        result.ties,
        result.ties as f64 / args.rounds as f64 * 100.0
    );

    if let Some(ref output_dir) = args.output {
        std::fs::create_dir_all(output_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory '{}': {}", output_dir, e);
            std::process::exit(1);
        });

        let json_path = format!("{}/matchup_results.json", output_dir);
        let json = serde_json::to_string_pretty(&result).unwrap();
        std::fs::write(&json_path, json).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {}", json_path, e);
            std::process::exit(1);
        });
        println!();
        println!("Results saved to {}", json_path);
    }
}
