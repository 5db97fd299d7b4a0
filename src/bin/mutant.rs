//! Mutant CLI — classify DNA grids and inspect the record store
//!
//! Commands:
//!   mutant analyze <rows...>      — classify a grid given as row strings
//!   mutant analyze-file <path>    — classify a grid from a JSON row array
//!   mutant stats                  — show mutant/human counts and ratio
//!   mutant demo                   — classify the two reference grids

use mutant_core::{AnalysisError, FileStore, Registry};
use std::env;
use std::process::ExitCode;

const STORE_FILE: &str = "mutant-records.json";

fn print_usage() {
    println!(
        r#"
Usage: mutant <command> [options]

Commands:
  analyze <row> <row> ...   Classify a grid given row by row
  analyze-file <path>       Classify a grid stored as a JSON array of rows
  stats                     Show mutant/human counts and the ratio
  demo                      Classify the two reference grids

Examples:
  mutant analyze ATGCGA CAGTGC TTATGT AGAAGG CCCCTA TCACTG
  mutant analyze-file grid.json
  mutant stats
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "analyze" => cmd_analyze(&args[2..]),
        "analyze-file" => cmd_analyze_file(&args[2..]),
        "stats" => cmd_stats(),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_registry() -> Result<Registry<FileStore>, AnalysisError> {
    let store = FileStore::open(STORE_FILE)?;
    Ok(Registry::new(store))
}

fn report(rows: &[String], mutant: bool) {
    println!(
        "\n  {}x{} grid -> {}",
        rows.len(),
        rows.len(),
        if mutant { "MUTANT" } else { "human" }
    );
}

fn cmd_analyze(rows: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    if rows.is_empty() {
        eprintln!("Usage: mutant analyze <row> <row> ...");
        return Err("no grid rows given".into());
    }
    let registry = open_registry()?;
    let mutant = registry.classify(rows)?;
    report(rows, mutant);
    Ok(())
}

fn cmd_analyze_file(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let path = match args.first() {
        Some(p) => p,
        None => {
            eprintln!("Usage: mutant analyze-file <path>");
            return Err("no input file given".into());
        }
    };
    let data = std::fs::read_to_string(path)?;
    let rows: Vec<String> = serde_json::from_str(&data)?;
    let registry = open_registry()?;
    let mutant = registry.classify(&rows)?;
    report(&rows, mutant);
    Ok(())
}

fn cmd_stats() -> Result<(), Box<dyn std::error::Error>> {
    let registry = open_registry()?;
    let stats = registry.stats()?;
    println!("\n  Record Statistics");
    println!("  {}", "=".repeat(30));
    println!("  Mutant grids: {}", stats.mutant_count);
    println!("  Human grids:  {}", stats.human_count);
    println!("  Ratio:        {:.4}", stats.ratio);
    Ok(())
}

fn cmd_demo() -> Result<(), Box<dyn std::error::Error>> {
    let registry = open_registry()?;

    let mutant_grid: Vec<String> = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]
        .map(String::from)
        .to_vec();
    let human_grid: Vec<String> = ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]
        .map(String::from)
        .to_vec();

    println!("\nStep 1: Classifying the reference grids...");
    println!("{}", "-".repeat(50));
    report(&mutant_grid, registry.classify(&mutant_grid)?);
    report(&human_grid, registry.classify(&human_grid)?);

    println!("\nStep 2: Re-submitting the mutant grid (dedup)...");
    println!("{}", "-".repeat(50));
    report(&mutant_grid, registry.classify(&mutant_grid)?);
    println!("  (served from the existing record, no rescan)");

    println!("\nStep 3: Statistics...");
    println!("{}", "-".repeat(50));
    let stats = registry.stats()?;
    println!(
        "  mutants={} humans={} ratio={:.4}",
        stats.mutant_count, stats.human_count, stats.ratio
    );
    Ok(())
}
