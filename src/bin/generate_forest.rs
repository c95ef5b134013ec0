//! Forest generation utility
//!
//! Composes a forest and writes it as JSON for a renderer to load.
//!
//! Usage:
//!     generate_forest [OPTIONS] <OUTPUT_FILE>
//!
//! Options:
//!     --config <FILE>         Start from a saved ForestConfig (default: built-in)
//!     --seed <SEED>           Seed for reproducible output (default: 12345)
//!     --random                Non-deterministic generation
//!     -n, --count <N>         Number of trees (default: 20)
//!     --radius <R>            Scatter radius (default: 55)
//!     --min-distance <D>      Minimum tree spacing (default: 3.5)
//!     --leaves <N>            Leaves per tree (default: 80)
//!     --scale <S>             Tree scale (default: 1.2)
//!     --riverside             Keep the river bed clear
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use grove::core::logging;
use grove::forest::{compose, ForestConfig, FOREST_FILE_EXTENSION};
use grove::math::SeedMode;
use grove::placement::ExclusionZone;
use grove::forest::config::{RIVER_CENTER_Z, RIVER_LENGTH, RIVER_WIDTH};

fn print_help() {
    eprintln!("generate_forest - Forest generation utility");
    eprintln!();
    eprintln!("Usage: generate_forest [OPTIONS] <OUTPUT_FILE>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    --config <FILE>         Start from a saved ForestConfig (default: built-in)");
    eprintln!("    --seed <SEED>           Seed for reproducible output (default: 12345)");
    eprintln!("    --random                Non-deterministic generation");
    eprintln!("    -n, --count <N>         Number of trees (default: 20)");
    eprintln!("    --radius <R>            Scatter radius (default: 55)");
    eprintln!("    --min-distance <D>      Minimum tree spacing (default: 3.5)");
    eprintln!("    --leaves <N>            Leaves per tree (default: 80)");
    eprintln!("    --scale <S>             Tree scale (default: 1.2)");
    eprintln!("    --riverside             Keep the river bed clear");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    generate_forest --riverside -n 40 ./assets/riverside.{}", FOREST_FILE_EXTENSION);
    eprintln!("    generate_forest --seed 42 --leaves 120 ./assets/forest.{}", FOREST_FILE_EXTENSION);
}

#[derive(Debug, Default)]
struct Args {
    output: PathBuf,
    config: Option<PathBuf>,
    seed: Option<SeedMode>,
    count: Option<usize>,
    radius: Option<f32>,
    min_distance: Option<f32>,
    leaves: Option<usize>,
    scale: Option<f32>,
    riverside: bool,
}

fn value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", name))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return Err("Missing output file".to_string());
    }

    let mut parsed = Args::default();
    let mut output: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--config" => {
                parsed.config = Some(PathBuf::from(value(&args, &mut i, "--config")?));
            }
            "--seed" => {
                let v = value(&args, &mut i, "--seed")?;
                let seed = v.parse().map_err(|_| format!("Invalid seed: {}", v))?;
                parsed.seed = Some(SeedMode::Seeded(seed));
            }
            "--random" => {
                parsed.seed = Some(SeedMode::NonDeterministic);
            }
            "-n" | "--count" => {
                let v = value(&args, &mut i, "--count")?;
                parsed.count = Some(v.parse().map_err(|_| format!("Invalid count: {}", v))?);
            }
            "--radius" => {
                let v = value(&args, &mut i, "--radius")?;
                parsed.radius = Some(v.parse().map_err(|_| format!("Invalid radius: {}", v))?);
            }
            "--min-distance" => {
                let v = value(&args, &mut i, "--min-distance")?;
                parsed.min_distance = Some(v.parse().map_err(|_| format!("Invalid min-distance: {}", v))?);
            }
            "--leaves" => {
                let v = value(&args, &mut i, "--leaves")?;
                parsed.leaves = Some(v.parse().map_err(|_| format!("Invalid leaves: {}", v))?);
            }
            "--scale" => {
                let v = value(&args, &mut i, "--scale")?;
                parsed.scale = Some(v.parse().map_err(|_| format!("Invalid scale: {}", v))?);
            }
            "--riverside" => {
                parsed.riverside = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            path => {
                if output.is_some() {
                    return Err("Multiple output files specified".to_string());
                }
                output = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    parsed.output = output.ok_or("Missing output file")?;
    Ok(parsed)
}

fn build_config(args: &Args) -> grove::core::Result<ForestConfig> {
    let mut config = match &args.config {
        Some(path) => ForestConfig::load(path)?,
        None => ForestConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(min_distance) = args.min_distance {
        config.min_distance = min_distance;
    }
    if let Some(leaves) = args.leaves {
        config.leaf_count = leaves;
    }
    if let Some(scale) = args.scale {
        config.tree_scale = scale;
    }
    if args.riverside {
        config.exclusion_zones.push(ExclusionZone::river(RIVER_CENTER_Z, RIVER_LENGTH, RIVER_WIDTH));
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    logging::init_with_timestamps();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Forest Generation Utility");
    println!("=========================");
    println!("Output: {}", args.output.display());
    match config.seed {
        SeedMode::Seeded(seed) => println!("Seed: {}", seed),
        SeedMode::NonDeterministic => println!("Seed: none (non-deterministic)"),
    }
    println!("Trees: {} within {}m, spacing {}m", config.count, config.radius, config.min_distance);
    println!("Leaves per tree: {}", config.leaf_count);
    println!("Exclusion zones: {}", config.exclusion_zones.len());
    println!();

    let start = Instant::now();
    let forest = compose(&config);
    let elapsed = start.elapsed();

    if let Err(e) = forest.save(&args.output) {
        eprintln!("Error writing forest: {}", e);
        std::process::exit(1);
    }

    let report = forest.placement;
    println!("Summary:");
    println!("  Trees placed: {}/{} ({} attempts of {})",
             report.placed, report.requested, report.attempts, report.attempt_cap);
    if report.is_under_filled() {
        println!("  Warning: {} trees could not be placed; lower the count or spacing, or widen the radius",
                 report.shortfall());
    }
    println!("  Leaf instances: {}", forest.total_leaves());
    println!("  Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
}
