//! Maximum Profit Construction Solver
//!
//! Computes the maximum profit attainable from serially constructing
//! buildings within a fixed number of time units, and lists every
//! combination of building counts that achieves it.

mod models;
mod report;
mod schedule;
mod solver;

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;

use crate::models::{BuildingType, Catalog};
use crate::solver::Solution;

#[derive(Parser)]
#[command(name = "max-profit")]
#[command(version)]
#[command(about = "Maximum profit solver for serialized building construction")]
struct Cli {
    /// Number of time units (1-100). Omit to run in interactive mode.
    time_units: Option<i64>,

    /// Show the construction timeline for each solution
    #[arg(long)]
    detailed: bool,
}

const MIN_TIME_UNITS: i64 = 1;
const MAX_TIME_UNITS: i64 = 100;

fn default_catalog() -> Result<Catalog> {
    let catalog = Catalog::new(vec![
        BuildingType::new("Theatre", "T", 5, 1500),
        BuildingType::new("Pub", "P", 4, 1000),
        BuildingType::new("Commercial Park", "C", 10, 3000),
    ])?;
    Ok(catalog)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = default_catalog()?;

    print_header(&catalog);

    match cli.time_units {
        Some(time_units) => {
            if !(MIN_TIME_UNITS..=MAX_TIME_UNITS).contains(&time_units) {
                bail!(
                    "time units must be between {} and {}, got {}",
                    MIN_TIME_UNITS,
                    MAX_TIME_UNITS,
                    time_units
                );
            }

            let solution = solver::optimize(&catalog, time_units)?;
            print_results(&catalog, time_units, &solution, cli.detailed);
        }
        None => interactive_mode(&catalog)?,
    }

    Ok(())
}

fn print_header(catalog: &Catalog) {
    println!("{}", "=".repeat(60));
    println!("Maximum Profit Construction Solver");
    println!("{}", "=".repeat(60));
    println!("Building types:");
    for building in catalog.iter() {
        println!(
            "  {} ({}): {} time units, {}/period",
            building.name,
            building.code,
            building.duration,
            report::format_money(building.rate)
        );
    }
    println!("{}", "=".repeat(60));
}

fn print_results(catalog: &Catalog, time_units: i64, solution: &Solution, detailed: bool) {
    println!("\n{}", report::summarize(catalog, time_units, solution));

    if detailed {
        for (i, combination) in solution.combinations.iter().enumerate() {
            println!("Solution #{} construction timeline:", i + 1);
            print!("{}", report::format_timeline(catalog, time_units, combination));
        }
    }
}

/// Prompt for time units until the user quits
fn interactive_mode(catalog: &Catalog) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(
            "\nEnter time units ({}-{}, or 'q' to quit): ",
            MIN_TIME_UNITS, MAX_TIME_UNITS
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        if matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit") {
            break;
        }

        let time_units: i64 = match input.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Please enter a valid number.");
                continue;
            }
        };
        if !(MIN_TIME_UNITS..=MAX_TIME_UNITS).contains(&time_units) {
            println!(
                "Please enter a number between {} and {}.",
                MIN_TIME_UNITS, MAX_TIME_UNITS
            );
            continue;
        }

        let solution = solver::optimize(catalog, time_units)?;
        print_results(catalog, time_units, &solution, false);

        print!("Show detailed breakdown? (y/n): ");
        io::stdout().flush()?;
        let Some(answer) = lines.next() else {
            break;
        };
        if matches!(answer?.trim().to_lowercase().as_str(), "y" | "yes") {
            for (i, combination) in solution.combinations.iter().enumerate() {
                println!("\nSolution #{} construction timeline:", i + 1);
                print!("{}", report::format_timeline(catalog, time_units, combination));
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
