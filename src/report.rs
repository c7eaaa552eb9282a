//! Plain-text formatting of solver and evaluator output

use crate::models::{Catalog, Combination};
use crate::schedule::{self, Evaluation};
use crate::solver::Solution;

/// Format a combination as per-type counts, e.g. "T: 1 P: 0 C: 0"
pub fn format_combination(catalog: &Catalog, combination: &Combination) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(index, building)| format!("{}: {}", building.code, combination.count(index)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a dollar amount with thousands separators, e.g. "$46,000"
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Summary of one solve: the optimum plus each solution's evaluation
#[derive(Debug)]
pub struct Summary {
    pub horizon: i64,
    pub max_profit: i64,
    pub solutions: Vec<(String, Evaluation)>,
}

/// Evaluate every optimal combination under the canonical order and bundle
/// the results for display.
pub fn summarize(catalog: &Catalog, horizon: i64, solution: &Solution) -> Summary {
    let solutions = solution
        .combinations
        .iter()
        .map(|combination| {
            (
                format_combination(catalog, combination),
                schedule::evaluate(catalog, horizon, combination),
            )
        })
        .collect();

    Summary {
        horizon,
        max_profit: solution.max_profit,
        solutions,
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Time units available: {}", self.horizon)?;
        writeln!(f, "Maximum profit:       {}", format_money(self.max_profit))?;
        writeln!(f, "Optimal solutions:    {}", self.solutions.len())?;
        writeln!(f)?;

        for (i, (formatted, evaluation)) in self.solutions.iter().enumerate() {
            let status = if evaluation.is_feasible { "ok" } else { "INFEASIBLE" };
            writeln!(
                f,
                "  {}. {} ({}, time used {}/{}) [{}]",
                i + 1,
                formatted,
                format_money(evaluation.profit),
                evaluation.time_used,
                self.horizon,
                status
            )?;
        }

        Ok(())
    }
}

/// Format the construction timeline for one combination, one line per
/// building instance.
pub fn format_timeline(catalog: &Catalog, horizon: i64, combination: &Combination) -> String {
    let builds = schedule::timeline(catalog, horizon, combination);
    if builds.is_empty() {
        return "  No buildings constructed\n".to_string();
    }

    let mut output = String::new();
    for build in builds {
        let building = catalog.get(build.type_index);
        output.push_str(&format!(
            "  {} #{}: time {}-{} (earns {}/period for {} periods = {})\n",
            building.name,
            build.instance,
            build.start,
            build.finish,
            format_money(building.rate),
            build.operating_periods,
            format_money(build.earning)
        ));
    }
    output
}
