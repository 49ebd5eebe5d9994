//! Human-readable rendering of sweep results.

use crate::sweep::{BudgetResult, SweepReport};
use std::fmt::Write;
use tierforge_catalog::{format_capacity, TierCatalog};
use tierforge_search::SearchOutcome;

/// Render one budget result in the classic per-tier layout.
pub fn render_result(catalog: &TierCatalog, result: &BudgetResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "cost budget ${}", result.cost_limit());
    match result {
        BudgetResult::Found { outcome } => render_outcome(&mut out, catalog, outcome),
        BudgetResult::NoFeasibleConfiguration { cost_limit, goal } => {
            let _ = writeln!(out, "no feasible configuration under ${} ({})", cost_limit, goal);
        }
    }
    out
}

fn render_outcome(out: &mut String, catalog: &TierCatalog, outcome: &SearchOutcome) {
    let _ = writeln!(out, "ops/s: {} ({})", outcome.ops_per_second(), outcome.goal);
    for (index, tier) in catalog.iter().enumerate() {
        let count = outcome.configuration.device_count(index);
        let capacity = outcome.configuration.tier_capacity(catalog, index);
        let _ = writeln!(
            out,
            "{} {} (${}): {}",
            tier.name,
            format_capacity(capacity),
            tier.unit_cost_dollars * f64::from(count),
            outcome.fractions.get(index)
        );
    }
    let _ = writeln!(out, "totalCost: ${}", outcome.cost);
}

/// Render every result of a sweep, separated by blank lines.
pub fn render_report(report: &SweepReport) -> String {
    report
        .results
        .iter()
        .map(|result| render_result(&report.catalog, result))
        .collect::<Vec<_>>()
        .join("\n")
}
