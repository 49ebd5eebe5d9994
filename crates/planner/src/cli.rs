//! CLI wiring for tierforge.

use crate::report::render_report;
use crate::scenario::{GoalSelection, ScenarioConfig};
use crate::sweep::{run_sweep, search_budget, unix_millis, SweepReport};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tierforge_catalog::{format_capacity, TierCatalog};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tierforge", about = "Storage hierarchy design-space search")]
pub struct Cli {
    /// Scenario file (catalog, workload, budgets, goal). Defaults are used when absent.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file replacing the scenario's catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Emit JSON instead of the text report.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum GoalArg {
    Throughput,
    Latency,
    Both,
}

impl From<GoalArg> for GoalSelection {
    fn from(value: GoalArg) -> GoalSelection {
        match value {
            GoalArg::Throughput => GoalSelection::Throughput,
            GoalArg::Latency => GoalSelection::Latency,
            GoalArg::Both => GoalSelection::Both,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search every budget of the scenario.
    Sweep {
        /// Replace the scenario budgets; repeat for several.
        #[arg(long = "budget")]
        budgets: Vec<f64>,
        #[arg(long, value_enum)]
        goal: Option<GoalArg>,
    },
    /// Search a single budget.
    Search {
        #[arg(long)]
        budget: f64,
        #[arg(long, value_enum)]
        goal: Option<GoalArg>,
    },
    /// Print the technology catalog in use, or write it to a file.
    Catalog {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write the default scenario to a file as a starting point.
    InitConfig {
        #[arg(long)]
        output: PathBuf,
    },
}

pub fn run_cli(cli: Cli) -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let Cli {
        config,
        catalog,
        json,
        command,
    } = cli;

    let mut scenario = match &config {
        Some(path) => {
            info!(path = %path.display(), "loading scenario");
            ScenarioConfig::load(path)?
        }
        None => ScenarioConfig::default(),
    };
    if let Some(path) = &catalog {
        info!(path = %path.display(), "loading catalog");
        scenario.catalog = TierCatalog::load_from_file(path)?;
    }

    match command {
        Command::Sweep { budgets, goal } => {
            if !budgets.is_empty() {
                scenario.budgets = budgets;
            }
            if let Some(goal) = goal {
                scenario.goal = goal.into();
            }
            let report = run_sweep(&scenario)?;
            emit(&report, json)?;
        }
        Command::Search { budget, goal } => {
            let selection: GoalSelection = goal.map(Into::into).unwrap_or(scenario.goal);
            let mut results = Vec::new();
            for goal in selection.goals() {
                results.push(search_budget(
                    &scenario.catalog,
                    &scenario.workload,
                    budget,
                    goal,
                )?);
            }
            let report = SweepReport {
                generated_at_unix_ms: unix_millis(),
                catalog: scenario.catalog.clone(),
                workload: scenario.workload.clone(),
                results,
            };
            emit(&report, json)?;
        }
        Command::Catalog { output: Some(path) } => {
            scenario.catalog.save_to_file(&path)?;
            info!(path = %path.display(), tiers = scenario.catalog.len(), "wrote catalog");
        }
        Command::Catalog { output: None } => {
            if json {
                println!("{}", scenario.catalog.to_json()?);
            } else {
                for (rank, tier) in scenario.catalog.iter().enumerate() {
                    println!(
                        "{}: {} {} ${} {} IOPS {}s max {}",
                        rank,
                        tier.name,
                        format_capacity(tier.capacity_bytes),
                        tier.unit_cost_dollars,
                        tier.iops,
                        tier.latency_seconds,
                        tier.max_devices
                    );
                }
                println!(
                    "search space: {} configurations",
                    scenario.catalog.search_space_size()
                );
            }
        }
        Command::InitConfig { output } => {
            ScenarioConfig::default().save(&output)?;
            info!(path = %output.display(), "wrote default scenario");
        }
    }
    Ok(())
}

fn emit(report: &SweepReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}
