//! Lineup Optimizer CLI
//!
//! Single-game traces, single-lineup estimates and full permutation sweeps
//! over a roster (built-in demo roster or a YAML/JSON scenario file).

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use lineup_core::{
    LineupSearch, MonteCarloEvaluator, Player, RayonExecutor, Scenario, SearchReport,
    SequentialExecutor, SimConfig, SortOrder,
};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "lineup")]
#[command(about = "Find the batting order that scores the most runs", long_about = None)]
struct Cli {
    /// Scenario file (YAML or JSON) with roster and simulation settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Trace every plate appearance
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Games simulated per lineup
    #[arg(long)]
    trials: Option<u32>,

    /// Innings per game
    #[arg(long)]
    innings: Option<u32>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads
    #[arg(long)]
    workers: Option<usize>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one game and print the line score
    Simulate {
        /// Batting order as comma-separated names (default: roster order)
        #[arg(long, value_delimiter = ',')]
        order: Vec<String>,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Estimate expected runs for one batting order
    Evaluate {
        /// Batting order as comma-separated names (default: roster order)
        #[arg(long, value_delimiter = ',')]
        order: Vec<String>,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Evaluate every batting order and rank them
    Search {
        /// Output JSON file for the lineup → expected runs mapping
        #[arg(long, default_value = "output.json")]
        out: PathBuf,

        /// Number of lineups to print
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// List the worst lineups first
        #[arg(long)]
        ascending: bool,

        #[command(flatten)]
        overrides: Overrides,
    },
}

#[cfg(feature = "cli")]
impl Overrides {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(innings) = self.innings {
            config.innings = innings;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scenario = Scenario::load_or_default(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("Failed to load scenario: {}", path.display()),
            None => "Failed to build demo scenario".to_string(),
        })?;

    match &cli.command {
        Commands::Simulate { order, overrides } => {
            let config = resolve_config(&scenario, overrides)?;
            let lineup = resolve_lineup(&scenario, order)?;
            simulate_game(&lineup, config)?;
        }

        Commands::Evaluate { order, json, overrides } => {
            let config = resolve_config(&scenario, overrides)?;
            let lineup = resolve_lineup(&scenario, order)?;
            evaluate_lineup(&lineup, config, *json)?;
        }

        Commands::Search { out, top, ascending, overrides } => {
            let config = resolve_config(&scenario, overrides)?;
            let order = if *ascending { SortOrder::Ascending } else { SortOrder::Descending };
            search_lineups(&scenario, config, out, *top, order)?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.init();
}

#[cfg(feature = "cli")]
fn resolve_config(scenario: &Scenario, overrides: &Overrides) -> Result<SimConfig> {
    let mut config = scenario.simulation.clone();
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "cli")]
fn resolve_lineup(scenario: &Scenario, order: &[String]) -> Result<Vec<Player>> {
    if order.is_empty() {
        return Ok(scenario.roster.players().to_vec());
    }
    let names: Vec<&str> = order.iter().map(String::as_str).collect();
    Ok(scenario.roster.lineup(&names)?)
}

#[cfg(feature = "cli")]
fn simulate_game(lineup: &[Player], config: SimConfig) -> Result<()> {
    let evaluator = MonteCarloEvaluator::new(config.with_trials(1), SequentialExecutor)?;
    let seed = evaluator.base_seed();
    let result = evaluator.run_trial(lineup, seed, 0)?;

    println!("⚾ {} (seed {})", lineup_core::lineup_name(lineup), seed);
    for (inning, runs) in result.innings.iter().enumerate() {
        println!("   Inning {:>2}: {}", inning + 1, runs);
    }
    println!("   Total:     {} runs in {} plate appearances", result.total, result.plate_appearances);
    Ok(())
}

#[cfg(feature = "cli")]
fn evaluate_lineup(lineup: &[Player], config: SimConfig, json: bool) -> Result<()> {
    let executor = RayonExecutor::new(config.workers)?;
    let evaluator = MonteCarloEvaluator::new(config, executor)?;
    let summary = evaluator.evaluate(lineup)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("📊 {}", lineup_core::lineup_name(lineup));
    println!("   Expected runs: {:.3} ± {:.3}", summary.expected_runs, summary.std_error);
    println!("   Range:         {}..={}", summary.min_runs, summary.max_runs);
    println!("   Trials:        {}", summary.trials);
    Ok(())
}

#[cfg(feature = "cli")]
fn search_lineups(
    scenario: &Scenario,
    config: SimConfig,
    out: &Path,
    top: usize,
    order: SortOrder,
) -> Result<()> {
    let executor = RayonExecutor::new(config.workers)?;
    let evaluator = MonteCarloEvaluator::new(config, executor)?;
    let search = LineupSearch::new(evaluator);

    let report = search.run(&scenario.roster);
    print_ranking(&report, top, order);

    report
        .write_json(out)
        .with_context(|| format!("Failed to write results: {}", out.display()))?;
    println!("\n📄 Results saved to: {}", out.display());

    if !report.failures.is_empty() {
        anyhow::bail!("{} of {} lineups failed evaluation", report.failures.len(), report.permutations);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn print_ranking(report: &SearchReport, top: usize, order: SortOrder) {
    println!("\n🏆 Lineups ranked ({} evaluated, seed {})", report.evaluations.len(), report.seed);
    for (rank, evaluation) in report.ranking(order).into_iter().take(top).enumerate() {
        println!(
            "   {:>3}. {:<12} {:.3} ± {:.3}",
            rank + 1,
            evaluation.lineup,
            evaluation.expected_runs(),
            evaluation.summary.std_error
        );
    }

    for failure in &report.failures {
        println!("   ❌ {}", failure);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("lineup CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
