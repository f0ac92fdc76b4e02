use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wb_core::{
    Aircraft, CgStatus, LoadSheet, SafetyPolicy, WeightBalanceResult, WeightStatus,
};
use wb_world::{load_fleet, load_sheet, parse_assignment, Fleet};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "wb_cli", about = "Aircraft weight-and-balance calculator")]
struct Cli {
    /// Directory holding aircraft.json.
    #[arg(long, global = true, env = "WB_CONTENT_DIR", default_value = "./content")]
    content_dir: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Station overloads are reported only.
    Advisory,
    /// Station overloads make the loading unsafe.
    Strict,
}

impl From<PolicyArg> for SafetyPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Advisory => SafetyPolicy::Advisory,
            PolicyArg::Strict => SafetyPolicy::Strict,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List aircraft and their loading stations.
    List,
    /// Compute weight and balance for one loading.
    Compute {
        /// Tail number, case-insensitive.
        #[arg(long)]
        aircraft: String,
        /// Station quantity as station=quantity. Repeatable; applied after --loads.
        #[arg(long = "set", value_name = "STATION=QTY")]
        assignments: Vec<String>,
        /// JSON file mapping station ids to quantities.
        #[arg(long)]
        loads: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = PolicyArg::Advisory)]
        policy: PolicyArg,
        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
        /// Exit with status 2 when the loading is unsafe.
        #[arg(long)]
        require_safe: bool,
    },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn list(fleet: &Fleet) {
    println!("Fleet content version {}", fleet.content_version);
    for aircraft in &fleet.aircraft {
        let profile = aircraft.profile();
        println!(
            "{tail}  empty {empty:.1} lb @ {arm:.2} in  max gross {gross:.1} lb  CG {fwd:.2} to {aft:.2} in",
            tail = aircraft.tail_number(),
            empty = profile.empty_weight_lb(),
            arm = profile.empty_arm_in(),
            gross = profile.max_gross_weight_lb(),
            fwd = profile.cg_forward_limit_in(),
            aft = profile.cg_aft_limit_in(),
        );
        for station in aircraft.stations().iter() {
            let cap = station
                .max_weight_lb()
                .map(|max| format!("  max {max:.0} lb"))
                .unwrap_or_default();
            println!(
                "    {id:<18} {name:<20} arm {arm:>7.2} in  [{unit}]{cap}",
                id = station.id().0,
                name = station.display_name(),
                arm = station.arm_in(),
                unit = station.quantity_unit().symbol(),
            );
        }
    }
}

fn build_sheet(
    aircraft: &Aircraft,
    loads: Option<&Path>,
    assignments: &[String],
) -> Result<LoadSheet> {
    let mut sheet = match loads {
        Some(path) => load_sheet(path, aircraft)?,
        None => LoadSheet::new(),
    };
    for text in assignments {
        let (station_id, quantity) = parse_assignment(text)?;
        aircraft
            .set_entry(&mut sheet, &station_id, quantity)
            .with_context(|| format!("--set {text}"))?;
    }
    Ok(sheet)
}

fn weight_label(status: WeightStatus) -> &'static str {
    match status {
        WeightStatus::Under => "UNDER EMPTY WEIGHT",
        WeightStatus::Within => "within limits",
        WeightStatus::Over => "OVER MAX GROSS",
    }
}

fn cg_label(status: CgStatus) -> &'static str {
    match status {
        CgStatus::Forward => "FORWARD OF LIMIT",
        CgStatus::Within => "within limits",
        CgStatus::Aft => "AFT OF LIMIT",
        CgStatus::Unknown => "UNKNOWN (not computable)",
    }
}

/// Rounds for display only; the engine's figures stay unrounded.
fn print_result(aircraft: &Aircraft, result: &WeightBalanceResult) {
    let profile = aircraft.profile();
    let totals = &result.totals;
    let verdict = &result.verdict;

    println!("Weight and balance for {}", result.tail_number);
    println!("{}", "-".repeat(72));
    println!(
        "{:<20} {:>10} {:>10} {:>8} {:>12}",
        "Station", "Quantity", "Weight", "Arm", "Moment"
    );
    println!(
        "{:<20} {:>10} {:>10.1} {:>8.2} {:>12.1}",
        "Empty aircraft",
        "",
        profile.empty_weight_lb(),
        profile.empty_arm_in(),
        profile.empty_moment_lb_in()
    );
    for load in &totals.stations {
        let Some(station) = aircraft.stations().get(&load.station_id) else {
            continue;
        };
        println!(
            "{:<20} {:>6.1} {:<3} {:>10.1} {:>8.2} {:>12.1}",
            station.display_name(),
            load.quantity,
            station.quantity_unit().symbol(),
            load.weight_lb,
            station.arm_in(),
            load.moment_lb_in
        );
    }
    println!("{}", "-".repeat(72));
    println!(
        "Total weight {:.1} lb (max {:.1}, margin {:.1}): {}",
        totals.total_weight_lb,
        profile.max_gross_weight_lb(),
        verdict.weight_margin_lb,
        weight_label(verdict.weight_status)
    );
    println!("Total moment {:.1} lb·in", totals.total_moment_lb_in);
    match totals.center_of_gravity_in {
        Some(cg) => println!(
            "CG {cg:.2} in (limits {:.2} to {:.2}): {}",
            profile.cg_forward_limit_in(),
            profile.cg_aft_limit_in(),
            cg_label(verdict.cg_status)
        ),
        None => println!("CG: {}", cg_label(verdict.cg_status)),
    }
    for violation in &verdict.station_violations {
        println!(
            "Station '{}' carries {:.1} lb, limit {:.1} lb",
            violation.station_id, violation.actual_weight_lb, violation.max_allowed_lb
        );
    }
    let policy = match verdict.policy {
        SafetyPolicy::Advisory => "advisory",
        SafetyPolicy::Strict => "strict",
    };
    println!(
        "Verdict ({policy} station policy): {}",
        if verdict.overall_safe { "SAFE" } else { "NOT SAFE" }
    );
}

struct ComputeArgs {
    aircraft: String,
    assignments: Vec<String>,
    loads: Option<PathBuf>,
    policy: SafetyPolicy,
    json: bool,
    require_safe: bool,
}

fn compute(fleet: &Fleet, args: &ComputeArgs) -> Result<ExitCode> {
    let aircraft = fleet.find(&args.aircraft)?;
    let sheet = build_sheet(aircraft, args.loads.as_deref(), &args.assignments)?;
    let result = aircraft
        .calculate(&sheet, args.policy)
        .with_context(|| format!("computing loading for {}", aircraft.tail_number()))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serializing result")?
        );
    } else {
        print_result(aircraft, &result);
    }

    if !result.verdict.overall_safe {
        tracing::warn!(
            tail_number = %result.tail_number,
            weight_status = ?result.verdict.weight_status,
            cg_status = ?result.verdict.cg_status,
            violations = result.verdict.station_violations.len(),
            "loading is outside the safe envelope"
        );
        if args.require_safe {
            return Ok(ExitCode::from(2));
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fleet = load_fleet(&cli.content_dir)?;
    match cli.command {
        Commands::List => {
            list(&fleet);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compute {
            aircraft,
            assignments,
            loads,
            policy,
            json,
            require_safe,
        } => compute(
            &fleet,
            &ComputeArgs {
                aircraft,
                assignments,
                loads,
                policy: policy.into(),
                json,
                require_safe,
            },
        ),
    }
}
