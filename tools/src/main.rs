//! pity-runner: headless front ends for the pity-mechanic simulator.
//!
//! Usage:
//!   pity-runner --seed 42 --proba 0.05 --rounds 2000 --pity 20 --runs 1000
//!   pity-runner --runs 500 --report out.json
//!   pity-runner --interactive
//!
//! Batch mode prints the experiment summary and a win-count histogram
//! with the fitted and no-pity Normal curves as expected-count columns;
//! --report additionally saves the full result as JSON. Interactive
//! mode ignores the parameter flags and reads one JSON request per
//! stdin line ({"type":"run",...}, {"type":"defaults"}, {"type":"quit"}),
//! answering with one JSON line each.

use anyhow::Result;
use pity_core::{
    experiment::run_experiment,
    histogram::{Histogram, DEFAULT_BIN_COUNT},
    params::SimParams,
    stats::DistributionSummary,
    types::Sample,
};
use std::env;
use std::io::{self, BufRead, Write};

const DEFAULT_SEED: u64 = 42;

// UI-level caps enforced before the core sees the values. The core
// re-checks its own invariants; these are the bounds a user may type.
const MAX_ROUNDS: u32 = 10_000;
const MAX_PITY: u32 = 100;
const MAX_RUNS: u32 = 10_000;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FormRequest {
    Run {
        #[serde(default)]
        seed: Option<u64>,
        #[serde(flatten)]
        params: SimParams,
    },
    Defaults,
    Quit,
}

/// The full result shape both shells ship: written to --report files in
/// batch mode, one per line in interactive mode.
#[derive(serde::Serialize)]
struct ExperimentReport {
    seed:                u64,
    params:              SimParams,
    empirical_fit:       DistributionSummary,
    theoretical_no_pity: DistributionSummary,
    histogram:           Histogram,
    sample:              Sample,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--interactive") {
        return run_form_loop();
    }

    let seed = parse_arg(&args, "--seed", DEFAULT_SEED);
    let defaults = SimParams::default();
    let params = SimParams {
        win_probability: parse_arg(&args, "--proba", defaults.win_probability),
        rounds_per_run:  parse_arg(&args, "--rounds", defaults.rounds_per_run),
        pity_limit:      parse_arg(&args, "--pity", defaults.pity_limit),
        num_runs:        parse_arg(&args, "--runs", defaults.num_runs),
    };
    let report_path = args
        .windows(2)
        .find(|w| w[0] == "--report")
        .map(|w| w[1].as_str());

    run_batch(seed, params, report_path)
}

fn run_batch(seed: u64, params: SimParams, report_path: Option<&str>) -> Result<()> {
    println!("pity-runner: pity-mechanic experiment");
    println!("  seed:   {seed}");
    println!("  proba:  {}", params.win_probability);
    println!("  rounds: {}", params.rounds_per_run);
    println!("  pity:   {}", params.pity_limit);
    println!("  runs:   {}", params.num_runs);
    println!();

    let report = build_report(seed, params)?;
    print_summary(&report);

    if let Some(path) = report_path {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!();
        println!("report written to {path}");
    }

    Ok(())
}

fn run_form_loop() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: FormRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            FormRequest::Quit => break,
            FormRequest::Defaults => {
                writeln!(stdout, "{}", serde_json::to_string(&SimParams::default())?)?;
            }
            FormRequest::Run { seed, params } => {
                match build_report(seed.unwrap_or(DEFAULT_SEED), params) {
                    Ok(report) => {
                        writeln!(stdout, "{}", serde_json::to_string(&report)?)?;
                    }
                    Err(e) => {
                        log::warn!("form request rejected: {e}");
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{err_json}")?;
                    }
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

/// The one path from parameters to a shippable result. Both shells
/// funnel through here.
fn build_report(seed: u64, params: SimParams) -> Result<ExperimentReport> {
    check_ranges(&params)?;
    let outcome = run_experiment(params, seed)?;
    let histogram = Histogram::from_sample(&outcome.sample, DEFAULT_BIN_COUNT);
    Ok(ExperimentReport {
        seed,
        params,
        empirical_fit: outcome.empirical_fit,
        theoretical_no_pity: outcome.theoretical_no_pity,
        histogram,
        sample: outcome.sample,
    })
}

fn check_ranges(params: &SimParams) -> Result<()> {
    if !(0.0..=1.0).contains(&params.win_probability) {
        anyhow::bail!(
            "win probability must be in [0, 1], got {}",
            params.win_probability
        );
    }
    if !(1..=MAX_ROUNDS).contains(&params.rounds_per_run) {
        anyhow::bail!(
            "rounds per run must be in [1, {MAX_ROUNDS}], got {}",
            params.rounds_per_run
        );
    }
    if !(1..=MAX_PITY).contains(&params.pity_limit) {
        anyhow::bail!(
            "pity limit must be in [1, {MAX_PITY}], got {}",
            params.pity_limit
        );
    }
    if !(1..=MAX_RUNS).contains(&params.num_runs) {
        anyhow::bail!("number of runs must be in [1, {MAX_RUNS}], got {}", params.num_runs);
    }
    Ok(())
}

fn print_summary(report: &ExperimentReport) {
    let fit = &report.empirical_fit;
    let baseline = &report.theoretical_no_pity;

    println!("=== EXPERIMENT SUMMARY ===");
    println!("  runs:           {}", report.sample.len());
    println!("  empirical mean: {:.3}", fit.mean);
    println!("  empirical std:  {:.3}", fit.std_dev);
    println!("  no-pity mean:   {:.3}", baseline.mean);
    println!("  no-pity std:    {:.3}", baseline.std_dev);
    println!("  pity lift:      {:+.3}", fit.mean - baseline.mean);

    println!();
    println!("=== WIN-COUNT HISTOGRAM ===");
    if report.histogram.bins.is_empty() {
        println!("  (empty sample)");
        return;
    }

    let n = report.sample.len() as f64;
    let w = report.histogram.bin_width as f64;
    let peak = report
        .histogram
        .bins
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(1)
        .max(1);

    for bin in &report.histogram.bins {
        let bar_len = (bin.count as usize * 40) / peak as usize;
        let mid = (bin.lower as f64 + bin.upper as f64) / 2.0;
        println!(
            "  [{:>6}, {:>6}) {:>6} {:<40} | fit {:>8.1} | no-pity {:>8.1}",
            bin.lower,
            bin.upper,
            bin.count,
            "#".repeat(bar_len),
            n * w * fit.pdf(mid),
            n * w * baseline.pdf(mid),
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
