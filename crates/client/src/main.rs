use std::sync::Arc;

use rdp_common::StepConfig;
use rdp_history::JsonHistoryStore;
use rdp_planner::{DirectSizeEstimator, JobStepInfo, RatioAdjustedEstimator, WorkerEstimator};
use rdp_source::{LocalFsMetadata, SourceSizeResolver};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args
        .first()
        .map(|a| a == "--help" || a == "-h")
        .unwrap_or(false)
        || args.is_empty()
    {
        print_usage();
        return Ok(());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let opts = parse_opts(&args)?;

    let mut step = JobStepInfo::load_from_json(&opts.step_path)?;
    if opts.bytes_per_worker.is_some() || opts.threshold.is_some() {
        let config = StepConfig {
            bytes_per_worker: opts.bytes_per_worker.or(step.config.bytes_per_worker),
            history_ratio_threshold: opts.threshold.or(step.config.history_ratio_threshold),
        };
        step = step.with_config(config);
    }

    let resolver = SourceSizeResolver::new(Arc::new(LocalFsMetadata::new()));
    let direct = DirectSizeEstimator::new(resolver);

    let (workers, strategy) = match &opts.history_path {
        Some(history_path) => {
            let history = Arc::new(JsonHistoryStore::load(history_path)?);
            let ratio = RatioAdjustedEstimator::new(direct.clone(), history);
            match ratio.estimate(&step) {
                Some(workers) => (Some(workers), "ratio"),
                None => (direct.estimate(&step), "direct"),
            }
        }
        None => (direct.estimate(&step), "direct"),
    };

    let (workers, strategy) = match workers {
        Some(workers) => (workers, strategy),
        None => {
            info!(
                step = %step.name,
                default_workers = opts.default_workers,
                "all estimators declined; using platform default"
            );
            (opts.default_workers, "default")
        }
    };

    println!("step={} workers={workers} strategy={strategy}", step.name);
    Ok(())
}

#[derive(Debug, Clone)]
struct PlanOpts {
    step_path: String,
    history_path: Option<String>,
    bytes_per_worker: Option<u64>,
    threshold: Option<f64>,
    default_workers: u32,
}

fn parse_opts(args: &[String]) -> Result<PlanOpts, Box<dyn std::error::Error>> {
    let mut step_path = None;
    let mut history_path = None;
    let mut bytes_per_worker = None;
    let mut threshold = None;
    let mut default_workers = 1_u32;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--step" => {
                step_path = Some(take_value(args, &mut i, "--step")?);
            }
            "--history" => {
                history_path = Some(take_value(args, &mut i, "--history")?);
            }
            "--bytes-per-worker" => {
                bytes_per_worker = Some(take_value(args, &mut i, "--bytes-per-worker")?.parse()?);
            }
            "--threshold" => {
                threshold = Some(take_value(args, &mut i, "--threshold")?.parse()?);
            }
            "--default-workers" => {
                default_workers = take_value(args, &mut i, "--default-workers")?.parse()?;
            }
            other => {
                return Err(format!("unknown option: {other}").into());
            }
        }
        i += 1;
    }

    Ok(PlanOpts {
        step_path: step_path.ok_or("missing required option: --step")?,
        history_path,
        bytes_per_worker,
        threshold,
        default_workers,
    })
}

fn take_value(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("missing value for {flag}").into())
}

fn print_usage() {
    println!("rdp-client: reduce-worker sizing for one job step");
    println!();
    println!("USAGE:");
    println!("  rdp-client --step <step.json> [--history <history.json>]");
    println!("             [--bytes-per-worker N] [--threshold X] [--default-workers N]");
    println!();
    println!("  --step             step definition (id, name, input tree, config)");
    println!("  --history          per-step execution history, chronological JSON");
    println!("  --bytes-per-worker override target input bytes per reduce worker");
    println!("  --threshold        override the history comparability threshold");
    println!("  --default-workers  fallback when every estimator declines (default 1)");
}
