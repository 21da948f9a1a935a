use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use netreach_common::config::Config;
use netreach_common::outcome::ProbeOutcome;
use netreach_core::batch;
use tracing::info;

use crate::export;
use crate::terminal::print;

/// Runs one batch for either mode: reads the input lines, streams each
/// outcome to the terminal as it completes behind a progress bar, then
/// prints the summary and optionally writes the CSV export.
pub async fn check(
    targets: Vec<String>,
    file: Option<PathBuf>,
    csv: Option<PathBuf>,
    cfg: Config,
) -> anyhow::Result<()> {
    let input: String = read_input(targets, file)?;
    let total: usize = input.lines().filter(|line| !line.trim().is_empty()).count();

    let start_time: Instant = Instant::now();
    let mut rx = batch::run_batch(&input, &cfg)?;

    let bar: ProgressBar = progress_bar(total as u64);
    let mut outcomes: Vec<ProbeOutcome> = Vec::with_capacity(total);

    while let Some(outcome) = rx.recv().await {
        bar.println(print::outcome_line(&outcome));
        bar.inc(1);
        outcomes.push(outcome);
    }
    bar.finish_and_clear();

    check_ends(&outcomes, start_time.elapsed());

    if let Some(path) = csv {
        export::write_csv(&path, &outcomes)
            .with_context(|| format!("writing CSV to {}", path.display()))?;
        info!("exported {} rows to {}", outcomes.len(), path.display());
    }

    Ok(())
}

fn check_ends(outcomes: &[ProbeOutcome], total_time: Duration) {
    if outcomes.is_empty() {
        print::no_results();
        return;
    }
    print::summary(outcomes, total_time);
}

/// Targets come from positional arguments, a file, or stdin, in that
/// order of preference. The batch runner sees one target per line either
/// way.
fn read_input(targets: Vec<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading targets from {}", path.display()));
    }

    if !targets.is_empty() {
        return Ok(targets.join("\n"));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading targets from stdin")?;
    Ok(buffer)
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::with_template("{bar:40.blue} {pos}/{len} probed")
        .expect("static template");
    bar.set_style(style);
    bar
}
