//! # Batch Runner
//!
//! Fans a parsed target list out into one probing task per target and
//! streams outcomes back in completion order.
//!
//! A semaphore caps how many probes run at once so a large input list
//! cannot exhaust ephemeral ports or file descriptors. Dropping the
//! returned receiver abandons the batch: in-flight tasks finish their
//! current network call, fail to deliver, and exit; nothing joins them.

use std::sync::Arc;

use anyhow::Context;
use netreach_common::config::{Config, ConfigError, Mode};
use netreach_common::network::target::{self, Target};
use netreach_common::outcome::ProbeOutcome;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

use crate::prober::Prober;

/// Starts one probe task per parsed input line and returns the outcome
/// stream immediately.
///
/// Guarantees exactly one [`ProbeOutcome`] per non-blank input line, in
/// completion order; each outcome carries its target label for
/// correlation. Batch-level misconfiguration (bad timeout, empty input)
/// is returned up front as a [`ConfigError`] wrapped in the `anyhow`
/// chain, and no probing starts.
pub fn run_batch(lines: &str, cfg: &Config) -> anyhow::Result<UnboundedReceiver<ProbeOutcome>> {
    cfg.validate()?;

    let targets: Vec<Target> = target::parse_lines(lines, cfg.mode);
    if targets.is_empty() {
        return Err(ConfigError::EmptyInput.into());
    }

    let prober: Prober = Prober::new(cfg).context("building HTTP client")?;
    let permits: Arc<Semaphore> = Arc::new(Semaphore::new(cfg.concurrency));
    let (tx, rx) = mpsc::unbounded_channel::<ProbeOutcome>();
    let mode: Mode = cfg.mode;

    debug!(
        "starting batch: {} targets, {} ms timeout, {} max concurrent",
        targets.len(),
        cfg.timeout_ms,
        cfg.concurrency
    );

    for target in targets {
        let prober = prober.clone();
        let permits = permits.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            // Closed semaphore is unreachable here; holders just queue.
            let Ok(_permit) = permits.acquire().await else {
                return;
            };

            let outcome: ProbeOutcome = probe_one(&prober, mode, target).await;

            // A closed channel means the consumer abandoned the batch.
            let _ = tx.send(outcome);
        });
    }

    Ok(rx)
}

/// Runs a batch to completion and collects every outcome, for consumers
/// that want the whole result set at once (CSV export, tests).
pub async fn run_batch_collect(lines: &str, cfg: &Config) -> anyhow::Result<Vec<ProbeOutcome>> {
    let mut rx = run_batch(lines, cfg)?;
    let mut outcomes: Vec<ProbeOutcome> = Vec::new();

    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Maps one target onto its probe. Invalid pseudo-targets never touch
/// the network; they degrade straight into their failure outcome.
async fn probe_one(prober: &Prober, mode: Mode, target: Target) -> ProbeOutcome {
    match (mode, target) {
        (_, Target::Invalid { raw, reason }) => ProbeOutcome::unreachable(raw, reason),
        (Mode::Host, Target::Host { name }) => prober.host_reachable(&name).await,
        (Mode::TcpPort, Target::HostPort { name, port }) => prober.tcp_probe(&name, port).await,
        // The parser only produces targets matching its mode; treat a
        // mismatch as an input error rather than panicking.
        (_, other) => ProbeOutcome::unreachable(other.label(), "INVALID FORMAT (mode mismatch)"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
