use std::time::Duration;

use thiserror::Error;

/// Default request/connect timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Upper sanity bound on the timeout. Not a protocol requirement, just a
/// guard against pathological hangs multiplying across a large batch.
pub const MAX_TIMEOUT_MS: u64 = 60_000;

/// Default cap on simultaneously running probes.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Ports tried, in order, when both HTTP probes fail during a host
/// reachability check. Common-service heuristic; overridable per run.
pub const DEFAULT_FALLBACK_PORTS: [u16; 4] = [443, 80, 22, 8080];

/// Selects how each input line is interpreted and probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// HTTPS/HTTP HEAD with TCP fallback; lines are bare hostnames.
    Host,
    /// Single TCP connect; lines are `host:port` pairs.
    TcpPort,
}

/// Configuration for one batch run.
///
/// Validated once before any probing starts; per-target problems never
/// surface here, only batch-level misconfiguration does.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub timeout_ms: u64,
    pub concurrency: usize,
    pub fallback_ports: Vec<u16>,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            concurrency: DEFAULT_CONCURRENCY,
            fallback_ports: DEFAULT_FALLBACK_PORTS.to_vec(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Rejects configurations that must prevent the batch from starting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 1 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::TimeoutOutOfRange(self.timeout_ms));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.mode == Mode::Host && self.fallback_ports.is_empty() {
            return Err(ConfigError::NoFallbackPorts);
        }
        Ok(())
    }
}

/// Batch-level configuration problems. Fatal to starting the run, unlike
/// per-target input or network errors which become failed outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timeout must be within 1..={MAX_TIMEOUT_MS} ms, got {0}")]
    TimeoutOutOfRange(u64),
    #[error("concurrency cap must be at least 1")]
    ZeroConcurrency,
    #[error("fallback port list cannot be empty in host mode")]
    NoFallbackPorts,
    #[error("input contains no targets")]
    EmptyInput,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
