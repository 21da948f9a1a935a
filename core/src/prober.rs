//! # Reachability Prober
//!
//! Implements the layered fallback chain for host reachability and the
//! single-connect TCP port check.
//!
//! The chain is an explicit ordered sequence of attempts, each returning
//! an optional success, short-circuiting on the first hit:
//!
//! 1. HTTPS HEAD — any response, or a TLS handshake failure, proves the
//!    host is alive.
//! 2. HTTP HEAD — same rule.
//! 3. Raw TCP connect against each configured fallback port in order.
//! 4. Everything exhausted — unreachable.
//!
//! Every attempt is bounded by the configured timeout, so the worst case
//! per host is roughly `(2 + fallback_ports.len()) × timeout`. Callers
//! that probe many hosts must run probes concurrently (see
//! [`crate::batch`]) or that product becomes the batch wall-clock time.

use std::time::Duration;

use netreach_common::config::Config;
use netreach_common::outcome::ProbeOutcome;
use reqwest::Client;
use tracing::debug;

use crate::network::http::{self, HeadResult};
use crate::network::tcp;

/// Performs the probing for one batch. Holds the shared HTTP client and
/// the run's timeout and fallback port list; cheap to clone into tasks.
#[derive(Clone)]
pub struct Prober {
    client: Client,
    timeout: Duration,
    fallback_ports: Vec<u16>,
    /// Overrides the implicit scheme port of both HEAD probes, so tests
    /// can aim them at a loopback listener. `None` in normal operation.
    head_port: Option<u16>,
}

impl Prober {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: http::build_client(cfg.timeout())?,
            timeout: cfg.timeout(),
            fallback_ports: cfg.fallback_ports.clone(),
            head_port: None,
        })
    }

    #[cfg(test)]
    fn with_head_port(mut self, port: u16) -> Self {
        self.head_port = Some(port);
        self
    }

    /// Runs the full fallback chain against `host`.
    ///
    /// Failures of individual layers are swallowed and logged at debug
    /// level only; the single outcome reports what finally decided the
    /// host's fate. A malformed hostname simply falls through every
    /// layer and comes back unreachable.
    pub async fn host_reachable(&self, host: &str) -> ProbeOutcome {
        if let Some(outcome) = self.head_probe(host, "https", "HTTPS").await {
            return outcome;
        }

        if let Some(outcome) = self.head_probe(host, "http", "HTTP").await {
            return outcome;
        }

        for &port in &self.fallback_ports {
            if tcp::connect(host, port, self.timeout).await.is_ok() {
                return ProbeOutcome::reachable(host, format!("HOST REACHABLE (TCP {port})"));
            }
        }

        ProbeOutcome::unreachable(host, "HOST UNREACHABLE (No route / timeout)")
    }

    /// One HEAD attempt; `None` means "learned nothing, try the next
    /// layer".
    async fn head_probe(&self, host: &str, scheme: &str, proto_label: &str) -> Option<ProbeOutcome> {
        let url: String = match self.head_port {
            Some(port) => format!("{scheme}://{host}:{port}"),
            None => format!("{scheme}://{host}"),
        };

        match http::head(&self.client, &url).await {
            HeadResult::Status(code) => Some(ProbeOutcome::reachable(
                host,
                format!("HOST REACHABLE ({proto_label} {code})"),
            )),
            HeadResult::TlsHandshake => Some(ProbeOutcome::reachable(
                host,
                "HOST REACHABLE (SSL CERT ISSUE)",
            )),
            HeadResult::Unreachable => {
                debug!("{proto_label} probe of {host} fell through");
                None
            }
        }
    }

    /// Single TCP connect with the run's timeout.
    ///
    /// The failure message passes the underlying error text through
    /// verbatim (connection refused, timed out, resolution failure);
    /// consumers display it as-is.
    pub async fn tcp_probe(&self, host: &str, port: u16) -> ProbeOutcome {
        let label: String = format!("{host}:{port}");

        match tcp::connect(host, port, self.timeout).await {
            Ok(()) => ProbeOutcome::reachable(label, "PORT OPEN"),
            Err(e) => ProbeOutcome::unreachable(label, e.to_string()),
        }
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
