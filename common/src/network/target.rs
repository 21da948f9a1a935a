//! # Check Target Model
//!
//! Defines the possible inputs for a reachability check run.
//!
//! This module handles parsing and representing targets, which can be:
//! * A bare hostname (host reachability mode).
//! * A `host:port` pair (TCP port check mode).
//! * An invalid line, preserved so the batch can report it instead of
//!   aborting.

use crate::config::Mode;

/// Represents one target to be probed, parsed from a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Check whether the host answers HTTP(S) or a well-known TCP port.
    Host { name: String },
    /// Check a single TCP port on the host.
    HostPort { name: String, port: u16 },
    /// A malformed line. Carried through the run so it yields exactly one
    /// failed outcome; the prober is never invoked for it.
    Invalid { raw: String, reason: String },
}

impl Target {
    /// The label echoed back in the outcome for correlation with input.
    pub fn label(&self) -> String {
        match self {
            Target::Host { name } => name.clone(),
            Target::HostPort { name, port } => format!("{name}:{port}"),
            Target::Invalid { raw, .. } => raw.clone(),
        }
    }
}

/// Parses raw multi-line input into an ordered target list.
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Pure
/// transformation: no validation beyond syntax, no network access.
pub fn parse_lines(input: &str, mode: Mode) -> Vec<Target> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match mode {
            Mode::Host => parse_host_line(line),
            Mode::TcpPort => parse_host_port_line(line),
        })
        .collect()
}

/// Host mode ignores an explicit port: reachability always probes the
/// fixed fallback port set, so a trailing `:port` is stripped. The suffix
/// is only treated as a port when it parses as one (1..=65535); anything
/// else stays part of the name and will surface as an unreachable
/// outcome later.
fn parse_host_line(line: &str) -> Target {
    let name = match line.rsplit_once(':') {
        Some((host, suffix))
            if !host.is_empty() && suffix.parse::<u16>().is_ok_and(|port| port > 0) =>
        {
            host
        }
        _ => line,
    };

    Target::Host {
        name: name.to_string(),
    }
}

/// TCP mode requires exactly `host:port` with both parts non-empty and a
/// port in 1..=65535. Violations become [`Target::Invalid`] so the batch
/// keeps going.
fn parse_host_port_line(line: &str) -> Target {
    let parts: Vec<&str> = line.split(':').collect();

    let [host, port_str] = parts[..] else {
        return invalid(line, "INVALID FORMAT (expected host:port)");
    };

    if host.is_empty() || port_str.is_empty() {
        return invalid(line, "INVALID FORMAT (expected host:port)");
    }

    match port_str.parse::<u16>() {
        Ok(port) if port > 0 => Target::HostPort {
            name: host.to_string(),
            port,
        },
        _ => invalid(line, &format!("INVALID PORT '{port_str}' (expected 1-65535)")),
    }
}

fn invalid(raw: &str, reason: &str) -> Target {
    tracing::warn!("rejected input line {raw:?}: {reason}");
    Target::Invalid {
        raw: raw.to_string(),
        reason: reason.to_string(),
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
