use std::fmt::Write as _;
use std::path::Path;

use netreach_common::outcome::ProbeOutcome;

/// Writes the completed batch as `target,status,message` rows.
pub fn write_csv(path: &Path, outcomes: &[ProbeOutcome]) -> std::io::Result<()> {
    std::fs::write(path, render_csv(outcomes))
}

fn render_csv(outcomes: &[ProbeOutcome]) -> String {
    let mut out = String::from("target,status,message\n");

    for outcome in outcomes {
        let status: &str = if outcome.success { "SUCCESS" } else { "FAILED" };
        let _ = writeln!(
            out,
            "{},{},{}",
            csv_field(&outcome.target),
            status,
            csv_field(&outcome.message)
        );
    }

    out
}

/// Quotes a field only when it needs it (commas, quotes, newlines).
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
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
