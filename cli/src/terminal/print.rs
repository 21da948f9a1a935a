use std::time::Duration;

use colored::*;
use netreach_common::outcome::ProbeOutcome;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

/// One rendered result line, in arrival order.
pub fn outcome_line(outcome: &ProbeOutcome) -> String {
    let symbol: ColoredString = if outcome.success {
        "[+]".green().bold()
    } else {
        "[-]".red().bold()
    };

    format!("{} {}  {}", symbol, outcome.target.bold(), outcome.message)
}

pub fn summary(outcomes: &[ProbeOutcome], total_time: Duration) {
    let reachable: usize = outcomes.iter().filter(|o| o.success).count();
    let unreachable: usize = outcomes.len() - reachable;

    let reachable: ColoredString = format!("{reachable} reachable").bold().green();
    let unreachable: ColoredString = format!("{unreachable} unreachable").bold().red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    println!("{}", sep);
    println!("Check complete: {reachable}, {unreachable} in {total_time}");
}

pub fn no_results() {
    println!("{}", "no targets produced an outcome".dimmed());
}
