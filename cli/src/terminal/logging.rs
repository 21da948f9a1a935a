use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders each event as a short right-aligned level tag plus the
/// message. Probe results already get their own `[+]`/`[-]` lines from
/// the print module, so this only carries the tool's diagnostics and
/// stays quieter than a service log: no timestamps, no targets, no
/// span context.
pub struct NetreachFormatter;

impl<S, N> FormatEvent<S, N> for NetreachFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let tag: ColoredString = match *event.metadata().level() {
            Level::ERROR => "error:".red().bold(),
            Level::WARN => " warn:".yellow().bold(),
            Level::INFO => " info:".green(),
            Level::DEBUG => "debug:".blue().dimmed(),
            Level::TRACE => "trace:".dimmed(),
        };

        write!(writer, "{tag} ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn init() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .event_format(NetreachFormatter)
        .with_env_filter(filter)
        .init();
}
