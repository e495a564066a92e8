use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use arise_common::log::{PRINT_TARGET, SUCCESS_TARGET};

/// Keeps progress messages, drops everything below warnings otherwise.
const QUIET_FILTER: &str = "warn,arise::success=info,arise::print=info";

pub struct AriseFormatter;

impl<S, N> FormatEvent<S, N> for AriseFormatter
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
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                if meta.target() == SUCCESS_TARGET {
                    ("[✓]", |s| s.green().bold())
                } else {
                    match *meta.level() {
                        Level::DEBUG => ("[?]", |s| s.blue()),
                        Level::INFO => ("[+]", |s| s.green()),
                        Level::WARN => ("[*]", |s| s.yellow().bold()),
                        Level::ERROR => ("[-]", |s| s.red().bold()),
                        _ => ("[ ]", |s| s.dimmed()),
                    }
                };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the quiet level.
pub fn init(quiet: u8) {
    let default_filter = if quiet >= 2 { QUIET_FILTER } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(AriseFormatter)
        .init();
}
