use std::fmt::Write as _;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{FilterExt, LevelFilter, filter_fn};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{self as fmt_layer, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Target of report lines. Events on it go verbatim to stdout, everything
/// else is a diagnostic for stderr.
pub const PRINT_TARGET: &str = "smokecheck::print";
const RAW_FIELD: &str = "raw_msg";

pub struct SmokecheckFormatter;

impl<S, N> FormatEvent<S, N> for SmokecheckFormatter
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

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == RAW_FIELD {
            let _ = write!(self.0, "{value:?}");
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `verbosity`. Progress bars are drawn only for spans
/// that carry `indicatif.pb_show`.
pub fn init_logging(verbosity: u8) {
    let indicatif_layer = IndicatifLayer::new();

    let default_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let report = fmt_layer::layer()
        .event_format(SmokecheckFormatter)
        .with_writer(indicatif_layer.get_stdout_writer())
        .with_filter(filter_fn(|meta| meta.target() == PRINT_TARGET));

    let diagnostics = fmt_layer::layer()
        .event_format(SmokecheckFormatter)
        .with_writer(indicatif_layer.get_stderr_writer())
        .with_filter(env_filter.and(filter_fn(|meta| meta.target() != PRINT_TARGET)));

    tracing_subscriber::registry()
        .with(report)
        .with(diagnostics)
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}
