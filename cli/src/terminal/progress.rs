use indicatif::ProgressStyle;
use smokecheck_core::progress::Progress;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Drives the progress bar attached to a span created with
/// `indicatif.pb_show`.
pub struct SpanProgress {
    span: Span,
}

impl SpanProgress {
    pub fn new(span: Span) -> Self {
        span.pb_set_style(&style());
        Self { span }
    }
}

impl Progress for SpanProgress {
    fn on_start(&self, total: usize) {
        self.span.pb_set_length(total as u64);
    }

    fn on_complete(&self) {
        self.span.pb_inc(1);
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} Checking... [{pos}/{len}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}
