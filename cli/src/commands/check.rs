use std::path::{Path, PathBuf};
use std::process::ExitCode;

use smokecheck_common::config::RunConfig;
use smokecheck_core::{Engine, extract, policy};
use tracing::{Instrument, info, info_span};

use crate::sources;
use crate::terminal::progress::SpanProgress;
use crate::terminal::report;

pub async fn check(files: &[PathBuf], dir: &Path, cfg: RunConfig) -> anyhow::Result<ExitCode> {
    let sources = sources::load(files, dir).await?;
    let endpoints = extract::endpoints(&sources);
    report::found(endpoints.len(), sources.len());

    let engine = Engine::with_system_prober(cfg);
    let outcome = {
        let span = info_span!("check", indicatif.pb_show = true);
        let progress = SpanProgress::new(span.clone());
        engine
            .check_endpoints(endpoints, &progress)
            .instrument(span)
            .await?
    };

    let report = outcome.report();
    let verdict = policy::decide(&report);
    info!("checked {} endpoints, verdict {:?}", report.total, verdict);

    report::render(&report, cfg.mode());
    report::summary(&report, cfg.mode(), verdict);

    Ok(if verdict.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
