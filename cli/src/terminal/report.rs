//! Human readable rendering of an [`AggregateReport`].

use colored::*;
use smokecheck_common::config::ProbeMode;
use smokecheck_common::outcome::{DnsOutcome, EndpointResult};
use smokecheck_core::policy::Verdict;
use smokecheck_core::report::{AggregateReport, DnsSummary, PingSummary};

use crate::mprint;
use crate::terminal::{colors, print};

struct Section {
    title: String,
    color: Color,
    lines: Vec<String>,
}

pub fn found(endpoints: usize, files: usize) {
    print::print_status(format!(
        "Found {} endpoints across {} config file(s).",
        endpoints.to_string().bold(),
        files.to_string().bold()
    ));
    mprint!();
}

pub fn render(report: &AggregateReport<'_>, mode: ProbeMode) {
    for section in sections(report, mode) {
        print::print(&format!("{}", section.title.color(section.color).bold()));
        for line in &section.lines {
            print::print(line);
        }
        mprint!();
    }
}

pub fn summary(report: &AggregateReport<'_>, mode: ProbeMode, verdict: Verdict) {
    print::header("summary");
    print::print(&format!("Total endpoints: {}", report.total.to_string().bold()));
    if mode.includes_dns() {
        print::print(&dns_line(report.dns_summary()));
    }
    if mode.includes_ping() {
        print::print(&ping_line(report.ping_summary()));
    }
    print::fat_separator();
    print::centerln(&verdict_line(verdict));
}

fn sections(report: &AggregateReport<'_>, mode: ProbeMode) -> Vec<Section> {
    let mut sections = Vec::new();

    if mode.includes_dns() {
        push_section(&mut sections, "DNS Resolved", colors::PASS, &report.dns_resolved, |r| {
            let address = match &r.dns {
                Some(DnsOutcome::Resolved(address)) => address.as_str(),
                _ => "",
            };
            format!("  {} {}  ->  {}", "+".color(colors::PASS), r.label(), address)
        });
        push_section(&mut sections, "DNS Failed", colors::FAIL, &report.dns_failed, |r| {
            let reason = match &r.dns {
                Some(DnsOutcome::Failed(reason)) => reason.as_str(),
                _ => "",
            };
            format!("  {} {}  ({})", "x".color(colors::FAIL), r.label(), reason)
        });
        push_section(
            &mut sections,
            "DNS Skipped - IP address",
            colors::SKIP,
            &report.dns_skipped,
            |r| format!("  {} {}", "-".color(colors::SKIP), r.label()),
        );
    }

    if mode.includes_ping() {
        push_section(&mut sections, "Ping Reachable", colors::PASS, &report.ping_reachable, |r| {
            format!("  {} {}", "+".color(colors::PASS), r.label())
        });
        push_section(
            &mut sections,
            "Ping Unreachable",
            colors::FAIL,
            &report.ping_unreachable,
            |r| format!("  {} {}", "x".color(colors::FAIL), r.label()),
        );
    }

    sections
}

fn push_section(
    sections: &mut Vec<Section>,
    title: &str,
    color: Color,
    results: &[&EndpointResult],
    line: impl Fn(&EndpointResult) -> String,
) {
    if results.is_empty() {
        return;
    }
    sections.push(Section {
        title: format!("{title} ({}):", results.len()),
        color,
        lines: results.iter().map(|r| line(r)).collect(),
    });
}

fn dns_line(summary: DnsSummary) -> String {
    format!(
        "DNS:  {}  {}  {}",
        format!("{} passed", summary.passed).color(colors::PASS),
        format!("{} failed", summary.failed).color(colors::FAIL),
        format!("{} skipped", summary.skipped).color(colors::SKIP)
    )
}

fn ping_line(summary: PingSummary) -> String {
    format!(
        "Ping: {}  {}",
        format!("{} passed", summary.passed).color(colors::PASS),
        format!("{} failed", summary.failed).color(colors::FAIL)
    )
}

fn verdict_line(verdict: Verdict) -> String {
    match verdict {
        Verdict::Success => "All endpoints passed validation."
            .color(colors::PASS)
            .bold()
            .to_string(),
        Verdict::Failure => "Some endpoints failed validation."
            .color(colors::FAIL)
            .bold()
            .to_string(),
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
