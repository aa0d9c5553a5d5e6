//! # Endpoint Extractor
//!
//! Pulls `host = <value>` declarations out of free-form config text.
//!
//! A line matches when, after optional leading whitespace, it starts with the
//! literal `host`, then optional whitespace, `=`, optional whitespace and a
//! value. The value is trimmed and dropped if empty. Every other line is
//! ignored, so the rest of the config syntax never matters here.

use smokecheck_common::endpoint::{ConfigSource, EndpointIdentity};

const HOST_KEY: &str = "host";

/// `\n`, `\r\n` and a bare `\r` all end a line. The empty piece between
/// `\r` and `\n` never matches, so it needs no special case.
const LINE_BREAKS: [char; 2] = ['\r', '\n'];

/// Lazy iterator over the host values of one config text, in file order.
///
/// A clone resumes from the same line; calling [`hosts`] again restarts from
/// the top.
#[derive(Debug, Clone)]
pub struct Hosts<'a> {
    lines: std::str::Split<'a, [char; 2]>,
}

impl<'a> Iterator for Hosts<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().find_map(parse_host_line)
    }
}

pub fn hosts(text: &str) -> Hosts<'_> {
    Hosts {
        lines: text.split(LINE_BREAKS),
    }
}

/// Flattens every source into `(source, host)` identities, keeping source
/// order first and line order second.
pub fn endpoints(sources: &[ConfigSource]) -> Vec<EndpointIdentity> {
    sources
        .iter()
        .flat_map(|source| {
            hosts(&source.text).map(|host| EndpointIdentity::new(source.name.as_str(), host))
        })
        .collect()
}

fn parse_host_line(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(HOST_KEY)?;
    let value = rest.trim_start().strip_prefix('=')?.trim();
    (!value.is_empty()).then_some(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
