//! Configuration file parsing
//!
//! One directive per line:
//!
//! ```text
//! # comment
//! rootLogger=app.log
//! logger.Net.Connector=DEBUG,connector.log
//! logger.Net.Connector.Handshake=TRACE
//! ```
//!
//! Parsing is pure; [`Registry`](crate::core::Registry) applies the resulting
//! [`Directive`]s.

use super::log_level::LogLevel;

pub const ROOT_LOGGER: &str = "rootLogger";
pub const LOGGER: &str = "logger";

/// Separator between the segments of a directive name.
pub const NAME_SEPARATOR: char = '.';

/// Target names that select the standard streams instead of a file.
pub const TARGET_STDOUT: &str = "STDOUT";
pub const TARGET_STDERR: &str = "STDERR";

/// Outcome of scanning a single configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty line or comment
    Blank,
    /// `<name> = <value>`, both stripped
    Assignment { name: &'a str, value: &'a str },
    /// A name not followed by `=`
    Malformed { reason: &'static str },
}

/// Level part of a `logger.<tag>` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSpec {
    Missing,
    Known(LogLevel),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `rootLogger[.<ignored>] = [<LEVEL>,]<target>`
    RootLogger {
        level: Option<LogLevel>,
        target: String,
        extra_segments: bool,
    },
    /// `logger.<tag> = <LEVEL>[,<target>]`
    Logger {
        tag: String,
        level: LevelSpec,
        target: Option<String>,
    },
    /// Any other first segment
    Unrecognized,
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ':')
}

fn strip(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Scan one line of configuration text.
///
/// `#` and `;` start a comment at the beginning of a line and anywhere inside
/// the value.
pub fn parse_line(line: &str) -> Line<'_> {
    let rest = line.trim_start_matches(is_blank);
    if rest.is_empty() || rest.starts_with('#') || rest.starts_with(';') {
        return Line::Blank;
    }

    let name_end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
    let name = &rest[..name_end];

    let after_name = rest[name_end..].trim_start_matches(is_blank);
    let Some(after_eq) = after_name.strip_prefix('=') else {
        return Line::Malformed { reason: "no '='" };
    };

    let value_end = after_eq.find(['#', ';']).unwrap_or(after_eq.len());
    let value = strip(&after_eq[..value_end]);

    Line::Assignment { name, value }
}

/// Interpret an assignment as a directive.
pub fn parse_directive(name: &str, value: &str) -> Directive {
    let mut segments = name.split(NAME_SEPARATOR).filter(|s| !s.is_empty());

    match segments.next() {
        Some(ROOT_LOGGER) => {
            let extra_segments = segments.next().is_some();
            let (level, target) = split_root_value(value);
            Directive::RootLogger {
                level,
                target: target.to_string(),
                extra_segments,
            }
        }
        Some(LOGGER) => {
            let tag = segments.collect::<Vec<_>>().join(".");
            let mut parts = value.split(',').map(strip).filter(|p| !p.is_empty());

            let level = match parts.next() {
                None => LevelSpec::Missing,
                Some(keyword) => match keyword.parse::<LogLevel>() {
                    Ok(level) => LevelSpec::Known(level),
                    Err(_) => LevelSpec::Unknown(keyword.to_string()),
                },
            };
            let target = parts.next().map(str::to_string);

            Directive::Logger { tag, level, target }
        }
        _ => Directive::Unrecognized,
    }
}

/// `INFO,app.log` carries a root level; anything else is a bare target.
fn split_root_value(value: &str) -> (Option<LogLevel>, &str) {
    if let Some((head, tail)) = value.split_once(',') {
        let tail = strip(tail);
        if let Ok(level) = strip(head).parse::<LogLevel>() {
            if !tail.is_empty() {
                return (Some(level), tail);
            }
        }
    }
    (None, value)
}
