//! Line rendering
//!
//! A line is a header followed by the rendered template:
//!
//! ```text
//! 2025/01/08T10:30:45 [INFO] Net.Connector connected to 10.0.0.1
//! ```

use super::arg::Arg;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

/// Substitute `{}` placeholders in `template` with `args`, in order.
///
/// `\X` emits `X` literally. Placeholders beyond the supplied arguments render
/// as nothing and surplus arguments are ignored.
///
/// ```
/// use hierlog::{render_template, Arg};
///
/// let line = render_template("value={} and {}", &[Arg::from(42), Arg::from("ok")]);
/// assert_eq!(line, "value=42 and ok");
/// assert_eq!(render_template(r"a\{}b", &[]), "a{}b");
/// ```
pub fn render_template(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    render_template_into(&mut out, template, args);
    out
}

pub fn render_template_into(out: &mut String, template: &str, args: &[Arg<'_>]) {
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            },
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                if let Some(arg) = remaining.next() {
                    arg.render_into(out);
                }
            }
            other => out.push(other),
        }
    }
}

/// `<timestamp> [<LEVEL>] <name> `
pub fn format_header(entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
    format!(
        "{} [{}] {} ",
        timestamp_format.format(&entry.timestamp),
        entry.level.to_str(),
        entry.logger
    )
}

/// Header and message, without the trailing newline.
pub fn format_line(entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
    let mut line = format_header(entry, timestamp_format);
    line.push_str(&entry.message);
    line
}
