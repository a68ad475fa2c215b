//! Hierarchical logger names
//!
//! Names are segmented by `.` or `::`; `Net.Connector::Handshake` has the
//! parent `Net.Connector`, whose parent is `Net`.

/// Parent of a hierarchical name.
///
/// Uses the rightmost separator; when both `::` and `.` occur, the one that
/// starts later in the string wins. Returns `None` when there is no separator
/// or the part before it is empty.
pub fn parent_name(name: &str) -> Option<&str> {
    let pos = match (name.rfind("::"), name.rfind('.')) {
        (Some(colons), Some(dot)) => colons.max(dot),
        (Some(colons), None) => colons,
        (None, Some(dot)) => dot,
        (None, None) => return None,
    };

    if pos == 0 {
        None
    } else {
        Some(&name[..pos])
    }
}

/// The name itself followed by each of its parents, nearest first.
pub fn ancestors(name: &str) -> Ancestors<'_> {
    Ancestors { next: Some(name) }
}

/// Iterator returned by [`ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = parent_name(current);
        Some(current)
    }
}

/// Last segment of a hierarchical name.
pub fn short_name(name: &str) -> &str {
    match parent_name(name) {
        Some(parent) => {
            let rest = &name[parent.len()..];
            let rest = rest.strip_prefix("::").or_else(|| rest.strip_prefix('.')).unwrap_or(rest);
            if rest.is_empty() {
                name
            } else {
                rest
            }
        }
        None => name,
    }
}
