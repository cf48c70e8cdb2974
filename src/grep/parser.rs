//! Parsing of `git grep -n` output.
//!
//! With `-z` each line has the form `path\0line-number:content` and the path
//! is printed verbatim, so it may contain colons. Without `-z` the form is
//! `path:line-number:content` and the line is split into at most three parts.
//! The content itself may contain colons in both forms.

use serde::Serialize;

/// One matching line reported by the search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrepMatch {
    /// Path of the file, as reported by the search tool
    pub file_path: String,
    /// Line number, when the second field is numeric
    pub line_number: Option<u64>,
    /// Text of the matching line
    pub matched_line: String,
}

/// Parse a single output line.
///
/// Returns `None` for lines with fewer than three fields, which covers git's
/// `Binary file ... matches` notices.
pub fn parse_line(line: &str) -> Option<GrepMatch> {
    let (file_path, rest) = match line.split_once('\0') {
        Some((file_path, rest)) => (file_path, rest),
        None => line.split_once(':')?,
    };
    // Line number ends at the next separator, either form
    let end = rest.find(|c| c == ':' || c == '\0')?;
    let (line_number, matched_line) = (&rest[..end], &rest[end + 1..]);

    if file_path.is_empty() {
        return None;
    }

    Some(GrepMatch {
        file_path: file_path.to_string(),
        line_number: line_number.parse().ok(),
        matched_line: matched_line.to_string(),
    })
}

/// Parse the full stdout of a search, keeping tool order.
pub fn parse_output(stdout: &str) -> Vec<GrepMatch> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}
