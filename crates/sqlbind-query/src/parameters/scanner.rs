//! SQL placeholder scanner
//!
//! Locates named-placeholder occurrences in SQL text in a single
//! left-to-right pass, skipping string literals, quoted identifiers,
//! comments, `::` pairs, and driver escape sequences.

use regex::Regex;
use std::sync::LazyLock;

use sqlbind_core::{ColonEscape, NoColonEscape};

use super::{ExpandError, ExpandResult};

/// A single named-placeholder occurrence.
///
/// The same name may occur any number of times; each occurrence is distinct.
/// Offsets are byte positions into the original SQL text, in order of
/// appearance - the canonical iteration order for expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Parameter name, without the leading colon.
    pub name: String,
    /// Byte offset of the colon.
    pub start: usize,
    /// Byte offset one past the last identifier character.
    pub end: usize,
}

// Identifier characters allowed in a placeholder name.
static PLACEHOLDER_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+").expect("valid regex"));

// Regions a colon can never start a placeholder in: string literals and
// quoted identifiers (standard SQL quote doubling), line and block comments.
static SKIP_REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'(?:[^']|'')*'|"(?:[^"]|"")*"|--[^\n]*|/\*[\s\S]*?\*/"#).expect("valid regex")
});

/// Scans a SQL string for named placeholders.
///
/// Returns every `:name` occurrence in order of appearance. Placeholders
/// inside string literals, quoted identifiers, and comments are ignored, and
/// `::` pairs (e.g. PostgreSQL casts) never produce a placeholder. Any other
/// colon with no identifier character after it fails with
/// [`ExpandError::MalformedPlaceholder`].
///
/// # Example
///
/// ```
/// use sqlbind_query::parameters::scan_placeholders;
///
/// let placeholders =
///     scan_placeholders("SELECT * FROM users WHERE id = :id AND name = :name").unwrap();
/// assert_eq!(placeholders.len(), 2);
/// assert_eq!(placeholders[0].name, "id");
/// assert_eq!(placeholders[1].name, "name");
/// ```
pub fn scan_placeholders(sql: &str) -> ExpandResult<Vec<Placeholder>> {
    scan_placeholders_with(sql, &NoColonEscape)
}

/// Scans a SQL string for named placeholders with a driver escape hook.
///
/// Identical to [`scan_placeholders`], except that every colon outside a
/// skip region is first offered to `escape`; colons claimed as part of a
/// literal-colon escape sequence are passed through untouched.
pub fn scan_placeholders_with(
    sql: &str,
    escape: &dyn ColonEscape,
) -> ExpandResult<Vec<Placeholder>> {
    let skip_ranges = build_skip_ranges(sql);
    let bytes = sql.as_bytes();
    let mut placeholders = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b':' {
            pos += 1;
            continue;
        }
        if let Some(&(_, end)) = skip_ranges.iter().find(|(s, e)| *s <= pos && pos < *e) {
            pos = end;
            continue;
        }
        if let Some(end) = escape.matches(sql, pos) {
            pos = end;
            continue;
        }
        // A `::` pair is literal text (e.g. a cast), never a placeholder.
        if bytes.get(pos + 1) == Some(&b':') {
            pos += 2;
            continue;
        }
        match PLACEHOLDER_NAME_REGEX.find(&sql[pos + 1..]) {
            Some(m) => {
                let end = pos + 1 + m.end();
                placeholders.push(Placeholder {
                    name: sql[pos + 1..end].to_string(),
                    start: pos,
                    end,
                });
                pos = end;
            }
            None => return Err(ExpandError::MalformedPlaceholder(pos)),
        }
    }

    Ok(placeholders)
}

/// Build ranges of string literals, quoted identifiers, and comments.
fn build_skip_ranges(sql: &str) -> Vec<(usize, usize)> {
    SKIP_REGION_REGEX
        .find_iter(sql)
        .map(|m| (m.start(), m.end()))
        .collect()
}
