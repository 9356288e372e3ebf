//! Worksheet names derived from scheme identifiers.

use std::collections::HashSet;

use pivot_model::SHEET_NAME_MAX;

/// Characters a worksheet name may not contain.
const INVALID_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Assigns a unique, workbook-legal name per requested sheet.
#[derive(Debug, Default)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl SheetNamer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for the next sheet of this scheme.
    ///
    /// The scheme is sanitized and clipped to the 31-character workbook
    /// limit. Collisions (workbooks compare names case-insensitively)
    /// take `" 1"`, `" 2"`, … suffixes, with the base re-clipped so the
    /// suffixed name still fits the limit.
    pub fn assign(&mut self, scheme: &str) -> String {
        let base = sanitize(scheme);
        let mut candidate = clip(&base, SHEET_NAME_MAX);
        let mut attempt = 0usize;
        while self.used.contains(&candidate.to_lowercase()) {
            attempt += 1;
            let suffix = format!(" {attempt}");
            let keep = SHEET_NAME_MAX.saturating_sub(suffix.chars().count());
            candidate = format!("{}{suffix}", clip(&base, keep));
        }
        self.used.insert(candidate.to_lowercase());
        candidate
    }
}

/// Replace illegal characters and strip surrounding apostrophes.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { ' ' } else { c })
        .collect();
    let trimmed = cleaned.trim().trim_matches('\'').trim();
    if trimmed.is_empty() {
        "Sheet".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Clip to `limit` characters without leaving a trailing space or
/// apostrophe (names may not end with an apostrophe).
fn clip(name: &str, limit: usize) -> String {
    let clipped: String = name.chars().take(limit).collect();
    let clipped = clipped.trim_end().trim_end_matches('\'').trim_end();
    if clipped.is_empty() {
        "Sheet".to_string()
    } else {
        clipped.to_string()
    }
}
