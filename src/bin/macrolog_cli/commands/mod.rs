// ABOUTME: Re-exports command modules for the macrolog CLI
// ABOUTME: Shared id-or-name-prefix resolution helpers for catalog entities

pub mod data;
pub mod diary;
pub mod food;
pub mod insights;
pub mod meal;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

/// Today's calendar date in the local timezone
pub(crate) fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Resolve a user-supplied reference against (id, name) pairs.
///
/// Accepts an exact id or a case-insensitive name prefix; the prefix must
/// match exactly one entry.
pub(crate) fn resolve<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    needle: &str,
    kind: &str,
) -> Result<String> {
    let needle_lower = needle.to_lowercase();
    let mut prefix_matches = Vec::new();
    for (id, name) in entries {
        if id == needle {
            return Ok(id.to_owned());
        }
        if name.to_lowercase().starts_with(&needle_lower) {
            prefix_matches.push((id.to_owned(), name.to_owned()));
        }
    }
    match prefix_matches.len() {
        0 => bail!("no {kind} matches {needle:?}"),
        1 => Ok(prefix_matches.remove(0).0),
        _ => {
            let names: Vec<String> = prefix_matches
                .iter()
                .map(|(_, name)| name.clone())
                .collect();
            bail!("{kind} {needle:?} is ambiguous: {}", names.join(", "))
        }
    }
}
