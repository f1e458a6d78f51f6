// SPDX-License-Identifier: GPL-2.0-or-later

//! Keyword search over resolved descriptions.
//!
//! An entry matches when every keyword is a case-insensitive substring of
//! its description. The single-locale variant reads whatever locale is
//! active; the multi-locale variant swaps through every installed locale,
//! one guarded swap at a time, and leaves the caller's locale untouched.

use anyhow::{ensure, Result};
use colored::Colorize;
use serde::Serialize;

use crate::locale::{self, LocaleGuard};
use crate::types::{Domain, Entry};

/// A table entry that matched a search, carrying the description text that
/// matched it.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    #[serde(flatten)]
    pub entry: Entry,
    pub description: String,
    /// Locale the description was resolved under; `None` when the search
    /// ran in the invoking locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Search one domain under the active locale.
///
/// Matches are yielded lazily in table order. At least one keyword is
/// required; the keyword list is validated before any table scan.
pub fn search(domain: Domain, keywords: &[String]) -> Result<impl Iterator<Item = Match>> {
    let needles = lowercase_keywords(keywords)?;
    Ok(domain.entries().iter().filter_map(move |entry| {
        let description = domain.describe(entry.code);
        matches(&description, &needles).then(|| Match {
            entry: *entry,
            description,
            locale: None,
        })
    }))
}

/// Search one domain across every installed locale.
///
/// Results come in locale-enumeration order, table order within each
/// locale, and are not deduplicated across locales. Locales that fail to
/// activate are reported with a warning and skipped. On return the active
/// locale equals the locale active on entry, whatever happened in between.
pub fn search_all_locales(domain: Domain, keywords: &[String]) -> Result<Vec<Match>> {
    ensure!(!keywords.is_empty(), "at least one search keyword is required");
    let locales = locale::installed_locales()?;
    search_across_locales(domain, keywords, &locales)
}

/// [`search_all_locales`] over a caller-supplied locale list.
pub fn search_across_locales(
    domain: Domain,
    keywords: &[String],
    locales: &[String],
) -> Result<Vec<Match>> {
    let needles = lowercase_keywords(keywords)?;
    let mut found = Vec::new();
    for name in locales {
        let _guard = match LocaleGuard::activate(name) {
            Ok(guard) => guard,
            Err(_) => {
                eprintln!(
                    "{} locale '{}' does not work",
                    "WARNING:".yellow().bold(),
                    name
                );
                continue;
            }
        };
        for entry in domain.entries() {
            let description = domain.describe(entry.code);
            if matches(&description, &needles) {
                found.push(Match {
                    entry: *entry,
                    description,
                    locale: Some(name.clone()),
                });
            }
        }
        // The guard drops here, restoring the caller's locale before the
        // next swap.
    }
    Ok(found)
}

fn lowercase_keywords(keywords: &[String]) -> Result<Vec<String>> {
    ensure!(!keywords.is_empty(), "at least one search keyword is required");
    // Unicode lowercasing, not ASCII: descriptions are localized text.
    Ok(keywords.iter().map(|k| k.to_lowercase()).collect())
}

fn matches(description: &str, needles: &[String]) -> bool {
    let haystack = description.to_lowercase();
    needles.iter().all(|needle| haystack.contains(needle.as_str()))
}
