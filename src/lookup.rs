// SPDX-License-Identifier: GPL-2.0-or-later

//! Exact-match lookup over a domain's entry table.
//!
//! Tables are short, so every operation is a linear scan; first hit in
//! table order wins when codes repeat.

use crate::types::{Domain, Entry};

/// ASCII case-insensitive exact match on the entry name.
pub fn find_by_name(entries: &'static [Entry], name: &str) -> Option<&'static Entry> {
    entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Exact match on the entry code.
pub fn find_by_code(entries: &'static [Entry], code: i32) -> Option<&'static Entry> {
    entries.iter().find(|e| e.code == code)
}

/// Resolve a command-line token against a domain's table.
///
/// A token whose first character is a decimal digit is parsed as a code;
/// the parse is strict, so `"2x"` is a miss rather than a lookup of 2.
/// Anything else, including tokens with a leading `-`, is matched as a
/// name (negative-code lookup is intentionally not reachable this way).
pub fn find(domain: Domain, token: &str) -> Option<&'static Entry> {
    let entries = domain.entries();
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        token
            .parse::<i32>()
            .ok()
            .and_then(|code| find_by_code(entries, code))
    } else {
        find_by_name(entries, token)
    }
}
