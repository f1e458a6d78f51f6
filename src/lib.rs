// SPDX-License-Identifier: GPL-2.0-or-later

//! errlook — error code and description lookup.
//!
//! Maps symbolic error names and numeric error codes to human-readable
//! descriptions across three error namespaces: libeconf configuration
//! errors, system call errors (errno) and PAM authentication errors.
//!
//! ENGINE PIECES:
//! 1. **Tables**: compiled-in `(name, code)` tables, one per domain.
//! 2. **Lookup**: exact match by case-insensitive name or numeric code.
//! 3. **Search**: keyword filtering over resolved descriptions, either in
//!    the invoking locale or across every installed locale, with the
//!    process-global locale handled as a save/activate/restore resource.

pub mod locale;
pub mod lookup;
pub mod resolve;
pub mod search;
pub mod tables;
pub mod types;
