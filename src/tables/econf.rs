// SPDX-License-Identifier: GPL-2.0-or-later

//! libeconf configuration-library error codes.
//!
//! Mirrors the `econf_err` enumeration. libeconf has no maintained Rust
//! binding, so the message catalog that `econf_errString()` would provide
//! is compiled in alongside the codes; upstream ships these strings in
//! English only.

use crate::types::Entry;

pub const ECONF: &[Entry] = &[
    Entry::new("ECONF_SUCCESS", 0),
    Entry::new("ECONF_ERROR", 1),
    Entry::new("ECONF_NOMEM", 2),
    Entry::new("ECONF_NOFILE", 3),
    Entry::new("ECONF_MISSING_BRACKET", 4),
    Entry::new("ECONF_MISSING_DELIMITER", 5),
    Entry::new("ECONF_EMPTYKEY", 6),
    Entry::new("ECONF_WRITEERROR", 7),
    Entry::new("ECONF_PARSE_ERROR", 8),
    Entry::new("ECONF_MISSING_OBJ", 9),
    Entry::new("ECONF_NOKEY", 10),
    Entry::new("ECONF_NOGROUP", 11),
    Entry::new("ECONF_WRONG_OWNER", 12),
    Entry::new("ECONF_WRONG_GROUP", 13),
    Entry::new("ECONF_WRONG_FILE_PERMISSION", 14),
    Entry::new("ECONF_WRONG_DIR_PERMISSION", 15),
    Entry::new("ECONF_ERROR_FILE_IS_SYM_LINK", 16),
    Entry::new("ECONF_PARSING_CALLBACK_FAILED", 17),
];

pub(crate) const MESSAGES: &[(i32, &str)] = &[
    (0, "Success"),
    (1, "Generic error"),
    (2, "Out of memory"),
    (3, "Configuration file not found"),
    (4, "Missing closing section bracket"),
    (5, "Missing delimiter between key and value"),
    (6, "Key is without value"),
    (7, "Cannot write configuration file"),
    (8, "General parse error"),
    (9, "Missing object"),
    (10, "Key not found"),
    (11, "Group not found"),
    (12, "File has wrong owner"),
    (13, "File has wrong group"),
    (14, "File has insecure file permissions"),
    (15, "File is in a directory with insecure permissions"),
    (16, "File is a symlink, which is not allowed"),
    (17, "User defined parsing callback has failed"),
];

pub(crate) const UNKNOWN_MESSAGE: &str = "Unknown error";
