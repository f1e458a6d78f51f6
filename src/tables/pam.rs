// SPDX-License-Identifier: GPL-2.0-or-later

//! PAM authentication-module error codes.
//!
//! Mirrors the return values of `_pam_types.h`. The message catalog carries
//! the English `pam_strerror()` texts; unlike errno, these do not vary with
//! the active locale here, since the tool does not link against libpam.

use crate::types::Entry;

pub const PAM: &[Entry] = &[
    Entry::new("PAM_SUCCESS", 0),
    Entry::new("PAM_OPEN_ERR", 1),
    Entry::new("PAM_SYMBOL_ERR", 2),
    Entry::new("PAM_SERVICE_ERR", 3),
    Entry::new("PAM_SYSTEM_ERR", 4),
    Entry::new("PAM_BUF_ERR", 5),
    Entry::new("PAM_PERM_DENIED", 6),
    Entry::new("PAM_AUTH_ERR", 7),
    Entry::new("PAM_CRED_INSUFFICIENT", 8),
    Entry::new("PAM_AUTHINFO_UNAVAIL", 9),
    Entry::new("PAM_USER_UNKNOWN", 10),
    Entry::new("PAM_MAXTRIES", 11),
    Entry::new("PAM_NEW_AUTHTOK_REQD", 12),
    Entry::new("PAM_ACCT_EXPIRED", 13),
    Entry::new("PAM_SESSION_ERR", 14),
    Entry::new("PAM_CRED_UNAVAIL", 15),
    Entry::new("PAM_CRED_EXPIRED", 16),
    Entry::new("PAM_CRED_ERR", 17),
    Entry::new("PAM_NO_MODULE_DATA", 18),
    Entry::new("PAM_CONV_ERR", 19),
    Entry::new("PAM_AUTHTOK_ERR", 20),
    Entry::new("PAM_AUTHTOK_RECOVERY_ERR", 21),
    Entry::new("PAM_AUTHTOK_LOCK_BUSY", 22),
    Entry::new("PAM_AUTHTOK_DISABLE_AGING", 23),
    Entry::new("PAM_TRY_AGAIN", 24),
    Entry::new("PAM_IGNORE", 25),
    Entry::new("PAM_ABORT", 26),
    Entry::new("PAM_AUTHTOK_EXPIRED", 27),
    Entry::new("PAM_MODULE_UNKNOWN", 28),
    Entry::new("PAM_BAD_ITEM", 29),
    Entry::new("PAM_CONV_AGAIN", 30),
    Entry::new("PAM_INCOMPLETE", 31),
];

pub(crate) const MESSAGES: &[(i32, &str)] = &[
    (0, "Success"),
    (1, "Failed to load module"),
    (2, "Symbol not found"),
    (3, "Error in service module"),
    (4, "System error"),
    (5, "Memory buffer error"),
    (6, "Permission denied"),
    (7, "Authentication failure"),
    (8, "Insufficient credentials to access authentication data"),
    (9, "Authentication service cannot retrieve authentication info"),
    (10, "User not known to the underlying authentication module"),
    (11, "Have exhausted maximum number of retries for service"),
    (12, "Authentication token is no longer valid; new one required"),
    (13, "User account has expired"),
    (14, "Cannot make/remove an entry for the specified session"),
    (15, "Authentication service cannot retrieve user credentials"),
    (16, "User credentials expired"),
    (17, "Failure setting user credentials"),
    (18, "No module specific data is present"),
    (19, "Conversation error"),
    (20, "Authentication token manipulation error"),
    (21, "Authentication information cannot be recovered"),
    (22, "Authentication token lock busy"),
    (23, "Authentication token aging disabled"),
    (24, "Failed preliminary check by password service"),
    (25, "The return value should be ignored by PAM dispatch"),
    (26, "Critical error - immediate abort"),
    (27, "Authentication token expired"),
    (28, "Module is unknown"),
    (29, "Bad item passed to pam_*_item()"),
    (30, "Conversation is waiting for event"),
    (31, "Application needs to call libpam again"),
];

pub(crate) const UNKNOWN_MESSAGE: &str = "Unknown PAM error";
