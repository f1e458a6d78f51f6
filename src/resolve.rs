// SPDX-License-Identifier: GPL-2.0-or-later

//! Per-domain description resolution.
//!
//! One entry point, three adapters: errno descriptions come from the
//! platform's `strerror(3)` and therefore follow the active locale; the
//! econf and PAM catalogs are compiled in (see the table modules). The
//! resolver never fails: unrecognized codes map to a fallback string.

use std::ffi::CStr;

use crate::tables::{econf, pam};
use crate::types::Domain;

const ERRNO_UNKNOWN_MESSAGE: &str = "Unknown error";

impl Domain {
    /// Resolve `code` to its human-readable description.
    pub fn describe(self, code: i32) -> String {
        match self {
            Domain::Econf => catalog_message(econf::MESSAGES, code, econf::UNKNOWN_MESSAGE),
            Domain::Errno => errno_message(code),
            Domain::Pam => catalog_message(pam::MESSAGES, code, pam::UNKNOWN_MESSAGE),
        }
    }
}

fn catalog_message(catalog: &[(i32, &'static str)], code: i32, fallback: &'static str) -> String {
    catalog
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(fallback, |(_, message)| *message)
        .to_string()
}

fn errno_message(code: i32) -> String {
    // strerror hands back a pointer into libc-owned storage that the next
    // call may rewrite; copy the text out before returning. The message may
    // be in a non-UTF-8 codeset under some locales, hence the lossy copy.
    let ptr = unsafe { libc::strerror(code) };
    if ptr.is_null() {
        return format!("{ERRNO_UNKNOWN_MESSAGE} {code}");
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{self, LocaleGuard};

    #[test]
    fn econf_codes_resolve() {
        assert_eq!(Domain::Econf.describe(0), "Success");
        assert_eq!(Domain::Econf.describe(2), "Out of memory");
        assert_eq!(Domain::Econf.describe(4242), "Unknown error");
    }

    #[test]
    fn pam_codes_resolve() {
        assert_eq!(Domain::Pam.describe(6), "Permission denied");
        assert_eq!(Domain::Pam.describe(7), "Authentication failure");
        assert_eq!(Domain::Pam.describe(-1), "Unknown PAM error");
    }

    #[test]
    fn errno_codes_resolve_in_c_locale() {
        let _lock = locale::test_lock();
        let _c = LocaleGuard::activate("C").expect("the C locale always exists");
        assert_eq!(
            Domain::Errno.describe(libc::ENOENT),
            "No such file or directory"
        );
        assert_eq!(Domain::Errno.describe(libc::EACCES), "Permission denied");
    }

    #[test]
    fn unrecognized_errno_still_yields_text() {
        assert!(!Domain::Errno.describe(99999).is_empty());
        assert!(!Domain::Errno.describe(-1).is_empty());
    }
}
