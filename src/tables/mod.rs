// SPDX-License-Identifier: GPL-2.0-or-later

//! Static error-code tables, one per domain.
//!
//! Each table is a properly sized `const` slice in upstream declaration
//! order. Within a table, names are unique under ASCII case-insensitive
//! comparison; codes are usually unique too, but alias names such as
//! `EWOULDBLOCK`/`EAGAIN` legitimately share one code.

pub(crate) mod econf;
pub(crate) mod errno;
pub(crate) mod pam;

pub use econf::ECONF;
pub use errno::ERRNO;
pub use pam::PAM;

#[cfg(test)]
mod tests {
    use crate::types::{Domain, Entry};
    use std::collections::HashSet;

    fn assert_names_unique(entries: &[Entry]) {
        let mut seen = HashSet::new();
        for entry in entries {
            assert!(
                seen.insert(entry.name.to_ascii_lowercase()),
                "duplicate name {} in table",
                entry.name
            );
        }
    }

    #[test]
    fn names_unique_within_each_table() {
        for domain in Domain::all() {
            assert_names_unique(domain.entries());
        }
    }

    #[test]
    fn errno_spot_checks() {
        let hits: Vec<_> = super::ERRNO
            .iter()
            .filter(|e| matches!(e.name, "EPERM" | "ENOENT" | "EINVAL" | "EACCES"))
            .collect();
        assert_eq!(hits.len(), 4);
        for entry in hits {
            let expected = match entry.name {
                "EPERM" => libc::EPERM,
                "ENOENT" => libc::ENOENT,
                "EINVAL" => libc::EINVAL,
                _ => libc::EACCES,
            };
            assert_eq!(entry.code, expected);
        }
    }

    #[test]
    fn alias_names_share_their_canonical_code() {
        let code_of = |name: &str| {
            super::ERRNO
                .iter()
                .find(|e| e.name == name)
                .unwrap_or_else(|| panic!("{name} missing from errno table"))
                .code
        };
        assert_eq!(code_of("EWOULDBLOCK"), code_of("EAGAIN"));
        assert_eq!(code_of("EDEADLOCK"), code_of("EDEADLK"));
        assert_eq!(code_of("ENOTSUP"), code_of("EOPNOTSUPP"));
    }

    #[test]
    fn econf_and_pam_tables_start_at_success() {
        assert_eq!(super::ECONF[0], Entry::new("ECONF_SUCCESS", 0));
        assert_eq!(super::PAM[0], Entry::new("PAM_SUCCESS", 0));
    }

    #[test]
    fn message_catalogs_cover_every_code() {
        for entry in super::ECONF {
            assert!(
                super::econf::MESSAGES.iter().any(|(c, _)| *c == entry.code),
                "no econf message for {}",
                entry.name
            );
        }
        for entry in super::PAM {
            assert!(
                super::pam::MESSAGES.iter().any(|(c, _)| *c == entry.code),
                "no pam message for {}",
                entry.name
            );
        }
    }
}
