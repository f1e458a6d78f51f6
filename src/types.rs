// SPDX-License-Identifier: GPL-2.0-or-later

//! Core type definitions for errlook

use serde::Serialize;

use crate::tables;

/// A single named error code belonging to one domain's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: &'static str,
    pub code: i32,
}

impl Entry {
    pub const fn new(name: &'static str, code: i32) -> Self {
        Self { name, code }
    }
}

/// Error namespaces this tool can query.
///
/// The domain is fixed for the lifetime of one invocation and selects both
/// the entry table and the description resolver used for every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Econf,
    Errno,
    Pam,
}

impl Domain {
    /// The command-line token naming this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Econf => "econf",
            Domain::Errno => "errno",
            Domain::Pam => "pam",
        }
    }

    /// All domains, in display order.
    pub fn all() -> &'static [Domain] {
        &[Domain::Econf, Domain::Errno, Domain::Pam]
    }

    /// This domain's entry table, in upstream declaration order.
    pub fn entries(self) -> &'static [Entry] {
        match self {
            Domain::Econf => tables::ECONF,
            Domain::Errno => tables::ERRNO,
            Domain::Pam => tables::PAM,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
