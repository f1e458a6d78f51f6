// SPDX-License-Identifier: GPL-2.0-or-later

//! The process-global locale, modeled as a scoped resource.
//!
//! `setlocale(3)` mutates a single process-wide slot, so every swap here is
//! paired with a restore: [`LocaleGuard`] saves the active locale on
//! activation and puts it back when dropped. Locale enumeration shells out
//! to `locale -a`, one name per line.

use std::ffi::{CStr, CString};
use std::process::Command;

use anyhow::{bail, Context, Result};

/// RAII guard over the process-global locale.
///
/// At most one guard should be live at a time; the underlying slot is a
/// single global, and nested swaps would restore in the wrong order.
#[derive(Debug)]
pub struct LocaleGuard {
    saved: CString,
}

impl LocaleGuard {
    /// Switch `LC_ALL` to `name`, restoring the previous locale on drop.
    ///
    /// Fails without touching the active locale when `name` is not an
    /// installed locale.
    pub fn activate(name: &str) -> Result<Self> {
        let requested = CString::new(name)
            .with_context(|| format!("locale name '{name}' contains a NUL byte"))?;
        let saved = query_current()?;
        // A NULL return means the swap was refused and the slot is unchanged.
        let rc = unsafe { libc::setlocale(libc::LC_ALL, requested.as_ptr()) };
        if rc.is_null() {
            bail!("locale '{name}' is not usable");
        }
        Ok(Self { saved })
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        // Restoring a name previously reported by setlocale is expected to
        // succeed; a drop impl has no channel to report otherwise.
        unsafe { libc::setlocale(libc::LC_ALL, self.saved.as_ptr()) };
    }
}

/// Name of the currently active locale.
pub fn current() -> Result<String> {
    Ok(query_current()?.to_string_lossy().into_owned())
}

/// Adopt the locale configured in the environment (`LC_*`, `LANG`).
///
/// Called once at startup so descriptions come out in the user's language.
pub fn init_from_environment() {
    unsafe { libc::setlocale(libc::LC_ALL, c"".as_ptr()) };
}

/// Enumerate the locales installed on this system, in the order the
/// environment reports them.
pub fn installed_locales() -> Result<Vec<String>> {
    let output = Command::new("locale")
        .arg("-a")
        .output()
        .context("running 'locale -a'")?;
    if !output.status.success() {
        bail!("'locale -a' exited with {}", output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect())
}

fn query_current() -> Result<CString> {
    // A NULL argument queries without changing the slot. The returned
    // pointer aliases libc-owned storage that the next setlocale call may
    // rewrite, so copy it out immediately.
    let ptr = unsafe { libc::setlocale(libc::LC_ALL, std::ptr::null()) };
    if ptr.is_null() {
        bail!("setlocale refused to report the current locale");
    }
    Ok(unsafe { CStr::from_ptr(ptr) }.to_owned())
}

/// Serializes tests that touch the process-global locale; the test harness
/// is threaded even though the tool itself is single-threaded.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
