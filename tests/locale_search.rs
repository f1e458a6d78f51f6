// SPDX-License-Identifier: GPL-2.0-or-later

//! Search scenarios, including the locale save/restore discipline.

use std::sync::Mutex;

use errlook::locale::{self, LocaleGuard};
use errlook::search;
use errlook::types::Domain;

static LOCALE_LOCK: Mutex<()> = Mutex::new(());

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn permission_keywords_find_the_permission_errors() {
    let _lock = LOCALE_LOCK.lock().unwrap();
    let _c = LocaleGuard::activate("C").expect("the C locale always exists");

    // "Permission denied" (EACCES) and "Operation not permitted" (EPERM)
    // under the C locale.
    let denied: Vec<_> = search::search(Domain::Errno, &keywords(&["permission", "denied"]))
        .expect("search")
        .map(|m| m.entry.name)
        .collect();
    assert!(denied.contains(&"EACCES"), "EACCES missing from {denied:?}");

    let not_permitted: Vec<_> = search::search(Domain::Errno, &keywords(&["permitted"]))
        .expect("search")
        .map(|m| m.entry.name)
        .collect();
    assert!(
        not_permitted.contains(&"EPERM"),
        "EPERM missing from {not_permitted:?}"
    );
}

#[test]
fn search_requires_at_least_one_keyword() {
    assert!(search::search(Domain::Errno, &[]).is_err());
    assert!(search::search_all_locales(Domain::Errno, &[]).is_err());
}

#[test]
fn multi_keyword_search_is_an_intersection() {
    let single: Vec<_> = search::search(Domain::Econf, &keywords(&["file"]))
        .expect("search")
        .map(|m| m.entry.name)
        .collect();
    let narrowed: Vec<_> = search::search(Domain::Econf, &keywords(&["file", "symlink"]))
        .expect("search")
        .map(|m| m.entry.name)
        .collect();
    assert_eq!(narrowed, ["ECONF_ERROR_FILE_IS_SYM_LINK"]);
    for name in &narrowed {
        assert!(single.contains(name));
    }
}

#[test]
fn locale_is_restored_even_when_some_locales_fail() {
    let _lock = LOCALE_LOCK.lock().unwrap();
    let before = locale::current().expect("query locale");

    let locales = vec![
        "C".to_string(),
        "zz_ZZ.not-a-codeset".to_string(),
        "POSIX".to_string(),
    ];
    let found = search::search_across_locales(Domain::Pam, &keywords(&["denied"]), &locales)
        .expect("a broken locale must not abort the search");

    // One hit per working locale, tagged, in enumeration order.
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].locale.as_deref(), Some("C"));
    assert_eq!(found[1].locale.as_deref(), Some("POSIX"));
    for m in &found {
        assert_eq!(m.entry.name, "PAM_PERM_DENIED");
    }

    assert_eq!(locale::current().expect("query locale"), before);
}

#[test]
fn installed_locale_search_leaves_locale_untouched() {
    let _lock = LOCALE_LOCK.lock().unwrap();
    let before = locale::current().expect("query locale");

    // Skip quietly when the host has no `locale` binary to enumerate with.
    if locale::installed_locales().is_err() {
        return;
    }
    let found = search::search_all_locales(Domain::Econf, &keywords(&["memory"]))
        .expect("enumeration succeeded, so the search must too");
    assert!(found.iter().all(|m| m.locale.is_some()));
    assert_eq!(locale::current().expect("query locale"), before);
}
