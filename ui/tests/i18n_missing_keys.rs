use std::collections::{BTreeSet, HashSet};

/// Both shipped bundles define the same message set with no duplicates.
///
/// To add a locale: create `ui/i18n/<locale>/pitcrew-ui.ftl` with every key
/// from `en-US`, then register it in `LOCALES` below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/pitcrew-ui.ftl");
    const KO_KR: &str = include_str!("../i18n/ko-KR/pitcrew-ui.ftl");
    const LOCALES: &[(&str, &str)] = &[("ko-KR", KO_KR)];

    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "en-US contains no keys");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn copyright_keeps_year_placeable() {
    for (locale, src) in [
        ("en-US", include_str!("../i18n/en-US/pitcrew-ui.ftl")),
        ("ko-KR", include_str!("../i18n/ko-KR/pitcrew-ui.ftl")),
    ] {
        let line = src
            .lines()
            .find(|l| l.trim_start().starts_with("footer-copyright"))
            .unwrap_or_else(|| panic!("{locale} has no footer-copyright"));
        assert!(line.contains("{ $year }"), "{locale}: {line}");
    }
}

/// Message keys from a Fluent file. Attribute and comment lines are skipped.
fn extract_keys(src: &str) -> HashSet<String> {
    definitions(src).map(str::to_string).collect()
}

fn definitions(src: &str) -> impl Iterator<Item = &str> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('=').map(|(left, _)| left.trim()))
        .filter(|key| {
            !key.is_empty()
                && !key.contains(char::is_whitespace)
                && !key.starts_with('[')
                && !key.starts_with('@')
        })
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = definitions(src).filter(|key| !seen.insert(*key)).collect();
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}
