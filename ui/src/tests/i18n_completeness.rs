use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content;

const FTL_FILENAME: &str = "pitcrew-ui.ftl";
const I18N_DIR: &str = "i18n";
const FALLBACK: &str = "en-US";

/// Message IDs defined in a Fluent file. Terms and comments are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!("...")` and `translate("...")` under `src/`.
///
/// Keys built at runtime come from the content tree and are checked separately.
fn referenced_keys(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        found.extend(literal_keys(&source));
    }

    found
}

/// Keys passed as string literals to `t!` or `translate` in `source`.
///
/// The call name must start at an identifier boundary so that e.g.
/// `assert!("...")` is not mistaken for `t!("...")`.
fn literal_keys(source: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for needle in ["t!(\"", "translate(\""] {
        for (pos, _) in source.match_indices(needle) {
            let preceded_by_ident = source[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if preceded_by_ident {
                continue;
            }
            let rest = &source[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    keys.push(key.to_string());
                }
            }
        }
    }
    keys
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn fallback_keys(i18n_root: &Path) -> BTreeSet<String> {
    let file = i18n_root.join(FALLBACK).join(FTL_FILENAME);
    let source = fs::read_to_string(&file).expect("fallback FTL file must be readable");
    let keys = parse_ftl_keys(&source);
    assert!(!keys.is_empty(), "no message keys parsed from {file:?}");
    keys
}

#[test]
fn source_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fallback_keys(&crate_root.join(I18N_DIR));

    let mut missing: Vec<_> = referenced_keys(&crate_root.join("src"))
        .into_iter()
        .filter(|k| !fallback.contains(k))
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "keys used in source but missing from {FALLBACK}:\n{}",
        missing.join("\n")
    );
}

#[test]
fn content_tree_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fallback_keys(&crate_root.join(I18N_DIR));

    let missing: Vec<_> = content::landing()
        .keys()
        .into_iter()
        .filter(|k| !fallback.contains(*k))
        .collect();
    assert!(
        missing.is_empty(),
        "content keys missing from {FALLBACK}:\n{}",
        missing.join("\n")
    );
}

#[test]
fn every_locale_matches_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);
    let fallback = fallback_keys(&i18n_root);

    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == "ko-KR"), "ko-KR bundle missing: {locales:?}");

    let mut report = String::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("locale {locale} has no {FTL_FILENAME}: {err}"));
        let keys = parse_ftl_keys(&source);

        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale} missing: {}\n", missing.join(", ")));
        }
        if !extra.is_empty() {
            report.push_str(&format!("  {locale} extra: {}\n", extra.join(", ")));
        }
    }
    assert!(report.is_empty(), "locale bundles out of sync:\n{report}");
}

#[test]
fn literal_keys_respect_identifier_boundaries() {
    let source = r#"
        assert!("fr".parse::<Language>().is_err());
        let a = t!("nav-service");
        let b = i18n::translate("hero-badge");
        let c = untranslate("not-a-key");
        let d = format!("x");
    "#;
    let mut keys = literal_keys(source);
    keys.sort();
    assert_eq!(keys, ["hero-badge", "nav-service"]);
}
