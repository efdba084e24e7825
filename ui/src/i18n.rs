//! Internationalization (i18n) support for `pitcrew-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/pitcrew-ui.ftl   (fallback/reference)
//!   ko-KR/pitcrew-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("nav-service");          // literal key, checked at compile time
//! let title = i18n::translate("team-member-1-name"); // key built at runtime
//! ```
//!
//! The site only ships two languages, modelled by [`Language`] (`"en"` /
//! `"ko"`). The chosen language is persisted under the `"language"` key
//! (see `core::storage`) and restored by `init()` on the next load.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use fluent::FluentValue;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::storage::{self, PreferenceStore, LANGUAGE_KEY};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-service")
///     t!("footer-copyright", year = 2025)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "pitcrew-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the site is translated into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ko];

    /// Short code persisted in storage and used for the `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    /// Fluent locale folder backing this language.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ko => "ko-KR",
        }
    }

    /// Label on the header switcher button.
    pub fn switcher_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ko => "KR",
        }
    }

    fn identifier(&self) -> LanguageIdentifier {
        self.locale()
            .parse()
            .expect("valid built-in language identifier")
    }

    fn from_identifier(id: &LanguageIdentifier) -> Option<Self> {
        match id.language.as_str() {
            "en" => Some(Language::En),
            "ko" => Some(Language::Ko),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts `en` / `ko` as well as full tags such as `ko-KR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static INIT: Once = Once::new();

fn new_loader() -> FluentLanguageLoader {
    FluentLanguageLoader::new(DOMAIN, Language::En.identifier())
}

/// Select `requested` on `loader` and switch off bidi isolation.
///
/// Isolation is a per-bundle setting, so it has to be applied after every
/// load; otherwise placeables such as the copyright year come back wrapped in
/// U+2068 / U+2069.
fn select_languages(
    loader: &FluentLanguageLoader,
    requested: &[LanguageIdentifier],
) -> Result<(), i18n_embed::I18nEmbedError> {
    let result = i18n_embed::select(loader, &Localizations, requested).map(|_| ());
    loader.set_use_isolating(false);
    result
}

/// Initialize the global loader (idempotent).
///
/// Restores the persisted language if there is one, otherwise follows the
/// browser / OS language list and falls back to English.
pub fn init() {
    INIT.call_once(|| {
        let store = storage::platform_store();
        let lang = init_with(&LOADER, store.as_deref());
        tracing::debug!(%lang, "i18n initialized");
    });
}

/// First-load selection for `loader`: the language stored in `store`, or the
/// requester's list when nothing usable is stored.
pub fn init_with(loader: &FluentLanguageLoader, store: Option<&dyn PreferenceStore>) -> Language {
    let requested = match store.and_then(restore_language) {
        Some(lang) => vec![lang.identifier()],
        None => requested_languages(),
    };
    if let Err(err) = select_languages(loader, &requested) {
        tracing::warn!(%err, "failed selecting languages; continuing with fallback");
    }
    language_of(loader)
}

/// Language currently active in the global loader.
pub fn current_language() -> Language {
    language_of(&LOADER)
}

/// Language currently active in `loader`.
pub fn language_of(loader: &FluentLanguageLoader) -> Language {
    Language::from_identifier(&loader.current_language()).unwrap_or_default()
}

/// Switch language at runtime and remember the choice for the next load.
///
/// Persistence failures are logged; the switch itself still takes effect.
pub fn set_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    let store = storage::platform_store();
    set_language_in(&LOADER, store.as_deref(), lang)
}

/// Select `lang` on `loader` and persist it to `store`.
pub fn set_language_in(
    loader: &FluentLanguageLoader,
    store: Option<&dyn PreferenceStore>,
    lang: Language,
) -> Result<(), i18n_embed::I18nEmbedError> {
    select_into(loader, lang)?;
    match store {
        Some(store) => persist_language(store, lang),
        None => tracing::warn!("no preference storage; language choice will not persist"),
    }
    Ok(())
}

/// Select `lang` on an arbitrary loader.
pub fn select_into(
    loader: &FluentLanguageLoader,
    lang: Language,
) -> Result<(), i18n_embed::I18nEmbedError> {
    select_languages(loader, &[lang.identifier()])
}

/// A standalone loader with `lang` selected (does not touch the global one).
pub fn loader_for(lang: Language) -> Result<FluentLanguageLoader, i18n_embed::I18nEmbedError> {
    let loader = new_loader();
    select_into(&loader, lang)?;
    Ok(loader)
}

pub fn persist_language(store: &dyn PreferenceStore, lang: Language) {
    if let Err(err) = store.save(LANGUAGE_KEY, lang.code()) {
        tracing::warn!(%err, lang = lang.code(), "failed to persist language preference");
    }
}

/// Persisted language, if any. Unreadable or unknown values are ignored.
pub fn restore_language(store: &dyn PreferenceStore) -> Option<Language> {
    match store.load(LANGUAGE_KEY) {
        Ok(Some(code)) => match code.parse() {
            Ok(lang) => Some(lang),
            Err(err) => {
                tracing::warn!(%err, "ignoring stored language preference");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%err, "failed to read language preference");
            None
        }
    }
}

/// Look up a key computed at runtime (content tree, team members).
pub fn translate(key: &str) -> String {
    LOADER.get(key)
}

/// Look up a key with Fluent arguments.
pub fn translate_args(key: &str, args: &[(&str, FluentValue<'static>)]) -> String {
    lookup_args(&LOADER, key, args)
}

fn lookup_args(loader: &FluentLanguageLoader, key: &str, args: &[(&str, FluentValue<'static>)]) -> String {
    let args: HashMap<&str, FluentValue<'static>> = args.iter().cloned().collect();
    loader.get_args(key, args)
}

/// Localized copyright line for `year`.
pub fn copyright(year: i32) -> String {
    translate_args("footer-copyright", &[("year", FluentValue::from(year))])
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        for lang in Language::ALL {
            assert!(langs.iter().any(|l| l == lang.locale()), "missing {}", lang.locale());
        }
    }

    #[test]
    fn language_codes_parse() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("ko".parse::<Language>(), Ok(Language::Ko));
        assert_eq!("ko-KR".parse::<Language>(), Ok(Language::Ko));
        assert_eq!("EN_us".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn isolated_loader_lookup_works() {
        let en = loader_for(Language::En).unwrap();
        assert_eq!(en.get("nav-service"), "Service");
        let ko = loader_for(Language::Ko).unwrap();
        assert_eq!(ko.get("nav-service"), "서비스");
    }

    #[test]
    fn switching_language_persists_and_restores() {
        let memory = MemoryStore::new();
        memory.save(LANGUAGE_KEY, "en").unwrap();
        let store: &dyn PreferenceStore = &memory;

        let loader = new_loader();
        assert_eq!(init_with(&loader, Some(store)), Language::En);
        assert_eq!(loader.get("nav-contact"), "Contact");

        set_language_in(&loader, Some(store), Language::Ko).unwrap();
        assert_eq!(language_of(&loader), Language::Ko);
        assert_eq!(loader.get("nav-contact"), "문의하기");
        assert_eq!(loader.get("hero-cta"), "서비스 알아보기");
        assert_eq!(store.load(LANGUAGE_KEY).unwrap().as_deref(), Some("ko"));

        // A fresh load reads the stored preference without user action.
        let fresh = new_loader();
        let reopened = memory.clone();
        assert_eq!(init_with(&fresh, Some(&reopened)), Language::Ko);
        assert_eq!(fresh.get("nav-contact"), "문의하기");
    }

    #[test]
    fn switch_without_storage_still_applies() {
        let loader = loader_for(Language::En).unwrap();
        set_language_in(&loader, None, Language::Ko).unwrap();
        assert_eq!(language_of(&loader), Language::Ko);
    }

    #[test]
    fn garbage_preference_is_ignored() {
        let store = MemoryStore::new();
        store.save(LANGUAGE_KEY, "klingon").unwrap();
        assert_eq!(restore_language(&store), None);
    }

    #[test]
    fn copyright_interpolates_year_without_isolation_marks() {
        for lang in Language::ALL {
            let loader = loader_for(lang).unwrap();
            let text = lookup_args(&loader, "footer-copyright", &[("year", FluentValue::from(2026))]);
            assert!(text.contains("2026"), "{text}");
            assert!(!text.contains('\u{2068}') && !text.contains('\u{2069}'), "{text:?}");
        }
    }

    #[test]
    fn isolation_stays_off_after_switching() {
        let loader = loader_for(Language::Ko).unwrap();
        select_into(&loader, Language::En).unwrap();
        let text = lookup_args(&loader, "footer-copyright", &[("year", FluentValue::from(1999))]);
        assert_eq!(text, "© 1999 pitcrew. All rights reserved.");
    }
}
