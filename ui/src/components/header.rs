use dioxus::prelude::*;

use crate::content::{LandingContent, BRAND};
use crate::core::scroll::header_class;
use crate::hooks::{switch_language, use_language, use_scroll_flags};
use crate::i18n::{self, Language};

/// Fixed site header: brand, section anchors and the KR | EN switcher.
///
/// Gets `scrolled` once the page leaves the top and `hidden` while the user
/// scrolls down past the hide distance.
#[component]
pub fn SiteHeader(content: LandingContent) -> Element {
    let flags = use_scroll_flags();
    let lang = use_language();
    // Reading the signal subscribes this component to language changes.
    let active = lang();

    let class = header_class(flags());
    let anchors = content.nav_anchors();

    rsx! {
        header { class,
            div { class: "container",
                nav { class: "nav",
                    a { href: "/", class: "logo",
                        span { class: "logo-text", "{BRAND}" }
                    }
                    div { class: "nav-right",
                        div { class: "nav-links",
                            for anchor in anchors {
                                a { key: "{anchor.id}", href: anchor.href(), {i18n::translate(anchor.label)} }
                            }
                        }
                        div { class: "lang-switcher",
                            LanguageButton { lang: Language::Ko, active }
                            span { class: "lang-divider", "|" }
                            LanguageButton { lang: Language::En, active }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageButton(lang: Language, active: Language) -> Element {
    let lang_signal = use_language();
    let class = if lang == active { "lang-btn active" } else { "lang-btn" };

    rsx! {
        button {
            class,
            r#type: "button",
            lang: lang.code(),
            onclick: move |_| switch_language(lang_signal, lang),
            "{lang.switcher_label()}"
        }
    }
}
