use dioxus::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::{SiteFooter, SiteHeader};
use crate::content::{self, StatBlock};
use crate::hooks::use_language;
use crate::i18n;
use crate::t;

use super::sections::PageSection;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole single-page site.
#[component]
pub fn Landing() -> Element {
    i18n::init();
    let lang = use_language()();
    let content = use_hook(content::landing);

    #[cfg(debug_assertions)]
    {
        tracing::trace!(lang = lang.code(), "landing render");
    }

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "App", lang: lang.code(),
            SiteHeader { content: content.clone() }
            Hero { badge: content.badge, stats: content.stat_blocks.clone() }
            for section in content.sections.iter().cloned() {
                PageSection { key: "{section.class}", section }
            }
            SiteFooter {}
        }
    }
}

#[component]
fn Hero(badge: &'static str, stats: Vec<StatBlock>) -> Element {
    let _lang = use_language()();
    let last = stats.len().saturating_sub(1);

    rsx! {
        section { class: "hero",
            div { class: "hero-bg",
                div { class: "hero-gradient" }
                div { class: "hero-pattern" }
            }
            div { class: "container",
                div { class: "hero-content",
                    div { class: "hero-badge", {i18n::translate(badge)} }
                    h1 { class: "hero-title",
                        span { class: "hero-title-line", {t!("hero-title-1")} }
                        span { class: "hero-title-line gradient-text", {t!("hero-title-2")} }
                    }
                    p { class: "hero-subtitle", {t!("hero-subtitle")} }
                    div { class: "hero-actions",
                        a { href: "#service", class: "hero-cta primary",
                            {t!("hero-cta")}
                            IconSvg { icon: Icon::Arrow }
                        }
                    }
                    div { class: "hero-stats",
                        for (i, stat) in stats.iter().enumerate() {
                            div { key: "{stat.label}", class: "stat-item",
                                span { class: "stat-number", "{stat.value}" }
                                span { class: "stat-label", {i18n::translate(stat.label)} }
                            }
                            if i < last {
                                div { class: "stat-divider" }
                            }
                        }
                    }
                }
            }
        }
    }
}
