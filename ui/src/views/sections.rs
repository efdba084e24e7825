//! Renderer for the content-tree sections.
//!
//! Delays follow the page's entrance rhythm: section headers reveal first,
//! then supporting blocks in 100ms steps (150ms for the about values column).

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::ScrollReveal;
use crate::content::{
    initial, stagger_delay_ms, Card, Section, SectionBody, SectionHeader, StatBlock, TeamMember,
    Testimonial, PLAY_STORE_URL, SUPPORT_EMAIL,
};
use crate::hooks::use_language;
use crate::i18n::translate;

const STAGGER_MS: u32 = 100;

#[component]
pub fn PageSection(section: Section) -> Element {
    // Subscribe to language changes; every lookup below reads the loader.
    let _lang = use_language()();
    let id = section.anchor.map(|a| a.id);

    let body = match &section.body {
        SectionBody::Problem {
            description,
            solution,
            target_title,
            targets,
        } => rsx! {
            ScrollReveal {
                div { class: "problem-header", SectionHeading { header: section.header.clone(), subtitle_class: "problem-subtitle" } }
            }
            div { class: "problem-content",
                ScrollReveal { delay: 100,
                    div { class: "problem-description", p { {translate(description)} } }
                }
                div { class: "problem-grid",
                    ScrollReveal { delay: 200,
                        div { class: "solution-card",
                            CardIcon { card: solution.clone(), class: "solution-icon", stroke_width: 1.5 }
                            h3 { {translate(solution.title)} }
                            p { {translate(solution.description)} }
                        }
                    }
                    ScrollReveal { delay: 300,
                        div { class: "target-card",
                            h3 { {translate(target_title)} }
                            ul { class: "target-list",
                                for item in targets.iter() {
                                    li { key: "{item}",
                                        IconSvg { icon: Icon::Check }
                                        {translate(item)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        SectionBody::Service {
            features,
            download_title,
            download_subtitle,
        } => rsx! {
            ScrollReveal {
                div { class: "service-header",
                    span { class: section.header.tone.class(), {translate(section.header.label)} }
                    div { class: "service-title-row",
                        span { class: "pillo-icon", IconSvg { icon: Icon::Pill } }
                        h2 { class: "section-title", {translate(section.header.title)} }
                    }
                    if let Some(subtitle) = section.header.subtitle {
                        p { class: "section-description", {translate(subtitle)} }
                    }
                }
            }
            div { class: "service-content",
                div { class: "service-features",
                    for (i, feature) in features.iter().enumerate() {
                        ScrollReveal { key: "{feature.title}", delay: stagger_delay_ms(i, STAGGER_MS),
                            div { class: "feature-card",
                                CardIcon { card: feature.clone(), class: "feature-icon", stroke_width: 1.5 }
                                h3 { {translate(feature.title)} }
                                p { {translate(feature.description)} }
                            }
                        }
                    }
                }
                DownloadPanel { title: *download_title, subtitle: *download_subtitle }
            }
        },
        SectionBody::Testimonials {
            rating,
            rating_label,
            stats,
            items,
            cta,
        } => rsx! {
            ScrollReveal {
                div { class: "testimonials-header", SectionHeading { header: section.header.clone() } }
            }
            ScrollReveal { delay: 100,
                div { class: "testimonials-stats",
                    div { class: "rating-badge",
                        Stars { class: "rating-stars" }
                        span { class: "rating-number", "{rating}" }
                        span { class: "rating-source", {translate(rating_label)} }
                    }
                    for stat in stats.iter() {
                        div { key: "{stat.label}", class: "stats-divider" }
                        CountBlock { stat: *stat }
                    }
                }
            }
            div { class: "testimonials-grid",
                for (i, item) in items.iter().enumerate() {
                    ScrollReveal { key: "{item.name}", delay: stagger_delay_ms(i, STAGGER_MS),
                        TestimonialCard { item: item.clone() }
                    }
                }
            }
            div { class: "testimonials-cta",
                a {
                    href: PLAY_STORE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "cta-link",
                    {translate(cta)}
                    IconSvg { icon: Icon::Arrow }
                }
            }
        },
        SectionBody::About {
            description,
            mission,
            values,
        } => rsx! {
            div { class: "about-grid",
                ScrollReveal {
                    div { class: "about-main",
                        span { class: section.header.tone.class(), {translate(section.header.label)} }
                        h2 { class: "section-title", {translate(section.header.title)} }
                        p { class: "about-description", {translate(description)} }
                        div { class: "mission-card",
                            CardIcon { card: mission.clone(), class: "mission-icon" }
                            div { class: "mission-content",
                                h4 { {translate(mission.title)} }
                                p { {translate(mission.description)} }
                            }
                        }
                    }
                }
                ScrollReveal { delay: 150,
                    div { class: "about-values",
                        for (i, value) in values.iter().enumerate() {
                            div { key: "{value.title}", class: "value-card",
                                span { class: "value-number", {ordinal(i)} }
                                h4 { {translate(value.title)} }
                                p { {translate(value.description)} }
                            }
                        }
                    }
                }
            }
        },
        SectionBody::Culture { values } => rsx! {
            ScrollReveal {
                div { class: "culture-header", SectionHeading { header: section.header.clone() } }
            }
            div { class: "culture-grid",
                for (i, value) in values.iter().enumerate() {
                    ScrollReveal { key: "{value.title}", delay: stagger_delay_ms(i, STAGGER_MS),
                        div { class: "culture-card",
                            CardIcon { card: value.clone(), class: culture_icon_class(value.icon) }
                            div { class: "culture-content",
                                h3 { {translate(value.title)} }
                                p { {translate(value.description)} }
                            }
                            span { class: "culture-number", {ordinal(i)} }
                        }
                    }
                }
            }
        },
        SectionBody::Team { members } => rsx! {
            ScrollReveal {
                div { class: "team-header", SectionHeading { header: section.header.clone() } }
            }
            div { class: "team-grid",
                for (i, member) in members.iter().enumerate() {
                    ScrollReveal { key: "{member.name}", delay: stagger_delay_ms(i, STAGGER_MS),
                        TeamCard { member: member.clone() }
                    }
                }
            }
        },
        SectionBody::Contact {
            address_title,
            address_lines,
            email_title,
        } => rsx! {
            div { class: "contact-wrapper",
                ScrollReveal {
                    div { class: "contact-header",
                        span { class: section.header.tone.class(), {translate(section.header.label)} }
                        h2 { class: "section-title", {translate(section.header.title)} }
                    }
                }
                ScrollReveal { delay: 100,
                    div { class: "contact-cards",
                        div { class: "contact-card",
                            div { class: "contact-icon", IconSvg { icon: Icon::MapPin } }
                            div { class: "contact-info",
                                h4 { {translate(address_title)} }
                                p {
                                    for (i, line) in address_lines.iter().enumerate() {
                                        if i > 0 {
                                            br {}
                                        }
                                        {translate(line)}
                                    }
                                }
                            }
                        }
                        div { class: "contact-card",
                            div { class: "contact-icon", IconSvg { icon: Icon::Mail } }
                            div { class: "contact-info",
                                h4 { {translate(email_title)} }
                                p { a { href: "mailto:{SUPPORT_EMAIL}", "{SUPPORT_EMAIL}" } }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { id, class: section.class,
            div { class: "container", {body} }
        }
    }
}

#[component]
fn SectionHeading(header: SectionHeader, #[props(default = "section-description")] subtitle_class: &'static str) -> Element {
    rsx! {
        span { class: header.tone.class(), {translate(header.label)} }
        h2 { class: "section-title", {translate(header.title)} }
        if let Some(subtitle) = header.subtitle {
            p { class: subtitle_class, {translate(subtitle)} }
        }
    }
}

#[component]
fn CardIcon(card: Card, class: &'static str, #[props(default = 2.0)] stroke_width: f32) -> Element {
    rsx! {
        if let Some(icon) = card.icon {
            div { class, IconSvg { icon, stroke_width } }
        }
    }
}

#[component]
fn DownloadPanel(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "download-section",
            div { class: "download-content",
                div { class: "download-text-wrapper",
                    h3 { class: "download-title", {translate(title)} }
                    p { class: "download-subtitle", {translate(subtitle)} }
                }
                div { class: "download-buttons",
                    a {
                        href: PLAY_STORE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "download-btn",
                        IconSvg { icon: Icon::GooglePlay }
                        div { class: "btn-text",
                            span { class: "btn-label", {translate("service-store-get-it-on")} }
                            span { class: "btn-store", "Google Play" }
                        }
                    }
                    div { class: "download-btn coming-soon",
                        IconSvg { icon: Icon::Apple }
                        div { class: "btn-text",
                            span { class: "btn-label", {translate("service-store-coming-soon")} }
                            span { class: "btn-store", "App Store" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Stars(class: &'static str) -> Element {
    rsx! {
        div { class,
            for i in 0..5 {
                span { key: "{i}", IconSvg { icon: Icon::Star } }
            }
        }
    }
}

#[component]
fn CountBlock(stat: StatBlock) -> Element {
    rsx! {
        div { class: "count-block",
            span { class: "count-number", "{stat.value}" }
            span { class: "count-label", {translate(stat.label)} }
        }
    }
}

#[component]
fn TestimonialCard(item: Testimonial) -> Element {
    let class = if item.featured {
        "testimonial-card featured"
    } else {
        "testimonial-card"
    };
    let quote = format!("\u{201c}{}\u{201d}", translate(item.text));

    rsx! {
        div { class,
            div { class: "testimonial-header",
                div { class: "testimonial-avatar", "{item.avatar}" }
                div { class: "testimonial-info",
                    h4 { {translate(item.name)} }
                    span { {translate(item.role)} }
                }
                Stars { class: "testimonial-rating" }
            }
            p { class: "testimonial-text", "{quote}" }
            div { class: "testimonial-source",
                IconSvg { icon: Icon::GooglePlay }
                span { "Google Play" }
            }
        }
    }
}

#[component]
fn TeamCard(member: TeamMember) -> Element {
    let name = translate(member.name);
    let avatar = initial(&name);

    rsx! {
        div { class: "team-card",
            div { class: "team-avatar", "{avatar}" }
            div { class: "team-info",
                h3 { "{name}" }
                span { class: "team-role", {translate(member.role)} }
                p { class: "team-description", {translate(member.description)} }
            }
        }
    }
}

/// `01`, `02`, ... for numbered cards.
fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

fn culture_icon_class(icon: Option<Icon>) -> &'static str {
    match icon {
        Some(Icon::Heart) => "culture-icon love",
        Some(Icon::Sun) => "culture-icon energy",
        Some(Icon::Bolt) => "culture-icon proactive",
        Some(Icon::Target) => "culture-icon focus",
        Some(Icon::Users) => "culture-icon team",
        _ => "culture-icon",
    }
}
