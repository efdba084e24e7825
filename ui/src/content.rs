//! The landing page as data.
//!
//! One [`LandingContent`] value describes the whole page: hero badge and
//! stat blocks, then an ordered list of sections. The renderer in
//! `views::landing` walks it; nothing else in the crate hard-codes page copy.
//! All user-visible strings are Fluent keys (see `i18n/en-US/pitcrew-ui.ftl`)
//! except brand names, numbers and URLs, which are the same in every language.

use crate::components::icon::Icon;

pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps/details?id=xyz.rtrvr.pillo";
pub const SERVICE_URL: &str = "https://pillo.care";
pub const SUPPORT_EMAIL: &str = "support@rtrvr.xyz";
pub const BRAND: &str = "pitcrew";

/// Color accent of a section label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    Default,
    Green,
    Purple,
}

impl LabelTone {
    pub fn class(&self) -> &'static str {
        match self {
            LabelTone::Default => "section-label",
            LabelTone::Green => "section-label green",
            LabelTone::Purple => "section-label purple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub tone: LabelTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub avatar: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Problem {
        description: &'static str,
        solution: Card,
        target_title: &'static str,
        targets: Vec<&'static str>,
    },
    Service {
        features: Vec<Card>,
        download_title: &'static str,
        download_subtitle: &'static str,
    },
    Testimonials {
        rating: &'static str,
        rating_label: &'static str,
        stats: Vec<StatBlock>,
        items: Vec<Testimonial>,
        cta: &'static str,
    },
    About {
        description: &'static str,
        mission: Card,
        values: Vec<Card>,
    },
    Culture {
        values: Vec<Card>,
    },
    Team {
        members: Vec<TeamMember>,
    },
    Contact {
        address_title: &'static str,
        address_lines: Vec<&'static str>,
        email_title: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Base CSS class, e.g. `"problem"`.
    pub class: &'static str,
    /// In-page anchor, also listed in the header navigation.
    pub anchor: Option<NavAnchor>,
    pub header: SectionHeader,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAnchor {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavAnchor {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingContent {
    pub badge: &'static str,
    pub stat_blocks: Vec<StatBlock>,
    pub sections: Vec<Section>,
}

impl LandingContent {
    /// Header navigation entries, in page order.
    pub fn nav_anchors(&self) -> Vec<NavAnchor> {
        self.sections.iter().filter_map(|s| s.anchor).collect()
    }

    /// Every Fluent key the page renders through the content tree.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.badge];
        keys.extend(self.stat_blocks.iter().map(|s| s.label));
        for section in &self.sections {
            if let Some(anchor) = section.anchor {
                keys.push(anchor.label);
            }
            keys.push(section.header.label);
            keys.push(section.header.title);
            keys.extend(section.header.subtitle);
            section.body.collect_keys(&mut keys);
        }
        keys
    }
}

impl Card {
    fn collect_keys(&self, keys: &mut Vec<&'static str>) {
        keys.push(self.title);
        keys.push(self.description);
    }
}

impl SectionBody {
    fn collect_keys(&self, keys: &mut Vec<&'static str>) {
        match self {
            SectionBody::Problem {
                description,
                solution,
                target_title,
                targets,
            } => {
                keys.push(*description);
                solution.collect_keys(keys);
                keys.push(*target_title);
                keys.extend(targets.iter().copied());
            }
            SectionBody::Service {
                features,
                download_title,
                download_subtitle,
            } => {
                features.iter().for_each(|c| c.collect_keys(keys));
                keys.push(*download_title);
                keys.push(*download_subtitle);
            }
            SectionBody::Testimonials {
                rating_label,
                stats,
                items,
                cta,
                ..
            } => {
                keys.push(*rating_label);
                keys.extend(stats.iter().map(|s| s.label));
                for item in items {
                    keys.extend([item.name, item.role, item.text]);
                }
                keys.push(*cta);
            }
            SectionBody::About {
                description,
                mission,
                values,
            } => {
                keys.push(*description);
                mission.collect_keys(keys);
                values.iter().for_each(|c| c.collect_keys(keys));
            }
            SectionBody::Culture { values } => {
                values.iter().for_each(|c| c.collect_keys(keys));
            }
            SectionBody::Team { members } => {
                for m in members {
                    keys.extend([m.name, m.role, m.description]);
                }
            }
            SectionBody::Contact {
                address_title,
                address_lines,
                email_title,
            } => {
                keys.push(*address_title);
                keys.extend(address_lines.iter().copied());
                keys.push(*email_title);
            }
        }
    }
}

fn card(icon: Icon, title: &'static str, description: &'static str) -> Card {
    Card {
        icon: Some(icon),
        title,
        description,
    }
}

fn plain_card(title: &'static str, description: &'static str) -> Card {
    Card {
        icon: None,
        title,
        description,
    }
}

/// The page as shipped.
pub fn landing() -> LandingContent {
    LandingContent {
        badge: "hero-badge",
        stat_blocks: vec![
            StatBlock { value: "100K+", label: "hero-stat-downloads" },
            StatBlock { value: "4.7", label: "hero-stat-rating" },
            StatBlock { value: "13K+", label: "hero-stat-reviews" },
        ],
        sections: vec![
            Section {
                class: "problem",
                anchor: None,
                header: SectionHeader {
                    label: "problem-label",
                    title: "problem-title",
                    subtitle: Some("problem-subtitle"),
                    tone: LabelTone::Default,
                },
                body: SectionBody::Problem {
                    description: "problem-description",
                    solution: card(Icon::CheckCircle, "problem-solution-title", "problem-solution-description"),
                    target_title: "problem-target-title",
                    targets: vec![
                        "problem-target-item-1",
                        "problem-target-item-2",
                        "problem-target-item-3",
                        "problem-target-item-4",
                    ],
                },
            },
            Section {
                class: "service",
                anchor: Some(NavAnchor { id: "service", label: "nav-service" }),
                header: SectionHeader {
                    label: "service-label",
                    title: "service-title",
                    subtitle: Some("service-description"),
                    tone: LabelTone::Default,
                },
                body: SectionBody::Service {
                    features: vec![
                        card(Icon::Clock, "service-feature-1-title", "service-feature-1-description"),
                        card(Icon::Checklist, "service-feature-2-title", "service-feature-2-description"),
                        card(Icon::Chart, "service-feature-3-title", "service-feature-3-description"),
                        card(Icon::Caregiver, "service-feature-4-title", "service-feature-4-description"),
                    ],
                    download_title: "service-download",
                    download_subtitle: "service-download-platforms",
                },
            },
            Section {
                class: "testimonials",
                anchor: None,
                header: SectionHeader {
                    label: "testimonials-label",
                    title: "testimonials-title",
                    subtitle: Some("testimonials-subtitle"),
                    tone: LabelTone::Default,
                },
                body: SectionBody::Testimonials {
                    rating: "4.7",
                    rating_label: "testimonials-rating",
                    stats: vec![
                        StatBlock { value: "13.4K+", label: "testimonials-reviews" },
                        StatBlock { value: "100K+", label: "testimonials-downloads" },
                    ],
                    items: vec![
                        Testimonial {
                            avatar: "S",
                            name: "testimonials-item-1-name",
                            role: "testimonials-item-1-role",
                            text: "testimonials-item-1-text",
                            featured: false,
                        },
                        Testimonial {
                            avatar: "M",
                            name: "testimonials-item-2-name",
                            role: "testimonials-item-2-role",
                            text: "testimonials-item-2-text",
                            featured: true,
                        },
                        Testimonial {
                            avatar: "E",
                            name: "testimonials-item-3-name",
                            role: "testimonials-item-3-role",
                            text: "testimonials-item-3-text",
                            featured: false,
                        },
                    ],
                    cta: "testimonials-cta",
                },
            },
            Section {
                class: "about",
                anchor: Some(NavAnchor { id: "about", label: "nav-about" }),
                header: SectionHeader {
                    label: "about-label",
                    title: "about-title",
                    subtitle: None,
                    tone: LabelTone::Green,
                },
                body: SectionBody::About {
                    description: "about-description",
                    mission: card(Icon::Target, "about-mission-title", "about-mission-description"),
                    values: vec![
                        plain_card("about-value-1-title", "about-value-1-description"),
                        plain_card("about-value-2-title", "about-value-2-description"),
                        plain_card("about-value-3-title", "about-value-3-description"),
                    ],
                },
            },
            Section {
                class: "culture",
                anchor: Some(NavAnchor { id: "culture", label: "nav-culture" }),
                header: SectionHeader {
                    label: "culture-label",
                    title: "culture-title",
                    subtitle: Some("culture-subtitle"),
                    tone: LabelTone::Purple,
                },
                body: SectionBody::Culture {
                    values: vec![
                        card(Icon::Heart, "culture-love-users-title", "culture-love-users-description"),
                        card(Icon::Sun, "culture-positive-energy-title", "culture-positive-energy-description"),
                        card(Icon::Bolt, "culture-proactive-title", "culture-proactive-description"),
                        card(Icon::Target, "culture-focus-title", "culture-focus-description"),
                        card(Icon::Users, "culture-team-first-title", "culture-team-first-description"),
                    ],
                },
            },
            Section {
                class: "team-section",
                anchor: Some(NavAnchor { id: "team", label: "nav-team" }),
                header: SectionHeader {
                    label: "team-label",
                    title: "team-title",
                    subtitle: Some("team-subtitle"),
                    tone: LabelTone::Default,
                },
                body: SectionBody::Team {
                    members: vec![
                        TeamMember { name: "team-member-1-name", role: "team-member-1-role", description: "team-member-1-description" },
                        TeamMember { name: "team-member-2-name", role: "team-member-2-role", description: "team-member-2-description" },
                        TeamMember { name: "team-member-3-name", role: "team-member-3-role", description: "team-member-3-description" },
                        TeamMember { name: "team-member-4-name", role: "team-member-4-role", description: "team-member-4-description" },
                        TeamMember { name: "team-member-5-name", role: "team-member-5-role", description: "team-member-5-description" },
                        TeamMember { name: "team-member-6-name", role: "team-member-6-role", description: "team-member-6-description" },
                    ],
                },
            },
            Section {
                class: "contact",
                anchor: Some(NavAnchor { id: "contact", label: "nav-contact" }),
                header: SectionHeader {
                    label: "contact-label",
                    title: "contact-title",
                    subtitle: None,
                    tone: LabelTone::Default,
                },
                body: SectionBody::Contact {
                    address_title: "contact-address-title",
                    address_lines: vec!["contact-address-line-1", "contact-address-line-2"],
                    email_title: "contact-email-title",
                },
            },
        ],
    }
}

/// Staggered entrance delay for the `index`-th item of a grid.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Avatar letter for a translated name.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_follows_section_order() {
        let ids: Vec<_> = landing().nav_anchors().iter().map(|a| a.id).collect();
        assert_eq!(ids, ["service", "about", "culture", "team", "contact"]);
        assert_eq!(landing().nav_anchors()[0].href(), "#service");
    }

    #[test]
    fn anchors_are_unique() {
        let anchors = landing().nav_anchors();
        let unique: HashSet<_> = anchors.iter().map(|a| a.id).collect();
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn keys_cover_every_section() {
        let content = landing();
        let keys = content.keys();
        for section in &content.sections {
            assert!(keys.contains(&section.header.title));
        }
        assert!(keys.contains(&"team-member-6-description"));
        assert!(keys.contains(&"contact-address-line-2"));
        assert!(keys.contains(&"hero-badge"));
    }

    #[test]
    fn exactly_one_featured_testimonial() {
        let content = landing();
        let featured = content
            .sections
            .iter()
            .filter_map(|s| match &s.body {
                SectionBody::Testimonials { items, .. } => Some(items.iter().filter(|t| t.featured).count()),
                _ => None,
            })
            .sum::<usize>();
        assert_eq!(featured, 1);
    }

    #[test]
    fn stagger_and_initials() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(4, 100), 400);
        assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
        assert_eq!(initial("jiwoo"), "J");
        assert_eq!(initial("김민지"), "김");
        assert_eq!(initial(""), "");
    }
}
