//! Shared UI crate for the Pitcrew landing page. All behavior, content and
//! views live here; platform crates only launch it.

pub mod content;
pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components {
    // Inline SVG icon set (components/icon.rs)
    pub mod icon;

    // Fixed header with scroll-driven states (components/header.rs)
    pub mod header;
    pub use header::SiteHeader;

    // Reveal-on-visible wrapper (components/scroll_reveal.rs)
    pub mod scroll_reveal;
    pub use scroll_reveal::ScrollReveal;

    pub mod footer;
    pub use footer::SiteFooter;
}
