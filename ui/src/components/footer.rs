use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::content::{BRAND, SERVICE_URL};
use crate::hooks::use_language;
use crate::i18n;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let _lang = use_language()();
    let copyright = i18n::copyright(OffsetDateTime::now_utc().year());

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-main",
                    div { class: "footer-brand",
                        span { class: "footer-logo", "{BRAND}" }
                        p { class: "footer-tagline", {t!("footer-tagline")} }
                    }
                    div { class: "footer-links-grid",
                        div { class: "footer-col",
                            h5 { {t!("footer-company-heading")} }
                            a { href: "#about", {t!("footer-about-us")} }
                            a { href: "#contact", {t!("footer-contact-us")} }
                        }
                        div { class: "footer-col",
                            h5 { {t!("footer-product-heading")} }
                            a {
                                href: SERVICE_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                {t!("footer-service")}
                            }
                            a { href: "#service", {t!("footer-service-intro")} }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { class: "footer-company", {t!("footer-company")} }
                    p { class: "footer-copyright", "{copyright}" }
                }
            }
        }
    }
}
