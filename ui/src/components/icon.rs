//! Inline SVG icons (24×24 viewBox, stroke or fill depending on the icon).

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Arrow,
    Bolt,
    Caregiver,
    Chart,
    Check,
    CheckCircle,
    Checklist,
    Clock,
    GooglePlay,
    Apple,
    Heart,
    Mail,
    MapPin,
    Pill,
    Star,
    Sun,
    Target,
    Users,
}

enum Shape {
    Path(&'static str),
    Polyline(&'static str),
    Polygon(&'static str),
    Circle(f32, f32, f32),
}

impl Icon {
    /// Filled glyphs (store badges, stars); everything else is stroked.
    fn filled(&self) -> bool {
        matches!(self, Icon::GooglePlay | Icon::Apple | Icon::Star)
    }

    fn shapes(&self) -> &'static [Shape] {
        use Shape as S;
        match self {
            Icon::Arrow => &[S::Path("M5 12h14M12 5l7 7-7 7")],
            Icon::Bolt => &[S::Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
            Icon::Caregiver => &[
                S::Path("M12 2a4 4 0 0 1 4 4v2a4 4 0 0 1-8 0V6a4 4 0 0 1 4-4z"),
                S::Path("M16 14H8a4 4 0 0 0-4 4v2h16v-2a4 4 0 0 0-4-4z"),
                S::Circle(18.0, 8.0, 3.0),
                S::Path("M18 6v4M16 8h4"),
            ],
            Icon::Chart => &[
                S::Path("M21 21H4.6c-.6 0-.9 0-1.1-.1-.2-.1-.4-.3-.5-.5-.1-.2-.1-.5-.1-1.1V3"),
                S::Path("M7 14l4-4 4 4 6-6"),
            ],
            Icon::Check => &[S::Polyline("20 6 9 17 4 12")],
            Icon::CheckCircle => &[
                S::Path("M9 12l2 2 4-4"),
                S::Path("M21 12c0 4.97-4.03 9-9 9s-9-4.03-9-9 4.03-9 9-9c1.73 0 3.35.49 4.72 1.34"),
            ],
            Icon::Checklist => &[
                S::Path("M9 11l3 3L22 4"),
                S::Path("M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"),
            ],
            Icon::Clock => &[S::Circle(12.0, 12.0, 10.0), S::Polyline("12,6 12,12 16,14")],
            Icon::GooglePlay => &[S::Path(
                "M3,20.5V3.5C3,2.91 3.34,2.39 3.84,2.15L13.69,12L3.84,21.85C3.34,21.6 3,21.09 3,20.5M16.81,15.12L6.05,21.34L14.54,12.85L16.81,15.12M20.16,10.81C20.5,11.08 20.75,11.5 20.75,12C20.75,12.5 20.5,12.92 20.16,13.19L17.89,14.5L15.39,12L17.89,9.5L20.16,10.81M6.05,2.66L16.81,8.88L14.54,11.15L6.05,2.66Z",
            )],
            Icon::Apple => &[S::Path(
                "M18.71,19.5C17.88,20.74 17,21.95 15.66,21.97C14.32,22 13.89,21.18 12.37,21.18C10.84,21.18 10.37,21.95 9.1,22C7.79,22.05 6.8,20.68 5.96,19.47C4.25,17 2.94,12.45 4.7,9.39C5.57,7.87 7.13,6.91 8.82,6.88C10.1,6.86 11.32,7.75 12.11,7.75C12.89,7.75 14.37,6.68 15.92,6.84C16.57,6.87 18.39,7.1 19.56,8.82C19.47,8.88 17.39,10.1 17.41,12.63C17.44,15.65 20.06,16.66 20.09,16.67C20.06,16.74 19.67,18.11 18.71,19.5M13,3.5C13.73,2.67 14.94,2.04 15.94,2C16.07,3.17 15.6,4.35 14.9,5.19C14.21,6.04 13.07,6.7 11.95,6.61C11.8,5.46 12.36,4.26 13,3.5Z",
            )],
            Icon::Heart => &[S::Path(
                "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
            )],
            Icon::Mail => &[
                S::Path("M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"),
                S::Polyline("22,6 12,13 2,6"),
            ],
            Icon::MapPin => &[
                S::Path("M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"),
                S::Circle(12.0, 10.0, 3.0),
            ],
            Icon::Pill => &[
                S::Path("M10.5 20.5a7.07 7.07 0 0 1-10-10l10-10a7.07 7.07 0 0 1 10 10z"),
                S::Path("M8.5 8.5l7 7"),
            ],
            Icon::Star => &[S::Path(
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            )],
            Icon::Sun => &[
                S::Circle(12.0, 12.0, 5.0),
                S::Path("M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"),
            ],
            Icon::Target => &[
                S::Circle(12.0, 12.0, 10.0),
                S::Circle(12.0, 12.0, 6.0),
                S::Circle(12.0, 12.0, 2.0),
            ],
            Icon::Users => &[
                S::Path("M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"),
                S::Circle(9.0, 7.0, 4.0),
                S::Path("M23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"),
            ],
        }
    }
}

#[component]
pub fn IconSvg(icon: Icon, #[props(default = 2.0)] stroke_width: f32) -> Element {
    let (fill, stroke) = if icon.filled() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill,
            stroke,
            stroke_width: "{stroke_width}",
            "aria-hidden": "true",
            for shape in icon.shapes() {
                {match shape {
                    Shape::Path(d) => rsx! { path { d: *d } },
                    Shape::Polyline(points) => rsx! { polyline { points: *points } },
                    Shape::Polygon(points) => rsx! { polygon { points: *points } },
                    Shape::Circle(cx, cy, r) => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
                }}
            }
        }
    }
}
