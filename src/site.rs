//! Static site content, defined once and shared across pages.

use crate::route::Route;

pub const BUSINESS_NAME: &str = "SoundDrift Audio";
pub const LOCALITY: &str = "Orlando • Central Florida";
pub const EMAIL: &str = "sounddriftaudio@gmail.com";
pub const PHONE: &str = "787-226-3697";
pub const SERVICE_AREA: &str = "Orlando & Central Florida";
pub const COPYRIGHT: &str = "© 2026 SoundDrift Audio. All rights reserved.";

/// Form-identifier token the static-form provider matches submissions on.
pub const QUOTE_FORM_NAME: &str = "quote";
/// Honeypot field name for bot mitigation; hidden from people, so a filled
/// value marks the submission as automated.
pub const HONEYPOT_FIELD: &str = "bot-field";

/// One top-bar menu entry.
pub struct NavLink {
    pub label: &'static str,
    pub slug: &'static str,
    pub route: Route,
}

/// The menu. The shell highlights the entry whose route equals the current
/// route, and no other.
pub static NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        slug: "home",
        route: Route::Home,
    },
    NavLink {
        label: "Services",
        slug: "services",
        route: Route::Services,
    },
    NavLink {
        label: "Contact",
        slug: "contact",
        route: Route::Contact,
    },
];

/// A service offering: summarized on the home page, detailed on the services
/// page.
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: [&'static str; 4],
    pub note: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        title: "Live Sound",
        summary: "Small to mid-size events with clean output, safe gain structure, and smooth changeovers.",
        bullets: [
            "PA setup and tuning",
            "Wireless/IEM coordination",
            "Band mixes and monitor support",
            "Fast, organized changeovers",
        ],
        note: "Ideal for small to mid-size events, private events, and community gatherings.",
    },
    Service {
        title: "Corporate AV",
        summary: "Clear speech, professional presentation support, and dependable show flow.",
        bullets: [
            "Speech clarity and gain staging",
            "Playback and cue management",
            "Panel / Q&A microphone support",
            "Professional show flow",
        ],
        note: "Perfect for meetings, conferences, trainings, and presentations.",
    },
    Service {
        title: "Church Audio",
        summary: "Worship services, special events, and system support built for consistency.",
        bullets: [
            "Worship mix support",
            "Volunteers and team support",
            "Special events and productions",
            "System troubleshooting",
        ],
        note: "Designed for consistency across services and special events.",
    },
];

pub static HOME_HIGHLIGHTS: [&str; 3] = [
    "Clean, consistent mixes",
    "Professional setup & teardown",
    "Clear communication from start to finish",
];

/// One card in the home page "why us" section.
pub struct WhyCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static WHY_CARDS: [WhyCard; 3] = [
    WhyCard {
        title: "Professional & Reliable",
        blurb: "Prepared, on time, and focused on consistent, high-quality results.",
    },
    WhyCard {
        title: "Clear Communication",
        blurb: "We coordinate with clients, venues, and teams to keep everything smooth.",
    },
    WhyCard {
        title: "Experience That Matters",
        blurb: "Live events, corporate settings, and churches — we understand each environment.",
    },
];
