//! Marketing site for SoundDrift Audio.
//!
//! Three static pages behind fragment (`#/…`) routing, so the site works on
//! any static host without server rewrite rules. The contact page carries a
//! UI-only quote form declared for a static-form provider; everything else
//! is presentational content around one small routing mechanism, see
//! [`location`] and [`route`].

pub mod components;
pub mod location;
pub mod route;
pub mod site;

use dioxus::prelude::*;

use components::Shell;
use location::Location;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application root: wires the target's location provider into the shell.
pub fn app() -> Element {
    let location = use_hook(Location::detect);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Shell { location }
    }
}
