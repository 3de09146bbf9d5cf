//! End-to-end navigation scenarios, driven headlessly over the in-memory
//! location provider and asserted against the rendered HTML.

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use sounddrift_site::components::{Shell, ShellProps};
use sounddrift_site::location::{Location, MemoryLocation};

/// Mount the shell with the given starting fragment (`None` = fresh load).
fn shell_at(fragment: Option<&str>) -> (Location, VirtualDom) {
    let provider = match fragment {
        Some(fragment) => MemoryLocation::with_fragment(fragment),
        None => MemoryLocation::new(),
    };
    let location = Location::new(provider);
    let mut dom = VirtualDom::new_with_props(
        Shell,
        ShellProps {
            location: location.clone(),
        },
    );
    dom.rebuild_in_place();
    (location, dom)
}

fn navigate(dom: &mut VirtualDom, location: &Location, target: &str) {
    dom.in_runtime(|| location.navigate(target));
    dom.render_immediate(&mut NoOpMutations);
}

fn set_fragment(dom: &mut VirtualDom, location: &Location, fragment: &str) {
    dom.in_runtime(|| location.set_fragment(fragment));
    dom.render_immediate(&mut NoOpMutations);
}

/// The opening tag of the element carrying `id`.
fn element_with_id<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("id=\"{id}\"");
    let pos = html
        .find(&marker)
        .unwrap_or_else(|| panic!("no element with id `{id}` in:\n{html}"));
    let start = html[..pos].rfind('<').expect("id inside an opening tag");
    let end = pos + html[pos..].find('>').expect("unterminated opening tag");
    &html[start..=end]
}

fn is_active(html: &str, nav_id: &str) -> bool {
    element_with_id(html, nav_id).contains("aria-current=\"page\"")
}

#[test]
fn fresh_load_defaults_to_home() {
    let (location, dom) = shell_at(None);
    let html = dioxus_ssr::render(&dom);

    // The address bar shows an explicit route after load.
    assert_eq!(location.fragment().as_deref(), Some("#/"));
    assert!(html.contains("id=\"page-home\""));
    assert!(is_active(&html, "nav-home"));
}

#[test]
fn services_link_shows_the_services_block() {
    let (location, mut dom) = shell_at(None);

    navigate(&mut dom, &location, "/services");
    let html = dioxus_ssr::render(&dom);

    assert_eq!(location.fragment().as_deref(), Some("#/services"));
    assert!(html.contains("id=\"page-services\""));
    assert!(is_active(&html, "nav-services"));
    assert!(!is_active(&html, "nav-home"));
    assert!(!is_active(&html, "nav-contact"));
}

#[test]
fn each_route_renders_its_block_with_one_active_link() {
    let cases = [
        ("#/", "page-home", "nav-home"),
        ("#/services", "page-services", "nav-services"),
        ("#/contact", "page-contact", "nav-contact"),
    ];

    for (fragment, page, active) in cases {
        let (_, dom) = shell_at(Some(fragment));
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(&format!("id=\"{page}\"")), "at {fragment}");
        assert!(is_active(&html, active), "at {fragment}");
        assert_eq!(
            html.matches("aria-current=\"page\"").count(),
            1,
            "exactly one active link at {fragment}"
        );
    }
}

#[test]
fn unknown_fragment_falls_back_to_not_found() {
    let (location, mut dom) = shell_at(None);

    set_fragment(&mut dom, &location, "#/unknown");
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("id=\"page-not-found\""));
    assert!(html.contains("Page not found"));
    assert!(html.contains("Go Home"));
    // No nav entry claims the unmatched route.
    assert_eq!(html.matches("aria-current=\"page\"").count(), 0);

    // The recovery action brings the home block back.
    navigate(&mut dom, &location, "/");
    let html = dioxus_ssr::render(&dom);
    assert_eq!(location.fragment().as_deref(), Some("#/"));
    assert!(html.contains("id=\"page-home\""));
}

#[test]
fn navigating_without_a_leading_slash_gets_one() {
    let (location, mut dom) = shell_at(None);

    navigate(&mut dom, &location, "contact");
    let html = dioxus_ssr::render(&dom);

    assert_eq!(location.fragment().as_deref(), Some("#/contact"));
    assert!(html.contains("id=\"page-contact\""));
}

#[test]
fn chrome_is_present_on_every_route() {
    for fragment in ["#/", "#/services", "#/contact", "#/unknown"] {
        let (_, dom) = shell_at(Some(fragment));
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("id=\"cta-quote\""), "top bar at {fragment}");
        assert!(html.contains("id=\"nav-home\""), "nav at {fragment}");
        assert!(
            html.contains("SoundDrift Audio. All rights reserved."),
            "footer at {fragment}"
        );
    }
}

#[test]
fn quote_form_declares_the_provider_contract() {
    let (_, dom) = shell_at(Some("#/contact"));
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("name=\"quote\""));
    assert!(html.contains("method=\"POST\""));
    assert!(html.contains("data-netlify=\"true\""));
    assert!(html.contains("data-netlify-honeypot=\"bot-field\""));
    // Hidden identifier token and honeypot field.
    assert!(html.contains("name=\"form-name\""));
    assert!(html.contains("value=\"quote\""));
    assert!(html.contains("name=\"bot-field\""));
    // No client-side submission handling is wired up.
    assert!(!html.contains("onsubmit"));
}
