use dioxus::prelude::*;

use crate::location::{use_hash_route, Location};
use crate::route::Route;
use crate::site;

use super::contact::Contact;
use super::home::Home;
use super::not_found::NotFound;
use super::services::Services;

/// Always-rendered chrome around the selected page.
///
/// The shell owns the only routing state in the app: one route signal kept
/// current by [`use_hash_route`]. Pages receive the [`Location`] handle
/// through props when they need to navigate; nothing reads location state
/// ambiently.
#[component]
pub fn Shell(location: Location) -> Element {
    let route = use_hash_route(&location);
    let current = route();

    let page = match &current {
        Route::Home => rsx! {
            Home { location: location.clone() }
        },
        Route::Services => rsx! {
            Services { location: location.clone() }
        },
        Route::Contact => rsx! {
            Contact {}
        },
        Route::NotFound { .. } => rsx! {
            NotFound { location: location.clone() }
        },
    };

    rsx! {
        div { class: "min-h-screen bg-black text-white font-sans",
            TopBar { location: location.clone(), current }
            {page}
            Footer {}
        }
    }
}

#[component]
fn TopBar(location: Location, current: Route) -> Element {
    rsx! {
        header { class: "sticky top-0 z-50 bg-black/70 backdrop-blur border-b border-zinc-800",
            div { class: "max-w-6xl mx-auto px-6",
                div { class: "py-4 flex items-center justify-between",
                    button {
                        class: "flex items-center gap-3 text-left",
                        aria_label: "Go to home",
                        onclick: {
                            let location = location.clone();
                            move |_| location.navigate("/")
                        },
                        div {
                            div { class: "text-white font-semibold leading-none", {site::BUSINESS_NAME} }
                            div { class: "text-xs text-gray-400 mt-1", {site::LOCALITY} }
                        }
                    }

                    nav { class: "hidden md:flex items-center gap-2",
                        for link in site::NAV_LINKS.iter() {
                            button {
                                key: "{link.slug}",
                                id: "nav-{link.slug}",
                                class: if current == link.route {
                                    "px-4 py-2 rounded-xl text-sm transition border text-black bg-[#E7C87A] border-[#E7C87A]"
                                } else {
                                    "px-4 py-2 rounded-xl text-sm transition border text-gray-200 border-transparent hover:border-zinc-700 hover:bg-zinc-900"
                                },
                                aria_current: if current == link.route { "page" },
                                onclick: {
                                    let location = location.clone();
                                    let target = link.route.clone();
                                    move |_| location.navigate(target.path())
                                },
                                {link.label}
                            }
                        }
                    }

                    div { class: "hidden md:block",
                        button {
                            id: "cta-quote",
                            class: "bg-[#E7C87A] text-black hover:bg-[#d6b968] rounded-xl px-4 py-2 text-sm font-semibold",
                            onclick: {
                                let location = location.clone();
                                move |_| location.navigate("/contact")
                            },
                            "Request a Quote"
                        }
                    }
                }

                // Mobile nav
                div { class: "md:hidden pb-4 flex gap-2",
                    for link in site::NAV_LINKS.iter() {
                        button {
                            key: "{link.slug}",
                            id: "nav-{link.slug}-mobile",
                            class: if current == link.route {
                                "flex-1 px-3 py-2 rounded-xl text-sm border transition text-black bg-[#E7C87A] border-[#E7C87A]"
                            } else {
                                "flex-1 px-3 py-2 rounded-xl text-sm border transition text-gray-200 border-zinc-800 hover:border-zinc-700 hover:bg-zinc-900"
                            },
                            onclick: {
                                let location = location.clone();
                                let target = link.route.clone();
                                move |_| location.navigate(target.path())
                            },
                            {link.label}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "border-t border-zinc-800 bg-black",
            div { class: "max-w-6xl mx-auto px-6",
                div { class: "py-10 grid md:grid-cols-3 gap-8",
                    div {
                        div { class: "text-white font-semibold", {site::BUSINESS_NAME} }
                        p { class: "mt-3 text-sm text-gray-400 leading-relaxed",
                            "Professional audio for live events, corporate productions, and churches across Central Florida."
                        }
                    }
                    div {
                        div { class: "text-white font-semibold", "Contact" }
                        div { class: "mt-3 space-y-2 text-sm text-gray-300",
                            div { {site::EMAIL} }
                            div { {site::PHONE} }
                            div { "Orlando, FL" }
                        }
                    }
                    div {
                        div { class: "text-white font-semibold", "Availability" }
                        p { class: "mt-3 text-sm text-gray-400 leading-relaxed",
                            "Weekends and select weekdays. Fast response for time-sensitive bookings."
                        }
                    }
                }
                div { class: "py-6 text-center text-xs text-gray-500 border-t border-zinc-800",
                    {site::COPYRIGHT}
                }
            }
        }
    }
}
