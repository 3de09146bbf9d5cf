use dioxus::prelude::*;

use crate::location::Location;

/// Fallback block for unmatched routes. Not an error path, just a view with
/// one recovery action.
#[component]
pub(super) fn NotFound(location: Location) -> Element {
    rsx! {
        section { id: "page-not-found", class: "py-24 bg-black",
            div { class: "max-w-6xl mx-auto px-6",
                div { class: "border border-zinc-800 rounded-3xl p-8 bg-zinc-900",
                    div { class: "text-white text-2xl font-semibold", "Page not found" }
                    p { class: "mt-3 text-gray-300", "This route doesn’t exist. Head back home." }
                    div { class: "mt-6",
                        button {
                            id: "go-home",
                            class: "bg-[#E7C87A] text-black hover:bg-[#d6b968] rounded-xl px-6 py-3 font-semibold",
                            onclick: move |_| location.navigate("/"),
                            "Go Home"
                        }
                    }
                }
            }
        }
    }
}
