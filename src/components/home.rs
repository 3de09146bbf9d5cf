use dioxus::prelude::*;

use crate::location::Location;
use crate::site;

#[component]
pub(super) fn Home(location: Location) -> Element {
    rsx! {
        div { id: "page-home",
            // Hero
            section { class: "relative overflow-hidden",
                div { class: "relative bg-gradient-to-b from-black via-black to-zinc-900",
                    div { class: "max-w-6xl mx-auto px-6",
                        div { class: "py-24 md:py-28 grid md:grid-cols-2 gap-12 items-center",
                            div {
                                div { class: "inline-flex items-center gap-2 px-3 py-1 rounded-full border border-[#E7C87A]/30 bg-[#E7C87A]/10 text-xs text-[#E7C87A]",
                                    "Quick quotes • Local service"
                                }

                                h1 { class: "mt-6 text-5xl md:text-6xl font-bold tracking-tight leading-[1.05]",
                                    span { class: "text-[#E7C87A]", "SoundDrift " }
                                    span { class: "text-white", "Audio" }
                                }

                                p { class: "mt-6 text-lg text-gray-200 leading-relaxed",
                                    span { class: "text-white font-medium", "Professional audio services " }
                                    "for live events, corporate productions, and churches — delivering "
                                    span { class: "text-[#E7C87A] font-medium", "clear, reliable sound " }
                                    "across the Orlando area."
                                }

                                div { class: "mt-10 flex flex-col sm:flex-row gap-3",
                                    button {
                                        class: "bg-[#E7C87A] text-black hover:bg-[#d6b968] rounded-xl px-8 py-3 font-semibold",
                                        onclick: {
                                            let location = location.clone();
                                            move |_| location.navigate("/contact")
                                        },
                                        "Request a Quote"
                                    }
                                    button {
                                        class: "border border-[#E7C87A] text-[#E7C87A] rounded-xl px-8 py-3",
                                        onclick: {
                                            let location = location.clone();
                                            move |_| location.navigate("/services")
                                        },
                                        "View Services"
                                    }
                                }

                                div { class: "mt-10 grid gap-3",
                                    for highlight in site::HOME_HIGHLIGHTS.iter() {
                                        div { key: "{highlight}", class: "flex items-start gap-3 text-gray-200",
                                            span { class: "text-white font-medium", {*highlight} }
                                        }
                                    }
                                }
                            }

                            // Fast-overview panel
                            div { class: "bg-black/40 border border-zinc-800 rounded-3xl p-6 md:p-8 shadow-sm",
                                div { class: "text-sm text-gray-300", "Fast overview" }
                                div { class: "mt-4 grid gap-4",
                                    for service in site::SERVICES.iter() {
                                        div { key: "{service.title}", class: "bg-black border border-zinc-800 rounded-2xl p-5",
                                            div { class: "text-white font-semibold", {service.title} }
                                            p { class: "mt-2 text-sm text-gray-300 leading-relaxed", {service.summary} }
                                        }
                                    }
                                }
                                div { class: "mt-6 text-sm text-gray-400",
                                    "Want a detailed breakdown? Go to "
                                    button {
                                        class: "text-[#E7C87A] hover:underline",
                                        onclick: {
                                            let location = location.clone();
                                            move |_| location.navigate("/services")
                                        },
                                        "Services"
                                    }
                                    "."
                                }
                            }
                        }
                    }
                }
            }

            // Why us
            section { class: "bg-zinc-900 py-20",
                div { class: "max-w-6xl mx-auto px-6",
                    div { class: "text-center max-w-2xl mx-auto",
                        h2 { class: "text-3xl font-semibold",
                            span { class: "text-white", "Why " }
                            span { class: "text-[#E7C87A]", "SoundDrift Audio" }
                        }
                        p { class: "mt-4 text-gray-300 leading-relaxed",
                            "A professional experience from planning to show day — with audio that translates in the room."
                        }
                    }

                    div { class: "mt-12 grid md:grid-cols-3 gap-8",
                        for card in site::WHY_CARDS.iter() {
                            div { key: "{card.title}", class: "bg-black border border-zinc-800 rounded-3xl p-7",
                                div { class: "text-white font-semibold text-xl", {card.title} }
                                p { class: "mt-3 text-gray-300 leading-relaxed", {card.blurb} }
                            }
                        }
                    }

                    div { class: "mt-12 text-center",
                        button {
                            class: "border border-[#E7C87A] text-[#E7C87A] rounded-xl px-8 py-3",
                            onclick: move |_| location.navigate("/contact"),
                            "Get a Quote"
                        }
                    }
                }
            }
        }
    }
}
