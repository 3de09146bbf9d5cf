use dioxus::prelude::*;

use crate::location::Location;
use crate::site;

#[component]
pub(super) fn Services(location: Location) -> Element {
    rsx! {
        div { id: "page-services", class: "bg-black",
            section { class: "py-20 bg-gradient-to-b from-black to-zinc-900",
                div { class: "max-w-6xl mx-auto px-6",
                    div { class: "max-w-3xl",
                        h1 { class: "text-4xl md:text-5xl font-bold",
                            span { class: "text-white", "Services " }
                            span { class: "text-[#E7C87A]", "Built for Real-World Shows" }
                        }
                        p { class: "mt-5 text-gray-200 leading-relaxed",
                            "Whether it’s a live performance, corporate production, or worship service, we prioritize "
                            span { class: "text-white font-medium", "clarity" }
                            ", "
                            span { class: "text-white font-medium", "consistency" }
                            ", and "
                            span { class: "text-[#E7C87A] font-medium", "professional execution" }
                            "."
                        }
                        div { class: "mt-8 flex flex-col sm:flex-row gap-3",
                            button {
                                class: "bg-[#E7C87A] text-black hover:bg-[#d6b968] rounded-xl px-8 py-3 font-semibold",
                                onclick: {
                                    let location = location.clone();
                                    move |_| location.navigate("/contact")
                                },
                                "Request a Quote"
                            }
                            button {
                                class: "border border-zinc-700 text-gray-200 rounded-xl px-8 py-3",
                                onclick: {
                                    let location = location.clone();
                                    move |_| location.navigate("/")
                                },
                                "Back to Home"
                            }
                        }
                    }
                }
            }

            section { class: "py-20",
                div { class: "max-w-6xl mx-auto px-6",
                    div { class: "grid md:grid-cols-3 gap-8",
                        for service in site::SERVICES.iter() {
                            div { key: "{service.title}", class: "bg-zinc-900 border border-zinc-800 rounded-3xl p-7",
                                div { class: "text-white font-semibold text-xl", {service.title} }
                                ul { class: "mt-6 space-y-3 text-gray-200",
                                    for bullet in service.bullets.iter() {
                                        li { key: "{bullet}", class: "flex items-start gap-3",
                                            span { class: "text-white font-medium", {*bullet} }
                                        }
                                    }
                                }
                                p { class: "mt-6 text-sm text-gray-300 leading-relaxed", {service.note} }
                            }
                        }
                    }

                    div { class: "mt-14 bg-black border border-zinc-800 rounded-3xl p-7 md:p-10",
                        div { class: "text-2xl font-semibold",
                            span { class: "text-white", "Need something specific? " }
                            span { class: "text-[#E7C87A]", "Let’s plan it." }
                        }
                        p { class: "mt-4 text-gray-300 leading-relaxed max-w-3xl",
                            "Share your venue, headcount, and event type — we’ll recommend the best approach for clean coverage and dependable performance."
                        }
                        div { class: "mt-8",
                            button {
                                class: "bg-[#E7C87A] text-black hover:bg-[#d6b968] rounded-xl px-8 py-3 font-semibold",
                                onclick: move |_| location.navigate("/contact"),
                                "Contact SoundDrift"
                            }
                        }
                    }
                }
            }
        }
    }
}
