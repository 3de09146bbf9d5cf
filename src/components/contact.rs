use dioxus::prelude::*;

use crate::site;

/// The quote-request page.
///
/// The form is a UI-only stub declared against the static-form provider's
/// submission convention (form name, POST method, provider data attributes,
/// hidden identifier and honeypot fields). Submission handling, validation,
/// and confirmation all belong to the provider at deployment time.
#[component]
pub(super) fn Contact() -> Element {
    rsx! {
        div { id: "page-contact", class: "bg-black",
            section { class: "py-20 bg-gradient-to-b from-black to-zinc-900",
                div { class: "max-w-6xl mx-auto px-6",
                    div { class: "grid lg:grid-cols-2 gap-10 items-start",
                        div {
                            h1 { class: "text-4xl md:text-5xl font-bold",
                                span { class: "text-white", "Get in " }
                                span { class: "text-[#E7C87A]", "Touch" }
                            }
                            p { class: "mt-6 text-gray-200 leading-relaxed",
                                "Tell us about your event and we’ll respond with next steps. For faster booking, include the date, location, and approximate audience size."
                            }

                            div { class: "mt-10 space-y-4",
                                div { class: "flex items-center gap-3 text-gray-200",
                                    div {
                                        div { class: "text-xs text-gray-400", "Email" }
                                        div { class: "text-white font-medium", {site::EMAIL} }
                                    }
                                }
                                div { class: "flex items-center gap-3 text-gray-200",
                                    div {
                                        div { class: "text-xs text-gray-400", "Phone" }
                                        div { class: "text-white font-medium", {site::PHONE} }
                                    }
                                }
                                div { class: "flex items-center gap-3 text-gray-200",
                                    div {
                                        div { class: "text-xs text-gray-400", "Service Area" }
                                        div { class: "text-white font-medium", {site::SERVICE_AREA} }
                                    }
                                }
                            }

                            div { class: "mt-10 text-sm text-gray-400 leading-relaxed",
                                span { class: "text-white font-medium", "Tip: " }
                                "Include "
                                span { class: "text-[#E7C87A] font-medium", "date" }
                                ", "
                                span { class: "text-[#E7C87A] font-medium", "venue" }
                                ", and "
                                span { class: "text-[#E7C87A] font-medium", "event type" }
                                " for the fastest quote."
                            }
                        }

                        div { class: "bg-zinc-900 border border-zinc-800 rounded-3xl p-6 md:p-8",
                            div { class: "text-white font-semibold text-xl", "Request a Quote" }
                            p { class: "mt-2 text-sm text-gray-300",
                                "We’ll reply as soon as possible with availability and pricing."
                            }

                            form {
                                name: site::QUOTE_FORM_NAME,
                                method: "POST",
                                "data-netlify": "true",
                                "data-netlify-honeypot": site::HONEYPOT_FIELD,
                                class: "mt-8 grid gap-5",

                                // Fields the provider requires to match the form.
                                input {
                                    r#type: "hidden",
                                    name: "form-name",
                                    value: site::QUOTE_FORM_NAME,
                                }
                                p { class: "hidden",
                                    label {
                                        "Don’t fill this out if you’re human: "
                                        input { name: site::HONEYPOT_FIELD }
                                    }
                                }

                                div { class: "grid md:grid-cols-2 gap-4",
                                    input {
                                        r#type: "text",
                                        name: "name",
                                        placeholder: "Name",
                                        class: "bg-black border border-zinc-700 p-3 text-white rounded-xl focus:outline-none focus:ring-2 focus:ring-[#E7C87A]/40",
                                    }
                                    input {
                                        r#type: "email",
                                        name: "email",
                                        placeholder: "Email",
                                        class: "bg-black border border-zinc-700 p-3 text-white rounded-xl focus:outline-none focus:ring-2 focus:ring-[#E7C87A]/40",
                                    }
                                }
                                div { class: "grid md:grid-cols-2 gap-4",
                                    input {
                                        r#type: "text",
                                        name: "event-date",
                                        placeholder: "Event Date",
                                        class: "bg-black border border-zinc-700 p-3 text-white rounded-xl focus:outline-none focus:ring-2 focus:ring-[#E7C87A]/40",
                                    }
                                    input {
                                        r#type: "text",
                                        name: "event-type",
                                        placeholder: "Event Type (Live / Corporate / Church)",
                                        class: "bg-black border border-zinc-700 p-3 text-white rounded-xl focus:outline-none focus:ring-2 focus:ring-[#E7C87A]/40",
                                    }
                                }
                                input {
                                    r#type: "text",
                                    name: "venue",
                                    placeholder: "Venue / Location",
                                    class: "bg-black border border-zinc-700 p-3 text-white rounded-xl focus:outline-none focus:ring-2 focus:ring-[#E7C87A]/40",
                                }
                                textarea {
                                    name: "details",
                                    placeholder: "Tell us about your event (audience size, schedule, band/DJ, mics, playback, etc.)",
                                    rows: "5",
                                    class: "bg-black border border-zinc-700 p-3 text-white rounded-xl focus:outline-none focus:ring-2 focus:ring-[#E7C87A]/40",
                                }
                                button {
                                    r#type: "submit",
                                    class: "bg-[#E7C87A] text-black py-3 rounded-xl font-semibold hover:bg-[#d6b968]",
                                    "Submit Request"
                                }
                                div { class: "text-xs text-gray-400",
                                    "This form is currently UI-only. Connect it to email with a form provider when you deploy."
                                }
                            }
                        }
                    }
                }
            }

            section { class: "py-16 bg-black",
                div { class: "max-w-6xl mx-auto px-6",
                    div { class: "border border-zinc-800 rounded-3xl p-7 md:p-10",
                        div { class: "text-2xl font-semibold",
                            span { class: "text-white", "Prefer email or phone? " }
                            span { class: "text-[#E7C87A]", "We’re easy to reach." }
                        }
                        p { class: "mt-3 text-gray-300 leading-relaxed max-w-3xl",
                            "Send details to "
                            span { class: "text-white font-medium", {site::EMAIL} }
                            " or call "
                            span { class: "text-white font-medium", {site::PHONE} }
                            "."
                        }
                    }
                }
            }
        }
    }
}
