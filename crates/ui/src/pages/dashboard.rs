//! # Dashboard Page
//!
//! Landing page after login: a shortcut card for every entity page.

use dioxus::prelude::*;
use hosteldesk_desk::{PageKind, descriptor};

use crate::state::{APP_STATE, Page};

/// Overview page with navigation cards
#[component]
pub fn DashboardPage() -> Element {
    let account = APP_STATE.read().account_name();

    rsx! {
        div {
            class: "p-6 max-w-6xl mx-auto",

            div {
                class: "mb-8",
                h1 { class: "text-2xl font-black text-slate-900", "Welcome back, {account}" }
                p { class: "text-sm text-slate-500 font-medium",
                    "Manage hostels, residents, billing, and day-to-day operations."
                }
            }

            div {
                class: "grid sm:grid-cols-2 lg:grid-cols-4 gap-4",

                for kind in PageKind::ALL {
                    {
                        let desc = descriptor(kind);
                        rsx! {
                            button {
                                key: "{desc.collection}",
                                class: "bg-white border border-slate-200 rounded-2xl p-6 text-left shadow-sm hover:shadow-md hover:border-indigo-300 transition-all",
                                onclick: move |_| {
                                    APP_STATE.write().ui.navigate(Page::Resource(kind));
                                },
                                span { class: "text-2xl", "{desc.icon}" }
                                p { class: "font-black text-slate-900 mt-2", "{desc.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
