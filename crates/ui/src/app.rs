//! Main Application Component for Hostel Desk
//!
//! This module contains the root Dioxus component that renders the entire
//! application: the login gate, the sidebar navigation, the active page,
//! and the status bar.

use dioxus::prelude::*;
use hosteldesk_desk::{PageKind, descriptor};

use crate::pages::{DashboardPage, LoginPage, ResourcePage};
use crate::state::{APP_STATE, Page, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Hostel Desk UI initialized");
    });

    let has_session = APP_STATE.read().has_session();

    if !has_session {
        return rsx! { LoginPage {} };
    }

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-100 text-slate-900 overflow-hidden",

            Toolbar {}

            div {
                class: "flex flex-1 overflow-hidden",

                Sidebar {}
                MainContent {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top toolbar with app identity and the signed-in account
#[component]
fn Toolbar() -> Element {
    let account = APP_STATE.read().account_name();

    rsx! {
        header {
            class: "toolbar h-12 bg-white border-b border-slate-200 flex items-center px-4 gap-2 shrink-0",

            div {
                class: "flex items-center gap-2 mr-auto",
                span { class: "text-xl", "🏢" }
                span { class: "font-black text-sm", "Hostel Desk" }
            }

            span { class: "text-xs text-slate-400 font-bold", "{account}" }

            button {
                class: "px-3 py-1.5 text-xs font-bold text-slate-500 hover:text-rose-600 border border-slate-200 rounded-lg",
                onclick: move |_| {
                    APP_STATE.write().sign_out();
                },
                "Sign Out"
            }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left navigation across the dashboard and every entity page
#[component]
fn Sidebar() -> Element {
    let active = APP_STATE.read().ui.active_page;

    rsx! {
        nav {
            class: "w-52 bg-white border-r border-slate-200 overflow-y-auto shrink-0 py-3",

            SidebarEntry {
                label: "Dashboard".to_string(),
                icon: "🏠".to_string(),
                active: active == Page::Dashboard,
                page: Page::Dashboard,
            }

            for kind in PageKind::ALL {
                {
                    let desc = descriptor(kind);
                    rsx! {
                        SidebarEntry {
                            key: "{desc.collection}",
                            label: desc.title.to_string(),
                            icon: desc.icon.to_string(),
                            active: active == Page::Resource(kind),
                            page: Page::Resource(kind),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SidebarEntryProps {
    label: String,
    icon: String,
    active: bool,
    page: Page,
}

#[component]
fn SidebarEntry(props: SidebarEntryProps) -> Element {
    let class = if props.active {
        "w-full flex items-center gap-3 px-4 py-2.5 text-sm font-bold bg-indigo-50 text-indigo-700 border-r-2 border-indigo-600"
    } else {
        "w-full flex items-center gap-3 px-4 py-2.5 text-sm font-medium text-slate-500 hover:bg-slate-50 hover:text-slate-900"
    };
    let page = props.page;

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                APP_STATE.write().ui.navigate(page);
            },
            span { "{props.icon}" }
            span { "{props.label}" }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// The active page
#[component]
fn MainContent() -> Element {
    let page = APP_STATE.read().ui.active_page;

    rsx! {
        main {
            class: "flex-1 overflow-y-auto",

            {match page {
                Page::Dashboard => rsx! { DashboardPage {} },
                // key forces a remount per entity so page-local state
                // (rows, filters, open dialogs) never leaks across pages
                Page::Resource(kind) => {
                    let page_key = descriptor(kind).collection;
                    rsx! {
                        ResourcePage { key: "{page_key}", kind }
                    }
                }
            }}
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar showing the latest outcome message
#[component]
fn StatusBar() -> Element {
    let message = APP_STATE.read().ui.status_message.clone();

    rsx! {
        footer {
            class: "h-8 bg-white border-t border-slate-200 flex items-center px-4 text-xs shrink-0",

            if let Some(status) = message {
                {
                    let color = match status.level {
                        StatusLevel::Success => "text-emerald-600",
                        StatusLevel::Error => "text-rose-600",
                        StatusLevel::Warning => "text-amber-600",
                        StatusLevel::Info => "text-slate-500",
                    };
                    rsx! {
                        span { class: "font-bold {color}", "{status.text}" }
                        button {
                            class: "ml-auto text-slate-300 hover:text-slate-600",
                            onclick: move |_| {
                                APP_STATE.write().ui.clear_status();
                            },
                            "✕"
                        }
                    }
                }
            } else {
                span { class: "text-slate-300", "Ready" }
            }
        }
    }
}
