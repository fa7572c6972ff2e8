//! Sidebar Navigation
//!
//! Route links for the two screens. No business logic.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Sidebar component with route links
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <aside class=move || format!("w-64 min-h-screen border-r p-4 {}", state.theme.get().surface_class())>
            <div class="space-y-2">
                <SidebarLink href="/" icon="💬" label="Chat" />
                <SidebarLink href="/analysis" icon="📊" label="Data Analysis" />
            </div>
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex items-center space-x-3 px-4 py-3 rounded-lg text-gray-400
                   hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white font-medium"
        >
            <span class="text-xl">{icon}</span>
            <span>{label}</span>
        </A>
    }
}
