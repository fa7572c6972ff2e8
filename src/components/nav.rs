//! Top Navigation Bar
//!
//! Brand, theme toggle, and logout. Pure presentation plus the two
//! shell-level actions.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::auth::AuthState;
use crate::state::global::{GlobalState, Theme};

/// Top navigation bar component
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let theme_state = state.clone();
    let toggle_theme = move |_| theme_state.toggle_theme();

    let navigate = use_navigate();
    let log_out = move |_| {
        auth.log_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav class=move || format!("border-b px-4 py-2 sticky top-0 z-10 {}", state.theme.get().surface_class())>
            <div class="flex items-center justify-between">
                <span class="text-lg font-bold">"AI Agent"</span>

                <div class="flex items-center space-x-2">
                    // Theme toggle
                    <button
                        on:click=toggle_theme
                        class="px-3 py-2 rounded-lg hover:bg-gray-700/20 transition-colors"
                        title="Toggle color mode"
                    >
                        {move || match state.theme.get() {
                            Theme::Dark => "☀️",
                            Theme::Light => "🌙",
                        }}
                    </button>

                    // Logout
                    <button
                        on:click=log_out
                        class="px-3 py-2 rounded-lg hover:bg-gray-700/20 transition-colors text-sm font-medium"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </nav>
    }
}
