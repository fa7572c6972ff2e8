//! App Root Component
//!
//! Routing, the auth gate, and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Navbar, Sidebar, Toast};
use crate::pages::{Analysis, Chat, Login, Register};
use crate::state::auth::{provide_auth_state, AuthState};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global and auth state to all components
    provide_global_state();
    provide_auth_state();

    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />

                // Authenticated screens, redirected to login otherwise
                <ProtectedRoute
                    path="/"
                    redirect_path="/login"
                    condition=move || auth.is_authenticated()
                    view=|| view! { <Shell><Chat /></Shell> }
                />
                <ProtectedRoute
                    path="/analysis"
                    redirect_path="/login"
                    condition=move || auth.is_authenticated()
                    view=|| view! { <Shell><Analysis /></Shell> }
                />

                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Layout shell for authenticated screens: sidebar plus top bar
#[component]
fn Shell(children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class=move || state.theme.get().root_class()>
            <Sidebar />

            <div class="flex-1 overflow-auto">
                <Navbar />
                <main class="p-4">{children()}</main>
            </div>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Chat"
            </A>
        </div>
    }
}
