//! Loading Component
//!
//! Spinners and skeleton states for pending requests.

use leptos::*;

/// Typing indicator shown while a chat reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-1 px-4 py-3 bg-gray-700 rounded-lg w-fit animate-pulse">
            <span class="w-2 h-2 bg-gray-400 rounded-full" />
            <span class="w-2 h-2 bg-gray-400 rounded-full" />
            <span class="w-2 h-2 bg-gray-400 rounded-full" />
        </div>
    }
}

/// Skeleton loader shown while an analysis is in flight
#[component]
pub fn AnalysisSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3" />
            <div class="grid md:grid-cols-2 gap-6">
                <div class="h-64 bg-gray-700 rounded-lg" />
                <div class="h-64 bg-gray-700 rounded-lg" />
            </div>
        </div>
    }
}
