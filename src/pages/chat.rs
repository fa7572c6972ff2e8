//! Chat Page
//!
//! Message list plus input row. Sends are optimistic: the user message is
//! appended before the request goes out and stays in place on failure.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::TypingIndicator;
use crate::state::global::GlobalState;
use crate::state::session::{clean_input, insight_summary, Message, Sender};

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (input, set_input) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);
    let (uploading, set_uploading) = create_signal(false);

    let messages_end = create_node_ref::<html::Div>();

    // Keep the newest message in view
    let chat_signal = state.chat;
    create_effect(move |_| {
        chat_signal.track();
        if let Some(el) = messages_end.get() {
            el.scroll_into_view();
        }
    });

    let state_for_send = state.clone();
    let send = move || {
        let raw = input.get_untracked();
        let text = match clean_input(&raw) {
            Some(text) => text.to_string(),
            // Empty or whitespace-only: no message, no request
            None => return,
        };

        state_for_send.chat.update(|log| {
            log.push(Sender::User, text.clone());
        });
        set_input.set(String::new());
        set_pending.set(true);

        let state_clone = state_for_send.clone();
        spawn_local(async move {
            match api::send_chat(&text).await {
                Ok(reply) => {
                    state_clone.chat.update(|log| {
                        log.push(Sender::Ai, reply);
                    });
                }
                Err(_) => {
                    // User message stays in place; no retry
                    state_clone.show_error("Failed to get AI response");
                }
            }
            set_pending.set(false);
        });
    };

    let send_for_submit = send.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send_for_submit();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    // File upload from the chat toolbar: result lands as a synthesized
    // AI message listing the insight lines
    let state_for_upload = state.clone();
    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };
        // Allow re-selecting the same file later
        input.set_value("");

        set_uploading.set(true);

        let state_clone = state_for_upload.clone();
        spawn_local(async move {
            match api::analyze_file(&file).await {
                Ok(report) => {
                    state_clone.chat.update(|log| {
                        log.push(Sender::Ai, insight_summary(&report.insights));
                    });
                }
                Err(_) => {
                    state_clone.show_error("Failed to analyze file");
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="flex flex-col h-[calc(100vh-6rem)]">
            // Message list
            <div class="flex-1 overflow-y-auto space-y-4 p-4">
                {move || {
                    state.chat.get()
                        .messages()
                        .iter()
                        .cloned()
                        .map(|message| view! { <MessageBubble message /> })
                        .collect_view()
                }}

                {move || pending.get().then(|| view! { <TypingIndicator /> })}

                <div node_ref=messages_end />
            </div>

            // Input row
            <form on:submit=on_submit class="border-t border-gray-700 p-4 flex items-center space-x-2">
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                // Upload a file for analysis, reply arrives in-chat
                <label
                    class="px-4 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg cursor-pointer
                           transition-colors"
                    title="Upload file"
                >
                    <input
                        type="file"
                        accept=".csv,.xlsx,.xls"
                        class="hidden"
                        on:change=on_file_change
                        disabled=move || uploading.get()
                    />
                    {move || if uploading.get() { "⏳" } else { "📎" }}
                </label>

                // Overlapping sends are allowed; replies interleave by arrival
                <button
                    type="submit"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if pending.get() { "Sending..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}

/// One chat message bubble, aligned by sender
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let (align, bubble) = match message.sender {
        Sender::User => ("flex justify-end", "bg-primary-600 text-white"),
        Sender::Ai => ("flex justify-start", "bg-gray-700 text-gray-100"),
    };

    let time = message.timestamp.format("%H:%M:%S").to_string();

    view! {
        <div class=align>
            <div class=format!("max-w-[70%] rounded-lg px-4 py-3 {}", bubble)>
                <p class="whitespace-pre-wrap">{message.text}</p>
                <p class="text-xs opacity-70 mt-1">{time}</p>
            </div>
        </div>
    }
}
