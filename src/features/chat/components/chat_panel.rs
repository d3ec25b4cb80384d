use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use super::message_bubble::{MessageBubble, TypingIndicator};
use crate::core::models::ChatMessage;
use crate::features::chat::hooks::ChatHook;

/// Message log plus input box, shared by the sidebar and the full-page chat.
#[component]
pub fn ChatPanelBody(hook: ChatHook, placeholder: &'static str) -> impl IntoView {
    let ChatHook { session, send } = hook;
    let (input, set_input) = signal(String::new());
    let end_ref: NodeRef<Div> = NodeRef::new();

    let sending = move || session.with(|s| s.is_sending());

    // Keep the newest message in view
    Effect::new(move |_| {
        session.with(|s| s.messages().len());
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if send.run(input.get_untracked()) {
            set_input.set(String::new());
        }
    };

    view! {
        <div class="chat-messages">
            <For
                each=move || session.with(|s| s.messages().to_vec())
                key=|message: &ChatMessage| message.id.clone()
                children=move |message: ChatMessage| view! { <MessageBubble message=message /> }
            />
            {move || sending().then(|| view! { <TypingIndicator /> })}
            <div node_ref=end_ref></div>
        </div>
        <form class="chat-input" on:submit=handle_submit>
            <input
                type="text"
                placeholder=placeholder
                on:input=move |ev| set_input.set(event_target_value(&ev))
                prop:value=move || input.get()
                disabled=sending
            />
            <button
                type="submit"
                class="btn-primary"
                disabled=move || sending() || input.with(|text| text.trim().is_empty())
            >
                {move || if sending() { "Sending..." } else { "Send" }}
            </button>
        </form>
    }
}
