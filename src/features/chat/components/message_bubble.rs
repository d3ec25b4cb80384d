use chrono::Local;
use leptos::prelude::*;

use crate::core::models::{ChatMessage, ChatRole};

#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let from_user = message.role == ChatRole::User;
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%I:%M %p")
        .to_string();

    view! {
        <div class="chat-message" class:from-user=from_user class:from-assistant=!from_user>
            <div class="chat-avatar">{if from_user { "🧑" } else { "🤖" }}</div>
            <div class="chat-bubble">
                <p class="chat-content">{message.content}</p>
                <span class="chat-time">{time}</span>
            </div>
        </div>
    }
}

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-message from-assistant typing">
            <div class="chat-avatar">"🤖"</div>
            <div class="chat-bubble">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}
