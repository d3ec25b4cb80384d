use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::services::{redirect_to_sign_in, sign_out, ApiClient, BrowserCredentialStore};

/// Sign out on the server, forget the credential, and leave the page.
pub fn sign_out_and_leave(api: ApiClient) {
    spawn_local(async move {
        if let Err(e) = sign_out(&api, &BrowserCredentialStore).await {
            log::error!("Error signing out: {}", e);
        }
        redirect_to_sign_in();
    });
}

#[component]
pub fn AuthenticatedHeader(api: ApiClient, #[prop(into)] email: String) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="app-header">
            <A href="/chat" attr:class="brand">
                <span class="brand-mark">"💬"</span>
                "TODO " <span class="brand-accent">"CHAT"</span>
            </A>
            <nav class="app-nav">
                <A href="/chat">"Dashboard"</A>
                <A href="/assistant">"Assistant"</A>
                <div class="user-menu">
                    <button class="user-menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                        "👤 " {email}
                    </button>
                    {move || menu_open.get().then(|| {
                        let api = api.clone();
                        view! {
                            <div class="user-menu-dropdown">
                                <button on:click=move |_| sign_out_and_leave(api.clone())>"Sign Out"</button>
                            </div>
                        }
                    })}
                </div>
            </nav>
        </header>
    }
}
