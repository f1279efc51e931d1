//! Top navigation bar with user identity and logout.

use leptos::prelude::*;

use crate::util::auth;

/// Navigation bar shown on authenticated pages.
#[component]
pub fn Navbar(
    /// Area title next to the brand.
    title: &'static str,
    /// Display name resolved from the backend.
    user_name: RwSignal<String>,
) -> impl IntoView {
    view! {
        <header class="navbar">
            <span class="navbar__brand">"StockFlow"</span>
            <span class="navbar__title">{title}</span>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{move || user_name.get()}</span>
            <button class="btn btn--ghost" on:click=move |_| auth::logout()>
                "Sair"
            </button>
        </header>
    }
}
