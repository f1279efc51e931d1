//! Read-only dashboards for non-admin profiles.
//!
//! Both areas share the same shell: a navbar with the resolved user name and
//! a placeholder work area; the manager area adds a hamburger menu with an
//! off-canvas panel. Access is gated by the stored token's profile; visitors
//! without a valid session are sent back to the login page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::state::auth::Profile;
use crate::util::auth;

/// Manager area, shared by the `gerente` and `lider` profiles.
#[component]
pub fn GerentePage() -> impl IntoView {
    view! {
        <RolePage title="Gerente" allowed=&[Profile::Lider, Profile::Gerente] with_menu=true/>
    }
}

/// Employee area.
#[component]
pub fn FuncionarioPage() -> impl IntoView {
    view! { <RolePage title="Funcionario" allowed=&[Profile::Funcionario] with_menu=false/> }
}

/// Shared role dashboard shell.
#[component]
fn RolePage(
    /// Area label shown in the navbar and heading.
    title: &'static str,
    /// Profiles allowed to view this area.
    allowed: &'static [Profile],
    /// Whether the area carries the off-canvas navigation menu.
    with_menu: bool,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let user_name = RwSignal::new("Utilizador".to_owned());
    let user_id = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);

    Effect::new(move || {
        let Some(session) = auth::ensure_role_session(allowed) else {
            return;
        };
        user_id.set(session.user_id);
    });

    // Resolve the display name from the backend; keep the fallback on any
    // failure.
    #[cfg(feature = "hydrate")]
    {
        let base_url = config.api_base_url.clone();
        Effect::new(move || {
            let base_url = base_url.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = auth::access_token() else {
                    return;
                };
                let Some(user) = crate::net::api::fetch_current_user(&base_url, &token).await
                else {
                    return;
                };
                if let Some(nome) = user.nome.filter(|n| !n.trim().is_empty()) {
                    user_name.set(nome);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &config;

    view! {
        <div class="role-page">
            <Navbar title=title user_name=user_name/>

            <Show when=move || with_menu>
                <button class="role-page__menu-toggle" on:click=move |_| menu_open.set(true)>
                    "☰"
                </button>

                <aside
                    class=move || {
                        if menu_open.get() { "offcanvas offcanvas--open" } else { "offcanvas" }
                    }
                    aria-hidden=move || if menu_open.get() { "false" } else { "true" }
                >
                    <button class="offcanvas__close" on:click=move |_| menu_open.set(false)>
                        "×"
                    </button>
                    <nav class="offcanvas__nav">
                        <span class="offcanvas__entry">"Painel"</span>
                        <span class="offcanvas__entry">"Estoque"</span>
                        <span class="offcanvas__entry">"Movimentacoes"</span>
                    </nav>
                </aside>
            </Show>
            <Show when=move || with_menu && menu_open.get()>
                <div class="offcanvas-overlay" on:click=move |_| menu_open.set(false)></div>
            </Show>

            <main class="role-page__content">
                <h1>{title}</h1>
                <p class="role-page__user-id">{move || user_id.get()}</p>
                <p>"Area em construcao."</p>
            </main>
        </div>
    }
}
