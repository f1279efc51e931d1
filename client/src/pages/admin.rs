//! Admin area: the floor-plan editor.
//!
//! Owns every editor signal (mode, form, document mirror, command queue,
//! status) and provides them as context for the canvas host and sidebar
//! components. Only the `admin` profile may enter.

use canvas::input::Mode;
use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::navbar::Navbar;
use crate::components::product_panel::ProductPanel;
use crate::components::section_list::SectionList;
use crate::components::status_bar::StatusBar;
use crate::config::AppConfig;
use crate::state::auth::Profile;
use crate::state::editor::{self, EditorCommand, EditorState, FormState};
use crate::util::auth;

/// Admin floor-plan editor page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let mode = RwSignal::new(Mode::Draw);
    let form = RwSignal::new(FormState {
        kind: "armazenagem".to_owned(),
        color: "#2e7d32".to_owned(),
        ..FormState::default()
    });
    let editor_state = RwSignal::new(EditorState::default());
    let command = RwSignal::new(None::<EditorCommand>);
    let status = RwSignal::new(editor::ready());

    provide_context(mode);
    provide_context(form);
    provide_context(editor_state);
    provide_context(command);
    provide_context(status);

    let user_name = RwSignal::new("Admin".to_owned());
    let user_id = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(session) = auth::ensure_role_session(&[Profile::Admin]) else {
            return;
        };
        user_id.set(session.user_id);
    });

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

    let sync_base_url = config.api_base_url.clone();
    let on_sync = move |_| {
        #[cfg(not(feature = "hydrate"))]
        let _ = &sync_base_url;
        #[cfg(feature = "hydrate")]
        {
            let sections = editor_state.get_untracked().sections;
            if sections.is_empty() {
                status.set(editor::nothing_to_sync());
                return;
            }
            let Some(token) = auth::access_token() else {
                status.set(editor::missing_token());
                return;
            };
            let base_url = sync_base_url.clone();
            leptos::task::spawn_local(async move {
                let report = crate::net::sync::sync_layout(&base_url, &token, &sections).await;
                let text = report.message();
                status.set(if report.has_failures() {
                    editor::StatusMessage::error(text)
                } else {
                    editor::StatusMessage::info(text)
                });
            });
        }
    };

    let mode_class = move |target: Mode| {
        move || {
            if mode.get() == target {
                "btn btn--mode btn--mode-active"
            } else {
                "btn btn--mode"
            }
        }
    };

    view! {
        <div class="admin-page">
            <Navbar title="Admin" user_name=user_name/>

            <div class="admin-page__layout">
                <aside class="admin-page__sidebar">
                    <section class="panel">
                        <h2>"Modo"</h2>
                        <div class="panel__row">
                            <button class=mode_class(Mode::Draw) on:click=move |_| mode.set(Mode::Draw)>
                                "Desenhar"
                            </button>
                            <button class=mode_class(Mode::Select) on:click=move |_| mode.set(Mode::Select)>
                                "Selecionar"
                            </button>
                        </div>
                    </section>

                    <section class="panel">
                        <h2>"Nova secao"</h2>
                        <label class="field">
                            "Nome"
                            <input
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Prateleira"
                            <input
                                type="text"
                                prop:value=move || form.get().shelf
                                on:input=move |ev| form.update(|f| f.shelf = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Tipo"
                            <select
                                prop:value=move || form.get().kind
                                on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                            >
                                <option value="armazenagem">"Armazenagem"</option>
                                <option value="picking">"Picking"</option>
                                <option value="recebimento">"Recebimento"</option>
                                <option value="expedicao">"Expedicao"</option>
                            </select>
                        </label>
                        <label class="field">
                            "Cor"
                            <input
                                type="color"
                                prop:value=move || form.get().color
                                on:input=move |ev| form.update(|f| f.color = event_target_value(&ev))
                            />
                        </label>
                    </section>

                    <section class="panel">
                        <h2>"Secoes"</h2>
                        <SectionList/>
                        <div class="panel__row">
                            <button
                                class="btn btn--danger"
                                on:click=move |_| command.set(Some(EditorCommand::DeleteSelected))
                            >
                                "Remover secao"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| command.set(Some(EditorCommand::ClearAll))
                            >
                                "Limpar planta"
                            </button>
                        </div>
                    </section>

                    <section class="panel">
                        <h2>"Produtos"</h2>
                        <ProductPanel/>
                    </section>

                    <button class="btn btn--primary" on:click=on_sync>
                        "Sincronizar com API"
                    </button>
                </aside>

                <main class="admin-page__canvas">
                    <CanvasHost/>
                    <StatusBar/>
                    <span class="admin-page__user-id">{move || user_id.get()}</span>
                </main>
            </div>
        </div>
    }
}
