//! Product assignment panel for the selected section.

use leptos::prelude::*;

use crate::state::editor::{
    self, EditorCommand, EditorState, StatusMessage,
};

/// Product inputs plus the list of products on the selected section.
#[component]
pub fn ProductPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let command = expect_context::<RwSignal<Option<EditorCommand>>>();
    let status = expect_context::<RwSignal<StatusMessage>>();

    let product_name = RwSignal::new(String::new());
    let product_code = RwSignal::new(String::new());

    let on_add = move |_| {
        if editor.get_untracked().selected.is_none() {
            status.set(editor::select_section_for_product());
            return;
        }
        let name = product_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            status.set(editor::product_name_required());
            return;
        }
        let code = product_code.get_untracked().trim().to_owned();
        command.set(Some(EditorCommand::AddProduct { name, code }));
        product_name.set(String::new());
        product_code.set(String::new());
    };

    view! {
        <div class="product-panel">
            <label class="field">
                "Produto"
                <input
                    type="text"
                    prop:value=move || product_name.get()
                    on:input=move |ev| product_name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Codigo"
                <input
                    type="text"
                    prop:value=move || product_code.get()
                    on:input=move |ev| product_code.set(event_target_value(&ev))
                />
            </label>
            <button class="btn" on:click=on_add>
                "Vincular produto"
            </button>

            <ul class="product-list">{move || product_items(editor, command)}</ul>
        </div>
    }
}

fn product_items(
    editor: RwSignal<EditorState>,
    command: RwSignal<Option<EditorCommand>>,
) -> AnyView {
    let state = editor.get();
    let Some(section) = state.selected_section() else {
        return view! { <li class="product-list__empty">"Selecione uma secao para vincular produtos."</li> }
            .into_any();
    };
    if section.products.is_empty() {
        return view! { <li class="product-list__empty">"Nenhum produto vinculado nesta secao."</li> }
            .into_any();
    }

    let section_id = section.id;
    section
        .products
        .iter()
        .map(|product| {
            let product_id = product.id;
            let detail = if product.code.is_empty() {
                "Sem codigo".to_owned()
            } else {
                format!("Codigo: {}", product.code)
            };
            view! {
                <li class="product-list__item">
                    <div class="product-meta">
                        <span class="product-name">{product.name.clone()}</span>
                        <span class="product-detail">{detail}</span>
                    </div>
                    <button
                        class="mini-danger"
                        on:click=move |_| {
                            command.set(
                                Some(EditorCommand::RemoveProduct {
                                    section: section_id,
                                    product: product_id,
                                }),
                            );
                        }
                    >
                        "x"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}
