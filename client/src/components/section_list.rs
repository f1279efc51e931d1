//! Sidebar list of drawn sections with click-to-select.

use leptos::prelude::*;

use crate::state::editor::{EditorCommand, EditorState};

/// Section list. Clicking an entry queues a select command for the canvas.
#[component]
pub fn SectionList() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let command = expect_context::<RwSignal<Option<EditorCommand>>>();

    view! {
        <ul class="section-list">
            <For
                each=move || editor.get().sections
                key=|section| section.id
                children=move |section| {
                    let id = section.id;
                    let detail = format!(
                        "{} | Prateleira {} | {} produto(s)",
                        section.kind.label(),
                        if section.shelf.is_empty() { "-" } else { section.shelf.as_str() },
                        section.products.len(),
                    );
                    let item_class = move || {
                        if editor.get().selected == Some(id) {
                            "section-list__item section-list__item--active"
                        } else {
                            "section-list__item"
                        }
                    };
                    view! {
                        <li
                            class=item_class
                            on:click=move |_| command.set(Some(EditorCommand::Select(Some(id))))
                        >
                            <div class="section-meta">
                                <span class="section-name">{section.name.clone()}</span>
                                <span class="section-detail">{detail}</span>
                            </div>
                            <span class="swatch" style:background=section.color.clone()></span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
