//! Bridge component between the Leptos UI and the imperative canvas engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The engine owns the authoritative document while the admin page is open.
//! This component binds it to the `<canvas>` element on mount, feeds pointer
//! events and queued [`EditorCommand`]s into it, and after every action
//! persists the layout, mirrors the document into the [`EditorState`] signal,
//! and re-renders. On the server it renders a bare canvas element.

use canvas::input::Mode;
use leptos::prelude::*;

use crate::state::editor::{EditorCommand, EditorState, FormState, StatusMessage};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine, EngineCore};

#[cfg(feature = "hydrate")]
use crate::state::editor::{
    draft_rejected, layout_cleared, product_added, product_removed, section_created,
    section_removed, select_section_for_product, select_section_to_remove,
};

/// Floor-plan canvas bound to the editor engine.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let mode = expect_context::<RwSignal<Mode>>();
    let form = expect_context::<RwSignal<FormState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let command = expect_context::<RwSignal<Option<EditorCommand>>>();
    let status = expect_context::<RwSignal<StatusMessage>>();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let (on_down, on_move, on_up, on_leave) = {
        let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));

        // Bind the engine once the canvas element exists, then load the
        // stored layout into it.
        {
            let engine = Rc::clone(&engine);
            Effect::new(move || {
                let Some(element) = canvas_ref.get() else {
                    return;
                };
                if engine.borrow().is_some() {
                    return;
                }
                let mut bound = Engine::new(element);
                bound.core.load_layout(crate::util::storage::load_layout());
                mirror(&bound.core, editor);
                report_render(bound.render());
                *engine.borrow_mut() = Some(bound);
            });
        }

        // Mode switches from the page buttons.
        {
            let engine = Rc::clone(&engine);
            Effect::new(move || {
                let next = mode.get();
                let mut slot = engine.borrow_mut();
                let Some(bound) = slot.as_mut() else {
                    return;
                };
                let action = bound.core.set_mode(next);
                apply_action(bound, &action, editor, status);
            });
        }

        // Commands queued by the sidebar controls.
        {
            let engine = Rc::clone(&engine);
            Effect::new(move || {
                let Some(cmd) = command.get() else {
                    return;
                };
                command.set(None);
                let mut slot = engine.borrow_mut();
                let Some(bound) = slot.as_mut() else {
                    return;
                };
                apply_command(bound, cmd, editor, status);
            });
        }

        let down = {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                let Some(element) = canvas_ref.get_untracked() else {
                    return;
                };
                let pt = crate::util::canvas_input::pointer_point(&ev, &element);
                let mut slot = engine.borrow_mut();
                let Some(bound) = slot.as_mut() else {
                    return;
                };
                let action = bound.core.pointer_down(pt);
                apply_action(bound, &action, editor, status);
            }
        };
        let hover = {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                let Some(element) = canvas_ref.get_untracked() else {
                    return;
                };
                let pt = crate::util::canvas_input::pointer_point(&ev, &element);
                let mut slot = engine.borrow_mut();
                let Some(bound) = slot.as_mut() else {
                    return;
                };
                let action = bound.core.pointer_move(pt);
                apply_action(bound, &action, editor, status);
            }
        };
        let up = {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                let mut slot = engine.borrow_mut();
                let Some(bound) = slot.as_mut() else {
                    return;
                };
                let action = bound.core.pointer_up(&form.get_untracked().to_section_form());
                apply_action(bound, &action, editor, status);
            }
        };
        let leave = {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                let mut slot = engine.borrow_mut();
                let Some(bound) = slot.as_mut() else {
                    return;
                };
                let action = bound.core.pointer_leave(&form.get_untracked().to_section_form());
                apply_action(bound, &action, editor, status);
            }
        };
        (down, hover, up, leave)
    };

    #[cfg(not(feature = "hydrate"))]
    let (on_down, on_move, on_up, on_leave) = {
        let _ = (mode, form, editor, command, status);
        let noop = |_: leptos::ev::MouseEvent| {};
        (noop, noop, noop, noop)
    };

    view! {
        <canvas
            class="canvas-host"
            width="960"
            height="560"
            node_ref=canvas_ref
            on:mousedown=on_down
            on:mousemove=on_move
            on:mouseup=on_up
            on:mouseleave=on_leave
        >
            "Seu navegador nao suporta canvas."
        </canvas>
    }
}

/// Push the engine document into the reactive mirror.
#[cfg(feature = "hydrate")]
fn mirror(core: &EngineCore, editor: RwSignal<EditorState>) {
    editor.set(EditorState {
        mode: core.mode,
        sections: core.doc.sections().to_vec(),
        selected: core.selected,
    });
}

/// Persist the layout and refresh the mirror.
#[cfg(feature = "hydrate")]
fn persist(core: &EngineCore, editor: RwSignal<EditorState>) {
    crate::util::storage::save_layout(core.doc.sections());
    mirror(core, editor);
}

#[cfg(feature = "hydrate")]
fn report_render(result: Result<(), wasm_bindgen::JsValue>) {
    if let Err(err) = result {
        log::error!("canvas render failed: {err:?}");
    }
}

#[cfg(feature = "hydrate")]
fn apply_action(
    engine: &mut Engine,
    action: &Action,
    editor: RwSignal<EditorState>,
    status: RwSignal<StatusMessage>,
) {
    match action {
        Action::None => {}
        Action::RenderNeeded => report_render(engine.render()),
        Action::SelectionChanged => {
            mirror(&engine.core, editor);
            report_render(engine.render());
        }
        Action::SectionCreated(id) => {
            persist(&engine.core, editor);
            if let Some(section) = engine.core.doc.get(id) {
                status.set(section_created(&section.name));
            }
            report_render(engine.render());
        }
        Action::DraftRejected => {
            status.set(draft_rejected());
            report_render(engine.render());
        }
        Action::LayoutChanged => {
            persist(&engine.core, editor);
            report_render(engine.render());
        }
    }
}

#[cfg(feature = "hydrate")]
fn apply_command(
    engine: &mut Engine,
    cmd: EditorCommand,
    editor: RwSignal<EditorState>,
    status: RwSignal<StatusMessage>,
) {
    match cmd {
        EditorCommand::Select(id) => {
            let action = engine.core.select(id);
            apply_action(engine, &action, editor, status);
        }
        EditorCommand::DeleteSelected => match engine.core.delete_selected() {
            Some(section) => {
                persist(&engine.core, editor);
                status.set(section_removed(&section.name));
                report_render(engine.render());
            }
            None => status.set(select_section_to_remove()),
        },
        EditorCommand::ClearAll => {
            engine.core.clear();
            persist(&engine.core, editor);
            status.set(layout_cleared());
            report_render(engine.render());
        }
        EditorCommand::AddProduct { name, code } => {
            match engine.core.add_product_to_selected(name, code) {
                Some(section_name) => {
                    persist(&engine.core, editor);
                    status.set(product_added(&section_name));
                    report_render(engine.render());
                }
                None => status.set(select_section_for_product()),
            }
        }
        EditorCommand::RemoveProduct { section, product } => {
            if let Some(section_name) = engine.core.remove_product(&section, &product) {
                persist(&engine.core, editor);
                status.set(product_removed(&section_name));
                report_render(engine.render());
            }
        }
    }
}
