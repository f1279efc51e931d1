//! Admin status bar showing the latest editor feedback message.

use leptos::prelude::*;

use crate::state::editor::StatusMessage;

/// Status line under the canvas. Error messages get a highlight class.
#[component]
pub fn StatusBar() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusMessage>>();

    let class = move || {
        if status.get().is_error {
            "status-bar status-bar--error"
        } else {
            "status-bar"
        }
    };

    view! {
        <div class=class role="status">
            {move || status.get().text}
        </div>
    }
}
