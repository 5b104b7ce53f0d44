//! Reorder Controls Component
//!
//! Drag handle plus up/down buttons shown beside each task form section.

use leptos::prelude::*;

#[component]
pub fn ReorderControls(
    #[prop(into)] index: Signal<usize>,
    #[prop(into)] len: Signal<usize>,
    #[prop(into)] on_move_up: Callback<()>,
    #[prop(into)] on_move_down: Callback<()>,
) -> impl IntoView {
    let is_first = move || index.get() == 0;
    let is_last = move || index.get() + 1 >= len.get();

    view! {
        <div class="field-reorder-controls">
            <div class="drag-handle" title="Drag to reorder">"⋮⋮"</div>
            <div class="field-reorder-buttons">
                <button
                    type="button"
                    class="field-reorder-button"
                    title="Move up"
                    disabled=is_first
                    on:click=move |_| on_move_up.run(())
                >
                    "^"
                </button>
                <button
                    type="button"
                    class="field-reorder-button down"
                    title="Move down"
                    disabled=is_last
                    on:click=move |_| on_move_down.run(())
                >
                    "^"
                </button>
            </div>
        </div>
    }
}
