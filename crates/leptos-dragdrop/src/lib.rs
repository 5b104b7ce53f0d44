//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering of index-addressed lists using mouse events.
//! The bookkeeping lives in [`DragState`]; this module binds it to signals and
//! DOM listeners.

mod state;

pub use state::{move_index, DragState, Reorder};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signal
#[derive(Clone, Copy)]
pub struct DndSignals {
    state: RwSignal<DragState>,
}

impl DndSignals {
    /// Index being dragged (tracked)
    pub fn dragged(&self) -> Option<usize> {
        self.state.with(|s| s.dragged)
    }

    /// Index hovered as drop target (tracked)
    pub fn drag_over(&self) -> Option<usize> {
        self.state.with(|s| s.drag_over)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.with(|s| s.is_dragging())
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        state: RwSignal::new(DragState::default()),
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.state.try_update(|s| s.end());
}

/// Mouse-down starting a drag, unless it lands on a form control
fn is_form_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Create mousedown handler for draggable entries.
///
/// `index` may be a signal when entries are keyed and move between positions.
pub fn make_on_mousedown(dnd: DndSignals, index: impl Into<Signal<usize>>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    let index = index.into();
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if ev.target().is_some_and(|t| is_form_control(&t)) {
            return;
        }
        if let Some(index) = index.try_get_untracked() {
            dnd.state.try_update(|s| s.start(index));
        }
    }
}

/// Create mouseenter handler for entries (become drop target)
pub fn make_on_mouseenter(dnd: DndSignals, index: impl Into<Signal<usize>>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    let index = index.into();
    move |_ev: web_sys::MouseEvent| {
        if !dnd.state.try_with_untracked(|s| s.is_dragging()).unwrap_or(false) {
            return;
        }
        if let Some(index) = index.try_get_untracked() {
            dnd.state.try_update(|s| s.enter(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.try_with_untracked(|s| s.drag_over.is_some()).unwrap_or(false) {
            dnd.state.try_update(|s| s.leave());
        }
    }
}

/// Finish a drag on mouse release. Returns true when `on_drop` was called.
///
/// Does nothing once the signals are disposed.
pub fn release_drag<F: Fn(Reorder)>(dnd: DndSignals, on_drop: &F) -> bool {
    let dragging = dnd.state.try_with_untracked(|s| s.is_dragging()).unwrap_or(false);
    if !dragging {
        return false;
    }
    match dnd.state.try_update(|s| s.release()) {
        Some(Some(reorder)) => {
            on_drop(reorder);
            true
        }
        _ => false,
    }
}

type MouseupClosure = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Document `mouseup` listener; removed on [`unbind`](Self::unbind) or drop
pub struct MouseupBinding {
    listener: Option<MouseupClosure>,
}

impl MouseupBinding {
    pub fn is_bound(&self) -> bool {
        self.listener.is_some()
    }

    pub fn unbind(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback("mouseup", listener.as_ref().unchecked_ref());
        }
    }
}

impl Drop for MouseupBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}

/// Bind global mouseup handler for drop detection.
///
/// Releasing over a target calls `on_drop`; any other release just clears the
/// drag state. The listener lives as long as the returned binding.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F) -> MouseupBinding
where
    F: Fn(Reorder) + 'static,
{
    let on_mouseup = MouseupClosure::new(move |_ev: web_sys::MouseEvent| {
        release_drag(dnd, &on_drop);
    });

    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return MouseupBinding { listener: None };
    };
    if doc
        .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref())
        .is_err()
    {
        return MouseupBinding { listener: None };
    }
    MouseupBinding {
        listener: Some(on_mouseup),
    }
}

/// Bind the mouseup listener for the current component; it is removed when
/// the component is cleaned up.
pub fn bind_scoped_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(Reorder) + 'static,
{
    let binding = StoredValue::new_local(bind_global_mouseup(dnd, on_drop));
    on_cleanup(move || {
        binding.try_update_value(MouseupBinding::unbind);
    });
}
