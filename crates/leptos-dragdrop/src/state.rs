//! Drag State
//!
//! Browser-independent drag/drop bookkeeping for index-addressed lists.

/// A completed drop: move the entry at `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// Transient drag state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    /// Index being dragged
    pub dragged: Option<usize>,
    /// Index currently hovered as drop target
    pub drag_over: Option<usize>,
}

impl DragState {
    /// Pointer-down on an entry
    pub fn start(&mut self, index: usize) {
        self.dragged = Some(index);
        self.drag_over = None;
    }

    /// Pointer-over an entry. Hovering the dragged entry itself is ignored.
    pub fn enter(&mut self, index: usize) {
        if let Some(dragged) = self.dragged {
            if dragged != index {
                self.drag_over = Some(index);
            }
        }
    }

    pub fn leave(&mut self) {
        self.drag_over = None;
    }

    /// Drop on `index`. Always clears the state.
    pub fn drop_on(&mut self, index: usize) -> Option<Reorder> {
        let reorder = match self.dragged {
            Some(from) if from != index => Some(Reorder { from, to: index }),
            _ => None,
        };
        self.end();
        reorder
    }

    /// Pointer released: drop on the hovered target if there is one
    pub fn release(&mut self) -> Option<Reorder> {
        match self.drag_over {
            Some(target) => self.drop_on(target),
            None => {
                self.end();
                None
            }
        }
    }

    pub fn end(&mut self) {
        self.dragged = None;
        self.drag_over = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}

/// Remove the entry at `from` and reinsert it at `to` (clamped to the end).
/// Returns false when `from` is out of range or nothing moves.
pub fn move_index<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || from == to {
        return false;
    }
    let entry = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, entry);
    true
}
