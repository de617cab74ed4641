//! Drag-reorder engine for repeatable list sections.
//!
//! Modeled as an explicit state machine (`Idle` / `Dragging`) over a
//! container of stacked item boxes, decoupled from any pointer-event API
//! and from the rendering templates. Each container (experience,
//! education) owns an independent `SortableList` with separate drag state.
//!
//! # Insertion rule
//! On drag-over, the insertion point is immediately before the first
//! non-dragged item, scanning in document order, whose vertical midpoint
//! lies below the pointer; if no such item exists, the end of the list.
//! The dragged item moves to that position live, not only on drop. Equal
//! midpoints resolve to the first match in document order.

#![allow(dead_code)]

use uuid::Uuid;

/// Where a drag gesture started relative to an item's layout.
/// Only the designated handle sub-region initiates a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleHit {
    Handle,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { item: Uuid },
}

/// One list item's vertical geometry within the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub id: Uuid,
    pub top: f32,
    pub height: f32,
}

impl ItemBox {
    pub fn midpoint(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// A reorderable container of N stacked items.
pub struct SortableList {
    origin: f32,
    items: Vec<ItemBox>,
    drag: DragState,
    on_reorder_complete: Option<Box<dyn FnMut(&[Uuid])>>,
}

impl SortableList {
    pub fn new(origin: f32) -> Self {
        SortableList {
            origin,
            items: Vec::new(),
            drag: DragState::Idle,
            on_reorder_complete: None,
        }
    }

    /// Builds a container from (id, height) pairs stacked from the origin.
    pub fn from_heights(origin: f32, heights: &[(Uuid, f32)]) -> Self {
        let mut list = SortableList::new(origin);
        for (id, height) in heights {
            list.items.push(ItemBox {
                id: *id,
                top: 0.0,
                height: *height,
            });
        }
        list.restack();
        list
    }

    /// Registers the completion callback fired once per completed drag.
    pub fn on_reorder_complete(&mut self, callback: impl FnMut(&[Uuid]) + 'static) {
        self.on_reorder_complete = Some(Box::new(callback));
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn order(&self) -> Vec<Uuid> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the item set (after an add/remove), dropping any active drag.
    pub fn set_items(&mut self, heights: &[(Uuid, f32)]) {
        self.items = heights
            .iter()
            .map(|(id, height)| ItemBox {
                id: *id,
                top: 0.0,
                height: *height,
            })
            .collect();
        self.drag = DragState::Idle;
        self.restack();
    }

    /// Marks an item as being dragged. Only accepted from the handle
    /// region, for a known item, while idle. Returns whether the drag began.
    pub fn drag_start(&mut self, id: Uuid, hit: HandleHit) -> bool {
        if hit != HandleHit::Handle || self.drag != DragState::Idle {
            return false;
        }
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.drag = DragState::Dragging { item: id };
        true
    }

    /// Moves the dragged item to the insertion point nearest the pointer.
    /// No-op while idle.
    pub fn drag_over(&mut self, pointer_y: f32) {
        let dragged = match self.drag {
            DragState::Dragging { item } => item,
            DragState::Idle => return,
        };

        // First non-dragged item whose midpoint lies below the pointer,
        // counted by position among the remaining siblings.
        let mut insert_at = self.items.iter().filter(|i| i.id != dragged).count();
        for (position, item) in self.items.iter().filter(|i| i.id != dragged).enumerate() {
            if pointer_y < item.midpoint() {
                insert_at = position;
                break;
            }
        }

        let from = self
            .items
            .iter()
            .position(|item| item.id == dragged)
            .expect("dragged item is always present while Dragging");
        let item = self.items.remove(from);
        self.items.insert(insert_at, item);
        self.restack();
    }

    /// Clears the transient drag marker and fires the completion callback
    /// exactly once. Returns the final order, or `None` if no drag was
    /// active.
    pub fn drag_end(&mut self) -> Option<Vec<Uuid>> {
        match self.drag {
            DragState::Dragging { .. } => {
                self.drag = DragState::Idle;
                let order = self.order();
                if let Some(callback) = self.on_reorder_complete.as_mut() {
                    callback(&order);
                }
                Some(order)
            }
            DragState::Idle => None,
        }
    }

    /// Restacks item tops cumulatively from the container origin — the
    /// reflow the layout engine performed upstream.
    fn restack(&mut self) {
        let mut top = self.origin;
        for item in &mut self.items {
            item.top = top;
            top += item.height;
        }
    }
}

impl std::fmt::Debug for SortableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableList")
            .field("origin", &self.origin)
            .field("items", &self.items)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Three 100-high items A, B, C stacked from 0.
    fn make_list() -> (SortableList, Uuid, Uuid, Uuid) {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let list = SortableList::from_heights(0.0, &[(a, 100.0), (b, 100.0), (c, 100.0)]);
        (list, a, b, c)
    }

    #[test]
    fn test_drag_a_below_b_midpoint_yields_bac() {
        let (mut list, a, b, c) = make_list();
        assert!(list.drag_start(a, HandleHit::Handle));
        // A still occupies its slot while dragged, so B's midpoint is 150
        // and C's is 250. Pointer at 180 is below B's midpoint, above C's.
        list.drag_over(180.0);
        list.drag_end();
        assert_eq!(list.order(), vec![b, a, c]);
    }

    #[test]
    fn test_drag_to_bottom_appends() {
        let (mut list, a, b, c) = make_list();
        list.drag_start(a, HandleHit::Handle);
        list.drag_over(500.0);
        assert_eq!(list.order(), vec![b, c, a]);
    }

    #[test]
    fn test_drag_not_crossing_any_midpoint_keeps_position() {
        let (mut list, a, b, c) = make_list();
        list.drag_start(a, HandleHit::Handle);
        // Pointer above every remaining midpoint → insert at front, where
        // A already is.
        list.drag_over(10.0);
        assert_eq!(list.order(), vec![a, b, c]);
    }

    #[test]
    fn test_drag_start_requires_handle() {
        let (mut list, a, ..) = make_list();
        assert!(!list.drag_start(a, HandleHit::Elsewhere));
        assert_eq!(list.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_start_unknown_item_rejected() {
        let (mut list, ..) = make_list();
        assert!(!list.drag_start(Uuid::new_v4(), HandleHit::Handle));
    }

    #[test]
    fn test_reorder_complete_fires_exactly_once_per_drag() {
        let (mut list, a, ..) = make_list();
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        list.on_reorder_complete(move |_| counter.set(counter.get() + 1));

        list.drag_start(a, HandleHit::Handle);
        list.drag_over(180.0);
        list.drag_over(240.0);
        assert_eq!(fired.get(), 0, "callback must not fire mid-drag");
        assert!(list.drag_end().is_some());
        assert_eq!(fired.get(), 1);

        // A stray drag_end without an active drag fires nothing.
        assert!(list.drag_end().is_none());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_drag_end_clears_marker_and_reports_order() {
        let (mut list, a, b, c) = make_list();
        list.drag_start(a, HandleHit::Handle);
        list.drag_over(180.0);
        let order = list.drag_end().unwrap();
        assert_eq!(order, vec![b, a, c]);
        assert_eq!(list.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_restack_after_move_keeps_stack_contiguous() {
        let (mut list, a, ..) = make_list();
        list.drag_start(a, HandleHit::Handle);
        list.drag_over(500.0);
        let tops: Vec<f32> = list.items.iter().map(|i| i.top).collect();
        assert_eq!(tops, vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_multi_step_drag_uses_live_positions() {
        let (mut list, a, b, c) = make_list();
        list.drag_start(a, HandleHit::Handle);
        list.drag_over(500.0); // B, C, A
        list.drag_over(10.0); // back to the top
        assert_eq!(list.order(), vec![a, b, c]);
    }

    #[test]
    fn test_containers_are_independent() {
        let (mut experience, a, ..) = make_list();
        let (mut education, x, y, z) = make_list();
        experience.drag_start(a, HandleHit::Handle);
        // The education container is untouched by the experience drag.
        assert_eq!(education.drag_state(), DragState::Idle);
        education.drag_start(x, HandleHit::Handle);
        education.drag_over(180.0);
        education.drag_end();
        assert_eq!(education.order(), vec![y, x, z]);
        assert!(matches!(
            experience.drag_state(),
            DragState::Dragging { item } if item == a
        ));
    }

    #[test]
    fn test_set_items_drops_active_drag() {
        let (mut list, a, b, ..) = make_list();
        list.drag_start(a, HandleHit::Handle);
        list.set_items(&[(a, 100.0), (b, 100.0)]);
        assert_eq!(list.drag_state(), DragState::Idle);
        assert_eq!(list.len(), 2);
    }
}
