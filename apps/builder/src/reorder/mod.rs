pub mod engine;

pub use engine::{DragState, HandleHit, ItemBox, SortableList};
