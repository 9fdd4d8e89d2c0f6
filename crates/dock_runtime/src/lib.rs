pub mod components;
pub mod host;
pub mod interaction;
pub mod merge;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod strings;

pub use components::DockWidget;
pub use interaction::{reorder_before, DragReorder, DropAffordance};
pub use merge::{merge_catalog, MergePlan};
pub use model::*;
pub use reducer::{filter_by_search, reduce_dock, DockAction};
pub use runtime_context::{use_dock_runtime, DockProvider, DockRuntimeContext};
