//! Dock UI composition: the tree injected into the host mount containers.
//!
//! Markup and class names only; all visual styling is supplied by the
//! hosting page's stylesheet.

mod catalog_section;
mod dock;
mod pinned_section;
mod search;

use leptos::*;

use crate::{
    host,
    interaction::{reorder_before, DropAffordance},
    model::{DockItem, SEARCH_DEBOUNCE_MS},
    reducer::{catalog_display_order, filter_by_search, DockAction},
    runtime_context::use_dock_runtime,
    strings::{string_for, StringKey},
};

pub use dock::DockWidget;

use self::{catalog_section::CatalogSection, pinned_section::PinnedSection, search::SearchBox};

fn pinned_row_class(selected: bool, affordance: Option<DropAffordance>) -> String {
    let mut class = String::from("dock-row dock-row-pinned dock-row-draggable");
    if selected {
        class.push_str(" dock-row-selected");
    }
    match affordance {
        Some(DropAffordance::Above) => class.push_str(" dock-row-drop-above"),
        Some(DropAffordance::Below) => class.push_str(" dock-row-drop-below"),
        None => {}
    }
    class
}

fn pinned_link_class(item: &DockItem) -> String {
    if item.pinned {
        "dock-item-link dock-item-pin-flash".to_string()
    } else {
        "dock-item-link".to_string()
    }
}

fn catalog_link_class(item: &DockItem) -> String {
    if item.unpinned {
        "dock-item-link dock-item-unpin-flash".to_string()
    } else {
        "dock-item-link".to_string()
    }
}
