//! Reducer actions and transition logic for the dock state.

use crate::model::{DockItem, DockState};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_dock`] to mutate [`DockState`].
pub enum DockAction {
    /// Seed both lists from the catalog merge and mark the state loaded.
    Loaded {
        /// Remaining catalog, deduplicated and disjoint from `pinned`.
        catalog: Vec<DockItem>,
        /// Resolved pinned list in persisted order.
        pinned: Vec<DockItem>,
    },
    /// Prepend an item to the pinned list.
    AddPinned(DockItem),
    /// Replace the pinned entry with the same id in place.
    UpdatePinned(DockItem),
    /// Remove the pinned entry with the same id.
    RemovePinned(DockItem),
    /// Wholesale-replace the pinned list; used by drag reordering.
    SetPinned(Vec<DockItem>),
    /// Prepend an item to the catalog list.
    AddCatalog(DockItem),
    /// Replace the catalog entry with the same id in place.
    UpdateCatalog(DockItem),
    /// Remove the catalog entry with the same id.
    RemoveCatalog(DockItem),
    /// Store the search text verbatim; views apply the filter themselves.
    SetSearch(String),
}

/// Applies a [`DockAction`] to the dock state.
///
/// Transitions are pure, synchronous, and total: an update or removal
/// naming an id that is not present leaves the state untouched. Side
/// effects (persistence, settle timers) are the gesture layer's business.
pub fn reduce_dock(state: &mut DockState, action: DockAction) {
    match action {
        DockAction::Loaded { catalog, pinned } => {
            state.catalog = catalog;
            state.pinned = pinned;
            state.loaded = true;
        }
        DockAction::AddPinned(item) => state.pinned.insert(0, item),
        DockAction::UpdatePinned(item) => replace_by_id(&mut state.pinned, item),
        DockAction::RemovePinned(item) => state.pinned.retain(|existing| existing.id != item.id),
        DockAction::SetPinned(list) => state.pinned = list,
        DockAction::AddCatalog(item) => state.catalog.insert(0, item),
        DockAction::UpdateCatalog(item) => replace_by_id(&mut state.catalog, item),
        DockAction::RemoveCatalog(item) => state.catalog.retain(|existing| existing.id != item.id),
        DockAction::SetSearch(text) => state.search_text = text,
    }
}

fn replace_by_id(list: &mut [DockItem], item: DockItem) {
    if let Some(slot) = list.iter_mut().find(|existing| existing.id == item.id) {
        *slot = item;
    }
}

/// Case-insensitive substring filter over item names.
///
/// A view-layer helper: the underlying lists are never stored pre-filtered.
pub fn filter_by_search(items: &[DockItem], search_text: &str) -> Vec<DockItem> {
    let needle = search_text.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Display order for the catalog section: sort order, then name.
pub fn catalog_display_order(mut items: Vec<DockItem>) -> Vec<DockItem> {
    items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    items
}

#[cfg(test)]
mod tests {
    use portal_host::AppId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str) -> DockItem {
        DockItem {
            id: AppId::from(id),
            name: id.to_uppercase(),
            description: None,
            url: None,
            order: None,
            pinned: false,
            unpinned: false,
        }
    }

    #[test]
    fn loaded_seeds_lists_and_sets_flag() {
        let mut state = DockState::default();
        reduce_dock(
            &mut state,
            DockAction::Loaded {
                catalog: vec![item("a")],
                pinned: vec![item("b")],
            },
        );

        assert!(state.loaded);
        assert_eq!(state.catalog, vec![item("a")]);
        assert_eq!(state.pinned, vec![item("b")]);
    }

    #[test]
    fn add_then_remove_restores_prior_pinned_list() {
        let mut state = DockState::default();
        reduce_dock(&mut state, DockAction::SetPinned(vec![item("a"), item("b")]));
        let before = state.pinned.clone();

        reduce_dock(&mut state, DockAction::AddPinned(item("x")));
        reduce_dock(&mut state, DockAction::RemovePinned(item("x")));

        assert_eq!(state.pinned, before);
    }

    #[test]
    fn add_pinned_prepends() {
        let mut state = DockState::default();
        reduce_dock(&mut state, DockAction::AddPinned(item("a")));
        reduce_dock(&mut state, DockAction::AddPinned(item("b")));

        let ids: Vec<&str> = state.pinned.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn set_pinned_is_idempotent() {
        let mut state = DockState::default();
        let list = vec![item("a"), item("b"), item("c")];

        reduce_dock(&mut state, DockAction::SetPinned(list.clone()));
        let once = state.clone();
        reduce_dock(&mut state, DockAction::SetPinned(list));

        assert_eq!(state, once);
    }

    #[test]
    fn update_replaces_in_place_and_ignores_unknown_ids() {
        let mut state = DockState::default();
        reduce_dock(&mut state, DockAction::SetPinned(vec![item("a"), item("b")]));

        let mut changed = item("b");
        changed.pinned = true;
        reduce_dock(&mut state, DockAction::UpdatePinned(changed.clone()));
        assert_eq!(state.pinned, vec![item("a"), changed]);

        let before = state.clone();
        reduce_dock(&mut state, DockAction::UpdatePinned(item("zzz")));
        reduce_dock(&mut state, DockAction::RemoveCatalog(item("zzz")));
        assert_eq!(state, before);
    }

    #[test]
    fn catalog_actions_mirror_pinned_actions() {
        let mut state = DockState::default();
        reduce_dock(&mut state, DockAction::AddCatalog(item("a")));
        reduce_dock(&mut state, DockAction::AddCatalog(item("b")));
        reduce_dock(&mut state, DockAction::RemoveCatalog(item("a")));

        assert_eq!(state.catalog, vec![item("b")]);
        assert_eq!(state.pinned, Vec::new());
    }

    #[test]
    fn set_search_stores_text_verbatim() {
        let mut state = DockState::default();
        reduce_dock(&mut state, DockAction::SetSearch("  MaIl ".to_string()));
        assert_eq!(state.search_text, "  MaIl ");
    }

    #[test]
    fn search_filter_is_case_insensitive_and_non_mutating() {
        let items = vec![item("mail"), item("calendar"), item("mailbox")];
        let filtered = filter_by_search(&items, "MAIL");

        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["mail", "mailbox"]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn empty_search_keeps_everything() {
        let items = vec![item("a"), item("b")];
        assert_eq!(filter_by_search(&items, ""), items);
    }

    #[test]
    fn catalog_display_order_sorts_by_order_then_name() {
        let mut first = item("crm");
        first.order = Some(1);
        let mut second = item("mail");
        second.order = Some(2);
        let mut also_second = item("chat");
        also_second.order = Some(2);

        let sorted = catalog_display_order(vec![second.clone(), also_second.clone(), first.clone()]);
        assert_eq!(sorted, vec![first, also_second, second]);
    }
}
