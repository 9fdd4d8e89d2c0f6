//! Drag-reorder gesture state and the pure reorder computation.

use portal_host::AppId;

use crate::model::DockItem;

/// Visual hint for where a dragged row would land relative to the row the
/// pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAffordance {
    Above,
    Below,
}

/// State held for the duration of one drag gesture.
///
/// `selection` outlives gestures (it is the row multi-select); everything
/// else is reset unconditionally when a gesture ends, whether or not a
/// drop happened.
#[derive(Debug, Clone, Default)]
pub struct DragReorder {
    dragged: Option<AppId>,
    dragged_index: Option<usize>,
    anchor_y: Option<i32>,
    selection: Vec<AppId>,
}

impl DragReorder {
    pub fn begin(&mut self, id: AppId, index: usize) {
        self.dragged = Some(id);
        self.dragged_index = Some(index);
    }

    pub fn reset(&mut self) {
        self.dragged = None;
        self.dragged_index = None;
        self.anchor_y = None;
    }

    pub fn dragged(&self) -> Option<&AppId> {
        self.dragged.as_ref()
    }

    /// Index the dragged item had when the gesture started.
    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn toggle_selected(&mut self, id: AppId) {
        if let Some(position) = self.selection.iter().position(|selected| *selected == id) {
            self.selection.remove(position);
        } else {
            self.selection.push(id);
        }
    }

    pub fn is_selected(&self, id: &AppId) -> bool {
        self.selection.iter().any(|selected| selected == id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Classifies the pointer position against the gesture's reference Y.
    ///
    /// The first sample of a gesture records the reference and yields no
    /// hint; later samples compare against it.
    pub fn affordance(&mut self, pointer_y: i32) -> Option<DropAffordance> {
        match self.anchor_y {
            None => {
                self.anchor_y = Some(pointer_y);
                None
            }
            Some(anchor) if anchor < pointer_y => Some(DropAffordance::Below),
            Some(_) => Some(DropAffordance::Above),
        }
    }

    /// Ids moved by the current gesture, in pinned-list order: the whole
    /// multi-selection when the dragged item belongs to it, else just the
    /// dragged item.
    pub fn dragged_block(&self, pinned: &[DockItem]) -> Vec<AppId> {
        let Some(dragged) = self.dragged.as_ref() else {
            return Vec::new();
        };
        if self.selection.iter().any(|selected| selected == dragged) {
            pinned
                .iter()
                .filter(|item| self.is_selected(&item.id))
                .map(|item| item.id.clone())
                .collect()
        } else {
            vec![dragged.clone()]
        }
    }
}

/// Computes the pinned order after dropping `dragged` onto `target`.
///
/// The target's index is taken in the pre-removal list; the dragged ids are
/// removed and re-inserted there as one contiguous block. Returns `None`
/// (no mutation) when the target is not in the list or nothing is dragged.
pub fn reorder_before(
    pinned: &[DockItem],
    dragged: &[AppId],
    target: &AppId,
) -> Option<Vec<DockItem>> {
    if dragged.is_empty() {
        return None;
    }
    let insert_index = pinned.iter().position(|item| item.id == *target)?;

    let mut remaining = Vec::with_capacity(pinned.len());
    let mut block = Vec::new();
    for item in pinned {
        if dragged.contains(&item.id) {
            block.push(item.clone());
        } else {
            remaining.push(item.clone());
        }
    }
    if block.is_empty() {
        return None;
    }

    let at = insert_index.min(remaining.len());
    remaining.splice(at..at, block);
    Some(remaining)
}

#[cfg(test)]
mod tests {
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

    fn list(ids: &[&str]) -> Vec<DockItem> {
        ids.iter().map(|id| item(id)).collect()
    }

    fn ids(items: &[DockItem]) -> Vec<String> {
        items.iter().map(|item| item.id.to_string()).collect()
    }

    #[test]
    fn dragging_first_onto_third_lands_behind_it() {
        let pinned = list(&["a", "b", "c", "d"]);
        let reordered =
            reorder_before(&pinned, &[AppId::from("a")], &AppId::from("c")).expect("reorder");
        assert_eq!(ids(&reordered), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn dragging_later_item_earlier_inserts_before_target() {
        let pinned = list(&["a", "b", "c", "d"]);
        let reordered =
            reorder_before(&pinned, &[AppId::from("d")], &AppId::from("b")).expect("reorder");
        assert_eq!(ids(&reordered), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn reorder_preserves_the_id_multiset() {
        let pinned = list(&["a", "b", "c", "d", "e"]);
        let reordered = reorder_before(
            &pinned,
            &[AppId::from("b"), AppId::from("e")],
            &AppId::from("a"),
        )
        .expect("reorder");

        let mut before = ids(&pinned);
        let mut after = ids(&reordered);
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(reordered.len(), pinned.len());
    }

    #[test]
    fn multi_selection_moves_as_a_contiguous_block_in_list_order() {
        let pinned = list(&["a", "b", "c", "d", "e"]);
        let mut drag = DragReorder::default();
        drag.toggle_selected(AppId::from("d"));
        drag.toggle_selected(AppId::from("a"));
        drag.begin(AppId::from("a"), 0);

        let block = drag.dragged_block(&pinned);
        assert_eq!(block, vec![AppId::from("a"), AppId::from("d")]);

        let reordered = reorder_before(&pinned, &block, &AppId::from("c")).expect("reorder");
        assert_eq!(ids(&reordered), vec!["b", "c", "a", "d", "e"]);
    }

    #[test]
    fn dragged_item_outside_selection_moves_alone() {
        let pinned = list(&["a", "b", "c"]);
        let mut drag = DragReorder::default();
        drag.toggle_selected(AppId::from("c"));
        drag.begin(AppId::from("a"), 0);

        assert_eq!(drag.dragged_block(&pinned), vec![AppId::from("a")]);
    }

    #[test]
    fn unknown_target_means_no_mutation() {
        let pinned = list(&["a", "b"]);
        assert_eq!(
            reorder_before(&pinned, &[AppId::from("a")], &AppId::from("missing")),
            None
        );
        assert_eq!(reorder_before(&pinned, &[], &AppId::from("a")), None);
    }

    #[test]
    fn dropping_onto_itself_changes_nothing() {
        let pinned = list(&["a", "b", "c"]);
        let reordered =
            reorder_before(&pinned, &[AppId::from("a")], &AppId::from("a")).expect("reorder");
        assert_eq!(ids(&reordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn reset_clears_gesture_state_but_not_selection() {
        let mut drag = DragReorder::default();
        drag.toggle_selected(AppId::from("a"));
        drag.begin(AppId::from("a"), 0);
        assert_eq!(drag.affordance(100), None);
        assert_eq!(drag.affordance(140), Some(DropAffordance::Below));

        drag.reset();
        assert!(!drag.is_dragging());
        assert_eq!(drag.dragged_index(), None);
        assert_eq!(drag.affordance(10), None);
        assert!(drag.is_selected(&AppId::from("a")));
    }

    #[test]
    fn affordance_compares_against_the_first_sample() {
        let mut drag = DragReorder::default();
        assert_eq!(drag.affordance(200), None);
        assert_eq!(drag.affordance(150), Some(DropAffordance::Above));
        assert_eq!(drag.affordance(260), Some(DropAffordance::Below));
    }
}
