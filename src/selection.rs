//! Row Selection
//!
//! Checkbox selection for the inventory table's batch actions.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: u32) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Header checkbox: clear when every visible row is selected,
    /// otherwise select exactly the visible rows.
    pub fn toggle_all(&mut self, visible: &[u32]) {
        if self.is_all_selected(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().copied().collect();
        }
    }

    /// True only for a non-empty visible set that is fully selected
    pub fn is_all_selected(&self, visible: &[u32]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

/// Inventory batch action offered when rows are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchAction {
    Restock,
    AddToShoppingList,
    Delete,
}

impl BatchAction {
    /// Toast text for `count` affected rows
    pub fn message(&self, count: usize) -> String {
        match self {
            BatchAction::Restock => format!("{} items restocked", count),
            BatchAction::AddToShoppingList => format!("{} items added to shopping list", count),
            BatchAction::Delete => format!("{} items deleted", count),
        }
    }
}

/// Run a batch action over the selection. Returns the toast text, or `None`
/// when nothing is selected. The selection is cleared afterwards.
pub fn run_batch(selection: &mut Selection, action: BatchAction) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let message = action.message(selection.len());
    tracing::debug!(?action, ids = ?selection.ids().collect::<Vec<_>>(), "batch action");
    selection.clear();
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut selection = Selection::new();
        selection.toggle(3);
        let before = selection.clone();
        for id in [1, 3, 7] {
            selection.toggle(id);
            selection.toggle(id);
            assert_eq!(selection, before);
        }
    }

    #[test]
    fn select_all_twice_clears() {
        let visible = [1, 2, 4];
        let mut selection = Selection::new();
        selection.toggle(2);
        selection.toggle_all(&visible);
        assert!(selection.is_all_selected(&visible));
        assert_eq!(selection.len(), 3);
        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_replaces_hidden_selection() {
        let mut selection = Selection::new();
        selection.toggle(9);
        selection.toggle_all(&[1, 2]);
        assert!(!selection.contains(9));
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn empty_visible_set_is_never_all_selected() {
        let mut selection = Selection::new();
        assert!(!selection.is_all_selected(&[]));
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn batch_reports_count_and_clears() {
        let mut selection = Selection::new();
        assert_eq!(run_batch(&mut selection, BatchAction::Delete), None);
        selection.toggle(1);
        selection.toggle(2);
        assert_eq!(
            run_batch(&mut selection, BatchAction::Restock).as_deref(),
            Some("2 items restocked")
        );
        assert!(selection.is_empty());
    }
}
