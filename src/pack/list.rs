//! Priority-ordered pack list with change notification

use std::path::Path;

use crate::error::{Error, Result};

use super::types::{Pack, PackId};

/// A change to the pack list, delivered to subscribed observers after the
/// mutation has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange {
    /// A pack was added at the top of the list.
    Added(PackId),
    /// A pack was removed.
    Removed(PackId),
    /// The list order changed (move up/down or drag reorder).
    Reordered,
}

/// Observer callback invoked after each successful list mutation.
type ListObserver = Box<dyn Fn(&ListChange) + Send + Sync>;

/// The ordered collection of loaded packs.
///
/// Index 0 is the highest priority. New packs are inserted at the top, so
/// the most recently added pack wins conflicts by default. Mutations with
/// unknown ids are silent no-ops; only reading file bytes can fail.
#[derive(Default)]
pub struct PackList {
    packs: Vec<Pack>,
    observers: Vec<ListObserver>,
}

impl PackList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for list changes.
    ///
    /// Observers fire after the mutation is applied, so a callback that
    /// reads the list sees the new state.
    pub fn subscribe(&mut self, observer: impl Fn(&ListChange) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self, change: &ListChange) {
        for observer in &self.observers {
            observer(change);
        }
    }

    /// Add a pack from raw archive bytes, at the top of the list.
    pub fn add_bytes(&mut self, name: impl Into<String>, data: Vec<u8>) -> PackId {
        let pack = Pack::new(name, data);
        let id = pack.id();
        self.packs.insert(0, pack);
        tracing::debug!("added pack '{}' at top of list", self.packs[0].name());
        self.notify(&ListChange::Added(id));
        id
    }

    /// Add a pack by reading a file from disk, at the top of the list.
    ///
    /// The display name is the file name portion of `path`. The caller is
    /// responsible for checking the extension first (see
    /// [`is_resource_pack_name`](super::is_resource_pack_name)).
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<PackId> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let data = std::fs::read(path).map_err(|source| Error::ReadPack {
            name: name.clone(),
            source,
        })?;
        Ok(self.add_bytes(name, data))
    }

    /// Remove the pack with the given id. No-op if absent.
    pub fn remove(&mut self, id: PackId) {
        if let Some(index) = self.position(id) {
            let pack = self.packs.remove(index);
            tracing::debug!("removed pack '{}'", pack.name());
            self.notify(&ListChange::Removed(id));
        }
    }

    /// Swap the pack with its upper neighbor (higher priority). No-op for
    /// the first element or an unknown id.
    pub fn move_up(&mut self, id: PackId) {
        if let Some(index) = self.position(id)
            && index > 0
        {
            self.packs.swap(index - 1, index);
            self.notify(&ListChange::Reordered);
        }
    }

    /// Swap the pack with its lower neighbor (lower priority). No-op for
    /// the last element or an unknown id.
    pub fn move_down(&mut self, id: PackId) {
        if let Some(index) = self.position(id)
            && index + 1 < self.packs.len()
        {
            self.packs.swap(index, index + 1);
            self.notify(&ListChange::Reordered);
        }
    }

    /// Move the `from` pack to the position the `to` pack occupied before
    /// the move, shifting everything in between. No-op if either id is
    /// unknown.
    ///
    /// This models drag-and-drop repositioning: the target index is
    /// captured before `from` is taken out of the list, so dragging
    /// downward lands the pack just below the target and dragging upward
    /// lands it just above.
    pub fn reorder(&mut self, from: PackId, to: PackId) {
        if from == to {
            return;
        }
        let (Some(from_index), Some(to_index)) = (self.position(from), self.position(to)) else {
            return;
        };
        let moved = self.packs.remove(from_index);
        let insert_at = to_index.min(self.packs.len());
        self.packs.insert(insert_at, moved);
        self.notify(&ListChange::Reordered);
    }

    /// Read-only view of the list in priority order (index 0 wins).
    #[must_use]
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Owned snapshot of the current order, for building a merge request.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Pack> {
        self.packs.clone()
    }

    /// Number of loaded packs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Look up a pack by id.
    #[must_use]
    pub fn get(&self, id: PackId) -> Option<&Pack> {
        self.position(id).map(|index| &self.packs[index])
    }

    /// Index of a pack in the list, if present.
    #[must_use]
    pub fn position(&self, id: PackId) -> Option<usize> {
        self.packs.iter().position(|p| p.id() == id)
    }

    /// Whether the pack can move toward higher priority (rendering flag).
    #[must_use]
    pub fn can_move_up(&self, id: PackId) -> bool {
        self.position(id).is_some_and(|index| index > 0)
    }

    /// Whether the pack can move toward lower priority (rendering flag).
    #[must_use]
    pub fn can_move_down(&self, id: PackId) -> bool {
        self.position(id)
            .is_some_and(|index| index + 1 < self.packs.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    fn list_with(names: &[&str]) -> (PackList, Vec<PackId>) {
        let mut list = PackList::new();
        // add_bytes inserts at the top, so add in reverse to make
        // names[0] the highest priority.
        let mut ids: Vec<PackId> = names
            .iter()
            .rev()
            .map(|name| list.add_bytes(*name, vec![0]))
            .collect();
        ids.reverse();
        (list, ids)
    }

    fn names(list: &PackList) -> Vec<&str> {
        list.packs().iter().map(Pack::name).collect()
    }

    #[test]
    fn test_add_inserts_at_top() {
        let mut list = PackList::new();
        list.add_bytes("first.zip", vec![1]);
        list.add_bytes("second.zip", vec![2]);
        assert_eq!(names(&list), vec!["second.zip", "first.zip"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (mut list, ids) = list_with(&["a.zip", "b.zip"]);
        list.remove(ids[0]);
        list.remove(ids[0]);
        assert_eq!(names(&list), vec!["b.zip"]);
    }

    #[test]
    fn test_move_up_boundary_is_noop() {
        let (mut list, ids) = list_with(&["a.zip", "b.zip", "c.zip"]);
        list.move_up(ids[0]);
        assert_eq!(names(&list), vec!["a.zip", "b.zip", "c.zip"]);
        list.move_up(ids[1]);
        assert_eq!(names(&list), vec!["b.zip", "a.zip", "c.zip"]);
    }

    #[test]
    fn test_move_down_boundary_is_noop() {
        let (mut list, ids) = list_with(&["a.zip", "b.zip", "c.zip"]);
        list.move_down(ids[2]);
        assert_eq!(names(&list), vec!["a.zip", "b.zip", "c.zip"]);
        list.move_down(ids[0]);
        assert_eq!(names(&list), vec!["b.zip", "a.zip", "c.zip"]);
    }

    #[test]
    fn test_reorder_upward_lands_before_target() {
        let (mut list, ids) = list_with(&["a.zip", "b.zip", "c.zip", "d.zip"]);
        list.reorder(ids[2], ids[0]);
        assert_eq!(names(&list), vec!["c.zip", "a.zip", "b.zip", "d.zip"]);
    }

    #[test]
    fn test_reorder_downward_lands_at_target_position() {
        let (mut list, ids) = list_with(&["a.zip", "b.zip", "c.zip", "d.zip"]);
        list.reorder(ids[0], ids[2]);
        assert_eq!(names(&list), vec!["b.zip", "c.zip", "a.zip", "d.zip"]);
    }

    #[test]
    fn test_reorder_unknown_id_is_noop() {
        let (mut list, ids) = list_with(&["a.zip", "b.zip"]);
        let (mut other, other_ids) = list_with(&["x.zip"]);
        list.reorder(other_ids[0], ids[1]);
        list.reorder(ids[0], other_ids[0]);
        other.remove(other_ids[0]);
        assert_eq!(names(&list), vec!["a.zip", "b.zip"]);
    }

    #[test]
    fn test_movable_flags() {
        let (list, ids) = list_with(&["a.zip", "b.zip", "c.zip"]);
        assert!(!list.can_move_up(ids[0]));
        assert!(list.can_move_down(ids[0]));
        assert!(list.can_move_up(ids[1]));
        assert!(list.can_move_down(ids[1]));
        assert!(list.can_move_up(ids[2]));
        assert!(!list.can_move_down(ids[2]));
    }

    #[test]
    fn test_observer_sees_mutations() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);

        let mut list = PackList::new();
        list.subscribe(move |_change| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let a = list.add_bytes("a.zip", vec![1]);
        let b = list.add_bytes("b.zip", vec![2]);
        list.move_up(a);
        list.reorder(a, b);
        list.remove(b);
        assert_eq!(counter.load(Ordering::SeqCst), 5);

        // Boundary no-ops do not notify.
        list.move_up(a);
        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_add_file_missing_path_names_file() {
        let mut list = PackList::new();
        let err = list.add_file("does_not_exist.zip").unwrap_err();
        assert!(matches!(err, Error::ReadPack { ref name, .. } if name == "does_not_exist.zip"));
        assert!(list.is_empty());
    }
}
