// SPDX-License-Identifier: MPL-2.0
use super::messages;
use crate::config::FAVORITES_STORAGE_KEY;
use crate::notifications::NotificationSink;
use crate::storage::{DurableCell, Storage};
use std::fmt;
use std::sync::Arc;

/// Ordered, duplicate-free list of favorite team names.
///
/// Team names compare by exact string equality. New favorites are appended.
/// Every mutation is written through to storage; a failed write is logged
/// and the in-memory list stays authoritative for the session.
pub struct FavoritesStore {
    favorites: Vec<String>,
    cell: DurableCell<Vec<String>>,
    sink: Box<dyn NotificationSink>,
    loaded: bool,
}

impl FavoritesStore {
    /// Creates an empty store. Persisted favorites appear after [`load`](Self::load).
    pub fn new(storage: Arc<dyn Storage>, sink: Box<dyn NotificationSink>) -> Self {
        Self {
            favorites: Vec::new(),
            cell: DurableCell::new(storage, FAVORITES_STORAGE_KEY),
            sink,
            loaded: false,
        }
    }

    /// Replaces the in-memory list with the persisted one, if any.
    ///
    /// Runs at most once per store; returns `false` on later calls.
    /// Duplicates in the stored list are dropped, keeping first occurrences.
    pub fn load(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;

        if let Some(stored) = self.cell.read() {
            let mut favorites: Vec<String> = Vec::with_capacity(stored.len());
            for team in stored {
                if !favorites.contains(&team) {
                    favorites.push(team);
                }
            }
            self.favorites = favorites;
        }
        tracing::debug!(count = self.favorites.len(), "favorites store loaded");
        true
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_favorite(&self, team: &str) -> bool {
        self.favorites.iter().any(|favorite| favorite == team)
    }

    /// Appends `team`, or reports it as a duplicate without changing anything.
    pub fn add_favorite(&mut self, team: &str) {
        if self.is_favorite(team) {
            self.sink.notify(messages::duplicate(team));
            return;
        }

        self.favorites.push(team.to_string());
        self.persist();
        self.sink.notify(messages::added(team));
    }

    /// Removes `team` and reports it as removed.
    ///
    /// Persists and notifies even when `team` was not a favorite.
    pub fn remove_favorite(&mut self, team: &str) {
        self.favorites.retain(|favorite| favorite != team);
        self.persist();
        self.sink.notify(messages::removed(team));
    }

    /// Flips the membership of `team`.
    pub fn toggle_favorite(&mut self, team: &str) {
        if self.is_favorite(team) {
            self.remove_favorite(team);
        } else {
            self.add_favorite(team);
        }
    }

    /// Empties the list and persists it. Emits no notification.
    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.persist();
    }

    /// Returns the favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    fn persist(&self) {
        self.cell.write(&self.favorites);
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites)
            .field("cell", &self.cell)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::notifications::{NotificationRecorder, Severity};
    use crate::storage::MemoryStorage;

    fn store_over(storage: &Arc<MemoryStorage>) -> (FavoritesStore, NotificationRecorder) {
        let recorder = NotificationRecorder::new();
        let mut store = FavoritesStore::new(storage.clone(), Box::new(recorder.clone()));
        store.load();
        (store, recorder)
    }

    fn stored(storage: &MemoryStorage) -> Option<String> {
        storage.get_item(FAVORITES_STORAGE_KEY).unwrap()
    }

    #[test]
    fn starts_empty_without_stored_data() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, recorder) = store_over(&storage);

        assert!(store.is_empty());
        assert!(recorder.is_empty());
    }

    #[test]
    fn add_appends_persists_and_notifies() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, recorder) = store_over(&storage);

        store.add_favorite("Real Madrid");

        assert_eq!(store.favorites(), ["Real Madrid"]);
        assert_eq!(stored(&storage).as_deref(), Some("[\"Real Madrid\"]"));
        let notification = recorder.last().unwrap();
        assert_eq!(notification.title(), messages::ADDED_TITLE);
        assert_eq!(notification.severity(), Severity::Normal);
        assert!(notification.description().contains("Real Madrid"));
    }

    #[test]
    fn repeated_adds_keep_a_single_entry() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, recorder) = store_over(&storage);

        for _ in 0..5 {
            store.add_favorite("Ferencváros");
        }

        assert_eq!(store.favorites(), ["Ferencváros"]);
        let notifications = recorder.notifications();
        assert_eq!(notifications.len(), 5);
        assert!(notifications[1..]
            .iter()
            .all(|n| n.title() == messages::DUPLICATE_TITLE && n.severity() == Severity::Destructive));
    }

    #[test]
    fn duplicate_add_does_not_write() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, _recorder) = store_over(&storage);
        store.add_favorite("Real Madrid");
        storage.remove_item(FAVORITES_STORAGE_KEY).unwrap();

        store.add_favorite("Real Madrid");

        assert_eq!(stored(&storage), None);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, _recorder) = store_over(&storage);

        store.add_favorite("Újpest");
        store.add_favorite("Arsenal");
        store.add_favorite("Barcelona");

        assert_eq!(store.favorites(), ["Újpest", "Arsenal", "Barcelona"]);
    }

    #[test]
    fn names_compare_exactly() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, _recorder) = store_over(&storage);

        store.add_favorite("Real Madrid");
        store.add_favorite("real madrid");
        store.add_favorite("Real Madrid ");

        assert_eq!(store.len(), 3);
        assert!(store.is_favorite("Real Madrid"));
        assert!(!store.is_favorite("REAL MADRID"));
    }

    #[test]
    fn remove_deletes_persists_and_notifies() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, recorder) = store_over(&storage);
        store.add_favorite("Arsenal");
        store.add_favorite("Chelsea");

        store.remove_favorite("Arsenal");

        assert_eq!(store.favorites(), ["Chelsea"]);
        assert_eq!(stored(&storage).as_deref(), Some("[\"Chelsea\"]"));
        assert_eq!(recorder.last().unwrap().title(), messages::REMOVED_TITLE);
    }

    #[test]
    fn removing_a_non_favorite_still_persists_and_notifies() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, recorder) = store_over(&storage);
        store.add_favorite("Arsenal");
        storage.remove_item(FAVORITES_STORAGE_KEY).unwrap();
        recorder.drain();

        store.remove_favorite("Y");

        assert_eq!(store.favorites(), ["Arsenal"]);
        assert_eq!(stored(&storage).as_deref(), Some("[\"Arsenal\"]"));
        let notifications = recorder.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title(), messages::REMOVED_TITLE);
        assert_eq!(notifications[0].severity(), Severity::Normal);
    }

    #[test]
    fn toggle_twice_restores_the_original_list() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, recorder) = store_over(&storage);
        store.add_favorite("Arsenal");
        store.add_favorite("Chelsea");
        let before = store.favorites().to_vec();
        recorder.drain();

        store.toggle_favorite("Liverpool");
        assert!(store.is_favorite("Liverpool"));
        store.toggle_favorite("Liverpool");

        assert!(!store.is_favorite("Liverpool"));
        assert_eq!(store.favorites(), before.as_slice());
        let titles: Vec<String> = recorder
            .notifications()
            .iter()
            .map(|n| n.title().to_string())
            .collect();
        assert_eq!(titles, [messages::ADDED_TITLE, messages::REMOVED_TITLE]);
    }

    #[test]
    fn clear_empties_persists_and_stays_silent() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut store, recorder) = store_over(&storage);
        store.add_favorite("Arsenal");
        recorder.drain();

        store.clear_favorites();

        assert!(store.is_empty());
        assert_eq!(stored(&storage).as_deref(), Some("[]"));
        assert!(recorder.is_empty());
    }

    #[test]
    fn favorites_survive_reinitialization() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let (mut store, _recorder) = store_over(&storage);
            store.add_favorite("Debrecen");
            store.add_favorite("Paks");
        }

        let (reopened, _recorder) = store_over(&storage);
        assert_eq!(reopened.favorites(), ["Debrecen", "Paks"]);
    }

    #[test]
    fn reads_before_load_observe_an_empty_list() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item(FAVORITES_STORAGE_KEY, "[\"Debrecen\"]")
            .unwrap();

        let mut store = FavoritesStore::new(storage.clone(), Box::new(NotificationRecorder::new()));
        assert!(!store.is_loaded());
        assert!(!store.is_favorite("Debrecen"));

        assert!(store.load());
        assert!(store.is_favorite("Debrecen"));
        assert!(!store.load());
    }

    #[test]
    fn malformed_storage_yields_empty_list() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(FAVORITES_STORAGE_KEY, "{oops").unwrap();

        let (store, _recorder) = store_over(&storage);
        assert!(store.is_empty());
    }

    #[test]
    fn stored_duplicates_are_dropped_on_load() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item(FAVORITES_STORAGE_KEY, "[\"Paks\",\"Győr\",\"Paks\"]")
            .unwrap();

        let (store, _recorder) = store_over(&storage);
        assert_eq!(store.favorites(), ["Paks", "Győr"]);
    }

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn failed_writes_keep_in_memory_state() {
        let recorder = NotificationRecorder::new();
        let mut store = FavoritesStore::new(Arc::new(ReadOnlyStorage), Box::new(recorder.clone()));
        store.load();

        store.add_favorite("Real Madrid");

        assert_eq!(store.favorites(), ["Real Madrid"]);
        assert_eq!(recorder.last().unwrap().title(), messages::ADDED_TITLE);
    }
}
