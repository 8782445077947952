//! The prompt library: save, list and delete over a durable slot.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use tracing::{debug, info};

use crate::core::storage::{LibrarySlot, PromptEntry};
use crate::core::utils::next_id;

use super::error::{StoreError, ValidationError};

/// Fields supplied by the user when saving a prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub prompt: String,
    pub model: Option<String>,
}

/// The main entry point for the local prompt library.
///
/// Every mutation reads the whole collection from the slot, changes it in
/// memory and writes the whole collection back. Mutations through one store
/// are serialized by an internal writer lock; two stores (or two processes)
/// sharing a slot are last-writer-wins.
pub struct PromptLibraryStore {
    slot: Box<dyn LibrarySlot>,
    writer: Mutex<()>,
}

impl PromptLibraryStore {
    pub fn new(slot: impl LibrarySlot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
            writer: Mutex::new(()),
        }
    }

    /// Saves a new prompt stamped with the current time.
    pub fn save(&self, entry: NewEntry) -> Result<PromptEntry, StoreError> {
        self.save_at(entry, Utc::now())
    }

    /// Saves a new prompt stamped with `now`.
    ///
    /// Fails with a validation error, before touching the slot, when the
    /// trimmed name is empty.
    pub fn save_at(&self, entry: NewEntry, now: DateTime<Utc>) -> Result<PromptEntry, StoreError> {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(ValidationError::new("Please provide a name for your prompt").into());
        }

        let _guard = self.writer.lock().map_err(|_| StoreError::Lock)?;
        let mut library = self.slot.load()?;

        let now_millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id =
            next_id(library.iter().map(|e| e.id), now_millis).ok_or(StoreError::IdsExhausted)?;
        let created = PromptEntry {
            id,
            name: name.to_string(),
            description: entry.description.trim().to_string(),
            tags: entry
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            prompt: entry.prompt.trim().to_string(),
            model: entry
                .model
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            created_at: now,
        };

        library.push(created.clone());
        self.slot.store(&library)?;
        info!(id = created.id, name = %created.name, "prompt saved");
        Ok(created)
    }

    /// Returns every entry, newest first.
    pub fn list(&self) -> Result<Vec<PromptEntry>, StoreError> {
        let mut library = self.slot.load()?;
        library.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(library)
    }

    /// Looks up a single entry by ID.
    pub fn get(&self, id: u64) -> Result<PromptEntry, StoreError> {
        self.slot
            .load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Removes the entry with `id`. Returns `false`, without writing, if there is none.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let _guard = self.writer.lock().map_err(|_| StoreError::Lock)?;
        let mut library = self.slot.load()?;
        let before = library.len();
        library.retain(|e| e.id != id);
        if library.len() == before {
            debug!(id, "delete of unknown prompt ignored");
            return Ok(false);
        }

        self.slot.store(&library)?;
        info!(id, "prompt deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{FileSlot, MemorySlot};
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;

    fn new_entry(name: &str) -> NewEntry {
        NewEntry {
            name: name.to_string(),
            description: "  short description ".to_string(),
            tags: vec![" Marketing ".to_string(), "".to_string(), "copy".to_string()],
            prompt: " Write a tagline for a fitness app ".to_string(),
            model: Some("claude".to_string()),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn save_then_list_adds_one_trimmed_entry() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        store.save_at(new_entry("First"), t0()).unwrap();

        let saved = store.save_at(new_entry("  Second  "), t0() + Duration::seconds(1)).unwrap();
        let listed = store.list().unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], saved);
        assert_eq!(saved.name, "Second");
        assert_eq!(saved.description, "short description");
        assert_eq!(saved.tags, vec!["Marketing", "copy"]);
        assert_eq!(saved.prompt, "Write a tagline for a fitness app");
        assert_eq!(saved.model.as_deref(), Some("claude"));
        assert_eq!(saved.created_at, t0() + Duration::seconds(1));
    }

    #[test]
    fn save_rejects_blank_name_without_writing() {
        let slot = Arc::new(MemorySlot::new());
        let store = PromptLibraryStore::new(slot.clone());

        let err = store.save_at(new_entry("   "), t0()).unwrap_err();
        match err {
            StoreError::Validation(v) => {
                assert_eq!(v.message(), "Please provide a name for your prompt")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(slot.raw().is_none());
    }

    #[test]
    fn saves_in_same_tick_get_distinct_ids() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        let a = store.save_at(new_entry("a"), t0()).unwrap();
        let b = store.save_at(new_entry("b"), t0()).unwrap();
        let c = store.save_at(new_entry("c"), t0()).unwrap();

        assert_eq!(a.id, t0().timestamp_millis() as u64);
        assert_eq!(b.id, a.id + 1);
        assert_eq!(c.id, a.id + 2);
    }

    #[test]
    fn save_fails_cleanly_when_ids_are_exhausted() {
        let raw = format!(
            r#"[{{"id":{},"name":"last","prompt":"p","date":"2024-03-01T09:30:00Z"}}]"#,
            u64::MAX
        );
        let slot = Arc::new(MemorySlot::with_raw(raw.clone()));
        let store = PromptLibraryStore::new(slot.clone());

        let err = store.save_at(new_entry("one more"), t0()).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));
        assert_eq!(slot.raw(), Some(raw));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn list_is_newest_first_for_any_insertion_order() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        for offset in [5, 1, 9, 3] {
            store
                .save_at(new_entry(&format!("p{offset}")), t0() + Duration::minutes(offset))
                .unwrap();
        }

        let names: Vec<_> = store.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["p9", "p5", "p3", "p1"]);
    }

    #[test]
    fn list_breaks_timestamp_ties_by_newest_id() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        store.save_at(new_entry("older"), t0()).unwrap();
        store.save_at(new_entry("newer"), t0()).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        store.save_at(new_entry("keep"), t0()).unwrap();

        assert!(!store.delete(12345).unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn delete_existing_id_removes_exactly_one() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        let a = store.save_at(new_entry("a"), t0()).unwrap();
        let b = store.save_at(new_entry("b"), t0() + Duration::seconds(1)).unwrap();

        assert!(store.delete(a.id).unwrap());

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![b]);
        assert!(matches!(store.get(a.id), Err(StoreError::NotFound(id)) if id == a.id));
    }

    #[test]
    fn blank_model_is_stored_as_absent() {
        let store = PromptLibraryStore::new(MemorySlot::new());
        let mut entry = new_entry("no model");
        entry.model = Some("  ".to_string());
        assert_eq!(store.save_at(entry, t0()).unwrap().model, None);
    }

    #[test]
    fn file_backed_store_persists_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("library.json");

        let saved = PromptLibraryStore::new(FileSlot::new(&path))
            .save_at(new_entry("persisted"), t0())
            .unwrap();

        let reopened = PromptLibraryStore::new(FileSlot::new(&path));
        assert_eq!(reopened.get(saved.id).unwrap(), saved);
    }

    #[test]
    fn corrupt_slot_surfaces_error_and_is_left_untouched() {
        let slot = Arc::new(MemorySlot::with_raw("{\"broken\":"));
        let store = PromptLibraryStore::new(slot.clone());

        assert!(matches!(store.list(), Err(StoreError::Json(_))));
        assert!(store.save_at(new_entry("x"), t0()).is_err());
        assert_eq!(slot.raw().as_deref(), Some("{\"broken\":"));
    }

    #[test]
    fn concurrent_saves_through_one_store_lose_nothing() {
        let store = Arc::new(PromptLibraryStore::new(MemorySlot::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.save_at(new_entry(&format!("t{i}")), t0()).unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 8);
        let mut ids: Vec<_> = listed.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
