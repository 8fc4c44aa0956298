//! Generic in-memory record store shared by the listing screens.
//!
//! Each page view owns one store per entity kind for the lifetime of
//! the session. The store keeps insertion order; filtering derives a
//! read-only subset and never mutates the underlying collection.

use crate::error::StoreError;

/// A record that can live in a [`RecordStore`].
pub trait Record {
    /// Stable identifier, unique within its collection.
    fn id(&self) -> &str;

    /// Whether this record matches a search needle.
    ///
    /// `needle` is already lowercased and non-empty; implementations
    /// check substring containment against their searchable fields.
    fn matches(&self, needle: &str) -> bool;
}

/// Ordered in-memory collection of one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed rows, keeping their order.
    ///
    /// Rows whose id duplicates an earlier row are dropped, so the
    /// uniqueness invariant holds from the start.
    pub fn seeded(rows: Vec<R>) -> Self {
        let mut store = Self::new();
        for row in rows {
            // Seed data is trusted; a duplicate here is a programming
            // mistake and the first occurrence wins.
            let _ = store.add(row);
        }
        store
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append a record, rejecting a duplicate id and leaving the
    /// store unchanged on rejection.
    pub fn add(&mut self, record: R) -> Result<(), StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove exactly the record with `id`.
    ///
    /// Returns the removed record, or `None` when no record matches;
    /// deletes are idempotent and an absent id leaves the store
    /// untouched.
    pub fn remove(&mut self, id: &str) -> Option<R> {
        let idx = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(idx))
    }

    /// Derive the visible subset for a search query.
    ///
    /// Matching is case-insensitive substring containment against the
    /// record's searchable fields. An empty query returns every record
    /// in original order.
    pub fn filter(&self, query: &str) -> Vec<&R> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        self.records.iter().filter(|r| r.matches(&needle)).collect()
    }

    /// Next free id under the numeric id scheme used by the screens.
    ///
    /// Non-numeric ids are ignored; an empty store starts at "1".
    pub fn next_id(&self) -> String {
        let max = self
            .records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pet {
        id: String,
        name: String,
    }

    impl Pet {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl Record for Pet {
        fn id(&self) -> &str {
            &self.id
        }

        fn matches(&self, needle: &str) -> bool {
            self.name.to_lowercase().contains(needle)
        }
    }

    fn store() -> RecordStore<Pet> {
        RecordStore::seeded(vec![
            Pet::new("1", "Firulais"),
            Pet::new("2", "Michi"),
            Pet::new("3", "Rocky"),
        ])
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let store = store();
        let visible = store.filter("");

        assert_eq!(visible.len(), 3);
        let ids: Vec<&str> = visible.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let store = store();

        let visible = store.filter("ROCK");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");
    }

    #[test]
    fn test_filter_excludes_non_matches() {
        let store = store();
        let visible = store.filter("mich");

        assert!(visible.iter().all(|p| p.name.to_lowercase().contains("mich")));
        assert!(!visible.iter().any(|p| p.id == "1"));
        assert!(!visible.iter().any(|p| p.id == "3"));
    }

    #[test]
    fn test_filter_does_not_mutate_store() {
        let store = store();
        let before = store.clone();

        let _ = store.filter("firu");
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let mut store = store();
        let before = store.clone();

        store.add(Pet::new("4", "Nala")).unwrap();
        assert_eq!(store.len(), 4);

        let removed = store.remove("4");
        assert_eq!(removed, Some(Pet::new("4", "Nala")));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = store();
        let before = store.clone();

        assert_eq!(store.remove("99"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        let mut store = store();
        let before = store.clone();

        let err = store.add(Pet::new("2", "Otro")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("2".to_string()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_seeded_drops_duplicate_rows() {
        let store = RecordStore::seeded(vec![
            Pet::new("1", "Firulais"),
            Pet::new("1", "Impostor"),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").map(|p| p.name.as_str()), Some("Firulais"));
    }

    #[test]
    fn test_next_id_skips_past_max() {
        let store = store();
        assert_eq!(store.next_id(), "4");

        let empty: RecordStore<Pet> = RecordStore::new();
        assert_eq!(empty.next_id(), "1");
    }

    #[test]
    fn test_next_id_ignores_non_numeric_ids() {
        let store = RecordStore::seeded(vec![Pet::new("abc", "Firulais"), Pet::new("2", "Michi")]);
        assert_eq!(store.next_id(), "3");
    }

    #[test]
    fn test_get_and_contains() {
        let store = store();

        assert!(store.contains("2"));
        assert!(!store.contains("42"));
        assert_eq!(store.get("2").map(|p| p.name.as_str()), Some("Michi"));
    }
}
