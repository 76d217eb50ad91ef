use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::calc::{calculate, Division, MARK_COUNT};
use crate::validate::ValidInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index out of range")]
    IndexOutOfRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub marks: [i64; MARK_COUNT],
    pub percentage: f64,
    pub division: Division,
}

impl StudentRecord {
    /// The only constructor: percentage and division are always derived from
    /// the marks, so a stored record cannot disagree with them.
    pub fn new(input: ValidInput) -> Self {
        let result = calculate(&input.marks);
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            age: input.age,
            marks: input.marks,
            percentage: result.percentage,
            division: result.division,
        }
    }
}

/// Ordered in-memory record list. Position is the store's internal ordering;
/// the stable `id` on each record is what crosses the protocol boundary.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// Wholesale replace at `index`, keeping the position and the existing
    /// record's id.
    pub fn replace_at(&mut self, index: usize, record: StudentRecord) -> Result<(), StoreError> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange)?;
        let id = std::mem::take(&mut slot.id);
        *slot = record;
        slot.id = id;
        Ok(())
    }

    /// Removes the record at `index`; later entries shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<StudentRecord, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange);
        }
        Ok(self.records.remove(index))
    }

    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Current position of the record with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, marks: [i64; MARK_COUNT]) -> StudentRecord {
        StudentRecord::new(ValidInput {
            name: name.to_string(),
            age: 20,
            marks,
        })
    }

    #[test]
    fn new_record_derives_score() {
        let r = record("Alice", [80, 70, 90, 60, 50]);
        assert_eq!(r.percentage, 70.0);
        assert_eq!(r.division, Division::First);
        assert!(!r.id.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let a = record("Jane", [50, 50, 50, 50, 50]);
        let b = record("Jane", [50, 50, 50, 50, 50]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn replace_keeps_length_position_and_id() {
        let mut store = RecordStore::default();
        store.append(record("Jane", [50, 50, 50, 50, 50]));
        store.append(record("John", [60, 60, 60, 60, 60]));
        let original_id = store.all()[1].id.clone();

        store
            .replace_at(1, record("John Smith", [90, 90, 90, 90, 90]))
            .expect("replace in range");

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "Jane");
        let replaced = &store.all()[1];
        assert_eq!(replaced.name, "John Smith");
        assert_eq!(replaced.marks, [90, 90, 90, 90, 90]);
        assert_eq!(replaced.id, original_id);
    }

    #[test]
    fn replace_out_of_range() {
        let mut store = RecordStore::default();
        assert_eq!(
            store.replace_at(0, record("Jane", [50, 50, 50, 50, 50])),
            Err(StoreError::IndexOutOfRange)
        );
    }

    #[test]
    fn remove_shifts_later_entries() {
        let mut store = RecordStore::default();
        for name in ["A", "B", "C"] {
            store.append(record(name, [40, 40, 40, 40, 40]));
        }

        let removed = store.remove_at(1).expect("remove in range");
        assert_eq!(removed.name, "B");
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "A");
        assert_eq!(store.all()[1].name, "C");

        assert_eq!(store.remove_at(2), Err(StoreError::IndexOutOfRange));
    }

    #[test]
    fn index_of_tracks_shifts() {
        let mut store = RecordStore::default();
        for name in ["A", "B", "C"] {
            store.append(record(name, [40, 40, 40, 40, 40]));
        }
        let c_id = store.all()[2].id.clone();
        assert_eq!(store.index_of(&c_id), Some(2));

        store.remove_at(0).expect("remove in range");
        assert_eq!(store.index_of(&c_id), Some(1));
        assert_eq!(store.index_of("missing"), None);
    }

    #[test]
    fn duplicate_names_allowed() {
        let mut store = RecordStore::default();
        store.append(record("Jane", [50, 50, 50, 50, 50]));
        store.append(record("Jane", [60, 60, 60, 60, 60]));
        assert_eq!(store.len(), 2);
    }
}
