use serde_json::json;
use thiserror::Error;

use crate::calc::{self, Division, ScoreResult, MARK_COUNT};
use crate::query;
use crate::store::{RecordStore, StoreError, StudentRecord};
use crate::validate::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
}

impl Field {
    pub fn from_name(s: &str) -> Option<Field> {
        match s {
            "name" => Some(Field::Name),
            "age" => Some(Field::Age),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("edit target no longer exists")]
    EditTargetGone,
}

/// The form session: raw field text as typed, the edit target (record id, if
/// an edit is in progress), the last validation error, the live preview, and
/// the current search/division filter. All mutation goes through the handler
/// methods below; the store itself is passed in per call.
#[derive(Debug, Default)]
pub struct FormSession {
    name: String,
    age: String,
    marks: [String; MARK_COUNT],
    edit_target: Option<String>,
    error: Option<ValidationError>,
    preview: Option<ScoreResult>,
    name_query: String,
    division_filter: Option<Division>,
}

impl FormSession {
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Age => self.age = value.to_string(),
        }
    }

    /// Updates one mark slot and synchronously recomputes the live preview:
    /// present only while all five slots hold in-range numbers.
    /// Callers guarantee `slot < MARK_COUNT`.
    pub fn set_mark(&mut self, slot: usize, value: &str) {
        self.marks[slot] = value.to_string();
        self.preview = calc::preview(&self.marks);
    }

    /// Validates the current fields and commits them: appends a new record
    /// when no edit is in progress, otherwise replaces the edit target in
    /// place. On success the fields, preview, error, and edit target are all
    /// reset; on failure everything is kept and the error recorded.
    pub fn submit(&mut self, store: &mut RecordStore) -> Result<(), SubmitError> {
        self.error = None;
        let input = match validate::validate(&self.name, &self.age, &self.marks) {
            Ok(v) => v,
            Err(e) => {
                self.error = Some(e);
                return Err(e.into());
            }
        };

        match self.edit_target.take() {
            Some(id) => {
                let Some(index) = store.index_of(&id) else {
                    // Unreachable through the protocol: delete() clears the
                    // edit target when its record goes away.
                    return Err(SubmitError::EditTargetGone);
                };
                let replace = store.replace_at(index, StudentRecord::new(input));
                debug_assert!(replace.is_ok());
            }
            None => store.append(StudentRecord::new(input)),
        }

        self.reset_fields();
        Ok(())
    }

    /// Loads a record's fields back into the form and marks it as the edit
    /// target. The preview reflects its current marks immediately.
    pub fn start_edit(&mut self, id: &str, store: &RecordStore) -> Result<(), StoreError> {
        let record = store.get(id).ok_or(StoreError::IndexOutOfRange)?;
        self.name = record.name.clone();
        self.age = record.age.to_string();
        for (slot, mark) in record.marks.iter().enumerate() {
            self.marks[slot] = mark.to_string();
        }
        self.preview = Some(calc::calculate(&record.marks));
        self.error = None;
        self.edit_target = Some(record.id.clone());
        Ok(())
    }

    /// Removes a record. Deleting the record currently under edit drops the
    /// edit target, returning the form to plain entry mode with the typed
    /// field text kept.
    pub fn delete(&mut self, id: &str, store: &mut RecordStore) -> Result<StudentRecord, StoreError> {
        let index = store.index_of(id).ok_or(StoreError::IndexOutOfRange)?;
        let removed = store.remove_at(index)?;
        if self.edit_target.as_deref() == Some(id) {
            self.edit_target = None;
        }
        Ok(removed)
    }

    /// Discards the form contents and any edit target. The store and the
    /// search/division filter are untouched.
    pub fn clear(&mut self) {
        self.reset_fields();
    }

    pub fn set_name_query(&mut self, text: &str) {
        self.name_query = text.to_string();
    }

    pub fn set_division_filter(&mut self, division: Option<Division>) {
        self.division_filter = division;
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn preview(&self) -> Option<ScoreResult> {
        self.preview
    }

    /// The record list as currently displayed: the store filtered by the
    /// session's search text and division constraint, original order kept.
    pub fn filtered<'a>(&self, store: &'a RecordStore) -> Vec<&'a StudentRecord> {
        query::filter(store.all(), &self.name_query, self.division_filter)
    }

    /// The complete outbound state for the presentation layer.
    pub fn view(&self, store: &RecordStore) -> serde_json::Value {
        json!({
            "form": {
                "name": self.name,
                "age": self.age,
                "marks": self.marks,
            },
            "editTarget": self.edit_target,
            "error": self.error.map(|e| e.to_string()),
            "preview": self.preview,
            "filter": {
                "nameQuery": self.name_query,
                "division": self.division_filter.map(|d| d.label()),
            },
            "records": self.filtered(store),
        })
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.age.clear();
        self.marks = Default::default();
        self.edit_target = None;
        self.error = None;
        self.preview = None;
    }
}
