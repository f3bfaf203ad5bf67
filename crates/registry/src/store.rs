//! In-memory ordered record store for one entity kind.
//!
//! Mirrors the list/create/update/delete surface a backend client would
//! expose, so swapping the store for an API client keeps call sites intact.

use shared_types::AppError;
use std::collections::HashSet;
use validator::Validate;

/// A record kind the registry can manage.
pub trait Entity: Clone + Validate {
    /// Human-readable kind used in logs and error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Shallow-merge an edited draft over this record.
    ///
    /// Every field is taken from `draft` except the id. Kinds with audit
    /// fields override this to keep them.
    fn merge(&mut self, draft: Self) {
        let id = self.id().to_string();
        *self = draft;
        self.set_id(id);
    }
}

/// Source of fresh record identifiers.
pub trait IdAuthority {
    fn issue(&mut self) -> String;
}

/// Issues random UUID v4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAuthority;

impl IdAuthority for UuidAuthority {
    fn issue(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// How many times `create` redraws an id that collides before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Ordered collection of records of one kind with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store from fixture data, rejecting duplicate or empty ids.
    pub fn seeded(records: Vec<T>) -> Result<Self, AppError> {
        let mut store = Self::new();
        store.replace_all(records)?;
        Ok(store)
    }

    /// Replace the whole collection. On error the store is left unchanged.
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<(), AppError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id().is_empty() {
                return Err(AppError::bad_request(format!(
                    "{} record is missing an id",
                    T::KIND
                )));
            }
            if !seen.insert(record.id().to_string()) {
                return Err(AppError::conflict(format!(
                    "Duplicate {} id {}",
                    T::KIND,
                    record.id()
                )));
            }
        }
        self.records = records;
        tracing::debug!(kind = T::KIND, count = self.records.len(), "store replaced");
        Ok(())
    }

    /// Append a record that already carries its id.
    pub fn append(&mut self, record: T) -> Result<(), AppError> {
        if record.id().is_empty() {
            return Err(AppError::bad_request(format!(
                "{} record is missing an id",
                T::KIND
            )));
        }
        if self.contains(record.id()) {
            tracing::warn!(kind = T::KIND, id = record.id(), "duplicate id rejected");
            return Err(AppError::conflict(format!(
                "Duplicate {} id {}",
                T::KIND,
                record.id()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// Assign a store-unique id to `draft` and append it. Returns the new id.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn create(&mut self, mut draft: T, ids: &mut impl IdAuthority) -> Result<String, AppError> {
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| ids.issue())
            .find(|candidate| !candidate.is_empty() && !self.contains(candidate))
            .ok_or_else(|| {
                AppError::conflict(format!("Could not allocate a unique {} id", T::KIND))
            })?;
        draft.set_id(id.clone());
        self.records.push(draft);
        tracing::info!(kind = T::KIND, id = %id, "record created");
        Ok(id)
    }

    /// Merge `draft` over the record with `id`.
    #[tracing::instrument(level = "debug", skip(self, draft))]
    pub fn update(&mut self, id: &str, draft: T) -> Result<&T, AppError> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            tracing::warn!(kind = T::KIND, id, "update target not found");
            return Err(AppError::not_found(format!("{} {} not found", T::KIND, id)));
        };
        record.merge(draft);
        tracing::info!(kind = T::KIND, id, "record updated");
        Ok(record)
    }

    /// Remove exactly the record with `id`, keeping the order of the rest.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<T, AppError> {
        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            tracing::warn!(kind = T::KIND, id, "delete target not found");
            return Err(AppError::not_found(format!("{} {} not found", T::KIND, id)));
        };
        let removed = self.records.remove(pos);
        tracing::info!(kind = T::KIND, id, "record deleted");
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.records.iter().filter(|r| pred(r)).count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Clone, PartialEq, Validate)]
    pub(crate) struct Note {
        pub id: String,
        #[validate(length(min = 1, message = "Title is required"))]
        pub title: String,
        pub body: String,
    }

    impl Entity for Note {
        const KIND: &'static str = "Note";

        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }
    }

    pub(crate) fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.into(),
            title: title.into(),
            body: String::new(),
        }
    }

    /// Replays a fixed list of ids.
    pub(crate) struct Scripted(pub Vec<&'static str>);

    impl IdAuthority for Scripted {
        fn issue(&mut self) -> String {
            if self.0.is_empty() {
                String::new()
            } else {
                self.0.remove(0).to_string()
            }
        }
    }

    #[test]
    fn seeded_rejects_duplicate_ids() {
        let err = EntityStore::seeded(vec![note("1", "a"), note("1", "b")]).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Conflict);
    }

    #[test]
    fn create_redraws_colliding_ids() {
        let mut store = EntityStore::seeded(vec![note("1", "a")]).unwrap();
        let id = store
            .create(note("", "b"), &mut Scripted(vec!["1", "2"]))
            .unwrap();
        assert_eq!(id, "2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("2").unwrap().title, "b");
    }

    #[test]
    fn create_gives_up_when_authority_is_exhausted() {
        let mut store = EntityStore::seeded(vec![note("1", "a")]).unwrap();
        let err = store
            .create(note("", "b"), &mut Scripted(vec!["1"; MAX_ID_ATTEMPTS]))
            .unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Conflict);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn uuid_authority_issues_distinct_ids() {
        let mut ids = UuidAuthority;
        assert_ne!(ids.issue(), ids.issue());
    }

    #[test]
    fn update_preserves_id() {
        let mut store = EntityStore::seeded(vec![note("1", "a")]).unwrap();
        let updated = store.update("1", note("ignored", "z")).unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.title, "z");
    }

    #[test]
    fn update_and_remove_unknown_id_are_not_found() {
        let mut store = EntityStore::seeded(vec![note("1", "a")]).unwrap();
        assert!(store.update("9", note("9", "x")).unwrap_err().is_not_found());
        assert!(store.remove("9").unwrap_err().is_not_found());
    }

    #[test]
    fn append_rejects_missing_id() {
        let mut store = EntityStore::<Note>::new();
        let err = store.append(note("", "x")).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::BadRequest);
        assert!(store.is_empty());
    }
}
