//! One management screen's worth of list state: filter, page, editor and
//! the pending delete, composed over an [`EntityStore`].

use shared_types::{AppError, PaginationMeta};

use crate::editor::{Editor, EditorMode, Submission};
use crate::filter::{Filter, Filterable};
use crate::page::PageWindow;
use crate::store::{Entity, EntityStore, IdAuthority};

/// What a delete request did.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    /// Waiting on the user to confirm.
    Pending,
    Removed(T),
}

/// The rows to draw plus where they sit in the filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage<T> {
    pub rows: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> VisiblePage<T> {
    /// Size of the filtered collection, not just this page.
    pub fn total(&self) -> usize {
        self.meta.total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ListView<T: Entity + Filterable> {
    filter: Filter<T>,
    window: PageWindow,
    editor: Editor<T>,
    confirm_deletes: bool,
    pending_delete: Option<String>,
}

impl<T: Entity + Filterable + PartialEq> ListView<T> {
    /// `confirm_deletes` routes deletes through [`ListView::confirm_delete`].
    pub fn new(page_size: usize, confirm_deletes: bool) -> Self {
        Self {
            filter: Filter::new(),
            window: PageWindow::new(page_size),
            editor: Editor::new(),
            confirm_deletes,
            pending_delete: None,
        }
    }

    pub fn filter(&self) -> &Filter<T> {
        &self.filter
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn editor(&self) -> &Editor<T> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor<T> {
        &mut self.editor
    }

    pub fn confirms_deletes(&self) -> bool {
        self.confirm_deletes
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.window.reset();
    }

    pub fn set_category(&mut self, axis: T::Axis, value: impl Into<String>) {
        self.filter.set_category(axis, value);
        self.window.reset();
    }

    pub fn set_page(&mut self, page: usize, store: &EntityStore<T>) {
        self.set_page_with(page, store, |_| Vec::new());
    }

    /// Like [`ListView::set_page`], counting matches on `related` text too.
    pub fn set_page_with<F>(&mut self, page: usize, store: &EntityStore<T>, related: F)
    where
        F: Fn(&T) -> Vec<String>,
    {
        let total = self.filter.apply_with(store.records(), related).len();
        self.window.set_page(page, total);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.window.set_page_size(page_size);
    }

    /// Open the editor in create mode.
    pub fn add(&mut self, blank: T) {
        self.editor.open_create(blank);
    }

    /// Open the editor on a copy of the record with `id`.
    pub fn edit(&mut self, store: &EntityStore<T>, id: &str) -> Result<(), AppError> {
        let record = store
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("{} {} not found", T::KIND, id)))?;
        self.editor.open_edit(record);
        Ok(())
    }

    /// Validate the editor draft and write it to `store`.
    ///
    /// Updates when a record was selected as the editor opened, creates
    /// otherwise. Closes the editor on success and returns the record id.
    pub fn commit(
        &mut self,
        store: &mut EntityStore<T>,
        ids: &mut impl IdAuthority,
    ) -> Result<String, AppError> {
        let submission = self.editor.submit()?;
        let id = Self::save(store, submission, ids)?;
        self.editor.close();
        Ok(id)
    }

    /// Apply a submission without going through the editor.
    pub fn save(
        store: &mut EntityStore<T>,
        submission: Submission<T>,
        ids: &mut impl IdAuthority,
    ) -> Result<String, AppError> {
        match (submission.mode(), submission.selected_id) {
            (EditorMode::Edit, Some(id)) => {
                store.update(&id, submission.draft)?;
                Ok(id)
            }
            _ => store.create(submission.draft, ids),
        }
    }

    /// Delete immediately, or stage the delete when confirmation is on.
    pub fn request_delete(
        &mut self,
        store: &mut EntityStore<T>,
        id: &str,
    ) -> Result<DeleteOutcome<T>, AppError> {
        self.request_delete_with(store, id, |_| Vec::new())
    }

    /// Like [`ListView::request_delete`]; the page is clamped against
    /// matches that include `related` text.
    pub fn request_delete_with<F>(
        &mut self,
        store: &mut EntityStore<T>,
        id: &str,
        related: F,
    ) -> Result<DeleteOutcome<T>, AppError>
    where
        F: Fn(&T) -> Vec<String>,
    {
        if !store.contains(id) {
            return Err(AppError::not_found(format!("{} {} not found", T::KIND, id)));
        }
        if self.confirm_deletes {
            self.pending_delete = Some(id.to_string());
            return Ok(DeleteOutcome::Pending);
        }
        self.remove(store, id, related).map(DeleteOutcome::Removed)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn confirm_delete(&mut self, store: &mut EntityStore<T>) -> Result<T, AppError> {
        self.confirm_delete_with(store, |_| Vec::new())
    }

    /// Like [`ListView::confirm_delete`], clamping against `related` matches.
    pub fn confirm_delete_with<F>(
        &mut self,
        store: &mut EntityStore<T>,
        related: F,
    ) -> Result<T, AppError>
    where
        F: Fn(&T) -> Vec<String>,
    {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| AppError::conflict("No delete is awaiting confirmation"))?;
        self.remove(store, &id, related)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    fn remove<F>(&mut self, store: &mut EntityStore<T>, id: &str, related: F) -> Result<T, AppError>
    where
        F: Fn(&T) -> Vec<String>,
    {
        let removed = store.remove(id)?;
        if self.editor.selected_id() == Some(id) {
            self.editor.close();
        }
        let total = self.filter.apply_with(store.records(), related).len();
        self.window.clamp(total);
        Ok(removed)
    }

    /// The current page of filtered records.
    pub fn visible(&self, store: &EntityStore<T>) -> VisiblePage<T> {
        self.visible_with(store, |_| Vec::new())
    }

    /// Like [`ListView::visible`], searching extra text from `related`.
    pub fn visible_with<F>(&self, store: &EntityStore<T>, related: F) -> VisiblePage<T>
    where
        F: Fn(&T) -> Vec<String>,
    {
        let matched = self.filter.apply_with(store.records(), related);
        tracing::debug!(
            kind = T::KIND,
            matched = matched.len(),
            page = self.window.page(),
            "page recomputed"
        );
        let rows = self
            .window
            .slice(&matched)
            .iter()
            .map(|r| (*r).clone())
            .collect();
        VisiblePage {
            rows,
            meta: self.window.meta(matched.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::NoAxis;
    use crate::store::tests::{note, Note, Scripted};

    impl Filterable for Note {
        type Axis = NoAxis;

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.body]
        }

        fn matches_category(&self, axis: NoAxis, _value: &str) -> bool {
            match axis {}
        }
    }

    fn store(n: usize) -> EntityStore<Note> {
        let records = (1..=n)
            .map(|i| note(&i.to_string(), &format!("note {i}")))
            .collect();
        EntityStore::seeded(records).unwrap()
    }

    #[test]
    fn commit_in_create_mode_appends() {
        let mut s = store(2);
        let mut view = ListView::new(10, false);
        view.add(note("", "fresh"));
        let id = view.commit(&mut s, &mut Scripted(vec!["x"])).unwrap();
        assert_eq!(id, "x");
        assert_eq!(s.len(), 3);
        assert!(!view.editor().is_open());
    }

    #[test]
    fn commit_in_edit_mode_updates_in_place() {
        let mut s = store(3);
        let mut view = ListView::new(10, false);
        view.edit(&s, "2").unwrap();
        view.editor_mut().update(|d| d.title = "renamed".into());
        let id = view.commit(&mut s, &mut Scripted(vec![])).unwrap();
        assert_eq!(id, "2");
        assert_eq!(s.len(), 3);
        assert_eq!(s.records()[1].title, "renamed");
    }

    #[test]
    fn failed_validation_keeps_editor_open() {
        let mut s = store(1);
        let mut view = ListView::new(10, false);
        view.add(note("", ""));
        assert!(view.commit(&mut s, &mut Scripted(vec!["x"])).is_err());
        assert!(view.editor().is_open());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn immediate_delete() {
        let mut s = store(3);
        let mut view = ListView::new(10, false);
        let outcome = view.request_delete(&mut s, "2").unwrap();
        assert_eq!(outcome, DeleteOutcome::Removed(note("2", "note 2")));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn confirmed_delete_waits_for_confirmation() {
        let mut s = store(3);
        let mut view = ListView::new(10, true);
        assert_eq!(view.request_delete(&mut s, "1").unwrap(), DeleteOutcome::Pending);
        assert_eq!(s.len(), 3);
        view.cancel_delete();
        assert!(view.confirm_delete(&mut s).is_err());

        view.request_delete(&mut s, "1").unwrap();
        assert_eq!(view.confirm_delete(&mut s).unwrap().id, "1");
        assert_eq!(s.len(), 2);
        assert_eq!(view.pending_delete(), None);
    }

    #[test]
    fn query_change_resets_page() {
        let s = store(12);
        let mut view = ListView::new(5, false);
        view.set_page(2, &s);
        assert_eq!(view.window().page(), 2);
        view.set_query("note 1");
        assert_eq!(view.window().page(), 0);
        let page = view.visible(&s);
        assert_eq!(page.total(), 4);
    }

    #[test]
    fn delete_on_last_page_pulls_window_back() {
        let mut s = store(6);
        let mut view = ListView::new(5, false);
        view.set_page(1, &s);
        view.request_delete(&mut s, "6").unwrap();
        assert_eq!(view.window().page(), 0);
        assert_eq!(view.visible(&s).rows.len(), 5);
    }
}
