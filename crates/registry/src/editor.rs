//! Create/edit dialog state, independent of how the form is drawn.

use shared_types::AppError;
use validator::Validate;

use crate::store::Entity;

/// Whether the dialog creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
struct Session<T> {
    selected_id: Option<String>,
    initial: T,
    draft: T,
}

/// A validated draft handed back to the caller on save.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    /// Id of the record selected when the dialog opened, if any.
    pub selected_id: Option<String>,
    pub draft: T,
}

impl<T> Submission<T> {
    pub fn mode(&self) -> EditorMode {
        if self.selected_id.is_some() {
            EditorMode::Edit
        } else {
            EditorMode::Create
        }
    }
}

/// Modal editor state. Closed until opened in create or edit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<T> {
    session: Option<Session<T>>,
}

impl<T> Default for Editor<T> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<T: Entity + PartialEq> Editor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with blank type-specific defaults.
    pub fn open_create(&mut self, blank: T) {
        self.session = Some(Session {
            selected_id: None,
            initial: blank.clone(),
            draft: blank,
        });
    }

    /// Open on a copy of `record`.
    pub fn open_edit(&mut self, record: &T) {
        self.session = Some(Session {
            selected_id: Some(record.id().to_string()),
            initial: record.clone(),
            draft: record.clone(),
        });
    }

    /// Point the editor at a new selection.
    ///
    /// The form reinitializes whenever the selected record changes, including
    /// switching between edit and create. Reselecting the current record
    /// keeps the draft. Returns whether the form was reinitialized.
    pub fn select(&mut self, selected: Option<&T>, blank: impl FnOnce() -> T) -> bool {
        let current = self.session.as_ref().map(|s| s.selected_id.as_deref());
        let incoming = selected.map(|r| r.id());
        if current == Some(incoming) {
            return false;
        }
        match selected {
            Some(record) => self.open_edit(record),
            None => self.open_create(blank()),
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn mode(&self) -> Option<EditorMode> {
        self.session.as_ref().map(|s| {
            if s.selected_id.is_some() {
                EditorMode::Edit
            } else {
                EditorMode::Create
            }
        })
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.selected_id.as_deref())
    }

    pub fn draft(&self) -> Option<&T> {
        self.session.as_ref().map(|s| &s.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.session.as_mut().map(|s| &mut s.draft)
    }

    /// Apply `change` to the draft if the editor is open.
    pub fn update(&mut self, change: impl FnOnce(&mut T)) {
        if let Some(draft) = self.draft_mut() {
            change(draft);
        }
    }

    /// Whether the draft differs from what the dialog opened with.
    pub fn is_dirty(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.draft != s.initial)
            .unwrap_or(false)
    }

    /// Validate the draft and hand it back. The editor stays open so the
    /// caller can show errors or close it after committing.
    pub fn submit(&self) -> Result<Submission<T>, AppError> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| AppError::bad_request("Editor is not open"))?;
        session.draft.validate()?;
        Ok(Submission {
            selected_id: session.selected_id.clone(),
            draft: session.draft.clone(),
        })
    }

    pub fn close(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{note, Note};
    use shared_types::AppErrorKind;

    #[test]
    fn create_mode_starts_blank() {
        let mut ed = Editor::new();
        ed.open_create(note("", ""));
        assert_eq!(ed.mode(), Some(EditorMode::Create));
        assert_eq!(ed.selected_id(), None);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn edit_mode_copies_record() {
        let record = note("7", "Groceries");
        let mut ed = Editor::new();
        ed.open_edit(&record);
        ed.update(|d| d.title.push_str(" list"));
        assert_eq!(ed.draft().unwrap().title, "Groceries list");
        assert_eq!(record.title, "Groceries");
        assert!(ed.is_dirty());
    }

    #[test]
    fn selection_change_reinitializes() {
        let a = note("1", "a");
        let b = note("2", "b");
        let mut ed: Editor<Note> = Editor::new();
        assert!(ed.select(Some(&a), || note("", "")));
        ed.update(|d| d.title = "changed".into());
        assert!(!ed.select(Some(&a), || note("", "")));
        assert_eq!(ed.draft().unwrap().title, "changed");
        assert!(ed.select(Some(&b), || note("", "")));
        assert_eq!(ed.draft().unwrap().title, "b");
        assert!(ed.select(None, || note("", "blank")));
        assert_eq!(ed.mode(), Some(EditorMode::Create));
        assert_eq!(ed.draft().unwrap().title, "blank");
    }

    #[test]
    fn submit_validates_required_fields() {
        let mut ed = Editor::new();
        ed.open_create(note("", ""));
        let err = ed.submit().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("title"), Some("Title is required"));
        assert!(ed.is_open());
    }

    #[test]
    fn submit_reports_selection_from_open_time() {
        let mut ed = Editor::new();
        ed.open_edit(&note("3", "x"));
        let sub = ed.submit().unwrap();
        assert_eq!(sub.mode(), EditorMode::Edit);
        assert_eq!(sub.selected_id.as_deref(), Some("3"));
    }

    #[test]
    fn submit_on_closed_editor_is_bad_request() {
        let ed: Editor<Note> = Editor::new();
        assert_eq!(ed.submit().unwrap_err().kind, AppErrorKind::BadRequest);
    }
}
