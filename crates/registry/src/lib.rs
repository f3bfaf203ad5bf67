//! In-memory record management shared by every list screen: stores,
//! filtering, paging, editor state and the auth/reset collaborators.

pub mod auth;
pub mod config;
pub mod editor;
pub mod filter;
pub mod list_view;
pub mod page;
pub mod repo;
pub mod reset;
pub mod store;

pub use auth::{AuthService, MockAuthService, Session};
pub use editor::{Editor, EditorMode, Submission};
pub use filter::{contains_ci, is_pass_through, Filter, Filterable, NoAxis};
pub use list_view::{DeleteOutcome, ListView, VisiblePage};
pub use page::PageWindow;
pub use repo::department::DepartmentAxis;
pub use repo::directory_user::DirectoryUserAxis;
pub use repo::employee::EmployeeAxis;
pub use repo::student::StudentAxis;
pub use repo::teacher::TeacherAxis;
pub use repo::{today, KindSummary, Registry};
pub use reset::{PasswordResetFlow, PasswordResetService, ResetState};
pub use store::{Entity, EntityStore, IdAuthority, UuidAuthority};
