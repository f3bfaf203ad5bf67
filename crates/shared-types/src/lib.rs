pub mod config;
pub mod error;
pub mod feature_flags;
pub mod models;

// Managed record kinds
pub mod common;
pub mod department;
pub mod directory_user;
pub mod employee;
pub mod parent;
pub mod role;
pub mod student;
pub mod teacher;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use common::*;
pub use department::*;
pub use directory_user::*;
pub use employee::*;
pub use parent::*;
pub use role::*;
pub use student::*;
pub use teacher::*;
