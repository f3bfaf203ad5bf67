pub mod list;
pub mod reset_dialog;
