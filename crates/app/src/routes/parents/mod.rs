pub mod form_sheet;
pub mod list;
