// Plain components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod sheet;

// Primitive wrappers
pub mod checkbox;
pub mod label;
pub mod separator;
pub mod switch;

// Overlays
pub mod alert_dialog;
pub mod dropdown_menu;

// Navigation and chrome
pub mod avatar;
pub mod navbar;
pub mod toast;

// Depends on button
pub mod pagination;
pub mod sidebar;

pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use data_table::*;
pub use dropdown_menu::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use switch::*;
pub use toast::*;
