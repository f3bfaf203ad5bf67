//! Component library for the admin console: themed wrappers over
//! `dioxus-primitives` plus a handful of plain layout pieces.

pub mod components;
pub mod theme;

pub use components::*;
