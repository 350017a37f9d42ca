//! Client state reducers.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with `&mut self` reducer methods. Components
//! wrap them in `RwSignal` at the edge; nothing here depends on Leptos.

pub mod auth;
pub mod auth_form;
pub mod catalog;
pub mod chat;
