//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive data and callbacks from their page. Only the site
//! header reads shared state from a Leptos context provider.

pub mod auth_dialog;
pub mod chat_dialog;
pub mod impact_view;
pub mod listing_card;
pub mod login_prompt;
pub mod partners_view;
pub mod site_header;
