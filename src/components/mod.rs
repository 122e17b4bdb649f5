//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board chrome and read/write page state through the
//! `BoardHandle` passed down from the board page.

pub mod attendees_modal;
pub mod auth_panel;
pub mod event_card;
pub mod event_form;
pub mod event_list;
pub mod filter_bar;
pub mod flash_message;
pub mod site_header;
