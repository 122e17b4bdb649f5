//! # event-board
//!
//! Leptos + WASM browser client for the event board REST API: account
//! registration and login, event search, creation, editing, deletion,
//! attendance, and attendee rosters.
//!
//! Rendering lives in `pages` and `components`; everything they display is
//! computed by the pure models in `state` and the async flows in `services`,
//! which talk to the backend through the `net` transport seam.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;
