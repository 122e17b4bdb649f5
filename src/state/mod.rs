//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `events`, `forms`, `ui`, `flash`) so
//! components depend on small focused models. Every model is plain data with
//! pure update methods; pages wrap them in `RwSignal`s.

pub mod events;
pub mod flash;
pub mod forms;
pub mod session;
pub mod ui;
