//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and service
//! logic to improve reuse and testability.

pub mod browser;
pub mod dispatch;
pub mod storage;
