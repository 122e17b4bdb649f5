//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The board page owns orchestration (`board_flows`) and delegates rendering
//! details to `components`.

pub mod board;
pub mod board_flows;
