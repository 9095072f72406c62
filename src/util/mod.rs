//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_actions` owns the summary/auth orchestration; `popup` isolates
//! the browser window APIs so the controller logic stays testable.

pub mod popup;
pub mod session_actions;
