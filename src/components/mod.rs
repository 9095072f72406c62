//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless projections of the shared `SessionPhase`
//! context; none of them mutate state except through the page's callback.

pub mod error_panel;
pub mod summary_button;
pub mod summary_panel;
