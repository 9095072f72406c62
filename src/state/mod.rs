//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The whole UI hangs off a single `SessionPhase` value provided via context,
//! so the button, error panel, and summary panel always agree on what the
//! session is doing.

pub mod session;
