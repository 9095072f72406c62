//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single screen; the page owns orchestration (wiring the
//! button to the session controller, cleanup on teardown) and delegates
//! rendering details to `components`.

pub mod summary;
