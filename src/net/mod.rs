//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the summary request and classifies responses; `types`
//! defines the two JSON body shapes the backend uses.

pub mod api;
pub mod types;
