//! quill-core
//!
//! Pure domain types for Quill. No database or HTTP dependency — this is the
//! shared vocabulary between the store and the web layer.

pub mod error;
pub mod models;
