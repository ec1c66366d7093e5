//! quill-storage
//!
//! The TextPiece store. Thin wrapper around the SeaORM connection pool.

pub mod entity;
pub mod error;
pub mod store;
