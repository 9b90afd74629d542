//! Shared domain types for the filmoteca service.

pub mod error;
pub mod types;
