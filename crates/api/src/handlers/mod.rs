//! Request handlers.
//!
//! Each handler performs exactly one persistence operation (or the
//! film/actor join reads) through `filmoteca_db` and serializes the
//! result as JSON. Errors are mapped via [`crate::error::AppError`].

pub mod actors;
pub mod films;
