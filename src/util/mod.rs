//! Stateless helpers: validation, formatting, image handling, timing.

pub mod delay;
pub mod format;
pub mod image;
pub mod validate;
