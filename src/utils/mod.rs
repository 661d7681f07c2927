//! Shared helpers.

pub mod date;
pub mod hash;
pub mod html;
pub mod log;
pub mod minify;
