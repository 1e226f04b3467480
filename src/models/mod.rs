//! Data models for the portfolio site.
//!
//! Field names are snake_case to match the frontend components directly.

mod certificate;
mod contact;
mod project;
mod talk;

pub use certificate::*;
pub use contact::*;
pub use project::*;
pub use talk::*;
