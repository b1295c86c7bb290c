//! Form State
//!
//! Framework-free state behind the field and folder components.

mod field;
mod folder;

pub use field::*;
pub use folder::*;
