//! Utility modules.

pub mod date;
pub mod path;
pub mod plural;
pub mod slug;

pub use plural::{plural_count, plural_s};
