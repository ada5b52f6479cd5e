//! Post metadata: front matter extraction and record normalization.
//!
//! - [`frontmatter`] - isolate the `---` block and parse known fields
//! - [`record`] - map raw fields to a [`PostRecord`] with fallbacks

pub mod frontmatter;
pub mod record;

pub use frontmatter::RawFrontMatter;
pub use record::{PostRecord, file_stem};
