//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `index` | `[index]`    | Content dir, artifact path, format   |
//! | `check` | `[check]`    | Title and date checks                |

mod check;
mod index;

pub use check::{CheckConfig, CheckLevel};
pub use index::IndexConfig;
