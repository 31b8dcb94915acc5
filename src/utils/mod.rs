//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file discovery and defaults
//! - [`progress`] - Progress bars (no-op without the `progress` feature)
//! - [`separators`] - The separator character set
//! - [`tokenizer`] - Splitting text into word and separator runs
//!
//! ## Key Functions
//!
//! ```
//! use glossgen::utils::{runs, SeparatorSet};
//!
//! let seps = SeparatorSet::default();
//! let parts: Vec<_> = runs("a short, word", &seps).map(|r| r.text).collect();
//! assert_eq!(parts, ["a", " ", "short", ", ", "word"]);
//! ```

pub mod app_data;
pub mod progress;
pub mod separators;
pub mod tokenizer;

pub use app_data::*;
pub use separators::*;
pub use tokenizer::*;
