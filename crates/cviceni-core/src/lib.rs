#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Cviceni Core Library
//!
//! Types and the lesson procedure for the first programming exercise:
//! a power computation, a mutated list of names, and a small `Student`
//! record printed in a few different ways.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: `Student`, `NameList` and the power helpers
//! - [`config`]: Lesson input data, loadable from TOML
//! - [`lesson`]: The fixed print procedure

pub mod config;
pub mod error;
pub mod lesson;
pub mod types;

// Re-exports for convenience
pub use config::LessonConfig;
pub use error::{Error, Result};
pub use lesson::run_lesson;
pub use types::{NameList, Student, format_number, power};
