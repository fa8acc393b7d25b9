//! Error types for the Lectern pipeline.
//!
//! This crate provides the error types shared by every Lectern crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! | Condition | Type |
//! |---|---|
//! | slot mismatch at construction | [`TemplateError`] with a config kind |
//! | missing / unknown slot at render | [`TemplateError`] |
//! | model client failure | [`GenerationError`] |
//! | research source failure | [`ResearchError`] |
//!
//! # Examples
//!
//! ```
//! use lectern_error::{LecternResult, ResearchError, ResearchErrorKind};
//!
//! fn lookup() -> LecternResult<String> {
//!     Err(ResearchError::new(ResearchErrorKind::NoResults("quasars".into())))?
//! }
//!
//! assert!(lookup().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod http;
mod json;
mod models;
mod research;
mod template;
mod validation;

pub use config::ConfigError;
pub use error::{LecternError, LecternErrorKind, LecternResult};
pub use generation::GenerationError;
pub use http::HttpError;
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use research::{ResearchError, ResearchErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
