//! Trait definitions for the Lectern pipeline.
//!
//! The pipeline talks to two external collaborators through the traits in
//! this crate: a language model that completes prompts, and a reference
//! source that answers research queries. Concrete clients live in
//! `lectern_models`; tests substitute their own implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{LanguageModel, ResearchSource};
