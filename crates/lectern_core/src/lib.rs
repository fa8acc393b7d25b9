//! Core data types for the Lectern pipeline.
//!
//! This crate provides the building blocks every generation stage is made of:
//! prompt templates with declared slots, append-only conversation history, and
//! the request/response types exchanged with language model clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod request;
mod template;

pub use history::{HistoryEntry, HistoryStore};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use template::{CHAT_HISTORY_SLOT, PromptTemplate, SlotValues, parse_slots};
