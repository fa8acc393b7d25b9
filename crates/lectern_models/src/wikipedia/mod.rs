//! Wikipedia research source.

mod client;
mod dto;

pub use client::{
    DEFAULT_MAX_CHARS, DEFAULT_TOP_K_RESULTS, MAX_QUERY_CHARS, WikipediaClient, format_summaries,
};
