//! Append-only conversation history for a generation stage.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One recorded exchange: the stage's primary input and the model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct HistoryEntry {
    /// Value of the stage's primary input slot
    input: String,
    /// Text the model returned
    output: String,
}

impl HistoryEntry {
    /// Create a new history entry.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Ordered, append-only log of a stage's exchanges.
///
/// The store is labelled with the name of the stage's primary input slot. It
/// is written only by the stage that owns it; everyone else gets a shared
/// reference. Entries are never edited or removed.
///
/// # Examples
///
/// ```
/// use lectern_core::HistoryStore;
///
/// let mut history = HistoryStore::new("topic");
/// history.record("tides", "The Moon's Pull");
/// history.record("reefs", "Coral Cities");
///
/// assert_eq!(
///     history.render(),
///     "Human: tides\nAI: The Moon's Pull\nHuman: reefs\nAI: Coral Cities"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryStore {
    input_key: String,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Create an empty store for the given primary input key.
    pub fn new(input_key: impl Into<String>) -> Self {
        Self {
            input_key: input_key.into(),
            entries: Vec::new(),
        }
    }

    /// Append an exchange.
    pub fn record(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.entries.push(HistoryEntry::new(input, output));
        debug!(
            input_key = %self.input_key,
            entries = self.entries.len(),
            "Recorded history entry"
        );
    }

    /// Human-readable concatenation of every entry, oldest first.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("Human: {}\nAI: {}", entry.input, entry.output))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialization injected as the `chat_history` value of the next render.
    pub fn as_context(&self) -> String {
        self.render()
    }

    /// Name of the primary input slot this store is keyed by.
    pub fn input_key(&self) -> &str {
        &self.input_key
    }

    /// Recorded entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
