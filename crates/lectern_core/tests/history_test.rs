//! Tests for the append-only history store.

use lectern_core::{HistoryEntry, HistoryStore};

#[test]
fn test_new_store_is_empty() {
    let history = HistoryStore::new("topic");

    assert!(history.is_empty());
    assert_eq!(history.input_key(), "topic");
    assert_eq!(history.render(), "");
    assert_eq!(history.as_context(), "");
}

#[test]
fn test_render_keeps_call_order_without_drops() {
    let mut history = HistoryStore::new("topic");
    let exchanges: Vec<(String, String)> = (0..25)
        .map(|i| (format!("input {i}"), format!("output {i}")))
        .collect();

    for (input, output) in &exchanges {
        history.record(input.as_str(), output.as_str());
    }

    assert_eq!(history.len(), exchanges.len());

    let rendered = history.render();
    let mut last_position = 0;
    for (input, output) in &exchanges {
        let needle = format!("Human: {input}\nAI: {output}");
        let position = rendered[last_position..]
            .find(&needle)
            .map(|offset| offset + last_position)
            .unwrap_or_else(|| panic!("entry '{input}' missing or out of order"));
        last_position = position + needle.len();
    }
}

#[test]
fn test_entries_expose_recorded_pairs() {
    let mut history = HistoryStore::new("title");
    history.record("Mars Bound\nInto the Void", "A tale of two missions...");

    assert_eq!(
        history.entries(),
        &[HistoryEntry::new(
            "Mars Bound\nInto the Void",
            "A tale of two missions..."
        )]
    );
}

#[test]
fn test_context_matches_render() {
    let mut history = HistoryStore::new("topic");
    history.record("tides", "The Moon's Pull");

    assert_eq!(history.as_context(), history.render());
}

#[test]
fn test_history_serializes_for_hosts() {
    let mut history = HistoryStore::new("topic");
    history.record("tides", "The Moon's Pull");

    let json = serde_json::to_value(&history).expect("serializable");
    assert_eq!(json["input_key"], "topic");
    assert_eq!(json["entries"][0]["output"], "The Moon's Pull");
}
