//! Tests for prompt template construction and rendering.

use lectern_core::{PromptTemplate, SlotValues, parse_slots};
use lectern_error::TemplateErrorKind;

fn values(pairs: &[(&str, &str)]) -> SlotValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn script_template() -> PromptTemplate {
    PromptTemplate::new(
        "script",
        "Write me a summary script of the given topic based on this title TITLE: {title} \
         while leveraging this Wikipedia research: {wikipedia_research}",
        ["title", "wikipedia_research"],
    )
    .expect("valid template")
}

#[test]
fn test_render_substitutes_every_slot() {
    let rendered = script_template()
        .render(&values(&[
            ("title", "Mars Bound"),
            ("wikipedia_research", "NASA history..."),
        ]))
        .expect("render succeeds");

    assert!(rendered.contains("TITLE: Mars Bound"));
    assert!(rendered.ends_with("research: NASA history..."));
}

#[test]
fn test_render_rejects_missing_slot() {
    let err = script_template()
        .render(&values(&[("title", "Mars Bound")]))
        .unwrap_err();

    assert_eq!(
        err.kind,
        TemplateErrorKind::MissingSlot("wikipedia_research".to_string())
    );
}

#[test]
fn test_render_rejects_unknown_slot() {
    let err = script_template()
        .render(&values(&[
            ("title", "Mars Bound"),
            ("wikipedia_research", "NASA history..."),
            ("author", "Anon"),
        ]))
        .unwrap_err();

    assert_eq!(err.kind, TemplateErrorKind::UnknownSlot("author".to_string()));
}

#[test]
fn test_render_succeeds_only_for_exact_key_set() {
    let template = script_template();
    let candidates = [
        values(&[]),
        values(&[("title", "a")]),
        values(&[("wikipedia_research", "b")]),
        values(&[("title", "a"), ("wikipedia_research", "b")]),
        values(&[("title", "a"), ("wikipedia_research", "b"), ("extra", "c")]),
    ];

    let outcomes: Vec<bool> = candidates
        .iter()
        .map(|candidate| template.render(candidate).is_ok())
        .collect();

    assert_eq!(outcomes, vec![false, false, false, true, false]);
}

#[test]
fn test_values_are_inserted_verbatim() {
    let template = PromptTemplate::new("titles", "About {topic}", ["topic"]).unwrap();
    let rendered = template
        .render(&values(&[("topic", "{topic} and {{braces}}")]))
        .unwrap();

    assert_eq!(rendered, "About {topic} and {{braces}}");
}

#[test]
fn test_escaped_braces_render_as_literals() {
    let template =
        PromptTemplate::new("json", "Reply as {{\"titles\": [...]}} about {topic}", ["topic"])
            .unwrap();
    let rendered = template.render(&values(&[("topic", "owls")])).unwrap();

    assert_eq!(rendered, "Reply as {\"titles\": [...]} about owls");
}

#[test]
fn test_undeclared_slot_is_a_config_error() {
    let err = PromptTemplate::new("titles", "About {topic} for {audience}", ["topic"]).unwrap_err();

    assert!(err.kind.is_config());
    assert_eq!(
        err.kind,
        TemplateErrorKind::UndeclaredSlot {
            template: "titles".to_string(),
            slot: "audience".to_string(),
        }
    );
}

#[test]
fn test_unused_declared_slot_is_a_config_error() {
    let err = PromptTemplate::new("titles", "About {topic}", ["topic", "chat_history"]).unwrap_err();

    assert!(err.kind.is_config());
    assert!(matches!(
        err.kind,
        TemplateErrorKind::UnusedSlot { ref slot, .. } if slot == "chat_history"
    ));
}

#[test]
fn test_duplicate_declaration_is_rejected() {
    let err = PromptTemplate::new("titles", "About {topic}", ["topic", "topic"]).unwrap_err();

    assert!(matches!(err.kind, TemplateErrorKind::DuplicateSlot { .. }));
}

#[test]
fn test_declared_slots_round_trip_through_template_text() {
    let template = script_template();
    let reparsed = parse_slots(template.template()).unwrap();

    assert_eq!(&reparsed, template.slots());
}

#[test]
fn test_declares() {
    let template = script_template();

    assert!(template.declares("title"));
    assert!(!template.declares("chat_history"));
}
