//! Prompt templates with declared, named slots.
//!
//! A template is written with `{slot}` placeholders and constructed together
//! with the list of slots it is expected to use. The two must agree exactly;
//! any mismatch is reported when the template is built, never when it is
//! rendered. Literal braces are written `{{` and `}}`.

use lectern_error::{TemplateError, TemplateErrorKind};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::trace;

/// Slot a memory-enabled stage fills with its running conversation.
pub const CHAT_HISTORY_SLOT: &str = "chat_history";

/// Values supplied to [`PromptTemplate::render`], keyed by slot name.
pub type SlotValues = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}|[{}]")
        .expect("placeholder pattern is a literal")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// Split template text into literal runs and slot references.
fn tokenize(name: &str, text: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut cursor = 0;

    for cap in PLACEHOLDER.captures_iter(text) {
        let Some(whole) = cap.get(0) else {
            continue;
        };
        literal.push_str(&text[cursor..whole.start()]);
        cursor = whole.end();

        match (whole.as_str(), cap.get(1)) {
            (_, Some(slot)) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(slot.as_str().to_string()));
            }
            ("{{", None) => literal.push('{'),
            ("}}", None) => literal.push('}'),
            (_, None) => {
                return Err(TemplateError::new(
                    TemplateErrorKind::MalformedPlaceholder {
                        template: name.to_string(),
                        offset: whole.start(),
                    },
                ));
            }
        }
    }

    literal.push_str(&text[cursor..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn slots_in_order(segments: &[Segment]) -> Vec<String> {
    let mut seen = HashSet::new();
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Slot(slot) if seen.insert(slot.as_str()) => Some(slot.clone()),
            _ => None,
        })
        .collect()
}

/// Extract the placeholders used by template text, in order of first use.
///
/// # Examples
///
/// ```
/// use lectern_core::parse_slots;
///
/// let slots = parse_slots("Summarize {title} using {research}; cite {title}").unwrap();
/// assert_eq!(slots, vec!["title".to_string(), "research".to_string()]);
/// ```
///
/// # Errors
///
/// Returns a `MalformedPlaceholder` error for unbalanced braces.
pub fn parse_slots(text: &str) -> Result<Vec<String>, TemplateError> {
    tokenize("<inline>", text).map(|segments| slots_in_order(&segments))
}

/// An immutable prompt template with a declared, ordered set of slots.
///
/// # Examples
///
/// ```
/// use lectern_core::{PromptTemplate, SlotValues};
///
/// let template = PromptTemplate::new(
///     "titles",
///     "Give me some book titles about {topic}",
///     ["topic"],
/// )
/// .unwrap();
///
/// let mut values = SlotValues::new();
/// values.insert("topic".to_string(), "tides".to_string());
/// assert_eq!(
///     template.render(&values).unwrap(),
///     "Give me some book titles about tides"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PromptTemplate {
    /// Name used in logs and error messages.
    name: String,
    /// Raw template text.
    template: String,
    /// Declared slots, in declaration order.
    slots: Vec<String>,
    #[getter(skip)]
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Build a template and check its text against the declared slots.
    ///
    /// # Errors
    ///
    /// Returns a configuration [`TemplateError`] if a slot is declared twice,
    /// if the text uses an undeclared slot, if a declared slot never appears,
    /// or if the text contains a malformed placeholder.
    pub fn new<I, S>(
        name: impl Into<String>,
        template: impl Into<String>,
        slots: I,
    ) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let template = template.into();
        let slots: Vec<String> = slots.into_iter().map(Into::into).collect();

        let mut declared = HashSet::new();
        for slot in &slots {
            if !declared.insert(slot.as_str()) {
                return Err(TemplateError::new(TemplateErrorKind::DuplicateSlot {
                    template: name,
                    slot: slot.clone(),
                }));
            }
        }

        let segments = tokenize(&name, &template)?;
        let used = slots_in_order(&segments);

        if let Some(slot) = used.iter().find(|slot| !declared.contains(slot.as_str())) {
            return Err(TemplateError::new(TemplateErrorKind::UndeclaredSlot {
                template: name,
                slot: slot.clone(),
            }));
        }
        if let Some(slot) = slots.iter().find(|slot| !used.contains(*slot)) {
            return Err(TemplateError::new(TemplateErrorKind::UnusedSlot {
                template: name,
                slot: slot.clone(),
            }));
        }

        trace!(template = %name, slots = ?slots, "Built prompt template");
        Ok(Self {
            name,
            template,
            slots,
            segments,
        })
    }

    /// Whether `slot` is one of the declared slots.
    pub fn declares(&self, slot: &str) -> bool {
        self.slots.iter().any(|declared| declared == slot)
    }

    /// Substitute every declared slot with its supplied value.
    ///
    /// Values are inserted verbatim; braces inside a value are not expanded.
    ///
    /// # Errors
    ///
    /// - `UnknownSlot` if a supplied key is not declared (the alphabetically
    ///   first offending key is reported)
    /// - `MissingSlot` if a declared slot has no value (the first in
    ///   declaration order is reported)
    pub fn render(&self, values: &SlotValues) -> Result<String, TemplateError> {
        let mut unknown: Vec<&String> = values.keys().filter(|key| !self.declares(key)).collect();
        unknown.sort();
        if let Some(key) = unknown.first() {
            return Err(TemplateError::new(TemplateErrorKind::UnknownSlot(
                (*key).clone(),
            )));
        }

        if let Some(slot) = self.slots.iter().find(|slot| !values.contains_key(*slot)) {
            return Err(TemplateError::new(TemplateErrorKind::MissingSlot(
                slot.clone(),
            )));
        }

        let mut rendered = String::with_capacity(self.template.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Slot(slot) => {
                    if let Some(value) = values.get(slot) {
                        rendered.push_str(value);
                    }
                }
            }
        }
        Ok(rendered)
    }
}
