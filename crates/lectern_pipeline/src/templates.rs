//! Built-in prompt templates and the serializable template description.

use lectern_core::PromptTemplate;
use lectern_error::TemplateError;
use serde::{Deserialize, Serialize};

/// Primary input slot of the title stage.
pub const TITLE_INPUT_KEY: &str = "topic";

/// Primary input slot of the script stage.
pub const SCRIPT_INPUT_KEY: &str = "title";

/// Slot of the script template that receives the research text.
pub const WIKIPEDIA_RESEARCH_SLOT: &str = "wikipedia_research";

/// Default title-stage prompt.
pub const TITLE_TEMPLATE: &str = "{chat_history}\nGive me some book titles about {topic}";

/// Default script-stage prompt.
pub const SCRIPT_TEMPLATE: &str = "{chat_history}\nWrite me a summary script of the given topic based on this title TITLE: {title} while leveraging this Wikipedia research: {wikipedia_research}";

/// Template text together with the slots it declares.
///
/// This is the form templates take in configuration files; it is turned into a
/// checked [`PromptTemplate`] when the pipeline is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TemplateSpec {
    /// Template text with `{slot}` placeholders
    text: String,
    /// Declared slots, in order
    slots: Vec<String>,
}

impl TemplateSpec {
    /// Describe a template.
    pub fn new<I, S>(text: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in title-stage template.
    pub fn default_title() -> Self {
        Self::new(TITLE_TEMPLATE, ["chat_history", TITLE_INPUT_KEY])
    }

    /// Built-in script-stage template.
    pub fn default_script() -> Self {
        Self::new(
            SCRIPT_TEMPLATE,
            ["chat_history", SCRIPT_INPUT_KEY, WIKIPEDIA_RESEARCH_SLOT],
        )
    }

    /// Check the text against the declared slots.
    ///
    /// # Errors
    ///
    /// Any construction error of [`PromptTemplate::new`].
    pub fn build(&self, name: &str) -> Result<PromptTemplate, TemplateError> {
        PromptTemplate::new(name, self.text.as_str(), self.slots.iter().cloned())
    }
}
