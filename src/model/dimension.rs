//! One questionnaire axis and its four mutually exclusive options.

use serde::{Deserialize, Serialize};

/// A selectable answer on a dimension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOption {
    /// Token stored in profiles.
    pub value: String,

    /// Human-readable label.
    #[serde(default)]
    pub label: String,
}

impl DimensionOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A questionnaire dimension.
///
/// Documents name the prompt either `question` or `label`; both are kept so
/// a round trip does not lose either.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Ordered options. Position, not value, decides the encoding.
    pub options: Vec<DimensionOption>,
}

impl Dimension {
    /// Build a dimension whose option labels equal their values.
    pub fn new(id: &str, question: &str, values: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            question: Some(question.to_string()),
            label: None,
            options: values.iter().map(|v| DimensionOption::new(v, v)).collect(),
        }
    }

    /// The prompt text, preferring `question` over `label`.
    pub fn prompt(&self) -> &str {
        self.question
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or(&self.id)
    }

    /// Position of `value` in the option list.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// Label for a value token, if the token is one of this dimension's options.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}
