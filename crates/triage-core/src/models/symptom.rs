use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single symptom observation: the category a question belongs to and the
/// patient's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub category: String,
    pub response: SymptomValue,
}

/// A response, or the value a condition pattern expects for a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum SymptomValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl Symptom {
    pub fn new(category: impl Into<String>, response: impl Into<SymptomValue>) -> Self {
        Self {
            category: category.into(),
            response: response.into(),
        }
    }
}

impl SymptomValue {
    /// Interpret a recorded answer. "Yes" and "No" (any case) become flags so
    /// they compare against yes/no pattern entries; anything else stays text.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "yes" => SymptomValue::Flag(true),
            "no" => SymptomValue::Flag(false),
            _ => SymptomValue::Text(answer.to_string()),
        }
    }

    /// The value as a flag, reading "Yes"/"No" text as one.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SymptomValue::Flag(value) => Some(*value),
            SymptomValue::Text(text) => match SymptomValue::from_answer(text) {
                SymptomValue::Flag(value) => Some(value),
                _ => None,
            },
            SymptomValue::List(_) => None,
        }
    }
}

impl From<bool> for SymptomValue {
    fn from(value: bool) -> Self {
        SymptomValue::Flag(value)
    }
}

impl From<&str> for SymptomValue {
    fn from(value: &str) -> Self {
        SymptomValue::Text(value.to_string())
    }
}

impl From<String> for SymptomValue {
    fn from(value: String) -> Self {
        SymptomValue::Text(value)
    }
}

impl From<Vec<String>> for SymptomValue {
    fn from(value: Vec<String>) -> Self {
        SymptomValue::List(value)
    }
}

impl From<&[&str]> for SymptomValue {
    fn from(value: &[&str]) -> Self {
        SymptomValue::List(value.iter().map(|v| v.to_string()).collect())
    }
}
