//! Region rule documents.
//!
//! Documents arrive from ingestion tooling with inconsistent field spelling
//! across versions (`rule_out` vs `ruleOut`, `question` vs `questionText`).
//! Every alias is accepted here; serialization always emits the canonical
//! spelling.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A per-region rule document: conditions in declaration order, each with its
/// ordered questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleDocument {
    pub region: String,
    #[serde(default)]
    pub title: String,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    /// Unique key within the region. Effects reference conditions by name.
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub questions: Vec<Question>,
    /// Clinical tests listed alongside the condition. Carried through
    /// untouched; the guided test flow uses decision graphs instead.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    #[serde(rename = "questionText", alias = "question", alias = "question_text")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable", alias = "answers")]
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: String,
    #[serde(default, deserialize_with = "nullable")]
    pub effects: Effects,
}

/// State mutations attached to an answer option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Effects {
    /// Conditions to open for deeper investigation. This never eliminates a
    /// condition.
    #[serde(default, deserialize_with = "nullable", alias = "ruleOut")]
    pub rule_out: Vec<String>,
    #[serde(default, deserialize_with = "nullable", alias = "increaseLikelihood")]
    pub increase_likelihood: Vec<String>,
    #[serde(default, deserialize_with = "nullable", alias = "decreaseLikelihood")]
    pub decrease_likelihood: Vec<String>,
    #[serde(default, deserialize_with = "nullable", alias = "redFlag")]
    pub red_flag: bool,
    #[serde(default, alias = "redFlagText")]
    pub red_flag_text: Option<String>,
    #[serde(default, alias = "nextQuestionId")]
    pub next_question_id: Option<String>,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self == &Effects::default()
    }
}

impl RuleDocument {
    /// Parse a rule document, accepting every historical field spelling.
    ///
    /// A document without a `conditions` array is rejected outright rather
    /// than treated as an empty region.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        match value.get("conditions") {
            Some(serde_json::Value::Array(_)) => {}
            Some(_) => {
                return Err(CoreError::InvalidRuleDocument(
                    "`conditions` is not an array".to_string(),
                ));
            }
            None => {
                return Err(CoreError::InvalidRuleDocument(
                    "document has no conditions array".to_string(),
                ));
            }
        }
        let document: RuleDocument = serde_json::from_value(value)
            .map_err(|e| CoreError::InvalidRuleDocument(e.to_string()))?;
        Ok(document)
    }

    /// Locate a question by ID, returning its `(condition, question)` indices.
    pub fn find_question(&self, id: &str) -> Option<(usize, usize)> {
        self.conditions.iter().enumerate().find_map(|(ci, condition)| {
            condition
                .questions
                .iter()
                .position(|q| q.id == id)
                .map(|qi| (ci, qi))
        })
    }

    /// The question at a traversal position, if the position is in range.
    pub fn question_at(&self, condition_index: usize, question_index: usize) -> Option<&Question> {
        self.conditions
            .get(condition_index)
            .and_then(|c| c.questions.get(question_index))
    }

    pub fn question_count(&self) -> usize {
        self.conditions.iter().map(|c| c.questions.len()).sum()
    }
}

/// Treat an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAKE: &str = r#"{
        "region": "lumbar",
        "title": "Lumbar Spine",
        "conditions": [{
            "name": "Lumbar Disc Herniation",
            "questions": [{
                "id": "q1",
                "question": "Do you have leg pain radiating below the knee?",
                "category": "radiating_pain",
                "options": [{
                    "value": "Yes",
                    "effects": {
                        "rule_out": ["Spinal Stenosis"],
                        "increase_likelihood": ["Lumbar Disc Herniation"],
                        "decrease_likelihood": [],
                        "red_flag": false,
                        "red_flag_text": null,
                        "next_question_id": "q2"
                    }
                }]
            }]
        }]
    }"#;

    const CAMEL: &str = r#"{
        "region": "lumbar",
        "title": "Lumbar Spine",
        "conditions": [{
            "name": "Lumbar Disc Herniation",
            "questions": [{
                "id": "q1",
                "questionText": "Do you have leg pain radiating below the knee?",
                "category": "radiating_pain",
                "options": [{
                    "value": "Yes",
                    "effects": {
                        "ruleOut": ["Spinal Stenosis"],
                        "increaseLikelihood": ["Lumbar Disc Herniation"],
                        "redFlag": false,
                        "nextQuestionId": "q2"
                    }
                }]
            }]
        }]
    }"#;

    #[test]
    fn snake_and_camel_spellings_normalize_identically() {
        let snake = RuleDocument::from_json(SNAKE).unwrap();
        let camel = RuleDocument::from_json(CAMEL).unwrap();
        assert_eq!(snake, camel);

        let effects = &snake.conditions[0].questions[0].options[0].effects;
        assert_eq!(effects.rule_out, vec!["Spinal Stenosis"]);
        assert_eq!(effects.next_question_id.as_deref(), Some("q2"));
    }

    #[test]
    fn serializes_canonical_spelling() {
        let doc = RuleDocument::from_json(CAMEL).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        let question = &json["conditions"][0]["questions"][0];
        assert!(question.get("questionText").is_some());
        assert!(question["options"][0]["effects"].get("increase_likelihood").is_some());
    }

    #[test]
    fn missing_conditions_is_rejected() {
        let err = RuleDocument::from_json(r#"{"region": "knee", "title": "Knee"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleDocument(_)));

        let err = RuleDocument::from_json(r#"{"region": "knee", "conditions": {}}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleDocument(_)));
    }

    #[test]
    fn null_and_missing_effects_default_to_empty() {
        let doc = RuleDocument::from_json(
            r#"{
                "region": "knee",
                "conditions": [{
                    "name": "Patellofemoral Pain",
                    "questions": [{
                        "id": "k1",
                        "questionText": "Does it hurt on stairs?",
                        "category": null,
                        "options": [
                            {"value": "Yes"},
                            {"value": "No", "effects": {"rule_out": null, "red_flag": null}}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let question = &doc.conditions[0].questions[0];
        assert_eq!(question.category, "");
        assert!(question.options.iter().all(|o| o.effects.is_empty()));
    }

    #[test]
    fn find_question_reports_traversal_position() {
        let doc = RuleDocument::from_json(SNAKE).unwrap();
        assert_eq!(doc.find_question("q1"), Some((0, 0)));
        assert_eq!(doc.find_question("missing"), None);
        assert_eq!(doc.question_count(), 1);
        assert!(doc.question_at(0, 1).is_none());
    }
}
