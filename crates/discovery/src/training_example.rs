use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel};

/// A document judged against a training query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cross_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relevance: Option<i64>,
}

impl TrainingExample {
    pub fn builder() -> TrainingExampleBuilder {
        TrainingExampleBuilder::default()
    }

    pub fn to_builder(&self) -> TrainingExampleBuilder {
        TrainingExampleBuilder::from(self.clone())
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    pub fn cross_reference(&self) -> Option<&str> {
        self.cross_reference.as_deref()
    }

    /// Relevance score, higher is more relevant
    pub const fn relevance(&self) -> Option<i64> {
        self.relevance
    }
}

impl WireModel for TrainingExample {
    const NAME: &'static str = "TrainingExample";
    const FIELDS: &'static [Field] = &[
        Field::scalar("document_id"),
        Field::scalar("cross_reference"),
        Field::scalar("relevance"),
    ];
}

/// Builder for [`TrainingExample`]
#[derive(Debug, Clone, Default)]
pub struct TrainingExampleBuilder {
    document_id: Option<String>,
    cross_reference: Option<String>,
    relevance: Option<i64>,
}

impl TrainingExampleBuilder {
    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn cross_reference(mut self, cross_reference: impl Into<String>) -> Self {
        self.cross_reference = Some(cross_reference.into());
        self
    }

    pub fn relevance(mut self, relevance: i64) -> Self {
        self.relevance = Some(relevance);
        self
    }

    pub fn build(&self) -> Result<TrainingExample> {
        Ok(TrainingExample {
            document_id: self.document_id.clone(),
            cross_reference: self.cross_reference.clone(),
            relevance: self.relevance,
        })
    }
}

impl From<TrainingExample> for TrainingExampleBuilder {
    fn from(value: TrainingExample) -> Self {
        Self {
            document_id: value.document_id,
            cross_reference: value.cross_reference,
            relevance: value.relevance,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use watson_core::{ModelError, testing};

    use super::*;

    #[test]
    fn builds_and_encodes() {
        let example = TrainingExample::builder()
            .document_id("doc-1")
            .cross_reference("ref-9")
            .relevance(10)
            .build()
            .unwrap();

        assert_eq!(
            example.to_value().unwrap(),
            json!({ "document_id": "doc-1", "cross_reference": "ref-9", "relevance": 10 })
        );
    }

    #[test]
    fn zero_relevance_is_present() {
        let example: TrainingExample = testing::assert_round_trip(&json!({ "document_id": "doc-2", "relevance": 0 }));
        assert_eq!(example.relevance(), Some(0));
        assert_eq!(example.cross_reference(), None);
    }

    #[test]
    fn non_integer_relevance_fails_to_decode() {
        let err = TrainingExample::from_value(json!({ "relevance": "high" })).unwrap_err();
        assert!(matches!(err, ModelError::Decode { model: "TrainingExample", .. }));
    }

    #[test]
    fn copy_builder_reproduces_instance() {
        let example = TrainingExample::builder().document_id("doc-1").relevance(3).build().unwrap();
        assert_eq!(example.to_builder().build().unwrap(), example);
        testing::assert_field_table(&example.to_builder().cross_reference("r").build().unwrap());
    }
}
