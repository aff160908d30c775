use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel};

/// Kind of change a normalization operation applies to the output JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Copy `source_field` to `destination_field`
    Copy,
    /// Rename `source_field` to `destination_field`
    Move,
    /// Merge `source_field` into the array at `destination_field`
    Merge,
    /// Delete `source_field`
    Remove,
    /// Delete every field whose value is null
    RemoveNulls,
    /// An operation name not known to this SDK, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Merge => "merge",
            Self::Remove => "remove",
            Self::RemoveNulls => "remove_nulls",
            Self::Other(name) => name,
        }
    }
}

// `Other` may hold a known name, so equality goes through the wire text
impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

/// One step of the normalization applied to converted documents
///
/// Operations run in the order they appear in their enclosing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    destination_field: Option<String>,
}

impl NormalizationOperation {
    pub fn builder() -> NormalizationOperationBuilder {
        NormalizationOperationBuilder::default()
    }

    pub fn to_builder(&self) -> NormalizationOperationBuilder {
        NormalizationOperationBuilder::from(self.clone())
    }

    pub const fn operation(&self) -> Option<&Operation> {
        self.operation.as_ref()
    }

    /// The field to operate on
    pub fn source_field(&self) -> Option<&str> {
        self.source_field.as_deref()
    }

    /// The field the result is written to, for operations that have one
    pub fn destination_field(&self) -> Option<&str> {
        self.destination_field.as_deref()
    }
}

impl WireModel for NormalizationOperation {
    const NAME: &'static str = "NormalizationOperation";
    const FIELDS: &'static [Field] = &[
        Field::scalar("operation"),
        Field::scalar("source_field"),
        Field::scalar("destination_field"),
    ];
}

/// Builder for [`NormalizationOperation`]
#[derive(Debug, Clone, Default)]
pub struct NormalizationOperationBuilder {
    operation: Option<Operation>,
    source_field: Option<String>,
    destination_field: Option<String>,
}

impl NormalizationOperationBuilder {
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn source_field(mut self, source_field: impl Into<String>) -> Self {
        self.source_field = Some(source_field.into());
        self
    }

    pub fn destination_field(mut self, destination_field: impl Into<String>) -> Self {
        self.destination_field = Some(destination_field.into());
        self
    }

    pub fn build(&self) -> Result<NormalizationOperation> {
        Ok(NormalizationOperation {
            operation: self.operation.clone(),
            source_field: self.source_field.clone(),
            destination_field: self.destination_field.clone(),
        })
    }
}

impl From<NormalizationOperation> for NormalizationOperationBuilder {
    fn from(value: NormalizationOperation) -> Self {
        Self {
            operation: value.operation,
            source_field: value.source_field,
            destination_field: value.destination_field,
        }
    }
}
