use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, Timestamp, WireModel};

/// Training state of a custom classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ready,
    Training,
    Retraining,
    Failed,
    /// A status not known to this SDK, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "ready",
            Self::Training => "training",
            Self::Retraining => "retraining",
            Self::Failed => "failed",
            Self::Other(status) => status,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.as_str() == "ready"
    }
}

// `Other` may hold a known name, so equality goes through the wire text
impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Status {}

impl Hash for Status {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

/// One class a classifier was trained to recognize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Class {
    pub fn builder() -> ClassBuilder {
        ClassBuilder::default()
    }

    pub fn to_builder(&self) -> ClassBuilder {
        ClassBuilder::from(self.clone())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl WireModel for Class {
    const NAME: &'static str = "Class";
    const FIELDS: &'static [Field] = &[Field::scalar("name").wire("class")];
}

/// Builder for [`Class`]
#[derive(Debug, Clone, Default)]
pub struct ClassBuilder {
    name: Option<String>,
}

impl ClassBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(&self) -> Result<Class> {
        Ok(Class { name: self.name.clone() })
    }
}

impl From<Class> for ClassBuilder {
    fn from(value: Class) -> Self {
        Self { name: value.name }
    }
}

/// A custom image classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    #[serde(rename = "classifier_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classes: Option<Vec<Class>>,
}

impl Classifier {
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    pub fn to_builder(&self) -> ClassifierBuilder {
        ClassifierBuilder::from(self.clone())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub const fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Reason a classifier is in the `failed` state
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub const fn created(&self) -> Option<Timestamp> {
        self.created
    }

    pub fn classes(&self) -> Option<&[Class]> {
        self.classes.as_deref()
    }
}

impl WireModel for Classifier {
    const NAME: &'static str = "Classifier";
    const FIELDS: &'static [Field] = &[
        Field::scalar("id").wire("classifier_id"),
        Field::scalar("name"),
        Field::scalar("owner"),
        Field::scalar("status"),
        Field::scalar("explanation"),
        Field::scalar("created"),
        Field::model_list("classes", Class::FIELDS),
    ];
}

/// Builder for [`Classifier`]
#[derive(Debug, Clone, Default)]
pub struct ClassifierBuilder {
    id: Option<String>,
    name: Option<String>,
    owner: Option<String>,
    status: Option<Status>,
    explanation: Option<String>,
    created: Option<Timestamp>,
    classes: Option<Vec<Class>>,
}

impl ClassifierBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn created(mut self, created: impl Into<Timestamp>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn add_class(mut self, class: Class) -> Self {
        self.classes.get_or_insert_with(Vec::new).push(class);
        self
    }

    pub fn classes(mut self, classes: impl Into<Option<Vec<Class>>>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn build(&self) -> Result<Classifier> {
        Ok(Classifier {
            id: self.id.clone(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            status: self.status.clone(),
            explanation: self.explanation.clone(),
            created: self.created,
            classes: self.classes.clone(),
        })
    }
}

impl From<Classifier> for ClassifierBuilder {
    fn from(value: Classifier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            owner: value.owner,
            status: value.status,
            explanation: value.explanation,
            created: value.created,
            classes: value.classes,
        }
    }
}

/// The custom classifiers listed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifiers: Option<Vec<Classifier>>,
}

impl Classifiers {
    pub fn builder() -> ClassifiersBuilder {
        ClassifiersBuilder::default()
    }

    pub fn to_builder(&self) -> ClassifiersBuilder {
        ClassifiersBuilder::from(self.clone())
    }

    pub fn classifiers(&self) -> Option<&[Classifier]> {
        self.classifiers.as_deref()
    }
}

impl WireModel for Classifiers {
    const NAME: &'static str = "Classifiers";
    const FIELDS: &'static [Field] = &[Field::model_list("classifiers", Classifier::FIELDS)];
}

/// Builder for [`Classifiers`]
#[derive(Debug, Clone, Default)]
pub struct ClassifiersBuilder {
    classifiers: Option<Vec<Classifier>>,
}

impl ClassifiersBuilder {
    pub fn add_classifier(mut self, classifier: Classifier) -> Self {
        self.classifiers.get_or_insert_with(Vec::new).push(classifier);
        self
    }

    pub fn classifiers(mut self, classifiers: impl Into<Option<Vec<Classifier>>>) -> Self {
        self.classifiers = classifiers.into();
        self
    }

    pub fn build(&self) -> Result<Classifiers> {
        Ok(Classifiers {
            classifiers: self.classifiers.clone(),
        })
    }
}

impl From<Classifiers> for ClassifiersBuilder {
    fn from(value: Classifiers) -> Self {
        Self {
            classifiers: value.classifiers,
        }
    }
}
