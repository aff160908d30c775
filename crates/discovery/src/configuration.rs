use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, Timestamp, WireModel};

use crate::{Conversions, Enrichment, NormalizationOperation};

/// A Discovery ingestion configuration
///
/// Documents added to a collection are converted, enriched, and then
/// normalized according to the collection's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    configuration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conversions: Option<Conversions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enrichments: Option<Vec<Enrichment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    normalizations: Option<Vec<NormalizationOperation>>,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn to_builder(&self) -> ConfigurationBuilder {
        ConfigurationBuilder::from(self.clone())
    }

    /// Identifier assigned by the service
    pub fn configuration_id(&self) -> Option<&str> {
        self.configuration_id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn created(&self) -> Option<Timestamp> {
        self.created
    }

    pub const fn updated(&self) -> Option<Timestamp> {
        self.updated
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn conversions(&self) -> Option<&Conversions> {
        self.conversions.as_ref()
    }

    pub fn enrichments(&self) -> Option<&[Enrichment]> {
        self.enrichments.as_deref()
    }

    /// Normalizations applied after enrichment, in order
    pub fn normalizations(&self) -> Option<&[NormalizationOperation]> {
        self.normalizations.as_deref()
    }
}

impl WireModel for Configuration {
    const NAME: &'static str = "Configuration";
    const FIELDS: &'static [Field] = &[
        Field::scalar("configuration_id"),
        Field::scalar("name"),
        Field::scalar("created"),
        Field::scalar("updated"),
        Field::scalar("description"),
        Field::model("conversions", Conversions::FIELDS),
        Field::model_list("enrichments", Enrichment::FIELDS),
        Field::model_list("normalizations", NormalizationOperation::FIELDS),
    ];
}

/// Builder for [`Configuration`]
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    configuration_id: Option<String>,
    name: Option<String>,
    created: Option<Timestamp>,
    updated: Option<Timestamp>,
    description: Option<String>,
    conversions: Option<Conversions>,
    enrichments: Option<Vec<Enrichment>>,
    normalizations: Option<Vec<NormalizationOperation>>,
}

impl ConfigurationBuilder {
    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn created(mut self, created: impl Into<Timestamp>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn updated(mut self, updated: impl Into<Timestamp>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn conversions(mut self, conversions: Conversions) -> Self {
        self.conversions = Some(conversions);
        self
    }

    pub fn add_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn enrichments(mut self, enrichments: impl Into<Option<Vec<Enrichment>>>) -> Self {
        self.enrichments = enrichments.into();
        self
    }

    pub fn add_normalization(mut self, normalization: NormalizationOperation) -> Self {
        self.normalizations.get_or_insert_with(Vec::new).push(normalization);
        self
    }

    pub fn normalizations(mut self, normalizations: impl Into<Option<Vec<NormalizationOperation>>>) -> Self {
        self.normalizations = normalizations.into();
        self
    }

    pub fn build(&self) -> Result<Configuration> {
        Ok(Configuration {
            configuration_id: self.configuration_id.clone(),
            name: self.name.clone(),
            created: self.created,
            updated: self.updated,
            description: self.description.clone(),
            conversions: self.conversions.clone(),
            enrichments: self.enrichments.clone(),
            normalizations: self.normalizations.clone(),
        })
    }
}

impl From<Configuration> for ConfigurationBuilder {
    fn from(value: Configuration) -> Self {
        Self {
            configuration_id: value.configuration_id,
            name: value.name,
            created: value.created,
            updated: value.updated,
            description: value.description,
            conversions: value.conversions,
            enrichments: value.enrichments,
            normalizations: value.normalizations,
        }
    }
}
