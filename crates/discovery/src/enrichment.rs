use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel, required};

/// An enrichment step run against one field of each ingested document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    destination_field: String,
    source_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overwrite: Option<bool>,
    #[serde(rename = "enrichment")]
    enrichment_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ignore_downstream_errors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<EnrichmentOptions>,
}

impl Enrichment {
    pub fn builder() -> EnrichmentBuilder {
        EnrichmentBuilder::default()
    }

    pub fn to_builder(&self) -> EnrichmentBuilder {
        EnrichmentBuilder::from(self.clone())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Field the enrichment output is written to
    pub fn destination_field(&self) -> &str {
        &self.destination_field
    }

    /// Field of the converted document that is enriched
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    /// Whether an existing `destination_field` is overwritten
    pub const fn overwrite(&self) -> Option<bool> {
        self.overwrite
    }

    /// Name of the enrichment service, e.g. `alchemy_language`
    pub fn enrichment_name(&self) -> &str {
        &self.enrichment_name
    }

    /// Whether documents are still ingested when a later enrichment fails
    pub const fn ignore_downstream_errors(&self) -> Option<bool> {
        self.ignore_downstream_errors
    }

    pub const fn options(&self) -> Option<&EnrichmentOptions> {
        self.options.as_ref()
    }
}

impl WireModel for Enrichment {
    const NAME: &'static str = "Enrichment";
    const FIELDS: &'static [Field] = &[
        Field::scalar("description"),
        Field::scalar("destination_field"),
        Field::scalar("source_field"),
        Field::scalar("overwrite"),
        Field::scalar("enrichment_name").wire("enrichment"),
        Field::scalar("ignore_downstream_errors"),
        Field::model("options", EnrichmentOptions::FIELDS),
    ];
}

/// Builder for [`Enrichment`]
#[derive(Debug, Clone, Default)]
pub struct EnrichmentBuilder {
    description: Option<String>,
    destination_field: Option<String>,
    source_field: Option<String>,
    overwrite: Option<bool>,
    enrichment_name: Option<String>,
    ignore_downstream_errors: Option<bool>,
    options: Option<EnrichmentOptions>,
}

impl EnrichmentBuilder {
    /// Builder with every required field already set
    pub fn new(
        destination_field: impl Into<String>,
        source_field: impl Into<String>,
        enrichment_name: impl Into<String>,
    ) -> Self {
        Self {
            destination_field: Some(destination_field.into()),
            source_field: Some(source_field.into()),
            enrichment_name: Some(enrichment_name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destination_field(mut self, destination_field: impl Into<String>) -> Self {
        self.destination_field = Some(destination_field.into());
        self
    }

    pub fn source_field(mut self, source_field: impl Into<String>) -> Self {
        self.source_field = Some(source_field.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    pub fn enrichment_name(mut self, enrichment_name: impl Into<String>) -> Self {
        self.enrichment_name = Some(enrichment_name.into());
        self
    }

    pub fn ignore_downstream_errors(mut self, ignore_downstream_errors: bool) -> Self {
        self.ignore_downstream_errors = Some(ignore_downstream_errors);
        self
    }

    pub fn options(mut self, options: EnrichmentOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(&self) -> Result<Enrichment> {
        Ok(Enrichment {
            description: self.description.clone(),
            destination_field: required(Enrichment::NAME, "destination_field", self.destination_field.as_ref())?,
            source_field: required(Enrichment::NAME, "source_field", self.source_field.as_ref())?,
            overwrite: self.overwrite,
            enrichment_name: required(Enrichment::NAME, "enrichment_name", self.enrichment_name.as_ref())?,
            ignore_downstream_errors: self.ignore_downstream_errors,
            options: self.options.clone(),
        })
    }
}

impl From<Enrichment> for EnrichmentBuilder {
    fn from(value: Enrichment) -> Self {
        Self {
            description: value.description,
            destination_field: Some(value.destination_field),
            source_field: Some(value.source_field),
            overwrite: value.overwrite,
            enrichment_name: Some(value.enrichment_name),
            ignore_downstream_errors: value.ignore_downstream_errors,
            options: value.options,
        }
    }
}

/// Options passed through to the enrichment service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extract: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sentiment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quotations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_source_text: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hierarchical_typed_relations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl EnrichmentOptions {
    pub fn builder() -> EnrichmentOptionsBuilder {
        EnrichmentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> EnrichmentOptionsBuilder {
        EnrichmentOptionsBuilder::from(self.clone())
    }

    /// Features to extract, e.g. `keyword`, `entity`, `concept`
    pub fn extract(&self) -> Option<&[String]> {
        self.extract.as_deref()
    }

    pub const fn sentiment(&self) -> Option<bool> {
        self.sentiment
    }

    pub const fn quotations(&self) -> Option<bool> {
        self.quotations
    }

    pub const fn show_source_text(&self) -> Option<bool> {
        self.show_source_text
    }

    pub const fn hierarchical_typed_relations(&self) -> Option<bool> {
        self.hierarchical_typed_relations
    }

    /// Custom model identifier
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl WireModel for EnrichmentOptions {
    const NAME: &'static str = "EnrichmentOptions";
    const FIELDS: &'static [Field] = &[
        Field::list("extract"),
        Field::scalar("sentiment"),
        Field::scalar("quotations"),
        Field::scalar("show_source_text"),
        Field::scalar("hierarchical_typed_relations"),
        Field::scalar("model"),
        Field::scalar("language"),
    ];
}

/// Builder for [`EnrichmentOptions`]
#[derive(Debug, Clone, Default)]
pub struct EnrichmentOptionsBuilder {
    extract: Option<Vec<String>>,
    sentiment: Option<bool>,
    quotations: Option<bool>,
    show_source_text: Option<bool>,
    hierarchical_typed_relations: Option<bool>,
    model: Option<String>,
    language: Option<String>,
}

impl EnrichmentOptionsBuilder {
    pub fn add_extract(mut self, feature: impl Into<String>) -> Self {
        self.extract.get_or_insert_with(Vec::new).push(feature.into());
        self
    }

    pub fn extract(mut self, features: impl Into<Option<Vec<String>>>) -> Self {
        self.extract = features.into();
        self
    }

    pub fn sentiment(mut self, sentiment: bool) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn quotations(mut self, quotations: bool) -> Self {
        self.quotations = Some(quotations);
        self
    }

    pub fn show_source_text(mut self, show_source_text: bool) -> Self {
        self.show_source_text = Some(show_source_text);
        self
    }

    pub fn hierarchical_typed_relations(mut self, hierarchical_typed_relations: bool) -> Self {
        self.hierarchical_typed_relations = Some(hierarchical_typed_relations);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn build(&self) -> Result<EnrichmentOptions> {
        Ok(EnrichmentOptions {
            extract: self.extract.clone(),
            sentiment: self.sentiment,
            quotations: self.quotations,
            show_source_text: self.show_source_text,
            hierarchical_typed_relations: self.hierarchical_typed_relations,
            model: self.model.clone(),
            language: self.language.clone(),
        })
    }
}

impl From<EnrichmentOptions> for EnrichmentOptionsBuilder {
    fn from(value: EnrichmentOptions) -> Self {
        Self {
            extract: value.extract,
            sentiment: value.sentiment,
            quotations: value.quotations,
            show_source_text: value.show_source_text,
            hierarchical_typed_relations: value.hierarchical_typed_relations,
            model: value.model,
            language: value.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use watson_core::{ModelError, testing};

    use super::*;

    fn options() -> EnrichmentOptions {
        EnrichmentOptions::builder()
            .add_extract("keyword")
            .add_extract("entity")
            .sentiment(true)
            .quotations(false)
            .show_source_text(false)
            .hierarchical_typed_relations(true)
            .model("ie-en-news")
            .language("english")
            .build()
            .unwrap()
    }

    fn full() -> Enrichment {
        EnrichmentBuilder::new("enriched_text", "text", "alchemy_language")
            .description("Extract keywords")
            .overwrite(false)
            .ignore_downstream_errors(true)
            .options(options())
            .build()
            .unwrap()
    }

    #[test]
    fn required_args_constructor_builds() {
        let enrichment = EnrichmentBuilder::new("enriched_text", "text", "alchemy_language")
            .build()
            .unwrap();

        assert_eq!(enrichment.destination_field(), "enriched_text");
        assert_eq!(enrichment.source_field(), "text");
        assert_eq!(enrichment.enrichment_name(), "alchemy_language");
        assert_eq!(enrichment.options(), None);
    }

    #[test]
    fn each_required_field_is_checked() {
        let complete = EnrichmentBuilder::new("out", "in", "alchemy_language");

        let mut missing = complete.clone();
        missing.destination_field = None;
        assert_eq!(missing.build().unwrap_err().missing_field(), Some("destination_field"));

        let mut missing = complete.clone();
        missing.source_field = None;
        assert_eq!(missing.build().unwrap_err().missing_field(), Some("source_field"));

        let mut missing = complete;
        missing.enrichment_name = None;
        assert_eq!(missing.build().unwrap_err().missing_field(), Some("enrichment_name"));
    }

    #[test]
    fn empty_builder_reports_first_missing_field() {
        let err = Enrichment::builder().description("x").build().unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                model: "Enrichment",
                field: "destination_field"
            }
        ));
    }

    #[test]
    fn setters_fill_required_fields() {
        let enrichment = Enrichment::builder()
            .destination_field("out")
            .source_field("in")
            .enrichment_name("natural_language_understanding")
            .build()
            .unwrap();
        assert_eq!(enrichment.enrichment_name(), "natural_language_understanding");
    }

    #[test]
    fn enrichment_name_uses_wire_key() {
        assert_eq!(Enrichment::wire_key("enrichment_name"), Some("enrichment"));
        assert_eq!(Enrichment::field_name("enrichment"), Some("enrichment_name"));

        let value = full().to_value().unwrap();
        assert_eq!(value["enrichment"], json!("alchemy_language"));
        assert!(value.get("enrichment_name").is_none());
    }

    #[test]
    fn service_payload_round_trips() {
        let enrichment: Enrichment = testing::assert_round_trip(&json!({
            "destination_field": "enriched_text",
            "source_field": "text",
            "enrichment": "alchemy_language",
            "options": {
                "extract": ["keyword", "entity", "doc-sentiment", "taxonomy", "concept", "relation"],
                "sentiment": true,
                "quotations": true
            }
        }));

        assert_eq!(enrichment.options().and_then(EnrichmentOptions::extract).map(<[String]>::len), Some(6));
    }

    #[test]
    fn missing_required_key_fails_to_decode() {
        let err = Enrichment::from_value(json!({ "destination_field": "out", "source_field": "in" })).unwrap_err();
        assert!(matches!(err, ModelError::Decode { model: "Enrichment", .. }));
    }

    #[test]
    fn copy_builder_reproduces_instance() {
        let enrichment = full();
        assert_eq!(enrichment.to_builder().build().unwrap(), enrichment);
        assert_eq!(options().to_builder().build().unwrap(), options());
    }

    #[test]
    fn field_tables_match_encoding() {
        testing::assert_field_table(&full());
        testing::assert_field_table(&options());
    }

    #[test]
    fn encoded_form() {
        let enrichment = EnrichmentBuilder::new("enriched_text", "text", "alchemy_language")
            .overwrite(false)
            .build()
            .unwrap();

        insta::assert_json_snapshot!(enrichment, @r#"
        {
          "destination_field": "enriched_text",
          "source_field": "text",
          "overwrite": false,
          "enrichment": "alchemy_language"
        }
        "#);
    }
}
