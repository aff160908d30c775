#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::return_self_not_must_use)]

//! Discovery service models
//!
//! A [`Configuration`] describes how documents are converted, enriched, and
//! normalized before they are added to a collection.

mod configuration;
mod conversions;
mod enrichment;
mod html_settings;
mod normalization;
mod training_example;

pub use configuration::{Configuration, ConfigurationBuilder};
pub use conversions::{
    Conversions, ConversionsBuilder, FontSetting, FontSettingBuilder, PdfHeadingDetection, PdfHeadingDetectionBuilder,
    PdfSettings, PdfSettingsBuilder, SegmentSettings, SegmentSettingsBuilder, WordHeadingDetection,
    WordHeadingDetectionBuilder, WordSettings, WordSettingsBuilder, WordStyle, WordStyleBuilder,
};
pub use enrichment::{Enrichment, EnrichmentBuilder, EnrichmentOptions, EnrichmentOptionsBuilder};
pub use html_settings::{HtmlSettings, HtmlSettingsBuilder, XPathPatterns, XPathPatternsBuilder};
pub use normalization::{NormalizationOperation, NormalizationOperationBuilder, Operation};
pub use training_example::{TrainingExample, TrainingExampleBuilder};
pub use watson_core::{AbsentFields, ModelError, Result, Timestamp, WireModel};
