use clap::ValueEnum;
use conversation::CaptureGroup;
use discovery::{Configuration, Conversions, Enrichment, HtmlSettings, NormalizationOperation, TrainingExample};
use serde_json::Value;
use text_to_speech::{Voice, Voices};
use visual_recognition::{Classifier, Classifiers};
use watson_core::{AbsentFields, Field, Result, Shape, WireModel};

/// Model types the CLI can work with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    CaptureGroup,
    Configuration,
    Conversions,
    Enrichment,
    NormalizationOperation,
    TrainingExample,
    HtmlSettings,
    Voices,
    Voice,
    Classifiers,
    Classifier,
}

impl ModelKind {
    /// Decode `payload` as this model and encode it back
    pub fn normalize(self, payload: &str, absent: AbsentFields) -> Result<Value> {
        match self {
            Self::CaptureGroup => normalize::<CaptureGroup>(payload, absent),
            Self::Configuration => normalize::<Configuration>(payload, absent),
            Self::Conversions => normalize::<Conversions>(payload, absent),
            Self::Enrichment => normalize::<Enrichment>(payload, absent),
            Self::NormalizationOperation => normalize::<NormalizationOperation>(payload, absent),
            Self::TrainingExample => normalize::<TrainingExample>(payload, absent),
            Self::HtmlSettings => normalize::<HtmlSettings>(payload, absent),
            Self::Voices => normalize::<Voices>(payload, absent),
            Self::Voice => normalize::<Voice>(payload, absent),
            Self::Classifiers => normalize::<Classifiers>(payload, absent),
            Self::Classifier => normalize::<Classifier>(payload, absent),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::CaptureGroup => CaptureGroup::NAME,
            Self::Configuration => Configuration::NAME,
            Self::Conversions => Conversions::NAME,
            Self::Enrichment => Enrichment::NAME,
            Self::NormalizationOperation => NormalizationOperation::NAME,
            Self::TrainingExample => TrainingExample::NAME,
            Self::HtmlSettings => HtmlSettings::NAME,
            Self::Voices => Voices::NAME,
            Self::Voice => Voice::NAME,
            Self::Classifiers => Classifiers::NAME,
            Self::Classifier => Classifier::NAME,
        }
    }

    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::CaptureGroup => CaptureGroup::FIELDS,
            Self::Configuration => Configuration::FIELDS,
            Self::Conversions => Conversions::FIELDS,
            Self::Enrichment => Enrichment::FIELDS,
            Self::NormalizationOperation => NormalizationOperation::FIELDS,
            Self::TrainingExample => TrainingExample::FIELDS,
            Self::HtmlSettings => HtmlSettings::FIELDS,
            Self::Voices => Voices::FIELDS,
            Self::Voice => Voice::FIELDS,
            Self::Classifiers => Classifiers::FIELDS,
            Self::Classifier => Classifier::FIELDS,
        }
    }
}

fn normalize<T: WireModel>(payload: &str, absent: AbsentFields) -> Result<Value> {
    T::from_json(payload)?.to_value_with(absent)
}

/// Render a field table, nested tables indented under their field
pub fn describe(fields: &[Field]) -> String {
    let mut out = String::new();
    describe_into(&mut out, fields, 0);
    out
}

fn describe_into(out: &mut String, fields: &[Field], depth: usize) {
    for field in fields {
        let indent = "  ".repeat(depth);
        let (kind, nested) = match field.shape() {
            Shape::Scalar => ("scalar", None),
            Shape::List => ("list", None),
            Shape::Model(nested) => ("model", Some(nested)),
            Shape::ModelList(nested) => ("model list", Some(nested)),
        };

        let line = if field.is_renamed() {
            format!("{indent}{} -> {} ({kind})\n", field.name(), field.wire_key())
        } else {
            format!("{indent}{} ({kind})\n", field.name())
        };
        out.push_str(&line);

        if let Some(nested) = nested {
            describe_into(out, nested, depth + 1);
        }
    }
}
