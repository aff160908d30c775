use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel};

use crate::{HtmlSettings, NormalizationOperation};

/// Document conversion settings, one section per source format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pdf: Option<PdfSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    word: Option<WordSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    html: Option<HtmlSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    segment: Option<SegmentSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    json_normalizations: Option<Vec<NormalizationOperation>>,
}

impl Conversions {
    pub fn builder() -> ConversionsBuilder {
        ConversionsBuilder::default()
    }

    pub fn to_builder(&self) -> ConversionsBuilder {
        ConversionsBuilder::from(self.clone())
    }

    pub const fn pdf(&self) -> Option<&PdfSettings> {
        self.pdf.as_ref()
    }

    pub const fn word(&self) -> Option<&WordSettings> {
        self.word.as_ref()
    }

    pub const fn html(&self) -> Option<&HtmlSettings> {
        self.html.as_ref()
    }

    pub const fn segment(&self) -> Option<&SegmentSettings> {
        self.segment.as_ref()
    }

    /// Normalizations applied to the JSON produced by conversion, in order
    pub fn json_normalizations(&self) -> Option<&[NormalizationOperation]> {
        self.json_normalizations.as_deref()
    }
}

impl WireModel for Conversions {
    const NAME: &'static str = "Conversions";
    const FIELDS: &'static [Field] = &[
        Field::model("pdf", PdfSettings::FIELDS),
        Field::model("word", WordSettings::FIELDS),
        Field::model("html", HtmlSettings::FIELDS),
        Field::model("segment", SegmentSettings::FIELDS),
        Field::model_list("json_normalizations", NormalizationOperation::FIELDS),
    ];
}

/// Builder for [`Conversions`]
#[derive(Debug, Clone, Default)]
pub struct ConversionsBuilder {
    pdf: Option<PdfSettings>,
    word: Option<WordSettings>,
    html: Option<HtmlSettings>,
    segment: Option<SegmentSettings>,
    json_normalizations: Option<Vec<NormalizationOperation>>,
}

impl ConversionsBuilder {
    pub fn pdf(mut self, pdf: PdfSettings) -> Self {
        self.pdf = Some(pdf);
        self
    }

    pub fn word(mut self, word: WordSettings) -> Self {
        self.word = Some(word);
        self
    }

    pub fn html(mut self, html: HtmlSettings) -> Self {
        self.html = Some(html);
        self
    }

    pub fn segment(mut self, segment: SegmentSettings) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn add_json_normalization(mut self, operation: NormalizationOperation) -> Self {
        self.json_normalizations.get_or_insert_with(Vec::new).push(operation);
        self
    }

    pub fn json_normalizations(mut self, operations: impl Into<Option<Vec<NormalizationOperation>>>) -> Self {
        self.json_normalizations = operations.into();
        self
    }

    pub fn build(&self) -> Result<Conversions> {
        Ok(Conversions {
            pdf: self.pdf.clone(),
            word: self.word.clone(),
            html: self.html.clone(),
            segment: self.segment.clone(),
            json_normalizations: self.json_normalizations.clone(),
        })
    }
}

impl From<Conversions> for ConversionsBuilder {
    fn from(value: Conversions) -> Self {
        Self {
            pdf: value.pdf,
            word: value.word,
            html: value.html,
            segment: value.segment,
            json_normalizations: value.json_normalizations,
        }
    }
}

/// PDF conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading: Option<PdfHeadingDetection>,
}

impl PdfSettings {
    pub fn builder() -> PdfSettingsBuilder {
        PdfSettingsBuilder::default()
    }

    pub fn to_builder(&self) -> PdfSettingsBuilder {
        PdfSettingsBuilder::from(self.clone())
    }

    pub const fn heading(&self) -> Option<&PdfHeadingDetection> {
        self.heading.as_ref()
    }
}

impl WireModel for PdfSettings {
    const NAME: &'static str = "PdfSettings";
    const FIELDS: &'static [Field] = &[Field::model("heading", PdfHeadingDetection::FIELDS)];
}

/// Builder for [`PdfSettings`]
#[derive(Debug, Clone, Default)]
pub struct PdfSettingsBuilder {
    heading: Option<PdfHeadingDetection>,
}

impl PdfSettingsBuilder {
    pub fn heading(mut self, heading: PdfHeadingDetection) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn build(&self) -> Result<PdfSettings> {
        Ok(PdfSettings {
            heading: self.heading.clone(),
        })
    }
}

impl From<PdfSettings> for PdfSettingsBuilder {
    fn from(value: PdfSettings) -> Self {
        Self { heading: value.heading }
    }
}

/// Font rules used to detect headings in PDF documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfHeadingDetection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fonts: Option<Vec<FontSetting>>,
}

impl PdfHeadingDetection {
    pub fn builder() -> PdfHeadingDetectionBuilder {
        PdfHeadingDetectionBuilder::default()
    }

    pub fn to_builder(&self) -> PdfHeadingDetectionBuilder {
        PdfHeadingDetectionBuilder::from(self.clone())
    }

    pub fn fonts(&self) -> Option<&[FontSetting]> {
        self.fonts.as_deref()
    }
}

impl WireModel for PdfHeadingDetection {
    const NAME: &'static str = "PdfHeadingDetection";
    const FIELDS: &'static [Field] = &[Field::model_list("fonts", FontSetting::FIELDS)];
}

/// Builder for [`PdfHeadingDetection`]
#[derive(Debug, Clone, Default)]
pub struct PdfHeadingDetectionBuilder {
    fonts: Option<Vec<FontSetting>>,
}

impl PdfHeadingDetectionBuilder {
    pub fn add_font(mut self, font: FontSetting) -> Self {
        self.fonts.get_or_insert_with(Vec::new).push(font);
        self
    }

    pub fn fonts(mut self, fonts: impl Into<Option<Vec<FontSetting>>>) -> Self {
        self.fonts = fonts.into();
        self
    }

    pub fn build(&self) -> Result<PdfHeadingDetection> {
        Ok(PdfHeadingDetection {
            fonts: self.fonts.clone(),
        })
    }
}

impl From<PdfHeadingDetection> for PdfHeadingDetectionBuilder {
    fn from(value: PdfHeadingDetection) -> Self {
        Self { fonts: value.fonts }
    }
}

/// Font properties that mark text as a heading of a given level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl FontSetting {
    pub fn builder() -> FontSettingBuilder {
        FontSettingBuilder::default()
    }

    pub fn to_builder(&self) -> FontSettingBuilder {
        FontSettingBuilder::from(self.clone())
    }

    /// Heading level assigned to matching text
    pub const fn level(&self) -> Option<i64> {
        self.level
    }

    pub const fn min_size(&self) -> Option<i64> {
        self.min_size
    }

    pub const fn max_size(&self) -> Option<i64> {
        self.max_size
    }

    pub const fn bold(&self) -> Option<bool> {
        self.bold
    }

    pub const fn italic(&self) -> Option<bool> {
        self.italic
    }

    /// Font name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl WireModel for FontSetting {
    const NAME: &'static str = "FontSetting";
    const FIELDS: &'static [Field] = &[
        Field::scalar("level"),
        Field::scalar("min_size"),
        Field::scalar("max_size"),
        Field::scalar("bold"),
        Field::scalar("italic"),
        Field::scalar("name"),
    ];
}

/// Builder for [`FontSetting`]
#[derive(Debug, Clone, Default)]
pub struct FontSettingBuilder {
    level: Option<i64>,
    min_size: Option<i64>,
    max_size: Option<i64>,
    bold: Option<bool>,
    italic: Option<bool>,
    name: Option<String>,
}

impl FontSettingBuilder {
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn min_size(mut self, min_size: i64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(mut self, max_size: i64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(&self) -> Result<FontSetting> {
        Ok(FontSetting {
            level: self.level,
            min_size: self.min_size,
            max_size: self.max_size,
            bold: self.bold,
            italic: self.italic,
            name: self.name.clone(),
        })
    }
}

impl From<FontSetting> for FontSettingBuilder {
    fn from(value: FontSetting) -> Self {
        Self {
            level: value.level,
            min_size: value.min_size,
            max_size: value.max_size,
            bold: value.bold,
            italic: value.italic,
            name: value.name,
        }
    }
}

/// Microsoft Word conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading: Option<WordHeadingDetection>,
}

impl WordSettings {
    pub fn builder() -> WordSettingsBuilder {
        WordSettingsBuilder::default()
    }

    pub fn to_builder(&self) -> WordSettingsBuilder {
        WordSettingsBuilder::from(self.clone())
    }

    pub const fn heading(&self) -> Option<&WordHeadingDetection> {
        self.heading.as_ref()
    }
}

impl WireModel for WordSettings {
    const NAME: &'static str = "WordSettings";
    const FIELDS: &'static [Field] = &[Field::model("heading", WordHeadingDetection::FIELDS)];
}

/// Builder for [`WordSettings`]
#[derive(Debug, Clone, Default)]
pub struct WordSettingsBuilder {
    heading: Option<WordHeadingDetection>,
}

impl WordSettingsBuilder {
    pub fn heading(mut self, heading: WordHeadingDetection) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn build(&self) -> Result<WordSettings> {
        Ok(WordSettings {
            heading: self.heading.clone(),
        })
    }
}

impl From<WordSettings> for WordSettingsBuilder {
    fn from(value: WordSettings) -> Self {
        Self { heading: value.heading }
    }
}

/// Font and style rules used to detect headings in Word documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHeadingDetection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fonts: Option<Vec<FontSetting>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    styles: Option<Vec<WordStyle>>,
}

impl WordHeadingDetection {
    pub fn builder() -> WordHeadingDetectionBuilder {
        WordHeadingDetectionBuilder::default()
    }

    pub fn to_builder(&self) -> WordHeadingDetectionBuilder {
        WordHeadingDetectionBuilder::from(self.clone())
    }

    pub fn fonts(&self) -> Option<&[FontSetting]> {
        self.fonts.as_deref()
    }

    pub fn styles(&self) -> Option<&[WordStyle]> {
        self.styles.as_deref()
    }
}

impl WireModel for WordHeadingDetection {
    const NAME: &'static str = "WordHeadingDetection";
    const FIELDS: &'static [Field] = &[
        Field::model_list("fonts", FontSetting::FIELDS),
        Field::model_list("styles", WordStyle::FIELDS),
    ];
}

/// Builder for [`WordHeadingDetection`]
#[derive(Debug, Clone, Default)]
pub struct WordHeadingDetectionBuilder {
    fonts: Option<Vec<FontSetting>>,
    styles: Option<Vec<WordStyle>>,
}

impl WordHeadingDetectionBuilder {
    pub fn add_font(mut self, font: FontSetting) -> Self {
        self.fonts.get_or_insert_with(Vec::new).push(font);
        self
    }

    pub fn add_style(mut self, style: WordStyle) -> Self {
        self.styles.get_or_insert_with(Vec::new).push(style);
        self
    }

    pub fn fonts(mut self, fonts: impl Into<Option<Vec<FontSetting>>>) -> Self {
        self.fonts = fonts.into();
        self
    }

    pub fn styles(mut self, styles: impl Into<Option<Vec<WordStyle>>>) -> Self {
        self.styles = styles.into();
        self
    }

    pub fn build(&self) -> Result<WordHeadingDetection> {
        Ok(WordHeadingDetection {
            fonts: self.fonts.clone(),
            styles: self.styles.clone(),
        })
    }
}

impl From<WordHeadingDetection> for WordHeadingDetectionBuilder {
    fn from(value: WordHeadingDetection) -> Self {
        Self {
            fonts: value.fonts,
            styles: value.styles,
        }
    }
}

/// Word paragraph styles that mark text as a heading of a given level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    names: Option<Vec<String>>,
}

impl WordStyle {
    pub fn builder() -> WordStyleBuilder {
        WordStyleBuilder::default()
    }

    pub fn to_builder(&self) -> WordStyleBuilder {
        WordStyleBuilder::from(self.clone())
    }

    pub const fn level(&self) -> Option<i64> {
        self.level
    }

    /// Style names, e.g. `pullout heading`
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }
}

impl WireModel for WordStyle {
    const NAME: &'static str = "WordStyle";
    const FIELDS: &'static [Field] = &[Field::scalar("level"), Field::list("names")];
}

/// Builder for [`WordStyle`]
#[derive(Debug, Clone, Default)]
pub struct WordStyleBuilder {
    level: Option<i64>,
    names: Option<Vec<String>>,
}

impl WordStyleBuilder {
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn add_name(mut self, name: impl Into<String>) -> Self {
        self.names.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    pub fn names(mut self, names: impl Into<Option<Vec<String>>>) -> Self {
        self.names = names.into();
        self
    }

    pub fn build(&self) -> Result<WordStyle> {
        Ok(WordStyle {
            level: self.level,
            names: self.names.clone(),
        })
    }
}

impl From<WordStyle> for WordStyleBuilder {
    fn from(value: WordStyle) -> Self {
        Self {
            level: value.level,
            names: value.names,
        }
    }
}

/// Splits converted documents into segments at the given heading tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selector_tags: Option<Vec<String>>,
}

impl SegmentSettings {
    pub fn builder() -> SegmentSettingsBuilder {
        SegmentSettingsBuilder::default()
    }

    pub fn to_builder(&self) -> SegmentSettingsBuilder {
        SegmentSettingsBuilder::from(self.clone())
    }

    pub const fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Heading tags (`h1` to `h6`) that start a new segment
    pub fn selector_tags(&self) -> Option<&[String]> {
        self.selector_tags.as_deref()
    }
}

impl WireModel for SegmentSettings {
    const NAME: &'static str = "SegmentSettings";
    const FIELDS: &'static [Field] = &[Field::scalar("enabled"), Field::list("selector_tags")];
}

/// Builder for [`SegmentSettings`]
#[derive(Debug, Clone, Default)]
pub struct SegmentSettingsBuilder {
    enabled: Option<bool>,
    selector_tags: Option<Vec<String>>,
}

impl SegmentSettingsBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn add_selector_tag(mut self, tag: impl Into<String>) -> Self {
        self.selector_tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    pub fn selector_tags(mut self, tags: impl Into<Option<Vec<String>>>) -> Self {
        self.selector_tags = tags.into();
        self
    }

    pub fn build(&self) -> Result<SegmentSettings> {
        Ok(SegmentSettings {
            enabled: self.enabled,
            selector_tags: self.selector_tags.clone(),
        })
    }
}

impl From<SegmentSettings> for SegmentSettingsBuilder {
    fn from(value: SegmentSettings) -> Self {
        Self {
            enabled: value.enabled,
            selector_tags: value.selector_tags,
        }
    }
}
