use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel};

/// XPath expressions selecting parts of an HTML document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XPathPatterns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xpaths: Option<Vec<String>>,
}

impl XPathPatterns {
    pub fn builder() -> XPathPatternsBuilder {
        XPathPatternsBuilder::default()
    }

    pub fn to_builder(&self) -> XPathPatternsBuilder {
        XPathPatternsBuilder::from(self.clone())
    }

    pub fn xpaths(&self) -> Option<&[String]> {
        self.xpaths.as_deref()
    }
}

impl WireModel for XPathPatterns {
    const NAME: &'static str = "XPathPatterns";
    const FIELDS: &'static [Field] = &[Field::list("xpaths")];
}

/// Builder for [`XPathPatterns`]
#[derive(Debug, Clone, Default)]
pub struct XPathPatternsBuilder {
    xpaths: Option<Vec<String>>,
}

impl XPathPatternsBuilder {
    pub fn add_xpath(mut self, xpath: impl Into<String>) -> Self {
        self.xpaths.get_or_insert_with(Vec::new).push(xpath.into());
        self
    }

    /// Replace `xpaths`, discarding any added so far
    pub fn xpaths(mut self, xpaths: impl Into<Option<Vec<String>>>) -> Self {
        self.xpaths = xpaths.into();
        self
    }

    pub fn build(&self) -> Result<XPathPatterns> {
        Ok(XPathPatterns {
            xpaths: self.xpaths.clone(),
        })
    }
}

impl From<XPathPatterns> for XPathPatternsBuilder {
    fn from(value: XPathPatterns) -> Self {
        Self { xpaths: value.xpaths }
    }
}

/// HTML conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_tags_completely: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_tags_keep_content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keep_content: Option<XPathPatterns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_content: Option<XPathPatterns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keep_tag_attributes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_tag_attributes: Option<Vec<String>>,
}

impl HtmlSettings {
    pub fn builder() -> HtmlSettingsBuilder {
        HtmlSettingsBuilder::default()
    }

    pub fn to_builder(&self) -> HtmlSettingsBuilder {
        HtmlSettingsBuilder::from(self.clone())
    }

    /// Tags removed together with everything inside them
    pub fn exclude_tags_completely(&self) -> Option<&[String]> {
        self.exclude_tags_completely.as_deref()
    }

    /// Tags removed while their content is kept
    pub fn exclude_tags_keep_content(&self) -> Option<&[String]> {
        self.exclude_tags_keep_content.as_deref()
    }

    pub const fn keep_content(&self) -> Option<&XPathPatterns> {
        self.keep_content.as_ref()
    }

    pub const fn exclude_content(&self) -> Option<&XPathPatterns> {
        self.exclude_content.as_ref()
    }

    pub fn keep_tag_attributes(&self) -> Option<&[String]> {
        self.keep_tag_attributes.as_deref()
    }

    pub fn exclude_tag_attributes(&self) -> Option<&[String]> {
        self.exclude_tag_attributes.as_deref()
    }
}

impl WireModel for HtmlSettings {
    const NAME: &'static str = "HtmlSettings";
    const FIELDS: &'static [Field] = &[
        Field::list("exclude_tags_completely"),
        Field::list("exclude_tags_keep_content"),
        Field::model("keep_content", XPathPatterns::FIELDS),
        Field::model("exclude_content", XPathPatterns::FIELDS),
        Field::list("keep_tag_attributes"),
        Field::list("exclude_tag_attributes"),
    ];
}

/// Builder for [`HtmlSettings`]
#[derive(Debug, Clone, Default)]
pub struct HtmlSettingsBuilder {
    exclude_tags_completely: Option<Vec<String>>,
    exclude_tags_keep_content: Option<Vec<String>>,
    keep_content: Option<XPathPatterns>,
    exclude_content: Option<XPathPatterns>,
    keep_tag_attributes: Option<Vec<String>>,
    exclude_tag_attributes: Option<Vec<String>>,
}

impl HtmlSettingsBuilder {
    pub fn add_exclude_tags_completely(mut self, tag: impl Into<String>) -> Self {
        self.exclude_tags_completely.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    pub fn add_exclude_tags_keep_content(mut self, tag: impl Into<String>) -> Self {
        self.exclude_tags_keep_content.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    pub fn add_keep_tag_attributes(mut self, attribute: impl Into<String>) -> Self {
        self.keep_tag_attributes.get_or_insert_with(Vec::new).push(attribute.into());
        self
    }

    pub fn add_exclude_tag_attributes(mut self, attribute: impl Into<String>) -> Self {
        self.exclude_tag_attributes.get_or_insert_with(Vec::new).push(attribute.into());
        self
    }

    pub fn exclude_tags_completely(mut self, tags: impl Into<Option<Vec<String>>>) -> Self {
        self.exclude_tags_completely = tags.into();
        self
    }

    pub fn exclude_tags_keep_content(mut self, tags: impl Into<Option<Vec<String>>>) -> Self {
        self.exclude_tags_keep_content = tags.into();
        self
    }

    pub fn keep_content(mut self, keep_content: XPathPatterns) -> Self {
        self.keep_content = Some(keep_content);
        self
    }

    pub fn exclude_content(mut self, exclude_content: XPathPatterns) -> Self {
        self.exclude_content = Some(exclude_content);
        self
    }

    pub fn keep_tag_attributes(mut self, attributes: impl Into<Option<Vec<String>>>) -> Self {
        self.keep_tag_attributes = attributes.into();
        self
    }

    pub fn exclude_tag_attributes(mut self, attributes: impl Into<Option<Vec<String>>>) -> Self {
        self.exclude_tag_attributes = attributes.into();
        self
    }

    pub fn build(&self) -> Result<HtmlSettings> {
        Ok(HtmlSettings {
            exclude_tags_completely: self.exclude_tags_completely.clone(),
            exclude_tags_keep_content: self.exclude_tags_keep_content.clone(),
            keep_content: self.keep_content.clone(),
            exclude_content: self.exclude_content.clone(),
            keep_tag_attributes: self.keep_tag_attributes.clone(),
            exclude_tag_attributes: self.exclude_tag_attributes.clone(),
        })
    }
}

impl From<HtmlSettings> for HtmlSettingsBuilder {
    fn from(value: HtmlSettings) -> Self {
        Self {
            exclude_tags_completely: value.exclude_tags_completely,
            exclude_tags_keep_content: value.exclude_tags_keep_content,
            keep_content: value.keep_content,
            exclude_content: value.exclude_content,
            keep_tag_attributes: value.keep_tag_attributes,
            exclude_tag_attributes: value.exclude_tag_attributes,
        }
    }
}
