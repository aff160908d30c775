use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel};

/// Gender of a synthesized voice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// A value not known to this SDK, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other(gender) => gender,
        }
    }
}

// `Other` may hold a known name, so equality goes through the wire text
impl PartialEq for Gender {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Gender {}

impl Hash for Gender {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

/// Features a voice supports beyond plain synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_pronunciation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    voice_transformation: Option<bool>,
}

impl SupportedFeatures {
    pub fn builder() -> SupportedFeaturesBuilder {
        SupportedFeaturesBuilder::default()
    }

    pub fn to_builder(&self) -> SupportedFeaturesBuilder {
        SupportedFeaturesBuilder::from(self.clone())
    }

    /// Whether custom pronunciation models can be used with the voice
    pub const fn custom_pronunciation(&self) -> Option<bool> {
        self.custom_pronunciation
    }

    /// Whether SSML voice transformation is supported
    pub const fn voice_transformation(&self) -> Option<bool> {
        self.voice_transformation
    }
}

impl WireModel for SupportedFeatures {
    const NAME: &'static str = "SupportedFeatures";
    const FIELDS: &'static [Field] = &[
        Field::scalar("custom_pronunciation"),
        Field::scalar("voice_transformation"),
    ];
}

/// Builder for [`SupportedFeatures`]
#[derive(Debug, Clone, Default)]
pub struct SupportedFeaturesBuilder {
    custom_pronunciation: Option<bool>,
    voice_transformation: Option<bool>,
}

impl SupportedFeaturesBuilder {
    pub fn custom_pronunciation(mut self, custom_pronunciation: bool) -> Self {
        self.custom_pronunciation = Some(custom_pronunciation);
        self
    }

    pub fn voice_transformation(mut self, voice_transformation: bool) -> Self {
        self.voice_transformation = Some(voice_transformation);
        self
    }

    pub fn build(&self) -> Result<SupportedFeatures> {
        Ok(SupportedFeatures {
            custom_pronunciation: self.custom_pronunciation,
            voice_transformation: self.voice_transformation,
        })
    }
}

impl From<SupportedFeatures> for SupportedFeaturesBuilder {
    fn from(value: SupportedFeatures) -> Self {
        Self {
            custom_pronunciation: value.custom_pronunciation,
            voice_transformation: value.voice_transformation,
        }
    }
}

/// A voice available for synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supported_features: Option<SupportedFeatures>,
}

impl Voice {
    pub fn builder() -> VoiceBuilder {
        VoiceBuilder::default()
    }

    pub fn to_builder(&self) -> VoiceBuilder {
        VoiceBuilder::from(self.clone())
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub const fn gender(&self) -> Option<&Gender> {
        self.gender.as_ref()
    }

    /// Voice name, e.g. `en-US_AllisonVoice`
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Language and region, e.g. `en-US`
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn customizable(&self) -> Option<bool> {
        self.customizable
    }

    pub const fn supported_features(&self) -> Option<&SupportedFeatures> {
        self.supported_features.as_ref()
    }
}

impl WireModel for Voice {
    const NAME: &'static str = "Voice";
    const FIELDS: &'static [Field] = &[
        Field::scalar("url"),
        Field::scalar("gender"),
        Field::scalar("name"),
        Field::scalar("language"),
        Field::scalar("description"),
        Field::scalar("customizable"),
        Field::model("supported_features", SupportedFeatures::FIELDS),
    ];
}

/// Builder for [`Voice`]
#[derive(Debug, Clone, Default)]
pub struct VoiceBuilder {
    url: Option<String>,
    gender: Option<Gender>,
    name: Option<String>,
    language: Option<String>,
    description: Option<String>,
    customizable: Option<bool>,
    supported_features: Option<SupportedFeatures>,
}

impl VoiceBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn customizable(mut self, customizable: bool) -> Self {
        self.customizable = Some(customizable);
        self
    }

    pub fn supported_features(mut self, supported_features: SupportedFeatures) -> Self {
        self.supported_features = Some(supported_features);
        self
    }

    pub fn build(&self) -> Result<Voice> {
        Ok(Voice {
            url: self.url.clone(),
            gender: self.gender.clone(),
            name: self.name.clone(),
            language: self.language.clone(),
            description: self.description.clone(),
            customizable: self.customizable,
            supported_features: self.supported_features.clone(),
        })
    }
}

impl From<Voice> for VoiceBuilder {
    fn from(value: Voice) -> Self {
        Self {
            url: value.url,
            gender: value.gender,
            name: value.name,
            language: value.language,
            description: value.description,
            customizable: value.customizable,
            supported_features: value.supported_features,
        }
    }
}

/// The voices listed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    voices: Option<Vec<Voice>>,
}

impl Voices {
    pub fn builder() -> VoicesBuilder {
        VoicesBuilder::default()
    }

    pub fn to_builder(&self) -> VoicesBuilder {
        VoicesBuilder::from(self.clone())
    }

    pub fn voices(&self) -> Option<&[Voice]> {
        self.voices.as_deref()
    }

    /// Look up a voice by name
    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices()?.iter().find(|voice| voice.name() == Some(name))
    }
}

impl WireModel for Voices {
    const NAME: &'static str = "Voices";
    const FIELDS: &'static [Field] = &[Field::model_list("voices", Voice::FIELDS)];
}

/// Builder for [`Voices`]
#[derive(Debug, Clone, Default)]
pub struct VoicesBuilder {
    voices: Option<Vec<Voice>>,
}

impl VoicesBuilder {
    pub fn add_voice(mut self, voice: Voice) -> Self {
        self.voices.get_or_insert_with(Vec::new).push(voice);
        self
    }

    pub fn voices(mut self, voices: impl Into<Option<Vec<Voice>>>) -> Self {
        self.voices = voices.into();
        self
    }

    pub fn build(&self) -> Result<Voices> {
        Ok(Voices {
            voices: self.voices.clone(),
        })
    }
}

impl From<Voices> for VoicesBuilder {
    fn from(value: Voices) -> Self {
        Self { voices: value.voices }
    }
}
