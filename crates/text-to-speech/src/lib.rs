#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::return_self_not_must_use)]

//! Text to Speech service models

mod voice;

pub use voice::{Gender, SupportedFeatures, SupportedFeaturesBuilder, Voice, VoiceBuilder, Voices, VoicesBuilder};
pub use watson_core::{AbsentFields, ModelError, Result, WireModel};
