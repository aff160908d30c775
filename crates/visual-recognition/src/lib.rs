#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::return_self_not_must_use)]

//! Visual Recognition service models

mod classifier;

pub use classifier::{Class, ClassBuilder, Classifier, ClassifierBuilder, Classifiers, ClassifiersBuilder, Status};
pub use watson_core::{AbsentFields, ModelError, Result, Timestamp, WireModel};
