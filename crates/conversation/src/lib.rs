#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::return_self_not_must_use)]

//! Conversation service models

mod capture_group;

pub use capture_group::{CaptureGroup, CaptureGroupBuilder};
pub use watson_core::{AbsentFields, ModelError, Result, WireModel};
