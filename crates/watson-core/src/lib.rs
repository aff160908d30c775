#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Shared building blocks for the Watson service models
//!
//! Every model type in the service crates is an immutable record built
//! through a validating builder. This crate holds the pieces they have in
//! common: the field-to-wire-key tables, the generic JSON codec that consults
//! them, the wire timestamp type, and the error taxonomy.

mod builder;
mod codec;
mod error;
mod field;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
mod timestamp;

pub use builder::required;
pub use codec::{AbsentFields, WireModel};
pub use error::{ModelError, Result};
pub use field::{Field, Shape};
pub use timestamp::Timestamp;
