//! Core types for the pulse-survey engine.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `SurveyQuestion` and `ResponseKind` - Individual catalog questions
//! - `ResponseValue` and `ResponseMap` - Collected answers keyed by question id
//! - `Section` and `ResumableSection` - The stages of a survey session
//! - `SurveyCatalog` and `Catalog` - The ordered question list plus selection areas

mod question;
pub use question::{RATING_MAX, RATING_MIN, ResponseKind, SurveyQuestion};

mod response_value;
pub use response_value::{NO, ResponseValue, YES};

mod responses;
pub use responses::{ResponseError, ResponseMap};

mod section;
pub use section::{ResumableSection, Section};

mod catalog;
pub use catalog::{Catalog, SurveyCatalog};

mod error;
pub use error::CatalogError;
