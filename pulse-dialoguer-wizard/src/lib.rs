//! # pulse-dialoguer-wizard
//!
//! Terminal host for the pulse-survey engine.
//!
//! This crate drives a [`SurveyWizard`](pulse_survey::SurveyWizard) with the
//! `dialoguer` library: a resume prompt, one screen per Part A page and a
//! toggle menu for the Part B priority and action areas.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pulse_dialoguer_wizard::{DialoguerHost, JsonLinesSink};
//! use pulse_survey::{FileStore, SurveyWizard};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = example_surveys::engagement_survey();
//!     let store = FileStore::open("progress")?;
//!     let sink = JsonLinesSink::new("submissions.jsonl");
//!
//!     let mut wizard = SurveyWizard::new(catalog, store, sink);
//!     DialoguerHost::new().run(&mut wizard, "engagement-2026", Some("emp-7"))?;
//!     Ok(())
//! }
//! ```

mod host;
pub mod render;
mod sink;

pub use host::{DialoguerHost, HostError};
pub use sink::{JsonLinesSink, SinkError};
