//! # pulse-survey
//!
//! A resumable, multi-section survey engine. Backend-agnostic.
//!
//! A `SurveyWizard` walks one respondent through a catalog in two parts:
//! Part A pages through the questions three at a time, Part B asks for up to
//! three ranked priority areas and up to four action areas. Every change is
//! written to a `ProgressStore` so an abandoned session can be resumed later,
//! and finishing hands one `Submission` to a `SubmissionSink`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_survey::{MemoryStore, RecordingSink, SurveyWizard, Transition};
//!
//! let mut wizard = SurveyWizard::new(catalog, MemoryStore::new(), RecordingSink::new());
//! wizard.activate("engagement-2026", Some("emp-42"))?;
//!
//! wizard.record_response("q1", 4)?;
//! wizard.record_response("q2", 5)?;
//! wizard.record_response("q3", "yes")?;
//! match wizard.advance()? {
//!     Transition::Blocked(reason) => println!("{reason}"),
//!     _ => {}
//! }
//! ```
//!
//! ## Components
//!
//! - `pagination` - fixed-size pages over the question list
//! - `selection` - bounded ordered / unordered toggles
//! - `gate` - the two advancement predicates
//! - `progress` - completion percentage
//! - `snapshot` / `store` - durable progress and its storage
//! - `wizard` - the state machine tying it all together

// Re-export all types from pulse-survey-types
pub use pulse_survey_types::*;

pub mod clock;
pub mod config;
pub mod gate;
pub mod pagination;
pub mod progress;
pub mod selection;
pub mod snapshot;
pub mod store;
pub mod submission;
pub mod wizard;

mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use error::EngineError;
pub use gate::BlockReason;
pub use pagination::{PAGE_SIZE, Pages};
pub use selection::{ActionSelection, PrioritySelection, Toggle};
pub use snapshot::{ProgressSnapshot, SessionKey};
pub use store::{FileStore, MemoryStore, ProgressStore, StoreError};
pub use submission::{RecordingSink, Submission, SubmissionSink};
pub use wizard::{Activation, ResumeOffer, SurveyWizard, Transition};
