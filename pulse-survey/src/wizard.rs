//! The survey session state machine.
//!
//! ```text
//! activate ──► intro ──resume/restart──┐
//!    │                                 ▼
//!    └──────────────────────────────► part-a ◄──► part-b ◄──► complete
//!                                     (pages)
//! ```
//!
//! All session data lives in one `WizardState` value. Every mutation builds
//! the next state, writes its snapshot, and only then replaces the current
//! state, so the in-memory session and the stored copy never disagree.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::gate::{self, BlockReason};
use crate::pagination::Pages;
use crate::progress;
use crate::submission::{self, Submission, SubmissionSink};
use crate::{
    ActionSelection, Clock, EngineConfig, EngineError, PrioritySelection, ProgressSnapshot,
    ProgressStore, ResponseMap, ResponseValue, ResumableSection, Section, SessionKey,
    SurveyCatalog, SurveyQuestion, SystemClock, Toggle,
};

/// The complete mutable state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub section: Section,
    pub page_index: usize,
    pub responses: ResponseMap,
    pub priorities: PrioritySelection,
    pub actions: ActionSelection,
}

impl WizardState {
    fn intro() -> Self {
        Self {
            section: Section::Intro,
            ..Self::part_a()
        }
    }

    fn part_a() -> Self {
        Self {
            section: Section::PartA,
            page_index: 0,
            responses: ResponseMap::new(),
            priorities: PrioritySelection::new(),
            actions: ActionSelection::new(),
        }
    }

    fn from_snapshot(snapshot: ProgressSnapshot) -> Self {
        Self {
            section: snapshot.section.into(),
            page_index: snapshot.page_index,
            responses: snapshot.responses,
            priorities: snapshot.priorities,
            actions: snapshot.actions,
        }
    }
}

/// Result of `activate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// No usable snapshot; the session starts at Part A, page 0.
    Fresh,

    /// A fresh snapshot exists. The wizard waits in `intro` for `resume` or `restart`.
    ResumeOffered(ResumeOffer),
}

/// Summary of a saved session, for the resume/restart decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeOffer {
    pub section: ResumableSection,
    pub page_index: usize,
    pub answered: usize,
    pub priorities: usize,
    pub actions: usize,
    pub percent: u8,
    pub saved_at: DateTime<Utc>,
}

/// Result of a navigation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The session moved, possibly within the same section.
    Moved { section: Section, page_index: usize },

    /// Nothing to move to (retreat from the first page).
    Stayed,

    /// The gate refused; state is unchanged.
    Blocked(BlockReason),
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

#[derive(Debug)]
struct SessionMeta {
    key: SessionKey,
    storage_key: String,
    started_at: DateTime<Utc>,
    pending: Option<ProgressSnapshot>,
}

/// Walks one respondent through a catalog, persisting progress as it goes.
pub struct SurveyWizard<C, S, K> {
    catalog: C,
    store: S,
    sink: K,
    clock: Box<dyn Clock>,
    config: EngineConfig,
    state: WizardState,
    session: Option<SessionMeta>,
}

impl<C, S, K> SurveyWizard<C, S, K>
where
    C: SurveyCatalog,
    S: ProgressStore,
    K: SubmissionSink,
{
    /// Create a wizard with the system clock and default configuration.
    pub fn new(catalog: C, store: S, sink: K) -> Self {
        Self {
            catalog,
            store,
            sink,
            clock: Box::new(SystemClock),
            config: EngineConfig::default(),
            state: WizardState::intro(),
            session: None,
        }
    }

    /// Use a different time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Use a different configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    // === Session lifecycle ===

    /// Open the session for `(survey_id, respondent_id)`.
    ///
    /// A stale or unreadable snapshot is removed and the session starts fresh.
    /// A fresh one parks the wizard in `intro` until `resume` or `restart`.
    pub fn activate(
        &mut self,
        survey_id: &str,
        respondent_id: Option<&str>,
    ) -> Result<Activation, EngineError> {
        let key = SessionKey::new(survey_id, respondent_id);
        let storage_key = key.storage_key(&self.config.key_prefix);
        let now = self.clock.now();

        let snapshot = match self.store.load(&storage_key)? {
            Some(snapshot) if !self.store.is_fresh(&snapshot, now, self.config.retention()) => {
                warn!(
                    key = %storage_key,
                    saved_at = %snapshot.saved_at,
                    "discarding expired snapshot"
                );
                self.store.delete(&storage_key)?;
                None
            }
            Some(snapshot) if !self.fits_catalog(&snapshot) => {
                warn!(
                    key = %storage_key,
                    page = snapshot.page_index,
                    "discarding snapshot that does not fit the catalog"
                );
                self.store.delete(&storage_key)?;
                None
            }
            other => other,
        };

        let activation = match snapshot {
            Some(snapshot) => {
                let offer = self.offer_for(&snapshot);
                info!(
                    key = %storage_key,
                    section = %offer.section,
                    page = offer.page_index,
                    "saved progress found"
                );
                self.state = WizardState::intro();
                self.session = Some(SessionMeta {
                    key,
                    storage_key,
                    started_at: now,
                    pending: Some(snapshot),
                });
                Activation::ResumeOffered(offer)
            }
            None => {
                info!(key = %storage_key, "starting new survey session");
                self.state = WizardState::part_a();
                self.session = Some(SessionMeta {
                    key,
                    storage_key,
                    started_at: now,
                    pending: None,
                });
                Activation::Fresh
            }
        };
        Ok(activation)
    }

    /// Continue from the snapshot offered by `activate`.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        let section = self.state.section;
        let meta = self.session.as_mut().ok_or(EngineError::NotActivated)?;
        let Some(snapshot) = meta.pending.take() else {
            return Err(EngineError::InvalidState {
                operation: "resume",
                section,
            });
        };

        if let Some(started_at) = snapshot.started_at {
            meta.started_at = started_at;
        }
        info!(
            key = %meta.storage_key,
            section = %snapshot.section,
            page = snapshot.page_index,
            "resuming survey session"
        );
        self.state = WizardState::from_snapshot(snapshot);
        Ok(())
    }

    /// Throw away all progress and start again at Part A, page 0.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let now = self.clock.now();
        let meta = self.session.as_mut().ok_or(EngineError::NotActivated)?;
        self.store.delete(&meta.storage_key)?;
        meta.pending = None;
        meta.started_at = now;
        info!(key = %meta.storage_key, "survey session restarted");
        self.state = WizardState::part_a();
        Ok(())
    }

    // === Part A ===

    /// Record (or replace) the answer to a question.
    pub fn record_response(
        &mut self,
        question_id: &str,
        value: impl Into<ResponseValue>,
    ) -> Result<(), EngineError> {
        self.require("record_response", Section::PartA)?;
        let value = value.into();
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| EngineError::UnknownQuestion(question_id.to_string()))?;
        question
            .accepts(&value)
            .map_err(|message| EngineError::InvalidResponse {
                id: question_id.to_string(),
                message,
            })?;

        let mut next = self.state.clone();
        next.responses.insert(question_id, value);
        self.commit(next)
    }

    // === Part B ===

    /// Select or deselect a priority area.
    pub fn toggle_priority(&mut self, label: &str) -> Result<Toggle, EngineError> {
        self.require("toggle_priority", Section::PartB)?;
        if !self.catalog.priority_areas().iter().any(|a| a == label) {
            return Err(EngineError::UnknownOption {
                area: "priority",
                label: label.to_string(),
            });
        }

        let mut next = self.state.clone();
        let toggle = next.priorities.toggle(label);
        if toggle.changed() {
            self.commit(next)?;
        } else {
            debug!(label, "priority limit reached");
        }
        Ok(toggle)
    }

    /// Select or deselect an action area.
    pub fn toggle_action(&mut self, label: &str) -> Result<Toggle, EngineError> {
        self.require("toggle_action", Section::PartB)?;
        if !self.catalog.action_areas().iter().any(|a| a == label) {
            return Err(EngineError::UnknownOption {
                area: "action",
                label: label.to_string(),
            });
        }

        let mut next = self.state.clone();
        let toggle = next.actions.toggle(label);
        if toggle.changed() {
            self.commit(next)?;
        } else {
            debug!(label, "action limit reached");
        }
        Ok(toggle)
    }

    // === Navigation ===

    /// Move forward one page, into Part B, or (from Part B) to completion.
    pub fn advance(&mut self) -> Result<Transition, EngineError> {
        match self.activated_section()? {
            Section::PartA => {
                let page = self.current_page();
                if let Err(reason) = gate::can_advance_from_part_a(page, &self.state.responses) {
                    debug!(page = self.state.page_index, %reason, "advance blocked");
                    return Ok(Transition::Blocked(reason));
                }
                let mut next = self.state.clone();
                if self.pages().is_last(next.page_index) {
                    next.section = Section::PartB;
                } else {
                    next.page_index += 1;
                }
                self.commit(next)?;
                Ok(self.moved())
            }
            Section::PartB => self.complete(),
            section => Err(EngineError::InvalidState {
                operation: "advance",
                section,
            }),
        }
    }

    /// Move back one page or section. Never gated.
    pub fn retreat(&mut self) -> Result<Transition, EngineError> {
        let mut next = self.state.clone();
        match self.activated_section()? {
            Section::PartA if next.page_index == 0 => return Ok(Transition::Stayed),
            Section::PartA => next.page_index -= 1,
            Section::PartB => {
                next.section = Section::PartA;
                next.page_index = self.pages().last_index();
            }
            Section::Complete => next.section = Section::PartB,
            section => {
                return Err(EngineError::InvalidState {
                    operation: "retreat",
                    section,
                });
            }
        }
        self.commit(next)?;
        Ok(self.moved())
    }

    /// Finish the survey: deliver the submission and drop the snapshot.
    ///
    /// If the sink refuses, nothing changes and the error is returned. If the
    /// snapshot cannot be removed afterwards, the session is still complete
    /// and `EngineError::SnapshotNotCleared` reports the leftover key.
    pub fn complete(&mut self) -> Result<Transition, EngineError> {
        self.require("complete", Section::PartB)?;
        if let Err(reason) =
            gate::can_advance_from_part_b(&self.state.priorities, &self.state.actions)
        {
            debug!(%reason, "completion blocked");
            return Ok(Transition::Blocked(reason));
        }

        let completed_at = self.clock.now();
        let meta = self.session.as_ref().ok_or(EngineError::NotActivated)?;
        let submission = Submission {
            survey_id: meta.key.survey_id().to_string(),
            respondent_id: meta.key.respondent().to_string(),
            responses: self.state.responses.clone(),
            priorities: self.state.priorities.clone(),
            actions: self.state.actions.clone(),
            completed_at,
            elapsed_minutes: submission::elapsed_minutes(meta.started_at, completed_at),
        };
        self.sink.submit(&submission).map_err(EngineError::submission)?;

        self.state.section = Section::Complete;
        info!(
            key = %meta.storage_key,
            answered = submission.responses.len(),
            elapsed_minutes = submission.elapsed_minutes,
            "survey completed"
        );
        if let Err(source) = self.store.delete(&meta.storage_key) {
            warn!(key = %meta.storage_key, error = %source, "failed to remove snapshot");
            return Err(EngineError::SnapshotNotCleared {
                key: meta.storage_key.clone(),
                source,
            });
        }
        Ok(self.moved())
    }

    // === Queries ===

    pub fn section(&self) -> Section {
        self.state.section
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.state.responses
    }

    pub fn priorities(&self) -> &PrioritySelection {
        &self.state.priorities
    }

    pub fn actions(&self) -> &ActionSelection {
        &self.state.actions
    }

    pub fn page_count(&self) -> usize {
        self.pages().page_count()
    }

    /// The questions on the current Part A page.
    pub fn current_page(&self) -> &[SurveyQuestion] {
        self.pages().page_at(self.state.page_index).unwrap_or(&[])
    }

    /// Completion percentage in `0..=100`.
    pub fn progress(&self) -> u8 {
        progress::percent(
            self.state.section,
            self.state.page_index,
            self.page_count(),
            self.state.priorities.len(),
            self.state.actions.len(),
        )
    }

    /// The snapshot the current state would be saved as, if it is resumable.
    pub fn snapshot(&self) -> Option<ProgressSnapshot> {
        let meta = self.session.as_ref()?;
        self.snapshot_of(&self.state, meta.started_at)
    }

    /// The key snapshots are stored under for the active session.
    pub fn storage_key(&self) -> Option<&str> {
        self.session.as_ref().map(|meta| meta.storage_key.as_str())
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    // === Internals ===

    fn pages(&self) -> Pages<'_, SurveyQuestion> {
        Pages::new(self.catalog.questions(), self.config.page_size)
    }

    fn moved(&self) -> Transition {
        Transition::Moved {
            section: self.state.section,
            page_index: self.state.page_index,
        }
    }

    fn activated_section(&self) -> Result<Section, EngineError> {
        if self.session.is_none() {
            return Err(EngineError::NotActivated);
        }
        Ok(self.state.section)
    }

    fn require(&self, operation: &'static str, section: Section) -> Result<(), EngineError> {
        let current = self.activated_section()?;
        if current == section {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                operation,
                section: current,
            })
        }
    }

    fn fits_catalog(&self, snapshot: &ProgressSnapshot) -> bool {
        snapshot.page_index < self.page_count()
    }

    fn offer_for(&self, snapshot: &ProgressSnapshot) -> ResumeOffer {
        ResumeOffer {
            section: snapshot.section,
            page_index: snapshot.page_index,
            answered: snapshot.responses.len(),
            priorities: snapshot.priorities.len(),
            actions: snapshot.actions.len(),
            percent: progress::percent(
                snapshot.section.into(),
                snapshot.page_index,
                self.page_count(),
                snapshot.priorities.len(),
                snapshot.actions.len(),
            ),
            saved_at: snapshot.saved_at,
        }
    }

    fn snapshot_of(
        &self,
        state: &WizardState,
        started_at: DateTime<Utc>,
    ) -> Option<ProgressSnapshot> {
        Some(ProgressSnapshot {
            section: state.section.resumable()?,
            page_index: state.page_index,
            responses: state.responses.clone(),
            priorities: state.priorities.clone(),
            actions: state.actions.clone(),
            saved_at: self.clock.now(),
            started_at: Some(started_at),
        })
    }

    /// Persist `next`, then make it the current state.
    fn commit(&mut self, next: WizardState) -> Result<(), EngineError> {
        let meta = self.session.as_ref().ok_or(EngineError::NotActivated)?;
        if let Some(snapshot) = self.snapshot_of(&next, meta.started_at) {
            self.store.save(&meta.storage_key, &snapshot)?;
        }
        debug!(section = %next.section, page = next.page_index, "state committed");
        self.state = next;
        Ok(())
    }
}
