//! Dialoguer host that drives a `SurveyWizard` in the terminal.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, FuzzySelect, Input, Select};
use pulse_survey::{
    Activation, EngineError, ProgressStore, ResponseKind, ResponseValue, Section, SubmissionSink,
    SurveyCatalog, SurveyQuestion, SurveyWizard, Toggle, Transition, YES,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::render;

/// Error type for the Dialoguer host.
#[derive(Debug, Error)]
pub enum HostError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    /// Saved progress is kept for a later visit.
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(dialoguer::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<dialoguer::Error> for HostError {
    fn from(err: dialoguer::Error) -> Self {
        if is_cancelled(&err) {
            Self::Cancelled
        } else {
            Self::Dialoguer(err)
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// The screen shown for a section.
#[derive(Debug, PartialEq, Eq)]
enum Screen {
    Page,
    Selections,
    Done,
}

impl Screen {
    /// `intro` has no screen of its own: the resume prompt settles it first.
    fn for_section(section: Section) -> Result<Self, HostError> {
        match section {
            Section::PartA => Ok(Self::Page),
            Section::PartB => Ok(Self::Selections),
            Section::Complete => Ok(Self::Done),
            Section::Intro => Err(EngineError::InvalidState {
                operation: "run",
                section,
            }
            .into()),
        }
    }
}

/// What the respondent did on a page menu.
enum PageChoice {
    Continue,
    Back,
}

/// Terminal host for survey sessions.
///
/// Walks the respondent through the resume decision, every Part A page and
/// the Part B selection menu, until the wizard reaches `complete`.
#[derive(Debug, Default, Clone)]
pub struct DialoguerHost {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerHost {
    /// Create a new host with the default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a host with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Run one session to completion.
    pub fn run<C, S, K>(
        &self,
        wizard: &mut SurveyWizard<C, S, K>,
        survey_id: &str,
        respondent_id: Option<&str>,
    ) -> Result<(), HostError>
    where
        C: SurveyCatalog,
        S: ProgressStore,
        K: SubmissionSink,
    {
        if let Activation::ResumeOffered(offer) = wizard.activate(survey_id, respondent_id)? {
            let items = ["Resume where I left off", "Start over"];
            match self.select(&render::offer_summary(&offer), &items, 0)? {
                0 => wizard.resume()?,
                _ => wizard.restart()?,
            }
        }

        loop {
            match Screen::for_section(wizard.section())? {
                Screen::Page => self.run_page(wizard)?,
                Screen::Selections => self.run_selections(wizard)?,
                Screen::Done => return Ok(()),
            }
        }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn select<T: ToString>(
        &self,
        prompt: &str,
        items: &[T],
        default: usize,
    ) -> Result<usize, HostError> {
        let theme = self.theme();
        let choice = Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(choice)
    }

    /// Ask every question on the current page, then offer to move on or back.
    fn run_page<C, S, K>(&self, wizard: &mut SurveyWizard<C, S, K>) -> Result<(), HostError>
    where
        C: SurveyCatalog,
        S: ProgressStore,
        K: SubmissionSink,
    {
        println!();
        println!(
            "{}",
            render::page_heading(wizard.page_index(), wizard.page_count(), wizard.progress())
        );

        let page: Vec<SurveyQuestion> = wizard.current_page().to_vec();
        for question in &page {
            let current = wizard.responses().get(question.id()).cloned();
            if let Some(value) = self.ask(question, current.as_ref())? {
                wizard.record_response(question.id(), value)?;
            }
        }

        let can_go_back = wizard.page_index() > 0;
        match self.page_menu(can_go_back)? {
            PageChoice::Continue => match wizard.advance()? {
                Transition::Blocked(reason) => println!("Error: {reason}"),
                moved => debug!(?moved, "advanced"),
            },
            PageChoice::Back => {
                wizard.retreat()?;
            }
        }
        Ok(())
    }

    fn page_menu(&self, can_go_back: bool) -> Result<PageChoice, HostError> {
        let mut items = vec!["Continue"];
        if can_go_back {
            items.push("Previous page");
        }
        Ok(match self.select("Next step", &items, 0)? {
            0 => PageChoice::Continue,
            _ => PageChoice::Back,
        })
    }

    /// Ask one question. Returns `None` when an optional question is skipped.
    fn ask(
        &self,
        question: &SurveyQuestion,
        current: Option<&ResponseValue>,
    ) -> Result<Option<ResponseValue>, HostError> {
        let prompt = render::question_prompt(question);

        match question.kind() {
            ResponseKind::NumericRating => {
                let items = render::rating_items();
                let default = current
                    .and_then(ResponseValue::as_int)
                    .map(|rating| (rating - pulse_survey::RATING_MIN) as usize)
                    .filter(|i| *i < items.len())
                    .unwrap_or(items.len() / 2);
                let choice = self.select(&prompt, &items, default)?;
                Ok(Some(ResponseValue::Int(pulse_survey::RATING_MIN + choice as i64)))
            }

            ResponseKind::MultipleChoice => {
                let options = question.options();
                let default = current
                    .and_then(ResponseValue::as_str)
                    .and_then(|chosen| options.iter().position(|o| o == chosen))
                    .unwrap_or(0);
                let choice = self.select(&prompt, options, default)?;
                Ok(Some(ResponseValue::from(options[choice].as_str())))
            }

            ResponseKind::YesNo => {
                let theme = self.theme();
                let mut builder = Confirm::with_theme(theme.as_ref()).with_prompt(prompt);
                if let Some(answer) = current.and_then(ResponseValue::as_str) {
                    builder = builder.default(answer == YES);
                }
                Ok(Some(ResponseValue::from(builder.interact()?)))
            }

            ResponseKind::FreeText => loop {
                let theme = self.theme();
                let mut builder = Input::<String>::with_theme(theme.as_ref())
                    .with_prompt(&prompt)
                    .allow_empty(true);
                if let Some(text) = current.and_then(ResponseValue::as_str) {
                    builder = builder.with_initial_text(text);
                }

                let text = builder.interact_text()?;
                let text = text.trim();
                if !text.is_empty() {
                    return Ok(Some(ResponseValue::from(text)));
                }
                if !question.is_required() {
                    return Ok(None);
                }
                println!("Error: An answer is required");
            },
        }
    }

    /// One round of the Part B menu: toggle a label, submit, or go back.
    fn run_selections<C, S, K>(&self, wizard: &mut SurveyWizard<C, S, K>) -> Result<(), HostError>
    where
        C: SurveyCatalog,
        S: ProgressStore,
        K: SubmissionSink,
    {
        let priorities: Vec<String> = wizard.catalog().priority_areas().to_vec();
        let actions: Vec<String> = wizard.catalog().action_areas().to_vec();

        println!();
        println!(
            "Choose up to 3 priority areas (in order) and up to 4 action areas.  {}",
            render::progress_bar(wizard.progress(), 20)
        );

        let mut items: Vec<String> = priorities
            .iter()
            .map(|label| render::priority_item(label, wizard.priorities().rank_of(label)))
            .collect();
        items.extend(
            actions
                .iter()
                .map(|label| render::action_item(label, wizard.actions().contains(label))),
        );
        items.push("Submit survey".to_string());
        items.push("Back to questions".to_string());

        let theme = self.theme();
        let choice = FuzzySelect::with_theme(theme.as_ref())
            .with_prompt("Select an item (type to filter)")
            .items(&items)
            .default(0)
            .interact()?;
        let submit = priorities.len() + actions.len();

        if choice < priorities.len() {
            if wizard.toggle_priority(&priorities[choice])? == Toggle::LimitReached {
                println!("You can rank at most 3 priority areas. Deselect one first.");
            }
        } else if choice < submit {
            let label = &actions[choice - priorities.len()];
            if wizard.toggle_action(label)? == Toggle::LimitReached {
                println!("You can pick at most 4 action areas. Deselect one first.");
            }
        } else if choice == submit {
            match wizard.complete() {
                Ok(Transition::Blocked(reason)) => println!("Error: {reason}"),
                Ok(_) => {}
                Err(err @ EngineError::SnapshotNotCleared { .. }) => {
                    warn!(error = %err, "survey submitted with leftover progress");
                    println!("Warning: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            wizard.retreat()?;
        }
        Ok(())
    }
}
