//! Advancement predicates.
//!
//! Only lower bounds are checked here. Upper bounds on the selections are
//! enforced when toggling.

use std::fmt;

use crate::{ActionSelection, PrioritySelection, ResponseMap, SurveyQuestion};

/// Why an `advance` or `complete` call was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// Required questions on the current page have no answer.
    UnansweredRequired(Vec<String>),

    /// Part B needs at least one priority area and at least one action area.
    MissingSelections { priorities: usize, actions: usize },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnansweredRequired(ids) => write!(
                f,
                "page has unanswered required questions: {}",
                ids.join(", ")
            ),
            Self::MissingSelections { .. } => {
                f.write_str("need at least one priority area and at least one action area")
            }
        }
    }
}

/// Every required question on the visible page has an answer.
///
/// Answers on other pages are not re-checked; each was gated when its page was left.
pub fn can_advance_from_part_a(
    page: &[SurveyQuestion],
    responses: &ResponseMap,
) -> Result<(), BlockReason> {
    let missing: Vec<String> = page
        .iter()
        .filter(|q| q.is_required() && !responses.contains(q.id()))
        .map(|q| q.id().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BlockReason::UnansweredRequired(missing))
    }
}

/// At least one priority and at least one action area are selected.
pub fn can_advance_from_part_b(
    priorities: &PrioritySelection,
    actions: &ActionSelection,
) -> Result<(), BlockReason> {
    if priorities.is_empty() || actions.is_empty() {
        return Err(BlockReason::MissingSelections {
            priorities: priorities.len(),
            actions: actions.len(),
        });
    }
    Ok(())
}
