use pulse_survey_types::{Catalog, SurveyQuestion};

use crate::{ACTION_AREAS, PRIORITY_AREAS};

pub const QUICK_PULSE_ID: &str = "quick-pulse";

/// A short monthly check-in: two pages, shared selection areas.
pub fn quick_pulse() -> Catalog {
    let questions = vec![
        SurveyQuestion::rating("mood", "How would you rate your month at work?"),
        SurveyQuestion::rating("workload", "How manageable was your workload?"),
        SurveyQuestion::yes_no("support", "Did you get the support you needed?"),
        SurveyQuestion::free_text("note", "Anything your manager should know?").optional(),
    ];

    Catalog::new(questions, PRIORITY_AREAS, ACTION_AREAS)
        .expect("quick pulse catalog is never empty")
}
