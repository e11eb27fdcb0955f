pub mod engagement;
pub mod quick_pulse;

pub use engagement::{
    ACTION_AREAS, ENGAGEMENT_SURVEY_ID, PRIORITY_AREAS, engagement_survey,
};
pub use quick_pulse::{QUICK_PULSE_ID, quick_pulse};

/// Look up a bundled catalog by survey id.
pub fn by_id(survey_id: &str) -> Option<pulse_survey_types::Catalog> {
    match survey_id {
        ENGAGEMENT_SURVEY_ID => Some(engagement_survey()),
        QUICK_PULSE_ID => Some(quick_pulse()),
        _ => None,
    }
}
