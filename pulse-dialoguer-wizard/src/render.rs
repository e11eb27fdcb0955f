//! Text for prompts and menus.

use pulse_survey::{RATING_MAX, RATING_MIN, ResumeOffer, SurveyQuestion};

const RATING_LABELS: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

/// `[#######-------------]  35%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}

/// Heading for a Part A page.
pub fn page_heading(page_index: usize, page_count: usize, percent: u8) -> String {
    format!(
        "Page {} of {page_count}  {}",
        page_index + 1,
        progress_bar(percent, 20)
    )
}

/// Prompt text for a question, with its category and an optional marker.
pub fn question_prompt(question: &SurveyQuestion) -> String {
    let mut prompt = match question.category() {
        Some(category) => format!("[{category}] {}", question.prompt()),
        None => question.prompt().to_string(),
    };
    if !question.is_required() {
        prompt.push_str(" (optional)");
    }
    prompt
}

/// Menu items for a rating question, lowest first.
pub fn rating_items() -> Vec<String> {
    (RATING_MIN..=RATING_MAX)
        .zip(RATING_LABELS)
        .map(|(value, label)| format!("{value} - {label}"))
        .collect()
}

/// `[2] Leadership` when ranked, `[ ] Leadership` otherwise.
pub fn priority_item(label: &str, rank: Option<usize>) -> String {
    match rank {
        Some(rank) => format!("Priority [{rank}] {label}"),
        None => format!("Priority [ ] {label}"),
    }
}

/// `[x] Mentoring` when selected, `[ ] Mentoring` otherwise.
pub fn action_item(label: &str, selected: bool) -> String {
    let mark = if selected { 'x' } else { ' ' };
    format!("Action   [{mark}] {label}")
}

/// One-line summary of saved progress, for the resume prompt.
pub fn offer_summary(offer: &ResumeOffer) -> String {
    format!(
        "You have a survey in progress ({}% done, {} answers, saved {}). Continue?",
        offer.percent,
        offer.answered,
        offer.saved_at.format("%Y-%m-%d %H:%M UTC")
    )
}
