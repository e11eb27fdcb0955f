use pulse_survey_types::{Catalog, SurveyQuestion};

pub const ENGAGEMENT_SURVEY_ID: &str = "engagement-2026";

pub const PRIORITY_AREAS: [&str; 8] = [
    "Leadership",
    "Career Growth",
    "Recognition",
    "Compensation & Benefits",
    "Work-Life Balance",
    "Communication",
    "Team Collaboration",
    "Tools & Resources",
];

pub const ACTION_AREAS: [&str; 8] = [
    "Manager Training",
    "Mentoring Program",
    "Flexible Work Arrangements",
    "Internal Mobility",
    "Recognition Program",
    "Town Hall Meetings",
    "Learning Budget",
    "Wellbeing Initiatives",
];

/// Rating statements, five per category.
const STATEMENTS: [(&str, [&str; 5]); 9] = [
    (
        "Leadership",
        [
            "Senior leaders communicate a clear vision for the company.",
            "I have confidence in the decisions made by senior leadership.",
            "Leadership acts on feedback from employees.",
            "Leaders model the values they ask of us.",
            "I understand how my work supports the company strategy.",
        ],
    ),
    (
        "Manager",
        [
            "My manager gives me regular, useful feedback.",
            "My manager cares about my wellbeing.",
            "I can raise concerns with my manager without fear.",
            "My manager helps me remove obstacles to my work.",
            "My manager recognises good work.",
        ],
    ),
    (
        "Growth",
        [
            "I have opportunities to learn and grow here.",
            "I can see a career path for myself at this company.",
            "I have had a meaningful conversation about my development in the last six months.",
            "Training offered to me is relevant to my role.",
            "Internal candidates get a fair chance at open roles.",
        ],
    ),
    (
        "Recognition",
        [
            "I feel valued for the work I do.",
            "Recognition here is fair and consistent.",
            "Good work is noticed by people beyond my team.",
            "I am thanked when I go beyond my responsibilities.",
            "Promotions go to the people who deserve them.",
        ],
    ),
    (
        "Compensation",
        [
            "I am paid fairly for the work I do.",
            "Our benefits meet my needs.",
            "I understand how my pay is determined.",
            "Pay decisions are explained openly.",
            "Our total rewards compare well with similar employers.",
        ],
    ),
    (
        "Wellbeing",
        [
            "My workload is manageable.",
            "I can balance work with my personal life.",
            "I rarely feel burned out by my work.",
            "I can take time off without worrying about my work.",
            "The company supports my physical and mental health.",
        ],
    ),
    (
        "Communication",
        [
            "I get the information I need to do my job well.",
            "Changes that affect me are communicated in good time.",
            "Information flows well between departments.",
            "I know where to find answers to my questions.",
            "Company-wide meetings are worth my time.",
        ],
    ),
    (
        "Team",
        [
            "My team works well together.",
            "People on my team help each other when workloads are high.",
            "I trust my colleagues to do quality work.",
            "Disagreements on my team are handled respectfully.",
            "I feel a sense of belonging on my team.",
        ],
    ),
    (
        "Resources",
        [
            "I have the tools and equipment I need.",
            "Our internal systems make my work easier.",
            "Processes here are efficient.",
            "I have enough people on my team to get the work done.",
            "I can get help from other teams when I need it.",
        ],
    ),
];

/// The annual engagement survey: 45 rated statements in nine categories,
/// three closing questions, and two optional comments.
///
/// Fifty questions, seventeen pages of three (the last page holds two).
pub fn engagement_survey() -> Catalog {
    let mut questions: Vec<SurveyQuestion> = STATEMENTS
        .iter()
        .flat_map(|(category, statements)| {
            statements
                .iter()
                .map(move |statement| (*category, *statement))
        })
        .enumerate()
        .map(|(i, (category, statement))| {
            SurveyQuestion::rating(format!("q{}", i + 1), statement).with_category(category)
        })
        .collect();

    questions.extend([
        SurveyQuestion::yes_no("q46", "Would you recommend this company as a place to work?")
            .with_category("Outlook"),
        SurveyQuestion::multiple_choice(
            "q47",
            "How often do you have a one-to-one with your manager?",
            ["Weekly", "Every two weeks", "Monthly", "Rarely", "Never"],
        )
        .with_category("Outlook"),
        SurveyQuestion::yes_no("q48", "Do you see yourself working here in two years?")
            .with_category("Outlook"),
        SurveyQuestion::free_text("q49", "What is one thing we should start doing?")
            .optional()
            .with_category("Open feedback"),
        SurveyQuestion::free_text("q50", "Is there anything else you would like to share?")
            .optional()
            .with_category("Open feedback"),
    ]);

    Catalog::new(questions, PRIORITY_AREAS, ACTION_AREAS)
        .expect("engagement survey catalog is never empty")
        .with_prelude(
            "This survey takes about 15 minutes. Your answers are saved as you go, \
             so you can stop and come back within a week.",
        )
        .with_epilogue("Thank you. Your responses have been submitted.")
}
