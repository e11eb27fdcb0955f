//! Leaving and coming back: resume offers, expiry, corruption.

use chrono::{Duration, TimeZone, Utc};
use example_surveys::{ENGAGEMENT_SURVEY_ID, engagement_survey};
use pulse_survey::{
    Activation, Catalog, FileStore, ManualClock, MemoryStore, ProgressStore, RecordingSink,
    ResumableSection, Section, SurveyWizard, Transition,
};

const KEY: &str = "survey-progress-engagement-2026-emp-7";

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 12, 8, 0, 0).unwrap()
}

fn wizard_with<S: ProgressStore>(
    store: S,
    clock: &ManualClock,
) -> SurveyWizard<Catalog, S, RecordingSink> {
    SurveyWizard::new(engagement_survey(), store, RecordingSink::new()).with_clock(clock.clone())
}

/// Answers the first two pages and leaves the session on page 2.
fn abandoned_session(clock: &ManualClock) -> MemoryStore {
    let mut wizard = wizard_with(MemoryStore::new(), clock);
    wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap();
    for page in 0..2 {
        for q in 1..=3 {
            wizard.record_response(&format!("q{}", page * 3 + q), 4).unwrap();
        }
        wizard.advance().unwrap();
    }
    wizard.store().clone()
}

#[test]
fn fresh_snapshot_is_offered_and_resumed() {
    let clock = ManualClock::new(start());
    let store = abandoned_session(&clock);
    clock.advance(Duration::days(6));

    let mut wizard = wizard_with(store, &clock);
    let activation = wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap();
    let Activation::ResumeOffered(offer) = activation else {
        panic!("expected a resume offer, got {activation:?}");
    };
    assert_eq!(offer.section, ResumableSection::PartA);
    assert_eq!(offer.page_index, 2);
    assert_eq!(offer.answered, 6);
    assert_eq!(offer.saved_at, start());
    assert_eq!(wizard.section(), Section::Intro);
    assert!(wizard.record_response("q7", 3).is_err());

    wizard.resume().unwrap();
    assert_eq!(wizard.section(), Section::PartA);
    assert_eq!(wizard.page_index(), 2);
    assert_eq!(wizard.responses().len(), 6);
}

#[test]
fn eight_day_old_snapshot_is_void_and_removed() {
    let clock = ManualClock::new(start());
    let store = abandoned_session(&clock);
    clock.advance(Duration::days(8));

    let mut wizard = wizard_with(store, &clock);
    assert_eq!(
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap(),
        Activation::Fresh
    );
    assert!(!wizard.store().contains(KEY));
    assert_eq!(wizard.page_index(), 0);
    assert!(wizard.responses().is_empty());
}

#[test]
fn resume_then_save_is_byte_identical() {
    let clock = ManualClock::new(start());
    let store = abandoned_session(&clock);
    let original = store.raw(KEY).unwrap().to_string();

    let mut wizard = wizard_with(store, &clock);
    wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap();
    wizard.resume().unwrap();
    let snapshot = wizard.store_mut().load(KEY).unwrap().unwrap();
    wizard.store_mut().save(KEY, &snapshot).unwrap();

    assert_eq!(wizard.store().raw(KEY).unwrap(), original);
}

#[test]
fn corrupt_snapshot_starts_fresh() {
    let clock = ManualClock::new(start());
    let mut store = MemoryStore::new();
    store.insert_raw(KEY, r#"{"section":"part-a","pageIndex":"two"}"#);

    let mut wizard = wizard_with(store, &clock);
    assert_eq!(
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap(),
        Activation::Fresh
    );
    assert!(!wizard.store().contains(KEY));
}

#[test]
fn snapshot_past_the_last_page_is_discarded() {
    let clock = ManualClock::new(start());
    let mut store = MemoryStore::new();
    store.insert_raw(
        KEY,
        r#"{"section":"part-a","pageIndex":40,"responses":{},"priorities":[],"actions":[],"savedAt":"2026-10-12T08:00:00Z"}"#,
    );

    let mut wizard = wizard_with(store, &clock);
    assert_eq!(
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap(),
        Activation::Fresh
    );
    assert!(wizard.store().is_empty());
}

#[test]
fn restart_from_intro_discards_the_offer() {
    let clock = ManualClock::new(start());
    let store = abandoned_session(&clock);

    let mut wizard = wizard_with(store, &clock);
    wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap();
    wizard.restart().unwrap();

    assert_eq!(wizard.section(), Section::PartA);
    assert!(wizard.responses().is_empty());
    assert!(wizard.store().is_empty());
    assert!(wizard.resume().is_err());
}

#[test]
fn part_b_session_resumes_in_part_b() {
    let clock = ManualClock::new(start());
    let mut store = MemoryStore::new();
    store.insert_raw(
        KEY,
        r#"{"section":"part-b","pageIndex":16,"responses":{"q1":5},"priorities":["Leadership","Recognition"],"actions":[],"savedAt":"2026-10-12T08:00:00Z"}"#,
    );
    clock.advance(Duration::hours(2));

    let mut wizard = wizard_with(store, &clock);
    let Activation::ResumeOffered(offer) =
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap()
    else {
        panic!("expected a resume offer");
    };
    assert_eq!(offer.percent, 74);

    wizard.resume().unwrap();
    assert_eq!(wizard.section(), Section::PartB);
    assert_eq!(wizard.priorities().rank_of("Recognition"), Some(2));
    assert!(wizard.advance().unwrap().is_blocked());
}

#[test]
fn elapsed_time_spans_visits() {
    let clock = ManualClock::new(start());
    let store = abandoned_session(&clock);
    clock.advance(Duration::days(1));

    let mut wizard = wizard_with(store, &clock);
    wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-7")).unwrap();
    wizard.resume().unwrap();
    while wizard.section() == Section::PartA {
        let ids: Vec<String> = wizard
            .current_page()
            .iter()
            .filter(|q| q.is_required())
            .map(|q| q.id().to_string())
            .collect();
        for id in ids {
            let value = match id.as_str() {
                "q46" | "q48" => "no".into(),
                "q47" => "Monthly".into(),
                _ => pulse_survey::ResponseValue::Int(3),
            };
            wizard.record_response(&id, value).unwrap();
        }
        wizard.advance().unwrap();
    }
    wizard.toggle_priority("Communication").unwrap();
    wizard.toggle_action("Town Hall Meetings").unwrap();
    clock.advance(Duration::minutes(20));

    assert!(matches!(
        wizard.complete().unwrap(),
        Transition::Moved {
            section: Section::Complete,
            ..
        }
    ));
    let submission = wizard.sink().last().unwrap();
    assert_eq!(submission.elapsed_minutes, 24 * 60 + 20);
    assert_eq!(submission.respondent_id, "emp-7");
}

#[test]
fn file_store_survives_a_new_wizard() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(start());

    {
        let mut wizard = wizard_with(FileStore::open(dir.path()).unwrap(), &clock);
        wizard.activate(ENGAGEMENT_SURVEY_ID, None).unwrap();
        wizard.record_response("q1", 1).unwrap();
    }

    let mut wizard = wizard_with(FileStore::open(dir.path()).unwrap(), &clock);
    assert!(matches!(
        wizard.activate(ENGAGEMENT_SURVEY_ID, None).unwrap(),
        Activation::ResumeOffered(_)
    ));
    wizard.resume().unwrap();
    assert_eq!(wizard.responses().get_int("q1").unwrap(), 1);
    assert!(
        wizard
            .store()
            .path_for("survey-progress-engagement-2026-anonymous")
            .exists()
    );
}

#[test]
fn respondents_with_non_ascii_ids_keep_separate_progress() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(start());

    {
        let mut wizard = wizard_with(FileStore::open(dir.path()).unwrap(), &clock);
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("张三")).unwrap();
        wizard.record_response("q1", 1).unwrap();
    }

    let mut wizard = wizard_with(FileStore::open(dir.path()).unwrap(), &clock);
    assert_eq!(
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("李四")).unwrap(),
        Activation::Fresh
    );
    assert!(wizard.responses().is_empty());

    let mut wizard = wizard_with(FileStore::open(dir.path()).unwrap(), &clock);
    assert!(matches!(
        wizard.activate(ENGAGEMENT_SURVEY_ID, Some("张三")).unwrap(),
        Activation::ResumeOffered(_)
    ));
}
