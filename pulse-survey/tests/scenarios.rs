//! End-to-end walks through the engagement survey.

use chrono::{TimeZone, Utc};
use example_surveys::{ENGAGEMENT_SURVEY_ID, engagement_survey};
use pulse_survey::{
    BlockReason, Catalog, ManualClock, MemoryStore, ProgressStore, RecordingSink, ResponseKind,
    ResponseValue, Section, SurveyCatalog, SurveyQuestion, SurveyWizard, Toggle, Transition,
};

type Wizard = SurveyWizard<Catalog, MemoryStore, RecordingSink>;

fn wizard() -> Wizard {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap());
    let mut wizard =
        SurveyWizard::new(engagement_survey(), MemoryStore::new(), RecordingSink::new())
            .with_clock(clock);
    wizard.activate(ENGAGEMENT_SURVEY_ID, Some("emp-1042")).unwrap();
    wizard
}

fn answer_for(question: &SurveyQuestion) -> ResponseValue {
    match question.kind() {
        ResponseKind::NumericRating => ResponseValue::Int(4),
        ResponseKind::YesNo => true.into(),
        ResponseKind::MultipleChoice => question.options()[0].as_str().into(),
        ResponseKind::FreeText => "More cross-team projects.".into(),
    }
}

fn answer_current_page(wizard: &mut Wizard) {
    let page: Vec<SurveyQuestion> = wizard.current_page().to_vec();
    for question in &page {
        wizard.record_response(question.id(), answer_for(question)).unwrap();
    }
}

fn walk_to_part_b(wizard: &mut Wizard) {
    while wizard.section() == Section::PartA {
        answer_current_page(wizard);
        assert!(wizard.advance().unwrap().is_moved());
    }
}

#[test]
fn fifty_questions_make_seventeen_pages() {
    let wizard = wizard();
    assert_eq!(wizard.page_count(), 17);
    assert_eq!(wizard.current_page().len(), 3);
}

#[test]
fn full_first_page_advances_within_part_a() {
    let mut wizard = wizard();
    wizard.record_response("q1", 5).unwrap();
    wizard.record_response("q2", 4).unwrap();
    wizard.record_response("q3", 3).unwrap();

    assert_eq!(
        wizard.advance().unwrap(),
        Transition::Moved {
            section: Section::PartA,
            page_index: 1
        }
    );
    assert_eq!(wizard.page_index(), 1);
    assert_eq!(wizard.current_page()[0].id(), "q4");
}

#[test]
fn incomplete_page_is_blocked() {
    let mut wizard = wizard();
    wizard.record_response("q1", 5).unwrap();
    wizard.record_response("q2", 4).unwrap();
    let stored_before = wizard.store().raw(wizard.storage_key().unwrap()).map(str::to_string);

    assert_eq!(
        wizard.advance().unwrap(),
        Transition::Blocked(BlockReason::UnansweredRequired(vec!["q3".into()]))
    );
    assert_eq!(wizard.page_index(), 0);
    assert_eq!(wizard.section(), Section::PartA);
    assert_eq!(
        wizard.store().raw(wizard.storage_key().unwrap()).map(str::to_string),
        stored_before
    );
}

#[test]
fn last_page_holds_the_two_optional_comments() {
    let mut wizard = wizard();
    for _ in 0..16 {
        answer_current_page(&mut wizard);
        wizard.advance().unwrap();
    }
    assert_eq!(wizard.page_index(), 16);
    let ids: Vec<&str> = wizard.current_page().iter().map(|q| q.id()).collect();
    assert_eq!(ids, ["q49", "q50"]);

    // Both optional: leaving them blank still advances.
    assert_eq!(
        wizard.advance().unwrap(),
        Transition::Moved {
            section: Section::PartB,
            page_index: 16
        }
    );
}

#[test]
fn part_b_needs_an_action_before_completing() {
    let mut wizard = wizard();
    walk_to_part_b(&mut wizard);

    assert_eq!(wizard.toggle_priority("Leadership").unwrap(), Toggle::Added);
    assert!(matches!(
        wizard.advance().unwrap(),
        Transition::Blocked(BlockReason::MissingSelections {
            priorities: 1,
            actions: 0
        })
    ));
    assert!(wizard.complete().unwrap().is_blocked());
    assert_eq!(wizard.section(), Section::PartB);

    wizard.toggle_action("Mentoring Program").unwrap();
    assert!(wizard.complete().unwrap().is_moved());
    assert_eq!(wizard.section(), Section::Complete);

    let submission = wizard.sink().last().unwrap();
    assert_eq!(submission.priorities.as_slice(), ["Leadership"]);
    assert_eq!(submission.actions.as_slice(), ["Mentoring Program"]);
    assert_eq!(submission.responses.len(), 50);
}

#[test]
fn selections_stay_within_bounds() {
    let mut wizard = wizard();
    walk_to_part_b(&mut wizard);
    let priorities: Vec<String> = wizard.catalog().priority_areas().to_vec();
    let actions: Vec<String> = wizard.catalog().action_areas().to_vec();

    for (i, label) in priorities.iter().cycle().take(40).enumerate() {
        let before = wizard.priorities().len();
        let selected = wizard.priorities().contains(label);
        let toggle = wizard.toggle_priority(label).unwrap();
        assert!(wizard.priorities().len() <= 3, "step {i}");
        if selected {
            assert_eq!(toggle, Toggle::Removed);
            assert_eq!(wizard.priorities().len(), before - 1);
        }
    }
    for label in actions.iter().chain(actions.iter().rev()).cycle().take(40) {
        let before = wizard.actions().len();
        let selected = wizard.actions().contains(label);
        wizard.toggle_action(label).unwrap();
        assert!(wizard.actions().len() <= 4);
        if selected {
            assert_eq!(wizard.actions().len(), before - 1);
        }
    }
}

#[test]
fn ranks_close_up_when_a_priority_is_dropped() {
    let mut wizard = wizard();
    walk_to_part_b(&mut wizard);
    wizard.toggle_priority("Recognition").unwrap();
    wizard.toggle_priority("Leadership").unwrap();
    wizard.toggle_priority("Communication").unwrap();
    assert_eq!(wizard.toggle_priority("Career Growth").unwrap(), Toggle::LimitReached);

    wizard.toggle_priority("Recognition").unwrap();
    assert_eq!(wizard.priorities().as_slice(), ["Leadership", "Communication"]);
    assert_eq!(wizard.priorities().rank_of("Communication"), Some(2));
}

#[test]
fn progress_never_drops_while_advancing() {
    let mut wizard = wizard();
    let mut last = wizard.progress();

    while wizard.section() == Section::PartA {
        answer_current_page(&mut wizard);
        wizard.advance().unwrap();
        assert!(wizard.progress() >= last);
        last = wizard.progress();
    }
    assert_eq!(last, 70);

    wizard.toggle_priority("Leadership").unwrap();
    wizard.toggle_action("Learning Budget").unwrap();
    assert_eq!(wizard.progress(), 74);
    wizard.advance().unwrap();
    assert_eq!(wizard.progress(), 100);
}

#[test]
fn retreat_may_lower_progress_and_is_never_gated() {
    let mut wizard = wizard();
    answer_current_page(&mut wizard);
    wizard.advance().unwrap();
    let on_page_one = wizard.progress();

    // Page 1 is unanswered, yet going back is allowed.
    assert!(wizard.retreat().unwrap().is_moved());
    assert!(wizard.progress() < on_page_one);
    assert_eq!(wizard.retreat().unwrap(), Transition::Stayed);
}

#[test]
fn restart_clears_everything() {
    let mut wizard = wizard();
    answer_current_page(&mut wizard);
    wizard.advance().unwrap();
    wizard.record_response("q4", 2).unwrap();
    let key = wizard.storage_key().unwrap().to_string();
    assert!(wizard.store().contains(&key));

    wizard.restart().unwrap();

    assert_eq!(wizard.store_mut().load(&key).unwrap(), None);
    assert_eq!(wizard.section(), Section::PartA);
    assert_eq!(wizard.page_index(), 0);
    assert!(wizard.responses().is_empty());
}

#[test]
fn every_change_is_persisted() {
    let mut wizard = wizard();
    let key = wizard.storage_key().unwrap().to_string();

    wizard.record_response("q1", 2).unwrap();
    assert_eq!(
        wizard.store_mut().load(&key).unwrap().unwrap().responses.get_int("q1").unwrap(),
        2
    );

    wizard.record_response("q1", 3).unwrap();
    wizard.record_response("q2", 3).unwrap();
    wizard.record_response("q3", 3).unwrap();
    wizard.advance().unwrap();

    let stored = wizard.store_mut().load(&key).unwrap().unwrap();
    assert_eq!(stored.page_index, 1);
    assert_eq!(stored.responses.get_int("q1").unwrap(), 3);
    assert_eq!(Some(stored.clone()), wizard.snapshot());
}
