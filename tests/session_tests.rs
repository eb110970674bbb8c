mod common;
use common::SAMPLE_CSV;
use rtimecard::core::schedule::ViewOptions;
use rtimecard::core::session::TimecardSession;
use rtimecard::errors::AppError;

const BROKEN_CSV: &str = "Time,Agent,Wm Name\n\"2024-01-05T08:00:00,A1,LOGON\n";

#[test]
fn test_process_commits_index_and_agents() {
    let mut session = TimecardSession::new();
    let kept = session.process(SAMPLE_CSV).expect("process sample");

    assert_eq!(kept, 8);
    assert_eq!(session.agents(), ["A100".to_string(), "B200".to_string()]);
    assert_eq!(session.entries().record_count(), 8);
    assert!(session.error().is_none());
}

#[test]
fn test_failed_parse_keeps_previous_index() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("process sample");
    let before = session.entries().clone();

    let err = session.process(BROKEN_CSV).expect_err("broken input must fail");
    assert!(matches!(err, AppError::Parse(_)));

    let msg = session.error().expect("error slot filled");
    assert!(msg.starts_with("Parse error:"), "unexpected message: {msg}");
    assert_eq!(session.entries(), &before);
}

#[test]
fn test_success_clears_error_slot() {
    let mut session = TimecardSession::new();
    assert!(session.process(BROKEN_CSV).is_err());
    assert!(session.error().is_some());

    session.process(SAMPLE_CSV).expect("process sample");
    assert!(session.error().is_none());
}

#[test]
fn test_reprocessing_replaces_instead_of_merging() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("process sample");

    let other = "Time,Agent,Wm Name\n2024-02-01T08:00:00,C300,LOGON\n";
    session.process(other).expect("process second input");

    assert_eq!(session.agents(), ["C300".to_string()]);
    assert!(session.entries().days_for("A100").is_none());
}

#[test]
fn test_reprocessing_same_text_is_idempotent() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("first pass");
    let first = session.entries().clone();

    session.process(SAMPLE_CSV).expect("second pass");
    assert_eq!(session.entries(), &first);
}

#[test]
fn test_select_agent_and_rows() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("process sample");

    assert!(session.selected_rows(&ViewOptions::default()).is_empty());

    session.select_agent("A100").expect("A100 exists");
    assert_eq!(session.selected_agent(), Some("A100"));

    let rows = session.selected_rows(&ViewOptions::default());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].day.to_string(), "2024-01-10");
}

#[test]
fn test_select_unknown_agent_fails() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("process sample");

    let err = session.select_agent("ZZZ").expect_err("unknown agent");
    assert!(matches!(err, AppError::InvalidAgent(ref a) if a == "ZZZ"));
    assert_eq!(session.error(), Some("Invalid agent: ZZZ"));
    assert_eq!(session.selected_agent(), None);
}

#[test]
fn test_selection_dropped_when_agent_disappears() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("process sample");
    session.select_agent("B200").expect("B200 exists");

    session
        .process("Time,Agent,Wm Name\n2024-02-01T08:00:00,B200,LOGON\n")
        .expect("keeps B200");
    assert_eq!(session.selected_agent(), Some("B200"));

    session
        .process("Time,Agent,Wm Name\n2024-02-01T08:00:00,C300,LOGON\n")
        .expect("drops B200");
    assert_eq!(session.selected_agent(), None);
    assert!(session.selected_days().is_none());
}

#[test]
fn test_clear_resets_everything() {
    let mut session = TimecardSession::new();
    session.process(SAMPLE_CSV).expect("process sample");
    session.select_agent("A100").expect("A100 exists");

    session.clear();
    assert!(session.agents().is_empty());
    assert!(session.entries().is_empty());
    assert_eq!(session.selected_agent(), None);
}
