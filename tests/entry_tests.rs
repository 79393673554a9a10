mod common;
use chrono::{NaiveDate, NaiveDateTime};
use common::{output, scripted};
use worklog::core::entry::EntryLogic;
use worklog::errors::AppError;
use worklog::models::RecordId;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid time")
}

#[test]
fn test_time_span_ends_now() {
    assert_eq!(EntryLogic::time_span(30, at(9, 30)), "(09:00AM - 09:30AM)");
    assert_eq!(EntryLogic::time_span(90, at(13, 15)), "(11:45AM - 01:15PM)");
}

#[test]
fn test_minutes_since_marker() {
    assert_eq!(EntryLogic::minutes_since(at(9, 0), at(9, 25)), 25);
    assert_eq!(EntryLogic::minutes_since(at(10, 0), at(9, 0)), 0);
}

#[test]
fn test_build_validates_fields() {
    let ok = EntryLogic::build(RecordId(1), "03/04/2024", "write report", 15, "").unwrap();
    assert_eq!(ok.task_name, "Write Report");

    assert!(matches!(
        EntryLogic::build(RecordId(1), "2024-03-04", "x", 15, ""),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        EntryLogic::build(RecordId(1), "03/04/2024", " ", 15, ""),
        Err(AppError::EmptyTaskName)
    ));
    assert!(matches!(
        EntryLogic::build(RecordId(1), "03/04/2024", "x", 0, ""),
        Err(AppError::InvalidMinutes(_))
    ));
}

#[test]
fn test_prompt_without_marker() {
    let mut marker = None;
    let mut term = scripted("\ndeploy API\nzero\n40\nshipped\n");
    let r = EntryLogic::prompt(&mut term, RecordId(3), "03/04/2024", &mut marker, at(10, 0)).unwrap();

    assert_eq!(r.id, RecordId(3));
    assert_eq!(r.date, "03/04/2024");
    assert_eq!(r.task_name, "Deploy Api");
    assert_eq!(r.minutes_spent, 40);
    assert_eq!(r.notes, "(09:20AM - 10:00AM) shipped");
    assert!(output(term).contains("Invalid minutes: zero"));
}

#[test]
fn test_prompt_uses_and_clears_marker() {
    let mut marker = Some(at(9, 35));
    let mut term = scripted("maybe\ny\nreview\n\n\ny\n");
    let r = EntryLogic::prompt(&mut term, RecordId(1), "03/04/2024", &mut marker, at(10, 0)).unwrap();

    assert_eq!(r.minutes_spent, 25);
    assert_eq!(r.notes, "(09:35AM - 10:00AM)");
    assert!(marker.is_none());
    let out = output(term);
    assert!(out.contains("There is a marker at 09:35AM"));
    assert!(out.contains("Please type Y or N."));
}

#[test]
fn test_prompt_declined_marker_is_kept() {
    let mut marker = Some(at(9, 35));
    let mut term = scripted("n\nreview\n5\n\nn\nlate notes\n");
    let r = EntryLogic::prompt(&mut term, RecordId(1), "03/04/2024", &mut marker, at(10, 0)).unwrap();

    assert_eq!(r.minutes_spent, 5);
    assert_eq!(r.notes, "(09:55AM - 10:00AM) late notes");
    assert_eq!(marker, Some(at(9, 35)));
}
