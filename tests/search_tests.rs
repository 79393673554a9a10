mod common;
use common::{output, sample, scripted};
use worklog::core::search::SearchLogic;
use worklog::errors::AppError;
use worklog::models::RecordId;

const WRAP: usize = 72;

#[test]
fn test_duration_search_edit_is_reconciled() {
    let mut term = scripted("t\n10\n\ne\nm\n20\nf\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!((out[0].id, out[0].minutes_spent), (RecordId(1), 30));
    assert_eq!((out[1].id, out[1].minutes_spent), (RecordId(2), 20));
}

#[test]
fn test_listed_date_delete_removes_from_full_collection() {
    let mut term = scripted("d\nl\n01/01/2020\nd\ny\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, RecordId(2));
}

#[test]
fn test_listed_date_must_be_present() {
    // 01/03/2020 is a valid date but not in the data
    let mut term = scripted("d\nl\n01/03/2020\n01/02/2020\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    let text = output(term);
    assert!(text.contains("Available Dates:"));
    assert!(text.contains("Please type one of the dates listed above."));
    assert!(text.contains("Task Name:   Read"));
}

#[test]
fn test_date_range_reprompts_until_valid() {
    let mut term = scripted("d\nr\n13/45/2020\n01/02/2020\n01/01/2020\n01/03/2020\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    let text = output(term);
    assert!(text.contains("Invalid date format: 13/45/2020"));
    assert!(text.contains("must not be earlier than 01/02/2020"));
    assert!(text.contains("Task No.:    1/1"));
    assert!(text.contains("Task Name:   Read"));
}

#[test]
fn test_phrase_cancel_goes_back_to_search_menu() {
    let mut term = scripted("s\nCANCEL\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    let text = output(term);
    assert_eq!(text.matches("Search Option Menu:").count(), 2);
    assert!(!text.contains("There is nothing to display."));
}

#[test]
fn test_lowercase_cancel_is_a_phrase() {
    let mut term = scripted("s\ncancel\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    assert!(output(term).contains("There is nothing to display."));
}

#[test]
fn test_invalid_regex_is_retried() {
    let mut term = scripted("r\n(unclosed\nWRI\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    let text = output(term);
    assert!(text.contains("Improper regex format"));
    assert!(text.contains("Task Name:   Write"));
}

#[test]
fn test_duration_upper_bound_reprompts() {
    let mut term = scripted("t\n0\n20\n10\nabc\n30\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    let text = output(term);
    assert!(text.contains("10 is lower than 20"));
    assert!(text.contains("Task Name:   Write"));
}

#[test]
fn test_empty_result_returns_collection_unchanged() {
    let mut term = scripted("t\n999\n\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    assert!(output(term).contains("There is nothing to display."));
}

#[test]
fn test_invalid_menu_key_and_back() {
    let mut term = scripted("x\nb\n");
    let out = SearchLogic::run(&mut term, sample(), WRAP).unwrap();

    assert_eq!(out, sample());
    assert!(output(term).contains("Please type D, R, S, T or B."));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut term = scripted("t\n");
    let err = SearchLogic::run(&mut term, sample(), WRAP).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}
