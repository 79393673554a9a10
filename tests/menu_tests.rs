mod common;
use common::{output, setup_data_file};
use worklog::config::Config;
use worklog::core::menu::Session;
use worklog::ui::Terminal;

fn session_output(name: &str, script: &str) -> (bool, String) {
    let data = setup_data_file(name);
    let cfg = Config {
        clear_screen: false,
        ..Config::default()
    }
    .with_data_file(&data);

    let mut session = Session::new(&cfg, Terminal::new(script.as_bytes(), Vec::new()));
    session.run().unwrap();

    let marked = session.marker().is_some();
    (marked, output(session.into_prompter()))
}

#[test]
fn test_marker_is_set_and_shown_in_menu() {
    let (marked, out) = session_output("menu_marker_set", "m\nq\n");

    assert!(marked);
    assert!(out.contains("Time saved as"));
    assert!(out.contains("-Currently set to:"));
}

#[test]
fn test_marker_kept_when_replacement_refused() {
    let (marked, out) = session_output("menu_marker_keep", "m\nm\nn\nq\n");

    assert!(marked);
    assert!(out.contains("Would you like to replace it? Y/N"));
    assert_eq!(out.matches("Time saved as").count(), 1);
}

#[test]
fn test_marker_replaced_on_yes() {
    let (_, out) = session_output("menu_marker_replace", "m\nm\ny\nq\n");

    assert_eq!(out.matches("Time saved as").count(), 2);
}

#[test]
fn test_no_marker_line_before_one_is_set() {
    let (marked, out) = session_output("menu_marker_none", "q\n");

    assert!(!marked);
    assert!(!out.contains("-Currently set to:"));
    assert!(out.contains("Exiting program."));
}
