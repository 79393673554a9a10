use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add, setup_data_file, temp_out, wl};

#[test]
fn test_init_creates_empty_data_file() {
    let data = setup_data_file("cli_init");

    wl().args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(
        fs::read_to_string(&data).unwrap().trim_end(),
        "entry_date,task_name,mins_spent,notes"
    );
}

#[test]
fn test_add_then_list() {
    let data = setup_data_file("cli_add_list");
    add(&data, "03/04/2024", "write report", "45", "draft");
    add(&data, "03/05/2024", "review", "15", "");

    wl().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Write Report"))
        .stdout(contains("Review"))
        .stdout(contains("Total: 01h 00m in 2 entries"));
}

#[test]
fn test_add_rejects_invalid_values() {
    let data = setup_data_file("cli_add_invalid");

    wl().args(["--data", &data, "--test", "add", "--task", "x", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid minutes"));

    wl().args([
        "--data", &data, "--test", "add", "--task", "x", "--minutes", "5", "--date", "2024-03-04",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));

    assert!(!Path::new(&data).exists());
}

#[test]
fn test_list_filters() {
    let data = setup_data_file("cli_list_filters");
    add(&data, "02/28/2024", "Plan", "20", "sprint");
    add(&data, "03/04/2024", "Write", "45", "release notes");
    add(&data, "03/05/2024", "Review", "15", "");

    wl().args([
        "--data", &data, "--test", "list", "--from", "03/01/2024", "--to", "03/31/2024",
    ])
    .assert()
    .success()
    .stdout(contains("Write"))
    .stdout(contains("Review"))
    .stdout(contains("Plan").not());

    wl().args(["--data", &data, "--test", "list", "--min", "15", "--max", "20"])
        .assert()
        .success()
        .stdout(contains("Total: 00h 35m in 2 entries"));

    wl().args(["--data", &data, "--test", "list", "--grep", "^rel"])
        .assert()
        .success()
        .stdout(contains("Write"))
        .stdout(contains("1 entries"));

    wl().args(["--data", &data, "--test", "list", "--phrase", "nothing like this"])
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_list_rejects_bad_ranges() {
    let data = setup_data_file("cli_list_bad");
    add(&data, "03/04/2024", "Write", "45", "");

    wl().args(["--data", &data, "--test", "list", "--min", "30", "--max", "10"])
        .assert()
        .failure()
        .stderr(contains("Invalid minutes"));

    wl().args([
        "--data", &data, "--test", "list", "--from", "03/31/2024", "--to", "03/01/2024",
    ])
    .assert()
    .failure()
    .stderr(contains("must not be earlier"));
}

#[test]
fn test_menu_search_edit_is_saved() {
    let data = setup_data_file("cli_menu_search");
    add(&data, "03/04/2024", "Write", "45", "");
    add(&data, "03/05/2024", "Review", "15", "");

    wl().args(["--data", &data, "--test"])
        .write_stdin("s\nt\n45\n\ne\nm\n60\nf\nb\nq\n")
        .assert()
        .success()
        .stdout(contains("Exiting program."));

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains("03/04/2024,Write,60,"));
    assert!(content.contains("03/05/2024,Review,15,"));
}

#[test]
fn test_menu_browse_delete_is_saved_and_logged() {
    let data = setup_data_file("cli_menu_delete");
    add(&data, "03/04/2024", "Write", "45", "");
    add(&data, "03/05/2024", "Review", "15", "");

    wl().args(["--data", &data, "--test", "menu"])
        .write_stdin("b\nd\ny\nb\nq\n")
        .assert()
        .success();

    let content = fs::read_to_string(&data).unwrap();
    assert!(!content.contains("Write"));
    assert!(content.contains("Review"));

    wl().args(["--data", &data, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("Deleted 'Write' (45 min)"));
}

#[test]
fn test_menu_new_entry() {
    let data = setup_data_file("cli_menu_new");

    wl().args(["--data", &data, "--test"])
        .write_stdin("n\ndeploy\n15\nsome notes\nq\n")
        .assert()
        .success();

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains(",Deploy,15,"));
    assert!(content.contains("some notes"));
}

#[test]
fn test_menu_empty_collection_and_closed_input() {
    let data = setup_data_file("cli_menu_empty");

    wl().args(["--data", &data, "--test"])
        .write_stdin("b\ns\nc\nl\nx\n")
        .assert()
        .success()
        .stdout(contains("There are no entries to display."))
        .stdout(contains("Cannot save a blank tasklog."))
        .stdout(contains("There is no backup file yet."))
        .stdout(contains("Please type N, M, B, S, C, L or Q."));
}

#[test]
fn test_menu_backup_and_restore() {
    let data = setup_data_file("cli_menu_backup");
    add(&data, "03/04/2024", "Write", "45", "");

    wl().args(["--data", &data, "--test"])
        .write_stdin("c\nq\n")
        .assert()
        .success()
        .stdout(contains("Backup created!"));

    let backup = data.replace(".csv", ".backup.csv");
    assert!(fs::read_to_string(&backup).unwrap().contains("Write"));

    fs::write(&data, "entry_date,task_name,mins_spent,notes\n").unwrap();

    wl().args(["--data", &data, "--test"])
        .write_stdin("l\nq\n")
        .assert()
        .success()
        .stdout(contains("Backup loaded (1 entries)."));

    assert!(fs::read_to_string(&data).unwrap().contains("03/04/2024,Write,45,"));
}

#[test]
fn test_backup_command_compress() {
    let data = setup_data_file("cli_backup_zip");
    add(&data, "03/04/2024", "Write", "45", "");

    let out = temp_out("cli_backup_zip", "csv");
    let zip = out.replace(".csv", ".zip");
    fs::remove_file(&zip).ok();

    wl().args(["--data", &data, "--test", "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_command_refused_overwrite() {
    let data = setup_data_file("cli_backup_keep");
    add(&data, "03/04/2024", "Write", "45", "");

    let out = temp_out("cli_backup_keep", "csv");
    fs::write(&out, "keep me").unwrap();

    wl().args(["--data", &data, "--test", "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled by user."));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_config_print() {
    let data = setup_data_file("cli_config");

    wl().args(["--data", &data, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_file:"))
        .stdout(contains("cli_config_worklog.backup.csv"));
}
