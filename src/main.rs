//! worklog main entrypoint.

use worklog::run;

fn main() {
    if let Err(e) = run() {
        worklog::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
