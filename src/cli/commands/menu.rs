use crate::config::Config;
use crate::core::menu::Session;
use crate::errors::AppResult;
use crate::ui::Terminal;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::new(cfg, Terminal::stdio(cfg));
    session.run()
}
