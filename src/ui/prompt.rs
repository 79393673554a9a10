//! Line-based prompting.
//!
//! The interactive core only talks to a [`Prompter`]: it asks for a line,
//! shows text, and leaves notices for the user. [`Terminal`] is the concrete
//! implementation over any reader/writer pair, stdin/stdout in production
//! and in-memory buffers in tests.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::process::Command;

const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

pub trait Prompter {
    /// Print `prompt` and read one line, without its line ending.
    fn ask(&mut self, prompt: &str) -> AppResult<String>;

    fn show(&mut self, text: &str) -> AppResult<()>;

    /// A message for the user that must stay visible after the next clear.
    fn notice(&mut self, text: &str) -> AppResult<()>;

    fn clear(&mut self) -> AppResult<()>;

    /// First character of the answer, upper-cased. `None` for a blank line.
    fn choice(&mut self, prompt: &str) -> AppResult<Option<char>> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().chars().next().map(|c| c.to_ascii_uppercase()))
    }

    /// Yes only when the answer starts with `y` or `Y`.
    fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        Ok(self.choice(prompt)? == Some('Y'))
    }

    /// Ask for a replacement of `current`.
    fn edit_text(&mut self, current: &str) -> AppResult<String> {
        self.show(&format!("Current value: {current}"))?;
        self.ask("Please enter the new value:")
    }
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    editor: Option<String>,
    pending: Vec<String>,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal bound to the process stdin/stdout, configured from `cfg`.
    pub fn stdio(cfg: &Config) -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
            .with_clear_screen(cfg.clear_screen)
            .with_editor(cfg.editor.clone())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
            editor: None,
            pending: Vec::new(),
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn with_editor(mut self, editor: Option<String>) -> Self {
        self.editor = editor;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn edit_in_editor(&self, editor: &str, current: &str) -> io::Result<String> {
        let path = std::env::temp_dir().join(format!("worklog-notes-{}.txt", std::process::id()));
        fs::write(&path, current)?;

        let status = Command::new(editor).arg(&path).status();
        let edited = match status {
            Ok(s) if s.success() => fs::read_to_string(&path),
            Ok(s) => Err(io::Error::other(format!("editor exited with {s}"))),
            Err(e) => Err(e),
        };
        fs::remove_file(&path).ok();

        edited.map(|text| text.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn ask(&mut self, prompt: &str) -> AppResult<String> {
        writeln!(self.output, "{prompt}")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn notice(&mut self, text: &str) -> AppResult<()> {
        if self.clear_screen {
            self.pending.push(text.to_string());
            Ok(())
        } else {
            self.show(text)
        }
    }

    fn clear(&mut self) -> AppResult<()> {
        if !self.clear_screen {
            return Ok(());
        }

        write!(self.output, "{CLEAR_SEQUENCE}")?;
        for msg in self.pending.drain(..) {
            writeln!(self.output, "{msg}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn edit_text(&mut self, current: &str) -> AppResult<String> {
        if let Some(editor) = self.editor.clone() {
            self.show(&format!("Opening '{editor}'... save and close it when finished."))?;
            match self.edit_in_editor(&editor, current) {
                Ok(text) => return Ok(text),
                Err(e) => {
                    self.show(&format!(
                        "Advanced text editing isn't available on your device ({e})."
                    ))?;
                }
            }
        }

        self.show(&format!("Current value: {current}"))?;
        self.ask("Please enter the new value:")
    }
}
