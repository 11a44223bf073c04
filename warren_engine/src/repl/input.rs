//! Terminal input handling for the REPL.
//!
//! Uses rustyline for line editing and in-session history when stdin is a
//! terminal, and falls back to plain buffered stdin otherwise.

use std::io::{self, IsTerminal, Write};

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: DefaultEditor,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(map_io_err)?;
        Ok(Self { editor })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    warn!("failed to append to history: {err}");
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(trim_newline(&self.buffer).to_string()))
    }
}

fn trim_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newlines_are_trimmed() {
        assert_eq!(trim_newline("go north\n"), "go north");
        assert_eq!(trim_newline("go north\r\n"), "go north");
        assert_eq!(trim_newline("go north"), "go north");
    }

    #[test]
    fn readline_errors_map_to_events() {
        assert!(matches!(
            convert_readline_error(ReadlineError::Interrupted),
            Ok(InputEvent::Interrupted)
        ));
        assert!(matches!(convert_readline_error(ReadlineError::Eof), Ok(InputEvent::Eof)));
    }
}
