use std::io::BufRead;

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// Source of user-entered lines.
pub trait LineSource {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Interactive terminal input with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Plain buffered input for piped or scripted sessions. Prompts are not echoed.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
