//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable (and scriptable
//! in tests).

use anatomy_foundation::{Error, ErrorKind, Result};
use anatomy_tree::LimbArchetype;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Command words understood by the REPL, offered for completion.
pub const COMMAND_WORDS: [&str; 11] = [
    "show",
    "select",
    "clear",
    "add",
    "insert",
    "remove",
    "undo",
    "archetypes",
    "export",
    "help",
    "quit",
];

/// Helper for rustyline that provides completion and hints.
#[derive(Helper, Completer, Hinter, Validator)]
struct AnatomyHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for AnatomyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command words in first position and archetype names after them.
struct CommandCompleter {
    archetypes: Vec<String>,
}

impl CommandCompleter {
    fn new() -> Self {
        Self {
            archetypes: LimbArchetype::appendages()
                .iter()
                .map(|archetype| archetype.name().to_string())
                .collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let start = line[..pos]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = &line[start..pos];

        let pool: Vec<&str> = if start == 0 {
            COMMAND_WORDS.to_vec()
        } else {
            self.archetypes.iter().map(String::as_str).collect()
        };

        let matches = pool
            .into_iter()
            .filter(|candidate| {
                candidate
                    .to_ascii_lowercase()
                    .starts_with(&word.to_ascii_lowercase())
            })
            .map(str::to_string)
            .collect();
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<AnatomyHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = AnatomyHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
