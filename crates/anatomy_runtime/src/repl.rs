//! The interactive anatomy editor.

use std::io::{self, Write};

use anatomy_foundation::{Error, ErrorKind, Maybe, Result};
use anatomy_tree::{LimbArchetype, NestedPart};
use tracing::debug;

use crate::config::SessionConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::EditSession;

const HELP: &str = "\
show                            List the parts of the anatomy
select <row>                    Select the part on a row of the listing
clear                           Clear the selection
add <archetype> [name]          Attach a limb to the selected part
insert <pos> <archetype> [name] Attach a limb at a child position
remove                          Remove the selected part and its limbs
undo                            Revert the last edit
archetypes                      List the limb archetypes
export                          Print the anatomy as a nested outline
help                            Show this help
quit                            Leave the editor";

/// A parsed editor command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the menu rows.
    Show,
    /// Select the part on a menu row.
    Select(usize),
    /// Clear the selection.
    Clear,
    /// Attach a limb to the selected part, at `position` or at the end.
    Add {
        /// Child position, or `None` to append.
        position: Option<usize>,
        /// Archetype of the new limb.
        archetype: LimbArchetype,
        /// Name of the new limb.
        name: String,
    },
    /// Remove the selected part.
    Remove,
    /// Revert the last edit.
    Undo,
    /// List the archetype catalog.
    Archetypes,
    /// Print the nested outline.
    Export,
    /// Print the command list.
    Help,
    /// Leave the editor.
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// A limb name may contain spaces and defaults to the archetype name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` for an unrecognized command word,
    /// `UnknownArchetype` for an archetype outside the catalog, and `Usage`
    /// for missing or malformed arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(Error::new(ErrorKind::UnknownCommand(String::new())));
        };
        let rest: Vec<&str> = words.collect();

        match word.to_ascii_lowercase().as_str() {
            "show" | "ls" => Ok(Self::Show),
            "select" | "sel" => match rest.as_slice() {
                [row] => Ok(Self::Select(parse_number(row, "select <row>")?)),
                _ => Err(usage("select <row>")),
            },
            "clear" => Ok(Self::Clear),
            "add" => match rest.split_first() {
                Some((archetype, name)) => limb(None, archetype, name),
                None => Err(usage("add <archetype> [name]")),
            },
            "insert" => match rest.as_slice() {
                [position, archetype, name @ ..] => {
                    let position = parse_number(position, "insert <pos> <archetype> [name]")?;
                    limb(Some(position), archetype, name)
                }
                _ => Err(usage("insert <pos> <archetype> [name]")),
            },
            "remove" | "rm" => Ok(Self::Remove),
            "undo" => Ok(Self::Undo),
            "archetypes" => Ok(Self::Archetypes),
            "export" => Ok(Self::Export),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(Error::new(ErrorKind::UnknownCommand(word.to_string()))),
        }
    }
}

fn usage(text: &str) -> Error {
    Error::new(ErrorKind::Usage(text.to_string()))
}

fn parse_number(word: &str, text: &str) -> Result<usize> {
    word.parse().map_err(|_| usage(text))
}

fn limb(position: Option<usize>, archetype: &str, name: &[&str]) -> Result<Command> {
    let archetype = LimbArchetype::lookup(archetype)
        .ok_or_else(|| Error::new(ErrorKind::UnknownArchetype(archetype.to_string())))?;
    let name = if name.is_empty() {
        archetype.name().to_string()
    } else {
        name.join(" ")
    };
    Ok(Command::Add {
        position,
        archetype,
        name,
    })
}

/// What the loop should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text (possibly empty) and keep reading.
    Output(String),
    /// Leave the loop.
    Quit,
}

/// The interactive editor loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Tree, selection, and undo state.
    session: EditSession,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the editor fails to initialize.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, EditSession::new(config)?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(editor: E, session: EditSession) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "anatomy> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    /// Runs the REPL loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        match self.eval(&line) {
            Ok(Reply::Output(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
                Ok(true)
            }
            Ok(Reply::Quit) => Ok(false),
            Err(e) => {
                print_error(&e);
                Ok(true)
            }
        }
    }

    /// Parses and executes one line.
    ///
    /// # Errors
    ///
    /// Returns the parse error or the session error of the command.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let command = Command::parse(line)?;
        debug!(?command, "executing");
        self.execute(command)
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns the session error of the command.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let text = match command {
            Command::Show => self.render_menu(),
            Command::Select(row) => {
                let part = self.session.select_row(row)?;
                format!("Selected {part}")
            }
            Command::Clear => {
                self.session.clear_selection()?;
                String::new()
            }
            Command::Add {
                position,
                archetype,
                name,
            } => {
                self.session
                    .insert_limb(Maybe::from(position), archetype, name)?;
                self.render_menu()
            }
            Command::Remove => {
                let name = self.session.remove_limb()?;
                format!("Removed {name}\n{}", self.render_menu())
            }
            Command::Undo => {
                self.session.undo()?;
                self.render_menu()
            }
            Command::Archetypes => LimbArchetype::appendages()
                .iter()
                .map(LimbArchetype::name)
                .collect::<Vec<_>>()
                .join(" "),
            Command::Export => render_nested(&self.session.export()?),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(text))
    }

    /// Renders the menu with row numbers and a `*` on the selected row.
    #[must_use]
    pub fn render_menu(&self) -> String {
        let menu = self.session.menu();
        let rows = menu.options().iter().enumerate().map(|(row, option)| {
            let marker = if option.selected { '*' } else { ' ' };
            format!("{row:>3} {marker} {}", option.description)
        });
        std::iter::once(format!("{}: {}", menu.title(), menu.description()))
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mAnatomy editor v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands. Use Ctrl+D to exit.\n");
        println!("{}", self.render_menu());

        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

/// Renders an outline with one `Name (Archetype)` line per part.
fn render_nested(root: &NestedPart) -> String {
    let mut lines = Vec::with_capacity(root.count());
    let mut stack = vec![(root, 0usize)];
    while let Some((part, depth)) = stack.pop() {
        lines.push(format!(
            "{:indent$}{} ({})",
            "",
            part.name,
            part.archetype,
            indent = depth * 2
        ));
        stack.extend(part.subparts.iter().rev().map(|sub| (sub, depth + 1)));
    }
    lines.join("\n")
}
