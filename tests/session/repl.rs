//! Integration tests for the command loop

use std::collections::VecDeque;

use anatomy_foundation::{ErrorKind, Result};
use anatomy_runtime::{EditSession, LineEditor, ReadResult, Repl, Reply, SessionConfig};

/// Replays a fixed script, then reports end of input.
struct ScriptedEditor {
    lines: VecDeque<ReadResult>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| ReadResult::Line((*line).to_string()))
                .collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    let session = EditSession::new(SessionConfig::default()).unwrap();
    Repl::with_editor(ScriptedEditor::new(lines), session).without_banner()
}

fn output(repl: &mut Repl<ScriptedEditor>, line: &str) -> String {
    match repl.eval(line).unwrap() {
        Reply::Output(text) => text,
        Reply::Quit => panic!("unexpected quit for {line:?}"),
    }
}

#[test]
fn scripted_session_builds_tree() {
    let mut r = repl(&[
        "select 0",
        "add arm Left Arm",
        "select 0",
        "insert 0 arm Right Arm",
        "select 1",
        "remove",
        "show",
    ]);
    r.run().unwrap();

    let names: Vec<String> = r
        .session()
        .tree()
        .children_of(r.session().tree().root())
        .map(|child| child.unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["Left Arm"]);
}

#[test]
fn interrupted_line_is_skipped() {
    let mut editor = ScriptedEditor::new(&["select 0"]);
    editor.lines.push_back(ReadResult::Interrupted);
    editor
        .lines
        .push_back(ReadResult::Line("add tail".to_string()));
    let session = EditSession::new(SessionConfig::default()).unwrap();
    let mut r = Repl::with_editor(editor, session).without_banner();

    r.run().unwrap();
    assert_eq!(r.session().tree().live_count(), 2);
}

#[test]
fn remove_reports_name_and_menu() {
    let mut r = repl(&[]);
    output(&mut r, "select 0");
    output(&mut r, "add fin");
    output(&mut r, "select 1");

    let text = output(&mut r, "remove");
    assert_eq!(text, "Removed Fin\nAnatomy: Build-a-Creature\n  0   [Body] Body");
}

#[test]
fn undo_without_edits_fails() {
    let mut r = repl(&[]);
    assert_eq!(r.eval("undo").unwrap_err().kind, ErrorKind::NothingToUndo);
}

#[test]
fn add_without_selection_fails() {
    let mut r = repl(&[]);
    assert_eq!(r.eval("add head").unwrap_err().kind, ErrorKind::NoSelection);
}

#[test]
fn archetypes_lists_catalog() {
    let mut r = repl(&[]);
    assert_eq!(
        output(&mut r, "archetypes"),
        "Head Face Arm Hand Back Feet Tail Fin Roots"
    );
}

#[test]
fn quit_ends_eval() {
    let mut r = repl(&[]);
    assert_eq!(r.eval("exit").unwrap(), Reply::Quit);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn line() -> impl Strategy<Value = String> {
        prop_oneof![
            (0usize..8).prop_map(|row| format!("select {row}")),
            Just("add arm".to_string()),
            Just("add tail Long Tail".to_string()),
            (0usize..3).prop_map(|pos| format!("insert {pos} fin")),
            Just("remove".to_string()),
            Just("undo".to_string()),
            Just("clear".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn menu_always_lists_every_live_part(lines in prop::collection::vec(line(), 0..30)) {
            let mut r = repl(&[]);
            for line in &lines {
                let _ = r.eval(line);
                let session = r.session();
                prop_assert_eq!(session.options().len(), session.tree().live_count());
                prop_assert!(session.options().iter().filter(|o| o.selected).count() <= 1);
            }
        }
    }
}
