//! Integration tests for EditSession

use anatomy_foundation::{ErrorKind, Maybe};
use anatomy_runtime::{EditSession, SessionConfig};
use anatomy_tree::{LimbArchetype, Tree};

fn archetype(name: &str) -> LimbArchetype {
    LimbArchetype::lookup(name).unwrap()
}

fn rows(session: &EditSession) -> Vec<String> {
    session
        .options()
        .iter()
        .map(|option| option.description.clone())
        .collect()
}

#[test]
fn builds_a_creature() {
    let mut session = EditSession::new(SessionConfig::default()).unwrap();

    session.select_row(0).unwrap();
    session.add_limb(archetype("Head"), "Head").unwrap();
    session.select_row(0).unwrap();
    session.add_limb(archetype("Arm"), "Left Arm").unwrap();
    session.select_row(0).unwrap();
    session
        .insert_limb(Maybe::of(1), archetype("Arm"), "Right Arm")
        .unwrap();
    session.select_row(1).unwrap();
    session.add_limb(archetype("Face"), "Face").unwrap();

    assert_eq!(
        rows(&session),
        vec![
            "[Body] Body",
            "  [Head] Head",
            "    [Face] Face",
            "  [Arm] Right Arm",
            "  [Arm] Left Arm",
        ]
    );
    assert_eq!(session.undo_depth(), 4);

    let exported = session.export().unwrap();
    assert_eq!(exported.count(), 5);
}

#[test]
fn failed_insert_keeps_selection_and_history() {
    let mut session = EditSession::new(SessionConfig::default()).unwrap();
    session.select_row(0).unwrap();

    let err = session
        .insert_limb(Maybe::of(5), archetype("Tail"), "Tail")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::IndexOutOfRange { index: 5, length: 0 });
    assert!(session.selected().is_some());
    assert_eq!(session.undo_depth(), 0);
    assert_eq!(session.tree().live_count(), 1);
}

#[test]
fn selection_survives_undo_when_part_exists() {
    let mut session = EditSession::new(SessionConfig::default()).unwrap();
    session.select_row(0).unwrap();
    session.add_limb(archetype("Tail"), "Tail").unwrap();

    session.select_row(0).unwrap();
    session.undo().unwrap();

    // Root exists in every version
    assert_eq!(session.selected().unwrap().name(), "Body");
    assert!(session.options()[0].selected);
}

#[test]
fn undo_history_is_bounded() {
    let config = SessionConfig::default().with_history_capacity(2);
    let mut session = EditSession::new(config).unwrap();
    for _ in 0..4 {
        session.select_row(0).unwrap();
        session.add_limb(archetype("Fin"), "Fin").unwrap();
    }

    assert_eq!(session.undo_depth(), 2);
    session.undo().unwrap();
    session.undo().unwrap();
    assert_eq!(session.tree().live_count(), 3);
    assert_eq!(session.undo().unwrap_err().kind, ErrorKind::NothingToUndo);
}

#[test]
fn stale_handle_cannot_be_selected() {
    let mut session = EditSession::new(SessionConfig::default()).unwrap();
    session.select_row(0).unwrap();
    session.add_limb(archetype("Roots"), "Roots").unwrap();
    let roots = session.select_row(1).unwrap().clone();
    session.remove_limb().unwrap();

    let err = session.select(&roots).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DetachedNode { .. }));
    assert!(session.selected().is_none());
}

#[test]
fn editing_an_existing_tree() {
    let tree = Tree::new("Carapace", LimbArchetype::body());
    let tree = tree
        .insert_child(tree.root(), Maybe::none(), "Feet", archetype("Feet"))
        .unwrap();

    let session = EditSession::with_tree(SessionConfig::default().with_indent_width(4), tree).unwrap();
    assert_eq!(rows(&session), vec!["[Body] Carapace", "    [Feet] Feet"]);
}

#[test]
fn invalid_config_is_rejected() {
    let err = EditSession::new(SessionConfig::default().with_root_name("")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
}

#[test]
fn undo_then_insert_does_not_revive_old_handles() {
    let mut session = EditSession::new(SessionConfig::default()).unwrap();
    session.select_row(0).unwrap();
    session.add_limb(archetype("Arm"), "Arm").unwrap();
    let arm = session.select_row(1).unwrap().clone();

    session.undo().unwrap();
    session.select_row(0).unwrap();
    session.add_limb(archetype("Tail"), "Tail").unwrap();

    assert!(matches!(
        session.select(&arm).unwrap_err().kind,
        ErrorKind::DetachedNode { .. }
    ));
    assert!(session.tree().find(arm.id()).is_none());
}
