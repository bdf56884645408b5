//! Integration tests for tree traversal and export

use anatomy_foundation::{Maybe, Result};
use anatomy_tree::{BodyPart, LimbArchetype, NestedPart, Tree};

fn limb(name: &str) -> LimbArchetype {
    LimbArchetype::new(name, true)
}

/// Body { Head { Face }, Arm { Hand }, Tail }
fn creature() -> Tree {
    let mut tree = Tree::new("Body", LimbArchetype::body());
    for name in ["Head", "Arm", "Tail"] {
        tree = tree
            .insert_child(tree.root(), Maybe::none(), name, limb(name))
            .unwrap();
    }
    let head = tree.child_at(tree.root(), 0).unwrap().clone();
    let tree = tree
        .insert_child(&head, Maybe::none(), "Face", limb("Face"))
        .unwrap();
    let arm = tree.child_at(tree.root(), 1).unwrap().clone();
    tree.insert_child(&arm, Maybe::none(), "Hand", limb("Hand"))
        .unwrap()
}

#[test]
fn preorder_visits_parents_first_in_child_order() {
    let tree = creature();
    let visited: Vec<(String, usize)> = tree
        .preorder()
        .map(|entry| entry.map(|(part, depth)| (part.name().to_string(), depth)))
        .collect::<Result<_>>()
        .unwrap();

    let expected = [
        ("Body", 0),
        ("Head", 1),
        ("Face", 2),
        ("Arm", 1),
        ("Hand", 2),
        ("Tail", 1),
    ];
    assert_eq!(visited.len(), tree.live_count());
    for ((name, depth), (want_name, want_depth)) in visited.iter().zip(expected) {
        assert_eq!((name.as_str(), *depth), (want_name, want_depth));
    }
}

#[test]
fn map_preorder_depths_follow_parents() {
    let tree = creature();
    let mut seen = Vec::new();
    tree.map_preorder(|part, depth| seen.push((part.clone(), depth)))
        .unwrap();

    for (part, depth) in &seen {
        match part.parent().get() {
            None => assert_eq!(*depth, 0),
            Some(&parent_slot) => {
                let (_, parent_depth) = seen
                    .iter()
                    .find(|(candidate, _)| candidate.slot() == parent_slot)
                    .unwrap();
                assert_eq!(*depth, parent_depth + 1);
            }
        }
    }
}

#[test]
fn reverse_children_mirror_children() {
    let tree = creature();
    let forward: Vec<&str> = tree
        .children_of(tree.root())
        .map(|child| child.unwrap().name())
        .collect();
    let mut backward: Vec<&str> = tree
        .reverse_children_of(tree.root())
        .map(|child| child.unwrap().name())
        .collect();
    backward.reverse();

    assert_eq!(forward, vec!["Head", "Arm", "Tail"]);
    assert_eq!(forward, backward);
    assert_eq!(tree.children_of(tree.root()).len(), 3);
}

#[test]
fn leaf_has_no_children() {
    let tree = creature();
    let tail: BodyPart = tree.child_at(tree.root(), 2).unwrap().clone();
    assert_eq!(tree.children_of(&tail).count(), 0);
    assert!(tree.child_at(&tail, 0).is_err());
}

#[test]
fn export_nests_every_part() {
    let tree = creature();
    let nested = tree.to_nested().unwrap();

    assert_eq!(nested.count(), tree.live_count());
    assert_eq!(nested.name, "Body");
    let names: Vec<&str> = nested.subparts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Head", "Arm", "Tail"]);
    assert_eq!(
        nested.subparts[1].subparts,
        vec![NestedPart {
            name: "Hand".to_string(),
            archetype: limb("Hand"),
            subparts: Vec::new(),
        }]
    );
}

#[test]
fn deep_chain_does_not_recurse() {
    let mut tree = Tree::new("Body", LimbArchetype::body());
    let mut tip = tree.root().clone();
    for _ in 0..2_000 {
        tree = tree
            .insert_child(&tip, Maybe::none(), "Segment", limb("Tail"))
            .unwrap();
        tip = tree.child_at(tree.find(tip.id()).unwrap(), 0).unwrap().clone();
    }

    assert_eq!(tree.preorder().count(), 2_001);
    assert_eq!(tree.to_nested().unwrap().count(), 2_001);
}
