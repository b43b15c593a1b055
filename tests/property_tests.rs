//! Property tests for editor invariants

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use macro_editor::simplify::{rdp_keep_indices, Point};
use macro_editor::validation::is_reserved_label;
use macro_editor::{Event, MacroEditor};

#[derive(Debug, Clone)]
enum Op {
    Insert(usize),
    Delete(Vec<usize>),
    Move(usize, usize),
    Copy(Vec<usize>),
    Paste(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..40).prop_map(Op::Insert),
        prop::collection::vec(0usize..40, 0..5).prop_map(Op::Delete),
        (0usize..40, 0usize..40).prop_map(|(from, to)| Op::Move(from, to)),
        prop::collection::vec(0usize..40, 0..5).prop_map(Op::Copy),
        (0usize..40).prop_map(Op::Paste),
    ]
}

fn path() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-500i32..500, -500i32..500), 2..40)
}

fn keys(editor: &MacroEditor) -> Vec<String> {
    editor
        .events()
        .iter()
        .filter_map(|e| e.field("key"))
        .filter_map(|key| key.as_str().map(str::to_string))
        .collect()
}

fn editor_with_path(coords: &[(i32, i32)], delay: f64) -> MacroEditor {
    let mut editor = MacroEditor::new();
    for &(x, y) in coords {
        editor.insert(usize::MAX, Event::cursor_move(x, y).with_timestamp(delay));
    }
    editor
}

proptest! {
    #[test]
    fn store_order_matches_model(
        initial in 0usize..20,
        ops in prop::collection::vec(op(), 0..30),
    ) {
        let mut editor = MacroEditor::new();
        let mut model: Vec<String> = Vec::new();
        let mut clipboard: Vec<String> = Vec::new();
        for i in 0..initial {
            editor.insert(i, Event::key(format!("k{}", i), true));
            model.push(format!("k{}", i));
        }

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Insert(at) => {
                    let key = format!("n{}", step);
                    let index = editor.insert(at, Event::key(key.clone(), true));
                    prop_assert_eq!(index, at.min(model.len()));
                    model.insert(index, key);
                }
                Op::Delete(indices) => {
                    let valid: BTreeSet<usize> =
                        indices.iter().copied().filter(|&i| i < model.len()).collect();
                    prop_assert_eq!(editor.delete(&indices), valid.len());
                    for &i in valid.iter().rev() {
                        model.remove(i);
                    }
                }
                Op::Move(from, to) => {
                    let to = to.min(model.len().saturating_sub(1));
                    let moves = from < model.len() && from != to;
                    prop_assert_eq!(editor.move_event(from, to), moves);
                    if moves {
                        let key = model.remove(from);
                        model.insert(to, key);
                    }
                }
                Op::Copy(indices) => {
                    let valid: BTreeSet<usize> =
                        indices.iter().copied().filter(|&i| i < model.len()).collect();
                    clipboard = valid.iter().map(|&i| model[i].clone()).collect();
                    prop_assert_eq!(editor.copy(&indices), clipboard.len());
                }
                Op::Paste(at) => {
                    prop_assert_eq!(editor.paste(at), clipboard.len());
                    let at = at.min(model.len());
                    model.splice(at..at, clipboard.iter().cloned());
                }
            }
            prop_assert_eq!(keys(&editor), model.clone());
        }
    }

    #[test]
    fn labels_stay_unique(
        assignments in prop::collection::vec(
            (0usize..12, prop::sample::select(vec!["A", "B", "C", "Start", "End", " A ", ""])),
            0..40,
        ),
    ) {
        let mut editor = MacroEditor::new();
        for i in 0..10 {
            editor.insert(i, Event::cursor_move(i as i32, 0));
        }

        for (index, label) in assignments {
            let before = editor.to_document();
            if editor.set_label(index, label).is_err() {
                prop_assert_eq!(editor.to_document(), before);
            }

            let labels: Vec<&str> = editor.events().iter().filter_map(|e| e.label()).collect();
            let unique: HashSet<&str> = labels.iter().copied().collect();
            prop_assert_eq!(labels.len(), unique.len());
            prop_assert!(labels.iter().all(|l| !is_reserved_label(l) && !l.is_empty()));
        }
    }

    #[test]
    fn rdp_keeps_endpoints(coords in path(), tolerance in 0.0f64..50.0) {
        let points: Vec<Point> = coords.iter().copied().map(Point::from).collect();
        let kept = rdp_keep_indices(&points, tolerance);

        prop_assert_eq!(kept.first().copied(), Some(0));
        prop_assert_eq!(kept.last().copied(), Some(points.len() - 1));
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn simplify_is_idempotent(coords in path(), tolerance in 0.0f64..50.0) {
        let mut editor = editor_with_path(&coords, 0.01);
        let removed = editor.simplify_path(0, coords.len() - 1, tolerance);
        prop_assert_eq!(editor.len(), coords.len() - removed);

        let first = editor.get(0).and_then(Event::position);
        let last = editor.get(editor.len() - 1).and_then(Event::position);
        prop_assert_eq!(first, coords.first().copied());
        prop_assert_eq!(last, coords.last().copied());

        let len = editor.len();
        prop_assert_eq!(editor.simplify_path(0, len - 1, tolerance), 0);
    }

    #[test]
    fn simplify_conserves_total_time(coords in path(), tolerance in 0.0f64..50.0) {
        let mut editor = editor_with_path(&coords, 0.02);
        let before = editor.path_stats(0, coords.len() - 1).unwrap().total_time;
        editor.simplify_path(0, coords.len() - 1, tolerance);
        let len = editor.len();
        let after = editor.path_stats(0, len - 1).unwrap().total_time;

        // the anchor delay is kept on top of the redistributed total
        prop_assert!(after >= before - 1e-9);
        prop_assert!(after <= before + 0.02 + 1e-9);
    }

    #[test]
    fn rescale_hits_requested_total(
        delays in prop::collection::vec(0.001f64..2.0, 1..30),
        target in 0.0f64..100.0,
    ) {
        let mut editor = MacroEditor::new();
        for (i, delay) in delays.iter().enumerate() {
            editor.insert(i, Event::cursor_move(i as i32, 0).with_timestamp(*delay));
        }
        let end = delays.len() - 1;

        prop_assert!(editor.rescale_group_time(0, end, target));
        let total = editor.path_stats(0, end).unwrap().total_time;
        prop_assert!((total - target).abs() < 1e-6);
    }
}
