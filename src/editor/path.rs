//! Mouse-path runs, statistics, rescaling and simplification

use tracing::{debug, info};

use crate::simplify::{rdp_keep_indices, redistribute_timestamps, Point};
use crate::types::{Event, MoveRun, PathStats, RunItem};

use super::MacroEditor;

/// Clamp an inclusive range into the store; `None` when nothing is left
fn clamp_range(editor: &MacroEditor, start: usize, end: usize) -> Option<(usize, usize)> {
    let last = editor.events.len().checked_sub(1)?;
    let end = end.min(last);
    (start <= end).then_some((start, end))
}

fn point_of(event: &Event) -> Point {
    Point::from(event.position().unwrap_or((0, 0)))
}

/// Partition the store into single events and runs of two or more moves
pub fn cursor_move_runs(editor: &MacroEditor) -> Vec<RunItem> {
    let events = &editor.events;
    let mut items = Vec::new();
    let mut i = 0;

    while i < events.len() {
        if !events[i].is_cursor_move() {
            items.push(RunItem::Single { index: i });
            i += 1;
            continue;
        }

        let start = i;
        let mut total_time = events[i].timestamp();
        while i + 1 < events.len() && events[i + 1].is_cursor_move() {
            i += 1;
            total_time += events[i].timestamp();
        }
        let end = i;

        if end > start {
            let (start_x, start_y) = events[start].position().unwrap_or((0, 0));
            let (end_x, end_y) = events[end].position().unwrap_or((0, 0));
            items.push(RunItem::Group(MoveRun {
                start,
                end,
                count: end - start + 1,
                start_x,
                start_y,
                end_x,
                end_y,
                total_time,
            }));
        } else {
            items.push(RunItem::Single { index: start });
        }
        i += 1;
    }

    items
}

/// Distance and time over `events[start..=end]`
pub fn path_stats(editor: &MacroEditor, start: usize, end: usize) -> Option<PathStats> {
    let (start, end) = clamp_range(editor, start, end)?;
    let range = &editor.events[start..=end];

    let total_distance: f64 = range
        .windows(2)
        .map(|pair| point_of(&pair[0]).distance(&point_of(&pair[1])))
        .sum();
    let total_time: f64 = range.iter().map(Event::timestamp).sum();
    let (start_x, start_y) = range[0].position().unwrap_or((0, 0));
    let (end_x, end_y) = range[range.len() - 1].position().unwrap_or((0, 0));

    Some(PathStats {
        total_moves: range.len(),
        total_distance,
        total_time,
        start_x,
        start_y,
        end_x,
        end_y,
    })
}

/// Scale every delay in the range so they sum to `new_total_time`
pub fn rescale_group_time(
    editor: &mut MacroEditor,
    start: usize,
    end: usize,
    new_total_time: f64,
) -> bool {
    let Some((start, end)) = clamp_range(editor, start, end) else {
        return false;
    };
    let old_total: f64 = editor.events[start..=end].iter().map(Event::timestamp).sum();
    if !(old_total > 0.0) || !(new_total_time >= 0.0) || !new_total_time.is_finite() {
        return false;
    }

    let scale = new_total_time / old_total;
    for event in &mut editor.events[start..=end] {
        event.meta.timestamp = Some(event.timestamp() * scale);
    }
    debug!(start, end, old_total, new_total_time, "path time rescaled");
    editor.mark_unsaved();
    true
}

/// Kept indices (relative to `start`) for a simplifiable move range
fn plan_simplify(
    editor: &MacroEditor,
    start: usize,
    end: usize,
    tolerance: f64,
) -> Option<(usize, usize, Vec<usize>)> {
    let (start, end) = clamp_range(editor, start, end)?;
    let range = &editor.events[start..=end];
    if range.len() <= 2 || !range.iter().all(Event::is_cursor_move) {
        return None;
    }
    let points: Vec<Point> = range.iter().map(point_of).collect();
    let kept = rdp_keep_indices(&points, tolerance);
    (kept.len() < range.len()).then_some((start, end, kept))
}

/// Simplify the move path in `events[start..=end]` and return how many
/// events were removed.
///
/// Only ranges made entirely of cursor moves are touched. The total delay
/// of the range is preserved and spread over the surviving points by arc
/// length.
pub fn simplify_path(editor: &mut MacroEditor, start: usize, end: usize, tolerance: f64) -> usize {
    let Some((start, end, kept)) = plan_simplify(editor, start, end, tolerance) else {
        return 0;
    };

    let range = &editor.events[start..=end];
    let points: Vec<Point> = range.iter().map(point_of).collect();
    let timestamps: Vec<f64> = range.iter().map(Event::timestamp).collect();
    let delays = redistribute_timestamps(&points, &timestamps, &kept);

    let mut keep = vec![false; range.len()];
    for (&k, delay) in kept.iter().zip(delays) {
        keep[k] = true;
        editor.events[start + k].meta.timestamp = Some(delay);
    }

    let before = editor.events.len();
    let mut position = 0;
    editor.events.retain(|_| {
        let i = position;
        position += 1;
        i < start || i > end || keep[i - start]
    });
    let removed = before - editor.events.len();

    info!(start, end, tolerance, removed, "path simplified");
    editor.mark_unsaved();
    removed
}

/// How many events `simplify_path` would keep in the range; the whole range
/// length when it would do nothing
pub fn preview_simplify(editor: &MacroEditor, start: usize, end: usize, tolerance: f64) -> usize {
    match plan_simplify(editor, start, end, tolerance) {
        Some((_, _, kept)) => kept.len(),
        None => clamp_range(editor, start, end).map_or(0, |(s, e)| e - s + 1),
    }
}
