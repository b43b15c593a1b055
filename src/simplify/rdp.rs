//! Ramer-Douglas-Peucker point selection
//!
//! Works on index ranges into the caller's slice instead of copying
//! sub-paths, and walks them with an explicit work list so very long
//! recordings cannot exhaust the stack.

use tracing::trace;

use super::Point;

/// Distance from `p` to the segment `a -> b`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to that endpoint. A zero-length segment measures to `a`.
pub fn segment_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Interior point of `points[first..=last]` farthest from the chord.
/// Ties keep the earliest point.
fn farthest_point(points: &[Point], first: usize, last: usize) -> (usize, f64) {
    let (a, b) = (&points[first], &points[last]);
    let mut max_dist = 0.0;
    let mut max_idx = first;
    for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
        let dist = segment_distance(p, a, b);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }
    (max_idx, max_dist)
}

/// Indices of `points` to keep, ascending.
///
/// Paths of two or fewer points are returned whole. The first and last point
/// are always kept. Negative or NaN tolerance behaves like 0.
pub fn rdp_keep_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }
    let tolerance = if tolerance.is_nan() { 0.0 } else { tolerance.max(0.0) };

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0, n - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last - first < 2 {
            continue;
        }
        let (pivot, dist) = farthest_point(points, first, last);
        if dist > tolerance {
            trace!(first, last, pivot, dist, "rdp split");
            keep[pivot] = true;
            ranges.push((first, pivot));
            ranges.push((pivot, last));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &kept)| kept.then_some(i))
        .collect()
}
