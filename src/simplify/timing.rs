//! Delay redistribution after point removal
//!
//! Dropping vertices from a path must not change how long the path takes to
//! replay, so the original total delay is spread over the surviving vertices
//! in proportion to the arc length each one now covers.

use super::Point;

/// Running arc length along `points`, starting at 0
pub fn cumulative_distances(points: &[Point]) -> Vec<f64> {
    let mut cum = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance(p);
        }
        cum.push(total);
    }
    cum
}

/// New delays for the `kept` vertices (ascending indices into `points`).
///
/// The first kept vertex keeps the original first delay verbatim. Every later
/// one receives `total_time * arc_length_since_previous_kept / total_length`,
/// where `total_time` is the sum of all original delays. A path whose points
/// all coincide splits the time evenly between the kept segments.
pub fn redistribute_timestamps(points: &[Point], timestamps: &[f64], kept: &[usize]) -> Vec<f64> {
    let cum = cumulative_distances(points);
    let total_dist = cum.last().copied().unwrap_or(0.0);
    let total_time: f64 = timestamps.iter().sum();
    let first_delay = timestamps.first().copied().unwrap_or(0.0);
    let segments = kept.len().saturating_sub(1).max(1) as f64;

    kept.iter()
        .enumerate()
        .map(|(j, &idx)| {
            if j == 0 {
                return first_delay;
            }
            let prev = kept[j - 1];
            let fraction = if total_dist > 0.0 {
                (cum[idx] - cum[prev]) / total_dist
            } else {
                1.0 / segments
            };
            total_time * fraction
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_cumulative_distances() {
        let cum = cumulative_distances(&pts(&[(0, 0), (3, 4), (3, 10)]));
        assert_eq!(cum, vec![0.0, 5.0, 11.0]);
        assert!(cumulative_distances(&[]).is_empty());
    }

    #[test]
    fn test_first_kept_point_keeps_original_delay() {
        let points = pts(&[(0, 0), (5, 0), (10, 0)]);
        let delays = redistribute_timestamps(&points, &[0.5, 0.25, 0.25], &[0, 2]);
        assert_eq!(delays, vec![0.5, 1.0]);
    }

    #[test]
    fn test_time_split_by_arc_length() {
        let points = pts(&[(0, 0), (10, 0), (20, 0), (40, 0)]);
        let delays = redistribute_timestamps(&points, &[0.0, 0.2, 0.2, 0.4], &[0, 2, 3]);
        assert_eq!(delays[0], 0.0);
        assert!((delays[1] - 0.4).abs() < 1e-12);
        assert!((delays[2] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_points_split_evenly() {
        let points = pts(&[(7, 7), (7, 7), (7, 7), (7, 7)]);
        let delays = redistribute_timestamps(&points, &[0.1, 0.1, 0.1, 0.1], &[0, 3]);
        assert_eq!(delays[0], 0.1);
        assert!((delays[1] - 0.4).abs() < 1e-12);
    }
}
