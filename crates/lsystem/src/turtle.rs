//! Turtle interpretation of L-system strings.
//!
//! The interpreter walks a symbol string with a `{position, heading}`
//! cursor and a plain stack for branch save/restore, emitting line
//! segments in traversal order. Malformed input is tolerated: `]` on an
//! empty stack is a no-op and unknown symbols are skipped.
//!
//! Command set:
//!
//! | symbol    | effect                                        |
//! |-----------|-----------------------------------------------|
//! | `F`, `G`  | advance one step, emitting a segment          |
//! | `f`, `g`  | advance one step silently                     |
//! | `+`       | turn right (heading decreases by the angle)   |
//! | `-`       | turn left (heading increases by the angle)    |
//! | `[` / `]` | push / pop the position-heading state         |
//! | `\|`      | reverse heading by π                          |
//!
//! The `+`/`-` sign convention is load-bearing: generated fractals only
//! match their expected shapes if `+` subtracts the increment.

use glam::DVec2;
use std::f64::consts::PI;

/// A drawn line segment: an ordered pair of 2D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: DVec2,
    pub end: DVec2,
}

impl LineSegment {
    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Stateless turtle interpreter parameterized by step length, turn angle,
/// and initial heading.
///
/// Interpretation itself carries no state across calls; the cursor and
/// stack live on the call's own frame.
#[derive(Debug, Clone, Copy)]
pub struct Turtle {
    step: f64,
    angle_increment: f64,
    initial_heading: f64,
}

impl Turtle {
    /// Creates an interpreter with the given step length and turn angle in
    /// degrees. The initial heading points up (π/2).
    pub fn new(step: f64, angle_degrees: f64) -> Self {
        Self {
            step,
            angle_increment: angle_degrees.to_radians(),
            initial_heading: PI / 2.0,
        }
    }

    /// Sets the initial heading in radians (0 = +x, π/2 = +y).
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.initial_heading = heading;
        self
    }

    /// Step length per `F`/`G`/`f`/`g`.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Turn angle in radians per `+`/`-`.
    pub fn angle_increment(&self) -> f64 {
        self.angle_increment
    }

    /// Interprets a symbol string into line segments in traversal order.
    ///
    /// Output is neither sorted nor deduplicated; retraced lines appear
    /// once per traversal.
    pub fn interpret(&self, symbols: &str) -> Vec<LineSegment> {
        let mut segments = Vec::new();
        let mut position = DVec2::ZERO;
        let mut heading = self.initial_heading;
        let mut stack: Vec<(DVec2, f64)> = Vec::new();

        for symbol in symbols.chars() {
            match symbol {
                'F' | 'G' => {
                    let next = position + direction(heading) * self.step;
                    segments.push(LineSegment {
                        start: position,
                        end: next,
                    });
                    position = next;
                }
                'f' | 'g' => {
                    position += direction(heading) * self.step;
                }
                '+' => heading -= self.angle_increment,
                '-' => heading += self.angle_increment,
                '|' => heading += PI,
                '[' => stack.push((position, heading)),
                ']' => {
                    // Pop-or-no-op: unmatched ] is tolerated.
                    if let Some((saved_position, saved_heading)) = stack.pop() {
                        position = saved_position;
                        heading = saved_heading;
                    }
                }
                _ => {}
            }
        }

        segments
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new(1.0, 90.0)
    }
}

/// Unit vector for a heading in radians.
#[inline]
fn direction(heading: f64) -> DVec2 {
    DVec2::new(heading.cos(), heading.sin())
}

// ---------------------------------------------------------------------------
// Pure post-processing over emitted line lists
// ---------------------------------------------------------------------------

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Creates bounds from opposite corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Axis-aligned bounding box of a line list, or `None` for an empty list.
pub fn bounding_box(segments: &[LineSegment]) -> Option<Bounds> {
    let first = segments.first()?;
    let mut min = first.start.min(first.end);
    let mut max = first.start.max(first.end);
    for segment in &segments[1..] {
        min = min.min(segment.start).min(segment.end);
        max = max.max(segment.start).max(segment.end);
    }
    Some(Bounds { min, max })
}

/// Rescales a line list to fit `target`, preserving aspect ratio.
///
/// The list is uniformly scaled by the tighter axis and centered in the
/// target. Degenerate source extents (a single point, or all segments
/// collinear on one axis) translate without scaling on the flat axis; an
/// empty list yields an empty list.
pub fn fit_to_bounds(segments: &[LineSegment], target: Bounds) -> Vec<LineSegment> {
    let Some(source) = bounding_box(segments) else {
        return Vec::new();
    };

    let sw = source.width();
    let sh = source.height();
    let scale = match (sw > 0.0, sh > 0.0) {
        (true, true) => (target.width() / sw).min(target.height() / sh),
        (true, false) => target.width() / sw,
        (false, true) => target.height() / sh,
        (false, false) => 1.0,
    };

    let source_center = source.center();
    let target_center = target.center();
    let remap = |p: DVec2| target_center + (p - source_center) * scale;

    segments
        .iter()
        .map(|segment| LineSegment {
            start: remap(segment.start),
            end: remap(segment.end),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!(
            (a - b).length() < EPS,
            "points differ: ({}, {}) vs ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    // ---- Forward motion ----

    #[test]
    fn single_forward_emits_one_segment_of_step_length() {
        let turtle = Turtle::new(10.0, 90.0);
        let segments = turtle.interpret("F");
        assert_eq!(segments.len(), 1);
        assert_close(segments[0].start, DVec2::ZERO);
        assert!((segments[0].length() - 10.0).abs() < EPS);
    }

    #[test]
    fn forward_length_holds_for_any_heading() {
        for i in 0..36 {
            let heading = i as f64 * 10.0_f64.to_radians();
            let turtle = Turtle::new(10.0, 90.0).with_heading(heading);
            let segments = turtle.interpret("F");
            assert_eq!(segments.len(), 1);
            assert_close(segments[0].start, DVec2::ZERO);
            assert!(
                (segments[0].length() - 10.0).abs() < EPS,
                "wrong length at heading {heading}"
            );
        }
    }

    #[test]
    fn default_heading_points_up() {
        let segments = Turtle::default().interpret("F");
        assert_close(segments[0].end, DVec2::new(0.0, 1.0));
    }

    #[test]
    fn g_draws_like_f() {
        let turtle = Turtle::new(2.0, 90.0);
        assert_eq!(turtle.interpret("G").len(), 1);
        assert_eq!(
            turtle.interpret("FG"),
            turtle.interpret("FF"),
            "G should draw exactly like F"
        );
    }

    #[test]
    fn lowercase_moves_without_emitting() {
        let turtle = Turtle::new(1.0, 90.0);
        let segments = turtle.interpret("FfF");
        assert_eq!(segments.len(), 2, "f must not emit a segment");
        // The gap: second segment starts one step beyond the first's end.
        assert_close(segments[1].start, DVec2::new(0.0, 2.0));
        assert_eq!(turtle.interpret("g").len(), 0);
    }

    // ---- Turning ----

    #[test]
    fn plus_turns_right() {
        // Heading starts up; `+` subtracts the increment, so F+F bends
        // toward +x (east).
        let turtle = Turtle::new(1.0, 90.0);
        let segments = turtle.interpret("F+F");
        assert_close(segments[1].end - segments[1].start, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn minus_turns_left() {
        let turtle = Turtle::new(1.0, 90.0);
        let segments = turtle.interpret("F-F");
        assert_close(segments[1].end - segments[1].start, DVec2::new(-1.0, 0.0));
    }

    #[test]
    fn plus_minus_cancel() {
        let turtle = Turtle::new(1.0, 30.0);
        let segments = turtle.interpret("F+-F");
        let d0 = segments[0].end - segments[0].start;
        let d1 = segments[1].end - segments[1].start;
        assert_close(d0, d1);
    }

    #[test]
    fn bar_reverses_heading() {
        let turtle = Turtle::new(1.0, 90.0);
        let segments = turtle.interpret("F|F");
        // Second segment retraces the first in the opposite direction.
        assert_close(segments[1].start, segments[0].end);
        assert_close(segments[1].end, segments[0].start);
    }

    #[test]
    fn four_right_turns_close_a_square() {
        let turtle = Turtle::new(5.0, 90.0);
        let segments = turtle.interpret("F+F+F+F");
        assert_eq!(segments.len(), 4);
        assert_close(segments[3].end, DVec2::ZERO);
    }

    // ---- Branching ----

    #[test]
    fn bracketed_branch_does_not_affect_later_heading() {
        let turtle = Turtle::new(1.0, 90.0);
        let segments = turtle.interpret("F[+F]F");
        assert_eq!(segments.len(), 3);
        let trunk = segments[0].end - segments[0].start;
        let after_branch = segments[2].end - segments[2].start;
        assert_close(trunk, after_branch);
        // The branch segment itself went sideways.
        let branch = segments[1].end - segments[1].start;
        assert!((trunk - branch).length() > 0.5);
    }

    #[test]
    fn pop_restores_position_as_well_as_heading() {
        let turtle = Turtle::new(1.0, 90.0);
        let segments = turtle.interpret("F[+FF]F");
        assert_close(segments[3].start, segments[0].end);
    }

    #[test]
    fn nested_branches_restore_in_lifo_order() {
        let turtle = Turtle::new(1.0, 45.0);
        let segments = turtle.interpret("F[+F[-F]F]F");
        // Outer pop must land back at the trunk top.
        assert_close(segments[4].start, segments[0].end);
        let trunk = segments[0].end - segments[0].start;
        let last = segments[4].end - segments[4].start;
        assert_close(trunk, last);
    }

    #[test]
    fn unmatched_pop_is_a_no_op() {
        let turtle = Turtle::new(1.0, 90.0);
        let balanced = turtle.interpret("FF");
        let unmatched = turtle.interpret("]F]]F]");
        assert_eq!(balanced.len(), unmatched.len());
        for (a, b) in balanced.iter().zip(unmatched.iter()) {
            assert_close(a.start, b.start);
            assert_close(a.end, b.end);
        }
    }

    #[test]
    fn unknown_symbols_are_ignored() {
        let turtle = Turtle::new(1.0, 90.0);
        let plain = turtle.interpret("FF");
        let noisy = turtle.interpret("FXQ9 ?F");
        assert_eq!(plain.len(), noisy.len());
        for (a, b) in plain.iter().zip(noisy.iter()) {
            assert_close(a.end, b.end);
        }
    }

    #[test]
    fn empty_string_emits_nothing() {
        assert!(Turtle::default().interpret("").is_empty());
    }

    // ---- Bounding box ----

    #[test]
    fn bounding_box_of_empty_list_is_none() {
        assert!(bounding_box(&[]).is_none());
    }

    #[test]
    fn bounding_box_covers_all_endpoints() {
        let segments = vec![
            LineSegment {
                start: DVec2::new(-1.0, 2.0),
                end: DVec2::new(3.0, -4.0),
            },
            LineSegment {
                start: DVec2::new(0.5, 7.0),
                end: DVec2::new(0.0, 0.0),
            },
        ];
        let bounds = bounding_box(&segments).unwrap();
        assert_close(bounds.min, DVec2::new(-1.0, -4.0));
        assert_close(bounds.max, DVec2::new(3.0, 7.0));
        assert!((bounds.width() - 4.0).abs() < EPS);
        assert!((bounds.height() - 11.0).abs() < EPS);
    }

    #[test]
    fn bounding_box_of_square_walk_is_unit_cell() {
        let segments = Turtle::new(1.0, 90.0).interpret("F+F+F+F");
        let bounds = bounding_box(&segments).unwrap();
        assert!((bounds.width() - 1.0).abs() < EPS);
        assert!((bounds.height() - 1.0).abs() < EPS);
    }

    // ---- Rescale ----

    #[test]
    fn fit_to_bounds_of_empty_list_is_empty() {
        let target = Bounds::new(DVec2::ZERO, DVec2::new(10.0, 10.0));
        assert!(fit_to_bounds(&[], target).is_empty());
    }

    #[test]
    fn fit_to_bounds_scales_into_target() {
        let segments = Turtle::new(1.0, 90.0).interpret("F+F+F+F");
        let target = Bounds::new(DVec2::new(0.0, 0.0), DVec2::new(100.0, 50.0));
        let fitted = fit_to_bounds(&segments, target);
        let bounds = bounding_box(&fitted).unwrap();
        // Uniform scaling: the tighter axis (height 50) wins.
        assert!((bounds.width() - 50.0).abs() < EPS);
        assert!((bounds.height() - 50.0).abs() < EPS);
        assert!(bounds.min.x >= target.min.x - EPS && bounds.max.x <= target.max.x + EPS);
        assert!(bounds.min.y >= target.min.y - EPS && bounds.max.y <= target.max.y + EPS);
    }

    #[test]
    fn fit_to_bounds_centers_the_result() {
        let segments = Turtle::new(2.0, 90.0).interpret("F");
        let target = Bounds::new(DVec2::new(-10.0, -10.0), DVec2::new(10.0, 10.0));
        let fitted = fit_to_bounds(&segments, target);
        let bounds = bounding_box(&fitted).unwrap();
        assert_close(bounds.center(), target.center());
    }

    #[test]
    fn fit_to_bounds_preserves_segment_count_and_connectivity() {
        let segments = Turtle::new(1.0, 25.0).interpret("F[+F][-F]F");
        let target = Bounds::new(DVec2::ZERO, DVec2::new(64.0, 64.0));
        let fitted = fit_to_bounds(&segments, target);
        assert_eq!(fitted.len(), segments.len());
        // Connectivity: segment 0's end still meets segment 3's start
        // (trunk continues after both branches pop).
        assert_close(fitted[3].start, fitted[0].end);
    }

    #[test]
    fn fit_to_bounds_handles_degenerate_extent() {
        // A single horizontal line has zero height; only x scales.
        let segments = vec![LineSegment {
            start: DVec2::new(0.0, 3.0),
            end: DVec2::new(2.0, 3.0),
        }];
        let target = Bounds::new(DVec2::ZERO, DVec2::new(10.0, 10.0));
        let fitted = fit_to_bounds(&segments, target);
        let bounds = bounding_box(&fitted).unwrap();
        assert!((bounds.width() - 10.0).abs() < EPS);
        assert!(bounds.height().abs() < EPS);
        assert_close(bounds.center(), target.center());
    }

    // ---- Property-based tests ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn segment_count_equals_draw_commands(
                symbols in "[FGfg+\\-\\[\\]|]{0,64}",
            ) {
                let draws = symbols.chars().filter(|c| matches!(c, 'F' | 'G')).count();
                let segments = Turtle::new(1.0, 60.0).interpret(&symbols);
                prop_assert_eq!(segments.len(), draws);
            }

            #[test]
            fn every_segment_has_step_length(
                symbols in "[FGfg+\\-\\[\\]|]{0,64}",
                step in 0.1_f64..10.0,
            ) {
                let segments = Turtle::new(step, 30.0).interpret(&symbols);
                for segment in &segments {
                    prop_assert!(
                        (segment.length() - step).abs() < 1e-9,
                        "segment length {} != step {}",
                        segment.length(),
                        step
                    );
                }
            }

            #[test]
            fn interpretation_is_deterministic(
                symbols in "[FGfg+\\-\\[\\]|]{0,64}",
            ) {
                let turtle = Turtle::new(1.0, 45.0);
                let a = turtle.interpret(&symbols);
                let b = turtle.interpret(&symbols);
                prop_assert_eq!(a, b);
            }

            #[test]
            fn fitted_output_stays_within_target(
                symbols in "[FG+\\-\\[\\]]{1,32}",
            ) {
                let segments = Turtle::new(1.0, 72.0).interpret(&symbols);
                prop_assume!(!segments.is_empty());
                let target = Bounds::new(DVec2::new(0.0, 0.0), DVec2::new(100.0, 100.0));
                let bounds = bounding_box(&fit_to_bounds(&segments, target)).unwrap();
                prop_assert!(bounds.min.x >= -1e-6 && bounds.min.y >= -1e-6);
                prop_assert!(bounds.max.x <= 100.0 + 1e-6 && bounds.max.y <= 100.0 + 1e-6);
            }
        }
    }
}
