// Copyright 2019 the Beztrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::common::sanitize_accuracy;
use crate::{ParamCurve, ParamCurveArclen, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Maximum depth of the adaptive subdivision in [`CubicBez::arclen`].
///
/// Flat but numerically noisy curves can keep the control-polygon excess
/// just above the tolerance forever; past this depth the midpoint formula
/// is used directly.
const MAX_ARCLEN_DEPTH: usize = 16;

/// Maximum number of bisection steps in [`CubicBez::split_at_arclen`].
///
/// An f64 parameter bisected from [0..1] stagnates after at most ~60
/// halvings, so this is a backstop rather than the usual exit.
const MAX_BISECT_ITER: usize = 64;

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start anchor point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end anchor point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Length of the chord from the start anchor to the end anchor.
    ///
    /// This lower-bounds the true arc length.
    #[inline]
    fn chord_len(&self) -> f64 {
        self.p0.distance(self.p3)
    }

    /// Length of the control polygon through all four points.
    ///
    /// This upper-bounds the true arc length.
    #[inline]
    fn control_polygon_len(&self) -> f64 {
        self.p0.distance(self.p1) + self.p1.distance(self.p2) + self.p2.distance(self.p3)
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    pub fn subdivide(&self) -> (CubicBez, CubicBez) {
        self.split(0.5)
    }

    /// Split the curve at parameter `t`, using de Casteljau.
    ///
    /// The two sub-curves concatenate to exactly the original geometry:
    /// the left curve starts at `self.p0`, the right curve ends at
    /// `self.p3`, and they share the curve point at `t`.
    pub fn split(&self, t: f64) -> (CubicBez, CubicBez) {
        let q = self.p1.lerp(self.p2, t);
        let left_p1 = self.p0.lerp(self.p1, t);
        let right_p2 = self.p2.lerp(self.p3, t);
        let left_p2 = left_p1.lerp(q, t);
        let right_p1 = q.lerp(right_p2, t);
        let mid = left_p2.lerp(right_p1, t);
        (
            CubicBez::new(self.p0, left_p1, left_p2, mid),
            CubicBez::new(mid, right_p1, right_p2, self.p3),
        )
    }

    /// Split the curve at the point `arclen` along it from the start.
    ///
    /// Bisection search over the split parameter: the left portion's arc
    /// length converges on `arclen` to within `accuracy`. Returns the two
    /// sub-curves and the measured arc length of the left one.
    ///
    /// When floating-point stagnation stops the parameter from moving
    /// before the tolerance is met, the best split seen so far is
    /// returned; that is an accepted approximation, not a failure. For a
    /// degenerate (zero-length) curve any split point is equally valid.
    pub fn split_at_arclen(&self, arclen: f64, accuracy: f64) -> (CubicBez, CubicBez, f64) {
        let accuracy = sanitize_accuracy(accuracy);
        let mut low = 0.0;
        let mut high = 1.0;
        let mut t = 0.5;

        let (mut left, mut right) = self.split(t);
        let mut left_len = left.arclen(accuracy);
        let mut best = (left, right, left_len);
        let mut best_gap = (arclen - left_len).abs();

        for _ in 0..MAX_BISECT_ITER {
            let gap = arclen - left_len;
            if gap.abs() < accuracy {
                return (left, right, left_len);
            }
            if gap.abs() < best_gap {
                best = (left, right, left_len);
                best_gap = gap.abs();
            }
            // Arc length grows monotonically with t, so narrow towards
            // the side the estimate fell short on.
            let next = if gap > 0.0 {
                low = t;
                0.5 * (t + high)
            } else {
                high = t;
                0.5 * (low + t)
            };
            if next == t {
                break;
            }
            t = next;
            let halves = self.split(t);
            left = halves.0;
            right = halves.1;
            left_len = left.arclen(accuracy);
        }
        best
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveArclen for CubicBez {
    /// Arc length of a cubic Bézier segment.
    ///
    /// Adaptive subdivision: the gap between the control-polygon length
    /// and the chord length bounds the estimate's error, so the curve is
    /// halved until the gap is within `accuracy`, then the average of the
    /// two bounds is taken. A straight segment has zero gap and returns
    /// immediately.
    fn arclen(&self, accuracy: f64) -> f64 {
        fn rec(c: &CubicBez, accuracy: f64, depth: usize) -> f64 {
            let chord = c.chord_len();
            let poly = c.control_polygon_len();
            if poly - chord <= accuracy || depth == MAX_ARCLEN_DEPTH {
                (poly + chord) * 0.5
            } else {
                let (c0, c1) = c.subdivide();
                rec(&c0, accuracy, depth + 1) + rec(&c1, accuracy, depth + 1)
            }
        }
        rec(self, sanitize_accuracy(accuracy), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_ACCURACY;

    // A symmetric arch; the speed simplifies to 300 * (1 + (2t-1)^2) / 2,
    // which integrates to an arc length of exactly 200.
    fn reference_curve() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0))
    }

    // y = x^2, with a closed-form arc length.
    fn parabola() -> (CubicBez, f64) {
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let true_arclen = 0.5 * 5.0_f64.sqrt() + 0.25 * (2.0 + 5.0_f64.sqrt()).ln();
        (c, true_arclen)
    }

    #[test]
    fn cubicbez_arclen_reference() {
        let c = reference_curve();
        let len = c.arclen(0.1);
        assert!(len > c.p0.distance(c.p3), "estimate below chord: {len}");
        assert!(len < 300.0, "estimate above control polygon: {len}");
        assert!((len - 200.0).abs() < 0.5, "got {len}");
    }

    #[test]
    fn cubicbez_arclen_known_value() {
        let (c, true_arclen) = parabola();
        let len = c.arclen(1e-6);
        assert!((len - true_arclen).abs() < 1e-3, "got {len} want {true_arclen}");
    }

    #[test]
    fn cubicbez_arclen_converges() {
        let (c, _) = parabola();
        let mut accuracy = 0.1;
        let mut prev = c.arclen(accuracy);
        for _ in 0..6 {
            accuracy *= 0.5;
            let len = c.arclen(accuracy);
            assert!(
                (len - prev).abs() < accuracy * 4.0,
                "estimates diverge: {prev} vs {len} at {accuracy}"
            );
            prev = len;
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn cubicbez_arclen_degenerate() {
        let p = Point::new(5.0, 5.0);
        let c = CubicBez::new(p, p, p, p);
        assert_eq!(c.arclen(0.1), 0.0);

        let line = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        assert_eq!(line.arclen(1e-12), 3.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn cubicbez_arclen_bad_accuracy() {
        let c = reference_curve();
        assert_eq!(c.arclen(-1.0), c.arclen(DEFAULT_ACCURACY));
        assert_eq!(c.arclen(0.0), c.arclen(DEFAULT_ACCURACY));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn cubicbez_subdivide_endpoints() {
        let c = reference_curve();
        let (left, right) = c.subdivide();
        assert_eq!(left.p0, c.p0);
        assert_eq!(right.p3, c.p3);
        assert_eq!(left.p3, right.p0);
    }

    #[test]
    fn cubicbez_split_matches_eval() {
        let c = CubicBez::new((0.0, 0.0), (30.0, 90.0), (80.0, -20.0), (100.0, 50.0));
        for i in 1..10 {
            let t = (i as f64) / 10.0;
            let (left, right) = c.split(t);
            let mid = c.eval(t);
            assert!((left.p3 - mid).hypot() < 1e-9, "split point off at t={t}");
            assert!((right.p0 - mid).hypot() < 1e-9);
            // The halves together cover the original curve.
            assert!((left.eval(0.5) - c.eval(t * 0.5)).hypot() < 1e-9);
            assert!((right.eval(0.5) - c.eval(t + (1.0 - t) * 0.5)).hypot() < 1e-9);
        }
    }

    #[test]
    fn cubicbez_split_at_arclen() {
        let c = reference_curve();
        let accuracy = 1e-3;
        let total = c.arclen(accuracy);
        for i in 0..=10 {
            let target = total * (i as f64) / 10.0;
            let (left, right, left_len) = c.split_at_arclen(target, accuracy);
            assert!(
                (left_len - target).abs() < accuracy,
                "wanted {target} got {left_len}"
            );
            let sum = left.arclen(accuracy) + right.arclen(accuracy);
            assert!((sum - total).abs() < 0.05, "halves sum to {sum}");
        }
    }

    #[test]
    fn cubicbez_split_at_arclen_degenerate() {
        let p = Point::new(1.0, 2.0);
        let c = CubicBez::new(p, p, p, p);
        let (left, _right, left_len) = c.split_at_arclen(0.0, 0.1);
        assert_eq!(left_len, 0.0, "zero-length curve has zero-length splits");
        assert_eq!(left.p0, p);
    }
}
