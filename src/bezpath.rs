// Copyright 2019 the Beztrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier paths made of line and cubic segments.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::common::sanitize_accuracy;
use crate::{CubicBez, Line, ParamCurve, ParamCurveArclen, Point, DEFAULT_ACCURACY};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Seed for [`BezPath::fingerprint`]. Fixed and non-zero so that the
/// empty path hashes to a stable, non-trivial value.
const FINGERPRINT_SEED: u64 = 0x811c9dc5;

/// A path of line and cubic Bézier segments, possibly with multiple subpaths.
///
/// A valid path has a `MoveTo` at the beginning of each subpath. The
/// "current point" and the "point for close" are derived state threaded
/// through a left-to-right traversal, not stored per element.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

/// The element of a Bézier path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Start a new subpath at the point, which also becomes the point
    /// a later `ClosePath` returns to.
    MoveTo(Point),
    /// A straight segment from the current point to the point.
    LineTo(Point),
    /// A cubic Bézier segment from the current point through two control
    /// points to the end point.
    CurveTo(Point, Point, Point),
    /// A straight segment from the current point back to the subpath's
    /// most recent `MoveTo` point.
    ClosePath,
}

/// A segment of a Bézier path, with the traversal state resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

impl PathEl {
    /// The points associated with this element, in order.
    ///
    /// `ClosePath` carries no points of its own.
    pub fn points(&self) -> ArrayVec<Point, 3> {
        let mut points = ArrayVec::new();
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(p),
            PathEl::CurveTo(c1, c2, p) => {
                points.push(c1);
                points.push(c2);
                points.push(p);
            }
            PathEl::ClosePath => (),
        }
        points
    }

    /// Ordinal used by [`BezPath::fingerprint`]. Matches the element-type
    /// ordering of common platform path types.
    fn tag(&self) -> u64 {
        match *self {
            PathEl::MoveTo(_) => 0,
            PathEl::LineTo(_) => 1,
            PathEl::CurveTo(..) => 2,
            PathEl::ClosePath => 3,
        }
    }
}

impl BezPath {
    /// Create a new, empty path.
    pub fn new() -> BezPath {
        BezPath::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "curve to" element onto the path.
    pub fn curve_to<P: Into<Point>>(&mut self, c1: P, c2: P, p: P) {
        self.push(PathEl::CurveTo(c1.into(), c2.into(), p.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the path segments.
    ///
    /// `MoveTo` elements produce no segment; a `ClosePath` whose current
    /// point already sits on the subpath start produces no segment either.
    pub fn segments(&self) -> impl Iterator<Item = PathSeg> + '_ {
        BezPathSegs {
            c: self.0.iter(),
            start: Point::ZERO,
            last: Point::ZERO,
        }
    }

    /// The total arc length of the path.
    ///
    /// `MoveTo` elements contribute nothing; lines and closes contribute
    /// their Euclidean length; curves are estimated to within `accuracy`
    /// per segment.
    pub fn arclen(&self, accuracy: f64) -> f64 {
        let accuracy = sanitize_accuracy(accuracy);
        self.segments().map(|seg| seg.arclen(accuracy)).sum()
    }

    /// The total arc length at the default tolerance.
    ///
    /// Shorthand for `self.arclen(DEFAULT_ACCURACY)`.
    pub fn length(&self) -> f64 {
        self.arclen(DEFAULT_ACCURACY)
    }

    /// The path with `trim_len` of arc length removed from its start.
    ///
    /// Returns a newly constructed path: segments entirely before the cut
    /// point are dropped, the segment containing the cut point is split
    /// there (opening with a `MoveTo` at the cut), and everything past it
    /// is kept as is. A non-positive `trim_len` returns the path
    /// unchanged; a `trim_len` at or beyond the total length returns an
    /// empty path, meaning nothing remains.
    ///
    /// A `ClosePath` the cut falls inside is re-expressed as a
    /// `MoveTo`/`LineTo` pair, since the result is an open path.
    pub fn trim_from_start(&self, trim_len: f64, accuracy: f64) -> BezPath {
        if trim_len <= 0.0 {
            return self.clone();
        }
        let accuracy = sanitize_accuracy(accuracy);
        let mut out = BezPath::new();
        // Arc length accumulated before the current element.
        let mut pos = 0.0;
        let mut last = Point::ZERO;
        let mut start = Point::ZERO;
        for el in &self.0 {
            match *el {
                PathEl::MoveTo(p) => {
                    // An exact boundary does not re-emit a spurious move;
                    // the split of the crossing segment supplies one.
                    if pos > trim_len {
                        out.move_to(p);
                    }
                    start = p;
                    last = p;
                }
                PathEl::LineTo(p) => {
                    pos += trim_line_seg(&mut out, last, p, pos, trim_len, false);
                    last = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    let c = CubicBez::new(last, c1, c2, p);
                    let seg_len = c.arclen(accuracy);
                    if pos > trim_len {
                        out.curve_to(c1, c2, p);
                    } else if pos + seg_len > trim_len {
                        let (_, right, _) = c.split_at_arclen(trim_len - pos, accuracy);
                        out.move_to(right.p0);
                        out.curve_to(right.p1, right.p2, right.p3);
                    }
                    pos += seg_len;
                    last = p;
                }
                PathEl::ClosePath => {
                    pos += trim_line_seg(&mut out, last, start, pos, trim_len, true);
                    last = start;
                }
            }
        }
        out
    }

    /// An order- and content-sensitive hash of the path.
    ///
    /// Two paths with identical element sequences and coordinates (under
    /// integer rounding of the coordinates) always produce the same
    /// fingerprint, so a caller holding derived data keyed by this value
    /// can detect that the path has mutated and invalidate its cache.
    /// This is not a cryptographic hash; collisions are possible but rare
    /// for typical path sizes.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FINGERPRINT_SEED;
        hash = hash.wrapping_add((self.0.len() as u64) << 5);
        for el in &self.0 {
            let points = el.points();
            let mut coords: u64 = 0;
            // Points the element does not carry contribute as zero.
            for i in 0..3 {
                let p = points.get(i).copied().unwrap_or(Point::ZERO);
                coords = coords
                    .wrapping_mul(31)
                    .wrapping_add(rounded_coord(p.x))
                    .wrapping_mul(31)
                    .wrapping_add(rounded_coord(p.y));
            }
            hash = hash.rotate_left(9) ^ ((el.tag() << 10) ^ coords);
        }
        hash
    }

    /// The direction of the path's initial segment, in radians.
    ///
    /// This is the angle from the first element's first point to the
    /// second element's first point, as consumed by callers aligning
    /// glyphs to the path's initial tangent. A path with fewer than two
    /// elements, or whose second element carries no point, has slope 0.
    pub fn start_slope(&self) -> f64 {
        let (first, second) = match (self.0.first(), self.0.get(1)) {
            (Some(first), Some(second)) => (first, second),
            _ => return 0.0,
        };
        match (first.points().first(), second.points().first()) {
            (Some(&p0), Some(&p1)) => (p1 - p0).atan2(),
            _ => 0.0,
        }
    }
}

/// Account for a line-like segment (a `LineTo`, or a `ClosePath` treated
/// as a synthetic line back to the subpath start) while trimming,
/// emitting whatever of it survives the cut. Returns the segment length.
fn trim_line_seg(
    out: &mut BezPath,
    last: Point,
    p: Point,
    pos: f64,
    trim_len: f64,
    close: bool,
) -> f64 {
    let seg_len = last.distance(p);
    if pos > trim_len {
        if close {
            out.close_path();
        } else {
            out.line_to(p);
        }
    } else if pos + seg_len > trim_len {
        let f = (trim_len - pos) / seg_len;
        out.move_to(last.lerp(p, f));
        out.line_to(p);
    }
    seg_len
}

#[inline]
fn rounded_coord(v: f64) -> u64 {
    v.round() as i64 as u64
}

impl<'a> IntoIterator for &'a BezPath {
    type Item = PathEl;
    type IntoIter = core::iter::Cloned<core::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().cloned()
    }
}

struct BezPathSegs<'a> {
    c: core::slice::Iter<'a, PathEl>,
    start: Point,
    last: Point,
}

impl Iterator for BezPathSegs<'_> {
    type Item = PathSeg;

    fn next(&mut self) -> Option<PathSeg> {
        for el in &mut self.c {
            let (ret, last) = match *el {
                PathEl::MoveTo(p) => {
                    self.start = p;
                    self.last = p;
                    continue;
                }
                PathEl::LineTo(p) => (PathSeg::Line(Line::new(self.last, p)), p),
                PathEl::CurveTo(c1, c2, p) => {
                    (PathSeg::Cubic(CubicBez::new(self.last, c1, c2, p)), p)
                }
                PathEl::ClosePath => {
                    if self.last != self.start {
                        (PathSeg::Line(Line::new(self.last, self.start)), self.start)
                    } else {
                        continue;
                    }
                }
            };

            self.last = last;
            return Some(ret);
        }
        None
    }
}

impl ParamCurve for PathSeg {
    fn eval(&self, t: f64) -> Point {
        match *self {
            PathSeg::Line(line) => line.eval(t),
            PathSeg::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn start(&self) -> Point {
        match *self {
            PathSeg::Line(line) => line.start(),
            PathSeg::Cubic(cubic) => cubic.start(),
        }
    }

    fn end(&self) -> Point {
        match *self {
            PathSeg::Line(line) => line.end(),
            PathSeg::Cubic(cubic) => cubic.end(),
        }
    }
}

impl ParamCurveArclen for PathSeg {
    fn arclen(&self, accuracy: f64) -> f64 {
        match *self {
            PathSeg::Line(line) => line.arclen(accuracy),
            PathSeg::Cubic(cubic) => cubic.arclen(accuracy),
        }
    }
}
