// Copyright 2019 the Beztrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::Point;

/// A curve parametrized by a scalar.
///
/// The parameter is in the range [0..1], where 0 is the start of the
/// curve and 1 is the end.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve.
    ///
    /// The result is accurate to roughly the given accuracy (subject to
    /// roundoff errors for ridiculously low values). Compute time may
    /// vary with accuracy, if the curve needs to be subdivided. A
    /// non-positive accuracy is substituted with
    /// [`DEFAULT_ACCURACY`](crate::DEFAULT_ACCURACY).
    fn arclen(&self, accuracy: f64) -> f64;
}
