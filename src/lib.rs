// Copyright 2019 the Beztrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length geometry for cubic Bézier paths.
//!
//! This crate measures and manipulates vector paths built from line and
//! cubic Bézier segments. It answers three questions a path consumer
//! (such as a text-on-path layout engine) needs: how long is this path,
//! where along a segment does a given arc length fall, and what does the
//! path look like with a given arc length removed from its start.
//!
//! All operations are pure functions over immutable inputs: nothing here
//! mutates a path in place, and every transform returns a newly owned
//! path. Accuracy of the arc-length estimates is controlled by a
//! tolerance parameter in path coordinate units, defaulting to
//! [`DEFAULT_ACCURACY`].
//!
//! # Examples
//!
//! Measuring and trimming a path:
//! ```
//! use beztrim::BezPath;
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//! path.line_to((10.0, 10.0));
//! assert_eq!(path.length(), 20.0);
//!
//! let trimmed = path.trim_from_start(5.0, 0.1);
//! assert_eq!(trimmed.length(), 15.0);
//! ```
//!
//! Locating the split point of a curve at a target arc length:
//! ```
//! use beztrim::{CubicBez, ParamCurveArclen};
//!
//! let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
//! let total = c.arclen(0.1);
//! let (left, _right, left_len) = c.split_at_arclen(total * 0.5, 0.1);
//! assert!((left.arclen(0.1) - left_len).abs() < 0.1);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can
//! be disabled, as long as the `libm` feature is enabled. This is useful
//! for `no_std` environments. Note that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("beztrim requires either the `std` or `libm` feature");

extern crate alloc;

mod bezpath;
pub mod common;
mod cubicbez;
mod line;
mod param_curve;
mod point;
mod vec2;

pub use crate::bezpath::*;
pub use crate::cubicbez::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::vec2::*;

/// The default arc-length tolerance, in path coordinate units.
///
/// All length-dependent operations accept an explicit tolerance so that
/// their results are mutually consistent; this is the value used when a
/// caller does not have a better one.
pub const DEFAULT_ACCURACY: f64 = 0.1;
