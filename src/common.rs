// Copyright 2019 the Beztrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use crate::DEFAULT_ACCURACY;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs: Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("beztrim requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn hypot(self, other: Self) -> Self => hypot;
    fn round(self) -> Self => round;
}

/// Replace a tolerance a caller has no business asking for.
///
/// A non-positive (or NaN) tolerance would make the adaptive subdivision
/// and the bisection search non-terminating, so it is treated as invalid
/// input and substituted with [`DEFAULT_ACCURACY`].
#[inline]
pub fn sanitize_accuracy(accuracy: f64) -> f64 {
    if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_accuracy;
    use crate::DEFAULT_ACCURACY;

    #[test]
    fn accuracy_substitution() {
        assert_eq!(sanitize_accuracy(0.5), 0.5);
        assert_eq!(sanitize_accuracy(0.0), DEFAULT_ACCURACY);
        assert_eq!(sanitize_accuracy(-1.0), DEFAULT_ACCURACY);
        assert_eq!(sanitize_accuracy(f64::NAN), DEFAULT_ACCURACY);
    }
}
