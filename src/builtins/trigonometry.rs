/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Angle and trigonometry functions.

use std::f32::consts::PI;

use crate::traits::GenType;

unary_builtins! {
    /// Converts degrees to radians.
    radians(deg) => |d| d * (PI / 180.0);

    /// Converts radians to degrees.
    degrees(rad) => |r| r * (180.0 / PI);

    sin(angle) => f32::sin;
    cos(angle) => f32::cos;
    tan(angle) => f32::tan;

    /// Arc sine. NaN outside of `[-1, 1]`.
    asin(x) => f32::asin;

    /// Arc cosine. NaN outside of `[-1, 1]`.
    acos(x) => f32::acos;

    /// Arc tangent of `y_over_x`, in `[-pi/2, pi/2]`.
    atan(y_over_x) => f32::atan;
}

/// Arc tangent of `y / x`, using the signs of both to pick the quadrant.
///
/// This is the two-argument overload of GLSL's `atan`.
#[inline]
pub fn atan2<T: GenType>(y: T, x: T) -> T
{ T::zip(f32::atan2, y, x) }
