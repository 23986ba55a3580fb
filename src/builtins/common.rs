/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Common functions: sign manipulation, rounding, range limiting, and
//! interpolation.

use crate::traits::{GenType, Broadcast};

unary_builtins! {
    abs(x) => f32::abs;

    /// `1.0` for positive, `-1.0` for negative, and `0.0` for zero or NaN.
    sign(x) => |x| {
        if x > 0.0 { 1.0 }
        else if x < 0.0 { -1.0 }
        else { 0.0 }
    };

    floor(x) => f32::floor;
    ceil(x) => f32::ceil;

    /// `x - floor(x)`. Always in `[0, 1)` for finite input.
    fract(x) => |x| x - x.floor();
}

mixed_builtins! {
    /// Modulus as GLSL defines it: `x - y * floor(x / y)`.
    ///
    /// Unlike `%`, the result takes the sign of `y`.
    r#mod(x, y) => |x, y| x - y * (x / y).floor();

    /// Component-wise minimum. If one side is NaN, the other is returned.
    min(x, y) => f32::min;

    /// Component-wise maximum. If one side is NaN, the other is returned.
    max(x, y) => f32::max;
}

/// `min(max(x, min_val), max_val)`.
///
/// The result is unspecified by GLSL when `min_val > max_val`; here it is `max_val`.
#[inline]
pub fn clamp<T, Lo, Hi>(x: T, min_val: Lo, max_val: Hi) -> T
where
    T: GenType,
    Lo: Broadcast<T>,
    Hi: Broadcast<T>,
{ min(max(x, min_val), max_val) }

/// Linear blend of `x` and `y`: `x + a * (y - x)`.
#[inline]
pub fn mix<T, A>(x: T, y: T, a: A) -> T
where
    T: GenType,
    A: Broadcast<T>,
{ x + a.broadcast() * (y - x) }

/// `1.0` where `x >= edge`, `0.0` elsewhere (including where either is NaN).
#[inline]
pub fn step<T, E>(edge: E, x: T) -> T
where
    T: GenType,
    E: Broadcast<T>,
{ T::zip(|edge, x| if x >= edge { 1.0 } else { 0.0 }, edge.broadcast(), x) }

/// Hermite interpolation between `0.0` and `1.0` as `x` goes from `edge0` to `edge1`.
///
/// Undefined in GLSL when `edge0 >= edge1`.
#[inline]
pub fn smoothstep<T, E0, E1>(edge0: E0, edge1: E1, x: T) -> T
where
    T: GenType,
    E0: Broadcast<T>,
    E1: Broadcast<T>,
{
    let (edge0, edge1) = (edge0.broadcast(), edge1.broadcast());
    let t = clamp((x - edge0) / (edge1 - edge0), T::splat(0.0), T::splat(1.0));
    t.apply(|t| t * t * (3.0 - 2.0 * t))
}
