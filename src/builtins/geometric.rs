/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Geometric functions.
//!
//! These treat their arguments as vectors rather than as bundles of
//! independent components.  A scalar is a 1-dimensional vector.

use crate::traits::GenType;
use crate::types::Vec3;

/// Euclidean length. For a scalar, this is `|x|`.
#[inline]
pub fn length<T: GenType>(x: T) -> f32
{ x.norm() }

/// Distance between two points, `length(p1 - p0)`.
#[inline]
pub fn distance<T: GenType>(p0: T, p1: T) -> f32
{ length(p1 - p0) }

#[inline]
pub fn dot<T: GenType>(x: T, y: T) -> f32
{ (x * y).sum() }

/// Cross product. Only defined on 3-dimensional vectors.
#[inline]
pub fn cross(x: Vec3, y: Vec3) -> Vec3
{ x.cross(&y) }

/// A vector in the same direction as `x` with length 1.
///
/// For a nonzero scalar this is `sign(x)`.  Produces NaNs when `x` is zero.
#[inline]
pub fn normalize<T: GenType>(x: T) -> T
{ x / length(x) }

/// Orient `n` to face against the incident vector `i`.
///
/// Returns `n` if `dot(nref, i) < 0`, else `-n`.
#[inline]
pub fn faceforward<T: GenType>(n: T, i: T, nref: T) -> T
{ if dot(nref, i) < 0.0 { n } else { -n } }

/// Reflection direction of the incident vector `i` off a surface with normal `n`.
///
/// `n` should be normalized.
#[inline]
pub fn reflect<T: GenType>(i: T, n: T) -> T
{ i - n * (2.0 * dot(n, i)) }

/// Refraction direction of the incident vector `i` through a surface with
/// normal `n`, for a ratio of indices of refraction `eta`.
///
/// `i` and `n` should be normalized.  Total internal reflection produces
/// the zero vector.
#[inline]
pub fn refract<T: GenType>(i: T, n: T, eta: f32) -> T {
    let n_dot_i = dot(n, i);
    let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
    if k < 0.0 {
        T::splat(0.0)
    } else {
        i * eta - n * (eta * n_dot_i + k.sqrt())
    }
}
