/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::convert::Infallible;

use crate::builtins;
use crate::traits::GenType;

use super::types::*;

use glic_assert_close::{CheckClose, CheckCloseError, Tolerances};
use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

gen_each!{
    @{Vn_axes}
    impl_axes!(
        {$Vn:ident [$(($axis:ident $axis_mut:ident $k:tt))+]}
    ) => {
        impl $Vn {
            /// Construct a vector from its components, in order.
            #[inline(always)]
            pub fn new($($axis: f32),+) -> Self
            { $Vn([$($axis),+]) }

            $(
                #[inline(always)]
                pub fn $axis(&self) -> f32
                { self.0[$k] }

                #[inline(always)]
                pub fn $axis_mut(&mut self) -> &mut f32
                { &mut self.0[$k] }
            )+
        }
    }
}

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl $Vn {
            /// Broadcast a scalar to every component.
            #[inline(always)]
            pub fn splat(x: f32) -> Self
            { $Vn([x; $n]) }

            /// Get a zero vector.
            ///
            /// This is the same as `Zero::zero()`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            { Zero::zero() }

            /// Construct a vector from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(mut f: F) -> Self
            where F: FnMut(usize) -> f32,
            {
                match Self::try_from_fn(|k| Ok::<_, Infallible>(f(k))) {
                    Ok(v) => v,
                    Err(never) => match never {},
                }
            }

            /// Construct a vector from a fallible function on indices,
            /// stopping at the first error.
            #[inline(always)]
            pub fn try_from_fn<E, F>(f: F) -> Result<Self, E>
            where F: FnMut(usize) -> Result<f32, E>,
            { TryFromFn::try_from_fn(f) }

            /// Apply a scalar function to each component.
            ///
            /// Components are independent, and `f` should be a pure function;
            /// no particular order of evaluation is promised.
            #[inline(always)]
            pub fn apply<F>(self, f: F) -> Self
            where F: FnMut(f32) -> f32,
            { GenType::apply(self, f) }

            /// Combine two vectors component-wise with a binary scalar function.
            ///
            /// It is recommended you write this as `Vec3::zip(f, a, b)`.
            #[inline(always)]
            pub fn zip<F>(f: F, a: Self, b: Self) -> Self
            where F: FnMut(f32, f32) -> f32,
            { <Self as GenType>::zip(f, a, b) }

            /// Get the inner product of two vectors.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> f32
            { builtins::dot(*self, *other) }

            /// Get the vector's magnitude.
            #[inline(always)]
            pub fn length(&self) -> f32
            { builtins::length(*self) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqlength(&self) -> f32
            { builtins::dot(*self, *self) }

            /// Scale the vector to unit length.
            ///
            /// The zero vector produces NaNs.
            #[inline(always)]
            pub fn normalize(self) -> Self
            { builtins::normalize(self) }

            /// Add one to every component (GLSL `++v`), returning the receiver.
            #[inline]
            pub fn inc(&mut self) -> &mut Self
            { *self += 1.0; self }

            /// Subtract one from every component (GLSL `--v`), returning the receiver.
            #[inline]
            pub fn dec(&mut self) -> &mut Self
            { *self -= 1.0; self }

            /// Add one to every component (GLSL `v++`), returning the old value.
            #[inline]
            pub fn post_inc(&mut self) -> Self
            { let old = *self; *self += 1.0; old }

            /// Subtract one from every component (GLSL `v--`), returning the old value.
            #[inline]
            pub fn post_dec(&mut self) -> Self
            { let old = *self; *self -= 1.0; old }
        }
    }
}

impl Vec3 {
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vec3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    #[inline(always)]
    pub fn xy(&self) -> Vec2 { vec2(self[0], self[1]) }
}

impl Vec4 {
    #[inline(always)]
    pub fn xy(&self) -> Vec2 { vec2(self[0], self[1]) }

    #[inline(always)]
    pub fn xyz(&self) -> Vec3 { vec3(self[0], self[1], self[2]) }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boilerplate
// ---------------------------------------------------------------------------

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl Zero for $Vn {
            #[inline]
            fn zero() -> Self
            { $Vn([0.0; $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }

        // Uniform in `[0, 1)` for each component.
        impl rand::Rand for $Vn {
            #[inline]
            fn rand<R: rand::Rng>(rng: &mut R) -> Self
            { $Vn(rng.gen()) }
        }

        impl CheckClose for $Vn {
            type Scalar = f32;

            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f32>>
            { self.0.check_close(&other.0, tol) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of `Vec3::try_from_fn`.
pub(crate) trait TryFromFn: Sized {
    fn try_from_fn<E>(f: impl FnMut(usize) -> Result<f32, E>) -> Result<Self, E>;
}

impl TryFromFn for Vec2 {
    #[inline]
    fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<f32, E>) -> Result<Self, E> {
        Ok(Vec2([f(0)?, f(1)?]))
    }
}

impl TryFromFn for Vec3 {
    #[inline]
    fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<f32, E>) -> Result<Self, E> {
        Ok(Vec3([f(0)?, f(1)?, f(2)?]))
    }
}

impl TryFromFn for Vec4 {
    #[inline]
    fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<f32, E>) -> Result<Self, E> {
        Ok(Vec4([f(0)?, f(1)?, f(2)?, f(3)?]))
    }
}

// ---------------------------------------------------------------------------

// stdlib integration

gen_each!{
    @{Vn}
    for_each!( {$Vn:ident} ) => {
        impl std::iter::Sum for $Vn {
            fn sum<I: Iterator<Item=$Vn>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }

        impl<'a> std::iter::Sum<&'a $Vn> for $Vn {
            fn sum<I: Iterator<Item=&'a $Vn>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + *b)
            }
        }
    }
}

// slice-of-array integration.

// lets `&[Vec3]` be flattened to `&[f32]` with `.flat()` for upload into buffers.

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        unsafe impl slice_of_array::IsSliceomorphic for $Vn {
            type Element = f32;
            const LEN: usize = $n;
        }
    }
}

// ---------------------------------------------------------------------------
