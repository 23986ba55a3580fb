/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

use std::fmt;
use std::ops::{Add, Sub, Mul, Div, Neg};

use crate::types::{Vec2, Vec3, Vec4};

pub use self::gen_type::GenType;
mod gen_type {
    use super::*;

    /// Trait for the types accepted by the builtin functions:
    /// `f32`, `Vec2`, `Vec3`, and `Vec4`. (GLSL calls these "genType")
    ///
    /// A scalar is treated as a vector with one component, which is what allows
    /// every builtin to be written exactly once.  `apply` and `zip` are the only
    /// ways the builtins ever look at individual components.
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait GenType
        : Sized + Copy + Default + PartialEq + fmt::Debug
        + Add<Self, Output=Self> + Sub<Self, Output=Self>
        + Mul<Self, Output=Self> + Div<Self, Output=Self>
        + Neg<Output=Self>
        + Mul<f32, Output=Self> + Div<f32, Output=Self>
        + Sealed
    {
        /// Number of components.
        const DIM: usize;

        /// Broadcast a scalar to every component.
        fn splat(x: f32) -> Self;

        /// Apply a unary scalar function to each component.
        fn apply<F>(self, f: F) -> Self
        where F: FnMut(f32) -> f32;

        /// Combine two values component-wise with a binary scalar function.
        fn zip<F>(f: F, a: Self, b: Self) -> Self
        where F: FnMut(f32, f32) -> f32;

        /// Sum of the components.
        fn sum(self) -> f32;

        /// Euclidean norm.  For `f32` this is `abs`, which never squares.
        fn norm(self) -> f32;
    }

    pub trait Sealed { }
}

pub use self::broadcast::Broadcast;
mod broadcast {
    use super::*;

    /// Operands that can stand in for a `T` by broadcasting.
    ///
    /// Every `GenType` broadcasts to itself, and an `f32` broadcasts to any
    /// vector type by filling every component.  This is what lets
    /// `min(v, 1.0)` and `min(v, w)` be the same function.
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait Broadcast<T: GenType>: Copy + Sealed<T> {
        fn broadcast(self) -> T;
    }

    pub trait Sealed<T> { }
}

impl<T: GenType> Broadcast<T> for T {
    #[inline(always)]
    fn broadcast(self) -> T { self }
}
impl<T: GenType> broadcast::Sealed<T> for T { }

gen_each!{
    @{Vn}
    impl_scalar_broadcast!({$Vn:ident}) => {
        impl Broadcast<$Vn> for f32 {
            #[inline(always)]
            fn broadcast(self) -> $Vn { $Vn::splat(self) }
        }
        impl broadcast::Sealed<$Vn> for f32 { }
    }
}

// ---------------------------------------------------------------------------

impl gen_type::Sealed for f32 { }
impl GenType for f32 {
    const DIM: usize = 1;

    #[inline(always)]
    fn splat(x: f32) -> f32 { x }

    #[inline(always)]
    fn apply<F>(self, mut f: F) -> f32
    where F: FnMut(f32) -> f32,
    { f(self) }

    #[inline(always)]
    fn zip<F>(mut f: F, a: f32, b: f32) -> f32
    where F: FnMut(f32, f32) -> f32,
    { f(a, b) }

    #[inline(always)]
    fn sum(self) -> f32 { self }

    #[inline(always)]
    fn norm(self) -> f32 { self.abs() }
}

gen_each!{
    @{Vn_n}
    impl_gen_type!({$Vn:ident $n:tt}) => {
        impl gen_type::Sealed for $Vn { }
        impl GenType for $Vn {
            const DIM: usize = $n;

            #[inline(always)]
            fn splat(x: f32) -> $Vn { $Vn([x; $n]) }

            #[inline(always)]
            fn apply<F>(self, mut f: F) -> $Vn
            where F: FnMut(f32) -> f32,
            { $Vn::from_fn(|k| f(self.0[k])) }

            #[inline(always)]
            fn zip<F>(mut f: F, a: $Vn, b: $Vn) -> $Vn
            where F: FnMut(f32, f32) -> f32,
            { $Vn::from_fn(|k| f(a.0[k], b.0[k])) }

            #[inline]
            fn sum(self) -> f32
            { (1..$n).fold(self.0[0], |s, k| s + self.0[k]) }

            #[inline]
            fn norm(self) -> f32
            { GenType::sum(self * self).sqrt() }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{vec2, vec3, vec4};

    fn dims<T: GenType>(_: T) -> usize { T::DIM }

    #[test]
    fn dim() {
        assert_eq!(dims(1.0f32), 1);
        assert_eq!(dims(vec2(0.0, 0.0)), 2);
        assert_eq!(dims(Vec3::default()), 3);
        assert_eq!(dims(Vec4::default()), 4);
    }

    #[test]
    fn scalar_is_one_component() {
        assert_eq!(GenType::apply(4.0f32, f32::sqrt), 2.0);
        assert_eq!(<f32 as GenType>::zip(f32::max, 1.0, -3.0), 1.0);
        assert_eq!(GenType::sum(7.5f32), 7.5);
        assert_eq!(<f32 as GenType>::splat(2.0), 2.0);
    }

    #[test]
    fn sum() {
        assert_eq!(vec2(1.0, 2.0).sum(), 3.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).sum(), 6.0);
        assert_eq!(vec4(1.0, 2.0, 3.0, -4.0).sum(), 2.0);
    }

    #[test]
    fn norm() {
        assert_eq!(GenType::norm(-2.5f32), 2.5);
        assert_eq!(GenType::norm(1e-30f32), 1e-30);
        assert_eq!(GenType::norm(-1e30f32), 1e30);
        assert_eq!(GenType::norm(vec2(3.0, -4.0)), 5.0);
        assert_eq!(GenType::norm(vec4(1.0, 1.0, 1.0, 1.0)), 2.0);
    }

    #[test]
    fn broadcast() {
        fn bc<T: GenType, B: Broadcast<T>>(_: T, b: B) -> T { b.broadcast() }

        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(bc(v, 0.5f32), vec3(0.5, 0.5, 0.5));
        assert_eq!(bc(v, v), v);
        assert_eq!(bc(2.0f32, 3.0f32), 3.0);
    }
}
