/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// A 2-component single-precision vector, GLSL's `vec2`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Vec2(pub [f32; 2]);

/// A 3-component single-precision vector, GLSL's `vec3`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Vec3(pub [f32; 3]);

/// A 4-component single-precision vector, GLSL's `vec4`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Vec4(pub [f32; 4]);

/// Construct a `Vec2` from its components.
#[inline(always)]
pub fn vec2(x: f32, y: f32) -> Vec2 { Vec2([x, y]) }

/// Construct a `Vec3` from its components.
#[inline(always)]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 { Vec3([x, y, z]) }

/// Construct a `Vec4` from its components.
#[inline(always)]
pub fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 { Vec4([x, y, z, w]) }

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

pub type Iter<'a> = std::slice::Iter<'a, f32>;
pub type IterMut<'a> = std::slice::IterMut<'a, f32>;

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl Deref for $Vn {
            type Target = [f32; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl DerefMut for $Vn {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a> IntoIterator for &'a $Vn {
            type Item = &'a f32;
            type IntoIter = Iter<'a>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a> IntoIterator for &'a mut $Vn {
            type Item = &'a mut f32;
            type IntoIter = IterMut<'a>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // print the bare array, without a surrounding "Vec3(...)"
        impl fmt::Debug for $Vn {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    }
}

// fmt traits apply the format to each element for convenience.
gen_each!{
    @{Vn}
    [ {Display} {LowerExp} {UpperExp} ]
    impl_fmt!(
        {$Vn:ident}
        {$Format:ident}
    ) => {
        impl fmt::$Format for $Vn {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                fmt::$Format::fmt(&self[0], f)?;
                for x in &self[1..] {
                    write!(f, ", ")?;
                    fmt::$Format::fmt(x, f)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting() {
        let v = vec3(1.0, 0.5, -2.0);
        assert_eq!(format!("{:?}", v), "[1.0, 0.5, -2.0]");
        assert_eq!(format!("{}", v), "[1, 0.5, -2]");
        assert_eq!(format!("{:.2}", vec2(1.0, 1.0 / 3.0)), "[1.00, 0.33]");
        assert_eq!(format!("{:e}", vec2(1500.0, 0.25)), "[1.5e3, 2.5e-1]");
    }

    #[test]
    fn positional_access() {
        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[2], 3.0);
        v[3] = 8.0;
        assert_eq!(v.0, [1.0, 2.0, 3.0, 8.0]);
        assert_eq!(v.iter().sum::<f32>(), 14.0);
        for x in &mut v {
            *x *= 2.0;
        }
        assert_eq!(v, vec4(2.0, 4.0, 6.0, 16.0));
    }
}
