/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div, Neg};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use crate::traits::{GenType, Broadcast};

use super::types::*;

// Every arithmetic operator funnels through here: both operands are broadcast
// to the vector type (a no-op for vectors) and combined component-wise.
#[inline(always)]
fn broadcast_zip<T: GenType>(
    f: impl FnMut(f32, f32) -> f32,
    a: impl Broadcast<T>,
    b: impl Broadcast<T>,
) -> T
{ T::zip(f, a.broadcast(), b.broadcast()) }

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Only same-typed vectors combine; `Vec3 + Vec4` is a type error.
gen_each!{
    @{Vn}
    @{arith}
    [ [(   ) (   ) ( )] [('a,) (&'a) (*)] ]
    [ [(   ) (   ) ( )] [('b,) (&'b) (*)] ]
    impl_v_v_ops!(
        {$Vn:ident}
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $sym:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ($($deref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ($($deref_b:tt)*) ]
    ) => {
        // vector `op` vector
        impl<$($lt_a)* $($lt_b)*> $Op<$($ref_b)* $Vn> for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn $op(self, other: $($ref_b)* $Vn) -> Self::Output
            { broadcast_zip(|a, b| a $sym b, $($deref_a)* self, $($deref_b)* other) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{Vn}
    [ [(   ) (   ) ( )] [('a,) (&'a) (*)] ]
    impl_v_unops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ($($deref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)*> Neg for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn neg(self) -> Self::Output
            { GenType::apply($($deref_a)* self, |x| -x) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

gen_each!{
    @{Vn}
    @{arith}
    [ [(   ) (   ) ( )] [('a,) (&'a) (*)] ]
    impl_v_scalar_ops!(
        {$Vn:ident}
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $sym:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ($($deref_a:tt)*) ]
    ) => {
        // vector `op` scalar
        impl<$($lt_a)*> $Op<f32> for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn $op(self, scalar: f32) -> Self::Output
            { broadcast_zip(|a, b| a $sym b, $($deref_a)* self, scalar) }
        }

        // scalar `op` vector
        //
        // The scalar stays on the left: `1.0 - v` is `[1.0 - v[0], ...]`.
        impl<$($lt_a)*> $Op<$($ref_a)* $Vn> for f32 {
            type Output = $Vn;

            #[inline]
            fn $op(self, vector: $($ref_a)* $Vn) -> Self::Output
            { broadcast_zip(|a, b| a $sym b, self, $($deref_a)* vector) }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops

gen_each!{
    @{Vn}
    @{arith}
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_assign_ops!(
        {$Vn:ident}
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $sym:tt}
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector op= vector;
        // vector op= &vector;
        impl<$($lt_b)*> $OpAssign<$($ref_b)* $Vn> for $Vn {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: $($ref_b)* $Vn)
            { *self = *self $sym rhs; }
        }
    }
}

gen_each!{
    @{Vn}
    @{arith}
    impl_v_scalar_assign_ops!(
        {$Vn:ident}
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident $sym:tt}
    ) => {
        // vector op= scalar;
        impl $OpAssign<f32> for $Vn {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: f32)
            { *self = *self $sym rhs; }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_vec() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, -2.0, 0.5);

        assert_eq!(a + b, vec3(5.0, 0.0, 3.5));
        assert_eq!(a - b, vec3(-3.0, 4.0, 2.5));
        assert_eq!(a * b, vec3(4.0, -4.0, 1.5));
        assert_eq!(a / b, vec3(0.25, -1.0, 6.0));

        // borrowed operands in every position
        assert_eq!(&a + &b, a + b);
        assert_eq!(&a - b, a - b);
        assert_eq!(a * &b, a * b);
        assert_eq!(-&a, vec3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn vec_scalar() {
        let v = vec4(1.0, 2.0, 4.0, 8.0);

        assert_eq!(v + 1.0, vec4(2.0, 3.0, 5.0, 9.0));
        assert_eq!(v - 1.0, vec4(0.0, 1.0, 3.0, 7.0));
        assert_eq!(v * 0.5, vec4(0.5, 1.0, 2.0, 4.0));
        assert_eq!(v / 2.0, vec4(0.5, 1.0, 2.0, 4.0));
        assert_eq!(&v * 2.0, v + v);
    }

    #[test]
    fn scalar_vec_keeps_operand_order() {
        let v = vec2(1.0, 4.0);

        assert_eq!(1.0 + v, vec2(2.0, 5.0));
        assert_eq!(1.0 - v, vec2(0.0, -3.0));
        assert_eq!(2.0 * v, vec2(2.0, 8.0));
        assert_eq!(1.0 / v, vec2(1.0, 0.25));
        assert_eq!(8.0 / &v, vec2(8.0, 2.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += vec3(1.0, 1.0, 1.0);
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        v -= 1.0;
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        v *= &vec3(2.0, 0.5, -1.0);
        assert_eq!(v, vec3(2.0, 1.0, -3.0));
        v /= 2.0;
        assert_eq!(v, vec3(1.0, 0.5, -1.5));
    }

    #[test]
    fn division_follows_ieee() {
        let v = vec3(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v[0], f32::INFINITY);
        assert_eq!(v[1], f32::NEG_INFINITY);
        assert!(v[2].is_nan());

        let w = vec2(1.0, 1.0) / vec2(0.0, -0.0);
        assert_eq!(w, vec2(f32::INFINITY, f32::NEG_INFINITY));
    }
}
