/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use super::types::*;

// ---------------------------------------------------------------------------
// By-value conversions.

gen_each!{
    @{Vn_n}
    impl_from_array!( {$Vn:ident $n:tt} ) => {
        impl From<[f32; $n]> for $Vn {
            #[inline(always)]
            fn from(arr: [f32; $n]) -> Self { $Vn(arr) }
        }

        impl From<$Vn> for [f32; $n] {
            #[inline(always)]
            fn from(v: $Vn) -> Self { v.0 }
        }

        // A lone scalar broadcasts, like GLSL's `vec3(1.0)`.
        impl From<f32> for $Vn {
            #[inline(always)]
            fn from(x: f32) -> Self { $Vn([x; $n]) }
        }
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline(always)]
    fn from((x, y): (f32, f32)) -> Self { vec2(x, y) }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline(always)]
    fn from((x, y, z): (f32, f32, f32)) -> Self { vec3(x, y, z) }
}

impl From<(f32, f32, f32, f32)> for Vec4 {
    #[inline(always)]
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self { vec4(x, y, z, w) }
}

// ---------------------------------------------------------------------------
