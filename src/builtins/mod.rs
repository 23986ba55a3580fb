/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The GLSL builtin functions.
//!
//! Every function here is written once, generically over [`GenType`],
//! and therefore accepts `f32`, `Vec2`, `Vec3`, and `Vec4` alike.
//! Arguments that GLSL allows to be "either a vector or a float" are
//! bounded by [`Broadcast`] instead.
//!
//! All of these are re-exported at the crate root.
//!
//! [`GenType`]: ../trait.GenType.html
//! [`Broadcast`]: ../trait.Broadcast.html

// The tables below expand to one generic function per row.

/// `name(x) => |c| expr;` produces `pub fn name<T: GenType>(x: T) -> T`
/// that maps the closure over each component.
macro_rules! unary_builtins {
    ($(
        $(#[$meta:meta])*
        $name:ident($arg:ident) => $f:expr;
    )+) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $name<T: $crate::traits::GenType>($arg: T) -> T
        { $crate::traits::GenType::apply($arg, $f) }
    )+};
}

/// `name(x, y) => |a, b| expr;` produces a function of two operands of the
/// same type, combined component-wise.
macro_rules! binary_builtins {
    ($(
        $(#[$meta:meta])*
        $name:ident($a:ident, $b:ident) => $f:expr;
    )+) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $name<T: $crate::traits::GenType>($a: T, $b: T) -> T
        { T::zip($f, $a, $b) }
    )+};
}

/// Like `binary_builtins!`, but the second operand may also be an `f32`,
/// which is broadcast to every component.
macro_rules! mixed_builtins {
    ($(
        $(#[$meta:meta])*
        $name:ident($a:ident, $b:ident) => $f:expr;
    )+) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $name<T, B>($a: T, $b: B) -> T
        where
            T: $crate::traits::GenType,
            B: $crate::traits::Broadcast<T>,
        { T::zip($f, $a, $b.broadcast()) }
    )+};
}

pub mod trigonometry;
pub mod exponential;
pub mod common;
pub mod geometric;

pub use self::trigonometry::*;
pub use self::exponential::*;
pub use self::common::*;
pub use self::geometric::*;
