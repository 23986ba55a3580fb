/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Exponential functions.

binary_builtins! {
    /// `x` raised to the power `y`.
    ///
    /// Undefined in GLSL for `x < 0`, or for `x == 0 && y <= 0`; here it is
    /// whatever `f32::powf` produces.
    pow(x, y) => f32::powf;
}

unary_builtins! {
    /// Natural exponentiation.
    exp(x) => f32::exp;
    exp2(x) => f32::exp2;

    /// Natural logarithm. NaN for negative input, `-inf` at zero.
    log(x) => f32::ln;
    log2(x) => f32::log2;

    sqrt(x) => f32::sqrt;

    /// `1 / sqrt(x)`.
    inversesqrt(x) => |x| 1.0 / x.sqrt();
}
