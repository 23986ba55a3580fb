/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! GLSL-flavored vector math on the CPU.
//!
//! Provides `Vec2`, `Vec3`, and `Vec4` (fixed-size `f32` vectors with
//! component-wise arithmetic and scalar broadcasting), along with the GLSL
//! builtin functions (`sin`, `mix`, `clamp`, `reflect`, ...) written once
//! for scalars and vectors alike.
//!
//! ```
//! use glic::{vec3, mix, clamp, normalize, dot};
//!
//! let n = normalize(vec3(0.0, 3.0, 4.0));
//! let shade = clamp(dot(n, vec3(0.0, 0.0, 1.0)), 0.0f32, 1.0f32);
//! let color = mix(vec3(0.1, 0.1, 0.2), vec3(1.0, 0.9, 0.8), shade);
//! assert!(color[0] > 0.8);
//! ```
//!
//! Every builtin is generic over [`GenType`], so it accepts `f32` as well:
//!
//! ```
//! assert_eq!(glic::step(0.5f32, 0.7f32), 1.0);
//! assert_eq!(glic::r#mod(-1.0f32, 3.0f32), 2.0);
//! ```

#[cfg_attr(test, macro_use)]
extern crate glic_assert_close;

#[macro_use]
mod macros;

mod types;
mod traits;
mod methods;
mod ops;
mod conv;

pub mod builtins;

pub use crate::types::{Vec2, Vec3, Vec4, vec2, vec3, vec4};
pub use crate::types::{Iter, IterMut};
pub use crate::traits::{GenType, Broadcast};

pub use crate::builtins::*;
