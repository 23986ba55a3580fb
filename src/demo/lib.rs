/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! CPU "fragment shader" renderer built on `glic`.
//!
//! The `glic-shade` binary is a thin wrapper around `entry_points::glic_shade`.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[cfg(test)]
#[macro_use] extern crate glic_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod config;
pub mod entry_points;
pub mod image;
pub mod logging;
pub mod shader;
