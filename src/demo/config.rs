/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Render settings, read from YAML.
//!
//! Every field has a default, so an empty document (or no file at all)
//! is a valid configuration.  Command-line flags are applied on top of
//! whatever is read here.

#![allow(non_snake_case)]

use crate::FailResult;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use glic::{Vec3, vec3};

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub shader: ShaderKind,

    #[serde(default="_settings__width")]
    pub width: u32,

    #[serde(default="_settings__height")]
    pub height: u32,

    /// Seconds; animates both shaders.
    #[serde(default)]
    pub time: f32,

    #[serde(default)]
    pub palette: Palette,

    /// Direction *towards* the light.  Need not be normalized.
    #[serde(default="_settings__light_dir")]
    pub light_dir: Vec3,

    /// Ratio of indices of refraction used for the sphere's glassy tint.
    #[serde(default="_settings__eta")]
    pub eta: f32,
}
fn _settings__width() -> u32 { 80 }
fn _settings__height() -> u32 { 40 }
fn _settings__light_dir() -> Vec3 { vec3(1.0, 1.0, 1.0) }
fn _settings__eta() -> f32 { 1.0 / 1.33 }

impl Default for Settings {
    fn default() -> Self {
        Settings {
            shader: Default::default(),
            width: _settings__width(),
            height: _settings__height(),
            time: 0.0,
            palette: Default::default(),
            light_dir: _settings__light_dir(),
            eta: _settings__eta(),
        }
    }
}

/// Coefficients of a cosine palette, `a + b * cos(2π (c t + d))`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            a: vec3(0.5, 0.5, 0.5),
            b: vec3(0.5, 0.5, 0.5),
            c: vec3(1.0, 1.0, 1.0),
            d: vec3(0.0, 0.33, 0.67),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ShaderKind {
    Plasma,
    Sphere,
}

impl Default for ShaderKind {
    fn default() -> Self { ShaderKind::Plasma }
}

impl ShaderKind {
    pub const NAMES: &'static [&'static str] = &["plasma", "sphere"];
}

impl FromStr for ShaderKind {
    type Err = failure::Error;

    fn from_str(s: &str) -> FailResult<Self> {
        match s {
            "plasma" => Ok(ShaderKind::Plasma),
            "sphere" => Ok(ShaderKind::Sphere),
            _ => bail!("unknown shader '{}' (choices: {})", s, ShaderKind::NAMES.join(", ")),
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(match self {
            ShaderKind::Plasma => "plasma",
            ShaderKind::Sphere => "sphere",
        }, f)
    }
}

impl Settings {
    pub fn from_yaml_str(s: &str) -> FailResult<Self>
    {
        // serde_yaml rejects a document with no content at all.
        if s.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> FailResult<Self>
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format_err!("while reading {}: {}", path.display(), e))?;
        Settings::from_yaml_str(&text)
    }

    /// Check the things that deserialization cannot.
    pub fn validate(&self) -> FailResult<()>
    {
        if self.width == 0 || self.height == 0 {
            bail!("image size must be nonzero (got {}x{})", self.width, self.height);
        }
        if !self.time.is_finite() {
            bail!("time must be finite (got {})", self.time);
        }
        if glic::length(self.light_dir) == 0.0 {
            bail!("light-dir must be nonzero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert_eq!(Settings::from_yaml_str("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn partial_document() {
        let settings = Settings::from_yaml_str("
shader: sphere
width: 32
light-dir: [0.0, 1.0, 0.0]
palette:
  a: [0.1, 0.2, 0.3]
  b: [0.5, 0.5, 0.5]
  c: [1.0, 1.0, 1.0]
  d: [0.0, 0.1, 0.2]
").unwrap();

        assert_eq!(settings.shader, ShaderKind::Sphere);
        assert_eq!(settings.width, 32);
        assert_eq!(settings.height, _settings__height());
        assert_eq!(settings.light_dir, vec3(0.0, 1.0, 0.0));
        assert_eq!(settings.palette.a, vec3(0.1, 0.2, 0.3));
        assert_eq!(settings.eta, _settings__eta());
    }

    #[test]
    fn unknown_shader_is_rejected() {
        assert!(Settings::from_yaml_str("shader: teapot").is_err());
        let err = "teapot".parse::<ShaderKind>().unwrap_err();
        assert!(err.to_string().contains("plasma, sphere"));
    }

    #[test]
    fn shader_names_roundtrip() {
        for name in ShaderKind::NAMES {
            assert_eq!(name.parse::<ShaderKind>().unwrap().to_string(), *name);
        }
    }

    #[test]
    fn validation() {
        assert!(Settings::default().validate().is_ok());

        let zero_width = Settings { width: 0, ..Settings::default() };
        let err = zero_width.validate().unwrap_err();
        assert!(err.to_string().contains("nonzero"));

        let dark = Settings { light_dir: Vec3::zero(), ..Settings::default() };
        assert!(dark.validate().is_err());
    }
}
