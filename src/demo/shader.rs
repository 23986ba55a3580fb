/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The fragment shaders.
//!
//! Each is a pure function of the pixel coordinate, written in terms of the
//! `glic` builtins the same way it would be written in GLSL.

use crate::config::{Palette, Settings, ShaderKind};
use crate::image::Image;

use std::f32::consts::PI;

use glic::{Vec2, Vec3, vec2, vec3, vec4};
use glic::{clamp, cos, dot, faceforward, length, max, mix, normalize};
use glic::{pow, reflect, refract, sin, smoothstep};
use glic::GenType;

pub trait Shader {
    /// Color of the fragment centered at `frag_coord`, in pixels from the
    /// bottom-left corner of a viewport of size `resolution`.
    ///
    /// The result is not required to lie in `[0, 1]`.
    fn shade(&self, frag_coord: Vec2, resolution: Vec2) -> Vec3;
}

pub fn from_settings(settings: &Settings) -> Box<dyn Shader> {
    match settings.shader {
        ShaderKind::Plasma => Box::new(Plasma {
            time: settings.time,
            palette: settings.palette,
        }),
        ShaderKind::Sphere => Box::new(Sphere {
            time: settings.time,
            light_dir: settings.light_dir,
            eta: settings.eta,
        }),
    }
}

/// Evaluate a shader over every pixel. Colors are clamped to `[0, 1]`.
pub fn render(shader: &dyn Shader, width: u32, height: u32) -> Image {
    let resolution = vec2(width as f32, height as f32);
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        // image rows run top to bottom, fragment coordinates bottom to top
        let y = (height - 1 - row) as f32 + 0.5;
        for col in 0..width {
            let frag_coord = vec2(col as f32 + 0.5, y);
            pixels.push(clamp(shader.shade(frag_coord, resolution), 0.0f32, 1.0f32));
        }
        trace!("shaded row {}", row);
    }
    Image::new(width, height, pixels)
}

/// `a + b * cos(2π (c t + d))`.
pub fn cosine_palette(palette: &Palette, t: f32) -> Vec3 {
    let Palette { a, b, c, d } = *palette;
    a + b * cos((c * t + d) * (2.0 * PI))
}

// ---------------------------------------------------------------------------

/// Interfering sine waves, colored by a cosine palette.
#[derive(Debug, Clone)]
pub struct Plasma {
    pub time: f32,
    pub palette: Palette,
}

impl Shader for Plasma {
    fn shade(&self, frag_coord: Vec2, resolution: Vec2) -> Vec3 {
        let t = self.time;
        let p = frag_coord / resolution * 8.0 - 4.0;
        let center = vec2(sin(t / 3.0), cos(t / 2.0)) * 2.0;

        let waves = sin(vec4(
            p.x() + t,
            (p.y() + t) * 0.5,
            (p.x() + p.y() + t) * 0.5,
            length(p - center) + t,
        ));
        // each wave is in [-1, 1]
        let v = waves.sum() / 8.0 + 0.5;
        cosine_palette(&self.palette, v)
    }
}

// ---------------------------------------------------------------------------

/// A lit glassy ball in front of a sky gradient.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub time: f32,
    pub light_dir: Vec3,
    pub eta: f32,
}

const EYE: Vec3 = glic::Vec3([0.0, 0.0, 3.0]);
const BALL_COLOR: Vec3 = glic::Vec3([0.9, 0.35, 0.2]);

fn sky(dir: Vec3) -> Vec3 {
    let t = smoothstep(-1.0f32, 1.0f32, dir.y());
    mix(vec3(0.05, 0.05, 0.1), vec3(0.4, 0.6, 0.9), t)
}

impl Sphere {
    /// Light direction, orbiting the vertical axis over time.
    fn light(&self) -> Vec3 {
        let (s, c) = (sin(self.time), cos(self.time));
        let l = self.light_dir;
        normalize(vec3(c * l.x() + s * l.z(), l.y(), c * l.z() - s * l.x()))
    }

    /// Distance along the ray to the unit sphere at the origin.
    fn intersect(origin: Vec3, dir: Vec3) -> Option<f32> {
        let b = dot(origin, dir);
        let c = dot(origin, origin) - 1.0;
        let h = b * b - c;
        if h < 0.0 {
            None
        } else {
            Some(-b - h.sqrt())
        }
    }
}

impl Shader for Sphere {
    fn shade(&self, frag_coord: Vec2, resolution: Vec2) -> Vec3 {
        let uv = (frag_coord * 2.0 - resolution) / resolution.y();
        let dir = normalize(vec3(uv.x(), uv.y(), -2.0));

        let dist = match Sphere::intersect(EYE, dir) {
            None => return sky(dir),
            Some(dist) => dist,
        };
        let outward = normalize(EYE + dir * dist);
        let normal = faceforward(outward, dir, outward);
        let light = self.light();

        let diffuse = clamp(dot(normal, light), 0.0f32, 1.0f32);
        let specular = pow(max(dot(reflect(-light, normal), -dir), 0.0f32), 32.0);
        let rim = smoothstep(0.6f32, 1.0f32, 1.0 - dot(normal, -dir));
        let tint = sky(refract(dir, normal, self.eta));

        let base = BALL_COLOR * (0.1 + 0.9 * diffuse);
        mix(base, tint, 0.35f32) + specular + rim * 0.5
    }
}
