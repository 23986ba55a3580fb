/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::io::{self, Write};
use std::path::Path;

use glic::Vec3;
use slice_of_array::prelude::*;

/// An RGB image, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

/// Characters for the ASCII preview, darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

impl Image {
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>) -> Image {
        assert_eq!(pixels.len(), width as usize * height as usize, "wrong number of pixels");
        Image { width, height, pixels }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn pixels(&self) -> &[Vec3] { &self.pixels }

    /// Each row of pixels, top to bottom.  A zero-width image still has
    /// `height` (empty) rows.
    pub fn rows(&self) -> impl Iterator<Item=&[Vec3]> + '_
    {
        let width = self.width as usize;
        (0..self.height as usize).map(move |r| &self.pixels[r * width..(r + 1) * width])
    }

    /// Write as a binary PPM (`P6`) with 8 bits per channel.
    pub fn write_ppm<W: Write>(&self, mut w: W) -> FailResult<()>
    {Ok({
        write!(w, "P6\n{} {}\n255\n", self.width, self.height)?;
        let bytes: Vec<u8> = self.pixels.flat().iter().map(|&c| quantize(c)).collect();
        w.write_all(&bytes)?;
        w.flush()?;
    })}

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> FailResult<()>
    {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(|e| format_err!("while creating {}: {}", path.display(), e))?;
        self.write_ppm(io::BufWriter::new(file))
    }

    /// One character per pixel, by luminance.
    pub fn to_ascii(&self) -> String
    {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|&px| {
                let index = (luminance(px) * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[index.min(RAMP.len() - 1)] as char
            }));
            out.push('\n');
        }
        out
    }
}

/// Map `[0, 1]` onto `0..=255`, saturating outside of that range.
pub fn quantize(c: f32) -> u8 {
    (glic::clamp(c, 0.0f32, 1.0f32) * 255.0).round() as u8
}

/// Rec. 709 relative luminance.
pub fn luminance(color: Vec3) -> f32 {
    glic::clamp(glic::dot(color, glic::vec3(0.2126, 0.7152, 0.0722)), 0.0f32, 1.0f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glic::vec3;

    fn checker() -> Image {
        Image::new(2, 2, vec![
            vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0),
            vec3(1.0, 0.5, 0.0), vec3(2.0, -1.0, 0.25),
        ])
    }

    #[test]
    fn quantization() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(-3.0), 0);
        assert_eq!(quantize(7.0), 255);
        assert_eq!(quantize(std::f32::NAN), 0);
    }

    #[test]
    fn ppm_layout() {
        let mut buf = vec![];
        checker().write_ppm(&mut buf).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&buf[..header.len()], &header[..]);
        assert_eq!(&buf[header.len()..], &[
            0, 0, 0,  255, 255, 255,
            255, 128, 0,  255, 0, 64,
        ][..]);
    }

    #[test]
    fn ascii_preview() {
        let text = checker().to_ascii();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec![" @", "+ "]);
    }

    #[test]
    fn zero_width() {
        let image = Image::new(0, 3, vec![]);
        assert_eq!(image.rows().count(), 3);
        assert!(image.rows().all(|row| row.is_empty()));
        assert_eq!(image.to_ascii(), "\n\n\n");

        let mut buf = vec![];
        image.write_ppm(&mut buf).unwrap();
        assert_eq!(buf, b"P6\n0 3\n255\n".to_vec());
    }

    #[test]
    #[should_panic(expected = "wrong number of pixels")]
    fn size_mismatch() {
        Image::new(3, 3, vec![Vec3::zero(); 4]);
    }
}
