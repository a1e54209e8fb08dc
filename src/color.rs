use crate::tracer::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub type Rgb = [u8; 3];

/// Sky blue written wherever a ray escapes the scene.
pub const BACKGROUND: Rgb = [135, 206, 235];

/// Maps each component of a unit normal from `[-1, 1]` onto `[0, 255]`.
#[inline]
pub fn normal_to_rgb(normal: Vec3) -> Rgb {
    let channel = |c: f64| (255.0 * (c + 1.0) / 2.0) as u8;
    [channel(normal.x), channel(normal.y), channel(normal.z)]
}

/// Writes `buffer` as a binary PPM (P6) image.
pub fn write_ppm<W: Write>(out: &mut W, buffer: &PixelBuffer) -> io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    out.write_all(buffer.as_bytes())?;
    out.flush()
}

pub fn save_ppm<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, buffer)
}
