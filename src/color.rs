use crate::prelude::*;
use std::io::{self, Write};

pub type Color = Vec3;

#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Gamma-corrected 8-bit channels for an averaged linear color.
pub fn to_bytes(pixel_color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.000, 0.999);
    let quantize = |c: f64| (255.999 * intensity.clamp(linear_to_gamma(c))) as u8;
    [
        quantize(pixel_color.x),
        quantize(pixel_color.y),
        quantize(pixel_color.z),
    ]
}

pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [r, g, b] = to_bytes(pixel_color);
    writeln!(out, "{} {} {}", r, g, b)
}

/// Serializes `image` as plain-text PPM (`P3`), top row first.
pub fn write_ppm<W: Write>(out: &mut W, image: &ImageBuffer) -> Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;
    for pixel in &image.pixels {
        write_color(out, *pixel)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-12);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_bytes_clamps() {
        assert_eq!(to_bytes(Color::zero()), [0, 0, 0]);
        assert_eq!(to_bytes(Color::new(4.0, 1.0, -2.0)), [255, 255, 0]);
        assert_eq!(to_bytes(Color::new(0.25, 0.25, 0.25)), [127, 127, 127]);
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1).unwrap();
        image.set(1, 0, Color::one());

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n0 0 0\n255 255 255\n");
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_ppm_reports_io_error() {
        let image = ImageBuffer::new(1, 1).unwrap();
        let err = write_ppm(&mut FullDisk, &image).unwrap_err();
        assert!(matches!(err, TracerError::Io(ref e) if e.kind() == io::ErrorKind::StorageFull));
    }
}
