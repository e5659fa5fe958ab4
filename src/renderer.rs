//! Driver loop: multi-sampled rendering into an in-memory buffer.

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 256,
            image_height: 256,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(TracerError::InvalidSettings("image dimensions must be non-zero"));
        }
        if self.samples_per_pixel == 0 {
            return Err(TracerError::InvalidSettings("samples per pixel must be non-zero"));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }
}

/// Averaged linear colors, row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len)?;
        pixels.resize(len, Color::zero());
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pixel at column `x`, row `y` counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Renders `world` through `camera`, jittering every sample inside its pixel.
pub fn render<W, R>(camera: &Camera, world: &W, settings: &RenderSettings, rng: &mut R) -> Result<ImageBuffer>
where
    W: Hittable + ?Sized,
    R: Rng,
{
    settings.validate()?;

    let RenderSettings {
        image_width,
        image_height,
        samples_per_pixel,
        max_depth,
    } = *settings;

    log::info!(
        "rendering {}x{} at {} samples/pixel, max depth {}",
        image_width,
        image_height,
        samples_per_pixel,
        max_depth
    );

    let mut image = ImageBuffer::new(image_width, image_height)?;
    let u_scale = (image_width.saturating_sub(1)).max(1) as f64;
    let v_scale = (image_height.saturating_sub(1)).max(1) as f64;
    let pixel_sample_scale = 1.0 / samples_per_pixel as f64;

    for j in (0..image_height).rev() {
        log::debug!("scanlines remaining: {}", j);
        let row = image_height - 1 - j;

        for i in 0..image_width {
            let mut pixel_color = Color::zero();
            for _ in 0..samples_per_pixel {
                let u = (i as f64 + random_f64(rng)) / u_scale;
                let v = (j as f64 + random_f64(rng)) / v_scale;
                let r = camera.get_ray(u, v, rng);
                pixel_color += ray_color(&r, world, max_depth, rng);
            }
            image.set(i, row, pixel_color * pixel_sample_scale);
        }
    }

    log::info!("render finished");
    Ok(image)
}
