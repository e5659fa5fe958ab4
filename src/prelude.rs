pub use crate::camera::{Camera, CameraConfig};
pub use crate::color::{Color, linear_to_gamma, write_color, write_ppm};
pub use crate::error::{Result, TracerError};
pub use crate::hittable::{HitRecord, Hittable, Surface};
pub use crate::hittable_list::HittableList;
pub use crate::integrator::{background, ray_color};
pub use crate::interval::Interval;
pub use crate::material::{Dielectric, Lambertian, Material, Metal, Scatter};
pub use crate::ray::Ray;
pub use crate::renderer::{ImageBuffer, RenderSettings, render};
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub use rand::Rng;
pub use std::sync::Arc;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

/// Lower bound of the hit interval for every traced ray; keeps scattered rays
/// from re-hitting the surface they start on.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[inline]
pub fn random_f64<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

#[inline]
pub fn random_f64_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}
