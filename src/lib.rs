//! A small recursive ray tracer for scenes made of spheres.
//!
//! Rays leave a thin-lens [`Camera`], find their nearest hit in a
//! [`HittableList`], scatter off Lambertian, metal or dielectric
//! [`Material`]s and finally escape into a sky gradient. All sampling draws
//! from a caller-supplied [`rand::Rng`], so a seeded generator gives
//! reproducible images.

pub mod camera;
pub mod cli;
pub mod color;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod integrator;
pub mod interval;
pub mod logger;
pub mod material;
pub mod prelude;
pub mod ray;
pub mod renderer;
pub mod scenes;
pub mod sphere;
pub mod vec3;

pub use prelude::*;
