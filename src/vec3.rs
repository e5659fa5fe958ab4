use crate::prelude::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub type Point3 = Vec3;

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && (self.z - other.z).abs() < eps
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    pub fn random_interval<R: Rng>(rng: &mut R, min: f64, max: f64) -> Self {
        Self {
            x: random_f64_range(rng, min, max),
            y: random_f64_range(rng, min, max),
            z: random_f64_range(rng, min, max),
        }
    }

    pub fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Self::random_interval(rng, -1.0, 1.0);
            if p.length_squared() <= 1.0 {
                return p;
            }
        }
    }

    /// Uniformly distributed direction on the unit sphere.
    ///
    /// Rejection-samples the unit ball and skips candidates too close to the
    /// origin to normalize safely.
    pub fn random_unit_vector<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Self::random_interval(rng, -1.0, 1.0);
            let len_sq = p.length_squared();
            if (1e-160..=1.0).contains(&len_sq) {
                return p / len_sq.sqrt();
            }
        }
    }

    pub fn random_in_unit_disk<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Vec3::new(
                random_f64_range(rng, -1.0, 1.0),
                random_f64_range(rng, -1.0, 1.0),
                0.0,
            );
            if p.length_squared() <= 1.0 {
                return p;
            }
        }
    }

    pub fn reflect(v: &Self, n: &Self) -> Self {
        *v - 2.0 * v.dot(*n) * *n
    }

    /// Snell refraction of the unit vector `uv` through a surface with unit
    /// normal `n`. Assumes total internal reflection was already ruled out.
    pub fn refract(uv: &Vec3, n: &Vec3, etai_over_etat: f64) -> Vec3 {
        let cos_theta = (-*uv).dot(*n).min(1.0);
        let r_out_perp = etai_over_etat * (*uv + cos_theta * *n);
        let r_out_parallel = -((1.0 - r_out_perp.length_squared()).abs().sqrt()) * *n;
        r_out_perp + r_out_parallel
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Component-wise (Hadamard) product, used for color attenuation.
impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Self::Output {
        vec * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
