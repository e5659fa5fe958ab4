use crate::prelude::*;

/// A scattered continuation of an incoming ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Surface response models. Scatter dispatch is a plain `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// Returns `None` when the ray is absorbed.
    pub fn scatter<R: Rng>(&self, r_in: &Ray, rec: &HitRecord, rng: &mut R) -> Option<Scatter> {
        match self {
            Material::Lambertian(m) => Some(m.scatter(rec, rng)),
            Material::Metal(m) => m.scatter(r_in, rec, rng),
            Material::Dielectric(m) => Some(m.scatter(r_in, rec, rng)),
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    /// Never absorbs.
    pub fn scatter<R: Rng>(&self, rec: &HitRecord, rng: &mut R) -> Scatter {
        let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        }
        Scatter {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` is clamped to `[0, 1]`; NaN means a perfect mirror.
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        let fuzz = if fuzz.is_nan() { 0.0 } else { fuzz.clamp(0.0, 1.0) };
        Self { albedo, fuzz }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }

    /// Absorbs when the fuzzed reflection points back into the surface.
    pub fn scatter<R: Rng>(&self, r_in: &Ray, rec: &HitRecord, rng: &mut R) -> Option<Scatter> {
        let reflected = Vec3::reflect(&r_in.direction.normalized(), &rec.normal);
        let direction = reflected + self.fuzz * Vec3::random_in_unit_sphere(rng);
        if direction.dot(rec.normal) > 0.0 {
            Some(Scatter {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, direction),
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dielectric {
    refraction_index: f64,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Result<Self> {
        if !(refraction_index.is_finite() && refraction_index > 0.0) {
            return Err(TracerError::InvalidRefractionIndex(refraction_index));
        }
        Ok(Self { refraction_index })
    }

    pub fn refraction_index(&self) -> f64 {
        self.refraction_index
    }

    /// Schlick's approximation of the Fresnel reflectance.
    pub fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }

    pub fn scatter<R: Rng>(&self, r_in: &Ray, rec: &HitRecord, rng: &mut R) -> Scatter {
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = r_in.direction.normalized();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;
        let direction = if cannot_refract || random_f64(rng) < Self::reflectance(cos_theta, ri) {
            Vec3::reflect(&unit_direction, &rec.normal)
        } else {
            Vec3::refract(&unit_direction, &rec.normal, ri)
        };

        Scatter {
            attenuation: Color::one(),
            scattered: Ray::new(rec.p, direction),
        }
    }
}
