use crate::prelude::*;

#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    mat: Arc<Material>,
}

impl Sphere {
    /// Rejects zero, negative and non-finite radii, and non-finite centers.
    pub fn new(center: Point3, radius: f64, mat: Arc<Material>) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TracerError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(TracerError::InvalidSettings("sphere center must be finite"));
        }
        Ok(Self {
            center,
            radius,
            mat,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.mat
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        if r.is_degenerate() {
            return None;
        }

        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root first, then the far one.
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some(HitRecord::new(r, root, outward_normal, &self.mat))
    }
}
