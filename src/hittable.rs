use crate::prelude::*;

/// Result of a successful intersection test.
///
/// `normal` always has unit length and points against the incident ray;
/// `front_face` records whether that meant flipping the outward normal.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub mat: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Builds a record from an outward-facing unit normal, orienting it
    /// against `r`.
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, mat: &'a Material) -> Self {
        let mut rec = Self {
            p: r.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            mat,
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    #[inline]
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

pub trait Hittable: Send + Sync {
    fn hit<'a>(&'a self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// Every primitive a scene can hold.
#[derive(Debug, Clone)]
pub enum Surface {
    Sphere(Sphere),
}

impl Hittable for Surface {
    fn hit<'a>(&'a self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(r, ray_t),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}
