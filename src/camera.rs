use crate::prelude::*;

/// Placement and lens parameters a [`Camera`] is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub lookfrom: Point3,
    pub lookat: Point3,
    pub vup: Vec3,
    /// Vertical field of view in degrees.
    pub vfov: f64,
    pub aspect_ratio: f64,
    /// Lens diameter; zero gives a pinhole camera.
    pub aperture: f64,
    /// Distance to the plane of perfect focus.
    pub focus_dist: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lookfrom: Point3::zero(),
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            aspect_ratio: 1.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

/// Thin-lens camera. The basis is computed once in [`Camera::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self> {
        let CameraConfig {
            lookfrom,
            lookat,
            vup,
            vfov,
            aspect_ratio,
            aperture,
            focus_dist,
        } = config;

        if !(lookfrom.is_finite() && lookat.is_finite() && vup.is_finite()) {
            return Err(TracerError::DegenerateCamera("non-finite placement"));
        }
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(TracerError::DegenerateCamera("vfov must lie in (0, 180) degrees"));
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(TracerError::DegenerateCamera("aspect ratio must be positive"));
        }
        if !(aperture.is_finite() && aperture >= 0.0) {
            return Err(TracerError::DegenerateCamera("aperture must be non-negative"));
        }
        if !(focus_dist.is_finite() && focus_dist > 0.0) {
            return Err(TracerError::DegenerateCamera("focus distance must be positive"));
        }

        // Only exact degeneracy is rejected; arbitrarily small scenes are fine.
        let view = lookfrom - lookat;
        let w = view.normalized();
        if view.length_squared() == 0.0 || !w.is_finite() {
            return Err(TracerError::DegenerateCamera("lookfrom and lookat coincide"));
        }
        let side = vup.cross(w);
        let u = side.normalized();
        if side.length_squared() == 0.0 || !u.is_finite() {
            return Err(TracerError::DegenerateCamera("vup is parallel to the view direction"));
        }
        let v = w.cross(u);

        let theta = degrees_to_radians(vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = lookfrom - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        log::debug!(
            "camera at [{}] facing [{}], viewport {:.3}x{:.3}",
            lookfrom,
            -w,
            viewport_width,
            viewport_height
        );

        Ok(Self {
            origin: lookfrom,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        })
    }

    /// Ray through image-plane coordinates `(s, t)`, where `(0, 0)` is the
    /// lower-left corner and `(1, 1)` the upper-right. With a non-zero
    /// aperture the origin is jittered across the lens disk.
    pub fn get_ray<R: Rng>(&self, s: f64, t: f64, rng: &mut R) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * Vec3::random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::zero()
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }
}
