//! Recursive path integration.

use crate::prelude::*;

/// Sky seen by rays that leave the scene: white at the horizon below,
/// blending to light blue straight up.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.direction.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

/// Radiance carried back along `r`.
///
/// `depth` is the number of bounces still allowed; once it reaches zero the
/// path contributes black.
pub fn ray_color<W, R>(r: &Ray, world: &W, depth: u32, rng: &mut R) -> Color
where
    W: Hittable + ?Sized,
    R: Rng,
{
    if depth == 0 {
        return Color::zero();
    }

    match world.hit(r, Interval::new(SHADOW_ACNE_EPSILON, INFINITY)) {
        Some(rec) => match rec.mat.scatter(r, &rec, rng) {
            Some(Scatter {
                attenuation,
                scattered,
            }) => attenuation * ray_color(&scattered, world, depth - 1, rng),
            None => Color::zero(),
        },
        None => background(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn single_sphere_world(mat: Material) -> HittableList {
        let mut world = HittableList::new();
        world
            .add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, Arc::new(mat)).unwrap())
            .unwrap();
        world
    }

    #[test]
    fn test_miss_returns_exact_background() {
        let world = single_sphere_world(Material::from(Lambertian::new(Color::one())));
        let mut rng = StdRng::seed_from_u64(0);

        for dir in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.3, 0.2, 1.0),
            Vec3::new(5.0, 0.0, 0.0),
        ] {
            let r = Ray::new(Point3::zero(), dir);
            let unit = dir.normalized();
            let t = 0.5 * (unit.y + 1.0);
            let expected = (1.0 - t) * Color::one() + t * Color::new(0.5, 0.7, 1.0);
            assert_eq!(ray_color(&r, &world, 50, &mut rng), expected);
        }
    }

    #[test]
    fn test_background_endpoints() {
        let up = background(&Ray::new(Point3::zero(), Vec3::new(0.0, 1.0, 0.0)));
        assert!(up.approx_eq(Color::new(0.5, 0.7, 1.0), 1e-12));
        let down = background(&Ray::new(Point3::zero(), Vec3::new(0.0, -1.0, 0.0)));
        assert!(down.approx_eq(Color::one(), 1e-12));
    }

    #[test]
    fn test_zero_depth_is_black() {
        let world = single_sphere_world(Material::from(Lambertian::new(Color::one())));
        let mut rng = StdRng::seed_from_u64(0);

        let hit = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let miss = Ray::new(Point3::zero(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&hit, &world, 0, &mut rng), Color::zero());
        assert_eq!(ray_color(&miss, &world, 0, &mut rng), Color::zero());
    }

    #[test]
    fn test_single_bounce_is_attenuated_background() {
        let albedo = Color::new(0.5, 0.25, 1.0);
        let world = single_sphere_world(Material::from(Metal::new(albedo, 0.0)));
        let mut rng = StdRng::seed_from_u64(0);

        // Straight into the mirror: reflects back along +z and escapes.
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let bounced = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let c = ray_color(&r, &world, 2, &mut rng);
        assert!(c.approx_eq(albedo * background(&bounced), 1e-12));

        // One bounce allowed: the reflected ray runs out of depth.
        assert_eq!(ray_color(&r, &world, 1, &mut rng), Color::zero());
    }

    #[test]
    fn test_absorbed_ray_is_black() {
        // Full fuzz at grazing incidence absorbs some rays; those must be black.
        let world = single_sphere_world(Material::from(Metal::new(Color::one(), 1.0)));
        let mut rng = StdRng::seed_from_u64(21);
        let r = Ray::new(Point3::new(-2.0, 0.4999, -1.0), Vec3::new(1.0, 0.0, 0.0));

        // Reflections off a convex sphere never return to it, so every
        // surviving path ends in the sky and only absorbed ones are black.
        let mut saw_black = false;
        let mut saw_sky = false;
        for _ in 0..200 {
            let c = ray_color(&r, &world, 50, &mut rng);
            if c == Color::zero() {
                saw_black = true;
            } else {
                saw_sky = true;
            }
        }
        assert!(saw_black && saw_sky);
    }
}
