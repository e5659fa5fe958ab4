//! Ready-made scenes.

use crate::prelude::*;

/// Ground plus three spheres showing each material: diffuse in the middle,
/// glass on the left, polished gold on the right.
pub fn materials_scene() -> Result<HittableList> {
    let material_ground = Arc::new(Material::from(Lambertian::new(Color::new(0.5, 0.5, 0.5))));
    let material_center = Arc::new(Material::from(Lambertian::new(Color::new(0.7, 0.3, 0.3))));
    let material_left = Arc::new(Material::from(Dielectric::new(1.5)?));
    let material_right = Arc::new(Material::from(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0)));

    let mut world = HittableList::with_capacity(4)?;
    world.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, material_ground)?)?;
    world.add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, material_center)?)?;
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, material_left)?)?;
    world.add(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, material_right)?)?;

    log::debug!("materials scene: {} spheres", world.len());
    Ok(world)
}

/// A single reddish diffuse sphere resting on a large grey ground sphere.
pub fn two_sphere_scene() -> Result<HittableList> {
    let material_ground = Arc::new(Material::from(Lambertian::new(Color::new(0.5, 0.5, 0.5))));
    let material_center = Arc::new(Material::from(Lambertian::new(Color::new(0.7, 0.3, 0.3))));

    let mut world = HittableList::with_capacity(2)?;
    world.add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, material_center)?)?;
    world.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, material_ground)?)?;
    Ok(world)
}

/// Pinhole camera at the origin looking down -z with a 90 degree vertical
/// field of view.
pub fn default_camera(aspect_ratio: f64) -> Result<Camera> {
    Camera::new(CameraConfig {
        aspect_ratio,
        ..CameraConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materials_scene_layout() {
        let world = materials_scene().unwrap();
        assert_eq!(world.len(), 4);

        let layout: Vec<_> = world
            .objects()
            .iter()
            .map(|s| match s {
                Surface::Sphere(sphere) => {
                    let kind = match sphere.material() {
                        Material::Lambertian(_) => "lambertian",
                        Material::Metal(_) => "metal",
                        Material::Dielectric(_) => "dielectric",
                    };
                    (kind, sphere.center(), sphere.radius())
                }
            })
            .collect();
        assert_eq!(
            layout,
            [
                ("lambertian", Point3::new(0.0, -100.5, -1.0), 100.0),
                ("lambertian", Point3::new(0.0, 0.0, -1.0), 0.5),
                ("dielectric", Point3::new(-1.0, 0.0, -1.0), 0.5),
                ("metal", Point3::new(1.0, 0.0, -1.0), 0.5),
            ]
        );
    }

    #[test]
    fn test_two_sphere_scene_layout() {
        let world = two_sphere_scene().unwrap();
        let spheres: Vec<_> = world
            .objects()
            .iter()
            .map(|s| match s {
                Surface::Sphere(sphere) => (sphere.center(), sphere.radius()),
            })
            .collect();
        assert_eq!(
            spheres,
            [
                (Point3::new(0.0, 0.0, -1.0), 0.5),
                (Point3::new(0.0, -100.5, -1.0), 100.0),
            ]
        );
    }

    #[test]
    fn test_center_ray_hits_front_sphere() {
        let world = two_sphere_scene().unwrap();
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&r, Interval::new(0.001, INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-12);
    }
}
