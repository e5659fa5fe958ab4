use crate::prelude::*;

/// The scene: an ordered, unaccelerated list of surfaces.
#[derive(Debug, Default, Clone)]
pub struct HittableList {
    objects: Vec<Surface>,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut objects = Vec::new();
        objects.try_reserve(capacity)?;
        Ok(Self { objects })
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Appends a surface, surfacing allocation failure instead of aborting.
    pub fn add(&mut self, object: impl Into<Surface>) -> Result<()> {
        self.objects.try_reserve(1)?;
        self.objects.push(object.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Surface] {
        &self.objects
    }
}

impl Hittable for HittableList {
    /// Nearest hit across all surfaces: each accepted hit pulls the upper
    /// bound in to its `t`, so later surfaces can only win by being closer.
    fn hit<'a>(&'a self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest_hitrecord: Option<HitRecord<'a>> = None;
        let mut closest_so_far = ray_t.max;

        for object in self.objects.iter() {
            if let Some(hit_rec) = object.hit(r, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit_rec.t;
                closest_hitrecord = Some(hit_rec);
            }
        }

        closest_hitrecord
    }
}
