//! Ray-plane intersection (closed-form).

use crate::hittable::{Hittable, SurfaceHit};
use whitted_core::Plane;
use whitted_math::{Ray, Vec3, PARALLEL_EPSILON};

impl Hittable for Plane {
    /// Returns a hit if the ray meets the plane at a non-negative t, or `None`
    /// if the ray is parallel to the plane or the plane is behind the origin.
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let normal = self.normal();
        let denom = ray.direction().dot(normal);

        // Ray is parallel to plane
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point() - ray.origin()).dot(normal) / denom;

        // Intersection is behind ray origin
        if t < 0.0 {
            return None;
        }

        Some(SurfaceHit::along(ray, t))
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal()
    }
}
