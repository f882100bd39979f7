//! Ray-sphere intersection.

use crate::hittable::{Hittable, SurfaceHit};
use whitted_core::Sphere;
use whitted_math::{Ray, Vec3};

impl Hittable for Sphere {
    /// Solve `a t^2 + b t + c = 0` and return the nearer root, whatever its sign.
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;

        let a = d.dot(d);
        let b = 2.0 * d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        if a == 0.0 {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // a > 0, so subtracting the root gives the smaller t
        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        Some(SurfaceHit::along(ray, t))
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
