//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::hittable::{Hittable, SurfaceHit};
use whitted_core::Triangle;
use whitted_math::{Interval, Ray, Vec3, PARALLEL_EPSILON};

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let edge1 = self.p1 - self.p0;
        let edge2 = self.p2 - self.p0;

        let pvec = ray.direction().cross(edge2);
        let det = edge1.dot(pvec);

        // Ray is parallel to triangle (or the triangle has no area)
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin() - self.p0;

        // Barycentric weight of p1
        let beta = tvec.dot(pvec) * inv_det;
        if !Interval::UNIT.contains(beta) {
            return None;
        }

        // Barycentric weight of p2
        let qvec = tvec.cross(edge1);
        let gamma = ray.direction().dot(qvec) * inv_det;
        if gamma < 0.0 || beta + gamma > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        Some(SurfaceHit::along(ray, t))
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        (self.p0 - self.p1).cross(self.p1 - self.p2).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle in XY plane at z=-1
    fn facing_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
    }

    /// Barycentric coordinates of `p` by sub-triangle areas.
    fn barycentric(tri: &Triangle, p: Vec3) -> (f32, f32, f32) {
        let n = (tri.p1 - tri.p0).cross(tri.p2 - tri.p0);
        let area = n.length_squared();
        let alpha = (tri.p1 - p).cross(tri.p2 - p).dot(n) / area;
        let beta = (tri.p2 - p).cross(tri.p0 - p).dot(n) / area;
        let gamma = (tri.p0 - p).cross(tri.p1 - p).dot(n) / area;
        (alpha, beta, gamma)
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = facing_triangle().hit(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_triangle_miss() {
        // Passes beside the triangle
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(facing_triangle().hit(&ray).is_none());
    }

    #[test]
    fn test_triangle_behind_is_reported() {
        // Intersection behind the origin comes back with negative t
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let hit = facing_triangle().hit(&ray).unwrap();
        assert!((hit.t + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::X);
        assert!(facing_triangle().hit(&ray).is_none());
    }

    #[test]
    fn test_degenerate_triangle_never_hit() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let ray = Ray::new(Vec3::new(0.5, 1.0, 0.0), Vec3::NEG_Y);
        assert!(tri.hit(&ray).is_none());
    }

    #[test]
    fn test_hit_points_have_valid_barycentrics() {
        let tri = Triangle::new(
            Vec3::new(-0.4, -2.75, -9.55),
            Vec3::new(-0.93, 0.55, -8.51),
            Vec3::new(0.11, -2.75, -7.98),
        );

        let mut hits = 0;
        for i in -20..=20 {
            for j in -20..=20 {
                let dir = Vec3::new(i as f32 * 0.01, j as f32 * 0.02 - 0.1, -1.0);
                let ray = Ray::new(Vec3::ZERO, dir);
                if let Some(hit) = tri.hit(&ray) {
                    hits += 1;
                    let (a, b, g) = barycentric(&tri, hit.point);
                    for w in [a, b, g] {
                        assert!((-1e-4..=1.0 + 1e-4).contains(&w), "weight {} out of range", w);
                    }
                    assert!((a + b + g - 1.0).abs() < 1e-4);
                }
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_normal_follows_winding() {
        assert!((facing_triangle().normal_at(Vec3::ZERO) - Vec3::Z).length() < 1e-6);

        let flipped = Triangle::new(
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        );
        assert!((flipped.normal_at(Vec3::ZERO) + Vec3::Z).length() < 1e-6);
    }
}
