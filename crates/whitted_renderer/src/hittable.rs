//! Hittable trait for ray-primitive intersection.

use whitted_core::Shape;
use whitted_math::{Ray, Vec3};

/// Where a ray meets a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the intersection. May be negative; callers filter.
    pub t: f32,
    /// Point of intersection, `ray.at(t)`
    pub point: Vec3,
}

impl SurfaceHit {
    #[inline]
    pub(crate) fn along(ray: &Ray, t: f32) -> Self {
        Self { t, point: ray.at(t) }
    }
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable {
    /// Intersect the ray with this surface.
    ///
    /// Returns `None` when there is no real intersection, including the
    /// degenerate cases (ray parallel to a plane or triangle).
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit>;

    /// Geometric unit normal at a point on the surface.
    ///
    /// This is fixed by the geometry (sphere outward, plane as given, triangle
    /// by winding) and does not depend on the viewing direction.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

impl Hittable for Shape {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(s) => s.hit(ray),
            Shape::Plane(p) => p.hit(ray),
            Shape::Triangle(t) => t.hit(ray),
        }
    }

    #[inline]
    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Plane(p) => p.normal_at(point),
            Shape::Triangle(t) => t.normal_at(point),
        }
    }
}

/// Flip `normal` so it faces against the incoming ray direction.
///
/// Surfaces are two-sided for shading: a back-face hit is lit exactly like
/// the front face.
#[inline]
pub fn face_forward(normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) > 0.0 {
        -normal
    } else {
        normal
    }
}
