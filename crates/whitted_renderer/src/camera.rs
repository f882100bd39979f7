//! Camera for primary ray generation.
//!
//! The camera sits at the origin looking down -Z with +Y up. Pixel offsets
//! from the image center are used directly as view-plane coordinates, and
//! the plane is placed far enough along -Z to span the horizontal field of
//! view.

use whitted_math::{IVec2, Ray, Vec3};

/// Pinhole camera for a fixed image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Cached computed value: z of the view plane
    plane_z: f32,
}

impl Camera {
    /// Create a camera. `fov_degrees` is the horizontal field of view.
    pub fn new(image_width: u32, image_height: u32, fov_degrees: f32) -> Self {
        let half_width = (image_width / 2) as f32;
        let half_fov = fov_degrees.to_radians() / 2.0;

        Self {
            image_width,
            image_height,
            plane_z: -half_width / half_fov.tan(),
        }
    }

    /// Pixel offset from the image center (integer, no half-pixel shift).
    fn pixel_offset(&self, x: u32, y: u32) -> IVec2 {
        IVec2::new(x as i32, y as i32)
            - IVec2::new((self.image_width / 2) as i32, (self.image_height / 2) as i32)
    }

    /// Generate the normalized primary ray through pixel (x, y).
    ///
    /// Row 0 is the bottom of the view; y grows upward.
    pub fn generate_ray(&self, x: u32, y: u32) -> Ray {
        let ndc = self.pixel_offset(x, y).as_vec2();
        let direction = Vec3::new(ndc.x, ndc.y, self.plane_z).normalize();
        Ray::new(Vec3::ZERO, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new(64, 64, 60.0);
        let ray = camera.generate_ray(32, 32);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_ray_is_normalized() {
        let camera = Camera::new(100, 50, 75.0);
        for (x, y) in [(0, 0), (99, 49), (13, 40), (50, 25)] {
            let ray = camera.generate_ray(x, y);
            assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_left_edge_matches_field_of_view() {
        // With 90 degrees, the left edge pixel sits at 45 degrees off axis
        let camera = Camera::new(200, 100, 90.0);
        let d = camera.generate_ray(0, 50).direction();
        assert!((d.x - d.z).abs() < 1e-5);
        assert!(d.x < 0.0);
        assert!(d.y.abs() < 1e-6);
    }

    #[test]
    fn test_y_grows_upward() {
        let camera = Camera::new(64, 64, 60.0);
        assert!(camera.generate_ray(32, 0).direction().y < 0.0);
        assert!(camera.generate_ray(32, 63).direction().y > 0.0);
    }
}
