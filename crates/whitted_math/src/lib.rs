// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Smallest `t` accepted as a hit. Keeps secondary rays from re-hitting the
/// surface they start on.
pub const HIT_EPSILON: f32 = 1e-4;

/// Threshold below which a determinant or denominator is treated as zero
/// (ray parallel to a plane or triangle).
pub const PARALLEL_EPSILON: f32 = f32::EPSILON;

/// Reflect `v` about the normal `n`.
///
/// `n` is expected to be unit length. Returns `v - 2 (v . n) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_reflect_off_floor() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let reflected = reflect(incoming, Vec3::Y);
        assert_eq!(reflected, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let incoming = Vec3::new(0.3, -0.8, 0.52).normalize();
        let n = Vec3::new(0.0, 1.0, 1.0).normalize();
        let reflected = reflect(incoming, n);
        assert!((reflected.length() - 1.0).abs() < 1e-5);
        // Angle of incidence equals angle of reflection
        assert!((incoming.dot(n) + reflected.dot(n)).abs() < 1e-5);
    }
}
