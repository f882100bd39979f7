//! Scene description writer.
//!
//! Emits the block format read by [`parse_scene`](super::parse_scene). Lights
//! are written first, then primitives, so both lists keep their order. `f32`
//! `Display` output is the shortest string that parses back to the same bits,
//! so a write/parse cycle is lossless.

use std::fmt::{self, Display, Formatter};

use whitted_math::Vec3;

use crate::scene::{Light, Material, Primitive, Scene, Shape};

struct Row(Vec3);

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "    {} {} {}", self.0.x, self.0.y, self.0.z)
    }
}

fn write_material(f: &mut Formatter<'_>, m: &Material) -> fmt::Result {
    writeln!(f, "{}", Row(m.diffuse_colour))?;
    writeln!(f, "{}", Row(m.specular_colour))?;
    writeln!(f, "    {} {}", m.phong_exponent, m.reflectance)
}

impl Display for Light {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "light {{")?;
        writeln!(f, "{}", Row(self.position))?;
        writeln!(f, "{}", Row(self.intensity))?;
        writeln!(f, "}}")
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.shape.keyword())?;
        match &self.shape {
            Shape::Sphere(s) => {
                writeln!(f, "{}", Row(s.center))?;
                writeln!(f, "    {}", s.radius)?;
            }
            Shape::Plane(p) => {
                writeln!(f, "{}", Row(p.normal()))?;
                writeln!(f, "{}", Row(p.point()))?;
            }
            Shape::Triangle(t) => {
                writeln!(f, "{}", Row(t.p0))?;
                writeln!(f, "{}", Row(t.p1))?;
                writeln!(f, "{}", Row(t.p2))?;
            }
        }
        write_material(f, &self.material)?;
        writeln!(f, "}}")
    }
}

impl Display for Scene {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {} lights, {} primitives",
            self.light_count(),
            self.primitive_count()
        )?;
        for light in &self.lights {
            writeln!(f)?;
            write!(f, "{}", light)?;
        }
        for primitive in &self.primitives {
            writeln!(f)?;
            write!(f, "{}", primitive)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Plane, Sphere, Triangle};
    use crate::scene_file::parse_scene;

    fn sample_scene() -> Scene {
        Scene::new()
            .with_light(Light::new(Vec3::new(0.0, 5.0, -5.0), Vec3::new(1.5, 1.0, 0.25)))
            .with_light(Light::white(Vec3::new(-3.0, 2.0, 1.0)))
            .with_primitive(
                Sphere::new(Vec3::new(0.1, -0.2, -5.3), 1.25),
                Material::new(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.7), 64.0, 0.35),
            )
            .with_primitive(
                Triangle::new(
                    Vec3::new(-1.0, 0.0, -6.0),
                    Vec3::new(1.0, 0.0, -6.0),
                    Vec3::new(0.0, 1.0, -6.0 / 7.0),
                ),
                Material::diffuse(Vec3::new(0.1, 0.2, 0.3)),
            )
            .with_primitive(
                Plane::new(Vec3::new(0.0, 1.0, 0.2), Vec3::new(0.0, -1.0, 0.0)),
                Material::diffuse(Vec3::splat(0.5)).with_reflectance(1.0),
            )
    }

    #[test]
    fn test_write_then_parse_reproduces_scene() {
        let scene = sample_scene();
        let text = scene.to_string();
        let parsed = parse_scene(&text).unwrap();

        assert_eq!(parsed.light_count(), 2);
        assert_eq!(parsed.primitive_count(), 3);
        assert_eq!(parsed.lights, scene.lights);
        assert_eq!(parsed.primitives[0], scene.primitives[0]);
        assert_eq!(parsed.primitives[1], scene.primitives[1]);

        // The plane normal is renormalized on parse, which may move the last bit
        match (parsed.primitives[2].shape, scene.primitives[2].shape) {
            (Shape::Plane(a), Shape::Plane(b)) => {
                assert!((a.normal() - b.normal()).length() < 1e-6);
                assert_eq!(a.point(), b.point());
            }
            other => panic!("expected planes, got {:?}", other),
        }
        assert_eq!(parsed.primitives[2].material, scene.primitives[2].material);
    }

    #[test]
    fn test_empty_scene_writes_header_only() {
        let text = Scene::new().to_string();
        assert_eq!(text, "# 0 lights, 0 primitives\n");
        assert!(parse_scene(&text).unwrap().is_empty());
    }

    #[test]
    fn test_light_block_layout() {
        let text = Light::white(Vec3::new(0.0, 2.5, -7.75)).to_string();
        assert_eq!(text, "light {\n    0 2.5 -7.75\n    1 1 1\n}\n");
    }
}
