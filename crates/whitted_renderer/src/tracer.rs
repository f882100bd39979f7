//! Recursive Whitted-style tracer.
//!
//! For each ray: find the nearest primitive, shade it with ambient, Lambert
//! and Phong terms from every unshadowed light, then follow one mirror
//! bounce if the material is reflective. Every colour leaving `shade` and
//! `trace` is clamped to 1.0 per channel.

use whitted_core::{Light, Material, Scene};
use whitted_math::{reflect, Interval, Ray, Vec3, HIT_EPSILON};

use crate::hittable::{face_forward, Hittable};
use crate::Color;

/// Share of the diffuse colour that is always visible, lit or not.
pub const AMBIENT_FACTOR: f32 = 0.4;

/// The nearest intersection of a ray with the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the primitive in `Scene::primitives`
    pub index: usize,
    pub t: f32,
    pub point: Vec3,
}

/// Diffuse and specular light arriving from one unshadowed light.
///
/// `normal` must face the viewer; `view_direction` points from the eye to the
/// surface (the incoming ray direction).
pub fn shade_light(
    material: &Material,
    normal: Vec3,
    light_direction: Vec3,
    view_direction: Vec3,
    intensity: Color,
) -> Color {
    let n = normal.normalize();
    let l = light_direction.normalize();
    let n_dot_l = n.dot(l);

    let mut colour = material.diffuse_colour * intensity * n_dot_l.max(0.0);

    if material.phong_exponent > 0.0 && n_dot_l > 0.0 {
        let r = reflect(l, n);
        let highlight = view_direction.normalize().dot(r).max(0.0).powf(material.phong_exponent);
        colour += material.specular_colour * intensity * highlight;
    }

    colour
}

/// Traces rays against a borrowed, read-only scene.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// Nearest hit with `t > HIT_EPSILON`, skipping `exclude`.
    ///
    /// Ties keep the primitive that comes first in the scene.
    pub fn nearest_hit(&self, ray: &Ray, exclude: Option<usize>) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for (index, primitive) in self.scene.primitives.iter().enumerate() {
            if Some(index) == exclude {
                continue;
            }
            let Some(hit) = primitive.shape.hit(ray) else {
                continue;
            };
            if !Interval::FORWARD.surrounds(hit.t) {
                continue;
            }
            if closest.map_or(true, |c| hit.t < c.t) {
                closest = Some(Hit {
                    index,
                    t: hit.t,
                    point: hit.point,
                });
            }
        }

        closest
    }

    /// Whether anything other than primitive `hit_index` lies strictly between
    /// `point` and the light.
    pub fn in_shadow(&self, point: Vec3, light: &Light, hit_index: usize) -> bool {
        let to_light = light.position - point;
        let distance = to_light.length();
        if distance <= HIT_EPSILON {
            return false;
        }

        let shadow_ray = Ray::new(point, to_light / distance);
        let between = Interval::new(HIT_EPSILON, distance);

        self.scene
            .primitives
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != hit_index)
            .filter_map(|(_, primitive)| primitive.shape.hit(&shadow_ray))
            .any(|hit| between.surrounds(hit.t))
    }

    /// Direct lighting at a hit: ambient plus every unshadowed light, clamped.
    ///
    /// `normal` is the shading normal (already facing the viewer). A scene
    /// without lights shades everything black.
    pub fn shade(&self, hit: &Hit, normal: Vec3, view_direction: Vec3) -> Color {
        if self.scene.lights.is_empty() {
            return Color::ZERO;
        }

        let material = &self.scene.primitives[hit.index].material;
        let mut colour = material.diffuse_colour * AMBIENT_FACTOR;

        for light in &self.scene.lights {
            if self.in_shadow(hit.point, light, hit.index) {
                continue;
            }
            colour += shade_light(
                material,
                normal,
                light.position - hit.point,
                view_direction,
                light.intensity,
            );
        }

        colour.min(Color::ONE)
    }

    /// Colour seen along `ray`, following at most `depth - 1` reflections.
    ///
    /// `exclude` suppresses self-intersection with the primitive that
    /// spawned the ray.
    pub fn trace(&self, ray: &Ray, depth: u32, exclude: Option<usize>) -> Color {
        if depth == 0 {
            return Color::ZERO;
        }

        let Some(hit) = self.nearest_hit(ray, exclude) else {
            return Color::ZERO;
        };

        let primitive = &self.scene.primitives[hit.index];
        let direction = ray.direction().normalize();
        let normal = face_forward(primitive.shape.normal_at(hit.point), direction);

        let mut colour = self.shade(&hit, normal, direction);

        if primitive.material.is_reflective() {
            let reflected = Ray::new(hit.point, reflect(direction, normal));
            colour += primitive.material.reflectance
                * self.trace(&reflected, depth - 1, Some(hit.index));
        }

        colour.min(Color::ONE)
    }
}
