//! Scene data model.
//!
//! A scene is two ordered lists: primitives and point lights. Primitives are
//! addressed by their index in the list, which is also the parse order. The
//! renderer only ever borrows a scene immutably.

use whitted_math::Vec3;

/// Surface response of a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Lambertian colour, also drives the ambient term
    pub diffuse_colour: Vec3,

    /// Phong highlight colour
    pub specular_colour: Vec3,

    /// Phong shininess; 0 disables the highlight
    pub phong_exponent: f32,

    /// Fraction of mirror-reflected light, in [0, 1]
    pub reflectance: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_colour: Vec3::new(0.5, 0.5, 0.5), // Grey default
            specular_colour: Vec3::ZERO,
            phong_exponent: 0.0,
            reflectance: 0.0,
        }
    }
}

impl Material {
    /// Create a material. `reflectance` is clamped to [0, 1].
    pub fn new(
        diffuse_colour: Vec3,
        specular_colour: Vec3,
        phong_exponent: f32,
        reflectance: f32,
    ) -> Self {
        Self {
            diffuse_colour,
            specular_colour,
            phong_exponent,
            reflectance: reflectance.clamp(0.0, 1.0),
        }
    }

    /// A matte material with only a diffuse colour.
    pub fn diffuse(colour: Vec3) -> Self {
        Self {
            diffuse_colour: colour,
            ..Default::default()
        }
    }

    /// Add a Phong highlight.
    pub fn with_specular(mut self, colour: Vec3, phong_exponent: f32) -> Self {
        self.specular_colour = colour;
        self.phong_exponent = phong_exponent;
        self
    }

    /// Set the mirror reflectance (clamped to [0, 1]).
    pub fn with_reflectance(mut self, reflectance: f32) -> Self {
        self.reflectance = reflectance.clamp(0.0, 1.0);
        self
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.reflectance > 0.0
    }
}

/// A sphere given by its center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An infinite plane through `point` with a unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized here; a zero normal yields NaNs,
    /// so callers reading untrusted input must reject it first.
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize(),
            point,
        }
    }

    /// Unit normal of the plane.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// A point on the plane.
    #[inline]
    pub fn point(&self) -> Vec3 {
        self.point
    }
}

/// A triangle. The winding `p0 -> p1 -> p2` fixes which side the normal faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
}

impl Triangle {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Area of the triangle.
    pub fn area(&self) -> f32 {
        0.5 * (self.p1 - self.p0).cross(self.p2 - self.p0).length()
    }

    /// Zero-area triangles can never be hit.
    pub fn is_degenerate(&self) -> bool {
        self.area() <= f32::EPSILON
    }
}

/// Geometry of a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Shape {
    /// Scene-file keyword for this shape.
    pub fn keyword(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Triangle(_) => "triangle",
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// A shape paired with its material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }
}

/// A point light. Intensity components may exceed 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Vec3,
}

impl Light {
    pub fn new(position: Vec3, intensity: Vec3) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// A unit-intensity white light.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Vec3::ONE)
    }
}

/// Everything the tracer needs to render a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Primitives in insertion order; the index is the primitive's identity
    pub primitives: Vec<Primitive>,

    /// Lights in insertion order
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive and return its index.
    pub fn add_primitive(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Builder form of [`Scene::add_primitive`].
    pub fn with_primitive(mut self, shape: impl Into<Shape>, material: Material) -> Self {
        self.add_primitive(Primitive::new(shape, material));
        self
    }

    /// Builder form of [`Scene::add_light`].
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    /// Get the number of primitives.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check if the scene has neither primitives nor lights.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.lights.is_empty()
    }

    /// The stock scene: a glossy sphere resting in front of a leaning wall made
    /// of two triangles, on a grey floor, lit by one white light.
    pub fn demo() -> Self {
        let wall = Material::diffuse(Vec3::new(0.2, 0.35, 0.8)).with_specular(Vec3::splat(0.3), 20.0);

        Scene::new()
            .with_light(Light::white(Vec3::new(0.0, 2.5, -7.75)))
            .with_primitive(
                Sphere::new(Vec3::new(0.9, -1.925, -6.69), 0.825),
                Material::new(Vec3::new(0.8, 0.15, 0.1), Vec3::ONE, 60.0, 0.3),
            )
            .with_primitive(
                Triangle::new(
                    Vec3::new(-0.4, -2.75, -9.55),
                    Vec3::new(-0.93, 0.55, -8.51),
                    Vec3::new(0.11, -2.75, -7.98),
                ),
                wall,
            )
            .with_primitive(
                Triangle::new(
                    Vec3::new(0.11, -2.75, -7.98),
                    Vec3::new(-0.93, 0.55, -8.51),
                    Vec3::new(-1.46, -2.75, -7.47),
                ),
                wall,
            )
            .with_primitive(
                Plane::new(Vec3::Y, Vec3::new(0.0, -2.75, 0.0)),
                Material::diffuse(Vec3::splat(0.6)).with_reflectance(0.1),
            )
    }
}
