//! Whitted renderer - recursive ray tracing on the CPU
//!
//! Traces one primary ray per pixel through a pinhole camera, shades hits
//! with ambient, Lambert and Phong terms, casts shadow rays toward each
//! point light and follows mirror reflections up to a fixed depth.

mod camera;
mod hittable;
mod plane;
mod renderer;
mod sphere;
mod tracer;
mod triangle;

pub use camera::Camera;
pub use hittable::{face_forward, Hittable, SurfaceHit};
pub use renderer::{
    color_to_rgb, render, render_pixel, ConfigError, ConfigResult, ImageBuffer, RenderConfig,
    SaveError,
};
pub use tracer::{shade_light, Hit, Tracer, AMBIENT_FACTOR};

/// RGB colour in linear space, one channel per component.
pub type Color = Vec3;

/// Re-export common math types from whitted_math
pub use whitted_math::{Interval, Ray, Vec3};

/// Re-export scene types so callers only need one import
pub use whitted_core::{Light, Material, Scene};
