//! Full-frame rendering and image output.
//!
//! Walks every pixel of the image, asks the camera for a primary ray and
//! stores the traced colour in an [`ImageBuffer`].

use std::path::Path;
use std::time::Instant;

use image::{ImageError, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use whitted_core::Scene;
use whitted_math::Interval;

use crate::{Camera, Color, Tracer};

/// Errors that can occur while reading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub fov: f32,
    /// Maximum ray depth; 1 disables reflections
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            fov: 60.0,
            max_depth: 5,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that the configuration can produce an image.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size {}x{} has no pixels",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field of view {} must be between 0 and 180 degrees",
                self.fov
            )));
        }
        Ok(())
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov)
    }
}

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Cannot save an empty {0}x{1} image")]
    Empty(u32, u32),

    #[error("Image encoding error: {0}")]
    Image(#[from] ImageError),
}

/// Convert a linear colour to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let encode = |c: f32| (255.0 * Interval::UNIT.clamp(c)).round() as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Linear-colour pixel storage, indexed `[y][x]` with row 0 at the bottom.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Panics if (x, y) lies outside the image.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to an 8-bit image with the top row first.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, row| {
            Rgb(color_to_rgb(self.get_pixel(x, self.height - 1 - row)))
        })
    }

    /// Write the image to disk. The format follows the file extension.
    ///
    /// Failures are logged and returned; the buffer itself is untouched.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let path = path.as_ref();

        let result = if self.width == 0 || self.height == 0 {
            Err(SaveError::Empty(self.width, self.height))
        } else {
            log::info!("Saving {}x{} image to {}", self.width, self.height, path.display());
            self.to_rgb8().save(path).map_err(SaveError::from)
        };

        if let Err(e) = &result {
            log::error!("Failed to write image {}: {}", path.display(), e);
        }
        result
    }
}

/// Trace the primary ray through pixel (x, y).
#[inline]
pub fn render_pixel(camera: &Camera, tracer: &Tracer<'_>, x: u32, y: u32, max_depth: u32) -> Color {
    let ray = camera.generate_ray(x, y);
    tracer.trace(&ray, max_depth, None)
}

/// Render the entire scene to an image buffer, one row at a time.
///
/// Returns [`ConfigError::Invalid`] if the config does not validate.
pub fn render(scene: &Scene, config: &RenderConfig) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    let camera = config.camera();
    let tracer = Tracer::new(scene);
    let mut image = ImageBuffer::new(config.width, config.height);

    log::info!(
        "Rendering {}x{} (fov {}, depth {}): {} primitives, {} lights",
        config.width,
        config.height,
        config.fov,
        config.max_depth,
        scene.primitive_count(),
        scene.light_count()
    );
    let start = Instant::now();

    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(&camera, &tracer, x, y, config.max_depth);
            image.set_pixel(x, y, color);
        }
        if (y + 1) % 64 == 0 {
            log::debug!("Rendered {}/{} rows", y + 1, config.height);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
