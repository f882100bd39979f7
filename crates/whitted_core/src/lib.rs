//! Whitted Core - Scene model and scene-file support.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Shape`, `Material`, `Light`
//! - **Scene files**: parsing, loading and writing the `.scene` block format
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scenes/demo.scene")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//! ```

pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use scene::{Light, Material, Plane, Primitive, Scene, Shape, Sphere, Triangle};
pub use scene_file::{load_scene, parse_scene, LoadError, ParseError};
