//! Loading scene files from disk.

use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::scene::Scene;
use crate::scene_file::parser::{parse_scene, ParseError};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Read and parse a scene file.
///
/// # Example
///
/// ```ignore
/// use whitted_core::load_scene;
///
/// let scene = load_scene("scenes/demo.scene")?;
/// println!("{} primitives, {} lights", scene.primitive_count(), scene.light_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let start = Instant::now();

    let content = std::fs::read_to_string(path)?;
    let scene = parse_scene(&content)?;

    log::info!(
        "Loaded {} in {:?}: {} primitives, {} lights",
        path.display(),
        start.elapsed(),
        scene.primitive_count(),
        scene.light_count()
    );

    if scene.lights.is_empty() {
        log::warn!("{} has no lights; the image will be black", path.display());
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("whitted_core_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = temp_path("ok.scene");
        std::fs::write(&path, Scene::demo().to_string()).unwrap();

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.primitive_count(), 4);
        assert_eq!(scene.light_count(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scene(temp_path("does_not_exist.scene")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let path = temp_path("bad.scene");
        std::fs::write(&path, "sphere { 1 2 }").unwrap();

        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::FieldCount { .. })));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_shipped_demo_scene_matches_builtin() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenes/demo.scene");
        assert_eq!(load_scene(path).unwrap(), Scene::demo());
    }
}
