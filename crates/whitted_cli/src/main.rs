//! whitted - render scene description files from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use whitted_core::{load_scene, Shape};
use whitted_renderer::{render, RenderConfig};

#[derive(Parser)]
#[command(name = "whitted")]
#[command(about = "Recursive Whitted-style ray tracer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image file
    Render {
        /// Scene description file
        scene: PathBuf,
        /// Output image (format determined by extension: .png, .ppm, .jpg, .bmp)
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
        /// JSON render config; flags below override its values
        #[arg(long)]
        config: Option<PathBuf>,
        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,
        /// Horizontal field of view in degrees
        #[arg(long)]
        fov: Option<f32>,
        /// Maximum ray depth (1 = no reflections)
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Display information about a scene file
    Info {
        /// Scene description file
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            scene,
            output,
            config,
            width,
            height,
            fov,
            depth,
        } => {
            let mut render_config = match config {
                Some(path) => RenderConfig::from_json_file(&path)
                    .with_context(|| format!("Failed to read render config {}", path.display()))?,
                None => RenderConfig::default(),
            };
            if let Some(width) = width {
                render_config.width = width;
            }
            if let Some(height) = height {
                render_config.height = height;
            }
            if let Some(fov) = fov {
                render_config.fov = fov;
            }
            if let Some(depth) = depth {
                render_config.max_depth = depth;
            }
            render_file(&scene, &output, &render_config)?;
        }
        Commands::Info { scene } => {
            show_info(&scene)?;
        }
    }

    Ok(())
}

fn render_file(scene_path: &Path, output: &Path, config: &RenderConfig) -> Result<()> {
    let scene = load_scene(scene_path)
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;

    let image = render(&scene, config)?;
    image
        .save_to_file(output)
        .with_context(|| format!("Failed to save image {}", output.display()))?;

    println!("Rendered {} to {}", scene_path.display(), output.display());
    Ok(())
}

fn show_info(scene_path: &Path) -> Result<()> {
    let scene = load_scene(scene_path)
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;

    println!("Scene: {}", scene_path.display());
    println!("  Lights: {}", scene.light_count());
    for (i, light) in scene.lights.iter().enumerate() {
        println!(
            "    #{}: position {:?}, intensity {:?}",
            i, light.position, light.intensity
        );
    }

    println!("  Primitives: {}", scene.primitive_count());
    for (i, primitive) in scene.primitives.iter().enumerate() {
        let geometry = match &primitive.shape {
            Shape::Sphere(s) => format!("center {:?}, radius {}", s.center, s.radius),
            Shape::Plane(p) => format!("normal {:?}, point {:?}", p.normal(), p.point()),
            Shape::Triangle(t) => format!("{:?} {:?} {:?}", t.p0, t.p1, t.p2),
        };
        let m = &primitive.material;
        println!("    #{}: {} {}", i, primitive.shape.keyword(), geometry);
        println!(
            "        diffuse {:?}, specular {:?}, exponent {}, reflectance {}",
            m.diffuse_colour, m.specular_colour, m.phong_exponent, m.reflectance
        );
    }

    Ok(())
}
