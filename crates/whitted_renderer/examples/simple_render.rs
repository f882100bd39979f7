//! Simple ray tracer example.
//!
//! Renders the built-in demo scene and saves it as a PNG.

use whitted_renderer::{render, RenderConfig, Scene};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    let scene = Scene::demo();
    println!(
        "Scene: {} primitives, {} lights",
        scene.primitive_count(),
        scene.light_count()
    );

    let config = RenderConfig {
        width: 400,
        height: 400,
        ..Default::default()
    };

    let start = std::time::Instant::now();
    let image = match render(&scene, &config) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Invalid render config: {}", e);
            std::process::exit(1);
        }
    };
    println!("Rendered {}x{} in {:?}", image.width, image.height, start.elapsed());

    let filename = "output.png";
    match image.save_to_file(filename) {
        Ok(()) => println!("Saved to {}", filename),
        Err(e) => {
            eprintln!("Failed to save {}: {}", filename, e);
            std::process::exit(1);
        }
    }
}
