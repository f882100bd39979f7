//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run -p whitted_core --example inspect_scene -- scenes/demo.scene

use std::env;

use whitted_core::{load_scene, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-file>");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== {} ===", path);
            println!("Primitives: {}", scene.primitive_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.primitives.iter().enumerate() {
                let m = &primitive.material;
                match &primitive.shape {
                    Shape::Sphere(s) => println!(
                        "  [{}] sphere at ({:.2}, {:.2}, {:.2}) r={:.2}",
                        i, s.center.x, s.center.y, s.center.z, s.radius
                    ),
                    Shape::Plane(p) => println!(
                        "  [{}] plane n=({:.2}, {:.2}, {:.2})",
                        i,
                        p.normal().x,
                        p.normal().y,
                        p.normal().z
                    ),
                    Shape::Triangle(t) => println!("  [{}] triangle area={:.3}", i, t.area()),
                }
                println!(
                    "       diffuse=({:.2}, {:.2}, {:.2}) phong={} reflectance={}",
                    m.diffuse_colour.x, m.diffuse_colour.y, m.diffuse_colour.z, m.phong_exponent, m.reflectance
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2})",
                    i, light.position.x, light.position.y, light.position.z
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
