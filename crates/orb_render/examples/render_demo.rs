//! Simple path tracer example.
//!
//! Renders a glass sphere with a bubble inside next to a mirror and a
//! multicolor sphere, and saves the result as PPM.

use std::fs::File;
use std::io::{BufWriter, Write};

use orb_core::{Light, Material, Scene, Sphere};
use orb_math::Vec3;
use orb_render::{color_to_rgba, render, Camera, ImageBuffer, RenderConfig};

fn main() {
    println!("orb - render demo");
    println!("=================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let camera = Camera::new(Vec3::new(0.0, 0.0, 55.0), 512, 512, 60.0);
    let config = RenderConfig {
        samples_per_pixel: 64,
        max_depth: 5,
        ..Default::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &camera, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.set_light(Light::new(Vec3::new(-20.0, 30.0, 40.0), 2500.0));

    // Glass ball with an air bubble inside (nested dielectrics)
    scene.add_sphere(Sphere::new(
        Vec3::new(-8.0, 0.0, 0.0),
        7.0,
        Material::refractive(Vec3::ONE, 1.0, 1.5),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(-8.0, 1.5, 0.0),
        3.0,
        Material::refractive(Vec3::ONE, 1.0, 1.0),
    ));

    // Mirror ball
    scene.add_sphere(Sphere::new(
        Vec3::new(9.0, 0.0, -4.0),
        7.0,
        Material::specular(Vec3::ONE, 1.0),
    ));

    // Demonstration texture
    scene.add_sphere(Sphere::multicolor(
        Vec3::new(0.0, -4.0, 12.0),
        3.0,
        Material::diffuse(Vec3::ONE),
    ));

    // Floor
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, -1007.0, 0.0),
        1000.0,
        Material::diffuse(Vec3::new(0.8, 0.8, 0.8)),
    ));

    scene
        .precompute_inclusion()
        .expect("demo scene geometry is valid");
    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;
    for pixel in &image.pixels {
        let [r, g, b, _] = color_to_rgba(*pixel);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    Ok(())
}
