//! orb - render a sphere scene file to a PNG.
//!
//! Usage:
//!   orb <scene.txt> <out.png> [--size W H] [--samples N] [--depth N]
//!       [--seed N] [--no-fresnel] [--no-diffuse] [--deterministic]

use anyhow::{bail, Context, Result};

use orb_core::format;
use orb_math::Vec3;
use orb_render::{render, Camera, RenderConfig};

struct Args {
    scene_path: String,
    output_path: String,
    width: u32,
    height: u32,
    config: RenderConfig,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut width = 512;
    let mut height = 512;
    let mut config = RenderConfig::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                width = next_value(&mut args, "--size")?;
                height = next_value(&mut args, "--size")?;
            }
            "--samples" => config.samples_per_pixel = next_value(&mut args, "--samples")?,
            "--depth" => config.max_depth = next_value(&mut args, "--depth")?,
            "--seed" => config.seed = next_value(&mut args, "--seed")?,
            "--no-fresnel" => config.options.fresnel = false,
            "--no-diffuse" => config.options.diffuse = false,
            "--deterministic" => config.options.deterministic = true,
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'"),
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        bail!("usage: orb <scene.txt> <out.png> [--size W H] [--samples N] [--depth N] [--seed N] [--no-fresnel] [--no-diffuse] [--deterministic]");
    }
    let mut positional = positional.into_iter();
    Ok(Args {
        scene_path: positional.next().unwrap_or_default(),
        output_path: positional.next().unwrap_or_default(),
        width,
        height,
        config,
    })
}

fn next_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T> {
    let value = args
        .next()
        .with_context(|| format!("{flag} expects a value"))?;
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid value '{value}' for {flag}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let text = std::fs::read_to_string(&args.scene_path)
        .with_context(|| format!("failed to read scene file '{}'", args.scene_path))?;
    let description = format::parse(&text)
        .with_context(|| format!("failed to parse scene file '{}'", args.scene_path))?;

    let mut scene = description.scene;
    scene
        .precompute_inclusion()
        .context("invalid scene geometry, refusing to render")?;

    let camera_position = description.camera.unwrap_or(Vec3::new(0.0, 0.0, 55.0));
    let camera = Camera::new(camera_position, args.width, args.height, 60.0);

    log::info!(
        "scene '{}': {} spheres, camera at {:?}",
        args.scene_path,
        scene.spheres().len(),
        camera_position
    );

    let image = render(&scene, &camera, &args.config);

    let rgba = image.to_rgba();
    let png = image::RgbaImage::from_raw(image.width, image.height, rgba)
        .context("render produced a malformed buffer")?;
    png.save(&args.output_path)
        .with_context(|| format!("failed to write '{}'", args.output_path))?;

    log::info!("wrote {}", args.output_path);
    Ok(())
}
