//! Render loop: per-pixel sampling and parallel row scheduling.
//!
//! Every pixel sample is an independent evaluation of the transport
//! kernel against an immutable scene, so rows render in parallel with
//! rayon. Each row task owns a seeded RNG; nothing mutable is shared.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use orb_core::{Scene, TraceOptions};
use orb_math::Vec3;

use crate::Camera;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Bounce budget handed to the transport kernel
    pub max_depth: u32,
    /// Kernel toggles
    pub options: TraceOptions,
    /// Base seed for the per-row RNGs; same seed, same image
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 64,
            max_depth: 5,
            options: TraceOptions::default(),
            seed: 0,
        }
    }
}

/// Average `samples_per_pixel` kernel evaluations for one pixel.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec3 {
    let mut pixel = Vec3::ZERO;
    for _ in 0..config.samples_per_pixel {
        let ray = camera.ray_for(x, y, rng);
        pixel += scene.trace(&ray, config.max_depth, &config.options, rng);
    }
    pixel / config.samples_per_pixel as f64
}

/// Render the whole image, one rayon task per row.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height;

    log::info!(
        "rendering {}x{} at {} spp, depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );

    let rows: Vec<Vec<Vec3>> = (0..height)
        .into_par_iter()
        .map(|y| {
            // One generator per row task keeps the kernel free of shared
            // mutable state; the mix keeps neighboring rows decorrelated
            let seed = config.seed ^ (y as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let mut rng = StdRng::seed_from_u64(seed);
            (0..width)
                .map(|x| render_pixel(scene, camera, x, y, config, &mut rng))
                .collect()
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, color) in row.into_iter().enumerate() {
            image.set(x as u32, y as u32, color);
        }
    }
    image
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert unnormalized radiance to 8-bit RGBA.
pub fn color_to_rgba(color: Vec3) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}
