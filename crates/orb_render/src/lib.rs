//! Orb Render - CPU render driver.
//!
//! Turns a finalized [`orb_core::Scene`] into an image: pinhole camera ray
//! generation, per-pixel multi-sampling, and a rayon row-parallel render
//! loop. The transport kernel itself lives in `orb_core`; this crate only
//! orchestrates independent per-pixel evaluations and converts the
//! resulting radiance to 8-bit color.

mod camera;
mod renderer;

pub use camera::Camera;
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer, RenderConfig};
