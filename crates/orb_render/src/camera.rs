//! Pinhole camera for ray generation.
//!
//! The camera sits at a fixed position looking down -Z, matching the scene
//! format's `C x y z` line. Pixel (0, 0) is the top-left corner of the
//! image; rays are jittered inside the pixel for anti-aliasing.

use rand::{Rng, RngCore};

use orb_math::{Ray, Vec3};

/// Camera generating one primary ray per sample.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub image_width: u32,
    pub image_height: u32,
    /// Vertical field of view in degrees
    vfov: f64,
    /// Cached distance to the image plane in pixel units
    plane_dist: f64,
}

impl Camera {
    /// Create a camera at `position` with the given resolution and a
    /// vertical field of view in degrees.
    pub fn new(position: Vec3, image_width: u32, image_height: u32, vfov: f64) -> Self {
        let plane_dist = image_height as f64 / (2.0 * (vfov.to_radians() / 2.0).tan());
        Self {
            position,
            image_width,
            image_height,
            vfov,
            plane_dist,
        }
    }

    pub fn vfov(&self) -> f64 {
        self.vfov
    }

    /// Generate a ray through pixel (x, y), jittered within the pixel.
    pub fn ray_for(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let jx: f64 = rng.gen();
        let jy: f64 = rng.gen();

        let px = x as f64 + jx - self.image_width as f64 / 2.0;
        // Row 0 is the top of the image, +y points up in the scene
        let py = self.image_height as f64 / 2.0 - (y as f64 + jy);

        let direction = Vec3::new(px, py, -self.plane_dist).normalize();
        Ray::new(self.position, direction)
    }
}
