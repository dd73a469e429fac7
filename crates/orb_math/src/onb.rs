//! Local orthonormal frames and hemisphere sampling.
//!
//! The diffuse bounce samples a direction in a local frame with z as the
//! surface normal, then rotates it into canonical coordinates.

use std::f64::consts::PI;

use rand::{Rng, RngCore};

use crate::Vec3;

/// Convert a vector expressed in the local orthonormal basis (u, v, w)
/// into canonical coordinates.
#[inline]
pub fn local_to_canonical(local: Vec3, u: Vec3, v: Vec3, w: Vec3) -> Vec3 {
    local.x * u + local.y * v + local.z * w
}

/// Sample a direction on the upper hemisphere (z up, local coordinates).
///
/// Uses two uniform draws r1, r2 and returns
/// `(cos(2*pi*r1)*sqrt(1-r2), sin(2*pi*r1)*sqrt(1-r2), sqrt(r2))`.
///
/// Note: this is a uniform-style mapping, not the cosine-weighted one the
/// diffuse estimator's 1/pi constant assumes. The mismatch is kept as-is
/// to reproduce the reference renders.
pub fn uniform_hemisphere(rng: &mut dyn RngCore) -> Vec3 {
    let r1: f64 = rng.gen();
    let r2: f64 = rng.gen();
    let t = (1.0 - r2).sqrt();

    Vec3::new((2.0 * PI * r1).cos() * t, (2.0 * PI * r1).sin() * t, r2.sqrt())
}
