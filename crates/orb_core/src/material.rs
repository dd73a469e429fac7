//! Surface materials.
//!
//! A material carries three optical layers: a diffuse term (color scaled by
//! a free-standing diffusion coefficient), a mirror-like specular term, and
//! a dielectric refractive term. `specularity + refraction <= 1` is the
//! expected convention but is deliberately not enforced, and the diffusion
//! coefficient is an independent multiplier: some presets trade energy
//! conservation for looks, and that stays configurable data.

use orb_math::Vec3;

/// Per-surface optical description.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub color: Vec3,
    /// Diffuse multiplier applied to the indirect bounce (>= 0)
    pub diffusion: f64,
    /// Probability weight of the specular branch, in [0, 1]
    pub specularity: f64,
    /// Tint applied to specular reflections
    pub spec_color: Vec3,
    /// Probability weight of the refractive branch, in [0, 1]
    pub refraction: f64,
    /// Tint applied to transmitted light
    pub refr_color: Vec3,
    /// Refractive index of the sphere's interior (> 0)
    pub refr_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            diffusion: 1.0,
            specularity: 0.0,
            spec_color: Vec3::ONE,
            refraction: 0.0,
            refr_color: Vec3::ONE,
            refr_index: 1.0,
        }
    }
}

impl Material {
    /// Create a purely diffuse material with the given color.
    pub fn diffuse(color: Vec3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Create a specular (mirror-like) material.
    pub fn specular(spec_color: Vec3, specularity: f64) -> Self {
        Self {
            color: Vec3::ZERO,
            specularity,
            spec_color,
            ..Default::default()
        }
    }

    /// Create a refractive (dielectric) material.
    pub fn refractive(refr_color: Vec3, refraction: f64, refr_index: f64) -> Self {
        Self {
            color: Vec3::ZERO,
            refraction,
            refr_color,
            refr_index,
            ..Default::default()
        }
    }
}

const fn solid(r: f64, g: f64, b: f64) -> Material {
    Material {
        color: Vec3::new(r, g, b),
        diffusion: 1.0,
        specularity: 0.0,
        spec_color: Vec3::ONE,
        refraction: 0.0,
        refr_color: Vec3::ONE,
        refr_index: 1.0,
    }
}

const fn dielectric(index: f64) -> Material {
    Material {
        color: Vec3::ZERO,
        diffusion: 1.0,
        specularity: 0.0,
        spec_color: Vec3::ONE,
        refraction: 1.0,
        refr_color: Vec3::ONE,
        refr_index: index,
    }
}

/// Named material catalog used by the scene text format.
///
/// Serialization emits the preset name for any sphere whose material is an
/// exact match, so the entries here are part of the persistence contract.
pub const PRESETS: &[(&str, Material)] = &[
    ("white", solid(1.0, 1.0, 1.0)),
    ("red", solid(1.0, 0.0, 0.0)),
    ("green", solid(0.0, 1.0, 0.0)),
    ("blue", solid(0.0, 0.0, 1.0)),
    ("yellow", solid(1.0, 1.0, 0.0)),
    ("magenta", solid(1.0, 0.0, 1.0)),
    ("cyan", solid(0.0, 1.0, 1.0)),
    (
        "mirror",
        Material {
            color: Vec3::ZERO,
            diffusion: 1.0,
            specularity: 1.0,
            spec_color: Vec3::ONE,
            refraction: 0.0,
            refr_color: Vec3::ONE,
            refr_index: 1.0,
        },
    ),
    (
        "yellow_mirror",
        Material {
            color: Vec3::new(1.0, 1.0, 0.0),
            diffusion: 1.0,
            specularity: 0.5,
            spec_color: Vec3::new(1.0, 1.0, 0.0),
            refraction: 0.0,
            refr_color: Vec3::ONE,
            refr_index: 1.0,
        },
    ),
    ("glass", dielectric(1.5)),
    ("water", dielectric(1.33)),
    ("diamond", dielectric(2.4)),
    ("air", dielectric(1.0)),
];

/// Look up a preset material by name.
pub fn find_preset(name: &str) -> Option<&'static Material> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, material)| material)
}

/// Find the name of the preset exactly matching `material`, if any.
pub fn preset_name(material: &Material) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(_, preset)| preset == material)
        .map(|(name, _)| *name)
}
