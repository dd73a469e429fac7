//! Orb Core - sphere scenes and recursive light transport.
//!
//! This crate provides:
//!
//! - **Materials**: diffuse / specular / refractive surface descriptions
//!   plus a catalog of named presets
//! - **Geometry**: the `Sphere` primitive with ray intersection
//! - **Scene**: sphere collection + point light, nested-dielectric
//!   containment precomputation, nearest-intersection queries, and the
//!   recursive transport kernel `Scene::trace`
//! - **Persistence**: the line-oriented scene text format (`format`)
//!
//! # Example
//!
//! ```ignore
//! use orb_core::{Material, Scene, Sphere, Light, TraceOptions};
//! use orb_math::{Ray, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.set_light(Light::new(Vec3::new(0.0, 20.0, 0.0), 300.0));
//! scene.add_sphere(Sphere::new(Vec3::ZERO, 5.0, Material::diffuse(Vec3::ONE)));
//! scene.precompute_inclusion()?;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 30.0), -Vec3::Z);
//! let radiance = scene.trace(&ray, 4, &TraceOptions::default(), &mut rng);
//! ```

pub mod format;
pub mod material;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use format::{parse, serialize, ParseError, SceneDescription};
pub use material::Material;
pub use scene::{Hit, Light, Scene, SceneError, TraceOptions};
pub use sphere::{Intersection, Sphere, SurfaceColor};
