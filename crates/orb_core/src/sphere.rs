//! Sphere primitive for ray tracing.

use orb_math::{Ray, Vec3};

use crate::material::Material;

/// How a sphere colors its surface points.
///
/// A small closed set of strategies selected per sphere instance; the
/// transport kernel shades per point, so a variant can vary the color
/// across the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceColor {
    /// The material's color everywhere.
    Uniform,
    /// Demonstration texture: each channel follows the point's signed
    /// offset ratio along one axis, remapped from [-1, 1] into [0, 1].
    Multicolor,
}

/// Result of a ray/sphere intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit (strictly positive)
    pub t: f64,
    /// True when the ray crosses into the sphere's volume, false when the
    /// ray origin was inside and the hit is an exit
    pub entering: bool,
}

/// A sphere with a material and a surface-color strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f64,
    pub material: Material,
    pub surface: SurfaceColor,
}

impl Sphere {
    /// Create a uniformly colored sphere.
    pub fn new(origin: Vec3, radius: f64, material: Material) -> Self {
        Self {
            origin,
            radius,
            material,
            surface: SurfaceColor::Uniform,
        }
    }

    /// Create a sphere with the positional demonstration texture.
    pub fn multicolor(origin: Vec3, radius: f64, material: Material) -> Self {
        Self {
            origin,
            radius,
            material,
            surface: SurfaceColor::Multicolor,
        }
    }

    /// Whether the refractive branch can ever fire for this sphere.
    #[inline]
    pub fn is_refractive(&self) -> bool {
        self.material.refraction > 0.0
    }

    /// Intersect a ray with this sphere.
    ///
    /// Solves `t^2 + b t + c = 0` with `b = 2 d.(o-c)` and
    /// `c = |o-c|^2 - r^2` (unit-length direction assumed). The smaller
    /// positive root is an entrance; if only the larger root is positive
    /// the origin lies inside the sphere and the hit is an exit.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin() - self.origin;
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let delta = b * b - 4.0 * c;
        if delta < 0.0 {
            return None;
        }

        let sqrtd = delta.sqrt();

        let t1 = (-b - sqrtd) / 2.0;
        if t1 > 0.0 {
            return Some(Intersection {
                t: t1,
                entering: true,
            });
        }

        let t2 = (-b + sqrtd) / 2.0;
        if t2 > 0.0 {
            return Some(Intersection {
                t: t2,
                entering: false,
            });
        }

        None
    }

    /// Surface color at a point on (or near) the sphere.
    pub fn color_at(&self, p: Vec3) -> Vec3 {
        match self.surface {
            SurfaceColor::Uniform => self.material.color,
            SurfaceColor::Multicolor => {
                let ratio = (p - self.origin) / self.radius;
                (ratio + Vec3::ONE) / 2.0
            }
        }
    }
}
