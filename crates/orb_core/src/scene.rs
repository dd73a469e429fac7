//! Scene: sphere collection, point light, and the recursive transport
//! kernel.
//!
//! Lifecycle: populate spheres and the light on one thread, call
//! [`Scene::precompute_inclusion`] exactly once, then treat the scene as
//! immutable. After that point `trace` is pure with respect to the scene
//! and any number of evaluations may run concurrently against it, each
//! with its own RNG.

use std::cmp::Ordering;
use std::f64::consts::PI;

use rand::{Rng, RngCore};
use thiserror::Error;

use orb_math::{local_to_canonical, uniform_hemisphere, Ray, Vec3};

use crate::sphere::Sphere;

/// Offset applied along the normal to keep secondary rays from
/// re-intersecting the surface they start on.
const SURFACE_EPS: f64 = 1e-3;

/// Errors reported by scene finalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Two refractive spheres intersect without one containing the other,
    /// so no consistent refractive-index assignment exists.
    #[error("refractive spheres overlap without nesting (sphere {0} vs sphere {1})")]
    OverlappingRefractive(usize, usize),
}

/// A single point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f64,
}

impl Light {
    pub fn new(position: Vec3, intensity: f64) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Closest intersection between a ray and the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the hit
    pub t: f64,
    /// Index of the hit sphere
    pub sphere: usize,
    /// Entering/exiting flag from the sphere intersection
    pub entering: bool,
}

/// Toggles for the transport kernel.
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    /// Replace raw material weights with Schlick reflectance at
    /// dielectric boundaries
    pub fresnel: bool,
    /// Evaluate the one-sample indirect diffuse bounce
    pub diffuse: bool,
    /// Evaluate both specular and refractive branches instead of
    /// stochastically collapsing to one
    pub deterministic: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            fresnel: true,
            diffuse: true,
            deterministic: false,
        }
    }
}

/// A renderable scene of spheres and one point light.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    inclusion: Vec<usize>,
    light: Option<Light>,
}

impl Scene {
    /// Create an empty scene with no light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the scene's point light.
    pub fn set_light(&mut self, light: Light) {
        self.light = Some(light);
    }

    /// Add a sphere. The scene owns its spheres for its whole lifetime;
    /// there is no removal.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn light(&self) -> Option<&Light> {
        self.light.as_ref()
    }

    /// The containment table: `inclusion()[i]` is the index of the
    /// smallest refractive sphere enclosing sphere i, or i itself.
    /// Valid only after [`Scene::precompute_inclusion`] succeeded.
    pub fn inclusion(&self) -> &[usize] {
        &self.inclusion
    }

    /// Precompute nested-dielectric containment.
    ///
    /// Refraction at a boundary needs the refractive index of the medium
    /// just outside the sphere; for nested transparent spheres that is the
    /// enclosing sphere's index rather than vacuum. This pass sorts the
    /// spheres by descending radius (any externally held sphere indices
    /// become invalid), then maps each refractive sphere to the smallest
    /// refractive sphere containing it.
    ///
    /// Fails if two refractive spheres overlap without one containing the
    /// other; the caller must refuse to render in that case. Must be called
    /// once, after setup and before any call to [`Scene::trace`].
    pub fn precompute_inclusion(&mut self) -> Result<(), SceneError> {
        self.spheres.sort_by(|a, b| {
            b.radius
                .partial_cmp(&a.radius)
                .unwrap_or(Ordering::Equal)
        });
        self.inclusion = (0..self.spheres.len()).collect();

        // The largest sphere cannot be contained by anything, so start at 1.
        for i in 1..self.spheres.len() {
            if !self.spheres[i].is_refractive() {
                continue;
            }
            // Scan previously placed refractive spheres, nearest radius first
            for j in (0..i).rev() {
                if !self.spheres[j].is_refractive() {
                    continue;
                }
                let d = (self.spheres[i].origin - self.spheres[j].origin).length();
                if d < self.spheres[j].radius - self.spheres[i].radius {
                    // Strictly inside: j is the smallest enclosing sphere
                    self.inclusion[i] = j;
                    break;
                } else if d < self.spheres[j].radius + self.spheres[i].radius {
                    return Err(SceneError::OverlappingRefractive(j, i));
                }
                // Disjoint: keep scanning toward smaller spheres
            }
        }

        log::debug!(
            "sphere inclusion precomputed for {} spheres",
            self.spheres.len()
        );
        Ok(())
    }

    /// Largest radius a new sphere centered at `origin` could have while
    /// staying disjoint from, or properly nested in, every existing sphere.
    /// Returns None when `origin` lies inside a non-transparent sphere.
    pub fn max_radius_new_sphere(&self, origin: Vec3) -> Option<f64> {
        let mut max = f64::INFINITY;
        for sphere in &self.spheres {
            let d = (origin - sphere.origin).length();
            if d < sphere.radius {
                if !sphere.is_refractive() {
                    return None;
                }
                max = max.min(sphere.radius - d);
            } else {
                max = max.min(d - sphere.radius);
            }
        }
        Some(max)
    }

    /// Closest strictly-positive intersection between `ray` and the scene.
    ///
    /// Linear scan; scenes are small and correctness beats throughput here.
    /// Exact ties resolve to the first sphere encountered.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<Hit> = None;
        for (i, sphere) in self.spheres.iter().enumerate() {
            if let Some(inter) = sphere.intersect(ray) {
                if closest.map_or(true, |hit| inter.t < hit.t) {
                    closest = Some(Hit {
                        t: inter.t,
                        sphere: i,
                        entering: inter.entering,
                    });
                }
            }
        }
        closest
    }

    /// Refractive index of the medium immediately outside sphere `i`:
    /// the enclosing sphere's index, or 1 (vacuum) if none.
    fn outside_index(&self, i: usize) -> f64 {
        debug_assert_eq!(self.inclusion.len(), self.spheres.len());
        let j = self.inclusion[i];
        if j == i {
            1.0
        } else {
            self.spheres[j].material.refr_index
        }
    }

    /// Recursive transport kernel: radiance carried back along `ray`.
    ///
    /// `depth` is the remaining bounce budget; recursion strictly decreases
    /// it, so stack growth is bounded by the caller. The returned radiance
    /// is unnormalized — clamping, gamma, and 8-bit conversion belong to
    /// the caller. A miss resolves to black.
    ///
    /// Requires a successful [`Scene::precompute_inclusion`] beforehand.
    pub fn trace(
        &self,
        ray: &Ray,
        depth: u32,
        options: &TraceOptions,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        let Some(hit) = self.intersect(ray) else {
            return Vec3::ZERO;
        };
        let sphere = &self.spheres[hit.sphere];

        let p = ray.at(hit.t);
        let nor = (p - sphere.origin).normalize();
        let inc = ray.direction();
        // Points nudged just outside / just inside the surface
        let p_out = p + SURFACE_EPS * nor;
        let p_in = p - SURFACE_EPS * nor;

        let mut specularity = sphere.material.specularity;
        let mut refraction = sphere.material.refraction;

        // Fresnel override: for a refractive-but-not-specular surface with
        // an actual index step, replace the raw weights with Schlick's
        // reflectance split.
        if options.fresnel && refraction > 0.0 && specularity == 0.0 {
            let n_outside = self.outside_index(hit.sphere);
            let n_inside = sphere.material.refr_index;
            if n_inside != n_outside {
                let (n1, n2) = if hit.entering {
                    (n_outside, n_inside)
                } else {
                    (n_inside, n_outside)
                };
                let k0 = ((n1 - n2) / (n1 + n2)).powi(2);
                let cos_i = inc.dot(nor);
                let reflectance = k0 + (1.0 - k0) * (1.0 - cos_i.abs()).powi(5);
                specularity = reflectance;
                refraction = 1.0 - reflectance;
            }
        }

        // Stochastic branch collapse: commit the whole contribution to one
        // branch per invocation; averaging many samples per pixel at the
        // caller recovers the mix.
        if !options.deterministic && specularity > 0.0 && refraction > 0.0 {
            let u: f64 = rng.gen();
            if u < refraction {
                specularity = 0.0;
            } else if u < refraction + specularity {
                refraction = 0.0;
            } else {
                // Draw past both weights (only possible when they sum
                // below 1): the sample falls through to the diffuse
                // branch at full weight
                specularity = 0.0;
                refraction = 0.0;
            }
        }

        let mut res = Vec3::ZERO;

        // Specular branch
        if hit.entering && specularity > 0.0 && depth > 0 {
            let reflected = (inc - 2.0 * inc.dot(nor) * nor).normalize();
            let bounced = self.trace(&Ray::new(p_out, reflected), depth - 1, options, rng);
            res += specularity * sphere.material.spec_color * bounced;
        }

        // Refractive branch (fires on both entry and exit hits)
        if refraction > 0.0 && depth > 0 {
            let n_outside = self.outside_index(hit.sphere);
            let n_inside = sphere.material.refr_index;
            let (n1, n2) = if hit.entering {
                (n_outside, n_inside)
            } else {
                (n_inside, n_outside)
            };
            let ratio = n1 / n2;

            // Normal oriented against the incident direction
            let n = if hit.entering { nor } else { -nor };
            let cos_i = -inc.dot(n);
            let disc = 1.0 - ratio * ratio * (1.0 - cos_i * cos_i);

            let inner = if disc < 0.0 {
                // Total internal reflection: mirror instead of transmit,
                // staying on the incident side of the boundary
                let reflected = (inc - 2.0 * inc.dot(nor) * nor).normalize();
                let origin = if hit.entering { p_out } else { p_in };
                self.trace(&Ray::new(origin, reflected), depth - 1, options, rng)
            } else {
                let dir = (ratio * inc + (ratio * cos_i - disc.sqrt()) * n).normalize();
                let origin = if hit.entering { p_in } else { p_out };
                self.trace(&Ray::new(origin, dir), depth - 1, options, rng)
            };

            // The weight and tint are charged once per physical path, on
            // the entering call; the paired exit call passes through.
            if hit.entering {
                res += refraction * sphere.material.refr_color * inner;
            } else {
                res += inner;
            }
        }

        // Diffuse branch
        if hit.entering && specularity + refraction < 1.0 {
            if let Some(light) = self.light {
                // Direct term: one shadow ray toward the light
                let to_light = light.position - p_out;
                let dist = to_light.length();
                let shadow = Ray::new(p_out, to_light / dist);
                let unobstructed = match self.intersect(&shadow) {
                    None => true,
                    Some(obstacle) => obstacle.t > dist,
                };
                if unobstructed {
                    let l = (light.position - p).normalize();
                    let c = l.dot(nor).max(0.0) * light.intensity
                        / (light.position - p).length_squared();
                    res += c * (1.0 - specularity - refraction) * sphere.color_at(p);
                }
            }

            // Indirect term: one hemisphere sample rotated into the
            // surface frame
            if options.diffuse && depth > 0 {
                let local = uniform_hemisphere(rng);
                let tangent = Vec3::new(-nor.y, nor.x, 0.0).normalize();
                let bitangent = nor.cross(tangent);
                let dir = local_to_canonical(local, tangent, bitangent, nor);
                let bounced = self.trace(&Ray::new(p_out, dir), depth - 1, options, rng);
                res += (1.0 / PI) * sphere.material.diffusion * sphere.color_at(p) * bounced;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn glass() -> Material {
        Material::refractive(Vec3::ONE, 1.0, 1.5)
    }

    #[test]
    fn test_inclusion_disjoint_spheres_self_mapped() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(-100.0, 0.0, 0.0), 5.0, glass()));
        scene.add_sphere(Sphere::new(Vec3::new(100.0, 0.0, 0.0), 3.0, glass()));

        scene.precompute_inclusion().unwrap();
        assert_eq!(scene.inclusion(), &[0, 1]);
    }

    #[test]
    fn test_inclusion_nested_maps_inner_to_outer() {
        let mut scene = Scene::new();
        // Inserted smallest first; the precompute reorders by radius
        scene.add_sphere(Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0, glass()));
        scene.add_sphere(Sphere::new(Vec3::ZERO, 10.0, glass()));

        scene.precompute_inclusion().unwrap();
        assert_eq!(scene.spheres()[0].radius, 10.0);
        assert_eq!(scene.inclusion(), &[0, 0]);
    }

    #[test]
    fn test_inclusion_overlap_is_an_error() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 5.0, glass()));
        scene.add_sphere(Sphere::new(Vec3::new(6.0, 0.0, 0.0), 4.0, glass()));

        assert_eq!(
            scene.precompute_inclusion(),
            Err(SceneError::OverlappingRefractive(0, 1))
        );
    }

    #[test]
    fn test_inclusion_ignores_opaque_spheres() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 10.0, glass()));
        // Opaque sphere inside the glass one: legal, and self-mapped
        scene.add_sphere(Sphere::new(Vec3::ZERO, 2.0, Material::diffuse(Vec3::ONE)));

        scene.precompute_inclusion().unwrap();
        assert_eq!(scene.inclusion(), &[0, 1]);
    }

    #[test]
    fn test_intersect_picks_nearest() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -20.0),
            1.0,
            Material::diffuse(Vec3::ONE),
        ));
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::diffuse(Vec3::ONE),
        ));
        scene.precompute_inclusion().unwrap();

        let hit = scene.intersect(&Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
        assert_eq!(hit.sphere, 1);
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!(hit.entering);
    }

    #[test]
    fn test_miss_is_black() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        scene.set_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 100.0));
        scene.precompute_inclusion().unwrap();

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        let color = scene.trace(&ray, 5, &TraceOptions::default(), &mut rng());
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_depth_zero_pure_specular_has_no_bounce() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 2.0, Material::specular(Vec3::ONE, 1.0)));
        scene.set_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 100.0));
        scene.precompute_inclusion().unwrap();

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        let color = scene.trace(&ray, 0, &TraceOptions::default(), &mut rng());
        // Fully specular surface: the diffuse weight is zero, and the
        // specular branch cannot fire with no budget left
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_depth_zero_pure_refractive_has_no_bounce() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 2.0, glass()));
        scene.set_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 100.0));
        scene.precompute_inclusion().unwrap();

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        let color = scene.trace(&ray, 0, &TraceOptions::default(), &mut rng());
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_direct_term_under_overhead_light() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        scene.set_light(Light::new(Vec3::new(0.0, 3.0, 0.0), 80.0));
        scene.precompute_inclusion().unwrap();

        // Hits the north pole (0, 1, 0), the point nearest the light:
        // cosine factor is 1, light distance is 2
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let options = TraceOptions {
            diffuse: false,
            ..Default::default()
        };
        let color = scene.trace(&ray, 3, &options, &mut rng());

        let expected = 80.0 / 4.0;
        assert!((color.x - expected).abs() < 1e-2);
        assert!((color.y - expected).abs() < 1e-2);
        assert!((color.z - expected).abs() < 1e-2);
        assert!(color.min_element() >= 0.0);
    }

    #[test]
    fn test_occluded_point_is_hard_shadowed() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        // Blocker between the sphere and the light
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Material::diffuse(Vec3::ONE),
        ));
        scene.set_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 100.0));
        scene.precompute_inclusion().unwrap();

        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), -Vec3::Y);
        let options = TraceOptions {
            diffuse: false,
            ..Default::default()
        };
        let color = scene.trace(&ray, 2, &options, &mut rng());
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_index_matched_sphere_passes_light_through() {
        // A refractive sphere with the same index as vacuum bends nothing:
        // the ray should reach the diffuse sphere behind it and pick up its
        // direct lighting as if the glass were absent.
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Material::refractive(Vec3::ONE, 1.0, 1.0),
        ));
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        // Light placed so the wall's shadow ray clears the glass sphere
        // (shadow rays treat transparent spheres as blockers)
        scene.set_light(Light::new(Vec3::new(0.0, 50.0, 50.0), 400.0));
        scene.precompute_inclusion().unwrap();

        let options = TraceOptions {
            diffuse: false,
            deterministic: true,
            ..Default::default()
        };
        let through = scene.trace(
            &Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z),
            4,
            &options,
            &mut rng(),
        );

        let mut bare = Scene::new();
        bare.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        bare.set_light(Light::new(Vec3::new(0.0, 50.0, 50.0), 400.0));
        bare.precompute_inclusion().unwrap();
        let direct = bare.trace(
            &Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z),
            4,
            &options,
            &mut rng(),
        );

        assert!(direct.x > 0.0);
        assert!((through - direct).length() < 1e-2);
    }

    #[test]
    fn test_total_internal_reflection_mirrors_inside_glass() {
        // Ray inside a glass sphere (n = 1.5) hitting the boundary at 60
        // degrees, past the ~41.8 degree critical angle: the refractive
        // branch must substitute a mirror reflection that stays inside.
        // A small lit diffuse sphere sits on the reflected path; the
        // transmitted direction would leave the scene and return black.
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 10.0, glass()));

        // Boundary point (0, 10, 0), incident direction 60 degrees off
        // the normal, reflected direction (sin60, -cos60, 0)
        let incident = Vec3::new(3.0_f64.sqrt() / 2.0, 0.5, 0.0);
        let reflected = Vec3::new(3.0_f64.sqrt() / 2.0, -0.5, 0.0);
        let boundary = Vec3::new(0.0, 10.0, 0.0);

        let target_center = boundary + 3.0 * reflected;
        scene.add_sphere(Sphere::new(
            target_center,
            0.5,
            Material::diffuse(Vec3::ONE),
        ));

        // Light inside the glass, 1.5 units off the target's facing point
        // along its normal, so the shadow ray clears the glass wall
        let target_hit = target_center - 0.5 * reflected;
        let light_pos = target_hit + 1.5 * -reflected;
        scene.set_light(Light::new(light_pos, 90.0));
        scene.precompute_inclusion().unwrap();

        let options = TraceOptions {
            diffuse: false,
            deterministic: true,
            ..Default::default()
        };
        let ray = Ray::new(boundary - 5.0 * incident, incident);
        let color = scene.trace(&ray, 2, &options, &mut rng());

        // Reflected path reaches the target head on: cosine factor 1,
        // light distance 1.5, passed through the exit hit unweighted
        let expected = 90.0 / (1.5 * 1.5);
        assert!((color.x - expected).abs() < 0.5, "got {}", color.x);
        assert!((color.y - expected).abs() < 0.5);
    }

    #[test]
    fn test_fresnel_splits_head_on_glass_hit() {
        // Head-on hit on glass (n = 1.5): Schlick gives k0 = 0.04, so in
        // deterministic mode 96% of the radiance behind the sphere comes
        // through and the 4% specular share reflects into empty space.
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, glass()));
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        scene.set_light(Light::new(Vec3::new(0.0, 50.0, 50.0), 400.0));
        scene.precompute_inclusion().unwrap();

        let options = TraceOptions {
            diffuse: false,
            deterministic: true,
            ..Default::default()
        };
        let through = scene.trace(
            &Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z),
            4,
            &options,
            &mut rng(),
        );

        let mut bare = Scene::new();
        bare.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));
        bare.set_light(Light::new(Vec3::new(0.0, 50.0, 50.0), 400.0));
        bare.precompute_inclusion().unwrap();
        let direct = bare.trace(
            &Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z),
            4,
            &options,
            &mut rng(),
        );

        let k0 = ((1.0_f64 - 1.5) / (1.0 + 1.5)).powi(2);
        assert!(direct.x > 0.0);
        assert!((through - (1.0 - k0) * direct).length() < 1e-3);
        assert!(through.x < direct.x);
    }

    #[test]
    fn test_max_radius_new_sphere() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 10.0, glass()));
        scene.add_sphere(Sphere::new(
            Vec3::new(30.0, 0.0, 0.0),
            2.0,
            Material::diffuse(Vec3::ONE),
        ));
        scene.precompute_inclusion().unwrap();

        // Inside the glass sphere: bounded by its wall
        let r = scene.max_radius_new_sphere(Vec3::new(4.0, 0.0, 0.0)).unwrap();
        assert!((r - 6.0).abs() < 1e-9);

        // Inside the opaque sphere: invalid placement
        assert!(scene
            .max_radius_new_sphere(Vec3::new(30.0, 0.0, 0.0))
            .is_none());

        // Out in the open: bounded by the nearest sphere surface
        let r = scene.max_radius_new_sphere(Vec3::new(0.0, 20.0, 0.0)).unwrap();
        assert!((r - 10.0).abs() < 1e-9);
    }
}
