//! Line-oriented scene text format.
//!
//! The grammar is part of the persistence contract and must stay
//! bit-compatible:
//!
//! - lines starting with `#` are comments, blank lines are skipped
//! - `L x y z intensity` sets the point light
//! - `C x y z` sets the camera position (handed back to the driver, the
//!   scene itself does not store it)
//! - `S x y z radius <preset>` adds a sphere with a named material
//! - `S x y z radius object r g b` adds a sphere with an explicit diffuse
//!   color
//! - `S x y z radius multicolor` adds a sphere with the positional
//!   demonstration texture
//!
//! Serialization searches the preset catalog for an exact material match
//! and emits the preset name when found, falling back to `object r g b`.

use thiserror::Error;

use orb_math::Vec3;

use crate::material::{find_preset, preset_name, Material};
use crate::scene::{Light, Scene};
use crate::sphere::{Sphere, SurfaceColor};

/// Errors that can occur while parsing a scene file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unknown directive '{directive}'")]
    UnknownDirective { line: usize, directive: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown material '{name}'")]
    UnknownMaterial { line: usize, name: String },
}

/// A parsed scene file: the scene plus the camera position the driver
/// consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub scene: Scene,
    pub camera: Option<Vec3>,
}

fn number(token: &str, line: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

fn expect_fields(tokens: &[&str], expected: usize, line: usize) -> Result<(), ParseError> {
    if tokens.len() != expected {
        return Err(ParseError::WrongFieldCount {
            line,
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

/// Parse a scene description from text.
///
/// The returned scene has not been finalized; the caller still runs
/// [`Scene::precompute_inclusion`] before rendering.
pub fn parse(text: &str) -> Result<SceneDescription, ParseError> {
    let mut scene = Scene::new();
    let mut camera = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens[0] {
            "L" => {
                expect_fields(&tokens, 5, line)?;
                let position = Vec3::new(
                    number(tokens[1], line)?,
                    number(tokens[2], line)?,
                    number(tokens[3], line)?,
                );
                scene.set_light(Light::new(position, number(tokens[4], line)?));
            }
            "C" => {
                expect_fields(&tokens, 4, line)?;
                camera = Some(Vec3::new(
                    number(tokens[1], line)?,
                    number(tokens[2], line)?,
                    number(tokens[3], line)?,
                ));
            }
            "S" => {
                if tokens.len() < 6 {
                    return Err(ParseError::WrongFieldCount {
                        line,
                        expected: 6,
                        found: tokens.len(),
                    });
                }
                let origin = Vec3::new(
                    number(tokens[1], line)?,
                    number(tokens[2], line)?,
                    number(tokens[3], line)?,
                );
                let radius = number(tokens[4], line)?;

                let sphere = match tokens[5] {
                    "object" => {
                        expect_fields(&tokens, 9, line)?;
                        let color = Vec3::new(
                            number(tokens[6], line)?,
                            number(tokens[7], line)?,
                            number(tokens[8], line)?,
                        );
                        Sphere::new(origin, radius, Material::diffuse(color))
                    }
                    "multicolor" => {
                        expect_fields(&tokens, 6, line)?;
                        Sphere::multicolor(origin, radius, Material::diffuse(Vec3::ONE))
                    }
                    name => {
                        expect_fields(&tokens, 6, line)?;
                        let material =
                            find_preset(name).ok_or_else(|| ParseError::UnknownMaterial {
                                line,
                                name: name.to_string(),
                            })?;
                        Sphere::new(origin, radius, material.clone())
                    }
                };
                scene.add_sphere(sphere);
            }
            directive => {
                return Err(ParseError::UnknownDirective {
                    line,
                    directive: directive.to_string(),
                });
            }
        }
    }

    Ok(SceneDescription { scene, camera })
}

/// Serialize a scene (plus the driver's camera position) back to text.
pub fn serialize(scene: &Scene, camera: Vec3, name: &str) -> String {
    let mut out = String::new();

    if !name.is_empty() {
        out.push_str(&format!("# {name}\n"));
    }
    out.push_str(&format!("C {} {} {}\n", camera.x, camera.y, camera.z));
    if let Some(light) = scene.light() {
        out.push_str(&format!(
            "L {} {} {} {}\n",
            light.position.x, light.position.y, light.position.z, light.intensity
        ));
    }

    for sphere in scene.spheres() {
        let head = format!(
            "S {} {} {} {}",
            sphere.origin.x, sphere.origin.y, sphere.origin.z, sphere.radius
        );
        match sphere.surface {
            SurfaceColor::Multicolor => out.push_str(&format!("{head} multicolor\n")),
            SurfaceColor::Uniform => match preset_name(&sphere.material) {
                Some(preset) => out.push_str(&format!("{head} {preset}\n")),
                None => {
                    let c = sphere.material.color;
                    out.push_str(&format!("{head} object {} {} {}\n", c.x, c.y, c.z));
                }
            },
        }
    }

    out
}
