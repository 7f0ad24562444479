//! Light and material descriptions consumed by the shading functions.

use crate::math::vec3::Vec3;

/// A point light with a separate ambient contribution.
///
/// One light applies per draw call; there is no scene graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// World-space position of the emitter.
    pub position: Vec3,
    /// RGB emission color, each channel in [0, 1].
    pub color: Vec3,
    /// RGB ambient term added regardless of surface orientation.
    pub ambient: Vec3,
}

impl Light {
    pub fn new(position: Vec3, color: Vec3, ambient: Vec3) -> Self {
        Self {
            position,
            color,
            ambient,
        }
    }
}

impl Default for Light {
    /// White light above and behind the default camera position.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 5.0),
            color: Vec3::ONE,
            ambient: Vec3::splat(0.2),
        }
    }
}

/// Surface reflectance coefficients, immutable per draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    /// Specular exponent; larger values tighten the highlight.
    pub shininess: f32,
}

impl Material {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            shininess: 32.0,
        }
    }
}
