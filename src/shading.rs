//! Ambient + diffuse + specular shading.
//!
//! One function covers both shading granularities: a Gouraud caller runs it
//! once per vertex and lets the rasterizer interpolate the results, a Phong
//! caller runs it once per covered pixel on interpolated position and
//! normal. The math is identical either way.

use crate::color::Color;
use crate::light::{Light, Material};
use crate::math::vec3::Vec3;

/// Shades a surface point lit by `light` as seen from `view_pos`.
///
/// Composes the ambient, Lambert diffuse and Blinn-Phong specular terms,
/// clamps the sum into [0, 1] and truncates to 8-bit channels. Alpha is
/// always 255.
pub fn shade(
    position: Vec3,
    normal: Vec3,
    view_pos: Vec3,
    light: &Light,
    material: &Material,
) -> Color {
    let normal = normal.normalize();
    let light_dir = (light.position - position).normalize();
    let view_dir = (view_pos - position).normalize();

    let total = ambient(light, material)
        + diffuse(normal, light_dir, light, material)
        + specular(normal, light_dir, view_dir, light, material);
    let total = total.clamp(0.0, 1.0);

    Color::from_f32(total.x, total.y, total.z)
}

fn ambient(light: &Light, material: &Material) -> Vec3 {
    light.ambient * material.ambient
}

fn diffuse(normal: Vec3, light_dir: Vec3, light: &Light, material: &Material) -> Vec3 {
    light.color * material.diffuse * normal.dot(light_dir).max(0.0)
}

fn specular(normal: Vec3, light_dir: Vec3, view_dir: Vec3, light: &Light, material: &Material) -> Vec3 {
    // Blinn-Phong halfway vector, not the mirror reflection
    let halfway = (light_dir + view_dir).normalize();
    light.color * material.specular * normal.dot(halfway).max(0.0).powf(material.shininess)
}
