//! Vector and matrix types for the transform pipeline.

pub mod mat3;
pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
