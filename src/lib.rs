//! A CPU-based software rasterization pipeline.
//!
//! This crate renders 3D geometry entirely on the CPU: model/view/projection
//! transforms, per-vertex or per-pixel lighting, and scanline triangle
//! rasterization into an RGB framebuffer with a depth buffer. What happens
//! to the finished frame is the caller's business; it can be saved as an
//! image or handed to any display layer as raw bytes.
//!
//! # Quick Start
//!
//! ```ignore
//! use scanlight::prelude::*;
//!
//! let mut raster = Rasterizer::new(800, 600);
//! let mut transform = Transform::default();
//! transform.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
//! transform.set_perspective(45.0_f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
//!
//! raster.clear(Color::BLACK);
//! raster.draw_triangle(&v1, &v2, &v3);
//! raster.frame_buffer().save_png("frame.png")?;
//! ```

// Public API - exposed to library consumers
pub mod clipping;
pub mod color;
pub mod light;
pub mod math;
pub mod render;
pub mod shading;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use clipping::ClipRect;
pub use color::Color;
pub use light::{Light, Material};
pub use render::{FrameBuffer, Rasterizer, Vertex};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanlight::prelude::*;
/// ```
pub mod prelude {
    // Transform
    pub use crate::transform::Transform;

    // Lighting
    pub use crate::light::{Light, Material};
    pub use crate::shading::shade;

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::color::Color;
    pub use crate::render::{FrameBuffer, Rasterizer, Vertex};

    // Clipping
    pub use crate::clipping::ClipRect;
}
