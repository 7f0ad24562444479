//! Render targets and the primitives drawn into them.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{Rasterizer, Vertex};
