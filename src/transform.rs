//! Transform pipeline state: model, view and projection matrices.
//!
//! Provides a [`Transform`] struct holding the three pipeline matrices plus
//! a stack of model-matrix snapshots for hierarchical drawing, and the
//! vertex, normal and viewport transforms built on them. Mutating methods
//! return `&mut Self` for chaining:
//!
//! ```ignore
//! transform
//!     .set_model(Mat4::translation(0.0, 1.0, 0.0))
//!     .look_at(eye, Vec3::ZERO, Vec3::UP)
//!     .set_perspective(fov_y, aspect, 0.1, 100.0);
//! ```

use crate::math::{mat3::Mat3, mat4::Mat4, vec2::Vec2, vec3::Vec3, vec4::Vec4};

/// The three pipeline matrices and the model-matrix stack.
///
/// The stack only ever holds model-matrix snapshots; view and projection
/// are never pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    stack: Vec<Mat4>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            model: Mat4::identity(),
            view: Mat4::identity(),
            projection: Mat4::identity(),
            stack: Vec::new(),
        }
    }
}

impl Transform {
    /// Create a transform with all three matrices set to identity.
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Matrix state ============

    /// Get the model matrix.
    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// Replace the model matrix.
    pub fn set_model(&mut self, model: Mat4) -> &mut Self {
        self.model = model;
        self
    }

    /// Get the view matrix.
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Replace the view matrix.
    pub fn set_view(&mut self, view: Mat4) -> &mut Self {
        self.view = view;
        self
    }

    /// Get the projection matrix.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Replace the projection matrix.
    pub fn set_projection(&mut self, projection: Mat4) -> &mut Self {
        self.projection = projection;
        self
    }

    /// Combined projection * view * model matrix.
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    /// Combined view * model matrix.
    pub fn model_view(&self) -> Mat4 {
        self.view * self.model
    }

    // ============ Camera and projection ============

    /// Aim the camera at `center` from `eye`, writing the view matrix.
    ///
    /// Degenerate input (eye == center, or `up` parallel to the view
    /// direction) produces an undefined matrix; callers must avoid it.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) -> &mut Self {
        self.view = Mat4::look_at(eye, center, up);
        self
    }

    /// Write a perspective projection matrix.
    ///
    /// Arguments are not validated; `near <= 0` or `far <= near` degenerate
    /// in the limit.
    pub fn set_perspective(
        &mut self,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        self.projection = Mat4::perspective(fov_y, aspect_ratio, near, far);
        self
    }

    /// Write an orthographic projection matrix.
    pub fn set_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        self.projection = Mat4::orthographic(left, right, bottom, top, near, far);
        self
    }

    // ============ Vertex and normal transforms ============

    /// Carry a model-space vertex into clip space: projection * view *
    /// model * v.
    ///
    /// The perspective division is the caller's step, after clipping
    /// decisions that need the homogeneous w.
    pub fn transform_vertex(&self, v: Vec4) -> Vec4 {
        self.mvp() * v
    }

    /// Normal matrix for the current model and view.
    ///
    /// The inverse transpose of the 3x3 block of view * model, so
    /// non-uniform scale does not skew directions. A singular model-view
    /// falls back to the identity instead of producing NaNs.
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.model_view())
            .inverse()
            .unwrap_or(Mat3::identity())
            .transpose()
    }

    /// Transform a normal into view space, unit-normalized.
    pub fn transform_normal(&self, normal: Vec3) -> Vec3 {
        (self.normal_matrix() * normal).normalize()
    }

    /// Map an NDC position onto screen coordinates.
    ///
    /// X maps [-1, 1] to [0, width]. Y flips: NDC +1 lands on row 0,
    /// since screen rows grow downward while NDC y grows upward.
    pub fn viewport_transform(ndc: Vec3, screen_width: u32, screen_height: u32) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * screen_width as f32,
            (1.0 - ndc.y) * 0.5 * screen_height as f32,
        )
    }

    // ============ Model matrix stack ============

    /// Save the current model matrix.
    pub fn push_matrix(&mut self) -> &mut Self {
        self.stack.push(self.model);
        self
    }

    /// Restore the most recently saved model matrix.
    ///
    /// Popping with nothing saved leaves the model matrix untouched.
    pub fn pop_matrix(&mut self) -> &mut Self {
        if let Some(model) = self.stack.pop() {
            self.model = model;
        }
        self
    }
}
