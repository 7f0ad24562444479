//! Frame buffer and depth buffer storage.
//!
//! Provides the [`FrameBuffer`] struct owning the RGB color buffer and the
//! parallel depth buffer, with bounds-checked access and PNG export.

use std::path::Path;

use crate::color::Color;

/// Owns the color and depth buffers for one render target.
///
/// Color is packed RGB, row-major, three bytes per pixel. Depth values lie
/// in [0, 1]: 1.0 is maximally far (the cleared state), smaller is nearer.
/// Both buffers are allocated once at construction and never resized.
pub struct FrameBuffer {
    color_buffer: Vec<u8>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![0; size * 3],
            depth_buffer: vec![1.0; size], // 1.0 = maximally far
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to `color` and every depth to the far plane.
    pub fn clear(&mut self, color: Color) {
        for pixel in self.color_buffer.chunks_exact_mut(3) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
        }
        self.depth_buffer.fill(1.0);
    }

    /// Set a pixel without depth testing.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = ((y as u32 * self.width + x as u32) * 3) as usize;
            self.color_buffer[index] = color.r;
            self.color_buffer[index + 1] = color.g;
            self.color_buffer[index + 2] = color.b;
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly smaller than the
    /// stored depth at that location; ties leave the existing pixel in
    /// place. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            // Depth test: smaller means nearer the camera
            if depth < self.depth_buffer[idx] {
                self.depth_buffer[idx] = depth;
                let index = idx * 3;
                self.color_buffer[index] = color.r;
                self.color_buffer[index + 1] = color.g;
                self.color_buffer[index + 2] = color.b;
            }
        }
    }

    /// Get the color at (x, y) as an opaque color, or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = ((y as u32 * self.width + x as u32) * 3) as usize;
            Some(Color::rgb(
                self.color_buffer[index],
                self.color_buffer[index + 1],
                self.color_buffer[index + 2],
            ))
        } else {
            None
        }
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.depth_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// The raw color buffer: RGB triples, row-major, width * height * 3 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    /// Save the color buffer as a PNG image.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.color_buffer,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black_and_maximally_far() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.as_bytes().len(), 4 * 3 * 3);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.depth(2, 1), Some(1.0));
    }

    #[test]
    fn clear_sets_color_and_resets_depth() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel_with_depth(1, 1, 0.25, Color::RED);
        fb.clear(Color::rgb(7, 8, 9));
        assert_eq!(fb.pixel(1, 1), Some(Color::rgb(7, 8, 9)));
        assert_eq!(fb.depth(1, 1), Some(1.0));
    }

    #[test]
    fn out_of_bounds_writes_are_discarded() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel(-1, 0, Color::WHITE);
        fb.set_pixel(4, 0, Color::WHITE);
        fb.set_pixel(0, 4, Color::WHITE);
        fb.set_pixel_with_depth(0, -1, 0.0, Color::WHITE);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.depth(0, -1), None);
    }

    #[test]
    fn nearer_depth_wins_in_either_order() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel_with_depth(0, 0, 0.7, Color::RED);
        fb.set_pixel_with_depth(0, 0, 0.9, Color::BLUE);
        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
        assert_eq!(fb.depth(0, 0), Some(0.7));

        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel_with_depth(0, 0, 0.9, Color::BLUE);
        fb.set_pixel_with_depth(0, 0, 0.7, Color::RED);
        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
        assert_eq!(fb.depth(0, 0), Some(0.7));
    }

    #[test]
    fn equal_depth_does_not_overwrite() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel_with_depth(1, 1, 0.5, Color::GREEN);
        fb.set_pixel_with_depth(1, 1, 0.5, Color::RED);
        assert_eq!(fb.pixel(1, 1), Some(Color::GREEN));
    }

    #[test]
    fn bytes_are_rgb_row_major() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_pixel(1, 0, Color::rgb(10, 20, 30));
        fb.set_pixel(0, 1, Color::rgb(40, 50, 60));
        let bytes = fb.as_bytes();
        assert_eq!(&bytes[3..6], &[10, 20, 30]);
        assert_eq!(&bytes[9..12], &[40, 50, 60]);
    }
}
