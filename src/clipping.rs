//! 2D line clipping against an axis-aligned rectangle (Cohen-Sutherland).

use crate::math::vec2::Vec2;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Axis-aligned clip rectangle; points on the boundary count as inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl ClipRect {
    pub const fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Rectangle covering a screen of the given size.
    pub fn of_screen(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// 4-bit region code for a point relative to the rectangle.
    fn outcode(&self, x: f32, y: f32) -> u8 {
        let mut code = INSIDE;
        if x < self.x_min {
            code |= LEFT;
        } else if x > self.x_max {
            code |= RIGHT;
        }
        if y < self.y_min {
            code |= BOTTOM;
        } else if y > self.y_max {
            code |= TOP;
        }
        code
    }

    /// Clips the segment `a`-`b` to the rectangle.
    ///
    /// Returns the visible sub-segment, or `None` when the segment lies
    /// entirely outside. Each iteration moves one endpoint with a nonzero
    /// outcode onto the single boundary it violates (tested in the order
    /// top, bottom, right, left), so the loop always terminates.
    pub fn clip_line(&self, a: Vec2, b: Vec2) -> Option<(Vec2, Vec2)> {
        let (mut x1, mut y1) = (a.x, a.y);
        let (mut x2, mut y2) = (b.x, b.y);
        let mut code1 = self.outcode(x1, y1);
        let mut code2 = self.outcode(x2, y2);

        loop {
            if code1 | code2 == INSIDE {
                return Some((Vec2::new(x1, y1), Vec2::new(x2, y2)));
            }
            if code1 & code2 != INSIDE {
                // both endpoints share an outside half-plane
                return None;
            }

            let out = if code1 != INSIDE { code1 } else { code2 };
            let (x, y) = if out & TOP != 0 {
                (x1 + (x2 - x1) * (self.y_max - y1) / (y2 - y1), self.y_max)
            } else if out & BOTTOM != 0 {
                (x1 + (x2 - x1) * (self.y_min - y1) / (y2 - y1), self.y_min)
            } else if out & RIGHT != 0 {
                (self.x_max, y1 + (y2 - y1) * (self.x_max - x1) / (x2 - x1))
            } else {
                (self.x_min, y1 + (y2 - y1) * (self.x_min - x1) / (x2 - x1))
            };

            if out == code1 {
                x1 = x;
                y1 = y;
                code1 = self.outcode(x1, y1);
            } else {
                x2 = x;
                y2 = y;
                code2 = self.outcode(x2, y2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ClipRect = ClipRect::new(0.0, 0.0, 10.0, 10.0);

    #[test]
    fn horizontal_crossing_clips_to_both_edges() {
        let clipped = RECT.clip_line(Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0));
        assert_eq!(clipped, Some((Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0))));
    }

    #[test]
    fn segment_in_shared_outside_region_is_rejected() {
        // Both endpoints carry LEFT and BOTTOM bits
        let clipped = RECT.clip_line(Vec2::new(-5.0, -5.0), Vec2::new(-1.0, -1.0));
        assert_eq!(clipped, None);
    }

    #[test]
    fn fully_inside_segment_is_returned_unchanged() {
        let a = Vec2::new(2.0, 3.0);
        let b = Vec2::new(8.0, 7.0);
        assert_eq!(RECT.clip_line(a, b), Some((a, b)));
    }

    #[test]
    fn diagonal_through_both_corners_clips_to_corners() {
        let clipped = RECT.clip_line(Vec2::new(-5.0, -5.0), Vec2::new(15.0, 15.0));
        assert_eq!(clipped, Some((Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0))));
    }

    #[test]
    fn vertical_segment_clips_top_and_bottom() {
        let clipped = RECT.clip_line(Vec2::new(5.0, -3.0), Vec2::new(5.0, 13.0));
        assert_eq!(clipped, Some((Vec2::new(5.0, 0.0), Vec2::new(5.0, 10.0))));
    }

    #[test]
    fn segment_missing_the_rect_across_regions_is_rejected() {
        // Endpoints sit in different outside regions but the segment passes
        // wide of the corner.
        let clipped = RECT.clip_line(Vec2::new(-6.0, 8.0), Vec2::new(2.0, 16.0));
        assert_eq!(clipped, None);
    }

    #[test]
    fn of_screen_covers_the_full_pixel_range() {
        let rect = ClipRect::of_screen(800, 600);
        assert_eq!(rect.x_max, 800.0);
        assert_eq!(rect.y_max, 600.0);
        assert!(rect
            .clip_line(Vec2::ZERO, Vec2::new(800.0, 600.0))
            .is_some());
    }
}
