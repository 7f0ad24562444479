//! Scanline triangle rasterization plus line and circle drawing.
//!
//! Triangles are filled one horizontal line at a time using
//! flat-top/flat-bottom decomposition:
//!
//! ```text
//!        top                  top
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\  <- split at mid.y
//!     / mid--\             mid   split
//!    /        \             \    /
//!   /          \             \  /
//!  bot           ...          bot
//! ```
//!
//! Scanline and span bounds both use `ceil` with half-open ranges, so two
//! triangles sharing an edge cover every pixel along it exactly once: no
//! double writes, no gaps. Per covered pixel the fill computes barycentric
//! weights (signed-area ratios) to interpolate depth and whatever the
//! fragment callback needs, then runs the nearer-wins depth test.
//!
//! Lines and circles use the classic integer midpoint algorithms and write
//! without depth testing.

use super::framebuffer::FrameBuffer;
use crate::color::Color;
use crate::light::{Light, Material};
use crate::math::{vec2::Vec2, vec3::Vec3, vec4::Vec4};
use crate::shading::shade;

/// A rasterizer-ready vertex.
///
/// `position` carries screen-space x/y in pixels, depth in [0, 1] in z and
/// the clip-space w it came from. `world_pos` feeds lighting only; `normal`
/// is unit length by convention (not enforced). Vertices are plain values,
/// freely copied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec4,
    pub world_pos: Vec3,
    pub normal: Vec3,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vec4, world_pos: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            position,
            world_pos,
            normal,
            color,
        }
    }

    /// Interpolates every attribute at parameter `t`.
    ///
    /// The normal is re-normalized after interpolation; colors truncate
    /// per channel.
    pub fn lerp(a: &Vertex, b: &Vertex, t: f32) -> Vertex {
        Vertex {
            position: a.position.lerp(b.position, t),
            world_pos: a.world_pos.lerp(b.world_pos, t),
            normal: a.normal.lerp(b.normal, t).normalize(),
            color: Color::lerp(a.color, b.color, t),
        }
    }
}

impl Default for Vertex {
    /// Zero position with a +Z normal and white color.
    fn default() -> Self {
        Self {
            position: Vec4::ZERO,
            world_pos: Vec3::ZERO,
            normal: Vec3::FORWARD,
            color: Color::WHITE,
        }
    }
}

/// Barycentric weights of point (px, py) relative to the triangle abc.
///
/// The weights are signed-area ratios and sum to one. A degenerate
/// triangle (area denominator under the epsilon) yields uniform thirds
/// instead of dividing by zero.
fn barycentric(px: f32, py: f32, a: Vec2, b: Vec2, c: Vec2) -> [f32; 3] {
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() < 1e-6 {
        return [1.0 / 3.0; 3];
    }
    let u = ((b.y - c.y) * (px - c.x) + (c.x - b.x) * (py - c.y)) / denom;
    let v = ((c.y - a.y) * (px - c.x) + (a.x - c.x) * (py - c.y)) / denom;
    [u, v, 1.0 - u - v]
}

/// Owns the frame and depth buffers and draws primitives into them.
///
/// Buffer size is fixed at construction. All drawing is synchronous and
/// single-threaded; independent instances never share state.
pub struct Rasterizer {
    buffer: FrameBuffer,
}

impl Rasterizer {
    /// Allocates the color and depth buffers for a fixed-size target.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// The finished frame, for display or export.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// The raw color buffer: RGB triples, row-major, width * height * 3.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Reset every pixel to `color` and every depth to the far plane.
    pub fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    /// Write one pixel, no depth test.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.set_pixel(x, y, color);
    }

    /// Write one pixel if `depth` wins the nearer-wins depth test.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) {
        self.buffer.set_pixel_with_depth(x, y, depth, color);
    }

    /// Draws a line with Bresenham's algorithm.
    ///
    /// Integer arithmetic only, each touched pixel written exactly once,
    /// and the same pixels come out regardless of endpoint order. Lines
    /// ignore the depth buffer.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if (y2 - y1).abs() < (x2 - x1).abs() {
            // More horizontal than vertical: iterate over x
            if x1 > x2 {
                self.draw_line_low(x2, y2, x1, y1, color);
            } else {
                self.draw_line_low(x1, y1, x2, y2, color);
            }
        } else if y1 > y2 {
            self.draw_line_high(x2, y2, x1, y1, color);
        } else {
            self.draw_line_high(x1, y1, x2, y2, color);
        }
    }

    /// Shallow slope case, x strictly increasing.
    fn draw_line_low(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let dx = x2 - x1;
        let mut dy = y2 - y1;
        let mut y_step = 1;
        if dy < 0 {
            y_step = -1;
            dy = -dy;
        }

        // Positive decision variable means the ideal line has drifted far
        // enough to take a minor-axis step
        let mut d = 2 * dy - dx;
        let mut y = y1;

        for x in x1..=x2 {
            self.buffer.set_pixel(x, y, color);
            if d > 0 {
                y += y_step;
                d -= 2 * dx;
            }
            d += 2 * dy;
        }
    }

    /// Steep slope case, y strictly increasing.
    fn draw_line_high(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let mut dx = x2 - x1;
        let dy = y2 - y1;
        let mut x_step = 1;
        if dx < 0 {
            x_step = -1;
            dx = -dx;
        }

        let mut d = 2 * dx - dy;
        let mut x = x1;

        for y in y1..=y2 {
            self.buffer.set_pixel(x, y, color);
            if d > 0 {
                x += x_step;
                d -= 2 * dy;
            }
            d += 2 * dx;
        }
    }

    /// Draws a circle outline with the midpoint algorithm.
    ///
    /// One octant is walked with an integer decision variable and each
    /// computed point is mirrored into the other seven.
    pub fn draw_circle(&mut self, xc: i32, yc: i32, radius: i32, color: Color) {
        let mut x = 0;
        let mut y = radius;
        let mut d = 1 - radius;

        self.draw_circle_points(xc, yc, x, y, color);
        while x < y {
            x += 1;
            if d < 0 {
                d += 2 * x + 1;
            } else {
                y -= 1;
                d += 2 * (x - y) + 1;
            }
            self.draw_circle_points(xc, yc, x, y, color);
        }
    }

    fn draw_circle_points(&mut self, xc: i32, yc: i32, x: i32, y: i32, color: Color) {
        self.buffer.set_pixel(xc + x, yc + y, color);
        self.buffer.set_pixel(xc - x, yc + y, color);
        self.buffer.set_pixel(xc + x, yc - y, color);
        self.buffer.set_pixel(xc - x, yc - y, color);
        self.buffer.set_pixel(xc + y, yc + x, color);
        self.buffer.set_pixel(xc - y, yc + x, color);
        self.buffer.set_pixel(xc + y, yc - x, color);
        self.buffer.set_pixel(xc - y, yc - x, color);
    }

    /// Fills a triangle, interpolating the vertices' colors across it
    /// (Gouraud shading when the colors came from per-vertex lighting).
    ///
    /// Vertices may arrive in any order. Every covered pixel runs the
    /// depth test against the interpolated depth.
    pub fn draw_triangle(&mut self, v1: &Vertex, v2: &Vertex, v3: &Vertex) {
        self.fill_triangle(v1, v2, v3, &|weights, a, b, c| {
            Color::from_barycentric(a.color, b.color, c.color, weights[0], weights[1], weights[2])
        });
    }

    /// Fills a triangle shading every covered pixel (Phong shading).
    ///
    /// World position and normal interpolate per pixel and feed the
    /// shading function, giving highlights inside a face where
    /// [`Rasterizer::draw_triangle`] could only blend vertex colors.
    pub fn draw_triangle_phong(
        &mut self,
        v1: &Vertex,
        v2: &Vertex,
        v3: &Vertex,
        light: &Light,
        material: &Material,
        view_pos: Vec3,
    ) {
        self.fill_triangle(v1, v2, v3, &|weights, a, b, c| {
            let [u, v, w] = weights;
            let position = a.world_pos * u + b.world_pos * v + c.world_pos * w;
            let normal = a.normal * u + b.normal * v + c.normal * w;
            shade(position, normal, view_pos, light, material)
        });
    }

    /// Draws the three edges of a triangle.
    ///
    /// Plain lines: positions truncate to integers and the depth buffer
    /// is not consulted or written.
    pub fn draw_wireframe_triangle(&mut self, v1: &Vertex, v2: &Vertex, v3: &Vertex, color: Color) {
        let (x1, y1) = (v1.position.x as i32, v1.position.y as i32);
        let (x2, y2) = (v2.position.x as i32, v2.position.y as i32);
        let (x3, y3) = (v3.position.x as i32, v3.position.y as i32);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x3, y3, color);
        self.draw_line(x3, y3, x1, y1, color);
    }

    /// Sorts, decomposes and fills a triangle, calling `fragment` with the
    /// barycentric weights and the three vertices for every covered pixel.
    fn fill_triangle<F>(&mut self, v1: &Vertex, v2: &Vertex, v3: &Vertex, fragment: &F)
    where
        F: Fn([f32; 3], &Vertex, &Vertex, &Vertex) -> Color,
    {
        let mut top = *v1;
        let mut mid = *v2;
        let mut bot = *v3;

        // Three comparisons sort three vertices by ascending screen y
        if mid.position.y < top.position.y {
            std::mem::swap(&mut top, &mut mid);
        }
        if bot.position.y < mid.position.y {
            std::mem::swap(&mut mid, &mut bot);
        }
        if mid.position.y < top.position.y {
            std::mem::swap(&mut top, &mut mid);
        }

        if (bot.position.y - top.position.y).abs() < f32::EPSILON {
            return; // all three vertices on one scanline
        }

        if (mid.position.y - bot.position.y).abs() < f32::EPSILON {
            self.fill_flat_bottom(&top, &mid, &bot, fragment);
        } else if (top.position.y - mid.position.y).abs() < f32::EPSILON {
            self.fill_flat_top(&top, &mid, &bot, fragment);
        } else {
            // Split on the long edge at the middle vertex's height; the
            // split vertex interpolates position, world position, normal
            // and color
            let t = (mid.position.y - top.position.y) / (bot.position.y - top.position.y);
            let split = Vertex::lerp(&top, &bot, t);
            self.fill_flat_bottom(&top, &mid, &split, fragment);
            self.fill_flat_top(&mid, &split, &bot, fragment);
        }
    }

    /// Fills a triangle whose two bottom vertices share a y coordinate.
    fn fill_flat_bottom<F>(&mut self, v0: &Vertex, v1: &Vertex, v2: &Vertex, fragment: &F)
    where
        F: Fn([f32; 3], &Vertex, &Vertex, &Vertex) -> Color,
    {
        let height = v1.position.y - v0.position.y;
        if height.abs() < f32::EPSILON {
            return;
        }

        // Change in x per unit y along each edge leaving the apex
        let inv_slope_1 = (v1.position.x - v0.position.x) / height;
        let inv_slope_2 = (v2.position.x - v0.position.x) / height;

        let y_start = v0.position.y.ceil() as i32;
        let y_end = v1.position.y.ceil() as i32;

        for y in y_start..y_end {
            let dy = y as f32 - v0.position.y;
            let x1 = v0.position.x + inv_slope_1 * dy;
            let x2 = v0.position.x + inv_slope_2 * dy;
            self.fill_span(y, x1, x2, v0, v1, v2, fragment);
        }
    }

    /// Fills a triangle whose two top vertices share a y coordinate.
    fn fill_flat_top<F>(&mut self, v0: &Vertex, v1: &Vertex, v2: &Vertex, fragment: &F)
    where
        F: Fn([f32; 3], &Vertex, &Vertex, &Vertex) -> Color,
    {
        let height = v2.position.y - v0.position.y;
        if height.abs() < f32::EPSILON {
            return;
        }

        let inv_slope_1 = (v2.position.x - v0.position.x) / height;
        let inv_slope_2 = (v2.position.x - v1.position.x) / height;

        let y_start = v0.position.y.ceil() as i32;
        let y_end = v2.position.y.ceil() as i32;

        for y in y_start..y_end {
            let dy = y as f32 - v0.position.y;
            let x1 = v0.position.x + inv_slope_1 * dy;
            let x2 = v1.position.x + inv_slope_2 * dy;
            self.fill_span(y, x1, x2, v0, v1, v2, fragment);
        }
    }

    /// Fills one scanline between two edge intercepts.
    ///
    /// Either intercept can be the left one depending on winding, so the
    /// pair is ordered here before the half-open ceil walk.
    fn fill_span<F>(
        &mut self,
        y: i32,
        x1: f32,
        x2: f32,
        v0: &Vertex,
        v1: &Vertex,
        v2: &Vertex,
        fragment: &F,
    ) where
        F: Fn([f32; 3], &Vertex, &Vertex, &Vertex) -> Color,
    {
        let (x_left, x_right) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let x_start = x_left.ceil() as i32;
        let x_end = x_right.ceil() as i32;

        let a = Vec2::new(v0.position.x, v0.position.y);
        let b = Vec2::new(v1.position.x, v1.position.y);
        let c = Vec2::new(v2.position.x, v2.position.y);

        for x in x_start..x_end {
            let weights = barycentric(x as f32, y as f32, a, b, c);
            let depth = weights[0] * v0.position.z
                + weights[1] * v1.position.z
                + weights[2] * v2.position.z;
            let color = fragment(weights, v0, v1, v2);
            self.buffer.set_pixel_with_depth(x, y, depth, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn vertex_at(x: f32, y: f32, depth: f32, color: Color) -> Vertex {
        Vertex {
            position: Vec4::new(x, y, depth, 1.0),
            color,
            ..Vertex::default()
        }
    }

    fn lit_pixels(raster: &Rasterizer) -> HashSet<(i32, i32)> {
        let mut pixels = HashSet::new();
        for y in 0..raster.height() as i32 {
            for x in 0..raster.width() as i32 {
                if raster.frame_buffer().pixel(x, y) != Some(Color::BLACK) {
                    pixels.insert((x, y));
                }
            }
        }
        pixels
    }

    fn line_pixels(x1: i32, y1: i32, x2: i32, y2: i32) -> HashSet<(i32, i32)> {
        let mut raster = Rasterizer::new(64, 64);
        raster.draw_line(x1, y1, x2, y2, Color::WHITE);
        lit_pixels(&raster)
    }

    #[test]
    fn line_is_symmetric_under_endpoint_swap() {
        let cases = [
            (3, 4, 40, 13),  // shallow
            (5, 2, 9, 30),   // steep
            (2, 12, 22, 2),  // negative slope
            (5, 7, 25, 7),   // horizontal
            (7, 5, 7, 25),   // vertical
            (11, 11, 11, 11) // single point
        ];
        for (x1, y1, x2, y2) in cases {
            let forward = line_pixels(x1, y1, x2, y2);
            let reverse = line_pixels(x2, y2, x1, y1);
            assert_eq!(forward, reverse, "case ({x1},{y1})-({x2},{y2})");
            assert!(!forward.is_empty());
        }
    }

    #[test]
    fn line_stays_within_half_a_pixel_of_the_ideal_segment() {
        let cases = [(3, 4, 40, 13), (5, 2, 9, 30), (2, 12, 22, 2)];
        for (x1, y1, x2, y2) in cases {
            let dx = (x2 - x1) as f32;
            let dy = (y2 - y1) as f32;
            let len = (dx * dx + dy * dy).sqrt();
            for (x, y) in line_pixels(x1, y1, x2, y2) {
                let dist = (dy * x as f32 - dx * y as f32 + (x2 * y1 - y2 * x1) as f32).abs() / len;
                assert!(
                    dist <= 0.5 + 1e-4,
                    "pixel ({x},{y}) deviates {dist} from ({x1},{y1})-({x2},{y2})"
                );
            }
        }
    }

    #[test]
    fn line_touches_one_pixel_per_major_axis_step() {
        let pixels = line_pixels(3, 4, 40, 13);
        assert_eq!(pixels.len(), 38); // dx + 1
    }

    #[test]
    fn circle_has_eightfold_symmetry() {
        let mut raster = Rasterizer::new(64, 64);
        raster.draw_circle(30, 30, 12, Color::WHITE);
        let pixels = lit_pixels(&raster);
        assert!(!pixels.is_empty());
        for &(x, y) in &pixels {
            let (dx, dy) = (x - 30, y - 30);
            for (mx, my) in [
                (dx, dy),
                (-dx, dy),
                (dx, -dy),
                (-dx, -dy),
                (dy, dx),
                (-dy, dx),
                (dy, -dx),
                (-dy, -dx),
            ] {
                assert!(pixels.contains(&(30 + mx, 30 + my)));
            }
        }
    }

    #[test]
    fn circle_pixels_sit_near_the_radius() {
        let mut raster = Rasterizer::new(64, 64);
        raster.draw_circle(30, 30, 12, Color::WHITE);
        for (x, y) in lit_pixels(&raster) {
            let (dx, dy) = ((x - 30) as f32, (y - 30) as f32);
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 12.0).abs() <= 1.0, "pixel ({x},{y}) at distance {dist}");
        }
    }

    #[test]
    fn filled_triangle_covers_its_interior() {
        let mut raster = Rasterizer::new(64, 64);
        let color = Color::rgb(200, 40, 40);
        let v1 = vertex_at(10.0, 5.0, 0.5, color);
        let v2 = vertex_at(5.0, 15.0, 0.5, color);
        let v3 = vertex_at(25.0, 15.0, 0.5, color);
        raster.draw_triangle(&v1, &v2, &v3);
        assert_eq!(raster.frame_buffer().pixel(15, 10), Some(color));
        assert_eq!(raster.frame_buffer().pixel(40, 40), Some(Color::BLACK));
    }

    #[test]
    fn split_triangle_fills_every_interior_scanline() {
        // No flat edge: the fill must split at the middle vertex and the
        // two halves must partition the scanlines between them.
        let mut raster = Rasterizer::new(64, 64);
        let color = Color::WHITE;
        let v1 = vertex_at(10.0, 5.0, 0.5, color);
        let v2 = vertex_at(20.0, 12.0, 0.5, color);
        let v3 = vertex_at(5.0, 25.0, 0.5, color);
        raster.draw_triangle(&v1, &v2, &v3);

        let pixels = lit_pixels(&raster);
        for y in 6..25 {
            assert!(
                pixels.iter().any(|&(_, py)| py == y),
                "scanline {y} left empty"
            );
        }
        // Nothing above the top vertex or below the bottom one
        assert!(pixels.iter().all(|&(_, py)| (5..25).contains(&py)));
    }

    #[test]
    fn degenerate_triangle_on_one_scanline_draws_nothing() {
        let mut raster = Rasterizer::new(64, 64);
        let v1 = vertex_at(5.0, 7.0, 0.5, Color::WHITE);
        let v2 = vertex_at(9.0, 7.0, 0.5, Color::WHITE);
        let v3 = vertex_at(14.0, 7.0, 0.5, Color::WHITE);
        raster.draw_triangle(&v1, &v2, &v3);
        assert!(lit_pixels(&raster).is_empty());
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_draw_order() {
        let triangle = |depth, color| {
            [
                vertex_at(5.0, 5.0, depth, color),
                vertex_at(21.0, 5.0, depth, color),
                vertex_at(13.0, 21.0, depth, color),
            ]
        };

        let mut raster = Rasterizer::new(64, 64);
        let [f1, f2, f3] = triangle(0.8, Color::RED);
        let [n1, n2, n3] = triangle(0.2, Color::BLUE);
        raster.draw_triangle(&f1, &f2, &f3);
        raster.draw_triangle(&n1, &n2, &n3);
        assert_eq!(raster.frame_buffer().pixel(13, 13), Some(Color::BLUE));

        let mut raster = Rasterizer::new(64, 64);
        raster.draw_triangle(&n1, &n2, &n3);
        raster.draw_triangle(&f1, &f2, &f3);
        assert_eq!(raster.frame_buffer().pixel(13, 13), Some(Color::BLUE));
        assert_eq!(raster.frame_buffer().depth(13, 13), Some(0.2));
    }

    #[test]
    fn gouraud_fill_approaches_vertex_colors_at_corners() {
        let mut raster = Rasterizer::new(64, 64);
        let v1 = vertex_at(10.0, 10.0, 0.5, Color::RED);
        let v2 = vertex_at(30.0, 10.0, 0.5, Color::GREEN);
        let v3 = vertex_at(20.0, 30.0, 0.5, Color::BLUE);
        raster.draw_triangle(&v1, &v2, &v3);

        let near_red = raster.frame_buffer().pixel(11, 11).unwrap();
        assert!(near_red.r > 200);
        assert!(near_red.g < 20);
        assert!(near_red.b < 20);
    }

    #[test]
    fn phong_fill_shades_covered_pixels() {
        let mut raster = Rasterizer::new(64, 64);
        let light = Light::default();
        let material = Material::default();
        // Screen triangle with world positions on the z=0 plane facing +z
        let mut v1 = vertex_at(10.0, 10.0, 0.5, Color::WHITE);
        let mut v2 = vertex_at(30.0, 10.0, 0.5, Color::WHITE);
        let mut v3 = vertex_at(20.0, 30.0, 0.5, Color::WHITE);
        v1.world_pos = Vec3::new(-1.0, 1.0, 0.0);
        v2.world_pos = Vec3::new(1.0, 1.0, 0.0);
        v3.world_pos = Vec3::new(0.0, -1.0, 0.0);
        raster.draw_triangle_phong(&v1, &v2, &v3, &light, &material, Vec3::new(0.0, 0.0, 5.0));

        let shaded = raster.frame_buffer().pixel(20, 15).unwrap();
        assert!(shaded.r > 10); // more than the bare ambient term
        assert!(shaded.r < 255);
        assert_eq!(shaded.r, shaded.g);
        assert_eq!(shaded.g, shaded.b);
    }

    #[test]
    fn wireframe_draws_edges_without_touching_depth() {
        let mut raster = Rasterizer::new(64, 64);
        let v1 = vertex_at(5.0, 5.0, 0.3, Color::WHITE);
        let v2 = vertex_at(20.0, 5.0, 0.3, Color::WHITE);
        let v3 = vertex_at(12.0, 15.0, 0.3, Color::WHITE);
        raster.draw_wireframe_triangle(&v1, &v2, &v3, Color::GREEN);

        assert_eq!(raster.frame_buffer().pixel(10, 5), Some(Color::GREEN));
        assert_eq!(raster.frame_buffer().depth(10, 5), Some(1.0));
    }

    #[test]
    fn barycentric_weights_partition_unity_inside() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 10.0);
        for (px, py) in [(1.0, 1.0), (3.0, 4.0), (5.0, 2.5), (0.5, 8.0)] {
            let [u, v, w] = barycentric(px, py, a, b, c);
            assert!((u + v + w - 1.0).abs() < 1e-5);
            assert!(u >= 0.0 && v >= 0.0 && w >= 0.0);
        }
    }

    #[test]
    fn barycentric_degenerate_triangle_yields_thirds() {
        // Collinear points span zero area
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(5.0, 5.0);
        let c = Vec2::new(10.0, 10.0);
        let weights = barycentric(3.0, 7.0, a, b, c);
        assert_eq!(weights, [1.0 / 3.0; 3]);
    }
}
