//! Demo scene driving the full pipeline offline.
//!
//! Stands in for a windowing shell: builds a lit sphere, a wireframe cube,
//! a circle and a few clipped lines, then writes the frame to `demo.png`.

use std::error::Error;

use scanlight::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

/// Projects a model-space position through the whole transform stack down
/// to a screen-space vertex, shading it per vertex (Gouraud).
fn lit_vertex(
    transform: &Transform,
    position: Vec3,
    normal: Vec3,
    eye: Vec3,
    light: &Light,
    material: &Material,
) -> Vertex {
    let world = (transform.model() * Vec4::from_vec3(position, 1.0)).to_vec3();
    let clip = transform.transform_vertex(Vec4::from_vec3(position, 1.0));
    let ndc = clip.to_vec3_perspective();
    let screen = Transform::viewport_transform(ndc, WIDTH, HEIGHT);

    Vertex::new(
        // Depth remaps NDC z from [-1, 1] into the buffer's [0, 1] range
        Vec4::new(screen.x, screen.y, ndc.z * 0.5 + 0.5, clip.w),
        world,
        normal,
        shade(world, normal, eye, light, material),
    )
}

/// Model-space positions of a unit UV sphere as triangles, with the normal
/// equal to the position.
fn sphere_triangles(stacks: u32, sectors: u32) -> Vec<[Vec3; 3]> {
    let point = |i: u32, j: u32| {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let theta = std::f32::consts::TAU * j as f32 / sectors as f32;
        Vec3::new(
            phi.sin() * theta.cos(),
            phi.cos(),
            phi.sin() * theta.sin(),
        )
    };

    let mut triangles = Vec::new();
    for i in 0..stacks {
        for j in 0..sectors {
            let a = point(i, j);
            let b = point(i + 1, j);
            let c = point(i + 1, j + 1);
            let d = point(i, j + 1);
            if i > 0 {
                triangles.push([a, b, d]);
            }
            if i + 1 < stacks {
                triangles.push([b, c, d]);
            }
        }
    }
    triangles
}

fn draw_sphere(
    raster: &mut Rasterizer,
    transform: &Transform,
    eye: Vec3,
    light: &Light,
    material: &Material,
) {
    for [a, b, c] in sphere_triangles(24, 32) {
        // Unit sphere: the normal is the position itself
        let v1 = lit_vertex(transform, a, a, eye, light, material);
        let v2 = lit_vertex(transform, b, b, eye, light, material);
        let v3 = lit_vertex(transform, c, c, eye, light, material);
        raster.draw_triangle(&v1, &v2, &v3);
    }
}

fn draw_wireframe_cube(raster: &mut Rasterizer, transform: &Transform, color: Color) {
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        )
    };
    let screen = |p: Vec3| {
        let clip = transform.transform_vertex(Vec4::from_vec3(p, 1.0));
        let ndc = clip.to_vec3_perspective();
        Transform::viewport_transform(ndc, WIDTH, HEIGHT)
    };

    const EDGES: [(usize, usize); 12] = [
        (0, 1), (1, 3), (3, 2), (2, 0), // back face
        (4, 5), (5, 7), (7, 6), (6, 4), // front face
        (0, 4), (1, 5), (2, 6), (3, 7), // connecting edges
    ];
    for (i, j) in EDGES {
        let a = screen(corner(i));
        let b = screen(corner(j));
        raster.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
    }
}

fn draw_clipped_lines(raster: &mut Rasterizer, color: Color) {
    let rect = ClipRect::of_screen(WIDTH, HEIGHT);
    let segments = [
        (Vec2::new(-200.0, 60.0), Vec2::new(1000.0, 120.0)),
        (Vec2::new(120.0, -80.0), Vec2::new(420.0, 700.0)),
        (Vec2::new(-50.0, -50.0), Vec2::new(-10.0, 650.0)), // rejected
    ];
    for (a, b) in segments {
        if let Some((p, q)) = rect.clip_line(a, b) {
            raster.draw_line(p.x as i32, p.y as i32, q.x as i32, q.y as i32, color);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut raster = Rasterizer::new(WIDTH, HEIGHT);
    let mut transform = Transform::new();

    let eye = Vec3::new(0.0, 1.2, 4.0);
    transform
        .look_at(eye, Vec3::ZERO, Vec3::UP)
        .set_perspective(
            60.0_f32.to_radians(),
            WIDTH as f32 / HEIGHT as f32,
            0.1,
            100.0,
        );

    let light = Light::default();
    let material = Material::new(
        Vec3::new(0.2, 0.1, 0.1),
        Vec3::new(0.8, 0.3, 0.3),
        Vec3::ONE,
        32.0,
    );

    raster.clear(Color::rgb(12, 12, 24));

    draw_sphere(&mut raster, &transform, eye, &light, &material);

    transform.push_matrix();
    transform.set_model(Mat4::translation(1.8, 0.6, 0.0) * Mat4::rotation(0.4, 0.7, 0.0));
    draw_wireframe_cube(&mut raster, &transform, Color::GREEN);
    transform.pop_matrix();

    raster.draw_circle(700, 80, 40, Color::rgb(220, 220, 80));
    draw_clipped_lines(&mut raster, Color::rgb(90, 90, 160));

    raster.frame_buffer().save_png("demo.png")?;
    println!("wrote demo.png ({WIDTH}x{HEIGHT})");
    Ok(())
}
