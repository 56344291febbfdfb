//! Procedural surfaces of revolution around the X axis.
//!
//! Rolls lie along X, so every primitive here revolves around that axis:
//! open tubes for shells and cores, annular rings for paper ends, and discs
//! for printed ends and hole caps. Each wraps `segments + 1` vertices per
//! ring so the UV seam closes cleanly.
//!
//! Radii and lengths are not validated; degenerate values produce degenerate
//! but well-formed buffers (callers clamp upstream). Segment counts clamp to
//! `3..=MAX_SEGMENTS` here.

use std::f32::consts::TAU;

use crate::mesh::MeshBuffers;

/// Upper bound on radial segments; keeps the index math inside `u32`.
const MAX_SEGMENTS: u32 = 4096;

/// Which side of a surface is meant to face the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Normals point away from the enclosed volume.
    #[default]
    Outward,
    /// Normals point into the enclosed volume (bores, back faces).
    Inward,
}

/// An open cylindrical tube along X, spanning `-length/2..length/2`.
///
/// `radius_a` is the ring at the negative end, `radius_b` at the positive
/// end; unequal radii give a conical frustum with correctly tilted normals.
/// UVs wrap `u` around the circumference and run `v` along the length.
#[must_use]
pub fn tube(
    radius_a: f32,
    radius_b: f32,
    length: f32,
    radial_segments: u32,
    facing: Facing,
) -> MeshBuffers {
    let segments = radial_segments.clamp(3, MAX_SEGMENTS);
    let vertex_count = ((segments + 1) * 2) as usize;
    let mut mesh = MeshBuffers::with_capacity(vertex_count, (segments * 6) as usize);

    let half = length * 0.5;
    // Outward normals tilt along X when the radii differ.
    let slope = if length.abs() > f32::EPSILON {
        (radius_a - radius_b) / length
    } else {
        0.0
    };

    for (ring, (x, radius)) in [(-half, radius_a), (half, radius_b)].into_iter().enumerate() {
        let v = ring as f32;
        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let phi = u * TAU;
            let (sin, cos) = phi.sin_cos();
            let normal = glam::Vec3::new(slope, cos, sin).normalize();
            mesh.push_vertex(
                [x, radius * cos, radius * sin],
                normal.to_array(),
                [u, v],
            );
        }
    }

    let ring_b = segments + 1;
    for seg in 0..segments {
        let a = seg;
        let b = ring_b + seg;
        mesh.push_triangle(a, a + 1, b);
        mesh.push_triangle(a + 1, b + 1, b);
    }

    if facing == Facing::Inward {
        flip(&mut mesh);
    }
    mesh
}

/// A flat annular ring in the x = 0 plane, normal along +X.
///
/// UVs map the full outer diameter onto the unit square, so a printed
/// texture lands the same way it would on a disc of the same radius.
#[must_use]
pub fn annulus(
    inner_radius: f32,
    outer_radius: f32,
    radial_segments: u32,
    facing: Facing,
) -> MeshBuffers {
    let segments = radial_segments.clamp(3, MAX_SEGMENTS);
    let vertex_count = ((segments + 1) * 2) as usize;
    let mut mesh = MeshBuffers::with_capacity(vertex_count, (segments * 6) as usize);

    for radius in [inner_radius, outer_radius] {
        for seg in 0..=segments {
            let phi = seg as f32 / segments as f32 * TAU;
            let (sin, cos) = phi.sin_cos();
            let y = radius * cos;
            let z = radius * sin;
            mesh.push_vertex(
                [0.0, y, z],
                [1.0, 0.0, 0.0],
                planar_uv(y, z, outer_radius),
            );
        }
    }

    let outer_ring = segments + 1;
    for seg in 0..segments {
        let inner = seg;
        let outer = outer_ring + seg;
        mesh.push_triangle(inner, outer, outer + 1);
        mesh.push_triangle(inner, outer + 1, inner + 1);
    }

    if facing == Facing::Inward {
        flip(&mut mesh);
    }
    mesh
}

/// A filled disc in the x = 0 plane, normal along +X.
#[must_use]
pub fn disc(radius: f32, radial_segments: u32, facing: Facing) -> MeshBuffers {
    let segments = radial_segments.clamp(3, MAX_SEGMENTS);
    let mut mesh = MeshBuffers::with_capacity((segments + 2) as usize, (segments * 3) as usize);

    let center = mesh.push_vertex([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 0.5]);
    for seg in 0..=segments {
        let phi = seg as f32 / segments as f32 * TAU;
        let (sin, cos) = phi.sin_cos();
        let y = radius * cos;
        let z = radius * sin;
        mesh.push_vertex([0.0, y, z], [1.0, 0.0, 0.0], planar_uv(y, z, radius));
    }

    for seg in 0..segments {
        let rim = center + 1 + seg;
        mesh.push_triangle(center, rim, rim + 1);
    }

    if facing == Facing::Inward {
        flip(&mut mesh);
    }
    mesh
}

fn planar_uv(y: f32, z: f32, radius: f32) -> [f32; 2] {
    if radius > 0.0 {
        [0.5 + y / (radius * 2.0), 0.5 + z / (radius * 2.0)]
    } else {
        [0.5, 0.5]
    }
}

/// Reverses a mesh in place: negated normals and flipped winding.
fn flip(mesh: &mut MeshBuffers) {
    for normal in &mut mesh.normals {
        normal[0] = -normal[0];
        normal[1] = -normal[1];
        normal[2] = -normal[2];
    }
    for tri in mesh.indices.chunks_exact_mut(3) {
        tri.swap(1, 2);
    }
}
