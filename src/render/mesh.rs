use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// CPU-side geometry ready for upload. `indices` are triangle triples for
/// solid meshes and line pairs for wireframes.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Square in the local XY plane facing +Z, `size` units on a side.
pub fn plane(size: f32) -> MeshData {
    let h = size * 0.5;
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex { position: [-h, -h, 0.0], normal: n },
        Vertex { position: [h, -h, 0.0], normal: n },
        Vertex { position: [h, h, 0.0], normal: n },
        Vertex { position: [-h, h, 0.0], normal: n },
    ];
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Vertex grid shared by the solid and wire spheres: `rings + 1` latitude
/// rows of `segments + 1` vertices (the seam column is duplicated).
fn sphere_vertices(segments: u16, rings: u16) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let phi = v * PI;
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let theta = u * TAU;
            let p = [
                -theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            ];
            vertices.push(Vertex {
                position: p,
                normal: p,
            });
        }
    }
    vertices
}

/// Unit UV sphere.
pub fn uv_sphere(segments: u16, rings: u16) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let vertices = sphere_vertices(segments, rings);
    let row = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = r * row + s;
            let b = a + row;
            // Skip the degenerate triangles at the poles.
            if r != 0 {
                indices.extend_from_slice(&[a, b, a + 1]);
            }
            if r != rings - 1 {
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }
    MeshData { vertices, indices }
}

/// Unit sphere as a line list of latitude and longitude edges.
pub fn wire_sphere(segments: u16, rings: u16) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let vertices = sphere_vertices(segments, rings);
    let row = segments + 1;
    let mut indices = Vec::new();
    for r in 0..=rings {
        for s in 0..segments {
            let a = r * row + s;
            // Latitude edge; the pole rows collapse to a point.
            if r != 0 && r != rings {
                indices.extend_from_slice(&[a, a + 1]);
            }
            // Longitude edge.
            if r != rings {
                indices.extend_from_slice(&[a, a + row]);
            }
        }
    }
    MeshData { vertices, indices }
}
