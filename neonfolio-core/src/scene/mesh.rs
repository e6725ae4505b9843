//! Triangle meshes for the primitive shapes the scene is built from.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::error::Error;

/// A parametric shape, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Capped cylinder along the Y axis.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u16,
    },
    Sphere {
        radius: f32,
        width_segments: u16,
        height_segments: u16,
    },
    /// Ring in the XY plane.
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u16,
        tubular_segments: u16,
    },
}

/// Interleaved vertex layout uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position: position.to_array(), normal: normal.normalize_or_zero().to_array() }
    }
}

/// Vertices plus two index lists over them: filled triangles and unique edges.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<u16>,
    pub edges: Vec<u16>,
}

impl MeshData {
    fn index(&self, offset: usize) -> u32 {
        (self.vertices.len() + offset) as u32
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.extend([a as u16, b as u16, c as u16]);
    }

    fn finish(mut self) -> Result<Self, Error> {
        if self.vertices.len() > usize::from(u16::MAX) {
            return Err(Error::index_overflow(self.vertices.len()));
        }

        self.edges = unique_edges(&self.triangles);
        Ok(self)
    }
}

/// Every distinct triangle edge, as pairs of indices.
fn unique_edges(triangles: &[u16]) -> Vec<u16> {
    let mut pairs: Vec<(u16, u16)> = triangles
        .chunks_exact(3)
        .flat_map(|t| [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])])
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect();

    pairs.sort_unstable();
    pairs.dedup();
    pairs.into_iter().flat_map(|(a, b)| [a, b]).collect()
}

impl Primitive {
    /// Builds the mesh for this shape.
    ///
    /// # Errors
    /// Returns [`Error::Scene`] if the segment counts produce more vertices
    /// than 16-bit indices can address.
    pub fn mesh(&self) -> Result<MeshData, Error> {
        let mesh = match *self {
            Primitive::Box { width, height, depth } => cuboid(width, height, depth),
            Primitive::Cylinder { radius_top, radius_bottom, height, radial_segments } => {
                cylinder(radius_top, radius_bottom, height, radial_segments.max(3))
            },
            Primitive::Sphere { radius, width_segments, height_segments } => {
                sphere(radius, width_segments.max(3), height_segments.max(2))
            },
            Primitive::Torus { radius, tube, radial_segments, tubular_segments } => {
                torus(radius, tube, radial_segments.max(3), tubular_segments.max(3))
            },
        };

        mesh.finish()
    }
}

fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) / 2.0;
    let mut mesh = MeshData::default();

    // (normal, u axis, v axis) per face
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    for (normal, u, v) in faces {
        let base = mesh.index(0);
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (normal + u * su + v * sv) * half;
            mesh.vertices.push(Vertex::new(corner, normal));
        }
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base, base + 2, base + 3);
    }

    mesh
}

fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u16) -> MeshData {
    let mut mesh = MeshData::default();
    let segments = u32::from(segments);
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // side: two rings, seam duplicated
    let side = mesh.index(0);
    for (y, radius) in [(half, radius_top), (-half, radius_bottom)] {
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(Vertex::new(
                Vec3::new(radius * sin, y, radius * cos),
                Vec3::new(sin, slope, cos),
            ));
        }
    }
    let row = segments + 1;
    for x in 0..segments {
        let (a, b, c, d) = (side + x, side + row + x, side + row + x + 1, side + x + 1);
        mesh.push_triangle(a, b, d);
        mesh.push_triangle(b, c, d);
    }

    // caps
    for (y, radius, normal) in [(half, radius_top, Vec3::Y), (-half, radius_bottom, Vec3::NEG_Y)] {
        if radius <= 0.0 {
            continue;
        }

        let center = mesh.index(0);
        mesh.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(Vertex::new(Vec3::new(radius * sin, y, radius * cos), normal));
        }
        for x in 0..segments {
            mesh.push_triangle(center, center + 1 + x, center + 2 + x);
        }
    }

    mesh
}

fn sphere(radius: f32, width_segments: u16, height_segments: u16) -> MeshData {
    let mut mesh = MeshData::default();
    let (ws, hs) = (u32::from(width_segments), u32::from(height_segments));

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(Vertex::new(p, p));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // pole rows collapse to a single triangle
            if iy != 0 {
                mesh.push_triangle(a, b, d);
            }
            if iy != hs - 1 {
                mesh.push_triangle(b, c, d);
            }
        }
    }

    mesh
}

fn torus(radius: f32, tube: f32, radial_segments: u16, tubular_segments: u16) -> MeshData {
    let mut mesh = MeshData::default();
    let (rs, ts) = (u32::from(radial_segments), u32::from(tubular_segments));

    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(Vertex::new(p, p - center));
        }
    }

    let row = ts + 1;
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_six_quads() {
        let mesh = Primitive::Box { width: 1.2, height: 1.2, depth: 0.3 }.mesh().unwrap();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangles.len(), 36);
        // 4 outline + 1 diagonal per face
        assert_eq!(mesh.edges.len() / 2, 30);

        let max_x = mesh.vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((max_x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn sphere_vertices_lie_on_surface() {
        let mesh = Primitive::Sphere { radius: 0.3, width_segments: 16, height_segments: 16 }
            .mesh()
            .unwrap();
        for v in &mesh.vertices {
            assert!((Vec3::from_array(v.position).length() - 0.3).abs() < 1e-5);
        }
        // two triangles per quad minus one per pole column
        assert_eq!(mesh.triangles.len() / 3, 16 * 16 * 2 - 2 * 16);
    }

    #[test]
    fn cylinder_caps_and_side() {
        let mesh = Primitive::Cylinder {
            radius_top: 0.8,
            radius_bottom: 0.8,
            height: 0.5,
            radial_segments: 16,
        }
        .mesh()
        .unwrap();
        assert_eq!(mesh.triangles.len() / 3, 16 * 2 + 16 * 2);
        assert!(mesh.vertices.iter().all(|v| v.position[1].abs() <= 0.25 + 1e-6));
    }

    #[test]
    fn torus_stays_in_its_tube() {
        let mesh = Primitive::Torus {
            radius: 0.15,
            tube: 0.05,
            radial_segments: 8,
            tubular_segments: 16,
        }
        .mesh()
        .unwrap();
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let ring = (p.x * p.x + p.y * p.y).sqrt();
            let off = Vec3::new(ring - 0.15, 0.0, p.z).length();
            assert!((off - 0.05).abs() < 1e-5);
        }
    }

    #[test]
    fn edges_are_unique_pairs() {
        let edges = unique_edges(&[0, 1, 2, 2, 1, 3]);
        assert_eq!(edges, vec![0, 1, 0, 2, 1, 2, 1, 3, 2, 3]);
    }

    #[test]
    fn oversized_mesh_is_rejected() {
        let result = Primitive::Sphere {
            radius: 1.0,
            width_segments: 400,
            height_segments: 400,
        }
        .mesh();
        assert!(matches!(result, Err(Error::Scene(_))));
    }
}
