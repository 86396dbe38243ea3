use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// One vertex of the panel plane. Uploaded as-is to the vertex buffer:
/// 5 floats = 20 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PlaneVertex {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const UV_OFFSET_BYTES: usize = 3 * 4;
}

/// A square plane centered on the origin, subdivided into `segments` x
/// `segments` quads. UV (0, 0) is the bottom-left corner.
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u16>,
}

impl PlaneMesh {
    pub fn new(size: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let row = segments + 1;
        let half = size / 2.0;
        let step = size / segments as f32;

        let mut vertices = Vec::with_capacity((row * row) as usize);
        for iy in 0..row {
            for ix in 0..row {
                let x = ix as f32 * step - half;
                let y = half - iy as f32 * step;
                vertices.push(PlaneVertex {
                    position: [x, y, 0.0],
                    uv: [ix as f32 / segments as f32, 1.0 - iy as f32 / segments as f32],
                });
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = (ix + row * iy) as u16;
                let b = (ix + row * (iy + 1)) as u16;
                let c = (ix + 1 + row * (iy + 1)) as u16;
                let d = (ix + 1 + row * iy) as u16;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self { vertices, indices }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Orthographic camera looking down -Z at the panel from `z = 10`,
/// showing exactly `size` x `size` world units.
pub fn view_projection(size: f32) -> Mat4 {
    let half = size / 2.0;
    let projection = Mat4::orthographic_rh_gl(-half, half, -half, half, 1.0, 1000.0);
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0));
    projection * view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_counts() {
        let mesh = PlaneMesh::new(250.0, 48);
        assert_eq!(mesh.vertices.len(), 49 * 49);
        assert_eq!(mesh.indices.len(), 48 * 48 * 6);
        assert_eq!(mesh.vertex_bytes().len(), 49 * 49 * PlaneVertex::STRIDE_BYTES);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn corners_map_to_uv_corners() {
        let mesh = PlaneMesh::new(250.0, 48);
        let first = mesh.vertices[0];
        assert_eq!(first.position, [-125.0, 125.0, 0.0]);
        assert_eq!(first.uv, [0.0, 1.0]);
        let last = mesh.vertices[mesh.vertices.len() - 1];
        assert_eq!(last.position, [125.0, -125.0, 0.0]);
        assert_eq!(last.uv, [1.0, 0.0]);
    }

    #[test]
    fn camera_fills_clip_space() {
        let m = view_projection(250.0);
        let corner = m.project_point3(Vec3::new(125.0, 125.0, 0.0));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);
        assert!(corner.z > -1.0 && corner.z < 1.0);
    }
}
