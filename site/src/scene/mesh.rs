//! Subdivided plane geometry for the cloth preview.
//!
//! The plane lies in the XY plane centred on the origin, facing +Z, with
//! `(segments_x + 1) * (segments_y + 1)` vertices laid out row by row from
//! the top edge. Positions and normals are flat `f32` arrays ready for
//! `bufferData`.

use super::math::Vec3;

/// How the cloth moves over time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ClothMotion {
    /// Geometry is uploaded once and never touched.
    #[default]
    Static,
    /// Z displacement from a sum of two travelling sine waves.
    Wave {
        /// Peak displacement in world units
        amplitude: f32,
        /// Angular speed in radians per second
        speed: f32,
    },
}

impl ClothMotion {
    /// Gentle ripple that keeps the plane readable.
    pub const GENTLE_WAVE: ClothMotion = ClothMotion::Wave {
        amplitude: 0.08,
        speed: 1.4,
    };

    pub fn is_animated(&self) -> bool {
        !matches!(self, ClothMotion::Static)
    }
}

#[derive(Debug, Clone)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments_x: u16,
    pub segments_y: u16,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u16>,
    /// Undisplaced positions, used as the base for wave displacement
    rest: Vec<f32>,
}

impl PlaneGeometry {
    /// Build a flat plane. Panics if the vertex count would overflow `u16`
    /// indices, which no literal call site does.
    pub fn new(width: f32, height: f32, segments_x: u16, segments_y: u16) -> Self {
        let cols = usize::from(segments_x) + 1;
        let rows = usize::from(segments_y) + 1;
        assert!(
            cols * rows <= usize::from(u16::MAX) + 1,
            "plane too dense for u16 indices"
        );

        let mut positions = Vec::with_capacity(cols * rows * 3);
        let mut normals = Vec::with_capacity(cols * rows * 3);
        for iy in 0..rows {
            let y = height / 2.0 - iy as f32 * height / f32::from(segments_y);
            for ix in 0..cols {
                let x = ix as f32 * width / f32::from(segments_x) - width / 2.0;
                positions.extend_from_slice(&[x, y, 0.0]);
                normals.extend_from_slice(&[0.0, 0.0, 1.0]);
            }
        }

        let mut indices = Vec::with_capacity(usize::from(segments_x) * usize::from(segments_y) * 6);
        for iy in 0..rows - 1 {
            for ix in 0..cols - 1 {
                let a = (iy * cols + ix) as u16;
                let b = ((iy + 1) * cols + ix) as u16;
                let c = ((iy + 1) * cols + ix + 1) as u16;
                let d = (iy * cols + ix + 1) as u16;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            width,
            height,
            segments_x,
            segments_y,
            rest: positions.clone(),
            positions,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Displace vertices for time `t` (seconds). A no-op for
    /// [`ClothMotion::Static`].
    pub fn animate(&mut self, motion: ClothMotion, t: f32) {
        let ClothMotion::Wave { amplitude, speed } = motion else {
            return;
        };
        for (pos, rest) in self.positions.chunks_exact_mut(3).zip(self.rest.chunks_exact(3)) {
            pos[2] = wave_height(rest[0], rest[1], t, amplitude, speed);
        }
        self.recompute_normals();
    }

    /// Area-weighted vertex normals from the current positions.
    fn recompute_normals(&mut self) {
        self.normals.iter_mut().for_each(|n| *n = 0.0);
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(usize::from);
            let pa = vertex(&self.positions, a);
            let pb = vertex(&self.positions, b);
            let pc = vertex(&self.positions, c);
            let face = (pb - pa).cross(pc - pa);
            for i in [a, b, c] {
                self.normals[i * 3] += face.x;
                self.normals[i * 3 + 1] += face.y;
                self.normals[i * 3 + 2] += face.z;
            }
        }
        for n in self.normals.chunks_exact_mut(3) {
            let v = Vec3::new(n[0], n[1], n[2]).normalize();
            n.copy_from_slice(&v.to_array());
        }
    }
}

fn vertex(positions: &[f32], i: usize) -> Vec3 {
    Vec3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2])
}

/// Two crossing sine waves over the grid coordinates.
pub fn wave_height(x: f32, y: f32, t: f32, amplitude: f32, speed: f32) -> f32 {
    let primary = (x * 2.1 + t * speed).sin();
    let secondary = (y * 3.3 + x * 0.7 - t * speed * 0.8).sin();
    amplitude * (0.65 * primary + 0.35 * secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloth() -> PlaneGeometry {
        PlaneGeometry::new(3.2, 2.2, 64, 64)
    }

    #[test]
    fn cloth_dimensions() {
        let plane = cloth();
        assert_eq!(plane.vertex_count(), 65 * 65);
        assert_eq!(plane.indices.len(), 64 * 64 * 6);
        assert!(plane.indices.iter().all(|&i| usize::from(i) < plane.vertex_count()));
    }

    #[test]
    fn spans_width_and_height() {
        let plane = cloth();
        let xs: Vec<f32> = plane.positions.chunks_exact(3).map(|p| p[0]).collect();
        let ys: Vec<f32> = plane.positions.chunks_exact(3).map(|p| p[1]).collect();
        let min = |v: &[f32]| v.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = |v: &[f32]| v.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((min(&xs) + 1.6).abs() < 1e-5);
        assert!((max(&xs) - 1.6).abs() < 1e-5);
        assert!((min(&ys) + 1.1).abs() < 1e-5);
        assert!((max(&ys) - 1.1).abs() < 1e-5);
    }

    #[test]
    fn triangles_face_forward() {
        let plane = PlaneGeometry::new(1.0, 1.0, 1, 1);
        let p = |i: u16| vertex(&plane.positions, usize::from(i));
        for tri in plane.indices.chunks_exact(3) {
            let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
            assert!(n.z > 0.0, "triangle {tri:?} winds backwards");
        }
    }

    #[test]
    fn static_motion_leaves_geometry_untouched() {
        let mut plane = cloth();
        let before = plane.positions.clone();
        plane.animate(ClothMotion::Static, 3.0);
        assert_eq!(plane.positions, before);
        assert!(plane.normals.chunks_exact(3).all(|n| n == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn wave_displaces_and_keeps_unit_normals() {
        let mut plane = cloth();
        plane.animate(ClothMotion::GENTLE_WAVE, 0.75);
        assert!(plane.positions.chunks_exact(3).any(|p| p[2].abs() > 1e-3));
        assert!(plane.positions.chunks_exact(3).all(|p| p[2].abs() <= 0.08 + 1e-6));
        for n in plane.normals.chunks_exact(3) {
            let len = Vec3::new(n[0], n[1], n[2]).len();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn wave_is_relative_to_rest_pose() {
        let mut a = cloth();
        let mut b = cloth();
        a.animate(ClothMotion::GENTLE_WAVE, 1.0);
        a.animate(ClothMotion::GENTLE_WAVE, 2.0);
        b.animate(ClothMotion::GENTLE_WAVE, 2.0);
        assert_eq!(a.positions, b.positions);
    }
}
