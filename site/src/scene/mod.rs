//! Decorative cloth preview shown in the hero panel.
//!
//! - [`math`] - vectors and column-major matrices
//! - [`mesh`] - the subdivided plane and its optional wave motion
//! - [`orbit`] - drag/wheel orbit camera without pan
//! - [`gl`] - WebGL renderer used in the browser
//!
//! Everything except [`gl`] is plain data and math, so it is tested natively.

pub mod gl;
pub mod math;
pub mod mesh;
pub mod orbit;

pub use gl::ClothRenderer;
pub use math::{Mat4, Vec3};
pub use mesh::{ClothMotion, PlaneGeometry};
pub use orbit::OrbitControls;

/// Matte surface description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base colour as `0xRRGGBB` (sRGB)
    pub color: u32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    /// Base colour converted to linear RGB for lighting.
    pub fn linear_rgb(&self) -> [f32; 3] {
        [16, 8, 0].map(|shift| srgb_to_linear(((self.color >> shift) & 0xff) as f32 / 255.0))
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient_intensity: f32,
    /// Directional light position; light travels from here towards the origin
    pub directional_position: Vec3,
    pub directional_intensity: f32,
}

impl Lighting {
    /// Unit vector pointing from the surface towards the light.
    pub fn to_light(&self) -> Vec3 {
        self.directional_position.normalize()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Closest and farthest zoom, in world units from the target
    pub zoom_range: (f32, f32),
}

/// Everything needed to draw the cloth preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothScene {
    pub width: f32,
    pub height: f32,
    pub segments: u16,
    /// Fixed Euler rotation (XYZ order) of the plane, radians
    pub rotation: [f32; 3],
    pub material: Material,
    pub lighting: Lighting,
    pub camera: CameraSettings,
    pub motion: ClothMotion,
    /// Clear colour as linear RGB
    pub background: [f32; 3],
}

impl ClothScene {
    pub fn geometry(&self) -> PlaneGeometry {
        PlaneGeometry::new(self.width, self.height, self.segments, self.segments)
    }

    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z] = self.rotation;
        Mat4::from_euler_xyz(x, y, z)
    }

    pub fn orbit(&self) -> OrbitControls {
        let (min, max) = self.camera.zoom_range;
        OrbitControls::looking_at(self.camera.position, self.camera.target)
            .with_distance_limits(min, max)
    }
}

impl Default for ClothScene {
    fn default() -> Self {
        Self {
            width: 3.2,
            height: 2.2,
            segments: 64,
            rotation: [-0.6, 0.6, 0.0],
            material: Material {
                color: 0xb6e3ff,
                roughness: 0.9,
                metalness: 0.05,
            },
            lighting: Lighting {
                ambient_intensity: 0.6,
                directional_position: Vec3::new(4.0, 6.0, 3.0),
                directional_intensity: 1.1,
            },
            camera: CameraSettings {
                position: Vec3::new(3.5, 2.5, 3.5),
                target: Vec3::ZERO,
                fov_y_degrees: 45.0,
                near: 0.1,
                far: 100.0,
                zoom_range: (1.5, 12.0),
            },
            motion: ClothMotion::Static,
            // zinc-950
            background: [0.0027, 0.0027, 0.0040],
        }
    }
}
