//! Orbit camera: drag to rotate around a fixed target, wheel to zoom.
//!
//! The camera position is kept in spherical coordinates around the target:
//! `polar` is measured from +Y, `azimuth` around +Y starting at +Z. There is
//! no pan; the target never moves.

use std::f32::consts::PI;

use super::math::Vec3;

/// Smallest distance between polar angle and the poles
const POLE_EPSILON: f32 = 0.01;
/// Radius factor per wheel step
const ZOOM_STEP: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    target: Vec3,
    radius: f32,
    azimuth: f32,
    polar: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitControls {
    /// Controls for a camera at `eye` looking at `target`.
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.len();
        let azimuth = offset.x.atan2(offset.z);
        let polar = if radius == 0.0 {
            PI / 2.0
        } else {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        };
        Self {
            target,
            radius,
            azimuth,
            polar: polar.clamp(POLE_EPSILON, PI - POLE_EPSILON),
            min_distance: 1.5,
            max_distance: 12.0,
        }
    }

    /// Limit the zoom range. `min` and `max` are swapped if given reversed.
    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_distance = min;
        self.max_distance = max;
        self.radius = self.radius.clamp(min, max);
        self
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Current camera position.
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_p * sin_a,
                self.radius * cos_p,
                self.radius * sin_p * cos_a,
            )
    }

    /// Rotate from a pointer drag of `(dx, dy)` CSS pixels. A drag across
    /// the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let per_px = 2.0 * PI / viewport_height;
        self.azimuth -= dx * per_px;
        self.polar = (self.polar - dy * per_px).clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }

    /// Zoom from a wheel event. Positive `delta_y` (scrolling down) moves
    /// the camera away.
    pub fn zoom(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.radius /= ZOOM_STEP;
        } else if delta_y < 0.0 {
            self.radius *= ZOOM_STEP;
        }
        self.radius = self.radius.clamp(self.min_distance, self.max_distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).len() < 1e-4
    }

    fn viewer() -> OrbitControls {
        OrbitControls::looking_at(Vec3::new(3.5, 2.5, 3.5), Vec3::ZERO)
    }

    #[test]
    fn reproduces_initial_eye() {
        assert!(close(viewer().eye(), Vec3::new(3.5, 2.5, 3.5)));
    }

    #[test]
    fn rotation_keeps_distance() {
        let mut orbit = viewer();
        let before = orbit.distance();
        orbit.rotate(120.0, -40.0, 360.0);
        assert!((orbit.eye().len() - before).abs() < 1e-4);
    }

    #[test]
    fn polar_stays_off_the_poles() {
        let mut orbit = viewer();
        orbit.rotate(0.0, 10_000.0, 360.0);
        assert!(orbit.polar() >= POLE_EPSILON);
        orbit.rotate(0.0, -10_000.0, 360.0);
        assert!(orbit.polar() <= PI - POLE_EPSILON);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut orbit = viewer();
        for _ in 0..200 {
            orbit.zoom(-100.0);
        }
        assert!((orbit.distance() - 1.5).abs() < 1e-6);
        for _ in 0..200 {
            orbit.zoom(100.0);
        }
        assert!((orbit.distance() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_does_not_zoom() {
        let mut orbit = viewer();
        let before = orbit.distance();
        orbit.zoom(0.0);
        assert_eq!(orbit.distance(), before);
    }

    #[test]
    fn target_never_moves() {
        let mut orbit = viewer();
        orbit.rotate(55.0, 12.0, 360.0);
        orbit.zoom(3.0);
        orbit.rotate(-200.0, 80.0, 360.0);
        assert_eq!(orbit.target(), Vec3::ZERO);
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let mut orbit = viewer();
        let before = orbit;
        orbit.rotate(10.0, 10.0, 0.0);
        assert_eq!(orbit, before);
    }

    #[test]
    fn reversed_limits_are_swapped() {
        let orbit = viewer().with_distance_limits(10.0, 8.0);
        assert!((orbit.distance() - 8.0).abs() < 1e-6);
    }
}
