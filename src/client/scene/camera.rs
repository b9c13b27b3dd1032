use std::f64::consts::PI;

use super::math::{Ray, Vec3};

pub const FOV_DEGREES: f64 = 50.0;
pub const NEAR: f64 = 0.1;
pub const FAR: f64 = 1000.0;
pub const START_DISTANCE: f64 = 2.2;

/// Perspective camera looking at `target`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f64,
    pub aspect: f64,
}

struct Basis {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    pub fn new(aspect: f64) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, START_DISTANCE),
            target: Vec3::ZERO,
            fov_degrees: FOV_DEGREES,
            aspect,
        }
    }

    fn basis(&self) -> Basis {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        Basis { forward, right, up }
    }

    fn half_fov_tan(&self) -> f64 {
        (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Ray from the camera through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let basis = self.basis();
        let tan = self.half_fov_tan();
        let direction = basis.forward
            + basis.right * (ndc_x * tan * self.aspect)
            + basis.up * (ndc_y * tan);
        Ray::new(self.position, direction)
    }

    /// Normalized device coordinates of `point`, or `None` when it lies
    /// outside the depth range.
    pub fn project(&self, point: Vec3) -> Option<(f64, f64)> {
        let basis = self.basis();
        let tan = self.half_fov_tan();
        let offset = point - self.position;
        let depth = offset.dot(basis.forward);
        if !(NEAR..=FAR).contains(&depth) {
            return None;
        }
        Some((
            offset.dot(basis.right) / (depth * tan * self.aspect),
            offset.dot(basis.up) / (depth * tan),
        ))
    }
}

/// Drag-to-orbit and wheel zoom around the camera target, with damping.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub damping_factor: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    delta_theta: f64,
    delta_phi: f64,
    scale: f64,
}

const ZOOM_STEP: f64 = 0.95;
const PHI_EPS: f64 = 1e-6;

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            damping_factor: 0.05,
            min_distance: 1.5,
            max_distance: 4.0,
            enable_zoom: true,
            enable_pan: false,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Pointer drag of `dx`/`dy` pixels in a viewport `height` pixels tall.
    pub fn drag(&mut self, dx: f64, dy: f64, height: f64) {
        if height <= 0.0 {
            return;
        }
        self.delta_theta -= 2.0 * PI * dx / height;
        self.delta_phi -= 2.0 * PI * dy / height;
    }

    pub fn zoom_in(&mut self) {
        if self.enable_zoom {
            self.scale *= ZOOM_STEP;
        }
    }

    pub fn zoom_out(&mut self) {
        if self.enable_zoom {
            self.scale /= ZOOM_STEP;
        }
    }

    /// Applies one frame of pending rotation and zoom to `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.position - camera.target;
        let mut radius = offset.length();
        if radius == 0.0 {
            return;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta_theta * self.damping_factor;
        phi += self.delta_phi * self.damping_factor;
        phi = phi.clamp(PHI_EPS, PI - PHI_EPS);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        camera.position = camera.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );

        self.delta_theta *= 1.0 - self.damping_factor;
        self.delta_phi *= 1.0 - self.damping_factor;
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::new(16.0 / 9.0);
        let ray = camera.ray_from_ndc(0.0, 0.0);
        assert!((ray.direction.z + 1.0).abs() < EPS);
    }

    #[test]
    fn project_inverts_ray_from_ndc() {
        let camera = Camera::new(1.5);
        let ray = camera.ray_from_ndc(0.3, -0.4);
        let (x, y) = camera.project(ray.at(2.0)).unwrap();
        assert!((x - 0.3).abs() < EPS);
        assert!((y + 0.4).abs() < EPS);
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        let camera = Camera::new(1.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn idle_update_keeps_camera_still() {
        let mut camera = Camera::new(1.0);
        let mut controls = OrbitControls::default();
        controls.update(&mut camera);
        assert!((camera.position - Vec3::new(0.0, 0.0, START_DISTANCE)).length() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped_to_distance_range() {
        let mut camera = Camera::new(1.0);
        let mut controls = OrbitControls::default();
        for _ in 0..50 {
            controls.zoom_in();
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 1.5).abs() < 1e-6);
        for _ in 0..100 {
            controls.zoom_out();
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn drag_rotation_decays() {
        let mut camera = Camera::new(1.0);
        let mut controls = OrbitControls::default();
        controls.drag(100.0, 0.0, 800.0);
        controls.update(&mut camera);
        let first = camera.position;
        assert!(first.x.abs() > 0.0);
        for _ in 0..500 {
            controls.update(&mut camera);
        }
        let settled = camera.position;
        controls.update(&mut camera);
        assert!((camera.position - settled).length() < 1e-6);
        assert!((camera.position.length() - START_DISTANCE).abs() < 1e-6);
    }
}
