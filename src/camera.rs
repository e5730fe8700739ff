use std::time::Duration;

use cgmath::{Deg, Matrix4, Point3, Quaternion, Rotation, Rotation3, Vector3};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Looking down at the top, front and left faces.
    pub fn new(config: &wgpu::SurfaceConfiguration) -> Self {
        Self {
            eye: (-5.0, 5.0, 8.0).into(),
            target: (0.0, 0.0, 0.0).into(),
            up: Vector3::unit_y(),
            aspect: config.width as f32 / config.height as f32,
            fovy: 45.0,
            znear: 0.1,
            zfar: 50.0,
        }
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj = cgmath::perspective(Deg(self.fovy), self.aspect, self.znear, self.zfar);
        OPENGL_TO_WGPU_MATRIX * proj * view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix().into();
    }
}

/// Orbits the camera about the vertical axis through its target.
pub struct CameraController {
    /// Degrees per second; zero keeps the camera still.
    speed: f32,
}

impl CameraController {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn update_camera(&self, camera: &mut Camera, dt: Duration) {
        if self.speed == 0.0 {
            return;
        }
        let turn = Quaternion::from_angle_y(Deg(self.speed * dt.as_secs_f32()));
        let offset = camera.eye - camera.target;
        camera.eye = camera.target + turn.rotate_vector(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn camera() -> Camera {
        Camera {
            eye: (-5.0, 5.0, 8.0).into(),
            target: (0.0, 0.0, 0.0).into(),
            up: Vector3::unit_y(),
            aspect: 4.0 / 3.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 50.0,
        }
    }

    #[test]
    fn test_orbit_keeps_distance_and_height() {
        let mut camera = camera();
        let before = camera.eye - camera.target;
        CameraController::new(90.0).update_camera(&mut camera, Duration::from_millis(500));
        let after = camera.eye - camera.target;
        assert!((before.magnitude() - after.magnitude()).abs() < 1e-4);
        assert!((camera.eye.y - 5.0).abs() < 1e-4);
        assert!((camera.eye.x + 5.0).abs() > 1.0);
    }

    #[test]
    fn test_still_controller_leaves_camera() {
        let mut camera = camera();
        CameraController::new(0.0).update_camera(&mut camera, Duration::from_secs(1));
        assert_eq!(camera.eye, Point3::new(-5.0, 5.0, 8.0));
    }
}
