//! Fly camera, projection and keyboard controller.
//!
//! Yaw and pitch are the only stored orientation; the forward/right/up basis
//! is rederived from them every frame instead of being integrated, so long
//! sessions cannot drift the basis out of orthogonality. Pitch is clamped
//! just short of straight up/down to keep the look-at basis well defined.

use cgmath::{perspective, InnerSpace, Matrix4, Point3, Rad, Vector3};

use crate::input::InputSample;

/// wgpu clip space is 0..1 in z where OpenGL-style projections give -1..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Just under 89 degrees; pitch never reaches the poles.
pub const SAFE_PITCH: Rad<f32> = Rad(1.5533);

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V, Y, P>(position: V, yaw: Y, pitch: P) -> Self
    where
        V: Into<Point3<f32>>,
        Y: Into<Rad<f32>>,
        P: Into<Rad<f32>>,
    {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.forward().cross(Vector3::unit_y()).normalize()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(self.forward())
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.forward(), Vector3::unit_y())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Integrates camera state from the per-frame input sample.
#[derive(Clone, Copy, Debug)]
pub struct CameraController {
    /// Units per second, before the fast boost.
    pub speed: f32,
    /// Radians per second of held rotation input.
    pub angular_rate: f32,
    /// Multiplier while the fast modifier is held.
    pub boost: f32,
}

impl CameraController {
    pub fn new(speed: f32, angular_rate: f32, boost: f32) -> Self {
        Self {
            speed,
            angular_rate,
            boost,
        }
    }

    /// Accumulate yaw/pitch, clamp pitch, then integrate position along the
    /// freshly rederived basis. Rotation is applied before movement so the
    /// basis used for movement matches what ends up on screen this frame.
    pub fn update(&self, camera: &mut Camera, sample: &InputSample) {
        let boost = if sample.fast { self.boost } else { 1.0 };
        let dt = sample.dt;

        camera.yaw += Rad(-sample.rotate_axes.y * self.angular_rate * dt);
        camera.pitch += Rad(sample.rotate_axes.x * self.angular_rate * dt);
        if camera.pitch > SAFE_PITCH {
            camera.pitch = SAFE_PITCH;
        } else if camera.pitch < -SAFE_PITCH {
            camera.pitch = -SAFE_PITCH;
        }

        let forward = camera.forward();
        let right = camera.right();
        let up = camera.up();
        let step = self.speed * boost * dt;
        camera.position += forward * sample.move_axes.z * step;
        camera.position += right * sample.move_axes.x * step;
        camera.position += up * sample.move_axes.y * step;
    }
}
