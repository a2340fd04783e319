//! First-person fly camera.
//!
//! The camera keeps its orientation as Euler angles in degrees and derives
//! the `front`/`right`/`up` basis from them. The derived vectors are
//! recomputed every time yaw or pitch changes, so they are always mutually
//! orthogonal unit vectors; nothing outside this module can write them.

use glam::{Mat4, Vec3};

const MOVE_SPEED: f32 = 2.5;
const MOUSE_SENSITIVITY: f32 = 0.1;
const WORLD_UP: Vec3 = Vec3::Y;
const PITCH_LIMIT: f32 = 89.0;
const MIN_ZOOM: f32 = 1.0;
const MAX_ZOOM: f32 = 90.0;
const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_ZOOM: f32 = 45.0;

/// Movement directions, decoupled from any windowing library's key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    /// Degrees. Yaw −90 looks down −Z.
    yaw: f32,
    pitch: f32,
    /// Vertical field of view in degrees.
    zoom: f32,
}

impl Camera {
    /// A camera at `position` looking down −Z.
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, DEFAULT_YAW, 0.0)
    }

    /// A camera with an explicit initial yaw and pitch, in degrees.
    pub fn with_orientation(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: WORLD_UP,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: DEFAULT_ZOOM,
        };
        camera.update_axes();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// The world-to-camera transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical FOV.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, 0.1, 100.0)
    }

    /// Moves along the current front or right axis by `MOVE_SPEED * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = MOVE_SPEED * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a mouse delta in counts; positive `y_offset` pitches up.
    pub fn process_mouse_motion(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * MOUSE_SENSITIVITY;
        self.pitch += y_offset * MOUSE_SENSITIVITY;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_axes();
    }

    /// Applies a scroll-wheel delta; scrolling up narrows the FOV.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_axes(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Renormalized because the cross products shrink toward zero as the
        // camera looks straight up or down.
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front().length() - 1.0).abs() < EPSILON);
        assert!((camera.right().length() - 1.0).abs() < EPSILON);
        assert!((camera.up().length() - 1.0).abs() < EPSILON);
        assert!(camera.front().dot(camera.right()).abs() < EPSILON);
        assert!(camera.front().dot(camera.up()).abs() < EPSILON);
        assert!(camera.right().dot(camera.up()).abs() < EPSILON);
    }

    #[test]
    fn default_orientation_faces_negative_z() {
        let camera = Camera::new(Vec3::ZERO);
        assert_vec3_eq(camera.front(), Vec3::NEG_Z);
        assert_vec3_eq(camera.right(), Vec3::X);
        assert_vec3_eq(camera.up(), Vec3::Y);
    }

    #[test]
    fn mouse_motion_updates_yaw_and_front() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_motion(90.0, 0.0);
        assert!((camera.yaw() - -81.0).abs() < EPSILON);
        let yaw = (-81.0f32).to_radians();
        assert_vec3_eq(camera.front(), Vec3::new(yaw.cos(), 0.0, yaw.sin()));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_motion(0.0, 100_000.0);
        assert_eq!(camera.pitch(), 89.0);
        camera.process_mouse_motion(0.0, -200_000.0);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_scroll(1.0);
        assert!((camera.zoom() - 44.0).abs() < EPSILON);
        camera.process_mouse_scroll(1000.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.process_mouse_scroll(-1000.0);
        assert_eq!(camera.zoom(), 90.0);
    }

    #[test]
    fn axes_stay_orthonormal_under_mouse_motion() {
        let mut camera = Camera::new(Vec3::ZERO);
        let deltas = [
            (35.0, 10.0),
            (-120.0, 42.5),
            (7.25, -900.0),
            (400.0, 400.0),
            (-3.0, 0.5),
            (1000.0, -1000.0),
        ];
        for (dx, dy) in deltas {
            camera.process_mouse_motion(dx, dy);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn keyboard_movement_is_linear_in_delta_time() {
        let mut camera = Camera::with_orientation(Vec3::new(1.0, 2.0, 3.0), -30.0, 15.0);
        let front = camera.front();
        let start = camera.position;

        camera.process_keyboard(CameraMovement::Forward, 0.5);
        assert_vec3_eq(camera.position, start + front * (MOVE_SPEED * 0.5));

        camera.process_keyboard(CameraMovement::Backward, 0.5);
        assert_vec3_eq(camera.position, start);

        let right = camera.right();
        camera.process_keyboard(CameraMovement::Right, 2.0);
        assert_vec3_eq(camera.position, start + right * (MOVE_SPEED * 2.0));
    }

    #[test]
    fn strafing_does_not_change_height() {
        let mut camera = Camera::with_orientation(Vec3::ZERO, -45.0, 30.0);
        camera.process_keyboard(CameraMovement::Left, 1.0);
        // `right` is the cross of front and world up, so it is horizontal
        // even when the camera pitches.
        assert!(camera.position.y.abs() < EPSILON);
    }

    #[test]
    fn view_matrix_looks_along_front() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let view = camera.view_matrix();
        // A point straight ahead of the camera lands on the -Z axis in view
        // space.
        let ahead = camera.position + camera.front() * 2.0;
        let transformed = view.transform_point3(ahead);
        assert_vec3_eq(transformed, Vec3::new(0.0, 0.0, -2.0));
    }
}
