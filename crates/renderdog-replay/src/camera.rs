use crate::api::Api;
use crate::engine::EngineCamera;
use crate::error::ReplayError;
use crate::handle::Handle;
use crate::types::{CameraType, FloatVector};

/// View transform for arcball or FPS-style navigation of the mesh viewer.
#[derive(Debug)]
pub struct Camera {
    inner: Handle<dyn EngineCamera>,
}

impl Camera {
    pub fn new(api: &Api, camera_type: CameraType) -> Result<Self, ReplayError> {
        api.init_camera(camera_type)
    }

    pub(crate) fn from_engine(inner: Box<dyn EngineCamera>) -> Self {
        Self {
            inner: Handle::new("camera", inner),
        }
    }

    pub(crate) fn engine(&self) -> &dyn EngineCamera {
        self.inner.get()
    }

    pub fn set_position(&self, x: f32, y: f32, z: f32) {
        self.inner.get().set_position(x, y, z)
    }

    pub fn set_fps_rotation(&self, x: f32, y: f32, z: f32) {
        self.inner.get().set_fps_rotation(x, y, z)
    }

    pub fn set_arcball_distance(&self, dist: f32) {
        self.inner.get().set_arcball_distance(dist)
    }

    pub fn reset_arcball(&self) {
        self.inner.get().reset_arcball()
    }

    pub fn rotate_arcball(&self, ax: f32, ay: f32, bx: f32, by: f32) {
        self.inner.get().rotate_arcball(ax, ay, bx, by)
    }

    pub fn get_position(&self) -> FloatVector {
        self.inner.get().get_position()
    }

    pub fn get_forward(&self) -> FloatVector {
        self.inner.get().get_forward()
    }

    pub fn get_right(&self) -> FloatVector {
        self.inner.get().get_right()
    }

    pub fn get_up(&self) -> FloatVector {
        self.inner.get().get_up()
    }

    /// Releases the engine camera now instead of at end of scope.
    pub fn shutdown(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEngine;

    #[test]
    fn arcball_sequence_passes_through() {
        let engine = MockEngine::new();
        engine.script().forward = FloatVector::new(0.25, -0.5, 0.75, 1.0);
        let api = engine.api();

        let cam = Camera::new(&api, CameraType::Arcball).unwrap();
        cam.set_position(0.0, 0.0, 0.0);
        cam.rotate_arcball(0.0, 0.0, 1.0, 0.0);
        let fwd = cam.get_forward();

        assert_eq!(fwd, FloatVector::new(0.25, -0.5, 0.75, 1.0));
        assert_eq!(
            engine.calls(),
            [
                "init_camera(Arcball)",
                "camera#1.set_position(0.0, 0.0, 0.0)",
                "camera#1.rotate_arcball(0.0, 0.0, 1.0, 0.0)",
                "camera#1.get_forward()",
            ]
        );
    }

    #[test]
    fn fps_and_basis_queries_forward_arguments_in_order() {
        let engine = MockEngine::new();
        let api = engine.api();

        let cam = Camera::new(&api, CameraType::FpsLook).unwrap();
        cam.set_fps_rotation(2.0, -1.0, 9.0);
        cam.set_arcball_distance(12.0);
        cam.reset_arcball();
        let _ = cam.get_position();
        let _ = cam.get_right();
        let _ = cam.get_up();

        assert_eq!(
            engine.calls()[1..],
            [
                "camera#1.set_fps_rotation(2.0, -1.0, 9.0)",
                "camera#1.set_arcball_distance(12.0)",
                "camera#1.reset_arcball()",
                "camera#1.get_position()",
                "camera#1.get_right()",
                "camera#1.get_up()",
            ]
        );
    }

    #[test]
    fn shutdown_runs_once_for_explicit_and_implicit_release() {
        let engine = MockEngine::new();
        let api = engine.api();

        let explicit = Camera::new(&api, CameraType::Arcball).unwrap();
        explicit.shutdown();
        {
            let _scoped = Camera::new(&api, CameraType::Arcball).unwrap();
        }

        assert_eq!(engine.count("camera#1.shutdown()"), 1);
        assert_eq!(engine.count("camera#2.shutdown()"), 1);
    }
}
