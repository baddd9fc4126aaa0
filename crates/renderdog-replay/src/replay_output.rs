use crate::camera::Camera;
use crate::engine::{EngineReplayController, EngineReplayOutput};
use crate::types::{
    CompType, MeshDisplay, PixelValue, ResourceId, TextureDisplay, WindowData, WindowingSystem,
};

/// One render surface bound to the [`crate::ReplayController`] that created it.
///
/// The borrow keeps the output from outliving its controller. Dropping the output asks that
/// controller to release it.
pub struct ReplayOutput<'c> {
    controller: &'c dyn EngineReplayController,
    inner: Option<Box<dyn EngineReplayOutput>>,
}

impl<'c> ReplayOutput<'c> {
    /// Returned by [`ReplayOutput::pick_vertex`] when nothing was hit.
    pub const NO_RESULT: u32 = !0u32;

    pub(crate) fn new(
        controller: &'c dyn EngineReplayController,
        inner: Box<dyn EngineReplayOutput>,
    ) -> Self {
        tracing::debug!(handle = "replay_output", "acquired");
        Self {
            controller,
            inner: Some(inner),
        }
    }

    fn inner(&self) -> &dyn EngineReplayOutput {
        match self.inner.as_deref() {
            Some(inner) => inner,
            None => unreachable!("replay output used after release"),
        }
    }

    pub fn set_texture_display(&self, display: &TextureDisplay) {
        self.inner().set_texture_display(display)
    }

    /// `camera` is the viewpoint for the mesh view; `None` leaves the engine default.
    pub fn set_mesh_display(&self, display: &MeshDisplay, camera: Option<&Camera>) {
        self.inner()
            .set_mesh_display(display, camera.map(Camera::engine))
    }

    pub fn clear_thumbnails(&self) {
        self.inner().clear_thumbnails()
    }

    pub fn add_thumbnail(
        &self,
        system: WindowingSystem,
        data: WindowData,
        texture: ResourceId,
        type_hint: CompType,
    ) -> bool {
        self.inner().add_thumbnail(system, data, texture, type_hint)
    }

    pub fn display(&self) {
        self.inner().display()
    }

    pub fn set_pixel_context(&self, system: WindowingSystem, data: WindowData) -> bool {
        self.inner().set_pixel_context(system, data)
    }

    pub fn set_pixel_context_location(&self, x: u32, y: u32) {
        self.inner().set_pixel_context_location(x, y)
    }

    pub fn disable_pixel_context(&self) {
        self.inner().disable_pixel_context()
    }

    /// `(min, max)` over the currently displayed texture.
    pub fn get_min_max(&self) -> (PixelValue, PixelValue) {
        self.inner().get_min_max()
    }

    pub fn get_histogram(&self, min_val: f32, max_val: f32, channels: [bool; 4]) -> Vec<u32> {
        self.inner().get_histogram(min_val, max_val, channels)
    }

    pub fn get_custom_shader_tex_id(&self) -> ResourceId {
        self.inner().get_custom_shader_tex_id()
    }

    pub fn get_debug_overlay_tex_id(&self) -> ResourceId {
        self.inner().get_debug_overlay_tex_id()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pick_pixel(
        &self,
        texture: ResourceId,
        custom_shader: bool,
        x: u32,
        y: u32,
        slice_face: u32,
        mip: u32,
        sample: u32,
    ) -> PixelValue {
        self.inner()
            .pick_pixel(texture, custom_shader, x, y, slice_face, mip, sample)
    }

    /// `(vertex index, instance)`; both are [`ReplayOutput::NO_RESULT`] on a miss.
    pub fn pick_vertex(&self, event_id: u32, x: u32, y: u32) -> (u32, u32) {
        self.inner().pick_vertex(event_id, x, y)
    }
}

impl Drop for ReplayOutput<'_> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            tracing::debug!(handle = "replay_output", "shutdown through controller");
            self.controller.shutdown_output(inner);
        }
    }
}

impl std::fmt::Debug for ReplayOutput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplayOutput")
            .field("live", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEngine;
    use crate::types::{CameraType, ReplayOutputType};
    use crate::{CaptureFile, ReplayController};

    fn open(engine: &MockEngine) -> ReplayController {
        let api = engine.api();
        CaptureFile::open(&api, "frame.rdc")
            .unwrap()
            .open_capture(None)
            .unwrap()
    }

    #[test]
    fn pick_and_histogram_forward_unchanged() {
        let engine = MockEngine::new();
        {
            let mut script = engine.script();
            script.pick_pixel = PixelValue::from_f32([0.5, 0.25, 1.0, 1.0]);
            script.pick_vertex = (ReplayOutput::NO_RESULT, ReplayOutput::NO_RESULT);
            script.histogram = vec![0, 4, 9];
        }
        let controller = open(&engine);
        let output = controller
            .create_output(WindowingSystem::Xlib, std::ptr::null_mut(), ReplayOutputType::Texture)
            .unwrap();

        let pixel = output.pick_pixel(ResourceId(12), false, 3, 4, 0, 1, 0);
        let vertex = output.pick_vertex(8, 100, 200);
        let histogram = output.get_histogram(0.0, 1.0, [true, false, true, false]);

        assert_eq!(pixel.value_f(), [0.5, 0.25, 1.0, 1.0]);
        assert_eq!(vertex, (ReplayOutput::NO_RESULT, ReplayOutput::NO_RESULT));
        assert_eq!(histogram, vec![0, 4, 9]);
        assert_eq!(
            engine.calls_for("output#1."),
            [
                "output#1.pick_pixel(12, false, 3, 4, 0, 1, 0)",
                "output#1.pick_vertex(8, 100, 200)",
                "output#1.get_histogram(0.0, 1.0, [true, false, true, false])",
            ]
        );
    }

    #[test]
    fn mesh_display_hands_over_the_engine_camera() {
        let engine = MockEngine::new();
        let api = engine.api();
        let controller = open(&engine);
        let output = controller
            .create_output(WindowingSystem::Unknown, std::ptr::null_mut(), ReplayOutputType::Mesh)
            .unwrap();
        let camera = Camera::new(&api, CameraType::Arcball).unwrap();

        output.set_mesh_display(&MeshDisplay::default(), Some(&camera));
        output.set_mesh_display(&MeshDisplay::default(), None);

        assert_eq!(
            engine.calls_for("output#1."),
            [
                "output#1.set_mesh_display(camera#1)",
                "output#1.set_mesh_display(no camera)",
            ]
        );
    }

    #[test]
    fn pixel_context_calls_keep_argument_order() {
        let engine = MockEngine::new();
        let controller = open(&engine);
        let output = controller
            .create_output(
                WindowingSystem::Unknown,
                std::ptr::null_mut(),
                ReplayOutputType::Texture,
            )
            .unwrap();

        assert!(output.set_pixel_context(WindowingSystem::Win32, std::ptr::null_mut()));
        output.set_pixel_context_location(640, 360);
        output.disable_pixel_context();

        assert_eq!(
            engine.calls_for("output#1."),
            [
                "output#1.set_pixel_context(Win32)",
                "output#1.set_pixel_context_location(640, 360)",
                "output#1.disable_pixel_context()",
            ]
        );
    }

    #[test]
    fn texture_view_calls_forward_unchanged() {
        let engine = MockEngine::new();
        let min = PixelValue::from_f32([0.0; 4]);
        let max = PixelValue::from_f32([1.0, 0.5, 0.25, 1.0]);
        {
            let mut script = engine.script();
            script.min_max = (min, max);
            script.overlay_ids = (ResourceId(31), ResourceId(32));
        }
        let controller = open(&engine);
        let output = controller
            .create_output(WindowingSystem::Win32, std::ptr::null_mut(), ReplayOutputType::Texture)
            .unwrap();
        let display = TextureDisplay {
            resource_id: ResourceId(5),
            ..TextureDisplay::default()
        };

        output.set_texture_display(&display);
        let added = output.add_thumbnail(
            WindowingSystem::Win32,
            std::ptr::null_mut(),
            ResourceId(5),
            CompType::Float,
        );
        output.clear_thumbnails();

        assert!(added);
        assert_eq!(output.get_min_max(), (min, max));
        assert_eq!(output.get_custom_shader_tex_id(), ResourceId(31));
        assert_eq!(output.get_debug_overlay_tex_id(), ResourceId(32));
        assert_eq!(
            engine.calls_for("output#1."),
            [
                "output#1.set_texture_display(5)",
                "output#1.add_thumbnail(Win32, 5, Float)",
                "output#1.clear_thumbnails()",
                "output#1.get_min_max()",
                "output#1.get_custom_shader_tex_id()",
                "output#1.get_debug_overlay_tex_id()",
            ]
        );
    }
}
