use crate::engine::{EngineReplayController, RawOpenCapture};
use crate::handle::Handle;
use crate::pipeline::{D3D11PipelineState, D3D12PipelineState, GlPipelineState, VulkanPipelineState};
use crate::replay_output::ReplayOutput;
use crate::types::{
    ApiProperties, BufferDescription, CompType, CounterDescription, CounterResult, DebugMessage,
    DrawcallDescription, EventUsage, FrameDescription, GpuCounter, MeshDataStage, MeshFormat,
    PixelModification, ReplayOutputType, ReplayStatus, ResourceId, ShaderDebugTrace,
    ShaderReflection, ShaderStage, ShaderVariable, TextureDescription, TextureSave, WindowData,
    WindowingSystem,
};

/// A live replay session over an opened capture.
///
/// Only obtainable from [`crate::CaptureFile::open_capture`] or
/// [`crate::RemoteServer::open_capture`].
#[derive(Debug)]
pub struct ReplayController {
    inner: Handle<dyn EngineReplayController>,
}

impl ReplayController {
    /// Passed as an instance/index argument to mean "no particular one".
    pub const NO_PREFERENCE: u32 = !0u32;

    /// Wraps the engine controller only when the engine reported success.
    pub(crate) fn from_open(
        origin: &'static str,
        raw: RawOpenCapture,
    ) -> Result<Self, ReplayStatus> {
        match raw {
            (ReplayStatus::Succeeded, Some(inner)) => {
                tracing::debug!(origin, "capture opened");
                Ok(Self {
                    inner: Handle::new("replay_controller", inner),
                })
            }
            (ReplayStatus::Succeeded, None) => {
                tracing::error!(origin, "engine reported success without a controller");
                Err(ReplayStatus::InternalError)
            }
            (status, stray) => {
                if stray.is_some() {
                    tracing::warn!(
                        origin,
                        status = ?status,
                        "discarding controller from failed open"
                    );
                } else {
                    tracing::debug!(origin, status = ?status, "capture open failed");
                }
                Err(status)
            }
        }
    }

    /// Hands the engine controller over without shutting it down.
    pub(crate) fn into_engine(self) -> Box<dyn EngineReplayController> {
        self.inner.release()
    }

    pub fn get_api_properties(&self) -> ApiProperties {
        self.inner.get().get_api_properties()
    }

    pub fn get_supported_window_systems(&self) -> Vec<WindowingSystem> {
        self.inner.get().get_supported_window_systems()
    }

    /// Creates an output bound to this controller. `None` when the engine declines.
    pub fn create_output(
        &self,
        system: WindowingSystem,
        data: WindowData,
        output_type: ReplayOutputType,
    ) -> Option<ReplayOutput<'_>> {
        let inner = self.inner.get();
        inner
            .create_output(system, data, output_type)
            .map(|output| ReplayOutput::new(inner, output))
    }

    /// Releases an output through this controller. Equivalent to dropping it.
    pub fn shutdown_output(&self, output: ReplayOutput<'_>) {
        drop(output);
    }

    pub fn replay_loop(&self, system: WindowingSystem, data: WindowData, texture: ResourceId) {
        self.inner.get().replay_loop(system, data, texture)
    }

    pub fn cancel_replay_loop(&self) {
        self.inner.get().cancel_replay_loop()
    }

    pub fn file_changed(&self) {
        self.inner.get().file_changed()
    }

    pub fn has_callstacks(&self) -> bool {
        self.inner.get().has_callstacks()
    }

    pub fn init_resolver(&self) -> bool {
        self.inner.get().init_resolver()
    }

    pub fn set_frame_event(&self, event_id: u32, force: bool) {
        self.inner.get().set_frame_event(event_id, force)
    }

    pub fn get_d3d11_pipeline_state(&self) -> D3D11PipelineState {
        self.inner.get().get_d3d11_pipeline_state()
    }

    pub fn get_d3d12_pipeline_state(&self) -> D3D12PipelineState {
        self.inner.get().get_d3d12_pipeline_state()
    }

    pub fn get_gl_pipeline_state(&self) -> GlPipelineState {
        self.inner.get().get_gl_pipeline_state()
    }

    pub fn get_vulkan_pipeline_state(&self) -> VulkanPipelineState {
        self.inner.get().get_vulkan_pipeline_state()
    }

    pub fn get_disassembly_targets(&self) -> Vec<String> {
        self.inner.get().get_disassembly_targets()
    }

    pub fn disassemble_shader(&self, refl: &ShaderReflection, target: &str) -> String {
        self.inner.get().disassemble_shader(refl, target)
    }

    /// Returns the new shader's id and the compiler's error text.
    pub fn build_custom_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String) {
        self.inner
            .get()
            .build_custom_shader(entry, source, compile_flags, stage)
    }

    pub fn free_custom_shader(&self, id: ResourceId) {
        self.inner.get().free_custom_shader(id)
    }

    pub fn build_target_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String) {
        self.inner
            .get()
            .build_target_shader(entry, source, compile_flags, stage)
    }

    pub fn replace_resource(&self, original: ResourceId, replacement: ResourceId) {
        self.inner.get().replace_resource(original, replacement)
    }

    pub fn remove_replacement(&self, id: ResourceId) {
        self.inner.get().remove_replacement(id)
    }

    pub fn free_target_resource(&self, id: ResourceId) {
        self.inner.get().free_target_resource(id)
    }

    pub fn get_frame_info(&self) -> FrameDescription {
        self.inner.get().get_frame_info()
    }

    pub fn get_drawcalls(&self) -> Vec<DrawcallDescription> {
        self.inner.get().get_drawcalls()
    }

    pub fn fetch_counters(&self, counters: &[GpuCounter]) -> Vec<CounterResult> {
        self.inner.get().fetch_counters(counters)
    }

    pub fn enumerate_counters(&self) -> Vec<GpuCounter> {
        self.inner.get().enumerate_counters()
    }

    pub fn describe_counter(&self, counter: GpuCounter) -> CounterDescription {
        self.inner.get().describe_counter(counter)
    }

    pub fn get_textures(&self) -> Vec<TextureDescription> {
        self.inner.get().get_textures()
    }

    pub fn get_buffers(&self) -> Vec<BufferDescription> {
        self.inner.get().get_buffers()
    }

    pub fn get_resolve(&self, callstack: &[u64]) -> Vec<String> {
        self.inner.get().get_resolve(callstack)
    }

    pub fn get_debug_messages(&self) -> Vec<DebugMessage> {
        self.inner.get().get_debug_messages()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pixel_history(
        &self,
        texture: ResourceId,
        x: u32,
        y: u32,
        slice: u32,
        mip: u32,
        sample_idx: u32,
        type_hint: CompType,
    ) -> Vec<PixelModification> {
        self.inner
            .get()
            .pixel_history(texture, x, y, slice, mip, sample_idx, type_hint)
    }

    pub fn debug_vertex(
        &self,
        vert_id: u32,
        inst_id: u32,
        idx: u32,
        inst_offset: u32,
        vert_offset: u32,
    ) -> Option<Box<ShaderDebugTrace>> {
        self.inner
            .get()
            .debug_vertex(vert_id, inst_id, idx, inst_offset, vert_offset)
    }

    pub fn debug_pixel(
        &self,
        x: u32,
        y: u32,
        sample: u32,
        primitive: u32,
    ) -> Option<Box<ShaderDebugTrace>> {
        self.inner.get().debug_pixel(x, y, sample, primitive)
    }

    pub fn debug_thread(
        &self,
        group_id: [u32; 3],
        thread_id: [u32; 3],
    ) -> Option<Box<ShaderDebugTrace>> {
        self.inner.get().debug_thread(group_id, thread_id)
    }

    pub fn free_trace(&self, trace: Box<ShaderDebugTrace>) {
        self.inner.get().free_trace(trace)
    }

    pub fn get_usage(&self, id: ResourceId) -> Vec<EventUsage> {
        self.inner.get().get_usage(id)
    }

    pub fn get_cbuffer_variable_contents(
        &self,
        shader: ResourceId,
        entry_point: &str,
        cbuf_slot: u32,
        buffer: ResourceId,
        offset: u64,
    ) -> Vec<ShaderVariable> {
        self.inner
            .get()
            .get_cbuffer_variable_contents(shader, entry_point, cbuf_slot, buffer, offset)
    }

    pub fn save_texture(&self, save_data: &TextureSave, path: &str) -> bool {
        self.inner.get().save_texture(save_data, path)
    }

    pub fn get_post_vs_data(&self, inst_id: u32, stage: MeshDataStage) -> MeshFormat {
        self.inner.get().get_post_vs_data(inst_id, stage)
    }

    pub fn get_buffer_data(&self, buffer: ResourceId, offset: u64, len: u64) -> Vec<u8> {
        self.inner.get().get_buffer_data(buffer, offset, len)
    }

    pub fn get_texture_data(&self, texture: ResourceId, array_idx: u32, mip: u32) -> Vec<u8> {
        self.inner.get().get_texture_data(texture, array_idx, mip)
    }

    pub fn shutdown(self) {}
}
