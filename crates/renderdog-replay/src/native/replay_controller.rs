use std::collections::HashMap;
use std::ffi::{c_char, c_void};
use std::ptr::NonNull;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;

use renderdog_replay_sys as sys;

use crate::engine::{EngineObject, EngineReplayController, EngineReplayOutput};
use crate::pipeline::{
    D3D11PipelineState, D3D12PipelineState, GlPipelineState, VulkanPipelineState,
};
use crate::types::{
    ApiProperties, BufferDescription, CompType, CounterDescription, CounterResult, DebugMessage,
    DrawcallDescription, EventUsage, FrameDescription, GpuCounter, MeshDataStage, MeshFormat,
    PixelModification, ReplayOutputType, ResourceId, ShaderDebugTrace, ShaderReflection,
    ShaderStage, ShaderVariable, TextureDescription, TextureSave, WindowData, WindowingSystem,
};

use super::Loaded;
use super::library::{ControllerShim, Shim};
use super::marshal::{mesh_format_from, take_bytes, take_json, take_string, texture_save};
use super::rdctype::c_string;
use super::replay_output::NativeOutput;

/// `IReplayController` reached through the flat `renderdoc_controller_*` functions.
///
/// Released only through [`EngineObject::shutdown`] or by the remote server it was opened on,
/// so dropping it without either leaves the engine object alive.
pub(crate) struct NativeController {
    raw: Option<NonNull<sys::IReplayController>>,
    /// Engine trace behind each boxed copy handed out, keyed by the box address.
    traces: Mutex<HashMap<usize, usize>>,
    shim: Arc<Shim>,
    loaded: Arc<Loaded>,
}

impl NativeController {
    pub(super) fn new(
        raw: *mut sys::IReplayController,
        shim: Arc<Shim>,
        loaded: Arc<Loaded>,
    ) -> Option<Self> {
        let raw = NonNull::new(raw)?;
        Some(Self {
            raw: Some(raw),
            traces: Mutex::new(HashMap::new()),
            shim,
            loaded,
        })
    }

    fn ptr(&self) -> *mut sys::IReplayController {
        match self.raw {
            Some(raw) => raw.as_ptr(),
            None => unreachable!("replay controller used after shutdown"),
        }
    }

    fn fns(&self) -> &ControllerShim {
        &self.shim.controller
    }

    fn json<T: DeserializeOwned + Default>(&self, doc: *mut c_char, call: &'static str) -> T {
        unsafe { take_json(self.shim.free, doc, call) }
    }

    fn string(&self, s: *mut c_char) -> String {
        unsafe { take_string(self.shim.free, s) }
    }

    /// Copies an engine trace out and remembers it until [`Self::free_trace`].
    fn adopt_trace(&self, raw: *mut sys::ShaderDebugTrace) -> Option<Box<ShaderDebugTrace>> {
        if raw.is_null() {
            return None;
        }
        let doc = unsafe { (self.fns().describe_trace)(raw) };
        let trace: Box<ShaderDebugTrace> = Box::new(self.json(doc, "describe_trace"));
        let key = &*trace as *const ShaderDebugTrace as usize;
        self.traces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, raw as usize);
        Some(trace)
    }

    fn built(
        &self,
        f: impl FnOnce(*const c_char, *const c_char, *mut u64) -> *mut c_char,
        entry: &str,
        source: &str,
    ) -> (ResourceId, String) {
        let entry = c_string(entry);
        let source = c_string(source);
        let mut id = 0;
        let errors = self.string(f(entry.as_ptr(), source.as_ptr(), &mut id));
        (ResourceId(id), errors)
    }
}

impl EngineObject for NativeController {
    fn shutdown(&mut self) {
        if let Some(raw) = self.raw.take() {
            let outstanding = self
                .traces
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner)
                .len();
            if outstanding > 0 {
                tracing::warn!(outstanding, "controller shut down with unfreed debug traces");
            }
            unsafe { (self.fns().shutdown)(raw.as_ptr()) };
        }
    }
}

impl EngineReplayController for NativeController {
    fn get_api_properties(&self) -> ApiProperties {
        let doc = unsafe { (self.fns().get_api_properties)(self.ptr()) };
        self.json(doc, "get_api_properties")
    }

    fn get_supported_window_systems(&self) -> Vec<WindowingSystem> {
        let doc = unsafe { (self.fns().get_supported_window_systems)(self.ptr()) };
        self.json(doc, "get_supported_window_systems")
    }

    fn create_output(
        &self,
        system: WindowingSystem,
        data: WindowData,
        output_type: ReplayOutputType,
    ) -> Option<Box<dyn EngineReplayOutput>> {
        let raw = unsafe {
            (self.fns().create_output)(self.ptr(), system as u32, data, output_type as u32)
        };
        NativeOutput::new(raw, Arc::clone(&self.shim), Arc::clone(&self.loaded))
            .map(|output| Box::new(output) as Box<dyn EngineReplayOutput>)
    }

    fn shutdown_output(&self, output: Box<dyn EngineReplayOutput>) {
        let raw = output.engine_ptr();
        if raw.is_null() {
            tracing::warn!("output was not created by this engine; leaving it alone");
            return;
        }
        unsafe { (self.fns().shutdown_output)(self.ptr(), raw.cast()) }
    }

    fn replay_loop(&self, system: WindowingSystem, data: WindowData, texture: ResourceId) {
        unsafe { (self.fns().replay_loop)(self.ptr(), system as u32, data, texture.0) }
    }

    fn cancel_replay_loop(&self) {
        unsafe { (self.fns().cancel_replay_loop)(self.ptr()) }
    }

    fn file_changed(&self) {
        unsafe { (self.fns().file_changed)(self.ptr()) }
    }

    fn has_callstacks(&self) -> bool {
        unsafe { (self.fns().has_callstacks)(self.ptr()) }
    }

    fn init_resolver(&self) -> bool {
        unsafe { (self.fns().init_resolver)(self.ptr()) }
    }

    fn set_frame_event(&self, event_id: u32, force: bool) {
        unsafe { (self.fns().set_frame_event)(self.ptr(), event_id, force) }
    }

    fn get_d3d11_pipeline_state(&self) -> D3D11PipelineState {
        let doc = unsafe { (self.fns().get_d3d11_pipeline_state)(self.ptr()) };
        self.json(doc, "get_d3d11_pipeline_state")
    }

    fn get_d3d12_pipeline_state(&self) -> D3D12PipelineState {
        let doc = unsafe { (self.fns().get_d3d12_pipeline_state)(self.ptr()) };
        self.json(doc, "get_d3d12_pipeline_state")
    }

    fn get_gl_pipeline_state(&self) -> GlPipelineState {
        let doc = unsafe { (self.fns().get_gl_pipeline_state)(self.ptr()) };
        self.json(doc, "get_gl_pipeline_state")
    }

    fn get_vulkan_pipeline_state(&self) -> VulkanPipelineState {
        let doc = unsafe { (self.fns().get_vulkan_pipeline_state)(self.ptr()) };
        self.json(doc, "get_vulkan_pipeline_state")
    }

    fn get_disassembly_targets(&self) -> Vec<String> {
        let doc = unsafe { (self.fns().get_disassembly_targets)(self.ptr()) };
        self.json(doc, "get_disassembly_targets")
    }

    fn disassemble_shader(&self, refl: &ShaderReflection, target: &str) -> String {
        let entry_point = c_string(&refl.entry_point);
        let target = c_string(target);
        self.string(unsafe {
            (self.fns().disassemble_shader)(
                self.ptr(),
                refl.resource_id.0,
                entry_point.as_ptr(),
                target.as_ptr(),
            )
        })
    }

    fn build_custom_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String) {
        let build = self.fns().build_custom_shader;
        self.built(
            |entry, source, id| unsafe {
                build(self.ptr(), entry, source, compile_flags, stage as u32, id)
            },
            entry,
            source,
        )
    }

    fn free_custom_shader(&self, id: ResourceId) {
        unsafe { (self.fns().free_custom_shader)(self.ptr(), id.0) }
    }

    fn build_target_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String) {
        let build = self.fns().build_target_shader;
        self.built(
            |entry, source, id| unsafe {
                build(self.ptr(), entry, source, compile_flags, stage as u32, id)
            },
            entry,
            source,
        )
    }

    fn replace_resource(&self, original: ResourceId, replacement: ResourceId) {
        unsafe { (self.fns().replace_resource)(self.ptr(), original.0, replacement.0) }
    }

    fn remove_replacement(&self, id: ResourceId) {
        unsafe { (self.fns().remove_replacement)(self.ptr(), id.0) }
    }

    fn free_target_resource(&self, id: ResourceId) {
        unsafe { (self.fns().free_target_resource)(self.ptr(), id.0) }
    }

    fn get_frame_info(&self) -> FrameDescription {
        let doc = unsafe { (self.fns().get_frame_info)(self.ptr()) };
        self.json(doc, "get_frame_info")
    }

    fn get_drawcalls(&self) -> Vec<DrawcallDescription> {
        let doc = unsafe { (self.fns().get_drawcalls)(self.ptr()) };
        self.json(doc, "get_drawcalls")
    }

    fn fetch_counters(&self, counters: &[GpuCounter]) -> Vec<CounterResult> {
        let raw: Vec<u32> = counters.iter().map(|c| c.0).collect();
        let doc = unsafe {
            (self.fns().fetch_counters)(self.ptr(), raw.as_ptr(), raw.len() as u32)
        };
        self.json(doc, "fetch_counters")
    }

    fn enumerate_counters(&self) -> Vec<GpuCounter> {
        let doc = unsafe { (self.fns().enumerate_counters)(self.ptr()) };
        self.json(doc, "enumerate_counters")
    }

    fn describe_counter(&self, counter: GpuCounter) -> CounterDescription {
        let doc = unsafe { (self.fns().describe_counter)(self.ptr(), counter.0) };
        self.json(doc, "describe_counter")
    }

    fn get_textures(&self) -> Vec<TextureDescription> {
        let doc = unsafe { (self.fns().get_textures)(self.ptr()) };
        self.json(doc, "get_textures")
    }

    fn get_buffers(&self) -> Vec<BufferDescription> {
        let doc = unsafe { (self.fns().get_buffers)(self.ptr()) };
        self.json(doc, "get_buffers")
    }

    fn get_resolve(&self, callstack: &[u64]) -> Vec<String> {
        let doc = unsafe {
            (self.fns().get_resolve)(self.ptr(), callstack.as_ptr(), callstack.len() as u32)
        };
        self.json(doc, "get_resolve")
    }

    fn get_debug_messages(&self) -> Vec<DebugMessage> {
        let doc = unsafe { (self.fns().get_debug_messages)(self.ptr()) };
        self.json(doc, "get_debug_messages")
    }

    fn pixel_history(
        &self,
        texture: ResourceId,
        x: u32,
        y: u32,
        slice: u32,
        mip: u32,
        sample_idx: u32,
        type_hint: CompType,
    ) -> Vec<PixelModification> {
        let doc = unsafe {
            (self.fns().pixel_history)(
                self.ptr(),
                texture.0,
                x,
                y,
                slice,
                mip,
                sample_idx,
                type_hint as u32,
            )
        };
        self.json(doc, "pixel_history")
    }

    fn debug_vertex(
        &self,
        vert_id: u32,
        inst_id: u32,
        idx: u32,
        inst_offset: u32,
        vert_offset: u32,
    ) -> Option<Box<ShaderDebugTrace>> {
        let raw = unsafe {
            (self.fns().debug_vertex)(self.ptr(), vert_id, inst_id, idx, inst_offset, vert_offset)
        };
        self.adopt_trace(raw)
    }

    fn debug_pixel(
        &self,
        x: u32,
        y: u32,
        sample: u32,
        primitive: u32,
    ) -> Option<Box<ShaderDebugTrace>> {
        let raw = unsafe { (self.fns().debug_pixel)(self.ptr(), x, y, sample, primitive) };
        self.adopt_trace(raw)
    }

    fn debug_thread(
        &self,
        group_id: [u32; 3],
        thread_id: [u32; 3],
    ) -> Option<Box<ShaderDebugTrace>> {
        let raw = unsafe {
            (self.fns().debug_thread)(self.ptr(), group_id.as_ptr(), thread_id.as_ptr())
        };
        self.adopt_trace(raw)
    }

    fn free_trace(&self, trace: Box<ShaderDebugTrace>) {
        let key = &*trace as *const ShaderDebugTrace as usize;
        let raw = self
            .traces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        match raw {
            Some(raw) => unsafe { (self.fns().free_trace)(self.ptr(), raw as *mut _) },
            None => tracing::warn!("trace was not produced by this controller"),
        }
    }

    fn get_usage(&self, id: ResourceId) -> Vec<EventUsage> {
        let doc = unsafe { (self.fns().get_usage)(self.ptr(), id.0) };
        self.json(doc, "get_usage")
    }

    fn get_cbuffer_variable_contents(
        &self,
        shader: ResourceId,
        entry_point: &str,
        cbuf_slot: u32,
        buffer: ResourceId,
        offset: u64,
    ) -> Vec<ShaderVariable> {
        let entry_point = c_string(entry_point);
        let doc = unsafe {
            (self.fns().get_cbuffer_variable_contents)(
                self.ptr(),
                shader.0,
                entry_point.as_ptr(),
                cbuf_slot,
                buffer.0,
                offset,
            )
        };
        self.json(doc, "get_cbuffer_variable_contents")
    }

    fn save_texture(&self, save_data: &TextureSave, path: &str) -> bool {
        let save = texture_save(save_data);
        let path = c_string(path);
        unsafe { (self.fns().save_texture)(self.ptr(), &save, path.as_ptr()) }
    }

    fn get_post_vs_data(&self, inst_id: u32, stage: MeshDataStage) -> MeshFormat {
        let mut out = sys::renderdoc_mesh_format::default();
        unsafe { (self.fns().get_post_vs_data)(self.ptr(), inst_id, stage as u32, &mut out) };
        mesh_format_from(&out)
    }

    fn get_buffer_data(&self, buffer: ResourceId, offset: u64, len: u64) -> Vec<u8> {
        let mut data = std::ptr::null_mut();
        let mut data_len = 0;
        unsafe {
            (self.fns().get_buffer_data)(
                self.ptr(),
                buffer.0,
                offset,
                len,
                &mut data,
                &mut data_len,
            );
            take_bytes(self.shim.free, data, data_len)
        }
    }

    fn get_texture_data(&self, texture: ResourceId, array_idx: u32, mip: u32) -> Vec<u8> {
        let mut data = std::ptr::null_mut();
        let mut data_len = 0;
        unsafe {
            (self.fns().get_texture_data)(
                self.ptr(),
                texture.0,
                array_idx,
                mip,
                &mut data,
                &mut data_len,
            );
            take_bytes(self.shim.free, data, data_len)
        }
    }

    fn engine_ptr(&self) -> *mut c_void {
        self.raw.map_or(std::ptr::null_mut(), |raw| raw.as_ptr().cast())
    }
}
