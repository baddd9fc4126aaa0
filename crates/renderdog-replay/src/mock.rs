//! Recording fake engine for unit tests.
//!
//! Every engine call is appended to a shared log as `object#n.method(args)` (or `function(args)`
//! for free functions). Return values come from [`Script`]. Engine objects are registered by heap
//! address so calls that receive another object (`shutdown_output`, `close_capture`,
//! `set_mesh_display`) can name it.

use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::Api;
use crate::engine::{
    Engine, EngineCamera, EngineCaptureFile, EngineObject, EngineRemoteServer,
    EngineReplayController, EngineReplayOutput, EngineTargetControl, RawOpenCapture,
};
use crate::error::ReplayError;
use crate::pipeline::{
    D3D11PipelineState, D3D12PipelineState, GlPipelineState, VulkanPipelineState,
};
use crate::settings::{
    AndroidFlags, CaptureOptions, EnvironmentModification, VulkanLayerRegistration,
};
use crate::types::{
    ApiProperties, BufferDescription, CameraType, CompType, CounterDescription, CounterResult,
    DebugMessage, DrawcallDescription, EventUsage, FileType, FloatVector, FrameDescription,
    GlobalEnvironment, GpuCounter, KillSwitch, LogType, MeshDataStage, MeshDisplay, MeshFormat,
    PathEntry, PixelModification, PixelValue, Progress, ReplayOutputType, ReplayStatus,
    ReplaySupport, ResourceId, ShaderDebugTrace, ShaderReflection, ShaderStage, ShaderVariable,
    TargetControlMessage, TextureDescription, TextureDisplay, TextureSave, Topology, WindowData,
    WindowingSystem,
};

/// Values the fake engine hands back.
#[derive(Debug)]
pub(crate) struct Script {
    pub forward: FloatVector,

    pub open_status: ReplayStatus,
    pub driver_name: String,
    pub machine_ident: String,
    pub thumbnail: Vec<u8>,
    pub local_support: ReplaySupport,
    pub open_capture: ReplayStatus,
    /// Hand back a controller even when `open_capture` is a failure.
    pub open_capture_with_handle: bool,

    pub api_properties: ApiProperties,
    /// Topology reported by every pipeline state.
    pub topology: Topology,
    pub disassembly: String,
    pub custom_shader: (ResourceId, String),
    pub drawcalls: Vec<DrawcallDescription>,
    pub counters: Vec<GpuCounter>,
    pub counter_results: Vec<CounterResult>,
    pub resolve: Vec<String>,
    pub usage: Vec<EventUsage>,
    pub buffer_data: Vec<u8>,
    pub texture_data: Vec<u8>,
    pub refuse_output: bool,

    pub pick_pixel: PixelValue,
    pub pick_vertex: (u32, u32),
    pub histogram: Vec<u32>,
    pub min_max: (PixelValue, PixelValue),
    pub overlay_ids: (ResourceId, ResourceId),

    pub remote_connect: ReplayStatus,
    pub remote_path: String,

    pub refuse_target: bool,
    pub message: TargetControlMessage,
    pub pid: u32,
    pub busy_client: String,

    pub half_to_float: f32,
    pub vertex_count: u32,
    pub ident: u32,
    pub vulkan: VulkanLayerRegistration,
    pub config_value: String,
    pub android: AndroidFlags,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            forward: FloatVector::default(),
            open_status: ReplayStatus::Succeeded,
            driver_name: String::new(),
            machine_ident: String::new(),
            thumbnail: Vec::new(),
            local_support: ReplaySupport::Supported,
            open_capture: ReplayStatus::Succeeded,
            open_capture_with_handle: false,
            api_properties: ApiProperties::default(),
            topology: Topology::Unknown,
            disassembly: String::new(),
            custom_shader: (ResourceId::NULL, String::new()),
            drawcalls: Vec::new(),
            counters: Vec::new(),
            counter_results: Vec::new(),
            resolve: Vec::new(),
            usage: Vec::new(),
            buffer_data: Vec::new(),
            texture_data: Vec::new(),
            refuse_output: false,
            pick_pixel: PixelValue::default(),
            pick_vertex: (0, 0),
            histogram: Vec::new(),
            min_max: (PixelValue::default(), PixelValue::default()),
            overlay_ids: (ResourceId::NULL, ResourceId::NULL),
            remote_connect: ReplayStatus::Succeeded,
            remote_path: String::new(),
            refuse_target: false,
            message: TargetControlMessage::Noop,
            pid: 0,
            busy_client: String::new(),
            half_to_float: 0.0,
            vertex_count: 0,
            ident: 0,
            vulkan: VulkanLayerRegistration::default(),
            config_value: String::new(),
            android: AndroidFlags::empty(),
        }
    }
}

#[derive(Default)]
struct State {
    calls: Mutex<Vec<String>>,
    drops: Mutex<Vec<String>>,
    script: Mutex<Script>,
    ids: Mutex<HashMap<&'static str, u32>>,
    names: Mutex<HashMap<usize, String>>,
}

impl State {
    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    fn next_name(&self, kind: &'static str) -> String {
        let mut ids = self.ids.lock().unwrap();
        let id = ids.entry(kind).or_insert(0);
        *id += 1;
        format!("{kind}#{id}")
    }

    fn register<T: ?Sized>(&self, object: &T, name: &str) {
        self.names
            .lock()
            .unwrap()
            .insert(addr_of(object), name.to_string());
    }

    fn name_of<T: ?Sized>(&self, object: &T) -> String {
        self.names
            .lock()
            .unwrap()
            .get(&addr_of(object))
            .cloned()
            .unwrap_or_else(|| "<unregistered>".to_string())
    }
}

fn addr_of<T: ?Sized>(object: &T) -> usize {
    object as *const T as *const () as usize
}

fn progress_value(progress: Option<&Progress>) -> Option<f32> {
    progress.map(Progress::get)
}

/// Shared handle to the fake engine and its call log.
#[derive(Clone, Default)]
pub(crate) struct MockEngine {
    state: Arc<State>,
}

impl MockEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn api(&self) -> Api {
        Api::new(self.clone())
    }

    pub(crate) fn script(&self) -> MutexGuard<'_, Script> {
        self.state.script()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Calls whose text starts with `prefix`, in order.
    pub(crate) fn calls_for(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub(crate) fn count_prefix(&self, prefix: &str) -> usize {
        self.calls_for(prefix).len()
    }

    /// How many times the engine object `name` was destroyed on the engine side.
    pub(crate) fn dropped(&self, name: &str) -> usize {
        self.state
            .drops
            .lock()
            .unwrap()
            .iter()
            .filter(|d| *d == name)
            .count()
    }

    fn controller(&self) -> Box<MockController> {
        let name = self.state.next_name("controller");
        let controller = Box::new(MockController {
            state: Arc::clone(&self.state),
            name,
        });
        self.state.register(&*controller, &controller.name);
        controller
    }

    fn open_result(&self, status: ReplayStatus, with_handle: bool) -> RawOpenCapture {
        if status.is_success() || with_handle {
            (status, Some(self.controller() as Box<dyn EngineReplayController>))
        } else {
            (status, None)
        }
    }
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

struct MockCamera {
    state: Arc<State>,
    name: String,
}

impl MockCamera {
    fn call(&self, method: &str, args: String) {
        self.state.log(format!("{}.{method}({args})", self.name));
    }
}

impl EngineObject for MockCamera {
    fn shutdown(&mut self) {
        self.call("shutdown", String::new());
    }
}

impl EngineCamera for MockCamera {
    fn set_position(&self, x: f32, y: f32, z: f32) {
        self.call("set_position", format!("{x:?}, {y:?}, {z:?}"));
    }

    fn set_fps_rotation(&self, x: f32, y: f32, z: f32) {
        self.call("set_fps_rotation", format!("{x:?}, {y:?}, {z:?}"));
    }

    fn set_arcball_distance(&self, dist: f32) {
        self.call("set_arcball_distance", format!("{dist:?}"));
    }

    fn reset_arcball(&self) {
        self.call("reset_arcball", String::new());
    }

    fn rotate_arcball(&self, ax: f32, ay: f32, bx: f32, by: f32) {
        self.call("rotate_arcball", format!("{ax:?}, {ay:?}, {bx:?}, {by:?}"));
    }

    fn get_position(&self) -> FloatVector {
        self.call("get_position", String::new());
        FloatVector::default()
    }

    fn get_forward(&self) -> FloatVector {
        self.call("get_forward", String::new());
        self.state.script().forward
    }

    fn get_right(&self) -> FloatVector {
        self.call("get_right", String::new());
        FloatVector::default()
    }

    fn get_up(&self) -> FloatVector {
        self.call("get_up", String::new());
        FloatVector::default()
    }
}

struct MockCaptureFile {
    engine: MockEngine,
    name: String,
    path: String,
}

impl MockCaptureFile {
    fn call(&self, method: &str, args: String) {
        self.engine
            .state
            .log(format!("{}.{method}({args})", self.name));
    }
}

impl EngineObject for MockCaptureFile {
    fn shutdown(&mut self) {
        self.call("shutdown", String::new());
    }
}

impl EngineCaptureFile for MockCaptureFile {
    fn open_status(&self) -> ReplayStatus {
        self.call("open_status", String::new());
        self.engine.script().open_status
    }

    fn filename(&self) -> String {
        self.call("filename", String::new());
        self.path.clone()
    }

    fn local_replay_support(&self) -> ReplaySupport {
        self.call("local_replay_support", String::new());
        self.engine.script().local_support
    }

    fn driver_name(&self) -> String {
        self.call("driver_name", String::new());
        self.engine.script().driver_name.clone()
    }

    fn recorded_machine_ident(&self) -> String {
        self.call("recorded_machine_ident", String::new());
        self.engine.script().machine_ident.clone()
    }

    fn open_capture(&self, progress: Option<&Progress>) -> RawOpenCapture {
        self.call("open_capture", format!("{:?}", progress_value(progress)));
        if let Some(progress) = progress {
            progress.set(1.0);
        }
        let (status, with_handle) = {
            let script = self.engine.script();
            (script.open_capture, script.open_capture_with_handle)
        };
        self.engine.open_result(status, with_handle)
    }

    fn get_thumbnail(&self, file_type: FileType, max_size: u32) -> Vec<u8> {
        self.call("get_thumbnail", format!("{file_type:?}, {max_size}"));
        self.engine.script().thumbnail.clone()
    }
}

struct MockController {
    state: Arc<State>,
    name: String,
}

impl MockController {
    fn call(&self, method: &str, args: String) {
        self.state.log(format!("{}.{method}({args})", self.name));
    }
}

impl Drop for MockController {
    fn drop(&mut self) {
        self.state.drops.lock().unwrap().push(self.name.clone());
    }
}

impl EngineObject for MockController {
    fn shutdown(&mut self) {
        self.call("shutdown", String::new());
    }
}

impl EngineReplayController for MockController {
    fn get_api_properties(&self) -> ApiProperties {
        self.call("get_api_properties", String::new());
        self.state.script().api_properties.clone()
    }

    fn get_supported_window_systems(&self) -> Vec<WindowingSystem> {
        self.call("get_supported_window_systems", String::new());
        vec![WindowingSystem::Unknown]
    }

    fn create_output(
        &self,
        system: WindowingSystem,
        _data: WindowData,
        output_type: ReplayOutputType,
    ) -> Option<Box<dyn EngineReplayOutput>> {
        self.call("create_output", format!("{system:?}, {output_type:?}"));
        if self.state.script().refuse_output {
            return None;
        }
        let output = Box::new(MockOutput {
            state: Arc::clone(&self.state),
            name: self.state.next_name("output"),
        });
        self.state.register(&*output, &output.name);
        Some(output)
    }

    fn shutdown_output(&self, output: Box<dyn EngineReplayOutput>) {
        let name = self.state.name_of(&*output);
        self.call("shutdown_output", name);
    }

    fn replay_loop(&self, system: WindowingSystem, _data: WindowData, texture: ResourceId) {
        self.call("replay_loop", format!("{system:?}, {}", texture.0));
    }

    fn cancel_replay_loop(&self) {
        self.call("cancel_replay_loop", String::new());
    }

    fn file_changed(&self) {
        self.call("file_changed", String::new());
    }

    fn has_callstacks(&self) -> bool {
        self.call("has_callstacks", String::new());
        false
    }

    fn init_resolver(&self) -> bool {
        self.call("init_resolver", String::new());
        false
    }

    fn set_frame_event(&self, event_id: u32, force: bool) {
        self.call("set_frame_event", format!("{event_id}, {force}"));
    }

    fn get_d3d11_pipeline_state(&self) -> D3D11PipelineState {
        self.call("get_d3d11_pipeline_state", String::new());
        let mut state = D3D11PipelineState::default();
        state.input_assembly.topology = self.state.script().topology;
        state
    }

    fn get_d3d12_pipeline_state(&self) -> D3D12PipelineState {
        self.call("get_d3d12_pipeline_state", String::new());
        let mut state = D3D12PipelineState::default();
        state.input_assembly.topology = self.state.script().topology;
        state
    }

    fn get_gl_pipeline_state(&self) -> GlPipelineState {
        self.call("get_gl_pipeline_state", String::new());
        let mut state = GlPipelineState::default();
        state.input_assembly.topology = self.state.script().topology;
        state
    }

    fn get_vulkan_pipeline_state(&self) -> VulkanPipelineState {
        self.call("get_vulkan_pipeline_state", String::new());
        let mut state = VulkanPipelineState::default();
        state.input_assembly.topology = self.state.script().topology;
        state
    }

    fn get_disassembly_targets(&self) -> Vec<String> {
        self.call("get_disassembly_targets", String::new());
        Vec::new()
    }

    fn disassemble_shader(&self, refl: &ShaderReflection, target: &str) -> String {
        self.call("disassemble_shader", format!("{:?}, {target:?}", refl.entry_point));
        self.state.script().disassembly.clone()
    }

    fn build_custom_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String) {
        self.call(
            "build_custom_shader",
            format!("{entry:?}, {source:?}, {compile_flags}, {stage:?}"),
        );
        self.state.script().custom_shader.clone()
    }

    fn free_custom_shader(&self, id: ResourceId) {
        self.call("free_custom_shader", id.0.to_string());
    }

    fn build_target_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String) {
        self.call(
            "build_target_shader",
            format!("{entry:?}, {source:?}, {compile_flags}, {stage:?}"),
        );
        self.state.script().custom_shader.clone()
    }

    fn replace_resource(&self, original: ResourceId, replacement: ResourceId) {
        self.call("replace_resource", format!("{}, {}", original.0, replacement.0));
    }

    fn remove_replacement(&self, id: ResourceId) {
        self.call("remove_replacement", id.0.to_string());
    }

    fn free_target_resource(&self, id: ResourceId) {
        self.call("free_target_resource", id.0.to_string());
    }

    fn get_frame_info(&self) -> FrameDescription {
        self.call("get_frame_info", String::new());
        FrameDescription::default()
    }

    fn get_drawcalls(&self) -> Vec<DrawcallDescription> {
        self.call("get_drawcalls", String::new());
        self.state.script().drawcalls.clone()
    }

    fn fetch_counters(&self, counters: &[GpuCounter]) -> Vec<CounterResult> {
        let ids: Vec<u32> = counters.iter().map(|c| c.0).collect();
        self.call("fetch_counters", format!("{ids:?}"));
        self.state.script().counter_results.clone()
    }

    fn enumerate_counters(&self) -> Vec<GpuCounter> {
        self.call("enumerate_counters", String::new());
        self.state.script().counters.clone()
    }

    fn describe_counter(&self, counter: GpuCounter) -> CounterDescription {
        self.call("describe_counter", counter.0.to_string());
        CounterDescription {
            counter,
            ..CounterDescription::default()
        }
    }

    fn get_textures(&self) -> Vec<TextureDescription> {
        self.call("get_textures", String::new());
        Vec::new()
    }

    fn get_buffers(&self) -> Vec<BufferDescription> {
        self.call("get_buffers", String::new());
        Vec::new()
    }

    fn get_resolve(&self, callstack: &[u64]) -> Vec<String> {
        self.call("get_resolve", format!("{callstack:?}"));
        self.state.script().resolve.clone()
    }

    fn get_debug_messages(&self) -> Vec<DebugMessage> {
        self.call("get_debug_messages", String::new());
        Vec::new()
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
        self.call(
            "pixel_history",
            format!("{}, {x}, {y}, {slice}, {mip}, {sample_idx}, {type_hint:?}", texture.0),
        );
        Vec::new()
    }

    fn debug_vertex(
        &self,
        vert_id: u32,
        inst_id: u32,
        idx: u32,
        inst_offset: u32,
        vert_offset: u32,
    ) -> Option<Box<ShaderDebugTrace>> {
        self.call(
            "debug_vertex",
            format!("{vert_id}, {inst_id}, {idx}, {inst_offset}, {vert_offset}"),
        );
        Some(Box::default())
    }

    fn debug_pixel(
        &self,
        x: u32,
        y: u32,
        sample: u32,
        primitive: u32,
    ) -> Option<Box<ShaderDebugTrace>> {
        self.call("debug_pixel", format!("{x}, {y}, {sample}, {primitive}"));
        Some(Box::default())
    }

    fn debug_thread(
        &self,
        group_id: [u32; 3],
        thread_id: [u32; 3],
    ) -> Option<Box<ShaderDebugTrace>> {
        self.call("debug_thread", format!("{group_id:?}, {thread_id:?}"));
        None
    }

    fn free_trace(&self, _trace: Box<ShaderDebugTrace>) {
        self.call("free_trace", String::new());
    }

    fn get_usage(&self, id: ResourceId) -> Vec<EventUsage> {
        self.call("get_usage", id.0.to_string());
        self.state.script().usage.clone()
    }

    fn get_cbuffer_variable_contents(
        &self,
        shader: ResourceId,
        entry_point: &str,
        cbuf_slot: u32,
        buffer: ResourceId,
        offset: u64,
    ) -> Vec<ShaderVariable> {
        self.call(
            "get_cbuffer_variable_contents",
            format!("{}, {entry_point:?}, {cbuf_slot}, {}, {offset}", shader.0, buffer.0),
        );
        Vec::new()
    }

    fn save_texture(&self, save_data: &TextureSave, path: &str) -> bool {
        self.call("save_texture", format!("{}, {path:?}", save_data.resource_id.0));
        true
    }

    fn get_post_vs_data(&self, inst_id: u32, stage: MeshDataStage) -> MeshFormat {
        self.call("get_post_vs_data", format!("{inst_id}, {stage:?}"));
        MeshFormat::default()
    }

    fn get_buffer_data(&self, buffer: ResourceId, offset: u64, len: u64) -> Vec<u8> {
        self.call("get_buffer_data", format!("{}, {offset}, {len}", buffer.0));
        self.state.script().buffer_data.clone()
    }

    fn get_texture_data(&self, texture: ResourceId, array_idx: u32, mip: u32) -> Vec<u8> {
        self.call("get_texture_data", format!("{}, {array_idx}, {mip}", texture.0));
        self.state.script().texture_data.clone()
    }
}

struct MockOutput {
    state: Arc<State>,
    name: String,
}

impl MockOutput {
    fn call(&self, method: &str, args: String) {
        self.state.log(format!("{}.{method}({args})", self.name));
    }
}

impl EngineReplayOutput for MockOutput {
    fn set_texture_display(&self, display: &TextureDisplay) {
        self.call("set_texture_display", display.resource_id.0.to_string());
    }

    fn set_mesh_display(&self, _display: &MeshDisplay, camera: Option<&dyn EngineCamera>) {
        let camera = match camera {
            Some(camera) => self.state.name_of(camera),
            None => "no camera".to_string(),
        };
        self.call("set_mesh_display", camera);
    }

    fn clear_thumbnails(&self) {
        self.call("clear_thumbnails", String::new());
    }

    fn add_thumbnail(
        &self,
        system: WindowingSystem,
        _data: WindowData,
        texture: ResourceId,
        type_hint: CompType,
    ) -> bool {
        self.call("add_thumbnail", format!("{system:?}, {}, {type_hint:?}", texture.0));
        true
    }

    fn display(&self) {
        self.call("display", String::new());
    }

    fn set_pixel_context(&self, system: WindowingSystem, _data: WindowData) -> bool {
        self.call("set_pixel_context", format!("{system:?}"));
        true
    }

    fn set_pixel_context_location(&self, x: u32, y: u32) {
        self.call("set_pixel_context_location", format!("{x}, {y}"));
    }

    fn disable_pixel_context(&self) {
        self.call("disable_pixel_context", String::new());
    }

    fn get_min_max(&self) -> (PixelValue, PixelValue) {
        self.call("get_min_max", String::new());
        self.state.script().min_max
    }

    fn get_histogram(&self, min_val: f32, max_val: f32, channels: [bool; 4]) -> Vec<u32> {
        self.call("get_histogram", format!("{min_val:?}, {max_val:?}, {channels:?}"));
        self.state.script().histogram.clone()
    }

    fn get_custom_shader_tex_id(&self) -> ResourceId {
        self.call("get_custom_shader_tex_id", String::new());
        self.state.script().overlay_ids.0
    }

    fn get_debug_overlay_tex_id(&self) -> ResourceId {
        self.call("get_debug_overlay_tex_id", String::new());
        self.state.script().overlay_ids.1
    }

    fn pick_pixel(
        &self,
        texture: ResourceId,
        custom_shader: bool,
        x: u32,
        y: u32,
        slice_face: u32,
        mip: u32,
        sample: u32,
    ) -> PixelValue {
        self.call(
            "pick_pixel",
            format!("{}, {custom_shader}, {x}, {y}, {slice_face}, {mip}, {sample}", texture.0),
        );
        self.state.script().pick_pixel
    }

    fn pick_vertex(&self, event_id: u32, x: u32, y: u32) -> (u32, u32) {
        self.call("pick_vertex", format!("{event_id}, {x}, {y}"));
        self.state.script().pick_vertex
    }
}

struct MockRemote {
    engine: MockEngine,
    name: String,
}

impl MockRemote {
    fn call(&self, method: &str, args: String) {
        self.engine
            .state
            .log(format!("{}.{method}({args})", self.name));
    }
}

impl EngineRemoteServer for MockRemote {
    fn shutdown_connection(&mut self) {
        self.call("shutdown_connection", String::new());
    }

    fn shutdown_server_and_connection(&mut self) {
        self.call("shutdown_server_and_connection", String::new());
    }

    fn ping(&self) -> bool {
        self.call("ping", String::new());
        true
    }

    fn local_proxies(&self) -> Vec<String> {
        self.call("local_proxies", String::new());
        vec!["D3D11".into(), "Vulkan".into()]
    }

    fn remote_supported_replays(&self) -> Vec<String> {
        self.call("remote_supported_replays", String::new());
        vec!["Vulkan".into()]
    }

    fn get_home_folder(&self) -> String {
        self.call("get_home_folder", String::new());
        self.engine.script().remote_path.clone()
    }

    fn list_folder(&self, path: &str) -> Vec<PathEntry> {
        self.call("list_folder", format!("{path:?}"));
        Vec::new()
    }

    fn take_ownership_capture(&self, filename: &str) {
        self.call("take_ownership_capture", format!("{filename:?}"));
    }

    fn copy_capture_to_remote(&self, filename: &str, progress: Option<&Progress>) -> String {
        self.call(
            "copy_capture_to_remote",
            format!("{filename:?}, {:?}", progress_value(progress)),
        );
        self.engine.script().remote_path.clone()
    }

    fn copy_capture_from_remote(
        &self,
        remote_path: &str,
        local_path: &str,
        progress: Option<&Progress>,
    ) {
        self.call(
            "copy_capture_from_remote",
            format!("{remote_path:?}, {local_path:?}, {:?}", progress_value(progress)),
        );
    }

    fn open_capture(
        &self,
        proxy_id: u32,
        path: &str,
        progress: Option<&Progress>,
    ) -> RawOpenCapture {
        self.call(
            "open_capture",
            format!("{proxy_id}, {path:?}, {:?}", progress_value(progress)),
        );
        let (status, with_handle) = {
            let script = self.engine.script();
            (script.open_capture, script.open_capture_with_handle)
        };
        self.engine.open_result(status, with_handle)
    }

    fn close_capture(&self, controller: Box<dyn EngineReplayController>) {
        let name = self.engine.state.name_of(&*controller);
        self.call("close_capture", name);
    }
}

struct MockTarget {
    engine: MockEngine,
    name: String,
}

impl MockTarget {
    fn call(&self, method: &str, args: String) {
        self.engine
            .state
            .log(format!("{}.{method}({args})", self.name));
    }
}

impl EngineObject for MockTarget {
    fn shutdown(&mut self) {
        self.call("shutdown", String::new());
    }
}

impl EngineTargetControl for MockTarget {
    fn connected(&self) -> bool {
        self.call("connected", String::new());
        true
    }

    fn get_target(&self) -> String {
        self.call("get_target", String::new());
        "game.exe".into()
    }

    fn get_api(&self) -> String {
        self.call("get_api", String::new());
        "Vulkan".into()
    }

    fn get_pid(&self) -> u32 {
        self.call("get_pid", String::new());
        self.engine.script().pid
    }

    fn get_busy_client(&self) -> String {
        self.call("get_busy_client", String::new());
        self.engine.script().busy_client.clone()
    }

    fn trigger_capture(&self, num_frames: u32) {
        self.call("trigger_capture", num_frames.to_string());
    }

    fn queue_capture(&self, frame_number: u32) {
        self.call("queue_capture", frame_number.to_string());
    }

    fn copy_capture(&self, remote_id: u32, local_path: &str) {
        self.call("copy_capture", format!("{remote_id}, {local_path:?}"));
    }

    fn delete_capture(&self, remote_id: u32) {
        self.call("delete_capture", remote_id.to_string());
    }

    fn receive_message(&self) -> TargetControlMessage {
        self.call("receive_message", String::new());
        self.engine.script().message.clone()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

impl Engine for MockEngine {
    fn init_camera(&self, camera_type: CameraType) -> Result<Box<dyn EngineCamera>, ReplayError> {
        self.state.log(format!("init_camera({camera_type:?})"));
        let camera = Box::new(MockCamera {
            state: Arc::clone(&self.state),
            name: self.state.next_name("camera"),
        });
        self.state.register(&*camera, &camera.name);
        Ok(camera)
    }

    fn open_capture_file(&self, path: &str) -> Result<Box<dyn EngineCaptureFile>, ReplayError> {
        self.state.log(format!("open_capture_file({path:?})"));
        Ok(Box::new(MockCaptureFile {
            engine: self.clone(),
            name: self.state.next_name("capture_file"),
            path: path.to_string(),
        }))
    }

    fn create_target_control(
        &self,
        host: &str,
        ident: u32,
        client_name: &str,
        force_connection: bool,
    ) -> Result<Option<Box<dyn EngineTargetControl>>, ReplayError> {
        self.state.log(format!(
            "create_target_control({host:?}, {ident}, {client_name:?}, {force_connection})"
        ));
        if self.script().refuse_target {
            return Ok(None);
        }
        Ok(Some(Box::new(MockTarget {
            engine: self.clone(),
            name: self.state.next_name("target"),
        })))
    }

    fn create_remote_server_connection(
        &self,
        host: &str,
        port: u32,
    ) -> Result<(ReplayStatus, Option<Box<dyn EngineRemoteServer>>), ReplayError> {
        self.state
            .log(format!("create_remote_server_connection({host:?}, {port})"));
        let status = self.script().remote_connect;
        if !status.is_success() {
            return Ok((status, None));
        }
        let remote: Box<dyn EngineRemoteServer> = Box::new(MockRemote {
            engine: self.clone(),
            name: self.state.next_name("remote"),
        });
        Ok((status, Some(remote)))
    }

    fn half_to_float(&self, half: u16) -> f32 {
        self.state.log(format!("half_to_float({half})"));
        self.script().half_to_float
    }

    fn float_to_half(&self, value: f32) -> u16 {
        self.state.log(format!("float_to_half({value:?})"));
        0
    }

    fn num_vertices_per_primitive(&self, topology: Topology) -> u32 {
        self.state
            .log(format!("num_vertices_per_primitive({topology:?})"));
        self.script().vertex_count
    }

    fn vertex_offset(&self, topology: Topology, primitive: u32) -> u32 {
        self.state
            .log(format!("vertex_offset({topology:?}, {primitive})"));
        0
    }

    fn enumerate_remote_targets(&self, host: &str, next_ident: u32) -> u32 {
        self.state
            .log(format!("enumerate_remote_targets({host:?}, {next_ident})"));
        0
    }

    fn get_default_remote_server_port(&self) -> u32 {
        self.state.log("get_default_remote_server_port()".into());
        39920
    }

    fn become_remote_server(&self, listen_host: &str, port: u32, kill: &KillSwitch) {
        self.state
            .log(format!("become_remote_server({listen_host:?}, {port})"));
        kill.kill();
    }

    fn get_default_capture_options(&self) -> CaptureOptions {
        self.state.log("get_default_capture_options()".into());
        CaptureOptions::default()
    }

    fn start_global_hook(&self, path_match: &str, logfile: &str, opts: &CaptureOptions) -> bool {
        self.state.log(format!(
            "start_global_hook({path_match:?}, {logfile:?}, api_validation={})",
            opts.api_validation
        ));
        true
    }

    fn stop_global_hook(&self) {
        self.state.log("stop_global_hook()".into());
    }

    fn is_global_hook_active(&self) -> bool {
        self.state.log("is_global_hook_active()".into());
        false
    }

    fn can_global_hook(&self) -> bool {
        self.state.log("can_global_hook()".into());
        true
    }

    fn execute_and_inject(
        &self,
        app: &str,
        working_dir: &str,
        cmd_line: &str,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32 {
        let names: Vec<&str> = env.iter().map(|m| m.name.as_str()).collect();
        self.state.log(format!(
            "execute_and_inject({app:?}, {working_dir:?}, {cmd_line:?}, [{}], {logfile:?}, \
             api_validation={}, {wait_for_exit})",
            names.join(", "),
            opts.api_validation
        ));
        self.script().ident
    }

    fn inject_into_process(
        &self,
        pid: u32,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32 {
        let names: Vec<&str> = env.iter().map(|m| m.name.as_str()).collect();
        self.state.log(format!(
            "inject_into_process({pid}, [{}], {logfile:?}, api_validation={}, {wait_for_exit})",
            names.join(", "),
            opts.api_validation
        ));
        self.script().ident
    }

    fn start_self_host_capture(&self, dll_name: &str) {
        self.state
            .log(format!("start_self_host_capture({dll_name:?})"));
    }

    fn end_self_host_capture(&self, dll_name: &str) {
        self.state.log(format!("end_self_host_capture({dll_name:?})"));
    }

    fn need_vulkan_layer_registration(&self) -> VulkanLayerRegistration {
        self.state.log("need_vulkan_layer_registration()".into());
        self.script().vulkan.clone()
    }

    fn update_vulkan_layer_registration(&self, system_level: bool) {
        self.state
            .log(format!("update_vulkan_layer_registration({system_level})"));
    }

    fn init_global_env(&self, _env: GlobalEnvironment, args: &[String]) {
        self.state.log(format!("init_global_env({args:?})"));
    }

    fn trigger_exception_handler(&self, _exception_ptrs: *mut c_void, crashed: bool) {
        self.state
            .log(format!("trigger_exception_handler({crashed})"));
    }

    fn set_debug_log_file(&self, filename: &str) {
        self.state.log(format!("set_debug_log_file({filename:?})"));
    }

    fn get_log_file(&self) -> String {
        self.state.log("get_log_file()".into());
        "/tmp/renderdoc.log".into()
    }

    fn log_text(&self, text: &str) {
        self.state.log(format!("log_text({text:?})"));
    }

    fn log_message(&self, log_type: LogType, project: &str, file: &str, line: u32, text: &str) {
        self.state.log(format!(
            "log_message({log_type:?}, {project:?}, {file:?}, {line}, {text:?})"
        ));
    }

    fn get_version_string(&self) -> String {
        self.state.log("get_version_string()".into());
        "1.0-mock".into()
    }

    fn get_config_setting(&self, name: &str) -> String {
        self.state.log(format!("get_config_setting({name:?})"));
        self.script().config_value.clone()
    }

    fn set_config_setting(&self, name: &str, value: &str) {
        self.state
            .log(format!("set_config_setting({name:?}, {value:?})"));
    }

    fn get_android_friendly_name(&self, device: &str) -> String {
        self.state
            .log(format!("get_android_friendly_name({device:?})"));
        format!("Pixel ({device})")
    }

    fn enumerate_android_devices(&self) -> String {
        self.state.log("enumerate_android_devices()".into());
        String::new()
    }

    fn start_android_remote_server(&self, device: &str) {
        self.state
            .log(format!("start_android_remote_server({device:?})"));
    }

    fn check_android_package(&self, host: &str, exe: &str) -> AndroidFlags {
        self.state
            .log(format!("check_android_package({host:?}, {exe:?})"));
        self.script().android
    }

    fn add_layer_to_android_package(
        &self,
        host: &str,
        exe: &str,
        progress: Option<&Progress>,
    ) -> bool {
        self.state.log(format!(
            "add_layer_to_android_package({host:?}, {exe:?}, {:?})",
            progress_value(progress)
        ));
        if let Some(progress) = progress {
            progress.set(1.0);
        }
        true
    }
}
