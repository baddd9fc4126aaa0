//! The engine-side interfaces the adapters forward to.
//!
//! Each trait mirrors one of RenderDoc's replay interfaces (`ICamera`, `ICaptureFile`,
//! `IReplayController`, `IReplayOutput`, `IRemoteServer`, `ITargetControl`) method for method.
//! Implementations own the real engine object; the adapters in this crate own the trait objects
//! and decide when they are released.

use std::ffi::c_void;

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

/// `(status, controller)` pair returned by the engine when a capture is opened.
///
/// The controller is only meaningful when the status is [`ReplayStatus::Succeeded`].
pub type RawOpenCapture = (ReplayStatus, Option<Box<dyn EngineReplayController>>);

/// An engine object its owner releases with a single `Shutdown` call.
pub trait EngineObject {
    fn shutdown(&mut self);
}

pub trait EngineCamera: EngineObject {
    fn set_position(&self, x: f32, y: f32, z: f32);
    fn set_fps_rotation(&self, x: f32, y: f32, z: f32);

    fn set_arcball_distance(&self, dist: f32);
    fn reset_arcball(&self);
    fn rotate_arcball(&self, ax: f32, ay: f32, bx: f32, by: f32);

    fn get_position(&self) -> FloatVector;
    fn get_forward(&self) -> FloatVector;
    fn get_right(&self) -> FloatVector;
    fn get_up(&self) -> FloatVector;

    /// The engine's own `ICamera`, for engines whose sibling objects take it directly.
    fn engine_ptr(&self) -> *mut c_void {
        std::ptr::null_mut()
    }
}

pub trait EngineCaptureFile: EngineObject {
    fn open_status(&self) -> ReplayStatus;
    fn filename(&self) -> String;

    fn local_replay_support(&self) -> ReplaySupport;
    fn driver_name(&self) -> String;
    fn recorded_machine_ident(&self) -> String;

    fn open_capture(&self, progress: Option<&Progress>) -> RawOpenCapture;
    fn get_thumbnail(&self, file_type: FileType, max_size: u32) -> Vec<u8>;
}

pub trait EngineReplayController: EngineObject {
    fn get_api_properties(&self) -> ApiProperties;
    fn get_supported_window_systems(&self) -> Vec<WindowingSystem>;

    fn create_output(
        &self,
        system: WindowingSystem,
        data: WindowData,
        output_type: ReplayOutputType,
    ) -> Option<Box<dyn EngineReplayOutput>>;
    fn shutdown_output(&self, output: Box<dyn EngineReplayOutput>);

    fn replay_loop(&self, system: WindowingSystem, data: WindowData, texture: ResourceId);
    fn cancel_replay_loop(&self);

    fn file_changed(&self);
    fn has_callstacks(&self) -> bool;
    fn init_resolver(&self) -> bool;

    fn set_frame_event(&self, event_id: u32, force: bool);

    fn get_d3d11_pipeline_state(&self) -> D3D11PipelineState;
    fn get_d3d12_pipeline_state(&self) -> D3D12PipelineState;
    fn get_gl_pipeline_state(&self) -> GlPipelineState;
    fn get_vulkan_pipeline_state(&self) -> VulkanPipelineState;

    fn get_disassembly_targets(&self) -> Vec<String>;
    fn disassemble_shader(&self, refl: &ShaderReflection, target: &str) -> String;

    fn build_custom_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String);
    fn free_custom_shader(&self, id: ResourceId);
    fn build_target_shader(
        &self,
        entry: &str,
        source: &str,
        compile_flags: u32,
        stage: ShaderStage,
    ) -> (ResourceId, String);

    fn replace_resource(&self, original: ResourceId, replacement: ResourceId);
    fn remove_replacement(&self, id: ResourceId);
    fn free_target_resource(&self, id: ResourceId);

    fn get_frame_info(&self) -> FrameDescription;
    fn get_drawcalls(&self) -> Vec<DrawcallDescription>;

    fn fetch_counters(&self, counters: &[GpuCounter]) -> Vec<CounterResult>;
    fn enumerate_counters(&self) -> Vec<GpuCounter>;
    fn describe_counter(&self, counter: GpuCounter) -> CounterDescription;

    fn get_textures(&self) -> Vec<TextureDescription>;
    fn get_buffers(&self) -> Vec<BufferDescription>;
    fn get_resolve(&self, callstack: &[u64]) -> Vec<String>;
    fn get_debug_messages(&self) -> Vec<DebugMessage>;

    #[allow(clippy::too_many_arguments)]
    fn pixel_history(
        &self,
        texture: ResourceId,
        x: u32,
        y: u32,
        slice: u32,
        mip: u32,
        sample_idx: u32,
        type_hint: CompType,
    ) -> Vec<PixelModification>;

    fn debug_vertex(
        &self,
        vert_id: u32,
        inst_id: u32,
        idx: u32,
        inst_offset: u32,
        vert_offset: u32,
    ) -> Option<Box<ShaderDebugTrace>>;
    fn debug_pixel(
        &self,
        x: u32,
        y: u32,
        sample: u32,
        primitive: u32,
    ) -> Option<Box<ShaderDebugTrace>>;
    fn debug_thread(&self, group_id: [u32; 3], thread_id: [u32; 3])
    -> Option<Box<ShaderDebugTrace>>;
    fn free_trace(&self, trace: Box<ShaderDebugTrace>);

    fn get_usage(&self, id: ResourceId) -> Vec<EventUsage>;
    fn get_cbuffer_variable_contents(
        &self,
        shader: ResourceId,
        entry_point: &str,
        cbuf_slot: u32,
        buffer: ResourceId,
        offset: u64,
    ) -> Vec<ShaderVariable>;

    fn save_texture(&self, save_data: &TextureSave, path: &str) -> bool;

    fn get_post_vs_data(&self, inst_id: u32, stage: MeshDataStage) -> MeshFormat;

    fn get_buffer_data(&self, buffer: ResourceId, offset: u64, len: u64) -> Vec<u8>;
    fn get_texture_data(&self, texture: ResourceId, array_idx: u32, mip: u32) -> Vec<u8>;

    /// The engine's own `IReplayController`; see [`EngineCamera::engine_ptr`].
    fn engine_ptr(&self) -> *mut c_void {
        std::ptr::null_mut()
    }
}

/// Released only through [`EngineReplayController::shutdown_output`].
pub trait EngineReplayOutput {
    fn set_texture_display(&self, display: &TextureDisplay);
    fn set_mesh_display(&self, display: &MeshDisplay, camera: Option<&dyn EngineCamera>);

    fn clear_thumbnails(&self);
    fn add_thumbnail(
        &self,
        system: WindowingSystem,
        data: WindowData,
        texture: ResourceId,
        type_hint: CompType,
    ) -> bool;

    fn display(&self);

    fn set_pixel_context(&self, system: WindowingSystem, data: WindowData) -> bool;
    fn set_pixel_context_location(&self, x: u32, y: u32);
    fn disable_pixel_context(&self);

    fn get_min_max(&self) -> (PixelValue, PixelValue);
    fn get_histogram(&self, min_val: f32, max_val: f32, channels: [bool; 4]) -> Vec<u32>;

    fn get_custom_shader_tex_id(&self) -> ResourceId;
    fn get_debug_overlay_tex_id(&self) -> ResourceId;

    #[allow(clippy::too_many_arguments)]
    fn pick_pixel(
        &self,
        texture: ResourceId,
        custom_shader: bool,
        x: u32,
        y: u32,
        slice_face: u32,
        mip: u32,
        sample: u32,
    ) -> PixelValue;
    fn pick_vertex(&self, event_id: u32, x: u32, y: u32) -> (u32, u32);

    /// The engine's own `IReplayOutput`; see [`EngineCamera::engine_ptr`].
    fn engine_ptr(&self) -> *mut c_void {
        std::ptr::null_mut()
    }
}

/// Remote connections have two releases instead of a single `Shutdown`.
pub trait EngineRemoteServer {
    fn shutdown_connection(&mut self);
    fn shutdown_server_and_connection(&mut self);

    fn ping(&self) -> bool;

    fn local_proxies(&self) -> Vec<String>;
    fn remote_supported_replays(&self) -> Vec<String>;

    fn get_home_folder(&self) -> String;
    fn list_folder(&self, path: &str) -> Vec<PathEntry>;

    fn take_ownership_capture(&self, filename: &str);
    fn copy_capture_to_remote(&self, filename: &str, progress: Option<&Progress>) -> String;
    fn copy_capture_from_remote(
        &self,
        remote_path: &str,
        local_path: &str,
        progress: Option<&Progress>,
    );

    fn open_capture(&self, proxy_id: u32, path: &str, progress: Option<&Progress>)
    -> RawOpenCapture;
    fn close_capture(&self, controller: Box<dyn EngineReplayController>);
}

pub trait EngineTargetControl: EngineObject {
    fn connected(&self) -> bool;

    fn get_target(&self) -> String;
    fn get_api(&self) -> String;
    fn get_pid(&self) -> u32;
    fn get_busy_client(&self) -> String;

    fn trigger_capture(&self, num_frames: u32);
    fn queue_capture(&self, frame_number: u32);
    fn copy_capture(&self, remote_id: u32, local_path: &str);
    fn delete_capture(&self, remote_id: u32);

    fn receive_message(&self) -> TargetControlMessage;
}

/// Entry points of the replay library: object constructors plus the exported free functions.
///
/// Constructors return `Err` only for wrapper-level failures (for example an interface the
/// engine build does not expose); everything else is the engine's own answer.
pub trait Engine: Send + Sync {
    fn init_camera(&self, camera_type: CameraType) -> Result<Box<dyn EngineCamera>, ReplayError>;
    fn open_capture_file(&self, path: &str) -> Result<Box<dyn EngineCaptureFile>, ReplayError>;
    fn create_target_control(
        &self,
        host: &str,
        ident: u32,
        client_name: &str,
        force_connection: bool,
    ) -> Result<Option<Box<dyn EngineTargetControl>>, ReplayError>;
    fn create_remote_server_connection(
        &self,
        host: &str,
        port: u32,
    ) -> Result<(ReplayStatus, Option<Box<dyn EngineRemoteServer>>), ReplayError>;

    fn half_to_float(&self, half: u16) -> f32;
    fn float_to_half(&self, value: f32) -> u16;
    fn num_vertices_per_primitive(&self, topology: Topology) -> u32;
    fn vertex_offset(&self, topology: Topology, primitive: u32) -> u32;

    fn enumerate_remote_targets(&self, host: &str, next_ident: u32) -> u32;

    fn get_default_remote_server_port(&self) -> u32;
    fn become_remote_server(&self, listen_host: &str, port: u32, kill: &KillSwitch);

    fn get_default_capture_options(&self) -> CaptureOptions;
    fn start_global_hook(&self, path_match: &str, logfile: &str, opts: &CaptureOptions) -> bool;
    fn stop_global_hook(&self);
    fn is_global_hook_active(&self) -> bool;
    fn can_global_hook(&self) -> bool;
    #[allow(clippy::too_many_arguments)]
    fn execute_and_inject(
        &self,
        app: &str,
        working_dir: &str,
        cmd_line: &str,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32;
    fn inject_into_process(
        &self,
        pid: u32,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32;
    fn start_self_host_capture(&self, dll_name: &str);
    fn end_self_host_capture(&self, dll_name: &str);

    fn need_vulkan_layer_registration(&self) -> VulkanLayerRegistration;
    fn update_vulkan_layer_registration(&self, system_level: bool);

    fn init_global_env(&self, env: GlobalEnvironment, args: &[String]);
    fn trigger_exception_handler(&self, exception_ptrs: *mut c_void, crashed: bool);
    fn set_debug_log_file(&self, filename: &str);
    fn get_log_file(&self) -> String;
    fn log_text(&self, text: &str);
    fn log_message(&self, log_type: LogType, project: &str, file: &str, line: u32, text: &str);
    fn get_version_string(&self) -> String;
    fn get_config_setting(&self, name: &str) -> String;
    fn set_config_setting(&self, name: &str, value: &str);

    fn get_android_friendly_name(&self, device: &str) -> String;
    fn enumerate_android_devices(&self) -> String;
    fn start_android_remote_server(&self, device: &str);
    fn check_android_package(&self, host: &str, exe: &str) -> AndroidFlags;
    fn add_layer_to_android_package(
        &self,
        host: &str,
        exe: &str,
        progress: Option<&Progress>,
    ) -> bool;
}
