//! C-linkage exports over a process-wide [`Api`].
//!
//! Handles cross the boundary as opaque pointers to boxed adapters. Every `*_shutdown` (and
//! `renderdog_replay_controller_shutdown_output` / `renderdog_replay_remote_server_close_capture`)
//! consumes the pointer it is given; the caller must not use it afterwards. Outputs must be
//! released before the controller that created them, and remotely opened controllers before
//! their connection.
//!
//! Until an [`Api`] is installed every function returns null, zero or
//! `ReplayStatus::InternalError`.

// Handle pointees are opaque to C callers.
#![allow(improper_ctypes_definitions)]

use std::borrow::Cow;
use std::ffi::{CStr, c_char, c_void};
use std::ops::Deref;
use std::sync::OnceLock;

use renderdog_replay_sys as sys;

use crate::api::Api;
use crate::camera::Camera;
use crate::capture_file::CaptureFile;
use crate::native::NativeEngine;
use crate::remote_server::{RemoteReplayController, RemoteServer};
use crate::replay_controller::ReplayController;
use crate::replay_output::ReplayOutput;
use crate::target_control::TargetControl;
use crate::types::{
    CameraType, Progress, ReplayOutputType, ReplayStatus, Topology, WindowingSystem,
};

static API: OnceLock<Api> = OnceLock::new();

/// Installs the engine the exported functions forward to. Fails (handing `api` back) when one is
/// already installed.
pub fn install(api: Api) -> Result<(), Api> {
    API.set(api)
}

pub fn installed() -> Option<&'static Api> {
    API.get()
}

fn into_raw<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// # Safety
///
/// `ptr` must be null or come from [`into_raw`] and not have been released.
unsafe fn release<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(unsafe { Box::from_raw(ptr) });
    }
}

/// # Safety
///
/// `ptr` must be null or a live handle from [`into_raw`].
unsafe fn get<'a, T>(ptr: *const T) -> Option<&'a T> {
    unsafe { ptr.as_ref() }
}

/// Null reads as empty; invalid UTF-8 is replaced.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated string valid for `'a`.
unsafe fn arg<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
}

/// Writes `value` to `out`. With a null `out` the value is dropped (and so released).
///
/// # Safety
///
/// `out` must be null or valid for writes.
unsafe fn hand_out<T>(out: *mut *mut T, value: Option<T>) {
    if let Some(slot) = unsafe { out.as_mut() } {
        *slot = value.map_or(std::ptr::null_mut(), into_raw);
    }
}

/// Controller behind a C handle: a local session, or one owned by a remote connection handle.
pub enum ControllerHandle {
    Local(ReplayController),
    /// Borrows the connection handle it was opened through.
    Remote(RemoteReplayController<'static>),
}

impl Deref for ControllerHandle {
    type Target = ReplayController;

    fn deref(&self) -> &ReplayController {
        match self {
            ControllerHandle::Local(controller) => controller,
            ControllerHandle::Remote(controller) => controller,
        }
    }
}

fn bool32(v: bool) -> sys::bool32 {
    u32::from(v)
}

const NO_API: sys::ReplayStatus = ReplayStatus::InternalError as sys::ReplayStatus;

/// Loads the native replay library at `path` (or from `RENDERDOG_REPLAY_LIBRARY` when null) and
/// installs it. Returns 0 if loading fails or an engine is already installed.
///
/// # Safety
///
/// `path` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_load(path: *const c_char) -> sys::bool32 {
    let engine = if path.is_null() {
        NativeEngine::from_env()
    } else {
        NativeEngine::load(&*unsafe { arg(path) })
    };
    match engine {
        Ok(engine) => {
            let installed = install(Api::new(engine)).is_ok();
            if !installed {
                tracing::warn!("replay engine already installed; keeping the existing one");
            }
            bool32(installed)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load replay library");
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_camera_init(camera_type: sys::CameraType) -> *mut Camera {
    let (Some(api), Some(camera_type)) = (installed(), CameraType::from_raw(camera_type)) else {
        return std::ptr::null_mut();
    };
    match Camera::new(api, camera_type) {
        Ok(camera) => into_raw(camera),
        Err(err) => {
            tracing::debug!(error = %err, "camera unavailable");
            std::ptr::null_mut()
        }
    }
}

/// # Safety
///
/// `camera` must be null or a live camera handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_camera_shutdown(camera: *mut Camera) {
    unsafe { release(camera) }
}

/// # Safety
///
/// `camera` must be null or a live camera handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_camera_set_position(
    camera: *const Camera,
    x: f32,
    y: f32,
    z: f32,
) {
    if let Some(camera) = unsafe { get(camera) } {
        camera.set_position(x, y, z);
    }
}

/// # Safety
///
/// `camera` must be null or a live camera handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_camera_set_fps_rotation(
    camera: *const Camera,
    x: f32,
    y: f32,
    z: f32,
) {
    if let Some(camera) = unsafe { get(camera) } {
        camera.set_fps_rotation(x, y, z);
    }
}

/// # Safety
///
/// `camera` must be null or a live camera handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_camera_set_arcball_distance(
    camera: *const Camera,
    dist: f32,
) {
    if let Some(camera) = unsafe { get(camera) } {
        camera.set_arcball_distance(dist);
    }
}

/// # Safety
///
/// `camera` must be null or a live camera handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_camera_reset_arcball(camera: *const Camera) {
    if let Some(camera) = unsafe { get(camera) } {
        camera.reset_arcball();
    }
}

/// # Safety
///
/// `camera` must be null or a live camera handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_camera_rotate_arcball(
    camera: *const Camera,
    ax: f32,
    ay: f32,
    bx: f32,
    by: f32,
) {
    if let Some(camera) = unsafe { get(camera) } {
        camera.rotate_arcball(ax, ay, bx, by);
    }
}

macro_rules! camera_vector {
    ($($export:ident => $method:ident,)*) => {
        $(
            /// Zero vector for a null handle.
            ///
            /// # Safety
            ///
            /// `camera` must be null or a live camera handle.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $export(camera: *const Camera) -> sys::renderdoc_float4 {
                unsafe { get(camera) }
                    .map(Camera::$method)
                    .unwrap_or_default()
                    .into()
            }
        )*
    };
}

camera_vector! {
    renderdog_replay_camera_get_position => get_position,
    renderdog_replay_camera_get_forward => get_forward,
    renderdog_replay_camera_get_right => get_right,
    renderdog_replay_camera_get_up => get_up,
}

// ---------------------------------------------------------------------------
// Capture file
// ---------------------------------------------------------------------------

/// # Safety
///
/// `path` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_capture_file_open(
    path: *const c_char,
) -> *mut CaptureFile {
    let Some(api) = installed() else {
        return std::ptr::null_mut();
    };
    match CaptureFile::open(api, &unsafe { arg(path) }) {
        Ok(file) => into_raw(file),
        Err(err) => {
            tracing::debug!(error = %err, "capture file unavailable");
            std::ptr::null_mut()
        }
    }
}

/// # Safety
///
/// `file` must be null or a live capture file handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_capture_file_shutdown(file: *mut CaptureFile) {
    unsafe { release(file) }
}

/// # Safety
///
/// `file` must be null or a live capture file handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_capture_file_open_status(
    file: *const CaptureFile,
) -> sys::ReplayStatus {
    unsafe { get(file) }.map_or(NO_API, |file| file.open_status().to_raw())
}

/// Opens the capture for replay. On success `*out` receives a controller handle; otherwise it is
/// set to null.
///
/// # Safety
///
/// `file` must be null or a live capture file handle. `progress` must be null or a `float` that
/// stays valid for the call. `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_capture_file_open_capture(
    file: *const CaptureFile,
    progress: *mut f32,
    out: *mut *mut ControllerHandle,
) -> sys::ReplayStatus {
    let Some(file) = (unsafe { get(file) }) else {
        unsafe { hand_out(out, None) };
        return NO_API;
    };
    let progress = unsafe { Progress::from_ptr(progress) };
    let (status, controller) = match file.open_capture(progress) {
        Ok(controller) => (ReplayStatus::Succeeded, Some(ControllerHandle::Local(controller))),
        Err(status) => (status, None),
    };
    unsafe { hand_out(out, controller) };
    status.to_raw()
}

// ---------------------------------------------------------------------------
// Replay controller & output
// ---------------------------------------------------------------------------

/// Shuts a local controller down; a remotely opened one is closed on its connection instead.
///
/// # Safety
///
/// `controller` must be null or a live controller handle whose outputs were all released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_controller_shutdown(
    controller: *mut ControllerHandle,
) {
    unsafe { release(controller) }
}

/// # Safety
///
/// `controller` must be null or a live controller handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_controller_set_frame_event(
    controller: *const ControllerHandle,
    event_id: u32,
    force: sys::bool32,
) {
    if let Some(controller) = unsafe { get(controller) } {
        controller.set_frame_event(event_id, force != 0);
    }
}

/// # Safety
///
/// `controller` must be null or a live controller handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_controller_file_changed(
    controller: *const ControllerHandle,
) {
    if let Some(controller) = unsafe { get(controller) } {
        controller.file_changed();
    }
}

/// Null when the engine declines or either enum value is unknown.
///
/// # Safety
///
/// `controller` must be null or a live controller handle, and must outlive the returned output.
/// `data` is passed to the engine unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_controller_create_output(
    controller: *const ControllerHandle,
    system: u32,
    data: *mut c_void,
    output_type: u32,
) -> *mut ReplayOutput<'static> {
    let controller: Option<&'static ControllerHandle> = unsafe { get(controller) };
    let (Some(controller), Some(system), Some(output_type)) = (
        controller,
        WindowingSystem::from_raw(system),
        ReplayOutputType::from_raw(output_type),
    ) else {
        return std::ptr::null_mut();
    };
    controller
        .create_output(system, data, output_type)
        .map_or(std::ptr::null_mut(), into_raw)
}

/// # Safety
///
/// `output` must be null or a live output handle created from `controller`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_controller_shutdown_output(
    controller: *const ControllerHandle,
    output: *mut ReplayOutput<'static>,
) {
    if output.is_null() {
        return;
    }
    let output = *unsafe { Box::from_raw(output) };
    match unsafe { get(controller) } {
        Some(controller) => controller.shutdown_output(output),
        // The output already knows its controller.
        None => drop(output),
    }
}

/// # Safety
///
/// `output` must be null or a live output handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_output_display(output: *const ReplayOutput<'static>) {
    if let Some(output) = unsafe { get(output) } {
        output.display();
    }
}

// ---------------------------------------------------------------------------
// Remote server
// ---------------------------------------------------------------------------

/// Connects to `host:port`; on success `*out` receives the connection handle.
///
/// # Safety
///
/// `host` must be null or a NUL-terminated string. `out` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_remote_server_connect(
    host: *const c_char,
    port: u32,
    out: *mut *mut RemoteServer,
) -> sys::ReplayStatus {
    let Some(api) = installed() else {
        unsafe { hand_out(out, None) };
        return NO_API;
    };
    let (status, remote) = match RemoteServer::connect(api, &unsafe { arg(host) }, port) {
        Ok(remote) => (ReplayStatus::Succeeded, Some(remote)),
        Err(err) => (err.status(), None),
    };
    unsafe { hand_out(out, remote) };
    status.to_raw()
}

/// # Safety
///
/// `remote` must be null or a live remote server handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_remote_server_shutdown_connection(
    remote: *mut RemoteServer,
) {
    unsafe { release(remote) }
}

/// # Safety
///
/// `remote` must be null or a live remote server handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_remote_server_shutdown_server_and_connection(
    remote: *mut RemoteServer,
) {
    if !remote.is_null() {
        unsafe { Box::from_raw(remote) }.shutdown_server_and_connection();
    }
}

/// # Safety
///
/// `remote` must be null or a live remote server handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_remote_server_ping(
    remote: *const RemoteServer,
) -> sys::bool32 {
    bool32(unsafe { get(remote) }.is_some_and(RemoteServer::ping))
}

/// Opens `path` on the remote host; on success `*out` receives a controller handle owned by
/// `remote`.
///
/// # Safety
///
/// As [`renderdog_replay_capture_file_open_capture`], with `remote` a live remote server handle
/// that outlives the controller.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_remote_server_open_capture(
    remote: *const RemoteServer,
    proxy_id: u32,
    path: *const c_char,
    progress: *mut f32,
    out: *mut *mut ControllerHandle,
) -> sys::ReplayStatus {
    let remote: Option<&'static RemoteServer> = unsafe { get(remote) };
    let Some(remote) = remote else {
        unsafe { hand_out(out, None) };
        return NO_API;
    };
    let progress = unsafe { Progress::from_ptr(progress) };
    let path = unsafe { arg(path) };
    let (status, controller) = match remote.open_capture(proxy_id, &path, progress) {
        Ok(controller) => (ReplayStatus::Succeeded, Some(ControllerHandle::Remote(controller))),
        Err(status) => (status, None),
    };
    unsafe { hand_out(out, controller) };
    status.to_raw()
}

/// Hands `controller` back to the remote host, consuming the handle.
///
/// # Safety
///
/// `remote` must be null or a live remote server handle; `controller` must be null or a live
/// controller handle opened through it, with all its outputs released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_remote_server_close_capture(
    remote: *const RemoteServer,
    controller: *mut ControllerHandle,
) {
    if controller.is_null() {
        return;
    }
    match *unsafe { Box::from_raw(controller) } {
        ControllerHandle::Remote(controller) => match unsafe { get(remote) } {
            Some(remote) => remote.close_capture(controller),
            None => controller.close(),
        },
        ControllerHandle::Local(controller) => {
            tracing::warn!("close_capture on a locally opened controller; shutting it down");
            controller.shutdown();
        }
    }
}

// ---------------------------------------------------------------------------
// Target control
// ---------------------------------------------------------------------------

/// Null when the engine could not open the channel.
///
/// # Safety
///
/// `host` and `client_name` must be null or NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_create(
    host: *const c_char,
    ident: u32,
    client_name: *const c_char,
    force_connection: sys::bool32,
) -> *mut TargetControl {
    let Some(api) = installed() else {
        return std::ptr::null_mut();
    };
    let target = TargetControl::connect(
        api,
        &unsafe { arg(host) },
        ident,
        &unsafe { arg(client_name) },
        force_connection != 0,
    );
    match target {
        Ok(Some(target)) => into_raw(target),
        Ok(None) => std::ptr::null_mut(),
        Err(err) => {
            tracing::debug!(error = %err, "target control unavailable");
            std::ptr::null_mut()
        }
    }
}

/// # Safety
///
/// `target` must be null or a live target control handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_shutdown(target: *mut TargetControl) {
    unsafe { release(target) }
}

/// # Safety
///
/// `target` must be null or a live target control handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_connected(
    target: *const TargetControl,
) -> sys::bool32 {
    bool32(unsafe { get(target) }.is_some_and(TargetControl::connected))
}

/// # Safety
///
/// `target` must be null or a live target control handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_get_pid(
    target: *const TargetControl,
) -> u32 {
    unsafe { get(target) }.map_or(0, TargetControl::get_pid)
}

/// # Safety
///
/// `target` must be null or a live target control handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_trigger_capture(
    target: *const TargetControl,
    num_frames: u32,
) {
    if let Some(target) = unsafe { get(target) } {
        target.trigger_capture(num_frames);
    }
}

/// # Safety
///
/// `target` must be null or a live target control handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_queue_capture(
    target: *const TargetControl,
    frame_number: u32,
) {
    if let Some(target) = unsafe { get(target) } {
        target.queue_capture(frame_number);
    }
}

/// # Safety
///
/// `target` must be null or a live target control handle; `local_path` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_copy_capture(
    target: *const TargetControl,
    remote_id: u32,
    local_path: *const c_char,
) {
    if let Some(target) = unsafe { get(target) } {
        target.copy_capture(remote_id, &unsafe { arg(local_path) });
    }
}

/// # Safety
///
/// `target` must be null or a live target control handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_target_control_delete_capture(
    target: *const TargetControl,
    remote_id: u32,
) {
    if let Some(target) = unsafe { get(target) } {
        target.delete_capture(remote_id);
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_half_to_float(half: u16) -> f32 {
    installed().map_or(0.0, |api| api.half_to_float(half))
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_float_to_half(value: f32) -> u16 {
    installed().map_or(0, |api| api.float_to_half(value))
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_num_vertices_per_primitive(topology: sys::Topology) -> u32 {
    installed().map_or(0, |api| {
        api.num_vertices_per_primitive(Topology::from_raw(topology))
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_vertex_offset(topology: sys::Topology, primitive: u32) -> u32 {
    installed().map_or(0, |api| {
        api.vertex_offset(Topology::from_raw(topology), primitive)
    })
}

/// # Safety
///
/// `host` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_enumerate_remote_targets(
    host: *const c_char,
    next_ident: u32,
) -> u32 {
    installed().map_or(0, |api| {
        api.enumerate_remote_targets(&unsafe { arg(host) }, next_ident)
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_default_remote_server_port() -> u32 {
    installed().map_or(0, Api::default_remote_server_port)
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_stop_global_hook() {
    if let Some(api) = installed() {
        api.stop_global_hook();
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_is_global_hook_active() -> sys::bool32 {
    bool32(installed().is_some_and(Api::is_global_hook_active))
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_can_global_hook() -> sys::bool32 {
    bool32(installed().is_some_and(Api::can_global_hook))
}

/// # Safety
///
/// `dll_name` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_start_self_host_capture(dll_name: *const c_char) {
    if let Some(api) = installed() {
        api.start_self_host_capture(&unsafe { arg(dll_name) });
    }
}

/// # Safety
///
/// `dll_name` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_end_self_host_capture(dll_name: *const c_char) {
    if let Some(api) = installed() {
        api.end_self_host_capture(&unsafe { arg(dll_name) });
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn renderdog_replay_update_vulkan_layer_registration(system_level: sys::bool32) {
    if let Some(api) = installed() {
        api.update_vulkan_layer_registration(system_level != 0);
    }
}

/// # Safety
///
/// `filename` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_set_debug_log_file(filename: *const c_char) {
    if let Some(api) = installed() {
        api.set_debug_log_file(&unsafe { arg(filename) });
    }
}

/// # Safety
///
/// `text` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_log_text(text: *const c_char) {
    if let Some(api) = installed() {
        api.log_text(&unsafe { arg(text) });
    }
}

/// # Safety
///
/// `name` and `value` must be null or NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn renderdog_replay_set_config_setting(
    name: *const c_char,
    value: *const c_char,
) {
    if let Some(api) = installed() {
        api.set_config_setting(&unsafe { arg(name) }, &unsafe { arg(value) });
    }
}
