//! [`Engine`] backed by a dynamically loaded RenderDoc replay library.
//!
//! The `RENDERDOC_*` free functions are called directly. The replay interfaces (`ICamera`,
//! `ICaptureFile`, `IReplayController`, `IReplayOutput`, `IRemoteServer`, `ITargetControl`) are
//! C++ classes and are driven through the flat `renderdoc_*` shim from `renderdog-replay-sys`,
//! found in this order:
//!
//! 1. [`NativeConfig::shim_library`], which must export the whole shim;
//! 2. the replay library itself;
//! 3. the copy linked into this crate with the `shim` feature.
//!
//! Without a shim (or without the library's interface constructors) the constructors report
//! [`ReplayError::InterfaceUnavailable`].

mod camera;
mod capture_file;
mod library;
mod marshal;
mod rdctype;
mod remote_server;
mod replay_controller;
mod replay_output;
mod target_control;

use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::Library;

use renderdog_replay_sys as sys;

use crate::engine::{
    Engine, EngineCamera, EngineCaptureFile, EngineRemoteServer, EngineTargetControl,
};
use crate::error::ReplayError;
use crate::settings::{
    AndroidFlags, CaptureOptions, EnvironmentModification, VulkanLayerFlags,
    VulkanLayerRegistration,
};
use crate::types::{
    CameraType, GlobalEnvironment, KillSwitch, LogType, Progress, ReplayStatus, Topology,
};

use self::camera::NativeCamera;
use self::capture_file::NativeCaptureFile;
use self::library::{Exports, Interfaces, Shim};
use self::rdctype::{
    EnvArray, StrArray, borrowed_str, c_string, copy_c_str, take_str, take_str_array,
};
use self::remote_server::NativeRemoteServer;
use self::target_control::NativeTargetControl;

/// Where to find the replay library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeConfig {
    pub library: PathBuf,
    /// Separate library exporting the `renderdoc_*` shim. `None` looks in `library` itself,
    /// then falls back to the linked shim.
    pub shim_library: Option<PathBuf>,
}

impl NativeConfig {
    pub const LIBRARY_ENV: &'static str = "RENDERDOG_REPLAY_LIBRARY";
    pub const SHIM_ENV: &'static str = "RENDERDOG_REPLAY_SHIM";

    /// Reads `RENDERDOG_REPLAY_LIBRARY` and `RENDERDOG_REPLAY_SHIM`, defaulting the library to the
    /// platform's RenderDoc library name.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(library) = std::env::var_os(Self::LIBRARY_ENV).filter(|v| !v.is_empty()) {
            config.library = PathBuf::from(library);
        }
        config.shim_library = std::env::var_os(Self::SHIM_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        config
    }
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            library: PathBuf::from(library::DEFAULT_CANDIDATES.first().copied().unwrap_or("")),
            shim_library: None,
        }
    }
}

/// Libraries kept loaded for as long as any engine object resolved from them is alive.
struct Loaded {
    exports: Exports,
    interfaces: Option<Interfaces>,
    shim: Option<Arc<Shim>>,
    _shim_lib: Option<Library>,
    _lib: Library,
}

#[derive(Clone)]
pub struct NativeEngine {
    loaded: Arc<Loaded>,
}

impl NativeEngine {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let lib = library::open(path.as_ref())?;
        Self::from_libraries(lib, None)
    }

    /// Tries each platform library name in turn.
    pub fn load_default() -> Result<Self, ReplayError> {
        let mut last = ReplayError::NotLoaded;
        for candidate in library::DEFAULT_CANDIDATES {
            match Self::load(candidate) {
                Ok(engine) => return Ok(engine),
                Err(e) => last = e,
            }
        }
        Err(last)
    }

    /// Attaches to a replay library already loaded in this process without loading it.
    pub fn connect_already_loaded() -> Result<Self, ReplayError> {
        let lib = library::open_already_loaded()?;
        Self::from_libraries(lib, None)
    }

    pub fn from_config(config: &NativeConfig) -> Result<Self, ReplayError> {
        let lib = library::open(&config.library)?;
        let shim = match &config.shim_library {
            Some(path) => Some(library::open(path)?),
            None => None,
        };
        Self::from_libraries(lib, shim)
    }

    pub fn from_env() -> Result<Self, ReplayError> {
        Self::from_config(&NativeConfig::from_env())
    }

    fn from_libraries(lib: Library, shim_lib: Option<Library>) -> Result<Self, ReplayError> {
        let exports = Exports::resolve(&lib)?;
        let interfaces = Interfaces::resolve(&lib)
            .inspect_err(|e| tracing::debug!(error = %e, "replay interfaces not exported"))
            .ok();
        let shim = match &shim_lib {
            // An explicit shim library has to provide the whole shim.
            Some(shim_lib) => Some(Shim::resolve(shim_lib)?),
            None => Shim::resolve(&lib).ok().or_else(linked_shim),
        };

        let loaded = Loaded {
            exports,
            interfaces,
            shim: shim.map(Arc::new),
            _shim_lib: shim_lib,
            _lib: lib,
        };
        let version = unsafe { copy_c_str((loaded.exports.get_version_string)()) };
        tracing::info!(
            version = %version,
            interfaces = loaded.interfaces.is_some(),
            shim = loaded.shim.is_some(),
            "replay library loaded"
        );

        Ok(Self {
            loaded: Arc::new(loaded),
        })
    }

    fn x(&self) -> &Exports {
        &self.loaded.exports
    }

    fn bridge(&self, kind: &'static str) -> Result<(&Interfaces, Arc<Shim>), ReplayError> {
        bridge(&self.loaded.interfaces, &self.loaded.shim, kind)
    }
}

impl std::fmt::Debug for NativeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeEngine")
            .field("interfaces", &self.loaded.interfaces.is_some())
            .field("shim", &self.loaded.shim.is_some())
            .finish_non_exhaustive()
    }
}

/// Interface constructors need both the library's constructor exports and a shim.
fn bridge<'a>(
    interfaces: &'a Option<Interfaces>,
    shim: &Option<Arc<Shim>>,
    kind: &'static str,
) -> Result<(&'a Interfaces, Arc<Shim>), ReplayError> {
    match (interfaces, shim) {
        (Some(interfaces), Some(shim)) => Ok((interfaces, Arc::clone(shim))),
        _ => Err(ReplayError::InterfaceUnavailable(kind)),
    }
}

#[cfg(feature = "shim")]
fn linked_shim() -> Option<Shim> {
    Some(Shim::linked())
}

#[cfg(not(feature = "shim"))]
fn linked_shim() -> Option<Shim> {
    None
}

fn progress_ptr(progress: Option<&Progress>) -> *mut f32 {
    progress.map_or(std::ptr::null_mut(), Progress::as_ptr)
}

fn bool32(v: bool) -> sys::bool32 {
    u32::from(v)
}

impl Engine for NativeEngine {
    fn init_camera(&self, camera_type: CameraType) -> Result<Box<dyn EngineCamera>, ReplayError> {
        let (interfaces, shim) = self.bridge("ICamera")?;
        let raw = unsafe { (interfaces.init_camera)(camera_type as sys::CameraType) };
        let camera = NativeCamera::new(raw, shim, Arc::clone(&self.loaded))
            .ok_or(ReplayError::Status(ReplayStatus::InternalError))?;
        Ok(Box::new(camera))
    }

    fn open_capture_file(&self, path: &str) -> Result<Box<dyn EngineCaptureFile>, ReplayError> {
        let (interfaces, shim) = self.bridge("ICaptureFile")?;
        let path = c_string(path);
        let raw = unsafe { (interfaces.open_capture_file)(path.as_ptr()) };
        let file = NativeCaptureFile::new(raw, shim, Arc::clone(&self.loaded))
            .ok_or(ReplayError::Status(ReplayStatus::InternalError))?;
        Ok(Box::new(file))
    }

    fn create_target_control(
        &self,
        host: &str,
        ident: u32,
        client_name: &str,
        force_connection: bool,
    ) -> Result<Option<Box<dyn EngineTargetControl>>, ReplayError> {
        let (interfaces, shim) = self.bridge("ITargetControl")?;
        let host = c_string(host);
        let client_name = c_string(client_name);
        let raw = unsafe {
            (interfaces.create_target_control)(
                host.as_ptr(),
                ident,
                client_name.as_ptr(),
                bool32(force_connection),
            )
        };
        Ok(NativeTargetControl::new(raw, shim, Arc::clone(&self.loaded))
            .map(|target| Box::new(target) as Box<dyn EngineTargetControl>))
    }

    fn create_remote_server_connection(
        &self,
        host: &str,
        port: u32,
    ) -> Result<(ReplayStatus, Option<Box<dyn EngineRemoteServer>>), ReplayError> {
        let (interfaces, shim) = self.bridge("IRemoteServer")?;
        let host = c_string(host);
        let mut remote = std::ptr::null_mut();
        let status = unsafe {
            (interfaces.create_remote_server_connection)(host.as_ptr(), port, &mut remote)
        };
        let remote = NativeRemoteServer::new(remote, shim, Arc::clone(&self.loaded))
            .map(|remote| Box::new(remote) as Box<dyn EngineRemoteServer>);
        Ok((ReplayStatus::from_raw(status), remote))
    }

    fn half_to_float(&self, half: u16) -> f32 {
        unsafe { (self.x().half_to_float)(half) }
    }

    fn float_to_half(&self, value: f32) -> u16 {
        unsafe { (self.x().float_to_half)(value) }
    }

    fn num_vertices_per_primitive(&self, topology: Topology) -> u32 {
        unsafe { (self.x().num_vertices_per_primitive)(topology.to_raw()) }
    }

    fn vertex_offset(&self, topology: Topology, primitive: u32) -> u32 {
        unsafe { (self.x().vertex_offset)(topology.to_raw(), primitive) }
    }

    fn enumerate_remote_targets(&self, host: &str, next_ident: u32) -> u32 {
        let host = c_string(host);
        unsafe { (self.x().enumerate_remote_targets)(host.as_ptr(), next_ident) }
    }

    fn get_default_remote_server_port(&self) -> u32 {
        unsafe { (self.x().get_default_remote_server_port)() }
    }

    fn become_remote_server(&self, listen_host: &str, port: u32, kill: &KillSwitch) {
        let host = c_string(listen_host);
        unsafe { (self.x().become_remote_server)(host.as_ptr(), port, kill.as_ptr()) }
    }

    fn get_default_capture_options(&self) -> CaptureOptions {
        let mut raw = sys::CaptureOptions::default();
        unsafe { (self.x().get_default_capture_options)(&mut raw) };
        raw.into()
    }

    fn start_global_hook(&self, path_match: &str, logfile: &str, opts: &CaptureOptions) -> bool {
        let path_match = c_string(path_match);
        let logfile = c_string(logfile);
        let opts = sys::CaptureOptions::from(*opts);
        unsafe { (self.x().start_global_hook)(path_match.as_ptr(), logfile.as_ptr(), &opts) != 0 }
    }

    fn stop_global_hook(&self) {
        unsafe { (self.x().stop_global_hook)() }
    }

    fn is_global_hook_active(&self) -> bool {
        unsafe { (self.x().is_global_hook_active)() != 0 }
    }

    fn can_global_hook(&self) -> bool {
        unsafe { (self.x().can_global_hook)() != 0 }
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
        let app = c_string(app);
        let working_dir = c_string(working_dir);
        let cmd_line = c_string(cmd_line);
        let logfile = c_string(logfile);
        let mut env = EnvArray::new(env);
        let env = env.as_array();
        let opts = sys::CaptureOptions::from(*opts);
        unsafe {
            (self.x().execute_and_inject)(
                app.as_ptr(),
                working_dir.as_ptr(),
                cmd_line.as_ptr(),
                &env,
                logfile.as_ptr(),
                &opts,
                bool32(wait_for_exit),
            )
        }
    }

    fn inject_into_process(
        &self,
        pid: u32,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32 {
        let logfile = c_string(logfile);
        let mut env = EnvArray::new(env);
        let env = env.as_array();
        let opts = sys::CaptureOptions::from(*opts);
        unsafe {
            (self.x().inject_into_process)(
                pid,
                &env,
                logfile.as_ptr(),
                &opts,
                bool32(wait_for_exit),
            )
        }
    }

    fn start_self_host_capture(&self, dll_name: &str) {
        let dll_name = c_string(dll_name);
        unsafe { (self.x().start_self_host_capture)(dll_name.as_ptr()) }
    }

    fn end_self_host_capture(&self, dll_name: &str) {
        let dll_name = c_string(dll_name);
        unsafe { (self.x().end_self_host_capture)(dll_name.as_ptr()) }
    }

    fn need_vulkan_layer_registration(&self) -> VulkanLayerRegistration {
        let mut flags: sys::VulkanLayerFlags = 0;
        let mut mine = sys::rdctype_array::empty();
        let mut others = sys::rdctype_array::empty();
        let free = self.x().free_array_mem;
        unsafe {
            let needs =
                (self.x().need_vulkan_layer_registration)(&mut flags, &mut mine, &mut others);
            VulkanLayerRegistration {
                needs_registration: needs,
                flags: VulkanLayerFlags::from_bits_retain(flags),
                my_jsons: take_str_array(free, &mut mine),
                other_jsons: take_str_array(free, &mut others),
            }
        }
    }

    fn update_vulkan_layer_registration(&self, system_level: bool) {
        unsafe { (self.x().update_vulkan_layer_registration)(system_level) }
    }

    fn init_global_env(&self, env: GlobalEnvironment, args: &[String]) {
        let mut args = StrArray::new(args);
        let args = args.as_array();
        let env = sys::GlobalEnvironment {
            xlibDisplay: env.xlib_display,
        };
        unsafe { (self.x().init_global_env)(env, &args) }
    }

    fn trigger_exception_handler(&self, exception_ptrs: *mut c_void, crashed: bool) {
        unsafe { (self.x().trigger_exception_handler)(exception_ptrs, bool32(crashed)) }
    }

    fn set_debug_log_file(&self, filename: &str) {
        let filename = c_string(filename);
        unsafe { (self.x().set_debug_log_file)(filename.as_ptr()) }
    }

    fn get_log_file(&self) -> String {
        unsafe { copy_c_str((self.x().get_log_file)()) }
    }

    fn log_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.x().log_text)(text.as_ptr()) }
    }

    fn log_message(&self, log_type: LogType, project: &str, file: &str, line: u32, text: &str) {
        let project = c_string(project);
        let file = c_string(file);
        let text = c_string(text);
        unsafe {
            (self.x().log_message)(
                log_type.to_raw(),
                project.as_ptr(),
                file.as_ptr(),
                line,
                text.as_ptr(),
            )
        }
    }

    fn get_version_string(&self) -> String {
        unsafe { copy_c_str((self.x().get_version_string)()) }
    }

    fn get_config_setting(&self, name: &str) -> String {
        let name = c_string(name);
        unsafe { copy_c_str((self.x().get_config_setting)(name.as_ptr())) }
    }

    fn set_config_setting(&self, name: &str, value: &str) {
        let name = c_string(name);
        let value = c_string(value);
        unsafe { (self.x().set_config_setting)(name.as_ptr(), value.as_ptr()) }
    }

    fn get_android_friendly_name(&self, device: &str) -> String {
        let device = c_string(device);
        let device = borrowed_str(&device);
        let mut friendly = sys::rdctype_str::empty();
        unsafe {
            (self.x().get_android_friendly_name)(&device, &mut friendly);
            take_str(self.x().free_array_mem, &mut friendly)
        }
    }

    fn enumerate_android_devices(&self) -> String {
        let mut list = sys::rdctype_str::empty();
        unsafe {
            (self.x().enumerate_android_devices)(&mut list);
            take_str(self.x().free_array_mem, &mut list)
        }
    }

    fn start_android_remote_server(&self, device: &str) {
        let device = c_string(device);
        unsafe { (self.x().start_android_remote_server)(device.as_ptr()) }
    }

    fn check_android_package(&self, host: &str, exe: &str) -> AndroidFlags {
        let host = c_string(host);
        let exe = c_string(exe);
        let mut flags: sys::AndroidFlags = 0;
        unsafe { (self.x().check_android_package)(host.as_ptr(), exe.as_ptr(), &mut flags) };
        AndroidFlags::from_bits_retain(flags)
    }

    fn add_layer_to_android_package(
        &self,
        host: &str,
        exe: &str,
        progress: Option<&Progress>,
    ) -> bool {
        let host = c_string(host);
        let exe = c_string(exe);
        unsafe {
            (self.x().add_layer_to_android_package)(
                host.as_ptr(),
                exe.as_ptr(),
                progress_ptr(progress),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_platform_library() {
        let config = NativeConfig::default();
        #[cfg(windows)]
        assert_eq!(config.library, PathBuf::from("renderdoc.dll"));
        #[cfg(target_os = "linux")]
        assert_eq!(config.library, PathBuf::from("librenderdoc.so"));
        assert!(config.shim_library.is_none());
    }

    #[test]
    fn missing_library_fails_to_load() {
        let config = NativeConfig {
            library: PathBuf::from("no-such-dir/librenderdoc-missing.so"),
            shim_library: None,
        };
        assert!(matches!(
            NativeEngine::from_config(&config),
            Err(ReplayError::LoadLibrary(_))
        ));
    }

    #[test]
    fn interfaces_without_a_shim_are_unavailable() {
        let missing = bridge(&None, &None, "ICaptureFile");
        assert!(matches!(
            missing,
            Err(ReplayError::InterfaceUnavailable("ICaptureFile"))
        ));
    }

    #[cfg(not(feature = "shim"))]
    #[test]
    fn no_linked_shim_without_the_feature() {
        assert!(linked_shim().is_none());
    }

    #[test]
    fn progress_pointer_is_null_without_a_cell() {
        assert!(progress_ptr(None).is_null());
        let progress = Progress::new();
        assert!(!progress_ptr(Some(&progress)).is_null());
    }
}
