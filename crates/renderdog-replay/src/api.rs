//! Module-level entry points: adapter constructors plus the engine's free functions.

use std::ffi::c_void;
use std::sync::Arc;

use crate::camera::Camera;
use crate::capture_file::CaptureFile;
use crate::engine::Engine;
use crate::error::ReplayError;
use crate::remote_server::RemoteServer;
use crate::settings::{
    AndroidFlags, CaptureOptions, EnvironmentModification, VulkanLayerRegistration,
};
use crate::target_control::TargetControl;
use crate::types::{
    CameraType, GlobalEnvironment, KillSwitch, LogType, Progress, ReplayStatus, Topology,
};

/// Handle to a replay engine. Cloning shares the same engine.
#[derive(Clone)]
pub struct Api {
    engine: Arc<dyn Engine>,
}

impl Api {
    pub fn new(engine: impl Engine + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn from_arc(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    pub fn init_camera(&self, camera_type: CameraType) -> Result<Camera, ReplayError> {
        let inner = self.engine.init_camera(camera_type)?;
        Ok(Camera::from_engine(inner))
    }

    /// Always yields a capture file when the engine supports them; check its open status.
    pub fn open_capture_file(&self, path: &str) -> Result<CaptureFile, ReplayError> {
        let inner = self.engine.open_capture_file(path)?;
        tracing::debug!(path, "capture file opened");
        Ok(CaptureFile::from_engine(inner))
    }

    pub fn create_target_control(
        &self,
        host: &str,
        ident: u32,
        client_name: &str,
        force_connection: bool,
    ) -> Result<Option<TargetControl>, ReplayError> {
        let inner = self
            .engine
            .create_target_control(host, ident, client_name, force_connection)?;
        if inner.is_none() {
            tracing::debug!(host, ident, "target control unavailable");
        }
        Ok(inner.map(TargetControl::from_engine))
    }

    pub fn create_remote_server_connection(
        &self,
        host: &str,
        port: u32,
    ) -> Result<RemoteServer, ReplayError> {
        match self.engine.create_remote_server_connection(host, port)? {
            (ReplayStatus::Succeeded, Some(inner)) => Ok(RemoteServer::from_engine(inner)),
            (ReplayStatus::Succeeded, None) => {
                tracing::error!(host, port, "engine reported success without a connection");
                Err(ReplayStatus::InternalError.into())
            }
            (status, _) => {
                tracing::debug!(host, port, status = ?status, "remote server connection failed");
                Err(status.into())
            }
        }
    }

    // ---------------------------------------------------------------------
    // Maths
    // ---------------------------------------------------------------------

    pub fn half_to_float(&self, half: u16) -> f32 {
        self.engine.half_to_float(half)
    }

    pub fn float_to_half(&self, value: f32) -> u16 {
        self.engine.float_to_half(value)
    }

    pub fn num_vertices_per_primitive(&self, topology: Topology) -> u32 {
        self.engine.num_vertices_per_primitive(topology)
    }

    pub fn vertex_offset(&self, topology: Topology, primitive: u32) -> u32 {
        self.engine.vertex_offset(topology, primitive)
    }

    // ---------------------------------------------------------------------
    // Remote
    // ---------------------------------------------------------------------

    /// Returns the next target ident after `next_ident` on `host`, or `0` when there are none.
    pub fn enumerate_remote_targets(&self, host: &str, next_ident: u32) -> u32 {
        self.engine.enumerate_remote_targets(host, next_ident)
    }

    pub fn default_remote_server_port(&self) -> u32 {
        self.engine.get_default_remote_server_port()
    }

    /// Serves replay requests until `kill` is set from another thread.
    pub fn become_remote_server(&self, listen_host: &str, port: u32, kill: &KillSwitch) {
        tracing::info!(listen_host, port, "serving remote replay");
        self.engine.become_remote_server(listen_host, port, kill);
        tracing::info!(listen_host, port, "remote replay server stopped");
    }

    // ---------------------------------------------------------------------
    // Capture / injection
    // ---------------------------------------------------------------------

    pub fn default_capture_options(&self) -> CaptureOptions {
        self.engine.get_default_capture_options()
    }

    pub fn start_global_hook(
        &self,
        path_match: &str,
        logfile: &str,
        opts: &CaptureOptions,
    ) -> bool {
        self.engine.start_global_hook(path_match, logfile, opts)
    }

    pub fn stop_global_hook(&self) {
        self.engine.stop_global_hook()
    }

    pub fn is_global_hook_active(&self) -> bool {
        self.engine.is_global_hook_active()
    }

    pub fn can_global_hook(&self) -> bool {
        self.engine.can_global_hook()
    }

    /// Launches `app` with capturing enabled. Returns the target ident, `0` on failure.
    #[allow(clippy::too_many_arguments)]
    pub fn execute_and_inject(
        &self,
        app: &str,
        working_dir: &str,
        cmd_line: &str,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32 {
        self.engine
            .execute_and_inject(app, working_dir, cmd_line, env, logfile, opts, wait_for_exit)
    }

    pub fn inject_into_process(
        &self,
        pid: u32,
        env: &[EnvironmentModification],
        logfile: &str,
        opts: &CaptureOptions,
        wait_for_exit: bool,
    ) -> u32 {
        self.engine
            .inject_into_process(pid, env, logfile, opts, wait_for_exit)
    }

    pub fn start_self_host_capture(&self, dll_name: &str) {
        self.engine.start_self_host_capture(dll_name)
    }

    pub fn end_self_host_capture(&self, dll_name: &str) {
        self.engine.end_self_host_capture(dll_name)
    }

    // ---------------------------------------------------------------------
    // Vulkan layer
    // ---------------------------------------------------------------------

    pub fn need_vulkan_layer_registration(&self) -> VulkanLayerRegistration {
        self.engine.need_vulkan_layer_registration()
    }

    pub fn update_vulkan_layer_registration(&self, system_level: bool) {
        self.engine.update_vulkan_layer_registration(system_level)
    }

    // ---------------------------------------------------------------------
    // Process environment, logging and config
    // ---------------------------------------------------------------------

    pub fn init_global_env(&self, env: GlobalEnvironment, args: &[String]) {
        self.engine.init_global_env(env, args)
    }

    /// `exception_ptrs` is the platform's `EXCEPTION_POINTERS*` (null elsewhere).
    pub fn trigger_exception_handler(&self, exception_ptrs: *mut c_void, crashed: bool) {
        self.engine.trigger_exception_handler(exception_ptrs, crashed)
    }

    pub fn set_debug_log_file(&self, filename: &str) {
        self.engine.set_debug_log_file(filename)
    }

    pub fn log_file(&self) -> String {
        self.engine.get_log_file()
    }

    pub fn log_text(&self, text: &str) {
        self.engine.log_text(text)
    }

    pub fn log_message(&self, log_type: LogType, project: &str, file: &str, line: u32, text: &str) {
        self.engine.log_message(log_type, project, file, line, text)
    }

    pub fn version_string(&self) -> String {
        self.engine.get_version_string()
    }

    pub fn config_setting(&self, name: &str) -> String {
        self.engine.get_config_setting(name)
    }

    pub fn set_config_setting(&self, name: &str, value: &str) {
        self.engine.set_config_setting(name, value)
    }

    // ---------------------------------------------------------------------
    // Android
    // ---------------------------------------------------------------------

    pub fn android_friendly_name(&self, device: &str) -> String {
        self.engine.get_android_friendly_name(device)
    }

    /// Device serials, comma separated, as the engine reports them.
    pub fn enumerate_android_devices(&self) -> String {
        self.engine.enumerate_android_devices()
    }

    pub fn start_android_remote_server(&self, device: &str) {
        self.engine.start_android_remote_server(device)
    }

    pub fn check_android_package(&self, host: &str, exe: &str) -> AndroidFlags {
        self.engine.check_android_package(host, exe)
    }

    pub fn add_layer_to_android_package(
        &self,
        host: &str,
        exe: &str,
        progress: Option<&Progress>,
    ) -> bool {
        self.engine.add_layer_to_android_package(host, exe, progress)
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEngine;
    use crate::settings::{EnvSep, VulkanLayerFlags};

    #[test]
    fn maths_helpers_forward_values() {
        let engine = MockEngine::new();
        {
            let mut script = engine.script();
            script.half_to_float = 0.5;
            script.vertex_count = 3;
        }
        let api = engine.api();

        assert_eq!(api.half_to_float(0x3800), 0.5);
        assert_eq!(api.num_vertices_per_primitive(Topology::PatchList(3)), 3);
        let _ = api.vertex_offset(Topology::TriangleStrip, 7);

        assert_eq!(
            engine.calls(),
            [
                "half_to_float(14336)",
                "num_vertices_per_primitive(PatchList(3))",
                "vertex_offset(TriangleStrip, 7)",
            ]
        );
    }

    #[test]
    fn injection_forwards_every_argument_in_order() {
        let engine = MockEngine::new();
        engine.script().ident = 38920;
        let api = engine.api();

        let mut env =
            EnvironmentModification::set("VK_INSTANCE_LAYERS", "VK_LAYER_RENDERDOC_Capture");
        env.separator = EnvSep::Platform;
        let opts = CaptureOptions {
            api_validation: true,
            ..CaptureOptions::default()
        };

        let ident =
            api.execute_and_inject("game.exe", "C:/game", "-windowed", &[env], "", &opts, false);

        assert_eq!(ident, 38920);
        assert_eq!(
            engine.calls(),
            [
                "execute_and_inject(\"game.exe\", \"C:/game\", \"-windowed\", \
                 [VK_INSTANCE_LAYERS], \"\", api_validation=true, false)"
            ]
        );
    }

    #[test]
    fn vulkan_registration_is_returned_as_reported() {
        let engine = MockEngine::new();
        engine.script().vulkan = VulkanLayerRegistration {
            needs_registration: true,
            flags: VulkanLayerFlags::OTHER_INSTALLS_REGISTERED | VulkanLayerFlags::NEED_ELEVATION,
            my_jsons: vec!["/usr/share/vulkan/implicit_layer.d/renderdoc_capture.json".into()],
            other_jsons: vec!["/etc/vulkan/implicit_layer.d/renderdoc_capture.json".into()],
        };
        let api = engine.api();

        let reg = api.need_vulkan_layer_registration();
        assert!(reg.needs_registration);
        assert!(reg.flags.contains(VulkanLayerFlags::NEED_ELEVATION));
        assert_eq!(reg.other_jsons.len(), 1);
    }

    #[test]
    fn remote_server_loop_receives_the_kill_switch() {
        let engine = MockEngine::new();
        let api = engine.api();
        let kill = KillSwitch::new();

        api.become_remote_server("0.0.0.0", 39920, &kill);

        // The mock sets the switch the way a second thread would.
        assert!(kill.is_killed());
        assert_eq!(engine.calls(), ["become_remote_server(\"0.0.0.0\", 39920)"]);
    }

    #[test]
    fn config_and_log_calls_pass_through() {
        let engine = MockEngine::new();
        engine.script().config_value = "1".into();
        let api = engine.api();

        api.set_config_setting("Replay_Debug_SingleThreaded", "1");
        let value = api.config_setting("Replay_Debug_SingleThreaded");
        api.log_message(LogType::Warning, "tests", "api.rs", 42, "careful");

        assert_eq!(value, "1");
        assert_eq!(
            engine.calls(),
            [
                "set_config_setting(\"Replay_Debug_SingleThreaded\", \"1\")",
                "get_config_setting(\"Replay_Debug_SingleThreaded\")",
                "log_message(Warning, \"tests\", \"api.rs\", 42, \"careful\")",
            ]
        );
    }

    #[test]
    fn android_package_check_returns_engine_flags() {
        let engine = MockEngine::new();
        engine.script().android = AndroidFlags::DEBUGGABLE | AndroidFlags::MISSING_LIBRARY;
        let api = engine.api();

        let flags = api.check_android_package("adb:emulator-5554", "com.example.game");
        assert_eq!(flags, AndroidFlags::DEBUGGABLE | AndroidFlags::MISSING_LIBRARY);

        let progress = Progress::new();
        assert!(api.add_layer_to_android_package(
            "adb:emulator-5554",
            "com.example.game",
            Some(&progress)
        ));
        assert_eq!(progress.get(), 1.0);
    }

    #[test]
    fn clones_share_one_engine() {
        let engine = MockEngine::new();
        let api = engine.api();
        let other = api.clone();

        api.stop_global_hook();
        other.stop_global_hook();

        assert_eq!(engine.count("stop_global_hook()"), 2);
    }
}
