use std::path::Path;

use libloading::Library;

use renderdog_replay_sys as sys;

use crate::error::ReplayError;

/// A nullable function pointer type as declared by the sys crate.
pub(crate) trait Export: Copy {
    type Fn: Copy;

    fn into_fn(self) -> Option<Self::Fn>;
}

impl<F: Copy> Export for Option<F> {
    type Fn = F;

    fn into_fn(self) -> Option<F> {
        self
    }
}

/// The callable function behind a sys `p<name>` pointer type.
pub(crate) type Resolved<T> = <T as Export>::Fn;

/// Resolves one export. `name` is the bare symbol name.
///
/// # Safety
///
/// `T` must match the symbol's real signature.
unsafe fn symbol<T: Export>(lib: &Library, name: &'static str) -> Result<T::Fn, ReplayError> {
    let sym = unsafe { lib.get::<T>(name.as_bytes()) }
        .map_err(|_| ReplayError::MissingFunction(name))?;
    (*sym).into_fn().ok_or(ReplayError::MissingFunction(name))
}

macro_rules! export_table {
    (
        $(#[$meta:meta])*
        $table:ident {
            $($field:ident: $ty:ident = $name:ident,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub(crate) struct $table {
            $(pub(crate) $field: Resolved<sys::$ty>,)*
        }

        impl $table {
            pub(crate) fn resolve(lib: &Library) -> Result<Self, ReplayError> {
                // SAFETY: each field's type is the declared signature of the named export.
                unsafe {
                    Ok(Self {
                        $($field: symbol::<sys::$ty>(lib, stringify!($name))?,)*
                    })
                }
            }
        }
    };
}

/// Like `export_table!`, for functions the sys crate also declares; with the `shim` feature
/// the table can be filled from the statically linked shim.
macro_rules! shim_table {
    (
        $(#[$meta:meta])*
        $table:ident {
            $($field:ident: $ty:ident = $name:ident,)*
        }
    ) => {
        export_table! {
            $(#[$meta])*
            $table {
                $($field: $ty = $name,)*
            }
        }

        #[cfg(feature = "shim")]
        impl $table {
            pub(crate) fn linked() -> Self {
                Self {
                    $($field: sys::$name,)*
                }
            }
        }
    };
}

export_table! {
    /// The `RENDERDOC_*` functions of `renderdoc_replay.h` that have C linkage.
    Exports {
        free_array_mem: pRENDERDOC_FreeArrayMem = RENDERDOC_FreeArrayMem,

        half_to_float: pRENDERDOC_HalfToFloat = RENDERDOC_HalfToFloat,
        float_to_half: pRENDERDOC_FloatToHalf = RENDERDOC_FloatToHalf,
        num_vertices_per_primitive: pRENDERDOC_NumVerticesPerPrimitive =
            RENDERDOC_NumVerticesPerPrimitive,
        vertex_offset: pRENDERDOC_VertexOffset = RENDERDOC_VertexOffset,

        enumerate_remote_targets: pRENDERDOC_EnumerateRemoteTargets =
            RENDERDOC_EnumerateRemoteTargets,
        get_default_remote_server_port: pRENDERDOC_GetDefaultRemoteServerPort =
            RENDERDOC_GetDefaultRemoteServerPort,
        become_remote_server: pRENDERDOC_BecomeRemoteServer = RENDERDOC_BecomeRemoteServer,

        get_default_capture_options: pRENDERDOC_GetDefaultCaptureOptions =
            RENDERDOC_GetDefaultCaptureOptions,
        start_global_hook: pRENDERDOC_StartGlobalHook = RENDERDOC_StartGlobalHook,
        stop_global_hook: pRENDERDOC_StopGlobalHook = RENDERDOC_StopGlobalHook,
        is_global_hook_active: pRENDERDOC_IsGlobalHookActive = RENDERDOC_IsGlobalHookActive,
        can_global_hook: pRENDERDOC_CanGlobalHook = RENDERDOC_CanGlobalHook,
        execute_and_inject: pRENDERDOC_ExecuteAndInject = RENDERDOC_ExecuteAndInject,
        inject_into_process: pRENDERDOC_InjectIntoProcess = RENDERDOC_InjectIntoProcess,
        start_self_host_capture: pRENDERDOC_StartSelfHostCapture =
            RENDERDOC_StartSelfHostCapture,
        end_self_host_capture: pRENDERDOC_EndSelfHostCapture = RENDERDOC_EndSelfHostCapture,

        need_vulkan_layer_registration: pRENDERDOC_NeedVulkanLayerRegistration =
            RENDERDOC_NeedVulkanLayerRegistration,
        update_vulkan_layer_registration: pRENDERDOC_UpdateVulkanLayerRegistration =
            RENDERDOC_UpdateVulkanLayerRegistration,

        init_global_env: pRENDERDOC_InitGlobalEnv = RENDERDOC_InitGlobalEnv,
        trigger_exception_handler: pRENDERDOC_TriggerExceptionHandler =
            RENDERDOC_TriggerExceptionHandler,
        set_debug_log_file: pRENDERDOC_SetDebugLogFile = RENDERDOC_SetDebugLogFile,
        get_log_file: pRENDERDOC_GetLogFile = RENDERDOC_GetLogFile,
        log_text: pRENDERDOC_LogText = RENDERDOC_LogText,
        log_message: pRENDERDOC_LogMessage = RENDERDOC_LogMessage,
        get_version_string: pRENDERDOC_GetVersionString = RENDERDOC_GetVersionString,
        get_config_setting: pRENDERDOC_GetConfigSetting = RENDERDOC_GetConfigSetting,
        set_config_setting: pRENDERDOC_SetConfigSetting = RENDERDOC_SetConfigSetting,

        get_android_friendly_name: pRENDERDOC_GetAndroidFriendlyName =
            RENDERDOC_GetAndroidFriendlyName,
        enumerate_android_devices: pRENDERDOC_EnumerateAndroidDevices =
            RENDERDOC_EnumerateAndroidDevices,
        start_android_remote_server: pRENDERDOC_StartAndroidRemoteServer =
            RENDERDOC_StartAndroidRemoteServer,
        check_android_package: pRENDERDOC_CheckAndroidPackage = RENDERDOC_CheckAndroidPackage,
        add_layer_to_android_package: pRENDERDOC_AddLayerToAndroidPackage =
            RENDERDOC_AddLayerToAndroidPackage,
    }
}

export_table! {
    /// C-linkage constructors handing out the C++ replay interfaces.
    Interfaces {
        init_camera: pRENDERDOC_InitCamera = RENDERDOC_InitCamera,
        open_capture_file: pRENDERDOC_OpenCaptureFile = RENDERDOC_OpenCaptureFile,
        create_target_control: pRENDERDOC_CreateTargetControl = RENDERDOC_CreateTargetControl,
        create_remote_server_connection: pRENDERDOC_CreateRemoteServerConnection =
            RENDERDOC_CreateRemoteServerConnection,
    }
}

shim_table! {
    CameraShim {
        set_position: prenderdoc_camera_set_position = renderdoc_camera_set_position,
        set_fps_rotation: prenderdoc_camera_set_fps_rotation = renderdoc_camera_set_fps_rotation,
        set_arcball_distance: prenderdoc_camera_set_arcball_distance =
            renderdoc_camera_set_arcball_distance,
        reset_arcball: prenderdoc_camera_reset_arcball = renderdoc_camera_reset_arcball,
        rotate_arcball: prenderdoc_camera_rotate_arcball = renderdoc_camera_rotate_arcball,
        get_position: prenderdoc_camera_get_position = renderdoc_camera_get_position,
        get_forward: prenderdoc_camera_get_forward = renderdoc_camera_get_forward,
        get_right: prenderdoc_camera_get_right = renderdoc_camera_get_right,
        get_up: prenderdoc_camera_get_up = renderdoc_camera_get_up,
        shutdown: prenderdoc_camera_shutdown = renderdoc_camera_shutdown,
    }
}

shim_table! {
    CaptureFileShim {
        open_status: prenderdoc_capture_file_open_status = renderdoc_capture_file_open_status,
        filename: prenderdoc_capture_file_filename = renderdoc_capture_file_filename,
        local_replay_support: prenderdoc_capture_file_local_replay_support =
            renderdoc_capture_file_local_replay_support,
        driver_name: prenderdoc_capture_file_driver_name = renderdoc_capture_file_driver_name,
        recorded_machine_ident: prenderdoc_capture_file_recorded_machine_ident =
            renderdoc_capture_file_recorded_machine_ident,
        open_capture: prenderdoc_capture_file_open_capture = renderdoc_capture_file_open_capture,
        get_thumbnail: prenderdoc_capture_file_get_thumbnail =
            renderdoc_capture_file_get_thumbnail,
        shutdown: prenderdoc_capture_file_shutdown = renderdoc_capture_file_shutdown,
    }
}

shim_table! {
    ControllerShim {
        get_api_properties: prenderdoc_controller_get_api_properties =
            renderdoc_controller_get_api_properties,
        get_supported_window_systems: prenderdoc_controller_get_supported_window_systems =
            renderdoc_controller_get_supported_window_systems,
        create_output: prenderdoc_controller_create_output = renderdoc_controller_create_output,
        shutdown_output: prenderdoc_controller_shutdown_output =
            renderdoc_controller_shutdown_output,
        replay_loop: prenderdoc_controller_replay_loop = renderdoc_controller_replay_loop,
        cancel_replay_loop: prenderdoc_controller_cancel_replay_loop =
            renderdoc_controller_cancel_replay_loop,
        file_changed: prenderdoc_controller_file_changed = renderdoc_controller_file_changed,
        has_callstacks: prenderdoc_controller_has_callstacks = renderdoc_controller_has_callstacks,
        init_resolver: prenderdoc_controller_init_resolver = renderdoc_controller_init_resolver,
        set_frame_event: prenderdoc_controller_set_frame_event =
            renderdoc_controller_set_frame_event,
        get_d3d11_pipeline_state: prenderdoc_controller_get_d3d11_pipeline_state =
            renderdoc_controller_get_d3d11_pipeline_state,
        get_d3d12_pipeline_state: prenderdoc_controller_get_d3d12_pipeline_state =
            renderdoc_controller_get_d3d12_pipeline_state,
        get_gl_pipeline_state: prenderdoc_controller_get_gl_pipeline_state =
            renderdoc_controller_get_gl_pipeline_state,
        get_vulkan_pipeline_state: prenderdoc_controller_get_vulkan_pipeline_state =
            renderdoc_controller_get_vulkan_pipeline_state,
        get_disassembly_targets: prenderdoc_controller_get_disassembly_targets =
            renderdoc_controller_get_disassembly_targets,
        disassemble_shader: prenderdoc_controller_disassemble_shader =
            renderdoc_controller_disassemble_shader,
        build_custom_shader: prenderdoc_controller_build_custom_shader =
            renderdoc_controller_build_custom_shader,
        free_custom_shader: prenderdoc_controller_free_custom_shader =
            renderdoc_controller_free_custom_shader,
        build_target_shader: prenderdoc_controller_build_target_shader =
            renderdoc_controller_build_target_shader,
        replace_resource: prenderdoc_controller_replace_resource =
            renderdoc_controller_replace_resource,
        remove_replacement: prenderdoc_controller_remove_replacement =
            renderdoc_controller_remove_replacement,
        free_target_resource: prenderdoc_controller_free_target_resource =
            renderdoc_controller_free_target_resource,
        get_frame_info: prenderdoc_controller_get_frame_info = renderdoc_controller_get_frame_info,
        get_drawcalls: prenderdoc_controller_get_drawcalls = renderdoc_controller_get_drawcalls,
        fetch_counters: prenderdoc_controller_fetch_counters = renderdoc_controller_fetch_counters,
        enumerate_counters: prenderdoc_controller_enumerate_counters =
            renderdoc_controller_enumerate_counters,
        describe_counter: prenderdoc_controller_describe_counter =
            renderdoc_controller_describe_counter,
        get_textures: prenderdoc_controller_get_textures = renderdoc_controller_get_textures,
        get_buffers: prenderdoc_controller_get_buffers = renderdoc_controller_get_buffers,
        get_resolve: prenderdoc_controller_get_resolve = renderdoc_controller_get_resolve,
        get_debug_messages: prenderdoc_controller_get_debug_messages =
            renderdoc_controller_get_debug_messages,
        pixel_history: prenderdoc_controller_pixel_history = renderdoc_controller_pixel_history,
        debug_vertex: prenderdoc_controller_debug_vertex = renderdoc_controller_debug_vertex,
        debug_pixel: prenderdoc_controller_debug_pixel = renderdoc_controller_debug_pixel,
        debug_thread: prenderdoc_controller_debug_thread = renderdoc_controller_debug_thread,
        describe_trace: prenderdoc_controller_describe_trace = renderdoc_controller_describe_trace,
        free_trace: prenderdoc_controller_free_trace = renderdoc_controller_free_trace,
        get_usage: prenderdoc_controller_get_usage = renderdoc_controller_get_usage,
        get_cbuffer_variable_contents: prenderdoc_controller_get_cbuffer_variable_contents =
            renderdoc_controller_get_cbuffer_variable_contents,
        save_texture: prenderdoc_controller_save_texture = renderdoc_controller_save_texture,
        get_post_vs_data: prenderdoc_controller_get_post_vs_data =
            renderdoc_controller_get_post_vs_data,
        get_buffer_data: prenderdoc_controller_get_buffer_data =
            renderdoc_controller_get_buffer_data,
        get_texture_data: prenderdoc_controller_get_texture_data =
            renderdoc_controller_get_texture_data,
        shutdown: prenderdoc_controller_shutdown = renderdoc_controller_shutdown,
    }
}

shim_table! {
    OutputShim {
        set_texture_display: prenderdoc_output_set_texture_display =
            renderdoc_output_set_texture_display,
        set_mesh_display: prenderdoc_output_set_mesh_display = renderdoc_output_set_mesh_display,
        clear_thumbnails: prenderdoc_output_clear_thumbnails = renderdoc_output_clear_thumbnails,
        add_thumbnail: prenderdoc_output_add_thumbnail = renderdoc_output_add_thumbnail,
        display: prenderdoc_output_display = renderdoc_output_display,
        set_pixel_context: prenderdoc_output_set_pixel_context =
            renderdoc_output_set_pixel_context,
        set_pixel_context_location: prenderdoc_output_set_pixel_context_location =
            renderdoc_output_set_pixel_context_location,
        disable_pixel_context: prenderdoc_output_disable_pixel_context =
            renderdoc_output_disable_pixel_context,
        get_min_max: prenderdoc_output_get_min_max = renderdoc_output_get_min_max,
        get_histogram: prenderdoc_output_get_histogram = renderdoc_output_get_histogram,
        get_custom_shader_tex_id: prenderdoc_output_get_custom_shader_tex_id =
            renderdoc_output_get_custom_shader_tex_id,
        get_debug_overlay_tex_id: prenderdoc_output_get_debug_overlay_tex_id =
            renderdoc_output_get_debug_overlay_tex_id,
        pick_pixel: prenderdoc_output_pick_pixel = renderdoc_output_pick_pixel,
        pick_vertex: prenderdoc_output_pick_vertex = renderdoc_output_pick_vertex,
    }
}

shim_table! {
    RemoteShim {
        shutdown_connection: prenderdoc_remote_shutdown_connection =
            renderdoc_remote_shutdown_connection,
        shutdown_server_and_connection: prenderdoc_remote_shutdown_server_and_connection =
            renderdoc_remote_shutdown_server_and_connection,
        ping: prenderdoc_remote_ping = renderdoc_remote_ping,
        local_proxies: prenderdoc_remote_local_proxies = renderdoc_remote_local_proxies,
        remote_supported_replays: prenderdoc_remote_remote_supported_replays =
            renderdoc_remote_remote_supported_replays,
        get_home_folder: prenderdoc_remote_get_home_folder = renderdoc_remote_get_home_folder,
        list_folder: prenderdoc_remote_list_folder = renderdoc_remote_list_folder,
        take_ownership_capture: prenderdoc_remote_take_ownership_capture =
            renderdoc_remote_take_ownership_capture,
        copy_capture_to_remote: prenderdoc_remote_copy_capture_to_remote =
            renderdoc_remote_copy_capture_to_remote,
        copy_capture_from_remote: prenderdoc_remote_copy_capture_from_remote =
            renderdoc_remote_copy_capture_from_remote,
        open_capture: prenderdoc_remote_open_capture = renderdoc_remote_open_capture,
        close_capture: prenderdoc_remote_close_capture = renderdoc_remote_close_capture,
    }
}

shim_table! {
    TargetShim {
        connected: prenderdoc_target_connected = renderdoc_target_connected,
        get_target: prenderdoc_target_get_target = renderdoc_target_get_target,
        get_api: prenderdoc_target_get_api = renderdoc_target_get_api,
        get_pid: prenderdoc_target_get_pid = renderdoc_target_get_pid,
        get_busy_client: prenderdoc_target_get_busy_client = renderdoc_target_get_busy_client,
        trigger_capture: prenderdoc_target_trigger_capture = renderdoc_target_trigger_capture,
        queue_capture: prenderdoc_target_queue_capture = renderdoc_target_queue_capture,
        copy_capture: prenderdoc_target_copy_capture = renderdoc_target_copy_capture,
        delete_capture: prenderdoc_target_delete_capture = renderdoc_target_delete_capture,
        receive_message: prenderdoc_target_receive_message = renderdoc_target_receive_message,
        shutdown: prenderdoc_target_shutdown = renderdoc_target_shutdown,
    }
}

/// The flat `renderdoc_*` shim over every replay interface.
pub(crate) struct Shim {
    /// Releases strings and buffers the shim allocated.
    pub(crate) free: Resolved<sys::prenderdoc_shim_free>,
    pub(crate) camera: CameraShim,
    pub(crate) capture_file: CaptureFileShim,
    pub(crate) controller: ControllerShim,
    pub(crate) output: OutputShim,
    pub(crate) remote: RemoteShim,
    pub(crate) target: TargetShim,
}

impl Shim {
    /// The shim has to be complete; a partial one is reported by its first missing symbol.
    pub(crate) fn resolve(lib: &Library) -> Result<Self, ReplayError> {
        Ok(Self {
            // SAFETY: `prenderdoc_shim_free` is the declared signature of `renderdoc_shim_free`.
            free: unsafe {
                symbol::<sys::prenderdoc_shim_free>(lib, "renderdoc_shim_free")?
            },
            camera: CameraShim::resolve(lib)?,
            capture_file: CaptureFileShim::resolve(lib)?,
            controller: ControllerShim::resolve(lib)?,
            output: OutputShim::resolve(lib)?,
            remote: RemoteShim::resolve(lib)?,
            target: TargetShim::resolve(lib)?,
        })
    }

    /// The shim compiled into this binary by `renderdog-replay-sys`.
    #[cfg(feature = "shim")]
    pub(crate) fn linked() -> Self {
        Self {
            free: sys::renderdoc_shim_free,
            camera: CameraShim::linked(),
            capture_file: CaptureFileShim::linked(),
            controller: ControllerShim::linked(),
            output: OutputShim::linked(),
            remote: RemoteShim::linked(),
            target: TargetShim::linked(),
        }
    }
}

#[cfg(windows)]
pub(crate) const DEFAULT_CANDIDATES: &[&str] = &["renderdoc.dll"];

#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_CANDIDATES: &[&str] = &["librenderdoc.dylib"];

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) const DEFAULT_CANDIDATES: &[&str] = &["librenderdoc.so", "librenderdoc.so.1"];

#[cfg(not(any(windows, unix)))]
pub(crate) const DEFAULT_CANDIDATES: &[&str] = &[];

pub(crate) fn open(path: &Path) -> Result<Library, ReplayError> {
    // SAFETY: loading runs the library's initialisers. Callers point this at a RenderDoc replay
    // library, whose exports are then resolved against the declared signatures.
    unsafe { Library::new(path) }.map_err(|e| ReplayError::LoadLibrary(e.to_string()))
}

/// Borrows a replay library some other component already loaded into this process.
pub(crate) fn open_already_loaded() -> Result<Library, ReplayError> {
    #[cfg(windows)]
    {
        use libloading::os::windows;

        for candidate in DEFAULT_CANDIDATES {
            if let Ok(lib) = windows::Library::open_already_loaded(candidate) {
                return Ok(Library::from(lib));
            }
        }
        Err(ReplayError::NotLoaded)
    }

    #[cfg(target_os = "linux")]
    {
        use libloading::os::unix;

        // RTLD_NOLOAD is a non-POSIX extension; we only enable it on Linux.
        let flags = unix::RTLD_LAZY | unix::RTLD_LOCAL | libc::RTLD_NOLOAD;
        for candidate in DEFAULT_CANDIDATES {
            let lib = unsafe { unix::Library::open(Some(candidate), flags) };
            if let Ok(lib) = lib {
                return Ok(Library::from(lib));
            }
        }
        Err(ReplayError::NotLoaded)
    }

    #[cfg(not(any(windows, target_os = "linux")))]
    {
        Err(ReplayError::NotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The test binary itself, which exports none of the replay symbols.
    #[cfg(unix)]
    fn this_process() -> Library {
        Library::from(libloading::os::unix::Library::this())
    }

    #[cfg(windows)]
    fn this_process() -> Library {
        match libloading::os::windows::Library::this() {
            Ok(lib) => Library::from(lib),
            Err(e) => panic!("current module: {e}"),
        }
    }

    #[test]
    fn missing_library_is_a_load_error() {
        let err = open(Path::new("definitely-not-a-renderdoc-library.so")).err();
        assert!(matches!(err, Some(ReplayError::LoadLibrary(_))));
    }

    #[test]
    fn default_candidates_are_platform_library_names() {
        #[cfg(any(windows, unix))]
        assert!(!DEFAULT_CANDIDATES.is_empty());
        for candidate in DEFAULT_CANDIDATES {
            assert!(candidate.contains("renderdoc"));
        }
    }

    #[cfg(any(windows, unix))]
    #[test]
    fn tables_name_the_first_missing_export() {
        let lib = this_process();
        assert!(matches!(
            Exports::resolve(&lib),
            Err(ReplayError::MissingFunction("RENDERDOC_FreeArrayMem"))
        ));
        assert!(matches!(
            Interfaces::resolve(&lib),
            Err(ReplayError::MissingFunction("RENDERDOC_InitCamera"))
        ));
        assert!(matches!(
            Shim::resolve(&lib),
            Err(ReplayError::MissingFunction("renderdoc_shim_free"))
        ));
        assert!(matches!(
            ControllerShim::resolve(&lib),
            Err(ReplayError::MissingFunction("renderdoc_controller_get_api_properties"))
        ));
    }

    #[test]
    fn null_pointers_do_not_resolve() {
        let missing: sys::prenderdoc_shim_free = None;
        assert!(missing.into_fn().is_none());
    }
}
