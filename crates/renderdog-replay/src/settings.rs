use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use renderdog_replay_sys as sys;

/// Options applied to an injected or globally hooked target (strongly typed `CaptureOptions`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CaptureOptions {
    pub allow_vsync: bool,
    pub allow_fullscreen: bool,
    pub api_validation: bool,
    pub capture_callstacks: bool,
    pub capture_callstacks_only_draws: bool,
    /// Seconds to wait for a debugger after injection.
    pub delay_for_debugger: u32,
    pub verify_map_writes: bool,
    pub hook_into_children: bool,
    pub ref_all_resources: bool,
    pub save_all_initials: bool,
    pub capture_all_cmd_lists: bool,
    pub debug_output_mute: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allow_vsync: true,
            allow_fullscreen: true,
            api_validation: false,
            capture_callstacks: false,
            capture_callstacks_only_draws: false,
            delay_for_debugger: 0,
            verify_map_writes: false,
            hook_into_children: false,
            ref_all_resources: false,
            save_all_initials: false,
            capture_all_cmd_lists: false,
            debug_output_mute: true,
        }
    }
}

impl From<CaptureOptions> for sys::CaptureOptions {
    fn from(value: CaptureOptions) -> Self {
        sys::CaptureOptions {
            AllowVSync: value.allow_vsync.into(),
            AllowFullscreen: value.allow_fullscreen.into(),
            APIValidation: value.api_validation.into(),
            CaptureCallstacks: value.capture_callstacks.into(),
            CaptureCallstacksOnlyDraws: value.capture_callstacks_only_draws.into(),
            DelayForDebugger: value.delay_for_debugger,
            VerifyMapWrites: value.verify_map_writes.into(),
            HookIntoChildren: value.hook_into_children.into(),
            RefAllResources: value.ref_all_resources.into(),
            SaveAllInitials: value.save_all_initials.into(),
            CaptureAllCmdLists: value.capture_all_cmd_lists.into(),
            DebugOutputMute: value.debug_output_mute.into(),
        }
    }
}

impl From<sys::CaptureOptions> for CaptureOptions {
    fn from(value: sys::CaptureOptions) -> Self {
        Self {
            allow_vsync: value.AllowVSync != 0,
            allow_fullscreen: value.AllowFullscreen != 0,
            api_validation: value.APIValidation != 0,
            capture_callstacks: value.CaptureCallstacks != 0,
            capture_callstacks_only_draws: value.CaptureCallstacksOnlyDraws != 0,
            delay_for_debugger: value.DelayForDebugger,
            verify_map_writes: value.VerifyMapWrites != 0,
            hook_into_children: value.HookIntoChildren != 0,
            ref_all_resources: value.RefAllResources != 0,
            save_all_initials: value.SaveAllInitials != 0,
            capture_all_cmd_lists: value.CaptureAllCmdLists != 0,
            debug_output_mute: value.DebugOutputMute != 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum EnvMod {
    #[default]
    Set,
    Append,
    Prepend,
}

impl From<EnvMod> for sys::EnvMod {
    fn from(value: EnvMod) -> Self {
        match value {
            EnvMod::Set => sys::EnvMod_Set,
            EnvMod::Append => sys::EnvMod_Append,
            EnvMod::Prepend => sys::EnvMod_Prepend,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum EnvSep {
    #[default]
    Platform,
    SemiColon,
    Colon,
    NoSep,
}

impl From<EnvSep> for sys::EnvSep {
    fn from(value: EnvSep) -> Self {
        match value {
            EnvSep::Platform => sys::EnvSep_Platform,
            EnvSep::SemiColon => sys::EnvSep_SemiColon,
            EnvSep::Colon => sys::EnvSep_Colon,
            EnvSep::NoSep => sys::EnvSep_NoSep,
        }
    }
}

/// One environment change applied to a launched or injected process.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentModification {
    pub modification: EnvMod,
    pub separator: EnvSep,
    pub name: String,
    pub value: String,
}

impl EnvironmentModification {
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            modification: EnvMod::Set,
            separator: EnvSep::NoSep,
            name: name.into(),
            value: value.into(),
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
    pub struct VulkanLayerFlags: u32 {
        const OTHER_INSTALLS_REGISTERED = sys::VulkanLayerFlags_OtherInstallsRegistered;
        const THIS_INSTALL_REGISTERED = sys::VulkanLayerFlags_ThisInstallRegistered;
        const NEED_ELEVATION = sys::VulkanLayerFlags_NeedElevation;
        const COULD_ELEVATE = sys::VulkanLayerFlags_CouldElevate;
        const REGISTER_ALL = sys::VulkanLayerFlags_RegisterAll;
        const UPDATE_ALLOWED = sys::VulkanLayerFlags_UpdateAllowed;
        const UNFIXABLE = sys::VulkanLayerFlags_Unfixable;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
    pub struct AndroidFlags: u32 {
        const DEBUGGABLE = sys::AndroidFlags_Debuggable;
        const ROOT_ACCESS = sys::AndroidFlags_RootAccess;
        const MISSING_LIBRARY = sys::AndroidFlags_MissingLibrary;
    }
}

/// Result of `need_vulkan_layer_registration`: the return value plus its three out-parameters.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct VulkanLayerRegistration {
    pub needs_registration: bool,
    pub flags: VulkanLayerFlags,
    pub my_jsons: Vec<String>,
    pub other_jsons: Vec<String>,
}
