use std::ptr::NonNull;
use std::sync::Arc;

use renderdog_replay_sys as sys;

use crate::engine::{EngineObject, EngineTargetControl};
use crate::types::TargetControlMessage;

use super::Loaded;
use super::library::{Shim, TargetShim};
use super::marshal::take_json;
use super::rdctype::{c_string, copy_c_str};

/// `ITargetControl` reached through the flat `renderdoc_target_*` functions.
pub(crate) struct NativeTargetControl {
    raw: Option<NonNull<sys::ITargetControl>>,
    shim: Arc<Shim>,
    _loaded: Arc<Loaded>,
}

impl NativeTargetControl {
    pub(super) fn new(
        raw: *mut sys::ITargetControl,
        shim: Arc<Shim>,
        loaded: Arc<Loaded>,
    ) -> Option<Self> {
        let raw = NonNull::new(raw)?;
        Some(Self {
            raw: Some(raw),
            shim,
            _loaded: loaded,
        })
    }

    fn ptr(&self) -> *mut sys::ITargetControl {
        match self.raw {
            Some(raw) => raw.as_ptr(),
            None => unreachable!("target control used after shutdown"),
        }
    }

    fn fns(&self) -> &TargetShim {
        &self.shim.target
    }
}

impl EngineObject for NativeTargetControl {
    fn shutdown(&mut self) {
        if let Some(raw) = self.raw.take() {
            unsafe { (self.fns().shutdown)(raw.as_ptr()) };
        }
    }
}

impl EngineTargetControl for NativeTargetControl {
    fn connected(&self) -> bool {
        unsafe { (self.fns().connected)(self.ptr()) }
    }

    fn get_target(&self) -> String {
        unsafe { copy_c_str((self.fns().get_target)(self.ptr())) }
    }

    fn get_api(&self) -> String {
        unsafe { copy_c_str((self.fns().get_api)(self.ptr())) }
    }

    fn get_pid(&self) -> u32 {
        unsafe { (self.fns().get_pid)(self.ptr()) }
    }

    fn get_busy_client(&self) -> String {
        unsafe { copy_c_str((self.fns().get_busy_client)(self.ptr())) }
    }

    fn trigger_capture(&self, num_frames: u32) {
        unsafe { (self.fns().trigger_capture)(self.ptr(), num_frames) }
    }

    fn queue_capture(&self, frame_number: u32) {
        unsafe { (self.fns().queue_capture)(self.ptr(), frame_number) }
    }

    fn copy_capture(&self, remote_id: u32, local_path: &str) {
        let local_path = c_string(local_path);
        unsafe { (self.fns().copy_capture)(self.ptr(), remote_id, local_path.as_ptr()) }
    }

    fn delete_capture(&self, remote_id: u32) {
        unsafe { (self.fns().delete_capture)(self.ptr(), remote_id) }
    }

    /// A message the shim cannot describe reads as [`TargetControlMessage::Unknown`].
    fn receive_message(&self) -> TargetControlMessage {
        unsafe {
            let doc = (self.fns().receive_message)(self.ptr());
            take_json(self.shim.free, doc, "receive_message")
        }
    }
}

impl Drop for NativeTargetControl {
    fn drop(&mut self) {
        self.shutdown();
    }
}
