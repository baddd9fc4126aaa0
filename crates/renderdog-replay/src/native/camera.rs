use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

use renderdog_replay_sys as sys;

use crate::engine::{EngineCamera, EngineObject};
use crate::types::FloatVector;

use super::Loaded;
use super::library::{CameraShim, Resolved, Shim};

/// `ICamera` reached through the flat `renderdoc_camera_*` functions.
pub(crate) struct NativeCamera {
    raw: Option<NonNull<sys::ICamera>>,
    shim: Arc<Shim>,
    _loaded: Arc<Loaded>,
}

impl NativeCamera {
    /// `None` when the engine handed back a null camera.
    pub(super) fn new(
        raw: *mut sys::ICamera,
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

    fn ptr(&self) -> *mut sys::ICamera {
        match self.raw {
            Some(raw) => raw.as_ptr(),
            None => unreachable!("camera used after shutdown"),
        }
    }

    fn fns(&self) -> &CameraShim {
        &self.shim.camera
    }

    fn vector(&self, f: Resolved<sys::prenderdoc_camera_get_position>) -> FloatVector {
        unsafe { f(self.ptr()) }.into()
    }
}

impl EngineObject for NativeCamera {
    fn shutdown(&mut self) {
        if let Some(raw) = self.raw.take() {
            unsafe { (self.fns().shutdown)(raw.as_ptr()) };
        }
    }
}

impl EngineCamera for NativeCamera {
    fn set_position(&self, x: f32, y: f32, z: f32) {
        unsafe { (self.fns().set_position)(self.ptr(), x, y, z) }
    }

    fn set_fps_rotation(&self, x: f32, y: f32, z: f32) {
        unsafe { (self.fns().set_fps_rotation)(self.ptr(), x, y, z) }
    }

    fn set_arcball_distance(&self, dist: f32) {
        unsafe { (self.fns().set_arcball_distance)(self.ptr(), dist) }
    }

    fn reset_arcball(&self) {
        unsafe { (self.fns().reset_arcball)(self.ptr()) }
    }

    fn rotate_arcball(&self, ax: f32, ay: f32, bx: f32, by: f32) {
        unsafe { (self.fns().rotate_arcball)(self.ptr(), ax, ay, bx, by) }
    }

    fn get_position(&self) -> FloatVector {
        self.vector(self.fns().get_position)
    }

    fn get_forward(&self) -> FloatVector {
        self.vector(self.fns().get_forward)
    }

    fn get_right(&self) -> FloatVector {
        self.vector(self.fns().get_right)
    }

    fn get_up(&self) -> FloatVector {
        self.vector(self.fns().get_up)
    }

    fn engine_ptr(&self) -> *mut c_void {
        self.raw.map_or(std::ptr::null_mut(), |raw| raw.as_ptr().cast())
    }
}

impl Drop for NativeCamera {
    fn drop(&mut self) {
        // Released without a handle (e.g. an engine object the adapter never wrapped).
        self.shutdown();
    }
}
