use std::ptr::NonNull;
use std::sync::Arc;

use renderdog_replay_sys as sys;

use crate::engine::{EngineCaptureFile, EngineObject, EngineReplayController, RawOpenCapture};
use crate::types::{FileType, Progress, ReplayStatus, ReplaySupport};

use super::library::{CaptureFileShim, Shim};
use super::marshal::{support, take_bytes};
use super::rdctype::copy_c_str;
use super::replay_controller::NativeController;
use super::{Loaded, progress_ptr};

pub(crate) struct NativeCaptureFile {
    raw: Option<NonNull<sys::ICaptureFile>>,
    shim: Arc<Shim>,
    loaded: Arc<Loaded>,
}

impl NativeCaptureFile {
    pub(super) fn new(
        raw: *mut sys::ICaptureFile,
        shim: Arc<Shim>,
        loaded: Arc<Loaded>,
    ) -> Option<Self> {
        let raw = NonNull::new(raw)?;
        Some(Self {
            raw: Some(raw),
            shim,
            loaded,
        })
    }

    fn ptr(&self) -> *mut sys::ICaptureFile {
        match self.raw {
            Some(raw) => raw.as_ptr(),
            None => unreachable!("capture file used after shutdown"),
        }
    }

    fn fns(&self) -> &CaptureFileShim {
        &self.shim.capture_file
    }
}

impl EngineObject for NativeCaptureFile {
    fn shutdown(&mut self) {
        if let Some(raw) = self.raw.take() {
            unsafe { (self.fns().shutdown)(raw.as_ptr()) };
        }
    }
}

impl EngineCaptureFile for NativeCaptureFile {
    fn open_status(&self) -> ReplayStatus {
        ReplayStatus::from_raw(unsafe { (self.fns().open_status)(self.ptr()) })
    }

    fn filename(&self) -> String {
        unsafe { copy_c_str((self.fns().filename)(self.ptr())) }
    }

    fn local_replay_support(&self) -> ReplaySupport {
        support(unsafe { (self.fns().local_replay_support)(self.ptr()) })
    }

    fn driver_name(&self) -> String {
        unsafe { copy_c_str((self.fns().driver_name)(self.ptr())) }
    }

    fn recorded_machine_ident(&self) -> String {
        unsafe { copy_c_str((self.fns().recorded_machine_ident)(self.ptr())) }
    }

    fn open_capture(&self, progress: Option<&Progress>) -> RawOpenCapture {
        let mut controller = std::ptr::null_mut();
        let status = unsafe {
            (self.fns().open_capture)(self.ptr(), progress_ptr(progress), &mut controller)
        };
        let controller =
            NativeController::new(controller, Arc::clone(&self.shim), Arc::clone(&self.loaded))
                .map(|c| Box::new(c) as Box<dyn EngineReplayController>);
        (ReplayStatus::from_raw(status), controller)
    }

    fn get_thumbnail(&self, file_type: FileType, max_size: u32) -> Vec<u8> {
        let mut data = std::ptr::null_mut();
        let mut len = 0;
        unsafe {
            (self.fns().get_thumbnail)(
                self.ptr(),
                file_type as u32,
                max_size,
                &mut data,
                &mut len,
            );
            take_bytes(self.shim.free, data, len)
        }
    }
}

impl Drop for NativeCaptureFile {
    fn drop(&mut self) {
        self.shutdown();
    }
}
