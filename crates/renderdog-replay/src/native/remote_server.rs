use std::ptr::NonNull;
use std::sync::Arc;

use renderdog_replay_sys as sys;

use crate::engine::{EngineRemoteServer, EngineReplayController, RawOpenCapture};
use crate::types::{PathEntry, Progress, ReplayStatus};

use super::library::{RemoteShim, Shim};
use super::marshal::{take_json, take_string};
use super::rdctype::c_string;
use super::replay_controller::NativeController;
use super::{Loaded, progress_ptr};

/// `IRemoteServer` reached through the flat `renderdoc_remote_*` functions.
pub(crate) struct NativeRemoteServer {
    raw: Option<NonNull<sys::IRemoteServer>>,
    shim: Arc<Shim>,
    loaded: Arc<Loaded>,
}

impl NativeRemoteServer {
    pub(super) fn new(
        raw: *mut sys::IRemoteServer,
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

    fn ptr(&self) -> *mut sys::IRemoteServer {
        match self.raw {
            Some(raw) => raw.as_ptr(),
            None => unreachable!("remote server used after shutdown"),
        }
    }

    fn fns(&self) -> &RemoteShim {
        &self.shim.remote
    }
}

impl EngineRemoteServer for NativeRemoteServer {
    fn shutdown_connection(&mut self) {
        if let Some(raw) = self.raw.take() {
            unsafe { (self.fns().shutdown_connection)(raw.as_ptr()) };
        }
    }

    fn shutdown_server_and_connection(&mut self) {
        if let Some(raw) = self.raw.take() {
            unsafe { (self.fns().shutdown_server_and_connection)(raw.as_ptr()) };
        }
    }

    fn ping(&self) -> bool {
        unsafe { (self.fns().ping)(self.ptr()) }
    }

    fn local_proxies(&self) -> Vec<String> {
        unsafe {
            let doc = (self.fns().local_proxies)(self.ptr());
            take_json(self.shim.free, doc, "local_proxies")
        }
    }

    fn remote_supported_replays(&self) -> Vec<String> {
        unsafe {
            let doc = (self.fns().remote_supported_replays)(self.ptr());
            take_json(self.shim.free, doc, "remote_supported_replays")
        }
    }

    fn get_home_folder(&self) -> String {
        unsafe { take_string(self.shim.free, (self.fns().get_home_folder)(self.ptr())) }
    }

    fn list_folder(&self, path: &str) -> Vec<PathEntry> {
        let path = c_string(path);
        unsafe {
            let doc = (self.fns().list_folder)(self.ptr(), path.as_ptr());
            take_json(self.shim.free, doc, "list_folder")
        }
    }

    fn take_ownership_capture(&self, filename: &str) {
        let filename = c_string(filename);
        unsafe { (self.fns().take_ownership_capture)(self.ptr(), filename.as_ptr()) }
    }

    fn copy_capture_to_remote(&self, filename: &str, progress: Option<&Progress>) -> String {
        let filename = c_string(filename);
        unsafe {
            let path = (self.fns().copy_capture_to_remote)(
                self.ptr(),
                filename.as_ptr(),
                progress_ptr(progress),
            );
            take_string(self.shim.free, path)
        }
    }

    fn copy_capture_from_remote(
        &self,
        remote_path: &str,
        local_path: &str,
        progress: Option<&Progress>,
    ) {
        let remote_path = c_string(remote_path);
        let local_path = c_string(local_path);
        unsafe {
            (self.fns().copy_capture_from_remote)(
                self.ptr(),
                remote_path.as_ptr(),
                local_path.as_ptr(),
                progress_ptr(progress),
            )
        }
    }

    fn open_capture(
        &self,
        proxy_id: u32,
        path: &str,
        progress: Option<&Progress>,
    ) -> RawOpenCapture {
        let path = c_string(path);
        let mut controller = std::ptr::null_mut();
        let status = unsafe {
            (self.fns().open_capture)(
                self.ptr(),
                proxy_id,
                path.as_ptr(),
                progress_ptr(progress),
                &mut controller,
            )
        };
        let controller =
            NativeController::new(controller, Arc::clone(&self.shim), Arc::clone(&self.loaded))
                .map(|c| Box::new(c) as Box<dyn EngineReplayController>);
        (ReplayStatus::from_raw(status), controller)
    }

    fn close_capture(&self, controller: Box<dyn EngineReplayController>) {
        let raw = controller.engine_ptr();
        if raw.is_null() {
            tracing::warn!("controller was not opened by this engine; leaving it alone");
            return;
        }
        unsafe { (self.fns().close_capture)(self.ptr(), raw.cast()) }
    }
}

impl Drop for NativeRemoteServer {
    fn drop(&mut self) {
        self.shutdown_connection();
    }
}
