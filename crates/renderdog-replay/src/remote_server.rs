use std::ops::Deref;

use crate::api::Api;
use crate::engine::EngineRemoteServer;
use crate::error::ReplayError;
use crate::replay_controller::ReplayController;
use crate::types::{PathEntry, Progress, ReplayStatus};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Release {
    Connection,
    ServerAndConnection,
}

/// Connection to a remote replay host.
///
/// Dropping the connection closes it and leaves the remote server running; use
/// [`RemoteServer::shutdown_server_and_connection`] to stop the server as well.
pub struct RemoteServer {
    inner: Option<Box<dyn EngineRemoteServer>>,
    release: Release,
}

impl RemoteServer {
    /// Passed as `proxy_id` to let the remote host pick its own replay proxy.
    pub const NO_PREFERENCE: u32 = !0u32;

    /// Connects to `host:port`. A port of `0` uses the engine's default port.
    pub fn connect(api: &Api, host: &str, port: u32) -> Result<Self, ReplayError> {
        api.create_remote_server_connection(host, port)
    }

    pub(crate) fn from_engine(inner: Box<dyn EngineRemoteServer>) -> Self {
        tracing::debug!(handle = "remote_server", "acquired");
        Self {
            inner: Some(inner),
            release: Release::Connection,
        }
    }

    fn inner(&self) -> &dyn EngineRemoteServer {
        match self.inner.as_deref() {
            Some(inner) => inner,
            None => unreachable!("remote server used after release"),
        }
    }

    /// Closes this connection only.
    pub fn shutdown_connection(self) {}

    /// Closes this connection and stops the remote server process.
    pub fn shutdown_server_and_connection(mut self) {
        self.release = Release::ServerAndConnection;
    }

    pub fn ping(&self) -> bool {
        self.inner().ping()
    }

    pub fn local_proxies(&self) -> Vec<String> {
        self.inner().local_proxies()
    }

    pub fn remote_supported_replays(&self) -> Vec<String> {
        self.inner().remote_supported_replays()
    }

    pub fn get_home_folder(&self) -> String {
        self.inner().get_home_folder()
    }

    pub fn list_folder(&self, path: &str) -> Vec<PathEntry> {
        self.inner().list_folder(path)
    }

    pub fn take_ownership_capture(&self, filename: &str) {
        self.inner().take_ownership_capture(filename)
    }

    /// Uploads a local capture; returns its path on the remote host.
    pub fn copy_capture_to_remote(&self, filename: &str, progress: Option<&Progress>) -> String {
        self.inner().copy_capture_to_remote(filename, progress)
    }

    pub fn copy_capture_from_remote(
        &self,
        remote_path: &str,
        local_path: &str,
        progress: Option<&Progress>,
    ) {
        self.inner()
            .copy_capture_from_remote(remote_path, local_path, progress)
    }

    /// Opens a capture on the remote host.
    ///
    /// The controller borrows this connection and is handed back with `CloseCapture` when it is
    /// dropped or passed to [`RemoteServer::close_capture`].
    pub fn open_capture(
        &self,
        proxy_id: u32,
        path: &str,
        progress: Option<&Progress>,
    ) -> Result<RemoteReplayController<'_>, ReplayStatus> {
        let raw = self.inner().open_capture(proxy_id, path, progress);
        let controller = ReplayController::from_open("remote_server", raw)?;
        Ok(RemoteReplayController {
            remote: self,
            controller: Some(controller),
        })
    }

    /// Ends a remote replay session. The controller goes back to the server it was opened on;
    /// its own shutdown is never called.
    pub fn close_capture(&self, controller: RemoteReplayController<'_>) {
        if !std::ptr::eq(controller.remote, self) {
            tracing::warn!(
                handle = "remote_server",
                "controller belongs to another connection; closing it there"
            );
        }
        drop(controller);
    }
}

impl Drop for RemoteServer {
    fn drop(&mut self) {
        let Some(mut inner) = self.inner.take() else {
            return;
        };
        tracing::debug!(handle = "remote_server", release = ?self.release, "shutdown");
        match self.release {
            Release::Connection => inner.shutdown_connection(),
            Release::ServerAndConnection => inner.shutdown_server_and_connection(),
        }
    }
}

impl std::fmt::Debug for RemoteServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteServer")
            .field("live", &self.inner.is_some())
            .finish()
    }
}

/// A replay session owned by a remote connection.
///
/// Derefs to [`ReplayController`] for the forwarding surface. Dropping it hands the engine
/// controller back to the connection with `CloseCapture`.
pub struct RemoteReplayController<'r> {
    remote: &'r RemoteServer,
    controller: Option<ReplayController>,
}

impl RemoteReplayController<'_> {
    /// Same as dropping the controller.
    pub fn close(self) {}
}

impl Deref for RemoteReplayController<'_> {
    type Target = ReplayController;

    fn deref(&self) -> &ReplayController {
        match &self.controller {
            Some(controller) => controller,
            None => unreachable!("remote controller used after close"),
        }
    }
}

impl Drop for RemoteReplayController<'_> {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            tracing::debug!(handle = "remote_server", "closing remote capture");
            self.remote.inner().close_capture(controller.into_engine());
        }
    }
}

impl std::fmt::Debug for RemoteReplayController<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteReplayController")
            .field("live", &self.controller.is_some())
            .finish()
    }
}
