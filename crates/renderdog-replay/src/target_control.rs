use crate::api::Api;
use crate::engine::EngineTargetControl;
use crate::error::ReplayError;
use crate::handle::Handle;
use crate::types::TargetControlMessage;

/// Control channel to a running, already-injected target process.
#[derive(Debug)]
pub struct TargetControl {
    inner: Handle<dyn EngineTargetControl>,
}

impl TargetControl {
    /// Connects to the target identified by `ident` on `host`.
    ///
    /// `Ok(None)` when the engine could not open the channel.
    pub fn connect(
        api: &Api,
        host: &str,
        ident: u32,
        client_name: &str,
        force_connection: bool,
    ) -> Result<Option<Self>, ReplayError> {
        api.create_target_control(host, ident, client_name, force_connection)
    }

    pub(crate) fn from_engine(inner: Box<dyn EngineTargetControl>) -> Self {
        Self {
            inner: Handle::new("target_control", inner),
        }
    }

    pub fn connected(&self) -> bool {
        self.inner.get().connected()
    }

    pub fn get_target(&self) -> String {
        self.inner.get().get_target()
    }

    pub fn get_api(&self) -> String {
        self.inner.get().get_api()
    }

    pub fn get_pid(&self) -> u32 {
        self.inner.get().get_pid()
    }

    pub fn get_busy_client(&self) -> String {
        self.inner.get().get_busy_client()
    }

    pub fn trigger_capture(&self, num_frames: u32) {
        self.inner.get().trigger_capture(num_frames)
    }

    pub fn queue_capture(&self, frame_number: u32) {
        self.inner.get().queue_capture(frame_number)
    }

    pub fn copy_capture(&self, remote_id: u32, local_path: &str) {
        self.inner.get().copy_capture(remote_id, local_path)
    }

    pub fn delete_capture(&self, remote_id: u32) {
        self.inner.get().delete_capture(remote_id)
    }

    /// Blocks until the target sends a message or the engine times out with `Noop`.
    pub fn receive_message(&self) -> TargetControlMessage {
        self.inner.get().receive_message()
    }

    pub fn shutdown(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEngine;
    use crate::types::NewCaptureData;

    #[test]
    fn missing_target_is_none() {
        let engine = MockEngine::new();
        engine.script().refuse_target = true;
        let api = engine.api();

        let target = TargetControl::connect(&api, "localhost", 38920, "tests", true).unwrap();
        assert!(target.is_none());
        assert_eq!(
            engine.calls(),
            ["create_target_control(\"localhost\", 38920, \"tests\", true)"]
        );
    }

    #[test]
    fn capture_requests_and_messages_pass_through() {
        let engine = MockEngine::new();
        engine.script().message = TargetControlMessage::NewCapture(NewCaptureData {
            id: 4,
            timestamp: 1_700_000_000,
            thumbnail: Vec::new(),
            path: "/tmp/cap_4.rdc".into(),
            local: true,
        });
        let api = engine.api();

        let target = TargetControl::connect(&api, "localhost", 38920, "tests", false)
            .unwrap()
            .unwrap();
        target.trigger_capture(2);
        target.queue_capture(120);
        target.copy_capture(4, "/tmp/copy.rdc");
        target.delete_capture(4);
        let message = target.receive_message();

        assert!(matches!(message, TargetControlMessage::NewCapture(ref data) if data.id == 4));
        assert_eq!(
            engine.calls_for("target#1."),
            [
                "target#1.trigger_capture(2)",
                "target#1.queue_capture(120)",
                "target#1.copy_capture(4, \"/tmp/copy.rdc\")",
                "target#1.delete_capture(4)",
                "target#1.receive_message()",
            ]
        );
    }

    #[test]
    fn identity_queries_return_engine_values() {
        let engine = MockEngine::new();
        {
            let mut script = engine.script();
            script.pid = 4242;
            script.busy_client = "qrenderdoc".into();
        }
        let api = engine.api();

        let target = TargetControl::connect(&api, "localhost", 38920, "tests", false)
            .unwrap()
            .unwrap();

        assert!(target.connected());
        assert_eq!(target.get_target(), "game.exe");
        assert_eq!(target.get_api(), "Vulkan");
        assert_eq!(target.get_pid(), 4242);
        assert_eq!(target.get_busy_client(), "qrenderdoc");
        assert_eq!(
            engine.calls_for("target#1."),
            [
                "target#1.connected()",
                "target#1.get_target()",
                "target#1.get_api()",
                "target#1.get_pid()",
                "target#1.get_busy_client()",
            ]
        );
    }

    #[test]
    fn shutdown_once() {
        let engine = MockEngine::new();
        let api = engine.api();

        let target = TargetControl::connect(&api, "localhost", 1, "tests", false)
            .unwrap()
            .unwrap();
        target.shutdown();

        assert_eq!(engine.count("target#1.shutdown()"), 1);
    }
}
