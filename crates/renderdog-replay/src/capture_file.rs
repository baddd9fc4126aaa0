use crate::api::Api;
use crate::engine::EngineCaptureFile;
use crate::error::ReplayError;
use crate::handle::Handle;
use crate::replay_controller::ReplayController;
use crate::types::{FileType, Progress, ReplayStatus, ReplaySupport};

/// A capture on disk. Always constructed, even when the file cannot be read: check
/// [`CaptureFile::open_status`] before opening it for replay.
#[derive(Debug)]
pub struct CaptureFile {
    inner: Handle<dyn EngineCaptureFile>,
}

impl CaptureFile {
    pub fn open(api: &Api, path: &str) -> Result<Self, ReplayError> {
        api.open_capture_file(path)
    }

    pub(crate) fn from_engine(inner: Box<dyn EngineCaptureFile>) -> Self {
        Self {
            inner: Handle::new("capture_file", inner),
        }
    }

    pub fn open_status(&self) -> ReplayStatus {
        self.inner.get().open_status()
    }

    pub fn filename(&self) -> String {
        self.inner.get().filename()
    }

    pub fn local_replay_support(&self) -> ReplaySupport {
        self.inner.get().local_replay_support()
    }

    pub fn driver_name(&self) -> String {
        self.inner.get().driver_name()
    }

    pub fn recorded_machine_ident(&self) -> String {
        self.inner.get().recorded_machine_ident()
    }

    /// Opens the capture for local replay. The returned controller is owned by the caller.
    pub fn open_capture(
        &self,
        progress: Option<&Progress>,
    ) -> Result<ReplayController, ReplayStatus> {
        ReplayController::from_open("capture_file", self.inner.get().open_capture(progress))
    }

    pub fn get_thumbnail(&self, file_type: FileType, max_size: u32) -> Vec<u8> {
        self.inner.get().get_thumbnail(file_type, max_size)
    }

    pub fn shutdown(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEngine;

    #[test]
    fn metadata_queries_return_engine_values() {
        let engine = MockEngine::new();
        {
            let mut script = engine.script();
            script.open_status = ReplayStatus::FileIoFailed;
            script.driver_name = "Vulkan".into();
            script.machine_ident = "Windows 64-bit".into();
            script.thumbnail = vec![0x89, b'P', b'N', b'G'];
        }
        let api = engine.api();

        let file = CaptureFile::open(&api, "/tmp/frame.rdc").unwrap();
        assert_eq!(file.open_status(), ReplayStatus::FileIoFailed);
        assert_eq!(file.filename(), "/tmp/frame.rdc");
        assert_eq!(file.driver_name(), "Vulkan");
        assert_eq!(file.local_replay_support(), ReplaySupport::Supported);
        assert_eq!(file.recorded_machine_ident(), "Windows 64-bit");
        assert_eq!(
            file.get_thumbnail(FileType::Png, 256),
            vec![0x89, b'P', b'N', b'G']
        );

        assert_eq!(
            engine.calls(),
            [
                "open_capture_file(\"/tmp/frame.rdc\")",
                "capture_file#1.open_status()",
                "capture_file#1.filename()",
                "capture_file#1.driver_name()",
                "capture_file#1.local_replay_support()",
                "capture_file#1.recorded_machine_ident()",
                "capture_file#1.get_thumbnail(Png, 256)",
            ]
        );
    }

    #[test]
    fn failed_open_never_wraps_a_controller() {
        let engine = MockEngine::new();
        engine.script().open_capture = ReplayStatus::FileCorrupted;
        let api = engine.api();

        let file = CaptureFile::open(&api, "broken.rdc").unwrap();
        let result = file.open_capture(None);

        assert_eq!(result.err(), Some(ReplayStatus::FileCorrupted));
        assert_eq!(engine.count_prefix("controller#"), 0);
    }

    #[test]
    fn failed_status_discards_a_stray_engine_handle() {
        let engine = MockEngine::new();
        {
            let mut script = engine.script();
            script.open_capture = ReplayStatus::ApiInitFailed;
            script.open_capture_with_handle = true;
        }
        let api = engine.api();

        let file = CaptureFile::open(&api, "stray.rdc").unwrap();
        assert_eq!(file.open_capture(None).err(), Some(ReplayStatus::ApiInitFailed));

        // Dropped unwrapped: no adapter ever shuts it down.
        assert_eq!(engine.count("controller#1.shutdown()"), 0);
        assert_eq!(engine.dropped("controller#1"), 1);
    }

    #[test]
    fn successful_open_wraps_the_engine_controller() {
        let engine = MockEngine::new();
        let api = engine.api();
        let progress = Progress::new();

        let file = CaptureFile::open(&api, "ok.rdc").unwrap();
        let controller = file.open_capture(Some(&progress)).unwrap();
        controller.set_frame_event(42, true);

        assert_eq!(progress.get(), 1.0);
        assert_eq!(
            engine.calls()[1..],
            [
                "capture_file#1.open_capture(Some(0.0))",
                "controller#1.set_frame_event(42, true)",
            ]
        );

        controller.shutdown();
        assert_eq!(engine.count("controller#1.shutdown()"), 1);
    }

    #[test]
    fn controller_outlives_its_capture_file() {
        let engine = MockEngine::new();
        let api = engine.api();

        let file = CaptureFile::open(&api, "ok.rdc").unwrap();
        let controller = file.open_capture(None).unwrap();
        file.shutdown();
        controller.file_changed();

        assert_eq!(engine.count("capture_file#1.shutdown()"), 1);
        assert_eq!(engine.count("controller#1.file_changed()"), 1);
    }
}
