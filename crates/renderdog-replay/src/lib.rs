//! Handle-based wrapper over RenderDoc's replay interfaces.
//!
//! Every engine object (camera, capture file, replay controller, replay output, remote server
//! connection, target control channel) is owned by exactly one adapter that releases it once.
//! Calls are forwarded unchanged to an [`Engine`]:
//! - [`NativeEngine`] loads `renderdoc.dll`/`librenderdoc.so` and reaches its C-linkage exports,
//! - hosts that bridge the C++ interfaces supply their own [`Engine`] implementation.
//!
//! The [`ffi`] module re-exports the wrapper with C linkage.

mod api;
mod camera;
mod capture_file;
pub mod engine;
mod error;
pub mod ffi;
mod handle;
pub mod native;
mod pipeline;
mod remote_server;
mod replay_controller;
mod replay_output;
mod settings;
mod target_control;
mod types;

#[cfg(test)]
mod mock;

pub use api::Api;
pub use camera::Camera;
pub use capture_file::CaptureFile;
pub use engine::Engine;
pub use error::ReplayError;
pub use native::{NativeConfig, NativeEngine};
pub use pipeline::*;
pub use remote_server::{RemoteReplayController, RemoteServer};
pub use replay_controller::ReplayController;
pub use replay_output::ReplayOutput;
pub use settings::*;
pub use target_control::TargetControl;
pub use types::*;
