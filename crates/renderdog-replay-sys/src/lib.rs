//! Low-level C-ABI declarations for RenderDoc's replay library (`renderdoc_replay.h`).
//!
//! Two surfaces are described here, both from `include/renderdog_replay.h`:
//!
//! - the `RENDERDOC_*` functions exported by `renderdoc.dll` / `librenderdoc.so` that have C
//!   linkage, with the `rdctype` array/string layout and the structs they take;
//! - the flat `renderdoc_*` shim over the C++ replay interfaces (`ICamera`, `ICaptureFile`,
//!   `IReplayController`, `IReplayOutput`, `IRemoteServer`, `ITargetControl`). With the `shim`
//!   feature `build.rs` compiles `shim/replay_shim.cpp` into this crate; otherwise the shim is
//!   looked up at runtime in whichever library provides it.
//!
//! Every function also has a pointer type (`pRENDERDOC_<Name>`, `p<shim name>`) so it can be
//! resolved from a library loaded at runtime.
//!
//! This crate ships with pregenerated bindings for environments where `bindgen` (libclang) is
//! not available. At build time, `build.rs` writes `OUT_DIR/bindings.rs` which is then included
//! by this crate.
//!
//! Maintainers can regenerate bindings with:
//!
//! - `RENDERDOG_REPLAY_SYS_REGEN_BINDINGS=1 cargo build -p renderdog-replay-sys --features bindgen`
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(clippy::all)]

use std::ffi::c_char;

/// `rdctype::array<T>`: a length-prefixed buffer allocated with `RENDERDOC_AllocArrayMem`.
///
/// Arrays returned by the engine must be released with `RENDERDOC_FreeArrayMem`.
#[repr(C)]
#[derive(Debug)]
pub struct rdctype_array<T> {
    pub elems: *mut T,
    pub count: i32,
}

impl<T> rdctype_array<T> {
    pub const fn empty() -> Self {
        Self {
            elems: std::ptr::null_mut(),
            count: 0,
        }
    }
}

/// `rdctype::str`, which is an `rdctype::array<char>` whose count excludes the terminator.
pub type rdctype_str = rdctype_array<c_char>;
pub type rdctype_array_rdctype_str = rdctype_array<rdctype_str>;
pub type rdctype_array_EnvironmentModification = rdctype_array<EnvironmentModification>;

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
