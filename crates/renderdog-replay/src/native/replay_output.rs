use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

use renderdog_replay_sys as sys;

use crate::engine::{EngineCamera, EngineReplayOutput};
use crate::types::{
    CompType, MeshDisplay, PixelValue, ResourceId, TextureDisplay, WindowData, WindowingSystem,
};

use super::Loaded;
use super::library::{OutputShim, Shim};
use super::marshal::{mesh_display, take_json, texture_display};

/// `IReplayOutput` reached through the flat `renderdoc_output_*` functions.
///
/// Has no release of its own: the controller that created it shuts it down.
pub(crate) struct NativeOutput {
    raw: NonNull<sys::IReplayOutput>,
    shim: Arc<Shim>,
    _loaded: Arc<Loaded>,
}

impl NativeOutput {
    pub(super) fn new(
        raw: *mut sys::IReplayOutput,
        shim: Arc<Shim>,
        loaded: Arc<Loaded>,
    ) -> Option<Self> {
        Some(Self {
            raw: NonNull::new(raw)?,
            shim,
            _loaded: loaded,
        })
    }

    fn ptr(&self) -> *mut sys::IReplayOutput {
        self.raw.as_ptr()
    }

    fn fns(&self) -> &OutputShim {
        &self.shim.output
    }
}

impl EngineReplayOutput for NativeOutput {
    fn set_texture_display(&self, display: &TextureDisplay) {
        let display = texture_display(display);
        unsafe { (self.fns().set_texture_display)(self.ptr(), &display) }
    }

    fn set_mesh_display(&self, display: &MeshDisplay, camera: Option<&dyn EngineCamera>) {
        let display = mesh_display(display);
        let camera = camera.map_or(std::ptr::null_mut(), |c| c.engine_ptr());
        unsafe { (self.fns().set_mesh_display)(self.ptr(), &display, camera.cast()) }
    }

    fn clear_thumbnails(&self) {
        unsafe { (self.fns().clear_thumbnails)(self.ptr()) }
    }

    fn add_thumbnail(
        &self,
        system: WindowingSystem,
        data: WindowData,
        texture: ResourceId,
        type_hint: CompType,
    ) -> bool {
        unsafe {
            (self.fns().add_thumbnail)(
                self.ptr(),
                system as u32,
                data,
                texture.0,
                type_hint as u32,
            )
        }
    }

    fn display(&self) {
        unsafe { (self.fns().display)(self.ptr()) }
    }

    fn set_pixel_context(&self, system: WindowingSystem, data: WindowData) -> bool {
        unsafe { (self.fns().set_pixel_context)(self.ptr(), system as u32, data) }
    }

    fn set_pixel_context_location(&self, x: u32, y: u32) {
        unsafe { (self.fns().set_pixel_context_location)(self.ptr(), x, y) }
    }

    fn disable_pixel_context(&self) {
        unsafe { (self.fns().disable_pixel_context)(self.ptr()) }
    }

    fn get_min_max(&self) -> (PixelValue, PixelValue) {
        let mut min = sys::renderdoc_pixel_value::default();
        let mut max = sys::renderdoc_pixel_value::default();
        unsafe { (self.fns().get_min_max)(self.ptr(), &mut min, &mut max) };
        (min.into(), max.into())
    }

    fn get_histogram(&self, min_val: f32, max_val: f32, channels: [bool; 4]) -> Vec<u32> {
        let doc = unsafe {
            (self.fns().get_histogram)(self.ptr(), min_val, max_val, channels.as_ptr())
        };
        unsafe { take_json(self.shim.free, doc, "get_histogram") }
    }

    fn get_custom_shader_tex_id(&self) -> ResourceId {
        ResourceId(unsafe { (self.fns().get_custom_shader_tex_id)(self.ptr()) })
    }

    fn get_debug_overlay_tex_id(&self) -> ResourceId {
        ResourceId(unsafe { (self.fns().get_debug_overlay_tex_id)(self.ptr()) })
    }

    fn pick_pixel(
        &self,
        texture: ResourceId,
        custom_shader: bool,
        x: u32,
        y: u32,
        slice_face: u32,
        mip: u32,
        sample: u32,
    ) -> PixelValue {
        let mut out = sys::renderdoc_pixel_value::default();
        unsafe {
            (self.fns().pick_pixel)(
                self.ptr(),
                texture.0,
                custom_shader,
                x,
                y,
                slice_face,
                mip,
                sample,
                &mut out,
            )
        };
        out.into()
    }

    fn pick_vertex(&self, event_id: u32, x: u32, y: u32) -> (u32, u32) {
        let mut vertex = 0;
        let mut instance = 0;
        unsafe {
            (self.fns().pick_vertex)(self.ptr(), event_id, x, y, &mut vertex, &mut instance)
        };
        (vertex, instance)
    }

    fn engine_ptr(&self) -> *mut c_void {
        self.raw.as_ptr().cast()
    }
}
