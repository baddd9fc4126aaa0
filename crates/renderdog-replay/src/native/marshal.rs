//! Values crossing the flat shim: JSON documents and byte buffers the shim allocates, and the
//! `renderdoc_*` structs built from the Rust mirrors.

use std::ffi::{CStr, c_char};

use serde::de::DeserializeOwned;

use renderdog_replay_sys as sys;

use crate::types::{
    AlphaMapping, CompType, DebugOverlay, FileType, MeshDataStage, MeshDisplay, MeshFormat,
    PixelValue, ReplaySupport, ResourceFormat, ResourceId, SolidShade, TextureDisplay,
    TextureSave, Topology,
};

use super::library::Resolved;

pub(crate) type ShimFree = Resolved<sys::prenderdoc_shim_free>;

const SUPPORT: [ReplaySupport; 3] = [
    ReplaySupport::Unsupported,
    ReplaySupport::Supported,
    ReplaySupport::SuggestRemote,
];

const COMP_TYPES: [CompType; 10] = [
    CompType::Typeless,
    CompType::Float,
    CompType::UNorm,
    CompType::SNorm,
    CompType::UInt,
    CompType::SInt,
    CompType::UScaled,
    CompType::SScaled,
    CompType::Depth,
    CompType::Double,
];

pub(crate) fn support(raw: u32) -> ReplaySupport {
    SUPPORT.get(raw as usize).copied().unwrap_or_default()
}

fn comp_type(raw: u32) -> CompType {
    COMP_TYPES.get(raw as usize).copied().unwrap_or_default()
}

/// Parses and releases a JSON document the shim allocated.
///
/// A null or malformed document is logged and read as the type's default.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated buffer from the shim that is not used again.
pub(crate) unsafe fn take_json<T: DeserializeOwned + Default>(
    free: ShimFree,
    ptr: *mut c_char,
    call: &'static str,
) -> T {
    if ptr.is_null() {
        tracing::warn!(call, "shim returned no document");
        return T::default();
    }
    let parsed = serde_json::from_slice(unsafe { CStr::from_ptr(ptr) }.to_bytes());
    unsafe { free(ptr.cast()) };
    match parsed {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(call, %error, "malformed shim document");
            T::default()
        }
    }
}

/// Copies and releases a string the shim allocated.
///
/// # Safety
///
/// Same as [`take_json`].
pub(crate) unsafe fn take_string(free: ShimFree, ptr: *mut c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let out = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    unsafe { free(ptr.cast()) };
    out
}

/// Copies and releases a byte buffer the shim allocated.
///
/// # Safety
///
/// `data` must be null or point at `len` bytes from the shim that are not used again.
pub(crate) unsafe fn take_bytes(free: ShimFree, data: *mut u8, len: u64) -> Vec<u8> {
    if data.is_null() {
        return Vec::new();
    }
    let out = unsafe { std::slice::from_raw_parts(data, len as usize) }.to_vec();
    unsafe { free(data.cast()) };
    out
}

impl From<sys::renderdoc_pixel_value> for PixelValue {
    fn from(v: sys::renderdoc_pixel_value) -> Self {
        PixelValue { value_u: v.value_u }
    }
}

pub(crate) fn texture_display(d: &TextureDisplay) -> sys::renderdoc_texture_display {
    sys::renderdoc_texture_display {
        resource_id: d.resource_id.0,
        range_min: d.range_min,
        range_max: d.range_max,
        scale: d.scale,
        red: d.red,
        green: d.green,
        blue: d.blue,
        alpha: d.alpha,
        flip_y: d.flip_y,
        hdr_multiplier: d.hdr_multiplier,
        linear_display_as_gamma: d.linear_display_as_gamma,
        custom_shader_id: d.custom_shader_id.0,
        mip: d.mip,
        slice_face: d.slice_face,
        sample_idx: d.sample_idx,
        raw_output: d.raw_output,
        x_offset: d.x_offset,
        y_offset: d.y_offset,
        light_background_color: d.light_background_color.into(),
        dark_background_color: d.dark_background_color.into(),
        overlay: d.overlay as u32,
        type_hint: d.type_hint as u32,
    }
}

pub(crate) fn texture_save(s: &TextureSave) -> sys::renderdoc_texture_save {
    sys::renderdoc_texture_save {
        resource_id: s.resource_id.0,
        type_hint: s.type_hint as u32,
        dest_type: s.dest_type as u32,
        mip: s.mip,
        slice_index: s.slice_index,
        sample_index: s.sample_index,
        channel_extract: s.channel_extract,
        black_point: s.comp.black_point,
        white_point: s.comp.white_point,
        alpha: s.alpha as u32,
        alpha_col: s.alpha_col.into(),
        jpeg_quality: s.jpeg_quality,
    }
}

pub(crate) fn mesh_format(f: &MeshFormat) -> sys::renderdoc_mesh_format {
    sys::renderdoc_mesh_format {
        index_resource_id: f.index_resource_id.0,
        index_byte_offset: f.index_byte_offset,
        index_byte_stride: f.index_byte_stride,
        base_vertex: f.base_vertex,
        vertex_resource_id: f.vertex_resource_id.0,
        vertex_byte_offset: f.vertex_byte_offset,
        vertex_byte_stride: f.vertex_byte_stride,
        format: sys::renderdoc_resource_format {
            comp_type: f.format.comp_type as u32,
            comp_count: f.format.comp_count,
            comp_byte_width: f.format.comp_byte_width,
            srgb_corrected: f.format.srgb_corrected,
            bgra_order: f.format.bgra_order,
            special: f.format.special,
        },
        mesh_color: f.mesh_color.into(),
        show_alpha: f.show_alpha,
        topology: f.topology.to_raw(),
        num_indices: f.num_indices,
        unproject: f.unproject,
        near_plane: f.near_plane,
        far_plane: f.far_plane,
    }
}

pub(crate) fn mesh_format_from(f: &sys::renderdoc_mesh_format) -> MeshFormat {
    MeshFormat {
        index_resource_id: ResourceId(f.index_resource_id),
        index_byte_offset: f.index_byte_offset,
        index_byte_stride: f.index_byte_stride,
        base_vertex: f.base_vertex,
        vertex_resource_id: ResourceId(f.vertex_resource_id),
        vertex_byte_offset: f.vertex_byte_offset,
        vertex_byte_stride: f.vertex_byte_stride,
        format: ResourceFormat {
            comp_type: comp_type(f.format.comp_type),
            comp_count: f.format.comp_count,
            comp_byte_width: f.format.comp_byte_width,
            srgb_corrected: f.format.srgb_corrected,
            bgra_order: f.format.bgra_order,
            special: f.format.special,
        },
        mesh_color: f.mesh_color.into(),
        show_alpha: f.show_alpha,
        topology: Topology::from_raw(f.topology),
        num_indices: f.num_indices,
        unproject: f.unproject,
        near_plane: f.near_plane,
        far_plane: f.far_plane,
    }
}

pub(crate) fn mesh_display(d: &MeshDisplay) -> sys::renderdoc_mesh_display {
    sys::renderdoc_mesh_display {
        mesh_type: d.mesh_type as u32,
        ortho: d.ortho,
        fov: d.fov,
        aspect: d.aspect,
        show_prev_instances: d.show_prev_instances,
        show_all_instances: d.show_all_instances,
        show_whole_pass: d.show_whole_pass,
        cur_instance: d.cur_instance,
        highlight_vert: d.highlight_vert,
        position: mesh_format(&d.position),
        second: mesh_format(&d.second),
        min_bounds: d.min_bounds.into(),
        max_bounds: d.max_bounds.into(),
        show_bbox: d.show_bbox,
        solid_shade_mode: d.solid_shade_mode as u32,
        wireframe_draw: d.wireframe_draw,
    }
}

/// Enumerations cross the shim as their declaration index.
const _: () = {
    assert!(FileType::Raw as u32 == 7);
    assert!(AlphaMapping::Preserve as u32 == 3);
    assert!(DebugOverlay::TriangleSizeDraw as u32 == 14);
    assert!(MeshDataStage::GsOut as u32 == 3);
    assert!(SolidShade::Secondary as u32 == 3);
};
