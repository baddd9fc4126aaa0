use std::ffi::c_void;
use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use renderdog_replay_sys as sys;

/// Opaque platform window data handed through to the engine (`HWND`, `XlibWindowData*`, ...).
pub type WindowData = *mut c_void;

/// Globally unique id of an engine resource.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct ResourceId(pub u64);

impl ResourceId {
    pub const NULL: ResourceId = ResourceId(0);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl FloatVector {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl From<sys::renderdoc_float4> for FloatVector {
    fn from(v: sys::renderdoc_float4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<FloatVector> for sys::renderdoc_float4 {
    fn from(v: FloatVector) -> Self {
        sys::renderdoc_float4 {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CameraType {
    #[default]
    Arcball = sys::CameraType_Arcball,
    FpsLook = sys::CameraType_FPSLook,
}

impl CameraType {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            sys::CameraType_Arcball => Some(Self::Arcball),
            sys::CameraType_FPSLook => Some(Self::FpsLook),
            _ => None,
        }
    }
}

/// Status reported by the engine for open/connect operations.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, Eq, Error, Hash, PartialEq, Serialize, Deserialize)]
pub enum ReplayStatus {
    #[default]
    #[error("succeeded")]
    Succeeded = sys::ReplayStatus_Succeeded,
    #[error("unknown error")]
    UnknownError = sys::ReplayStatus_UnknownError,
    #[error("internal error")]
    InternalError = sys::ReplayStatus_InternalError,
    #[error("file not found")]
    FileNotFound = sys::ReplayStatus_FileNotFound,
    #[error("injection failed")]
    InjectionFailed = sys::ReplayStatus_InjectionFailed,
    #[error("incompatible process")]
    IncompatibleProcess = sys::ReplayStatus_IncompatibleProcess,
    #[error("network I/O failed")]
    NetworkIoFailed = sys::ReplayStatus_NetworkIOFailed,
    #[error("remote server is busy")]
    NetworkRemoteBusy = sys::ReplayStatus_NetworkRemoteBusy,
    #[error("remote server version mismatch")]
    NetworkVersionMismatch = sys::ReplayStatus_NetworkVersionMismatch,
    #[error("file I/O failed")]
    FileIoFailed = sys::ReplayStatus_FileIOFailed,
    #[error("capture file version is incompatible")]
    FileIncompatibleVersion = sys::ReplayStatus_FileIncompatibleVersion,
    #[error("capture file is corrupted")]
    FileCorrupted = sys::ReplayStatus_FileCorrupted,
    #[error("image format is unsupported")]
    ImageUnsupported = sys::ReplayStatus_ImageUnsupported,
    #[error("graphics API is unsupported")]
    ApiUnsupported = sys::ReplayStatus_APIUnsupported,
    #[error("graphics API failed to initialise")]
    ApiInitFailed = sys::ReplayStatus_APIInitFailed,
    #[error("graphics API version is incompatible")]
    ApiIncompatibleVersion = sys::ReplayStatus_APIIncompatibleVersion,
    #[error("hardware does not support the graphics API")]
    ApiHardwareUnsupported = sys::ReplayStatus_APIHardwareUnsupported,
}

impl ReplayStatus {
    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }

    pub fn to_raw(self) -> sys::ReplayStatus {
        self as sys::ReplayStatus
    }

    /// Values past the engine's known statuses read as `UnknownError`.
    pub fn from_raw(raw: sys::ReplayStatus) -> Self {
        match raw {
            sys::ReplayStatus_Succeeded => Self::Succeeded,
            sys::ReplayStatus_InternalError => Self::InternalError,
            sys::ReplayStatus_FileNotFound => Self::FileNotFound,
            sys::ReplayStatus_InjectionFailed => Self::InjectionFailed,
            sys::ReplayStatus_IncompatibleProcess => Self::IncompatibleProcess,
            sys::ReplayStatus_NetworkIOFailed => Self::NetworkIoFailed,
            sys::ReplayStatus_NetworkRemoteBusy => Self::NetworkRemoteBusy,
            sys::ReplayStatus_NetworkVersionMismatch => Self::NetworkVersionMismatch,
            sys::ReplayStatus_FileIOFailed => Self::FileIoFailed,
            sys::ReplayStatus_FileIncompatibleVersion => Self::FileIncompatibleVersion,
            sys::ReplayStatus_FileCorrupted => Self::FileCorrupted,
            sys::ReplayStatus_ImageUnsupported => Self::ImageUnsupported,
            sys::ReplayStatus_APIUnsupported => Self::ApiUnsupported,
            sys::ReplayStatus_APIInitFailed => Self::ApiInitFailed,
            sys::ReplayStatus_APIIncompatibleVersion => Self::ApiIncompatibleVersion,
            sys::ReplayStatus_APIHardwareUnsupported => Self::ApiHardwareUnsupported,
            _ => Self::UnknownError,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ReplaySupport {
    #[default]
    Unsupported,
    Supported,
    SuggestRemote,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FileType {
    #[default]
    Dds,
    Png,
    Jpg,
    Bmp,
    Tga,
    Hdr,
    Exr,
    Raw,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum WindowingSystem {
    #[default]
    Unknown,
    Win32,
    Xlib,
    Xcb,
    Android,
}

impl WindowingSystem {
    /// Engine numbering: `Unknown` = 0 through `Android` = 4.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            1 => Self::Win32,
            2 => Self::Xlib,
            3 => Self::Xcb,
            4 => Self::Android,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ReplayOutputType {
    #[default]
    Headless,
    Texture,
    Mesh,
}

impl ReplayOutputType {
    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Headless,
            1 => Self::Texture,
            2 => Self::Mesh,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ShaderStage {
    #[default]
    Vertex,
    Hull,
    Domain,
    Geometry,
    Pixel,
    Compute,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CompType {
    #[default]
    Typeless,
    Float,
    UNorm,
    SNorm,
    UInt,
    SInt,
    UScaled,
    SScaled,
    Depth,
    Double,
}

/// Primitive topology. Patch lists carry their control point count (1..=32).
///
/// Engine values without a named variant are kept in [`Topology::Raw`] and forwarded as-is.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Topology {
    #[default]
    Unknown,
    PointList,
    LineList,
    LineStrip,
    LineLoop,
    TriangleList,
    TriangleStrip,
    TriangleFan,
    LineListAdj,
    LineStripAdj,
    TriangleListAdj,
    TriangleStripAdj,
    PatchList(u8),
    Raw(u32),
}

impl Topology {
    pub fn to_raw(self) -> sys::Topology {
        match self {
            Topology::Unknown => sys::Topology_Unknown,
            Topology::PointList => sys::Topology_PointList,
            Topology::LineList => sys::Topology_LineList,
            Topology::LineStrip => sys::Topology_LineStrip,
            Topology::LineLoop => sys::Topology_LineLoop,
            Topology::TriangleList => sys::Topology_TriangleList,
            Topology::TriangleStrip => sys::Topology_TriangleStrip,
            Topology::TriangleFan => sys::Topology_TriangleFan,
            Topology::LineListAdj => sys::Topology_LineList_Adj,
            Topology::LineStripAdj => sys::Topology_LineStrip_Adj,
            Topology::TriangleListAdj => sys::Topology_TriangleList_Adj,
            Topology::TriangleStripAdj => sys::Topology_TriangleStrip_Adj,
            // Past 32 control points this continues into the engine's unnamed values.
            Topology::PatchList(cps @ 1..) => sys::Topology_PatchList_1CPs + u32::from(cps) - 1,
            // No engine value describes a patch list without control points.
            Topology::PatchList(0) => sys::Topology_Unknown,
            Topology::Raw(raw) => raw,
        }
    }

    /// Unrecognised values are kept as [`Topology::Raw`].
    pub fn from_raw(raw: sys::Topology) -> Self {
        match raw {
            sys::Topology_PointList => Topology::PointList,
            sys::Topology_LineList => Topology::LineList,
            sys::Topology_LineStrip => Topology::LineStrip,
            sys::Topology_LineLoop => Topology::LineLoop,
            sys::Topology_TriangleList => Topology::TriangleList,
            sys::Topology_TriangleStrip => Topology::TriangleStrip,
            sys::Topology_TriangleFan => Topology::TriangleFan,
            sys::Topology_LineList_Adj => Topology::LineListAdj,
            sys::Topology_LineStrip_Adj => Topology::LineStripAdj,
            sys::Topology_TriangleList_Adj => Topology::TriangleListAdj,
            sys::Topology_TriangleStrip_Adj => Topology::TriangleStripAdj,
            raw @ sys::Topology_PatchList_1CPs..=sys::Topology_PatchList_32CPs => {
                Topology::PatchList((raw - sys::Topology_PatchList_1CPs + 1) as u8)
            }
            sys::Topology_Unknown => Topology::Unknown,
            raw => Topology::Raw(raw),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GraphicsApi {
    #[default]
    D3D11,
    D3D12,
    OpenGL,
    Vulkan,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProperties {
    pub pipeline_type: GraphicsApi,
    pub local_renderer: GraphicsApi,
    pub degraded: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum LogType {
    #[default]
    Debug,
    Comment,
    Warning,
    Error,
    Fatal,
}

impl LogType {
    pub fn to_raw(self) -> sys::LogType {
        match self {
            LogType::Debug => sys::LogType_Debug,
            LogType::Comment => sys::LogType_Comment,
            LogType::Warning => sys::LogType_Warning,
            LogType::Error => sys::LogType_Error,
            LogType::Fatal => sys::LogType_Fatal,
        }
    }
}

// ---------------------------------------------------------------------------
// Frame / drawcalls
// ---------------------------------------------------------------------------

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
    pub struct DrawFlags: u32 {
        const CLEAR = 0x0001;
        const DRAWCALL = 0x0002;
        const DISPATCH = 0x0004;
        const CMD_LIST = 0x0008;
        const SET_MARKER = 0x0010;
        const PUSH_MARKER = 0x0020;
        const POP_MARKER = 0x0040;
        const PRESENT = 0x0080;
        const MULTI_DRAW = 0x0100;
        const COPY = 0x0200;
        const RESOLVE = 0x0400;
        const GEN_MIPS = 0x0800;
        const PASS_BOUNDARY = 0x1000;
        const INDEXED = 0x10000;
        const INSTANCED = 0x20000;
        const AUTO = 0x40000;
        const INDIRECT = 0x80000;
        const CLEAR_COLOR = 0x100000;
        const CLEAR_DEPTH_STENCIL = 0x200000;
        const BEGIN_PASS = 0x400000;
        const END_PASS = 0x800000;
        const API_CALLS = 0x1000000;
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MessageCategory {
    #[default]
    ApplicationDefined,
    Miscellaneous,
    Initialization,
    Cleanup,
    Compilation,
    StateCreation,
    StateSetting,
    StateGetting,
    ResourceManipulation,
    Execution,
    Shaders,
    Deprecated,
    Undefined,
    Portability,
    Performance,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MessageSeverity {
    #[default]
    High,
    Medium,
    Low,
    Info,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MessageSource {
    #[default]
    Api,
    RedundantApiUse,
    IncorrectApiUse,
    GeneralPerformance,
    GcnPerformance,
    RuntimeWarning,
    UnsupportedConfiguration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugMessage {
    pub event_id: u32,
    pub category: MessageCategory,
    pub severity: MessageSeverity,
    pub source: MessageSource,
    pub message_id: u32,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameDescription {
    pub frame_number: u32,
    pub file_offset: u64,
    pub uncompressed_file_size: u64,
    pub compressed_file_size: u64,
    pub persistent_size: u64,
    pub init_data_size: u64,
    pub capture_time: u64,
    pub debug_messages: Vec<DebugMessage>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawcallDescription {
    pub event_id: u32,
    pub drawcall_id: u32,
    pub name: String,
    pub flags: DrawFlags,
    pub num_indices: u32,
    pub num_instances: u32,
    pub base_vertex: i32,
    pub index_offset: u32,
    pub vertex_offset: u32,
    pub instance_offset: u32,
    pub dispatch_dimension: [u32; 3],
    pub dispatch_thread_dimension: [u32; 3],
    pub topology: Topology,
    pub outputs: Vec<ResourceId>,
    pub depth_out: ResourceId,
    pub children: Vec<DrawcallDescription>,
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// Hardware/API counter identifier. Values outside the named constants are vendor ranges.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct GpuCounter(pub u32);

impl GpuCounter {
    pub const EVENT_GPU_DURATION: GpuCounter = GpuCounter(1);
    pub const INPUT_VERTICES_READ: GpuCounter = GpuCounter(2);
    pub const IA_PRIMITIVES: GpuCounter = GpuCounter(3);
    pub const GS_PRIMITIVES: GpuCounter = GpuCounter(4);
    pub const RASTERIZER_INVOCATIONS: GpuCounter = GpuCounter(5);
    pub const RASTERIZED_PRIMITIVES: GpuCounter = GpuCounter(6);
    pub const SAMPLES_WRITTEN: GpuCounter = GpuCounter(7);
    pub const VS_INVOCATIONS: GpuCounter = GpuCounter(8);
    pub const HS_INVOCATIONS: GpuCounter = GpuCounter(9);
    pub const DS_INVOCATIONS: GpuCounter = GpuCounter(10);
    pub const GS_INVOCATIONS: GpuCounter = GpuCounter(11);
    pub const PS_INVOCATIONS: GpuCounter = GpuCounter(12);
    pub const CS_INVOCATIONS: GpuCounter = GpuCounter(13);
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CounterValue {
    F32(f32),
    F64(f64),
    U32(u32),
    U64(u64),
}

impl Default for CounterValue {
    fn default() -> Self {
        CounterValue::U64(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterResult {
    pub event_id: u32,
    pub counter: GpuCounter,
    pub value: CounterValue,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CounterUnit {
    #[default]
    Absolute,
    Seconds,
    Percentage,
    Ratio,
    Bytes,
    Cycles,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDescription {
    pub counter: GpuCounter,
    pub name: String,
    pub category: String,
    pub description: String,
    pub result_type: CompType,
    pub result_byte_width: u32,
    pub unit: CounterUnit,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ResourceFormat {
    pub comp_type: CompType,
    pub comp_count: u8,
    pub comp_byte_width: u8,
    pub srgb_corrected: bool,
    pub bgra_order: bool,
    pub special: bool,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
    pub struct TextureCategory: u32 {
        const SHADER_READ = 0x1;
        const COLOR_TARGET = 0x2;
        const DEPTH_TARGET = 0x4;
        const SHADER_READ_WRITE = 0x8;
        const SWAP_BUFFER = 0x10;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
    pub struct BufferCategory: u32 {
        const VERTEX = 0x1;
        const INDEX = 0x2;
        const CONSTANTS = 0x4;
        const READ_WRITE = 0x8;
        const INDIRECT = 0x10;
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TextureDim {
    #[default]
    Unknown,
    Buffer,
    Texture1D,
    Texture1DArray,
    Texture2D,
    TextureRect,
    Texture2DArray,
    Texture2DMs,
    Texture2DMsArray,
    Texture3D,
    TextureCube,
    TextureCubeArray,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureDescription {
    pub name: String,
    pub resource_id: ResourceId,
    pub custom_name: bool,
    pub format: ResourceFormat,
    pub dimension: TextureDim,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mips: u32,
    pub array_size: u32,
    pub ms_samp: u32,
    pub ms_qual: u32,
    pub creation_flags: TextureCategory,
    pub cubemap: bool,
    pub byte_size: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferDescription {
    pub name: String,
    pub resource_id: ResourceId,
    pub custom_name: bool,
    pub creation_flags: BufferCategory,
    pub length: u64,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ResourceUsage {
    #[default]
    Unused,
    VertexBuffer,
    IndexBuffer,
    VsConstants,
    PsConstants,
    CsConstants,
    StreamOut,
    VsResource,
    PsResource,
    CsResource,
    AllResource,
    VsRwResource,
    PsRwResource,
    CsRwResource,
    InputTarget,
    ColorTarget,
    DepthStencilTarget,
    Indirect,
    Clear,
    GenMips,
    Resolve,
    ResolveSrc,
    ResolveDst,
    Copy,
    CopySrc,
    CopyDst,
    Barrier,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct EventUsage {
    pub event_id: u32,
    pub usage: ResourceUsage,
    pub view: ResourceId,
}

// ---------------------------------------------------------------------------
// Pixels
// ---------------------------------------------------------------------------

/// `PixelValue` union. Stored as raw bits; interpret through the accessors.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct PixelValue {
    pub value_u: [u32; 4],
}

impl PixelValue {
    pub fn from_f32(v: [f32; 4]) -> Self {
        Self {
            value_u: v.map(f32::to_bits),
        }
    }

    pub fn value_f(&self) -> [f32; 4] {
        self.value_u.map(f32::from_bits)
    }

    pub fn value_i(&self) -> [i32; 4] {
        self.value_u.map(|v| v as i32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModificationValue {
    pub col: PixelValue,
    pub depth: f32,
    pub stencil: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelModification {
    pub event_id: u32,
    pub direct_shader_write: bool,
    pub unbound_ps: bool,
    pub fragment_index: u32,
    pub primitive_id: u32,
    pub pre_mod: ModificationValue,
    pub shader_out: ModificationValue,
    pub post_mod: ModificationValue,
    pub sample_masked: bool,
    pub backface_culled: bool,
    pub depth_clipped: bool,
    pub view_clipped: bool,
    pub scissor_clipped: bool,
    pub shader_discarded: bool,
    pub depth_test_failed: bool,
    pub stencil_test_failed: bool,
}

// ---------------------------------------------------------------------------
// Shaders
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum VarType {
    #[default]
    Float,
    Int,
    UInt,
    Double,
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderVariable {
    pub name: String,
    pub rows: u32,
    pub columns: u32,
    pub is_struct: bool,
    pub var_type: VarType,
    /// Raw 32-bit lanes; doubles occupy two lanes.
    pub value_u: [u32; 16],
    pub members: Vec<ShaderVariable>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderDebugState {
    pub registers: Vec<ShaderVariable>,
    pub outputs: Vec<ShaderVariable>,
    pub indexable_temps: Vec<Vec<ShaderVariable>>,
    pub next_instruction: u32,
    pub flags: u32,
}

/// Debug trace produced by `debug_vertex`/`debug_pixel`/`debug_thread`.
///
/// Engine-owned until passed back to `free_trace`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderDebugTrace {
    pub inputs: Vec<ShaderVariable>,
    pub cbuffers: Vec<Vec<ShaderVariable>>,
    pub states: Vec<ShaderDebugState>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigParameter {
    pub var_name: String,
    pub semantic_name: String,
    pub semantic_index: u32,
    pub reg_index: u32,
    pub comp_type: CompType,
    pub comp_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderReflection {
    pub resource_id: ResourceId,
    pub entry_point: String,
    pub stage: ShaderStage,
    pub raw_bytes: Vec<u8>,
    pub input_signature: Vec<SigParameter>,
    pub output_signature: Vec<SigParameter>,
    pub dispatch_threads_dimension: [u32; 3],
}

// ---------------------------------------------------------------------------
// Texture save / display
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AlphaMapping {
    #[default]
    Discard,
    BlendToColor,
    BlendToCheckerboard,
    Preserve,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureComponentMapping {
    pub black_point: f32,
    pub white_point: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureSave {
    pub resource_id: ResourceId,
    pub type_hint: CompType,
    pub dest_type: FileType,
    /// `-1` writes every mip where the format allows it.
    pub mip: i32,
    /// `-1` writes every slice where the format allows it.
    pub slice_index: i32,
    pub sample_index: u32,
    /// `-1` keeps all channels.
    pub channel_extract: i32,
    pub comp: TextureComponentMapping,
    pub alpha: AlphaMapping,
    pub alpha_col: FloatVector,
    pub jpeg_quality: i32,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DebugOverlay {
    #[default]
    NoOverlay,
    Drawcall,
    Wireframe,
    Depth,
    Stencil,
    BackfaceCull,
    ViewportScissor,
    NaN,
    Clipping,
    ClearBeforePass,
    ClearBeforeDraw,
    QuadOverdrawPass,
    QuadOverdrawDraw,
    TriangleSizePass,
    TriangleSizeDraw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureDisplay {
    pub resource_id: ResourceId,
    pub range_min: f32,
    pub range_max: f32,
    pub scale: f32,
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub alpha: bool,
    pub flip_y: bool,
    pub hdr_multiplier: f32,
    pub linear_display_as_gamma: bool,
    pub custom_shader_id: ResourceId,
    pub mip: u32,
    pub slice_face: u32,
    pub sample_idx: u32,
    pub raw_output: bool,
    pub x_offset: f32,
    pub y_offset: f32,
    pub light_background_color: FloatVector,
    pub dark_background_color: FloatVector,
    pub overlay: DebugOverlay,
    pub type_hint: CompType,
}

// ---------------------------------------------------------------------------
// Meshes
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MeshDataStage {
    #[default]
    Unknown,
    VsIn,
    VsOut,
    GsOut,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshFormat {
    pub index_resource_id: ResourceId,
    pub index_byte_offset: u64,
    pub index_byte_stride: u32,
    pub base_vertex: i32,
    pub vertex_resource_id: ResourceId,
    pub vertex_byte_offset: u64,
    pub vertex_byte_stride: u32,
    pub format: ResourceFormat,
    pub mesh_color: FloatVector,
    pub show_alpha: bool,
    pub topology: Topology,
    pub num_indices: u32,
    pub unproject: bool,
    pub near_plane: f32,
    pub far_plane: f32,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SolidShade {
    #[default]
    NoSolid,
    Solid,
    Lit,
    Secondary,
}

/// Mesh view configuration. The camera is passed alongside it to `set_mesh_display`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDisplay {
    pub mesh_type: MeshDataStage,
    pub ortho: bool,
    pub fov: f32,
    pub aspect: f32,
    pub show_prev_instances: bool,
    pub show_all_instances: bool,
    pub show_whole_pass: bool,
    pub cur_instance: u32,
    pub highlight_vert: u32,
    pub position: MeshFormat,
    pub second: MeshFormat,
    pub min_bounds: FloatVector,
    pub max_bounds: FloatVector,
    pub show_bbox: bool,
    pub solid_shade_mode: SolidShade,
    pub wireframe_draw: bool,
}

// ---------------------------------------------------------------------------
// Remote filesystem / target control
// ---------------------------------------------------------------------------

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
    pub struct PathProperty: u32 {
        const DIRECTORY = 0x1;
        const HIDDEN = 0x2;
        const EXECUTABLE = 0x4;
        const ERROR_UNKNOWN = 0x2000;
        const ERROR_ACCESS_DENIED = 0x4000;
        const ERROR_INVALID_PATH = 0x8000;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub filename: String,
    pub flags: PathProperty,
    pub last_modified: u32,
    pub size: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCaptureData {
    pub id: u32,
    pub timestamp: u64,
    pub thumbnail: Vec<u8>,
    pub path: String,
    pub local: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetControlMessage {
    #[default]
    Unknown,
    Disconnected,
    Busy {
        client_name: String,
    },
    Noop,
    NewCapture(NewCaptureData),
    CaptureCopied {
        id: u32,
        path: String,
    },
    RegisterApi {
        api_name: String,
    },
    NewChild {
        pid: u32,
        ident: u32,
    },
}

// ---------------------------------------------------------------------------
// Global environment
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub struct GlobalEnvironment {
    /// `Display*` for Xlib; null elsewhere.
    pub xlib_display: *mut c_void,
}

impl Default for GlobalEnvironment {
    fn default() -> Self {
        Self {
            xlib_display: std::ptr::null_mut(),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared cells the engine writes while a call is blocked
// ---------------------------------------------------------------------------

/// `float *progress` out-parameter. The engine updates it while a long call runs; other threads
/// may poll [`Progress::get`] in the meantime.
#[derive(Debug, Default)]
#[repr(transparent)]
pub struct Progress(AtomicU32);

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    pub(crate) fn as_ptr(&self) -> *mut f32 {
        self.0.as_ptr().cast()
    }

    /// Views a caller-provided `float*` as a progress cell.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or valid, aligned and not accessed non-atomically for `'a`.
    pub(crate) unsafe fn from_ptr<'a>(ptr: *mut f32) -> Option<&'a Progress> {
        // Same layout as `AtomicU32`, which has the size and alignment of `f32`.
        unsafe { ptr.cast::<Progress>().as_ref() }
    }
}

/// `volatile bool32 *kill` flag polled by `become_remote_server`.
#[derive(Debug, Default)]
pub struct KillSwitch(AtomicU32);

impl KillSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kill(&self) {
        self.0.store(1, Ordering::Relaxed);
    }

    pub fn is_killed(&self) -> bool {
        self.0.load(Ordering::Relaxed) != 0
    }

    pub(crate) fn as_ptr(&self) -> *mut u32 {
        self.0.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_patch_lists_map_to_raw_range() {
        assert_eq!(Topology::PatchList(1).to_raw(), sys::Topology_PatchList_1CPs);
        assert_eq!(Topology::PatchList(32).to_raw(), sys::Topology_PatchList_32CPs);
        assert_eq!(Topology::PatchList(0).to_raw(), sys::Topology_Unknown);
        assert_eq!(Topology::PatchList(33).to_raw(), sys::Topology_PatchList_32CPs + 1);
        assert_eq!(
            Topology::from_raw(sys::Topology_PatchList_1CPs + 15),
            Topology::PatchList(16)
        );
    }

    #[test]
    fn topology_raw_values_survive_the_boundary() {
        for raw in (0..=sys::Topology_PatchList_32CPs).chain([44, 999, u32::MAX]) {
            assert_eq!(Topology::from_raw(raw).to_raw(), raw);
        }
        assert_eq!(Topology::from_raw(999), Topology::Raw(999));
        assert_eq!(Topology::from_raw(sys::Topology_Unknown), Topology::Unknown);
    }

    #[test]
    fn replay_status_raw_values_match_sys() {
        assert_eq!(ReplayStatus::Succeeded.to_raw(), sys::ReplayStatus_Succeeded);
        assert_eq!(ReplayStatus::FileIoFailed.to_raw(), sys::ReplayStatus_FileIOFailed);
        assert_eq!(
            ReplayStatus::ApiHardwareUnsupported.to_raw(),
            sys::ReplayStatus_APIHardwareUnsupported
        );
        assert_eq!(
            ReplayStatus::from_raw(sys::ReplayStatus_NetworkRemoteBusy),
            ReplayStatus::NetworkRemoteBusy
        );
        assert_eq!(ReplayStatus::from_raw(17), ReplayStatus::UnknownError);
        assert!(ReplayStatus::Succeeded.is_success());
        assert!(!ReplayStatus::NetworkRemoteBusy.is_success());
    }

    #[test]
    fn pixel_value_reinterprets_bits() {
        let v = PixelValue::from_f32([1.0, -2.0, 0.5, 0.0]);
        assert_eq!(v.value_f(), [1.0, -2.0, 0.5, 0.0]);
        assert_eq!(v.value_u[0], 1.0f32.to_bits());
        assert_eq!(v.value_i()[1], (-2.0f32).to_bits() as i32);
    }

    #[test]
    fn progress_cell_round_trips_through_raw_pointer() {
        let progress = Progress::new();
        unsafe { *progress.as_ptr() = 0.75 };
        assert_eq!(progress.get(), 0.75);

        let kill = KillSwitch::new();
        assert!(!kill.is_killed());
        kill.kill();
        assert!(kill.is_killed());
        assert_eq!(unsafe { *kill.as_ptr() }, 1);
    }
}
