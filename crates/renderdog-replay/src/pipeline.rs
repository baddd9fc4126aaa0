//! Pipeline state snapshots, one per graphics API.
//!
//! These are returned verbatim from the replay controller for the current event. Only the
//! commonly inspected parts of each API's state are mirrored.

use serde::{Deserialize, Serialize};

use crate::types::{ResourceId, ShaderStage, Topology};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Scissor {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct VertexBufferBinding {
    pub resource_id: ResourceId,
    pub stride: u32,
    pub offset: u64,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct BoundShader {
    pub resource_id: ResourceId,
    pub stage: ShaderStage,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FillMode {
    #[default]
    Solid,
    Wireframe,
    Point,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CullMode {
    #[default]
    NoCull,
    Front,
    Back,
    FrontAndBack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RasterizerState {
    pub fill_mode: FillMode,
    pub cull_mode: CullMode,
    pub front_ccw: bool,
    pub depth_clip: bool,
    pub depth_bias: f32,
    pub slope_scaled_depth_bias: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAssembly {
    pub topology: Topology,
    pub index_buffer: ResourceId,
    pub index_byte_stride: u32,
    pub vertex_buffers: Vec<VertexBufferBinding>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTargets {
    pub render_targets: Vec<ResourceId>,
    pub depth_target: ResourceId,
    pub depth_read_only: bool,
    pub stencil_read_only: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct D3D11PipelineState {
    pub input_assembly: InputAssembly,
    pub input_layout: ResourceId,
    pub vertex_shader: BoundShader,
    pub hull_shader: BoundShader,
    pub domain_shader: BoundShader,
    pub geometry_shader: BoundShader,
    pub pixel_shader: BoundShader,
    pub compute_shader: BoundShader,
    pub stream_out: Vec<ResourceId>,
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Scissor>,
    pub rasterizer: RasterizerState,
    pub blend_state: ResourceId,
    pub depth_stencil_state: ResourceId,
    pub output: OutputTargets,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct D3D12PipelineState {
    pub pipeline: ResourceId,
    pub root_signature: ResourceId,
    pub custom_name: bool,
    pub input_assembly: InputAssembly,
    pub vertex_shader: BoundShader,
    pub hull_shader: BoundShader,
    pub domain_shader: BoundShader,
    pub geometry_shader: BoundShader,
    pub pixel_shader: BoundShader,
    pub compute_shader: BoundShader,
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Scissor>,
    pub rasterizer: RasterizerState,
    pub output: OutputTargets,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlPipelineState {
    pub vertex_array: ResourceId,
    pub program: ResourceId,
    pub program_pipeline: ResourceId,
    pub input_assembly: InputAssembly,
    pub primitive_restart: bool,
    pub restart_index: u32,
    pub vertex_shader: BoundShader,
    pub tess_control_shader: BoundShader,
    pub tess_eval_shader: BoundShader,
    pub geometry_shader: BoundShader,
    pub fragment_shader: BoundShader,
    pub compute_shader: BoundShader,
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Scissor>,
    pub rasterizer: RasterizerState,
    pub framebuffer: ResourceId,
    pub output: OutputTargets,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSetBinding {
    pub layout: ResourceId,
    pub descriptor_set: ResourceId,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VulkanPipelineState {
    pub graphics_pipeline: ResourceId,
    pub graphics_layout: ResourceId,
    pub graphics_descriptor_sets: Vec<DescriptorSetBinding>,
    pub compute_pipeline: ResourceId,
    pub compute_layout: ResourceId,
    pub compute_descriptor_sets: Vec<DescriptorSetBinding>,
    pub input_assembly: InputAssembly,
    pub vertex_shader: BoundShader,
    pub tess_control_shader: BoundShader,
    pub tess_eval_shader: BoundShader,
    pub geometry_shader: BoundShader,
    pub fragment_shader: BoundShader,
    pub compute_shader: BoundShader,
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Scissor>,
    pub rasterizer: RasterizerState,
    pub render_pass: ResourceId,
    pub framebuffer: ResourceId,
    pub output: OutputTargets,
}
