use super::mesh::{self, MeshData, Vertex};
use super::pipeline::PipelineSpec;
use crate::constants::MAX_INSTANCES;
use crate::core::{DecorationShape, LightKind, SceneDescription, FACET_SIZE};
use wgpu::util::DeviceExt;

pub(crate) const MAX_LIGHTS: usize = 8;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const LIGHT_POINT: f32 = 1.0;
const LIGHT_SPOT: f32 = 2.0;
const LIGHT_DIRECTIONAL: f32 = 3.0;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    // xyz position, w kind
    pub(crate) position: [f32; 4],
    // xyz normalized direction of travel, w cos(outer cone)
    pub(crate) direction: [f32; 4],
    // rgb * intensity, w cos(inner cone)
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CrystalUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    // xyz eye, w unused
    pub(crate) eye: [f32; 4],
    // rgb ambient, w light count
    pub(crate) ambient_count: [f32; 4],
    pub(crate) lights: [LightPacked; MAX_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstancePacked {
    pub(crate) model: [[f32; 4]; 4],
    // rgb base colour, a opacity
    pub(crate) color: [f32; 4],
    // rgb emissive colour, a intensity
    pub(crate) emissive: [f32; 4],
    // x roughness, y metalness
    pub(crate) surface: [f32; 4],
}

const INSTANCE_ATTRIBS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
    6 => Float32x4, 7 => Float32x4, 8 => Float32x4
];
const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: std::ops::Range<u32>) {
        if instances.is_empty() {
            return;
        }
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, instances);
    }
}

/// Instance ranges into the shared instance buffer for one frame.
#[derive(Default)]
pub(crate) struct DrawRanges {
    pub(crate) facets: std::ops::Range<u32>,
    pub(crate) spheres: std::ops::Range<u32>,
    pub(crate) motes: std::ops::Range<u32>,
    pub(crate) wires: std::ops::Range<u32>,
}

pub(crate) struct CrystalResources {
    lit_pipeline: wgpu::RenderPipeline,
    basic_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    quad: GpuMesh,
    sphere: GpuMesh,
    mote: GpuMesh,
    wire: GpuMesh,
}

pub(crate) fn create_crystal_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
) -> CrystalResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("crystal_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::CRYSTAL_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("crystal_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("crystal_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Decorations glow: colour is added on top of whatever is behind.
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent::OVER,
    };
    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstancePacked>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBS,
        },
    ];
    // Translucent decorations test against the facets but never occlude.
    let depth = |write: bool| wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    };
    let lit = PipelineSpec {
        label: "crystal_lit",
        layout: &pl,
        shader: &shader,
        vs_entry: "vs_main",
        fs_entry: "fs_lit",
        buffers: &buffers,
        topology: wgpu::PrimitiveTopology::TriangleList,
        depth: Some(depth(true)),
        format: hdr_format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
    };
    let basic = PipelineSpec {
        label: "crystal_basic",
        fs_entry: "fs_basic",
        depth: Some(depth(false)),
        blend: Some(additive),
        ..lit
    };
    let wire = PipelineSpec {
        label: "crystal_wire",
        topology: wgpu::PrimitiveTopology::LineList,
        depth: Some(depth(false)),
        ..basic
    };
    let lit_pipeline = lit.build(device);
    let basic_pipeline = basic.build(device);
    let wire_pipeline = wire.build(device);
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("crystal_uniforms"),
        size: std::mem::size_of::<CrystalUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("crystal_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("crystal_instances"),
        size: (std::mem::size_of::<InstancePacked>() * MAX_INSTANCES) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    CrystalResources {
        lit_pipeline,
        basic_pipeline,
        wire_pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer,
        quad: GpuMesh::upload(device, "facet_quad", &mesh::plane(FACET_SIZE)),
        sphere: GpuMesh::upload(device, "glow_sphere", &mesh::uv_sphere(32, 32)),
        mote: GpuMesh::upload(device, "mote_sphere", &mesh::uv_sphere(8, 8)),
        wire: GpuMesh::upload(device, "wire_sphere", &mesh::wire_sphere(16, 16)),
    }
}

pub(crate) fn pack_uniforms(scene: &SceneDescription, aspect: f32) -> CrystalUniforms {
    let mut lights = [LightPacked::default(); MAX_LIGHTS];
    let mut ambient = [0.0f32; 3];
    let mut count = 0usize;
    for light in &scene.lights {
        let c = light.color.map(|ch| ch * light.intensity);
        let packed = match light.kind {
            LightKind::Ambient => {
                for (a, ch) in ambient.iter_mut().zip(c) {
                    *a += ch;
                }
                continue;
            }
            LightKind::Point { position } => LightPacked {
                position: position.extend(LIGHT_POINT).to_array(),
                direction: [0.0; 4],
                color: [c[0], c[1], c[2], 0.0],
            },
            LightKind::Spot {
                position,
                target,
                angle,
                penumbra,
            } => {
                let dir = (target - position).normalize_or_zero();
                let cos_outer = angle.cos();
                let cos_inner = (angle * (1.0 - penumbra.clamp(0.0, 1.0))).cos();
                LightPacked {
                    position: position.extend(LIGHT_SPOT).to_array(),
                    direction: dir.extend(cos_outer).to_array(),
                    color: [c[0], c[1], c[2], cos_inner],
                }
            }
            LightKind::Directional { position } => LightPacked {
                position: position.extend(LIGHT_DIRECTIONAL).to_array(),
                direction: (-position).normalize_or_zero().extend(0.0).to_array(),
                color: [c[0], c[1], c[2], 0.0],
            },
        };
        if count == MAX_LIGHTS {
            log::warn!("light rig exceeds {} lights; extras ignored", MAX_LIGHTS);
            break;
        }
        lights[count] = packed;
        count += 1;
    }
    let eye = scene.camera.eye;
    CrystalUniforms {
        view_proj: scene.camera.view_proj(aspect).to_cols_array_2d(),
        eye: eye.extend(1.0).to_array(),
        ambient_count: [ambient[0], ambient[1], ambient[2], count as f32],
        lights,
    }
}

/// Flatten facets and decorations into one instance list, grouped by mesh.
pub(crate) fn pack_instances(scene: &SceneDescription, out: &mut Vec<InstancePacked>) -> DrawRanges {
    out.clear();
    let mut ranges = DrawRanges::default();
    let start = out.len() as u32;
    for f in &scene.facets {
        let m = &f.material;
        out.push(InstancePacked {
            model: f.model.to_cols_array_2d(),
            color: [f.tint[0], f.tint[1], f.tint[2], m.opacity],
            emissive: [m.emissive[0], m.emissive[1], m.emissive[2], m.emissive_intensity],
            surface: [m.roughness, m.metalness, 0.0, 0.0],
        });
    }
    ranges.facets = start..out.len() as u32;
    for (shape, slot) in [
        (DecorationShape::Sphere, &mut ranges.spheres),
        (DecorationShape::Mote, &mut ranges.motes),
        (DecorationShape::WireSphere, &mut ranges.wires),
    ] {
        let start = out.len() as u32;
        for d in scene.decorations.iter().filter(|d| d.shape == shape) {
            out.push(InstancePacked {
                model: d.model.to_cols_array_2d(),
                color: [d.color[0], d.color[1], d.color[2], d.opacity],
                ..Default::default()
            });
        }
        *slot = start..out.len() as u32;
    }
    if out.len() > MAX_INSTANCES {
        log::warn!("{} instances exceed capacity {}; truncating", out.len(), MAX_INSTANCES);
        out.truncate(MAX_INSTANCES);
        let cap = MAX_INSTANCES as u32;
        for r in [
            &mut ranges.facets,
            &mut ranges.spheres,
            &mut ranges.motes,
            &mut ranges.wires,
        ] {
            r.start = r.start.min(cap);
            r.end = r.end.min(cap);
        }
    }
    ranges
}

impl CrystalResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &CrystalUniforms, instances: &[InstancePacked]) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, ranges: &DrawRanges) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        rpass.set_pipeline(&self.lit_pipeline);
        self.quad.draw(rpass, ranges.facets.clone());

        rpass.set_pipeline(&self.basic_pipeline);
        self.sphere.draw(rpass, ranges.spheres.clone());
        self.mote.draw(rpass, ranges.motes.clone());

        rpass.set_pipeline(&self.wire_pipeline);
        self.wire.draw(rpass, ranges.wires.clone());
    }
}
