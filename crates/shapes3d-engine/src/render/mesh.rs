use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::render::{DepthCompare, RasterState, RenderCtx, RenderTarget, ShadeModel};
use crate::scene::{DrawList, Mesh, Primitive, Vertex};

/// Depth-tested renderer for static position + color meshes.
///
/// Mesh buffers are uploaded the first time a mesh label is seen and reused
/// afterwards. Each draw item becomes one instance carrying its full MVP.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_key: Option<PipelineKey>,
    pipeline: Option<wgpu::RenderPipeline>,

    meshes: HashMap<&'static str, GpuMesh>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct PipelineKey {
    surface_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    raster: (bool, DepthCompare, ShadeModel),
}

struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
    shape: MeshShape,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears color + depth and renders `draw_list` into `target`.
    ///
    /// The clear happens even when the list is empty.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        raster: &RasterState,
        draw_list: &DrawList,
    ) {
        self.ensure_pipeline(ctx, raster);
        for item in draw_list.items() {
            self.ensure_mesh(ctx, item.mesh);
        }

        let projection = draw_list.projection();
        let instances: Vec<MeshInstance> = draw_list
            .items()
            .iter()
            .map(|item| MeshInstance::new(projection * item.model_view))
            .collect();

        if !instances.is_empty() {
            self.ensure_instance_capacity(ctx, instances.len());
            if let Some(instance_vbo) = self.instance_vbo.as_ref() {
                ctx.queue
                    .write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));
            }
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shapes3d mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(raster.clear_color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(raster.clear_depth_clamped()),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if instances.is_empty() {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));

        for (i, item) in draw_list.items().iter().enumerate() {
            let Some(mesh) = self.meshes.get(item.mesh.label) else { continue };
            if mesh.index_count == 0 {
                continue;
            }
            let instance = i as u32;
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, instance..instance + 1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, raster: &RasterState) {
        let key = PipelineKey {
            surface_format: ctx.surface_format,
            depth_format: ctx.depth_format,
            raster: raster.pipeline_key(),
        };
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/mesh.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shapes3d mesh shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("shapes3d mesh pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let (vs_entry, fs_entry) = raster.shading.entry_points();

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shapes3d mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(vs_entry),
                compilation_options: Default::default(),
                buffers: &[vertex_layout(), MeshInstance::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(fs_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // No face culling: both windings are visible.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(raster.depth_stencil(ctx.depth_format)),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "mesh pipeline built (format {:?}, depth {:?}, shading {:?})",
            ctx.surface_format,
            ctx.depth_format,
            raster.shading
        );

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
    }

    fn ensure_mesh(&mut self, ctx: &RenderCtx<'_>, mesh: &'static Mesh) {
        if let Some(cached) = self.meshes.get(mesh.label) {
            debug_assert!(
                cached.shape == MeshShape::of(mesh),
                "mesh label '{}' reused for different geometry",
                mesh.label
            );
            return;
        }

        let indices = mesh.triangle_indices();

        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(mesh.label),
            contents: bytemuck::cast_slice(mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(mesh.label),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh '{}' ({} vertices, {} faces)",
            mesh.label,
            mesh.vertices.len(),
            mesh.face_count()
        );

        self.meshes.insert(
            mesh.label,
            GpuMesh {
                vbo,
                ibo,
                index_count: indices.len() as u32,
                shape: MeshShape::of(mesh),
            },
        );
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(16);
        let new_size = (new_cap * std::mem::size_of::<MeshInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shapes3d mesh instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

/// Geometry fingerprint used to catch two meshes sharing one cache label.
#[derive(Debug, Copy, Clone, PartialEq)]
struct MeshShape {
    primitive: Primitive,
    vertex_count: usize,
}

impl MeshShape {
    fn of(mesh: &Mesh) -> Self {
        Self {
            primitive: mesh.primitive,
            vertex_count: mesh.vertices.len(),
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Float32x3  // color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshInstance {
    mvp: [[f32; 4]; 4], // column-major
}

impl MeshInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4
    ];

    fn new(mvp: Matrix4<f32>) -> Self {
        Self { mvp: mvp.into() }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use cgmath::Vector3;

    #[test]
    fn instance_stores_columns() {
        let m = Matrix4::from_translation(Vector3::new(1.5, 0.0, -7.0));
        let inst = MeshInstance::new(m);
        assert_eq!(inst.mvp[3], [1.5, 0.0, -7.0, 1.0]);
        assert_eq!(std::mem::size_of::<MeshInstance>(), 64);
    }

    #[test]
    fn shape_tells_apart_meshes_with_one_label() {
        static TRI: [Vertex; 3] = [Vertex::new([0.0; 3], Color::RED); 3];
        static QUAD: [Vertex; 4] = [Vertex::new([0.0; 3], Color::RED); 4];
        let a = Mesh::new("shared", Primitive::Triangles, &TRI);
        let b = Mesh::new("shared", Primitive::Quads, &QUAD);

        assert_eq!(MeshShape::of(&a), MeshShape::of(&a));
        assert_ne!(MeshShape::of(&a), MeshShape::of(&b));
    }

    #[test]
    fn vertex_layout_matches_struct() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 12);
    }
}
