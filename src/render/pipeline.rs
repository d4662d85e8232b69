/// Everything that differs between the renderer's pipelines. The crystal
/// pipelines feed mesh + instance buffers and test depth; the post chain
/// draws a fullscreen triangle with no buffers and no depth.
pub(crate) struct PipelineSpec<'a> {
    pub(crate) label: &'a str,
    pub(crate) layout: &'a wgpu::PipelineLayout,
    pub(crate) shader: &'a wgpu::ShaderModule,
    pub(crate) vs_entry: &'a str,
    pub(crate) fs_entry: &'a str,
    pub(crate) buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub(crate) topology: wgpu::PrimitiveTopology,
    pub(crate) depth: Option<wgpu::DepthStencilState>,
    pub(crate) format: wgpu::TextureFormat,
    pub(crate) blend: Option<wgpu::BlendState>,
}

impl<'a> PipelineSpec<'a> {
    /// Fullscreen pass of the bloom chain: `vs_fullscreen` into `fs_entry`.
    pub(crate) fn fullscreen(
        layout: &'a wgpu::PipelineLayout,
        shader: &'a wgpu::ShaderModule,
        fs_entry: &'a str,
        format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            label: fs_entry,
            layout,
            shader,
            vs_entry: "vs_fullscreen",
            fs_entry,
            buffers: &[],
            topology: wgpu::PrimitiveTopology::TriangleList,
            depth: None,
            format,
            blend: None,
        }
    }

    pub(crate) fn build(&self, device: &wgpu::Device) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(self.label),
            layout: Some(self.layout),
            vertex: wgpu::VertexState {
                module: self.shader,
                entry_point: Some(self.vs_entry),
                buffers: self.buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // Facets are visible from both sides.
            primitive: wgpu::PrimitiveState {
                topology: self.topology,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: self.depth.clone(),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: self.shader,
                entry_point: Some(self.fs_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.format,
                    blend: self.blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    }
}
