use crate::camera::OrbitCamera;
use coherence_core::markers::LineVertex;
use coherence_core::nodes::{ring_nodes, spoke_endpoints};
use coherence_core::particles::{field_color, point_size};
use coherence_core::scene::Scene;
use coherence_core::{
    VisualState, NODE_COUNT, NODE_OPACITY, NODE_RADIUS, PARTICLE_COUNT, PARTICLE_OPACITY,
    SPOKE_OPACITY,
};
use glam::Mat4;
use web_sys as web;

mod lines;
mod sprites;
mod waveform;

use lines::{create_line_resources, LineResources, LineUniforms};
use sprites::{create_sprite_resources, SpriteInstance, SpriteResources, SpriteUniforms};
use waveform::{create_waveform_resources, WaveformResources, WaveformUniforms};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    waveform: WaveformResources,
    sprites: SpriteResources,
    lines: LineResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let waveform = create_waveform_resources(&device, format);
        let sprites = create_sprite_resources(
            &device,
            format,
            NODE_COUNT as u32,
            PARTICLE_COUNT as u32,
        );
        let lines = create_line_resources(&device, format, (NODE_COUNT * 2) as u32);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            waveform,
            sprites,
            lines,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.03,
                g: 0.02,
                b: 0.07,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(
        &mut self,
        state: &VisualState,
        scene: &Scene,
        camera: &OrbitCamera,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view = camera.view();
        let proj = camera.proj(aspect);
        let view_proj = (proj * view).to_cols_array_2d();
        // Sprites billboard in view space, so they get the split matrices
        let view = view.to_cols_array_2d();
        let proj = proj.to_cols_array_2d();
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        let ring_model = Mat4::from_rotation_y(scene.ring_rotation).to_cols_array_2d();

        // Waveform sphere uniforms
        self.queue.write_buffer(
            &self.waveform.uniform_buffer,
            0,
            bytemuck::bytes_of(&WaveformUniforms {
                view_proj,
                model: Mat4::from_rotation_y(scene.waveform_rotation).to_cols_array_2d(),
                zone_color: state.zone.base_color().extend(1.0).to_array(),
                params: [
                    scene.elapsed,
                    state.core_tone,
                    state.karma_load,
                    state.coherence_level,
                ],
            }),
        );

        // Orbit nodes and their spokes, both in the rotating group frame
        let nodes = ring_nodes(state);
        let node_instances: Vec<SpriteInstance> = nodes
            .iter()
            .map(|n| SpriteInstance {
                pos: n.position.to_array(),
                scale: NODE_RADIUS * 2.0,
                color: n.color.extend(NODE_OPACITY).to_array(),
                intensity: n.intensity,
            })
            .collect();
        self.queue.write_buffer(
            &self.sprites.nodes.instance_vb,
            0,
            bytemuck::cast_slice(&node_instances),
        );
        self.queue.write_buffer(
            &self.sprites.nodes.uniform_buffer,
            0,
            bytemuck::bytes_of(&SpriteUniforms {
                view,
                proj,
                model: ring_model,
            }),
        );

        let spoke_vertices: Vec<LineVertex> = (0..NODE_COUNT)
            .flat_map(|i| {
                let (from, to) = spoke_endpoints(i);
                let c = nodes[i].color;
                let color = [c.x, c.y, c.z, SPOKE_OPACITY];
                [
                    LineVertex {
                        position: from.to_array(),
                        color,
                    },
                    LineVertex {
                        position: to.to_array(),
                        color,
                    },
                ]
            })
            .collect();
        self.queue.write_buffer(
            &self.lines.spokes.vertex_buffer,
            0,
            bytemuck::cast_slice(&spoke_vertices),
        );
        self.queue.write_buffer(
            &self.lines.spokes.uniform_buffer,
            0,
            bytemuck::bytes_of(&LineUniforms {
                view_proj,
                model: ring_model,
            }),
        );
        self.queue.write_buffer(
            &self.lines.markers.uniform_buffer,
            0,
            bytemuck::bytes_of(&LineUniforms {
                view_proj,
                model: identity,
            }),
        );

        // Particle field: positions from the scene, shared size and tint
        let size = point_size(state.coherence_level);
        let tint = field_color(state).extend(PARTICLE_OPACITY).to_array();
        let particle_instances: Vec<SpriteInstance> = scene
            .particles
            .positions()
            .iter()
            .map(|p| SpriteInstance {
                pos: *p,
                scale: size,
                color: tint,
                intensity: 0.0,
            })
            .collect();
        self.queue.write_buffer(
            &self.sprites.particles.instance_vb,
            0,
            bytemuck::cast_slice(&particle_instances),
        );
        self.queue.write_buffer(
            &self.sprites.particles.uniform_buffer,
            0,
            bytemuck::bytes_of(&SpriteUniforms {
                view,
                proj,
                model: identity,
            }),
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Back-to-front-ish without a depth buffer: markers, spokes,
            // sphere, then the emissive sprites on top.
            rpass.set_pipeline(&self.lines.pipeline);
            rpass.set_bind_group(0, &self.lines.markers.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.lines.markers.vertex_buffer.slice(..));
            rpass.draw(0..self.lines.markers.vertex_count, 0..1);
            rpass.set_bind_group(0, &self.lines.spokes.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.lines.spokes.vertex_buffer.slice(..));
            rpass.draw(0..spoke_vertices.len() as u32, 0..1);

            rpass.set_pipeline(&self.waveform.pipeline);
            rpass.set_bind_group(0, &self.waveform.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.waveform.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.waveform.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.waveform.index_count, 0, 0..1);

            rpass.set_pipeline(&self.sprites.pipeline);
            rpass.set_vertex_buffer(0, self.sprites.quad_vb.slice(..));
            rpass.set_bind_group(0, &self.sprites.nodes.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.sprites.nodes.instance_vb.slice(..));
            rpass.draw(0..6, 0..node_instances.len().min(self.sprites.nodes.capacity as usize) as u32);
            rpass.set_bind_group(0, &self.sprites.particles.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.sprites.particles.instance_vb.slice(..));
            rpass.draw(
                0..6,
                0..particle_instances
                    .len()
                    .min(self.sprites.particles.capacity as usize) as u32,
            );
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
