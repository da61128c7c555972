use glam::{Mat4, Vec3};
use instant::Instant;
use std::f32::consts::FRAC_PI_4;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use tilt_core::{
    CardGeometry, CardOptions, ManualScheduler, PointerSample, TickOutcome, TiltCard, TiltSurface,
    TiltUniforms, UniformSurface,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CardUniforms {
    camera: [[f32; 4]; 4],
    tilt_transform: [[f32; 4]; 4],
    tilt: TiltUniforms,
}

type NativeCard = TiltCard<UniformSurface, ManualScheduler>;

// Card quad size in world units, matching the shader.
const CARD_WIDTH: f32 = 2.5;
const CARD_HEIGHT: f32 = 3.5;
// Share of the view the card occupies along its limiting axis.
const CARD_FILL: f32 = 0.8;
const FOV_Y: f32 = FRAC_PI_4;

/// Projection that keeps the whole card in view whatever the window shape.
fn card_camera(size: PhysicalSize<u32>) -> Mat4 {
    let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
    let visible_height = (CARD_HEIGHT / CARD_FILL).max(CARD_WIDTH / CARD_FILL / aspect);
    let distance = visible_height / 2.0 / (FOV_Y / 2.0).tan();
    let proj = Mat4::perspective_rh(FOV_Y, aspect, 0.1, distance * 4.0);
    proj * Mat4::look_at_rh(Vec3::Z * distance, Vec3::ZERO, Vec3::Y)
}

fn geometry_of(size: PhysicalSize<u32>) -> CardGeometry {
    CardGeometry::new(size.width as f32, size.height as f32)
}

fn card_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("card_shader"),
        source: wgpu::ShaderSource::Wgsl(tilt_core::CARD_WGSL.into()),
    });
    let corners = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    }];
    // Layout is derived from the shader's single uniform binding.
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("card_pipeline"),
        layout: None,
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &corners,
            compilation_options: Default::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// GPU side of the viewer: one quad, one uniform block.
struct CardRenderer<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniforms: wgpu::Buffer,
    corners: wgpu::Buffer,
    bindings: wgpu::BindGroup,
}

impl<'w> CardRenderer<'w> {
    async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no GPU adapter for the card window"))?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await?;

        let config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or_else(|| anyhow::anyhow!("surface not supported by adapter"))?;
        surface.configure(&device, &config);

        let pipeline = card_pipeline(&device, config.format);
        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("card_uniforms"),
            size: std::mem::size_of::<CardUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // centred unit square; the shader scales it to card proportions
        let corner_data: [[f32; 2]; 6] = [
            [-0.5, -0.5],
            [0.5, -0.5],
            [0.5, 0.5],
            [-0.5, -0.5],
            [0.5, 0.5],
            [-0.5, 0.5],
        ];
        let corners = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("card_corners"),
            contents: bytemuck::cast_slice(&corner_data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let bindings = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("card_bindings"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });

        log::info!(
            "[gpu] {} via {:?}, {:?}",
            adapter.get_info().name,
            adapter.get_info().backend,
            config.format
        );
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniforms,
            corners,
            bindings,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn draw(&mut self, card: &NativeCard) -> Result<(), wgpu::SurfaceError> {
        let surface = card.surface();
        let block = CardUniforms {
            camera: card_camera(PhysicalSize::new(self.config.width, self.config.height))
                .to_cols_array_2d(),
            tilt_transform: surface.state().card_transform().to_cols_array_2d(),
            tilt: surface.uniforms(),
        };
        self.queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&block));

        let frame = self.surface.get_current_texture()?;
        let target = frame.texture.create_view(&Default::default());
        let mut encoder = self.device.create_command_encoder(&Default::default());
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("card_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.06,
                            g: 0.06,
                            b: 0.07,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bindings, &[]);
            pass.set_vertex_buffer(0, self.corners.slice(..));
            pass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tilt card")
        .with_inner_size(winit::dpi::LogicalSize::new(500.0, 700.0))
        .build(&event_loop)?;

    let mut renderer = pollster::block_on(CardRenderer::new(&window))?;

    // The whole window is the card's hit box.
    let mut card: NativeCard = TiltCard::new(
        CardOptions::default(),
        UniformSurface::new(geometry_of(window.inner_size())),
        ManualScheduler::new(),
    )?;
    card.mount(Instant::now());
    let mut last_cursor: Option<PointerSample> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                renderer.resize(size);
                card.surface_mut().resize(geometry_of(size));
            }
            WindowEvent::CloseRequested => {
                card.destroy();
                elwt.exit();
            }
            WindowEvent::CursorEntered { .. } => card.on_pointer_enter(),
            WindowEvent::CursorMoved { position, .. } => {
                let sample = PointerSample::new(position.x as f32, position.y as f32);
                last_cursor = Some(sample);
                card.on_pointer_move(sample);
            }
            WindowEvent::CursorLeft { .. } => {
                let from = last_cursor
                    .take()
                    .unwrap_or_else(|| card.surface().geometry().center());
                card.on_pointer_leave(from, Instant::now());
            }
            _ => {}
        },
        Event::AboutToWait => {
            if let Some(token) = card.scheduler_mut().take_pending() {
                if card.tick(token, Instant::now()) == TickOutcome::Finished {
                    log::debug!("[card] at rest");
                }
            }
            match renderer.draw(&card) {
                Ok(()) => renderer.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.resize(renderer.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
