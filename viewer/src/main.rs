//! Globe viewer binary.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

use std::sync::mpsc;

use egui_wgpu::Renderer as EguiRenderer;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use globe::points::GeoPoint;
use globe::view::GlobeView;
use viewer::canvas::EguiCanvas;
use viewer::data;

struct GpuState<'w> {
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> Self {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = match instance.create_surface(window) {
            Ok(s) => s,
            Err(e) => panic!("create surface: {e}"),
        };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap_or_else(|| panic!("no suitable GPU adapters"));

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .unwrap_or_else(|e| panic!("request device: {e}"));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Self { _instance: instance, surface, device, queue, config }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

/// Translate egui pointer state into view gestures, in rect-local
/// coordinates. egui only reports a position while the pointer is over
/// the window, so a vanished pointer maps to `pointer_leave`.
fn forward_pointer(
    ctx: &egui::Context,
    rect: egui::Rect,
    view: &mut GlobeView,
    points: &[GeoPoint],
) {
    let (pos, pressed, released) = ctx.input(|i| {
        (i.pointer.latest_pos(), i.pointer.primary_pressed(), i.pointer.primary_released())
    });
    match pos {
        Some(p) => {
            let x = p.x - rect.left();
            let y = p.y - rect.top();
            if pressed && rect.contains(p) {
                view.pointer_down(x, y);
            }
            view.pointer_move(x, y, points, rect.width(), rect.height());
            if released {
                view.pointer_up();
            }
        }
        None => view.pointer_leave(),
    }
}

fn main() {
    env_logger::init();

    let stats_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let (tx, rx) = mpsc::channel::<Vec<GeoPoint>>();
    data::start_load(stats_path, tx);

    let event_loop = EventLoop::new().unwrap_or_else(|e| panic!("event loop: {e}"));
    let title = format!("Globe Viewer v{}", globe::version());
    let window_init = WindowBuilder::new()
        .with_title(title)
        .build(&event_loop)
        .unwrap_or_else(|e| panic!("create window: {e}"));

    // Leak the window to obtain a 'static reference for the surface lifetime without unsafe.
    let window: &'static Window = Box::leak(Box::new(window_init));
    let mut gpu = pollster::block_on(GpuState::new(window));
    let egui_ctx = egui::Context::default();
    let mut egui_state =
        EguiWinitState::new(egui_ctx.clone(), egui::ViewportId::ROOT, &event_loop, None, None);
    let surface_format = gpu.config.format;
    let mut egui_renderer = EguiRenderer::new(&gpu.device, surface_format, None, 1);

    let mut view = GlobeView::new();
    let mut points: Vec<GeoPoint> = Vec::new();
    let mut loading = true;
    let mut show_hud = true;

    let mut last_frame = std::time::Instant::now();
    let mut fps: f32 = 0.0;

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::AboutToWait => {
                    window.request_redraw();
                }
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    // forward events to egui (note: window, not context)
                    let _ = egui_state.on_window_event(window, &event);
                    match event {
                        WindowEvent::CloseRequested => {
                            view.stop();
                            elwt.exit();
                        }
                        WindowEvent::Resized(size) => {
                            gpu.resize(size);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = std::time::Instant::now();
                            let dt = now.duration_since(last_frame).as_secs_f32();
                            last_frame = now;
                            if dt > 0.0 {
                                fps = 0.9 * fps + 0.1 * (1.0 / dt);
                            }

                            if loading {
                                if let Ok(loaded) = rx.try_recv() {
                                    log::info!("[viewer] {} points ready", loaded.len());
                                    points = loaded;
                                    loading = false;
                                }
                            }
                            view.tick(dt * 1000.0);

                            let raw_input = egui_state.take_egui_input(window);
                            let full_output = egui_ctx.run(raw_input, |ctx| {
                                if ctx.input(|i| i.key_pressed(egui::Key::H)) {
                                    show_hud = !show_hud;
                                }
                                if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
                                    if view.is_running() {
                                        view.stop();
                                    } else {
                                        view.start();
                                    }
                                }

                                egui::TopBottomPanel::top("hud").show_animated(ctx, show_hud, |ui| {
                                    ui.horizontal_wrapped(|ui| {
                                        ui.label("Space: pause  H: HUD  drag: rotate");
                                        ui.separator();
                                        if loading {
                                            ui.label("loading stats…");
                                        } else {
                                            ui.label(format!("countries={}", points.len()));
                                        }
                                        ui.separator();
                                        ui.label(format!("FPS: {fps:.0}"));
                                        if let Some(i) = view.hover() {
                                            if let Some(p) = points.get(i) {
                                                ui.separator();
                                                ui.label(format!(
                                                    "{} ({}): {} visits, {:.1}%",
                                                    p.country_name, p.country_code, p.count, p.percentage
                                                ));
                                            }
                                        }
                                    });
                                });

                                egui::CentralPanel::default().show(ctx, |ui| {
                                    let rect = ui.available_rect_before_wrap();
                                    forward_pointer(ctx, rect, &mut view, &points);
                                    let painter = ui.painter_at(rect);
                                    let mut canvas = EguiCanvas::new(&painter, rect);
                                    view.paint(&mut canvas, &points, rect.width(), rect.height(), loading);
                                });
                            });

                            for (id, image_delta) in &full_output.textures_delta.set {
                                egui_renderer.update_texture(&gpu.device, &gpu.queue, *id, image_delta);
                            }
                            for id in &full_output.textures_delta.free {
                                egui_renderer.free_texture(id);
                            }
                            let ppp = window.scale_factor() as f32;
                            let paint_jobs = egui_ctx.tessellate(full_output.shapes, ppp);

                            let frame = match gpu.surface.get_current_texture() {
                                Ok(f) => f,
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    gpu.resize(window.inner_size());
                                    return;
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    elwt.exit();
                                    return;
                                }
                                Err(wgpu::SurfaceError::Timeout) => {
                                    return;
                                }
                            };
                            let frame_view =
                                frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
                            let mut encoder = gpu.device.create_command_encoder(
                                &wgpu::CommandEncoderDescriptor { label: Some("encoder") },
                            );

                            let screen_desc = ScreenDescriptor {
                                size_in_pixels: [gpu.config.width, gpu.config.height],
                                pixels_per_point: ppp,
                            };
                            egui_renderer.update_buffers(
                                &gpu.device,
                                &gpu.queue,
                                &mut encoder,
                                &paint_jobs,
                                &screen_desc,
                            );

                            {
                                let mut rpass =
                                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                        label: Some("egui pass"),
                                        color_attachments: &[Some(
                                            wgpu::RenderPassColorAttachment {
                                                view: &frame_view,
                                                resolve_target: None,
                                                ops: wgpu::Operations {
                                                    load: wgpu::LoadOp::Clear(wgpu::Color {
                                                        r: 0.02,
                                                        g: 0.02,
                                                        b: 0.04,
                                                        a: 1.0,
                                                    }),
                                                    store: wgpu::StoreOp::Store,
                                                },
                                            },
                                        )],
                                        depth_stencil_attachment: None,
                                        occlusion_query_set: None,
                                        timestamp_writes: None,
                                    });
                                egui_renderer.render(&mut rpass, &paint_jobs, &screen_desc);
                            }
                            gpu.queue.submit(std::iter::once(encoder.finish()));
                            frame.present();

                            egui_state.handle_platform_output(window, full_output.platform_output);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .unwrap_or_else(|e| panic!("run app: {e}"));
}
