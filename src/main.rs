//! Boxhop entry point
//!
//! Native window, input, and frame pacing around the simulation loop.
//! Per redraw: sample the input snapshot, tick the simulation, hand the
//! resulting state to the renderer.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use boxhop::Settings;
use boxhop::consts::*;
use boxhop::platform::InputTracker;
use boxhop::renderer::{Frame, RenderState, scene};
use boxhop::sim::{self, GameState};

struct App {
    window: Arc<Window>,
    render_state: RenderState,
    state: GameState,
    input: InputTracker,
    show_help: bool,
    last_frame_time: Instant,
}

impl App {
    async fn new(window: Arc<Window>, settings: &Settings) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, size.width, size.height).await;

        let state = GameState::new(sim::demo_level(), settings.viewport())
            .expect("demo level must not be empty");
        log::info!("Level loaded: {} items", state.items.len());

        Self {
            window,
            render_state,
            state,
            input: InputTracker::new(),
            show_help: settings.show_help,
            last_frame_time: Instant::now(),
        }
    }

    fn viewport(&self) -> Vec2 {
        let (w, h) = self.render_state.size;
        Vec2::new(w as f32, h as f32)
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame_time = now;

        let input = self.input.sample();
        let viewport = self.viewport();
        sim::tick(&mut self.state, &input, dt, viewport);

        let mut frame = Frame::new();
        scene::draw(&mut frame, &self.state, self.show_help);

        match self
            .render_state
            .render(frame.vertices(), frame.clear_color())
        {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of memory!"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Boxhop starting...");

    let settings = Settings::load();

    let event_loop = EventLoop::new().unwrap();
    let window_attributes = Window::default_attributes()
        .with_title(settings.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height));
    let window = event_loop.create_window(window_attributes).unwrap();
    let window = Arc::new(window);

    let mut app = pollster::block_on(App::new(window.clone(), &settings));

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input.handle_event(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.render_state
                                .resize(physical_size.width, physical_size.height);
                        }
                        WindowEvent::RedrawRequested => app.redraw(),
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        })
        .unwrap();

    log::info!("Window closed, shutting down");
}
