use std::time::{Duration, Instant};

use log::{error, info, warn};
use rubiks_cube::{view::FacingMode, CubeModel};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::{Fullscreen, WindowBuilder},
};

use crate::core::State;

pub struct Settings {
    pub fullscreen: bool,
    pub width: u32,
    pub height: u32,
    /// Shortest time between two redraws.
    pub frame_interval: Duration,
    /// Camera orbit speed in degrees per second.
    pub spin: f32,
    pub facing: FacingMode,
    pub fps: bool,
}

pub fn run(settings: Settings, model: CubeModel) -> anyhow::Result<()> {
    let event_loop = EventLoop::new();
    let mut window_builder = WindowBuilder::new().with_title("Rubik's Cube");

    if settings.fullscreen {
        window_builder = window_builder.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        window_builder = window_builder.with_inner_size(LogicalSize::<f64>::new(
            settings.width as f64,
            settings.height as f64,
        ))
    }

    let window = window_builder.build(&event_loop)?;

    // State::new uses async code, so we're going to wait for it to finish
    let mut state = pollster::block_on(State::new(
        &window,
        model,
        settings.facing,
        settings.spin,
    ))?;

    let frame_interval = settings.frame_interval;
    let fps = settings.fps;
    let mut next_frame = Instant::now();
    let mut frame_count = 0;
    let mut accum_time = 0.;
    let mut last_frame_inst = Instant::now();

    info!("entering render loop");
    event_loop.run(move |event, _, control_flow| match event {
        Event::RedrawRequested(window_id) if window_id == window.id() => {
            state.update();
            match state.render() {
                Ok(_) => {}
                // Reconfigure the surface if lost
                Err(wgpu::SurfaceError::Lost) => state.resize(state.size),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("out of GPU memory, quitting");
                    *control_flow = ControlFlow::Exit
                }
                // All other errors (Outdated, Timeout) should be resolved by the next frame
                Err(e) => warn!("{:?}", e),
            }

            if fps {
                accum_time += last_frame_inst.elapsed().as_secs_f32();
                last_frame_inst = Instant::now();
                frame_count += 1;
                if frame_count == 100 {
                    info!(
                        "Avg frame time {}ms",
                        accum_time * 1000.0 / frame_count as f32
                    );
                    accum_time = 0.0;
                    frame_count = 0;
                }
            }
        }
        Event::MainEventsCleared => {
            if *control_flow == ControlFlow::Exit {
                return;
            }
            let now = Instant::now();
            if now >= next_frame {
                window.request_redraw();
                next_frame = now + frame_interval;
            }
            *control_flow = ControlFlow::WaitUntil(next_frame);
        }
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => *control_flow = ControlFlow::Exit,
            WindowEvent::Resized(physical_size) => {
                state.resize(*physical_size);
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                state.resize(**new_inner_size);
            }
            _ => {}
        },
        _ => {}
    });
}
