use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::Vec2;
use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{Key, MouseButton, ViewerEvent};
use crate::render::PixmapBlitter;
use crate::time::FrameClock;

/// Presentation window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Size of the presented canvas in pixels; pointer positions are mapped
    /// into this space.
    pub canvas_size: (u32, u32),
}

impl RuntimeConfig {
    /// A window sized to show `canvas_size` at 1:1.
    pub fn for_canvas(title: impl Into<String>, canvas_size: (u32, u32)) -> Self {
        Self {
            title: title.into(),
            initial_size: LogicalSize::new(canvas_size.0 as f64, canvas_size.1 as f64),
            canvas_size,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::for_canvas("portray", (500, 500))
    }
}

/// Runs a single presentation window until it is closed or the app exits.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState { config, gpu_init, app, entry: None, failure: None };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,
    blitter: PixmapBlitter,
    pointer: Option<Vec2>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
}

impl<A: App> RuntimeState<A> {
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            blitter: PixmapBlitter::new(),
            pointer: None,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        self.entry = Some(entry);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }
}

impl<A: App> ApplicationHandler for RuntimeState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
            return;
        }
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        // Playback is time driven, so keep redrawing.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let canvas = self.config.canvas_size;
        let (app, Some(entry)) = (&mut self.app, self.entry.as_mut()) else {
            return;
        };

        let mut control = AppControl::Continue;

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                event_loop.exit();
                return;
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested => {
                entry.with_mut(|fields| {
                    let mut ctx = FrameCtx {
                        window: WindowCtx { window: fields.window },
                        gpu: fields.gpu,
                        blitter: fields.blitter,
                        time: fields.clock.tick(),
                    };
                    control = app.on_frame(&mut ctx);
                });
            }

            other => {
                entry.with_mut(|fields| {
                    let Some(ev) = translate(fields.window, fields.pointer, canvas, other) else {
                        return;
                    };
                    match ev {
                        ViewerEvent::PointerMoved(p) => *fields.pointer = Some(p),
                        ViewerEvent::PointerLeft => *fields.pointer = None,
                        _ => {}
                    }
                    control = app.on_event(ev, &WindowCtx { window: fields.window });
                });
            }
        }

        if control == AppControl::Exit {
            self.entry = None;
            event_loop.exit();
        }
    }
}

fn translate(
    window: &Window,
    pointer: &Option<Vec2>,
    canvas: (u32, u32),
    event: &WindowEvent,
) -> Option<ViewerEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(ViewerEvent::PointerMoved(to_canvas(window, *position, canvas)))
        }
        WindowEvent::CursorLeft { .. } => Some(ViewerEvent::PointerLeft),
        WindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => {
            let at = (*pointer)?;
            Some(ViewerEvent::Click { button: map_mouse_button(*button), at })
        }
        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed && !event.repeat =>
        {
            Some(ViewerEvent::KeyPressed(map_key(event.physical_key)))
        }
        _ => None,
    }
}

/// The frame is stretched over the whole surface, so pointer positions scale
/// by canvas/surface per axis.
fn to_canvas(window: &Window, pos: PhysicalPosition<f64>, canvas: (u32, u32)) -> Vec2 {
    let size = window.inner_size();
    scale_to_canvas(pos.x, pos.y, (size.width, size.height), canvas)
}

fn scale_to_canvas(x: f64, y: f64, surface: (u32, u32), canvas: (u32, u32)) -> Vec2 {
    let sx = canvas.0 as f64 / surface.0.max(1) as f64;
    let sy = canvas.1 as f64 / surface.1.max(1) as f64;
    Vec2::new((x * sx) as f32, (y * sy) as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(KeyCode::KeyR) => Key::R,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::ArrowLeft,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::ArrowRight,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_scales_into_canvas_space() {
        let p = scale_to_canvas(500.0, 250.0, (1000, 1000), (500, 500));
        assert_eq!(p, Vec2::new(250.0, 125.0));
    }

    #[test]
    fn zero_surface_does_not_divide_by_zero() {
        let p = scale_to_canvas(3.0, 4.0, (0, 0), (10, 10));
        assert!(p.is_finite());
    }

    #[test]
    fn unmapped_keys_are_other() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyR)), Key::R);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Other);
    }
}
