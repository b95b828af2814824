use std::time::Duration;

use anyhow::Result;
use portray_engine::coords::Vec2;
use portray_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use portray_engine::input::{Key, MouseButton, ViewerEvent};
use portray_engine::paint::Color;
use portray_engine::raster::Rasterizer;
use portray_engine::text::FontSystem;
use portray_engine::time::PlaybackPacer;
use portray_grid::{Frame, GridRenderer};

const TITLE: &str = "portray";

/// Plays frames back in a window, one step per playback interval.
pub struct GridViewer {
    renderer: GridRenderer,
    fonts: FontSystem,
    frames: Vec<Frame>,
    raster: Rasterizer,
    pacer: PlaybackPacer,
    index: usize,
    /// Surface cleared by `R`; stays blank until the next step.
    cleared: bool,
    dirty: bool,
}

impl GridViewer {
    pub fn new(renderer: GridRenderer, fonts: FontSystem, frames: Vec<Frame>, interval: Duration) -> Result<Self> {
        let raster = Rasterizer::new(renderer.geometry().surface())?;
        Ok(Self {
            renderer,
            fonts,
            frames,
            raster,
            pacer: PlaybackPacer::new(interval),
            index: 0,
            cleared: false,
            dirty: true,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves `delta` frames, wrapping around.
    pub fn step(&mut self, delta: i64) {
        if self.frames.is_empty() {
            return;
        }
        let len = self.frames.len() as i64;
        self.index = (self.index as i64 + delta).rem_euclid(len) as usize;
        self.cleared = false;
        self.dirty = true;
    }

    pub fn clear_view(&mut self) {
        self.cleared = true;
        self.dirty = true;
    }

    /// Redraws the current frame (or the cleared surface) if anything changed.
    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        if self.cleared {
            self.renderer.reset();
        } else if let Some(frame) = self.frames.get(self.index) {
            let report = self.renderer.render(frame);
            if !report.is_clean() {
                log::debug!("frame {}: {} issues", self.index, report.issues.len());
            }
        }

        let (list, images) = self.renderer.surface_mut();
        self.raster.render(list, images, &self.fonts);
    }

    fn hover_title(&self, at: Vec2) -> String {
        let geometry = self.renderer.geometry();
        let Some((x, row)) = geometry.cell_at(at) else {
            return self.title();
        };
        let descriptions = self.renderer.describe_at(at);
        let cell = format!("({x}, {})", geometry.flip_y(row));
        if descriptions.is_empty() {
            format!("{} | {cell}", self.title())
        } else {
            format!("{} | {cell}: {}", self.title(), descriptions.join("; "))
        }
    }

    fn title(&self) -> String {
        if self.frames.is_empty() {
            return format!("{TITLE} | no frames");
        }
        let state = if self.pacer.is_paused() { " (paused)" } else { "" };
        format!("{TITLE} | frame {}/{}{state}", self.index + 1, self.frames.len())
    }
}

impl App for GridViewer {
    fn on_event(&mut self, event: ViewerEvent, window: &WindowCtx<'_>) -> AppControl {
        match event {
            ViewerEvent::PointerMoved(at) => window.set_title(&self.hover_title(at)),
            ViewerEvent::PointerLeft => window.set_title(&self.title()),
            ViewerEvent::Click { button: MouseButton::Left, at } => {
                let descriptions = self.renderer.describe_at(at);
                match self.renderer.geometry().cell_at(at) {
                    Some((x, row)) => {
                        let y = self.renderer.geometry().flip_y(row);
                        log::info!("cell ({x}, {y}): {descriptions:?}");
                    }
                    None => log::info!("click outside the grid at ({}, {})", at.x, at.y),
                }
            }
            ViewerEvent::Click { .. } => {}
            ViewerEvent::KeyPressed(key) => match key {
                Key::Escape => return AppControl::Exit,
                Key::Space => {
                    let paused = self.pacer.toggle_pause();
                    log::info!("playback {}", if paused { "paused" } else { "resumed" });
                    window.set_title(&self.title());
                }
                Key::R => self.clear_view(),
                Key::ArrowLeft => self.step(-1),
                Key::ArrowRight => self.step(1),
                Key::Other => {}
            },
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let steps = self.pacer.advance(ctx.time.dt);
        if steps > 0 {
            self.step(steps as i64);
            ctx.window.set_title(&self.title());
        }

        self.refresh();
        let (width, height) = (self.raster.width(), self.raster.height());
        ctx.present(self.raster.data(), width, height, Color::white())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portray_grid::GridConfig;

    fn viewer(frames: usize) -> GridViewer {
        let renderer = GridRenderer::new(GridConfig::default()).unwrap();
        let frames = (0..frames).map(|_| Frame::new(Vec::new())).collect();
        GridViewer::new(renderer, FontSystem::new(), frames, Duration::from_millis(100)).unwrap()
    }

    #[test]
    fn steps_wrap_both_ways() {
        let mut v = viewer(3);
        v.step(-1);
        assert_eq!(v.index(), 2);
        v.step(2);
        assert_eq!(v.index(), 1);
    }

    #[test]
    fn stepping_ends_a_cleared_view() {
        let mut v = viewer(2);
        v.clear_view();
        v.refresh();
        assert_eq!(v.renderer.draw_list().len(), 1);
        v.step(1);
        v.refresh();
        assert_eq!(v.renderer.draw_list().len(), 2);
    }

    #[test]
    fn empty_playlist_does_not_panic() {
        let mut v = viewer(0);
        v.step(1);
        v.refresh();
        assert_eq!(v.title(), "portray | no frames");
    }
}
