use std::collections::HashSet;
use std::path::Path;

use portray_engine::bitmap::{ImageId, ImageStore};
use portray_engine::coords::{Rect, Vec2};
use portray_engine::paint::Color;
use portray_engine::scene::{DrawList, ZIndex};

use crate::assets::{AssetManifest, AssetTable};
use crate::config::GridConfig;
use crate::draw::{self, Label, Painter, Style};
use crate::error::{FrameReport, GridError, RenderIssue, Site};
use crate::geometry::GridGeometry;
use crate::interaction::{InteractionHandler, NoInteraction};
use crate::portrayal::{Frame, PortrayalEntity};
use crate::shape::{Heading, ShapeKind};

/// Draws portrayal frames onto a [`DrawList`].
///
/// Layers are drawn in frame order, each at its own z-index above the
/// background; entities within a layer keep their order.
pub struct GridRenderer {
    config: GridConfig,
    geometry: GridGeometry,
    draw_list: DrawList,
    images: ImageStore,
    assets: AssetTable,
    interaction: Box<dyn InteractionHandler>,
    warned_tags: HashSet<String>,
}

impl GridRenderer {
    /// Creates a renderer whose assets are registered but still pending.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        Self::with_manifest(config, &AssetManifest::default())
    }

    pub fn with_manifest(config: GridConfig, manifest: &AssetManifest) -> Result<Self, GridError> {
        let geometry = GridGeometry::new(&config)?;
        let mut images = ImageStore::new();
        let assets = AssetTable::reserve(&mut images, manifest);

        let mut draw_list = DrawList::new();
        draw_list.reset();

        Ok(Self {
            config,
            geometry,
            draw_list,
            images,
            assets,
            interaction: Box::new(NoInteraction),
            warned_tags: HashSet::new(),
        })
    }

    /// Decodes every manifest asset under `root` into the reserved slots;
    /// returns how many became ready.
    pub fn load_assets(&mut self, root: &Path, manifest: &AssetManifest) -> usize {
        self.assets.load_into(&mut self.images, root, manifest)
    }

    /// Replaces the interaction collaborator.
    pub fn with_interaction(mut self, handler: Box<dyn InteractionHandler>) -> Self {
        self.interaction = handler;
        self
    }

    /// Draws a whole frame: clear, background, layers, optional grid lines.
    pub fn render(&mut self, frame: &Frame) -> FrameReport {
        let mut report = FrameReport { layers: frame.layers.len(), ..FrameReport::default() };

        self.reset_canvas();
        let surface = self.geometry.surface();
        self.draw_background(self.assets.background(), surface.width, surface.height, &mut report);

        for rejected in &frame.rejected {
            log::warn!("{}: malformed entity skipped: {}", rejected.site, rejected.reason);
            report.push(RenderIssue::MalformedEntity { site: rejected.site, reason: rejected.reason.clone() });
        }

        for (layer_index, layer) in frame.layers.iter().enumerate() {
            self.draw_layer(layer_index, layer, &mut report);
        }

        if self.config.grid_lines {
            draw::grid_lines::draw(&mut self.draw_list, &self.geometry);
        }

        log::debug!(
            "frame: {} layers, {} entities, {} commands, {} issues",
            report.layers,
            report.entities,
            self.draw_list.len(),
            report.issues.len()
        );
        report
    }

    /// Clears the surface without drawing anything.
    pub fn reset(&mut self) {
        self.reset_canvas();
    }

    /// Empties the command stream and records a full-surface clear.
    pub fn reset_canvas(&mut self) {
        self.draw_list.reset();
    }

    /// Stretches `image` over `(0, 0, width, height)`; a gray outline stands
    /// in while it is not ready.
    pub fn draw_background(&mut self, image: ImageId, width: f32, height: f32, report: &mut FrameReport) {
        let mut painter = Painter {
            list: &mut self.draw_list,
            geometry: &self.geometry,
            images: &self.images,
            assets: &self.assets,
            report,
            z: ZIndex::BACKGROUND,
            site: Site { layer: 0, index: 0 },
        };
        draw::sprite::image_or_placeholder(&mut painter, image, Rect::new(0.0, 0.0, width, height));
    }

    /// Draws one layer and refreshes the interaction handler with it.
    pub fn draw_layer(&mut self, layer_index: usize, layer: &[PortrayalEntity], report: &mut FrameReport) {
        self.interaction.initialize_lookup();

        for (index, entity) in layer.iter().enumerate() {
            if self.draw_entity(Site { layer: layer_index, index }, entity, report) {
                report.entities += 1;
            }
        }

        self.interaction.refresh_listeners(layer);
    }

    /// Returns whether anything was drawn for the entity.
    fn draw_entity(&mut self, site: Site, entity: &PortrayalEntity, report: &mut FrameReport) -> bool {
        let colors = entity.colors();
        let x = entity.x;
        let y = self.geometry.flip_y(entity.y);

        self.interaction.record_entity(x, y, site.index);

        if !self.geometry.contains(x, y) {
            report.push(RenderIssue::OutOfRangeCoordinate { site, x: entity.x, y: entity.y });
        }

        let kind = ShapeKind::classify(&entity.shape);
        if let ShapeKind::Unknown(tag) = &kind {
            if self.warned_tags.insert(tag.clone()) {
                log::warn!("unknown shape tag {tag:?}; drawing hospital glyph");
            }
            report.push(RenderIssue::InvalidShapeTag { site, tag: tag.clone() });
        }

        let mut p = Painter {
            list: &mut self.draw_list,
            geometry: &self.geometry,
            images: &self.images,
            assets: &self.assets,
            report,
            // Layer 0 sits just above the background.
            z: ZIndex::new(site.layer.min(i32::MAX as usize - 1) as i32),
            site,
        };

        let needs_style = matches!(kind, ShapeKind::Rect | ShapeKind::Circle | ShapeKind::ArrowHead);
        if needs_style && colors.is_empty() {
            p.report.push(RenderIssue::InvalidColor { site, reason: "no colors given".into() });
        }

        match kind {
            ShapeKind::Rect => {
                let style = resolve_style(&mut p, entity, &colors);
                let label = resolve_label(&mut p, entity);
                draw::rect::draw(&mut p, x, y, entity.w.unwrap_or(1.0), entity.h.unwrap_or(1.0), &style, label.as_ref());
            }
            ShapeKind::Circle => {
                let style = resolve_style(&mut p, entity, &colors);
                let label = resolve_label(&mut p, entity);
                draw::circle::draw(&mut p, x, y, entity.r.unwrap_or(1.0), &style, label.as_ref());
            }
            ShapeKind::ArrowHead => {
                let (hx, hy) = (entity.heading_x.unwrap_or(0.0), entity.heading_y.unwrap_or(0.0));
                let Some(heading) = Heading::from_components(hx, hy) else {
                    p.report.push(RenderIssue::UnsupportedHeading { site, heading_x: hx, heading_y: hy });
                    return false;
                };
                let style = resolve_style(&mut p, entity, &colors);
                let label = resolve_label(&mut p, entity);
                draw::arrow::draw(&mut p, x, y, heading, entity.scale.unwrap_or(1.0), &style, label.as_ref());
            }
            ShapeKind::Sprite(sprite) => {
                draw::sprite::draw(&mut p, x, y, sprite, entity.scale.unwrap_or(1.0));
            }
            ShapeKind::Hospital(shape_colors) => {
                let palette = p.palette(&shape_colors);
                draw_hospital(&mut p, entity, x, y, &palette);
            }
            ShapeKind::Unknown(_) => {
                let palette = p.palette(&colors);
                draw_hospital(&mut p, entity, x, y, &palette);
            }
        }
        true
    }

    /// Entity descriptions under a surface point, as recorded by the
    /// interaction handler for the last drawn layer.
    pub fn describe_at(&self, point: Vec2) -> Vec<String> {
        match self.geometry.cell_at(point) {
            Some((x, y)) => self.interaction.describe_cell(x, y),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    #[inline]
    pub fn images_mut(&mut self) -> &mut ImageStore {
        &mut self.images
    }

    #[inline]
    pub fn assets(&self) -> &AssetTable {
        &self.assets
    }

    /// Draw list and image store together, as a rasterizer needs them.
    pub fn surface_mut(&mut self) -> (&mut DrawList, &ImageStore) {
        (&mut self.draw_list, &self.images)
    }
}

fn resolve_style(p: &mut Painter<'_>, entity: &PortrayalEntity, colors: &[String]) -> Style {
    let palette = p.palette(colors);
    let stroke = match entity.stroke_color.as_deref().or(colors.first().map(String::as_str)) {
        Some(css) => p.color_or(css, Color::black()),
        None => Color::black(),
    };
    Style { colors: palette, stroke, filled: entity.filled }
}

fn resolve_label(p: &mut Painter<'_>, entity: &PortrayalEntity) -> Option<Label> {
    let text = entity.text.clone()?;
    let color = match entity.text_color.as_deref() {
        Some(css) => p.color_or(css, Color::black()),
        None => Color::black(),
    };
    Some(Label { text, color })
}

fn draw_hospital(p: &mut Painter<'_>, entity: &PortrayalEntity, x: i64, y: i64, palette: &[Color]) {
    draw::hospital::draw(
        p,
        x,
        y,
        entity.w.unwrap_or(1.0),
        entity.h.unwrap_or(1.0),
        palette,
        entity.matrix_index.as_deref(),
    );
}
