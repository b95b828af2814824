//! Shape drawers.
//!
//! Each drawer turns one resolved entity into draw commands. Coordinates are
//! surface cells (row already flipped); pixel math goes through
//! [`GridGeometry`].

pub(crate) mod arrow;
pub(crate) mod circle;
pub(crate) mod grid_lines;
pub(crate) mod hospital;
pub(crate) mod rect;
pub(crate) mod sprite;

use portray_engine::bitmap::ImageStore;
use portray_engine::coords::Vec2;
use portray_engine::paint::{Color, ColorStop};
use portray_engine::scene::{DEFAULT_FONT_SIZE, DrawList, FontWeight, ZIndex};

use crate::assets::AssetTable;
use crate::error::{FrameReport, RenderIssue, Site};
use crate::geometry::GridGeometry;

/// Everything a drawer needs for one entity.
pub(crate) struct Painter<'a> {
    pub list: &'a mut DrawList,
    pub geometry: &'a GridGeometry,
    pub images: &'a ImageStore,
    pub assets: &'a AssetTable,
    pub report: &'a mut FrameReport,
    pub z: ZIndex,
    pub site: Site,
}

impl Painter<'_> {
    /// Parses a CSS color, reporting and substituting `fallback` on failure.
    pub fn color_or(&mut self, css: &str, fallback: Color) -> Color {
        match Color::from_css(css) {
            Some(c) => c,
            None => {
                self.report.push(RenderIssue::InvalidColor {
                    site: self.site,
                    reason: format!("unparsable color {css:?}"),
                });
                fallback
            }
        }
    }

    /// Parses a color list; unparsable entries become transparent so stop
    /// positions stay at `i / count`.
    pub fn palette(&mut self, colors: &[String]) -> Vec<Color> {
        colors
            .iter()
            .map(|c| self.color_or(c, Color::transparent()))
            .collect()
    }

    /// Optional centered label in the canvas default font.
    pub fn label(&mut self, label: Option<&Label>, center: Vec2) {
        if let Some(label) = label {
            self.list.fill_text(
                self.z,
                label.text.clone(),
                FontWeight::Regular,
                DEFAULT_FONT_SIZE,
                label.color,
                center,
            );
        }
    }
}

/// Resolved stroke and fill of a vector shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Style {
    pub colors: Vec<Color>,
    pub stroke: Color,
    pub filled: bool,
}

impl Style {
    /// Gradient stops at `i / count`; `None` when there is nothing to fill with.
    pub fn stops(&self) -> Option<Vec<ColorStop>> {
        (!self.colors.is_empty()).then(|| ColorStop::evenly_spaced(&self.colors))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Label {
    pub text: String,
    pub color: Color,
}
