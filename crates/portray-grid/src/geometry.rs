use portray_engine::coords::{Rect, Vec2, Viewport};

use crate::config::GridConfig;
use crate::error::GridError;

/// Cell metrics derived once from the canvas and grid sizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridGeometry {
    surface: Viewport,
    grid_width: u32,
    grid_height: u32,
    cell_width: f32,
    cell_height: f32,
    max_inscribed_radius: f32,
}

impl GridGeometry {
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        let surface = Viewport::new(config.canvas_width, config.canvas_height);
        if !surface.is_valid() {
            return Err(GridError::InvalidCanvas {
                width: config.canvas_width,
                height: config.canvas_height,
            });
        }
        if config.grid_width == 0 || config.grid_height == 0 {
            return Err(GridError::InvalidGrid {
                width: config.grid_width,
                height: config.grid_height,
            });
        }

        let cell_width = surface.width / config.grid_width as f32;
        let cell_height = surface.height / config.grid_height as f32;

        Ok(Self {
            surface,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            cell_width,
            cell_height,
            max_inscribed_radius: cell_width.min(cell_height) / 2.0 - 1.0,
        })
    }

    #[inline]
    pub fn surface(&self) -> Viewport {
        self.surface
    }

    #[inline]
    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    #[inline]
    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Radius of the largest circle fitting a cell, minus one pixel.
    #[inline]
    pub fn max_inscribed_radius(&self) -> f32 {
        self.max_inscribed_radius
    }

    /// Model rows grow upwards; surface rows grow downwards. Saturates for
    /// rows far outside the grid.
    #[inline]
    pub fn flip_y(&self, y: i64) -> i64 {
        (self.grid_height as i64 - 1).saturating_sub(y)
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.grid_width as i64).contains(&x) && (0..self.grid_height as i64).contains(&y)
    }

    /// Center of a cell in surface pixels (row already flipped).
    pub fn cell_center(&self, x: i64, y: i64) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) * self.cell_width,
            (y as f32 + 0.5) * self.cell_height,
        )
    }

    /// Box of `w × h` cells centered in the cell.
    pub fn centered_box(&self, x: i64, y: i64, w: f32, h: f32) -> Rect {
        Rect::centered_at(
            self.cell_center(x, y),
            Vec2::new(w * self.cell_width, h * self.cell_height),
        )
    }

    /// Cell under a surface point, `None` outside the grid.
    pub fn cell_at(&self, p: Vec2) -> Option<(i64, i64)> {
        if !p.is_finite() || p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let x = (p.x / self.cell_width).floor() as i64;
        let y = (p.y / self.cell_height).floor() as i64;
        self.contains(x, y).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        GridGeometry::new(&GridConfig::default()).unwrap()
    }

    #[test]
    fn default_cells_are_fifty_pixels() {
        let g = geometry();
        assert_eq!(g.cell_width(), 50.0);
        assert_eq!(g.cell_height(), 50.0);
        assert_eq!(g.max_inscribed_radius(), 24.0);
    }

    #[test]
    fn flip_maps_bottom_row_to_last_surface_row() {
        let g = geometry();
        assert_eq!(g.flip_y(0), 9);
        assert_eq!(g.flip_y(9), 0);
    }

    #[test]
    fn flip_saturates_at_the_i64_limits() {
        let g = geometry();
        assert_eq!(g.flip_y(i64::MIN), i64::MAX);
        assert_eq!(g.flip_y(i64::MAX), 9 - i64::MAX);
        assert!(!g.contains(0, g.flip_y(i64::MIN)));
    }

    #[test]
    fn centered_box_formula() {
        let g = geometry();
        let r = g.centered_box(2, 9, 0.5, 0.5);
        assert_eq!(r, Rect::new(112.5, 462.5, 25.0, 25.0));
    }

    #[test]
    fn non_square_cells() {
        let cfg = GridConfig { canvas_width: 300.0, canvas_height: 100.0, grid_width: 3, grid_height: 2, ..GridConfig::default() };
        let g = GridGeometry::new(&cfg).unwrap();
        assert_eq!((g.cell_width(), g.cell_height()), (100.0, 50.0));
        assert_eq!(g.max_inscribed_radius(), 24.0);
    }

    #[test]
    fn cell_lookup_from_surface_point() {
        let g = geometry();
        assert_eq!(g.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(g.cell_at(Vec2::new(499.0, 251.0)), Some((9, 5)));
        assert_eq!(g.cell_at(Vec2::new(500.0, 10.0)), None);
        assert_eq!(g.cell_at(Vec2::new(-1.0, 10.0)), None);
    }

    #[test]
    fn rejects_degenerate_config() {
        let zero_grid = GridConfig { grid_width: 0, ..GridConfig::default() };
        assert!(matches!(GridGeometry::new(&zero_grid), Err(GridError::InvalidGrid { .. })));
        let zero_canvas = GridConfig { canvas_height: 0.0, ..GridConfig::default() };
        assert!(matches!(GridGeometry::new(&zero_canvas), Err(GridError::InvalidCanvas { .. })));
    }
}
