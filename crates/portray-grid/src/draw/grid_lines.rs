use portray_engine::coords::Vec2;
use portray_engine::paint::Color;
use portray_engine::scene::{DrawList, Stroke, ZIndex};

use crate::geometry::GridGeometry;

/// Cell boundaries, shifted half a pixel so one-pixel lines stay crisp.
pub(crate) fn segments(g: &GridGeometry) -> Vec<(Vec2, Vec2)> {
    let max_x = g.cell_width() * g.grid_width() as f32;
    let max_y = g.cell_height() * g.grid_height() as f32;

    let rows = (0..=g.grid_height()).map(|i| {
        let y = i as f32 * g.cell_height() + 0.5;
        (Vec2::new(0.0, y), Vec2::new(max_x, y))
    });
    let cols = (0..=g.grid_width()).map(|i| {
        let x = i as f32 * g.cell_width() + 0.5;
        (Vec2::new(x, 0.0), Vec2::new(x, max_y))
    });
    rows.chain(cols).collect()
}

pub(crate) fn draw(list: &mut DrawList, g: &GridGeometry) {
    list.stroke_lines(ZIndex::OVERLAY, segments(g), Stroke::hairline(Color::from_rgb_hex(0xeeeeee)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn one_line_per_boundary() {
        let g = GridGeometry::new(&GridConfig::default()).unwrap();
        let segs = segments(&g);
        assert_eq!(segs.len(), 22);
        assert_eq!(segs[0], (Vec2::new(0.0, 0.5), Vec2::new(500.0, 0.5)));
        assert_eq!(segs[11], (Vec2::new(0.5, 0.0), Vec2::new(0.5, 500.0)));
    }
}
