use serde::Deserialize;

/// Canvas and grid dimensions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Stroke cell boundaries after all layers.
    pub grid_lines: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 500.0,
            grid_width: 10,
            grid_height: 10,
            grid_lines: false,
        }
    }
}
