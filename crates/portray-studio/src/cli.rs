use std::path::PathBuf;

use clap::Parser;
use portray_grid::GridConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render grid portrayal frames", long_about = None)]
pub struct Cli {
    /// Frames file: one frame, a JSON array of frames, or one frame per line.
    /// An array is read as one frame unless it holds keyed frames or lists of layers
    pub frames: PathBuf,

    /// Directory PNG frames are written to
    #[arg(long, short, default_value = "frames")]
    pub out: PathBuf,

    /// Directory asset manifest paths are resolved against
    #[arg(long, default_value = portray_grid::DEFAULT_ASSET_ROOT)]
    pub assets: PathBuf,

    /// JSON asset manifest overriding the built-in file list
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    #[arg(long, default_value_t = 500.0)]
    pub canvas_width: f32,

    #[arg(long, default_value_t = 500.0)]
    pub canvas_height: f32,

    #[arg(long, default_value_t = 10)]
    pub grid_width: u32,

    #[arg(long, default_value_t = 10)]
    pub grid_height: u32,

    /// Draw cell boundaries over the frame
    #[arg(long)]
    pub grid_lines: bool,

    /// Regular TTF/OTF face for labels
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Bold face for hospital identifiers; falls back to the regular face
    #[arg(long)]
    pub bold_font: Option<PathBuf>,

    /// Play frames back in a window instead of writing PNGs
    #[arg(long)]
    pub window: bool,

    /// Playback step in window mode
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            grid_lines: self.grid_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_grid_defaults() {
        let cli = Cli::parse_from(["portray-studio", "frames.json"]);
        assert_eq!(cli.grid_config(), GridConfig::default());
        assert!(!cli.window);
        assert_eq!(cli.interval_ms, 500);
    }

    #[test]
    fn verbosity_counts_flags() {
        let cli = Cli::parse_from(["portray-studio", "-vv", "--grid-lines", "f.jsonl"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.grid_config().grid_lines);
    }
}
