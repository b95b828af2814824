use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portray_engine::raster::Rasterizer;
use portray_engine::text::FontSystem;
use portray_grid::{Frame, GridRenderer};

pub fn frame_path(out_dir: &Path, index: usize) -> PathBuf {
    out_dir.join(format!("frame_{index:05}.png"))
}

/// Renders every frame and writes it as a PNG into `out_dir`. Returns the
/// number of frames written.
pub fn export_frames(
    renderer: &mut GridRenderer,
    fonts: &FontSystem,
    frames: &[Frame],
    out_dir: &Path,
) -> Result<usize> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut raster = Rasterizer::new(renderer.geometry().surface())?;
    for (index, frame) in frames.iter().enumerate() {
        let report = renderer.render(frame);
        for issue in &report.issues {
            log::warn!("frame {index}: {issue}");
        }

        let (list, images) = renderer.surface_mut();
        raster.render(list, images, fonts);

        let path = frame_path(out_dir, index);
        raster.save_png(&path)?;
        log::info!("wrote {} ({} entities drawn, {} issues)", path.display(), report.entities, report.issues.len());
    }
    Ok(frames.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_path(Path::new("out"), 7), Path::new("out/frame_00007.png"));
    }
}
