use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use portray_engine::bitmap::{ImageId, ImageStore};
use serde::Deserialize;

use crate::shape::SpriteKind;

/// Default location of the stock pictures when served by the model server.
pub const DEFAULT_ASSET_ROOT: &str = "/static/pictures/";

/// File names of the sprite pictures and the background, relative to an
/// asset root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub sprites: BTreeMap<SpriteKind, PathBuf>,
    pub background: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            sprites: SpriteKind::ALL
                .into_iter()
                .map(|k| (k, PathBuf::from(k.default_file_name())))
                .collect(),
            background: PathBuf::from("backGroundMap.jpg"),
        }
    }
}

impl AssetManifest {
    /// Reads a JSON manifest; missing entries keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut manifest: AssetManifest = serde_json::from_str(json)?;
        for (kind, path) in AssetManifest::default().sprites {
            manifest.sprites.entry(kind).or_insert(path);
        }
        Ok(manifest)
    }
}

/// Image handles for every sprite kind plus the background.
///
/// Slots are registered up front; their state (pending, ready, failed) lives
/// in the [`ImageStore`].
#[derive(Debug, Clone)]
pub struct AssetTable {
    sprites: HashMap<SpriteKind, ImageId>,
    background: ImageId,
}

impl AssetTable {
    /// Registers pending slots for every asset in `manifest`.
    pub fn reserve(store: &mut ImageStore, manifest: &AssetManifest) -> Self {
        let sprites = SpriteKind::ALL
            .into_iter()
            .map(|kind| {
                let label = manifest
                    .sprites
                    .get(&kind)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| kind.tag().to_string());
                (kind, store.reserve(label))
            })
            .collect();
        let background = store.reserve(manifest.background.display().to_string());

        Self { sprites, background }
    }

    /// Registers and decodes every asset under `root`.
    pub fn load(store: &mut ImageStore, root: &Path, manifest: &AssetManifest) -> Self {
        let table = Self::reserve(store, manifest);
        let ready = table.load_into(store, root, manifest);
        log::info!("loaded {ready}/{} assets from {}", SpriteKind::ALL.len() + 1, root.display());
        table
    }

    /// Decodes every asset under `root` into this table's slots. Failures are
    /// recorded per slot. Returns the number of slots now ready.
    pub fn load_into(&self, store: &mut ImageStore, root: &Path, manifest: &AssetManifest) -> usize {
        let mut ready = 0;
        for (kind, id) in &self.sprites {
            match manifest.sprites.get(kind) {
                Some(rel) => ready += store.load_file_into(*id, &root.join(rel)) as usize,
                None => {
                    store.fail(*id, format!("no manifest entry for {}", kind.tag()));
                }
            }
        }
        ready += store.load_file_into(self.background, &root.join(&manifest.background)) as usize;
        ready
    }

    pub fn sprite(&self, kind: SpriteKind) -> Option<ImageId> {
        self.sprites.get(&kind).copied()
    }

    #[inline]
    pub fn background(&self) -> ImageId {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portray_engine::bitmap::{Bitmap, ImageState};

    #[test]
    fn default_manifest_matches_stock_pictures() {
        let m = AssetManifest::default();
        assert_eq!(m.sprites.len(), 8);
        assert_eq!(m.sprites[&SpriteKind::DroneEmptySafe], PathBuf::from("100_drone_empty_safe.png"));
        assert_eq!(m.background, PathBuf::from("backGroundMap.jpg"));
    }

    #[test]
    fn partial_json_manifest_keeps_defaults() {
        let m = AssetManifest::from_json(r#"{"background":"map.png","sprites":{"car_empty_fast":"c.png"}}"#).unwrap();
        assert_eq!(m.background, PathBuf::from("map.png"));
        assert_eq!(m.sprites[&SpriteKind::CarEmptyFast], PathBuf::from("c.png"));
        assert_eq!(m.sprites[&SpriteKind::CarFilledFast], PathBuf::from("100_car_filled_fast.png"));
    }

    #[test]
    fn reserved_table_is_pending() {
        let mut store = ImageStore::new();
        let table = AssetTable::reserve(&mut store, &AssetManifest::default());
        assert_eq!(store.len(), 9);
        let id = table.sprite(SpriteKind::CarFilledSafe).unwrap();
        assert_eq!(store.state(id), Some(&ImageState::Pending));
        assert_eq!(store.label(table.background()), Some("backGroundMap.jpg"));

        assert!(store.fulfil(id, Bitmap::solid(1, 1, [0, 0, 0, 255]).unwrap()));
        assert!(store.ready(id).is_some());
    }

    #[test]
    fn missing_root_marks_every_slot_failed() {
        let mut store = ImageStore::new();
        let table = AssetTable::load(&mut store, Path::new("/nonexistent/portray"), &AssetManifest::default());
        assert!(matches!(store.state(table.background()), Some(ImageState::Failed(_))));
        for kind in SpriteKind::ALL {
            let id = table.sprite(kind).unwrap();
            assert!(matches!(store.state(id), Some(ImageState::Failed(_))));
        }
    }
}
