use std::path::Path;

use super::{decode_file, Bitmap};

/// Opaque handle to an image slot in an [`ImageStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub(crate) usize);

/// Load state of one image.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    /// Registered, pixels not available yet.
    Pending,
    Ready(Bitmap),
    /// Loading failed; the reason is kept for diagnostics.
    Failed(String),
}

impl ImageState {
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, ImageState::Ready(_))
    }
}

#[derive(Debug)]
struct ImageSlot {
    label: String,
    state: ImageState,
}

/// Owns every image the scene can reference.
///
/// Handles stay valid for the store's lifetime; slots change state but are
/// never removed.
#[derive(Debug, Default)]
pub struct ImageStore {
    slots: Vec<ImageSlot>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a slot whose pixels will arrive later via [`fulfil`](Self::fulfil).
    pub fn reserve(&mut self, label: impl Into<String>) -> ImageId {
        self.push(label.into(), ImageState::Pending)
    }

    /// Registers an already decoded image.
    pub fn insert(&mut self, label: impl Into<String>, bitmap: Bitmap) -> ImageId {
        self.push(label.into(), ImageState::Ready(bitmap))
    }

    /// Reads and decodes `path` into a new slot.
    ///
    /// Failure is recorded in the slot (and logged) rather than returned, so a
    /// missing asset never prevents the rest of the table from loading.
    pub fn load_file(&mut self, path: &Path) -> ImageId {
        let state = load_state(path);
        self.push(path.display().to_string(), state)
    }

    /// Decodes `path` into an existing slot, typically a reserved one.
    /// Returns whether the slot ended up `Ready`.
    pub fn load_file_into(&mut self, id: ImageId, path: &Path) -> bool {
        self.set_state(id, load_state(path)) && self.ready(id).is_some()
    }

    /// Supplies pixels for a slot. Returns false for an unknown handle.
    pub fn fulfil(&mut self, id: ImageId, bitmap: Bitmap) -> bool {
        self.set_state(id, ImageState::Ready(bitmap))
    }

    /// Marks a slot as failed. Returns false for an unknown handle.
    pub fn fail(&mut self, id: ImageId, reason: impl Into<String>) -> bool {
        self.set_state(id, ImageState::Failed(reason.into()))
    }

    pub fn state(&self, id: ImageId) -> Option<&ImageState> {
        self.slots.get(id.0).map(|s| &s.state)
    }

    /// Pixels of a `Ready` slot.
    pub fn ready(&self, id: ImageId) -> Option<&Bitmap> {
        match self.state(id)? {
            ImageState::Ready(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    pub fn label(&self, id: ImageId) -> Option<&str> {
        self.slots.get(id.0).map(|s| s.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn push(&mut self, label: String, state: ImageState) -> ImageId {
        let id = ImageId(self.slots.len());
        self.slots.push(ImageSlot { label, state });
        id
    }

    fn set_state(&mut self, id: ImageId, state: ImageState) -> bool {
        match self.slots.get_mut(id.0) {
            Some(slot) => {
                slot.state = state;
                true
            }
            None => false,
        }
    }
}

fn load_state(path: &Path) -> ImageState {
    match decode_file(path) {
        Ok(bitmap) => {
            log::debug!("loaded image {} ({}x{})", path.display(), bitmap.width(), bitmap.height());
            ImageState::Ready(bitmap)
        }
        Err(e) => {
            log::warn!("{e}");
            ImageState::Failed(e.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> Bitmap {
        Bitmap::solid(1, 1, [255, 0, 0, 255]).unwrap()
    }

    #[test]
    fn reserved_slot_is_pending_until_fulfilled() {
        let mut store = ImageStore::new();
        let id = store.reserve("drone");
        assert_eq!(store.state(id), Some(&ImageState::Pending));
        assert!(store.ready(id).is_none());

        assert!(store.fulfil(id, pixel()));
        assert!(store.ready(id).is_some());
    }

    #[test]
    fn failed_load_is_recorded_not_returned() {
        let mut store = ImageStore::new();
        let id = store.load_file(Path::new("/nonexistent/portray/bg.jpg"));
        assert!(matches!(store.state(id), Some(ImageState::Failed(_))));
        assert_eq!(store.label(id), Some("/nonexistent/portray/bg.jpg"));
    }

    #[test]
    fn unknown_handle_is_rejected() {
        let mut store = ImageStore::new();
        assert!(!store.fulfil(ImageId(7), pixel()));
        assert!(store.state(ImageId(7)).is_none());
    }
}
