//! Mouse interaction support.
//!
//! The renderer feeds every drawn entity into an [`InteractionHandler`]; the
//! host queries it for hover and click resolution.

use std::collections::HashMap;

use crate::portrayal::PortrayalEntity;

/// Collaborator told about every entity the renderer draws.
///
/// The lookup is reset once at the start of each layer, filled while the
/// layer is drawn, and the listeners are refreshed after it.
pub trait InteractionHandler {
    fn initialize_lookup(&mut self);

    /// `y` is the surface row (already flipped).
    fn record_entity(&mut self, x: i64, y: i64, index: usize);

    fn refresh_listeners(&mut self, layer: &[PortrayalEntity]);

    /// Descriptions of the entities under a surface cell.
    fn describe_cell(&self, x: i64, y: i64) -> Vec<String> {
        let _ = (x, y);
        Vec::new()
    }
}

/// Handler for hosts without interaction.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInteraction;

impl InteractionHandler for NoInteraction {
    fn initialize_lookup(&mut self) {}

    fn record_entity(&mut self, _x: i64, _y: i64, _index: usize) {}

    fn refresh_listeners(&mut self, _layer: &[PortrayalEntity]) {}
}

/// Cell → entity indices of the layer being drawn.
#[derive(Debug, Default, Clone)]
pub struct MouseoverLookup {
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl MouseoverLookup {
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn set(&mut self, x: i64, y: i64, index: usize) {
        self.cells.entry((x, y)).or_default().push(index);
    }

    pub fn get(&self, x: i64, y: i64) -> &[usize] {
        self.cells.get(&(x, y)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Hover lookup over the most recently drawn layer.
///
/// Every layer resets the lookup, so after a frame only the last layer's
/// entities are resolvable.
#[derive(Debug, Default, Clone)]
pub struct GridInteraction {
    lookup: MouseoverLookup,
    descriptions: HashMap<(i64, i64), Vec<String>>,
}

impl GridInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self) -> &MouseoverLookup {
        &self.lookup
    }
}

impl InteractionHandler for GridInteraction {
    fn initialize_lookup(&mut self) {
        self.lookup.clear();
    }

    fn record_entity(&mut self, x: i64, y: i64, index: usize) {
        self.lookup.set(x, y, index);
    }

    fn refresh_listeners(&mut self, layer: &[PortrayalEntity]) {
        self.descriptions = self
            .lookup
            .cells
            .iter()
            .map(|(cell, indices)| {
                let texts = indices
                    .iter()
                    .filter_map(|&i| layer.get(i))
                    .map(PortrayalEntity::describe)
                    .collect();
                (*cell, texts)
            })
            .collect();
    }

    fn describe_cell(&self, x: i64, y: i64) -> Vec<String> {
        self.descriptions.get(&(x, y)).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portrayal::ShapeTag;

    fn entity(tag: &str) -> PortrayalEntity {
        PortrayalEntity::new(ShapeTag::Tag(tag.into()), 0, 0)
    }

    #[test]
    fn lookup_keeps_every_index_per_cell() {
        let mut lookup = MouseoverLookup::default();
        lookup.set(1, 2, 0);
        lookup.set(1, 2, 3);
        assert_eq!(lookup.get(1, 2), &[0, 3]);
        assert!(lookup.get(0, 0).is_empty());
    }

    #[test]
    fn refresh_builds_descriptions_for_recorded_cells() {
        let layer = vec![entity("rect"), entity("circle")];
        let mut h = GridInteraction::new();
        h.initialize_lookup();
        h.record_entity(4, 5, 0);
        h.record_entity(4, 5, 1);
        h.refresh_listeners(&layer);
        assert_eq!(h.describe_cell(4, 5), vec!["rect".to_string(), "circle".to_string()]);
        assert!(h.describe_cell(0, 0).is_empty());
    }

    #[test]
    fn initialize_clears_previous_layer() {
        let mut h = GridInteraction::new();
        h.record_entity(1, 1, 0);
        h.initialize_lookup();
        assert!(h.lookup().is_empty());
    }

    #[test]
    fn no_interaction_describes_nothing() {
        let mut h = NoInteraction;
        h.initialize_lookup();
        h.record_entity(0, 0, 0);
        assert!(h.describe_cell(0, 0).is_empty());
    }
}
