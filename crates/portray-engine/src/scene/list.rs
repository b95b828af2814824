use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame. This is the drawing surface the grid
/// renderer paints into; backends replay it.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every recorded item. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Erases the surface: drops every recorded item and records a single
    /// [`DrawCmd::Clear`], so a replay starts from a blank surface with no
    /// residual state.
    pub fn reset(&mut self) {
        self.clear();
        self.push(ZIndex::BACKGROUND, DrawCmd::Clear);
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Commands in paint order, collected. Convenient for inspection and tests.
    pub fn commands_in_paint_order(&mut self) -> Vec<&DrawCmd> {
        self.iter_in_paint_order().map(|item| &item.cmd).collect()
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn reset_leaves_only_clear() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(3), DrawCmd::SetFillStyle(vec![Color::black()]));
        list.reset();
        assert_eq!(list.commands_in_paint_order(), vec![&DrawCmd::Clear]);
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(2), DrawCmd::SetFillStyle(vec![Color::white()]));
        list.push(ZIndex::new(1), DrawCmd::SetFillStyle(vec![Color::black()]));
        list.push(ZIndex::new(1), DrawCmd::Clear);

        let cmds = list.commands_in_paint_order();
        assert_eq!(cmds[0], &DrawCmd::SetFillStyle(vec![Color::black()]));
        assert_eq!(cmds[1], &DrawCmd::Clear);
        assert_eq!(cmds[2], &DrawCmd::SetFillStyle(vec![Color::white()]));
    }
}
