use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
///
/// The list is rebuilt from scratch every frame via [`clear`]; there is no
/// incremental or retained state between frames.
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

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
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

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
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
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn line_at(x: f32) -> DrawCmd {
        DrawCmd::Line(crate::scene::LineCmd::new(
            Vec2::new(x, 0.0),
            Vec2::new(x, 1.0),
            1.0,
            Color::WHITE,
        ))
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(5), line_at(0.0));
        list.push(ZIndex::new(1), line_at(1.0));

        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.items()[1].key.order, 1);
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(2), line_at(0.0));
        list.push(ZIndex::new(0), line_at(1.0));
        list.push(ZIndex::new(0), line_at(2.0));

        let keys: Vec<_> = list.iter_in_paint_order().map(|i| i.key).collect();
        assert_eq!(keys[0], SortKey::new(ZIndex::new(0), 1));
        assert_eq!(keys[1], SortKey::new(ZIndex::new(0), 2));
        assert_eq!(keys[2], SortKey::new(ZIndex::new(2), 0));
    }

    #[test]
    fn clear_resets_order_counter() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), line_at(0.0));
        list.clear();
        assert!(list.is_empty());

        list.push(ZIndex::new(0), line_at(1.0));
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn push_after_iteration_is_picked_up() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), line_at(0.0));
        assert_eq!(list.iter_in_paint_order().count(), 1);

        list.push(ZIndex::new(1), line_at(1.0));
        assert_eq!(list.iter_in_paint_order().count(), 2);
    }
}
