use super::{DrawCmd, ZIndex};

/// A single recorded draw: z-index, insertion order and command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
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

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { z, order, cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices
            .sort_by_key(|&i| (items[i].z, items[i].order));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect, Vec2};
    use crate::paint::Color;

    fn circle_at(list: &mut DrawList, z: i32, x: f32) {
        list.push_circle(ZIndex::new(z), Vec2::new(x, 0.0), 1.0, Color::transparent(), None);
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                DrawCmd::RoundedRect(r) => r.rect.origin.x,
            })
            .collect()
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        circle_at(&mut list, 0, 1.0);
        circle_at(&mut list, 0, 2.0);
        circle_at(&mut list, 0, 3.0);
        assert_eq!(xs(&mut list), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn higher_z_paints_last() {
        let mut list = DrawList::new();
        circle_at(&mut list, 5, 1.0);
        circle_at(&mut list, -1, 2.0);
        list.push_rounded_rect(
            ZIndex::new(0),
            Rect::new(3.0, 0.0, 1.0, 1.0),
            CornerRadii::all(0.0),
            Color::transparent(),
            None,
        );
        assert_eq!(xs(&mut list), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        circle_at(&mut list, 0, 1.0);
        list.clear();
        assert!(list.is_empty());
        circle_at(&mut list, 0, 9.0);
        assert_eq!(list.items()[0].order, 0);
        assert_eq!(xs(&mut list), vec![9.0]);
    }
}
