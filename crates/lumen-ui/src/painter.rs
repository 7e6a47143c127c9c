use lumen_engine::coords::{CornerRadii, Rect, Vec2};
use lumen_engine::paint::Color;
use lumen_engine::scene::{Border, DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a small high-level API. Each call gets
/// the next z-index, so later draws land on top of earlier ones.
///
/// The pointer position is exposed for hover visuals. Input events are not:
/// painting must not change what the update phase decided.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
    /// Current pointer position in logical pixels, if over the surface.
    pub pointer: Option<Vec2>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, pointer: Option<Vec2>) -> Self {
        Self { draw_list, z: 0, pointer }
    }

    /// Returns `true` if the pointer is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|p| rect.contains_point(p))
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle with optional border.
    ///
    /// Pass `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: Color,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius), color, border);
    }

    /// Circle with optional border.
    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color, border);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
