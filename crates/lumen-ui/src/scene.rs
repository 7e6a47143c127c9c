use lumen_engine::coords::{Rect, Vec2};
use lumen_engine::input::FrameEvents;
use lumen_engine::scene::DrawList;

use crate::painter::Painter;
use crate::widget::Element;

/// Handle to a widget registered in a [`UiScene`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WidgetId(usize);

/// Ordered widget list plus the draw list it paints into.
///
/// Registration order is claim priority: during [`dispatch`](Self::dispatch)
/// earlier widgets see each event first. The whole update phase finishes
/// before anything is painted.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// ui.push(Slider::new(0.0, 1.0, rect));
///
/// // Once per frame:
/// let mut events = ctx.events();
/// let draw_list = ui.frame(&mut events);
/// renderer.render(draw_list);
/// ```
pub struct UiScene {
    widgets: Vec<Element>,
    /// Draw list populated by the most recent [`paint`](Self::paint).
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { widgets: Vec::new(), draw_list: DrawList::new() }
    }

    /// Registers a widget after every existing one.
    pub fn push(&mut self, widget: impl Into<Element>) -> WidgetId {
        self.widgets.push(widget.into());
        WidgetId(self.widgets.len() - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: WidgetId) -> Option<&Element> {
        self.widgets.get(id.0)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Element> {
        self.widgets.get_mut(id.0)
    }

    /// Layout hook: moves a widget. Returns `false` for an unknown id.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) -> bool {
        match self.widgets.get_mut(id.0) {
            Some(w) => {
                w.set_rect(rect);
                true
            }
            None => false,
        }
    }

    /// Update phase: offers `events` to every widget in registration order.
    ///
    /// Returns the widgets that claimed something, in order. Calling this
    /// again with the same `events` finds everything already claimed.
    pub fn dispatch(&mut self, events: &mut FrameEvents) -> Vec<WidgetId> {
        let mut claimed = Vec::new();
        for (i, widget) in self.widgets.iter_mut().enumerate() {
            if widget.update(events).is_consumed() {
                claimed.push(WidgetId(i));
            }
        }
        if !claimed.is_empty() {
            log::trace!("frame {}: claims by {:?}", events.frame_index(), claimed);
        }
        claimed
    }

    /// Paint phase: redraws every widget into [`draw_list`](Self::draw_list).
    pub fn paint(&mut self, pointer: Option<Vec2>) -> &mut DrawList {
        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list, pointer);
        for widget in &self.widgets {
            widget.paint(&mut painter);
        }
        &mut self.draw_list
    }

    /// One full frame: [`dispatch`](Self::dispatch) then [`paint`](Self::paint).
    pub fn frame(&mut self, events: &mut FrameEvents) -> &mut DrawList {
        self.dispatch(events);
        self.paint(events.pointer())
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use lumen_engine::input::{EventId, MouseButton};
    use lumen_engine::scene::DrawCmd;

    use crate::widgets::slider::Slider;

    const DRAG: EventId = EventId::Drag(MouseButton::Left);

    /// A slider that mirrors its value into a shared cell.
    fn tracked(min: f32, max: f32, rect: Rect) -> (Slider, Rc<Cell<Option<f32>>>) {
        let cell = Rc::new(Cell::new(None));
        let sink = cell.clone();
        (Slider::new(min, max, rect).on_change(move |v| sink.set(Some(v))), cell)
    }

    fn overlapping_pair() -> (UiScene, Rc<Cell<Option<f32>>>, Rc<Cell<Option<f32>>>) {
        let (a, a_val) = tracked(0.0, 1.0, Rect::new(0.0, 0.0, 100.0, 20.0));
        let (b, b_val) = tracked(0.0, 1.0, Rect::new(0.0, 0.0, 200.0, 20.0));
        let mut ui = UiScene::new();
        ui.push(a);
        ui.push(b);
        (ui, a_val, b_val)
    }

    #[test]
    fn first_registered_widget_wins_shared_drag() {
        let (mut ui, a_val, b_val) = overlapping_pair();
        let mut ev = FrameEvents::new(0)
            .with_pointer(Vec2::new(75.0, 10.0))
            .with_drag(MouseButton::Left, Vec2::new(50.0, 10.0));

        let claimed = ui.dispatch(&mut ev);

        assert_eq!(claimed.len(), 1);
        assert_eq!(a_val.get(), Some(0.75));
        assert_eq!(b_val.get(), None);
        assert!(ev.is_consumed(DRAG));
    }

    #[test]
    fn later_widget_gets_drag_outside_earlier_rect() {
        let (mut ui, a_val, b_val) = overlapping_pair();
        let mut ev = FrameEvents::new(0)
            .with_pointer(Vec2::new(50.0, 10.0))
            .with_drag(MouseButton::Left, Vec2::new(150.0, 10.0));

        ui.dispatch(&mut ev);

        assert_eq!(a_val.get(), None);
        assert_eq!(b_val.get(), Some(0.25));
    }

    #[test]
    fn scroll_goes_to_first_hovered_widget() {
        let (mut ui, a_val, b_val) = overlapping_pair();
        let mut ev = FrameEvents::new(0)
            .with_pointer(Vec2::new(50.0, 10.0))
            .with_scroll(Vec2::new(0.0, 10.0));

        ui.dispatch(&mut ev);

        assert!((a_val.get().unwrap() - 0.6).abs() < 1e-6);
        assert_eq!(b_val.get(), None);
    }

    #[test]
    fn drag_and_scroll_can_go_to_different_widgets() {
        let (a, a_val) = tracked(0.0, 1.0, Rect::new(0.0, 0.0, 100.0, 20.0));
        let (b, b_val) = tracked(0.0, 10.0, Rect::new(0.0, 40.0, 100.0, 20.0));
        let mut ui = UiScene::new();
        ui.push(a);
        ui.push(b);

        // Drag started in `a`, pointer now over `b`, wheel moved too.
        let mut ev = FrameEvents::new(0)
            .with_pointer(Vec2::new(20.0, 50.0))
            .with_drag(MouseButton::Left, Vec2::new(10.0, 10.0))
            .with_scroll(Vec2::new(0.0, 1.0));

        assert_eq!(ui.dispatch(&mut ev).len(), 2);
        assert_eq!(a_val.get(), Some(0.2));
        assert!((b_val.get().unwrap() - 5.1).abs() < 1e-6);
    }

    #[test]
    fn repeated_dispatch_in_one_frame_is_idempotent() {
        let (mut ui, a_val, b_val) = overlapping_pair();
        let mut ev = FrameEvents::new(3)
            .with_pointer(Vec2::new(75.0, 10.0))
            .with_drag(MouseButton::Left, Vec2::new(50.0, 10.0))
            .with_scroll(Vec2::new(0.0, 1.0));

        assert_eq!(ui.dispatch(&mut ev).len(), 1);
        a_val.set(None);
        b_val.set(None);

        assert!(ui.dispatch(&mut ev).is_empty());
        assert_eq!(a_val.get(), None);
        assert_eq!(b_val.get(), None);
    }

    #[test]
    fn set_rect_changes_hit_area() {
        let (mut ui, a_val, _) = overlapping_pair();
        let (c, c_val) = tracked(0.0, 1.0, Rect::new(0.0, 0.0, 100.0, 20.0));
        let id = ui.push(c);
        assert!(ui.set_rect(id, Rect::new(0.0, 100.0, 100.0, 20.0)));
        assert_eq!(ui.get(id).map(|w| w.rect()), Some(Rect::new(0.0, 100.0, 100.0, 20.0)));

        let mut ev = FrameEvents::new(0)
            .with_pointer(Vec2::new(40.0, 110.0))
            .with_drag(MouseButton::Left, Vec2::new(10.0, 110.0));
        ui.dispatch(&mut ev);

        assert_eq!(a_val.get(), None);
        assert_eq!(c_val.get(), Some(0.4));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut ui = UiScene::new();
        assert!(!ui.set_rect(WidgetId(4), Rect::default()));
        assert!(ui.get_mut(WidgetId(0)).is_none());
    }

    #[test]
    fn frame_paints_committed_values() {
        let mut ui = UiScene::new();
        ui.push(Slider::new(0.0, 1.0, Rect::new(0.0, 0.0, 100.0, 20.0)));
        let mut ev = FrameEvents::new(0)
            .with_pointer(Vec2::new(80.0, 10.0))
            .with_drag(MouseButton::Left, Vec2::new(50.0, 10.0));

        let list = ui.frame(&mut ev);

        let thumb_x = list
            .items()
            .iter()
            .find_map(|item| match &item.cmd {
                DrawCmd::Circle(c) => Some(c.center.x),
                _ => None,
            });
        assert_eq!(thumb_x, Some(80.0));
    }

    #[test]
    fn paint_replaces_previous_frame() {
        let mut ui = UiScene::new();
        ui.push(Slider::new(0.0, 1.0, Rect::new(0.0, 0.0, 100.0, 20.0)));
        let first = ui.paint(None).len();
        let second = ui.paint(None).len();
        assert_eq!(first, second);
    }
}
