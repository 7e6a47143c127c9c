use lumen_engine::coords::{remap, Rect, Vec2};
use lumen_engine::input::{EventId, FrameEvents, MouseButton};
use lumen_engine::paint::Color;
use lumen_engine::scene::Border;

use crate::event::EventResult;
use crate::painter::Painter;
use crate::value::ValueDomain;
use crate::widget::Widget;

/// Visual attributes of a [`Slider`]. Read by paint only.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderStyle {
    pub track_height: f32,
    pub thumb_radius: f32,
    pub corner_radius: f32,
    pub track_color: Color,
    pub fill_color: Color,
    pub thumb_color: Color,
    pub thumb_border: Border,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_height: 4.0,
            thumb_radius: 8.0,
            corner_radius: 2.0,
            track_color: Color::from_straight(0.15, 0.2, 0.3, 1.0),
            fill_color: Color::from_straight(0.2, 0.6, 1.0, 1.0),
            thumb_color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            thumb_border: Border::new(2.0, Color::from_straight(0.4, 0.6, 0.9, 1.0)),
        }
    }
}

/// A horizontal slider over a [`ValueDomain`].
///
/// Dragging that starts inside the slider sets the value from the pointer's
/// x position, for as long as the button stays down, even once the pointer
/// leaves the track. Scrolling while hovered nudges the value by a fraction
/// of the span per line.
///
/// # Example
/// ```rust,ignore
/// Slider::new(0.0, 100.0, Rect::new(20.0, 20.0, 200.0, 16.0))
///     .fill_color(Color::from_straight(0.9, 0.5, 0.1, 1.0))
///     .on_change(|v| log::info!("speed: {v}"))
/// ```
pub struct Slider {
    domain: ValueDomain,
    rect: Rect,
    button: MouseButton,
    /// Fraction of the span added per scroll line.
    scroll_step: f32,
    style: SliderStyle,
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl Slider {
    pub const DEFAULT_SCROLL_STEP: f32 = 0.01;

    pub fn new(min: f32, max: f32, rect: Rect) -> Self {
        Self {
            domain: ValueDomain::new(min, max),
            rect,
            button: MouseButton::Left,
            scroll_step: Self::DEFAULT_SCROLL_STEP,
            style: SliderStyle::default(),
            on_change: None,
        }
    }

    /// Sets the starting value (saturated into the domain).
    pub fn value(mut self, v: f32) -> Self {
        self.domain.set(v);
        self
    }
    pub fn button(mut self, b: MouseButton) -> Self { self.button = b; self }
    pub fn scroll_step(mut self, v: f32) -> Self { self.scroll_step = v; self }
    pub fn style(mut self, s: SliderStyle) -> Self { self.style = s; self }
    pub fn track_color(mut self, c: Color) -> Self { self.style.track_color = c; self }
    pub fn fill_color(mut self, c: Color) -> Self { self.style.fill_color = c; self }
    pub fn thumb_color(mut self, c: Color) -> Self { self.style.thumb_color = c; self }

    /// Called after any update that changed the value.
    pub fn on_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.domain.get()
    }

    /// Programmatic write; saturates and does not fire `on_change`.
    #[inline]
    pub fn set(&mut self, v: f32) {
        self.domain.set(v);
    }

    #[inline]
    pub fn domain(&self) -> &ValueDomain {
        &self.domain
    }

    /// Maps a pointer x onto the domain. `None` for a zero-width rect.
    fn value_at(&self, x: f32) -> Option<f32> {
        let x0 = self.rect.origin.x;
        remap(x, x0, x0 + self.rect.size.x, self.domain.min(), self.domain.max())
    }

    /// Thumb centre x, kept on the track even if the value is not.
    fn thumb_x(&self) -> f32 {
        let x0 = self.rect.origin.x;
        let x1 = x0 + self.rect.size.x;
        remap(self.domain.get(), self.domain.min(), self.domain.max(), x0, x1)
            .unwrap_or(x0)
            .clamp(x0, x1.max(x0))
    }

    fn update_drag(&mut self, events: &mut FrameEvents) -> bool {
        let id = EventId::Drag(self.button);
        if events.is_consumed(id) {
            return false;
        }
        let Some(drag) = events.drag(self.button) else {
            return false;
        };
        let Some(start) = events.down_position(self.button) else {
            return false;
        };
        // Ownership is decided by where the drag began, not where the pointer is now.
        if !self.rect.contains_point(start) || !events.try_claim(id) {
            return false;
        }

        match self.value_at(drag.current.x) {
            Some(v) => self.domain.set(v),
            None => log::trace!("slider at {:?} has zero width; drag leaves value unchanged", self.rect),
        }
        true
    }

    fn update_scroll(&mut self, events: &mut FrameEvents) -> bool {
        let Some(pointer) = events.pointer() else {
            return false;
        };
        if !self.rect.contains_point(pointer) || events.is_consumed(EventId::Scroll) {
            return false;
        }
        let Some(scroll) = events.scroll() else {
            return false;
        };
        if !events.try_claim(EventId::Scroll) {
            return false;
        }

        let delta = self.domain.span() * self.scroll_step * scroll.delta.y;
        self.domain.set(self.domain.get() + delta);
        true
    }
}

impl Widget for Slider {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn update(&mut self, events: &mut FrameEvents) -> EventResult {
        let before = self.domain.get();

        // Drag before scroll, always.
        let dragged = self.update_drag(events);
        let scrolled = self.update_scroll(events);

        let after = self.domain.get();
        if after != before {
            log::debug!("slider {:?}: {before} -> {after}", self.rect.origin);
            if let Some(f) = &mut self.on_change {
                f(after);
            }
        }

        if dragged || scrolled { EventResult::Consumed } else { EventResult::Ignored }
    }

    fn paint(&self, painter: &mut Painter) {
        let s = &self.style;
        let rect = self.rect;
        let cy = rect.center().y;

        // Track
        let track = Rect::new(rect.origin.x, cy - s.track_height * 0.5, rect.size.x, s.track_height);
        painter.fill_rounded_rect(track, s.corner_radius, s.track_color, None);

        // Fill (left of thumb)
        let thumb_cx = self.thumb_x();
        let fill_w = thumb_cx - track.origin.x;
        if fill_w > 0.0 {
            let fill = Rect::new(track.origin.x, track.origin.y, fill_w, track.size.y);
            painter.fill_rounded_rect(fill, s.corner_radius, s.fill_color, None);
        }

        // Thumb
        let r = if painter.is_hovered(rect) { s.thumb_radius + 1.5 } else { s.thumb_radius };
        painter.fill_circle(Vec2::new(thumb_cx, cy), r, s.thumb_color, Some(s.thumb_border));
    }
}
