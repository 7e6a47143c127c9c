use lumen_engine::coords::Rect;
use lumen_engine::input::FrameEvents;

use crate::event::EventResult;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every interactive component implements.
///
/// A frame runs in two phases: [`update`](Widget::update) for every widget in
/// registration order, then [`paint`](Widget::paint) for every widget. Paint
/// only sees committed state; it has no access to the frame's events.
pub trait Widget: 'static {
    /// Screen-space rectangle this widget occupies and hit-tests against.
    fn rect(&self) -> Rect;

    /// Moves / resizes the widget. Called by layout code between frames.
    fn set_rect(&mut self, rect: Rect);

    /// Reacts to this frame's input.
    ///
    /// Claim an event with [`FrameEvents::try_claim`] before acting on it; an
    /// event already claimed by an earlier widget must be left alone.
    /// The default implementation ignores everything.
    fn update(&mut self, _events: &mut FrameEvents) -> EventResult {
        EventResult::Ignored
    }

    /// Draws this widget inside [`rect`](Widget::rect).
    fn paint(&self, painter: &mut Painter);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the unit a [`UiScene`](crate::scene::UiScene) stores.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.0.rect()
    }

    #[inline]
    pub fn set_rect(&mut self, rect: Rect) {
        self.0.set_rect(rect)
    }

    #[inline]
    pub fn update(&mut self, events: &mut FrameEvents) -> EventResult {
        self.0.update(events)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter) {
        self.0.paint(painter)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
