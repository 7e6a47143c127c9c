/// Result returned by [`Widget::update`](crate::widget::Widget::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget claimed at least one of the frame's events.
    Consumed,
    /// The widget left every event for later widgets.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
