//! Lumen UI: retained widgets on top of `lumen-engine`.
//!
//! Widgets live in a [`UiScene`](scene::UiScene) in registration order. Each
//! frame the scene hands the frame's [`FrameEvents`](lumen_engine::input::FrameEvents)
//! to every widget in that order (first registered wins a contested event),
//! then paints every widget into the scene's draw list.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lumen_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! ui.push(Slider::new(0.0, 1.0, Rect::new(20.0, 20.0, 200.0, 16.0))
//!     .on_change(|v| log::info!("volume {v}")));
//!
//! // In your App::on_frame:
//! let mut events = ctx.events();
//! let draw_list = ui.frame(&mut events);
//! // Pass draw_list to your renderer.
//! ```

pub mod event;
pub mod painter;
pub mod scene;
pub mod value;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend UI.
pub mod prelude {
    pub use crate::event::EventResult;
    pub use crate::painter::Painter;
    pub use crate::scene::{UiScene, WidgetId};
    pub use crate::value::ValueDomain;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::slider::{Slider, SliderStyle};

    // Engine primitives everyone needs.
    pub use lumen_engine::coords::{Rect, Vec2};
    pub use lumen_engine::input::{EventId, FrameEvents, MouseButton};
    pub use lumen_engine::paint::Color;
    pub use lumen_engine::scene::{Border, DrawList};
}
