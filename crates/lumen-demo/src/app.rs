use std::cell::RefCell;
use std::rc::Rc;

use lumen_engine::coords::{Rect, Viewport};
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::paint::Color;
use lumen_ui::prelude::{Slider, UiScene, WidgetId};

/// Tunables of the starfield scene, driven by the control panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldParams {
    pub speed: f32,
    pub density: f32,
    pub fov: f32,
}

/// Panel geometry, in logical pixels from the top-left corner.
pub const PANEL_X: f32 = 24.0;
pub const PANEL_Y: f32 = 24.0;
pub const ROW_WIDTH: f32 = 240.0;
pub const ROW_HEIGHT: f32 = 20.0;
pub const ROW_GAP: f32 = 16.0;

/// Rect of the `row`-th slider in the panel.
pub fn row_rect(row: usize) -> Rect {
    let y = PANEL_Y + row as f32 * (ROW_HEIGHT + ROW_GAP);
    Rect::new(PANEL_X, y, ROW_WIDTH, ROW_HEIGHT)
}

/// Control panel for the starfield demo: one slider per parameter.
pub struct StarfieldPanel {
    ui: UiScene,
    rows: Vec<WidgetId>,
    params: Rc<RefCell<StarfieldParams>>,
    painted: usize,
}

impl StarfieldPanel {
    pub fn new() -> Self {
        let speed = Slider::new(0.0, 10.0, row_rect(0));
        let density = Slider::new(0.0, 1.0, row_rect(1))
            .fill_color(Color::from_straight(0.9, 0.8, 0.3, 1.0));
        let fov = Slider::new(30.0, 120.0, row_rect(2))
            .fill_color(Color::from_straight(0.5, 0.9, 0.6, 1.0));

        let params = Rc::new(RefCell::new(StarfieldParams {
            speed: speed.get(),
            density: density.get(),
            fov: fov.get(),
        }));

        let mut ui = UiScene::new();
        let rows = vec![
            ui.push(speed.on_change(bind(params.clone(), |p, v| p.speed = v))),
            ui.push(density.on_change(bind(params.clone(), |p, v| p.density = v))),
            ui.push(fov.on_change(bind(params.clone(), |p, v| p.fov = v))),
        ];

        Self { ui, rows, params, painted: 0 }
    }

    pub fn params(&self) -> StarfieldParams {
        self.params.borrow().clone()
    }

    /// Draw commands recorded by the last frame.
    pub fn painted(&self) -> usize {
        self.painted
    }
}

impl Default for StarfieldPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn bind(
    params: Rc<RefCell<StarfieldParams>>,
    apply: fn(&mut StarfieldParams, f32),
) -> impl FnMut(f32) + 'static {
    move |v| apply(&mut params.borrow_mut(), v)
}

impl App for StarfieldPanel {
    fn on_start(&mut self, viewport: Viewport) {
        // Keep the panel on screen for narrow viewports.
        let width = ROW_WIDTH.min(viewport.width - 2.0 * PANEL_X).max(0.0);
        for (row, id) in self.rows.iter().enumerate() {
            let mut rect = row_rect(row);
            rect.size.x = width;
            self.ui.set_rect(*id, rect);
        }
        log::info!("panel laid out for {}x{}", viewport.width, viewport.height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let mut events = ctx.events();

        let claimed = self.ui.dispatch(&mut events);
        if !claimed.is_empty() {
            log::debug!("frame {}: {:?}", ctx.time.frame_index, self.params.borrow());
        }

        self.painted = self.ui.paint(events.pointer()).len();
        AppControl::Continue
    }
}
