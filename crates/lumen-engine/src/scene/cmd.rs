use crate::scene::shapes::{CircleCmd, RoundedRectCmd};

/// Renderer-agnostic draw command.
///
/// New shapes get a payload module under `scene::shapes` and a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
}
