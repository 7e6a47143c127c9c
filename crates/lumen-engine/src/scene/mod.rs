//! Scene (draw stream) types.
//!
//! Widgets record renderer-agnostic commands here; a GPU backend walks the
//! list in paint order. Ordering is z-index first, then insertion order.

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::{Border, CircleCmd, RoundedRectCmd};
pub use z_index::ZIndex;
