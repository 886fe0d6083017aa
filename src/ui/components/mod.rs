//! Widgets shared by the terminal front-end.

/// Result panel drawing and row layout.
pub mod panel;
/// Scrollbar for overflowing row lists.
pub mod scrollbar;

pub use panel::{PanelContext, PanelFrame, render_panel};
pub use scrollbar::{point_in_rect, render_scrollbar};
