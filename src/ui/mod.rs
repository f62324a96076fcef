mod render;
mod scroll;
pub mod theme;

pub use render::{render_frame, welcome_banner};
pub use scroll::ensure_row_visible;
