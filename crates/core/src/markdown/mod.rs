//! Markup rendering and plain-text projection.

pub mod renderer;

pub use renderer::{plain_text, render_html};
