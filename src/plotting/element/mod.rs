//! Text helpers shared by the drawing backend and the axis renderer.

pub mod text;

pub use text::{escape_xml, format_label};
