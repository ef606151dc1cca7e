//! Minimal plotting layer
//! Immediate-mode 2D canvas interface with SVG output.

pub mod backend;
pub mod element;
pub mod error;
pub mod figure;
pub mod style;

pub use backend::{Canvas2d, SvgBackend};
pub use error::{InvalidInput, PlotError, PlotResult};
pub use figure::Figure;
pub use style::{Color, FillStyle, LineStyle, MarkerStyle, TextAnchor, TextStyle};

