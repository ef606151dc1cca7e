//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::plotting::backend::SvgBackend;
use crate::plotting::error::PlotResult;
use crate::plotting::style::Color;

/// A fixed-size drawing surface that can be saved as an SVG file.
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    backend: SvgBackend,
}

impl Figure {
    /// Create a new figure with the given dimensions and a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_background(width, height, &Color::WHITE)
    }

    /// Create a figure painted with the given background color.
    pub fn with_background(width: f64, height: f64, background: &Color) -> Self {
        let mut backend = SvgBackend::new(width, height);
        if background.alpha() > 0.0 {
            backend.background(background);
        }
        Figure {
            width,
            height,
            backend,
        }
    }

    /// The drawing context of this figure.
    pub fn canvas(&mut self) -> &mut SvgBackend {
        &mut self.backend
    }

    /// Render the figure to an SVG string.
    pub fn render(&self) -> String {
        self.backend.render()
    }

    /// Save the figure to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render();
        let mut file = File::create(path.as_ref())?;
        file.write_all(svg.as_bytes())?;
        debug!(
            "Wrote {} SVG elements to {}",
            self.backend.elements().len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(900.0, 520.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_background_is_skipped() {
        let fig = Figure::with_background(10.0, 10.0, &Color::TRANSPARENT);
        assert!(!fig.render().contains("<rect"));
        let fig = Figure::new(10.0, 10.0);
        assert!(fig.render().contains("<rect width=\"10\" height=\"10\" fill=\"#ffffff\""));
    }
}
