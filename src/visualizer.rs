//! Drawing surface lifecycle shared by all visualizers.

use crate::canvas::Canvas;
use crate::error::Result;

/// A component that renders onto a [`Canvas`].
pub trait Visualizer {
    /// The drawing surface.
    fn canvas(&self) -> &Canvas;

    /// Mutable access to the drawing surface.
    fn canvas_mut(&mut self) -> &mut Canvas;

    /// Final decoration after drawing (frame, legend, title).
    ///
    /// # Errors
    ///
    /// Implementations may fail if the canvas is in an unusable state.
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Finalize the figure and write it out when an output path is set.
    ///
    /// # Errors
    ///
    /// Returns an error if finalization, PNG encoding or file I/O fails.
    fn show(&mut self) -> Result<&Canvas> {
        self.finalize()?;

        let canvas = self.canvas();
        if let Some(path) = canvas.outpath() {
            tracing::debug!(path = %path.display(), "writing figure");
            canvas.save_png(path)?;
        }
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    struct Blank {
        canvas: Canvas,
        finalized: usize,
    }

    impl Visualizer for Blank {
        fn canvas(&self) -> &Canvas {
            &self.canvas
        }

        fn canvas_mut(&mut self) -> &mut Canvas {
            &mut self.canvas
        }

        fn finalize(&mut self) -> Result<()> {
            self.finalized += 1;
            self.canvas.set_pixel(0, 0, Rgba::BLACK);
            Ok(())
        }
    }

    #[test]
    fn test_show_finalizes_without_output() {
        let mut v = Blank { canvas: Canvas::new(10, 10).unwrap(), finalized: 0 };
        let canvas = v.show().unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(v.finalized, 1);
    }

    #[test]
    fn test_show_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        let mut v = Blank {
            canvas: Canvas::new(12, 8).unwrap().with_outpath(&path),
            finalized: 0,
        };

        v.show().unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_show_reports_io_errors() {
        let mut v = Blank {
            canvas: Canvas::new(4, 4).unwrap().with_outpath("/nonexistent/dir/figure.png"),
            finalized: 0,
        };
        assert!(v.show().is_err());
    }
}
