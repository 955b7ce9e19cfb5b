use crate::domain::errors::RenderingResult;
use crate::domain::waveform::SurfaceMetrics;

/// Stroke-path drawing primitives the renderer needs from a surface.
///
/// Implementations report their size and stroke color once, at mount time.
pub trait DrawingSurface {
    fn metrics(&self) -> SurfaceMetrics;

    /// Clear the whole surface
    fn clear(&mut self);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Full circle of `radius` around `(x, y)` appended to the current path
    fn arc(&mut self, x: f64, y: f64, radius: f64) -> RenderingResult<()>;

    fn stroke(&mut self);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for Box<S> {
    fn metrics(&self) -> SurfaceMetrics {
        (**self).metrics()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> RenderingResult<()> {
        (**self).arc(x, y, radius)
    }

    fn stroke(&mut self) {
        (**self).stroke()
    }
}
