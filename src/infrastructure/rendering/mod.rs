pub mod canvas_surface;
pub mod renderer;
pub mod surface;

pub use canvas_surface::CanvasSurface;
pub use renderer::{RenderStats, Renderer};
pub use surface::DrawingSurface;
