//! Canvas 2D backend.

mod surface;

pub use surface::CanvasSurface;
