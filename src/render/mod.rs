//! Legend rendering with pluggable drawing surfaces.
//!
//! This module provides:
//! - The surface-agnostic [`DrawSurface`] trait
//! - The Canvas 2D surface (primary)
//! - A headless recording surface for tests and debugging
//! - Entry generation and the legend layout engine

pub mod backend;
pub mod canvas;
pub mod legend;
pub mod recording;

// Re-export commonly used types
pub use backend::DrawSurface;
pub use canvas::CanvasSurface;
pub use legend::{generate_entries, LegendRenderer};
pub use recording::{DrawOp, RecordingSurface};
