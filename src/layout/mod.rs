//! Layout collaborators: viewport geometry and dimension measurement.

mod measure;
mod viewport;

pub use measure::{BasicMeasurer, LegendMeasurer, TextMeasurer};
pub use viewport::ViewportHandler;
