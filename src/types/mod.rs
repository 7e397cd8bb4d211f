//! Data types for the legend subsystem.

mod legend;
mod series;

pub use legend::*;
pub use series::*;
