//! Presentation layer: panels, charts, and tables over the data core.

pub mod panels;
pub mod plot;
pub mod table;
