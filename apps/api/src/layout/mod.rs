// Resume layout: font metrics, word wrap, and the pagination engine that
// turns a finalized record into positioned text blocks.

pub mod engine;
pub mod font_metrics;

// Re-export the public API consumed by other modules (handlers, export).
pub use engine::{layout_resume, PositionedBlock};
pub use font_metrics::{default_page_config, FontTier, PageConfig};
