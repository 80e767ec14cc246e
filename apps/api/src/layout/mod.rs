// Layout engine: static font metrics, greedy word wrap, page flow, and the résumé
// composer that turns a record into positioned text blocks.
// Composition is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod resume;
pub mod wrap;

// Re-export the public API consumed by export and the handlers.
pub use flow::Document;
pub use font_metrics::{default_page_config, FontFamily, PageConfig};
pub use resume::compose_resume;
