//! The reference-resolution engine: extraction of link targets from document
//! text, resolution against the vault namespace, and aggregation into the set
//! of used attachment paths.

pub mod aggregator;
pub mod canvas;
pub mod document;
pub mod extractor;
pub mod resolver;
pub mod unused;

pub use aggregator::{ScanOutcome, collect_used_paths};
pub use canvas::{CanvasData, CanvasNode};
pub use document::{DocumentLinks, collect_canvas_links, collect_markdown_links};
pub use extractor::{LinkKind, LinkMatch, extract_links, path_is_image};
pub use resolver::LinkResolver;
pub use unused::{UnusedReport, compute_unused_attachments, find_unused};
