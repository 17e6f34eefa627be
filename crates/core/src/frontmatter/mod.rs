//! YAML frontmatter parsing for markdown documents.
//!
//! Only splitting and parsing are needed here: the scan inspects frontmatter
//! values for link targets but never writes frontmatter back.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse};
pub use types::{Frontmatter, ParsedDocument};
