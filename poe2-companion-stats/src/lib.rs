//! Stat-normalization pipeline: turns one scraped modifier line into a typed,
//! numeric-valued record.
//!
//! The pipeline consults the trade site's own cached stat dataset (the
//! [`catalog`]), parses the modifier's tag fragment ([`tag_parser`]), and
//! recovers the realized roll from the rendered text by compiling the
//! dataset template into a one-shot matching pattern ([`extractor`]).
//! [`normalizer`] ties the three together.

pub mod catalog;
pub mod extractor;
pub mod normalizer;
pub mod skill;
pub mod tag_parser;

pub use catalog::StatCatalog;
pub use extractor::{CompiledTemplate, extract_values};
pub use normalizer::{RawModifier, normalize};
pub use skill::parse_skill;
pub use tag_parser::{ParsedTag, parse_tag_text};
