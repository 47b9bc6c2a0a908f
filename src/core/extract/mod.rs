//! Phase 2: Extraction - literal harvesting.
//!
//! Walks the units set aside in Phase 1 and harvests literals from two
//! sources:
//!
//! - usages of registered annotation types on the class
//!   (`@MyAnno(greeting = "Hi")`, `@MyAnno(tags = {"a", "b"})`);
//! - `static final String` constants carrying the localization marker.
//!
//! Disqualified candidates are skipped with a diagnostic; nothing here is
//! fatal.

mod unit_analyzer;


pub use unit_analyzer::LiteralExtractor;
