//! Extraction engine.
//!
//! ## Module Structure
//!
//! - `unit`: Decoded compilation units (classes, fields, methods, annotations)
//! - `classfile`: JVM class-file decoder producing units
//! - `archive`: Jar enumeration
//! - `collect`: Phase 1, annotation-type registry
//! - `extract`: Phase 2, literal harvesting
//! - `dedup`: Content-keyed deduplication and numbering
//! - `keyfile`: Key file writer and reader
//! - `pipeline`: Orchestrates the phases

pub mod archive;
pub mod classfile;
pub mod collect;
pub mod data;
pub mod dedup;
pub mod extract;
pub mod keyfile;
pub mod pipeline;
pub mod unit;

pub use data::{LiteralRecord, OutputEntry};
pub use pipeline::{ExtractOptions, Extraction, extract_archive, extract_units};
