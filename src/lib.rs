//! jarloc - localizable literal extractor for JVM jars
//!
//! jarloc is a CLI tool and library that scans the compiled classes of a jar
//! for text marked as localizable and writes it to a versioned language key
//! file for translation.
//!
//! Two kinds of source are harvested:
//!
//! - `static final String` constants annotated with the localization marker;
//! - arguments of custom annotations whose methods carry the marker, wherever
//!   those annotations are applied to a class.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, prompt, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (decoding, two-phase extraction, key file I/O)
//! - `diagnostics`: Diagnostic types raised during extraction

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
