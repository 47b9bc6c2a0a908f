//! Phase 1: Collection - annotation-type metadata.
//!
//! Every decoded unit passes through the [`RegistryCollector`]. Units that
//! declare an annotation type are scanned for methods carrying the
//! localization marker; all other units are set aside for Phase 2.
//!
//! Phase 2 (Extraction) only starts once every unit has been collected,
//! because a usage site may reference an annotation type that appears later
//! in the archive.

mod annotations;

pub use annotations::{AnnotationRegistry, RegistryCollector};
