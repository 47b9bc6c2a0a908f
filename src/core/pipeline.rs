use std::path::Path;

use anyhow::Result;

use crate::core::{
    archive::ClassArchive,
    collect::RegistryCollector,
    data::OutputEntry,
    dedup::deduplicate,
    extract::LiteralExtractor,
    unit::Unit,
};
use crate::diagnostics::Diagnostic;

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Descriptor of the localization marker annotation.
    pub marker: String,
    /// Glob patterns of archive entries to skip.
    pub ignores: Vec<String>,
    /// Only harvest usage arguments that are registered localizable methods.
    pub strict_arguments: bool,
}

impl ExtractOptions {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            ignores: Vec::new(),
            strict_arguments: false,
        }
    }
}

/// Result of running the pipeline.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Number of literals harvested before deduplication.
    pub literal_count: usize,
    /// Kept entries, numbered from 0 in discovery order.
    pub entries: Vec<OutputEntry>,
    /// Every diagnostic, in the order it was raised.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of `.class` entries visited (archive runs only).
    pub units_scanned: usize,
}

impl Extraction {
    pub fn duplicate_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_duplicate()).count()
    }
}

/// Run the pipeline over already-decoded units.
///
/// # Pipeline
///
/// 1. **Phase 1: Collection** → annotation registry + queue of other units
/// 2. **Phase 2: Extraction** → literal records in discovery order
/// 3. **Deduplication** → numbered output entries
pub fn extract_units<I>(units: I, options: &ExtractOptions) -> Extraction
where
    I: IntoIterator<Item = Unit>,
{
    let mut collector = RegistryCollector::new(options.marker.as_str());
    let mut units_scanned = 0;
    for unit in units {
        units_scanned += 1;
        collector.collect(unit);
    }
    finish(collector, options, Vec::new(), units_scanned)
}

/// Run the pipeline over the `.class` entries of a jar.
///
/// Entries that fail to decode are reported as diagnostics and skipped.
/// Failing to open or read the archive is an error.
pub fn extract_archive(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let mut archive = ClassArchive::open(path)?.with_ignores(&options.ignores)?;

    let mut collector = RegistryCollector::new(options.marker.as_str());
    let mut diagnostics = Vec::new();
    let mut units_scanned = 0;

    archive.for_each_unit(|entry| {
        units_scanned += 1;
        match entry.unit {
            Ok(unit) => collector.collect(unit),
            Err(err) => diagnostics.push(Diagnostic::EntrySkipped {
                entry: entry.name,
                error: err.to_string(),
            }),
        }
    })?;

    Ok(finish(collector, options, diagnostics, units_scanned))
}

fn finish(
    collector: RegistryCollector,
    options: &ExtractOptions,
    mut diagnostics: Vec<Diagnostic>,
    units_scanned: usize,
) -> Extraction {
    let (registry, queue, collect_diagnostics) = collector.finish();
    diagnostics.extend(collect_diagnostics);

    let mut extractor = LiteralExtractor::new(&registry, &options.marker)
        .with_strict_arguments(options.strict_arguments);
    for unit in &queue {
        extractor.extract(unit);
    }
    let (records, extract_diagnostics) = extractor.finish();
    diagnostics.extend(extract_diagnostics);

    let literal_count = records.len();
    let entries = deduplicate(records, &mut diagnostics);

    Extraction {
        literal_count,
        entries,
        diagnostics,
        units_scanned,
    }
}
