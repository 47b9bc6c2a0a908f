//! Deduplication of harvested literals.

use std::collections::HashMap;

use crate::core::data::{LiteralRecord, OutputEntry};
use crate::diagnostics::Diagnostic;

/// Collapse records with identical literal text.
///
/// The first occurrence of each text is kept and numbered with the next
/// index (starting at 0); later occurrences are dropped and reported with
/// both comments. Output keeps discovery order, so indices are contiguous.
pub fn deduplicate(
    records: Vec<LiteralRecord>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<OutputEntry> {
    let mut kept: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut entries: Vec<OutputEntry> = Vec::with_capacity(records.len());

    for record in records {
        if let Some(&position) = kept.get(record.literal()) {
            diagnostics.push(Diagnostic::Duplicate {
                kept: entries[position].record.comment().to_string(),
                duplicate: record.comment().to_string(),
            });
            continue;
        }

        let index = entries.len();
        kept.insert(record.literal().to_string(), index);
        entries.push(OutputEntry { index, record });
    }

    entries
}
