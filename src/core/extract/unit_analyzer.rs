//! Per-unit literal harvesting.

use crate::core::{
    collect::AnnotationRegistry,
    data::LiteralRecord,
    unit::{AnnotationUsage, AnnotationValue, Field, Unit},
};
use crate::diagnostics::{Diagnostic, IgnoreReason};

/// Phase 2 extractor: harvests literals from non-annotation units.
///
/// Borrows a finished [`AnnotationRegistry`]; records are appended in
/// discovery order (class annotations first, then fields) and duplicates are
/// kept for the deduplicator to handle.
pub struct LiteralExtractor<'a> {
    registry: &'a AnnotationRegistry,
    marker: &'a str,
    /// Only harvest usage arguments that are registered localizable methods.
    strict_arguments: bool,
    records: Vec<LiteralRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LiteralExtractor<'a> {
    pub fn new(registry: &'a AnnotationRegistry, marker: &'a str) -> Self {
        Self {
            registry,
            marker,
            strict_arguments: false,
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_strict_arguments(mut self, strict: bool) -> Self {
        self.strict_arguments = strict;
        self
    }

    pub fn extract(&mut self, unit: &Unit) {
        for usage in &unit.annotations {
            self.extract_usage(unit, usage);
        }

        for field in &unit.fields {
            if field.has_annotation(self.marker) {
                self.extract_field(unit, field);
            }
        }
    }

    /// Harvested records (in discovery order) and diagnostics.
    pub fn finish(self) -> (Vec<LiteralRecord>, Vec<Diagnostic>) {
        (self.records, self.diagnostics)
    }

    fn extract_usage(&mut self, unit: &Unit, usage: &AnnotationUsage) {
        let Some(methods) = usage
            .type_name()
            .and_then(|name| self.registry.localizable_methods(name))
        else {
            return;
        };

        for (name, value) in &usage.arguments {
            if self.strict_arguments && !methods.contains(name) {
                continue;
            }

            match value {
                AnnotationValue::Text(text) => {
                    let comment = format!(
                        "ANNOTATION METHOD: {}() {} {}",
                        name, unit.name, usage.descriptor
                    );
                    self.push_usage(text, &comment);
                }
                AnnotationValue::TextArray(texts) => {
                    let total = texts.len();
                    for (position, text) in texts.iter().enumerate() {
                        let comment = format!(
                            "ANNOTATION METHOD: {}[{}|{}] {} {}",
                            name,
                            position + 1,
                            total,
                            unit.name,
                            usage.descriptor
                        );
                        self.push_usage(text, &comment);
                    }
                }
                AnnotationValue::Other => {}
            }
        }
    }

    fn push_usage(&mut self, text: &str, comment: &str) {
        let record = LiteralRecord::new(text, comment);
        self.diagnostics.push(Diagnostic::AnnotationUsageFound {
            comment: record.comment().to_string(),
        });
        self.records.push(record);
    }

    fn extract_field(&mut self, unit: &Unit, field: &Field) {
        let desc = format!("FIELD: {} {}", field.name, unit.name);

        let mut eligible = true;
        if !field.is_static() {
            self.ignore(&desc, IgnoreReason::NotStatic);
            eligible = false;
        }
        if !field.is_final() {
            self.ignore(&desc, IgnoreReason::NotFinal);
            eligible = false;
        }
        if !eligible {
            return;
        }

        match field.constant.as_ref().and_then(|c| c.as_text()) {
            Some(text) => {
                let record = LiteralRecord::new(text, &desc);
                self.diagnostics.push(Diagnostic::FieldFound {
                    comment: record.comment().to_string(),
                });
                self.records.push(record);
            }
            None => self.ignore(&desc, IgnoreReason::NotText),
        }
    }

    fn ignore(&mut self, desc: &str, reason: IgnoreReason) {
        self.diagnostics.push(Diagnostic::FieldIgnored {
            comment: crate::core::data::sanitize_comment(desc),
            reason,
        });
    }
}
