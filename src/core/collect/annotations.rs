use std::collections::HashMap;

use crate::core::unit::Unit;
use crate::diagnostics::Diagnostic;

/// Annotation types that carry localizable text, keyed by internal name.
///
/// **Phase 1**: Built by [`RegistryCollector`]
/// **Phase 2**: Consulted (read-only) by the literal extractor
///
/// Only obtainable through [`RegistryCollector::finish`], so extraction can
/// never observe a partially built registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationRegistry {
    types: HashMap<String, Vec<String>>,
}

impl AnnotationRegistry {
    /// Localizable method names of an annotation type, in declaration order.
    pub fn localizable_methods(&self, type_name: &str) -> Option<&[String]> {
        self.types.get(type_name).map(Vec::as_slice)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Phase 1 collector: splits units into annotation-type declarations and
/// everything else.
///
/// # Usage
///
/// ```
/// use jarloc::core::{collect::RegistryCollector, unit::Unit};
///
/// let mut collector = RegistryCollector::new("Lcom/example/Localizable;");
/// let units = vec![Unit::new("com/example/Foo")];
///
/// for unit in units {
///     collector.collect(unit);
/// }
///
/// let (registry, queue, diagnostics) = collector.finish();
/// assert!(registry.is_empty());
/// assert_eq!(queue.len(), 1);
/// assert!(diagnostics.is_empty());
/// ```
pub struct RegistryCollector {
    /// Descriptor of the localization marker annotation.
    marker: String,
    types: HashMap<String, Vec<String>>,
    /// Non-annotation units, in the order they were collected.
    queue: Vec<Unit>,
    diagnostics: Vec<Diagnostic>,
}

impl RegistryCollector {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            types: HashMap::new(),
            queue: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Route one unit: annotation types are folded into the registry, all
    /// other units are queued for phase 2.
    pub fn collect(&mut self, unit: Unit) {
        if !unit.is_annotation_type() {
            self.queue.push(unit);
            return;
        }

        let mut methods = Vec::new();
        for method in &unit.methods {
            if !method.has_annotation(&self.marker) {
                continue;
            }
            self.diagnostics.push(Diagnostic::AnnotationMethodFound {
                method: method.name.clone(),
                annotation: unit.name.clone(),
            });
            methods.push(method.name.clone());
        }

        if !methods.is_empty() {
            self.types.insert(unit.name, methods);
        }
    }

    /// Complete phase 1.
    ///
    /// Returns the registry, the queued non-annotation units, and the
    /// diagnostics emitted while collecting.
    pub fn finish(self) -> (AnnotationRegistry, Vec<Unit>, Vec<Diagnostic>) {
        (
            AnnotationRegistry { types: self.types },
            self.queue,
            self.diagnostics,
        )
    }
}
