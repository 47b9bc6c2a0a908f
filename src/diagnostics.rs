//! Diagnostics produced while extracting literals.
//!
//! The engine never prints. Every notable event (a literal found, a field
//! ignored, a duplicate dropped, an entry that failed to decode) is recorded
//! as a [`Diagnostic`] in discovery order, and the CLI reporter decides how to
//! render it.

use std::fmt;

// ============================================================
// Severity
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Progress information, shown with `--verbose`.
    Info,
    /// A candidate was skipped or dropped.
    Warning,
}

// ============================================================
// Ignore Reason
// ============================================================

/// Why a marked field did not produce a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotStatic,
    NotFinal,
    NotText,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::NotStatic => write!(f, "isn't static"),
            IgnoreReason::NotFinal => write!(f, "isn't final"),
            IgnoreReason::NotText => write!(f, "did not contain a String value"),
        }
    }
}

// ============================================================
// Diagnostic
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An annotation-type method carrying the localization marker.
    AnnotationMethodFound { method: String, annotation: String },
    /// A marked constant field that produced a literal.
    FieldFound { comment: String },
    /// An argument of a registered annotation usage that produced a literal.
    AnnotationUsageFound { comment: String },
    /// A marked field that was skipped.
    FieldIgnored {
        comment: String,
        reason: IgnoreReason,
    },
    /// A literal whose text was already kept under another comment.
    Duplicate { kept: String, duplicate: String },
    /// An archive entry that could not be decoded as a class file.
    EntrySkipped { entry: String, error: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::AnnotationMethodFound { .. }
            | Diagnostic::FieldFound { .. }
            | Diagnostic::AnnotationUsageFound { .. } => Severity::Info,
            Diagnostic::FieldIgnored { .. }
            | Diagnostic::Duplicate { .. }
            | Diagnostic::EntrySkipped { .. } => Severity::Warning,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Diagnostic::Duplicate { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AnnotationMethodFound { method, annotation } => {
                write!(f, "Localizable annotation method found: {} {}", method, annotation)
            }
            Diagnostic::FieldFound { comment } => {
                write!(f, "Localizable field found: {}", comment)
            }
            Diagnostic::AnnotationUsageFound { comment } => {
                write!(f, "Annotation usage found: {}", comment)
            }
            Diagnostic::FieldIgnored { comment, reason } => {
                write!(f, "[IGNORED] Localizable field found but {}: {}", reason, comment)
            }
            Diagnostic::Duplicate { kept, duplicate } => {
                write!(
                    f,
                    "[DUPLICATE DETECTED] [SKIPPED]\n    added: {}\n    duplicate: {}",
                    kept, duplicate
                )
            }
            Diagnostic::EntrySkipped { entry, error } => {
                write!(f, "[SKIPPED] Could not decode {}: {}", entry, error)
            }
        }
    }
}
