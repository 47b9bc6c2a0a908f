use std::hash::{Hash, Hasher};

/// A harvested literal and where it came from.
///
/// Equality and hashing only look at the literal text, so two records with the
/// same text but different provenance compare equal. This is what the
/// deduplicator keys on.
#[derive(Debug, Clone)]
pub struct LiteralRecord {
    literal: String,
    comment: String,
}

impl LiteralRecord {
    /// Create a record. Path separators in `comment` are replaced with `.`.
    pub fn new(literal: impl Into<String>, comment: &str) -> Self {
        Self {
            literal: literal.into(),
            comment: sanitize_comment(comment),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl PartialEq for LiteralRecord {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for LiteralRecord {}

impl Hash for LiteralRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.literal.hash(state);
    }
}

/// A kept record and its key in the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub index: usize,
    pub record: LiteralRecord,
}

/// Replace `/` and `\` with `.` so a comment reads as a single dotted token.
pub fn sanitize_comment(comment: &str) -> String {
    comment.replace(['/', '\\'], ".")
}
