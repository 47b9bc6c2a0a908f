//! Jar archive enumeration.
//!
//! Visits the `.class` entries of a jar in archive order. Each entry's bytes
//! are read completely and the entry is released before its bytes are
//! decoded and handed on, so at most one entry stream is open at a time.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use zip::ZipArchive;

use crate::core::{
    classfile::{ClassFileError, decode_unit},
    unit::Unit,
};

const CLASS_SUFFIX: &str = ".class";
const MAX_PREALLOCATION: u64 = 1 << 20;

/// One `.class` entry and the outcome of decoding it.
pub struct DecodedEntry {
    /// Entry name inside the archive, e.g. `com/example/Foo.class`.
    pub name: String,
    pub unit: Result<Unit, ClassFileError>,
}

pub struct ClassArchive {
    archive: ZipArchive<File>,
    ignores: Vec<Pattern>,
}

impl ClassArchive {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open archive: {}", path.display()))?;
        let archive = ZipArchive::new(file)
            .with_context(|| format!("Failed to read archive: {}", path.display()))?;
        Ok(Self {
            archive,
            ignores: Vec::new(),
        })
    }

    /// Skip entries whose name matches any of the given glob patterns.
    pub fn with_ignores(mut self, patterns: &[String]) -> Result<Self> {
        self.ignores = patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Decode every eligible `.class` entry in archive order.
    ///
    /// Read failures abort the walk; decode failures are handed to `visit`.
    pub fn for_each_unit<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(DecodedEntry),
    {
        for i in 0..self.archive.len() {
            let (name, bytes) = {
                let mut entry = self
                    .archive
                    .by_index(i)
                    .with_context(|| format!("Failed to read archive entry #{}", i))?;

                let name = entry.name().to_string();
                if entry.is_dir() || !is_eligible(&name, &self.ignores) {
                    continue;
                }

                let mut bytes = Vec::with_capacity(initial_capacity(entry.size()));
                entry
                    .read_to_end(&mut bytes)
                    .with_context(|| format!("Failed to read archive entry: {}", name))?;
                (name, bytes)
            };

            let unit = decode_unit(&bytes);
            visit(DecodedEntry { name, unit });
        }
        Ok(())
    }
}

/// Buffer size to reserve for an entry. The size declared in the archive is
/// untrusted, so the reservation is capped and the buffer grows as it reads.
fn initial_capacity(declared_size: u64) -> usize {
    declared_size.min(MAX_PREALLOCATION) as usize
}

fn is_eligible(name: &str, ignores: &[Pattern]) -> bool {
    name.ends_with(CLASS_SUFFIX) && !ignores.iter().any(|p| p.matches(name))
}
