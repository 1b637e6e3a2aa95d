use std::collections::HashSet;
use std::path::Path;

use crate::error::Error;
use crate::naming;

/// The set of lineage paths to prune from resolution, e.g.
/// `attack_pattern.mitigations.mitigation`. Matching is by exact lineage,
/// never by prefix or bare name.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    paths: HashSet<String>,
}

impl IgnoreSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads a newline-delimited path list. An empty file yields an empty
    /// set; an unreadable file is a configuration error.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parses path lines, skipping blanks and `#` comments. Each dot
    /// segment is normalized to snake_case so entries match resolved-node
    /// lineages regardless of the schema's own casing.
    pub fn parse(text: &str) -> Self {
        let paths = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                line.split('.')
                    .map(naming::snake_case)
                    .collect::<Vec<_>>()
                    .join(".")
            })
            .collect();
        Self { paths }
    }

    pub fn contains(&self, lineage: &str) -> bool {
        self.paths.contains(lineage)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
