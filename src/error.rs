use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a schema source and writing
/// the last artifact. All variants are fatal to the run that triggered them;
/// nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse schema document: {0}")]
    SchemaParse(String),

    #[error("root element {0:?} not found in the schema index")]
    UnknownRoot(String),

    #[error("unresolved type reference {type_name:?} at {lineage}")]
    DanglingReference { type_name: String, lineage: String },

    #[error("unsupported schema construct at {lineage}: {detail}")]
    UnsupportedSchemaFeature { lineage: String, detail: String },

    #[error("failed to read ignored-keys file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch schema from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("PDF rendering failed: {0}")]
    Render(String),
}
