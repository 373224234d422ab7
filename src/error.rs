use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the catalog pipeline. Both are fatal for a run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read emoji test data from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write catalog plist to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },
}
