//! Record source abstraction.

use roadworks_core::RecordSet;

/// Error type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while reading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error
    #[error("I/O error reading {}: {}", .path.display(), .source)]
    Io {
        /// File being read
        path: std::path::PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// XML syntax error
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// A snapshot of planned works that can be read into memory.
///
/// This trait allows different snapshot formats to be plugged in.
pub trait RecordSource {
    /// Read every work order in document order.
    fn records(&self) -> Result<RecordSet>;
}
