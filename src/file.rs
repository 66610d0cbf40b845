//! In-memory file value: a filename plus an opaque byte payload

use bytes::Bytes;

/// A named binary resource
///
/// The payload is held as [`Bytes`] so it can be sliced into chunks for
/// streaming without copying the whole buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    filename: String,
    payload: Bytes,
}

impl File {
    /// Create a file value from a name and its contents
    pub fn new(filename: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            payload: payload.into(),
        }
    }

    /// Base name including extension
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Raw contents
    #[must_use]
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Consume the value, returning the payload
    #[must_use]
    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// Payload length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Text after the last `.` of the filename
    ///
    /// Empty segments are ignored when splitting, so a name needs at least
    /// two non-empty dot-separated parts to have an extension: `".gitignore"`
    /// and `"README"` have none, `"archive.tar.gz"` has `"gz"`.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let mut parts = self.filename.split('.').filter(|p| !p.is_empty());
        let first = parts.next();
        let last = parts.last();
        first.and(last)
    }
}
