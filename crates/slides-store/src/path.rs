//! Blob addressing.
//!
//! Blobs live in a hierarchical namespace addressed by segment lists joined
//! with `/`. Page content uses the convention
//! `pages/{user_id}/{slide_id}/{page_id}`; bulk deletion operates on the
//! joined path as a plain string prefix, so deleting `pages/{user_id}`
//! cascades over every slide and page of that user.

use std::fmt;

/// A blob path: an ordered list of segments, joined with `/` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlobPath {
    segments: Vec<String>,
}

impl BlobPath {
    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// A new path with one more segment appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The joined on-the-wire form.
    pub fn joined(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for BlobPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_with_slashes() {
        let path = BlobPath::new(["pages", "user-1", "slide-1"]);
        assert_eq!(path.joined(), "pages/user-1/slide-1");
    }

    #[test]
    fn child_appends_a_segment() {
        let dir = BlobPath::new(["pages", "user-1"]);
        let page = dir.child("page-9");
        assert_eq!(page.joined(), "pages/user-1/page-9");
        // The parent is untouched.
        assert_eq!(dir.segments().len(), 2);
    }

    #[test]
    fn display_matches_joined() {
        let path = BlobPath::new(["a", "b"]);
        assert_eq!(path.to_string(), path.joined());
    }
}
