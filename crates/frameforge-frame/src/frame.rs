use std::fmt;

use bytes::Bytes;

/// One immutable, pre-rendered HTML fragment.
///
/// The body is a shared buffer: cloning a frame never copies the HTML, and a
/// clone taken from the registry points at the same storage as the frame that
/// was registered.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Frame {
    body: Bytes,
}

impl Frame {
    /// Create a frame from an HTML string.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            body: Bytes::from(html.into()),
        }
    }

    /// Create an empty frame.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The HTML content.
    pub fn as_str(&self) -> &str {
        // Only ever constructed from `String`.
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    /// The HTML content as a shared byte buffer.
    pub fn body(&self) -> Bytes {
        self.body.clone()
    }

    /// Length of the HTML in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True when both frames share the same backing storage.
    pub fn ptr_eq(&self, other: &Frame) -> bool {
        self.body.as_ptr() == other.body.as_ptr() && self.body.len() == other.body.len()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame").field("len", &self.len()).finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Frame {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

impl From<&str> for Frame {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_storage() {
        let frame = Frame::new("<p>hi</p>");
        let copy = frame.clone();
        assert!(frame.ptr_eq(&copy));
        assert_eq!(copy.as_str(), "<p>hi</p>");
    }

    #[test]
    fn equal_content_is_not_same_storage() {
        let a = Frame::new("<p>hi</p>");
        let b = Frame::new("<p>hi</p>");
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn empty_frame() {
        let frame = Frame::empty();
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert_eq!(frame.to_string(), "");
    }
}
