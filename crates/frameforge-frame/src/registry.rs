use std::sync::{PoisonError, RwLock};

use crate::consolidate::consolidate;
use crate::frame::Frame;
use crate::markup::escape_html;

/// Append-only, index-addressed collection of built frames.
///
/// Indices are assigned in insertion order and never change: clients carry an
/// index across independent requests, so a frame is never reordered or
/// removed once registered.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    frames: RwLock<Vec<Frame>>,
}

impl FrameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a frame from fragments.
    ///
    /// Fragments are concatenated in order. A non-empty `class` wraps them in
    /// one `<div>` carrying that (escaped) class. The result is always
    /// consolidated. With `update_index` the frame is registered and the
    /// returned value shares storage with the registered one; without it the
    /// frame is only returned, for embedding in a later `build`.
    pub fn build(&self, class: &str, update_index: bool, fragments: &[&Frame]) -> Frame {
        let capacity = fragments.iter().map(|f| f.len()).sum::<usize>() + class.len() + 32;
        let mut html = String::with_capacity(capacity);
        if !class.is_empty() {
            html.push_str(r#"<div class=""#);
            html.push_str(&escape_html(class));
            html.push_str(r#"">"#);
        }
        for fragment in fragments {
            html.push_str(fragment.as_str());
        }
        if !class.is_empty() {
            html.push_str("</div>");
        }

        let frame = Frame::new(consolidate(&html));
        if update_index {
            let index = self.push(frame.clone());
            tracing::debug!(index, class, size = frame.len(), "registered frame");
        }
        frame
    }

    /// Register an already-built frame and return its index.
    pub fn push(&self, frame: Frame) -> usize {
        let mut frames = self.frames.write().unwrap_or_else(PoisonError::into_inner);
        frames.push(frame);
        frames.len() - 1
    }

    /// Number of registered frames.
    pub fn count(&self) -> usize {
        self.frames.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The frame at `idx`, or `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<Frame> {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(idx)
            .cloned()
    }

    /// Snapshot of every registered frame, in index order.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::markup::{Element, Markup};

    #[test]
    fn build_wraps_in_escaped_class() {
        let registry = FrameRegistry::new();
        let el = Element::new();
        let h1 = el.h1("hello");
        let frame = registry.build("a\"b", false, &[&h1]);
        assert_eq!(frame.as_str(), r#"<div class="a&#34;b"><h1>hello</h1></div>"#);
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn build_without_class_concatenates() {
        let registry = FrameRegistry::new();
        let el = Element::new();
        let frame = registry.build("", true, &[&el.h1("a"), &el.paragraph("b")]);
        assert_eq!(frame.as_str(), "<h1>a</h1><p>b</p>");
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn build_consolidates_assets() {
        let registry = FrameRegistry::new();
        let el = Element::new();
        let frame = registry.build(
            "zero",
            true,
            &[&el.css("a{}"), &el.h1("t"), &el.css("b{}"), &el.js("x()")],
        );
        assert_eq!(
            frame.as_str(),
            r#"<style>a{}
b{}
</style><div class="zero"><h1>t</h1><script>x()</script></div>"#
        );
    }

    #[test]
    fn registered_frame_shares_storage() {
        let registry = FrameRegistry::new();
        let frame = registry.build("x", true, &[&Frame::new("<p>1</p>")]);
        let stored = registry.get(0).expect("frame should be registered");
        assert!(frame.ptr_eq(&stored));
    }

    #[test]
    fn empty_build_still_consumes_an_index() {
        let registry = FrameRegistry::new();
        let frame = registry.build("", true, &[]);
        assert!(frame.is_empty());
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get(0), Some(Frame::empty()));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let registry = FrameRegistry::new();
        assert!(registry.get(0).is_none());
        registry.push(Frame::new("a"));
        assert!(registry.get(1).is_none());
        assert!(registry.get(usize::MAX).is_none());
    }

    #[test]
    fn indices_are_stable_across_later_builds() {
        let registry = FrameRegistry::new();
        let mut built = Vec::new();
        for i in 0..10 {
            let frame = registry.build("", true, &[&Frame::new(format!("<p>{i}</p>"))]);
            built.push(frame);
            assert_eq!(registry.count(), i + 1);
        }
        for (i, frame) in built.iter().enumerate() {
            let stored = registry.get(i).expect("frame should exist");
            assert_eq!(stored.as_str(), format!("<p>{i}</p>"));
            assert!(stored.ptr_eq(frame));
        }
    }

    #[test]
    fn push_returns_sequential_indices() {
        let registry = FrameRegistry::new();
        assert_eq!(registry.push(Frame::new("a")), 0);
        assert_eq!(registry.push(Frame::new("b")), 1);
        assert_eq!(registry.frames().len(), 2);
    }

    #[test]
    fn concurrent_appends_keep_every_frame() {
        let registry = Arc::new(FrameRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..25 {
                        registry.build("", true, &[&Frame::new(format!("{t}-{i}"))]);
                        let _ = registry.get(registry.count() - 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread should finish");
        }
        assert_eq!(registry.count(), 100);
    }
}
