//! One-shot response body.
use bytes::Bytes;

/// A finite, single-pass sequence of body chunks.
///
/// Chunks are produced exactly once: pulling past the end keeps returning
/// `None` and the body cannot be rewound. Callers that need to serialize
/// the same payload twice must construct a fresh body.
pub struct Body {
    repr: Repr,
}

enum Repr {
    /// At most a single chunk.
    Full(Option<Bytes>),
    /// Multiple chunks, yielded in order.
    Chunks(std::vec::IntoIter<Bytes>),
    /// A single chunk rendered on first pull.
    Lazy(Option<Box<dyn FnOnce() -> Bytes + Send + 'static>>),
}

impl Body {
    /// Creates a body with no chunks.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            repr: Repr::Full(None),
        }
    }

    /// Creates a body consisting of a single chunk.
    #[inline]
    pub fn full(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            repr: Repr::Full((!data.is_empty()).then_some(data)),
        }
    }

    /// Creates a body from an already materialized chunk sequence.
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        let chunks: Vec<Bytes> = chunks.into_iter().map(Into::into).collect();
        Self {
            repr: Repr::Chunks(chunks.into_iter()),
        }
    }

    /// Creates a body whose single chunk is rendered on first pull.
    pub fn lazy<F>(render: F) -> Self
    where
        F: FnOnce() -> Bytes + Send + 'static,
    {
        Self {
            repr: Repr::Lazy(Some(Box::new(render))),
        }
    }

    /// Pull the next chunk, consuming it.
    pub fn pull(&mut self) -> Option<Bytes> {
        match &mut self.repr {
            Repr::Full(data) => data.take(),
            Repr::Chunks(chunks) => chunks.next(),
            Repr::Lazy(render) => render.take().map(|f| f()),
        }
    }

    /// Returns `true` if no chunk remains.
    pub fn is_end_stream(&self) -> bool {
        match &self.repr {
            Repr::Full(data) => data.is_none(),
            Repr::Chunks(chunks) => chunks.len() == 0,
            Repr::Lazy(render) => render.is_none(),
        }
    }

    /// Remaining payload size in bytes, where known.
    pub fn size_hint(&self) -> (u64, Option<u64>) {
        match &self.repr {
            Repr::Full(Some(data)) => {
                let len = data.len() as u64;
                (len, Some(len))
            }
            Repr::Full(None) => (0, Some(0)),
            Repr::Chunks(chunks) => {
                let len = chunks.as_slice().iter().map(|c| c.len() as u64).sum();
                (len, Some(len))
            }
            // not rendered yet
            Repr::Lazy(Some(_)) => (0, None),
            Repr::Lazy(None) => (0, Some(0)),
        }
    }
}

// ===== Traits =====

impl Iterator for Body {
    type Item = Bytes;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }
}

impl Default for Body {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for Body {
    #[inline]
    fn from(data: Bytes) -> Self {
        Self::full(data)
    }
}

impl From<String> for Body {
    #[inline]
    fn from(data: String) -> Self {
        Self::full(data)
    }
}

impl From<&'static str> for Body {
    #[inline]
    fn from(data: &'static str) -> Self {
        Self::full(data)
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match &self.repr {
            Repr::Full(_) => "Full",
            Repr::Chunks(_) => "Chunks",
            Repr::Lazy(_) => "Lazy",
        };
        f.debug_struct("Body")
            .field("repr", &repr)
            .field("is_end_stream", &self.is_end_stream())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_is_one_shot() {
        let mut body = Body::full("hello");
        assert!(!body.is_end_stream());
        assert_eq!(body.size_hint(), (5, Some(5)));
        assert_eq!(body.pull().as_deref(), Some(&b"hello"[..]));
        assert_eq!(body.pull(), None);
        assert_eq!(body.pull(), None);
        assert!(body.is_end_stream());
    }

    #[test]
    fn empty_chunk_collapses() {
        let mut body = Body::full("");
        assert!(body.is_end_stream());
        assert_eq!(body.pull(), None);
    }

    #[test]
    fn chunks_in_order() {
        let body = Body::from_chunks(["a", "b", "c"]);
        assert_eq!(body.size_hint(), (3, Some(3)));
        let chunks: Vec<Bytes> = body.collect();
        assert_eq!(chunks, ["a", "b", "c"]);
    }

    #[test]
    fn lazy_renders_on_first_pull() {
        let mut body = Body::lazy(|| Bytes::from("rendered"));
        assert_eq!(body.size_hint(), (0, None));
        assert_eq!(body.pull().as_deref(), Some(&b"rendered"[..]));
        assert_eq!(body.pull(), None);
        assert!(body.is_end_stream());
    }
}
