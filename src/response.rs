//! HTTP Response envelope.
use bytes::{BufMut, Bytes, BytesMut};

use crate::body::Body;
use crate::headers::Header;
use crate::log::debug;

/// An ordered sequence of headers paired with a one-shot body.
///
/// Serializes as every header line in insertion order, exactly one blank
/// line, then every body chunk verbatim. The head can be written any number
/// of times; the body is consumed by a single pass and yields nothing
/// afterwards.
#[derive(Debug, Default)]
pub struct Response {
    headers: Vec<Header>,
    body: Body,
}

impl Response {
    /// Creates a new [`Response`].
    #[inline]
    pub fn new(body: Body, headers: Vec<Header>) -> Self {
        Self { headers, body }
    }

    /// Returns the headers, in insertion order.
    #[inline]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Returns mutable access to the headers.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut Vec<Header> {
        &mut self.headers
    }

    /// Returns reference to the body.
    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns mutable access to the body.
    #[inline]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Consume the response into its body.
    #[inline]
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Write every header line followed by the separating blank line.
    ///
    /// Does not touch the body and may be repeated.
    pub fn write_head<B: BufMut>(&self, mut buf: B) {
        for header in &self.headers {
            header.write_to(&mut buf);
        }
        buf.put_slice(b"\r\n");
    }

    /// Serialize the head and drain the remaining body chunks.
    ///
    /// A second call emits the head again but no body, since the body is
    /// single pass.
    pub fn serialize(&mut self) -> Bytes {
        debug!("serialize response: {} headers", self.headers.len());
        let mut buf = BytesMut::new();
        self.write_head(&mut buf);
        while let Some(chunk) = self.body.pull() {
            buf.put_slice(&chunk);
        }
        buf.freeze()
    }

    /// Returns an iterator over the wire pieces: each header line, the
    /// blank line, then each remaining body chunk.
    pub fn chunks(&mut self) -> Chunks<'_> {
        Chunks {
            headers: self.headers.iter(),
            separated: false,
            body: &mut self.body,
        }
    }
}

// ===== Iterator =====

/// Iterator returned from [`Response::chunks`].
#[derive(Debug)]
pub struct Chunks<'a> {
    headers: std::slice::Iter<'a, Header>,
    separated: bool,
    body: &'a mut Body,
}

impl Iterator for Chunks<'_> {
    type Item = Bytes;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(header) = self.headers.next() {
            return Some(Bytes::from(header.serialize()));
        }
        if !self.separated {
            self.separated = true;
            return Some(Bytes::from_static(b"\r\n"));
        }
        self.body.pull()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn framing() {
        let headers = vec![
            Header::content_type("text/plain"),
            Header::content_length(2),
        ];
        let mut res = Response::new(Body::full("hi"), headers);
        assert_eq!(
            res.serialize(),
            "Content-Type: text/plain\r\nContent-Length: 2\r\n\r\nhi",
        );
    }

    #[test]
    fn head_is_rereadable_body_is_not() {
        let mut res = Response::new(
            Body::full("once"),
            vec![Header::content_length(4)],
        );

        let first = res.serialize();
        assert_eq!(first, "Content-Length: 4\r\n\r\nonce");

        // body exhausted, head intact
        let second = res.serialize();
        assert_eq!(second, "Content-Length: 4\r\n\r\n");
        assert_eq!(res.headers().len(), 1);
    }

    #[test]
    fn chunk_iteration_order() {
        let mut res = Response::new(
            Body::from_chunks(["a", "b"]),
            vec![Header::host("h", None)],
        );

        let chunks: Vec<Bytes> = res.chunks().collect();
        assert_eq!(chunks, ["Host: h\r\n", "\r\n", "a", "b"]);
    }

    #[test]
    fn default_is_bare_separator() {
        let mut res = Response::default();
        assert_eq!(res.serialize(), "\r\n");
    }

    #[test]
    fn no_dedup_and_order_preserved() {
        let mut res = Response::new(
            Body::empty(),
            vec![
                Header::custom("X-One", "1").unwrap(),
                Header::custom("X-One", "1").unwrap(),
                Header::accept("*/*"),
            ],
        );
        assert_eq!(
            res.serialize(),
            "X-One: 1\r\nX-One: 1\r\nAccept: */*\r\n\r\n",
        );
    }
}
