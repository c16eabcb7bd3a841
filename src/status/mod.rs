//! HTTP status responses.
//!
//! A [`Status`] pairs a status code from the fixed [`Kind`] catalog with a
//! renderable body and the headers mandated by its kind. It serves both as
//! a normal response and as a raised error: it exposes the full
//! [`Response`] envelope and implements [`std::error::Error`].
mod catalog;
mod render;


pub use catalog::Kind;

use bytes::Bytes;

use crate::body::Body;
use crate::headers::Header;
use crate::log::debug;
use crate::response::Response;
use render::RenderData;

/// Construction options for [`Status`].
///
/// All options default to off: no message, no comment, HTML rendering, no
/// extra headers.
#[derive(Debug, Default)]
pub struct Options {
    message: Option<String>,
    comment: Option<String>,
    plaintext: bool,
    location: Option<String>,
    headers: Vec<Header>,
}

impl Options {
    /// Creates empty options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Detail text substituted into the body templates.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Annotation available to the body templates.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Render the body as plain text instead of HTML.
    pub fn plaintext(mut self, plaintext: bool) -> Self {
        self.plaintext = plaintext;
        self
    }

    /// Redirect target, required for redirect kinds.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Extra header, placed before the kind-mandated ones.
    pub fn header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }
}

/// An HTTP status paired with a renderable response.
///
/// The rendering path (HTML or plain text) and all rendered fields are
/// fixed at construction; the body itself is rendered lazily as a single
/// chunk when the underlying [`Response`] is first consumed.
pub struct Status {
    kind: Kind,
    title: String,
    message: String,
    comment: String,
    plaintext: bool,
    location: Option<String>,
    response: Response,
}

impl Status {
    /// Creates a status with default options.
    ///
    /// # Errors
    ///
    /// Returns error if the kind requires a redirect location.
    #[inline]
    pub fn new(kind: Kind) -> Result<Status, StatusError> {
        Self::with(kind, Options::new())
    }

    /// Creates a redirect status pointing at `location`.
    ///
    /// # Errors
    ///
    /// Construction of redirect kinds only fails when the location is
    /// missing, so this never fails for them; the `Result` matches
    /// [`with`][Status::with].
    #[inline]
    pub fn moved(kind: Kind, location: impl Into<String>) -> Result<Status, StatusError> {
        Self::with(kind, Options::new().location(location))
    }

    /// Creates a status from construction options.
    ///
    /// The rendering path is selected once by `plaintext` and a matching
    /// `Content-Type` header is appended after any caller-supplied ones.
    /// A location, when given, is mirrored into a `Location` header placed
    /// before the `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns error if the kind requires a redirect location and none was
    /// given.
    ///
    /// # Panics
    ///
    /// Panics if the location embeds CR or LF.
    pub fn with(kind: Kind, options: Options) -> Result<Status, StatusError> {
        let Options {
            message,
            comment,
            plaintext,
            location,
            mut headers,
        } = options;

        if kind.needs_location() && location.is_none() {
            return Err(StatusError::MissingLocation);
        }

        let title = match kind.title_override() {
            Some(title) => title.to_owned(),
            None => render::derive_title(kind.name()),
        };
        let message = message.unwrap_or_default();
        let comment = comment.unwrap_or_default();

        if let Some(location) = &location {
            headers.push(Header::location(location.clone()));
        }
        headers.push(if plaintext {
            Header::TEXT_PLAIN
        } else {
            Header::TEXT_HTML
        });

        debug!("status {} {title}: plaintext={plaintext}", kind.code());

        let data = RenderData {
            code: kind.code(),
            title: title.clone(),
            message: message.clone(),
            comment: comment.clone(),
            explanation: kind.explanation(),
            has_body: kind.has_body(),
        };
        let body = Body::lazy(move || Bytes::from(data.render(plaintext)));

        Ok(Status {
            kind,
            title,
            message,
            comment,
            plaintext,
            location,
            response: Response::new(body, headers),
        })
    }
}

// ===== Accessors =====

impl Status {
    /// Returns the status kind.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the status code, e.g. `404`.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.kind.code()
    }

    /// Returns the human readable title, e.g. `"Not Found"`.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the instance detail text, empty when none was given.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the instance annotation, empty when none was given.
    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the static descriptive text of the kind.
    #[inline]
    pub const fn explanation(&self) -> &'static str {
        self.kind.explanation()
    }

    /// Returns the redirect target, where one was given.
    #[inline]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns `true` if the body renders as plain text.
    #[inline]
    pub const fn is_plaintext(&self) -> bool {
        self.plaintext
    }

    /// Returns the underlying response envelope.
    #[inline]
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Returns mutable access to the underlying response envelope.
    #[inline]
    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    /// Consume the status into its response envelope.
    #[inline]
    pub fn into_response(self) -> Response {
        self.response
    }
}

// ===== Rendering =====

impl Status {
    fn render_data(&self) -> RenderData {
        RenderData {
            code: self.kind.code(),
            title: self.title.clone(),
            message: self.message.clone(),
            comment: self.comment.clone(),
            explanation: self.kind.explanation(),
            has_body: self.kind.has_body(),
        }
    }

    /// Render the HTML body form.
    ///
    /// Every substituted field except the code is HTML-escaped. Kinds
    /// without a body render the empty string.
    pub fn render_html(&self) -> String {
        self.render_data().html()
    }

    /// Render the plain text body form.
    ///
    /// Kinds without a body render the empty string.
    pub fn render_plain(&self) -> String {
        self.render_data().plain()
    }

    /// Serialize the head and drain the remaining body chunks of the
    /// underlying response.
    #[inline]
    pub fn serialize(&mut self) -> Bytes {
        self.response.serialize()
    }
}

// ===== Traits =====

impl std::fmt::Debug for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Status")
            .field("code", &self.code())
            .field("title", &self.title)
            .finish()
    }
}

impl std::fmt::Display for Status {
    /// The status-line form, `"{code} {title}\r\n"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}\r\n", self.code(), self.title)
    }
}

impl std::error::Error for Status {}

impl From<Status> for Response {
    #[inline]
    fn from(status: Status) -> Self {
        status.into_response()
    }
}

// ===== Error =====

/// An error that can occur when constructing a [`Status`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusError {
    /// The kind redirects and requires a location.
    MissingLocation,
}

impl StatusError {
    const fn message(&self) -> &'static str {
        match self {
            Self::MissingLocation => "redirect status requires a location",
        }
    }
}

impl std::error::Error for StatusError {}
impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
