use std::borrow::Cow;
use std::cmp::Ordering;

use bytes::BufMut;

use crate::headers::error::HeaderError;
use crate::headers::name::{HeaderName, standard};
use crate::headers::value::FieldValue;

/// A single HTTP header field.
///
/// Pairs a [`HeaderName`] with a typed [`FieldValue`] and serializes to the
/// literal wire line `"{name}: {value}\r\n"`.
///
/// Construct through the named catalog constructors
/// ([`content_type`][Header::content_type],
/// [`content_length`][Header::content_length], ...) or through
/// [`custom`][Header::custom] for headers without a dedicated constructor.
///
/// # Equality and ordering
///
/// Two headers are equal when both name and raw value match. A header can
/// also be compared against a plain string, which compares the derived wire
/// value. Headers order by `(name, raw value)`; ordering against a plain
/// string is undefined and always yields `None`.
#[derive(Clone)]
pub struct Header {
    name: HeaderName,
    value: FieldValue,
    single_value: bool,
}

const CONNECTION_TOKENS: &[&str] = &["close", "keep-alive"];

impl Header {
    /// `Content-Type: text/plain`.
    pub const TEXT_PLAIN: Header = Header {
        name: standard::CONTENT_TYPE,
        value: FieldValue::Str(Cow::Borrowed("text/plain")),
        single_value: true,
    };

    /// `Content-Type: text/html`.
    pub const TEXT_HTML: Header = Header {
        name: standard::CONTENT_TYPE,
        value: FieldValue::Str(Cow::Borrowed("text/html")),
        single_value: true,
    };

    /// `Connection: close`.
    pub const CONNECTION_CLOSE: Header = Header {
        name: standard::CONNECTION,
        value: FieldValue::Token {
            tokens: CONNECTION_TOKENS,
            index: 0,
        },
        single_value: true,
    };

    /// `Connection: keep-alive`.
    pub const CONNECTION_KEEP_ALIVE: Header = Header {
        name: standard::CONNECTION,
        value: FieldValue::Token {
            tokens: CONNECTION_TOKENS,
            index: 1,
        },
        single_value: true,
    };
}

// ===== Catalog =====

impl Header {
    /// Create a `Content-Type` header.
    ///
    /// Content-Type is single valued and refuses to merge.
    ///
    /// # Panics
    ///
    /// Panics if the value embeds CR or LF.
    pub fn content_type(value: impl Into<Cow<'static, str>>) -> Header {
        Self::single(standard::CONTENT_TYPE, value.into())
    }

    /// Create a `Content-Length` header.
    pub const fn content_length(len: u64) -> Header {
        Header {
            name: standard::CONTENT_LENGTH,
            value: FieldValue::Int(len),
            single_value: true,
        }
    }

    /// Parse a `Content-Length` header from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a non-negative decimal integer.
    pub fn content_length_from_str(value: &str) -> Result<Header, HeaderError> {
        match value.trim().parse::<u64>() {
            Ok(len) => Ok(Self::content_length(len)),
            Err(_) => Err(HeaderError::InvalidValue),
        }
    }

    /// Create a `Connection` header from one of the allowed tokens,
    /// `close` or `keep-alive`.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not recognized.
    pub fn connection(token: &str) -> Result<Header, HeaderError> {
        match CONNECTION_TOKENS.iter().position(|t| *t == token) {
            Some(index) => Self::connection_index(index),
            None => Err(HeaderError::InvalidValue),
        }
    }

    /// Create a `Connection` header from an index into the allowed token
    /// list.
    ///
    /// # Errors
    ///
    /// Returns error if the index is out of range.
    pub fn connection_index(index: usize) -> Result<Header, HeaderError> {
        if index >= CONNECTION_TOKENS.len() {
            return Err(HeaderError::InvalidValue);
        }
        Ok(Header {
            name: standard::CONNECTION,
            value: FieldValue::Token {
                tokens: CONNECTION_TOKENS,
                index,
            },
            single_value: true,
        })
    }

    /// Create a `Host` header, appending `:{port}` when a port is given.
    ///
    /// # Panics
    ///
    /// Panics if the host embeds CR or LF.
    pub fn host(host: impl AsRef<str>, port: Option<u16>) -> Header {
        let host = host.as_ref();
        let value = match port {
            Some(port) => Cow::Owned(format!("{host}:{port}")),
            None => Cow::Owned(host.to_owned()),
        };
        Header {
            name: standard::HOST,
            value: FieldValue::Str(validated(value)),
            single_value: false,
        }
    }

    /// Create a `User-Agent` header.
    ///
    /// # Panics
    ///
    /// Panics if the value embeds CR or LF.
    pub fn user_agent(value: impl Into<Cow<'static, str>>) -> Header {
        Self::plain(standard::USER_AGENT, value.into())
    }

    /// Create a `Server` header.
    ///
    /// # Panics
    ///
    /// Panics if the value embeds CR or LF.
    pub fn server(value: impl Into<Cow<'static, str>>) -> Header {
        Self::plain(standard::SERVER, value.into())
    }

    /// Create an `Accept` header.
    ///
    /// # Panics
    ///
    /// Panics if the value embeds CR or LF.
    pub fn accept(value: impl Into<Cow<'static, str>>) -> Header {
        Self::plain(standard::ACCEPT, value.into())
    }

    /// Create a `Location` header.
    ///
    /// # Panics
    ///
    /// Panics if the value embeds CR or LF.
    pub fn location(value: impl Into<Cow<'static, str>>) -> Header {
        Self::plain(standard::LOCATION, value.into())
    }

    /// Create an `Authorization` header serializing as
    /// `"{method} {payload}"`.
    ///
    /// # Panics
    ///
    /// Panics if the method or payload embeds CR or LF.
    pub fn authorization(
        method: impl Into<String>,
        payload: impl Into<String>,
    ) -> Header {
        Self::credentials(standard::AUTHORIZATION, method.into(), payload.into())
    }

    /// Create a `Proxy-Authorization` header serializing as
    /// `"{method} {payload}"`.
    ///
    /// # Panics
    ///
    /// Panics if the method or payload embeds CR or LF.
    pub fn proxy_authorization(
        method: impl Into<String>,
        payload: impl Into<String>,
    ) -> Header {
        Self::credentials(
            standard::PROXY_AUTHORIZATION,
            method.into(),
            payload.into(),
        )
    }

    /// Create a `WWW-Authenticate` header serializing as
    /// `"{method} realm={realm}"`.
    ///
    /// # Panics
    ///
    /// Panics if the method or realm embeds CR or LF.
    pub fn www_authenticate(
        method: impl Into<String>,
        realm: impl Into<String>,
    ) -> Header {
        Self::challenge(standard::WWW_AUTHENTICATE, method.into(), realm.into())
    }

    /// Create a `Proxy-Authenticate` header serializing as
    /// `"{method} realm={realm}"`.
    ///
    /// # Panics
    ///
    /// Panics if the method or realm embeds CR or LF.
    pub fn proxy_authenticate(
        method: impl Into<String>,
        realm: impl Into<String>,
    ) -> Header {
        Self::challenge(standard::PROXY_AUTHENTICATE, method.into(), realm.into())
    }

    /// Create a header with an arbitrary name, the escape hatch for
    /// headers without a dedicated constructor.
    ///
    /// # Errors
    ///
    /// Returns error if the name is not a valid header name or the value
    /// embeds CR or LF.
    pub fn custom(
        name: impl Into<String>,
        value: impl Into<Cow<'static, str>>,
    ) -> Result<Header, HeaderError> {
        let name = HeaderName::from_string(name)?;
        let value = value.into();
        validate_text(&value)?;
        Ok(Header {
            name,
            value: FieldValue::Str(value),
            single_value: false,
        })
    }

    fn plain(name: HeaderName, value: Cow<'static, str>) -> Header {
        Header {
            name,
            value: FieldValue::Str(validated(value)),
            single_value: false,
        }
    }

    fn single(name: HeaderName, value: Cow<'static, str>) -> Header {
        Header {
            name,
            value: FieldValue::Str(validated(value)),
            single_value: true,
        }
    }

    fn credentials(name: HeaderName, method: String, payload: String) -> Header {
        if let Err(err) = validate_text(&method).and_then(|()| validate_text(&payload)) {
            err.panic_const();
        }
        Header {
            name,
            value: FieldValue::Credentials { method, payload },
            single_value: false,
        }
    }

    fn challenge(name: HeaderName, method: String, realm: String) -> Header {
        if let Err(err) = validate_text(&method).and_then(|()| validate_text(&realm)) {
            err.panic_const();
        }
        Header {
            name,
            value: FieldValue::Challenge { method, realm },
            single_value: false,
        }
    }
}

// ===== Accessors =====

impl Header {
    /// Returns reference to the header name.
    #[inline]
    pub const fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Returns reference to the typed raw value.
    #[inline]
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Returns `true` if this header refuses to merge.
    #[inline]
    pub const fn is_single_value(&self) -> bool {
        self.single_value
    }

    /// Derive the wire-formatted value.
    #[inline]
    pub fn string_value(&self) -> Cow<'_, str> {
        self.value.string_value()
    }

    /// Returns the authentication method of a credentials or challenge
    /// header.
    pub fn method(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Credentials { method, .. }
            | FieldValue::Challenge { method, .. } => Some(method),
            _ => None,
        }
    }

    /// Replace the authentication method.
    ///
    /// # Errors
    ///
    /// Returns error if this header carries no authentication method or
    /// the input embeds CR or LF.
    pub fn set_method(&mut self, method: impl Into<String>) -> Result<(), HeaderError> {
        let new = method.into();
        validate_text(&new)?;
        match &mut self.value {
            FieldValue::Credentials { method, .. }
            | FieldValue::Challenge { method, .. } => {
                *method = new;
                Ok(())
            }
            _ => Err(HeaderError::InvalidValue),
        }
    }

    /// Returns the payload of a credentials header.
    pub fn payload(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Credentials { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Replace the payload of a credentials header.
    ///
    /// # Errors
    ///
    /// Returns error if this header carries no payload or the input embeds
    /// CR or LF.
    pub fn set_payload(&mut self, payload: impl Into<String>) -> Result<(), HeaderError> {
        let new = payload.into();
        validate_text(&new)?;
        match &mut self.value {
            FieldValue::Credentials { payload, .. } => {
                *payload = new;
                Ok(())
            }
            _ => Err(HeaderError::InvalidValue),
        }
    }

    /// Returns the realm of a challenge header.
    pub fn realm(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Challenge { realm, .. } => Some(realm),
            _ => None,
        }
    }

    /// Replace the realm of a challenge header.
    ///
    /// # Errors
    ///
    /// Returns error if this header carries no realm or the input embeds
    /// CR or LF.
    pub fn set_realm(&mut self, realm: impl Into<String>) -> Result<(), HeaderError> {
        let new = realm.into();
        validate_text(&new)?;
        match &mut self.value {
            FieldValue::Challenge { realm, .. } => {
                *realm = new;
                Ok(())
            }
            _ => Err(HeaderError::InvalidValue),
        }
    }
}

// ===== Serialization =====

impl Header {
    /// Serialize to the literal wire line `"{name}: {value}\r\n"`.
    pub fn serialize(&self) -> String {
        format!("{}: {}\r\n", self.name, self.value)
    }

    /// Append the wire line to a buffer.
    pub fn write_to<B: BufMut>(&self, mut buf: B) {
        buf.put_slice(self.name.as_str().as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(self.string_value().as_bytes());
        buf.put_slice(b"\r\n");
    }
}

// ===== Merge =====

impl Header {
    /// Merge another header into this one, concatenating the wire values
    /// as `"{this}, {other}"`.
    ///
    /// The raw value degrades to plain text after a merge.
    ///
    /// # Errors
    ///
    /// Returns error if the headers have different names or this header is
    /// single valued.
    pub fn merge(&mut self, other: &Header) -> Result<(), HeaderError> {
        if self.name != other.name {
            return Err(HeaderError::InvalidMerge);
        }
        let appended = other.string_value().into_owned();
        self.merge_str(&appended)
    }

    /// Merge a plain string into this header, concatenating the wire
    /// values as `"{this}, {appended}"`.
    ///
    /// # Errors
    ///
    /// Returns error if this header is single valued or the input embeds
    /// CR or LF.
    pub fn merge_str(&mut self, appended: &str) -> Result<(), HeaderError> {
        if self.single_value {
            return Err(HeaderError::InvalidMerge);
        }
        validate_text(appended)?;
        let joined = format!("{}, {}", self.string_value(), appended);
        self.value = FieldValue::Str(Cow::Owned(joined));
        Ok(())
    }
}

// ===== Parsing =====

/// Serialized lines must stay single lines.
fn validate_text(value: &str) -> Result<(), HeaderError> {
    if value.bytes().any(|b| b == b'\r' || b == b'\n') {
        Err(HeaderError::InvalidValue)
    } else {
        Ok(())
    }
}

fn validated(value: Cow<'static, str>) -> Cow<'static, str> {
    if let Err(err) = validate_text(&value) {
        err.panic_const();
    }
    value
}

// ===== Traits =====

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}\r\n", self.name, self.value)
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Header {}

impl PartialEq<str> for Header {
    /// Comparing against a plain string compares the wire value.
    fn eq(&self, other: &str) -> bool {
        self.string_value() == other
    }
}

impl PartialEq<&str> for Header {
    fn eq(&self, other: &&str) -> bool {
        self.string_value() == *other
    }
}

impl PartialEq<String> for Header {
    fn eq(&self, other: &String) -> bool {
        self.string_value() == other.as_str()
    }
}

impl PartialOrd for Header {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Header {
    /// Total order by `(name, raw value)`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd<str> for Header {
    /// Ordering against plain text is undefined, equality is not.
    #[inline]
    fn partial_cmp(&self, _: &str) -> Option<Ordering> {
        None
    }
}
