use crate::headers::error::HeaderError;

/// HTTP Header name.
///
/// Names are kept in their canonical wire case, e.g. `Content-Type`, and
/// serialize verbatim. Comparison against strings is case-sensitive on the
/// canonical form; use [`eq_ignore_ascii_case`][HeaderName::eq_ignore_ascii_case]
/// for case-insensitive matching.
#[derive(Clone)]
pub struct HeaderName {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Custom(Box<str>),
}

impl HeaderName {
    /// Create a header name from a static string.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        match validate_header_name(name.as_bytes()) {
            Ok(()) => Self {
                repr: Repr::Static(name),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Create a header name from an owned string.
    ///
    /// # Errors
    ///
    /// Returns error if the input is empty or contains a byte that cannot
    /// appear in a header name.
    #[inline]
    pub fn from_string<S: Into<String>>(name: S) -> Result<Self, HeaderError> {
        let name = name.into();
        match validate_header_name(name.as_bytes()) {
            Ok(()) => Ok(Self {
                repr: Repr::Custom(name.into_boxed_str()),
            }),
            Err(err) => Err(err),
        }
    }

    /// Extracts a string slice of the header name.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Static(s) => s,
            Repr::Custom(s) => s,
        }
    }

    /// Checks that two header names are an ASCII case-insensitive match.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

// ===== Parsing =====

const MAX_HEADER_NAME_LEN: usize = 1024;

/// Header names are tokens: no control bytes, no separators relevant to
/// the `"{name}: {value}\r\n"` framing.
const fn validate_header_name(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;

    if bytes.is_empty() || bytes.len() > MAX_HEADER_NAME_LEN {
        return Err(E::InvalidValue);
    }

    while let [byte, rest @ ..] = bytes {
        if *byte <= b' ' || *byte >= 0x7F || *byte == b':' {
            return Err(E::InvalidValue);
        }
        bytes = rest;
    }

    Ok(())
}

// ===== Traits =====

impl std::fmt::Display for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}

impl PartialEq for HeaderName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for HeaderName {}

impl PartialOrd for HeaderName {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeaderName {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl std::hash::Hash for HeaderName {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

// ===== Standard Headers =====

standard_header! {
    /// HTTP Standard Headers
    mod standard;

    /// Indicates the media type of the resource.
    pub const CONTENT_TYPE: HeaderName = "Content-Type";

    /// The size of the resource, in decimal number of bytes.
    pub const CONTENT_LENGTH: HeaderName = "Content-Length";

    /// Controls whether the network connection stays open after the
    /// current transaction finishes.
    pub const CONNECTION: HeaderName = "Connection";

    /// Specifies the host and (optionally) the TCP port number of the
    /// server the request is addressed to.
    pub const HOST: HeaderName = "Host";

    /// Identifies the application, operating system, or vendor of the
    /// requesting user agent.
    pub const USER_AGENT: HeaderName = "User-Agent";

    /// Describes the software used by the origin server that handled the
    /// request.
    pub const SERVER: HeaderName = "Server";

    /// Informs the server about the media types the client can process.
    pub const ACCEPT: HeaderName = "Accept";

    /// Contains the credentials to authenticate a user agent with a
    /// server.
    pub const AUTHORIZATION: HeaderName = "Authorization";

    /// Contains the credentials to authenticate a user agent with a proxy
    /// server.
    pub const PROXY_AUTHORIZATION: HeaderName = "Proxy-Authorization";

    /// Defines the authentication method that should be used to access a
    /// resource.
    pub const WWW_AUTHENTICATE: HeaderName = "WWW-Authenticate";

    /// Defines the authentication method that should be used to access a
    /// resource behind a proxy server.
    pub const PROXY_AUTHENTICATE: HeaderName = "Proxy-Authenticate";

    /// Indicates the URL to redirect a page to.
    pub const LOCATION: HeaderName = "Location";
}

// ===== Macros =====

macro_rules! standard_header {
    (
        $(#[$mod_doc:meta])*
        mod $mod_name:ident;

        $(
            $(#[$doc:meta])*
            $vis:vis const $id:ident: $t:ty = $name:literal;
        )*
    ) => {
        $(#[$mod_doc])*
        pub mod $mod_name {
            use super::*;

            $(
                $(#[$doc])*
                $vis const $id: $t = HeaderName::from_static($name);
            )*
        }
    };
}

use standard_header;
