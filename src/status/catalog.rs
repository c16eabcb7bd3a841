//! The fixed catalog of status kinds.

macro_rules! status_kind {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident;
        )*
    ) => {
        /// A concrete HTTP status kind.
        ///
        /// Every kind fixes a status code and, where the catalog defines
        /// one, a distinct explanation. Kinds are terminal: there are no
        /// transitions between them.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Kind {
            $(
                $(#[$doc])*
                $id,
            )*
        }

        impl Kind {
            /// Every kind in the catalog, in code order.
            pub const ALL: &'static [Kind] = &[
                $(
                    Self::$id,
                )*
            ];

            /// Returns the status code, e.g. `200`.
            #[inline]
            pub const fn code(&self) -> u16 {
                match self {
                    $(
                        Self::$id => $int,
                    )*
                }
            }

            /// Returns the identifying name, e.g. `"NotFound"`.
            ///
            /// The default English title is derived from this name.
            #[inline]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$id => stringify!($id),
                    )*
                }
            }
        }
    };
}

status_kind! {
    /// `200`. The request succeeded.
    200 Ok;
    /// `201`. The request was fulfilled and a new resource was created.
    201 Created;
    /// `202`. The request was accepted for processing, but not yet
    /// completed.
    202 Accepted;
    /// `203`. The returned metainformation is gathered from a third party,
    /// not from the origin server.
    203 NonAuthoritativeInformation;
    /// `204`. The server fulfilled the request but does not need to return
    /// data.
    204 NoContent;
    /// `205`. The server fulfilled the request and the user agent should
    /// reset the document view which caused the request to be sent.
    205 ResetContent;
    /// `206`. The server has fulfilled the partial GET request for the
    /// resource.
    206 PartialContent;

    /// `300`. The requested resource corresponds to more than one
    /// representation.
    300 MultipleChoices;
    /// `301`. The requested resource moved permanently to a new location.
    301 MovedPermanently;
    /// `302`. The requested resource resides temporarily at a different
    /// location.
    302 Found;
    /// `303`. The response to the request can be found at another location
    /// and should be retrieved with a GET.
    303 SeeOther;
    /// `304`. The resource has not been modified since the version the
    /// client holds.
    304 NotModified;
    /// `305`. The requested resource must be accessed through a proxy.
    305 UseProxy;
    /// `307`. The requested resource resides temporarily at a different
    /// location, to be retrieved with the same method.
    307 TemporaryRedirect;

    /// `400`. The request is malformed or otherwise incorrect.
    400 BadRequest;
    /// `401`. The request lacks acceptable authentication credentials.
    401 Unauthorized;
    /// `402`. Access was denied for financial reasons.
    402 PaymentRequired;
    /// `403`. Access to the requested resource was denied.
    403 Forbidden;
    /// `404`. The requested resource could not be found.
    404 NotFound;
    /// `405`. The request method is not allowed for the target resource.
    405 MethodNotAllowed;
    /// `406`. No content satisfying the request's accept criteria is
    /// available.
    406 NotAcceptable;
    /// `407`. Authentication with a local proxy is required first.
    407 ProxyAuthenticationRequired;
    /// `408`. The server waited too long for the request to be sent.
    408 RequestTimeout;
    /// `409`. The request conflicts with the current state of the
    /// resource.
    409 Conflict;
    /// `410`. The requested resource is no longer available.
    410 Gone;
    /// `411`. A required `Content-Length` header was not sent.
    411 LengthRequired;
    /// `412`. A request precondition failed.
    412 PreconditionFailed;
    /// `413`. The request body is larger than this server is willing to
    /// process.
    413 RequestEntityTooLarge;
    /// `414`. The request URI is longer than this server is willing to
    /// interpret.
    414 RequestURITooLong;
    /// `415`. The media format of the request is not supported.
    415 UnsupportedMediaType;
    /// `416`. The requested range is not available.
    416 RequestRangeNotSatisfiable;
    /// `417`. The expectation given in the `Expect` header cannot be met.
    417 ExpectationFailed;
    /// `422`. The contained instructions cannot be processed.
    422 UnprocessableEntity;
    /// `423`. The resource is locked. From WebDAV.
    423 Locked;
    /// `424`. The requested action depended on another action that failed.
    /// From WebDAV.
    424 FailedDependency;
    /// `428`. The origin server requires the request to be conditional.
    428 PreconditionRequired;
}

const CLIENT_ERROR_EXPLANATION: &str =
    "The server could not comply with the request since\r\n\
     it is either malformed or otherwise incorrect.";

impl Kind {
    /// Returns the static descriptive text rendered below the message.
    ///
    /// Client error kinds without a more specific explanation share a
    /// generic one; kinds without any explanation return the empty string.
    pub const fn explanation(&self) -> &'static str {
        match self {
            Self::Accepted => "The request is accepted for processing",
            Self::Found => "The resource was found at a different location",
            Self::UseProxy => {
                "The resource must be accessed through a proxy\r\n\
                 indicated at the given location"
            }
            Self::Unauthorized => {
                "The server could not verify that you are authorized to\r\n\
                 access the requested document.  Either the supplied\r\n\
                 credentials were wrong (e.g., incorrect password), or\r\n\
                 your browser does not understand how to supply the\r\n\
                 required credentials"
            }
            Self::PaymentRequired => "Access was denied for financial reasons",
            Self::Forbidden => "Access to the requested resource was denied",
            Self::NotFound => "The requested resource could not be found",
            Self::ProxyAuthenticationRequired => {
                "Authentication with a local proxy is required"
            }
            Self::RequestTimeout => {
                "The server waited too long for the request to\r\n\
                 be sent by the client."
            }
            Self::Conflict => {
                "There was a conflict when trying to complete the request"
            }
            Self::Gone => "The requested resource is no longer available",
            Self::LengthRequired => {
                "Required Content-Length header was not sent by client"
            }
            Self::PreconditionFailed => "Request precondition failed",
            Self::RequestEntityTooLarge => {
                "The body of the request was too large for this server"
            }
            Self::RequestURITooLong => {
                "The request URI was too long for this server"
            }
            Self::RequestRangeNotSatisfiable => {
                "The range requested is not available"
            }
            Self::UnprocessableEntity => {
                "Unable to process the contained instructions"
            }
            Self::Locked => "The resource is locked",
            Self::FailedDependency => {
                "The method could not be performed because the requested\r\n\
                 action depended on another action and that action failed"
            }
            Self::BadRequest
            | Self::MethodNotAllowed
            | Self::NotAcceptable
            | Self::UnsupportedMediaType
            | Self::ExpectationFailed
            | Self::PreconditionRequired => CLIENT_ERROR_EXPLANATION,
            _ => "",
        }
    }

    /// Returns the explicit title where the catalog overrides the derived
    /// form.
    pub(crate) const fn title_override(&self) -> Option<&'static str> {
        match self {
            Self::Ok => Some("OK"),
            Self::NonAuthoritativeInformation => {
                Some("Non-Authoritative Information")
            }
            _ => None,
        }
    }

    /// Returns `false` for kinds whose responses carry no body at all.
    #[inline]
    pub const fn has_body(&self) -> bool {
        !matches!(self, Self::NoContent | Self::ResetContent | Self::NotModified)
    }

    /// Returns `true` for kinds that require a redirect location.
    #[inline]
    pub const fn needs_location(&self) -> bool {
        matches!(
            self,
            Self::MultipleChoices
                | Self::MovedPermanently
                | Self::Found
                | Self::SeeOther
                | Self::UseProxy
                | Self::TemporaryRedirect
        )
    }

    /// Returns `true` for status codes in the 200 range.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.code(), 200..=299)
    }

    /// Returns `true` for status codes in the 300 range.
    #[inline]
    pub const fn is_redirect(&self) -> bool {
        matches!(self.code(), 300..=399)
    }

    /// Returns `true` for status codes in the 400 and 500 ranges.
    #[inline]
    pub const fn is_error(&self) -> bool {
        self.code() >= 400
    }
}
