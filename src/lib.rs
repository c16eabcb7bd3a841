//! Typed HTTP header values and status responses.
//!
//! Provides the building blocks for composing a valid HTTP response
//! preamble: strongly-typed header fields with fixed wire serialization,
//! a response envelope pairing ordered headers with a one-shot body, and
//! a catalog of status values usable both as normal responses and as
//! raised errors.
#![warn(missing_debug_implementations)]

pub mod headers;
pub mod body;
pub mod response;
pub mod status;

mod log;

pub use headers::{FieldValue, Header, HeaderError, HeaderName};
pub use body::Body;
pub use response::Response;
pub use status::{Kind, Options, Status, StatusError};
