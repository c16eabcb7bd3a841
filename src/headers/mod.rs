//! Typed HTTP header fields.
mod name;
mod value;
mod field;
mod error;

#[cfg(test)]
mod test;

pub use name::{HeaderName, standard};
pub use value::FieldValue;
pub use field::Header;
pub use error::HeaderError;
