use std::borrow::Cow;

/// Typed raw value of a header field.
///
/// The raw value is what a header was constructed from; the wire form is
/// derived from it by [`string_value`][FieldValue::string_value]. For plain
/// string headers the two coincide, for numeric, enumerated and composite
/// headers they differ.
///
/// The derived `Ord` is total, so header collections sort
/// deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue {
    /// Free-form text value.
    Str(Cow<'static, str>),
    /// Non-negative integer value.
    Int(u64),
    /// Index into a fixed list of allowed tokens.
    Token {
        tokens: &'static [&'static str],
        index: usize,
    },
    /// Authentication method plus opaque payload, e.g. `Basic dXNlcg==`.
    Credentials { method: String, payload: String },
    /// Authentication method plus realm, e.g. `Basic realm=wally`.
    Challenge { method: String, realm: String },
}

impl FieldValue {
    /// Derive the wire-formatted value.
    ///
    /// Pure derivation with no side effects. Borrows where the wire form
    /// equals the stored text, allocates for composite and numeric values.
    pub fn string_value(&self) -> Cow<'_, str> {
        match self {
            Self::Str(value) => Cow::Borrowed(value),
            Self::Int(value) => {
                let mut buf = itoa::Buffer::new();
                Cow::Owned(buf.format(*value).to_owned())
            }
            Self::Token { tokens, index } => Cow::Borrowed(tokens[*index]),
            Self::Credentials { method, payload } => {
                Cow::Owned(format!("{method} {payload}"))
            }
            Self::Challenge { method, realm } => {
                Cow::Owned(format!("{method} realm={realm}"))
            }
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string_value())
    }
}
