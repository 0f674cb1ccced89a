//! Scalar default values and text-to-scalar retrieval.
//!
//! Defaults arrive at the registration boundary as a tagged [`ArgValue`]
//! and are immediately normalized to text; values live as text for the
//! parser's whole lifetime and are re-parsed on demand via
//! [`FromArgText`].

/// A scalar accepted as a default value at registration time.
///
/// Whatever the variant, the value is flattened to its canonical textual
/// form before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    /// Canonical textual form used for storage and help display.
    pub(crate) fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Conversion from a stored textual value back into a caller-requested
/// scalar type.
///
/// `None` means the text does not read as the requested type; the parser
/// surfaces that as an incorrect-argument-type report rather than
/// silently defaulting.
pub trait FromArgText: Sized {
    fn from_arg_text(text: &str) -> Option<Self>;
}

impl FromArgText for String {
    fn from_arg_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl FromArgText for i64 {
    fn from_arg_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromArgText for f64 {
    fn from_arg_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromArgText for bool {
    /// Accepts both spellings: a matched flag stores the literal `true`,
    /// while a numeric default may have been normalized to `1`/`0`.
    fn from_arg_text(text: &str) -> Option<Self> {
        match text {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}
