use thiserror::Error;

/// Failure categories reported by the registry and parser.
///
/// Every failing operation hands one of these to the error callback (with
/// a context string naming the offending alias or aliases) and returns it
/// inside an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An alias in a registration call is already claimed by an earlier
    /// definition.
    #[error("Duplicate definition")]
    DuplicateDefinition,

    /// A required definition was never matched during the parse.
    #[error("Missing required argument")]
    MissingRequiredArgument,

    /// A stored value could not be re-parsed as the requested scalar type.
    #[error("Incorrect argument type")]
    IncorrectArgumentType,

    /// A value-consuming option was the final token, with nothing left to
    /// consume.
    #[error("Expected value")]
    ExpectedValue,
}

/// An error kind paired with the context it was reported with.
///
/// `context` carries the offending alias, or the space-joined alias list
/// of the definition involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}
