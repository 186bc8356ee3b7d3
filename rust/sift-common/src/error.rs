use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn not_found(what: impl Into<String>) -> Error {
        Error(ErrorKind::NotFound { what: what.into() }.into())
    }

    /// Wraps an error raised while comparing a key against an element.
    ///
    /// Comparators build this themselves; the search cursors pass it through
    /// to the caller untouched.
    pub fn comparator<E>(source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::Comparator {
                source: Box::new(source),
            }
            .into(),
        )
    }

    /// Returns `true` if this is the recoverable "nothing matched" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound { .. })
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("not found: {what}")]
    NotFound { what: String },

    #[error("comparator failed: {source}")]
    Comparator { source: StdErrorBoxed },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let e = Error::not_found("element");
        assert!(e.is_not_found());
        assert!(!e.is_invalid_arg());
        assert_eq!(e.to_string(), "not found: element");

        let e = Error::invalid_arg("step", "step != 0");
        assert!(e.is_invalid_arg());
        assert_eq!(e.to_string(), "invalid argument step: step != 0");

        let io = std::io::Error::other("incomparable");
        let e = Error::comparator(io);
        match e.into_kind() {
            ErrorKind::Comparator { source } => assert_eq!(source.to_string(), "incomparable"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
