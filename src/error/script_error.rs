use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A failed `eval`, with the place where evaluation stopped.
pub struct ScriptError {
    /// What went wrong.
    pub kind:     ErrorKind,
    /// Byte offset of the token the evaluator stopped at.
    pub position: usize,
    /// The 1-based line containing `position`.
    pub line:     usize,
}

impl ScriptError {
    /// Builds an error for `kind`, deriving the line number from `position`
    /// within `source`.
    ///
    /// # Example
    /// ```
    /// use cinder::error::{ErrorKind, ScriptError};
    ///
    /// let err = ScriptError::new(ErrorKind::SyntaxError, "a\nb", 2);
    /// assert_eq!(err.line, 2);
    /// ```
    #[must_use]
    pub fn new(kind: ErrorKind, source: &str, position: usize) -> Self {
        let position = position.min(source.len());
        let line = source.as_bytes()[..position].iter()
                                                .filter(|&&b| b == b'\n')
                                                .count()
                   + 1;
        Self { kind,
               position,
               line }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ScriptError> for ErrorKind {
    fn from(err: ScriptError) -> Self {
        err.kind
    }
}
