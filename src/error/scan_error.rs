#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
///
/// Scan errors never stop the scanner; the offending text is dropped and the
/// error is reported next to the tokens that were recognised.
pub enum ScanError {
    /// A string literal was opened but the input ended before the closing
    /// `"`.
    UnterminatedString {
        /// The source line of the opening quote.
        line: usize,
    },
    /// A code point that cannot start any token.
    UnexpectedCharacter {
        /// The rejected code point.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl ScanError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line } | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: unterminated string.")
            },
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected token '{character}'.")
            },
        }
    }
}

impl std::error::Error for ScanError {}
