/// Parsing errors.
///
/// Defines the errors the parser reports while building the syntax tree, and
/// which of them abandon the parse attempt.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree:
/// operand type mismatches, unsupported operators and numeric overflow.
pub mod runtime_error;
/// Lexical errors.
///
/// Errors recorded by the scanner. None of them stop scanning.
pub mod scan_error;

pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, Side};
pub use scan_error::ScanError;

#[derive(Debug, Clone, PartialEq)]
/// The first stage of the pipeline that failed, with everything it reported.
pub enum InterpretError {
    /// The scanner reported lexical errors.
    Scan(Vec<ScanError>),
    /// The parser reported errors; a fatal error is always the last one.
    Parse(Vec<ParseError>),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_all<E: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>,
                                           errors: &[E])
                                           -> std::fmt::Result {
            for (index, error) in errors.iter().enumerate() {
                if index > 0 {
                    writeln!(f)?;
                }
                write!(f, "{error}")?;
            }
            Ok(())
        }

        match self {
            Self::Scan(errors) => write_all(f, errors),
            Self::Parse(errors) => write_all(f, errors),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
