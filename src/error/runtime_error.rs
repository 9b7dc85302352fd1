#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which operand of a binary expression an error refers to.
pub enum Side {
    /// The left-hand operand.
    Left,
    /// The right-hand operand.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum RuntimeError {
    /// An arithmetic or comparison operand is not a number.
    OperandNotNumber {
        /// The offending operand.
        side:     Side,
        /// The operator lexeme.
        operator: String,
        /// The type name of the value that was found.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A unary operator was applied to a value it does not accept, such as
    /// `!10` or `-true`.
    InvalidUnaryOperand {
        /// The operator lexeme.
        operator: String,
        /// The type name of the value that was found.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that is not an operator of the node it sits in.
    ///
    /// The parser never builds such a node; only hand-built trees can.
    UnsupportedOperator {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer negation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::OperandNotNumber { line, .. }
            | Self::InvalidUnaryOperand { line, .. }
            | Self::UnsupportedOperator { line, .. }
            | Self::Overflow { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandNotNumber { side,
                                     operator,
                                     found,
                                     line, } => write!(f,
                                                       "Error on line {line}: {side} operand of '{operator}' is not a number (found {found})."),
            Self::InvalidUnaryOperand { operator, found, line } => write!(f,
                                                                          "Error on line {line}: Cannot evaluate unary '{operator}' on {found}."),
            Self::UnsupportedOperator { operator, line } => {
                write!(f, "Error on line {line}: Unsupported operator '{operator}'.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
