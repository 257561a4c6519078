/// Errors raised while splitting a line into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// No token rule matched at this character.
    #[error("Error at column {column}: Unrecognized token starting at '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// 1-based column of the character.
        column:    usize,
    },
    /// A run of digits does not fit into a 64-bit integer.
    #[error("Error at column {column}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written.
        literal: String,
        /// 1-based column where the literal starts.
        column:  usize,
    },
}

/// Errors raised by the recursive-descent parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The next token was not one of the kinds the grammar allows here.
    #[error("Error at column {column}: Expected {} but found {found}.", describe_expected(.expected))]
    UnexpectedToken {
        /// Token kinds that would have been accepted.
        expected: Vec<&'static str>,
        /// Kind of the token actually found.
        found:    &'static str,
        /// 1-based column of the found token.
        column:   usize,
    },
    /// Groups and calls are nested deeper than the parser allows.
    #[error("Error at column {column}: Expressions may nest at most {} levels deep.", crate::interpreter::parser::core::MAX_NESTING)]
    TooDeep {
        /// 1-based column of the group or call that goes one level too far.
        column: usize,
    },
}

fn describe_expected(expected: &[&'static str]) -> String {
    match expected {
        [single] => (*single).to_string(),
        many => format!("one of ({})", many.join(", ")),
    }
}
