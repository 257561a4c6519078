use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token of one input line.
///
/// Longest match decides between overlapping rules, so `->` is an arrow
/// rather than a minus, two or more letters form a function name, and a lone
/// letter is always a variable.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `->`
    #[token("->")]
    Arrow,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Unsigned integer literal, such as `42`. Signs belong to factors.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// Function name of at least two letters, such as `rref`.
    #[regex(r"[a-zA-Z][a-zA-Z]+", |lex| lex.slice().to_string())]
    Function(String),
    /// `$A`: ask for a matrix and store it in `A`.
    #[regex(r"\$[A-Z]", last_char)]
    DefineMatrix(char),
    /// `$a`: ask for a scalar and store it in `a`.
    #[regex(r"\$[a-z]", last_char)]
    DefineScalar(char),
    /// `$$`: ask for a matrix without storing it.
    #[token("$$")]
    DefineAnonymousMatrix,
    /// Matrix variable `A` through `Z`.
    #[regex(r"[A-Z]", last_char)]
    MatrixVariable(char),
    /// Scalar variable `a` through `z`.
    #[regex(r"[a-z]", last_char)]
    ScalarVariable(char),
    /// Appended once after the last real token.
    EndOfInput,
}

impl Token {
    /// Short name of the token kind, as used in parse error messages.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Number(3).kind(), "num");
    /// assert_eq!(Token::DefineAnonymousMatrix.kind(), "damvar");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Star => "mult",
            Self::Slash => "div",
            Self::Arrow => "arrow",
            Self::Comma => "comma",
            Self::LParen => "lparen",
            Self::RParen => "rparen",
            Self::Number(_) => "num",
            Self::Function(_) => "func",
            Self::DefineMatrix(_) => "dmvar",
            Self::DefineScalar(_) => "dsvar",
            Self::DefineAnonymousMatrix => "damvar",
            Self::MatrixVariable(_) => "mvar",
            Self::ScalarVariable(_) => "svar",
            Self::EndOfInput => "EOF",
        }
    }
}

/// Prints the literal text the token was read from.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Arrow => write!(f, "->"),
            Self::Comma => write!(f, ","),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Function(name) => write!(f, "{name}"),
            Self::DefineMatrix(c) | Self::DefineScalar(c) => write!(f, "${c}"),
            Self::DefineAnonymousMatrix => write!(f, "$$"),
            Self::MatrixVariable(c) | Self::ScalarVariable(c) => write!(f, "{c}"),
            Self::EndOfInput => Ok(()),
        }
    }
}

/// Why the generated lexer rejected a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFailure {
    /// No rule matched.
    #[default]
    Unrecognized,
    /// Digits that overflow `i64`.
    TooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexFailure::TooLarge)`: If the digits do not fit into `i64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<i64, LexFailure> {
    lex.slice().parse().map_err(|_| LexFailure::TooLarge)
}

/// The variable letter of a one- or two-character variable token.
fn last_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().last()
}

/// Splits a line into tokens.
///
/// Each token is paired with its 1-based column. Whitespace between tokens is
/// skipped, and the sequence always ends with [`Token::EndOfInput`].
///
/// # Errors
/// - `UnrecognizedCharacter` if a character starts no token, e.g. `#` or a
///   `$` not followed by a letter or another `$`.
/// - `LiteralTooLarge` if a number does not fit into 64 bits.
///
/// # Example
/// ```
/// use rowsmith::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-2*rref($A) -> B").unwrap();
/// let kinds: Vec<&str> = tokens.iter().map(|(t, _)| t.kind()).collect();
///
/// assert_eq!(kinds,
///            ["minus", "num", "mult", "func", "lparen", "dmvar", "rparen", "arrow", "mvar", "EOF"]);
/// assert_eq!(tokens[3], (Token::Function("rref".to_string()), 4));
///
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let column = line[..span.start].chars().count() + 1;

        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(LexFailure::TooLarge) => {
                return Err(LexError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                       column });
            },
            Err(LexFailure::Unrecognized) => {
                let character = line[span.start..].chars().next().unwrap_or('\0');
                return Err(LexError::UnrecognizedCharacter { character,
                                                             column });
            },
        }
    }

    let end = line.chars().count() + 1;
    tokens.push((Token::EndOfInput, end));
    tracing::trace!(count = tokens.len(), "tokenized line");

    Ok(tokens)
}
