use std::fmt;

/// `+` or `-` between terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

/// `*` or `/` between factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOperator {
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

/// A slot of the environment named by a single letter.
///
/// Uppercase letters name matrix slots, lowercase letters name scalar slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Matrix slot `A` through `Z`.
    Matrix(char),
    /// Scalar slot `a` through `z`.
    Scalar(char),
}

impl Target {
    /// The slot letter.
    #[must_use]
    pub const fn name(&self) -> char {
        match self {
            Self::Matrix(c) | Self::Scalar(c) => *c,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The five ways a factor can refer to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableRef {
    /// `A`: read a matrix slot.
    Matrix(char),
    /// `a`: read a scalar slot.
    Scalar(char),
    /// `$A`: obtain a matrix from the definer and store it in the slot.
    DefineMatrix(char),
    /// `$a`: obtain a scalar from the definer and store it in the slot.
    DefineScalar(char),
    /// `$$`: obtain a matrix from the definer without storing it.
    DefineAnonymousMatrix,
}

impl VariableRef {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Matrix(_) => "mvar",
            Self::Scalar(_) => "svar",
            Self::DefineMatrix(_) => "dmvar",
            Self::DefineScalar(_) => "dsvar",
            Self::DefineAnonymousMatrix => "damvar",
        }
    }
}

/// The operand held by a [`Factor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorKind {
    /// An unsigned integer literal.
    Number(i64),
    /// A call such as `augment(A, B)`; there is always at least one argument.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions, in source order.
        arguments: Vec<Expr>,
    },
    /// A variable reference or definition.
    Variable(VariableRef),
    /// A parenthesized expression.
    Grouping(Box<Expr>),
}

/// The tightest-binding node: an optionally negated operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    /// True when the factor was written with a leading `-`.
    pub negated: bool,
    /// The operand itself.
    pub kind:    FactorKind,
}

/// A product chain: one factor followed by `*`/`/` and further factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The leading factor.
    pub first: Factor,
    /// Each following operator with the factor to its right.
    pub rest:  Vec<(MultiplicativeOperator, Factor)>,
}

/// A sum chain: one term followed by `+`/`-` and further terms.
///
/// Only the top-level expression of a line can carry a `target`; nested
/// expressions in parentheses or argument lists never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// The leading term.
    pub first:  Term,
    /// Each following operator with the term to its right.
    pub rest:   Vec<(AdditiveOperator, Term)>,
    /// The slot named after `->`, if any.
    pub target: Option<Target>,
}

impl Expr {
    /// An expression consisting of a single term.
    #[must_use]
    pub const fn from_term(first: Term) -> Self {
        Self { first,
               rest: Vec::new(),
               target: None }
    }
}

impl Term {
    /// A term consisting of a single factor.
    #[must_use]
    pub const fn from_factor(first: Factor) -> Self {
        Self { first,
               rest: Vec::new() }
    }
}

/// Structural rendering, e.g. `expr(term(factor(num 2) <mult> factor(mvar A)))`.
///
/// ## Example
/// ```
/// use rowsmith::interpreter::{lexer::tokenize, parser::parse};
///
/// let expr = parse(&tokenize("-2*A").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "expr(term(factor(-num 2) <mult> factor(mvar A)))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expr({}", self.first)?;
        for (op, term) in &self.rest {
            let op = match op {
                AdditiveOperator::Add => "plus",
                AdditiveOperator::Subtract => "minus",
            };
            write!(f, " <{op}> {term}")?;
        }
        if let Some(target) = &self.target {
            write!(f, " -> {target}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "term({}", self.first)?;
        for (op, factor) in &self.rest {
            let op = match op {
                MultiplicativeOperator::Multiply => "mult",
                MultiplicativeOperator::Divide => "div",
            };
            write!(f, " <{op}> {factor}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negated { "-" } else { "" };
        match &self.kind {
            FactorKind::Number(n) => write!(f, "factor({sign}num {n})"),
            FactorKind::Call { name, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "factor({sign}func {name}({}))", arguments.join(","))
            },
            FactorKind::Variable(variable) => match variable {
                VariableRef::Matrix(c)
                | VariableRef::Scalar(c)
                | VariableRef::DefineMatrix(c)
                | VariableRef::DefineScalar(c) => write!(f, "factor({sign}{} {c})", variable.kind()),
                VariableRef::DefineAnonymousMatrix => write!(f, "factor({sign}damvar)"),
            },
            FactorKind::Grouping(expr) => write!(f, "factor({sign}paren {expr})"),
        }
    }
}
