use rowsmith::{
    ast::{FactorKind, MultiplicativeOperator, Target, VariableRef},
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{core::MAX_NESTING, parse},
    },
};
use rstest::rstest;

fn kinds(line: &str) -> Vec<&'static str> {
    tokenize(line).unwrap().iter().map(|(t, _)| t.kind()).collect()
}

fn tree(line: &str) -> String {
    parse(&tokenize(line).unwrap()).unwrap().to_string()
}

fn parse_error(line: &str) -> String {
    parse(&tokenize(line).unwrap()).unwrap_err().to_string()
}

#[rstest]
#[case("", &["EOF"])]
#[case("   \t ", &["EOF"])]
#[case("12+x", &["num", "plus", "svar", "EOF"])]
#[case("A->b", &["mvar", "arrow", "svar", "EOF"])]
#[case("ab", &["func", "EOF"])]
#[case("aB(C)", &["func", "lparen", "mvar", "rparen", "EOF"])]
#[case("$A $a $$", &["dmvar", "dsvar", "damvar", "EOF"])]
#[case("1,2/3*4", &["num", "comma", "num", "div", "num", "mult", "num", "EOF"])]
fn tokens_by_kind(#[case] line: &str, #[case] expected: &[&str]) {
    assert_eq!(kinds(line), expected);
}

#[test]
fn arrow_must_be_written_without_a_gap() {
    assert_eq!(tokenize("a - > b"),
               Err(LexError::UnrecognizedCharacter { character: '>', column: 5 }));
}

#[test]
fn tokens_carry_columns() {
    let tokens = tokenize("  rref( $Q )").unwrap();
    let columns: Vec<usize> = tokens.iter().map(|(_, c)| *c).collect();
    assert_eq!(columns, [3, 7, 9, 12, 13]);
    assert_eq!(tokens[2].0, Token::DefineMatrix('Q'));
}

#[rstest]
#[case("2 # 3", '#', 3)]
#[case("$", '$', 1)]
#[case("A $1", '$', 3)]
#[case("1.5", '.', 2)]
fn unrecognized_characters(#[case] line: &str, #[case] character: char, #[case] column: usize) {
    assert_eq!(tokenize(line),
               Err(LexError::UnrecognizedCharacter { character, column }));
}

#[test]
fn oversized_literal_is_rejected() {
    let err = tokenize("1 + 99999999999999999999").unwrap_err();
    assert_eq!(err,
               LexError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                           column:  5, });
}

#[rstest]
#[case("2", "expr(term(factor(num 2)))")]
#[case("1 + 2 - 3", "expr(term(factor(num 1)) <plus> term(factor(num 2)) <minus> term(factor(num 3)))")]
#[case("2*A/b", "expr(term(factor(num 2) <mult> factor(mvar A) <div> factor(svar b)))")]
#[case("-(a)", "expr(term(factor(-paren expr(term(factor(svar a))))))")]
#[case("augment(A, $$)", "expr(term(factor(func augment(expr(term(factor(mvar A))),expr(term(factor(damvar)))))))")]
#[case("$B -> C", "expr(term(factor(dmvar B)) -> C)")]
#[case("-$x", "expr(term(factor(-dsvar x)))")]
fn structure(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(tree(line), expected);
}

#[test]
fn nested_calls_and_target() {
    let expr = parse(&tokenize("-rref(invert(A) * 2) / x -> R").unwrap()).unwrap();

    assert_eq!(expr.target, Some(Target::Matrix('R')));
    assert!(expr.rest.is_empty());
    assert_eq!(expr.first.rest.len(), 1);
    assert_eq!(expr.first.rest[0].0, MultiplicativeOperator::Divide);
    assert!(matches!(expr.first.rest[0].1.kind, FactorKind::Variable(VariableRef::Scalar('x'))));

    let first = &expr.first.first;
    assert!(first.negated);
    let FactorKind::Call { name, arguments } = &first.kind else {
        panic!("expected a call, found {first}");
    };
    assert_eq!(name, "rref");
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].target, None);
}

#[rstest]
#[case("", "Error at column 1: Expected one of (minus, num, func, dmvar, dsvar, damvar, mvar, svar, lparen) but found EOF.")]
#[case("--1", "Error at column 2: Expected one of (num, func, dmvar, dsvar, damvar, mvar, svar, lparen) but found minus.")]
#[case("(1", "Error at column 3: Expected rparen but found EOF.")]
#[case("rref A", "Error at column 6: Expected lparen but found mvar.")]
#[case("rref(A B)", "Error at column 8: Expected one of (comma, rparen) but found mvar.")]
#[case("A B", "Error at column 3: Expected one of (plus, minus, mult, div, arrow, EOF) but found mvar.")]
#[case("A -> 3", "Error at column 6: Expected one of (mvar, svar) but found num.")]
#[case("A -> B -> C", "Error at column 8: Expected EOF but found arrow.")]
#[case("(A -> B)", "Error at column 4: Expected rparen but found arrow.")]
fn syntax_errors(#[case] line: &str, #[case] message: &str) {
    assert_eq!(parse_error(line), message);
}

#[test]
fn parse_errors_carry_expected_kinds() {
    let err = parse(&tokenize("1 +").unwrap()).unwrap_err();
    let ParseError::UnexpectedToken { expected, found, column } = err else {
        panic!("expected an unexpected-token error");
    };
    assert!(expected.contains(&"num"));
    assert_eq!(found, "EOF");
    assert_eq!(column, 4);
}

fn nested(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let line = nested(MAX_NESTING, "1");
    assert!(parse(&tokenize(&line).unwrap()).is_ok());

    let calls = format!("{}A{}", "transpose(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(parse(&tokenize(&calls).unwrap()).is_ok());
}

#[rstest]
#[case(nested(MAX_NESTING + 1, "1"), MAX_NESTING + 1)]
#[case(nested(10_000, "1"), MAX_NESTING + 1)]
#[case(format!("-{}", nested(MAX_NESTING + 1, "2")), MAX_NESTING + 2)]
fn nesting_past_the_limit_is_rejected(#[case] line: String, #[case] column: usize) {
    let err = parse(&tokenize(&line).unwrap()).unwrap_err();
    assert_eq!(err, ParseError::TooDeep { column });
}

#[test]
fn deep_calls_are_rejected_at_the_call() {
    let line = format!("{}A{}", "rref(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    let err = parse(&tokenize(&line).unwrap()).unwrap_err();
    assert_eq!(err, ParseError::TooDeep { column: MAX_NESTING * 5 + 1 });
}
