use std::{
    cell::RefCell,
    collections::VecDeque,
    io::{self, BufReader},
    rc::Rc,
};

use rowsmith::{
    evaluate_line,
    input::ReaderDefiner,
    interpreter::{
        evaluator::{core::Environment, definer::Definer},
        value::{matrix::Matrix, rational::Rational},
    },
};

/// Answers definitions from queues and records every request.
#[derive(Default)]
struct Scripted {
    matrices: VecDeque<Option<Matrix>>,
    scalars:  VecDeque<Option<Rational>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl Scripted {
    fn matrix(mut self, m: Option<Matrix>) -> Self {
        self.matrices.push_back(m);
        self
    }

    fn scalar(mut self, s: Option<Rational>) -> Self {
        self.scalars.push_back(s);
        self
    }

    fn requests(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.requests)
    }
}

impl Definer for Scripted {
    fn define_matrix(&mut self, name: char) -> Option<Matrix> {
        self.requests.borrow_mut().push(format!("${name}"));
        self.matrices.pop_front().flatten()
    }

    fn define_anonymous_matrix(&mut self) -> Option<Matrix> {
        self.requests.borrow_mut().push("$$".to_string());
        self.matrices.pop_front().flatten()
    }

    fn define_scalar(&mut self, name: char) -> Option<Rational> {
        self.requests.borrow_mut().push(format!("${name}"));
        self.scalars.pop_front().flatten()
    }
}

fn r(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

#[test]
fn defined_matrix_is_stored_and_used() {
    let mut env = Environment::with_definer(Scripted::default().matrix(Some(Matrix::identity(2).unwrap())));

    let result = evaluate_line("$M * 4", &mut env).unwrap();

    assert_eq!(result.value.as_matrix().and_then(|m| m.get(2, 2)), Some(r(4, 1)));
    assert_eq!(env.matrix('M').unwrap(), &Matrix::identity(2).unwrap());
}

#[test]
fn anonymous_matrix_touches_no_named_slot() {
    let mut env = Environment::with_definer(Scripted::default().matrix(Some(Matrix::identity(2).unwrap())));

    evaluate_line("$$", &mut env).unwrap();

    for name in 'A'..='Y' {
        assert_eq!(env.matrix(name).unwrap(), &Matrix::zeros(3, 3).unwrap(), "slot {name}");
    }
    assert_eq!(env.last_matrix(), &Matrix::identity(2).unwrap());
}

#[test]
fn defined_scalar_is_stored_reduced() {
    let mut env = Environment::with_definer(Scripted::default().scalar(Some(r(4, 6))));

    let result = evaluate_line("$s", &mut env).unwrap();

    assert_eq!(result.value.as_scalar(), Some(r(2, 3)));
    let stored = env.scalar('s').unwrap();
    assert_eq!((stored.numerator(), stored.denominator()), (2, 3));
}

#[test]
fn cancellation_fails_the_line() {
    let mut env = Environment::with_definer(Scripted::default().matrix(None).scalar(None));

    let err = evaluate_line("$A", &mut env).unwrap_err();
    assert_eq!(err.kind(), "Cancelled");
    assert_eq!(err.to_string(), "User cancelled matrix input.");

    let err = evaluate_line("$a", &mut env).unwrap_err();
    assert_eq!(err.to_string(), "User cancelled scalar input.");
}

#[test]
fn definitions_survive_a_later_failure() {
    let mut env = Environment::with_definer(Scripted::default().scalar(Some(r(5, 1))));

    let err = evaluate_line("$a + A", &mut env).unwrap_err();

    assert_eq!(err.kind(), "TypeMismatch");
    assert_eq!(env.scalar('a').unwrap(), r(5, 1));
}

#[test]
fn unknown_function_is_rejected_before_asking() {
    let definer = Scripted::default().matrix(Some(Matrix::identity(2).unwrap()));
    let requests = definer.requests();
    let mut env = Environment::with_definer(definer);

    let err = evaluate_line("det($A)", &mut env).unwrap_err();

    assert_eq!(err.kind(), "UnknownFunction");
    assert!(requests.borrow().is_empty());
}

#[test]
fn factors_are_defined_left_to_right() {
    let definer = Scripted::default().matrix(Some(Matrix::identity(2).unwrap()))
                                     .matrix(Some(Matrix::identity(2).unwrap()))
                                     .scalar(Some(r(3, 1)));
    let requests = definer.requests();
    let mut env = Environment::with_definer(definer);

    evaluate_line("$B * $c / 1 + $$", &mut env).unwrap();

    assert_eq!(*requests.borrow(), ["$B", "$c", "$$"]);
}

#[test]
fn reader_definer_drives_an_evaluation() {
    let input = "1 2\n3 4\n\n";
    let mut env = Environment::with_definer(ReaderDefiner::new(input.as_bytes(), std::io::sink()));

    let result = evaluate_line("rref($A)", &mut env).unwrap();

    assert_eq!(result.value.as_matrix(), Some(&Matrix::identity(2).unwrap()));
    assert_eq!(env.matrix('A').unwrap().get(2, 1), Some(r(3, 1)));
}

#[test]
fn reader_definer_asks_again_for_bad_rows() {
    let input = "1 2\n3\n3 x\n3 4\n\n";
    let mut definer = ReaderDefiner::new(input.as_bytes(), Vec::new());

    let m = definer.define_matrix('A').unwrap();

    assert_eq!((m.rows(), m.columns()), (2, 2));
    assert_eq!(m.get(2, 2), Some(r(4, 1)));

    let transcript = String::from_utf8(definer.writer().clone()).unwrap();
    assert!(transcript.contains("[!] Expected 2 entries in this row but found 1."));
    assert!(transcript.contains("[!] 'x' is not a valid fraction."));
}

#[test]
fn reader_definer_cancels() {
    let mut definer = ReaderDefiner::new("1 2\ncancel\n".as_bytes(), Vec::new());
    assert!(definer.define_matrix('A').is_none());

    let mut definer = ReaderDefiner::new("1 2\n".as_bytes(), Vec::new());
    assert!(definer.define_anonymous_matrix().is_none());

    let mut definer = ReaderDefiner::new("cancel\n".as_bytes(), Vec::new());
    assert!(definer.define_scalar('a').is_none());
}

#[test]
fn reader_definer_reads_scalars() {
    let mut definer = ReaderDefiner::new("\n1/0\n-3/4\n".as_bytes(), Vec::new());

    assert_eq!(definer.define_scalar('a'), Some(r(-3, 4)));

    let transcript = String::from_utf8(definer.writer().clone()).unwrap();
    assert!(transcript.contains("[!] division by zero."));
}

#[test]
fn one_byte_buffer_leaves_later_lines_unread() {
    // Stands in for standard input, which the prompt loop keeps reading.
    let mut input = "1 2\n\nA + A\n".as_bytes();

    let mut definer = ReaderDefiner::new(BufReader::with_capacity(1, &mut input), io::sink());
    assert!(definer.define_matrix('A').is_some());
    drop(definer);

    assert_eq!(input, b"A + A\n");
}
