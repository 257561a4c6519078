use std::io::{BufRead, Write};

use crate::interpreter::{
    evaluator::definer::Definer,
    value::{matrix::Matrix, rational::Rational},
};

/// Line that abandons a definition.
const CANCEL: &str = "cancel";

/// A definer that has no way to ask anyone and always cancels.
///
/// This is what [`Environment::new`](crate::interpreter::evaluator::core::Environment::new)
/// installs, so `$A` fails with `Cancelled` until a real definer is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl Definer for NoInput {
    fn define_matrix(&mut self, _name: char) -> Option<Matrix> {
        None
    }

    fn define_anonymous_matrix(&mut self) -> Option<Matrix> {
        None
    }

    fn define_scalar(&mut self, _name: char) -> Option<Rational> {
        None
    }
}

/// Reads definitions as text, one matrix row or one scalar per line.
///
/// Entries of a row are separated by spaces or tabs and are written as `n`
/// or `n/d`. A matrix ends at the first blank line. A malformed entry or a row
/// whose length differs from the first row is reported on the writer and the
/// row is asked for again. End of input or the line `cancel` abandons the
/// definition.
///
/// ## Example
/// ```
/// use rowsmith::{
///     input::ReaderDefiner,
///     interpreter::{evaluator::definer::Definer, value::rational::Rational},
/// };
///
/// let text = "1 2\n3\t4/2\n\n";
/// let mut definer = ReaderDefiner::new(text.as_bytes(), Vec::new());
///
/// let m = definer.define_matrix('A').unwrap();
/// assert_eq!((m.rows(), m.columns()), (2, 2));
/// assert_eq!(m.get(2, 2), Some(Rational::from(2)));
///
/// // Nothing left to read.
/// assert!(definer.define_scalar('a').is_none());
/// ```
#[derive(Debug)]
pub struct ReaderDefiner<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderDefiner<R, W> {
    /// Creates a definer reading from `reader` and prompting on `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Everything prompted or reported so far goes here.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Reads one line without its line ending.
    ///
    /// Returns `None` at end of input, on a read error, or for the cancel line.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim();
                (line != CANCEL).then(|| line.to_string())
            },
        }
    }

    fn prompt(&mut self, text: &str) -> Option<()> {
        write!(self.writer, "{text}").ok()?;
        self.writer.flush().ok()
    }

    fn report(&mut self, problem: &str) -> Option<()> {
        writeln!(self.writer, "[!] {problem}.").ok()
    }

    fn read_matrix(&mut self, title: &str) -> Option<Matrix> {
        writeln!(self.writer,
                 "Define {title}: one row per line, a blank line to finish, '{CANCEL}' to abort.")
            .ok()?;

        let mut rows: Vec<Vec<Rational>> = Vec::new();
        loop {
            self.prompt(&format!("{}| ", rows.len() + 1))?;
            let line = self.read_line()?;

            if line.is_empty() {
                if rows.is_empty() {
                    self.report("A matrix needs at least one row")?;
                    continue;
                }
                break;
            }

            let parsed = line.split_whitespace()
                             .map(str::parse::<Rational>)
                             .collect::<Result<Vec<_>, _>>();
            let row = match parsed {
                Ok(row) => row,
                Err(e) => {
                    self.report(&e.to_string())?;
                    continue;
                },
            };

            if let Some(first) = rows.first()
               && first.len() != row.len()
            {
                let problem =
                    format!("Expected {} entries in this row but found {}", first.len(), row.len());
                self.report(&problem)?;
                continue;
            }

            rows.push(row);
        }

        let matrix = Matrix::from_rows(rows).ok()?;
        tracing::trace!(rows = matrix.rows(), columns = matrix.columns(), "read matrix");
        Some(matrix)
    }
}

impl<R: BufRead, W: Write> Definer for ReaderDefiner<R, W> {
    fn define_matrix(&mut self, name: char) -> Option<Matrix> {
        self.read_matrix(&format!("matrix {name}"))
    }

    fn define_anonymous_matrix(&mut self) -> Option<Matrix> {
        self.read_matrix("anonymous matrix")
    }

    fn define_scalar(&mut self, name: char) -> Option<Rational> {
        loop {
            self.prompt(&format!("Define scalar {name} ('{CANCEL}' to abort): "))?;
            let line = self.read_line()?;
            match line.parse::<Rational>() {
                Ok(value) => return Some(value),
                Err(e) => self.report(&e.to_string())?,
            }
        }
    }
}
