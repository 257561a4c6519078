use std::io::{self, BufRead, BufReader, Write};

use clap::Parser;
use rowsmith::{
    evaluate_line,
    input::ReaderDefiner,
    interpreter::{
        evaluator::{core::Environment, function::core::BUILTIN_FUNCTIONS},
        value::core::Value,
    },
};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when `--log-level` is not given.
const LOG_ENV: &str = "ROWSMITH_LOG";

/// rowsmith evaluates exact scalar and matrix expressions such as
/// `rref(augment($A, identity(3))) -> B`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter such as `debug` or `rowsmith=trace`. Falls back to
    /// ROWSMITH_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<String>,

    /// Expressions to evaluate in order. Without any, lines are read from
    /// standard input until end of input or `exit`.
    expressions: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    // Stdin is buffered already. A default-sized buffer here would pull the
    // prompt loop's next lines out of it; one byte never reads past a line.
    let definer = ReaderDefiner::new(BufReader::with_capacity(1, io::stdin()), io::stdout());
    let mut env = Environment::with_definer(definer);

    if !args.expressions.is_empty() {
        for expression in &args.expressions {
            run_line(expression, &mut env);
        }
        return;
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match line.trim() {
            "" => println!("{}", env.last_matrix().reduced()),
            "exit" => break,
            "help" => print_help(),
            "clear" => env.clear(),
            expression => run_line(expression, &mut env),
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = level.map(str::to_string)
                      .or_else(|| std::env::var(LOG_ENV).ok())
                      .unwrap_or_else(|| "warn".to_string());

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(filter))
                                              .with_writer(io::stderr)
                                              .with_target(true)
                                              .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run_line(line: &str, env: &mut Environment) {
    match evaluate_line(line, env) {
        Ok(evaluation) => {
            if let Some(target) = evaluation.assigned {
                println!("{target} =");
            }
            match evaluation.value {
                Value::Scalar(s) => println!("{}", s.reduce()),
                Value::Matrix(m) => println!("{}", m.reduced()),
            }
        },
        Err(e) => eprintln!("[!] {e}"),
    }
}

fn print_help() {
    println!("Enter an expression such as `2 * A + B -> C`.");
    println!("  A-Z  matrix variables (Z holds the last matrix result)");
    println!("  a-z  scalar variables (z holds the last scalar result)");
    println!("  $A   define A by typing its rows, $a defines a scalar, $$ an unnamed matrix");
    println!("Functions: {}", BUILTIN_FUNCTIONS.join(", "));
    println!("Commands: help, clear, exit. An empty line shows the last matrix result.");
}
