mod error;

use error::Error;
use exptree::{fmt::Latex, step_collector::Logged, ExpressionTree};
use log::{debug, LevelFilter};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, str::FromStr};

/// Options that control what is printed for each expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ReplOptions {
    /// Print the simplification steps.
    steps: bool,

    /// Also print the LaTeX form of each expression.
    latex: bool,
}

/// Splits the command-line arguments into the options and the optional input file.
fn parse_args(args: impl IntoIterator<Item = String>) -> (ReplOptions, Option<String>) {
    let mut options = ReplOptions::default();
    let mut filename = None;

    for arg in args {
        match arg.as_str() {
            "--steps" => options.steps = true,
            "--latex" => options.latex = true,
            _ if filename.is_none() => filename = Some(arg),
            _ => eprintln!("ignoring extra argument `{}`", arg),
        }
    }

    (options, filename)
}

/// Installs the terminal logger. The level is read from the `EXPTREE_LOG` environment variable,
/// and defaults to `warn`.
fn init_logger() {
    let level = std::env::var("EXPTREE_LOG")
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Warn);

    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("could not install logger: {}", err);
    }
}

/// Builds and simplifies the given postfix expression, returning the lines to print.
fn build_simplify(input: &str, options: ReplOptions) -> Result<Vec<String>, Error> {
    let tree = ExpressionTree::build(input)?;
    let mut lines = vec![format!("infix: {}", tree)];
    if options.latex {
        lines.push(format!("latex: {}", tree.as_display()));
    }

    let mut steps = Logged(Vec::new());
    let simplified = tree.simplify_with(&mut steps);
    if options.steps {
        lines.extend(steps.0.iter().enumerate().map(|(i, step)| format!("  {}. {:?}", i + 1, step)));
    }

    lines.push(format!("simplified: {}", simplified));
    if options.latex {
        lines.push(format!("latex: {}", simplified.as_display()));
    }

    Ok(lines)
}

/// Processes one line of input, printing the success or failure.
fn read_eval(input: &str, options: ReplOptions) {
    match build_simplify(input, options) {
        Ok(lines) => lines.iter().for_each(|line| println!("{}", line)),
        Err(err) => err.report_to_stderr(input),
    }
}

/// Processes every non-empty line of the given source.
fn execute(source: &str, options: ReplOptions) {
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        read_eval(line, options);
    }
}

/// Reads the whole file with the given name.
fn read_file(filename: &str) -> Result<String, Error> {
    let mut file = BufReader::new(File::open(filename)?);
    let mut input = String::new();
    file.read_to_string(&mut input)?;
    Ok(input)
}

fn main() {
    init_logger();

    let (options, filename) = parse_args(std::env::args().skip(1));
    debug!("options: {:?}", options);

    if let Some(filename) = filename {
        // run source file
        match read_file(&filename) {
            Ok(input) => execute(&input, options),
            Err(err) => {
                err.report_to_stderr("");
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            Error::from(err).report_to_stderr("");
            std::process::exit(1);
        }

        execute(&input, options);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, options: ReplOptions) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            read_eval(&input, options);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, options) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
