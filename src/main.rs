use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use numerus::{calc, util::logger::init_cli_logger};
use tracing::{info, warn};

/// numerus evaluates simple arithmetic on Arabic or Roman numerals, such as
/// `7 / 3` or `VII + III`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numerus to read expressions from a file, one per line, instead
    /// of evaluating `contents` directly.
    #[arg(short, long)]
    file: bool,

    /// Logs every stage of evaluation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, or a file path with `--file`. When
    /// omitted, expressions are read from stdin, one per line.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    match (args.file, args.contents) {
        (false, Some(expression)) => match calc(&expression) {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
        (true, Some(path)) => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::from(2);
            };
            info!(path = %path, "evaluating file");
            run_lines(script.lines().map(|line| Ok(line.to_string())))
        },
        (true, None) => {
            eprintln!("--file requires a path.");
            ExitCode::from(2)
        },
        (false, None) => run_lines(io::stdin().lock().lines()),
    }
}

/// Evaluates every non-blank line, printing results to stdout and errors to
/// stderr.
fn run_lines(lines: impl Iterator<Item = io::Result<String>>) -> ExitCode {
    let outcome = evaluate_lines(lines, &mut io::stdout().lock(), &mut io::stderr().lock());
    match &outcome {
        Ok(0) => {},
        Ok(failures) => warn!(failures, "some expressions failed"),
        Err(e) => eprintln!("{e}"),
    }

    ExitCode::from(exit_status(&outcome))
}

/// Maps the outcome of a run to the process exit status: 0 when every line
/// succeeded, 1 when some line failed, 2 when the input could not be read.
const fn exit_status(outcome: &io::Result<usize>) -> u8 {
    match outcome {
        Ok(0) => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// Writes the result of every non-blank line to `out` and every error to
/// `err`, prefixed with its 1-based line number.
///
/// Returns the number of lines that failed to evaluate.
fn evaluate_lines(lines: impl Iterator<Item = io::Result<String>>,
                  out: &mut impl Write,
                  err: &mut impl Write)
                  -> io::Result<usize> {
    let mut failures = 0;

    for (index, line) in lines.enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
                           io::Error::new(e.kind(), format!("Failed to read line {line_number}: {e}"))
                       })?;
        if line.trim().is_empty() {
            continue;
        }

        match calc(&line) {
            Ok(result) => writeln!(out, "{result}")?,
            Err(e) => {
                failures += 1;
                writeln!(err, "Line {line_number}: {e}")?;
            },
        }
    }

    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[&str]) -> (io::Result<usize>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = evaluate_lines(input.iter().map(|line| Ok((*line).to_string())),
                                      &mut out,
                                      &mut err);
        (failures,
         String::from_utf8(out).unwrap(),
         String::from_utf8(err).unwrap())
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (failures, out, err) = run(&["7 / 3", "", "   ", "X + I"]);
        assert_eq!(failures.unwrap(), 0);
        assert_eq!(out, "2\nXI\n");
        assert!(err.is_empty());
    }

    #[test]
    fn errors_carry_their_line_number() {
        let (failures, out, err) = run(&["1 + 1", "", "VII + 3", "4 / 0"]);
        assert_eq!(failures.unwrap(), 2);
        assert_eq!(out, "2\n");
        assert_eq!(err,
                   "Line 3: Error: Operands 'VII' and '3' must use the same notation.\nLine 4: \
                    Error: Division by zero: 4 / 0.\n");
    }

    #[test]
    fn one_failing_line_fails_the_run() {
        let (failures, ..) = run(&["II * II", "11 + 1", "X / II"]);
        assert_eq!(failures.as_ref().ok(), Some(&1));
        assert_eq!(exit_status(&failures), 1);

        let (failures, ..) = run(&["II * II"]);
        assert_eq!(exit_status(&failures), 0);
    }

    #[test]
    fn unreadable_input_stops_the_run() {
        let lines = vec![Ok("1 + 1".to_string()),
                         Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
                         Ok("2 + 2".to_string())];
        let mut out = Vec::new();
        let mut err = Vec::new();

        let e = evaluate_lines(lines.into_iter(), &mut out, &mut err).unwrap_err();
        assert_eq!(e.to_string(), "Failed to read line 2: bad bytes");
        assert_eq!(out, b"2\n");
        assert_eq!(exit_status(&Err(e)), 2);
    }
}
