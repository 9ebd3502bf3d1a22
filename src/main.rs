use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use triple_bst::input::{InputError, TokenReader};
use triple_bst::tree::{ByX, ByY, Tree};

/// Reads COUNT records of three whitespace-separated integers `x y z` from
/// standard input, followed by one search key. Prints the records in
/// ascending `x`, then in postorder of a second tree rebuilt keyed by `y`,
/// then the record closest to the key on its search path.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// How many `x y z` records to read before the search key.
    #[arg(allow_negative_numbers = true)]
    count: i32,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("Warning: need exactly 1 command line argument");
            return ExitCode::FAILURE;
        }
    };

    if cli.count == 0 {
        println!("The tree is empty");
        return ExitCode::SUCCESS;
    }
    // A negative count fails without a message; only a wrong argument shape
    // gets the warning.
    if cli.count < 0 {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(cli.count as usize, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Reads the records and the key, then writes the three report sections.
fn run(count: usize, input: impl BufRead, out: &mut impl Write) -> Result<(), InputError> {
    let mut tokens = TokenReader::new(input);

    let mut by_x = Tree::<ByX>::new();
    for _ in 0..count {
        by_x.insert(tokens.next_triple()?);
    }
    for record in by_x.in_order() {
        writeln!(out, "{record}")?;
    }

    let by_y = Tree::<ByY>::rekeyed(&by_x);
    for record in by_y.post_order() {
        writeln!(out, "{record}")?;
    }

    // The key arrives after the records, once both trees are reported.
    let key = tokens.next_int()?;
    if let Some(record) = by_y.search(key) {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn run_to_string(count: usize, input: &str) -> String {
        let mut out = Vec::new();
        run(count, Cursor::new(input), &mut out).expect("input is well-formed");
        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn a_single_record_fills_all_three_sections() {
        assert_eq!(
            run_to_string(1, "5 5 5\n5\n"),
            "(5, 5, 5)\n(5, 5, 5)\n(5, 5, 5)\n"
        );
    }

    #[test]
    fn records_print_by_x_then_by_y_then_the_closest_match() {
        let output = run_to_string(3, "3 3 3\n1 1 1\n2 2 2\n0\n");
        assert_eq!(
            output,
            "(1, 1, 1)\n(2, 2, 2)\n(3, 3, 3)\n(2, 2, 2)\n(1, 1, 1)\n(3, 3, 3)\n(1, 1, 1)\n"
        );
    }

    #[test]
    fn records_and_key_may_share_lines() {
        let output = run_to_string(1, "8 9 10 9");
        assert_eq!(output, "(8, 9, 10)\n(8, 9, 10)\n(8, 9, 10)\n");
    }

    #[test]
    fn truncated_input_reports_the_end_of_stream() {
        let mut out = Vec::new();
        let result = run(2, Cursor::new("1 2 3\n"), &mut out);
        assert!(matches!(result, Err(InputError::UnexpectedEnd)));
    }
}
