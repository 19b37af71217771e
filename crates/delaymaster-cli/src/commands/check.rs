use crate::cli::EngineArg;
use crate::support::{print_json, read_stdin_lines_or_exit};
use delaymaster_kernel::{Validator, Verdict};
use serde::Serialize;
use tracing::info;

pub struct Args {
    pub inputs: Vec<String>,
    pub stdin: bool,
    pub engine: EngineArg,
    pub strict_exit: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckRow<'a> {
    input: &'a str,
    verdict: Verdict,
}

pub fn run(args: Args) {
    let validator = Validator::new(args.engine.into());

    let mut inputs = args.inputs;
    if args.stdin {
        inputs.extend(read_stdin_lines_or_exit());
    }
    if inputs.is_empty() {
        if args.stdin {
            eprintln!("error: no input given (stdin had no lines and no arguments were passed)");
        } else {
            eprintln!("error: no input given (pass strings as arguments or use --stdin)");
        }
        std::process::exit(2);
    }

    let rows: Vec<CheckRow<'_>> = inputs
        .iter()
        .map(|input| CheckRow {
            input,
            verdict: validator.check(input),
        })
        .collect();
    let invalid = rows.iter().filter(|row| !row.verdict.is_valid()).count();
    info!(
        engine = %validator.engine(),
        checked = rows.len(),
        invalid,
        "check finished"
    );

    if args.json {
        print_json(&rows);
    } else {
        for row in &rows {
            println!("{}", row.verdict);
        }
    }

    if args.strict_exit && invalid > 0 {
        std::process::exit(1);
    }
}
