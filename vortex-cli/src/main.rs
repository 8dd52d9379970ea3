//! The trivial CLI surround spec.md places out of the core's scope:
//! argument-count check, `help` subcommand, synopsis text, and mapping a
//! failure in any layer below to an exit code and a one-line diagnostic.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use vortex::Vm;
use vortex_asm::ParseError;

const SYNOPSIS: &str = "\
Usage: vortex <script>|help

A register-based virtual machine for a small assembly-like language.
Each program must declare a `main` label as its entry point.";

enum Error {
    Io(io::Error, PathBuf),
    Parse(ParseError),
    Runtime(vortex::RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, path) => write!(f, "Could not open file \"{}\": {}", path.display(), err),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

impl From<vortex::RuntimeError> for Error {
    fn from(err: vortex::RuntimeError) -> Error {
        Error::Runtime(err)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        println!("{}", SYNOPSIS);
        return ExitCode::FAILURE;
    }

    if args[1] == "help" {
        println!("{}", SYNOPSIS);
        return ExitCode::SUCCESS;
    }

    match run(&args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(script_path: &str) -> Result<(), Error> {
    let path = PathBuf::from(script_path);
    let source = fs::read_to_string(&path).map_err(|err| Error::Io(err, path.clone()))?;

    let (instructions, labels) = vortex_asm::parse(&source, script_path)?;
    let entry = vortex_asm::entry_point(&labels)?;

    let mut vm = Vm::new();
    vm.run(&instructions, entry)?;
    Ok(())
}
