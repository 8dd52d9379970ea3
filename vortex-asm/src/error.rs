//! Parse-time error taxonomy (§7). Every variant carries the `Context`
//! (filename + 1-based line number) of the raw instruction or label that
//! triggered it, and renders as `[<filename>: <line>] <message>`.

use std::fmt;
use std::rc::Rc;

/// Cheaply cloned: every raw instruction on a line shares the same
/// filename, so it's kept behind an `Rc<str>` rather than duplicated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Context {
    pub file: Rc<str>,
    pub line: usize,
}

impl Context {
    pub fn new(file: Rc<str>, line: usize) -> Context {
        Context { file, line }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.file, self.line)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    ExpectedRegister { ctx: Context, received: String },
    InvalidRegister { ctx: Context, received: String },
    ExpectedLiteral { ctx: Context, received: String },
    ExpectedArgument { ctx: Context },
    UnexpectedArguments { ctx: Context },
    UnknownLabel { ctx: Context, label: String },
    InvalidLabel { ctx: Context, label: String },
    ConflictingLabel { ctx: Context, label: String },
    UnknownInstruction { ctx: Context, mnemonic: String },
    MissingEntryPoint,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedRegister { ctx, received } => {
                write!(f, "{} Expected a register, but received: {}", ctx, received)
            }
            ParseError::InvalidRegister { ctx, received } => {
                write!(f, "{} Invalid register: {}", ctx, received)
            }
            ParseError::ExpectedLiteral { ctx, received } => {
                write!(f, "{} Expected a literal, but received: {}", ctx, received)
            }
            ParseError::ExpectedArgument { ctx } => write!(f, "{} Expected an argument", ctx),
            ParseError::UnexpectedArguments { ctx } => {
                write!(f, "{} Received more than expected arguments", ctx)
            }
            ParseError::UnknownLabel { ctx, label } => {
                write!(f, "{} Unknown label: {}", ctx, label)
            }
            ParseError::InvalidLabel { ctx, label } => {
                write!(f, "{} Invalid label identifier: {}", ctx, label)
            }
            ParseError::ConflictingLabel { ctx, label } => {
                write!(f, "{} Conflicting definition for label: {}", ctx, label)
            }
            ParseError::UnknownInstruction { ctx, mnemonic } => {
                write!(f, "{} Unknown instruction: {}", ctx, mnemonic)
            }
            ParseError::MissingEntryPoint => {
                write!(f, "No entry point found (label `main` is not defined)")
            }
        }
    }
}

impl std::error::Error for ParseError {}
