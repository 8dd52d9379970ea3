//! Runtime error taxonomy (§7 of the design). Unlike parse-time errors,
//! these carry no source context: by the time the VM is running, resolved
//! instructions no longer remember which line they came from (see
//! `Instruction`'s lifecycle notes).

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StackKind {
    Operand,
    Call,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::Operand => write!(f, "operand stack"),
            StackKind::Call => write!(f, "call stack"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuntimeError {
    /// `pop` (operand stack) or `return` (call stack) on an empty stack.
    StackUnderflow(StackKind),
    /// Integer `div`/`mod` with a zero divisor.
    DivByZero,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::StackUnderflow(kind) => {
                write!(f, "stack underflow: {} is empty", kind)
            }
            RuntimeError::DivByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
