//! `vortex`: a register-based virtual machine for a small assembly-like
//! language.
//!
//! This crate owns the closed instruction set and the execution engine.
//! Turning source text into a `Vec<Instruction>` is the job of the sibling
//! `vortex-asm` crate; this crate only knows how to run one.

pub mod constants;
pub mod error;
pub mod instruction;
pub mod value;
pub mod vm;

pub use error::RuntimeError;
pub use instruction::Instruction;
pub use value::{InvalidRegister, Literal, Register, Value};
pub use vm::Vm;
