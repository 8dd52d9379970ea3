//! C7: the virtual machine. Owns registers, the two stacks, and the
//! program counter; runs a borrowed instruction vector to completion.

use std::io::{self, Stdout, Write};

use crate::constants::REGISTER_COUNT;
use crate::error::{RuntimeError, StackKind};
use crate::instruction::Instruction;
use crate::value::Register;

/// `registers`, `operand_stack` and `call_stack` are logically separate:
/// interleaving return addresses with user-pushed values would make
/// `push`/`pop` around a `call` brittle (see the design notes on why the
/// two stacks aren't merged into one).
pub struct Vm<W: Write = Stdout> {
    next_pc: usize,
    registers: [f64; REGISTER_COUNT],
    operand_stack: Vec<f64>,
    call_stack: Vec<usize>,
    output: W,
}

impl Vm<Stdout> {
    /// A VM that prints to the process's standard output.
    pub fn new() -> Vm<Stdout> {
        Vm::with_output(io::stdout())
    }
}

impl Default for Vm<Stdout> {
    fn default() -> Self {
        Vm::new()
    }
}

impl<W: Write> Vm<W> {
    /// A VM that prints to an arbitrary sink; primarily for tests that
    /// want to assert on captured stdout.
    pub fn with_output(output: W) -> Vm<W> {
        Vm {
            next_pc: 0,
            registers: [0.0; REGISTER_COUNT],
            operand_stack: Vec::new(),
            call_stack: Vec::new(),
            output,
        }
    }

    pub fn register_read(&self, reg: Register) -> f64 {
        self.registers[reg.index() as usize]
    }

    pub fn register_write(&mut self, reg: Register, value: f64) {
        self.registers[reg.index() as usize] = value;
    }

    pub fn push(&mut self, value: f64) {
        self.operand_stack.push(value);
    }

    pub fn pop(&mut self) -> Result<f64, RuntimeError> {
        self.operand_stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow(StackKind::Operand))
    }

    pub fn push_call_frame(&mut self, pc: usize) {
        self.call_stack.push(pc);
    }

    pub fn pop_call_frame(&mut self) -> Result<usize, RuntimeError> {
        self.call_stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow(StackKind::Call))
    }

    pub fn next_pc(&self) -> usize {
        self.next_pc
    }

    pub fn set_next_pc(&mut self, pc: usize) {
        self.next_pc = pc;
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Unwraps the VM, handing back its output sink. Mainly useful for
    /// tests that capture `print` output into an in-memory buffer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs `instructions` to completion, starting at `entry`. Terminates
    /// when `next_pc` runs off the end of the instruction vector — a
    /// `jmp`/`return` that lands exactly at `instructions.len()` is a
    /// normal, successful termination, not an error.
    pub fn run(&mut self, instructions: &[Instruction], entry: usize) -> Result<(), RuntimeError> {
        self.next_pc = entry;
        while self.next_pc < instructions.len() {
            let instr = &instructions[self.next_pc];
            instr.execute(self)?;
        }
        Ok(())
    }
}
