//! C3: the closed instruction set. Each variant carries only the operands
//! it needs and is executed by a single `execute` method implemented as a
//! pattern match — the value-type equivalent of the original's virtual
//! `Instruction::execute`, without per-instruction heap allocation.

use std::io::Write;

use crate::constants::EPSILON;
use crate::error::RuntimeError;
use crate::value::{Register, Value};
use crate::vm::Vm;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IfKind {
    Eq,
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl IfKind {
    fn holds(self, a: f64, b: f64) -> bool {
        match self {
            IfKind::Eq => (a - b).abs() < EPSILON,
            IfKind::Neq => a != b,
            IfKind::Lt => a < b,
            IfKind::Gt => a > b,
            IfKind::LtEq => a <= b,
            IfKind::GtEq => a >= b,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Xor,
}

impl IntOp {
    /// `a`/`b` are the register/operand values truncated to `i64`, per the
    /// VM's mixed-type contract (§3, §9 "Numeric type"). Returns `None`
    /// only for `Div`/`Mod` with a zero divisor.
    fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            IntOp::Add => Some(a.wrapping_add(b)),
            IntOp::Sub => Some(a.wrapping_sub(b)),
            IntOp::Mul => Some(a.wrapping_mul(b)),
            IntOp::Div => a.checked_div(b),
            IntOp::Mod => a.checked_rem(b),
            IntOp::And => Some(a & b),
            IntOp::Or => Some(a | b),
            IntOp::Xor => Some(a ^ b),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FloatOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl FloatOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            FloatOp::Add => a + b,
            FloatOp::Sub => a - b,
            FloatOp::Mul => a * b,
            FloatOp::Div => a / b,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Instruction {
    Mov {
        dst: Register,
        src: Value,
    },
    If {
        kind: IfKind,
        a: Value,
        b: Value,
    },
    Jmp {
        target: usize,
    },
    Call {
        target: usize,
    },
    Return,
    IntBinOp {
        op: IntOp,
        dst: Register,
        src: Value,
    },
    FloatBinOp {
        op: FloatOp,
        dst: Register,
        src: Value,
    },
    Push {
        value: Value,
    },
    Pop {
        dst: Register,
    },
    Print {
        value: Value,
    },
}

impl Instruction {
    /// Advances `vm` by exactly one instruction. The instruction itself is
    /// responsible for the program counter update — there is no implicit
    /// post-increment in the dispatch loop.
    pub fn execute<W: Write>(&self, vm: &mut Vm<W>) -> Result<(), RuntimeError> {
        let pc = vm.next_pc();
        match *self {
            Instruction::Mov { dst, src } => {
                vm.register_write(dst, src.resolve(vm));
                vm.set_next_pc(pc + 1);
            }

            Instruction::If { kind, a, b } => {
                if kind.holds(a.resolve(vm), b.resolve(vm)) {
                    vm.set_next_pc(pc + 1);
                } else {
                    vm.set_next_pc(pc + 2);
                }
            }

            Instruction::Jmp { target } => {
                vm.set_next_pc(target);
            }

            Instruction::Call { target } => {
                vm.push_call_frame(pc + 1);
                vm.set_next_pc(target);
            }

            Instruction::Return => {
                let target = vm.pop_call_frame()?;
                vm.set_next_pc(target);
            }

            Instruction::IntBinOp { op, dst, src } => {
                let a = vm.register_read(dst) as i64;
                let b = src.resolve(vm) as i64;
                let result = op.apply(a, b).ok_or(RuntimeError::DivByZero)?;
                vm.register_write(dst, result as f64);
                vm.set_next_pc(pc + 1);
            }

            Instruction::FloatBinOp { op, dst, src } => {
                let a = vm.register_read(dst);
                let b = src.resolve(vm);
                vm.register_write(dst, op.apply(a, b));
                vm.set_next_pc(pc + 1);
            }

            Instruction::Push { value } => {
                vm.push(value.resolve(vm));
                vm.set_next_pc(pc + 1);
            }

            Instruction::Pop { dst } => {
                let value = vm.pop()?;
                vm.register_write(dst, value);
                vm.set_next_pc(pc + 1);
            }

            Instruction::Print { value } => {
                let _ = vm.write_line(&format_number(value.resolve(vm)));
                vm.set_next_pc(pc + 1);
            }
        }
        Ok(())
    }
}

/// Prints integral-valued doubles without a trailing `.0`, matching the
/// convention most assembly-style VMs use for numeric output (§9 Q2).
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < (i64::MAX as f64) {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
