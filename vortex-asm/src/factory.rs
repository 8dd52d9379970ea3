//! C5: the keyword-to-constructor table. Built once, shared read-only —
//! adding an opcode means adding one constructor and one entry here.

use std::collections::HashMap;
use std::sync::OnceLock;

use vortex::instruction::{FloatOp, IfKind, IntOp, Instruction};

use crate::arg_reader::ArgReader;
use crate::error::ParseError;

type Constructor = fn(&mut ArgReader) -> Result<Instruction, ParseError>;

fn mov(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    let dst = reader.expect_register()?;
    let src = reader.expect_value()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::Mov { dst, src })
}

fn if_instruction(kind: IfKind) -> Constructor {
    match kind {
        IfKind::Eq => |r| if_with_kind(r, IfKind::Eq),
        IfKind::Neq => |r| if_with_kind(r, IfKind::Neq),
        IfKind::Lt => |r| if_with_kind(r, IfKind::Lt),
        IfKind::Gt => |r| if_with_kind(r, IfKind::Gt),
        IfKind::LtEq => |r| if_with_kind(r, IfKind::LtEq),
        IfKind::GtEq => |r| if_with_kind(r, IfKind::GtEq),
    }
}

fn if_with_kind(reader: &mut ArgReader, kind: IfKind) -> Result<Instruction, ParseError> {
    let a = reader.expect_value()?;
    let b = reader.expect_value()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::If { kind, a, b })
}

fn jmp(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    let target = reader.expect_label_location()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::Jmp { target })
}

fn call(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    let target = reader.expect_label_location()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::Call { target })
}

fn return_instruction(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    reader.expect_end_of_args()?;
    Ok(Instruction::Return)
}

fn int_bin_op(op: IntOp) -> Constructor {
    match op {
        IntOp::Add => |r| int_bin_op_with(r, IntOp::Add),
        IntOp::Sub => |r| int_bin_op_with(r, IntOp::Sub),
        IntOp::Mul => |r| int_bin_op_with(r, IntOp::Mul),
        IntOp::Div => |r| int_bin_op_with(r, IntOp::Div),
        IntOp::Mod => |r| int_bin_op_with(r, IntOp::Mod),
        IntOp::And => |r| int_bin_op_with(r, IntOp::And),
        IntOp::Or => |r| int_bin_op_with(r, IntOp::Or),
        IntOp::Xor => |r| int_bin_op_with(r, IntOp::Xor),
    }
}

fn int_bin_op_with(reader: &mut ArgReader, op: IntOp) -> Result<Instruction, ParseError> {
    let dst = reader.expect_register()?;
    let src = reader.expect_value()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::IntBinOp { op, dst, src })
}

fn float_bin_op(op: FloatOp) -> Constructor {
    match op {
        FloatOp::Add => |r| float_bin_op_with(r, FloatOp::Add),
        FloatOp::Sub => |r| float_bin_op_with(r, FloatOp::Sub),
        FloatOp::Mul => |r| float_bin_op_with(r, FloatOp::Mul),
        FloatOp::Div => |r| float_bin_op_with(r, FloatOp::Div),
    }
}

fn float_bin_op_with(reader: &mut ArgReader, op: FloatOp) -> Result<Instruction, ParseError> {
    let dst = reader.expect_register()?;
    let src = reader.expect_value()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::FloatBinOp { op, dst, src })
}

fn push(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    let value = reader.expect_value()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::Push { value })
}

fn pop(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    let dst = reader.expect_register()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::Pop { dst })
}

fn print(reader: &mut ArgReader) -> Result<Instruction, ParseError> {
    let value = reader.expect_value()?;
    reader.expect_end_of_args()?;
    Ok(Instruction::Print { value })
}

static INSTRUCTION_FACTORY: OnceLock<HashMap<&'static str, Constructor>> = OnceLock::new();

fn global_instruction_factory() -> &'static HashMap<&'static str, Constructor> {
    INSTRUCTION_FACTORY.get_or_init(|| {
        let mut map: HashMap<&'static str, Constructor> = HashMap::new();

        map.insert("mov", mov);

        map.insert("ifeq", if_instruction(IfKind::Eq));
        map.insert("ifneq", if_instruction(IfKind::Neq));
        map.insert("iflt", if_instruction(IfKind::Lt));
        map.insert("ifgt", if_instruction(IfKind::Gt));
        map.insert("iflteq", if_instruction(IfKind::LtEq));
        map.insert("ifgteq", if_instruction(IfKind::GtEq));

        map.insert("jmp", jmp);
        map.insert("call", call);
        map.insert("return", return_instruction);

        map.insert("add", int_bin_op(IntOp::Add));
        map.insert("sub", int_bin_op(IntOp::Sub));
        map.insert("mul", int_bin_op(IntOp::Mul));
        map.insert("div", int_bin_op(IntOp::Div));
        map.insert("mod", int_bin_op(IntOp::Mod));
        map.insert("and", int_bin_op(IntOp::And));
        map.insert("or", int_bin_op(IntOp::Or));
        map.insert("xor", int_bin_op(IntOp::Xor));

        map.insert("addf", float_bin_op(FloatOp::Add));
        map.insert("subf", float_bin_op(FloatOp::Sub));
        map.insert("mulf", float_bin_op(FloatOp::Mul));
        map.insert("divf", float_bin_op(FloatOp::Div));

        map.insert("push", push);
        map.insert("pop", pop);

        map.insert("print", print);

        map
    })
}

/// Looks up `mnemonic`'s constructor, if any. `None` means the caller
/// should raise `UnknownInstruction` with its own context.
pub fn lookup(mnemonic: &str) -> Option<Constructor> {
    global_instruction_factory().get(mnemonic).copied()
}
