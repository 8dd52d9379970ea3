//! C4: stateful consumption of one instruction's argument list. Bound to
//! the instruction's parsing context and a read-only view of the (now
//! complete) label table, so forward references resolve during pass 2.

use vortex::{Literal, Register, Value};

use crate::error::{Context, ParseError};
use crate::label::LabelTable;

pub struct ArgReader<'a> {
    ctx: Context,
    args: &'a [String],
    labels: &'a LabelTable,
    pos: usize,
}

impl<'a> ArgReader<'a> {
    pub fn new(ctx: Context, args: &'a [String], labels: &'a LabelTable) -> ArgReader<'a> {
        ArgReader {
            ctx,
            args,
            labels,
            pos: 0,
        }
    }

    fn expect_arg(&mut self) -> Result<&'a str, ParseError> {
        let arg = self
            .args
            .get(self.pos)
            .ok_or_else(|| ParseError::ExpectedArgument {
                ctx: self.ctx.clone(),
            })?;
        self.pos += 1;
        Ok(arg.as_str())
    }

    pub fn expect_register(&mut self) -> Result<Register, ParseError> {
        let arg = self.expect_arg()?;
        let suffix = arg
            .strip_prefix('r')
            .ok_or_else(|| ParseError::ExpectedRegister {
                ctx: self.ctx.clone(),
                received: arg.to_string(),
            })?;
        let index: u32 = suffix.parse().map_err(|_| ParseError::InvalidRegister {
            ctx: self.ctx.clone(),
            received: arg.to_string(),
        })?;
        Register::new(index).map_err(|_| ParseError::InvalidRegister {
            ctx: self.ctx.clone(),
            received: arg.to_string(),
        })
    }

    pub fn expect_literal(&mut self) -> Result<Literal, ParseError> {
        let arg = self.expect_arg()?;
        let value: i64 = arg.parse().map_err(|_| ParseError::ExpectedLiteral {
            ctx: self.ctx.clone(),
            received: arg.to_string(),
        })?;
        Ok(Literal::new(value))
    }

    pub fn expect_value(&mut self) -> Result<Value, ParseError> {
        let peeked = self
            .args
            .get(self.pos)
            .ok_or_else(|| ParseError::ExpectedArgument {
                ctx: self.ctx.clone(),
            })?;
        if peeked.starts_with('r') {
            Ok(Value::Register(self.expect_register()?))
        } else {
            Ok(Value::Literal(self.expect_literal()?))
        }
    }

    pub fn expect_label_location(&mut self) -> Result<usize, ParseError> {
        let arg = self.expect_arg()?;
        self.labels
            .get(arg)
            .ok_or_else(|| ParseError::UnknownLabel {
                ctx: self.ctx.clone(),
                label: arg.to_string(),
            })
    }

    pub fn expect_end_of_args(&self) -> Result<(), ParseError> {
        if self.pos < self.args.len() {
            Err(ParseError::UnexpectedArguments {
                ctx: self.ctx.clone(),
            })
        } else {
            Ok(())
        }
    }
}
