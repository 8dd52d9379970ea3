//! Pass-1-only record: a mnemonic and its not-yet-validated arguments,
//! tagged with the source context it came from. Dropped once pass 2 has
//! linked it into a resolved `Instruction`.

use crate::error::Context;

#[derive(Clone, Debug)]
pub struct RawInstruction {
    pub mnemonic: String,
    pub args: Vec<String>,
    pub ctx: Context,
}
