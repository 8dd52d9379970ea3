//! Parser/linker for the vortex assembly language.
//!
//! The main entry point is [`parse`], which turns a source string into a
//! resolved [`vortex::Instruction`] vector plus the completed
//! [`LabelTable`]. Parsing is two-pass (see [`parser`]) so that labels can
//! be referenced before their declaration.
//!
//! Reading the source file off disk is deliberately left to the caller
//! (the CLI crate) — this crate only ever sees a `&str`.

pub mod arg_reader;
pub mod error;
pub mod factory;
pub mod label;
pub mod parser;
pub mod raw;

pub use error::{Context, ParseError};
pub use label::LabelTable;
pub use parser::parse;

/// The label every program must declare as its entry point.
pub const ENTRY_LABEL: &str = "main";

/// Looks up the entry point (§4.6 post-condition / I5). Fails with
/// `MissingEntryPoint` if `main` was never declared.
pub fn entry_point(labels: &LabelTable) -> Result<usize, ParseError> {
    labels.get(ENTRY_LABEL).ok_or(ParseError::MissingEntryPoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_point_is_fatal() {
        let (_, labels) = parse("return", "t.vx").unwrap();
        assert!(matches!(
            entry_point(&labels),
            Err(ParseError::MissingEntryPoint)
        ));
    }

    #[test]
    fn entry_point_resolves_to_mains_index() {
        let (_, labels) = parse("main:\nreturn", "t.vx").unwrap();
        assert_eq!(entry_point(&labels), Ok(0));
    }
}
