//! C6: the two-pass parser/linker. Pass 1 tokenises the source and
//! collects labels (so forward references resolve); pass 2 looks up each
//! mnemonic in the instruction factory and constructs the resolved
//! instruction.

use std::rc::Rc;

use vortex::Instruction;

use crate::error::{Context, ParseError};
use crate::factory;
use crate::label::LabelTable;
use crate::raw::RawInstruction;

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn pass_one(source: &str, filename: Rc<str>) -> Result<(Vec<RawInstruction>, LabelTable), ParseError> {
    let mut raw = Vec::new();
    let mut labels = LabelTable::new();

    for (line_no, line) in source.lines().enumerate() {
        let ctx = Context::new(filename.clone(), line_no + 1);
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(label) = line.strip_suffix(':') {
            if !is_identifier(label) {
                return Err(ParseError::InvalidLabel {
                    ctx,
                    label: label.to_string(),
                });
            }
            labels.insert(label.to_string(), raw.len(), &ctx)?;
            continue;
        }

        let mut tokens = line.split_whitespace();
        let mnemonic = tokens.next().expect("non-empty line has a mnemonic").to_string();
        let args = tokens.map(str::to_string).collect();

        raw.push(RawInstruction {
            mnemonic,
            args,
            ctx,
        });
    }

    Ok((raw, labels))
}

fn pass_two(
    raw: Vec<RawInstruction>,
    labels: &LabelTable,
) -> Result<Vec<Instruction>, ParseError> {
    raw.into_iter()
        .map(|instr| {
            let constructor = factory::lookup(&instr.mnemonic).ok_or_else(|| {
                ParseError::UnknownInstruction {
                    ctx: instr.ctx.clone(),
                    mnemonic: instr.mnemonic.clone(),
                }
            })?;
            let mut reader = crate::arg_reader::ArgReader::new(instr.ctx, &instr.args, labels);
            constructor(&mut reader)
        })
        .collect()
}

/// Parses `source` (whose diagnostics are attributed to `filename`) into a
/// resolved instruction vector and the completed label table.
pub fn parse(source: &str, filename: &str) -> Result<(Vec<Instruction>, LabelTable), ParseError> {
    let filename: Rc<str> = Rc::from(filename);
    let (raw, labels) = pass_one(source, filename)?;
    let instructions = pass_two(raw, &labels)?;
    Ok((instructions, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_comment_only_lines_are_skipped() {
        let (instructions, _) = parse("; just a comment\n\n   \nreturn", "t.vx").unwrap();
        assert_eq!(instructions.len(), 1);
    }

    #[test]
    fn label_resolves_to_index_of_following_instruction() {
        let source = "main:\nmov r0 1\nlater:\nmov r1 2";
        let (_, labels) = parse(source, "t.vx").unwrap();
        assert_eq!(labels.get("main"), Some(0));
        assert_eq!(labels.get("later"), Some(1));
    }

    #[test]
    fn forward_label_reference_resolves_in_pass_two() {
        let source = "main:\njmp later\nprint 999\nlater:\nprint 1";
        let (instructions, labels) = parse(source, "t.vx").unwrap();
        let later = labels.get("later").unwrap();
        match instructions[0] {
            Instruction::Jmp { target } => assert_eq!(target, later),
            _ => panic!("expected a Jmp instruction"),
        }
    }

    #[test]
    fn duplicate_labels_are_a_fatal_parse_error() {
        let source = "foo:\nfoo:\nreturn";
        let err = parse(source, "t.vx").unwrap_err();
        assert!(matches!(err, ParseError::ConflictingLabel { .. }));
    }

    #[test]
    fn invalid_label_identifier_is_rejected() {
        let source = "not-an-identifier:\nreturn";
        let err = parse(source, "t.vx").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLabel { .. }));
    }

    #[test]
    fn non_ascii_label_identifier_is_rejected() {
        let source = "café:\nreturn";
        let err = parse(source, "t.vx").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLabel { .. }));
    }

    #[test]
    fn unknown_mnemonic_is_rejected_with_context() {
        let err = parse("frobnicate r0", "t.vx").unwrap_err();
        match err {
            ParseError::UnknownInstruction { ctx, mnemonic } => {
                assert_eq!(mnemonic, "frobnicate");
                assert_eq!(ctx.line, 1);
            }
            _ => panic!("expected UnknownInstruction"),
        }
    }

    #[test]
    fn trailing_comments_are_stripped_before_tokenising() {
        let (instructions, _) = parse("mov r0 1 ; set r0 to one", "t.vx").unwrap();
        assert_eq!(instructions.len(), 1);
    }
}
