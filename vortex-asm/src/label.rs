//! C2: the label table. A flat name -> instruction-index map built during
//! pass 1 and consulted read-only during pass 2.

use std::collections::HashMap;

use crate::error::{Context, ParseError};

#[derive(Default, Debug)]
pub struct LabelTable {
    labels: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable {
            labels: HashMap::new(),
        }
    }

    /// Inserts `name -> index`. Fails if `name` was already declared.
    pub fn insert(&mut self, name: String, index: usize, ctx: &Context) -> Result<(), ParseError> {
        if self.labels.contains_key(&name) {
            return Err(ParseError::ConflictingLabel {
                ctx: ctx.clone(),
                label: name,
            });
        }
        self.labels.insert(name, index);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}
