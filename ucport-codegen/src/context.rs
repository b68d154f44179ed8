// Conversion context: definitions grouped per output class file.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::definition::{ClassOwner, Definition};
use crate::diagnostics::Diagnostics;
use crate::enums::EnumDefinition;
use crate::error::ConvertError;
use crate::scan::{Fragment, FragmentKind};
use crate::variable::VariableDefinition;

/// Everything written into one `.uc` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassUnit {
    pub owner: ClassOwner,
    /// Enums in header order.
    pub enums: Vec<EnumDefinition>,
    /// Member variables in header order.
    pub variables: Vec<VariableDefinition>,
}

impl ClassUnit {
    fn new(owner: ClassOwner) -> Self {
        ClassUnit {
            owner,
            enums: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.variables.is_empty()
    }
}

/// Per-run tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub converted: usize,
    pub invalid: usize,
    pub unsupported: usize,
    /// Member lines that parsed but had no class section to go into.
    pub orphaned: usize,
}

/// Central build context for a conversion run.
#[derive(Debug, Default)]
pub struct ConvertContext {
    /// Units by owner. Sorted for deterministic output.
    pub units: BTreeMap<ClassOwner, ClassUnit>,
    pub stats: ConvertStats,
}

impl ConvertContext {
    /// Convert one fragment and file it under its owner. Failures are logged
    /// and counted, never propagated.
    pub fn add_fragment<D: Diagnostics + ?Sized>(&mut self, fragment: &Fragment, diagnostics: &mut D) {
        let parsed = match fragment.kind {
            FragmentKind::Enum => EnumDefinition::parse(&fragment.text).map(Definition::Enum),
            FragmentKind::Variable => {
                VariableDefinition::parse(&fragment.text, diagnostics).map(Definition::Variable)
            }
        };
        let definition = match parsed {
            Ok(definition) => definition,
            Err(err) => {
                match err {
                    ConvertError::UnsupportedConstruct(_) => self.stats.unsupported += 1,
                    ConvertError::InvalidVariable(_) | ConvertError::InvalidEnum(_) => {
                        self.stats.invalid += 1
                    }
                }
                warn!(line = fragment.line, "skipping declaration: {err}");
                return;
            }
        };

        match definition {
            Definition::Enum(e) => {
                let owner = e.qualifier().owner();
                debug!(owner = %owner, name = e.name(), "enum");
                self.unit_mut(owner).enums.push(e);
            }
            Definition::Variable(v) => {
                let Some(owner) = fragment.owner.clone() else {
                    self.stats.orphaned += 1;
                    warn!(line = fragment.line, name = v.name(), "variable outside of a class section");
                    return;
                };
                debug!(owner = %owner, name = v.name(), "variable");
                self.unit_mut(owner.clone()).variables.push(v.with_owner(owner));
            }
        }
        self.stats.converted += 1;
    }

    fn unit_mut(&mut self, owner: ClassOwner) -> &mut ClassUnit {
        self.units
            .entry(owner.clone())
            .or_insert_with(|| ClassUnit::new(owner))
    }
}
