// Skip-list filtering applied after conversion, before anything is written.

use std::collections::HashSet;

use crate::config::SkipList;
use crate::context::ConvertContext;

/// Drop the variables of skipped class files and individually skipped
/// variables, then any unit left empty. Returns how many variables were removed.
pub fn apply_skips(ctx: &mut ConvertContext, skip: &SkipList) -> usize {
    let skipped_classes: HashSet<&str> = skip.classes.iter().map(|s| s.as_str()).collect();
    let skipped_variables = skip.variable_tuples();
    let mut removed = 0;

    ctx.units.retain(|owner, unit| {
        let before = unit.variables.len();
        if skipped_classes.contains(owner.class_file_name.as_str()) {
            unit.variables.clear();
        } else {
            unit.variables.retain(|v| {
                !skipped_variables
                    .iter()
                    .any(|(class, var)| *class == owner.class_file_name && var == v.name())
            });
        }
        removed += before - unit.variables.len();

        !unit.is_empty()
    });

    removed
}
