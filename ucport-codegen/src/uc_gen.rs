// UnrealScript output: one `.uc` file per class unit.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::context::{ClassUnit, ConvertContext};
use crate::error::PipelineError;
use crate::naming;

/// Text of one class file: enums first, then member variables, each group in header order.
pub fn render_unit(unit: &ClassUnit) -> String {
    let mut out = String::with_capacity(256 * (unit.enums.len() + 1) + 48 * unit.variables.len());
    for e in &unit.enums {
        out.push_str(&e.render());
    }
    for v in &unit.variables {
        out.push_str(&v.render());
    }
    out
}

/// Write every unit below `out_dir`. Returns the written paths in owner order.
pub fn generate(ctx: &ConvertContext, out_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut written = Vec::with_capacity(ctx.units.len());

    for unit in ctx.units.values() {
        let path = naming::uc_file_path(
            out_dir,
            &unit.owner.package_name,
            &unit.owner.class_file_name,
        );
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PipelineError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, render_unit(unit)).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), enums = unit.enums.len(), variables = unit.variables.len(), "wrote class file");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_header;

    fn ignore(_: &str) {}

    #[test]
    fn enums_come_before_variables() {
        let header = "\
// Class Engine.Actor
\tunsigned char                                      Physics;                                          \t\t// 0x0 (0x1) [0x0]   ( CPF_Edit | CPF_Net )
// Enum Engine.Actor.EPhysics
{
PHYS_None = 0,
PHYS_Walking = 1,
};
";
        let mut ctx = ConvertContext::default();
        for fragment in scan_header(header) {
            ctx.add_fragment(&fragment, &mut ignore);
        }
        let unit = ctx.units.values().next().unwrap();
        assert_eq!(
            render_unit(unit),
            "enum EPhysics\n{\n    PHYS_None,\n    PHYS_Walking,\n};\n\nvar() repnotify byte Physics;\n"
        );
    }
}
