// ucport-codegen: converts UE3 SDK header declarations into UnrealScript class files.

pub mod config;
pub mod context;
pub mod definition;
pub mod diagnostics;
pub mod enums;
pub mod error;
pub mod filter;
pub mod modifiers;
pub mod naming;
pub mod scan;
pub mod type_map;
pub mod uc_gen;
pub mod variable;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use crate::definition::{ClassOwner, Definition, Qualifier};
pub use crate::diagnostics::{Diagnostics, LoggedDiagnostics};
pub use crate::enums::EnumDefinition;
pub use crate::error::{ConvertError, ConvertResult, PipelineError, PipelineResult};
pub use crate::modifiers::{Modifiers, VariableModifier};
pub use crate::variable::VariableDefinition;

use crate::context::ConvertContext;

/// Outcome of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub files_written: Vec<PathBuf>,
    pub converted: usize,
    /// Declarations that failed to parse (invalid or unsupported).
    pub failed: usize,
    /// Member lines found outside any class section.
    pub orphaned: usize,
    /// Variables dropped by the skip list.
    pub skipped: usize,
    /// Flag tokens without an UnrealScript modifier.
    pub unknown_tokens: usize,
}

impl std::fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "wrote {} files ({} declarations converted, {} failed, {} orphaned, {} skipped, {} unknown flag tokens)",
            self.files_written.len(),
            self.converted,
            self.failed,
            self.orphaned,
            self.skipped,
            self.unknown_tokens
        )
    }
}

/// Run the convert command. Main entry point of the pipeline.
pub fn run_convert(config_path: &Path) -> PipelineResult<ConvertSummary> {
    let ucport_config = config::load(config_path)?;
    let convert = &ucport_config.convert;

    // Paths in the config are relative to the config file.
    let config_dir = match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut ctx = ConvertContext::default();
    let mut diagnostics = LoggedDiagnostics::default();

    for input in &convert.input {
        let header_path = config_dir.join(input);
        let source = read_header(&header_path)?;
        let fragments = scan::scan_header(&source);
        info!(path = %header_path.display(), fragments = fragments.len(), "scanned header");

        for fragment in &fragments {
            ctx.add_fragment(fragment, &mut diagnostics);
        }
    }

    let skipped = filter::apply_skips(&mut ctx, &convert.skip);
    debug!(skipped, "applied skip list");

    let out_dir = config_dir.join(&convert.output);
    let files_written = uc_gen::generate(&ctx, &out_dir)?;

    let summary = ConvertSummary {
        files_written,
        converted: ctx.stats.converted,
        failed: ctx.stats.invalid + ctx.stats.unsupported,
        orphaned: ctx.stats.orphaned,
        skipped,
        unknown_tokens: diagnostics.engine_flags + diagnostics.foreign_tokens,
    };
    info!(
        files = summary.files_written.len(),
        converted = summary.converted,
        failed = summary.failed,
        orphaned = summary.orphaned,
        skipped = summary.skipped,
        unknown_tokens = summary.unknown_tokens,
        "conversion finished"
    );
    Ok(summary)
}

/// Headers dumped from game memory are not always valid UTF-8; bad bytes
/// only ever show up inside comments, so they are replaced.
fn read_header(path: &Path) -> PipelineResult<String> {
    let bytes = std::fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE_HEADER: &str = "\
// Enum Core.Object.EAxis
/*enum EAxis
{
AXIS_NONE = 0,
AXIS_X = 1,
};*/

// Class Core.Object
// 0x003C
class UObject
{
public:
\tint                                                ObjectInternalInteger;                            \t\t// 0x0004 (0x0004) [0x0000000000821002]              ( CPF_Const | CPF_Native | CPF_EditConst | CPF_NoExport )
\tstruct FScriptDelegate                             __OnDestroy__Delegate;                            \t\t// 0x0008 (0x000C) [0x0000000000000000]              ( CPF_NeedCtorLink )
};

// Class Engine.Actor
// 0x0100 (0x01B0 - 0x00B0)
class AActor : public UObject
{
public:
\tclass AActor*                                      Owner;                                            \t\t// 0x00B0 (0x0004) [0x0000000000000000]              ( CPF_Native )
\tfloat                                              Speed;                                            \t\t// 0x00B4 (0x0004) [0x0000000000000001]              ( CPF_Edit | CPF_Interp )
};
";

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ucport-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn converts_a_header_end_to_end() {
        let dir = scratch_dir("e2e");
        std::fs::write(dir.join("Core_classes.h"), CORE_HEADER).unwrap();
        std::fs::write(
            dir.join("ucport.config.toml"),
            "[convert]\ninput = [\"Core_classes.h\"]\noutput = \"out\"\n\n[convert.skip]\nvariables = [\"Actor.Owner\"]\n",
        )
        .unwrap();

        let summary = run_convert(&dir.join("ucport.config.toml")).unwrap();
        assert_eq!(summary.converted, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.unknown_tokens, 1);
        assert_eq!(summary.files_written.len(), 2);

        let object = std::fs::read_to_string(naming::uc_file_path(&dir.join("out"), "Core", "Object")).unwrap();
        assert_eq!(
            object,
            "enum EAxis\n{\n    AXIS_NONE,\n    AXIS_X,\n};\n\nvar const native editconst noexport int ObjectInternalInteger;\n"
        );
        let actor = std::fs::read_to_string(naming::uc_file_path(&dir.join("out"), "Engine", "Actor")).unwrap();
        assert_eq!(actor, "var() float Speed;\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn summary_line_reports_every_count() {
        let summary = ConvertSummary {
            files_written: vec![PathBuf::from("out/Core/Classes/Object.uc")],
            converted: 12,
            failed: 2,
            orphaned: 1,
            skipped: 3,
            unknown_tokens: 4,
        };
        assert_eq!(
            summary.to_string(),
            "wrote 1 files (12 declarations converted, 2 failed, 1 orphaned, 3 skipped, 4 unknown flag tokens)"
        );
    }

    #[test]
    fn missing_header_is_fatal() {
        let dir = scratch_dir("missing");
        std::fs::write(
            dir.join("ucport.config.toml"),
            "[convert]\ninput = [\"nope.h\"]\noutput = \"out\"\n",
        )
        .unwrap();
        let err = run_convert(&dir.join("ucport.config.toml")).unwrap_err();
        assert!(matches!(err, PipelineError::Read { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
