// Name conversion utilities for UnrealScript output.

use std::path::{Path, PathBuf};

/// Strip the one-letter C++ prefix (U, A, F, ...) from a class reference.
/// Spellings that do not start upper-case are returned unchanged.
pub fn strip_class_prefix(spelling: &str) -> &str {
    let mut chars = spelling.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.as_str(),
        _ => spelling,
    }
}

/// Location of a class file inside the output tree: `<out>/<Package>/Classes/<ClassFile>.uc`.
pub fn uc_file_path(out_dir: &Path, package_name: &str, class_file_name: &str) -> PathBuf {
    out_dir
        .join(package_name)
        .join("Classes")
        .join(format!("{class_file_name}.uc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_class_prefix() {
        assert_eq!(strip_class_prefix("UObject"), "Object");
        assert_eq!(strip_class_prefix("AActor"), "Actor");
        assert_eq!(strip_class_prefix("FVector"), "Vector");
        assert_eq!(strip_class_prefix("int"), "int");
        assert_eq!(strip_class_prefix("X"), "");
        assert_eq!(strip_class_prefix(""), "");
    }

    #[test]
    fn test_uc_file_path() {
        let path = uc_file_path(Path::new("out"), "Engine", "Actor");
        assert_eq!(path, Path::new("out").join("Engine").join("Classes").join("Actor.uc"));
    }
}
