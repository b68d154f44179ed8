// Header scanner: cut an SDK header into declaration fragments.
//
// Only the section markers SDK generators print are recognized:
//   // Class Engine.Actor          members that follow belong to Actor.uc
//   // ScriptStruct Engine.X.Y    struct members, not converted
//   // Function Engine.X.Y        parameter structs, not converted
//   // Enum Engine.Actor.EPhysics enum block up to the first `}`

use crate::definition::ClassOwner;

/// What a fragment is expected to parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Variable,
    Enum,
}

/// One declaration cut out of a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    /// Class section the fragment appeared in. Enums carry their own qualifier.
    pub owner: Option<ClassOwner>,
    pub text: String,
    /// 1-based line of the fragment's first line.
    pub line: usize,
}

enum Section {
    Outside,
    Class(ClassOwner),
    Skipped,
}

/// Scan a whole header, returning fragments in source order.
pub fn scan_header(source: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut section = Section::Outside;
    let mut lines = source.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("// Class ") {
            section = match ClassOwner::parse(rest.trim()) {
                Some(owner) => Section::Class(owner),
                None => Section::Skipped,
            };
            continue;
        }
        if trimmed.starts_with("// ScriptStruct ") || trimmed.starts_with("// Function ") {
            section = Section::Skipped;
            continue;
        }
        if trimmed.starts_with("// Enum ") {
            let mut text = String::from(line);
            text.push('\n');
            if !line.contains('}') {
                for (_, next) in lines.by_ref() {
                    text.push_str(next);
                    text.push('\n');
                    if next.contains('}') {
                        break;
                    }
                }
            }
            fragments.push(Fragment {
                kind: FragmentKind::Enum,
                owner: None,
                text,
                line: index + 1,
            });
            continue;
        }

        if let Section::Class(owner) = &section {
            if is_member_line(line) {
                fragments.push(Fragment {
                    kind: FragmentKind::Variable,
                    owner: Some(owner.clone()),
                    text: line.to_string(),
                    line: index + 1,
                });
            }
        }
    }

    fragments
}

/// A member line is a `;`-terminated declaration without parentheses,
/// followed by the generator's `// 0x...` offset comment.
fn is_member_line(line: &str) -> bool {
    let Some((decl, comment)) = line.split_once("//") else {
        return false;
    };
    let decl = decl.trim();
    !decl.is_empty()
        && decl.ends_with(';')
        && !decl.contains('(')
        && comment.trim_start().starts_with("0x")
}
