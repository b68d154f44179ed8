// Enum blocks: parse one `// Enum Pkg.Class.Name { ... }` block, render an UnrealScript enum.

use serde::Serialize;

use crate::definition::Qualifier;
use crate::error::{ConvertError, ConvertResult};

/// An enumeration and its members in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDefinition {
    #[serde(flatten)]
    qualifier: Qualifier,
    properties: Vec<String>,
}

impl EnumDefinition {
    /// Parse a block whose first line carries the qualifier as its third
    /// whitespace-separated token, followed by a `{ ... }` body:
    ///
    /// ```text
    /// // Enum Engine.Actor.EPhysics
    /// /*enum EPhysics
    /// {
    /// PHYS_None = 0,
    /// PHYS_Walking = 1,
    /// };*/
    /// ```
    pub fn parse(raw_block: &str) -> ConvertResult<Self> {
        let header = raw_block
            .lines()
            .next()
            .ok_or_else(|| ConvertError::InvalidEnum("empty block".into()))?;
        let dotted = header
            .split_whitespace()
            .nth(2)
            .ok_or_else(|| ConvertError::InvalidEnum(format!("no qualifier in `{}`", header.trim())))?;
        let qualifier = Qualifier::parse(dotted)
            .ok_or_else(|| ConvertError::InvalidEnum(format!("malformed qualifier `{dotted}`")))?;

        let body = brace_body(raw_block)
            .ok_or_else(|| ConvertError::InvalidEnum(format!("no body for {}", qualifier.name)))?;

        let properties = body
            .lines()
            .filter(|line| !line.is_empty())
            .map(member_identifier)
            .collect();

        Ok(EnumDefinition {
            qualifier,
            properties,
        })
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    pub fn name(&self) -> &str {
        &self.qualifier.name
    }

    /// Member identifiers in declared order. Repeats are kept.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Render as an UnrealScript block, followed by one blank line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32 + self.properties.len() * 24);
        out.push_str(&format!("enum {}\n", self.qualifier.name));
        out.push_str("{\n");
        for property in &self.properties {
            out.push_str(&format!("    {property},\n"));
        }
        out.push_str("};\n\n");
        out
    }
}

/// Text before the first `=`, minus one trailing space. Any other
/// whitespace (indentation, column padding) is kept as written.
fn member_identifier(line: &str) -> String {
    let before = line.split_once('=').map_or(line, |(before, _)| before);
    before.strip_suffix(' ').unwrap_or(before).to_string()
}

/// Text between the first `{` and the first `}` that follows it.
fn brace_body(block: &str) -> Option<&str> {
    let open = block.find('{')?;
    let rest = &block[open + 1..];
    let close = rest.find('}')?;
    Some(&rest[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHYSICS: &str = "// Enum Engine.Actor.EPhysics\n\
        /*enum EPhysics\n\
        {\n\
        PHYS_None = 0,\n\
        PHYS_Walking = 1,\n\
        PHYS_MAX = 2\n\
        };*/\n";

    #[test]
    fn parses_sdk_block() {
        let e = EnumDefinition::parse(PHYSICS).unwrap();
        assert_eq!(e.qualifier().package_name, "Engine");
        assert_eq!(e.qualifier().class_file_name, "Actor");
        assert_eq!(e.name(), "EPhysics");
        assert_eq!(e.properties(), ["PHYS_None", "PHYS_Walking", "PHYS_MAX"]);
    }

    #[test]
    fn renders_with_trailing_commas() {
        let e = EnumDefinition::parse(PHYSICS).unwrap();
        assert_eq!(
            e.render(),
            "enum EPhysics\n{\n    PHYS_None,\n    PHYS_Walking,\n    PHYS_MAX,\n};\n\n"
        );
        assert_eq!(e.render(), e.render());
    }

    #[test]
    fn duplicates_keep_their_position() {
        let e = EnumDefinition::parse("// Enum Core.Object.EDup\n{\nA = 0\nB = 1\nA = 2\n}").unwrap();
        assert_eq!(e.properties(), ["A", "B", "A"]);
        assert_eq!(e.render(), "enum EDup\n{\n    A,\n    B,\n    A,\n};\n\n");
    }

    #[test]
    fn members_without_value() {
        let e = EnumDefinition::parse("// Enum Core.Object.EBare {First\nSecond }").unwrap();
        assert_eq!(e.properties(), ["First", "Second"]);
    }

    #[test]
    fn only_one_trailing_space_is_trimmed() {
        let e = EnumDefinition::parse("// Enum Core.Object.EX\n{\n\tA  = 0\nB = 1\nC\n}").unwrap();
        assert_eq!(e.properties(), ["\tA ", "B", "C"]);
        assert_eq!(e.render(), "enum EX\n{\n    \tA ,\n    B,\n    C,\n};\n\n");
    }

    #[test]
    fn only_empty_lines_are_skipped() {
        let e = EnumDefinition::parse("// Enum Core.Object.EX\n{\n\nA = 0\n \n}").unwrap();
        assert_eq!(e.properties(), ["A", ""]);
    }

    #[test]
    fn short_blocks_are_invalid() {
        for block in [
            "",
            "// Enum",
            "// Enum Core.Object",
            "// Enum Core..EFoo\n{\nA = 0\n}",
            "// Enum Core.Object.EFoo",
            "// Enum Core.Object.EFoo\n{\nA = 0\n",
            "// Enum Core.Object.EFoo\n}\n{",
        ] {
            assert!(
                matches!(EnumDefinition::parse(block), Err(ConvertError::InvalidEnum(_))),
                "{block:?}"
            );
        }
    }

    #[test]
    fn empty_body_is_allowed() {
        let e = EnumDefinition::parse("// Enum Core.Object.ENone\n{\n}").unwrap();
        assert!(e.properties().is_empty());
        assert_eq!(e.render(), "enum ENone\n{\n};\n\n");
    }
}
