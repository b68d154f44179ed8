// Declaration model: the closed set of things a header fragment can become.

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::enums::EnumDefinition;
use crate::error::ConvertResult;
use crate::variable::VariableDefinition;

/// `Package.ClassFile.Name`, as printed above enums.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Qualifier {
    pub package_name: String,
    pub class_file_name: String,
    pub name: String,
}

impl Qualifier {
    /// Split a dotted qualifier. All three parts must be present and non-empty.
    pub fn parse(dotted: &str) -> Option<Self> {
        let mut parts = dotted.split('.');
        let (package, class_file, name) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || [package, class_file, name].iter().any(|p| p.is_empty()) {
            return None;
        }
        Some(Qualifier {
            package_name: package.to_string(),
            class_file_name: class_file.to_string(),
            name: name.to_string(),
        })
    }

    /// The class file this declaration is written into.
    pub fn owner(&self) -> ClassOwner {
        ClassOwner {
            package_name: self.package_name.clone(),
            class_file_name: self.class_file_name.clone(),
        }
    }
}

/// `Package.ClassFile`: the output file a declaration belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClassOwner {
    pub package_name: String,
    pub class_file_name: String,
}

impl ClassOwner {
    /// Parse `Engine.Actor`. Both parts must be present and non-empty.
    pub fn parse(dotted: &str) -> Option<Self> {
        let (package, class_file) = dotted.split_once('.')?;
        if package.is_empty() || class_file.is_empty() || class_file.contains('.') {
            return None;
        }
        Some(ClassOwner {
            package_name: package.to_string(),
            class_file_name: class_file.to_string(),
        })
    }
}

impl std::fmt::Display for ClassOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.package_name, self.class_file_name)
    }
}

/// A converted declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Definition {
    Variable(VariableDefinition),
    Enum(EnumDefinition),
}

impl Definition {
    /// Route a fragment by its shape: braced blocks are enums, anything else
    /// is a member line.
    pub fn parse<D: Diagnostics + ?Sized>(fragment: &str, diagnostics: &mut D) -> ConvertResult<Self> {
        if fragment.contains('{') {
            EnumDefinition::parse(fragment).map(Definition::Enum)
        } else {
            VariableDefinition::parse(fragment, diagnostics).map(Definition::Variable)
        }
    }

    /// Owning package. `None` for a variable parsed outside a class section.
    pub fn package_name(&self) -> Option<&str> {
        match self {
            Definition::Variable(v) => v.owner().map(|o| o.package_name.as_str()),
            Definition::Enum(e) => Some(e.qualifier().package_name.as_str()),
        }
    }

    /// Owning class file. `None` for a variable parsed outside a class section.
    pub fn class_file_name(&self) -> Option<&str> {
        match self {
            Definition::Variable(v) => v.owner().map(|o| o.class_file_name.as_str()),
            Definition::Enum(e) => Some(e.qualifier().class_file_name.as_str()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Definition::Variable(v) => v.name(),
            Definition::Enum(e) => e.name(),
        }
    }

    /// Newline-terminated UnrealScript text.
    pub fn render(&self) -> String {
        match self {
            Definition::Variable(v) => v.render(),
            Definition::Enum(e) => e.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore(_: &str) {}

    #[test]
    fn qualifier_needs_three_parts() {
        let q = Qualifier::parse("Engine.Actor.EPhysics").unwrap();
        assert_eq!(q.package_name, "Engine");
        assert_eq!(q.class_file_name, "Actor");
        assert_eq!(q.name, "EPhysics");
        assert_eq!(q.owner(), ClassOwner::parse("Engine.Actor").unwrap());

        assert!(Qualifier::parse("Engine.Actor").is_none());
        assert!(Qualifier::parse("Engine.Actor.EPhysics.Extra").is_none());
        assert!(Qualifier::parse(".Actor.EPhysics").is_none());
    }

    #[test]
    fn owner_parsing() {
        let owner = ClassOwner::parse("Core.Object").unwrap();
        assert_eq!(owner.to_string(), "Core.Object");
        assert!(ClassOwner::parse("Core").is_none());
        assert!(ClassOwner::parse("Core.").is_none());
        assert!(ClassOwner::parse("Core.Object.EAxis").is_none());
    }

    #[test]
    fn routes_by_shape() {
        let e = Definition::parse("// Enum Core.Object.EAxis\n{\nAXIS_X = 1\n}", &mut ignore).unwrap();
        assert!(matches!(e, Definition::Enum(_)));
        assert_eq!(e.name(), "EAxis");

        let line = "\tfloat                                              Scale;                                            \t\t// 0x0 (0x4) [0x0]   ( CPF_Edit )";
        let v = Definition::parse(line, &mut ignore).unwrap();
        assert!(matches!(v, Definition::Variable(_)));
        assert_eq!(v.name(), "Scale");
        assert_eq!(v.render(), "var() float Scale;\n");
    }

    #[test]
    fn identity_is_shared_by_both_kinds() {
        let e = Definition::parse("// Enum Core.Object.EAxis\n{\nAXIS_X = 1\n}", &mut ignore).unwrap();
        assert_eq!(e.package_name(), Some("Core"));
        assert_eq!(e.class_file_name(), Some("Object"));

        let line = "\tfloat                                              Scale;                                            \t\t// 0x0 (0x4) [0x0]   ( CPF_Edit )";
        let Definition::Variable(v) = Definition::parse(line, &mut ignore).unwrap() else {
            panic!("expected a variable");
        };
        assert_eq!(Definition::Variable(v.clone()).package_name(), None);

        let v = Definition::Variable(v.with_owner(ClassOwner::parse("Engine.Actor").unwrap()));
        assert_eq!(v.package_name(), Some("Engine"));
        assert_eq!(v.class_file_name(), Some("Actor"));

        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "variable");
        assert_eq!(json["package_name"], "Engine");
        assert_eq!(json["class_file_name"], "Actor");
        assert_eq!(json["name"], "Scale");
        assert_eq!(json["type"], "float");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let e = Definition::parse("// Enum Core.Object.EAxis\n{\nAXIS_X = 1\n}", &mut ignore).unwrap();
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["kind"], "enum");
        assert_eq!(json["package_name"], "Core");
        assert_eq!(json["properties"][0], "AXIS_X");
    }
}
