// C++ header type spelling → UnrealScript type spelling.

use crate::naming;

/// Header spellings with a fixed UnrealScript counterpart.
const EXACT_TYPES: &[(&str, &str)] = &[
    ("long", "bool"),
    ("char", "byte"),
    ("FString", "string"),
    ("FName", "name"),
];

/// Spelling of the dynamic array template; its element is the next token.
const ARRAY_TEMPLATE: &str = "TArray";

/// Recognized types UnrealScript has no declaration syntax for.
const UNSUPPORTED_TYPES: &[&str] = &["FScriptDelegate"];

/// Generators name padding fields they could not reflect `UnknownDataXX`.
const UNKNOWN_FIELD_MARKER: &str = "UnknownData";

/// Result of resolving one header spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    /// `TArray`: the element type still has to be resolved.
    Array,
    /// A complete UnrealScript type name.
    Named(String),
}

/// Why a spelling has no UnrealScript type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing usable was found (empty spelling, missing or unknown array element).
    Unresolved,
    /// A known type the target language cannot represent.
    Unsupported,
}

/// Map a single header spelling.
pub fn resolve_base_type(spelling: &str) -> Result<TargetType, Rejection> {
    if UNSUPPORTED_TYPES.contains(&spelling) {
        return Err(Rejection::Unsupported);
    }
    if spelling == ARRAY_TEMPLATE {
        return Ok(TargetType::Array);
    }
    if let Some(&(_, target)) = EXACT_TYPES.iter().find(|(cpp, _)| *cpp == spelling) {
        return Ok(TargetType::Named(target.into()));
    }
    if spelling.is_empty() {
        return Err(Rejection::Unresolved);
    }
    // Anything else is either a class reference carrying its prefix letter or
    // a primitive that already has the same name in UnrealScript (int, float).
    Ok(TargetType::Named(naming::strip_class_prefix(spelling).to_string()))
}

/// Resolve the full type of a declaration from its leading tokens.
/// Arrays consume two tokens and yield `array<Element>`.
pub fn resolve_type(tokens: &[&str]) -> Result<String, Rejection> {
    let first = tokens.first().ok_or(Rejection::Unresolved)?;
    match resolve_base_type(first)? {
        TargetType::Named(name) => Ok(name),
        TargetType::Array => {
            let element = tokens.get(1).ok_or(Rejection::Unresolved)?;
            if element.contains(UNKNOWN_FIELD_MARKER) {
                return Err(Rejection::Unresolved);
            }
            match resolve_base_type(element)? {
                TargetType::Named(element) => Ok(format!("array<{element}>")),
                // Nested containers are not expressible from a flat token list.
                TargetType::Array => Err(Rejection::Unresolved),
            }
        }
    }
}
