// Flag token list → ordered set of UnrealScript variable modifiers.

use serde::Serialize;

use crate::diagnostics::Diagnostics;

/// Semantic qualifier of a member variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariableModifier {
    Edit,
    Const,
    EditConst,
    EditConstArray,
    EditInline,
    EditInlineNotify,
    Localized,
    Export,
    Transient,
    Native,
    Net,
    NoExport,
}

impl VariableModifier {
    /// Keyword emitted after `var`. `Edit` is expressed by `var()` itself and
    /// `Localized` has no keyword, so both return `None`.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            VariableModifier::Edit | VariableModifier::Localized => None,
            VariableModifier::Const => Some("const"),
            VariableModifier::EditConst => Some("editconst"),
            VariableModifier::EditConstArray => Some("editconstarray"),
            VariableModifier::EditInline => Some("editinline"),
            VariableModifier::EditInlineNotify => Some("databinding"),
            VariableModifier::Export => Some("export"),
            VariableModifier::Transient => Some("transient"),
            VariableModifier::Native => Some("native"),
            VariableModifier::Net => Some("repnotify"),
            VariableModifier::NoExport => Some("noexport"),
        }
    }
}

/// What a recognized flag token contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMeaning {
    Modifier(VariableModifier),
    /// Known flag with no effect on the UnrealScript declaration.
    Inert,
}

const FLAG_TABLE: &[(&str, FlagMeaning)] = &[
    ("CPF_Edit", FlagMeaning::Modifier(VariableModifier::Edit)),
    ("CPF_Const", FlagMeaning::Modifier(VariableModifier::Const)),
    ("CPF_EditConst", FlagMeaning::Modifier(VariableModifier::EditConst)),
    ("CPF_EditConstArray", FlagMeaning::Modifier(VariableModifier::EditConstArray)),
    ("CPF_EditInline", FlagMeaning::Modifier(VariableModifier::EditInline)),
    ("CPF_EditInlineNotify", FlagMeaning::Modifier(VariableModifier::EditInlineNotify)),
    ("CPF_Localized", FlagMeaning::Modifier(VariableModifier::Localized)),
    ("CPF_Export", FlagMeaning::Modifier(VariableModifier::Export)),
    ("CPF_ExportObject", FlagMeaning::Modifier(VariableModifier::Export)),
    ("CPF_Transient", FlagMeaning::Modifier(VariableModifier::Transient)),
    ("CPF_Native", FlagMeaning::Modifier(VariableModifier::Native)),
    ("CPF_Net", FlagMeaning::Modifier(VariableModifier::Net)),
    ("CPF_NoExport", FlagMeaning::Modifier(VariableModifier::NoExport)),
    ("CPF_Config", FlagMeaning::Inert),
    ("CPF_Component", FlagMeaning::Inert),
    ("CPF_NeedCtorLink", FlagMeaning::Inert),
];

/// Look up a single flag token.
pub fn lookup_flag(token: &str) -> Option<FlagMeaning> {
    FLAG_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == token)
        .map(|&(_, meaning)| meaning)
}

/// Modifiers in first-seen order, each at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Modifiers(Vec<VariableModifier>);

impl Modifiers {
    /// Append `modifier` unless already present. Returns whether it was added.
    pub fn insert(&mut self, modifier: VariableModifier) -> bool {
        if self.0.contains(&modifier) {
            return false;
        }
        self.0.push(modifier);
        true
    }

    pub fn contains(&self, modifier: VariableModifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = VariableModifier> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[VariableModifier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flag tokens of a cleaned member line.
///
/// The flag list is the fourth segment when the line is cut at every `(` and
/// `)`:  `decl // 0x0040 (0x0004) [0x...] ( CPF_Edit | CPF_Const )`.
/// Lines with fewer segments carry no flags.
pub fn flag_tokens(cleaned_line: &str) -> Vec<&str> {
    cleaned_line
        .split(['(', ')'])
        .nth(3)
        .map(|region| {
            region
                .split(|c: char| c == '|' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Decode flag tokens. Unknown tokens go to `diagnostics` and are otherwise ignored.
pub fn decode<'a, I, D>(tokens: I, diagnostics: &mut D) -> Modifiers
where
    I: IntoIterator<Item = &'a str>,
    D: Diagnostics + ?Sized,
{
    let mut modifiers = Modifiers::default();
    for token in tokens {
        match lookup_flag(token) {
            Some(FlagMeaning::Modifier(modifier)) => {
                modifiers.insert(modifier);
            }
            Some(FlagMeaning::Inert) => {}
            None => diagnostics.unknown_modifier(token),
        }
    }
    modifiers
}
