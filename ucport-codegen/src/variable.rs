// Member variable lines: parse one SDK header line, render one `var` declaration.

use serde::Serialize;

use crate::definition::ClassOwner;
use crate::diagnostics::Diagnostics;
use crate::error::{ConvertError, ConvertResult};
use crate::modifiers::{self, Modifiers, VariableModifier};
use crate::type_map::{self, Rejection};

/// Literal substrings removed from a member line before it is tokenized.
///
/// `1` is the bit width of `unsigned long bFoo : 1;` bitfields; the brackets
/// and `*` come from `TArray< class UObject* >` and pointer members.
pub const NOISE_TOKENS: &[&str] = &["struct", "class", "unsigned", "1", ";", ":", "<", ">", "*"];

/// A name segment ends at a run of at least this many spaces.
///
/// Stripping `TArray< class UObject* >` leaves exactly two spaces between
/// `TArray` and its element, so two is not enough to split on.
const NAME_GAP: usize = 3;

/// A member variable of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDefinition {
    /// Enclosing class file. A member line does not name it; the header
    /// scanner knows it from the surrounding `// Class` section.
    #[serde(flatten)]
    owner: Option<ClassOwner>,
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    modifiers: Modifiers,
}

impl VariableDefinition {
    /// Parse one raw member line.
    ///
    /// Fails with [`ConvertError::InvalidVariable`] if the type or the name
    /// cannot be found and with [`ConvertError::UnsupportedConstruct`] for
    /// types UnrealScript cannot declare. Modifiers are only decoded (and
    /// unknown flags only reported) once both succeeded.
    pub fn parse<D: Diagnostics + ?Sized>(raw_line: &str, diagnostics: &mut D) -> ConvertResult<Self> {
        let cleaned = strip_noise(raw_line);

        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        let type_name = type_map::resolve_type(&tokens).map_err(|rejection| match rejection {
            Rejection::Unsupported => ConvertError::UnsupportedConstruct(excerpt(raw_line)),
            Rejection::Unresolved => {
                ConvertError::InvalidVariable(format!("no type in `{}`", excerpt(raw_line)))
            }
        })?;

        let name = declared_name(&cleaned).ok_or_else(|| {
            ConvertError::InvalidVariable(format!("no name in `{}`", excerpt(raw_line)))
        })?;

        let modifiers = modifiers::decode(modifiers::flag_tokens(&cleaned), diagnostics);

        Ok(VariableDefinition {
            owner: None,
            name: name.to_string(),
            type_name,
            modifiers,
        })
    }

    /// Attach the class file this member belongs to.
    pub fn with_owner(mut self, owner: ClassOwner) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn owner(&self) -> Option<&ClassOwner> {
        self.owner.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// UnrealScript type, e.g. `int`, `Object` or `array<string>`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// Render as a single newline-terminated declaration:
    /// `var() const editinline Object Owner;`
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32 + self.type_name.len() + self.name.len());
        out.push_str(if self.modifiers.contains(VariableModifier::Edit) {
            "var()"
        } else {
            "var"
        });
        for keyword in self.modifiers.iter().filter_map(VariableModifier::keyword) {
            out.push(' ');
            out.push_str(keyword);
        }
        out.push_str(&format!(" {} {};\n", self.type_name, self.name));
        out
    }
}

/// Remove every [`NOISE_TOKENS`] entry from `line`.
pub fn strip_noise(line: &str) -> String {
    NOISE_TOKENS
        .iter()
        .fold(line.to_string(), |acc, noise| acc.replace(noise, ""))
}

/// The declared name: second non-empty segment between runs of three or more spaces.
fn declared_name(cleaned: &str) -> Option<&str> {
    let name = split_wide_gaps(cleaned)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .nth(1)?
        .trim();
    (!name.is_empty()).then_some(name)
}

/// Split `line` at every run of at least [`NAME_GAP`] spaces.
fn split_wide_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut run_start = 0;
    let mut run_len = 0;

    for (i, byte) in line.bytes().enumerate() {
        if byte == b' ' {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            continue;
        }
        if run_len >= NAME_GAP {
            segments.push(&line[segment_start..run_start]);
            segment_start = i;
        }
        run_len = 0;
    }

    if run_len >= NAME_GAP {
        segments.push(&line[segment_start..run_start]);
    } else {
        segments.push(&line[segment_start..]);
    }
    segments
}

/// Shortened, trimmed copy of a raw line for error messages.
fn excerpt(raw_line: &str) -> String {
    const MAX: usize = 80;
    let trimmed = raw_line.trim();
    match trimmed.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
