// Side channel for non-fatal findings while decoding declarations.

use tracing::{debug, trace, warn};
use ucport_ue_flags::{property_flag_bit, CPF_PARM_FLAGS};

/// Receives flag tokens the modifier decoder does not know.
///
/// Implemented for every `FnMut(&str)`, so tests and one-off callers can pass
/// a closure. The pipeline uses [`LoggedDiagnostics`].
pub trait Diagnostics {
    fn unknown_modifier(&mut self, token: &str);
}

impl<F: FnMut(&str)> Diagnostics for F {
    fn unknown_modifier(&mut self, token: &str) {
        self(token)
    }
}

/// Diagnostics sink that reports through `tracing` and counts what it saw.
#[derive(Debug, Default)]
pub struct LoggedDiagnostics {
    /// Tokens that are real engine flags without an UnrealScript modifier.
    pub engine_flags: usize,
    /// Tokens that are not engine flags at all.
    pub foreign_tokens: usize,
}

impl Diagnostics for LoggedDiagnostics {
    fn unknown_modifier(&mut self, token: &str) {
        match property_flag_bit(token) {
            Some(bit) if bit & CPF_PARM_FLAGS != 0 => {
                self.engine_flags += 1;
                trace!(token, "parameter flag on a member declaration");
            }
            Some(bit) => {
                self.engine_flags += 1;
                let bit = format!("{bit:#x}");
                debug!(token, bit = %bit, "flag has no UnrealScript modifier");
            }
            None => {
                self.foreign_tokens += 1;
                warn!(token, "unrecognized modifier token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        let mut sink = |token: &str| seen.push(token.to_string());
        sink.unknown_modifier("CPF_Foo");
        assert_eq!(seen, ["CPF_Foo"]);
    }

    #[test]
    fn logged_sink_separates_engine_flags() {
        let mut sink = LoggedDiagnostics::default();
        sink.unknown_modifier("CPF_Interp");
        sink.unknown_modifier("CPF_OutParm");
        sink.unknown_modifier("CPF_Bogus");
        assert_eq!(sink.engine_flags, 2);
        assert_eq!(sink.foreign_tokens, 1);
    }
}
