//! Advisory diagnostics for malformed input.
//!
//! The parser never fails: every malformed-input path already has a
//! drop-and-continue resolution in the action stream. A diagnostic is
//! additional signal for a caller that wants it (an editor, a linter over
//! captured logs) — never a substitute for, and never a precondition on,
//! the normal action emission.

use std::fmt;

/// Severity for a [`ParseDiagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

impl DiagnosticLevel {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-fatal observation made while parsing a byte stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDiagnostic {
    #[error("unknown CSI final byte {0:#04x}")]
    UnknownCsiFinal(u8),
    #[error("CSI sequence aborted at byte {0:#04x}")]
    AbortedCsi(u8),
    #[error("invalid SGR parameter {0}")]
    InvalidSgrParameter(u16),
    #[error("truncated extended-color SGR sequence")]
    TruncatedExtendedColor,
}

impl ParseDiagnostic {
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::UnknownCsiFinal(_) => DiagnosticLevel::Info,
            Self::AbortedCsi(_) => DiagnosticLevel::Warning,
            Self::InvalidSgrParameter(_) => DiagnosticLevel::Warning,
            Self::TruncatedExtendedColor => DiagnosticLevel::Warning,
        }
    }
}
