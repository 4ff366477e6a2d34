//! The closed set of semantic events the parser emits and the screen model
//! consumes. Modeled as a tagged variant so the screen's dispatch is
//! exhaustive and a missing case is a compile error rather than a runtime
//! surprise.

use std::fmt;

use crate::color::Color;

/// Argument to `EraseDisplay`/`EraseLine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    ToEnd,
    ToBeginning,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A contiguous run of UTF-8 bytes to write at the cursor.
    Print(Vec<u8>),
    Linebreak,
    CarriageReturn,
    CursorUp(u32),
    CursorDown(u32),
    CursorForward(u32),
    CursorBack(u32),
    CursorColumn(u32),
    /// 1-indexed on the wire; `row, col`.
    CursorPosition(u32, u32),
    SaveCursorPosition,
    RestoreCursorPosition,
    EraseDisplay(EraseMode),
    EraseLine(EraseMode),
    Reset,
    SetBold(bool),
    SetFaint(bool),
    SetItalic(bool),
    SetUnderline(bool),
    SetBlink(bool),
    SetInverted(bool),
    SetFraktur(bool),
    SetForeground(Color),
    SetBackground(Color),
}

/// A stable, human-readable form used by tests. Not wire-visible, but
/// equality-comparable across runs.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Print(bytes) => write!(f, "Print({:?})", String::from_utf8_lossy(bytes)),
            Action::Linebreak => write!(f, "Linebreak"),
            Action::CarriageReturn => write!(f, "CarriageReturn"),
            Action::CursorUp(n) => write!(f, "CursorUp({n})"),
            Action::CursorDown(n) => write!(f, "CursorDown({n})"),
            Action::CursorForward(n) => write!(f, "CursorForward({n})"),
            Action::CursorBack(n) => write!(f, "CursorBack({n})"),
            Action::CursorColumn(c) => write!(f, "CursorColumn({c})"),
            Action::CursorPosition(row, col) => write!(f, "CursorPosition({row},{col})"),
            Action::SaveCursorPosition => write!(f, "SaveCursorPosition"),
            Action::RestoreCursorPosition => write!(f, "RestoreCursorPosition"),
            Action::EraseDisplay(mode) => write!(f, "EraseDisplay({mode:?})"),
            Action::EraseLine(mode) => write!(f, "EraseLine({mode:?})"),
            Action::Reset => write!(f, "Reset"),
            Action::SetBold(b) => write!(f, "SetBold({b})"),
            Action::SetFaint(b) => write!(f, "SetFaint({b})"),
            Action::SetItalic(b) => write!(f, "SetItalic({b})"),
            Action::SetUnderline(b) => write!(f, "SetUnderline({b})"),
            Action::SetBlink(b) => write!(f, "SetBlink({b})"),
            Action::SetInverted(b) => write!(f, "SetInverted({b})"),
            Action::SetFraktur(b) => write!(f, "SetFraktur({b})"),
            Action::SetForeground(c) => write!(f, "SetForeground({c})"),
            Action::SetBackground(c) => write!(f, "SetBackground({c})"),
        }
    }
}
