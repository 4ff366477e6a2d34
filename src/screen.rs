//! The line-oriented screen model: an addressable grid of styled codepoints
//! that applies [`Action`]s the way a physical terminal would, and projects
//! itself out as merged [`Span`]/[`Line`] sequences.

use serde::Serialize;

use crate::action::{Action, EraseMode};
use crate::style::Style;

/// One codepoint plus the style it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: Style,
}

/// A line's internal representation: a flat vector of cells, addressable by
/// codepoint column. Projected to merged [`Span`]s on demand.
#[derive(Debug, Clone, Default)]
struct LineBuf {
    cells: Vec<Cell>,
}

impl LineBuf {
    fn pad_to(&mut self, col: usize, style: Style) {
        while self.cells.len() < col {
            self.cells.push(Cell { ch: ' ', style });
        }
    }

    fn write(&mut self, col: usize, text: &str, style: Style) {
        self.pad_to(col, Style::default());
        let mut at = col;
        for ch in text.chars() {
            if at < self.cells.len() {
                self.cells[at] = Cell { ch, style };
            } else {
                self.cells.push(Cell { ch, style });
            }
            at += 1;
        }
    }

    fn erase_to_end(&mut self, col: usize) {
        self.cells.truncate(col.min(self.cells.len()));
    }

    fn erase_to_beginning(&mut self, col: usize) {
        let end = col.min(self.cells.len());
        for cell in &mut self.cells[..end] {
            *cell = Cell { ch: ' ', style: Style::default() };
        }
    }

    fn erase_all(&mut self) {
        self.cells.clear();
    }

    /// Coalesces adjacent cells with identical styles into spans, dropping
    /// nothing (an empty line yields an empty span list).
    fn spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for cell in &self.cells {
            match spans.last_mut() {
                Some(last) if last.style == cell.style => {
                    last.data_push(cell.ch);
                }
                _ => spans.push(Span::new(cell.ch, cell.style)),
            }
        }
        spans
    }
}

/// A contiguous run of same-styled text. `data` holds append-only UTF-8
/// bytes; two spans are mergeable exactly when their styles compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    data: String,
    style: Style,
}

impl Span {
    fn new(ch: char, style: Style) -> Self {
        let mut data = String::new();
        data.push(ch);
        Span { data, style }
    }

    fn data_push(&mut self, ch: char) {
        self.data.push(ch);
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// A line projects to a plain JSON array of its spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    row: usize,
    col: usize,
}

/// The built-in screen sink: applies actions and exposes the resulting
/// lines. Created empty with zero style; lines come into existence lazily
/// as the cursor addresses them and are never implicitly destroyed.
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    rows: Vec<LineBuf>,
    cursor: Cursor,
    saved_cursor: Option<Cursor>,
    current_style: Style,
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current screen contents as merged, style-coalesced lines.
    pub fn lines(&self) -> Vec<Line> {
        self.rows.iter().map(|row| Line { spans: row.spans() }).collect()
    }

    fn ensure_row(&mut self, row: usize) {
        while self.rows.len() <= row {
            self.rows.push(LineBuf::default());
        }
    }

    /// Applies one action, mutating cursor, style, and screen content
    /// exactly as a terminal would.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Print(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                self.ensure_row(self.cursor.row);
                let style = self.current_style;
                let col = self.cursor.col;
                let width = text.chars().count();
                self.rows[self.cursor.row].write(col, &text, style);
                self.cursor.col += width;
            }
            Action::Linebreak => {
                self.cursor.row += 1;
                self.cursor.col = 0;
                self.ensure_row(self.cursor.row);
            }
            Action::CarriageReturn => self.cursor.col = 0,
            Action::CursorUp(n) => self.cursor.row = self.cursor.row.saturating_sub(n as usize),
            Action::CursorDown(n) => self.cursor.row += n as usize,
            Action::CursorForward(n) => self.cursor.col += n as usize,
            Action::CursorBack(n) => self.cursor.col = self.cursor.col.saturating_sub(n as usize),
            Action::CursorColumn(c) => self.cursor.col = c as usize,
            Action::CursorPosition(row, col) => {
                self.cursor.row = (row.max(1) - 1) as usize;
                self.cursor.col = (col.max(1) - 1) as usize;
            }
            Action::SaveCursorPosition => self.saved_cursor = Some(self.cursor),
            Action::RestoreCursorPosition => {
                if let Some(saved) = self.saved_cursor {
                    self.cursor = saved;
                }
            }
            Action::EraseLine(mode) => {
                self.ensure_row(self.cursor.row);
                let row = &mut self.rows[self.cursor.row];
                match mode {
                    EraseMode::ToEnd => row.erase_to_end(self.cursor.col),
                    EraseMode::ToBeginning => row.erase_to_beginning(self.cursor.col),
                    EraseMode::All => row.erase_all(),
                }
            }
            Action::EraseDisplay(mode) => {
                self.ensure_row(self.cursor.row);
                match mode {
                    EraseMode::ToEnd => {
                        self.rows.truncate(self.cursor.row + 1);
                        self.rows[self.cursor.row].erase_to_end(self.cursor.col);
                    }
                    EraseMode::ToBeginning => {
                        for row in &mut self.rows[..self.cursor.row] {
                            row.erase_all();
                        }
                        self.rows[self.cursor.row].erase_to_beginning(self.cursor.col);
                    }
                    EraseMode::All => {
                        for row in &mut self.rows {
                            row.erase_all();
                        }
                    }
                }
            }
            Action::Reset => self.current_style = Style::default(),
            Action::SetBold(b) => self.current_style.bold = b,
            Action::SetFaint(b) => self.current_style.faint = b,
            Action::SetItalic(b) => self.current_style.italic = b,
            Action::SetUnderline(b) => self.current_style.underline = b,
            Action::SetBlink(b) => self.current_style.blink = b,
            Action::SetInverted(b) => self.current_style.inverted = b,
            Action::SetFraktur(b) => self.current_style.fraktur = b,
            Action::SetForeground(color) => self.current_style.foreground = color,
            Action::SetBackground(color) => self.current_style.background = color,
        }
    }
}
