//! Streaming interpreter for ANSI/ECMA-48 terminal control sequences.
//!
//! Two pieces compose the pipeline: [`parser::Parser`] turns arbitrary byte
//! chunks into a stream of [`Action`]s, and anything implementing [`Sink`]
//! — most commonly [`InMemory`] — consumes them to build up a structured
//! view of what a terminal would display.
//!
//! ```
//! use ansi_screen::{Interpreter, InMemory};
//!
//! let mut terminal = Interpreter::new(InMemory::new());
//! terminal.parse(b"hello \x1b[1mworld\x1b[m\n");
//! assert_eq!(terminal.sink().lines()[0].spans()[1].data(), "world");
//! ```

pub mod action;
pub mod color;
pub mod diagnostics;
pub mod parser;
pub mod screen;
mod sgr;
pub mod style;

pub use action::{Action, EraseMode};
pub use color::{Color, Palette, XTERM_PALETTE};
pub use diagnostics::{DiagnosticLevel, ParseDiagnostic};
pub use parser::Parser;
pub use screen::{InMemory, Line, Span};
pub use style::Style;

/// Consumes the actions a [`Parser`] produces. `emit` is the only required
/// method; `report` is an advisory hook for diagnostics and costs nothing
/// to implementers (like [`InMemory`]) that don't care about it.
pub trait Sink {
    fn emit(&mut self, action: Action);

    /// Report a non-fatal parse diagnostic. Default implementation does
    /// nothing.
    fn report(&mut self, _diagnostic: ParseDiagnostic) {}
}

impl Sink for InMemory {
    fn emit(&mut self, action: Action) {
        self.apply(action);
    }
}

/// Owns a [`Parser`] and a [`Sink`], forwarding each parsed action (and any
/// diagnostics) from one to the other.
pub struct Interpreter<S: Sink> {
    parser: Parser,
    sink: S,
}

impl<S: Sink> Interpreter<S> {
    pub fn new(sink: S) -> Self {
        Interpreter { parser: Parser::new(), sink }
    }

    /// Parses `bytes` and forwards every resulting action (plus any
    /// diagnostics raised while doing so) to the sink.
    pub fn parse(&mut self, bytes: &[u8]) {
        for action in self.parser.parse_all(bytes) {
            self.sink.emit(action);
        }
        for diagnostic in self.parser.take_diagnostics() {
            self.sink.report(diagnostic);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
