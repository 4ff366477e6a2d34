//! Decodes `CSI … m` (Select Graphic Rendition) parameter lists into
//! style-mutation actions.

use crate::action::Action;
use crate::color::Color;
use crate::diagnostics::ParseDiagnostic;

/// Decodes one SGR parameter list, appending the resulting actions to
/// `out` and never failing: unrecognized or truncated parameters are
/// dropped, optionally reported through `diagnostics`.
///
/// Each parameter slot is either present (`Some(n)`) or empty (`None`).
/// An empty slot yields `Reset`, except a *trailing* empty slot in a list
/// of more than one entry, which is a silent no-op (so `CSI 1 ; m` sets
/// bold and resets nothing, while `CSI ; 31 m` resets and then sets red).
pub(crate) fn decode(params: &[Option<u16>], out: &mut Vec<Action>, diagnostics: &mut Vec<ParseDiagnostic>) {
    if params.is_empty() {
        out.push(Action::Reset);
        return;
    }

    let mut i = 0;
    while i < params.len() {
        let Some(code) = params[i] else {
            let trailing_in_multi = i == params.len() - 1 && params.len() > 1;
            if !trailing_in_multi {
                out.push(Action::Reset);
            }
            i += 1;
            continue;
        };

        if code >= 128 {
            i += 1;
            continue;
        }

        match code {
            0 => out.push(Action::Reset),
            1 => out.push(Action::SetBold(true)),
            2 => out.push(Action::SetFaint(true)),
            3 => out.push(Action::SetItalic(true)),
            4 => out.push(Action::SetUnderline(true)),
            5 => out.push(Action::SetBlink(true)),
            7 => out.push(Action::SetInverted(true)),
            20 => out.push(Action::SetFraktur(true)),
            30..=37 => out.push(Action::SetForeground(Color::color4((code - 30) as u8))),
            39 => out.push(Action::SetForeground(Color::DEFAULT)),
            40..=47 => out.push(Action::SetBackground(Color::color4((code - 40) as u8))),
            49 => out.push(Action::SetBackground(Color::DEFAULT)),
            90..=97 => out.push(Action::SetForeground(Color::color4((code - 90 + 8) as u8))),
            100..=107 => out.push(Action::SetBackground(Color::color4((code - 100 + 8) as u8))),
            38 | 48 => {
                let foreground = code == 38;
                match decode_extended(&params[i + 1..]) {
                    Extended::Consumed(color, consumed) => {
                        out.push(if foreground { Action::SetForeground(color) } else { Action::SetBackground(color) });
                        i += 1 + consumed;
                        continue;
                    }
                    Extended::DropMode => {
                        i += 2;
                        continue;
                    }
                    Extended::Truncated => {
                        log::debug!("truncated extended-color SGR sequence, dropping the rest of the list");
                        diagnostics.push(ParseDiagnostic::TruncatedExtendedColor);
                        return;
                    }
                }
            }
            _ => {
                log::trace!("dropping unrecognized SGR parameter {code}");
                diagnostics.push(ParseDiagnostic::InvalidSgrParameter(code));
            }
        }
        i += 1;
    }
}

enum Extended {
    /// A color plus how many of the parameters following `38`/`48` it consumed.
    Consumed(Color, usize),
    /// The mode byte itself was unrecognized; drop just it.
    DropMode,
    /// Not enough trailing parameters for the chosen mode.
    Truncated,
}

fn decode_extended(rest: &[Option<u16>]) -> Extended {
    let Some(mode_slot) = rest.first() else {
        return Extended::Truncated;
    };
    match mode_slot.unwrap_or(0) {
        5 if rest.len() >= 2 => Extended::Consumed(Color::indexed(rest[1].unwrap_or(0) as u8), 2),
        2 if rest.len() >= 4 => {
            Extended::Consumed(Color::rgb24(rest[1].unwrap_or(0) as u8, rest[2].unwrap_or(0) as u8, rest[3].unwrap_or(0) as u8), 4)
        }
        5 | 2 => Extended::Truncated,
        _ => Extended::DropMode,
    }
}
