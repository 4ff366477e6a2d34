//! Aggregate text style: boolean attributes plus foreground/background color.

use crate::color::Color;

/// A text style. The zero value carries no attributes and both colors
/// default. Equality and the `Reset` action both compare/produce this
/// value fieldwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverted: bool,
    pub fraktur: bool,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            bold: false,
            faint: false,
            italic: false,
            underline: false,
            blink: false,
            inverted: false,
            fraktur: false,
            foreground: Color::DEFAULT,
            background: Color::DEFAULT,
        }
    }
}

/// Serializes as a JSON object containing only the non-default fields:
/// booleans appear as `"bold": true`, colors as `"foreground": "<name-or-hex>"`
/// and are omitted entirely when left at `Color::DEFAULT`. A derive can't
/// express "omit the whole object's defaulted keys" for the color fields'
/// name-or-hex formatting, so this is written by hand.
impl serde::Serialize for Style {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let flags = [self.bold, self.faint, self.italic, self.underline, self.blink, self.inverted, self.fraktur];
        let len = flags.iter().filter(|set| **set).count()
            + usize::from(!self.foreground.is_default())
            + usize::from(!self.background.is_default());

        let mut map = serializer.serialize_map(Some(len))?;
        if self.bold {
            map.serialize_entry("bold", &true)?;
        }
        if self.faint {
            map.serialize_entry("faint", &true)?;
        }
        if self.italic {
            map.serialize_entry("italic", &true)?;
        }
        if self.underline {
            map.serialize_entry("underline", &true)?;
        }
        if self.blink {
            map.serialize_entry("blink", &true)?;
        }
        if self.inverted {
            map.serialize_entry("inverted", &true)?;
        }
        if self.fraktur {
            map.serialize_entry("fraktur", &true)?;
        }
        if !self.foreground.is_default() {
            map.serialize_entry("foreground", &self.foreground.to_string())?;
        }
        if !self.background.is_default() {
            map.serialize_entry("background", &self.background.to_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_zero_value() {
        assert_eq!(Style::default(), Style::default());
        assert!(!Style::default().bold);
        assert!(Style::default().foreground.is_default());
    }

    #[test]
    fn empty_style_serializes_to_empty_object() {
        let json = serde_json::to_string(&Style::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn bold_style_serializes_with_single_key() {
        let style = Style { bold: true, ..Style::default() };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"bold":true}"#);
    }

    #[test]
    fn foreground_serializes_by_name() {
        let style = Style { foreground: Color::color4(1), ..Style::default() };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"foreground":"red"}"#);
    }
}
