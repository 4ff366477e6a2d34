//! Color identifiers spanning the 4-bit, 8-bit, and 24-bit ANSI color spaces.
//!
//! A `Color` is a single band-packed integer rather than a tagged union:
//! `Default`, `Color4`, `RGB8`, `Gray8`, and `RGB24` occupy contiguous,
//! monotonically increasing ranges, so band membership and the 8-bit
//! indexed-color routing fall out of arithmetic rather than per-band
//! branches.

use std::fmt;

const COLOR4_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-magenta",
    "bright-cyan",
    "bright-white",
];

const COUNT_COLOR4: u32 = 16;
const MIN_COLOR4: u32 = 1;
const MIN_RGB8: u32 = MIN_COLOR4 + COUNT_COLOR4; // 17
const COUNT_RGB8: u32 = 216;
const MIN_GRAY8: u32 = MIN_RGB8 + COUNT_RGB8; // 233
const COUNT_GRAY8: u32 = 24;
const MIN_RGB24: u32 = MIN_GRAY8 + COUNT_GRAY8; // 257

/// An opaque color identifier. Compares and hashes by its packed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

enum Band {
    Default,
    Color4(u32),
    Rgb8(u32),
    Gray8(u32),
    Rgb24(u32),
}

impl Color {
    /// The terminal's inherited default color.
    pub const DEFAULT: Color = Color(0);

    /// One of the 16 standard colors (0..16: 8 base + 8 bright).
    pub fn color4(index: u8) -> Color {
        Color(MIN_COLOR4 + (index as u32 % COUNT_COLOR4))
    }

    /// A cell in the 6x6x6 color cube; components are clamped to `0..=5`.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
        let (r, g, b) = (clamp6(r) as u32, clamp6(g) as u32, clamp6(b) as u32);
        Color(MIN_RGB8 + (r * 36 + g * 6 + b))
    }

    /// A step of the 24-entry grayscale ramp; clamped to `0..=23`.
    pub fn gray8(intensity: u8) -> Color {
        let intensity = (intensity as u32).min(COUNT_GRAY8 - 1);
        Color(MIN_GRAY8 + intensity)
    }

    /// A packed 24-bit truecolor value.
    pub fn rgb24(r: u8, g: u8, b: u8) -> Color {
        Color(MIN_RGB24 + ((r as u32) << 16 | (g as u32) << 8 | b as u32))
    }

    /// Maps an 8-bit indexed-color code (the `n` in `38;5;n`) onto the right
    /// band: `0..16` is `Color4`, `16..232` is the `RGB8` cube, `232..256`
    /// is the `Gray8` ramp. Because the bands are laid out contiguously in
    /// that order, a single offset from `MIN_COLOR4` lands in the correct
    /// band without branching on the sub-range here.
    pub fn indexed(index: u8) -> Color {
        Color(MIN_COLOR4 + index as u32)
    }

    pub fn is_default(self) -> bool {
        self.0 == 0
    }

    fn band(self) -> Band {
        match self.0 {
            0 => Band::Default,
            n if n < MIN_RGB8 => Band::Color4(n - MIN_COLOR4),
            n if n < MIN_GRAY8 => Band::Rgb8(n - MIN_RGB8),
            n if n < MIN_RGB24 => Band::Gray8(n - MIN_GRAY8),
            n => Band::Rgb24(n - MIN_RGB24),
        }
    }

    /// Expands to 16-bit-per-channel RGBA: `Color4` goes through `palette`,
    /// `RGB8`/`Gray8` use analytic formulas, `RGB24` unpacks directly.
    /// `Default` has no intrinsic color and yields `None`.
    pub fn rgba(self, palette: &Palette) -> Option<(u16, u16, u16, u16)> {
        match self.band() {
            Band::Default => None,
            Band::Color4(i) => {
                let (r, g, b) = palette.0[i as usize];
                Some((expand8(r), expand8(g), expand8(b), 0xffff))
            }
            Band::Rgb8(index) => {
                let (r, g, b) = rgb8_components(index);
                Some((cube_channel(r), cube_channel(g), cube_channel(b), 0xffff))
            }
            Band::Gray8(index) => {
                let v = expand8(gray_channel(index));
                Some((v, v, v, 0xffff))
            }
            Band::Rgb24(packed) => {
                let (r, g, b) = rgb24_components(packed);
                Some((expand8(r), expand8(g), expand8(b), 0xffff))
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::DEFAULT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.band() {
            Band::Default => Ok(()),
            Band::Color4(i) => write!(f, "{}", COLOR4_NAMES[i as usize]),
            Band::Rgb8(index) => {
                let (r, g, b) = rgb8_components(index);
                write!(f, "#{:02X}{:02X}{:02X}", cube_to_byte(r), cube_to_byte(g), cube_to_byte(b))
            }
            Band::Gray8(index) => {
                let v = gray_channel(index);
                write!(f, "#{v:02X}{v:02X}{v:02X}")
            }
            Band::Rgb24(packed) => {
                let (r, g, b) = rgb24_components(packed);
                write!(f, "#{r:02X}{g:02X}{b:02X}")
            }
        }
    }
}

/// `r = (index/36) % 6`, `g = (index/6) % 6`, `b = index % 6`. The source
/// this crate is modeled on computed `g` with the same formula as `r`
/// instead of dividing by 6; this is the corrected formula.
fn rgb8_components(index: u32) -> (u32, u32, u32) {
    let r = (index / 36) % 6;
    let g = (index / 6) % 6;
    let b = index % 6;
    (r, g, b)
}

fn rgb24_components(packed: u32) -> (u8, u8, u8) {
    (((packed >> 16) & 0xff) as u8, ((packed >> 8) & 0xff) as u8, (packed & 0xff) as u8)
}

fn clamp6(n: u8) -> u8 {
    if n >= 6 { 5 } else { n }
}

fn cube_to_byte(component: u32) -> u8 {
    (component * 0xff / 5) as u8
}

fn cube_channel(component: u32) -> u16 {
    expand8(cube_to_byte(component))
}

/// The original's ramp isn't `0x00..0xFF`: it runs `0x08..0xEE`, matching
/// `examples/original_source/color.go`'s `low`/`high` constants.
const GRAY_LOW: u32 = 0x08;
const GRAY_HIGH: u32 = 0xee;

fn gray_channel(index: u32) -> u8 {
    (GRAY_LOW + index * (GRAY_HIGH - GRAY_LOW) / (COUNT_GRAY8 - 1)) as u8
}

fn expand8(byte: u8) -> u16 {
    byte as u16 * 0x101
}

/// A 16-entry RGB table backing `Color4` -> RGBA conversion. A value, not a
/// singleton, so callers may inject alternates.
#[derive(Debug, Clone, Copy)]
pub struct Palette([(u8, u8, u8); 16]);

impl Palette {
    pub const fn new(entries: [(u8, u8, u8); 16]) -> Self {
        Palette(entries)
    }
}

/// The standard xterm 16-color palette.
pub const XTERM_PALETTE: Palette = Palette::new([
    (0x00, 0x00, 0x00), // black
    (0xcd, 0x00, 0x00), // red
    (0x00, 0xcd, 0x00), // green
    (0xcd, 0xcd, 0x00), // yellow
    (0x00, 0x00, 0xee), // blue
    (0xcd, 0x00, 0xcd), // magenta
    (0x00, 0xcd, 0xcd), // cyan
    (0x5e, 0x5e, 0x5e), // white
    (0x7f, 0x7f, 0x7f), // bright-black
    (0xff, 0x00, 0x00), // bright-red
    (0x00, 0xff, 0x00), // bright-green
    (0xff, 0xff, 0x00), // bright-yellow
    (0x5c, 0x5c, 0xff), // bright-blue
    (0xff, 0x00, 0xff), // bright-magenta
    (0x00, 0xff, 0xff), // bright-cyan
    (0xff, 0xff, 0xff), // bright-white
]);

impl Default for Palette {
    fn default() -> Self {
        XTERM_PALETTE
    }
}
