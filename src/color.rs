//! Pixel colors, panel color variants and their palettes

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::error::Error;

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::{BinaryColor, PixelColor};

/// Buffer index of a white pixel
pub const WHITE: u8 = 0;
/// Buffer index of a black pixel
pub const BLACK: u8 = 1;
/// Buffer index of a red pixel on red panels
pub const RED: u8 = 2;
/// Buffer index of a yellow pixel on yellow panels
pub const YELLOW: u8 = 2;

/// The three colors an Inky panel can show
///
/// The chromatic color is red or yellow, depending on the [PanelColor] of the panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum TriColor {
    /// White, index 0
    #[default]
    White,
    /// Black, index 1
    Black,
    /// Red or yellow, index 2
    Chromatic,
}

impl TriColor {
    /// Get the buffer index of the color
    pub fn index(&self) -> u8 {
        match self {
            TriColor::White => WHITE,
            TriColor::Black => BLACK,
            TriColor::Chromatic => RED,
        }
    }
}

#[cfg(feature = "graphics")]
impl PixelColor for TriColor {
    type Raw = ();
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for TriColor {
    fn from(b: BinaryColor) -> TriColor {
        match b {
            BinaryColor::On => TriColor::Black,
            BinaryColor::Off => TriColor::White,
        }
    }
}

/// The ink fitted to a panel, selects the palette
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum PanelColor {
    /// Black and white only
    #[default]
    Black,
    /// Black, white and red
    Red,
    /// Black, white and yellow
    Yellow,
}

impl PanelColor {
    /// Name as accepted by [FromStr]
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelColor::Black => "black",
            PanelColor::Red => "red",
            PanelColor::Yellow => "yellow",
        }
    }

    /// Palette used to render a buffer for this panel
    pub fn palette(&self) -> Palette {
        Palette::for_color(*self)
    }
}

impl FromStr for PanelColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(PanelColor::Black),
            "red" => Ok(PanelColor::Red),
            "yellow" => Ok(PanelColor::Yellow),
            other => Err(Error::UnsupportedColor(other.into())),
        }
    }
}

impl Display for PanelColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

const BW_PALETTE: [[u8; 3]; 2] = [
    [255, 255, 255], // white
    [0, 0, 0],       // black
];

const RED_PALETTE: [[u8; 3]; 3] = [[255, 255, 255], [0, 0, 0], [255, 0, 0]];

// sampled from a photo of a yellow pHAT, the panel is not a pure yellow
const YELLOW_PALETTE: [[u8; 3]; 3] = [[255, 255, 255], [0, 0, 0], [223, 204, 16]];

/// Maps buffer indices to RGB values
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    entries: &'static [[u8; 3]],
}

impl Palette {
    /// Palette of the given panel color
    pub fn for_color(color: PanelColor) -> Palette {
        let entries: &'static [[u8; 3]] = match color {
            PanelColor::Black => &BW_PALETTE,
            PanelColor::Red => &RED_PALETTE,
            PanelColor::Yellow => &YELLOW_PALETTE,
        };
        Palette { entries }
    }

    /// RGB value of a buffer index
    ///
    /// Indices past the end of the palette render black.
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        self.entries
            .get(index as usize)
            .copied()
            .unwrap_or([0, 0, 0])
    }
}
